//! # BML 生成器 - Curves 处理模块

use quick_xml::{Writer, escape::partial_escape, events::BytesText};
use viseme_scheduler_core::{ConvertError, CurveChannelRaw};

/// 写入 `<curves>` 元素。曲线按解析顺序输出，文本内容不做任何修改。
pub(super) fn write_curves<W: std::io::Write>(
    writer: &mut Writer<W>,
    raw_curves: &[CurveChannelRaw],
) -> Result<(), ConvertError> {
    let curves_builder = writer.create_element("curves");
    if raw_curves.is_empty() {
        curves_builder.write_empty()?;
        return Ok(());
    }

    curves_builder.write_inner_content(|writer| {
        for curve in raw_curves {
            writer
                .create_element("curve")
                .with_attribute(("name", curve.name.as_str()))
                .with_attribute(("num_keys", curve.num_keys.to_string().as_str()))
                .with_attribute(("owner", curve.owner.as_str()))
                .write_text_content(BytesText::from_escaped(partial_escape(&curve.raw_data)))?;
        }
        Ok(())
    })?;
    Ok(())
}
