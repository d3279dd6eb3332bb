//! # SmartBody BML 生成器
//!
//! 把一个动画的时间数据写成固定结构的 BML 文档：
//! `<speech>`（单词同步标记与音频引用）、每个音素一个 `<lips>`，以及原样输出的 `<curves>`。

mod curves;
mod lips;
mod speech;
mod utils;

use std::io::Cursor;

use quick_xml::{
    Writer,
    events::{BytesDecl, Event},
};
use tracing::debug;
use viseme_scheduler_core::{AnimationTimingSet, BmlGenerationOptions, ConvertError};

use self::utils::{apply_line_ending, recover_convert_error};

/// BML 生成的主入口函数。
///
/// # 参数
/// * `animation` - 已经分配好口型的动画时间数据。
/// * `options` - BML 生成选项，控制缩进和 XML 声明。
///
/// # 返回
///
/// * `Ok(String)` - 成功生成的 BML 字符串，使用平台默认的换行符并以换行结尾。
///
/// # Errors
///
/// * `ConvertError::UnresolvedViseme` - 存在尚未分配口型的音素时
/// * 写入 XML 或将结果转换为字符串失败时返回对应的 `ConvertError`
pub fn generate_bml(
    animation: &AnimationTimingSet,
    options: &BmlGenerationOptions,
) -> Result<String, ConvertError> {
    let mut buffer = Vec::new();
    let mut writer = Writer::new_with_indent(Cursor::new(&mut buffer), b' ', options.indent_size);

    generate_bml_inner(&mut writer, animation, options)?;

    let mut output = String::from_utf8(buffer).map_err(ConvertError::FromUtf8)?;
    output.push('\n');
    let output = apply_line_ending(output);

    debug!(
        "动画 '{}' 的 BML 生成完成：{} 个口型，{} 个单词，{} 条曲线",
        animation.name,
        animation.phonemes.len(),
        animation.words.len(),
        animation.raw_curves.len()
    );
    Ok(output)
}

/// BML 生成的核心内部逻辑。
fn generate_bml_inner<W: std::io::Write>(
    writer: &mut Writer<W>,
    animation: &AnimationTimingSet,
    options: &BmlGenerationOptions,
) -> Result<(), ConvertError> {
    let resolved_lips = lips::resolve_lips(&animation.phonemes)?;

    if options.xml_declaration {
        writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;
    }

    writer
        .create_element("bml")
        .write_inner_content(|writer| {
            speech::write_speech(writer, animation, options)?;
            lips::write_lips(writer, &resolved_lips)?;
            curves::write_curves(writer, &animation.raw_curves)?;
            Ok(())
        })
        .map_err(recover_convert_error)?;
    Ok(())
}
