//! # BML 生成器 - Speech 处理模块
//!
//! 该模块负责生成 `<speech>` 元素：带同步标记的单词文本以及音频资源描述。

use quick_xml::{
    Writer,
    escape::partial_escape,
    events::{BytesText, Event},
};
use viseme_scheduler_core::{AnimationTimingSet, BmlGenerationOptions, ConvertError, WordInterval};

use super::utils::{format_bml_time, line_break_with_indent};

/// `<speech>` 的固定时间属性。
const SPEECH_TIMING_ATTRS: [(&str, &str); 5] = [
    ("start", "0.0"),
    ("ready", "0.1"),
    ("stroke", "0.1"),
    ("relax", "0.2"),
    ("end", "0.2"),
];

/// 写入 `<speech>` 元素。
pub(super) fn write_speech<W: std::io::Write>(
    writer: &mut Writer<W>,
    animation: &AnimationTimingSet,
    options: &BmlGenerationOptions,
) -> Result<(), ConvertError> {
    let mut speech_builder = writer
        .create_element("speech")
        .with_attribute(("id", "sp1"));
    for attr in SPEECH_TIMING_ATTRS {
        speech_builder = speech_builder.with_attribute(attr);
    }

    speech_builder.write_inner_content(|writer| {
        write_text(writer, &animation.words, options)?;

        writer
            .create_element("description")
            .with_attribute(("level", "1"))
            .with_attribute(("type", "audio/x-wav"))
            .write_inner_content(|writer| {
                writer
                    .create_element("file")
                    .with_attribute(("ref", animation.name.as_str()))
                    .write_empty()?;
                Ok(())
            })?;
        Ok(())
    })?;
    Ok(())
}

/// 写入 `<text>` 元素，每个单词前后各有一个 `<sync>` 标记。
///
/// `<text>` 是混合内容，缩进由这里手动写入的文本节点维持。
fn write_text<W: std::io::Write>(
    writer: &mut Writer<W>,
    words: &[WordInterval],
    options: &BmlGenerationOptions,
) -> Result<(), ConvertError> {
    let text_builder = writer.create_element("text");
    if words.is_empty() {
        text_builder.write_empty()?;
        return Ok(());
    }

    // <speech> 内部为两级缩进，<sync> 位于第三级
    let inner_break = line_break_with_indent(options.indent_size, 3);
    let closing_break = line_break_with_indent(options.indent_size, 2);

    text_builder.write_inner_content(|writer| {
        let mut sync_counter = 0usize;
        for (index, word) in words.iter().enumerate() {
            write_sync(writer, &mut sync_counter, word.start)?;
            // 引号在文本节点中无需转义，只转义 `<`、`>`、`&`
            writer.write_event(Event::Text(BytesText::from_escaped(partial_escape(
                &word.word,
            ))))?;
            writer.write_event(Event::Text(BytesText::new(&inner_break)))?;
            write_sync(writer, &mut sync_counter, word.end)?;

            let is_last = index + 1 == words.len();
            let separator = if is_last { &closing_break } else { &inner_break };
            writer.write_event(Event::Text(BytesText::new(separator)))?;
        }
        Ok(())
    })?;
    Ok(())
}

fn write_sync<W: std::io::Write>(
    writer: &mut Writer<W>,
    sync_counter: &mut usize,
    time: f64,
) -> std::io::Result<()> {
    writer
        .create_element("sync")
        .with_attribute(("id", format!("T{sync_counter}").as_str()))
        .with_attribute(("time", format_bml_time(time).as_str()))
        .write_empty()?;
    *sync_counter += 1;
    Ok(())
}
