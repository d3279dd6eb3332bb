//! # BML 生成器 - Lips 处理模块

use quick_xml::Writer;
use viseme_scheduler_core::{ConvertError, PhonemeInterval};

use super::utils::format_bml_time;

/// 一个已经确定口型的音素区间。
pub(super) struct ResolvedLips<'a> {
    pub(super) viseme: &'a str,
    pub(super) start: f64,
    pub(super) end: f64,
}

/// 在写入任何 XML 之前取出每个音素的口型。
///
/// 写入器闭包只能返回 `io::Error`，所以缺失口型必须在这里提前报告。
pub(super) fn resolve_lips(
    phonemes: &[PhonemeInterval],
) -> Result<Vec<ResolvedLips<'_>>, ConvertError> {
    phonemes
        .iter()
        .map(|interval| {
            let viseme = interval
                .viseme
                .as_deref()
                .ok_or_else(|| ConvertError::UnresolvedViseme(interval.phoneme.clone()))?;
            Ok(ResolvedLips {
                viseme,
                start: interval.start,
                end: interval.end,
            })
        })
        .collect()
}

/// 为每个音素区间写入一个 `<lips>` 元素，顺序与输入一致。
///
/// 口型按瞬时保持处理：`start`/`ready` 取区间开始，`relax`/`end` 取区间结束。
pub(super) fn write_lips<W: std::io::Write>(
    writer: &mut Writer<W>,
    lips: &[ResolvedLips<'_>],
) -> std::io::Result<()> {
    for entry in lips {
        let start = format_bml_time(entry.start);
        let end = format_bml_time(entry.end);

        writer
            .create_element("lips")
            .with_attribute(("viseme", entry.viseme))
            .with_attribute(("articulation", "1.0"))
            .with_attribute(("start", start.as_str()))
            .with_attribute(("ready", start.as_str()))
            .with_attribute(("relax", end.as_str()))
            .with_attribute(("end", end.as_str()))
            .write_empty()?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_lips_keeps_order() {
        let mut first = PhonemeInterval::new("SIL", 0.0, 1.2);
        first.viseme = Some("_".to_string());
        let mut second = PhonemeInterval::new("P", 1.2, 1.3);
        second.viseme = Some("BMP".to_string());
        let phonemes = [first, second];

        let lips = resolve_lips(&phonemes).unwrap();
        let visemes: Vec<_> = lips.iter().map(|l| l.viseme).collect();
        assert_eq!(visemes, vec!["_", "BMP"]);
        assert_eq!(lips[1].start, 1.2);
    }

    #[test]
    fn test_resolve_lips_reports_first_missing_viseme() {
        let mut first = PhonemeInterval::new("SIL", 0.0, 1.2);
        first.viseme = Some("_".to_string());
        let phonemes = [first, PhonemeInterval::new("AA", 1.2, 1.4)];

        match resolve_lips(&phonemes) {
            Err(ConvertError::UnresolvedViseme(phoneme)) => assert_eq!(phoneme, "AA"),
            Err(other) => panic!("应为 UnresolvedViseme 错误，实际为 {other:?}"),
            Ok(_) => panic!("应为 UnresolvedViseme 错误"),
        }
    }
}
