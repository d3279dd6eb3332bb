//! # FaceFX XML 导出文件解析器
//!
//! 读取 FaceFX Studio 导出的 XML，提取每个 `<animation>` 中的音素、单词和曲线数据。

mod constants;
pub(crate) mod curves;
mod handlers;
mod state;
mod utils;

use quick_xml::{Reader, events::Event};
use tracing::{error, warn};
use viseme_scheduler_core::{ConvertError, FacefxParsingOptions, ParsedFacefxData};

use self::state::FacefxParserState;

/// 解析 FaceFX XML 导出文件。
///
/// # 参数
///
/// * `content` - XML 文件内容字符串。
/// * `options` - 解析选项，包含动画名过滤、Analysis Actor 重映射和显式输出路径。
///
/// # 返回
///
/// * `Ok(ParsedFacefxData)` - 所有被处理的动画（关键帧已补全结束时间并按时间排序）以及非致命警告。
/// * `Err(ConvertError)` - 解析失败时，返回具体的错误信息。
///
/// # Errors
///
/// * `ConvertError::Xml` - 当输入内容不是有效的 XML 时
/// * `ConvertError::InvalidNumber` - 当时间、`num_keys` 或曲线数值无法解析时
/// * `ConvertError::MissingAttribute` - 当缺少必需的属性时
pub fn parse_facefx(
    content: &str,
    options: &FacefxParsingOptions,
) -> Result<ParsedFacefxData, ConvertError> {
    let mut reader = Reader::from_str(content);
    reader.config_mut().trim_text(false);
    reader.config_mut().expand_empty_elements = true;

    let mut state = FacefxParserState {
        remap_analysis_actors: options.remap_analysis_actors,
        ..Default::default()
    };
    let mut data = ParsedFacefxData::default();
    let mut buf = Vec::new();

    loop {
        let event = match reader.read_event_into(&mut buf) {
            Ok(event) => event,
            Err(e) => {
                error!(
                    "FaceFX XML 解析错误，位置 {}: {}。无法继续解析",
                    reader.error_position(),
                    e
                );
                return Err(ConvertError::Xml(e));
            }
        };

        if event == Event::Eof {
            break;
        }

        if state.current_animation.is_some() {
            let finished =
                handlers::handle_animation_event(&event, &mut state, &reader, &mut data.warnings)?;
            if let Some(animation) = finished {
                data.animations.push(animation);
                if !options.is_batch_mode() {
                    // 单动画模式：找到第一个匹配就停止
                    break;
                }
            }
        } else {
            handlers::handle_global_event(&event, &mut state, &reader, options)?;
        }

        buf.clear();
    }

    if let Some(animation) = state.current_animation.take() {
        let message = format!("动画 '{}' 没有结束标签，已按文件结尾截断", animation.timing.name);
        warn!("{message}");
        data.warnings.push(message);
        data.animations.push(animation.finish());
    }

    if !options.is_batch_mode() && data.animations.is_empty() {
        warn!("未找到名为 '{}' 的动画", options.animation_filter);
    }

    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    const TWO_ANIMATIONS: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<actor name="ChrMale001">
  <animation_groups>
    <animation_group name="Default">
      <animation name="line1" language="USEnglish" analysis_actor="Default">
        <phonemes>
          <phoneme phoneme="SIL" start="0.000000" end="1.200000" />
          <phoneme phoneme="IH" start="1.200000" end="1.280000" />
        </phonemes>
        <words>
          <word start="1.200000" end="1.380000">If</word>
        </words>
        <curves>
          <curve name="WW" num_keys="2" owner="analysis">2.000000 0.500000 0.000000 0.000000 </curve>
          <curve name="Blink" num_keys="1" owner="analysis">1.000000 1.000000 0.000000 0.000000 </curve>
          <curve name="WW" num_keys="1" owner="analysis">5.000000 0.000000 0.000000 0.000000 </curve>
        </curves>
      </animation>
      <animation name="line2">
        <phonemes>
          <phoneme phoneme="P" start="0.0" end="0.1" />
        </phonemes>
        <words />
        <curves />
      </animation>
    </animation_group>
  </animation_groups>
</actor>
"#;

    #[test]
    fn test_batch_mode_reads_every_animation() {
        let data = parse_facefx(TWO_ANIMATIONS, &FacefxParsingOptions::default()).unwrap();

        assert_eq!(data.animations.len(), 2);
        assert_eq!(data.animations[0].name, "line1");
        assert_eq!(
            data.animations[0].output_file,
            PathBuf::from("line1.bml.txt")
        );
        assert_eq!(data.animations[1].name, "line2");
        assert_eq!(data.animations[1].phonemes.len(), 1);
        assert!(data.animations[1].words.is_empty());
        assert!(data.animations[1].raw_curves.is_empty());
    }

    #[test]
    fn test_single_mode_stops_after_first_match() {
        let options = FacefxParsingOptions {
            animation_filter: "line2".to_string(),
            output_file: Some(PathBuf::from("out/custom.bml.txt")),
            ..Default::default()
        };
        let data = parse_facefx(TWO_ANIMATIONS, &options).unwrap();

        assert_eq!(data.animations.len(), 1);
        assert_eq!(data.animations[0].name, "line2");
        assert_eq!(
            data.animations[0].output_file,
            PathBuf::from("out/custom.bml.txt")
        );
    }

    #[test]
    fn test_single_mode_without_match() {
        let options = FacefxParsingOptions {
            animation_filter: "missing".to_string(),
            ..Default::default()
        };
        let data = parse_facefx(TWO_ANIMATIONS, &options).unwrap();
        assert!(data.animations.is_empty());
    }

    #[test]
    fn test_end_time_backfill_across_curve_elements() {
        let data = parse_facefx(TWO_ANIMATIONS, &FacefxParsingOptions::default()).unwrap();
        let line1 = &data.animations[0];

        let w_keys: Vec<_> = line1.keyframes.iter().filter(|k| k.name == "W").collect();
        assert_eq!(w_keys.len(), 2);
        assert_eq!(w_keys[0].start_time, 2.0);
        assert_eq!(w_keys[0].end_time, Some(5.0));
        assert!(w_keys[0].is_end_time_set());
        assert_eq!(w_keys[1].end_time, Some(5.0));

        let blink = line1.keyframes.iter().find(|k| k.name == "Blink").unwrap();
        assert_eq!(blink.end_time, Some(blink.start_time));

        let starts: Vec<f64> = line1.keyframes.iter().map(|k| k.start_time).collect();
        assert_eq!(starts, vec![1.0, 2.0, 5.0]);
    }

    #[test]
    fn test_raw_curves_keep_parse_order() {
        let data = parse_facefx(TWO_ANIMATIONS, &FacefxParsingOptions::default()).unwrap();
        let names: Vec<_> = data.animations[0]
            .raw_curves
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(names, vec!["W", "Blink", "W"]);
        assert_eq!(
            data.animations[0].raw_curves[0].raw_data,
            "2.000000 0.500000 0.000000 0.000000 "
        );
        assert_eq!(data.warnings.len(), 1, "第一条 WW 曲线声明了 2 个关键帧");
    }

    #[test]
    fn test_remap_analysis_actors() {
        let options = FacefxParsingOptions {
            remap_analysis_actors: true,
            ..Default::default()
        };
        let data = parse_facefx(TWO_ANIMATIONS, &options).unwrap();
        let names: Vec<_> = data.animations[0]
            .raw_curves
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(names, vec!["W", "au_45", "W"]);
    }

    #[test]
    fn test_invalid_phoneme_time_is_fatal() {
        let xml = r#"<animation name="a"><phonemes><phoneme phoneme="SIL" start="0,5" end="1.0"/></phonemes></animation>"#;
        let result = parse_facefx(xml, &FacefxParsingOptions::default());
        assert!(matches!(result, Err(ConvertError::InvalidNumber { .. })));
    }

    #[test]
    fn test_non_finite_time_is_fatal() {
        let xml = r#"<animation name="a"><phonemes><phoneme phoneme="SIL" start="NaN" end="inf"/></phonemes></animation>"#;
        let result = parse_facefx(xml, &FacefxParsingOptions::default());
        assert!(matches!(
            result,
            Err(ConvertError::InvalidNumber { value, .. }) if value == "NaN"
        ));
    }

    #[test]
    fn test_missing_num_keys_is_fatal() {
        let xml = r#"<animation name="a"><curves><curve name="W" owner="user">1 2 3 4</curve></curves></animation>"#;
        let result = parse_facefx(xml, &FacefxParsingOptions::default());
        assert!(matches!(
            result,
            Err(ConvertError::MissingAttribute { .. })
        ));
    }

    #[test]
    fn test_malformed_xml() {
        let xml = r#"<animation name="a"><phonemes></words></animation>"#;
        let result = parse_facefx(xml, &FacefxParsingOptions::default());
        assert!(matches!(result, Err(ConvertError::Xml(_))));
    }

    #[test]
    fn test_word_text_with_entities() {
        let xml = r#"<animation name="a"><words><word start="0" end="1">rock &amp; roll</word></words></animation>"#;
        let data = parse_facefx(xml, &FacefxParsingOptions::default()).unwrap();
        assert_eq!(data.animations[0].words[0].word, "rock & roll");
    }

    #[test]
    fn test_elements_outside_sections_are_ignored() {
        let xml = r#"<animation name="a"><phoneme phoneme="SIL" start="0" end="1"/><words><phoneme phoneme="P" start="0" end="1"/></words></animation>"#;
        let data = parse_facefx(xml, &FacefxParsingOptions::default()).unwrap();
        assert!(data.animations[0].phonemes.is_empty());
    }

    #[test]
    fn test_nested_animation_element_does_not_close_outer() {
        let xml = r#"<animation name="outer"><animation name="inner"/><phonemes><phoneme phoneme="SIL" start="0" end="1"/></phonemes></animation>"#;
        let data = parse_facefx(xml, &FacefxParsingOptions::default()).unwrap();
        assert_eq!(data.animations.len(), 1);
        assert_eq!(data.animations[0].name, "outer");
        assert_eq!(data.animations[0].phonemes.len(), 1);
    }
}
