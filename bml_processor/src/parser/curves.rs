//! # FaceFX 解析器 - 曲线处理
//!
//! 处理 `<curve>` 元素：通道名规范化、Analysis Actor 重映射，
//! 以及把扁平的数值列表拆成关键帧。

use tracing::warn;
use viseme_scheduler_core::{ConvertError, CurveChannelRaw, CurveKeyframe};

use super::{constants::VALUES_PER_KEYFRAME, state::AnimationParseState, utils::parse_number};

/// 把双字母的口型姿势名还原为单字母通道名。
///
/// FaceFX 的 Maya 导出器不允许单字符的姿势名，所以美术只能用双字母命名。
pub(crate) fn canonicalize_curve_name(name: &str) -> &str {
    match name {
        "DD" => "D",
        "FF" => "F",
        "HH" => "H",
        "JJ" => "j",
        "LL" => "L",
        "RR" => "R",
        "WW" => "W",
        "ZZ" => "Z",
        other => other,
    }
}

/// 把默认 Analysis Actor 产生的曲线名映射为动作单元。
///
/// 眼睛和头部的通道在 SmartBody 中同名，保持不变；其它名字原样返回。
pub(crate) fn remap_analysis_actor(name: &str) -> &str {
    match name {
        "Blink" => "au_45",
        "Eyebrow Raise" => "au_1",
        "Squint" => "au_7",
        other => other,
    }
}

/// 处理一个已经读完文本内容的 `<curve>` 元素。
pub(super) fn handle_curve_end(
    animation: &mut AnimationParseState,
    name: &str,
    num_keys: i32,
    owner: String,
    remap_analysis_actors: bool,
    warnings: &mut Vec<String>,
) -> Result<(), ConvertError> {
    let raw_data = std::mem::take(&mut animation.text_buffer);
    let values: Vec<&str> = raw_data.split_whitespace().collect();

    if let Ok(declared) = usize::try_from(num_keys)
        && declared > 0
        && values.len() != declared.saturating_mul(VALUES_PER_KEYFRAME)
    {
        let message = format!(
            "读取曲线 '{name}' 时期望 num_keys({}) 个数值，但实际收到 {} 个",
            declared.saturating_mul(VALUES_PER_KEYFRAME),
            values.len()
        );
        warn!("{message}");
        warnings.push(message);
    }

    let mut channel = canonicalize_curve_name(name);
    if remap_analysis_actors {
        channel = remap_analysis_actor(channel);
    }

    // 末尾不足一组的数值直接忽略
    for group in values.chunks_exact(VALUES_PER_KEYFRAME) {
        let context = format!("curve '{channel}'");
        let time = parse_number(group[0], &context)?;
        let value = parse_number(group[1], &context)?;
        let slope_in = parse_number(group[2], &context)?;
        let slope_out = parse_number(group[3], &context)?;

        animation
            .timeline
            .push(CurveKeyframe::new(channel, time, value, slope_in, slope_out));
    }

    animation.timing.raw_curves.push(CurveChannelRaw {
        name: channel.to_string(),
        num_keys,
        owner,
        raw_data,
    });

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use viseme_scheduler_core::AnimationTimingSet;

    fn animation_with_text(text: &str) -> AnimationParseState {
        let mut animation = AnimationParseState::new(AnimationTimingSet::default());
        animation.text_buffer.push_str(text);
        animation
    }

    #[test]
    fn test_canonicalize_curve_name() {
        assert_eq!(canonicalize_curve_name("DD"), "D");
        assert_eq!(canonicalize_curve_name("FF"), "F");
        assert_eq!(canonicalize_curve_name("HH"), "H");
        assert_eq!(canonicalize_curve_name("JJ"), "j");
        assert_eq!(canonicalize_curve_name("LL"), "L");
        assert_eq!(canonicalize_curve_name("RR"), "R");
        assert_eq!(canonicalize_curve_name("WW"), "W");
        assert_eq!(canonicalize_curve_name("ZZ"), "Z");
        assert_eq!(canonicalize_curve_name("Ih"), "Ih");
        assert_eq!(canonicalize_curve_name("dd"), "dd");
    }

    #[test]
    fn test_remap_analysis_actor() {
        assert_eq!(remap_analysis_actor("Blink"), "au_45");
        assert_eq!(remap_analysis_actor("Eyebrow Raise"), "au_1");
        assert_eq!(remap_analysis_actor("Squint"), "au_7");
        assert_eq!(remap_analysis_actor("Head Yaw"), "Head Yaw");
        assert_eq!(remap_analysis_actor("Eye Pitch"), "Eye Pitch");
        assert_eq!(remap_analysis_actor("W"), "W");
    }

    #[test]
    fn test_curve_with_trailing_partial_group() {
        let mut animation = animation_with_text("1.0 0.5 0.0 0.0 2.0 0.25");
        let mut warnings = Vec::new();

        handle_curve_end(
            &mut animation,
            "W",
            0,
            "user".to_string(),
            false,
            &mut warnings,
        )
        .unwrap();

        assert!(warnings.is_empty(), "num_keys 为 0 时不做长度校验");
        let timing = animation.finish();
        assert_eq!(timing.keyframes.len(), 1);
        assert_eq!(timing.raw_curves[0].raw_data, "1.0 0.5 0.0 0.0 2.0 0.25");
    }

    #[test]
    fn test_curve_length_mismatch_is_warning() {
        let mut animation = animation_with_text("1.0 0.5 0.0 0.0 ");
        let mut warnings = Vec::new();

        handle_curve_end(
            &mut animation,
            "W",
            2,
            "user".to_string(),
            false,
            &mut warnings,
        )
        .unwrap();

        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("'W'"));
        assert!(warnings[0].contains('8'));
        assert_eq!(animation.finish().keyframes.len(), 1);
    }

    #[test]
    fn test_curve_invalid_number() {
        let mut animation = animation_with_text("1.0 abc 0.0 0.0");
        let result = handle_curve_end(
            &mut animation,
            "W",
            1,
            String::new(),
            false,
            &mut Vec::new(),
        );
        assert!(matches!(result, Err(ConvertError::InvalidNumber { .. })));
    }

    #[test]
    fn test_curve_canonicalized_before_remap() {
        let mut animation = animation_with_text("0.5 1.0 0.0 0.0");
        handle_curve_end(
            &mut animation,
            "DD",
            1,
            "user".to_string(),
            true,
            &mut Vec::new(),
        )
        .unwrap();

        let timing = animation.finish();
        assert_eq!(timing.raw_curves[0].name, "D");
        assert_eq!(timing.keyframes[0].name, "D");
    }
}
