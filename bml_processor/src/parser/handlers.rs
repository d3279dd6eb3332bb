//! # FaceFX 解析器 - 事件处理器与分发器
//!
//! 该模块负责在 `<animation>` 之外识别动画的开始，
//! 以及在动画内部把事件分发到音素、单词和曲线的处理逻辑。

use quick_xml::{
    Reader,
    events::{BytesStart, Event},
};
use tracing::{debug, warn};
use viseme_scheduler_core::{
    AnimationTimingSet, ConvertError, FacefxParsingOptions, PhonemeInterval, WordInterval,
    default_output_file,
};

use super::{
    constants::{
        ATTR_END, ATTR_NAME, ATTR_NUM_KEYS, ATTR_OWNER, ATTR_PHONEME, ATTR_START, TAG_ANIMATION,
        TAG_CURVE, TAG_CURVES, TAG_PHONEME, TAG_PHONEMES, TAG_WORD, TAG_WORDS,
    },
    curves::handle_curve_end,
    state::{AnimationParseState, AnimationSection, FacefxParserState, PendingElement},
    utils::{
        get_string_attribute, require_int_attribute, require_number_attribute,
        require_string_attribute, resolve_entity,
    },
};

/// 处理全局事件（在 `<animation>` 之外的事件）。
///
/// 遇到名字符合过滤条件的 `<animation>` 时进入动画状态。
pub(super) fn handle_global_event(
    event: &Event<'_>,
    state: &mut FacefxParserState,
    reader: &Reader<&[u8]>,
    options: &FacefxParsingOptions,
) -> Result<(), ConvertError> {
    if let Event::Start(e) = event
        && e.local_name().as_ref() == TAG_ANIMATION
    {
        let name = require_string_attribute(e, reader, ATTR_NAME)?;

        let output_file = if options.is_batch_mode() {
            default_output_file(&name)
        } else if options.animation_filter == name {
            options
                .output_file
                .clone()
                .unwrap_or_else(|| default_output_file(&name))
        } else {
            return Ok(());
        };

        debug!("开始读取动画 '{name}'，输出到 {}", output_file.display());
        state.current_animation = Some(AnimationParseState::new(AnimationTimingSet::new(
            name,
            output_file,
        )));
    }
    Ok(())
}

/// 处理 `<animation>` 内部的事件。
///
/// # 返回
/// 读到该动画的结束标签时返回 `Some(AnimationTimingSet)`，否则返回 `None`。
pub(super) fn handle_animation_event(
    event: &Event<'_>,
    state: &mut FacefxParserState,
    reader: &Reader<&[u8]>,
    warnings: &mut Vec<String>,
) -> Result<Option<AnimationTimingSet>, ConvertError> {
    let remap_analysis_actors = state.remap_analysis_actors;
    let Some(animation) = state.current_animation.as_mut() else {
        return Ok(None);
    };

    match event {
        Event::Start(e) => process_start(e, animation, reader)?,
        Event::Text(e) => {
            if animation.pending_element.is_some() {
                animation.text_buffer.push_str(&e.xml_content()?);
            }
        }
        Event::CData(e) => {
            if animation.pending_element.is_some() {
                animation.text_buffer.push_str(&e.decode()?);
            }
        }
        Event::GeneralRef(e) => {
            if animation.pending_element.is_some() {
                let entity_name = String::from_utf8_lossy(e.as_ref());
                if let Some(decoded_char) = resolve_entity(&entity_name) {
                    animation.text_buffer.push(decoded_char);
                } else {
                    let message = format!("忽略了未知的XML实体 '&{entity_name};'");
                    warn!("{message}");
                    warnings.push(message);
                }
            }
        }
        Event::End(e) => match e.local_name().as_ref() {
            TAG_ANIMATION if animation.nested_animation_depth > 0 => {
                animation.nested_animation_depth -= 1;
            }
            TAG_ANIMATION => {
                return Ok(state.current_animation.take().map(AnimationParseState::finish));
            }
            TAG_PHONEMES | TAG_WORDS | TAG_CURVES => animation.section = AnimationSection::None,
            TAG_WORD | TAG_CURVE => {
                process_pending_end(animation, remap_analysis_actors, warnings)?;
            }
            _ => {}
        },
        _ => {}
    }

    Ok(None)
}

/// 处理动画内部的开始标签。
fn process_start(
    e: &BytesStart,
    animation: &mut AnimationParseState,
    reader: &Reader<&[u8]>,
) -> Result<(), ConvertError> {
    match (e.local_name().as_ref(), animation.section) {
        (TAG_ANIMATION, _) => animation.nested_animation_depth += 1,
        (TAG_PHONEMES, _) => animation.section = AnimationSection::Phonemes,
        (TAG_WORDS, _) => animation.section = AnimationSection::Words,
        (TAG_CURVES, _) => animation.section = AnimationSection::Curves,

        // <phoneme phoneme="SIL" start="0.000000" end="1.200000" />
        (TAG_PHONEME, AnimationSection::Phonemes) => {
            let phoneme = require_string_attribute(e, reader, ATTR_PHONEME)?;
            let start = require_number_attribute(e, reader, ATTR_START)?;
            let end = require_number_attribute(e, reader, ATTR_END)?;
            animation
                .timing
                .phonemes
                .push(PhonemeInterval::new(phoneme, start, end));
        }

        // <word start="1.200000" end="1.380000">If</word>
        (TAG_WORD, AnimationSection::Words) => {
            let start = require_number_attribute(e, reader, ATTR_START)?;
            let end = require_number_attribute(e, reader, ATTR_END)?;
            animation.text_buffer.clear();
            animation.pending_element = Some(PendingElement::Word { start, end });
        }

        // <curve name="Head Yaw" num_keys="3" owner="analysis">2.823998 0.000000 0.000000 0.000000 ...</curve>
        (TAG_CURVE, AnimationSection::Curves) => {
            let name = require_string_attribute(e, reader, ATTR_NAME)?;
            let num_keys = require_int_attribute(e, reader, ATTR_NUM_KEYS)?;
            let owner = get_string_attribute(e, reader, ATTR_OWNER)?.unwrap_or_default();
            animation.text_buffer.clear();
            animation.pending_element = Some(PendingElement::Curve {
                name,
                num_keys,
                owner,
            });
        }
        _ => {}
    }
    Ok(())
}

/// 在 `</word>` 或 `</curve>` 处收尾，把缓冲的文本交给对应的处理逻辑。
fn process_pending_end(
    animation: &mut AnimationParseState,
    remap_analysis_actors: bool,
    warnings: &mut Vec<String>,
) -> Result<(), ConvertError> {
    match animation.pending_element.take() {
        Some(PendingElement::Word { start, end }) => {
            let word = std::mem::take(&mut animation.text_buffer);
            animation
                .timing
                .words
                .push(WordInterval { word, start, end });
        }
        Some(PendingElement::Curve {
            name,
            num_keys,
            owner,
        }) => handle_curve_end(
            animation,
            &name,
            num_keys,
            owner,
            remap_analysis_actors,
            warnings,
        )?,
        None => {}
    }
    Ok(())
}
