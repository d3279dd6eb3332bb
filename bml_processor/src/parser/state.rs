//! # 解析器的状态机和数据结构

use std::collections::HashMap;

use tracing::trace;
use viseme_scheduler_core::{AnimationTimingSet, CurveKeyframe};

/// 主解析器状态。
#[derive(Debug, Default)]
pub(super) struct FacefxParserState {
    /// 是否把 Analysis Actor 曲线名重映射为动作单元。
    pub(super) remap_analysis_actors: bool,
    /// 当前正在读取的 `<animation>`。为 `None` 时处于动画之外。
    pub(super) current_animation: Option<AnimationParseState>,
}

/// `<animation>` 内部当前所在的区域。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(super) enum AnimationSection {
    #[default]
    None,
    Phonemes,
    Words,
    Curves,
}

/// 在 `<word>` 或 `<curve>` 开始标签处读到、等待文本内容的元素。
#[derive(Debug, Clone)]
pub(super) enum PendingElement {
    Word {
        start: f64,
        end: f64,
    },
    Curve {
        name: String,
        num_keys: i32,
        owner: String,
    },
}

/// 单个 `<animation>` 的解析状态。
#[derive(Debug)]
pub(super) struct AnimationParseState {
    /// 正在构建的时间数据。
    pub(super) timing: AnimationTimingSet,
    pub(super) section: AnimationSection,
    /// 嵌套在当前动画内部的同名 `<animation>` 元素层数，用于找到正确的结束标签。
    pub(super) nested_animation_depth: u32,
    pub(super) pending_element: Option<PendingElement>,
    /// `<word>` / `<curve>` 的文本缓冲区。
    pub(super) text_buffer: String,
    pub(super) timeline: KeyframeTimeline,
}

impl AnimationParseState {
    pub(super) fn new(timing: AnimationTimingSet) -> Self {
        Self {
            timing,
            section: AnimationSection::None,
            nested_animation_depth: 0,
            pending_element: None,
            text_buffer: String::new(),
            timeline: KeyframeTimeline::default(),
        }
    }

    /// 结束当前动画：补全结束时间、按时间排序关键帧。
    pub(super) fn finish(self) -> AnimationTimingSet {
        let mut timing = self.timing;
        timing.keyframes = self.timeline.finish();

        for keyframe in &timing.keyframes {
            trace!(
                "{} - {} {:?} {}",
                keyframe.name, keyframe.start_time, keyframe.end_time, keyframe.value
            );
        }

        timing
    }
}

/// 按声明顺序累积关键帧，并把同一通道上相邻的关键帧串成时间线。
///
/// 每个通道最多只有一个结束时间未定的关键帧（最近加入的那个），
/// 所以用 `通道名 -> 下标` 的映射代替向后线性查找。
#[derive(Debug, Default)]
pub(super) struct KeyframeTimeline {
    keyframes: Vec<CurveKeyframe>,
    open_by_channel: HashMap<String, usize>,
}

impl KeyframeTimeline {
    /// 加入一个关键帧。同通道上一个未结束的关键帧以它的开始时间作为结束时间。
    pub(super) fn push(&mut self, keyframe: CurveKeyframe) {
        let index = self.keyframes.len();
        if let Some(open_index) = self
            .open_by_channel
            .insert(keyframe.name.clone(), index)
            && let Some(open) = self.keyframes.get_mut(open_index)
        {
            open.end_time = Some(keyframe.start_time);
        }
        self.keyframes.push(keyframe);
    }

    /// 仍未结束的关键帧取零长度（结束时间等于开始时间），然后按开始时间升序排序。
    pub(super) fn finish(self) -> Vec<CurveKeyframe> {
        let mut keyframes = self.keyframes;
        for keyframe in &mut keyframes {
            if keyframe.end_time.is_none() {
                keyframe.end_time = Some(keyframe.start_time);
            }
        }
        keyframes.sort_by(|a, b| a.start_time.total_cmp(&b.start_time));
        keyframes
    }
}
