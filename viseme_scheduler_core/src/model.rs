//! FaceFX 动画时间数据的统一模型。

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// 批量模式下输出文件的后缀。
pub const BML_OUTPUT_SUFFIX: &str = ".bml.txt";

/// 根据动画名生成默认的输出文件名，例如 `line2` → `line2.bml.txt`。
#[must_use]
pub fn default_output_file(animation_name: &str) -> PathBuf {
    PathBuf::from(format!("{animation_name}{BML_OUTPUT_SUFFIX}"))
}

/// 一个音素区间。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhonemeInterval {
    /// FaceFX 音素标签，例如 `SIL`、`AA`。
    pub phoneme: String,
    /// 开始时间（秒）。
    pub start: f64,
    /// 结束时间（秒）。
    pub end: f64,
    /// 映射后的口型，解析完成后才会被分配。
    pub viseme: Option<String>,
}

impl PhonemeInterval {
    #[must_use]
    pub fn new(phoneme: impl Into<String>, start: f64, end: f64) -> Self {
        Self {
            phoneme: phoneme.into(),
            start,
            end,
            viseme: None,
        }
    }
}

/// 一个单词区间。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordInterval {
    pub word: String,
    pub start: f64,
    pub end: f64,
}

/// 曲线上的一个关键帧。
///
/// FaceFX 每个关键帧只给出开始时间，结束时间取同名通道下一个关键帧的开始时间。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveKeyframe {
    /// 通道名（已规范化）。
    pub name: String,
    pub start_time: f64,
    pub value: f64,
    pub slope_in: f64,
    pub slope_out: f64,
    /// 结束时间。`None` 表示尚未确定。
    pub end_time: Option<f64>,
}

impl CurveKeyframe {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        start_time: f64,
        value: f64,
        slope_in: f64,
        slope_out: f64,
    ) -> Self {
        Self {
            name: name.into(),
            start_time,
            value,
            slope_in,
            slope_out,
            end_time: None,
        }
    }

    /// 结束时间是否已经确定。
    #[must_use]
    pub const fn is_end_time_set(&self) -> bool {
        self.end_time.is_some()
    }
}

/// `<curve>` 元素的原始记录，原样写入输出的 `<curves>`。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurveChannelRaw {
    /// 规范化（以及可能重映射）之后的通道名。
    pub name: String,
    /// `num_keys` 属性声明的关键帧数。
    pub num_keys: i32,
    pub owner: String,
    /// 元素内的原始文本，不做任何修改。
    pub raw_data: String,
}

/// 一个 `<animation>` 的全部时间数据。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnimationTimingSet {
    /// 动画名，同时作为音频资源的引用。
    pub name: String,
    /// 该动画的 BML 输出路径。
    pub output_file: PathBuf,
    pub phonemes: Vec<PhonemeInterval>,
    pub words: Vec<WordInterval>,
    /// 按开始时间排序后的关键帧。
    pub keyframes: Vec<CurveKeyframe>,
    /// 按解析顺序保存的原始曲线。
    pub raw_curves: Vec<CurveChannelRaw>,
}

impl AnimationTimingSet {
    #[must_use]
    pub fn new(name: impl Into<String>, output_file: PathBuf) -> Self {
        Self {
            name: name.into(),
            output_file,
            ..Default::default()
        }
    }
}

/// 一次解析的结果。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParsedFacefxData {
    /// 所有被处理的动画，按文档顺序排列。
    pub animations: Vec<AnimationTimingSet>,
    /// 解析过程中产生的非致命警告。
    pub warnings: Vec<String>,
}
