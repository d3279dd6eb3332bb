//! # FaceFX 解析器 - 常量定义
//!
//! 该模块包含了在解析 FaceFX XML 导出文件时用到的所有标签和属性的常量定义。

pub(super) const TAG_ANIMATION: &[u8] = b"animation";
pub(super) const TAG_PHONEMES: &[u8] = b"phonemes";
pub(super) const TAG_PHONEME: &[u8] = b"phoneme";
pub(super) const TAG_WORDS: &[u8] = b"words";
pub(super) const TAG_WORD: &[u8] = b"word";
pub(super) const TAG_CURVES: &[u8] = b"curves";
pub(super) const TAG_CURVE: &[u8] = b"curve";

pub(super) const ATTR_NAME: &[u8] = b"name";
pub(super) const ATTR_PHONEME: &[u8] = b"phoneme";
pub(super) const ATTR_START: &[u8] = b"start";
pub(super) const ATTR_END: &[u8] = b"end";
pub(super) const ATTR_NUM_KEYS: &[u8] = b"num_keys";
pub(super) const ATTR_OWNER: &[u8] = b"owner";

/// 每个关键帧在曲线文本中占用的数值个数：时间、值、入切线、出切线。
pub(super) const VALUES_PER_KEYFRAME: usize = 4;
