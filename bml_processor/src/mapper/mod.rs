//! # 音素 → 口型映射
//!
//! 把 FaceFX 的音素标签映射到 SmartBody 使用的口型（viseme）。

mod tables;

use std::collections::HashMap;

use once_cell::sync::Lazy;
use viseme_scheduler_core::{AnimationTimingSet, ConvertError, VisemeMapping};

use self::tables::{SBM_TABLE, SBM2_TABLE};

static SBM_MAP: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| SBM_TABLE.iter().copied().collect());

static SBM2_MAP: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| SBM2_TABLE.iter().copied().collect());

/// 返回指定映射表的全部条目，顺序与来源一致。
#[must_use]
pub fn mapping_entries(mapping: VisemeMapping) -> &'static [(&'static str, &'static str)] {
    match mapping {
        VisemeMapping::Sbm => SBM_TABLE,
        VisemeMapping::Sbm2 => SBM2_TABLE,
    }
}

fn mapping_index(mapping: VisemeMapping) -> &'static HashMap<&'static str, &'static str> {
    match mapping {
        VisemeMapping::Sbm => &SBM_MAP,
        VisemeMapping::Sbm2 => &SBM2_MAP,
    }
}

/// 查找音素对应的口型。
///
/// 区分大小写。音素不在表中时返回 `ConvertError::UnknownPhoneme`，没有默认口型。
pub fn map_phoneme(phoneme: &str, mapping: VisemeMapping) -> Result<&'static str, ConvertError> {
    mapping_index(mapping)
        .get(phoneme)
        .copied()
        .ok_or_else(|| ConvertError::UnknownPhoneme {
            phoneme: phoneme.to_string(),
            mapping,
        })
}

/// 为动画中的每个音素区间分配口型。
///
/// 每个区间只能分配一次；任何一个音素查找失败都会中止整个动画。
pub fn assign_visemes(
    animation: &mut AnimationTimingSet,
    mapping: VisemeMapping,
) -> Result<(), ConvertError> {
    for interval in &mut animation.phonemes {
        if interval.viseme.is_some() {
            return Err(ConvertError::Internal(format!(
                "动画 '{}' 中的音素 '{}' 已经分配过口型",
                animation.name, interval.phoneme
            )));
        }
        interval.viseme = Some(map_phoneme(&interval.phoneme, mapping)?.to_string());
    }
    Ok(())
}
