use std::path::PathBuf;

use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// 音素到口型的映射表。
///
/// 只影响 BML 中的 `<lips>` 部分，`<curves>` 部分原样输出。
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    EnumString,
    Display,
    EnumIter,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum VisemeMapping {
    /// 来自 facefx-phoneme-to-viseme-map.xls 的 SBM 列，归类更粗。
    Sbm,
    /// 来自 example_sbm2_mapping.facefx 导出的映射，保留更细的元音区分。
    #[default]
    Sbm2,
}

/// FaceFX XML 解析选项
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FacefxParsingOptions {
    /// 要处理的动画名。为空时处理文件中的全部动画（批量模式），
    /// 否则只处理第一个同名动画并立即停止。
    #[serde(default)]
    pub animation_filter: String,

    /// 是否把 Analysis Actor 的曲线名重映射为动作单元（例如 `Blink` → `au_45`）。
    #[serde(default)]
    pub remap_analysis_actors: bool,

    /// 单动画模式下显式指定的输出文件。批量模式下忽略。
    #[serde(default)]
    pub output_file: Option<PathBuf>,
}

impl FacefxParsingOptions {
    /// 是否为批量模式。
    #[must_use]
    pub fn is_batch_mode(&self) -> bool {
        self.animation_filter.is_empty()
    }
}

/// BML 生成选项
#[derive(Debug, Clone, Serialize, Deserialize, Builder)]
#[builder(setter(into), default)]
pub struct BmlGenerationOptions {
    /// 每级缩进的空格数。
    pub indent_size: usize,
    /// 是否在文档开头写入 `<?xml ...?>` 声明。
    pub xml_declaration: bool,
}

impl Default for BmlGenerationOptions {
    fn default() -> Self {
        Self {
            indent_size: 4,
            xml_declaration: true,
        }
    }
}
