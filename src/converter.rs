//! 把一个 FaceFX XML 文件转换为一个或多个 BML 文件。

use std::fs;
use std::path::{Path, PathBuf};

use bml_processor::{assign_visemes, generate_bml, parse_facefx};
use tracing::{info, warn};
use viseme_scheduler_core::{BmlGenerationOptions, FacefxParsingOptions, VisemeMapping};

use crate::error::{AppError, AppResult};

/// 一次转换所需的全部选项。
#[derive(Debug, Clone, Default)]
pub struct ConversionOptions {
    pub mapping: VisemeMapping,
    pub parsing: FacefxParsingOptions,
    pub generation: BmlGenerationOptions,
}

/// 转换结果。
#[derive(Debug, Default)]
pub struct ConversionReport {
    /// 已写入的输出文件，顺序与动画在输入中的顺序一致。
    pub written_files: Vec<PathBuf>,
    /// 解析阶段的非致命警告。
    pub warnings: Vec<String>,
}

/// 读取 `input`，逐个动画完成映射、生成和写入。
///
/// 相对的输出路径以 `base_dir` 为基准。任何一个动画出错都会立即中止，
/// 之前已经写入的文件保持不变。
pub fn convert_file(
    input: &Path,
    base_dir: &Path,
    options: &ConversionOptions,
) -> AppResult<ConversionReport> {
    let content = fs::read_to_string(input).map_err(|source| AppError::ReadInput {
        path: input.to_path_buf(),
        source,
    })?;

    let parsed = parse_facefx(&content, &options.parsing)?;
    if parsed.animations.is_empty() {
        warn!("{input:?} 中没有需要转换的动画");
    }

    let mut report = ConversionReport {
        warnings: parsed.warnings,
        ..Default::default()
    };

    for mut animation in parsed.animations {
        assign_visemes(&mut animation, options.mapping)?;
        let bml = generate_bml(&animation, &options.generation)?;

        let output_path = base_dir.join(&animation.output_file);
        fs::write(&output_path, bml).map_err(|source| AppError::WriteOutput {
            path: output_path.clone(),
            source,
        })?;

        info!("动画 '{}' 已写入 {output_path:?}", animation.name);
        report.written_files.push(output_path);
    }

    Ok(report)
}
