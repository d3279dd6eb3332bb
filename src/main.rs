//! FaceFX XML → SmartBody BML 口型时间表转换工具
//!
//! ```bash
//! viseme_scheduler export.xml                         # 转换全部动画，输出 <动画名>.bml.txt
//! viseme_scheduler export.xml line2                   # 只转换 line2，输出 line2.bml.txt
//! viseme_scheduler --mapping sbm --remap export.xml line2 out.bml.txt
//! ```

mod app_settings;
mod cli;
mod converter;
mod error;
mod logger;

use std::path::Path;
use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use tracing::{info, warn};
use viseme_scheduler_core::{BmlGenerationOptions, FacefxParsingOptions};

use crate::app_settings::AppSettings;
use crate::cli::Cli;
use crate::converter::{ConversionOptions, convert_file};
use crate::error::AppResult;

fn main() -> ExitCode {
    if should_print_usage(std::env::args_os().len()) {
        return match Cli::command().print_help() {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("错误: {e}");
                ExitCode::FAILURE
            }
        };
    }

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("错误: {e}");
            ExitCode::FAILURE
        }
    }
}

/// 不带任何参数（只有程序名）时只打印用法。
const fn should_print_usage(args_len: usize) -> bool {
    args_len <= 1
}

fn run(cli: &Cli) -> AppResult<()> {
    let (settings, notes) = AppSettings::load(cli.config.as_deref())?;
    logger::init_logger(cli.console_log_level(settings.log_settings.console_log_level));
    for note in notes {
        warn!("{note}");
    }

    let options = build_options(cli, &settings);
    info!(
        "开始转换 {:?}，映射表 {}，{}",
        cli.input,
        options.mapping,
        if options.parsing.is_batch_mode() {
            "批量模式".to_string()
        } else {
            format!("只处理动画 '{}'", options.parsing.animation_filter)
        }
    );

    let report = convert_file(&cli.input, Path::new("."), &options)?;
    info!(
        "转换完成：写入 {} 个文件，{} 条警告",
        report.written_files.len(),
        report.warnings.len()
    );
    Ok(())
}

/// 合并配置文件与命令行参数，命令行优先。
fn build_options(cli: &Cli, settings: &AppSettings) -> ConversionOptions {
    let conversion = &settings.conversion;
    let animation_filter = cli.animation.clone().unwrap_or_default();
    // 批量模式下忽略输出路径
    let output_file = if animation_filter.is_empty() {
        None
    } else {
        cli.output.clone()
    };

    ConversionOptions {
        mapping: cli.mapping.unwrap_or(conversion.mapping),
        parsing: FacefxParsingOptions {
            animation_filter,
            remap_analysis_actors: cli.remap || conversion.remap_analysis_actors,
            output_file,
        },
        generation: BmlGenerationOptions {
            indent_size: conversion.indent_size,
            xml_declaration: conversion.xml_declaration,
        },
    }
}
