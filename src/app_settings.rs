use directories::ProjectDirs;
use ini::{Ini, Properties};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::level_filters::LevelFilter;
use viseme_scheduler_core::{BmlGenerationOptions, VisemeMapping};

use crate::error::{AppError, AppResult};

const CONFIG_FILE_NAME: &str = "viseme_scheduler.ini";
const LOGGING_SECTION: &str = "Logging";
const CONVERSION_SECTION: &str = "Conversion";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    pub console_log_level: LevelFilter,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            console_log_level: LevelFilter::INFO,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionSettings {
    pub mapping: VisemeMapping,
    pub remap_analysis_actors: bool,
    pub indent_size: usize,
    pub xml_declaration: bool,
}

impl Default for ConversionSettings {
    fn default() -> Self {
        let generation = BmlGenerationOptions::default();
        Self {
            mapping: VisemeMapping::default(),
            remap_analysis_actors: false,
            indent_size: generation.indent_size,
            xml_declaration: generation.xml_declaration,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppSettings {
    pub log_settings: LogSettings,
    pub conversion: ConversionSettings,
}

impl AppSettings {
    /// 默认配置文件位置，例如 Linux 下的 `~/.config/viseme_scheduler/viseme_scheduler.ini`。
    pub fn default_config_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "VisemeScheduler", "viseme_scheduler")
            .map(|proj_dirs| proj_dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    /// 加载配置。
    ///
    /// 显式指定的文件必须可读；未指定时尝试默认位置，文件不存在就使用默认配置。
    /// 返回值中的字符串是无效配置项的说明，此时日志系统尚未初始化，由调用方稍后输出。
    pub fn load(explicit_path: Option<&Path>) -> AppResult<(Self, Vec<String>)> {
        let path = match explicit_path {
            Some(path) => path.to_path_buf(),
            None => match Self::default_config_path() {
                Some(path) if path.exists() => path,
                _ => return Ok((Self::default(), Vec::new())),
            },
        };

        let conf = Ini::load_from_file(&path).map_err(|source| AppError::Settings {
            path: path.clone(),
            source,
        })?;
        let mut notes = Vec::new();
        let settings = Self::from_ini(&conf, &mut notes);
        Ok((settings, notes))
    }

    /// 从已解析的 INI 读取配置。缺失的项取默认值，无效的项取默认值并记录一条说明。
    pub fn from_ini(conf: &Ini, notes: &mut Vec<String>) -> Self {
        let defaults = Self::default();
        let logging = conf.section(Some(LOGGING_SECTION));
        let conversion = conf.section(Some(CONVERSION_SECTION));

        Self {
            log_settings: LogSettings {
                console_log_level: read_value(
                    logging,
                    LOGGING_SECTION,
                    "ConsoleLogLevel",
                    defaults.log_settings.console_log_level,
                    notes,
                ),
            },
            conversion: ConversionSettings {
                mapping: read_value(
                    conversion,
                    CONVERSION_SECTION,
                    "Mapping",
                    defaults.conversion.mapping,
                    notes,
                ),
                remap_analysis_actors: read_value(
                    conversion,
                    CONVERSION_SECTION,
                    "RemapAnalysisActors",
                    defaults.conversion.remap_analysis_actors,
                    notes,
                ),
                indent_size: read_value(
                    conversion,
                    CONVERSION_SECTION,
                    "IndentSize",
                    defaults.conversion.indent_size,
                    notes,
                ),
                xml_declaration: read_value(
                    conversion,
                    CONVERSION_SECTION,
                    "XmlDeclaration",
                    defaults.conversion.xml_declaration,
                    notes,
                ),
            },
        }
    }
}

fn read_value<T: FromStr>(
    section: Option<&Properties>,
    section_name: &str,
    key: &str,
    default: T,
    notes: &mut Vec<String>,
) -> T {
    let Some(raw) = section.and_then(|s| s.get(key)) else {
        return default;
    };
    raw.trim().parse::<T>().unwrap_or_else(|_| {
        notes.push(format!(
            "[Settings] 配置项 {section_name}.{key} 的值 '{raw}' 无效，将使用默认值"
        ));
        default
    })
}
