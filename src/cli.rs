//! 命令行参数定义

use clap::Parser;
use std::path::PathBuf;
use tracing::level_filters::LevelFilter;
use viseme_scheduler_core::VisemeMapping;

/// 把 FaceFX 导出的 XML 转换为 SmartBody 使用的 BML 口型时间表
#[derive(Parser, Debug)]
#[command(name = "viseme_scheduler")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// 生成 <lips> 时使用的音素→口型映射表（sbm 或 sbm2，默认 sbm2），不影响 <curves>
    #[arg(short, long, value_name = "sbm|sbm2")]
    pub mapping: Option<VisemeMapping>,

    /// 把 Analysis Actor 的曲线名映射为动作单元（例如 Blink → au_45）
    #[arg(short, long)]
    pub remap: bool,

    /// 配置文件路径（INI）
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// 输出更详细的日志 (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// 只输出错误
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// FaceFX 导出的 .xml 文件
    pub input: PathBuf,

    /// 要转换的动画名。省略时转换文件中的全部动画
    pub animation: Option<String>,

    /// 输出的 .bml.txt 文件，仅在指定动画名时有效
    pub output: Option<PathBuf>,
}

impl Cli {
    /// 结合配置文件中的级别得到最终的控制台日志级别。
    pub fn console_log_level(&self, configured: LevelFilter) -> LevelFilter {
        if self.quiet {
            return LevelFilter::ERROR;
        }
        match self.verbose {
            0 => configured,
            1 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    }
}
