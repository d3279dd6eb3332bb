use tracing::level_filters::LevelFilter;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// 初始化全局日志，输出到标准错误。
///
/// 设置了 `RUST_LOG` 时以环境变量为准，否则使用 `console_level`。
pub fn init_logger(console_level: LevelFilter) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(console_level)));

    if let Err(e) = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
    {
        eprintln!("日志记录器初始化失败: {e}");
    }
}

fn default_directive(level: LevelFilter) -> String {
    level.to_string().to_ascii_lowercase()
}
