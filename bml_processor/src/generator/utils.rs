//! # BML 生成器 - 工具函数模块

use viseme_scheduler_core::ConvertError;

/// 输出文件使用的换行符，与平台默认一致。
#[cfg(windows)]
pub(super) const LINE_ENDING: &str = "\r\n";
#[cfg(not(windows))]
pub(super) const LINE_ENDING: &str = "\n";

/// 将秒数格式化为 BML 属性中的时间字符串。
///
/// 使用最短的可往返表示，例如 `1.2`、`0`、`1.38`。
pub(super) fn format_bml_time(seconds: f64) -> String {
    format!("{seconds}")
}

/// 生成 `<text>` 内部用于对齐的换行加缩进。
pub(super) fn line_break_with_indent(indent_size: usize, depth: usize) -> String {
    let mut text = String::with_capacity(1 + indent_size * depth);
    text.push('\n');
    text.push_str(&" ".repeat(indent_size * depth));
    text
}

/// 把写入器生成的 `\n` 换成平台默认的换行符。
pub(super) fn apply_line_ending(text: String) -> String {
    with_line_ending(text, LINE_ENDING)
}

fn with_line_ending(text: String, line_ending: &str) -> String {
    if line_ending == "\n" {
        text
    } else {
        text.replace('\n', line_ending)
    }
}

/// 写入器闭包只能返回 `io::Error`，其中包装的 `ConvertError` 在这里取回。
pub(super) fn recover_convert_error(err: std::io::Error) -> ConvertError {
    err.downcast::<ConvertError>().unwrap_or_else(ConvertError::Io)
}
