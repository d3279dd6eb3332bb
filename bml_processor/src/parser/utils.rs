//! # FaceFX 解析器的工具函数
//!
//! 属性提取、与区域设置无关的数值解析，以及 XML 实体解析。

use quick_xml::{Reader, events::BytesStart};
use viseme_scheduler_core::ConvertError;

/// 以 UTF-8 有损方式取得元素名，仅用于错误信息。
fn element_name(e: &BytesStart) -> String {
    String::from_utf8_lossy(e.local_name().as_ref()).into_owned()
}

/// 获取属性并将其转换为目标类型。
///
/// # 参数
/// * `e` - `BytesStart` 事件，代表一个 XML 标签的开始。
/// * `reader` - XML 读取器，用于解码。
/// * `attr_name` - 属性名。
/// * `processor` - 一个闭包，接收解码后的字符串值，并返回 `Result<T, ConvertError>`。
///
/// # 返回
/// * `Result<Option<T>, ConvertError>` - 属性不存在时返回 `None`。
pub(super) fn get_attribute<T, F>(
    e: &BytesStart,
    reader: &Reader<&[u8]>,
    attr_name: &[u8],
    processor: F,
) -> Result<Option<T>, ConvertError>
where
    F: Fn(&str) -> Result<T, ConvertError>,
{
    e.try_get_attribute(attr_name)?
        .map(|attr| {
            let decoded_value = attr.decode_and_unescape_value(reader.decoder())?;
            processor(&decoded_value)
        })
        .transpose()
}

/// 获取字符串类型的属性值。
pub(super) fn get_string_attribute(
    e: &BytesStart,
    reader: &Reader<&[u8]>,
    attr_name: &[u8],
) -> Result<Option<String>, ConvertError> {
    get_attribute(e, reader, attr_name, |s| Ok(s.to_owned()))
}

/// 获取必需的属性值，缺失时返回 `MissingAttribute`。
fn require_attribute<T, F>(
    e: &BytesStart,
    reader: &Reader<&[u8]>,
    attr_name: &[u8],
    processor: F,
) -> Result<T, ConvertError>
where
    F: Fn(&str) -> Result<T, ConvertError>,
{
    get_attribute(e, reader, attr_name, processor)?.ok_or_else(|| {
        ConvertError::missing_attribute(element_name(e), String::from_utf8_lossy(attr_name))
    })
}

pub(super) fn require_string_attribute(
    e: &BytesStart,
    reader: &Reader<&[u8]>,
    attr_name: &[u8],
) -> Result<String, ConvertError> {
    require_attribute(e, reader, attr_name, |s| Ok(s.to_owned()))
}

/// 获取必需的浮点数属性（秒）。
pub(super) fn require_number_attribute(
    e: &BytesStart,
    reader: &Reader<&[u8]>,
    attr_name: &[u8],
) -> Result<f64, ConvertError> {
    let context = format!(
        "{}@{}",
        element_name(e),
        String::from_utf8_lossy(attr_name)
    );
    require_attribute(e, reader, attr_name, |s| parse_number(s, &context))
}

/// 获取必需的整数属性。
pub(super) fn require_int_attribute(
    e: &BytesStart,
    reader: &Reader<&[u8]>,
    attr_name: &[u8],
) -> Result<i32, ConvertError> {
    let context = format!(
        "{}@{}",
        element_name(e),
        String::from_utf8_lossy(attr_name)
    );
    require_attribute(e, reader, attr_name, |s| {
        s.trim()
            .parse::<i32>()
            .map_err(|_| ConvertError::invalid_number(context.as_str(), s))
    })
}

/// 解析一个浮点数。只接受 `.` 作为小数点，与系统区域设置无关。
pub(super) fn parse_number(text: &str, context: &str) -> Result<f64, ConvertError> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| ConvertError::invalid_number(context, text))
}

/// 把 `GeneralRef` 事件中的实体名解析为字符。
///
/// 支持五个预定义实体以及 `#N` / `#xN` 形式的数字字符引用，未知实体返回 `None`。
pub(super) fn resolve_entity(entity_name: &str) -> Option<char> {
    if let Some(num_str) = entity_name.strip_prefix('#') {
        let (radix, code_point_str) = num_str
            .strip_prefix('x')
            .map_or((10, num_str), |stripped| (16, stripped));
        return u32::from_str_radix(code_point_str, radix)
            .ok()
            .and_then(char::from_u32);
    }

    match entity_name {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        _ => None,
    }
}
