use std::io;

use quick_xml::{
    Error as QuickXmlErrorMain, encoding::EncodingError,
    events::attributes::AttrError as QuickXmlAttrError,
};
use thiserror::Error;

use crate::VisemeMapping;

/// 定义 FaceFX → BML 转换过程中可能发生的各种错误。
#[derive(Error, Debug)]
pub enum ConvertError {
    /// XML 解析或生成错误，通常来自 `quick-xml` 库。
    #[error("XML 错误: {0}")]
    Xml(#[from] QuickXmlErrorMain),
    /// XML 属性解析错误，通常来自 `quick-xml` 库。
    #[error("XML 属性错误: {0}")]
    Attribute(#[from] QuickXmlAttrError),
    /// XML 文本编码或解码错误。
    #[error("文本编码或解码错误: {0}")]
    Encoding(#[from] EncodingError),
    /// 属性值或曲线数据不是合法的数字。
    #[error("无法将 {context} 的值 '{value}' 解析为数字")]
    InvalidNumber {
        /// 出错的位置，例如 `phoneme@start`。
        context: String,
        /// 原始字符串。
        value: String,
    },
    /// 元素缺少必需的属性。
    #[error("<{element}> 元素缺少必需的属性 '{attribute}'")]
    MissingAttribute {
        /// 元素名。
        element: String,
        /// 属性名。
        attribute: String,
    },
    /// 音素不在当前映射表中，没有默认口型可以回退。
    #[error("音素 '{phoneme}' 不在 {mapping} 映射表中")]
    UnknownPhoneme {
        /// 输入中的音素标签。
        phoneme: String,
        /// 当前使用的映射表。
        mapping: VisemeMapping,
    },
    /// 生成 BML 时发现尚未分配口型的音素。
    #[error("音素 '{0}' 尚未分配口型")]
    UnresolvedViseme(String),
    /// 内部逻辑错误或未明确分类的错误。
    #[error("错误: {0}")]
    Internal(String),
    /// 文件读写等IO错误。
    #[error("IO 错误: {0}")]
    Io(#[from] io::Error),
    /// 从字节序列转换为 UTF-8 字符串失败。
    #[error("UTF-8 转换错误: {0}")]
    FromUtf8(#[from] std::string::FromUtf8Error),
}

impl From<ConvertError> for std::io::Error {
    fn from(err: ConvertError) -> Self {
        Self::other(err)
    }
}

impl ConvertError {
    /// 创建一个 `InvalidNumber` 错误。
    #[must_use]
    pub fn invalid_number(context: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidNumber {
            context: context.into(),
            value: value.into(),
        }
    }

    /// 创建一个 `MissingAttribute` 错误。
    #[must_use]
    pub fn missing_attribute(element: impl Into<String>, attribute: impl Into<String>) -> Self {
        Self::MissingAttribute {
            element: element.into(),
            attribute: attribute.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ConvertError::invalid_number("phoneme@start", "abc");
        assert_eq!(err.to_string(), "无法将 phoneme@start 的值 'abc' 解析为数字");

        let err = ConvertError::missing_attribute("curve", "num_keys");
        assert_eq!(err.to_string(), "<curve> 元素缺少必需的属性 'num_keys'");

        let err = ConvertError::UnknownPhoneme {
            phoneme: "QQ".to_string(),
            mapping: VisemeMapping::Sbm2,
        };
        assert_eq!(err.to_string(), "音素 'QQ' 不在 sbm2 映射表中");
    }

    #[test]
    fn test_into_io_error() {
        let io_err: std::io::Error = ConvertError::Internal("boom".to_string()).into();
        assert_eq!(io_err.kind(), std::io::ErrorKind::Other);
        assert!(io_err.to_string().contains("boom"));
    }

    #[test]
    fn test_source_errors_convert() {
        let io_err = std::io::Error::new(std::io::ErrorKind::WriteZero, "disk full");
        assert!(matches!(ConvertError::from(io_err), ConvertError::Io(_)));

        let utf8_err = String::from_utf8(vec![0xff]).unwrap_err();
        assert!(matches!(
            ConvertError::from(utf8_err),
            ConvertError::FromUtf8(_)
        ));
    }
}
