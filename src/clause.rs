//! Clause：一个带关键字前缀的格式化流水线，输出语句中的一个片段。

use crate::error::FormatError;
use crate::formatter::Formatter;
use crate::fragment::Fragment;
use crate::string_builder::StringBuilder;
use crate::style::{IdentifierStyle, default_identifier_style};
use std::fmt;

/// Clause 构造后不可变，不持有可变状态，可以在多个 [`Statement`](crate::Statement) 之间复用。
#[derive(Clone)]
pub struct Clause {
    name: String,
    prefix: String,
    formatters: Vec<Box<dyn Formatter>>,
}

impl Clause {
    /// 以 `prefix` 为关键字（同时也是参数名）创建一个空流水线。
    pub fn new(prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        Self {
            name: prefix.clone(),
            prefix,
            formatters: Vec::new(),
        }
    }

    pub fn with_formatters(
        prefix: impl Into<String>,
        formatters: Vec<Box<dyn Formatter>>,
    ) -> Self {
        Self {
            formatters,
            ..Self::new(prefix)
        }
    }

    /// 追加一级格式化器。
    pub fn then(mut self, formatter: impl Formatter + 'static) -> Self {
        self.formatters.push(Box::new(formatter));
        self
    }

    /// 设置参数名；无关键字的子句（如列名列表）需要一个独立的名字。
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn formatters(&self) -> &[Box<dyn Formatter>] {
        &self.formatters
    }

    /// 依次执行流水线，返回不带关键字的文本。
    pub fn format_body(&self, x: Fragment, style: IdentifierStyle) -> Result<String, FormatError> {
        let mut x = x;
        for formatter in &self.formatters {
            x = formatter.format(x, style)?;
        }
        x.into_sql()
    }

    /// 执行流水线并加上大写关键字；输出为空时返回空串。
    pub fn format_with_style(
        &self,
        x: impl Into<Fragment>,
        style: IdentifierStyle,
    ) -> Result<String, FormatError> {
        let body = self.format_body(x.into(), style)?;
        if body.is_empty() {
            return Ok(body);
        }
        let mut buf = StringBuilder::new();
        buf.write_leading(&self.prefix.to_uppercase());
        buf.write_leading(&body);
        Ok(buf.into_string())
    }

    pub fn format(&self, x: impl Into<Fragment>) -> Result<String, FormatError> {
        self.format_with_style(x, default_identifier_style())
    }
}

impl fmt::Debug for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Clause({}, {:?})", self.prefix, self.formatters)?;
        if self.name != self.prefix {
            write!(f, " as {}", self.name)?;
        }
        Ok(())
    }
}
