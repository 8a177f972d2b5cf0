//! 格式化器：`Qualifier`（标量函数 → 同时处理序列与 Raw）与 `Aggregator`（拼接序列，标量透传）。
//!
//! 每个格式化器都是实现 [`Formatter`] 的小结构体，可以放进 [`Clause`](crate::Clause) 的流水线逐级调用。

use crate::error::FormatError;
use crate::fragment::Fragment;
use crate::modifiers::escape_literal;
use crate::style::{IdentifierStyle, default_identifier_style};
use crate::value::SqlValue;
use dyn_clone::DynClone;
use std::fmt;

/// 单一的“格式化”能力：输入一个 `Fragment`，输出下一级的 `Fragment`。
pub trait Formatter: DynClone + Send + Sync {
    /// 名称，用于 `Debug` 输出与错误信息。
    fn name(&self) -> &'static str;

    fn format(&self, input: Fragment, style: IdentifierStyle) -> Result<Fragment, FormatError>;

    fn boxed(self) -> Box<dyn Formatter>
    where
        Self: Sized + 'static,
    {
        Box::new(self)
    }
}

dyn_clone::clone_trait_object!(Formatter);

impl fmt::Debug for dyn Formatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Formatter for Box<dyn Formatter> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn format(&self, input: Fragment, style: IdentifierStyle) -> Result<Fragment, FormatError> {
        (**self).format(input, style)
    }
}

pub type ScalarFn = fn(&SqlValue, IdentifierStyle) -> Result<String, FormatError>;
pub type JoinFn = fn(Fragment, IdentifierStyle) -> Result<Fragment, FormatError>;

/// Qualifier：把标量格式化函数扩展为同时处理 Raw（原样返回）与序列（逐个元素递归）。
#[derive(Clone, Copy)]
pub struct Qualifier {
    name: &'static str,
    scalar: ScalarFn,
}

impl Qualifier {
    pub const fn new(name: &'static str, scalar: ScalarFn) -> Self {
        Self { name, scalar }
    }

    pub fn apply(&self, input: Fragment, style: IdentifierStyle) -> Result<Fragment, FormatError> {
        match input {
            Fragment::Raw(r) => Ok(Fragment::Raw(r)),
            Fragment::List(items) => items
                .into_iter()
                .map(|item| self.apply(item, style))
                .collect::<Result<Vec<_>, _>>()
                .map(Fragment::List),
            Fragment::Pairs(_) => Err(FormatError::unsupported(self.name, "pairs")),
            Fragment::Value(v) => (self.scalar)(&v, style).map(Fragment::text),
        }
    }
}

impl Formatter for Qualifier {
    fn name(&self) -> &'static str {
        self.name
    }

    fn format(&self, input: Fragment, style: IdentifierStyle) -> Result<Fragment, FormatError> {
        self.apply(input, style)
    }
}

/// Aggregator：输入可迭代时调用拼接函数，否则原样返回（已拼好的字符串不会被再次拼接）。
#[derive(Clone, Copy)]
pub struct Aggregator {
    name: &'static str,
    join: JoinFn,
}

impl Aggregator {
    pub const fn new(name: &'static str, join: JoinFn) -> Self {
        Self { name, join }
    }

    pub fn apply(&self, input: Fragment, style: IdentifierStyle) -> Result<Fragment, FormatError> {
        if input.is_iterable() {
            (self.join)(input, style)
        } else {
            Ok(input)
        }
    }
}

impl Formatter for Aggregator {
    fn name(&self) -> &'static str {
        self.name
    }

    fn format(&self, input: Fragment, style: IdentifierStyle) -> Result<Fragment, FormatError> {
        self.apply(input, style)
    }
}

/// 把闭包包装成流水线中的一级。
#[derive(Clone)]
pub struct FnFormatter<F> {
    name: &'static str,
    f: F,
}

/// 用闭包构造自定义格式化器。
pub fn formatter_fn<F>(name: &'static str, f: F) -> FnFormatter<F>
where
    F: Fn(Fragment, IdentifierStyle) -> Result<Fragment, FormatError> + Clone + Send + Sync,
{
    FnFormatter { name, f }
}

impl<F> Formatter for FnFormatter<F>
where
    F: Fn(Fragment, IdentifierStyle) -> Result<Fragment, FormatError> + Clone + Send + Sync,
{
    fn name(&self) -> &'static str {
        self.name
    }

    fn format(&self, input: Fragment, style: IdentifierStyle) -> Result<Fragment, FormatError> {
        (self.f)(input, style)
    }
}

fn quote_literal(s: &str) -> String {
    format!("'{}'", escape_literal(s))
}

fn value_scalar(v: &SqlValue, _: IdentifierStyle) -> Result<String, FormatError> {
    if let Some(s) = v.temporal_text()? {
        return Ok(quote_literal(&s));
    }

    let s = match v {
        SqlValue::String(s) => quote_literal(s),
        SqlValue::Null => "NULL".to_string(),
        SqlValue::Bool(b) => (if *b { "TRUE" } else { "FALSE" }).to_string(),
        SqlValue::I64(n) => n.to_string(),
        SqlValue::U64(n) => n.to_string(),
        SqlValue::F64(n) if n.is_finite() => float_literal(*n),
        SqlValue::F64(_) => return Err(FormatError::unsupported("value", "non-finite float")),
        other => return Err(FormatError::unsupported("value", other.kind())),
    };
    Ok(s)
}

// 整数值的浮点数保留 `.0`，避免被当成整数字面量。
fn float_literal(n: f64) -> String {
    let s = n.to_string();
    if s.contains('.') { s } else { format!("{s}.0") }
}

fn identifier_scalar(v: &SqlValue, style: IdentifierStyle) -> Result<String, FormatError> {
    match v {
        SqlValue::String(s) => Ok(style.quote(s)),
        other => Err(FormatError::unsupported("identifier", other.kind())),
    }
}

// 非文本标量先按字面量输出，再加括号。
fn paren_scalar(v: &SqlValue, style: IdentifierStyle) -> Result<String, FormatError> {
    match v {
        SqlValue::String(s) => Ok(format!("({s})")),
        other => Ok(format!("({})", value_scalar(other, style)?)),
    }
}

fn join_texts(input: Fragment, sep: &str, formatter: &'static str) -> Result<Fragment, FormatError> {
    let items = match input {
        Fragment::List(items) => items,
        other => return Err(FormatError::unsupported(formatter, other.kind())),
    };
    let mut pieces = Vec::with_capacity(items.len());
    for item in &items {
        let text = item
            .as_str()
            .ok_or_else(|| FormatError::unsupported(formatter, item.kind()))?;
        pieces.push(text);
    }
    Ok(Fragment::text(pieces.join(sep)))
}

fn join_and(input: Fragment, _: IdentifierStyle) -> Result<Fragment, FormatError> {
    join_texts(input, " AND ", "concat_by_and")
}

fn join_or(input: Fragment, _: IdentifierStyle) -> Result<Fragment, FormatError> {
    join_texts(input, " OR ", "concat_by_or")
}

fn join_space(input: Fragment, _: IdentifierStyle) -> Result<Fragment, FormatError> {
    join_texts(input, " ", "concat_by_space")
}

fn join_comma(input: Fragment, _: IdentifierStyle) -> Result<Fragment, FormatError> {
    join_texts(input, ", ", "concat_by_comma")
}

/// 字面量：文本加单引号并转义，`NULL`/`TRUE`/`FALSE`，数字原样，时间值转规范字符串后加引号。
pub const VALUE: Qualifier = Qualifier::new("value", value_scalar);
/// 标识符：按 [`IdentifierStyle`] 输出。
pub const IDENTIFIER: Qualifier = Qualifier::new("identifier", identifier_scalar);
/// 括号：`(%s)`。
pub const PAREN: Qualifier = Qualifier::new("paren", paren_scalar);

pub const CONCAT_BY_AND: Aggregator = Aggregator::new("concat_by_and", join_and);
pub const CONCAT_BY_OR: Aggregator = Aggregator::new("concat_by_or", join_or);
pub const CONCAT_BY_SPACE: Aggregator = Aggregator::new("concat_by_space", join_space);
pub const CONCAT_BY_COMMA: Aggregator = Aggregator::new("concat_by_comma", join_comma);

pub fn value(x: impl Into<Fragment>) -> Result<Fragment, FormatError> {
    VALUE.apply(x.into(), IdentifierStyle::default())
}

/// 按全局默认风格格式化标识符。
pub fn identifier(x: impl Into<Fragment>) -> Result<Fragment, FormatError> {
    IDENTIFIER.apply(x.into(), default_identifier_style())
}

pub fn identifier_with_style(
    x: impl Into<Fragment>,
    style: IdentifierStyle,
) -> Result<Fragment, FormatError> {
    IDENTIFIER.apply(x.into(), style)
}

pub fn paren(x: impl Into<Fragment>) -> Result<Fragment, FormatError> {
    PAREN.apply(x.into(), IdentifierStyle::default())
}

pub fn concat_by_and(x: impl Into<Fragment>) -> Result<Fragment, FormatError> {
    CONCAT_BY_AND.apply(x.into(), IdentifierStyle::default())
}

pub fn concat_by_or(x: impl Into<Fragment>) -> Result<Fragment, FormatError> {
    CONCAT_BY_OR.apply(x.into(), IdentifierStyle::default())
}

pub fn concat_by_space(x: impl Into<Fragment>) -> Result<Fragment, FormatError> {
    CONCAT_BY_SPACE.apply(x.into(), IdentifierStyle::default())
}

pub fn concat_by_comma(x: impl Into<Fragment>) -> Result<Fragment, FormatError> {
    CONCAT_BY_COMMA.apply(x.into(), IdentifierStyle::default())
}
