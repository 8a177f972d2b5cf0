//! SQL 标量值类型。

use std::borrow::Cow;
use time::macros::format_description;
use time::{Date, OffsetDateTime, PrimitiveDateTime, Time};

/// SQL 标量值。
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    Null,
    Bool(bool),
    I64(i64),
    U64(u64),
    F64(f64),
    String(Cow<'static, str>),
    Bytes(Vec<u8>),
    Date(Date),
    Time(Time),
    DateTime(PrimitiveDateTime),
    OffsetDateTime(OffsetDateTime),
}

impl SqlValue {
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// 文本值的内容；其它类型返回 `None`。
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s.as_ref()),
            _ => None,
        }
    }

    /// 用于错误信息的类型名。
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::I64(_) | Self::U64(_) => "integer",
            Self::F64(_) => "float",
            Self::String(_) => "text",
            Self::Bytes(_) => "bytes",
            Self::Date(_) => "date",
            Self::Time(_) => "time",
            Self::DateTime(_) => "datetime",
            Self::OffsetDateTime(_) => "offset datetime",
        }
    }

    /// 日期/时间值的规范字符串（`2019-04-24 12:23:34.123456+08:00` 之类）。
    ///
    /// 微秒为 0 时省略小数部分；非时间值返回 `Ok(None)`。
    pub fn temporal_text(&self) -> Result<Option<String>, time::error::Format> {
        let s = match self {
            Self::Date(d) => format_date(*d)?,
            Self::Time(t) => format_time(*t)?,
            Self::DateTime(dt) => format!("{} {}", format_date(dt.date())?, format_time(dt.time())?),
            Self::OffsetDateTime(dt) => {
                let offset = if dt.offset().seconds_past_minute() == 0 {
                    dt.format(format_description!(
                        "[offset_hour sign:mandatory]:[offset_minute]"
                    ))?
                } else {
                    dt.format(format_description!(
                        "[offset_hour sign:mandatory]:[offset_minute]:[offset_second]"
                    ))?
                };
                format!(
                    "{} {}{}",
                    format_date(dt.date())?,
                    format_time(dt.time())?,
                    offset
                )
            }
            _ => return Ok(None),
        };
        Ok(Some(s))
    }
}

fn format_date(d: Date) -> Result<String, time::error::Format> {
    d.format(format_description!("[year]-[month]-[day]"))
}

fn format_time(t: Time) -> Result<String, time::error::Format> {
    if t.microsecond() == 0 {
        t.format(format_description!("[hour]:[minute]:[second]"))
    } else {
        t.format(format_description!(
            "[hour]:[minute]:[second].[subsecond digits:6]"
        ))
    }
}

impl From<()> for SqlValue {
    fn from(_: ()) -> Self {
        Self::Null
    }
}

impl From<bool> for SqlValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i8> for SqlValue {
    fn from(v: i8) -> Self {
        Self::I64(v as i64)
    }
}

impl From<i16> for SqlValue {
    fn from(v: i16) -> Self {
        Self::I64(v as i64)
    }
}

impl From<i32> for SqlValue {
    fn from(v: i32) -> Self {
        Self::I64(v as i64)
    }
}

impl From<i64> for SqlValue {
    fn from(v: i64) -> Self {
        Self::I64(v)
    }
}

impl From<u8> for SqlValue {
    fn from(v: u8) -> Self {
        Self::U64(v as u64)
    }
}

impl From<u16> for SqlValue {
    fn from(v: u16) -> Self {
        Self::U64(v as u64)
    }
}

impl From<u32> for SqlValue {
    fn from(v: u32) -> Self {
        Self::U64(v as u64)
    }
}

impl From<u64> for SqlValue {
    fn from(v: u64) -> Self {
        Self::U64(v)
    }
}

impl From<f32> for SqlValue {
    fn from(v: f32) -> Self {
        Self::F64(v as f64)
    }
}

impl From<f64> for SqlValue {
    fn from(v: f64) -> Self {
        Self::F64(v)
    }
}

impl From<String> for SqlValue {
    fn from(v: String) -> Self {
        Self::String(Cow::Owned(v))
    }
}

impl From<&str> for SqlValue {
    fn from(v: &str) -> Self {
        Self::String(Cow::Owned(v.to_owned()))
    }
}

impl From<Vec<u8>> for SqlValue {
    fn from(v: Vec<u8>) -> Self {
        Self::Bytes(v)
    }
}

impl From<Date> for SqlValue {
    fn from(v: Date) -> Self {
        Self::Date(v)
    }
}

impl From<Time> for SqlValue {
    fn from(v: Time) -> Self {
        Self::Time(v)
    }
}

impl From<PrimitiveDateTime> for SqlValue {
    fn from(v: PrimitiveDateTime) -> Self {
        Self::DateTime(v)
    }
}

impl From<OffsetDateTime> for SqlValue {
    fn from(v: OffsetDateTime) -> Self {
        Self::OffsetDateTime(v)
    }
}
