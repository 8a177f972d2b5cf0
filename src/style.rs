//! 标识符引用风格：控制 `identifier` 是否以及如何给标识符加引号。

use crate::modifiers::escape_identifier;
use std::fmt;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::{Mutex, MutexGuard};

/// 标识符引用风格。默认不加引号。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum IdentifierStyle {
    #[default]
    Unquoted,
    /// ANSI 风格：`"name"`，内部的 `"` 双写。
    DoubleQuoted,
    /// MySQL 风格：`` `name` ``，内部的 `` ` `` 双写。
    Backtick,
}

static DEFAULT_STYLE: AtomicU8 = AtomicU8::new(IdentifierStyle::Unquoted as u8);
static DEFAULT_STYLE_LOCK: Mutex<()> = Mutex::new(());

impl IdentifierStyle {
    fn from_u8(v: u8) -> Self {
        match v {
            1 => Self::DoubleQuoted,
            2 => Self::Backtick,
            _ => Self::Unquoted,
        }
    }

    fn to_u8(self) -> u8 {
        self as u8
    }

    /// 按当前风格输出标识符。
    pub fn quote(self, name: &str) -> String {
        match self {
            Self::Unquoted => name.to_string(),
            Self::DoubleQuoted => format!("\"{}\"", escape_identifier(name)),
            Self::Backtick => format!("`{}`", name.replace('`', "``")),
        }
    }
}

/// 获取当前全局默认引用风格。
pub fn default_identifier_style() -> IdentifierStyle {
    IdentifierStyle::from_u8(DEFAULT_STYLE.load(Ordering::Relaxed))
}

/// 设置全局默认引用风格，返回旧值。
pub fn set_default_identifier_style(style: IdentifierStyle) -> IdentifierStyle {
    let old = DEFAULT_STYLE.swap(style.to_u8(), Ordering::Relaxed);
    IdentifierStyle::from_u8(old)
}

/// 修改全局默认引用风格的 RAII guard（会持有一个全局锁，避免并行测试互相干扰）。
pub struct DefaultStyleGuard {
    _lock: MutexGuard<'static, ()>,
    old: IdentifierStyle,
}

impl Drop for DefaultStyleGuard {
    fn drop(&mut self) {
        set_default_identifier_style(self.old);
    }
}

/// 在一个作用域内临时设置默认引用风格，退出作用域后自动恢复。
pub fn set_default_identifier_style_scoped(style: IdentifierStyle) -> DefaultStyleGuard {
    let lock = DEFAULT_STYLE_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    let old = set_default_identifier_style(style);
    DefaultStyleGuard { _lock: lock, old }
}

impl fmt::Display for IdentifierStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Unquoted => "unquoted",
            Self::DoubleQuoted => "double-quoted",
            Self::Backtick => "backtick",
        };
        f.write_str(s)
    }
}
