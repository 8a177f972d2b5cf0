//! Statement：按固定顺序组合 Clause，生成完整语句。

use crate::args::ClauseArgs;
use crate::clause::Clause;
use crate::error::FormatError;
use crate::string_builder::StringBuilder;
use crate::style::{IdentifierStyle, default_identifier_style};
use std::collections::HashSet;
use std::fmt;

/// Statement 构造后不可变；多个调用方可以并发地用不同参数格式化同一个 Statement。
#[derive(Clone)]
pub struct Statement {
    clauses: Vec<Clause>,
    style: Option<IdentifierStyle>,
}

impl Statement {
    pub fn new(clauses: impl IntoIterator<Item = Clause>) -> Self {
        Self {
            clauses: clauses.into_iter().collect(),
            style: None,
        }
    }

    /// 固定本语句的标识符风格；未设置时在格式化时读取全局默认值。
    pub fn with_style(mut self, style: IdentifierStyle) -> Self {
        self.style = Some(style);
        self
    }

    pub fn style(&self) -> IdentifierStyle {
        self.style.unwrap_or_else(default_identifier_style)
    }

    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    pub fn format(&self, args: ClauseArgs) -> Result<String, FormatError> {
        self.format_with_style(args, self.style())
    }

    /// 按声明顺序格式化每个有参数的子句，以空格连接。
    ///
    /// 参数缺失、为 `NULL` 或格式化结果为空的子句整体省略；任一子句失败则整个调用失败。
    pub fn format_with_style(
        &self,
        args: ClauseArgs,
        style: IdentifierStyle,
    ) -> Result<String, FormatError> {
        let args = args.normalized();
        let mut matched = HashSet::new();
        let mut buf = StringBuilder::new();

        // 同名子句读取同一个参数。
        for clause in &self.clauses {
            let Some(arg) = args.get(clause.name()) else {
                continue;
            };
            matched.insert(clause.name());
            if arg.is_null() {
                tracing::trace!(clause = clause.name(), "skipping clause with null argument");
                continue;
            }
            let piece = clause.format_with_style(arg.clone(), style)?;
            if piece.is_empty() {
                tracing::trace!(clause = clause.name(), "skipping clause with empty output");
            }
            buf.write_leading(&piece);
        }

        let unknown: Vec<&str> = args.names().filter(|n| !matched.contains(n)).collect();
        if !unknown.is_empty() {
            tracing::debug!(?unknown, "ignoring arguments without a matching clause");
        }

        let sql = buf.into_string();
        tracing::trace!(sql = %sql, "formatted statement");
        Ok(sql)
    }
}

impl fmt::Debug for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Statement({:?})", self.clauses)
    }
}
