//! Model：把查询结果（列名 + 行）整理成按列访问的分组。
//!
//! 与格式化引擎相互独立：只消费列名与行数据，不生成 SQL。

use crate::value::SqlValue;
use indexmap::IndexMap;
use std::collections::HashSet;

/// 分组错误。
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModelError {
    #[error("model unknown column: {0}")]
    UnknownColumn(String),
    #[error("model row {row} has {found} values, expected {expected}")]
    RowWidth {
        row: usize,
        found: usize,
        expected: usize,
    },
}

/// 构造选项。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModelOptions {
    /// 组内取值相同的列：[`Model::get`] 只返回第一个值。
    pub squashed: HashSet<String>,
}

impl ModelOptions {
    pub fn squashed<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.squashed.extend(columns.into_iter().map(Into::into));
        self
    }
}

/// [`Model::get`] 的结果。
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColumnValue<'a> {
    /// squashed 列的第一个值（组为空时为 `None`）。
    Single(Option<&'a SqlValue>),
    Column(&'a [SqlValue]),
}

/// 一组行，按列存储。
#[derive(Debug, Clone, PartialEq)]
pub struct Model {
    columns: IndexMap<String, Vec<SqlValue>>,
    options: ModelOptions,
    row_count: usize,
}

fn check_widths(width: usize, rows: &[Vec<SqlValue>]) -> Result<(), ModelError> {
    for (i, row) in rows.iter().enumerate() {
        if row.len() != width {
            return Err(ModelError::RowWidth {
                row: i,
                found: row.len(),
                expected: width,
            });
        }
    }
    Ok(())
}

impl Model {
    pub fn new<S: Into<String>>(
        column_names: impl IntoIterator<Item = S>,
        rows: Vec<Vec<SqlValue>>,
        options: ModelOptions,
    ) -> Result<Self, ModelError> {
        let names: Vec<String> = column_names.into_iter().map(Into::into).collect();
        check_widths(names.len(), &rows)?;
        Ok(Self::from_checked(&names, rows, options))
    }

    fn from_checked(names: &[String], rows: Vec<Vec<SqlValue>>, options: ModelOptions) -> Self {
        let row_count = rows.len();
        let mut columns: IndexMap<String, Vec<SqlValue>> = names
            .iter()
            .map(|n| (n.clone(), Vec::with_capacity(row_count)))
            .collect();
        for row in rows {
            for (cells, v) in columns.values_mut().zip(row) {
                cells.push(v);
            }
        }
        Self {
            columns,
            options,
            row_count,
        }
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.row_count
    }

    pub fn is_empty(&self) -> bool {
        self.row_count == 0
    }

    /// 整列数据，不受 squashed 影响。
    pub fn column(&self, name: &str) -> Option<&[SqlValue]> {
        self.columns.get(name).map(Vec::as_slice)
    }

    /// squashed 列返回第一个值，其它列返回整列。
    pub fn get(&self, name: &str) -> Option<ColumnValue<'_>> {
        let cells = self.columns.get(name)?;
        if self.options.squashed.contains(name) {
            Some(ColumnValue::Single(cells.first()))
        } else {
            Some(ColumnValue::Column(cells))
        }
    }

    /// 第 `index` 行，按列名顺序。
    pub fn row(&self, index: usize) -> Option<Vec<&SqlValue>> {
        if index >= self.row_count {
            return None;
        }
        Some(self.columns.values().map(|c| &c[index]).collect())
    }
}

/// 按 `arrange_by` 指定的列对相邻行分组，每组生成一个 [`Model`]。
///
/// 只合并相邻且键相同的行；需要全局分组时，调用方应先按这些列排序。
pub fn arrange<S: Into<String>>(
    column_names: impl IntoIterator<Item = S>,
    rows: Vec<Vec<SqlValue>>,
    arrange_by: &[&str],
    options: ModelOptions,
) -> Result<Vec<Model>, ModelError> {
    let names: Vec<String> = column_names.into_iter().map(Into::into).collect();
    check_widths(names.len(), &rows)?;

    let key_indexes = arrange_by
        .iter()
        .map(|key| {
            names
                .iter()
                .position(|n| n == key)
                .ok_or_else(|| ModelError::UnknownColumn(key.to_string()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let mut groups: Vec<Vec<Vec<SqlValue>>> = Vec::new();
    for row in rows {
        let same_key = groups
            .last()
            .and_then(|g| g.last())
            .is_some_and(|prev| key_indexes.iter().all(|&i| prev[i] == row[i]));
        match groups.last_mut() {
            Some(group) if same_key => group.push(row),
            _ => groups.push(vec![row]),
        }
    }

    Ok(groups
        .into_iter()
        .map(|g| Model::from_checked(&names, g, options.clone()))
        .collect())
}
