//! ClauseArgs：一次格式化调用的“子句名 → 参数”映射。

use crate::fragment::Fragment;
use indexmap::IndexMap;

/// 子句参数。子句名中的 `_` 与空格等价（`group_by` 与 `group by` 指向同一子句，`from_` 指向 `from`）。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClauseArgs {
    args: IndexMap<String, Fragment>,
}

/// 子句名规范化：`_` 替换为空格，再去掉首尾空白。
pub fn normalize_clause_name(name: &str) -> String {
    name.replace('_', " ").trim().to_string()
}

impl ClauseArgs {
    pub fn new() -> Self {
        Self::default()
    }

    /// 设置一个子句参数（按原样保存，格式化时再规范化）。
    pub fn set(mut self, name: impl Into<String>, arg: impl Into<Fragment>) -> Self {
        self.insert(name, arg);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, arg: impl Into<Fragment>) -> Option<Fragment> {
        self.args.insert(name.into(), arg.into())
    }

    /// 未设置时才写入。
    pub fn set_default(mut self, name: impl Into<String>, arg: impl Into<Fragment>) -> Self {
        let name = name.into();
        let normalized = normalize_clause_name(&name);
        if !self
            .args
            .keys()
            .any(|k| normalize_clause_name(k) == normalized)
        {
            self.args.insert(name, arg.into());
        }
        self
    }

    pub fn get(&self, name: &str) -> Option<&Fragment> {
        self.args.get(name)
    }

    pub fn len(&self) -> usize {
        self.args.len()
    }

    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }

    /// 规范化所有子句名；规范化后冲突时后写入者胜出。
    pub fn normalized(self) -> Self {
        let mut args = IndexMap::with_capacity(self.args.len());
        for (k, v) in self.args {
            args.insert(normalize_clause_name(&k), v);
        }
        Self { args }
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.args.keys().map(String::as_str)
    }
}

impl<K: Into<String>, V: Into<Fragment>> FromIterator<(K, V)> for ClauseArgs {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            args: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl<K: Into<String>, V: Into<Fragment>> From<IndexMap<K, V>> for ClauseArgs {
    fn from(v: IndexMap<K, V>) -> Self {
        v.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn normalize_underscore_and_trailing() {
        assert_eq!(normalize_clause_name("from_"), "from");
        assert_eq!(normalize_clause_name("group_by"), "group by");
        assert_eq!(normalize_clause_name("order by"), "order by");
        assert_eq!(normalize_clause_name("insert_into"), "insert into");
    }

    #[test]
    fn normalized_last_write_wins() {
        let args = ClauseArgs::new()
            .set("group by", "a")
            .set("group_by", "b")
            .normalized();
        assert_eq!(args.len(), 1);
        assert_eq!(args.get("group by"), Some(&Fragment::from("b")));
    }

    #[test]
    fn set_default_respects_normalized_names() {
        let args = ClauseArgs::new()
            .set("from_", "person")
            .set_default("from", "other")
            .set_default("select", "*");
        assert_eq!(args.len(), 2);
        assert_eq!(args.get("from_"), Some(&Fragment::from("person")));
        assert_eq!(args.get("select"), Some(&Fragment::from("*")));
    }
}
