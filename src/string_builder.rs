//! 空格分隔的字符串拼接工具。

#[derive(Debug, Default, Clone)]
pub(crate) struct StringBuilder {
    buf: String,
}

impl StringBuilder {
    pub(crate) fn new() -> Self {
        Self { buf: String::new() }
    }

    /// 写入 `s`；如果不是首次写入，会先写入一个空格。空串不写。
    pub(crate) fn write_leading(&mut self, s: &str) {
        if s.is_empty() {
            return;
        }
        if !self.buf.is_empty() {
            self.buf.push(' ');
        }
        self.buf.push_str(s);
    }

    pub(crate) fn into_string(self) -> String {
        self.buf
    }
}

#[cfg(test)]
mod tests {
    use super::StringBuilder;

    #[test]
    fn write_leading_skips_empty() {
        let mut buf = StringBuilder::new();
        buf.write_leading("");
        buf.write_leading("SELECT *");
        buf.write_leading("");
        buf.write_leading("FROM t");
        assert_eq!(buf.into_string(), "SELECT * FROM t");
    }
}
