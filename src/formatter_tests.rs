#[cfg(test)]
mod tests {
    use crate::error::FormatError;
    use crate::formatter::*;
    use crate::fragment::Fragment;
    use crate::modifiers::raw;
    use crate::style::IdentifierStyle;
    use crate::tests::{sql, unquoted};
    use crate::value::SqlValue;
    use pretty_assertions::assert_eq;
    use time::macros::{date, datetime, time};

    #[test]
    fn value_quotes_and_escapes_text() {
        assert_eq!(sql(value("Bob")), "'Bob'");
        assert_eq!(sql(value("I'm fine")), "'I''m fine'");
        assert_eq!(sql(value("")), "''");
    }

    #[test]
    fn value_text_round_trip() {
        for s in ["plain", "it's", "''", "a'b'c", "unicode ✓ '"] {
            let out = sql(value(s));
            let inner = &out[1..out.len() - 1];
            assert_eq!(inner.replace("''", "'"), s);
        }
    }

    #[test]
    fn value_scalars() {
        assert_eq!(sql(value(SqlValue::Null)), "NULL");
        assert_eq!(sql(value(None::<i64>)), "NULL");
        assert_eq!(sql(value(true)), "TRUE");
        assert_eq!(sql(value(false)), "FALSE");
        assert_eq!(sql(value(42)), "42");
        assert_eq!(sql(value(-7_i64)), "-7");
        assert_eq!(sql(value(u64::MAX)), "18446744073709551615");
        assert_eq!(sql(value(1.5)), "1.5");
        assert_eq!(sql(value(1.0)), "1.0");
        assert_eq!(sql(value(-3.0_f64)), "-3.0");
    }

    #[test]
    fn value_temporal() {
        assert_eq!(sql(value(date!(2013-01-02))), "'2013-01-02'");
        assert_eq!(sql(value(time!(23:59:01))), "'23:59:01'");
        assert_eq!(
            sql(value(datetime!(2019-04-24 12:23:34.123456))),
            "'2019-04-24 12:23:34.123456'"
        );
        assert_eq!(
            sql(value(datetime!(2019-04-24 12:23:34 -5))),
            "'2019-04-24 12:23:34-05:00'"
        );
        assert_eq!(
            sql(value(datetime!(2019-04-24 12:23:34 +05:30:15))),
            "'2019-04-24 12:23:34+05:30:15'"
        );
    }

    #[test]
    fn value_rejects_unsupported() {
        assert!(matches!(
            value(SqlValue::Bytes(vec![1, 2])),
            Err(FormatError::UnsupportedValue {
                formatter: "value",
                found: "bytes"
            })
        ));
        assert!(matches!(
            value(f64::NAN),
            Err(FormatError::UnsupportedValue { formatter: "value", .. })
        ));
        assert!(matches!(
            value(crate::pairs! { "a" => 1 }),
            Err(FormatError::UnsupportedValue { found: "pairs", .. })
        ));
    }

    #[test]
    fn value_maps_over_lists() {
        let out = value(vec![Fragment::from(1), Fragment::from("a"), Fragment::null()]).unwrap();
        assert_eq!(
            out,
            Fragment::List(vec![
                Fragment::text("1"),
                Fragment::text("'a'"),
                Fragment::text("NULL"),
            ])
        );
    }

    #[test]
    fn raw_passes_through_every_qualifier() {
        let r = raw("now() - interval '1 day'");
        assert_eq!(value(r.clone()).unwrap(), r);
        assert_eq!(identifier(r.clone()).unwrap(), r);
        assert_eq!(
            identifier_with_style(r.clone(), IdentifierStyle::DoubleQuoted).unwrap(),
            r
        );
        assert_eq!(paren(r.clone()).unwrap(), r);
    }

    #[test]
    fn raw_inside_list_is_untouched() {
        let out = value(vec![raw("DEFAULT"), Fragment::from("x")]).unwrap();
        assert_eq!(
            out,
            Fragment::List(vec![raw("DEFAULT"), Fragment::text("'x'")])
        );
    }

    #[test]
    fn identifier_styles() {
        let _g = unquoted();
        assert_eq!(sql(identifier("person")), "person");
        assert_eq!(
            sql(identifier_with_style("pe\"rson", IdentifierStyle::DoubleQuoted)),
            "\"pe\"\"rson\""
        );
        assert_eq!(
            sql(identifier_with_style("person", IdentifierStyle::Backtick)),
            "`person`"
        );
    }

    #[test]
    fn identifier_follows_scoped_default() {
        let _g = crate::style::set_default_identifier_style_scoped(IdentifierStyle::DoubleQuoted);
        assert_eq!(sql(identifier("order")), "\"order\"");
    }

    #[test]
    fn identifier_rejects_non_text() {
        assert!(matches!(
            identifier_with_style(5, IdentifierStyle::Unquoted),
            Err(FormatError::UnsupportedValue {
                formatter: "identifier",
                found: "integer"
            })
        ));
    }

    #[test]
    fn paren_wraps() {
        assert_eq!(sql(paren("a, b")), "(a, b)");
        assert_eq!(sql(paren(5)), "(5)");
        assert_eq!(
            paren(vec!["a", "b"]).unwrap(),
            Fragment::List(vec![Fragment::text("(a)"), Fragment::text("(b)")])
        );
    }

    #[test]
    fn joiners() {
        let items = || vec!["a", "b", "c"];
        assert_eq!(sql(concat_by_and(items())), "a AND b AND c");
        assert_eq!(sql(concat_by_or(items())), "a OR b OR c");
        assert_eq!(sql(concat_by_space(items())), "a b c");
        assert_eq!(sql(concat_by_comma(items())), "a, b, c");
        assert_eq!(sql(concat_by_comma(Vec::<&str>::new())), "");
    }

    #[test]
    fn joiners_pass_through_non_iterables() {
        assert_eq!(concat_by_and(5).unwrap(), Fragment::from(5));
        assert_eq!(concat_by_comma("a, b").unwrap(), Fragment::from("a, b"));
        assert_eq!(concat_by_space(raw("x y")).unwrap(), raw("x y"));
        assert!(concat_by_or(SqlValue::Null).unwrap().is_null());
    }

    #[test]
    fn joiners_require_text_elements() {
        assert!(matches!(
            concat_by_comma(vec![1, 2]),
            Err(FormatError::UnsupportedValue {
                formatter: "concat_by_comma",
                found: "integer"
            })
        ));
        assert!(matches!(
            concat_by_and(crate::pairs! { "a" => 1 }),
            Err(FormatError::UnsupportedValue { found: "pairs", .. })
        ));
    }

    #[test]
    fn joiner_accepts_raw_elements() {
        assert_eq!(
            sql(concat_by_comma(vec![raw("count(*)"), Fragment::from("name")])),
            "count(*), name"
        );
    }

    #[test]
    fn value_then_join_then_paren() {
        let v = VALUE.apply(Fragment::from(vec![1, 2, 3]), IdentifierStyle::Unquoted).unwrap();
        let v = CONCAT_BY_COMMA.apply(v, IdentifierStyle::Unquoted).unwrap();
        let v = PAREN.apply(v, IdentifierStyle::Unquoted).unwrap();
        assert_eq!(v.into_sql().unwrap(), "(1, 2, 3)");
    }

    #[test]
    fn custom_formatter_fn() {
        let upper = formatter_fn("upper", |x: Fragment, _| {
            Ok(match x.as_str() {
                Some(s) => Fragment::text(s.to_uppercase()),
                None => x,
            })
        });
        assert_eq!(upper.name(), "upper");
        assert_eq!(
            upper.format(Fragment::from("abc"), IdentifierStyle::Unquoted).unwrap(),
            Fragment::text("ABC")
        );
    }

    #[test]
    fn debug_shows_formatter_name() {
        let f: Box<dyn Formatter> = CONCAT_BY_AND.boxed();
        assert_eq!(format!("{f:?}"), "concat_by_and");
    }
}
