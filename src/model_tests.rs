#[cfg(test)]
mod tests {
    use crate::model::{ColumnValue, Model, ModelError, ModelOptions, arrange};
    use crate::value::SqlValue;
    use pretty_assertions::assert_eq;

    fn s(v: &str) -> SqlValue {
        SqlValue::from(v)
    }

    fn person_rows() -> Vec<Vec<SqlValue>> {
        vec![
            vec![s("andy"), s("Andy First"), s("andy@example.com")],
            vec![s("andy"), s("Andy First"), s("andy@work.example")],
            vec![s("mosky"), s("Mosky Liu"), s("mosky@example.com")],
            vec![s("andy"), s("Andy First"), s("andy@late.example")],
        ]
    }

    const COLUMNS: [&str; 3] = ["person_id", "name", "email"];

    #[test]
    fn model_columns_and_rows() {
        let m = Model::new(COLUMNS, person_rows(), ModelOptions::default()).unwrap();
        assert_eq!(m.len(), 4);
        assert_eq!(m.column_names().collect::<Vec<_>>(), COLUMNS.to_vec());
        assert_eq!(
            m.column("person_id").unwrap(),
            &[s("andy"), s("andy"), s("mosky"), s("andy")]
        );
        assert_eq!(
            m.row(2).unwrap(),
            vec![&s("mosky"), &s("Mosky Liu"), &s("mosky@example.com")]
        );
        assert_eq!(m.row(4), None);
        assert_eq!(m.column("missing"), None);
    }

    #[test]
    fn squashed_columns_return_first_value() {
        let options = ModelOptions::default().squashed(["person_id", "name"]);
        let m = Model::new(COLUMNS, person_rows(), options).unwrap();
        assert_eq!(m.get("name"), Some(ColumnValue::Single(Some(&s("Andy First")))));
        match m.get("email") {
            Some(ColumnValue::Column(cells)) => assert_eq!(cells.len(), 4),
            other => panic!("expected full column, got {other:?}"),
        }
        assert_eq!(m.column("name").unwrap().len(), 4);
    }

    #[test]
    fn arrange_groups_consecutive_rows() {
        let options = ModelOptions::default().squashed(["person_id", "name"]);
        let groups = arrange(COLUMNS, person_rows(), &["person_id"], options).unwrap();
        assert_eq!(groups.len(), 3);
        assert_eq!(groups[0].len(), 2);
        assert_eq!(groups[1].len(), 1);
        assert_eq!(groups[2].len(), 1);
        assert_eq!(
            groups[0].get("person_id"),
            Some(ColumnValue::Single(Some(&s("andy"))))
        );
        assert_eq!(
            groups[0].get("email"),
            Some(ColumnValue::Column(
                &[s("andy@example.com"), s("andy@work.example")][..]
            ))
        );
        assert_eq!(
            groups[1].get("name"),
            Some(ColumnValue::Single(Some(&s("Mosky Liu"))))
        );
    }

    #[test]
    fn arrange_by_multiple_columns() {
        let rows = vec![
            vec![SqlValue::I64(1), SqlValue::I64(1)],
            vec![SqlValue::I64(1), SqlValue::I64(2)],
            vec![SqlValue::I64(1), SqlValue::I64(2)],
        ];
        let groups = arrange(["a", "b"], rows, &["a", "b"], ModelOptions::default()).unwrap();
        assert_eq!(groups.iter().map(Model::len).collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn arrange_empty_rows() {
        let groups = arrange(COLUMNS, Vec::new(), &["person_id"], ModelOptions::default()).unwrap();
        assert!(groups.is_empty());
    }

    #[test]
    fn arrange_unknown_column() {
        assert_eq!(
            arrange(COLUMNS, person_rows(), &["nope"], ModelOptions::default()),
            Err(ModelError::UnknownColumn("nope".to_string()))
        );
    }

    #[test]
    fn row_width_mismatch() {
        let rows = vec![vec![s("a")], vec![s("b"), s("c")]];
        assert_eq!(
            Model::new(["x"], rows, ModelOptions::default()),
            Err(ModelError::RowWidth {
                row: 1,
                found: 2,
                expected: 1
            })
        );
    }

    #[test]
    fn empty_group_squashed_is_none() {
        let m = Model::new(
            ["x"],
            Vec::new(),
            ModelOptions::default().squashed(["x"]),
        )
        .unwrap();
        assert!(m.is_empty());
        assert_eq!(m.get("x"), Some(ColumnValue::Single(None)));
    }
}
