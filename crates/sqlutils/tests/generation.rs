use std::io::Write;

use sqlutils::{
    col_names, gen_create_sql, gen_insert_sql, gen_merge_update_insert_sql, number_cols,
    trans_cols, trans_date_cols, ColumnSpec, GeneratorConfig, InsertOptions, MergeOptions,
    SqlGenError, SqlValue,
};

const ORDERS_JSON: &str = r#"[
    ["ORDER_ID", "NUMBER(12)"],
    ["CUSTOMER", "VARCHAR2(64)"],
    ["PLACED_AT", "DATE"],
    ["AMOUNT", "number(10,2)"],
    ["NOTE", "CLOB"]
]"#;

fn orders() -> ColumnSpec {
    ColumnSpec::from_json_str(ORDERS_JSON).expect("orders spec should parse")
}

#[test]
fn spec_from_file_drives_every_generator() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(ORDERS_JSON.as_bytes()).unwrap();
    let spec = ColumnSpec::from_json_file(file.path()).unwrap();
    assert_eq!(spec, orders());

    assert_eq!(
        gen_create_sql("ORDERS", &spec),
        "create table ORDERS(ORDER_ID NUMBER(12),\nCUSTOMER VARCHAR2(64),\nPLACED_AT DATE,\nAMOUNT number(10,2),\nNOTE CLOB)"
    );

    let opts = GeneratorConfig::oracle_dates().insert_options();
    assert_eq!(
        gen_insert_sql("ORDERS", &spec, &opts),
        "insert into ORDERS(ORDER_ID,CUSTOMER,PLACED_AT,AMOUNT,NOTE) \
         values(TO_NUMBER(:1),NVL(:2, null),TO_DATE(:3, 'YYYY-MM-DD HH24:MI:SS'),TO_NUMBER(:4),NVL(:5, null))"
    );
}

#[test]
fn helpers_agree_on_column_classes() {
    let spec = orders();
    assert_eq!(col_names(&spec).len(), spec.len());
    assert_eq!(number_cols(&spec), vec!["ORDER_ID", "AMOUNT"]);

    let fills = trans_cols(&spec);
    assert_eq!(fills.keys().collect::<Vec<_>>(), vec!["AMOUNT", "CUSTOMER", "ORDER_ID"]);
    assert_eq!(fills["CUSTOMER"], SqlValue::Text(String::new()));

    let dates = trans_date_cols(&spec);
    assert_eq!(serde_json::to_string(&dates).unwrap(), r#"{"PLACED_AT":0}"#);
    assert_eq!(
        serde_json::to_string(&fills).unwrap(),
        r#"{"AMOUNT":0.0,"CUSTOMER":"","ORDER_ID":0.0}"#
    );
}

#[test]
fn merge_update_clause_follows_spec_order() {
    let opts = MergeOptions::new(["d.ORDER_ID=s.ORDER_ID"]).exclude(["order_id"]);
    let sql = gen_merge_update_insert_sql("ORDERS_STAGE", "ORDERS", &orders(), &opts);

    let update = sql
        .split("UPDATE SET\n")
        .nth(1)
        .and_then(|rest| rest.split("\nWHEN NOT MATCHED THEN").next())
        .unwrap();
    assert_eq!(
        update,
        "d.CUSTOMER=s.CUSTOMER,\nd.PLACED_AT=s.PLACED_AT,\nd.AMOUNT=s.AMOUNT,\nd.NOTE=s.NOTE"
    );

    for keyword in [
        "merge into ORDERS d",
        "USING(select  * from ORDERS_STAGE) s",
        "ON (d.ORDER_ID=s.ORDER_ID)",
        "WHEN MATCHED THEN",
        "WHEN NOT MATCHED THEN",
        "INSERT(ORDER_ID,\nCUSTOMER,",
        "VALUES (s.ORDER_ID,\ns.CUSTOMER,",
    ] {
        assert!(sql.contains(keyword), "missing {:?} in\n{}", keyword, sql);
    }
}

#[test]
fn merge_is_stable_across_calls() {
    let opts = MergeOptions::new(["d.ORDER_ID=s.ORDER_ID"]).exclude(["ORDER_ID"]);
    let first = gen_merge_update_insert_sql("S", "D", &orders(), &opts);
    for _ in 0..16 {
        assert_eq!(gen_merge_update_insert_sql("S", "D", &orders(), &opts), first);
    }
}

#[test]
fn insert_flags_are_independent() {
    let spec = orders();
    let plain = gen_insert_sql("ORDERS", &spec, &InsertOptions::default().deal_null(false));
    assert!(!plain.contains("NVL"));
    assert!(!plain.contains("TO_DATE"));
    assert!(plain.ends_with("values(TO_NUMBER(:1),:2,:3,TO_NUMBER(:4),:5)"));
}

#[test]
fn malformed_spec_is_invalid_argument() {
    let err = ColumnSpec::from_json_str(r#"[["ID", "NUMBER"], ["NAME", "VARCHAR2(8)", "extra"]]"#)
        .unwrap_err();
    match err {
        SqlGenError::InvalidArgument(msg) => assert!(msg.contains("entry 1"), "{}", msg),
        other => panic!("unexpected error: {:?}", other),
    }
}
