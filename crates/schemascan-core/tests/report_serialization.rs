use schemascan_core::{Report, RuleEngine, Table, build_report};

#[test]
fn serializes_report_deterministically() {
    let tables = vec![
        Table {
            name: "audit".to_string(),
            columns: Vec::new(),
            indexes: Vec::new(),
        },
        Table {
            name: "accounts".to_string(),
            columns: Vec::new(),
            indexes: vec![schemascan_core::Index {
                name: "PRIMARY".to_string(),
                column_name: "id".to_string(),
            }],
        },
    ];
    let report = build_report(&tables, &RuleEngine).expect("build report");

    let json = serde_json::to_string_pretty(&report).expect("serialize report");
    let expected = r#"{
  "tables": {
    "audit": [
      {
        "kind": "missing_primary_key",
        "table_name": "audit",
        "issue": "Table 'audit' does not have a primary key.",
        "suggestion": "Consider adding a primary key.",
        "remediation_sql": "ALTER TABLE audit ADD PRIMARY KEY (column_name);"
      }
    ],
    "accounts": []
  }
}"#;
    assert_eq!(json, expected);

    let parsed: Report = serde_json::from_str(&json).expect("parse report");
    assert_eq!(parsed, report);
}
