//! Reusable definition files.

pub const PARAMETERS_TOML: &str = r#"
[[parameters]]
name = "Quality"
values = ["High", "Low"]

[[parameters]]
name = "MajorMovement"
values = ["Hold", { name = "Path", values = ["Straight", "Arc"] }]

[[parameters]]
name = "MajorLocation"
values = ["Head", "Chest"]
"#;

pub const PARAMETERS_YAML: &str = r#"
parameters:
  - name: Quality
    values: [High, Low]
  - name: MajorLocation
    values: [Head, Chest]
"#;

pub const CONFLICT_JSON: &str =
    r#"{"parameters": [{"name": "Quality", "values": ["High"]}, {"name": "Quality", "values": ["Low"]}]}"#;
