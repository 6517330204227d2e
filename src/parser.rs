//! Definition file parser
//!
//! Reads parameter definitions from TOML, YAML or JSON files. Every format
//! uses a top-level `parameters` list whose entries are either a bare value
//! or a category table with `name` and `values` (or `children`).
//!
//! ```toml
//! [[parameters]]
//! name = "Quality"
//! values = ["High", "Low"]
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{ParamError, ParamResult};
use crate::model::{ParameterDefinition, ParameterTreeModel};

/// Supported definition file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefinitionFormat {
    Toml,
    Yaml,
    Json,
}

impl DefinitionFormat {
    /// Pick the format from a file extension (case-insensitive)
    pub fn from_path(path: &Path) -> ParamResult<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);

        match ext.as_deref() {
            Some("toml") => Ok(Self::Toml),
            Some("yaml") | Some("yml") => Ok(Self::Yaml),
            Some("json") => Ok(Self::Json),
            _ => Err(ParamError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct DefinitionFile {
    #[serde(default)]
    parameters: Vec<ParameterDefinition>,
}

/// Parse definitions from file content
pub fn parse_definitions(
    content: &str,
    format: DefinitionFormat,
) -> ParamResult<Vec<ParameterDefinition>> {
    let file: DefinitionFile = match format {
        DefinitionFormat::Toml => toml::from_str(content)?,
        // An empty YAML document is an empty definition set
        DefinitionFormat::Yaml if content.trim().is_empty() => DefinitionFile::default(),
        DefinitionFormat::Yaml => serde_yaml_ng::from_str(content)?,
        DefinitionFormat::Json => serde_json::from_str(content)?,
    };
    Ok(file.parameters)
}

/// Read and parse a definition file
pub fn load_definitions(path: &Path) -> ParamResult<Vec<ParameterDefinition>> {
    let format = DefinitionFormat::from_path(path)?;
    let content = fs::read_to_string(path)?;
    let definitions = parse_definitions(&content, format)?;
    tracing::debug!(
        path = %path.display(),
        ?format,
        count = definitions.len(),
        "loaded parameter definitions"
    );
    Ok(definitions)
}

/// Read a definition file and build the parameter model
pub fn load_model(path: &Path) -> ParamResult<ParameterTreeModel> {
    ParameterTreeModel::build(load_definitions(path)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(
            DefinitionFormat::from_path(Path::new("p.toml")).unwrap(),
            DefinitionFormat::Toml
        );
        assert_eq!(
            DefinitionFormat::from_path(Path::new("p.YML")).unwrap(),
            DefinitionFormat::Yaml
        );
        assert_eq!(
            DefinitionFormat::from_path(Path::new("dir/p.json")).unwrap(),
            DefinitionFormat::Json
        );
    }

    #[test]
    fn test_unsupported_extension() {
        let err = DefinitionFormat::from_path(Path::new("params.txt")).unwrap_err();
        assert!(matches!(err, ParamError::UnsupportedFormat { ref path } if *path == PathBuf::from("params.txt")));
        assert!(DefinitionFormat::from_path(Path::new("params")).is_err());
    }

    #[test]
    fn test_parse_toml() {
        let content = r#"
[[parameters]]
name = "Quality"
values = ["High", "Low"]

[[parameters]]
name = "MajorMovement"

[[parameters.children]]
name = "Path"
values = ["Straight", "Arc"]
"#;
        let defs = parse_definitions(content, DefinitionFormat::Toml).unwrap();

        assert_eq!(
            defs,
            vec![
                ParameterDefinition::with_values("Quality", ["High", "Low"]),
                ParameterDefinition::category(
                    "MajorMovement",
                    [ParameterDefinition::with_values("Path", ["Straight", "Arc"])]
                ),
            ]
        );
    }

    #[test]
    fn test_parse_yaml_mixed_values() {
        let content = r#"
parameters:
  - name: MajorMovement
    values:
      - Hold
      - name: Path
        values: [Straight, Arc]
"#;
        let defs = parse_definitions(content, DefinitionFormat::Yaml).unwrap();

        assert_eq!(
            defs,
            vec![ParameterDefinition::category(
                "MajorMovement",
                [
                    ParameterDefinition::value("Hold"),
                    ParameterDefinition::with_values("Path", ["Straight", "Arc"]),
                ]
            )]
        );
    }

    #[test]
    fn test_parse_json() {
        let content = r#"{"parameters": [{"name": "Quality", "values": ["High"]}]}"#;
        let defs = parse_definitions(content, DefinitionFormat::Json).unwrap();
        assert_eq!(defs, vec![ParameterDefinition::with_values("Quality", ["High"])]);
    }

    #[test]
    fn test_parse_empty_files() {
        assert!(parse_definitions("", DefinitionFormat::Toml).unwrap().is_empty());
        assert!(parse_definitions("", DefinitionFormat::Yaml).unwrap().is_empty());
        assert!(parse_definitions("{}", DefinitionFormat::Json).unwrap().is_empty());
    }

    #[test]
    fn test_parse_invalid_content() {
        let err = parse_definitions("parameters = [", DefinitionFormat::Toml).unwrap_err();
        assert!(matches!(err, ParamError::Toml(_)));

        let err = parse_definitions("{\"parameters\": [42]}", DefinitionFormat::Json).unwrap_err();
        assert!(matches!(err, ParamError::Json(_)));
    }

    #[test]
    fn test_load_model_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("params.yaml");
        fs::write(
            &path,
            "parameters:\n  - name: Quality\n    values: [High, Low]\n",
        )
        .unwrap();

        let model = load_model(&path).unwrap();
        assert_eq!(model.category_names().collect::<Vec<_>>(), ["Quality"]);
        assert!(model.is_leaf_name("Low"));
    }

    #[test]
    fn test_load_model_reports_conflicts() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("params.json");
        fs::write(
            &path,
            r#"{"parameters": [{"name": "Quality"}, {"name": "Quality"}]}"#,
        )
        .unwrap();

        let err = load_model(&path).unwrap_err();
        assert!(matches!(err, ParamError::NameConflict { .. }));
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_definitions(Path::new("/nonexistent/params.toml")).unwrap_err();
        assert!(matches!(err, ParamError::Io(_)));
    }
}
