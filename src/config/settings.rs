use std::{
    borrow::Cow,
    fs,
    path::{Path, PathBuf},
};

use hashlink::LinkedHashMap;
use saphyr::{LoadableYamlNode, Scalar, Yaml};
use snafu::prelude::*;
use tracing::{debug, info};

const SETTINGS_FILE_NAME: &str = "dirtree.yaml";
const DEFAULT_INDENT: &str = " ";

fn get_settings_file_path(root: &Path) -> PathBuf {
    root.join(SETTINGS_FILE_NAME)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Emitted once per depth level in front of each listed name
    pub indent: String,
    pub prompt: Option<String>,
    /// Paths created before the first command is read
    pub preload: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            indent: DEFAULT_INDENT.to_string(),
            prompt: None,
            preload: Vec::new(),
        }
    }
}

impl Settings {
    /// Loads settings from an explicitly requested file, or from the default
    /// file under `root` when it is present.
    pub fn read(root: &Path, explicit: Option<&Path>) -> Result<Self, SettingsError> {
        match explicit {
            Some(path) => Self::from_path(path),
            None => {
                let path = get_settings_file_path(root);
                if path.is_file() {
                    Self::from_path(&path)
                } else {
                    info!("No settings file found, using defaults");
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn from_path(path: &Path) -> Result<Self, SettingsError> {
        debug!("Reading settings file: {}", path.display());
        let contents = fs::read_to_string(path).context(ReadSnafu {
            file_path: path.display().to_string(),
        })?;
        debug!("Successfully read settings file: {} bytes", contents.len());

        contents.as_str().try_into()
    }

    fn string_field(
        top_level: &LinkedHashMap<Yaml, Yaml>,
        field: &'static str,
    ) -> Result<Option<String>, SettingsError> {
        match top_level.get(&Yaml::Value(Scalar::String(Cow::Borrowed(field)))) {
            None | Some(Yaml::Value(Scalar::Null)) => Ok(None),
            Some(value) => value
                .as_str()
                .map(|s| Some(s.to_string()))
                .ok_or(SettingsError::InvalidField {
                    field,
                    expected: "a string",
                }),
        }
    }

    fn preload_field(top_level: &LinkedHashMap<Yaml, Yaml>) -> Result<Vec<String>, SettingsError> {
        let invalid = || SettingsError::InvalidField {
            field: "preload",
            expected: "a list of paths",
        };

        match top_level.get(&Yaml::Value(Scalar::String(Cow::Borrowed("preload")))) {
            None | Some(Yaml::Value(Scalar::Null)) => Ok(Vec::new()),
            Some(value) => value
                .as_sequence()
                .ok_or_else(invalid)?
                .iter()
                .map(|item| item.as_str().map(str::to_string).ok_or_else(invalid))
                .collect(),
        }
    }
}

impl TryFrom<&str> for Settings {
    type Error = SettingsError;

    fn try_from(contents: &str) -> Result<Self, Self::Error> {
        let documents = Yaml::load_from_str(contents).context(ParseSnafu)?;
        let document = documents.first().ok_or(SettingsError::MalformedConfig)?;

        let top_level = document
            .as_mapping()
            .ok_or(SettingsError::TopLevelNotMap)?;

        for key in top_level.keys() {
            match key.as_str() {
                Some("indent" | "prompt" | "preload") => {}
                _ => debug!("Ignoring unknown settings key: {:?}", key),
            }
        }

        let defaults = Settings::default();
        Ok(Settings {
            indent: Self::string_field(top_level, "indent")?.unwrap_or(defaults.indent),
            prompt: Self::string_field(top_level, "prompt")?,
            preload: Self::preload_field(top_level)?,
        })
    }
}

#[derive(Debug, Snafu)]
pub enum SettingsError {
    #[snafu(display("Failed to read the settings file: {}", file_path))]
    ReadError {
        file_path: String,
        source: std::io::Error,
    },
    #[snafu(display("Failed to parse the settings file"))]
    ParseError { source: saphyr::ScanError },
    #[snafu(display("Improperly formatted settings file"))]
    MalformedConfig,
    #[snafu(display("Top level of settings should be a map"))]
    TopLevelNotMap,
    #[snafu(display("Settings field '{}' should be {}", field, expected))]
    InvalidField {
        field: &'static str,
        expected: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    #[test]
    fn settings_from_full_document() {
        let yaml = r#"
indent: "  "
prompt: "> "
preload:
  - home/user
  - tmp
"#;
        let settings: Settings = yaml.try_into().unwrap();
        assert_eq!(
            settings,
            Settings {
                indent: "  ".to_string(),
                prompt: Some("> ".to_string()),
                preload: vec!["home/user".to_string(), "tmp".to_string()],
            }
        );
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let settings: Settings = "other: value".try_into().unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.indent, " ");
    }

    #[test]
    fn null_fields_fall_back_to_defaults() {
        let settings: Settings = "prompt: ~\npreload:".try_into().unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn empty_document_is_malformed() {
        let result: Result<Settings, _> = "".try_into();
        assert!(matches!(result, Err(SettingsError::MalformedConfig)));
    }

    #[test]
    fn invalid_yaml_is_a_parse_error() {
        let result: Result<Settings, _> = "invalid: yaml: content: [unclosed".try_into();
        assert!(matches!(result, Err(SettingsError::ParseError { .. })));
    }

    #[rstest]
    #[case("- item1\n- item2")]
    #[case("just a string")]
    fn top_level_must_be_a_map(#[case] yaml: &str) {
        let result: Result<Settings, _> = yaml.try_into();
        assert!(matches!(result, Err(SettingsError::TopLevelNotMap)));
    }

    #[rstest]
    #[case("indent: [a, b]", "indent")]
    #[case("prompt: {a: b}", "prompt")]
    #[case("preload: home", "preload")]
    #[case("preload:\n  - [nested]", "preload")]
    fn wrongly_typed_fields_are_rejected(#[case] yaml: &str, #[case] expected_field: &str) {
        let result: Result<Settings, _> = yaml.try_into();
        match result {
            Err(SettingsError::InvalidField { field, .. }) => assert_eq!(field, expected_field),
            other => panic!("Expected InvalidField, got {other:?}"),
        }
    }

    #[test]
    fn from_path_reads_file() {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        writeln!(file, "indent: \"\\t\"").expect("Failed to write to temp file");

        let settings = Settings::from_path(file.path()).unwrap();
        assert_eq!(settings.indent, "\t");
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let root = TempDir::new().expect("Failed to create temp directory");
        let result = Settings::read(
            root.path(),
            Some(Path::new("/this/path/does/not/exist.yaml")),
        );
        assert!(matches!(result, Err(SettingsError::ReadError { .. })));
    }

    #[test]
    fn absent_default_file_yields_defaults() {
        let root = TempDir::new().expect("Failed to create temp directory");

        let settings = Settings::read(root.path(), None).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn default_file_under_root_is_picked_up() {
        let root = TempDir::new().expect("Failed to create temp directory");
        fs::write(root.path().join(SETTINGS_FILE_NAME), "prompt: \"$ \"\n")
            .expect("Failed to write settings file");

        let settings = Settings::read(root.path(), None).unwrap();
        assert_eq!(settings.prompt.as_deref(), Some("$ "));
        assert_eq!(settings.indent, DEFAULT_INDENT);
    }

    #[test]
    fn preload_entries_must_all_be_strings() {
        let result: Result<Settings, _> = "preload:\n  - home\n  - [nested]".try_into();
        assert!(matches!(
            result,
            Err(SettingsError::InvalidField { field: "preload", .. })
        ));
    }
}
