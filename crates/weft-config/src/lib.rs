use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const CONFIG_FILE_NAME: &str = "weft.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid input pattern `{pattern}`: {source}")]
    InputPatternError {
        pattern: String,
        source: glob::PatternError,
    },

    #[error("Failed to expand input pattern: {0}")]
    InputGlobError(#[from] glob::GlobError),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Root that tangled `file:` outputs are written under.
    pub source_output_dir: Option<PathBuf>,
    /// Where woven HTML goes; beside each input when unset.
    pub doc_output_dir: Option<PathBuf>,
    /// Shared `key: value` metadata file.
    pub metadata: Option<PathBuf>,
    /// Glob patterns for input documents.
    pub inputs: Vec<String>,
    pub weave: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_output_dir: None,
            doc_output_dir: None,
            metadata: None,
            inputs: Vec::new(),
            weave: true,
        }
    }
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        // Expand shell variables and tilde in the loaded paths
        config.expand_paths();

        Ok(Some(config))
    }

    /// Loads `weft.toml` from the working directory, if there is one.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        Self::load_from_path(Self::config_path())
    }

    pub fn config_path() -> PathBuf {
        PathBuf::from(CONFIG_FILE_NAME)
    }

    /// Expands every input pattern, in pattern order. A pattern that
    /// matches nothing contributes nothing.
    pub fn resolve_inputs(&self) -> Result<Vec<PathBuf>, ConfigError> {
        let mut paths = Vec::new();
        for pattern in &self.inputs {
            let pattern = shellexpand::full(pattern)
                .map(|p| p.into_owned())
                .unwrap_or_else(|_| pattern.clone());
            let matches = glob::glob(&pattern).map_err(|source| ConfigError::InputPatternError {
                pattern: pattern.clone(),
                source,
            })?;
            for path in matches {
                let path = path?;
                if !paths.contains(&path) {
                    paths.push(path);
                }
            }
        }
        Ok(paths)
    }

    fn expand_paths(&mut self) {
        for path in [
            &mut self.source_output_dir,
            &mut self.doc_output_dir,
            &mut self.metadata,
        ]
        .into_iter()
        .flatten()
        {
            if let Some(expanded) = Self::expand_path(path) {
                *path = expanded;
            }
        }
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_weave_and_no_directories() {
        let config: Config = toml::from_str("").unwrap();

        assert_eq!(config, Config::default());
        assert!(config.weave);
        assert!(config.inputs.is_empty());
    }

    #[test]
    fn test_expand_path_with_tilde() {
        let path = PathBuf::from("~/test/path");
        let expanded = Config::expand_path(&path);

        assert!(expanded.is_some());
        let expanded = expanded.unwrap();
        assert!(!expanded.to_string_lossy().starts_with('~'));
        assert!(expanded.to_string_lossy().contains("test/path"));
    }

    #[test]
    fn test_expand_path_with_relative_path() {
        let path = PathBuf::from("relative/path");
        let expanded = Config::expand_path(&path).unwrap();

        assert_eq!(expanded, path);
    }

    #[test]
    fn test_load_config_file_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let non_existent_config = temp_dir.path().join("nonexistent.toml");

        let result = Config::load_from_path(&non_existent_config).unwrap();

        assert!(result.is_none());
    }

    #[test]
    fn test_load_config_fields() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("weft.toml");
        std::fs::write(
            &config_file,
            "source_output_dir = \"/tmp/build\"\ninputs = [\"docs/*.md\"]\nweave = false\n",
        )
        .unwrap();
        let expected = Config {
            source_output_dir: Some(PathBuf::from("/tmp/build")),
            inputs: vec!["docs/*.md".to_string()],
            weave: false,
            ..Config::default()
        };

        let loaded_config = Config::load_from_path(&config_file).unwrap().unwrap();

        assert_eq!(loaded_config, expected);
    }

    #[test]
    fn test_config_with_env_var_and_tilde_in_toml() {
        unsafe {
            env::set_var("WEFT_TEST_OUT", "/custom/out");
        }
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("weft.toml");
        std::fs::write(
            &config_file,
            "source_output_dir = \"$WEFT_TEST_OUT/src\"\nmetadata = \"~/meta.txt\"\n",
        )
        .unwrap();

        let config = Config::load_from_path(&config_file).unwrap().unwrap();

        assert_eq!(config.source_output_dir, Some(PathBuf::from("/custom/out/src")));
        let metadata = config.metadata.unwrap();
        assert!(!metadata.to_string_lossy().starts_with('~'));
        assert!(metadata.ends_with("meta.txt"));

        unsafe {
            env::remove_var("WEFT_TEST_OUT");
        }
    }

    #[test]
    fn test_parse_error_names_the_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("weft.toml");
        std::fs::write(&config_file, "weave = \"sometimes\"\n").unwrap();

        let err = Config::load_from_path(&config_file).unwrap_err();

        assert!(matches!(err, ConfigError::ConfigParseError { .. }));
        assert!(err.to_string().contains("weft.toml"));
    }

    #[test]
    fn test_resolve_inputs_expands_globs_once_each() {
        let temp_dir = TempDir::new().unwrap();
        for name in ["b.md", "a.md", "notes.txt"] {
            std::fs::write(temp_dir.path().join(name), "").unwrap();
        }
        let dir = temp_dir.path().to_string_lossy();
        let config = Config {
            inputs: vec![format!("{dir}/*.md"), format!("{dir}/a.md")],
            ..Config::default()
        };

        let inputs = config.resolve_inputs().unwrap();

        assert_eq!(
            inputs,
            vec![temp_dir.path().join("a.md"), temp_dir.path().join("b.md")]
        );
    }

    #[test]
    fn test_bad_pattern_is_reported() {
        let config = Config {
            inputs: vec!["[".to_string()],
            ..Config::default()
        };

        assert!(matches!(
            config.resolve_inputs(),
            Err(ConfigError::InputPatternError { .. })
        ));
    }
}
