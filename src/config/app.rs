use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use ms_codec::Options;
use serde::Deserialize;

use crate::cli::{FormatArgs, ParseArgs};

use super::overlay::Overlay;

const CONFIG_FILE_NAME: &str = "ms.toml";
const LOCAL_CONFIG_FILES: [&str; 1] = ["ms.toml"];
const PROJECT_QUALIFIER: &str = "io";
const PROJECT_ORGANIZATION: &str = "ms-codec";
const PROJECT_APPLICATION: &str = "ms";

/// Fully materialized configuration for one invocation.
#[derive(Debug)]
pub struct AppConfig {
    pub config_file: Option<PathBuf>,
    pub options: Options,
}

impl AppConfig {
    /// Layers command-line flags over the configuration file over defaults.
    pub fn load(
        config: Option<&PathBuf>,
        cli_parse: ParseArgs,
        cli_format: FormatArgs,
    ) -> Result<Self> {
        let (file_config, config_path) = load_file_config(config)?;
        let FileConfig {
            parse: file_parse,
            format: file_format,
        } = file_config;

        let parse = file_parse.unwrap_or_default().overlay(cli_parse).build();
        let format = file_format.unwrap_or_default().overlay(cli_format).build();

        Ok(Self {
            config_file: config_path,
            options: Options { parse, format },
        })
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    #[serde(default)]
    parse: Option<ParseArgs>,
    #[serde(default)]
    format: Option<FormatArgs>,
}

fn load_file_config(path: Option<&PathBuf>) -> Result<(FileConfig, Option<PathBuf>)> {
    if let Some(provided) = path {
        let config = read_toml(provided)?;
        return Ok((config, Some(provided.clone())));
    }

    if let Some(default_path) = default_config_file_path() {
        if default_path.exists() {
            let config = read_toml(&default_path)?;
            return Ok((config, Some(default_path)));
        }
    }

    for candidate in LOCAL_CONFIG_FILES {
        let candidate_path = Path::new(candidate);
        if candidate_path.exists() {
            let config = read_toml(candidate_path)?;
            return Ok((config, Some(candidate_path.to_path_buf())));
        }
    }

    Ok((FileConfig::default(), None))
}

fn read_toml(path: &Path) -> Result<FileConfig> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    toml::from_str(&contents)
        .with_context(|| format!("failed to parse config file {}", path.display()))
}

fn default_config_file_path() -> Option<PathBuf> {
    ProjectDirs::from(PROJECT_QUALIFIER, PROJECT_ORGANIZATION, PROJECT_APPLICATION)
        .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ms_codec::ShowKey;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, contents: &str) -> PathBuf {
        let path = dir.path().join("ms.toml");
        fs::write(&path, contents).expect("write config");
        path
    }

    #[test]
    fn file_values_fill_unset_flags() {
        let temp = TempDir::new().expect("temp dir");
        let path = write_config(
            &temp,
            r#"
[parse]
compound = true

[format]
verbose = true
units = 2
omit = ["ms"]
"#,
        );

        let config = AppConfig::load(Some(&path), ParseArgs::default(), FormatArgs::default())
            .expect("load");
        assert_eq!(config.config_file, Some(path));
        assert!(config.options.parse.compound);
        assert!(!config.options.parse.unique);
        assert!(config.options.format.verbose);
        assert_eq!(config.options.format.units, Some(2));
        assert_eq!(config.options.format.omit, vec![ShowKey::Millis]);
        assert_eq!(config.options.format.seconds_digits, 1);
    }

    #[test]
    fn flags_override_file_values() {
        let temp = TempDir::new().expect("temp dir");
        let path = write_config(&temp, "[format]\nverbose = true\nms_digits = 2\n");

        let cli_format = FormatArgs {
            verbose: Some(false),
            ..FormatArgs::default()
        };
        let config = AppConfig::load(Some(&path), ParseArgs::default(), cli_format).expect("load");
        assert!(!config.options.format.verbose);
        assert_eq!(config.options.format.ms_digits, 2);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let temp = TempDir::new().expect("temp dir");
        let path = write_config(&temp, "[format]\ncolour = true\n");

        let err = AppConfig::load(Some(&path), ParseArgs::default(), FormatArgs::default())
            .expect_err("unknown key");
        assert!(err.to_string().contains("failed to parse config file"));
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let temp = TempDir::new().expect("temp dir");
        let path = temp.path().join("absent.toml");

        let err = AppConfig::load(Some(&path), ParseArgs::default(), FormatArgs::default())
            .expect_err("missing file");
        assert!(err.to_string().contains("failed to read config file"));
    }
}
