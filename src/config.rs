use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::Deserialize;

use crate::consts::{CONFIG_BASENAME, DEFAULT_OUTPUT, ENV_PREFIX};
use crate::parser::MalformedRegistry;

/// One extra entry for the malformed-document registry.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct MalformedEntry {
    pub file: String,
    pub trailing_tokens: usize,
}

/// Settings merged from `rankings.{toml,json,yaml}` and `RANKINGS_*` variables.
#[derive(Debug, Default, Deserialize)]
pub struct Settings {
    pub input_dir: Option<PathBuf>,
    pub output: Option<PathBuf>,
    #[serde(default)]
    pub malformed: Vec<MalformedEntry>,
}

/// Fully resolved settings for a batch run.
#[derive(Debug)]
pub struct RunConfig {
    pub input_dir: PathBuf,
    pub output: PathBuf,
    pub registry: MalformedRegistry,
}

impl Settings {
    /// An explicit `config_file` must exist; the default `rankings.*` is optional.
    pub fn load(config_file: Option<&Path>) -> Result<Settings> {
        let file = match config_file {
            Some(path) => ::config::File::from(path).required(true),
            None => ::config::File::with_name(CONFIG_BASENAME).required(false),
        };

        ::config::Config::builder()
            .add_source(file)
            .add_source(::config::Environment::with_prefix(ENV_PREFIX))
            .build()
            .context("Failed to load configuration")?
            .try_deserialize()
            .context("Invalid configuration")
    }

    /// Built-in entries plus configured ones; configured entries win.
    pub fn registry(&self) -> MalformedRegistry {
        let mut registry = MalformedRegistry::default();
        for entry in &self.malformed {
            registry.insert(entry.file.clone(), entry.trailing_tokens);
        }
        registry
    }

    /// Command-line paths take precedence over file and environment values.
    pub fn resolve(self, input_dir: Option<PathBuf>, output: Option<PathBuf>) -> Result<RunConfig> {
        let registry = self.registry();
        let Some(input_dir) = input_dir.or(self.input_dir) else {
            bail!("No input directory: pass --input-dir, set {ENV_PREFIX}_INPUT_DIR or add input_dir to {CONFIG_BASENAME}.toml");
        };
        if !input_dir.is_dir() {
            bail!("Input directory {} does not exist", input_dir.display());
        }
        let output = output
            .or(self.output)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));

        Ok(RunConfig {
            input_dir,
            output,
            registry,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rankings.toml");
        std::fs::write(
            &path,
            r#"
input_dir = "data/World Ranking Data"
output = "out/MS_Rankings_Top_200.xlsx"

[[malformed]]
file = "WR 2016-01-05 (Week 1).xlsx"
trailing_tokens = 2
"#,
        )
        .unwrap();

        let settings = Settings::load(Some(&path)).unwrap();
        assert_eq!(settings.input_dir, Some(PathBuf::from("data/World Ranking Data")));
        assert_eq!(settings.output, Some(PathBuf::from("out/MS_Rankings_Top_200.xlsx")));

        let registry = settings.registry();
        assert_eq!(registry.trailing_tokens("WR 2016-01-05 (Week 1).xlsx"), 2);
        assert_eq!(registry.trailing_tokens("WR 2019-10-01 (Week 40).xlsx"), 4);
    }

    #[test]
    fn explicit_file_must_exist() {
        assert!(Settings::load(Some(Path::new("tests/fixtures/no_such_config.toml"))).is_err());
    }

    #[test]
    fn flags_override_settings() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings {
            input_dir: Some(PathBuf::from("/definitely/not/here")),
            output: Some(PathBuf::from("from_file.xlsx")),
            malformed: Vec::new(),
        };
        let run = settings
            .resolve(Some(dir.path().to_path_buf()), Some(PathBuf::from("from_flag.csv")))
            .unwrap();
        assert_eq!(run.input_dir, dir.path());
        assert_eq!(run.output, PathBuf::from("from_flag.csv"));
        assert_eq!(run.registry, MalformedRegistry::default());
    }

    #[test]
    fn default_output() {
        let dir = tempfile::tempdir().unwrap();
        let run = Settings::default().resolve(Some(dir.path().to_path_buf()), None).unwrap();
        assert_eq!(run.output, PathBuf::from(DEFAULT_OUTPUT));
    }

    #[test]
    fn input_dir_required() {
        assert!(Settings::default().resolve(None, None).is_err());
        assert!(Settings::default()
            .resolve(Some(PathBuf::from("/definitely/not/here")), None)
            .is_err());
    }
}
