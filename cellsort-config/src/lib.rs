//! Loader for cellsort configuration with YAML + environment overlays.
//!
//! Sources are merged in the order they are added, with `CELLSORT_`-prefixed
//! environment variables applied last. Nested keys use `__` as separator, so
//! `CELLSORT_SORTER__ORDERING=utf16` overrides `sorter.ordering`.
//!
//! ```yaml
//! version: "1"
//! sorter:
//!   ordering: utf16   # or code_point (default)
//!   trim: true
//! ```
use cellsort_common::{CellsortError, Result, SorterOptions};
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Deserializer, de};
use serde_json::Value;
use std::path::{Path, PathBuf};

const MAXIMUM_ENV_EXPANSION_DEPTH: usize = 8;
const ENV_PREFIX: &str = "CELLSORT";
const DEFAULT_FILE_NAME: &str = "cellsort.yaml";

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CellsortConfig {
    /// Accepts `"1"`, `1` or `0.1`; numbers are kept in their printed form.
    #[serde(deserialize_with = "version_string")]
    pub version: Option<String>,
    /// Options handed to `cellsort_html::HtmlSorter`.
    pub sorter: SorterOptions,
}

/// Location of the per-user config file, e.g. `~/.config/cellsort/cellsort.yaml`.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("cellsort").join(DEFAULT_FILE_NAME))
}

fn version_string<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(Value::Bool(b)) => Ok(Some(b.to_string())),
        Some(other) => Err(de::Error::custom(format!(
            "invalid version `{other}`, expected a string or number"
        ))),
    }
}

fn expand_env_in_value(v: &mut Value) {
    match v {
        Value::String(s) if s.contains('$') => {
            let mut cur = std::mem::take(s);
            for _ in 0..MAXIMUM_ENV_EXPANSION_DEPTH {
                let Ok(expanded) = shellexpand::env(&cur).map(|cow| cow.into_owned()) else {
                    break;
                };
                if expanded == cur {
                    break;
                }
                cur = expanded;
            }
            // Placeholders are quoted in YAML, so booleans arrive as strings.
            *v = match cur.as_str() {
                "true" => Value::Bool(true),
                "false" => Value::Bool(false),
                _ => Value::String(cur),
            };
        }
        Value::Array(arr) => arr.iter_mut().for_each(expand_env_in_value),
        Value::Object(obj) => obj.values_mut().for_each(expand_env_in_value),
        _ => {}
    }
}

/// Builder over the `config` crate. Files and snippets are layered in call
/// order; the environment overlay always wins.
pub struct CellsortConfigLoader {
    builder: config::ConfigBuilder<config::builder::DefaultState>,
    sources: usize,
}

impl Default for CellsortConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl CellsortConfigLoader {
    /// An empty loader; with no sources `load` yields defaults.
    ///
    /// ```
    /// use cellsort_common::SorterOptions;
    /// use cellsort_config::CellsortConfigLoader;
    ///
    /// let config = CellsortConfigLoader::new().load().expect("defaults");
    /// assert_eq!(config.sorter, SorterOptions::default());
    /// ```
    pub fn new() -> Self {
        Self {
            builder: Config::builder(),
            sources: 0,
        }
    }

    /// Attach a required YAML/TOML/JSON file; the format is inferred by suffix.
    pub fn with_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.builder = self
            .builder
            .add_source(File::from(path.as_ref()).required(true));
        self.sources += 1;
        self
    }

    /// Attach a file that may be absent.
    pub fn with_optional_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.builder = self
            .builder
            .add_source(File::from(path.as_ref()).required(false));
        self.sources += 1;
        self
    }

    /// Attach the per-user file from [`default_config_path`], if a config
    /// directory can be resolved at all.
    pub fn with_default_file(self) -> Self {
        match default_config_path() {
            Some(path) => self.with_optional_file(path),
            None => {
                tracing::debug!("no user config directory; skipping default config file");
                self
            }
        }
    }

    /// Merge an inline YAML snippet.
    ///
    /// ```
    /// use cellsort_common::TextOrdering;
    /// use cellsort_config::CellsortConfigLoader;
    ///
    /// let cfg = CellsortConfigLoader::new()
    ///     .with_yaml_str(
    ///         r#"
    /// version: "test"
    /// sorter:
    ///   ordering: utf16
    /// "#,
    ///     )
    ///     .load()
    ///     .unwrap();
    ///
    /// assert_eq!(cfg.version.as_deref(), Some("test"));
    /// assert_eq!(cfg.sorter.ordering, TextOrdering::Utf16);
    /// assert!(cfg.sorter.trim);
    /// ```
    pub fn with_yaml_str(mut self, yaml: &str) -> Self {
        self.builder = self
            .builder
            .add_source(File::from_str(yaml, FileFormat::Yaml));
        self.sources += 1;
        self
    }

    /// Consume the builder and deserialize the merged sources.
    ///
    /// `${VAR}` placeholders in string values are expanded before the typed
    /// structs are materialised.
    ///
    /// ```
    /// use cellsort_common::TextOrdering;
    /// use cellsort_config::CellsortConfigLoader;
    ///
    /// unsafe { std::env::set_var("TABLE_ORDERING", "utf16"); }
    ///
    /// let config = CellsortConfigLoader::new()
    ///     .with_yaml_str("sorter:\n  ordering: \"${TABLE_ORDERING}\"\n")
    ///     .load()
    ///     .expect("valid configuration");
    ///
    /// assert_eq!(config.sorter.ordering, TextOrdering::Utf16);
    ///
    /// unsafe { std::env::remove_var("TABLE_ORDERING"); }
    /// ```
    pub fn load(self) -> Result<CellsortConfig> {
        let sources = self.sources;
        let cfg = self
            .builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(config_error)?;

        let mut v: Value = cfg.try_deserialize().map_err(config_error)?;
        expand_env_in_value(&mut v);

        let typed: CellsortConfig =
            serde_json::from_value(v).map_err(|e| CellsortError::Config(e.to_string()))?;

        tracing::debug!(
            sources,
            ordering = ?typed.sorter.ordering,
            trim = typed.sorter.trim,
            "cellsort configuration loaded"
        );
        Ok(typed)
    }
}

fn config_error(e: config::ConfigError) -> CellsortError {
    CellsortError::Config(e.to_string())
}
