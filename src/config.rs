use filterpath_mapping::MappingOptions;
use serde::Deserialize;
use std::path::Path;

/// Looked up in the working directory when no file is given (extension optional).
pub const DEFAULT_CONFIG_NAME: &str = "filterpath";

/// Environment variables prefixed with this override file settings,
/// e.g. `FILTERPATH_OUTPUT__PRETTY=false`.
pub const ENV_PREFIX: &str = "FILTERPATH";

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub mapping: MappingOptions,
    pub output: OutputSettings,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    /// List fields that resolved to nothing as `null` instead of omitting them.
    pub include_absent: bool,
    pub pretty: bool,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            include_absent: false,
            pretty: true,
        }
    }
}

impl Settings {
    /// Loads settings from `file` (required) or the optional default file,
    /// with environment variables layered on top.
    pub fn load(file: Option<&Path>) -> Result<Self, config::ConfigError> {
        Self::load_with_env(file, None)
    }

    /// Like [`Settings::load`], reading variables from `env` instead of the
    /// process environment when given.
    fn load_with_env(
        file: Option<&Path>,
        env: Option<config::Map<String, String>>,
    ) -> Result<Self, config::ConfigError> {
        let mut builder = config::Config::builder();

        builder = match file {
            Some(path) => builder.add_source(config::File::from(path).required(true)),
            None => builder.add_source(config::File::with_name(DEFAULT_CONFIG_NAME).required(false)),
        };

        builder = builder.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true)
                .source(env),
        );

        let settings: Settings = builder.build()?.try_deserialize()?;
        log::debug!("Loaded settings: {:?}", settings);
        Ok(settings)
    }
}
