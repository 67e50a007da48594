pub mod config {
    use crate::backend::Backend;
    use crate::errors::ConfigError;
    use serde::Deserialize;
    use std::fs;
    use std::path::Path;

    #[derive(Debug, Clone, Deserialize, Default)]
    #[serde(deny_unknown_fields)]
    pub struct GenerateConfig {
        pub files: Option<usize>,
        pub deps: Option<usize>,
        pub modules: Option<usize>,
        pub backends: Option<Vec<Backend>>, // "cmake" | "meique"
        pub jobs: Option<bool>,
    }

    #[derive(Debug, Clone, Deserialize, Default)]
    #[serde(deny_unknown_fields)]
    pub struct Config {
        pub generate: Option<GenerateConfig>,
    }

    /// # Errors
    /// Returns `ConfigError` if the file cannot be read, is not valid TOML,
    /// or contains unknown keys or backend names.
    pub fn load_config_at(path: &Path) -> Result<Config, ConfigError> {
        let data = fs::read_to_string(path)?;
        Ok(toml::from_str::<Config>(&data)?)
    }
}
