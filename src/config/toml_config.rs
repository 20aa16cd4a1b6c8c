use crate::core::counter::CounterOptions;
use crate::core::posts::JSONPLACEHOLDER_BASE_URL;
use crate::utils::error::{KitError, Result};
use crate::utils::validation::{validate_bounds, validate_one_of, validate_url, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub posts: PostsConfig,
    #[serde(default)]
    pub counter: CounterConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostsConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for PostsConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

fn default_base_url() -> String {
    JSONPLACEHOLDER_BASE_URL.to_string()
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CounterConfig {
    pub initial_value: Option<i64>,
    pub min_value: Option<i64>,
    pub max_value: Option<i64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub json: Option<bool>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(KitError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| KitError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${API_KEY})，未定義的保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| KitError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn counter_options(&self) -> CounterOptions {
        CounterOptions {
            initial_value: self.counter.initial_value,
            min_value: self.counter.min_value,
            max_value: self.counter.max_value,
        }
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging.level.as_deref()
    }

    pub fn json_logs(&self) -> bool {
        self.logging.json.unwrap_or(false)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_url("posts.base_url", &self.posts.base_url)?;

        validate_bounds(
            "counter.min_value..counter.max_value",
            self.counter.min_value.unwrap_or(0),
            self.counter.max_value.unwrap_or(i64::MAX),
        )?;

        if let Some(level) = self.log_level() {
            validate_one_of("logging.level", level, &LOG_LEVELS)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();

        assert_eq!(config.posts.base_url, "https://jsonplaceholder.typicode.com");
        assert_eq!(config.counter_options(), CounterOptions::default());
        assert_eq!(config.log_level(), None);
        assert!(!config.json_logs());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[posts]
base_url = "http://127.0.0.1:3000"

[counter]
initial_value = 5
max_value = 10

[logging]
level = "debug"
json = true
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.posts.base_url, "http://127.0.0.1:3000");
        assert_eq!(
            config.counter_options(),
            CounterOptions::default()
                .with_initial_value(5)
                .with_max_value(10)
        );
        assert_eq!(config.log_level(), Some("debug"));
        assert!(config.json_logs());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("PRACTICE_KIT_TEST_BASE_URL", "https://test.api.com");

        let toml_content = r#"
[posts]
base_url = "${PRACTICE_KIT_TEST_BASE_URL}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.posts.base_url, "https://test.api.com");

        std::env::remove_var("PRACTICE_KIT_TEST_BASE_URL");
    }

    #[test]
    fn test_unknown_env_var_left_in_place() {
        let toml_content = r#"
[posts]
base_url = "${PRACTICE_KIT_SURELY_UNSET}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.posts.base_url, "${PRACTICE_KIT_SURELY_UNSET}");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation() {
        let bad_bounds = TomlConfig::from_toml_str("[counter]\nmin_value = 9\nmax_value = 2\n").unwrap();
        assert!(bad_bounds.validate().is_err());

        let bad_level = TomlConfig::from_toml_str("[logging]\nlevel = \"loud\"\n").unwrap();
        assert!(bad_level.validate().is_err());

        let bad_url = TomlConfig::from_toml_str("[posts]\nbase_url = \"invalid-url\"\n").unwrap();
        assert!(bad_url.validate().is_err());
    }

    #[test]
    fn test_malformed_toml() {
        let err = TomlConfig::from_toml_str("[counter\n").unwrap_err();
        assert!(matches!(err, KitError::ConfigError { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[counter]\ninitial_value = 3\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.counter.initial_value, Some(3));
    }
}
