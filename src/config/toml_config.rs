use crate::utils::error::{LaneError, Result};
use crate::utils::validation::{validate_one_of, validate_url, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;
use url::Url;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub catalog: CatalogSettings,
    #[serde(default)]
    pub output: OutputSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogSettings {
    /// 相對 href 的基準 URL
    pub base_url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputSettings {
    pub format: Option<String>,
    pub images_only: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingSettings {
    pub level: Option<String>,
    pub json: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = LaneError;

    fn from_str(s: &str) -> Result<Self> {
        validate_one_of("output.format", s, OutputFormat::NAMES)?;
        match s {
            "json" => Ok(OutputFormat::Json),
            _ => Ok(OutputFormat::Text),
        }
    }
}

impl OutputFormat {
    pub const NAMES: &'static [&'static str] = &["text", "json"];
}

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

impl TomlConfig {
    /// 從 TOML 檔案載入設定
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析設定
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| LaneError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${CATALOG_BASE_URL})，未設定的變數保留原樣
    fn substitute_env_vars(content: &str) -> String {
        static ENV_VAR: OnceLock<Regex> = OnceLock::new();
        let re = ENV_VAR.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("valid regex"));

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .into_owned()
    }

    pub fn base_url(&self) -> Result<Option<Url>> {
        self.catalog
            .base_url
            .as_deref()
            .map(|url| validate_url("catalog.base_url", url))
            .transpose()
    }

    pub fn output_format(&self) -> Result<OutputFormat> {
        self.output
            .format
            .as_deref()
            .map(str::parse::<OutputFormat>)
            .transpose()
            .map(Option::unwrap_or_default)
    }

    pub fn images_only(&self) -> bool {
        self.output.images_only.unwrap_or(false)
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging.level.as_deref()
    }

    pub fn log_json(&self) -> bool {
        self.logging.json.unwrap_or(false)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.base_url()?;
        self.output_format()?;
        if let Some(level) = self.log_level() {
            validate_one_of("logging.level", level, LOG_LEVELS)?;
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
    fn test_parse_basic_toml_config() {
        let toml_content = r#"
[catalog]
base_url = "https://library.example.org/catalog/"

[output]
format = "json"
images_only = true

[logging]
level = "debug"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert!(config.validate().is_ok());
        assert_eq!(
            config.base_url().unwrap().unwrap().as_str(),
            "https://library.example.org/catalog/"
        );
        assert_eq!(config.output_format().unwrap(), OutputFormat::Json);
        assert!(config.images_only());
        assert_eq!(config.log_level(), Some("debug"));
        assert!(!config.log_json());
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert!(config.validate().is_ok());
        assert!(config.base_url().unwrap().is_none());
        assert_eq!(config.output_format().unwrap(), OutputFormat::Text);
        assert!(!config.images_only());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("CATALOG_LANE_TEST_BASE", "https://env.example.org/");

        let toml_content = r#"
[catalog]
base_url = "${CATALOG_LANE_TEST_BASE}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.catalog.base_url.as_deref(), Some("https://env.example.org/"));

        std::env::remove_var("CATALOG_LANE_TEST_BASE");
    }

    #[test]
    fn test_unknown_env_var_is_kept() {
        let toml_content = r#"
[catalog]
base_url = "${CATALOG_LANE_SURELY_UNSET_VAR}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(
            config.catalog.base_url.as_deref(),
            Some("${CATALOG_LANE_SURELY_UNSET_VAR}")
        );
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation() {
        let bad_format = TomlConfig::from_toml_str("[output]\nformat = \"csv\"\n").unwrap();
        assert!(bad_format.validate().is_err());

        let bad_level = TomlConfig::from_toml_str("[logging]\nlevel = \"loud\"\n").unwrap();
        assert!(bad_level.validate().is_err());

        let bad_url = TomlConfig::from_toml_str("[catalog]\nbase_url = \"ftp://x.org\"\n").unwrap();
        assert!(bad_url.validate().is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[output]\nformat = \"text\"\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.output_format().unwrap(), OutputFormat::Text);
    }
}
