use crate::config::toml_config::{OutputFormat, TomlConfig};
use crate::utils::error::Result;
use crate::utils::validation::{validate_url, Validate};
use clap::Parser;
use std::path::PathBuf;
use url::Url;

#[derive(Debug, Clone, Parser)]
#[command(name = "catalog-lane")]
#[command(about = "Inspect catalog lanes and the cover images they reference")]
pub struct CliConfig {
    /// Lane document (.json or .toml)
    pub input: PathBuf,

    #[arg(long, help = "Settings file (TOML)")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Base URL for relative hrefs")]
    pub base_url: Option<String>,

    #[arg(long, value_parser = ["text", "json"], help = "Output format")]
    pub format: Option<String>,

    #[arg(long, help = "Only print the distinct image URLs")]
    pub images_only: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

/// CLI 參數與設定檔合併後的結果
#[derive(Debug, Clone)]
pub struct RunSettings {
    pub input: PathBuf,
    pub base_url: Option<Url>,
    pub format: OutputFormat,
    pub images_only: bool,
}

impl CliConfig {
    pub fn load_file_config(&self) -> Result<TomlConfig> {
        match &self.config {
            Some(path) => {
                let config = TomlConfig::from_file(path)?;
                config.validate()?;
                Ok(config)
            }
            None => Ok(TomlConfig::default()),
        }
    }

    /// 命令列參數優先於設定檔
    pub fn resolve(&self, file: &TomlConfig) -> Result<RunSettings> {
        let base_url = match &self.base_url {
            Some(url) => Some(validate_url("--base-url", url)?),
            None => file.base_url()?,
        };

        let format = match &self.format {
            Some(format) => format.parse::<OutputFormat>()?,
            None => file.output_format()?,
        };

        Ok(RunSettings {
            input: self.input.clone(),
            base_url,
            format,
            images_only: self.images_only || file.images_only(),
        })
    }
}
