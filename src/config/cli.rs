use crate::config::toml_config::TomlConfig;
use crate::config::CategorizerConfig;
use crate::domain::model::{CategorizationRequest, ListType};
use crate::utils::error::Result;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "categorize-item")]
#[command(about = "Categorize a grocery or shopping list item")]
pub struct CliConfig {
    /// Item name to categorize
    pub item_name: String,

    #[arg(long, default_value = "grocery", help = "grocery, shopping or project")]
    pub list_type: String,

    #[arg(short, long, help = "Optional TOML configuration file")]
    pub config: Option<String>,

    #[arg(long, help = "Use keyword matching only, even if an API key is set")]
    pub offline: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    pub fn request(&self) -> CategorizationRequest {
        CategorizationRequest::new(self.item_name.clone(), ListType::from_tag(Some(self.list_type.as_str())))
    }

    /// Environment, then the TOML file, then `--offline`.
    pub fn categorizer_config(&self) -> Result<CategorizerConfig> {
        let config = load_categorizer_config(self.config.as_deref())?;
        Ok(if self.offline {
            config.without_api_key()
        } else {
            config
        })
    }
}

pub fn load_categorizer_config(path: Option<&str>) -> Result<CategorizerConfig> {
    load_settings(path).map(|(config, _)| config)
}

/// Reads the TOML file once and returns the categorizer config together with
/// its `[server] port`, if any.
pub fn load_settings(path: Option<&str>) -> Result<(CategorizerConfig, Option<u16>)> {
    let base = CategorizerConfig::from_env();
    match path {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            let file = TomlConfig::from_file(path)?;
            Ok((file.apply_to(base), file.port()))
        }
        None => Ok((base, None)),
    }
}
