pub mod settings;

use clap::Parser;

use crate::core::input::DEFAULT_CANCEL_TOKEN;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use settings::Settings;

pub const DEFAULT_DATA_FILE: &str = "company.json";

#[derive(Debug, Clone, Parser)]
#[command(name = "staff-roster")]
#[command(about = "Menu-driven department and staff roster")]
pub struct CliConfig {
    /// Roster data file (overrides the settings file)
    #[arg(long)]
    pub data_file: Option<String>,

    /// Optional TOML settings file
    #[arg(long)]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

/// Effective configuration: CLI flags win over the settings file, the
/// settings file over built-in defaults.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub data_file: String,
    pub cancel_token: String,
    pub verbose: bool,
}

impl AppConfig {
    pub fn resolve(cli: CliConfig) -> Result<Self> {
        let settings = match &cli.config {
            Some(path) => Settings::from_file(path)?,
            None => Settings::default(),
        };
        settings.validate()?;

        Ok(Self {
            data_file: cli
                .data_file
                .or_else(|| settings.data_file().map(str::to_string))
                .unwrap_or_else(|| DEFAULT_DATA_FILE.to_string()),
            cancel_token: settings
                .cancel_token()
                .map(str::to_string)
                .unwrap_or_else(|| DEFAULT_CANCEL_TOKEN.to_string()),
            verbose: cli.verbose,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(data_file: Option<&str>, config: Option<&str>) -> CliConfig {
        CliConfig {
            data_file: data_file.map(str::to_string),
            config: config.map(str::to_string),
            verbose: false,
        }
    }

    #[test]
    fn defaults_without_flags_or_file() {
        let resolved = AppConfig::resolve(cli(None, None)).unwrap();
        assert_eq!(resolved.data_file, DEFAULT_DATA_FILE);
        assert_eq!(resolved.cancel_token, DEFAULT_CANCEL_TOKEN);
    }

    #[test]
    fn cli_flag_wins_over_settings_file() {
        use std::io::Write;
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"[storage]\ndata_file = \"from-file.json\"\n")
            .unwrap();
        let path = file.path().to_str().unwrap().to_string();

        let resolved = AppConfig::resolve(cli(Some("from-cli.json"), Some(&path))).unwrap();
        assert_eq!(resolved.data_file, "from-cli.json");

        let resolved = AppConfig::resolve(cli(None, Some(&path))).unwrap();
        assert_eq!(resolved.data_file, "from-file.json");
    }
}
