use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::utils::error::{Result, RosterError};
use crate::utils::validation::{validate_non_empty, Validate};

/// Optional TOML settings file.
///
/// ```toml
/// [storage]
/// data_file = "${HOME}/roster/company.json"
///
/// [console]
/// cancel_token = "/"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    pub storage: Option<StorageSettings>,
    pub console: Option<ConsoleSettings>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageSettings {
    pub data_file: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsoleSettings {
    pub cancel_token: Option<String>,
}

impl Settings {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(RosterError::Io)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed = Self::substitute_env_vars(content);

        toml::from_str(&processed).map_err(|e| RosterError::Config {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    // ${VAR_NAME} substitution; unknown variables are left as-is.
    fn substitute_env_vars(content: &str) -> String {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .to_string()
    }

    pub fn data_file(&self) -> Option<&str> {
        self.storage.as_ref()?.data_file.as_deref()
    }

    pub fn cancel_token(&self) -> Option<&str> {
        self.console.as_ref()?.cancel_token.as_deref()
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        if let Some(data_file) = self.data_file() {
            validate_non_empty("storage.data_file", data_file)?;
        }
        if let Some(token) = self.cancel_token() {
            validate_non_empty("console.cancel_token", token)?;
            if token.chars().any(char::is_whitespace) {
                return Err(RosterError::Config {
                    field: "console.cancel_token".to_string(),
                    message: "cancel token cannot contain whitespace".to_string(),
                });
            }
        }
        Ok(())
    }
}
