use serde::Deserialize;
use std::collections::BTreeMap;

use super::answers::AnswersConfig;
use super::bind::BindConfig;
use super::errors::ConfigError;
use super::logging::LoggingConfig;
use crate::zone::to_fqdn;

/// Main configuration structure for Bitflip DNS
///
/// Loaded once at startup and shared read-only afterwards. Zone names are
/// normalized to lowercase fully-qualified form by [`Config::load`] and
/// [`Config::from_toml_str`], so every consumer can compare them directly.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Addresses to listen on, one UDP listener each
    #[serde(default)]
    pub binds: Vec<BindConfig>,

    /// Path of the append-only JSON audit log
    pub log: String,

    /// Zone this responder advertises itself under
    pub control: String,

    /// SOA mailbox, `@` already rewritten to `.`
    pub contact: String,

    /// Correct zone -> flip aliases answered with divergent data
    #[serde(default)]
    pub questions: BTreeMap<String, Vec<String>>,

    pub answers: AnswersConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load, normalize and validate a configuration file
    pub fn load(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let mut config: Config =
            toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.normalize();
        config.validate()?;
        Ok(config)
    }

    fn normalize(&mut self) {
        self.control = to_fqdn(&self.control);
        self.contact = mailbox_from_contact(&self.contact);
        self.questions = std::mem::take(&mut self.questions)
            .into_iter()
            .map(|(correct, aliases)| {
                let aliases = aliases.iter().map(|alias| to_fqdn(alias)).collect();
                (to_fqdn(&correct), aliases)
            })
            .collect();
    }

    /// Validate configuration
    ///
    /// Rejects anything that would make routing ambiguous: the root zone,
    /// duplicate aliases, and aliases that collide with a correct or control
    /// zone.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.binds.is_empty() {
            return Err(ConfigError::Validation("No binds configured".to_string()));
        }

        for bind in &self.binds {
            if bind.port == 0 {
                return Err(ConfigError::Validation(format!(
                    "Bind {} has port 0",
                    bind.address
                )));
            }
            bind.socket_addr()?;
        }

        if self.log.trim().is_empty() {
            return Err(ConfigError::Validation("Log path is empty".to_string()));
        }

        if self.control == "." {
            return Err(ConfigError::Validation(
                "Control zone cannot be the root zone".to_string(),
            ));
        }

        let mut aliases_seen = std::collections::BTreeSet::new();
        for (correct, aliases) in &self.questions {
            if correct == "." {
                return Err(ConfigError::Validation(
                    "Correct zone cannot be the root zone".to_string(),
                ));
            }
            if *correct == self.control {
                return Err(ConfigError::Validation(format!(
                    "Correct zone '{}' duplicates the control zone",
                    correct
                )));
            }

            for alias in aliases {
                if alias == "." {
                    return Err(ConfigError::Validation(format!(
                        "Flip alias of '{}' cannot be the root zone",
                        correct
                    )));
                }
                if *alias == self.control || self.questions.contains_key(alias) {
                    return Err(ConfigError::Validation(format!(
                        "Flip alias '{}' collides with a control or correct zone",
                        alias
                    )));
                }
                if !aliases_seen.insert(alias.as_str()) {
                    return Err(ConfigError::Validation(format!(
                        "Flip alias '{}' is configured more than once",
                        alias
                    )));
                }
            }
        }

        Ok(())
    }

    /// Control zone without the trailing dot, as shown to humans
    pub fn control_display(&self) -> &str {
        self.control.trim_end_matches('.')
    }

    /// SOA mailbox as a fully-qualified name
    pub fn mailbox(&self) -> String {
        to_fqdn(&self.contact)
    }

    pub fn flip_aliases(&self) -> impl Iterator<Item = (&str, &str)> {
        self.questions.iter().flat_map(|(correct, aliases)| {
            aliases
                .iter()
                .map(move |alias| (alias.as_str(), correct.as_str()))
        })
    }
}

/// `admin@example.com` -> `admin.example.com`
pub fn mailbox_from_contact(contact: &str) -> String {
    contact.trim().replace('@', ".")
}
