use super::errors::ConfigError;
use serde::{Deserialize, Deserializer};
use std::net::{IpAddr, SocketAddr};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BindConfig {
    pub address: String,

    #[serde(deserialize_with = "deserialize_port")]
    pub port: u16,
}

impl BindConfig {
    pub fn new(address: impl Into<String>, port: u16) -> Self {
        Self {
            address: address.into(),
            port,
        }
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let literal = self
            .address
            .trim()
            .trim_start_matches('[')
            .trim_end_matches(']');
        let ip: IpAddr = literal.parse().map_err(|e| {
            ConfigError::Validation(format!("Invalid bind address '{}': {}", self.address, e))
        })?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum PortValue {
    Number(u16),
    Text(String),
}

fn deserialize_port<'de, D>(deserializer: D) -> Result<u16, D::Error>
where
    D: Deserializer<'de>,
{
    match PortValue::deserialize(deserializer)? {
        PortValue::Number(port) => Ok(port),
        PortValue::Text(text) => text
            .trim()
            .parse()
            .map_err(|e| serde::de::Error::custom(format!("invalid port '{}': {}", text, e))),
    }
}
