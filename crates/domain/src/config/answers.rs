use serde::{Deserialize, Deserializer};
use std::net::{Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

/// Address pair handed out for one side of the flip experiment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct AnswerSet {
    #[serde(deserialize_with = "deserialize_address")]
    pub a: Ipv4Addr,

    #[serde(deserialize_with = "deserialize_address")]
    pub aaaa: Ipv6Addr,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct AnswersConfig {
    pub flipped: AnswerSet,

    pub correct: AnswerSet,
}

/// Strips one layer of surrounding quote characters.
///
/// IPv6 literals are commonly written quoted (`'fd00::1'`) so that YAML/TOML
/// tooling does not mangle the colons; the quotes are not part of the address.
pub fn strip_address_quotes(raw: &str) -> &str {
    let trimmed = raw.trim();
    for quote in ['\'', '"'] {
        if let Some(inner) = trimmed
            .strip_prefix(quote)
            .and_then(|rest| rest.strip_suffix(quote))
        {
            return inner.trim();
        }
    }
    trimmed
}

fn deserialize_address<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let raw = String::deserialize(deserializer)?;
    let literal = strip_address_quotes(&raw);
    T::from_str(literal).map_err(|e| {
        serde::de::Error::custom(format!("invalid address literal '{}': {}", raw, e))
    })
}
