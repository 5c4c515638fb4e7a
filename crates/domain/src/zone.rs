use std::fmt;
use std::sync::Arc;

/// Routing outcome of an inbound query
///
/// The numeric codes are part of the audit log format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ZoneKind {
    Unknown,
    Control,
    Correct,
    Flipped,
}

impl ZoneKind {
    pub fn code(&self) -> u8 {
        match self {
            ZoneKind::Unknown => 0,
            ZoneKind::Control => 1,
            ZoneKind::Correct => 2,
            ZoneKind::Flipped => 3,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ZoneKind::Unknown => "unknown",
            ZoneKind::Control => "control",
            ZoneKind::Correct => "correct",
            ZoneKind::Flipped => "flipped",
        }
    }
}

impl fmt::Display for ZoneKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classification plus the configured zone that matched
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ZoneMatch {
    Control,
    Correct { zone: Arc<str> },
    Flipped { alias: Arc<str> },
    Unknown,
}

impl ZoneMatch {
    pub fn kind(&self) -> ZoneKind {
        match self {
            ZoneMatch::Control => ZoneKind::Control,
            ZoneMatch::Correct { .. } => ZoneKind::Correct,
            ZoneMatch::Flipped { .. } => ZoneKind::Flipped,
            ZoneMatch::Unknown => ZoneKind::Unknown,
        }
    }
}

/// Lowercase fully-qualified form: `Example.COM` -> `example.com.`
pub fn to_fqdn(name: &str) -> String {
    let trimmed = name.trim().trim_end_matches('.');
    if trimmed.is_empty() {
        return ".".to_string();
    }
    let mut fqdn = trimmed.to_ascii_lowercase();
    fqdn.push('.');
    fqdn
}

/// First label of a name: `ok.example.` -> `ok`
pub fn leading_label(name: &str) -> &str {
    name.split('.').next().unwrap_or_default()
}
