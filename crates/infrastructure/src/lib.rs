//! Bitflip DNS Infrastructure Layer
pub mod dns;
