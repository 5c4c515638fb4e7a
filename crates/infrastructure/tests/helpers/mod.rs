#![allow(dead_code)]
mod config;
mod wire;

pub use config::{sample_config, sample_config_with, CONTROL, LOCAL, REMOTE};
pub use wire::{build_query, decode, encode, txt_text};
