use bitflip_dns_domain::{Config, DnsRequest};
use std::net::SocketAddr;

pub const CONTROL: &str = "ctrl.example.";
pub const LOCAL: &str = "192.0.2.53:53";
pub const REMOTE: &str = "198.51.100.7:40000";

const BASE: &str = r#"
log = "/tmp/bitflip-dns-test.json"
control = "ctrl.example."
contact = "admin@example.com"

[[binds]]
address = "127.0.0.1"
port = 5353

[answers.flipped]
a = "10.0.0.1"
aaaa = "'fd00::1'"

[answers.correct]
a = "10.0.0.2"
aaaa = "'fd00::2'"
"#;

/// `ok.example.` with the single alias `bad.example.`
pub fn sample_config() -> Config {
    sample_config_with(r#""ok.example." = ["bad.example."]"#)
}

pub fn sample_config_with(questions: &str) -> Config {
    let doc = format!("{}\n[questions]\n{}\n", BASE, questions);
    Config::from_toml_str(&doc).unwrap()
}

pub fn request(name: &str, query_type: u16, query_class: u16) -> DnsRequest {
    DnsRequest::new(
        name,
        query_type,
        query_class,
        LOCAL.parse::<SocketAddr>().unwrap(),
        REMOTE.parse::<SocketAddr>().unwrap(),
    )
}
