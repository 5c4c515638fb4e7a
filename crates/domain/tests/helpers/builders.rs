#![allow(dead_code)]
use bitflip_dns_domain::Config;

/// Builds TOML configuration documents for tests
pub struct ConfigBuilder {
    binds: Vec<(String, String)>,
    log: String,
    control: String,
    contact: String,
    questions: Vec<(String, Vec<String>)>,
    flipped_a: String,
    flipped_aaaa: String,
    correct_a: String,
    correct_aaaa: String,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self {
            binds: vec![("127.0.0.1".to_string(), "5353".to_string())],
            log: "/tmp/bitflip-dns.json".to_string(),
            control: "ctrl.example.".to_string(),
            contact: "admin@example.com".to_string(),
            questions: vec![("ok.example.".to_string(), vec!["bad.example.".to_string()])],
            flipped_a: "10.0.0.1".to_string(),
            flipped_aaaa: "'fd00::1'".to_string(),
            correct_a: "10.0.0.2".to_string(),
            correct_aaaa: "'fd00::2'".to_string(),
        }
    }

    pub fn bind(mut self, address: &str, port: &str) -> Self {
        self.binds.push((address.to_string(), port.to_string()));
        self
    }

    pub fn no_binds(mut self) -> Self {
        self.binds.clear();
        self
    }

    pub fn control(mut self, control: &str) -> Self {
        self.control = control.to_string();
        self
    }

    pub fn contact(mut self, contact: &str) -> Self {
        self.contact = contact.to_string();
        self
    }

    pub fn question(mut self, correct: &str, aliases: &[&str]) -> Self {
        self.questions.push((
            correct.to_string(),
            aliases.iter().map(|a| a.to_string()).collect(),
        ));
        self
    }

    pub fn no_questions(mut self) -> Self {
        self.questions.clear();
        self
    }

    pub fn flipped_aaaa(mut self, literal: &str) -> Self {
        self.flipped_aaaa = literal.to_string();
        self
    }

    pub fn to_toml(&self) -> String {
        let mut doc = String::new();
        doc.push_str(&format!("log = {:?}\n", self.log));
        doc.push_str(&format!("control = {:?}\n", self.control));
        doc.push_str(&format!("contact = {:?}\n\n", self.contact));

        for (address, port) in &self.binds {
            doc.push_str("[[binds]]\n");
            doc.push_str(&format!("address = {:?}\n", address));
            match port.parse::<u16>() {
                Ok(port) => doc.push_str(&format!("port = {}\n\n", port)),
                Err(_) => doc.push_str(&format!("port = {:?}\n\n", port)),
            }
        }

        doc.push_str("[questions]\n");
        for (correct, aliases) in &self.questions {
            doc.push_str(&format!("{:?} = {:?}\n", correct, aliases));
        }

        doc.push_str("\n[answers.flipped]\n");
        doc.push_str(&format!("a = {:?}\n", self.flipped_a));
        doc.push_str(&format!("aaaa = {:?}\n", self.flipped_aaaa));
        doc.push_str("\n[answers.correct]\n");
        doc.push_str(&format!("a = {:?}\n", self.correct_a));
        doc.push_str(&format!("aaaa = {:?}\n", self.correct_aaaa));
        doc
    }

    pub fn build(&self) -> Config {
        Config::from_toml_str(&self.to_toml()).unwrap()
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
