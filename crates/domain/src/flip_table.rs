use crate::config::Config;
use crate::zone::{leading_label, to_fqdn};
use rustc_hash::FxHashMap;
use std::sync::Arc;

/// Flip alias -> leading label of the correct zone it shadows
///
/// Built once from [`Config`] and never mutated, so it can be shared between
/// listeners behind an `Arc` without locking.
#[derive(Debug, Clone, Default)]
pub struct FlipCorrelationTable {
    entries: FxHashMap<Arc<str>, Arc<str>>,
}

impl FlipCorrelationTable {
    pub fn from_config(config: &Config) -> Self {
        let mut entries = FxHashMap::default();
        for (alias, correct) in config.flip_aliases() {
            entries.insert(Arc::from(alias), Arc::from(leading_label(correct)));
        }
        Self { entries }
    }

    pub fn lookup(&self, alias: &str) -> Option<&str> {
        self.entries.get(to_fqdn(alias).as_str()).map(|label| &**label)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Rewrites `query_name` so the alias part points at the correct zone.
    ///
    /// The alias's leading label inside the query name is replaced with the
    /// correct zone's leading label: with `bad.example.` -> `ok`,
    /// `www.bad.example.` becomes `www.ok.example.`. Labels outside that
    /// position keep their original spelling. Returns `None` when the alias
    /// is not in the table or the name is shorter than the alias.
    pub fn rewrite(&self, query_name: &str, alias: &str) -> Option<String> {
        let replacement = self.lookup(alias)?;
        let alias_labels = alias.trim_end_matches('.').split('.').count();

        let mut labels: Vec<&str> = query_name.trim_end_matches('.').split('.').collect();
        if labels.len() < alias_labels {
            return None;
        }
        let position = labels.len() - alias_labels;
        labels[position] = replacement;

        let mut rewritten = labels.join(".");
        rewritten.push('.');
        Some(rewritten)
    }
}
