use bitflip_dns_domain::{to_fqdn, Config, ZoneMatch};
use rustc_hash::FxHashMap;
use std::sync::Arc;
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Route {
    Control,
    Correct,
    Flipped,
}

/// Suffix routing table over the configured zones
///
/// A name matches a zone when it equals the zone or ends in `.` + zone; the
/// longest matching zone wins. Anything else is `Unknown`.
pub struct ZoneRouter {
    routes: FxHashMap<Arc<str>, Route>,
}

impl ZoneRouter {
    pub fn from_config(config: &Config) -> Self {
        let mut router = Self {
            routes: FxHashMap::default(),
        };

        router.register(&config.control, Route::Control);
        for (correct, aliases) in &config.questions {
            router.register(correct, Route::Correct);
            for alias in aliases {
                router.register(alias, Route::Flipped);
            }
        }

        router
    }

    fn register(&mut self, zone: &str, route: Route) {
        let zone = to_fqdn(zone);
        if let Some(previous) = self.routes.insert(Arc::from(zone.as_str()), route) {
            warn!(zone = %zone, ?previous, ?route, "Zone registered twice, last registration wins");
        }
    }

    pub fn classify(&self, name: &str) -> ZoneMatch {
        let name = to_fqdn(name);
        let mut candidate = name.as_str();

        loop {
            if let Some((zone, route)) = self.routes.get_key_value(candidate) {
                return match route {
                    Route::Control => ZoneMatch::Control,
                    Route::Correct => ZoneMatch::Correct {
                        zone: Arc::clone(zone),
                    },
                    Route::Flipped => ZoneMatch::Flipped {
                        alias: Arc::clone(zone),
                    },
                };
            }

            match candidate.find('.') {
                Some(dot) if dot + 1 < candidate.len() => candidate = &candidate[dot + 1..],
                _ => return ZoneMatch::Unknown,
            }
        }
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}
