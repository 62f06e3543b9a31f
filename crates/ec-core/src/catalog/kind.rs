use std::fmt;
use std::time::Duration;

/// The remotely sourced resource collections, one cache entry each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Videos,
    Contacts,
    Pathways,
    Events,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 4] = [
        ResourceKind::Videos,
        ResourceKind::Contacts,
        ResourceKind::Pathways,
        ResourceKind::Events,
    ];

    pub fn endpoint(&self) -> &'static str {
        match self {
            ResourceKind::Videos => "/videos",
            ResourceKind::Contacts => "/contacts",
            ResourceKind::Pathways => "/pathways",
            ResourceKind::Events => "/events",
        }
    }

    /// How long a fetched entry stays servable. Expiry is a hard boundary:
    /// an expired entry forces a fresh fetch and is never served stale.
    pub fn ttl(&self) -> Duration {
        match self {
            ResourceKind::Contacts => Duration::from_secs(60 * 5),
            ResourceKind::Videos | ResourceKind::Pathways => Duration::from_secs(60 * 15),
            ResourceKind::Events => Duration::from_secs(60 * 30),
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.endpoint().trim_start_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ttls_stay_within_policy_bounds() {
        for kind in ResourceKind::ALL {
            let ttl = kind.ttl();
            assert!(ttl >= Duration::from_secs(60 * 5), "{kind} ttl too short");
            assert!(ttl <= Duration::from_secs(60 * 30), "{kind} ttl too long");
        }
    }
}
