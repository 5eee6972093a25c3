//! Request tagging for in-flight search cancellation

use std::sync::atomic::{AtomicU64, Ordering};

/// Tags outgoing requests with a monotonically increasing sequence number
/// so that late responses for superseded queries can be discarded.
///
/// Issue a tag when dispatching a request; when the response arrives,
/// apply it only if the tag is still current.
#[derive(Debug, Default)]
pub struct QueryGate {
    issued: AtomicU64,
}

impl QueryGate {
    pub fn new() -> Self {
        Self {
            issued: AtomicU64::new(0),
        }
    }

    /// Take the next request tag
    pub fn issue(&self) -> u64 {
        self.issued.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Whether `tag` belongs to the most recently issued request
    pub fn is_current(&self, tag: u64) -> bool {
        self.issued.load(Ordering::SeqCst) == tag
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_tag_is_current() {
        let gate = QueryGate::new();
        let tag = gate.issue();
        assert!(gate.is_current(tag));
    }

    #[test]
    fn test_superseded_tag_is_stale() {
        let gate = QueryGate::new();
        let first = gate.issue();
        let second = gate.issue();
        assert!(!gate.is_current(first));
        assert!(gate.is_current(second));
    }
}
