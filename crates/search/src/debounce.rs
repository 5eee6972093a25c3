//! Trailing-edge query debouncing
//!
//! Collapses a rapid burst of text-change events into the last event of the
//! burst, delivered once the quiet window elapses with no newer event.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tracing::trace;

use crate::SearchQuery;

/// Debouncer configuration
#[derive(Debug, Clone)]
pub struct DebounceConfig {
    /// Quiet window: an event is forwarded only if no newer event arrives
    /// within this duration of it (default: 500 ms)
    pub quiet_window: Duration,
}

impl Default for DebounceConfig {
    fn default() -> Self {
        Self {
            quiet_window: Duration::from_millis(500),
        }
    }
}

/// Trailing-edge debouncer for search queries.
///
/// Each submitted event takes the next value of a monotonic sequence
/// counter; a deferred task fires after the quiet window and forwards the
/// event only if its sequence number is still the latest. A newer event
/// therefore invalidates any pending emission from an older one.
///
/// Must be used inside a tokio runtime.
pub struct Debouncer {
    config: DebounceConfig,
    latest: Arc<AtomicU64>,
    tx: mpsc::Sender<SearchQuery>,
}

impl Debouncer {
    /// Create a debouncer that delivers effective queries into `tx`
    pub fn new(config: DebounceConfig, tx: mpsc::Sender<SearchQuery>) -> Self {
        Self {
            config,
            latest: Arc::new(AtomicU64::new(0)),
            tx,
        }
    }

    /// Submit a raw text-change event.
    ///
    /// Empty and whitespace-only queries are forwarded like any other;
    /// callers decide whether to skip them.
    pub fn submit(&self, query: SearchQuery) {
        let seq = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        let latest = Arc::clone(&self.latest);
        let tx = self.tx.clone();
        let quiet = self.config.quiet_window;

        tokio::spawn(async move {
            tokio::time::sleep(quiet).await;
            if latest.load(Ordering::SeqCst) == seq {
                trace!(text = %query.text, "quiet window elapsed, forwarding query");
                // A closed receiver means the pipeline shut down.
                let _ = tx.send(query).await;
            } else {
                trace!(text = %query.text, "superseded before quiet window elapsed");
            }
        });
    }
}
