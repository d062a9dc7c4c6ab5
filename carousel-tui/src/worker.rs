//! Background fetch: one request per mount, off the UI thread.
//!
//! The outcome comes back over an `mpsc` channel tagged with the mount's
//! ticket. The UI thread decides whether it is still wanted; the fetch thread
//! is never joined, so a request without a timeout cannot hold up quit.

use std::sync::mpsc::Sender;
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use tracing::{debug, warn};

use carousel_core::{FetchTicket, Item, ItemSource, LoadError};

/// Result of the single fetch a mount performs.
#[derive(Debug)]
pub struct FetchOutcome {
    pub ticket: FetchTicket,
    pub result: Result<Vec<Item>, LoadError>,
}

/// Spawn the fetch thread for `ticket`.
pub fn spawn_fetch(
    source: Arc<dyn ItemSource>,
    ticket: FetchTicket,
    tx: Sender<FetchOutcome>,
) -> std::io::Result<JoinHandle<()>> {
    spawn_fetch_with(move || Ok(source), ticket, tx)
}

/// Spawn the fetch thread for `ticket`, building the source on that thread.
///
/// A source that fails to build is reported as the mount's fetch outcome.
pub fn spawn_fetch_with<F>(
    build: F,
    ticket: FetchTicket,
    tx: Sender<FetchOutcome>,
) -> std::io::Result<JoinHandle<()>>
where
    F: FnOnce() -> Result<Arc<dyn ItemSource>, LoadError> + Send + 'static,
{
    thread::Builder::new()
        .name(format!("carousel-fetch-{}", ticket.generation()))
        .spawn(move || {
            let result = build().and_then(|source| {
                debug!(
                    event = "tui.worker.fetch_started",
                    source = source.describe(),
                    generation = ticket.generation()
                );
                source.fetch_items()
            });
            if tx.send(FetchOutcome { ticket, result }).is_err() {
                // Receiver is gone: the app already quit.
                warn!(event = "tui.worker.outcome_dropped", generation = ticket.generation());
            }
        })
}
