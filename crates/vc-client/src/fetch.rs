//! Fetch lifecycle state machine.
//!
//! One [`FetchController`] owns the holiday state of one view. Each call to
//! [`request`](FetchController::request) mints a fresh token and makes it
//! the sole authoritative request; any older in-flight request is superseded
//! at that instant and its eventual outcome, success or failure, is
//! discarded without touching shared state.
//!
//! Cancellation is purely logical: the network call is never aborted at the
//! transport level. Instead, every continuation re-checks its token against
//! the authoritative one after each suspension point and again immediately
//! before committing, under the same lock that guards the commit.
//!
//! Loading visibility is debounced: a request only reaches
//! [`FetchPhase::PendingVisible`] if it is still pending and authoritative
//! when the debounce timer fires. The first-ever request skips visible
//! loading entirely so the initial render never flickers.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::sync::watch;
use vc_holidays::HolidayIndex;

use crate::source::HolidaySource;

/// User-facing error text committed on fetch failure.
const FETCH_FAILED_MESSAGE: &str = "Failed to load holidays. Please try again.";

/// Phase of the holiday fetch lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchPhase {
    /// No request issued yet.
    Idle,
    /// A request is in flight; the loading indicator is not shown yet.
    Pending,
    /// A request is in flight and has outlived the debounce timer.
    PendingVisible,
    /// The latest authoritative request committed a holiday list.
    Success,
    /// The latest authoritative request failed; the holiday list is empty.
    Failed,
}

/// The committed holiday state of one view, published through a watch
/// channel.
#[derive(Debug, Clone)]
pub struct HolidaySnapshot {
    /// Lifecycle phase.
    pub phase: FetchPhase,
    /// Committed holidays. Empty until the first successful commit and after
    /// any failure; stale (previous) data remains visible while a newer
    /// request is pending.
    pub index: Arc<HolidayIndex>,
    /// User-visible error message, set on failure and cleared by the next
    /// request.
    pub error: Option<String>,
}

impl HolidaySnapshot {
    fn initial() -> Self {
        HolidaySnapshot {
            phase: FetchPhase::Idle,
            index: Arc::new(HolidayIndex::default()),
            error: None,
        }
    }
}

/// Token bookkeeping. `active` identifies the single authoritative request;
/// a continuation holding a different token must not mutate anything.
struct Inner {
    next_token: u64,
    active: u64,
    first_load_done: bool,
}

/// Manages the asynchronous retrieval of a year's holidays for a country.
pub struct FetchController {
    source: Arc<dyn HolidaySource>,
    debounce: Duration,
    inner: Arc<Mutex<Inner>>,
    tx: watch::Sender<HolidaySnapshot>,
}

impl FetchController {
    /// Create an idle controller. `debounce` governs when a pending request
    /// becomes visibly loading.
    pub fn new(source: Arc<dyn HolidaySource>, debounce: Duration) -> Self {
        let (tx, _rx) = watch::channel(HolidaySnapshot::initial());
        FetchController {
            source,
            debounce,
            inner: Arc::new(Mutex::new(Inner {
                next_token: 0,
                active: 0,
                first_load_done: false,
            })),
            tx,
        }
    }

    /// Issue a request for `(country, year)`, superseding any request still
    /// in flight.
    ///
    /// Must be called within a Tokio runtime; the fetch and debounce tasks
    /// are spawned on it.
    pub fn request(&self, country: &str, year: u16) {
        let (token, initial) = {
            let mut inner = self.inner.lock().expect("fetch state mutex poisoned");
            inner.next_token += 1;
            inner.active = inner.next_token;
            (inner.next_token, !inner.first_load_done)
        };
        tracing::debug!(country, year, token, "holiday request issued");

        // Committed data stays visible while the new request runs; only the
        // error banner clears immediately.
        self.tx.send_modify(|snap| {
            snap.phase = FetchPhase::Pending;
            snap.error = None;
        });

        if !initial {
            let inner = Arc::clone(&self.inner);
            let tx = self.tx.clone();
            let debounce = self.debounce;
            tokio::spawn(async move {
                tokio::time::sleep(debounce).await;
                let guard = inner.lock().expect("fetch state mutex poisoned");
                if guard.active == token {
                    tx.send_modify(|snap| {
                        if snap.phase == FetchPhase::Pending {
                            snap.phase = FetchPhase::PendingVisible;
                        }
                    });
                }
            });
        }

        let source = Arc::clone(&self.source);
        let inner = Arc::clone(&self.inner);
        let tx = self.tx.clone();
        let country = country.to_owned();
        tokio::spawn(async move {
            let outcome = source.fetch(&country, year).await;

            // Past the suspension point: the commit check and the commit
            // itself happen under one lock, so a supersession cannot slip in
            // between them.
            let mut guard = inner.lock().expect("fetch state mutex poisoned");
            if guard.active != token {
                tracing::debug!(token, "request superseded; outcome discarded");
                return;
            }
            guard.first_load_done = true;
            match outcome {
                Ok(holidays) => {
                    tracing::debug!(token, count = holidays.len(), "holidays committed");
                    tx.send_modify(|snap| {
                        snap.phase = FetchPhase::Success;
                        snap.index = Arc::new(HolidayIndex::from_holidays(holidays));
                        snap.error = None;
                    });
                }
                Err(err) => {
                    tracing::warn!(token, %err, "holiday fetch failed");
                    tx.send_modify(|snap| {
                        snap.phase = FetchPhase::Failed;
                        snap.index = Arc::new(HolidayIndex::default());
                        snap.error = Some(FETCH_FAILED_MESSAGE.to_owned());
                    });
                }
            }
        });
    }

    /// Clone of the current snapshot.
    pub fn snapshot(&self) -> HolidaySnapshot {
        self.tx.borrow().clone()
    }

    /// Subscribe to snapshot updates.
    pub fn subscribe(&self) -> watch::Receiver<HolidaySnapshot> {
        self.tx.subscribe()
    }

    /// Wait until the controller reaches a terminal phase (success or
    /// failure). Returns immediately if it is already settled.
    pub async fn settled(&self) {
        let mut rx = self.tx.subscribe();
        // The sender lives in self, so the channel cannot close while we
        // wait.
        let _ = rx
            .wait_for(|snap| matches!(snap.phase, FetchPhase::Success | FetchPhase::Failed))
            .await;
    }
}
