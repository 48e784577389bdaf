//! Shared completion signals.
//!
//! Provides [`CompletionSignal`], a cloneable handle over a watch channel that
//! resolves exactly once to success or failure. Every clone observes the same
//! outcome, so a single in-flight operation can be awaited by any number of
//! callers.
//!
//! # Usage
//!
//! ```rust
//! use folio_core::signal::{CompletionSignal, SignalState};
//!
//! let signal = CompletionSignal::new("hljs-dark");
//! assert_eq!(signal.state(), SignalState::Pending);
//!
//! signal.succeed();
//! assert!(signal.state().is_resolved());
//! ```

use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::watch;

// ============================================================================
// SignalState
// ============================================================================

/// State of a completion signal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SignalState {
    /// The operation has not finished.
    Pending,
    /// The operation finished successfully.
    Succeeded,
    /// The operation failed.
    Failed(String),
}

impl SignalState {
    /// Returns `true` once the operation has finished either way.
    pub fn is_resolved(&self) -> bool {
        !matches!(self, Self::Pending)
    }

    /// Returns `true` if the operation finished successfully.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Succeeded)
    }
}

impl fmt::Display for SignalState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::Succeeded => write!(f, "succeeded"),
            Self::Failed(reason) => write!(f, "failed: {reason}"),
        }
    }
}

// ============================================================================
// CompletionSignal
// ============================================================================

/// Thread-safe, single-resolution completion signal.
///
/// Cheap to clone (Arc internals). The first call to [`succeed`](Self::succeed)
/// or [`fail`](Self::fail) wins; later resolutions are ignored.
#[derive(Clone)]
pub struct CompletionSignal {
    inner: Arc<SignalInner>,
}

struct SignalInner {
    name: String,
    tx: watch::Sender<SignalState>,
    started_at: Instant,
}

impl CompletionSignal {
    /// Create a new pending signal with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        let (tx, _rx) = watch::channel(SignalState::Pending);
        Self {
            inner: Arc::new(SignalInner {
                name: name.into(),
                tx,
                started_at: Instant::now(),
            }),
        }
    }

    /// Get the signal name.
    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// Get the current state.
    pub fn state(&self) -> SignalState {
        self.inner.tx.borrow().clone()
    }

    /// Resolve the signal successfully.
    pub fn succeed(&self) {
        self.resolve(SignalState::Succeeded);
    }

    /// Resolve the signal with a failure reason.
    pub fn fail(&self, reason: impl Into<String>) {
        self.resolve(SignalState::Failed(reason.into()));
    }

    fn resolve(&self, state: SignalState) {
        let changed = self.inner.tx.send_if_modified(|current| {
            if current.is_resolved() {
                false
            } else {
                *current = state.clone();
                true
            }
        });
        if changed {
            log::debug!("Signal '{}' → {state}", self.inner.name);
        }
    }

    /// Subscribe to state changes.
    pub fn subscribe(&self) -> watch::Receiver<SignalState> {
        self.inner.tx.subscribe()
    }

    /// Wait until the signal resolves.
    ///
    /// Returns `Err` with the failure reason if the operation failed.
    pub async fn wait(&self) -> Result<(), String> {
        let mut rx = self.subscribe();

        loop {
            let state = rx.borrow_and_update().clone();
            match state {
                SignalState::Succeeded => return Ok(()),
                SignalState::Failed(reason) => return Err(reason),
                SignalState::Pending => {}
            }

            if rx.changed().await.is_err() {
                return Err(format!("Signal '{}' channel closed", self.inner.name));
            }
        }
    }

    /// Whether two handles refer to the same underlying signal.
    pub fn same_as(&self, other: &CompletionSignal) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// Elapsed time since the signal was created.
    pub fn elapsed(&self) -> Duration {
        self.inner.started_at.elapsed()
    }
}

impl fmt::Debug for CompletionSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompletionSignal")
            .field("name", &self.inner.name)
            .field("state", &self.state())
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================
