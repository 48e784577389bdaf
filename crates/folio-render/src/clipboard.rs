//! Copy-to-clipboard control for code blocks.
//!
//! Copying tries the platform clipboard first. When that is unavailable or
//! denied, it falls back to the legacy technique: create an offscreen input
//! holding the text, select it, run the copy command, and remove the input.
//! The input is owned by a guard so it is removed on every path.
//!
//! After a successful copy the button label reads `Copied!` for
//! [`FEEDBACK_WINDOW`], then reverts to `Copy`.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::watch;

/// How long the `Copied!` label stays up.
pub const FEEDBACK_WINDOW: Duration = Duration::from_secs(2);

/// Label shown before copying.
pub const COPY_LABEL: &str = "Copy";

/// Label shown after a successful copy.
pub const COPIED_LABEL: &str = "Copied!";

// ============================================================================
// Errors and boundaries
// ============================================================================

/// Clipboard failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ClipboardError {
    /// The environment has no clipboard capability.
    #[error("Clipboard unavailable: {0}")]
    Unavailable(String),

    /// The clipboard exists but refused the write.
    #[error("Clipboard permission denied: {0}")]
    Denied(String),

    /// The legacy copy command reported failure.
    #[error("Copy command failed: {0}")]
    CommandFailed(String),
}

/// Platform clipboard write capability.
#[async_trait]
pub trait Clipboard: Send + Sync {
    /// Write `text` to the clipboard.
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}

/// Handle to a transient offscreen input created by a [`SelectionHost`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InputHandle(pub u64);

/// Legacy selection-and-copy-command capability.
pub trait SelectionHost: Send + Sync {
    /// Create an offscreen input holding `text`.
    fn create_input(&self, text: &str) -> Result<InputHandle, ClipboardError>;

    /// Focus and select the input's contents.
    fn select(&self, input: InputHandle) -> Result<(), ClipboardError>;

    /// Run the copy command on the current selection.
    fn exec_copy(&self) -> Result<(), ClipboardError>;

    /// Remove the input.
    fn remove_input(&self, input: InputHandle);
}

/// Removes its transient input when dropped.
struct TransientInput<'a> {
    host: &'a dyn SelectionHost,
    handle: InputHandle,
}

impl<'a> TransientInput<'a> {
    fn create(host: &'a dyn SelectionHost, text: &str) -> Result<Self, ClipboardError> {
        let handle = host.create_input(text)?;
        Ok(Self { host, handle })
    }
}

impl Drop for TransientInput<'_> {
    fn drop(&mut self) {
        self.host.remove_input(self.handle);
    }
}

// ============================================================================
// CopyButton
// ============================================================================

/// Which path completed a copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyMethod {
    /// Platform clipboard write.
    Clipboard,
    /// Offscreen input plus copy command.
    Selection,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct Feedback {
    copied: bool,
    generation: u64,
}

/// The copy control shown in every code block header.
///
/// Cheap to clone; clones share the label state.
#[derive(Clone)]
pub struct CopyButton {
    clipboard: Arc<dyn Clipboard>,
    selection: Arc<dyn SelectionHost>,
    feedback: Arc<watch::Sender<Feedback>>,
    window: Duration,
}

impl CopyButton {
    /// Create a copy button over the given clipboard capabilities.
    pub fn new(clipboard: Arc<dyn Clipboard>, selection: Arc<dyn SelectionHost>) -> Self {
        let (tx, _rx) = watch::channel(Feedback::default());
        Self {
            clipboard,
            selection,
            feedback: Arc::new(tx),
            window: FEEDBACK_WINDOW,
        }
    }

    /// The current label, `Copy` or `Copied!`.
    pub fn label(&self) -> &'static str {
        if self.feedback.borrow().copied {
            COPIED_LABEL
        } else {
            COPY_LABEL
        }
    }

    /// Whether the `Copied!` label is showing.
    pub fn is_copied(&self) -> bool {
        self.feedback.borrow().copied
    }

    /// Copy `text`, trying the clipboard first and the selection fallback
    /// second.
    ///
    /// On success the label switches to `Copied!` and a timer reverts it.
    /// When both paths fail the error is logged and the label is untouched.
    pub async fn copy(&self, text: &str) -> Result<CopyMethod, ClipboardError> {
        let method = match self.clipboard.write_text(text).await {
            Ok(()) => CopyMethod::Clipboard,
            Err(primary) => {
                log::debug!("Clipboard write failed, trying selection fallback: {primary}");
                match self.copy_via_selection(text) {
                    Ok(()) => CopyMethod::Selection,
                    Err(fallback) => {
                        log::error!("Copy failed: {primary}; fallback: {fallback}");
                        return Err(fallback);
                    }
                }
            }
        };

        self.show_copied();
        Ok(method)
    }

    fn copy_via_selection(&self, text: &str) -> Result<(), ClipboardError> {
        let input = TransientInput::create(self.selection.as_ref(), text)?;
        self.selection.select(input.handle)?;
        self.selection.exec_copy()
    }

    fn show_copied(&self) {
        let mut generation = 0;
        self.feedback.send_modify(|f| {
            f.generation += 1;
            f.copied = true;
            generation = f.generation;
        });

        let feedback = Arc::clone(&self.feedback);
        let window = self.window;
        tokio::spawn(async move {
            tokio::time::sleep(window).await;
            // A later copy restarts the window; only the latest timer reverts.
            feedback.send_if_modified(|f| {
                if f.generation == generation && f.copied {
                    f.copied = false;
                    true
                } else {
                    false
                }
            });
        });
    }
}

impl std::fmt::Debug for CopyButton {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CopyButton")
            .field("label", &self.label())
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Tests
// ============================================================================
