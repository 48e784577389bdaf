//! Highlight theme coordination.
//!
//! The [`HighlightThemeCoordinator`] owns the set of managed highlight
//! stylesheets. It keeps one palette visible at a time, and the most recent
//! request always decides which one:
//!
//! 1. A load already in flight for a theme is shared: every caller receives
//!    the same [`CompletionSignal`] and only one fetch happens.
//! 2. If the theme is already attached, stylesheets and loads of the other
//!    theme are swept and the returned signal is already resolved.
//! 3. Otherwise a pending stylesheet is attached and a load task starts.
//!    On success, if the theme is still the requested one, every other
//!    managed stylesheet is removed; if a newer request names another
//!    theme, the pending sheet is dropped and the signal fails as
//!    superseded. On failure the pending sheet is dropped and the previous
//!    palette stays.
//!
//! A signal succeeds only when its theme is attached. The in-flight entry
//! is recorded before the load task is spawned, under the same lock, so
//! concurrent callers can never start a second load.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use pulldown_cmark_escape::{escape_href, escape_html, FmtWriter};
use tokio::sync::Mutex;

use folio_core::{CompletionSignal, Theme, ThemeLoadError};

/// Marker attribute carried by every managed stylesheet.
pub const MANAGED_ATTR: &str = "data-hljs-theme";

/// Attribute carrying the short theme name.
pub const THEME_TYPE_ATTR: &str = "data-theme-type";

/// Default light palette URL.
pub const DEFAULT_LIGHT_URL: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/highlight.js/11.9.0/styles/github.min.css";

/// Default dark palette URL.
pub const DEFAULT_DARK_URL: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/highlight.js/11.9.0/styles/github-dark.min.css";

// ============================================================================
// Stylesheet loading
// ============================================================================

/// Confirms that a stylesheet resource loaded.
#[async_trait]
pub trait StylesheetLoader: Send + Sync {
    /// Load the stylesheet for `theme` from `url`.
    async fn load(&self, theme: Theme, url: &str) -> Result<(), ThemeLoadError>;
}

/// Loads stylesheets over HTTP(S).
#[derive(Debug, Clone, Default)]
pub struct HttpStylesheetLoader {
    client: reqwest::Client,
}

impl HttpStylesheetLoader {
    /// Create a loader with a fresh HTTP client.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a loader that reuses an existing client.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl StylesheetLoader for HttpStylesheetLoader {
    async fn load(&self, theme: Theme, url: &str) -> Result<(), ThemeLoadError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ThemeLoadError::new(theme, format!("request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(ThemeLoadError::new(
                theme,
                format!("HTTP {}", response.status()),
            ));
        }

        response
            .bytes()
            .await
            .map(|_| ())
            .map_err(|e| ThemeLoadError::new(theme, format!("body read failed: {e}")))
    }
}

/// The fixed stylesheet URL for each theme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeUrls {
    pub light: String,
    pub dark: String,
}

impl ThemeUrls {
    /// URLs for the given light and dark palettes.
    pub fn new(light: impl Into<String>, dark: impl Into<String>) -> Self {
        Self {
            light: light.into(),
            dark: dark.into(),
        }
    }

    /// The URL for `theme`.
    pub fn url_for(&self, theme: Theme) -> &str {
        match theme {
            Theme::Light => &self.light,
            Theme::Dark => &self.dark,
        }
    }
}

impl Default for ThemeUrls {
    fn default() -> Self {
        Self::new(DEFAULT_LIGHT_URL, DEFAULT_DARK_URL)
    }
}

// ============================================================================
// Managed stylesheet set
// ============================================================================

/// A stylesheet owned by the coordinator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManagedStylesheet {
    pub theme: Theme,
    pub href: String,
    /// Whether the load has been confirmed.
    pub loaded: bool,
}

impl ManagedStylesheet {
    /// Render as a `<link>` tag.
    pub fn to_link_tag(&self) -> String {
        let mut href = String::new();
        let mut key = String::new();
        // Writing into a String cannot fail.
        let _ = escape_href(FmtWriter(&mut href), &self.href);
        let _ = escape_html(FmtWriter(&mut key), self.theme.key());
        format!(
            r#"<link rel="stylesheet" href="{href}" {MANAGED_ATTR}="{key}" {THEME_TYPE_ATTR}="{}">"#,
            self.theme.as_str()
        )
    }
}

/// Where a theme stands with respect to the managed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeLoadState {
    /// Never requested, or its stylesheet has since been removed.
    Absent,
    /// A load is running; callers share its signal.
    InFlight,
    /// A confirmed stylesheet for the theme is attached.
    Attached,
}

#[derive(Default)]
struct Head {
    stylesheets: Vec<ManagedStylesheet>,
    in_flight: HashMap<Theme, CompletionSignal>,
    /// Theme named by the most recent `load_theme` call.
    requested: Option<Theme>,
}

impl Head {
    fn is_attached(&self, theme: Theme) -> bool {
        self.stylesheets.iter().any(|s| s.theme == theme && s.loaded)
    }

    fn is_current_load(&self, theme: Theme, signal: &CompletionSignal) -> bool {
        self.in_flight
            .get(&theme)
            .is_some_and(|current| current.same_as(signal))
    }

    fn drop_pending(&mut self, theme: Theme) {
        self.stylesheets.retain(|s| s.theme != theme || s.loaded);
    }
}

struct Inner {
    urls: ThemeUrls,
    loader: Arc<dyn StylesheetLoader>,
    head: Mutex<Head>,
    loads_in_flight: AtomicUsize,
}

impl Inner {
    /// Remove every stylesheet and in-flight load not belonging to `theme`.
    /// Swept loads fail as superseded.
    fn sweep_others(&self, head: &mut Head, theme: Theme) {
        head.stylesheets.retain(|s| s.theme == theme);
        for other in Theme::ALL.into_iter().filter(|t| *t != theme) {
            if let Some(signal) = head.in_flight.remove(&other) {
                self.loads_in_flight.fetch_sub(1, Ordering::SeqCst);
                log::debug!("Highlight theme '{}' superseded by '{}'", other.key(), theme.key());
                signal.fail(format!("superseded by a request for {theme}"));
            }
        }
    }

    async fn finish_load(&self, theme: Theme, url: String, signal: CompletionSignal) {
        let outcome = self.loader.load(theme, &url).await;

        let mut head = self.head.lock().await;
        if !head.is_current_load(theme, &signal) {
            // Swept while loading; the sweep already resolved the signal.
            return;
        }
        head.in_flight.remove(&theme);
        self.loads_in_flight.fetch_sub(1, Ordering::SeqCst);

        match outcome {
            Ok(()) if head.requested == Some(theme) => {
                match head
                    .stylesheets
                    .iter_mut()
                    .find(|s| s.theme == theme && !s.loaded)
                {
                    Some(sheet) => sheet.loaded = true,
                    None => head.stylesheets.push(ManagedStylesheet {
                        theme,
                        href: url,
                        loaded: true,
                    }),
                }
                self.sweep_others(&mut head, theme);
                log::debug!(
                    "Highlight theme '{}' attached in {:?}",
                    theme.key(),
                    signal.elapsed()
                );
                signal.succeed();
            }
            Ok(()) => {
                head.drop_pending(theme);
                let newer = head.requested.unwrap_or_else(|| theme.other());
                log::debug!("Highlight theme '{}' superseded by '{}'", theme.key(), newer.key());
                signal.fail(format!("superseded by a request for {newer}"));
            }
            Err(e) => {
                head.drop_pending(theme);
                log::warn!("{e}");
                signal.fail(e.reason);
            }
        }
    }
}

// ============================================================================
// HighlightThemeCoordinator
// ============================================================================

/// Owns the managed highlight stylesheets.
///
/// Create one per application and pass clones to every renderer; clones
/// share the same state.
#[derive(Clone)]
pub struct HighlightThemeCoordinator {
    inner: Arc<Inner>,
}

impl HighlightThemeCoordinator {
    /// Create a coordinator.
    pub fn new(urls: ThemeUrls, loader: Arc<dyn StylesheetLoader>) -> Self {
        Self {
            inner: Arc::new(Inner {
                urls,
                loader,
                head: Mutex::new(Head::default()),
                loads_in_flight: AtomicUsize::new(0),
            }),
        }
    }

    /// Create a coordinator loading the default palettes over HTTP.
    pub fn with_http(urls: ThemeUrls) -> Self {
        Self::new(urls, Arc::new(HttpStylesheetLoader::new()))
    }

    /// The configured palette URLs.
    pub fn urls(&self) -> &ThemeUrls {
        &self.inner.urls
    }

    /// Request `theme` and return its completion signal.
    ///
    /// Must be called within a Tokio runtime; the load runs on a spawned
    /// task.
    pub async fn load_theme(&self, theme: Theme) -> CompletionSignal {
        let mut head = self.inner.head.lock().await;
        head.requested = Some(theme);

        if let Some(signal) = head.in_flight.get(&theme) {
            log::debug!("Joining in-flight load of '{}'", theme.key());
            return signal.clone();
        }

        if head.is_attached(theme) {
            self.inner.sweep_others(&mut head, theme);
            let signal = CompletionSignal::new(theme.key());
            signal.succeed();
            return signal;
        }

        let url = self.inner.urls.url_for(theme).to_string();
        let signal = CompletionSignal::new(theme.key());
        head.in_flight.insert(theme, signal.clone());
        head.stylesheets.push(ManagedStylesheet {
            theme,
            href: url.clone(),
            loaded: false,
        });
        self.inner.loads_in_flight.fetch_add(1, Ordering::SeqCst);
        drop(head);

        log::debug!("Loading highlight theme '{}' from {url}", theme.key());
        let inner = Arc::clone(&self.inner);
        let task_signal = signal.clone();
        tokio::spawn(async move {
            inner.finish_load(theme, url, task_signal).await;
        });

        signal
    }

    /// Request `theme` and wait for it to attach.
    pub async fn ensure_theme(&self, theme: Theme) -> Result<(), ThemeLoadError> {
        self.load_theme(theme)
            .await
            .wait()
            .await
            .map_err(|reason| ThemeLoadError::new(theme, reason))
    }

    /// Fetch every palette concurrently, so a later switch is served warm.
    ///
    /// Only the requested palette (light when nothing has been requested
    /// yet) is attached; the others are fetched through the loader without
    /// entering the managed set. Failures are logged, not returned.
    pub async fn preload_themes(&self) {
        let keep = self.inner.head.lock().await.requested.unwrap_or_default();
        let warm = Theme::ALL
            .into_iter()
            .filter(|theme| *theme != keep)
            .map(move |theme| self.inner.loader.load(theme, self.inner.urls.url_for(theme)));

        let (warmed, kept) =
            futures::future::join(futures::future::join_all(warm), self.ensure_theme(keep)).await;
        for err in warmed.into_iter().chain([kept]).filter_map(Result::err) {
            log::warn!("Theme preload failed: {err}");
        }
    }

    /// Where `theme` currently stands.
    pub async fn state(&self, theme: Theme) -> ThemeLoadState {
        let head = self.inner.head.lock().await;
        if head.in_flight.contains_key(&theme) {
            ThemeLoadState::InFlight
        } else if head.is_attached(theme) {
            ThemeLoadState::Attached
        } else {
            ThemeLoadState::Absent
        }
    }

    /// Whether any theme load is in flight.
    pub fn is_loading(&self) -> bool {
        self.inner.loads_in_flight.load(Ordering::SeqCst) > 0
    }

    /// The attached theme, if exactly one palette is attached.
    pub async fn current_theme(&self) -> Option<Theme> {
        let head = self.inner.head.lock().await;
        let mut attached = head.stylesheets.iter().filter(|s| s.loaded).map(|s| s.theme);
        let first = attached.next()?;
        attached.all(|t| t == first).then_some(first)
    }

    /// Snapshot of the managed stylesheet set, in attach order.
    pub async fn stylesheets(&self) -> Vec<ManagedStylesheet> {
        self.inner.head.lock().await.stylesheets.clone()
    }

    /// The managed stylesheet set rendered as `<link>` tags, one per line.
    pub async fn link_tags(&self) -> String {
        self.stylesheets()
            .await
            .iter()
            .map(ManagedStylesheet::to_link_tag)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Whether two handles share the same state.
    pub fn same_as(&self, other: &HighlightThemeCoordinator) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl std::fmt::Debug for HighlightThemeCoordinator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HighlightThemeCoordinator")
            .field("urls", &self.inner.urls)
            .field("loading", &self.is_loading())
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Tests
// ============================================================================
