//! Configuration for the Folio CLI.
//!
//! Provides the [`FolioConfig`] struct that loads from TOML files,
//! environment variables, and defaults using the `confyg` crate.
//!
//! # Loading Priority
//!
//! 1. Explicit `--config <path>` flag
//! 2. `FOLIO_CONFIG` environment variable
//! 3. XDG default: `~/.config/folio/config.toml`
//! 4. Built-in defaults

use std::path::PathBuf;
use std::sync::Arc;

use confyg::{env, Confygery};
use folio_articles::{CatalogLayout, DocumentSource, FsSource, HttpSource};
use folio_core::{Error, Result, Theme};
use folio_render::ThemeUrls;
use folio_search::SearchConfig;
use serde::{Deserialize, Serialize};

// ============================================================================
// Configuration structs
// ============================================================================

/// Main configuration for the Folio CLI.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FolioConfig {
    /// Where articles are read from.
    pub content: ContentConfig,

    /// Highlight palette selection.
    pub theme: ThemeConfig,

    /// Search defaults.
    pub search: SearchConfig,

    /// Log output.
    pub logging: LoggingConfig,
}

/// Article storage configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    /// HTTP origin serving the manifest and documents. Takes precedence
    /// over `path`.
    pub base_url: Option<String>,

    /// Local directory containing the articles directory.
    pub path: Option<String>,

    /// Manifest path relative to the content root.
    pub manifest: String,

    /// Document directory relative to the content root.
    pub articles_dir: String,
}

/// Highlight palette configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Palette used when `show` is not given `--theme`.
    pub default: Theme,

    /// Stylesheet for the light palette.
    pub light_url: String,

    /// Stylesheet for the dark palette.
    pub dark_url: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Base log level when `RUST_LOG` is unset.
    pub level: String,
}

// ============================================================================
// Default implementations
// ============================================================================

impl Default for ContentConfig {
    fn default() -> Self {
        let layout = CatalogLayout::default();
        Self {
            base_url: None,
            path: None,
            manifest: layout.manifest_path,
            articles_dir: layout.articles_dir,
        }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        let urls = ThemeUrls::default();
        Self {
            default: Theme::default(),
            light_url: urls.light,
            dark_url: urls.dark,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

// ============================================================================
// Config loading
// ============================================================================

impl FolioConfig {
    /// Load configuration from file, environment, and defaults.
    ///
    /// A config path that does not exist is skipped, leaving the defaults.
    pub fn load(config_path: Option<&str>) -> Result<Self> {
        let mut builder =
            Confygery::new().map_err(|e| Error::config(format!("config init: {e}")))?;

        if let Some(path) = Self::resolve_config_path(config_path)
            && path.exists()
        {
            builder
                .add_file(&path.to_string_lossy())
                .map_err(|e| Error::config(format!("config file: {e}")))?;
        }

        let mut env_opts = env::Options::with_top_level("FOLIO");
        env_opts.add_section("content");
        env_opts.add_section("theme");
        env_opts.add_section("search");
        env_opts.add_section("logging");
        builder
            .add_env(env_opts)
            .map_err(|e| Error::config(format!("config env: {e}")))?;

        builder
            .build()
            .map_err(|e| Error::config(format!("config build: {e}")))
    }

    /// Resolve the config file path from explicit flag, env var, or XDG default.
    pub fn resolve_config_path(explicit: Option<&str>) -> Option<PathBuf> {
        if let Some(path) = explicit {
            return Some(PathBuf::from(path));
        }

        if let Ok(path) = std::env::var("FOLIO_CONFIG") {
            return Some(PathBuf::from(path));
        }

        Self::default_config_path()
    }

    /// Return the XDG default config path.
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("folio").join("config.toml"))
    }

    /// Serialize this config to a pretty-printed TOML string.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::config(e.to_string()))
    }

    // ------------------------------------------------------------------------
    // Component wiring
    // ------------------------------------------------------------------------

    /// Build the document source: HTTP when `base_url` is set, otherwise
    /// the local `path`, otherwise the working directory.
    pub fn document_source(&self) -> Result<Arc<dyn DocumentSource>> {
        if let Some(url) = &self.content.base_url {
            return Ok(Arc::new(HttpSource::new(url.clone())));
        }
        let root = match &self.content.path {
            Some(p) => PathBuf::from(p),
            None => std::env::current_dir()
                .map_err(|e| Error::config(format!("Could not determine content path: {e}")))?,
        };
        Ok(Arc::new(FsSource::new(root)))
    }

    /// Manifest and document locations.
    pub fn layout(&self) -> CatalogLayout {
        CatalogLayout {
            manifest_path: self.content.manifest.clone(),
            articles_dir: self.content.articles_dir.clone(),
        }
    }

    /// Stylesheet URLs for both palettes.
    pub fn theme_urls(&self) -> ThemeUrls {
        ThemeUrls::new(self.theme.light_url.clone(), self.theme.dark_url.clone())
    }
}

// ============================================================================
// Tests
// ============================================================================
