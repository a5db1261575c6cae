use std::path;

use anyhow::Context as _;
use docsite_config::Format;
use docsite_config::SiteConfig;

use crate::error::Result;

use super::check;
use super::Issue;

/// Base path used when neither the environment nor the document sets one.
pub const DEFAULT_BASE: &str = "/";

/// Resolved, read-only view of a [`SiteConfig`].
///
/// Built once at startup and handed by reference to whatever consumes the
/// configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Site {
    root: path::PathBuf,
    base: String,
    config: SiteConfig,
}

impl Site {
    /// `base_override` usually comes from the `DOCSITE_BASE` environment variable.
    ///
    /// A config built in memory has no root; it is resolved against the current directory.
    pub fn from_config(config: SiteConfig, base_override: Option<&str>) -> Result<Self> {
        let root = if config.root.as_os_str().is_empty() {
            path::Path::new(".")
        } else {
            config.root.as_path()
        };
        let root = dunce::canonicalize(root)
            .with_context(|| format!("Failed to resolve site root {:?}", config.root))?;
        let base = resolve_base(config.base.as_deref(), base_override);
        log::debug!("Resolved base `{base}` for {}", root.display());
        Ok(Self { root, base, config })
    }

    pub fn root(&self) -> &path::Path {
        &self.root
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub fn check(&self) -> Vec<Issue> {
        check::check_site(self)
    }

    /// Render the document as the external builder should read it, with `base` resolved.
    pub fn export(&self, format: Format) -> Result<String> {
        let mut config = self.config.clone();
        config.base = Some(self.base.clone());
        let rendered = config.to_string_as(format)?;
        Ok(rendered)
    }
}

/// An override wins over the document; empty values count as unset.
pub fn resolve_base(document: Option<&str>, base_override: Option<&str>) -> String {
    base_override
        .filter(|b| !b.is_empty())
        .or_else(|| document.filter(|b| !b.is_empty()))
        .unwrap_or(DEFAULT_BASE)
        .to_owned()
}
