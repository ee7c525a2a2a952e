//! Command line configuration.

use anyhow::{Context, Result, bail};
use clap::Parser;
use std::path::PathBuf;
use url::Url;

use crate::fetch::{DEFAULT_RESOURCE, Source};
use crate::icons::{DEFAULT_LUCIDE_SCRIPT, IconResolver, LucideScript, SpriteResolver};

/// Command line configuration for Biolink.
#[derive(Debug, Clone, Parser)]
#[command(name = "biolink", version, about, long_about = None)]
pub struct Config {
    /// Configuration document (URL, path, or path relative to --origin)
    #[arg(default_value = DEFAULT_RESOURCE)]
    pub source: String,

    /// Output directory
    #[arg(short, long, default_value = "dist")]
    pub output: PathBuf,

    /// Base URL that a relative configuration location resolves against
    #[arg(long)]
    pub origin: Option<Url>,

    /// Canonical URL of the published page (og:url)
    #[arg(long)]
    pub page_url: Option<Url>,

    /// Lucide script that turns icon placeholders into glyphs in the browser
    #[arg(long, default_value = DEFAULT_LUCIDE_SCRIPT)]
    pub icon_script: String,

    /// Same-origin SVG sprite sheet to resolve icon names at generation time
    #[arg(long, conflicts_with = "no_icons")]
    pub icon_sprite: Option<String>,

    /// Leave symbolic icons unresolved
    #[arg(long)]
    pub no_icons: bool,

    /// Open the generated page in the default browser
    #[arg(long)]
    pub open: bool,
}

impl Config {
    /// Parses configuration from command line arguments.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Validates configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the source or icon collaborator is empty, or the
    /// origin cannot act as a base URL.
    pub fn validate(&self) -> Result<()> {
        if self.source.trim().is_empty() {
            bail!("Configuration source must not be empty");
        }

        if let Some(origin) = &self.origin
            && origin.cannot_be_a_base()
        {
            bail!("Origin cannot be used as a base URL: {}", origin);
        }

        if self
            .icon_sprite
            .as_deref()
            .is_some_and(|sprite| sprite.trim().is_empty())
        {
            bail!("Icon sprite must not be empty");
        }

        if !self.no_icons && self.icon_script.trim().is_empty() {
            bail!("Icon script must not be empty unless --no-icons is set");
        }

        Ok(())
    }

    /// Resolves the configuration source.
    ///
    /// # Errors
    ///
    /// Returns error if the source cannot be joined against the origin.
    pub fn resolve_source(&self) -> Result<Source> {
        Source::resolve(&self.source, self.origin.as_ref())
            .with_context(|| format!("Cannot resolve configuration source: {}", self.source))
    }

    /// Returns the canonical page URL from configuration or the source.
    pub fn page_url(&self, source: &Source) -> Option<String> {
        match &self.page_url {
            Some(url) => Some(url.to_string()),
            None => source.page_url(),
        }
    }

    /// Returns the icon resolver, or `None` when icons are disabled.
    ///
    /// A sprite sheet resolves glyphs at generation time; otherwise the
    /// Lucide script resolves placeholders in the browser.
    pub fn icon_resolver(&self) -> Option<Box<dyn IconResolver>> {
        if self.no_icons {
            return None;
        }

        match &self.icon_sprite {
            Some(sprite) => Some(Box::new(SpriteResolver::new(sprite.clone()))),
            None => Some(Box::new(LucideScript::new(self.icon_script.clone()))),
        }
    }
}
