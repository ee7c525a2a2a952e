//! Symbolic icon resolution
//!
//! Link cards may carry a symbolic icon name instead of an image. Those are
//! inserted as `data-lucide` placeholders and handed to an [`IconResolver`]
//! after link rendering. Without a resolver the placeholders stay empty.

use maud::{Markup, PreEscaped, html};

/// Lucide browser bundle, exposes the global `lucide.createIcons()`.
pub const DEFAULT_LUCIDE_SCRIPT: &str = "https://unpkg.com/lucide@latest";

/// Resolves a symbolic icon name into visible glyph markup.
pub trait IconResolver {
    /// Returns glyph markup, or `None` to leave the placeholder untouched.
    fn resolve(&self, name: &str) -> Option<Markup>;

    /// Markup appended to the end of the page body once icons are resolved.
    fn runtime(&self) -> Option<Markup> {
        None
    }
}

/// Leaves placeholders in place and loads Lucide in the browser to turn
/// them into glyphs.
#[derive(Debug, Clone)]
pub struct LucideScript {
    script_url: String,
}

impl LucideScript {
    pub fn new(script_url: impl Into<String>) -> Self {
        Self {
            script_url: script_url.into(),
        }
    }
}

impl Default for LucideScript {
    fn default() -> Self {
        Self::new(DEFAULT_LUCIDE_SCRIPT)
    }
}

impl IconResolver for LucideScript {
    fn resolve(&self, _name: &str) -> Option<Markup> {
        None
    }

    fn runtime(&self) -> Option<Markup> {
        Some(html! {
            script src=(self.script_url) {}
            script { (PreEscaped("lucide.createIcons();")) }
        })
    }
}

/// Resolves icons as references into an SVG sprite sheet.
///
/// Browsers only follow `<use>` references into same-origin documents, so
/// the sprite must be served next to the page.
#[derive(Debug, Clone)]
pub struct SpriteResolver {
    sprite_url: String,
}

impl SpriteResolver {
    pub fn new(sprite_url: impl Into<String>) -> Self {
        Self {
            sprite_url: sprite_url.into(),
        }
    }
}

impl IconResolver for SpriteResolver {
    fn resolve(&self, name: &str) -> Option<Markup> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }

        // `use` is a Rust keyword, so the element is written by hand
        let href = html! { (format!("{}#{}", self.sprite_url, name)) }.into_string();

        Some(html! {
            svg class=(format!("lucide lucide-{}", name))
                width="24" height="24" aria-hidden="true" {
                (PreEscaped(format!(r#"<use href="{}"></use>"#, href)))
            }
        })
    }
}

/// Renders the unresolved placeholder for a symbolic icon.
pub fn placeholder(name: &str) -> Markup {
    html! {
        i data-lucide=(name) {}
    }
}
