//! Page model and mutation adapters
//!
//! [`Page`] models the static page skeleton the render pass writes into.
//! Adapters take mutations from [`crate::render`] and either apply them to a
//! page ([`LivePage`]) or record them ([`Recorder`]).

use maud::Markup;
use tracing::warn;

use crate::components::layout::document;
use crate::icons::IconResolver;
use crate::profile::Visual;
use crate::render::{Card, MetaAttr, Mutation, SocialLink};

/// Document title of the skeleton before any configuration is applied.
pub const DEFAULT_DOCUMENT_TITLE: &str = "Links";

/// Skeleton elements the render pass writes into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    Title,
    Subtitle,
    Logo,
    LogoWrap,
    Links,
    Socials,
}

impl Slot {
    /// Element id of the slot in the generated markup.
    pub fn id(self) -> &'static str {
        match self {
            Slot::Title => "title",
            Slot::Subtitle => "subtitle",
            Slot::Logo => "logo",
            Slot::LogoWrap => "logoWrap",
            Slot::Links => "links",
            Slot::Socials => "socials",
        }
    }
}

/// A `<meta>` tag in the document head.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetaTag {
    pub attr: MetaAttr,
    pub key: String,
    pub content: String,
}

/// Logo image state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Logo {
    pub src: Option<String>,
    pub alt: String,
    /// Wrapper to hide when the image fails to load.
    pub error_hides: Option<Slot>,
}

/// A card in the links container, with its resolved glyph if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedCard {
    pub card: Card,
    pub glyph: Option<String>,
}

/// In-memory page. `Page::default()` is the pre-render skeleton.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub document_title: String,
    pub style_vars: Vec<(String, String)>,
    pub metas: Vec<MetaTag>,
    pub title: String,
    pub subtitle: String,
    pub logo: Logo,
    pub hidden: Vec<Slot>,
    pub links: Vec<RenderedCard>,
    pub socials: Vec<SocialLink>,
    /// Icon runtime markup emitted at the end of the body.
    pub icon_runtime: Option<String>,
}

impl Default for Page {
    fn default() -> Self {
        Self {
            document_title: DEFAULT_DOCUMENT_TITLE.to_string(),
            style_vars: Vec::new(),
            metas: Vec::new(),
            title: String::new(),
            subtitle: String::new(),
            logo: Logo::default(),
            hidden: Vec::new(),
            links: Vec::new(),
            socials: Vec::new(),
            icon_runtime: None,
        }
    }
}

impl Page {
    /// Applies one mutation.
    ///
    /// # Arguments
    ///
    /// * `mutation`: Change to apply
    /// * `resolver`: Icon resolver used by [`Mutation::ResolveIcons`]
    pub fn apply(&mut self, mutation: &Mutation, resolver: Option<&dyn IconResolver>) {
        match mutation {
            Mutation::SetStyleVar { name, value } => {
                match self.style_vars.iter_mut().find(|(n, _)| n == *name) {
                    Some((_, existing)) => existing.clone_from(value),
                    None => self.style_vars.push((name.to_string(), value.clone())),
                }
            }
            Mutation::SetDocumentTitle(title) => self.document_title.clone_from(title),
            Mutation::UpsertMeta { attr, key, content } => self.upsert_meta(*attr, key, content),
            Mutation::SetText { slot, text } => match slot {
                Slot::Title => self.title.clone_from(text),
                Slot::Subtitle => self.subtitle.clone_from(text),
                other => warn!(slot = ?other, "slot has no text content"),
            },
            Mutation::SetImage { slot, src, alt } => match slot {
                Slot::Logo => {
                    self.logo.src = Some(src.clone());
                    self.logo.alt.clone_from(alt);
                }
                other => warn!(slot = ?other, "slot is not an image"),
            },
            Mutation::HideOnImageError { image, wrapper } => match image {
                Slot::Logo => self.logo.error_hides = Some(*wrapper),
                other => warn!(slot = ?other, "slot is not an image"),
            },
            Mutation::Hide(slot) => {
                if !self.hidden.contains(slot) {
                    self.hidden.push(*slot);
                }
            }
            Mutation::ClearChildren(slot) => match slot {
                Slot::Links => self.links.clear(),
                Slot::Socials => self.socials.clear(),
                other => warn!(slot = ?other, "slot is not a container"),
            },
            Mutation::AppendCard { slot, card } => match slot {
                Slot::Links => self.links.push(RenderedCard {
                    card: card.clone(),
                    glyph: None,
                }),
                other => warn!(slot = ?other, "cards only go into the links container"),
            },
            Mutation::ResolveIcons => {
                if let Some(resolver) = resolver {
                    self.resolve_icons(resolver);
                }
            }
            Mutation::AppendSocial { slot, link } => match slot {
                Slot::Socials => self.socials.push(link.clone()),
                other => warn!(slot = ?other, "socials only go into the socials container"),
            },
        }
    }

    /// Whether the slot has been hidden.
    pub fn is_hidden(&self, slot: Slot) -> bool {
        self.hidden.contains(&slot)
    }

    /// Looks up a meta tag by its key attribute.
    pub fn meta(&self, attr: MetaAttr, key: &str) -> Option<&str> {
        self.metas
            .iter()
            .find(|m| m.attr == attr && m.key == key)
            .map(|m| m.content.as_str())
    }

    /// Serializes the page to a complete HTML document.
    pub fn to_html(&self) -> Markup {
        document(self)
    }

    fn upsert_meta(&mut self, attr: MetaAttr, key: &str, content: &str) {
        match self.metas.iter_mut().find(|m| m.attr == attr && m.key == key) {
            Some(existing) => existing.content = content.to_string(),
            None => self.metas.push(MetaTag {
                attr,
                key: key.to_string(),
                content: content.to_string(),
            }),
        }
    }

    fn resolve_icons(&mut self, resolver: &dyn IconResolver) {
        for rendered in &mut self.links {
            if rendered.glyph.is_some() {
                continue;
            }
            if let Visual::Symbol(name) = &rendered.card.visual {
                rendered.glyph = resolver.resolve(name).map(Markup::into_string);
            }
        }
        self.icon_runtime = resolver.runtime().map(Markup::into_string);
    }
}

/// Receiver of render mutations.
pub trait Adapter {
    fn apply(&mut self, mutation: &Mutation);
}

/// Production adapter: applies mutations to a page.
pub struct LivePage<'a> {
    page: &'a mut Page,
    resolver: Option<&'a dyn IconResolver>,
}

impl<'a> LivePage<'a> {
    pub fn new(page: &'a mut Page, resolver: Option<&'a dyn IconResolver>) -> Self {
        Self { page, resolver }
    }
}

impl Adapter for LivePage<'_> {
    fn apply(&mut self, mutation: &Mutation) {
        self.page.apply(mutation, self.resolver);
    }
}

/// Test adapter: keeps every applied mutation in order.
#[derive(Debug, Default)]
pub struct Recorder {
    pub applied: Vec<Mutation>,
}

impl Adapter for Recorder {
    fn apply(&mut self, mutation: &Mutation) {
        self.applied.push(mutation.clone());
    }
}

/// Applies mutations in order.
pub fn apply_all(adapter: &mut dyn Adapter, mutations: &[Mutation]) {
    for mutation in mutations {
        adapter.apply(mutation);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icons::{LucideScript, SpriteResolver};
    use crate::profile::{LinkItem, Profile};
    use crate::render::{RenderContext, render};

    fn symbol_card(name: &str) -> Mutation {
        Mutation::AppendCard {
            slot: Slot::Links,
            card: Card {
                href: "#".to_string(),
                visual: Visual::Symbol(name.to_string()),
                label: "1. Location".to_string(),
                subtext: None,
            },
        }
    }

    #[test]
    fn test_default_page_is_skeleton() {
        // Arrange & Act
        let page = Page::default();

        // Assert
        assert_eq!(page.document_title, DEFAULT_DOCUMENT_TITLE);
        assert!(page.metas.is_empty());
        assert!(page.links.is_empty());
        assert!(!page.is_hidden(Slot::LogoWrap));
    }

    #[test]
    fn test_style_var_upsert_replaces_value() {
        // Arrange
        let mut page = Page::default();

        // Act
        for value in ["red", "blue"] {
            page.apply(
                &Mutation::SetStyleVar {
                    name: "--bg",
                    value: value.to_string(),
                },
                None,
            );
        }

        // Assert
        assert_eq!(page.style_vars, vec![("--bg".to_string(), "blue".to_string())]);
    }

    #[test]
    fn test_meta_upsert_keyed_by_attribute() {
        // Arrange
        let mut page = Page::default();
        let og = Mutation::UpsertMeta {
            attr: MetaAttr::Property,
            key: "og:title",
            content: "Jane".to_string(),
        };
        let renamed = Mutation::UpsertMeta {
            attr: MetaAttr::Property,
            key: "og:title",
            content: "Janet".to_string(),
        };

        // Act
        page.apply(&og, None);
        page.apply(&renamed, None);

        // Assert
        assert_eq!(page.metas.len(), 1);
        assert_eq!(page.meta(MetaAttr::Property, "og:title"), Some("Janet"));
        assert_eq!(page.meta(MetaAttr::Name, "og:title"), None);
    }

    #[test]
    fn test_resolve_icons_with_resolver() {
        // Arrange
        let mut page = Page::default();
        let resolver = SpriteResolver::new("/s.svg");
        page.apply(&symbol_card("map"), None);

        // Act
        page.apply(&Mutation::ResolveIcons, Some(&resolver as &dyn IconResolver));

        // Assert
        let glyph = page.links[0].glyph.as_deref().expect("Glyph should resolve");
        assert!(glyph.contains("/s.svg#map"));
    }

    #[test]
    fn test_resolve_icons_with_script_keeps_placeholder() {
        // Arrange
        let mut page = Page::default();
        let resolver = LucideScript::default();
        page.apply(&symbol_card("map"), None);

        // Act
        page.apply(&Mutation::ResolveIcons, Some(&resolver as &dyn IconResolver));

        // Assert
        assert_eq!(page.links[0].glyph, None);
        let runtime = page.icon_runtime.as_deref().expect("Runtime should be recorded");
        assert!(runtime.contains("lucide.createIcons()"));
    }

    #[test]
    fn test_resolve_icons_without_resolver_keeps_placeholder() {
        // Arrange
        let mut page = Page::default();
        page.apply(&symbol_card("map"), None);

        // Act
        page.apply(&Mutation::ResolveIcons, None);

        // Assert
        assert_eq!(page.links[0].glyph, None);
    }

    #[test]
    fn test_apply_twice_is_idempotent() {
        // Arrange
        let profile = Profile {
            title: Some("Jane".to_string()),
            links: Some(vec![LinkItem {
                title: Some("Shop".to_string()),
                ..Default::default()
            }]),
            ..Default::default()
        };
        let mutations = render(&profile, &RenderContext::default());
        let mut once = Page::default();
        let mut twice = Page::default();

        // Act
        apply_all(&mut LivePage::new(&mut once, None), &mutations);
        apply_all(&mut LivePage::new(&mut twice, None), &mutations);
        apply_all(&mut LivePage::new(&mut twice, None), &mutations);

        // Assert
        assert_eq!(once, twice);
        assert_eq!(twice.links.len(), 1);
    }

    #[test]
    fn test_recorder_keeps_order() {
        // Arrange
        let mut recorder = Recorder::default();
        let mutations = vec![Mutation::Hide(Slot::LogoWrap), Mutation::ResolveIcons];

        // Act
        apply_all(&mut recorder, &mutations);

        // Assert
        assert_eq!(recorder.applied, mutations);
    }
}
