//! Render pass
//!
//! Turns a [`Profile`] into an ordered list of [`Mutation`] commands. The
//! pass is pure: it never touches a page. Adapters in [`crate::page`] apply
//! the commands to a page model or record them.

use crate::page::Slot;
use crate::profile::{LinkItem, Profile, SocialItem, Subtext, Visual, present};

/// Navigation target used when a link or social entry has no URL.
pub const PLACEHOLDER_HREF: &str = "#";

/// Alt text for the logo when the profile has no title.
const LOGO_FALLBACK_ALT: &str = "logo";

/// Text and alt fallback for socials without a platform.
const SOCIAL_FALLBACK_TEXT: &str = "social";

/// Environment values that do not come from the configuration document.
#[derive(Debug, Clone, Default)]
pub struct RenderContext {
    /// Canonical URL of the rendered page, published as `og:url`.
    pub page_url: Option<String>,
}

/// Attribute a metadata tag is keyed by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetaAttr {
    /// Share-graph namespace (`<meta property="og:...">`).
    Property,
    /// Social-card namespace (`<meta name="twitter:...">`).
    Name,
}

impl MetaAttr {
    pub fn as_str(self) -> &'static str {
        match self {
            MetaAttr::Property => "property",
            MetaAttr::Name => "name",
        }
    }
}

/// One clickable link card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub href: String,
    pub visual: Visual,
    pub label: String,
    pub subtext: Option<Subtext>,
}

/// Content of a social link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SocialContent {
    Image { src: String, alt: String },
    Text(String),
}

/// One social link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocialLink {
    pub href: String,
    pub content: SocialContent,
}

/// A single page change produced by the render pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation {
    SetStyleVar { name: &'static str, value: String },
    SetDocumentTitle(String),
    UpsertMeta {
        attr: MetaAttr,
        key: &'static str,
        content: String,
    },
    SetText { slot: Slot, text: String },
    SetImage { slot: Slot, src: String, alt: String },
    /// Hide `wrapper` if the image in `image` fails to load later on.
    HideOnImageError { image: Slot, wrapper: Slot },
    Hide(Slot),
    ClearChildren(Slot),
    AppendCard { slot: Slot, card: Card },
    /// Hand symbolic icon placeholders to the icon resolver.
    ResolveIcons,
    AppendSocial { slot: Slot, link: SocialLink },
}

/// Runs every render step in fixed order.
///
/// # Arguments
///
/// * `profile`: Fetched configuration document
/// * `ctx`: Page environment values
///
/// # Returns
///
/// Mutations to apply, in order
pub fn render(profile: &Profile, ctx: &RenderContext) -> Vec<Mutation> {
    let mut out = Vec::new();
    out.extend(theme(profile));
    out.extend(document_title(profile));
    out.extend(share_metadata(profile, ctx));
    out.extend(text_content(profile));
    out.extend(logo(profile));
    out.extend(links(profile.links()));
    out.push(Mutation::ResolveIcons);
    out.extend(socials(profile.socials()));
    out
}

/// Theme variables for each present color field.
pub fn theme(profile: &Profile) -> Vec<Mutation> {
    [
        ("--bg", &profile.bg_color),
        ("--card", &profile.card_color),
        ("--text", &profile.text_color),
        ("--accent", &profile.accent_color),
    ]
    .into_iter()
    .filter_map(|(name, field)| {
        present(field).map(|value| Mutation::SetStyleVar {
            name,
            value: value.to_string(),
        })
    })
    .collect()
}

pub fn document_title(profile: &Profile) -> Option<Mutation> {
    profile
        .title()
        .map(|title| Mutation::SetDocumentTitle(title.to_string()))
}

/// Share-graph and social-card metadata. Entries with an empty source
/// value are skipped entirely.
pub fn share_metadata(profile: &Profile, ctx: &RenderContext) -> Vec<Mutation> {
    let page_url = ctx.page_url.as_deref().filter(|s| !s.is_empty());

    let entries: [(MetaAttr, &'static str, Option<&str>); 9] = [
        (MetaAttr::Property, "og:title", profile.title()),
        (MetaAttr::Property, "og:description", profile.subtitle()),
        (MetaAttr::Property, "og:image", profile.logo()),
        (MetaAttr::Property, "og:type", Some("website")),
        (MetaAttr::Property, "og:url", page_url),
        (MetaAttr::Name, "twitter:card", Some("summary_large_image")),
        (MetaAttr::Name, "twitter:title", profile.title()),
        (MetaAttr::Name, "twitter:description", profile.subtitle()),
        (MetaAttr::Name, "twitter:image", profile.logo()),
    ];

    entries
        .into_iter()
        .filter_map(|(attr, key, content)| {
            content.map(|content| Mutation::UpsertMeta {
                attr,
                key,
                content: content.to_string(),
            })
        })
        .collect()
}

/// Title and subtitle text. Always writes, clearing stale text.
pub fn text_content(profile: &Profile) -> [Mutation; 2] {
    [
        Mutation::SetText {
            slot: Slot::Title,
            text: profile.title().unwrap_or_default().to_string(),
        },
        Mutation::SetText {
            slot: Slot::Subtitle,
            text: profile.subtitle().unwrap_or_default().to_string(),
        },
    ]
}

pub fn logo(profile: &Profile) -> Vec<Mutation> {
    match profile.logo() {
        Some(src) => vec![
            Mutation::SetImage {
                slot: Slot::Logo,
                src: src.to_string(),
                alt: profile.title().unwrap_or(LOGO_FALLBACK_ALT).to_string(),
            },
            Mutation::HideOnImageError {
                image: Slot::Logo,
                wrapper: Slot::LogoWrap,
            },
        ],
        None => vec![Mutation::Hide(Slot::LogoWrap)],
    }
}

/// Clears the links container, then appends one card per item in order.
pub fn links(items: &[LinkItem]) -> Vec<Mutation> {
    let cards = items.iter().enumerate().map(|(index, item)| Mutation::AppendCard {
        slot: Slot::Links,
        card: card(item, index),
    });

    std::iter::once(Mutation::ClearChildren(Slot::Links))
        .chain(cards)
        .collect()
}

/// Builds the card for one link item.
pub fn card(item: &LinkItem, index: usize) -> Card {
    Card {
        href: present(&item.url).unwrap_or(PLACEHOLDER_HREF).to_string(),
        visual: Visual::select(item),
        label: item.label(index),
        subtext: Subtext::select(item),
    }
}

/// Clears the socials container, then appends one link per item in order.
pub fn socials(items: &[SocialItem]) -> Vec<Mutation> {
    let links = items.iter().map(|item| Mutation::AppendSocial {
        slot: Slot::Socials,
        link: social_link(item),
    });

    std::iter::once(Mutation::ClearChildren(Slot::Socials))
        .chain(links)
        .collect()
}

pub fn social_link(item: &SocialItem) -> SocialLink {
    let platform = present(&item.platform).unwrap_or(SOCIAL_FALLBACK_TEXT);
    let content = match present(&item.icon) {
        Some(src) => SocialContent::Image {
            src: src.to_string(),
            alt: platform.to_string(),
        },
        None => SocialContent::Text(platform.to_string()),
    };

    SocialLink {
        href: present(&item.url).unwrap_or(PLACEHOLDER_HREF).to_string(),
        content,
    }
}
