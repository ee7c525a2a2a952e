//! Page document component

use maud::{DOCTYPE, Markup, PreEscaped, html};

use super::card::card;
use super::social::social_link;
use crate::page::{Page, Slot};
use crate::render::MetaAttr;

/// Stylesheet path relative to the generated page.
pub const STYLESHEET_PATH: &str = "assets/style.css";

const HIDDEN_STYLE: &str = "display:none";

/// Renders the page as a complete HTML document
///
/// Root style variables are written on the `html` element the same way a
/// script would set them on `document.documentElement`. Skeleton elements
/// keep their fixed ids so later scripts can still address them.
///
/// # Arguments
///
/// * `page`: Page model after the render pass
///
/// # Returns
///
/// Complete HTML document
pub fn document(page: &Page) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" style=[root_style(&page.style_vars)] {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (page.document_title) }
                @for tag in &page.metas {
                    @match tag.attr {
                        MetaAttr::Property => { meta property=(tag.key) content=(tag.content); },
                        MetaAttr::Name => { meta name=(tag.key) content=(tag.content); },
                    }
                }
                link rel="stylesheet" href=(STYLESHEET_PATH);
            }
            body {
                main class="container" {
                    div id=(Slot::LogoWrap.id()) class="logo-wrap"
                        style=[hidden(page, Slot::LogoWrap)] {
                        img id=(Slot::Logo.id())
                            src=[page.logo.src.as_deref()]
                            alt=(page.logo.alt)
                            onerror=[page.logo.error_hides.map(hide_handler)];
                    }
                    h1 id=(Slot::Title.id()) class="title" { (page.title) }
                    p id=(Slot::Subtitle.id()) class="subtitle" { (page.subtitle) }
                    nav id=(Slot::Links.id()) class="links" {
                        @for rendered in &page.links {
                            (card(rendered))
                        }
                    }
                    div id=(Slot::Socials.id()) class="socials" {
                        @for link in &page.socials {
                            (social_link(link))
                        }
                    }
                }
                @if let Some(runtime) = &page.icon_runtime {
                    (PreEscaped(runtime))
                }
            }
        }
    }
}

/// Inline declaration list for root style variables, `None` when unset.
fn root_style(vars: &[(String, String)]) -> Option<String> {
    if vars.is_empty() {
        return None;
    }

    Some(
        vars.iter()
            .map(|(name, value)| format!("{}: {};", name, value))
            .collect::<Vec<_>>()
            .join(" "),
    )
}

fn hidden(page: &Page, slot: Slot) -> Option<&'static str> {
    page.is_hidden(slot).then_some(HIDDEN_STYLE)
}

/// `onerror` handler hiding the given wrapper.
fn hide_handler(wrapper: Slot) -> String {
    format!(
        "document.getElementById('{}').style.display='none'",
        wrapper.id()
    )
}
