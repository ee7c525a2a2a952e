//! Link card component

use maud::{Markup, PreEscaped, html};

use crate::icons::placeholder;
use crate::page::RenderedCard;
use crate::profile::{Subtext, Visual};

/// Renders one link card
///
/// The card navigates through a full-size overlay anchor rather than by
/// wrapping its content in `<a>`, since a phone link inside would be a
/// nested anchor. The phone link sits above the overlay and stops click
/// propagation so dialing never also opens the card target.
///
/// # Arguments
///
/// * `rendered`: Card with its resolved glyph, if any
///
/// # Returns
///
/// Card markup
pub fn card(rendered: &RenderedCard) -> Markup {
    let card = &rendered.card;

    html! {
        div class="card" {
            a class="card-link" href=(card.href) target="_blank" rel="noopener"
                aria-label=(card.label) {}
            div class="fav" {
                (visual(&card.visual, rendered.glyph.as_deref()))
            }
            div class="meta" {
                div class="label" { (card.label) }
                @if let Some(subtext) = &card.subtext {
                    div class="sub" { (sub(subtext)) }
                }
            }
        }
    }
}

fn visual(visual: &Visual, glyph: Option<&str>) -> Markup {
    html! {
        @match visual {
            Visual::Image(src) | Visual::IconUrl(src) => { img src=(src) alt=""; },
            Visual::Symbol(name) => {
                @if let Some(glyph) = glyph {
                    (PreEscaped(glyph))
                } @else {
                    (placeholder(name))
                }
            },
            Visual::Empty => {},
        }
    }
}

fn sub(subtext: &Subtext) -> Markup {
    html! {
        @match subtext {
            Subtext::Phone { display, dial } => {
                a class="tel" href=(dial) onclick="event.stopPropagation()" { (display) }
            },
            Subtext::Address(text) | Subtext::Description(text) => { (text) },
        }
    }
}
