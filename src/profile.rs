//! Configuration document model
//!
//! Mirrors the JSON document that drives the landing page. Every field is
//! optional: absence means the corresponding render step is skipped, never
//! an error. Presence checks treat empty strings as absent.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Label used when a link has neither title nor name.
const FALLBACK_LINK_LABEL: &str = "Location";

/// Root configuration document.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    #[serde(default, deserialize_with = "text")]
    pub bg_color: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub card_color: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub text_color: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub accent_color: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub subtitle: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub logo: Option<String>,
    #[serde(default, deserialize_with = "list")]
    pub links: Option<Vec<LinkItem>>,
    #[serde(default, deserialize_with = "list")]
    pub socials: Option<Vec<SocialItem>>,
}

impl Profile {
    /// Parses a configuration document from JSON text.
    ///
    /// Scalar fields accept strings, numbers and booleans. Values of any
    /// other shape are treated as absent rather than rejected.
    ///
    /// # Errors
    ///
    /// Returns error if the text is not valid JSON or the root is not an object.
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }

    pub fn title(&self) -> Option<&str> {
        present(&self.title)
    }

    pub fn subtitle(&self) -> Option<&str> {
        present(&self.subtitle)
    }

    pub fn logo(&self) -> Option<&str> {
        present(&self.logo)
    }

    /// Link entries in document order, empty when absent.
    pub fn links(&self) -> &[LinkItem] {
        self.links.as_deref().unwrap_or_default()
    }

    /// Social entries in document order, empty when absent.
    pub fn socials(&self) -> &[SocialItem] {
        self.socials.as_deref().unwrap_or_default()
    }
}

/// One entry of the `links` list.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkItem {
    #[serde(default, deserialize_with = "text")]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub image: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub icon: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub icon_name: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub name: Option<String>,
    /// Explicit ordinal, used verbatim as the label prefix.
    #[serde(default, deserialize_with = "text")]
    pub number: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub address: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub description: Option<String>,
}

impl LinkItem {
    /// Card label: ordinal followed by the item's title, name or fallback.
    ///
    /// The ordinal is the explicit `number` when present, otherwise the
    /// 1-based position followed by a period.
    ///
    /// # Arguments
    ///
    /// * `index`: Zero-based position of the item in the links list
    pub fn label(&self, index: usize) -> String {
        let ordinal = match present(&self.number) {
            Some(explicit) => explicit.to_string(),
            None => format!("{}.", index + 1),
        };
        let name = present(&self.title)
            .or_else(|| present(&self.name))
            .unwrap_or(FALLBACK_LINK_LABEL);

        format!("{} {}", ordinal, name)
    }
}

/// One entry of the `socials` list.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialItem {
    #[serde(default, deserialize_with = "text")]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub icon: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub platform: Option<String>,
}

/// Visual slot content of a link card, chosen by priority.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Visual {
    Image(String),
    IconUrl(String),
    Symbol(String),
    Empty,
}

impl Visual {
    /// Selects the visual for a link: image, then icon URL, then symbolic
    /// icon name. Lower priority fields are ignored once one matches.
    pub fn select(item: &LinkItem) -> Self {
        if let Some(src) = present(&item.image) {
            Visual::Image(src.to_string())
        } else if let Some(src) = present(&item.icon) {
            Visual::IconUrl(src.to_string())
        } else if let Some(name) = present(&item.icon_name) {
            Visual::Symbol(name.to_string())
        } else {
            Visual::Empty
        }
    }
}

/// Subtext line of a link card, chosen by priority.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Subtext {
    /// Dialable phone link; `display` is the number as written.
    Phone { display: String, dial: String },
    Address(String),
    Description(String),
}

impl Subtext {
    /// Selects the subtext for a link: phone, then address, then
    /// description. Returns `None` when the line would be empty.
    pub fn select(item: &LinkItem) -> Option<Self> {
        if let Some(phone) = present(&item.phone) {
            Some(Subtext::Phone {
                display: phone.to_string(),
                dial: dial_target(phone),
            })
        } else if let Some(address) = present(&item.address) {
            Some(Subtext::Address(address.to_string()))
        } else {
            present(&item.description).map(|d| Subtext::Description(d.to_string()))
        }
    }
}

/// Builds a `tel:` target with all whitespace removed.
pub fn dial_target(phone: &str) -> String {
    let digits: String = phone.chars().filter(|c| !c.is_whitespace()).collect();
    format!("tel:{}", digits)
}

/// Reads a scalar field as display text.
///
/// Numbers and `true` become their text form; `false`, `0`, `null`, arrays
/// and objects count as absent.
fn text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Value>::deserialize(deserializer)?
        .as_ref()
        .and_then(scalar_text))
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Bool(true) => Some("true".to_string()),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                (i != 0).then(|| i.to_string())
            } else if let Some(u) = n.as_u64() {
                Some(u.to_string())
            } else {
                // f64 Display drops the fraction of integral values: 7.0 -> "7"
                n.as_f64().filter(|f| *f != 0.0).map(|f| f.to_string())
            }
        }
        Value::Bool(false) | Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Reads an entry list. A non-array value counts as absent and an entry
/// that is not an object renders with every field absent.
fn list<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let Some(Value::Array(entries)) = Option::<Value>::deserialize(deserializer)? else {
        return Ok(None);
    };

    Ok(Some(
        entries
            .into_iter()
            .map(|entry| T::deserialize(entry).unwrap_or_default())
            .collect(),
    ))
}

/// Returns the field value when it is present and non-empty.
pub(crate) fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}
