//! Link-in-bio landing page generator driven by a JSON configuration.

mod assets;
pub mod components;
mod config;
pub mod fetch;
pub mod icons;
mod initializer;
pub mod page;
pub mod profile;
pub mod render;

pub use assets::write_css_assets;
pub use config::Config;
pub use fetch::{ConfigSource, FetchError, FileSource, HttpSource, Source};
pub use icons::{IconResolver, LucideScript, SpriteResolver};
pub use initializer::initialize;
pub use page::{Adapter, LivePage, Page, Recorder, Slot};
pub use profile::{LinkItem, Profile, SocialItem, Subtext, Visual};
pub use render::{Mutation, RenderContext, render};
