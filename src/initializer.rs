//! Page initializer
//!
//! Fetches the configuration document once and applies the render pass.
//! Fetching is all-or-nothing: on failure a single diagnostic is logged and
//! the page is left exactly as it was.

use tracing::{error, info};

use crate::fetch::{ConfigSource, FetchError};
use crate::page::{Adapter, apply_all};
use crate::render::{RenderContext, render};

/// Runs the page initializer.
///
/// # Arguments
///
/// * `source`: Where the configuration document comes from
/// * `adapter`: Receiver of the render mutations
/// * `ctx`: Page environment values
///
/// # Errors
///
/// Returns the fetch failure after logging it. No mutation has been applied
/// when an error is returned.
pub fn initialize(
    source: &dyn ConfigSource,
    adapter: &mut dyn Adapter,
    ctx: &RenderContext,
) -> Result<(), FetchError> {
    let profile = match source.fetch() {
        Ok(profile) => profile,
        Err(err) => {
            error!(location = %source.location(), error = %err, "failed to load configuration");
            return Err(err);
        }
    };

    let mutations = render(&profile, ctx);
    apply_all(adapter, &mutations);

    info!(
        links = profile.links().len(),
        socials = profile.socials().len(),
        "page initialized"
    );
    Ok(())
}
