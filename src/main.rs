use anyhow::{Context, Result};
use biolink::{Config, LivePage, Page, RenderContext};
use std::fs;
use std::process::ExitCode;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Installs the stderr log subscriber, honoring `RUST_LOG`.
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "biolink=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Generates the landing page.
///
/// Returns `Ok(false)` when the configuration document could not be loaded.
/// That failure has already been logged and nothing has been written.
fn run(config: &Config) -> Result<bool> {
    let source = config.resolve_source()?;
    let ctx = RenderContext {
        page_url: config.page_url(&source),
    };
    let resolver = config.icon_resolver();

    let mut page = Page::default();
    let mut adapter = LivePage::new(&mut page, resolver.as_deref());
    if biolink::initialize(&source, &mut adapter, &ctx).is_err() {
        return Ok(false);
    }

    fs::create_dir_all(&config.output).context("Failed to create output directory")?;

    let assets_dir = config.output.join("assets");
    fs::create_dir_all(&assets_dir).context("Failed to create assets directory")?;
    biolink::write_css_assets(&assets_dir).context("Failed to write CSS assets")?;

    let index_path = config.output.join("index.html");
    fs::write(&index_path, page.to_html().into_string())
        .with_context(|| format!("Failed to write {}", index_path.display()))?;

    info!(path = %index_path.display(), "generated page");

    if config.open
        && let Err(e) = open::that(&index_path)
    {
        warn!(error = %e, "failed to open generated page");
    }

    Ok(true)
}

fn main() -> Result<ExitCode> {
    init_tracing();

    let config = Config::parse();
    config.validate().context("Invalid configuration")?;

    if run(&config)? {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
