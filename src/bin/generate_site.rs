// One-shot site generator.
//
// Fetches the catalog document, renders the listing page and writes
// index.html under OUT_DIR. On a load failure the error panel becomes the
// whole document body and the process exits non-zero.
//
// Usage: CATALOG_URL=... OUT_DIR=site cargo run --bin generate_site

use std::path::Path;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use catalog_renderer_rust::{
    CatalogLoader, ListingView, PageController, PageMode, PageOutcome, PageShell,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing (structured logging)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "catalog_renderer_rust=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Configuration from environment variables
    let catalog_url = std::env::var("CATALOG_URL")
        .unwrap_or_else(|_| "http://localhost:8000/data.json".to_string());

    let out_dir = std::env::var("OUT_DIR").unwrap_or_else(|_| "site".to_string());

    let timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(10);

    tracing::info!("Configuration:");
    tracing::info!("  CATALOG_URL: {}", catalog_url);
    tracing::info!("  OUT_DIR: {}", out_dir);
    tracing::info!("  REQUEST_TIMEOUT_SECS: {}", timeout_secs);

    let loader = CatalogLoader::with_timeout(&catalog_url, Duration::from_secs(timeout_secs));
    let controller = PageController::new(loader);

    let outcome = controller.run(PageMode::Listing, PageShell::full()).await;

    std::fs::create_dir_all(&out_dir)
        .with_context(|| format!("failed to create output directory {}", out_dir))?;
    let index_path = Path::new(&out_dir).join("index.html");

    match outcome {
        PageOutcome::Listing { view, .. } => {
            std::fs::write(&index_path, listing_document(&view))
                .with_context(|| format!("failed to write {}", index_path.display()))?;
            tracing::info!("Wrote {}", index_path.display());
            Ok(())
        }
        PageOutcome::Failed { body } => {
            std::fs::write(&index_path, error_document(&body))
                .with_context(|| format!("failed to write {}", index_path.display()))?;
            tracing::error!("Catalog load failed, wrote error page to {}", index_path.display());
            bail!("catalog load failed");
        }
        PageOutcome::Detail { .. } => bail!("unexpected detail outcome for a listing request"),
    }
}

/// Wrap the rendered grids and static links in the page scaffold.
fn listing_document(view: &ListingView) -> String {
    let generated = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ");

    let course_grid = view.course_grid.as_deref().unwrap_or("");
    let store_grid = view.store_grid.as_deref().unwrap_or("");
    let (header_link, footer_link) = match &view.static_links {
        Some(links) => (links.header.as_str(), links.footer.as_str()),
        None => ("#", "#"),
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="es">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Biblioteca de Cursos y Tienda</title>
    <link rel="stylesheet" href="styles.css">
    <!-- generated: {generated} -->
</head>
<body>
    <header>
        <h1>Biblioteca de Cursos y Tienda</h1>
        <a id="btnWhatsappHeader" href="{header_link}" target="_blank">WhatsApp</a>
    </header>
    <main>
        <section>
            <h2>Cursos</h2>
            <div class="cursos-grid" id="cursos-grid">
{course_grid}            </div>
        </section>
        <section>
            <h2>Tienda</h2>
            <div class="tienda-grid" id="tienda-grid">
{store_grid}            </div>
        </section>
    </main>
    <footer>
        <a id="footerWhatsappLink" href="{footer_link}" target="_blank">Escríbenos por WhatsApp</a>
    </footer>
</body>
</html>
"#
    )
}

/// Document whose entire body is the error panel.
fn error_document(panel: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="es">
<head>
    <meta charset="UTF-8">
    <title>Biblioteca de Cursos y Tienda</title>
</head>
<body>
{panel}</body>
</html>
"#
    )
}
