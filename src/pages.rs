//! Page Controller
//!
//! Selects one of three mutually exclusive terminal render modes per page
//! view and fills the listing grids. The mode is an explicit parameter
//! supplied by the embedding page; the controller never inspects a URL.
//!
//! Failure containment:
//! - a [`LoadError`] replaces the whole page body with the error panel
//!   (terminal, no retry);
//! - everything below it (missing container, missing collection, card
//!   render failure) is contained to its own grid.

use crate::cards::{render_course_card, render_product_card, RenderContext, TextPolicy};
use crate::catalog::{Catalog, Course, Product};
use crate::links::{refresh_static_links, StaticLinks};
use crate::loader::CatalogLoader;

/// Render mode for the current page view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageMode {
    /// Default: render all courses and products into their grids.
    Listing,
    /// Course detail page; rendering is deferred to page-specific code.
    CourseDetail,
    /// Store detail page; rendering is deferred to page-specific code.
    ProductDetail,
}

/// Render targets the surrounding page actually provides. Absent targets
/// are tolerated and skipped.
#[derive(Debug, Clone, Copy)]
pub struct PageShell {
    pub course_grid: bool,
    pub store_grid: bool,
}

impl PageShell {
    /// Shell of the main listing page, with both grids present.
    pub fn full() -> Self {
        Self { course_grid: true, store_grid: true }
    }
}

/// Filled listing-mode containers. `None` marks a target the shell did not
/// provide (section skipped).
#[derive(Debug, Clone)]
pub struct ListingView {
    pub course_grid: Option<String>,
    pub store_grid: Option<String>,
    /// Header/footer contact links; `None` without configuration.
    pub static_links: Option<StaticLinks>,
}

/// Terminal result of one page view.
#[derive(Debug)]
pub enum PageOutcome {
    /// Listing mode: grids rendered; the catalog is retained for lookups.
    Listing { catalog: Catalog, view: ListingView },
    /// Detail mode: catalog guaranteed loaded, rendering handed off.
    Detail { catalog: Catalog, mode: PageMode },
    /// Catalog load failed: `body` replaces the entire visible page.
    Failed { body: String },
}

/// One-shot orchestration of loader and renderers.
pub struct PageController {
    loader: CatalogLoader,
    text_policy: TextPolicy,
}

impl PageController {
    pub fn new(loader: CatalogLoader) -> Self {
        Self { loader, text_policy: TextPolicy::Raw }
    }

    pub fn with_text_policy(mut self, text_policy: TextPolicy) -> Self {
        self.text_policy = text_policy;
        self
    }

    /// Run the page view once. Fires when the embedding page is ready to be
    /// populated; there is no second trigger and no retry.
    pub async fn run(&self, mode: PageMode, shell: PageShell) -> PageOutcome {
        let catalog = match self.loader.fetch().await {
            Ok(catalog) => catalog,
            Err(err) => {
                tracing::error!("Page initialization failed: {}", err);
                return PageOutcome::Failed { body: render_error_panel(&err.to_string()) };
            }
        };

        match mode {
            PageMode::CourseDetail | PageMode::ProductDetail => {
                tracing::debug!("Detail page detected, deferring rendering");
                PageOutcome::Detail { catalog, mode }
            }
            PageMode::Listing => {
                let view = render_listing(&catalog, shell, self.text_policy);
                PageOutcome::Listing { catalog, view }
            }
        }
    }
}

/// Render both listing grids from a loaded catalog. Synchronous and
/// network-free; integration tests drive this directly with fixtures.
pub fn render_listing(catalog: &Catalog, shell: PageShell, text_policy: TextPolicy) -> ListingView {
    let ctx = RenderContext::new(catalog.configuration.as_ref()).with_policy(text_policy);

    ListingView {
        course_grid: fill_course_grid(&ctx, catalog.courses.as_deref(), shell.course_grid),
        store_grid: fill_store_grid(&ctx, catalog.products.as_deref(), shell.store_grid),
        static_links: refresh_static_links(catalog.configuration.as_ref()),
    }
}

fn fill_course_grid(
    ctx: &RenderContext,
    courses: Option<&[Course]>,
    target_present: bool,
) -> Option<String> {
    if !target_present {
        tracing::warn!("Course grid container not found, skipping section");
        return None;
    }

    let Some(courses) = courses else {
        return Some(loading_placeholder("No hay cursos disponibles"));
    };

    let mut html = String::new();
    for course in courses {
        match render_course_card(ctx, course) {
            Ok(card) => html.push_str(&card),
            Err(err) => {
                tracing::error!("Failed to render course card: {}", err);
                return Some(error_placeholder("Error al cargar los cursos"));
            }
        }
    }
    Some(html)
}

fn fill_store_grid(
    ctx: &RenderContext,
    products: Option<&[Product]>,
    target_present: bool,
) -> Option<String> {
    if !target_present {
        tracing::warn!("Store grid container not found, skipping section");
        return None;
    }

    let Some(products) = products else {
        return Some(loading_placeholder("No hay productos disponibles"));
    };

    let mut html = String::new();
    for product in products {
        match render_product_card(ctx, product) {
            Ok(card) => html.push_str(&card),
            Err(err) => {
                tracing::error!("Failed to render product card: {}", err);
                return Some(error_placeholder("Error al cargar los productos"));
            }
        }
    }
    Some(html)
}

fn loading_placeholder(text: &str) -> String {
    format!("<div class=\"loading\">{}</div>", text)
}

fn error_placeholder(text: &str) -> String {
    format!("<div class=\"error\">{}</div>", text)
}

/// Full-body error panel shown when the catalog cannot be loaded.
pub fn render_error_panel(message: &str) -> String {
    format!(
        r#"<div style="padding: 40px; text-align: center; font-family: sans-serif; background: #f5f5f5; min-height: 100vh;">
    <h1 style="color: rgb(0, 51, 102);">Error al cargar la aplicación</h1>
    <p>Por favor, asegúrate de que el archivo data.json esté presente.</p>
    <p style="color: red;">Error: {}</p>
</div>
"#,
        message
    )
}
