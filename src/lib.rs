//! Catalog Renderer
//!
//! Renders a static JSON catalog of courses and store products into HTML
//! card fragments and builds outbound WhatsApp contact links.
//!
//! Module layout:
//! - `catalog`: document model and id lookups
//! - `loader`: HTTP fetch + parse of the catalog document
//! - `icons`: type tag -> display glyph table
//! - `links`: wa.me contact link construction
//! - `cards`: course/product card HTML fragments
//! - `pages`: page controller (listing/detail modes, error panel)
//!
//! There is no process-wide state: the loaded [`Catalog`] is passed
//! explicitly into every renderer and lookup.

pub mod cards;
pub mod catalog;
pub mod error;
pub mod icons;
pub mod links;
pub mod loader;
pub mod pages;

// Re-export commonly used types
pub use cards::{escape_html, render_course_card, render_product_card, RenderContext, TextPolicy};
pub use catalog::{find_course_by_id, find_product_by_id, Catalog, Course, Product, SiteConfig};
pub use error::{LoadError, RenderError};
pub use icons::{lookup_icon, resolve_icon};
pub use links::{
    build_contact_link, refresh_static_links, ContactItem, StaticLinks, PLACEHOLDER_LINK,
};
pub use loader::{parse_catalog, CatalogLoader};
pub use pages::{
    render_error_panel, render_listing, ListingView, PageController, PageMode, PageOutcome,
    PageShell,
};
