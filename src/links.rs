//! Contact Link Builder
//!
//! Builds `wa.me` deep links from the site configuration plus per-item
//! overrides. Only constructs strings; never performs a network call.

use crate::catalog::{Course, Product, SiteConfig};

/// Inert target used while the catalog (or its configuration) is missing.
pub const PLACEHOLDER_LINK: &str = "#";

/// Anything a contact link can be built for.
pub trait ContactItem {
    fn title(&self) -> &str;

    /// Per-item message override (`mensaje_whatsapp`).
    fn contact_message(&self) -> Option<&str>;
}

impl ContactItem for Course {
    fn title(&self) -> &str {
        &self.title
    }

    fn contact_message(&self) -> Option<&str> {
        self.contact_message.as_deref()
    }
}

impl ContactItem for Product {
    fn title(&self) -> &str {
        &self.title
    }

    fn contact_message(&self) -> Option<&str> {
        self.contact_message.as_deref()
    }
}

fn deep_link(number: &str, message: &str) -> String {
    format!("https://wa.me/{}?text={}", number, urlencoding::encode(message))
}

/// Build the contact link for a course or product.
///
/// Message text is the item's override if set, else the configured default
/// message followed by the item title. Returns [`PLACEHOLDER_LINK`] when no
/// configuration is available; never fails.
pub fn build_contact_link(config: Option<&SiteConfig>, item: &impl ContactItem) -> String {
    let Some(config) = config else {
        return PLACEHOLDER_LINK.to_string();
    };

    let message = match item.contact_message() {
        Some(custom) => custom.to_string(),
        None => format!("{} {}", config.default_message, item.title()),
    };

    deep_link(&config.whatsapp_number, &message)
}

/// The two fixed navigation links rebuilt once the catalog is loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticLinks {
    pub header: String,
    pub footer: String,
}

/// Rebuild the header/footer contact links.
///
/// Each appends its fixed suffix to the configured default message. `None`
/// without configuration; the page assembly step also tolerates absent
/// targets, so this whole pass degrades to a no-op.
pub fn refresh_static_links(config: Option<&SiteConfig>) -> Option<StaticLinks> {
    let config = config?;

    let header_message = format!("{} los cursos", config.default_message);
    let footer_message = format!("{} los cursos y productos", config.default_message);

    Some(StaticLinks {
        header: deep_link(&config.whatsapp_number, &header_message),
        footer: deep_link(&config.whatsapp_number, &footer_message),
    })
}
