//! Catalog Data Model
//!
//! Deserialized shape of the catalog document (`data.json`) plus id lookups
//! for the detail pages.
//!
//! Wire field names are Spanish (the published data format, kept stable via
//! serde renames); Rust identifiers are English. The document is loaded once
//! per page view and never mutated afterwards.

use serde::Deserialize;

/// Root catalog document.
///
/// Collections are `Option` on purpose: an absent collection drives the
/// "no items" placeholder in listing mode, while an empty one renders an
/// empty grid.
#[derive(Debug, Clone, Deserialize)]
pub struct Catalog {
    #[serde(rename = "configuracion")]
    pub configuration: Option<SiteConfig>,

    #[serde(rename = "cursos")]
    pub courses: Option<Vec<Course>>,

    #[serde(rename = "tienda")]
    pub products: Option<Vec<Product>>,
}

/// Contact configuration. Absent configuration disables link generation.
#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfig {
    #[serde(rename = "whatsapp_numero")]
    pub whatsapp_number: String,

    /// Prefix for per-item messages when no override is set.
    #[serde(rename = "mensaje_default", default = "default_contact_message")]
    pub default_message: String,
}

fn default_contact_message() -> String {
    "Hola, estoy interesado en".to_string()
}

/// A course entry. `icon` is the type tag resolved by [`crate::icons`].
#[derive(Debug, Clone, Deserialize)]
pub struct Course {
    pub id: u32,

    #[serde(rename = "titulo")]
    pub title: String,

    #[serde(rename = "resumen")]
    pub summary: String,

    #[serde(rename = "precio")]
    pub price: f64,

    #[serde(rename = "imagen")]
    pub icon: String,

    /// Per-item contact message override.
    #[serde(rename = "mensaje_whatsapp")]
    pub contact_message: Option<String>,
}

/// A store product entry.
#[derive(Debug, Clone, Deserialize)]
pub struct Product {
    pub id: u32,

    #[serde(rename = "titulo")]
    pub title: String,

    #[serde(rename = "descripcion")]
    pub description: String,

    #[serde(rename = "precio")]
    pub price: f64,

    /// List price for the was/now pair. Display falls back to 3x `price`
    /// when absent; the derived value is never stored.
    #[serde(rename = "precio_original")]
    pub original_price: Option<f64>,

    #[serde(rename = "imagen")]
    pub icon: String,

    #[serde(rename = "mensaje_whatsapp")]
    pub contact_message: Option<String>,
}

/// Find a course by id, first match in catalog order.
///
/// The id is accepted in string form (detail pages receive it from a query
/// parameter) and parsed to the integer id type before comparing. Returns
/// `None` for unparseable input, no match, or when the catalog has not been
/// loaded yet.
pub fn find_course_by_id<'a>(catalog: Option<&'a Catalog>, id: &str) -> Option<&'a Course> {
    let catalog = catalog?;
    let id: u32 = id.trim().parse().ok()?;
    catalog.courses.as_ref()?.iter().find(|course| course.id == id)
}

/// Find a store product by id. Same contract as [`find_course_by_id`].
pub fn find_product_by_id<'a>(catalog: Option<&'a Catalog>, id: &str) -> Option<&'a Product> {
    let catalog = catalog?;
    let id: u32 = id.trim().parse().ok()?;
    catalog.products.as_ref()?.iter().find(|product| product.id == id)
}
