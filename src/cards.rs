//! Card Renderer
//!
//! Converts a single course or product record into an HTML fragment in the
//! markup shape the site stylesheet expects. Text fields are interpolated
//! verbatim by default, matching the published output format;
//! [`TextPolicy::EscapeHtml`] is the hardening seam for catalog data that
//! cannot be trusted.

use std::borrow::Cow;

use crate::catalog::{Course, Product, SiteConfig};
use crate::error::RenderError;
use crate::icons::resolve_icon;
use crate::links::build_contact_link;

/// How catalog text fields are treated before interpolation into markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextPolicy {
    /// Interpolate verbatim (the original output format).
    #[default]
    Raw,
    /// HTML-escape title and summary/description text.
    EscapeHtml,
}

impl TextPolicy {
    fn apply<'a>(&self, text: &'a str) -> Cow<'a, str> {
        match self {
            TextPolicy::Raw => Cow::Borrowed(text),
            TextPolicy::EscapeHtml => escape_html(text),
        }
    }
}

/// Minimal HTML escaper for text interpolated into card markup.
pub fn escape_html(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(text);
    }

    let mut escaped = String::with_capacity(text.len() + 8);
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    Cow::Owned(escaped)
}

/// Shared inputs for card rendering: the loaded configuration (link
/// building) and the text policy. Passed explicitly so tests can supply
/// isolated fixtures.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub config: Option<&'a SiteConfig>,
    pub text_policy: TextPolicy,
}

impl<'a> RenderContext<'a> {
    pub fn new(config: Option<&'a SiteConfig>) -> Self {
        Self { config, text_policy: TextPolicy::Raw }
    }

    pub fn with_policy(mut self, text_policy: TextPolicy) -> Self {
        self.text_policy = text_policy;
        self
    }
}

fn check_price(title: &str, value: f64) -> Result<(), RenderError> {
    if !value.is_finite() || value < 0.0 {
        return Err(RenderError::InvalidPrice { title: title.to_string(), value });
    }
    Ok(())
}

/// Render one course card.
pub fn render_course_card(ctx: &RenderContext, course: &Course) -> Result<String, RenderError> {
    check_price(&course.title, course.price)?;

    let icon = resolve_icon(&course.icon);
    let link = build_contact_link(ctx.config, course);
    let title = ctx.text_policy.apply(&course.title);
    let summary = ctx.text_policy.apply(&course.summary);

    let mut html = String::with_capacity(512);
    html.push_str("<div class=\"curso-card\">\n");
    html.push_str("    <div class=\"curso-imagen\">\n");
    html.push_str(&format!("        <span>{}</span>\n", icon));
    html.push_str("    </div>\n");
    html.push_str("    <div class=\"curso-info\">\n");
    html.push_str(&format!("        <h3 class=\"curso-titulo\">{}</h3>\n", title));
    html.push_str(&format!("        <p class=\"curso-resumen\">{}</p>\n", summary));
    html.push_str(&format!(
        "        <div class=\"curso-precio\">S/ {:.2} <span>soles</span></div>\n",
        course.price
    ));
    html.push_str(&format!(
        "        <a href=\"{}\" class=\"btn-acceder\" target=\"_blank\">Acceder</a>\n",
        link
    ));
    html.push_str("    </div>\n");
    html.push_str("</div>\n");
    Ok(html)
}

/// Render one store product card with its was/now price pair.
pub fn render_product_card(ctx: &RenderContext, product: &Product) -> Result<String, RenderError> {
    check_price(&product.title, product.price)?;
    if let Some(original) = product.original_price {
        check_price(&product.title, original)?;
    }

    let icon = resolve_icon(&product.icon);
    let link = build_contact_link(ctx.config, product);
    let title = ctx.text_policy.apply(&product.title);
    let description = ctx.text_policy.apply(&product.description);

    // Displayed "was" price only; never written back to the catalog
    let original_price = product.original_price.unwrap_or(product.price * 3.0);

    let mut html = String::with_capacity(512);
    html.push_str("<div class=\"tienda-card\">\n");
    html.push_str("    <div class=\"tienda-imagen\">\n");
    html.push_str(&format!("        <span>{}</span>\n", icon));
    html.push_str("    </div>\n");
    html.push_str("    <div class=\"tienda-info\">\n");
    html.push_str(&format!("        <h3 class=\"tienda-titulo\">{}</h3>\n", title));
    html.push_str(&format!("        <p class=\"tienda-descripcion\">{}</p>\n", description));
    html.push_str("        <div class=\"tienda-precio\">\n");
    html.push_str(&format!(
        "            <span class=\"precio-original\">S/ {:.2}</span>\n",
        original_price
    ));
    html.push_str(&format!(
        "            <span class=\"precio-oferta\">S/ {:.2}</span>\n",
        product.price
    ));
    html.push_str("        </div>\n");
    html.push_str(&format!(
        "        <a href=\"{}\" class=\"btn-comprar\" target=\"_blank\">Comprar</a>\n",
        link
    ));
    html.push_str("    </div>\n");
    html.push_str("</div>\n");
    Ok(html)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> SiteConfig {
        SiteConfig {
            whatsapp_number: "51999999999".to_string(),
            default_message: "Hola".to_string(),
        }
    }

    fn course() -> Course {
        Course {
            id: 1,
            title: "X".to_string(),
            summary: "Y".to_string(),
            price: 10.0,
            icon: "telegram".to_string(),
            contact_message: None,
        }
    }

    fn product() -> Product {
        Product {
            id: 1,
            title: "Netflix".to_string(),
            description: "1 mes de acceso".to_string(),
            price: 15.0,
            original_price: None,
            icon: "tienda-netflix".to_string(),
            contact_message: None,
        }
    }

    #[test]
    fn test_course_card_embeds_icon_text_price_and_link() {
        let config = config();
        let ctx = RenderContext::new(Some(&config));
        let html = render_course_card(&ctx, &course()).unwrap();

        assert!(html.contains("<div class=\"curso-card\">"));
        assert!(html.contains("<span>📱</span>"));
        assert!(html.contains("<h3 class=\"curso-titulo\">X</h3>"));
        assert!(html.contains("<p class=\"curso-resumen\">Y</p>"));
        assert!(html.contains("S/ 10.00 <span>soles</span>"));
        assert!(html.contains("href=\"https://wa.me/51999999999?text=Hola%20X\""));
        assert!(html.contains(">Acceder</a>"));
    }

    #[test]
    fn test_price_always_shows_two_decimals() {
        let config = config();
        let ctx = RenderContext::new(Some(&config));

        let mut c = course();
        c.price = 10.0;
        assert!(render_course_card(&ctx, &c).unwrap().contains("S/ 10.00"));

        c.price = 9.999;
        assert!(render_course_card(&ctx, &c).unwrap().contains("S/ 10.00"));

        c.price = 49.9;
        assert!(render_course_card(&ctx, &c).unwrap().contains("S/ 49.90"));
    }

    #[test]
    fn test_product_was_price_defaults_to_three_times_current() {
        let config = config();
        let ctx = RenderContext::new(Some(&config));
        let html = render_product_card(&ctx, &product()).unwrap();

        assert!(html.contains("<span class=\"precio-original\">S/ 45.00</span>"));
        assert!(html.contains("<span class=\"precio-oferta\">S/ 15.00</span>"));
        assert!(html.contains(">Comprar</a>"));
    }

    #[test]
    fn test_product_explicit_original_price_is_used() {
        let config = config();
        let ctx = RenderContext::new(Some(&config));
        let mut p = product();
        p.original_price = Some(44.9);

        let html = render_product_card(&ctx, &p).unwrap();
        assert!(html.contains("<span class=\"precio-original\">S/ 44.90</span>"));
    }

    #[test]
    fn test_card_link_is_placeholder_without_configuration() {
        let ctx = RenderContext::new(None);
        let html = render_course_card(&ctx, &course()).unwrap();
        assert!(html.contains("href=\"#\""));
    }

    #[test]
    fn test_raw_policy_interpolates_text_verbatim() {
        let ctx = RenderContext::new(None);
        let mut c = course();
        c.title = "<b>Oferta</b>".to_string();

        let html = render_course_card(&ctx, &c).unwrap();
        assert!(html.contains("<h3 class=\"curso-titulo\"><b>Oferta</b></h3>"));
    }

    #[test]
    fn test_escape_policy_hardens_text_fields() {
        let ctx = RenderContext::new(None).with_policy(TextPolicy::EscapeHtml);
        let mut c = course();
        c.title = "<script>alert(1)</script>".to_string();
        c.summary = "a & b".to_string();

        let html = render_course_card(&ctx, &c).unwrap();
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(html.contains("a &amp; b"));
    }

    #[test]
    fn test_negative_price_is_a_render_error() {
        let ctx = RenderContext::new(None);
        let mut c = course();
        c.price = -1.0;
        assert!(render_course_card(&ctx, &c).is_err());

        let mut p = product();
        p.price = f64::NAN;
        assert!(render_product_card(&ctx, &p).is_err());

        let mut p = product();
        p.original_price = Some(-0.5);
        assert!(render_product_card(&ctx, &p).is_err());
    }

    #[test]
    fn test_escape_html_borrows_when_clean() {
        assert!(matches!(escape_html("texto limpio"), Cow::Borrowed(_)));
        assert_eq!(escape_html("\"q\""), "&quot;q&quot;");
        assert_eq!(escape_html("'s'"), "&#39;s&#39;");
    }
}
