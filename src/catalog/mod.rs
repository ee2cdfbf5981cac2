//! Product catalog: categories, product records, and the catalog source.
//!
//! DESIGN
//! ======
//! Pages never reach into the product tables directly. They go through
//! [`CatalogSource`], so the hardcoded [`StaticCatalog`] can be swapped for
//! another source without touching page wiring.


mod data;
pub mod query;

use serde::{Deserialize, Serialize};

/// Product category shown on the catalog page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    Laptops,
    Smartphones,
    Tvs,
    Appliances,
}

impl Category {
    pub const ALL: [Self; 4] = [Self::Laptops, Self::Smartphones, Self::Tvs, Self::Appliances];

    /// Parse the token used in URLs and storage (`laptops`, `tvs`, ...).
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "laptops" => Some(Self::Laptops),
            "smartphones" => Some(Self::Smartphones),
            "tvs" => Some(Self::Tvs),
            "appliances" => Some(Self::Appliances),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Laptops => "laptops",
            Self::Smartphones => "smartphones",
            Self::Tvs => "tvs",
            Self::Appliances => "appliances",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Self::Laptops => "Laptops",
            Self::Smartphones => "Smartphones",
            Self::Tvs => "TVs",
            Self::Appliances => "Appliances",
        }
    }
}

/// Heading for the catalog page; unknown categories get a generic title.
pub fn catalog_title(raw: &str) -> &'static str {
    Category::parse(raw).map_or("Products", Category::display_name)
}

/// A single product record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Product {
    pub id: &'static str,
    pub title: &'static str,
    pub spec: &'static str,
    /// Whole US dollars.
    pub price: u32,
    pub image_url: &'static str,
}

impl Product {
    /// Display price, e.g. `$2,499`.
    pub fn price_label(&self) -> String {
        format_price(self.price)
    }

    /// Brand is the first word of the title.
    pub fn brand(&self) -> &'static str {
        self.title.split_whitespace().next().unwrap_or_default()
    }
}

/// Format whole dollars with thousands separators: `2499` -> `$2,499`.
pub fn format_price(dollars: u32) -> String {
    let digits = dollars.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    out.push('$');
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Parse a display price back into whole dollars. Accepts `$2,499`, `2499`
/// and `2499.00`; anything else is `None`.
pub fn parse_price(raw: &str) -> Option<u32> {
    let cleaned: String = raw.trim().trim_start_matches('$').chars().filter(|c| *c != ',').collect();
    let whole = cleaned.split_once('.').map_or(cleaned.as_str(), |(whole, _)| whole);
    if whole.is_empty() {
        return None;
    }
    whole.parse().ok()
}

/// Supplies products per category.
pub trait CatalogSource {
    fn products(&self, category: Category) -> &[Product];

    /// Every product, category by category.
    fn all(&self) -> Vec<Product> {
        Category::ALL.into_iter().flat_map(|category| self.products(category).iter().copied()).collect()
    }

    /// Look a product up by id across every category.
    fn find(&self, id: &str) -> Option<&Product> {
        Category::ALL
            .into_iter()
            .flat_map(|category| self.products(category).iter())
            .find(|product| product.id == id)
    }
}

/// The hardcoded demo catalog.
#[derive(Clone, Copy, Debug, Default)]
pub struct StaticCatalog;

impl CatalogSource for StaticCatalog {
    fn products(&self, category: Category) -> &[Product] {
        match category {
            Category::Laptops => data::LAPTOPS,
            Category::Smartphones => data::SMARTPHONES,
            Category::Tvs => data::TVS,
            Category::Appliances => data::APPLIANCES,
        }
    }
}
