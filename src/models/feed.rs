//! Feed records as delivered by the backend.
//!
//! Companies, products and posts are read-only from the application's point
//! of view. Posts arrive denormalized with their owning product and company.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

// =============================================================================
// Entities
// =============================================================================

/// A company publishing AI products.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub id: i64,
    /// Unique, URL-facing identifier.
    pub slug: String,
    pub name: String,
    #[serde(default)]
    pub logo_url: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
}

impl Company {
    /// Path of the company detail page.
    pub fn path(&self) -> String {
        format!("/company/{}", self.slug)
    }
}

/// A product owned by exactly one company.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub slug: String,
    pub name: String,
    pub company_id: i64,
}

impl Product {
    /// Path of the product detail page.
    pub fn path(&self) -> String {
        format!("/product/{}", self.slug)
    }
}

/// A feed post resolved against its product and company.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub post_url: String,
    pub summary: Option<String>,
    pub category: Category,
    pub post_type: PostType,
    /// Publication date as sent by the backend (ISO 8601).
    pub date: String,
    pub product_id: i64,
    pub product: Product,
    pub company: Company,
}

/// Products of one company, used by the products list page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProductGroup {
    pub company: Company,
    pub products: Vec<Product>,
}

/// Group products under their owning company.
///
/// Groups follow the order of `companies`; companies without products are
/// left out and products keep their incoming order.
pub fn group_by_company(companies: &[Company], products: &[Product]) -> Vec<ProductGroup> {
    companies
        .iter()
        .filter_map(|company| {
            let owned: Vec<Product> = products
                .iter()
                .filter(|p| p.company_id == company.id)
                .cloned()
                .collect();
            (!owned.is_empty()).then(|| ProductGroup {
                company: company.clone(),
                products: owned,
            })
        })
        .collect()
}

// =============================================================================
// Enumerations
// =============================================================================

/// Error returned when a label does not name a known category or post type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownLabel(pub String);

impl fmt::Display for UnknownLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown label '{}'", self.0)
    }
}

impl std::error::Error for UnknownLabel {}

/// Declares a closed set of labels stored as text by the backend.
macro_rules! label_enum {
    (
        $(#[$meta:meta])*
        $name:ident { $($variant:ident => $label:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $label)]
                $variant,
            )+
        }

        impl $name {
            /// Every value, in display order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Label as stored by the backend and shown to the user.
            pub fn label(self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }

        impl FromStr for $name {
            type Err = UnknownLabel;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|v| v.label() == s)
                    .ok_or_else(|| UnknownLabel(s.to_string()))
            }
        }
    };
}

label_enum! {
    /// Topic area of a post.
    Category {
        Llm => "LLM",
        VideoEditing => "Video Editing",
        ImageEditing => "Image Editing",
        Sound => "Sound",
        Research => "Research",
        Development => "Development",
        WebBrowsing => "Web Browsing",
        Automation => "Automation",
        DesignTools => "Design Tools",
        Security => "Security",
        Business => "Business",
        General => "General",
    }
}

label_enum! {
    /// Kind of announcement a post represents.
    PostType {
        News => "News",
        ProductLaunch => "Product Launch",
        Update => "Update",
        Tutorial => "Tutorial",
        Benchmark => "Benchmark",
        Opinion => "Opinion",
        General => "General",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn company(id: i64, name: &str) -> Company {
        Company {
            id,
            slug: name.to_lowercase(),
            name: name.to_string(),
            logo_url: None,
            summary: None,
        }
    }

    fn product(id: i64, name: &str, company_id: i64) -> Product {
        Product {
            id,
            slug: name.to_lowercase(),
            name: name.to_string(),
            company_id,
        }
    }

    #[test]
    fn test_label_parsing() {
        assert_eq!("Video Editing".parse::<Category>(), Ok(Category::VideoEditing));
        assert_eq!("Tutorial".parse::<PostType>(), Ok(PostType::Tutorial));
        assert_eq!(
            "tutorial".parse::<PostType>(),
            Err(UnknownLabel("tutorial".to_string()))
        );
        assert_eq!(Category::ALL.len(), 12);
        assert_eq!(PostType::ALL.len(), 7);
    }

    #[test]
    fn test_label_serde_uses_backend_text() {
        let json = serde_json::to_string(&PostType::ProductLaunch).unwrap();
        assert_eq!(json, "\"Product Launch\"");
        let parsed: Category = serde_json::from_str("\"LLM\"").unwrap();
        assert_eq!(parsed, Category::Llm);
    }

    #[test]
    fn test_entity_paths() {
        assert_eq!(company(1, "Acme").path(), "/company/acme");
        assert_eq!(product(2, "Rocket", 1).path(), "/product/rocket");
    }

    #[test]
    fn test_group_by_company() {
        let companies = vec![company(1, "Acme"), company(2, "Empty"), company(3, "Globex")];
        let products = vec![
            product(10, "Anvil", 1),
            product(11, "Hammock", 3),
            product(12, "Rocket", 1),
        ];

        let groups = group_by_company(&companies, &products);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].company.name, "Acme");
        assert_eq!(
            groups[0].products.iter().map(|p| p.id).collect::<Vec<_>>(),
            vec![10, 12]
        );
        assert_eq!(groups[1].company.name, "Globex");
    }
}
