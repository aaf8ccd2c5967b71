use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub name: String,
}

/// One product as listed by the catalog. Read-only on the storefront side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSummary {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default)]
    pub stock: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stock_location: Option<String>,
    #[serde(default)]
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl ProductSummary {
    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }

    /// Filled stars out of five; a partial rating lights the next star.
    pub fn rating_stars(&self) -> u8 {
        let rating = self.rating.unwrap_or(0.0);
        if !rating.is_finite() || rating <= 0.0 {
            return 0;
        }
        rating.ceil().min(5.0) as u8
    }

    pub fn has_discount(&self) -> bool {
        self.discount.is_some_and(|d| d > 0.0)
    }

    /// Image references are server-relative paths.
    pub fn image_url(&self, base_url: &str) -> String {
        if self.image.starts_with("http://") || self.image.starts_with("https://") {
            return self.image.clone();
        }
        format!("{}{}", base_url.trim_end_matches('/'), self.image)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Pagination {
    pub current_page: u32,
    pub total_pages: u32,
    pub total_products: u64,
    pub has_prev_page: bool,
    pub has_next_page: bool,
}

impl Pagination {
    pub fn new(current_page: u32, page_size: u32, total_products: u64) -> Self {
        let page_size = u64::from(page_size.max(1));
        let total_pages = total_products.div_ceil(page_size) as u32;
        Self {
            current_page,
            total_pages,
            total_products,
            has_prev_page: current_page > 1,
            has_next_page: current_page < total_pages,
        }
    }

    /// 1-based `(first, last, total)` of the products shown on this page.
    pub fn results_range(&self, page_size: u32) -> Option<(u64, u64, u64)> {
        if self.total_products == 0 || self.current_page == 0 {
            return None;
        }
        let page_size = u64::from(page_size);
        let page = u64::from(self.current_page);
        let first = (page - 1) * page_size + 1;
        let last = (page * page_size).min(self.total_products);
        Some((first, last, self.total_products))
    }
}

/// One page of products plus its pagination metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageResult {
    pub products: Vec<ProductSummary>,
    #[serde(default)]
    pub pagination: Pagination,
}

/// Cart line echoed back by the cart endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub product_id: String,
    pub quantity: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(stock: i64, rating: Option<f64>) -> ProductSummary {
        ProductSummary {
            id: "p1".into(),
            name: "Dome Camera".into(),
            category: "Cameras".into(),
            brand: None,
            price: 2499.0,
            discount: None,
            rating,
            stock,
            stock_location: None,
            image: "/uploads/dome.jpg".into(),
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn partial_rating_lights_next_star() {
        assert_eq!(product(1, Some(3.5)).rating_stars(), 4);
        assert_eq!(product(1, Some(7.0)).rating_stars(), 5);
        assert_eq!(product(1, None).rating_stars(), 0);
    }

    #[test]
    fn image_url_joins_relative_paths() {
        let p = product(0, None);
        assert_eq!(
            p.image_url("http://localhost:5000/"),
            "http://localhost:5000/uploads/dome.jpg"
        );
        assert!(!p.in_stock());
    }

    #[test]
    fn results_range_clamps_last_page() {
        let pagination = Pagination::new(3, 12, 30);
        assert_eq!(pagination.total_pages, 3);
        assert!(pagination.has_prev_page);
        assert!(!pagination.has_next_page);
        assert_eq!(pagination.results_range(12), Some((25, 30, 30)));
        assert_eq!(Pagination::default().results_range(12), None);
    }

    #[test]
    fn product_reads_mongo_style_ids() {
        let json = r#"{"_id":"abc","name":"Bullet","price":10,"stock":2,"image":"/b.jpg","stockLocation":"Pune"}"#;
        let p: ProductSummary = serde_json::from_str(json).unwrap();
        assert_eq!(p.id, "abc");
        assert_eq!(p.stock_location.as_deref(), Some("Pune"));
        assert_eq!(p.category, "");
    }
}
