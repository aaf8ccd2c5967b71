//! Filter state for catalog browsing.
//!
//! [`FilterState`] holds every filter dimension plus the current page. Its
//! setters only assign; deciding whether a change also fetches is the
//! controller's job.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::{ClientError, ClientResult};

/// Products per page. Not user adjustable.
pub const PAGE_SIZE: u32 = 12;

/// Category value meaning "no category filter".
pub const ALL_CATEGORIES: &str = "all";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortBy {
    #[default]
    CreatedAt,
    Price,
    Rating,
    Name,
}

impl SortBy {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortBy::CreatedAt => "createdAt",
            SortBy::Price => "price",
            SortBy::Rating => "rating",
            SortBy::Name => "name",
        }
    }
}

impl fmt::Display for SortBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortBy {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "createdAt" | "newest" => Ok(SortBy::CreatedAt),
            "price" => Ok(SortBy::Price),
            "rating" => Ok(SortBy::Rating),
            "name" => Ok(SortBy::Name),
            other => Err(ClientError::Validation(format!("unknown sort key '{other}'"))),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            other => Err(ClientError::Validation(format!(
                "unknown sort order '{other}'"
            ))),
        }
    }
}

/// Parses a price field as typed by the user. Blank means "no bound".
pub fn parse_price(input: &str) -> ClientResult<Option<f64>> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(None);
    }
    let value = input
        .parse::<f64>()
        .map_err(|_| ClientError::Validation(format!("'{input}' is not a price")))?;
    validate_price(value)?;
    Ok(Some(value))
}

fn validate_price(value: f64) -> ClientResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(ClientError::Validation(format!(
            "price must be a non-negative number, got {value}"
        )));
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq)]
pub struct FilterState {
    pub category: String,
    pub search_term: String,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub sort_by: SortBy,
    pub sort_order: SortOrder,
    pub hide_out_of_stock: bool,
    page: u32,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            category: ALL_CATEGORIES.to_string(),
            search_term: String::new(),
            min_price: None,
            max_price: None,
            sort_by: SortBy::default(),
            sort_order: SortOrder::default(),
            hide_out_of_stock: false,
            page: 1,
        }
    }
}

impl FilterState {
    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn page_size(&self) -> u32 {
        PAGE_SIZE
    }

    pub fn is_all_categories(&self) -> bool {
        self.category == ALL_CATEGORIES
    }

    /// Selecting a category always starts from the first page.
    pub fn set_category(&mut self, name: impl Into<String>) {
        self.category = name.into();
        self.page = 1;
    }

    pub fn set_search_term(&mut self, text: impl Into<String>) {
        self.search_term = text.into();
    }

    pub fn set_sort_by(&mut self, key: SortBy) {
        self.sort_by = key;
    }

    pub fn set_sort_order(&mut self, order: SortOrder) {
        self.sort_order = order;
    }

    /// Min may exceed max; the server decides what that means.
    pub fn set_price_range(&mut self, min: Option<f64>, max: Option<f64>) -> ClientResult<()> {
        if let Some(min) = min {
            validate_price(min)?;
        }
        if let Some(max) = max {
            validate_price(max)?;
        }
        self.min_price = min;
        self.max_price = max;
        Ok(())
    }

    pub fn set_hide_out_of_stock(&mut self, hide: bool) {
        self.hide_out_of_stock = hide;
    }

    pub fn reset_page(&mut self) {
        self.page = 1;
    }

    /// Page 0 is never stored.
    pub fn set_page(&mut self, page: u32) -> ClientResult<()> {
        if page == 0 {
            return Err(ClientError::Validation("page must be at least 1".into()));
        }
        self.page = page;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_storefront_landing() {
        let state = FilterState::default();
        assert!(state.is_all_categories());
        assert_eq!(state.page(), 1);
        assert_eq!(state.sort_by, SortBy::CreatedAt);
        assert_eq!(state.sort_order, SortOrder::Desc);
        assert!(!state.hide_out_of_stock);
    }

    #[test]
    fn category_change_resets_page() {
        let mut state = FilterState::default();
        state.set_page(4).unwrap();
        state.set_category("Cameras");
        assert_eq!(state.page(), 1);
    }

    #[test]
    fn sort_change_keeps_page() {
        let mut state = FilterState::default();
        state.set_page(3).unwrap();
        state.set_sort_by(SortBy::Price);
        state.set_sort_order(SortOrder::Asc);
        assert_eq!(state.page(), 3);
    }

    #[test]
    fn rejects_page_zero_and_negative_prices() {
        let mut state = FilterState::default();
        assert!(state.set_page(0).is_err());
        assert_eq!(state.page(), 1);

        assert!(state.set_price_range(Some(-1.0), None).is_err());
        assert!(state.set_price_range(None, Some(f64::NAN)).is_err());
        assert_eq!(state.min_price, None);

        state.set_price_range(Some(500.0), Some(100.0)).unwrap();
        assert_eq!(state.min_price, Some(500.0));
    }

    #[test]
    fn price_input_parsing() {
        assert_eq!(parse_price("  ").unwrap(), None);
        assert_eq!(parse_price("0").unwrap(), Some(0.0));
        assert_eq!(parse_price("19.5").unwrap(), Some(19.5));
        assert!(parse_price("abc").is_err());
        assert!(parse_price("-3").is_err());
    }

    #[test]
    fn sort_keys_parse_from_wire_names() {
        assert_eq!("createdAt".parse::<SortBy>().unwrap(), SortBy::CreatedAt);
        assert_eq!("rating".parse::<SortBy>().unwrap(), SortBy::Rating);
        assert!("popularity".parse::<SortBy>().is_err());
        assert_eq!("asc".parse::<SortOrder>().unwrap(), SortOrder::Asc);
    }
}
