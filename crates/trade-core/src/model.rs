//! Data model shared by the API client and the terminal UI.
//!
//! - `SearchCondition`: what the user asked for
//! - `Trade`: one apartment sale record, owned by the backend
//! - `Page<T>`: one slice of a larger result set
//! - `Region`: an administrative region entry
//!
//! The serde attributes describe the backend's JSON names. The backend
//! is not consistent about strings vs numbers for a few `Trade` fields,
//! so those go through `lenient_string`.

use serde::{Deserialize, Deserializer, Serialize};

/// Sort direction accepted by the search endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }
}

/// Filters for one search.
///
/// Only `region_code` is required. Every `None` field is left out of the
/// outbound request entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchCondition {
    /// 5-digit administrative district code (e.g. "11110").
    pub region_code: String,
    /// Inclusive start month, `YYYY-MM`.
    pub start_period: Option<String>,
    /// Inclusive end month, `YYYY-MM`.
    pub end_period: Option<String>,
    /// Lower price bound in 10,000-won units.
    pub min_amount: Option<u64>,
    /// Upper price bound in 10,000-won units.
    pub max_amount: Option<u64>,
    pub page: Option<u32>,
    pub page_size: Option<u32>,
    pub sort_field: Option<String>,
    pub sort_direction: Option<SortDirection>,
}

impl SearchCondition {
    pub fn new(region_code: impl Into<String>) -> Self {
        Self {
            region_code: region_code.into(),
            ..Self::default()
        }
    }

    /// Copy of this condition pinned to one page.
    pub fn with_page(&self, page: u32, page_size: u32) -> Self {
        Self {
            page: Some(page),
            page_size: Some(page_size),
            ..self.clone()
        }
    }
}

/// One apartment sale record as served by the backend.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trade {
    pub id: i64,
    #[serde(default, deserialize_with = "lenient_string")]
    pub lawd_code: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub apartment_name: String,
    /// Comma-grouped amount in 10,000-won units, e.g. "12,345".
    #[serde(default, deserialize_with = "lenient_string")]
    pub transaction_amount: String,
    #[serde(default)]
    pub building_year: Option<i32>,
    /// `YYYYMMDD`
    #[serde(default, deserialize_with = "lenient_string")]
    pub transaction_date: String,
    /// Exclusive area in m².
    #[serde(default)]
    pub exclusive_area: Option<f64>,
    /// Not always numeric (basement floors, "B1").
    #[serde(default, deserialize_with = "lenient_string")]
    pub floor: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub dong: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub jibun: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub regional_code: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub cancel_deal_type: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub registration_date: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub requester_gbn: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub transaction_type: String,
}

/// One bounded slice of an ordered result set.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Page<T> {
    #[serde(rename = "content")]
    pub items: Vec<T>,
    #[serde(rename = "totalElements")]
    pub total_item_count: u64,
    #[serde(rename = "totalPages")]
    pub total_page_count: u32,
    #[serde(rename = "size")]
    pub page_size: u32,
    /// 0-based.
    #[serde(rename = "number")]
    pub page_index: u32,
}

impl<T> Page<T> {
    pub fn empty(page_size: u32) -> Self {
        Self {
            items: Vec::new(),
            total_item_count: 0,
            total_page_count: 0,
            page_size,
            page_index: 0,
        }
    }
}

/// Administrative region (province or district).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Region {
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub parent_code: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    Text(String),
    Int(i64),
    Float(f64),
}

/// Accepts a string, a number or `null`; `null` becomes "".
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<StringOrNumber>::deserialize(deserializer)?;
    Ok(match value {
        None => String::new(),
        Some(StringOrNumber::Text(s)) => s,
        Some(StringOrNumber::Int(n)) => n.to_string(),
        Some(StringOrNumber::Float(f)) => f.to_string(),
    })
}
