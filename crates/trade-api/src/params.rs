//! Query-string shapes for each endpoint.
//!
//! `None` fields are skipped, so an absent filter is never sent as an
//! empty value.

use serde::Serialize;
use trade_core::{SearchCondition, SortDirection};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchParams<'a> {
    pub lawd_code: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_year_month: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_year_month: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_transaction_amount: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_transaction_amount: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_direction: Option<SortDirection>,
}

impl<'a> From<&'a SearchCondition> for SearchParams<'a> {
    fn from(cond: &'a SearchCondition) -> Self {
        Self {
            lawd_code: &cond.region_code,
            start_year_month: cond.start_period.as_deref(),
            end_year_month: cond.end_period.as_deref(),
            start_transaction_amount: cond.min_amount,
            end_transaction_amount: cond.max_amount,
            page: cond.page,
            size: cond.page_size,
            sort_by: cond.sort_field.as_deref(),
            sort_direction: cond.sort_direction,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryParams<'a> {
    pub apartment_name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dong: Option<&'a str>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrequentParams<'a> {
    pub lawd_code: &'a str,
    pub months: u32,
    pub min_transaction_count: u32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DistrictParams<'a> {
    pub si_code: &'a str,
}
