//! View model for the trade table and its pagination control.
//!
//! The table never computes totals itself: item and page counts are
//! whatever the caller hands in (which in turn came from the server).

use crate::format::{format_amount, format_area, format_date};
use crate::model::Trade;

/// Rows-per-page menu.
pub const PAGE_SIZE_OPTIONS: [u32; 4] = [10, 20, 50, 100];

pub const DEFAULT_PAGE_SIZE: u32 = 20;

pub const EMPTY_NOTICE: &str = "검색 결과가 없습니다.";

/// A trade with every column already formatted for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TradeRow {
    pub apartment: String,
    pub dong: String,
    pub amount: String,
    pub area: String,
    pub floor: String,
    pub building_year: String,
    pub date: String,
    pub jibun: String,
}

impl From<&Trade> for TradeRow {
    fn from(trade: &Trade) -> Self {
        Self {
            apartment: trade.apartment_name.clone(),
            dong: trade.dong.clone(),
            amount: format_amount(&trade.transaction_amount),
            area: trade.exclusive_area.map(format_area).unwrap_or_else(|| "-".to_string()),
            floor: trade.floor.clone(),
            building_year: trade
                .building_year
                .map(|y| y.to_string())
                .unwrap_or_else(|| "-".to_string()),
            date: format_date(&trade.transaction_date),
            jibun: trade.jibun.clone(),
        }
    }
}

/// Everything the table needs to draw one page.
#[derive(Debug, Clone, Copy)]
pub struct TableView<'a> {
    pub items: &'a [Trade],
    pub total_item_count: u64,
    pub total_page_count: u32,
    pub page_index: u32,
    pub page_size: u32,
}

impl<'a> TableView<'a> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn rows(&self) -> Vec<TradeRow> {
        self.items.iter().map(TradeRow::from).collect()
    }

    /// "21-40 / 총 95개"
    pub fn displayed_rows_label(&self) -> String {
        let total = self.total_item_count;
        let size = u64::from(self.page_size);
        let page = u64::from(self.page_index);
        let from = if total == 0 { 0 } else { page * size + 1 };
        let to = total.min((page + 1) * size);
        format!("{}-{} / 총 {}개", from, to, total)
    }

    /// Index of the following page, if there is one.
    pub fn next_page(&self) -> Option<u32> {
        let next = self.page_index.checked_add(1)?;
        (next < self.total_page_count).then_some(next)
    }

    pub fn prev_page(&self) -> Option<u32> {
        self.page_index.checked_sub(1)
    }

    pub fn first_page(&self) -> Option<u32> {
        (self.page_index != 0).then_some(0)
    }

    pub fn last_page(&self) -> Option<u32> {
        let last = self.total_page_count.checked_sub(1)?;
        (self.page_index != last).then_some(last)
    }

    /// Next larger option from the rows-per-page menu.
    pub fn larger_page_size(&self) -> Option<u32> {
        PAGE_SIZE_OPTIONS.iter().copied().find(|s| *s > self.page_size)
    }

    /// Next smaller option from the rows-per-page menu.
    pub fn smaller_page_size(&self) -> Option<u32> {
        PAGE_SIZE_OPTIONS.iter().rev().copied().find(|s| *s < self.page_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view(items: &[Trade], total: u64, pages: u32, index: u32, size: u32) -> TableView<'_> {
        TableView {
            items,
            total_item_count: total,
            total_page_count: pages,
            page_index: index,
            page_size: size,
        }
    }

    #[test]
    fn row_formats_every_column() {
        let trade = Trade {
            id: 1,
            apartment_name: "래미안".to_string(),
            dong: "사직동".to_string(),
            transaction_amount: "12,345".to_string(),
            building_year: Some(2008),
            transaction_date: "20230115".to_string(),
            exclusive_area: Some(84.9),
            floor: "B1".to_string(),
            jibun: "9".to_string(),
            ..Trade::default()
        };

        let row = TradeRow::from(&trade);
        assert_eq!(row.amount, "1.2억");
        assert_eq!(row.date, "2023-01-15");
        assert_eq!(row.area, "84.90m²");
        assert_eq!(row.floor, "B1");
        assert_eq!(row.building_year, "2008");
    }

    #[test]
    fn label_follows_caller_totals() {
        assert_eq!(view(&[], 95, 5, 1, 20).displayed_rows_label(), "21-40 / 총 95개");
        assert_eq!(view(&[], 95, 5, 4, 20).displayed_rows_label(), "81-95 / 총 95개");
        assert_eq!(view(&[], 0, 0, 0, 20).displayed_rows_label(), "0-0 / 총 0개");
    }

    #[test]
    fn page_navigation_is_bounded_by_total_pages() {
        let v = view(&[], 95, 5, 0, 20);
        assert_eq!(v.next_page(), Some(1));
        assert_eq!(v.prev_page(), None);
        assert_eq!(v.first_page(), None);
        assert_eq!(v.last_page(), Some(4));

        let v = view(&[], 95, 5, 4, 20);
        assert_eq!(v.next_page(), None);
        assert_eq!(v.prev_page(), Some(3));
        assert_eq!(v.last_page(), None);
    }

    #[test]
    fn page_size_menu_steps() {
        let v = view(&[], 0, 0, 0, 20);
        assert_eq!(v.larger_page_size(), Some(50));
        assert_eq!(v.smaller_page_size(), Some(10));

        assert_eq!(view(&[], 0, 0, 0, 100).larger_page_size(), None);
        assert_eq!(view(&[], 0, 0, 0, 10).smaller_page_size(), None);
        assert_eq!(view(&[], 0, 0, 0, 30).larger_page_size(), Some(50));
    }
}
