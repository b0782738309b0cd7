// crates/trade-client/src/components/mod.rs

pub mod analysis;
pub mod detail;
pub mod help;
pub mod search_form;
pub mod status_bar;
pub mod trade_table;
