//! trade-core
//!
//! Pure search logic for the apartment trade client:
//! - model (search condition, trade, page, region)
//! - search form state
//! - display formatting and the table view model
//! - the search session state machine

pub mod model;
pub mod format;
pub mod table;
pub mod form;
pub mod session;

pub use model::{Page, Region, SearchCondition, SortDirection, Trade};
pub use form::{FormField, SearchForm};
pub use table::{TableView, TradeRow, DEFAULT_PAGE_SIZE, EMPTY_NOTICE, PAGE_SIZE_OPTIONS};
pub use session::{Effect, Event, FetchRequest, Phase, RequestId, Session, Trigger};
