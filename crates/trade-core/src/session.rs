//! The search session: one condition, one page of results, and the
//! loading/error flags around them.
//!
//! `Session::handle` is the only way state changes. It takes an `Event`
//! (user action or network reply) and may return an `Effect` for the
//! caller to carry out. Nothing here performs I/O.
//!
//! Every fetch gets a fresh `RequestId`. Replies carrying anything but
//! the latest id are dropped, so a slow response can never overwrite a
//! newer one.

use crate::model::{Page, SearchCondition, Trade};
use crate::table::TableView;

pub const SEARCH_FAILED: &str = "검색 중 오류가 발생했습니다.";
pub const PAGE_CHANGE_FAILED: &str = "페이지 이동 중 오류가 발생했습니다.";
pub const PAGE_SIZE_CHANGE_FAILED: &str = "페이지 크기 변경 중 오류가 발생했습니다.";

/// Monotonic per-session request token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Loading,
    Success,
    Error,
}

/// What caused a fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    Search,
    PageChange,
    PageSizeChange,
}

impl Trigger {
    /// Shown when a failure carries no message of its own.
    pub fn fallback_message(self) -> &'static str {
        match self {
            Trigger::Search => SEARCH_FAILED,
            Trigger::PageChange => PAGE_CHANGE_FAILED,
            Trigger::PageSizeChange => PAGE_SIZE_CHANGE_FAILED,
        }
    }
}

/// A search the caller should run. `condition` already carries the
/// page index and size.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchRequest {
    pub id: RequestId,
    pub trigger: Trigger,
    pub condition: SearchCondition,
}

impl FetchRequest {
    pub fn page(&self) -> u32 {
        self.condition.page.unwrap_or(0)
    }

    pub fn page_size(&self) -> u32 {
        self.condition.page_size.unwrap_or(0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// A new search from the form.
    Submit(SearchCondition),
    ChangePage(u32),
    ChangePageSize(u32),
    Loaded { id: RequestId, page: Page<Trade> },
    /// `message` is whatever the failure itself had to say, if anything.
    Failed { id: RequestId, message: Option<String> },
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    Fetch(FetchRequest),
}

#[derive(Debug, Clone)]
pub struct Session {
    condition: Option<SearchCondition>,
    page_index: u32,
    page_size: u32,
    items: Vec<Trade>,
    total_item_count: u64,
    total_page_count: u32,
    phase: Phase,
    error: Option<String>,
    next_request_id: u64,
    in_flight: Option<FetchRequest>,
}

impl Session {
    pub fn new(page_size: u32) -> Self {
        Self {
            condition: None,
            page_index: 0,
            page_size,
            items: Vec::new(),
            total_item_count: 0,
            total_page_count: 0,
            phase: Phase::Idle,
            error: None,
            next_request_id: 1,
            in_flight: None,
        }
    }

    pub fn handle(&mut self, event: Event) -> Option<Effect> {
        match event {
            Event::Submit(condition) => {
                self.condition = Some(condition);
                self.page_index = 0;
                self.issue(Trigger::Search, 0, self.page_size)
            }
            Event::ChangePage(page) => {
                if self.condition.is_none() {
                    return None;
                }
                self.issue(Trigger::PageChange, page, self.page_size)
            }
            Event::ChangePageSize(size) => {
                if self.condition.is_none() || size == 0 {
                    return None;
                }
                self.issue(Trigger::PageSizeChange, 0, size)
            }
            Event::Loaded { id, page } => {
                let request = self.take_current(id)?;
                self.apply_page(&request, page);
                None
            }
            Event::Failed { id, message } => {
                let request = self.take_current(id)?;
                self.apply_failure(&request, message);
                None
            }
        }
    }

    fn issue(&mut self, trigger: Trigger, page: u32, page_size: u32) -> Option<Effect> {
        let condition = self.condition.as_ref()?.with_page(page, page_size);
        let id = RequestId(self.next_request_id);
        self.next_request_id += 1;

        let request = FetchRequest {
            id,
            trigger,
            condition,
        };

        self.error = None;
        self.phase = Phase::Loading;
        self.in_flight = Some(request.clone());
        Some(Effect::Fetch(request))
    }

    /// Take the in-flight request if `id` is the latest one issued.
    fn take_current(&mut self, id: RequestId) -> Option<FetchRequest> {
        if !self.is_current(id) {
            return None;
        }
        self.in_flight.take()
    }

    fn apply_page(&mut self, request: &FetchRequest, page: Page<Trade>) {
        self.items = page.items;
        match request.trigger {
            Trigger::Search => {
                self.page_index = 0;
                self.total_item_count = page.total_item_count;
                self.total_page_count = page.total_page_count;
            }
            Trigger::PageChange => {
                // totals are stable across pages of one search
                self.page_index = request.page();
            }
            Trigger::PageSizeChange => {
                self.page_index = 0;
                self.page_size = request.page_size();
                self.total_item_count = page.total_item_count;
                self.total_page_count = page.total_page_count;
            }
        }
        self.phase = Phase::Success;
    }

    fn apply_failure(&mut self, request: &FetchRequest, message: Option<String>) {
        let message = message
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| request.trigger.fallback_message().to_string());

        // Page and size failures keep the rows that are already on screen.
        if request.trigger == Trigger::Search {
            self.items.clear();
            self.total_item_count = 0;
            self.total_page_count = 0;
        }

        self.error = Some(message);
        self.phase = Phase::Error;
    }

    /// Whether a reply tagged `id` would be applied.
    pub fn is_current(&self, id: RequestId) -> bool {
        self.in_flight.as_ref().is_some_and(|r| r.id == id)
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn condition(&self) -> Option<&SearchCondition> {
        self.condition.as_ref()
    }

    pub fn items(&self) -> &[Trade] {
        &self.items
    }

    pub fn page_index(&self) -> u32 {
        self.page_index
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn total_item_count(&self) -> u64 {
        self.total_item_count
    }

    pub fn total_page_count(&self) -> u32 {
        self.total_page_count
    }

    pub fn in_flight(&self) -> Option<&FetchRequest> {
        self.in_flight.as_ref()
    }

    pub fn table_view(&self) -> TableView<'_> {
        TableView {
            items: &self.items,
            total_item_count: self.total_item_count,
            total_page_count: self.total_page_count,
            page_index: self.page_index,
            page_size: self.page_size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fetch(effect: Option<Effect>) -> FetchRequest {
        match effect {
            Some(Effect::Fetch(req)) => req,
            None => panic!("expected a fetch"),
        }
    }

    fn trades(n: usize) -> Vec<Trade> {
        (0..n)
            .map(|i| Trade {
                id: i as i64,
                ..Trade::default()
            })
            .collect()
    }

    #[test]
    fn paging_without_a_condition_is_a_noop() {
        let mut session = Session::new(20);
        assert_eq!(session.handle(Event::ChangePage(2)), None);
        assert_eq!(session.handle(Event::ChangePageSize(50)), None);
        assert_eq!(session.phase(), Phase::Idle);
    }

    #[test]
    fn submit_enters_loading_and_clears_error() {
        let mut session = Session::new(20);
        let req = fetch(session.handle(Event::Submit(SearchCondition::new("11110"))));
        session.handle(Event::Failed {
            id: req.id,
            message: None,
        });
        assert_eq!(session.error(), Some(SEARCH_FAILED));

        let req = fetch(session.handle(Event::Submit(SearchCondition::new("11110"))));
        assert!(session.is_loading());
        assert_eq!(session.error(), None);
        assert_eq!(req.trigger, Trigger::Search);
    }

    #[test]
    fn request_ids_increase() {
        let mut session = Session::new(20);
        let a = fetch(session.handle(Event::Submit(SearchCondition::new("11110"))));
        let b = fetch(session.handle(Event::ChangePage(1)));
        assert!(b.id > a.id);
        assert!(!session.is_current(a.id));
        assert!(session.is_current(b.id));
    }

    #[test]
    fn page_change_keeps_totals() {
        let mut session = Session::new(20);
        let req = fetch(session.handle(Event::Submit(SearchCondition::new("11110"))));
        session.handle(Event::Loaded {
            id: req.id,
            page: Page {
                items: trades(20),
                total_item_count: 95,
                total_page_count: 5,
                page_size: 20,
                page_index: 0,
            },
        });

        let req = fetch(session.handle(Event::ChangePage(1)));
        session.handle(Event::Loaded {
            id: req.id,
            page: Page {
                items: trades(20),
                total_item_count: 999,
                total_page_count: 50,
                page_size: 20,
                page_index: 1,
            },
        });

        assert_eq!(session.page_index(), 1);
        assert_eq!(session.total_item_count(), 95);
        assert_eq!(session.total_page_count(), 5);
    }

    #[test]
    fn empty_failure_message_uses_fallback() {
        let mut session = Session::new(20);
        let req = fetch(session.handle(Event::Submit(SearchCondition::new("11110"))));
        session.handle(Event::Failed {
            id: req.id,
            message: Some("  ".to_string()),
        });
        assert_eq!(session.error(), Some(SEARCH_FAILED));
    }
}
