// crates/trade-core/tests/session_scenarios.rs
use trade_core::session::{PAGE_CHANGE_FAILED, PAGE_SIZE_CHANGE_FAILED};
use trade_core::{
    Effect, Event, FetchRequest, FormField, Page, Phase, SearchCondition, SearchForm, Session,
    Trade, Trigger,
};

fn fetch(effect: Option<Effect>) -> FetchRequest {
    match effect {
        Some(Effect::Fetch(req)) => req,
        None => panic!("expected a fetch effect"),
    }
}

fn page(first_id: i64, len: usize, total: u64, pages: u32, size: u32, index: u32) -> Page<Trade> {
    Page {
        items: (0..len)
            .map(|i| Trade {
                id: first_id + i as i64,
                transaction_amount: "12,345".to_string(),
                ..Trade::default()
            })
            .collect(),
        total_item_count: total,
        total_page_count: pages,
        page_size: size,
        page_index: index,
    }
}

/// Search, then move to page 2 of 5 (index 1).
fn session_on_second_page() -> Session {
    let mut session = Session::new(20);
    let req = fetch(session.handle(Event::Submit(SearchCondition::new("11110"))));
    session.handle(Event::Loaded {
        id: req.id,
        page: page(0, 20, 95, 5, 20, 0),
    });
    let req = fetch(session.handle(Event::ChangePage(1)));
    session.handle(Event::Loaded {
        id: req.id,
        page: page(20, 20, 95, 5, 20, 1),
    });
    assert_eq!(session.page_index(), 1);
    session
}

#[test]
fn form_submit_issues_first_page_with_only_defined_fields() {
    let mut form = SearchForm::new();
    form.set_value(FormField::RegionCode, "11110");
    let condition = form.submit().expect("region code is set");

    let mut session = Session::new(20);
    let req = fetch(session.handle(Event::Submit(condition)));

    assert_eq!(req.trigger, Trigger::Search);
    assert_eq!(req.condition.region_code, "11110");
    assert_eq!(req.condition.page, Some(0));
    assert_eq!(req.condition.page_size, Some(20));
    assert_eq!(req.condition.start_period, None);
    assert_eq!(req.condition.end_period, None);
    assert_eq!(req.condition.min_amount, None);
    assert_eq!(req.condition.max_amount, None);

    session.handle(Event::Loaded {
        id: req.id,
        page: page(0, 3, 3, 1, 20, 0),
    });
    assert_eq!(session.phase(), Phase::Success);
    assert_eq!(session.items().len(), 3);
    assert_eq!(session.page_index(), 0);
}

#[test]
fn fresh_search_resets_page_index() {
    let mut session = session_on_second_page();

    let mut other = SearchCondition::new("11680");
    other.min_amount = Some(100_000);
    let req = fetch(session.handle(Event::Submit(other.clone())));

    assert_eq!(req.page(), 0);
    assert_eq!(session.page_index(), 0);
    assert_eq!(session.condition(), Some(&other));
}

#[test]
fn page_size_change_resets_to_first_page_and_refreshes_totals() {
    let mut session = session_on_second_page();

    let req = fetch(session.handle(Event::ChangePageSize(50)));
    assert_eq!(req.trigger, Trigger::PageSizeChange);
    assert_eq!(req.page(), 0);
    assert_eq!(req.page_size(), 50);
    assert_eq!(req.condition.region_code, "11110");

    session.handle(Event::Loaded {
        id: req.id,
        page: page(0, 50, 95, 2, 50, 0),
    });
    assert_eq!(session.page_index(), 0);
    assert_eq!(session.page_size(), 50);
    assert_eq!(session.total_page_count(), 2);
    assert_eq!(session.total_item_count(), 95);

    // later page changes keep the new size
    let req = fetch(session.handle(Event::ChangePage(1)));
    assert_eq!(req.page_size(), 50);
}

#[test]
fn server_failure_on_search_shows_message_and_empty_table() {
    let mut session = session_on_second_page();

    let req = fetch(session.handle(Event::Submit(SearchCondition::new("11110"))));
    session.handle(Event::Failed {
        id: req.id,
        message: Some("DB unavailable".to_string()),
    });

    assert_eq!(session.phase(), Phase::Error);
    assert_eq!(session.error(), Some("DB unavailable"));
    assert!(session.items().is_empty());
    assert_eq!(session.total_item_count(), 0);
    assert!(session.table_view().is_empty());
}

#[test]
fn page_failure_keeps_rows_on_screen() {
    let mut session = session_on_second_page();

    let req = fetch(session.handle(Event::ChangePage(2)));
    session.handle(Event::Failed {
        id: req.id,
        message: None,
    });

    assert_eq!(session.error(), Some(PAGE_CHANGE_FAILED));
    assert_eq!(session.items().len(), 20);
    assert_eq!(session.items()[0].id, 20);
    assert_eq!(session.page_index(), 1);
    assert_eq!(session.total_item_count(), 95);
}

#[test]
fn page_size_failure_keeps_previous_size() {
    let mut session = session_on_second_page();

    let req = fetch(session.handle(Event::ChangePageSize(100)));
    session.handle(Event::Failed {
        id: req.id,
        message: None,
    });

    assert_eq!(session.error(), Some(PAGE_SIZE_CHANGE_FAILED));
    assert_eq!(session.page_size(), 20);
    assert_eq!(session.items().len(), 20);
}

#[test]
fn stale_reply_is_discarded() {
    let mut session = Session::new(20);
    let slow = fetch(session.handle(Event::Submit(SearchCondition::new("11110"))));
    let fast = fetch(session.handle(Event::Submit(SearchCondition::new("11680"))));

    session.handle(Event::Loaded {
        id: fast.id,
        page: page(100, 2, 2, 1, 20, 0),
    });
    // the first search completes last and must not overwrite
    let effect = session.handle(Event::Loaded {
        id: slow.id,
        page: page(0, 20, 95, 5, 20, 0),
    });

    assert_eq!(effect, None);
    assert_eq!(session.items().len(), 2);
    assert_eq!(session.items()[0].id, 100);
    assert_eq!(session.total_item_count(), 2);
    assert_eq!(session.phase(), Phase::Success);
}

#[test]
fn stale_failure_does_not_clobber_newer_success() {
    let mut session = Session::new(20);
    let first = fetch(session.handle(Event::Submit(SearchCondition::new("11110"))));
    let second = fetch(session.handle(Event::ChangePage(1)));

    session.handle(Event::Loaded {
        id: second.id,
        page: page(20, 20, 95, 5, 20, 1),
    });
    session.handle(Event::Failed {
        id: first.id,
        message: Some("late".to_string()),
    });

    assert_eq!(session.error(), None);
    assert_eq!(session.phase(), Phase::Success);
}
