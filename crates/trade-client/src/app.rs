// crates/trade-client/src/app.rs

use chrono::{DateTime, Local};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::mpsc::UnboundedSender;
use tracing::{debug, info, warn};
use trade_core::{Effect, Event, FormField, SearchForm, Session, Trade};

use crate::config::ClientConfig;
use crate::network::{ApiCommand, ApiReply};

pub const REGION_REQUIRED: &str = "지역 코드를 입력하세요.";
pub const DETAIL_FAILED: &str = "조회 중 오류가 발생했습니다.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Editing,
}

/// Header navigation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Search,
    Analysis,
}

impl Screen {
    pub const ALL: [Screen; 2] = [Screen::Search, Screen::Analysis];

    pub fn title(self) -> &'static str {
        match self {
            Screen::Search => "검색",
            Screen::Analysis => "분석",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Form,
    Table,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DetailState {
    Loading,
    Loaded(Vec<Trade>),
    Failed(String),
}

/// Overlay listing trades fetched outside the main search.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailView {
    pub id: u64,
    pub title: String,
    pub state: DetailState,
}

pub struct App {
    // UI state
    pub input_mode: InputMode,
    pub screen: Screen,
    pub current_panel: Panel,
    pub should_quit: bool,
    pub show_help: bool,
    pub detail: Option<DetailView>,
    /// One-line hint shown in the status bar until the next key press.
    pub notice: Option<String>,

    // Search state
    pub form: SearchForm,
    pub session: Session,
    pub selected_row: usize,
    pub last_loaded: Option<DateTime<Local>>,

    // Settings
    pub api_url: String,
    pub frequent_months: u32,
    pub frequent_min_count: u32,

    next_detail_id: u64,
    network_tx: Option<UnboundedSender<ApiCommand>>,
}

impl App {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            input_mode: InputMode::Normal,
            screen: Screen::Search,
            current_panel: Panel::Form,
            should_quit: false,
            show_help: false,
            detail: None,
            notice: None,
            form: SearchForm::new(),
            session: Session::new(config.page_size),
            selected_row: 0,
            last_loaded: None,
            api_url: config.api_url.clone(),
            frequent_months: config.frequent_months,
            frequent_min_count: config.frequent_min_count,
            next_detail_id: 1,
            network_tx: None,
        }
    }

    pub fn set_network_sender(&mut self, tx: UnboundedSender<ApiCommand>) {
        self.network_tx = Some(tx);
    }

    /// Fill the region field and run the search straight away.
    pub fn search_region(&mut self, region_code: &str) {
        self.form.set_value(FormField::RegionCode, region_code);
        self.submit_search();
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        self.notice = None;

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('c') => self.should_quit = true,
                KeyCode::Char('r') => self.reset_form(),
                _ => {}
            }
            return;
        }

        match self.input_mode {
            InputMode::Normal => self.handle_normal_key(key.code),
            InputMode::Editing => self.handle_editing_key(key.code),
        }
    }

    fn handle_normal_key(&mut self, code: KeyCode) {
        // overlays swallow everything but their close keys
        if self.show_help || self.detail.is_some() {
            match code {
                KeyCode::Esc | KeyCode::F(1) | KeyCode::Enter => {
                    self.show_help = false;
                    self.detail = None;
                }
                KeyCode::Char('q') | KeyCode::Char('Q') => self.should_quit = true,
                _ => {}
            }
            return;
        }

        match code {
            KeyCode::Char('q') | KeyCode::Char('Q') => self.should_quit = true,
            KeyCode::F(1) => self.toggle_help(),
            KeyCode::Char('1') => self.screen = Screen::Search,
            KeyCode::Char('2') => self.screen = Screen::Analysis,
            _ if self.screen != Screen::Search => {}

            KeyCode::Tab | KeyCode::BackTab => self.toggle_panel(),
            KeyCode::Char('/') | KeyCode::Char('e') => self.start_editing(),
            KeyCode::Enter if self.current_panel == Panel::Form => self.start_editing(),

            KeyCode::Up | KeyCode::Char('k') => self.move_selection_up(),
            KeyCode::Down | KeyCode::Char('j') => self.move_selection_down(),
            KeyCode::Left | KeyCode::Char('[') => self.prev_page(),
            KeyCode::Right | KeyCode::Char(']') => self.next_page(),
            KeyCode::Home => self.first_page(),
            KeyCode::End => self.last_page(),
            KeyCode::Char('+') | KeyCode::Char('=') => self.larger_page_size(),
            KeyCode::Char('-') => self.smaller_page_size(),
            KeyCode::Char('h') => self.open_history(),
            KeyCode::Char('f') => self.open_frequent(),
            _ => {}
        }
    }

    fn handle_editing_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Enter => self.submit_search(),
            KeyCode::Esc => self.input_mode = InputMode::Normal,
            KeyCode::Tab | KeyCode::Down => self.form.focus_next(),
            KeyCode::BackTab | KeyCode::Up => self.form.focus_prev(),
            KeyCode::Backspace => self.form.delete_char(),
            KeyCode::Char(c) => {
                self.form.enter_char(c);
            }
            _ => {}
        }
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn toggle_panel(&mut self) {
        self.current_panel = match self.current_panel {
            Panel::Form => Panel::Table,
            Panel::Table => Panel::Form,
        };
    }

    pub fn start_editing(&mut self) {
        self.screen = Screen::Search;
        self.current_panel = Panel::Form;
        self.input_mode = InputMode::Editing;
    }

    pub fn submit_search(&mut self) {
        if self.form.is_disabled() {
            return;
        }
        match self.form.submit() {
            Some(condition) => {
                info!(region = %condition.region_code, "Submitting search");
                self.input_mode = InputMode::Normal;
                self.current_panel = Panel::Table;
                self.dispatch(Event::Submit(condition));
            }
            None => self.notice = Some(REGION_REQUIRED.to_string()),
        }
    }

    pub fn reset_form(&mut self) {
        if self.form.reset() {
            debug!("Search form reset");
        }
    }

    pub fn move_selection_up(&mut self) {
        self.selected_row = self.selected_row.saturating_sub(1);
    }

    pub fn move_selection_down(&mut self) {
        if self.selected_row + 1 < self.session.items().len() {
            self.selected_row += 1;
        }
    }

    pub fn next_page(&mut self) {
        if let Some(page) = self.session.table_view().next_page() {
            self.dispatch(Event::ChangePage(page));
        }
    }

    pub fn prev_page(&mut self) {
        if let Some(page) = self.session.table_view().prev_page() {
            self.dispatch(Event::ChangePage(page));
        }
    }

    pub fn first_page(&mut self) {
        if let Some(page) = self.session.table_view().first_page() {
            self.dispatch(Event::ChangePage(page));
        }
    }

    pub fn last_page(&mut self) {
        if let Some(page) = self.session.table_view().last_page() {
            self.dispatch(Event::ChangePage(page));
        }
    }

    pub fn larger_page_size(&mut self) {
        if let Some(size) = self.session.table_view().larger_page_size() {
            self.dispatch(Event::ChangePageSize(size));
        }
    }

    pub fn smaller_page_size(&mut self) {
        if let Some(size) = self.session.table_view().smaller_page_size() {
            self.dispatch(Event::ChangePageSize(size));
        }
    }

    pub fn selected_trade(&self) -> Option<&Trade> {
        self.session.items().get(self.selected_row)
    }

    /// Every recorded trade of the selected row's apartment.
    pub fn open_history(&mut self) {
        let Some(trade) = self.selected_trade() else {
            return;
        };
        let apartment_name = trade.apartment_name.clone();
        let dong = trade.dong.clone();
        if apartment_name.is_empty() {
            return;
        }

        let title = if dong.is_empty() {
            format!("{} 거래 이력", apartment_name)
        } else {
            format!("{} ({}) 거래 이력", apartment_name, dong)
        };
        let id = self.open_detail(title);
        self.send(ApiCommand::History {
            id,
            apartment_name,
            dong,
        });
    }

    /// Frequently traded apartments in the searched region, falling back to
    /// whatever is typed in the form.
    pub fn open_frequent(&mut self) {
        let region_code = self
            .session
            .condition()
            .map(|c| c.region_code.clone())
            .unwrap_or_else(|| self.form.value(FormField::RegionCode).trim().to_string());
        if region_code.is_empty() {
            self.notice = Some(REGION_REQUIRED.to_string());
            return;
        }

        let title = format!(
            "{} 최근 {}개월 {}회 이상 거래",
            region_code, self.frequent_months, self.frequent_min_count
        );
        let id = self.open_detail(title);
        self.send(ApiCommand::Frequent {
            id,
            region_code,
            months: self.frequent_months,
            min_count: self.frequent_min_count,
        });
    }

    fn open_detail(&mut self, title: String) -> u64 {
        let id = self.next_detail_id;
        self.next_detail_id += 1;
        self.detail = Some(DetailView {
            id,
            title,
            state: DetailState::Loading,
        });
        id
    }

    /// Feed an event to the session and carry out whatever it asks for.
    pub fn dispatch(&mut self, event: Event) {
        if let Some(Effect::Fetch(request)) = self.session.handle(event) {
            debug!(
                id = request.id.0,
                trigger = ?request.trigger,
                page = request.page(),
                size = request.page_size(),
                "Issuing search"
            );
            self.send(ApiCommand::Search(request));
        }
        self.form.set_disabled(self.session.is_loading());
    }

    fn send(&self, cmd: ApiCommand) {
        if let Some(tx) = &self.network_tx {
            if let Err(e) = tx.send(cmd) {
                warn!("Failed to send command to API worker: {}", e);
            }
        }
    }

    pub fn handle_reply(&mut self, reply: ApiReply) {
        match reply {
            ApiReply::Search { id, result } => {
                if !self.session.is_current(id) {
                    debug!(id = id.0, "Dropping stale search reply");
                    return;
                }
                let event = match result {
                    Ok(page) => {
                        self.last_loaded = Some(Local::now());
                        self.selected_row = 0;
                        Event::Loaded { id, page }
                    }
                    Err(e) => {
                        warn!(id = id.0, "Search failed: {}", e);
                        Event::Failed {
                            id,
                            message: e.user_message(),
                        }
                    }
                };
                self.dispatch(event);
            }
            ApiReply::Detail { id, result } => {
                let Some(detail) = self.detail.as_mut().filter(|d| d.id == id) else {
                    debug!(id, "Dropping reply for closed detail view");
                    return;
                };
                detail.state = match result {
                    Ok(trades) => DetailState::Loaded(trades),
                    Err(e) => {
                        warn!(id, "Detail lookup failed: {}", e);
                        DetailState::Failed(
                            e.user_message()
                                .filter(|m| !m.trim().is_empty())
                                .unwrap_or_else(|| DETAIL_FAILED.to_string()),
                        )
                    }
                };
            }
        }
    }
}
