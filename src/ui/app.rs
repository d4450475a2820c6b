use tokio::sync::mpsc;

use crate::catalog::{CatalogIntent, CatalogReducer, CatalogState, Coffee, FetchError};
use crate::nav::{self, Route};
use crate::ui::mvi::Reducer;
use crate::ui::screens::detail;

/// Commands the UI issues to the async side of the runtime.
#[derive(Debug)]
pub enum UiCommand {
    Fetch,
}

pub type UiCommandSender = mpsc::Sender<UiCommand>;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    /// Active screen; the detail payload travels by value, never by
    /// reference into the list.
    route: Route,
    /// Catalog fetch lifecycle (MVI pattern).
    catalog: CatalogState,
    /// Selected card position, plus the record id it anchors to so the
    /// selection survives a refresh that reorders the list.
    selected: usize,
    selected_id: Option<i64>,
    detail_scroll: u16,
    fetch_tx: Option<UiCommandSender>,
}

impl App {
    pub fn new() -> Self {
        Self {
            should_quit: false,
            route: Route::List,
            catalog: CatalogState::default(),
            selected: 0,
            selected_id: None,
            detail_scroll: 0,
            fetch_tx: None,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn catalog(&self) -> &CatalogState {
        &self.catalog
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn detail_scroll(&self) -> u16 {
        self.detail_scroll
    }

    pub fn set_fetch_sender(&mut self, sender: UiCommandSender) {
        self.fetch_tx = Some(sender);
    }

    /// Kick off the initial fetch; the state machine starts in `Loading`.
    pub fn start(&mut self) {
        self.request_fetch();
    }

    /// User retry from the error or empty screen.
    pub fn retry(&mut self) {
        self.dispatch_catalog(CatalogIntent::Retry);
        self.request_fetch();
    }

    /// Pull-to-refresh: keeps the list visible while refetching.
    pub fn refresh(&mut self) {
        self.dispatch_catalog(CatalogIntent::Refresh);
        self.request_fetch();
    }

    /// Retry or refresh depending on what is on screen.
    pub fn reload(&mut self) {
        match self.catalog {
            CatalogState::Ready { .. } => self.refresh(),
            _ => self.retry(),
        }
    }

    /// A fetch completed. Results apply unconditionally in completion
    /// order: last-completed-wins.
    pub fn on_fetch_done(&mut self, outcome: Result<Vec<Coffee>, FetchError>) {
        match outcome {
            Ok(coffees) => {
                self.dispatch_catalog(CatalogIntent::Loaded { coffees });
            }
            Err(err) => {
                tracing::warn!(details = %err.details(), "catalog fetch failed");
                self.dispatch_catalog(CatalogIntent::Failed {
                    message: err.user_message(),
                });
            }
        }
        self.reanchor_selection();
    }

    pub fn on_tick(&mut self) {}

    pub fn move_selection(&mut self, direction: i32) {
        let Some(coffees) = self.catalog.coffees() else {
            return;
        };
        if coffees.is_empty() {
            return;
        }

        let len = coffees.len();
        let current = self.selected.min(len - 1);
        let next = if direction.is_negative() {
            if current == 0 {
                len - 1
            } else {
                current - 1
            }
        } else if current + 1 >= len {
            0
        } else {
            current + 1
        };

        self.selected = next;
        self.selected_id = coffees.get(next).map(|c| c.id);
    }

    pub fn selected_coffee(&self) -> Option<&Coffee> {
        self.catalog.coffees()?.get(self.selected)
    }

    /// Hand the selected record across the navigation boundary by value.
    pub fn open_detail(&mut self) {
        let Some(coffee) = self.selected_coffee() else {
            return;
        };
        let payload = nav::encode_payload(coffee);
        self.navigate_detail(payload);
    }

    /// Enter the detail screen with a pre-serialized payload. An absent or
    /// undecodable payload renders the "nothing selected" guard.
    pub fn navigate_detail(&mut self, payload: Option<String>) {
        self.detail_scroll = 0;
        self.route = Route::Detail { payload };
    }

    pub fn back_to_list(&mut self) {
        self.route = Route::List;
    }

    pub fn scroll_detail(&mut self, delta: i32) {
        let max = self.detail_line_count().saturating_sub(1) as u16;
        let next = if delta.is_negative() {
            self.detail_scroll.saturating_sub(delta.unsigned_abs() as u16)
        } else {
            self.detail_scroll.saturating_add(delta as u16)
        };
        self.detail_scroll = next.min(max);
    }

    fn detail_line_count(&self) -> usize {
        let Route::Detail { payload } = &self.route else {
            return 0;
        };
        nav::decode_payload(payload.as_deref())
            .map(|coffee| detail::detail_lines(&coffee).len())
            .unwrap_or(0)
    }

    fn request_fetch(&mut self) {
        let Some(sender) = &self.fetch_tx else {
            return;
        };
        if let Err(err) = sender.try_send(UiCommand::Fetch) {
            tracing::warn!(error = %err, "fetch command dropped");
        }
    }

    fn dispatch_catalog(&mut self, intent: CatalogIntent) {
        dispatch_mvi!(self, catalog, CatalogReducer, intent);
    }

    /// After the list changes, keep the selection on the same record id
    /// where possible; otherwise clamp the index.
    fn reanchor_selection(&mut self) {
        let Some(coffees) = self.catalog.coffees() else {
            self.selected = 0;
            return;
        };
        if let Some(id) = self.selected_id {
            if let Some(position) = coffees.iter().position(|c| c.id == id) {
                self.selected = position;
                return;
            }
        }
        self.selected = self.selected.min(coffees.len().saturating_sub(1));
        self.selected_id = coffees.get(self.selected).map(|c| c.id);
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
