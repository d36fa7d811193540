use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent};
use tokio::sync::mpsc;
use tracing::debug;

use crate::action::Action;
use crate::api::{detail_url, first_page_url, next_page_url, Fetch};
use crate::catalog::{parse_page, Catalog};
use crate::detail::parse_detail;
use crate::event::Event;
use crate::types::{PokemonDetail, PokemonSummary};

/// Application state. All mutation happens in [`App::update`] on the main
/// loop; spawned fetch tasks only report back over the action channel, so
/// renders never observe a half-applied page.
pub struct App {
    pub pokemon: Vec<PokemonSummary>,
    pub selected: usize,
    /// The single detail slot. Each resolved detail fetch overwrites it
    /// whole, so when fetches overlap the last one to resolve wins.
    pub current_detail: Option<PokemonDetail>,
    pub end_of_catalog: bool,
    pub loading_page: bool,
    pub loading_detail: bool,
    pub error: Option<String>,
    pub should_quit: bool,
    catalog: Catalog,
    client: Arc<dyn Fetch>,
    action_tx: mpsc::UnboundedSender<Action>,
}

impl App {
    pub fn new(client: Arc<dyn Fetch>, action_tx: mpsc::UnboundedSender<Action>) -> Self {
        Self {
            pokemon: Vec::new(),
            selected: 0,
            current_detail: None,
            end_of_catalog: false,
            loading_page: false,
            loading_detail: false,
            error: None,
            should_quit: false,
            catalog: Catalog::default(),
            client,
            action_tx,
        }
    }

    pub fn handle_event(&self, event: Event) -> Action {
        match event {
            Event::Init => Action::LoadNextPage,
            Event::Key(key) => self.handle_key(key),
            _ => Action::None,
        }
    }

    fn handle_key(&self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                if self.current_detail.is_some() {
                    Action::HideDetail
                } else {
                    Action::Quit
                }
            }
            KeyCode::Char('j') | KeyCode::Down => Action::ScrollDown,
            KeyCode::Char('k') | KeyCode::Up => Action::ScrollUp,
            KeyCode::Enter => Action::Select,
            KeyCode::Char('m') | KeyCode::Char(' ') => Action::LoadNextPage,
            _ => Action::None,
        }
    }

    pub fn update(&mut self, action: Action) {
        if self.error.is_some() && !matches!(action, Action::Quit) {
            self.error = None;
        }

        match action {
            Action::Quit => {
                self.should_quit = true;
            }
            Action::ScrollUp => {
                if self.selected > 0 {
                    self.selected -= 1;
                }
            }
            Action::ScrollDown => {
                if !self.pokemon.is_empty() && self.selected < self.pokemon.len() - 1 {
                    self.selected += 1;
                }
            }
            Action::Select => {
                // The intent carries the record under the cursor at keypress
                // time; nothing is bound to the rendered rows themselves.
                if let Some(summary) = self.pokemon.get(self.selected) {
                    self.loading_detail = true;
                    self.spawn_load_detail(summary.name.clone());
                }
            }
            Action::HideDetail => {
                self.current_detail = None;
            }
            Action::LoadNextPage => {
                if self.loading_page || self.end_of_catalog {
                    return;
                }
                let url = match self.catalog.next_url() {
                    Some(next) => next_page_url(next),
                    // Nothing applied yet: this is the initial load.
                    None if self.pokemon.is_empty() => first_page_url(),
                    None => return,
                };
                self.loading_page = true;
                self.spawn_load_page(url);
            }
            Action::PageLoaded(page) => {
                self.loading_page = false;
                let batch = self.catalog.apply_page(page);
                if batch.end_of_catalog {
                    // One-way: the catalog never regains a next page.
                    self.end_of_catalog = true;
                }
                debug!(
                    count = batch.summaries.len(),
                    end = batch.end_of_catalog,
                    "page applied"
                );
                self.pokemon.extend(batch.summaries);
            }
            Action::DetailLoaded(detail) => {
                self.loading_detail = false;
                self.current_detail = Some(*detail);
            }
            Action::Error(msg) => {
                // The failed load produces nothing; whatever was on screen
                // stays as it was.
                self.loading_page = false;
                self.loading_detail = false;
                self.error = Some(msg);
            }
            Action::None => {}
        }
    }

    fn spawn_load_page(&self, url: String) {
        let tx = self.action_tx.clone();
        let client = Arc::clone(&self.client);
        tokio::spawn(async move {
            let action = match client.fetch(&url).await.and_then(|body| parse_page(&body)) {
                Ok(page) => Action::PageLoaded(page),
                Err(e) => e.into(),
            };
            tx.send(action).ok();
        });
    }

    fn spawn_load_detail(&self, name: String) {
        let tx = self.action_tx.clone();
        let client = Arc::clone(&self.client);
        tokio::spawn(async move {
            let url = detail_url(&name);
            let action = match client.fetch(&url).await.and_then(|body| parse_detail(&body)) {
                Ok(detail) => Action::DetailLoaded(Box::new(detail)),
                Err(e) => e.into(),
            };
            tx.send(action).ok();
        });
    }
}
