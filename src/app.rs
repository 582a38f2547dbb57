//! Application state.
//!
//! `App` owns the authoritative dataset, the current view query, and the
//! derived working set. The dataset is loaded exactly once by a background
//! task that reports back over the message channel; everything else is
//! synchronous mutation of this container from the UI loop. No ambient
//! globals anywhere.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::mpsc;

use crate::api::CountriesClient;
use crate::error::LoadError;
use crate::models::Country;
use crate::query::{derive_working_set, region_options, SortMode, ViewQuery};
use crate::ui::{LayoutContext, Theme};
use crate::widgets::SearchInput;

/// Messages received from async operations.
#[derive(Debug)]
pub enum AppMessage {
    /// The dataset fetch completed successfully
    CountriesLoaded(Vec<Country>),
    /// The dataset fetch failed
    LoadFailed(LoadError),
}

/// Lifecycle of the dataset.
#[derive(Debug, Clone, Default)]
pub enum LoadPhase {
    /// Welcome gate shown; nothing fetched yet
    #[default]
    Welcome,
    /// Fetch task in flight
    Loading,
    /// Dataset in memory, browse/detail screens active
    Loaded,
    /// Fetch failed; terminal state for this process
    Failed(LoadError),
}

/// Represents which screen is currently active once the dataset is loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Browse,
    Detail,
}

/// Main application state
pub struct App {
    /// The full dataset, created once on successful load, never mutated
    pub countries: Vec<Country>,
    /// Indices into `countries`: the working set currently displayed
    pub working_set: Vec<usize>,
    /// Selected position within the working set
    pub selected: usize,
    /// Region selector options derived from the dataset
    pub regions: Vec<String>,
    /// Position in the region selector; 0 is the "all regions" sentinel
    pub region_index: usize,
    /// Current sort mode
    pub sort: SortMode,
    /// Search box state
    pub search: SearchInput,
    /// Dataset lifecycle phase
    pub phase: LoadPhase,
    /// Active screen once loaded
    pub screen: Screen,
    /// Common name keying the detail view
    pub detail_name: Option<String>,
    /// Active color theme
    pub theme: Theme,
    /// Flag to track if the app should quit
    pub should_quit: bool,
    /// Dirty flag: redraw on the next loop iteration
    pub needs_redraw: bool,
    /// Tick counter for animations (loading spinner)
    pub tick_count: u64,
    /// Terminal dimensions, updated on resize events
    pub terminal_width: u16,
    pub terminal_height: u16,
    /// When the dataset arrived
    pub loaded_at: Option<DateTime<Utc>>,
    /// Receiver for async messages (taken by the event loop)
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    /// Sender for async messages (cloned into the fetch task)
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    /// API client (shared with the fetch task)
    pub client: Arc<CountriesClient>,
}

impl App {
    /// Create a new App against the public endpoint.
    pub fn new() -> Self {
        Self::with_client(Arc::new(CountriesClient::new()))
    }

    /// Create a new App with a custom API client.
    pub fn with_client(client: Arc<CountriesClient>) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();

        Self {
            countries: Vec::new(),
            working_set: Vec::new(),
            selected: 0,
            regions: Vec::new(),
            region_index: 0,
            sort: SortMode::default(),
            search: SearchInput::new(),
            phase: LoadPhase::default(),
            screen: Screen::default(),
            detail_name: None,
            theme: Theme::dark(),
            should_quit: false,
            needs_redraw: true,
            tick_count: 0,
            terminal_width: 80,
            terminal_height: 24,
            loaded_at: None,
            message_rx: Some(message_rx),
            message_tx,
            client,
        }
    }

    /// Mark the UI as needing a redraw.
    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    /// Advance the animation tick.
    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
        if matches!(self.phase, LoadPhase::Loading) {
            // Spinner frame advances with the tick
            self.mark_dirty();
        }
    }

    /// Request application shutdown.
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Record new terminal dimensions after a resize event.
    pub fn update_terminal_dimensions(&mut self, width: u16, height: u16) {
        self.terminal_width = width;
        self.terminal_height = height;
        self.mark_dirty();
    }

    /// Card grid columns for the current terminal width.
    pub fn card_columns(&self) -> usize {
        LayoutContext::new(self.terminal_width, self.terminal_height).card_columns()
    }

    /// Acknowledge the welcome gate and start the one-shot dataset fetch.
    ///
    /// Idempotent: once the gate has been passed the phase is never
    /// `Welcome` again, so a second confirm cannot trigger a second fetch.
    pub fn confirm_welcome(&mut self) {
        if !matches!(self.phase, LoadPhase::Welcome) {
            return;
        }
        self.phase = LoadPhase::Loading;
        self.mark_dirty();
        self.spawn_fetch();
    }

    /// Spawn the background fetch task. Runs once per process.
    fn spawn_fetch(&self) {
        let client = Arc::clone(&self.client);
        let tx = self.message_tx.clone();

        tokio::spawn(async move {
            match client.fetch_all().await {
                Ok(countries) => {
                    tracing::info!(count = countries.len(), "country dataset loaded");
                    let _ = tx.send(AppMessage::CountriesLoaded(countries));
                }
                Err(err) => {
                    tracing::error!(code = err.error_code(), error = %err, "country fetch failed");
                    let _ = tx.send(AppMessage::LoadFailed(err));
                }
            }
        });
    }

    /// Handle a message from the fetch task.
    pub fn handle_message(&mut self, msg: AppMessage) {
        match msg {
            AppMessage::CountriesLoaded(countries) => {
                self.regions = region_options(&countries);
                self.countries = countries;
                self.loaded_at = Some(Utc::now());
                self.phase = LoadPhase::Loaded;
                self.refresh_working_set();
            }
            AppMessage::LoadFailed(err) => {
                self.phase = LoadPhase::Failed(err);
            }
        }
        self.mark_dirty();
    }

    /// The query the current controls describe.
    pub fn current_query(&self) -> ViewQuery {
        ViewQuery {
            search: self.search.content().to_string(),
            region: self.current_region().map(|r| r.to_string()),
            sort: self.sort,
        }
    }

    /// Selected region, or `None` for the "all regions" sentinel.
    pub fn current_region(&self) -> Option<&str> {
        if self.region_index == 0 {
            None
        } else {
            self.regions.get(self.region_index - 1).map(|s| s.as_str())
        }
    }

    /// Recompute the working set wholesale from the dataset and controls.
    pub fn refresh_working_set(&mut self) {
        self.working_set = derive_working_set(&self.countries, &self.current_query());
        if self.selected >= self.working_set.len() {
            self.selected = self.working_set.len().saturating_sub(1);
        }
        self.mark_dirty();
    }

    /// The country under the selection cursor, if any.
    pub fn selected_country(&self) -> Option<&Country> {
        self.working_set
            .get(self.selected)
            .map(|&i| &self.countries[i])
    }

    /// Resolve the detail record by its common name key.
    pub fn detail_country(&self) -> Option<&Country> {
        let name = self.detail_name.as_deref()?;
        self.countries.iter().find(|c| c.name.common == name)
    }

    // ------------------------------------------------------------------
    // Search
    // ------------------------------------------------------------------

    /// Append a character to the search query.
    pub fn search_push(&mut self, c: char) {
        self.search.insert_char(c);
        self.refresh_working_set();
    }

    /// Delete the character before the search cursor.
    pub fn search_backspace(&mut self) {
        self.search.backspace();
        self.refresh_working_set();
    }

    /// Clear the search query.
    pub fn search_clear(&mut self) {
        self.search.clear();
        self.refresh_working_set();
    }

    // ------------------------------------------------------------------
    // Region / sort / theme controls
    // ------------------------------------------------------------------

    /// Cycle the region selector forward (wrapping through the sentinel).
    pub fn cycle_region(&mut self) {
        self.region_index = (self.region_index + 1) % (self.regions.len() + 1);
        self.refresh_working_set();
    }

    /// Cycle the region selector backward.
    pub fn cycle_region_back(&mut self) {
        let len = self.regions.len() + 1;
        self.region_index = (self.region_index + len - 1) % len;
        self.refresh_working_set();
    }

    /// Advance the sort mode.
    pub fn cycle_sort(&mut self) {
        self.sort = self.sort.next();
        self.refresh_working_set();
    }

    /// Switch between the dark and light palettes.
    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        self.mark_dirty();
    }

    // ------------------------------------------------------------------
    // Selection / navigation
    // ------------------------------------------------------------------

    /// Move the selection cursor right within the grid.
    pub fn select_next(&mut self) {
        if self.selected + 1 < self.working_set.len() {
            self.selected += 1;
            self.mark_dirty();
        }
    }

    /// Move the selection cursor left within the grid.
    pub fn select_prev(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
            self.mark_dirty();
        }
    }

    /// Move the selection cursor one grid row down.
    pub fn select_down(&mut self) {
        let columns = self.card_columns();
        if self.selected + columns < self.working_set.len() {
            self.selected += columns;
            self.mark_dirty();
        }
    }

    /// Move the selection cursor one grid row up.
    pub fn select_up(&mut self) {
        let columns = self.card_columns();
        if self.selected >= columns {
            self.selected -= columns;
            self.mark_dirty();
        }
    }

    /// Open the detail screen for the selected card.
    pub fn open_detail(&mut self) {
        if let Some(country) = self.selected_country() {
            self.detail_name = Some(country.name.common.clone());
            self.screen = Screen::Detail;
            self.mark_dirty();
        }
    }

    /// Leave the detail screen.
    pub fn close_detail(&mut self) {
        self.detail_name = None;
        self.screen = Screen::Browse;
        self.mark_dirty();
    }

    /// Open the detail record's flag image in the system browser.
    pub fn open_detail_flag(&self) {
        if let Some(country) = self.detail_country() {
            if let Err(err) = webbrowser::open(&country.flags.svg) {
                tracing::warn!(error = %err, flag = %country.flags.svg, "failed to open flag in browser");
            }
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
