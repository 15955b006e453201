//! Zellij plugin wrapper and entry point.
//!
//! Thin integration layer between the zcatalog library and the Zellij plugin
//! system. Key presses are translated into library [`Event`]s, handled by
//! [`handle_event`], and any returned [`Action`]s are carried out through the
//! Zellij API.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, load theme and catalog
//! 2. **Subscribe**: Register for `Key` events
//! 3. **Update**: Map keys to events, delegate to library layer
//! 4. **Render**: Call library render function
//!
//! # Keybindings
//!
//! Global (all modes):
//! - `Ctrl+n` / `Down`: Move down
//! - `Ctrl+p` / `Up`: Move up
//!
//! In normal mode:
//! - `j` / `k`: Move down / up
//! - `Space` / `Enter`: Toggle checkbox, select radio button
//! - `h` / `l` / `Left` / `Right`: Adjust slider or sort key
//! - `s`: Cycle sort key
//! - `r`: Reset filters
//! - `/`: Enter search mode
//! - `q`: Close plugin
//!
//! In search mode:
//! - Characters: Edit the name query
//! - `Enter`: Keep query and return to normal mode
//! - `Esc`: Clear query and return to normal mode
//!
//! Built for a non-wasm target the binary prints a single frame of the plugin
//! using the sample catalog, for checking layout in a plain terminal.

#![allow(clippy::multiple_crate_versions)]

#[cfg(target_family = "wasm")]
use zellij_tile::prelude::*;

#[cfg(target_family = "wasm")]
register_plugin!(shim::State);

#[cfg(target_family = "wasm")]
mod shim {
    use std::collections::BTreeMap;
    use zcatalog::{handle_event, Action, Config, Event, InputMode};
    use zellij_tile::prelude::{
        hide_self, request_permission, subscribe, BareKey, EventType, KeyModifier,
        KeyWithModifier, PermissionType, ZellijPlugin,
    };

    /// Plugin state wrapper around the library's `AppState`.
    pub struct State {
        app: zcatalog::AppState,
    }

    impl Default for State {
        fn default() -> Self {
            Self {
                app: zcatalog::initialize(&Config::default()),
            }
        }
    }

    impl ZellijPlugin for State {
        /// Parses configuration, initializes tracing and application state,
        /// and subscribes to key events.
        ///
        /// `ChangeApplicationState` is needed to hide the pane on `q`.
        fn load(&mut self, configuration: BTreeMap<String, String>) {
            let config = Config::from_zellij(&configuration);
            zcatalog::observability::init_tracing(&config);

            let _guard = tracing::debug_span!("plugin_load").entered();
            tracing::debug!(config = ?config, "parsed configuration");

            self.app = zcatalog::initialize(&config);

            request_permission(&[PermissionType::ChangeApplicationState]);
            subscribe(&[EventType::Key, EventType::PermissionRequestResult]);

            tracing::debug!(product_count = self.app.products.len(), "plugin load complete");
        }

        fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
            let zellij_tile::prelude::Event::Key(key) = event else {
                return false;
            };
            let _guard = tracing::debug_span!("plugin_update", key = ?key.bare_key).entered();

            let Some(our_event) = self.map_key_event(&key) else {
                return false;
            };

            match handle_event(&mut self.app, &our_event) {
                Ok((should_render, actions)) => {
                    tracing::debug!(
                        action_count = actions.len(),
                        should_render = should_render,
                        "event handled successfully"
                    );
                    for action in actions {
                        Self::execute_action(action);
                    }
                    should_render
                }
                Err(e) => {
                    tracing::warn!(error = %e, "error handling event");
                    false
                }
            }
        }

        fn render(&mut self, rows: usize, cols: usize) {
            zcatalog::ui::render(&self.app, rows, cols);
        }
    }

    impl State {
        /// Maps keyboard events to application events.
        fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
            if key.has_modifiers(&[KeyModifier::Ctrl]) {
                return match key.bare_key {
                    BareKey::Char('n') => Some(Event::CursorDown),
                    BareKey::Char('p') => Some(Event::CursorUp),
                    _ => None,
                };
            }

            let searching = self.app.input_mode == InputMode::Search;
            Some(match key.bare_key {
                BareKey::Down => Event::CursorDown,
                BareKey::Up => Event::CursorUp,
                BareKey::Enter if searching => Event::SubmitSearch,
                BareKey::Esc if searching => Event::ExitSearch,
                BareKey::Backspace if searching => Event::Backspace,
                BareKey::Char(c) if searching => Event::Char(c),
                BareKey::Char('j') => Event::CursorDown,
                BareKey::Char('k') => Event::CursorUp,
                BareKey::Char(' ') | BareKey::Enter => Event::Activate,
                BareKey::Char('h') | BareKey::Left => Event::Decrease,
                BareKey::Char('l') | BareKey::Right => Event::Increase,
                BareKey::Char('s') => Event::CycleSort,
                BareKey::Char('r') => Event::ResetFilters,
                BareKey::Char('/') => Event::SearchMode,
                BareKey::Char('q') => Event::CloseFocus,
                _ => return None,
            })
        }

        fn execute_action(action: Action) {
            match action {
                Action::CloseFocus => {
                    tracing::debug!("closing plugin focus");
                    hide_self();
                }
            }
        }
    }
}

#[cfg(not(target_family = "wasm"))]
fn main() {
    let state = zcatalog::initialize(&zcatalog::Config::default());
    print!("\u{1b}[2J");
    zcatalog::ui::render(&state, 40, 124);
    println!("\u{1b}[41;1H");
}
