//! Event handling and state transition logic.
//!
//! [`handle_event`] is the only place the application state changes. It
//! translates events into new [`FilterState`](crate::domain::FilterState) or
//! [`SortKey`] values, hands them to the state (which recomputes the
//! projection), and reports whether a re-render is needed.
//!
//! # Event Types
//!
//! - **Facet operations**: `ToggleCategory`, `ToggleColor`, `SetPriceRange`,
//!   `SetDiscount`, `SetSort`, `CycleSort`, `ResetFilters`
//! - **Sidebar widgets**: `CursorDown`, `CursorUp`, `Activate`, `Increase`,
//!   `Decrease`
//! - **Name search**: `SearchMode`, `Char`, `Backspace`, `SubmitSearch`,
//!   `ExitSearch`
//! - **Lifecycle**: `CloseFocus`
//!
//! # Example
//!
//! ```rust
//! use zcatalog::app::{handle_event, AppState, Event};
//! use zcatalog::domain::Category;
//! use zcatalog::ui::Theme;
//!
//! let mut state = AppState::new(vec![], Theme::default());
//! let (should_render, actions) = handle_event(&mut state, &Event::ToggleCategory(Category::Shoes))?;
//! assert!(should_render);
//! assert!(actions.is_empty());
//! # Ok::<(), zcatalog::CatalogError>(())
//! ```

use super::modes::InputMode;
use super::sidebar::FacetRow;
use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::domain::{Category, Color, DiscountTier, FilterState, PriceRange, SortKey};

/// Events triggered by user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Adds the category to the selection, or removes it if present.
    ToggleCategory(Category),
    /// Adds the color to the selection, or removes it if present.
    ToggleColor(Color),
    /// Replaces the price interval. Bounds are clamped and ordered.
    SetPriceRange {
        lo: u32,
        hi: u32,
    },
    /// Replaces the discount tier.
    SetDiscount(DiscountTier),
    /// Replaces the sort key.
    SetSort(SortKey),
    /// Advances the sort key to the next one in dropdown order.
    CycleSort,
    /// Restores every facet to its default. The sort key is kept.
    ResetFilters,

    /// Moves the sidebar cursor down (wraps to top).
    CursorDown,
    /// Moves the sidebar cursor up (wraps to bottom).
    CursorUp,
    /// Operates the widget under the cursor: toggles a checkbox or selects a
    /// radio button.
    Activate,
    /// Moves a price slider up one step, or selects the next sort key.
    Increase,
    /// Moves a price slider down one step, or selects the previous sort key.
    Decrease,

    /// Enters search mode.
    SearchMode,
    /// Appends a character to the name query.
    Char(char),
    /// Removes the last character from the name query.
    Backspace,
    /// Leaves search mode keeping the query.
    SubmitSearch,
    /// Leaves search mode and clears the query.
    ExitSearch,

    /// Hides the plugin pane.
    CloseFocus,
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// # Returns
///
/// `(should_render, actions)`. `should_render` is `false` when the event left
/// the state unchanged (e.g. toggling nothing, stepping a slider already at
/// its limit).
///
/// # Errors
///
/// No current event fails; the `Result` keeps the signature uniform with the
/// rest of the crate.
#[allow(clippy::too_many_lines)]
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::ToggleCategory(category) => {
            let filter = state.filter.toggle_category(*category);
            Ok((state.apply_filter(filter), vec![]))
        }
        Event::ToggleColor(color) => {
            let filter = state.filter.toggle_color(*color);
            Ok((state.apply_filter(filter), vec![]))
        }
        Event::SetPriceRange { lo, hi } => {
            let filter = state.filter.with_price(PriceRange::new(*lo, *hi));
            Ok((state.apply_filter(filter), vec![]))
        }
        Event::SetDiscount(tier) => {
            let filter = state.filter.with_discount(*tier);
            Ok((state.apply_filter(filter), vec![]))
        }
        Event::SetSort(key) => Ok((state.apply_sort(*key), vec![])),
        Event::CycleSort => {
            let next = state.sort.next();
            Ok((state.apply_sort(next), vec![]))
        }
        Event::ResetFilters => {
            tracing::debug!("resetting filters");
            Ok((state.apply_filter(FilterState::default()), vec![]))
        }
        Event::CursorDown => {
            state.move_cursor_down();
            Ok((true, vec![]))
        }
        Event::CursorUp => {
            state.move_cursor_up();
            Ok((true, vec![]))
        }
        Event::Activate => {
            let Some(row) = state.cursor_row() else {
                return Ok((false, vec![]));
            };
            tracing::debug!(row = ?row, "activating facet row");

            let event = match row {
                FacetRow::Category(category) => Event::ToggleCategory(category),
                FacetRow::Color(color) => Event::ToggleColor(color),
                FacetRow::Discount(tier) => Event::SetDiscount(tier),
                FacetRow::Sort(key) => Event::SetSort(key),
                FacetRow::PriceMin | FacetRow::PriceMax => return Ok((false, vec![])),
            };
            handle_event(state, &event)
        }
        Event::Increase | Event::Decrease => {
            let delta = if *event == Event::Increase { 1 } else { -1 };
            let Some(row) = state.cursor_row() else {
                return Ok((false, vec![]));
            };

            let event = match row {
                FacetRow::PriceMin => {
                    let price = state.filter.price.step_lo(delta);
                    Event::SetPriceRange { lo: price.lo(), hi: price.hi() }
                }
                FacetRow::PriceMax => {
                    let price = state.filter.price.step_hi(delta);
                    Event::SetPriceRange { lo: price.lo(), hi: price.hi() }
                }
                FacetRow::Sort(_) if delta > 0 => Event::SetSort(state.sort.next()),
                FacetRow::Sort(_) => Event::SetSort(state.sort.prev()),
                _ => return Ok((false, vec![])),
            };
            handle_event(state, &event)
        }
        Event::SearchMode => {
            tracing::debug!("entering search mode");
            state.input_mode = InputMode::Search;
            Ok((true, vec![]))
        }
        Event::Char(c) => {
            if state.input_mode != InputMode::Search {
                return Ok((false, vec![]));
            }
            let mut query = state.filter.query.clone();
            query.push(*c);
            tracing::trace!(query = %query, "search query updated");

            let filter = state.filter.with_query(query);
            state.apply_filter(filter);
            Ok((true, vec![]))
        }
        Event::Backspace => {
            if state.input_mode != InputMode::Search {
                return Ok((false, vec![]));
            }
            let mut query = state.filter.query.clone();
            if query.pop().is_none() {
                return Ok((false, vec![]));
            }

            let filter = state.filter.with_query(query);
            state.apply_filter(filter);
            Ok((true, vec![]))
        }
        Event::SubmitSearch => {
            if state.input_mode != InputMode::Search {
                return Ok((false, vec![]));
            }
            state.input_mode = InputMode::Normal;
            Ok((true, vec![]))
        }
        Event::ExitSearch => {
            tracing::debug!(query = %state.filter.query, "exiting search mode");
            let was_searching = state.input_mode == InputMode::Search;
            state.input_mode = InputMode::Normal;

            let filter = state.filter.with_query(String::new());
            let changed = state.apply_filter(filter);
            Ok((was_searching || changed, vec![]))
        }
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{EmbeddedCatalog, ProductSource};
    use crate::ui::Theme;

    fn state() -> AppState {
        AppState::new(EmbeddedCatalog.load().unwrap(), Theme::default())
    }

    fn send(state: &mut AppState, event: Event) -> bool {
        handle_event(state, &event).unwrap().0
    }

    fn move_cursor_to(state: &mut AppState, row: FacetRow) {
        state.cursor = state.rows.iter().position(|r| *r == row).unwrap();
    }

    #[test]
    fn double_toggle_restores_categories() {
        let mut state = state();
        let original = state.filter.categories.clone();

        assert!(send(&mut state, Event::ToggleCategory(Category::Electronics)));
        assert_ne!(state.filter.categories, original);
        assert!(send(&mut state, Event::ToggleCategory(Category::Electronics)));
        assert_eq!(state.filter.categories, original);
    }

    #[test]
    fn set_price_range_clamps() {
        let mut state = state();
        send(&mut state, Event::SetPriceRange { lo: 600, hi: 5000 });
        assert_eq!(state.filter.price, PriceRange::new(600, 1000));
        assert!(state.projection.items.iter().all(|p| p.price >= 600.0));
    }

    #[test]
    fn repeated_selection_does_not_rerender() {
        let mut state = state();
        assert!(send(&mut state, Event::SetDiscount(DiscountTier::TwentyOrMore)));
        assert!(!send(&mut state, Event::SetDiscount(DiscountTier::TwentyOrMore)));
        assert!(!send(&mut state, Event::SetSort(SortKey::PriceLowToHigh)));
    }

    #[test]
    fn activate_operates_row_under_cursor() {
        let mut state = state();
        move_cursor_to(&mut state, FacetRow::Color(Color::Blue));
        assert!(send(&mut state, Event::Activate));
        assert!(state.filter.colors.contains(&Color::Blue));

        move_cursor_to(&mut state, FacetRow::Discount(DiscountTier::ThirtyOrMore));
        send(&mut state, Event::Activate);
        assert_eq!(state.filter.discount, DiscountTier::ThirtyOrMore);

        move_cursor_to(&mut state, FacetRow::Sort(SortKey::RatingHighToLow));
        send(&mut state, Event::Activate);
        assert_eq!(state.sort, SortKey::RatingHighToLow);

        move_cursor_to(&mut state, FacetRow::PriceMin);
        assert!(!send(&mut state, Event::Activate));
    }

    #[test]
    fn sliders_step_by_ten_and_stop_at_limits() {
        let mut state = state();
        move_cursor_to(&mut state, FacetRow::PriceMin);
        assert!(!send(&mut state, Event::Decrease));
        assert!(send(&mut state, Event::Increase));
        assert_eq!(state.filter.price.lo(), 10);

        move_cursor_to(&mut state, FacetRow::PriceMax);
        assert!(!send(&mut state, Event::Increase));
        send(&mut state, Event::Decrease);
        send(&mut state, Event::Decrease);
        assert_eq!(state.filter.price.hi(), 980);
    }

    #[test]
    fn adjusting_sort_rows_cycles_key() {
        let mut state = state();
        move_cursor_to(&mut state, FacetRow::Sort(SortKey::PriceLowToHigh));
        send(&mut state, Event::Decrease);
        assert_eq!(state.sort, SortKey::DiscountHighToLow);
        send(&mut state, Event::Increase);
        assert_eq!(state.sort, SortKey::PriceLowToHigh);

        move_cursor_to(&mut state, FacetRow::Category(Category::Shoes));
        assert!(!send(&mut state, Event::Increase));
    }

    #[test]
    fn cycle_sort_walks_every_key() {
        let mut state = state();
        let mut seen = vec![state.sort];
        for _ in 0..3 {
            send(&mut state, Event::CycleSort);
            seen.push(state.sort);
        }
        assert_eq!(seen, SortKey::ALL.to_vec());
    }

    #[test]
    fn reset_keeps_sort() {
        let mut state = state();
        send(&mut state, Event::SetSort(SortKey::RatingHighToLow));
        send(&mut state, Event::ToggleColor(Color::Black));
        assert!(send(&mut state, Event::ResetFilters));
        assert!(state.filter.is_unrestricted());
        assert_eq!(state.sort, SortKey::RatingHighToLow);
        assert!(!send(&mut state, Event::ResetFilters));
    }

    #[test]
    fn chars_only_edit_query_in_search_mode() {
        let mut state = state();
        assert!(!send(&mut state, Event::Char('x')));
        assert!(state.filter.query.is_empty());

        send(&mut state, Event::SearchMode);
        for c in "leather".chars() {
            send(&mut state, Event::Char(c));
        }
        assert_eq!(state.filter.query, "leather");
        assert_eq!(state.projection.matched, 1);

        send(&mut state, Event::Backspace);
        assert_eq!(state.filter.query, "leathe");
    }

    #[test]
    fn submit_keeps_query_and_exit_clears_it() {
        let mut state = state();
        send(&mut state, Event::SearchMode);
        send(&mut state, Event::Char('c'));
        send(&mut state, Event::SubmitSearch);
        assert_eq!(state.input_mode, InputMode::Normal);
        assert_eq!(state.filter.query, "c");

        send(&mut state, Event::SearchMode);
        send(&mut state, Event::ExitSearch);
        assert_eq!(state.input_mode, InputMode::Normal);
        assert!(state.filter.query.is_empty());
        assert_eq!(state.projection.matched, 12);
    }

    #[test]
    fn close_emits_action() {
        let mut state = state();
        let (render, actions) = handle_event(&mut state, &Event::CloseFocus).unwrap();
        assert!(!render);
        assert_eq!(actions, vec![Action::CloseFocus]);
    }
}
