//! Pure projection of lookup state onto a renderable view.

use crate::lookup::LookupState;
use crate::types::{Theme, WeatherRecord};

/// Message shown for any failed lookup.
pub const NOT_FOUND_MESSAGE: &str = "Data Not Found";

/// Foreground color for the failure message, by theme.
const DARK_FOREGROUND: &str = "#fff";
const LIGHT_FOREGROUND: &str = "#000";

/// What the frontend should render for the current state.
#[derive(Debug, Clone, PartialEq)]
pub enum LookupView<'a> {
    /// Idle: render nothing.
    Nothing,

    /// A lookup is in flight: render a loading indicator.
    Loading,

    /// One display element per record, in batch order.
    Results(&'a [WeatherRecord]),

    /// A single failure message in a theme-appropriate color.
    NotFound {
        message: &'static str,
        foreground: &'static str,
    },
}

/// Project `(state, theme)` onto a view. No side effects; calling this
/// twice with the same inputs yields the same view.
pub fn project(state: &LookupState, theme: Theme) -> LookupView<'_> {
    match state {
        LookupState::Idle => LookupView::Nothing,
        LookupState::InProgress => LookupView::Loading,
        LookupState::Success(batch) => LookupView::Results(batch.records()),
        LookupState::Failure => LookupView::NotFound {
            message: NOT_FOUND_MESSAGE,
            foreground: match theme {
                Theme::Dark => DARK_FOREGROUND,
                Theme::Light => LIGHT_FOREGROUND,
            },
        },
    }
}
