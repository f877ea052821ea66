//! View state for the coding resources view.

use crate::resources::{CodingResource, FilterView, Selection};
use crate::ui::mvi::UiState;

/// Which control receives keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResourcesFocus {
    #[default]
    LoadButton,
    TopicFilter,
    LevelFilter,
    Cards,
}

const FOCUS_EMPTY: &[ResourcesFocus] = &[ResourcesFocus::LoadButton];
const FOCUS_LOADED: &[ResourcesFocus] = &[
    ResourcesFocus::LoadButton,
    ResourcesFocus::TopicFilter,
    ResourcesFocus::LevelFilter,
    ResourcesFocus::Cards,
];

/// State of the resources view, created when the app starts and dropped
/// with it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResourcesState {
    /// Last successfully fetched list. Replaced wholesale, never merged.
    pub resources: Vec<CodingResource>,
    /// True strictly between a fetch trigger and its settlement.
    pub loading: bool,
    /// Set on failure, cleared when a new fetch starts.
    pub error: Option<String>,
    pub selected_topic: Selection,
    pub selected_level: Selection,
    pub focus: ResourcesFocus,
    /// Cursor into the filtered list.
    pub selected_card: usize,
    /// Spinner frame while loading.
    pub animation_tick: u8,
}

impl UiState for ResourcesState {}

impl ResourcesState {
    pub fn has_resources(&self) -> bool {
        !self.resources.is_empty()
    }

    /// The load control is inert while a fetch is outstanding.
    pub fn is_trigger_enabled(&self) -> bool {
        !self.loading
    }

    /// Options and filtered subset for the current selections.
    ///
    /// Always derived, never cached in state.
    pub fn filter_view(&self) -> FilterView<'_> {
        FilterView::derive(&self.resources, &self.selected_topic, &self.selected_level)
    }

    /// Controls reachable with Tab. Filters and cards only exist once
    /// something has been loaded.
    pub fn focus_order(&self) -> &'static [ResourcesFocus] {
        if self.has_resources() {
            FOCUS_LOADED
        } else {
            FOCUS_EMPTY
        }
    }

    /// Resource under the card cursor, if any.
    pub fn selected_resource(&self) -> Option<&CodingResource> {
        self.filter_view().filtered.get(self.selected_card).copied()
    }
}
