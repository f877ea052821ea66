use crate::resources::{CodingResource, Selection};
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum ResourcesIntent {
    /// User pressed the load control. Ignored while a fetch is outstanding.
    FetchRequested,

    /// The outstanding fetch settled with a list.
    FetchSucceeded { resources: Vec<CodingResource> },

    /// The outstanding fetch failed.
    FetchFailed { message: String },

    SelectTopic(Selection),
    SelectLevel(Selection),

    /// Step the topic control through its options.
    CycleTopic { forward: bool },
    CycleLevel { forward: bool },

    FocusNext,
    FocusPrev,

    /// Move the card cursor by `delta` entries, clamped to the filtered list.
    MoveCard { delta: isize },

    /// Spinner tick while loading.
    AnimationTick,
}

impl Intent for ResourcesIntent {}
