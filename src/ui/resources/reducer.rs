use crate::resources::filter::{filtered, level_options, topic_options};
use crate::ui::mvi::Reducer;

use super::intent::ResourcesIntent;
use super::state::{ResourcesFocus, ResourcesState};

pub struct ResourcesReducer;

impl Reducer for ResourcesReducer {
    type State = ResourcesState;
    type Intent = ResourcesIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ResourcesIntent::FetchRequested => {
                if state.loading {
                    return state;
                }
                ResourcesState {
                    loading: true,
                    error: None,
                    animation_tick: 0,
                    ..state
                }
            }

            ResourcesIntent::FetchSucceeded { resources } => {
                let topics = topic_options(&resources);
                let levels = level_options(&resources);
                let selected_topic = if state.selected_topic.is_offered(&topics) {
                    state.selected_topic
                } else {
                    Default::default()
                };
                let selected_level = if state.selected_level.is_offered(&levels) {
                    state.selected_level
                } else {
                    Default::default()
                };
                let next = ResourcesState {
                    resources,
                    loading: false,
                    error: None,
                    selected_topic,
                    selected_level,
                    selected_card: 0,
                    ..state
                };
                with_reachable_focus(next)
            }

            ResourcesIntent::FetchFailed { message } => ResourcesState {
                loading: false,
                error: Some(message),
                ..state
            },

            ResourcesIntent::SelectTopic(selected_topic) => ResourcesState {
                selected_topic,
                selected_card: 0,
                ..state
            },

            ResourcesIntent::SelectLevel(selected_level) => ResourcesState {
                selected_level,
                selected_card: 0,
                ..state
            },

            ResourcesIntent::CycleTopic { forward } => {
                let options = topic_options(&state.resources);
                let selected_topic = state.selected_topic.cycle(&options, forward);
                ResourcesState {
                    selected_topic,
                    selected_card: 0,
                    ..state
                }
            }

            ResourcesIntent::CycleLevel { forward } => {
                let options = level_options(&state.resources);
                let selected_level = state.selected_level.cycle(&options, forward);
                ResourcesState {
                    selected_level,
                    selected_card: 0,
                    ..state
                }
            }

            ResourcesIntent::FocusNext => step_focus(state, true),
            ResourcesIntent::FocusPrev => step_focus(state, false),

            ResourcesIntent::MoveCard { delta } => {
                let len = filtered(&state.resources, &state.selected_topic, &state.selected_level)
                    .len();
                let selected_card = if len == 0 {
                    0
                } else {
                    let target = state.selected_card as isize + delta;
                    target.clamp(0, len as isize - 1) as usize
                };
                ResourcesState {
                    selected_card,
                    ..state
                }
            }

            ResourcesIntent::AnimationTick => {
                if !state.loading {
                    return state;
                }
                ResourcesState {
                    animation_tick: state.animation_tick.wrapping_add(1),
                    ..state
                }
            }
        }
    }
}

fn step_focus(state: ResourcesState, forward: bool) -> ResourcesState {
    let order = state.focus_order();
    let current = order.iter().position(|f| *f == state.focus).unwrap_or(0);
    let next = if forward {
        (current + 1) % order.len()
    } else {
        (current + order.len() - 1) % order.len()
    };
    ResourcesState {
        focus: order[next],
        ..state
    }
}

fn with_reachable_focus(state: ResourcesState) -> ResourcesState {
    if state.focus_order().contains(&state.focus) {
        state
    } else {
        ResourcesState {
            focus: ResourcesFocus::LoadButton,
            ..state
        }
    }
}
