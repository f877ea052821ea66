//! Coding resources view.
//!
//! Uses MVI (Model-View-Intent):
//! - `state.rs` - view state (list, loading/error flags, selections)
//! - `intent.rs` - user/system actions
//! - `reducer.rs` - state transitions
//! - `view.rs` - rendering

mod intent;
mod reducer;
mod state;
mod view;

pub use intent::ResourcesIntent;
pub use reducer::ResourcesReducer;
pub use state::{ResourcesFocus, ResourcesState};
pub use view::{grid_columns, load_button_label, render_resources, CARD_HEIGHT};
