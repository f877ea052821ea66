//! Model-View-Intent primitives shared by the UI features.
//!
//! ```text
//! key press ──→ Intent ──→ Reducer ──→ State ──→ render
//!                 ↑                                │
//!                 └────────────────────────────────┘
//! ```
//!
//! State is owned by [`crate::ui::app::App`]; views only read it.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
