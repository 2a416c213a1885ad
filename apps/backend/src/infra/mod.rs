//! Infrastructure layer - wiring collaborators into application state.

pub mod state;
