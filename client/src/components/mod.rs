//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components are presentational: they receive signals and callbacks from the
//! converter page and never touch converter state directly.

pub mod code_pane;
pub mod snackbar;
pub mod switch;
