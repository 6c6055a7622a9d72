//! Client state modules.
//!
//! ARCHITECTURE
//! ============
//! State types are plain data with pure transition functions; pages wrap
//! them in `RwSignal`s and run the side effects the transitions request.

pub mod converter;
