//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles the REST call to the conversion endpoint. Request and
//! response shapes live in the shared `wire` crate.

pub mod api;
