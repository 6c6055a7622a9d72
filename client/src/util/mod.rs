//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (clipboard, downloads) from page
//! logic so the converter state stays testable outside a browser.

pub mod clipboard;
pub mod download;
