//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (storage, clock)
//! from page and component logic to improve reuse and testability.

pub mod storage;
pub mod time;
