//! Terminal view of the quote widget.
//!
//! `render` draws purely from `App` state; `input` maps keys to store
//! transitions; `runtime` owns the event loop and the fetch task.

pub mod app;
pub mod events;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;
