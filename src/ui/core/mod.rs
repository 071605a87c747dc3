//! Core UI functionality for the Gradient Feed application.
//!
//! This module contains the fundamental building blocks for the user interface:
//!
//! - [`actions`] - Action definitions and UI state transitions
//! - [`component`] - Base component trait and rendering abstractions
//! - [`event_handler`] - Terminal event polling and ticks
//! - [`task_manager`] - Background work (reading image files) reported back as actions
//!
//! Components turn key events into [`Action`]s. Actions flow through every
//! component's `update` and whatever is left is handled by the app component,
//! which owns the feed store.

pub mod actions;
pub mod component;
pub mod event_handler;
pub mod task_manager;

pub use actions::{Action, DialogType, Focus};
pub use component::Component;
pub use event_handler::{EventHandler, EventType};
pub use task_manager::{TaskId, TaskManager};
