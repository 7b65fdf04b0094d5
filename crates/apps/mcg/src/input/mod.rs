//! Input handling module for keyboard shortcuts
//!
//! Provides context-aware keybindings for the inbox, message and app scopes.

pub mod actions;
pub mod keymap;

pub use actions::*;
pub use keymap::{PAGE_CONTEXT, ShortcutCategory, bindings, shortcuts_help};
