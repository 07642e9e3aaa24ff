//! # Horizon Content
//!
//! Static starter content for the "Beyond the Horizon" Godot project.
//! This crate is the single source of truth for what the scaffolder writes
//! and does not perform any I/O itself.

pub mod documents;
pub mod feedback;
pub mod layout;
pub mod scenes;

pub use documents::*;
pub use feedback::*;
pub use layout::*;
pub use scenes::*;
