//! # Horizon Setup
//!
//! One-shot scaffolder for the "Beyond the Horizon" Godot project. It reads
//! the static content from `horizon_content`, creates the directory tree,
//! and writes the starter configuration files.
//!
//! ## Core Components
//!
//! - **scaffold**: Idempotent creation of the project directory layout
//! - **emit**: JSON and plain-text file writers
//! - **setup**: The ordered setup procedure and its run report
//!
//! Every step either succeeds or aborts the run with a [`SetupError`].
//! Files written before the failure are left in place.

pub mod emit;
pub mod error;
pub mod logging;
pub mod scaffold;
pub mod setup;

pub use emit::*;
pub use error::*;
pub use logging::*;
pub use scaffold::*;
pub use setup::*;
