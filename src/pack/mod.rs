//! Packaging pipeline: targets, settings, and external tool invocation.
//!
//! # Overview
//!
//! The pipeline:
//! 1. Compiles the back-end shell and front-end application bundles
//! 2. Clears the previous release output
//! 3. Merges per-target overrides over the base [`PackSettings`]
//! 4. Dispatches one packaging task per valid platform/arch pair
//! 5. Reports per-target completion

mod bundler;
mod fs;
mod orchestrator;
mod packager;
mod settings;
pub mod target;
pub mod tools;

// Re-export all public types
pub use orchestrator::Pipeline;
pub use settings::{PackOptions, PackSettings, SettingsBuilder};
pub use target::{Arch, Platform};
