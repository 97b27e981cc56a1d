// Highlight Saver shared type definitions
// Each submodule defines types used across the crate.

pub mod affordance;
pub mod errors;
pub mod highlight;
pub mod settings;
