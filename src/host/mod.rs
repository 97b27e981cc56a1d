//! Collaborator seams between the capture logic and its host environment.
//!
//! The host supplies three capabilities: a privilege layer that guards the
//! key-value store, the page (selection, metadata and an isolated render
//! target), and a clock. Everything else in the crate is written against
//! these traits.

pub mod clock;
pub mod page;
pub mod runtime;

pub use clock::{Clock, SystemClock};
pub use page::HostPage;
pub use runtime::PrivilegeLayer;
