//! Concrete challenge-solver backends.

pub(crate) mod common;
pub(crate) mod godaddy;

pub use godaddy::{GODADDY_API_BASE, GodaddyClient, GodaddySolver};
