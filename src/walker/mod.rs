//! Path walking and dumping
//!
//! Input arguments are expanded at the command-line boundary (`input`), then
//! each resulting path is handed to a [`DumpWalker`], which consults the
//! ignore predicate at every entry and prunes excluded directories without
//! reading them.

mod config;
mod input;
#[allow(clippy::module_inception)]
mod walker;

pub use config::WalkerConfig;
pub use input::expand_input;
pub use walker::{DumpWalker, Visit, WalkStats};
