//! Targets rc file
//!
//! Named targets bundle the connection parameters (API URL, team, token)
//! of a CI server so commands can select one with `-t <name>`.

mod models;
mod resolve;
mod store;

pub use models::{RcFile, TargetProps, TargetToken};
pub use resolve::load_target;
pub use store::RcStore;
