//! Teams module - create, update and list teams

mod api;
mod models;

pub use models::{Team, TeamAuth};
