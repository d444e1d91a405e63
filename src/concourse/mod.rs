//! CI server API client module
//!
//! This module provides the HTTP client, target handles and the team and
//! info endpoints of the CI server API.

mod client;
mod info;
mod target;
pub mod teams;

pub use client::ApiClient;
pub use info::Info;
pub use target::{token_expiry, Target};
pub use teams::{Team, TeamAuth};
