//! Output formatting module
//!
//! Renders API resources as table, JSON or YAML.

mod teams;

pub use teams::render_teams;

/// Join a list for table display, `none` when empty
pub(crate) fn join_or_none(items: &[String]) -> String {
    if items.is_empty() {
        "none".to_string()
    } else {
        items.join(", ")
    }
}
