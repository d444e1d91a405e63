//! Target resolution by name

use log::debug;

use crate::concourse::Target;
use crate::error::{FlyError, Result};

use super::store::RcStore;

/// Resolve a named target from the rc file into a connection handle.
///
/// `verbose` is handed to the API client, which then logs every request.
pub fn load_target(store: &RcStore, name: Option<&str>, verbose: bool) -> Result<Target> {
    let name = match name {
        Some(n) if !n.trim().is_empty() => n,
        _ => return Err(FlyError::NoTarget),
    };

    let rc = store.load()?;
    let props = rc.targets.get(name).ok_or_else(|| {
        debug!(
            "Target '{}' not found in {} (known: {:?})",
            name,
            store.path().display(),
            rc.targets.keys().collect::<Vec<_>>()
        );
        FlyError::UnknownTarget(name.to_string())
    })?;

    debug!("Resolved target '{}': api={}", name, props.api);
    Target::new(name, props, verbose)
}
