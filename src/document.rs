//! Page-wide outside-click listeners.
//!
//! Each dropdown registers one listener when it is built and removes it
//! when it is dropped. A click that no dropdown claimed for itself closes
//! the popup of every dropdown whose listener is registered.

use std::collections::HashSet;
use std::sync::Mutex;

use once_cell::sync::Lazy;

static LISTENERS: Lazy<Mutex<HashSet<i64>>> = Lazy::new(|| Mutex::new(HashSet::new()));

fn with_listeners<R>(f: impl FnOnce(&mut HashSet<i64>) -> R) -> R {
    let mut listeners = LISTENERS
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    f(&mut listeners)
}

/// Registers the outside-click listener of component `id`.
///
/// Returns `false` if it was already registered.
pub fn add_click_listener(id: i64) -> bool {
    with_listeners(|listeners| listeners.insert(id))
}

/// Removes the outside-click listener of component `id`.
///
/// Returns `false` if none was registered.
pub fn remove_click_listener(id: i64) -> bool {
    with_listeners(|listeners| listeners.remove(&id))
}

/// Whether component `id` currently listens for outside clicks.
pub fn has_click_listener(id: i64) -> bool {
    with_listeners(|listeners| listeners.contains(&id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_once_and_remove() {
        let id = -42;
        assert!(add_click_listener(id));
        assert!(!add_click_listener(id));
        assert!(has_click_listener(id));
        assert!(remove_click_listener(id));
        assert!(!remove_click_listener(id));
        assert!(!has_click_listener(id));
    }
}
