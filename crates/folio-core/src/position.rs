//! Last visited section, persisted under [`keys::LAST_SECTION`].

use crate::section::{is_nav_section, SectionId};
use crate::storage::{keys, read_or_none, write_or_warn, KeyValueStore};

/// A scroll-restore the host should perform after `delay_ms`.
///
/// The host owns the timer and must cancel it if the main view unmounts
/// before it fires.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RestorePlan {
    pub target: SectionId,
    pub delay_ms: u32,
}

pub struct LastPosition;

impl LastPosition {
    /// Overwrite the remembered section.
    pub fn record(store: &impl KeyValueStore, id: &SectionId) {
        write_or_warn(store, keys::LAST_SECTION, id.as_str());
    }

    /// Read the remembered section, ignoring ids the page no longer has.
    pub fn restore(store: &impl KeyValueStore) -> Option<SectionId> {
        let raw = read_or_none(store, keys::LAST_SECTION)?;
        if is_nav_section(&raw) {
            Some(SectionId::new(raw))
        } else {
            tracing::debug!(section = %raw, "Ignoring unknown remembered section");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{MemoryStore, UnavailableStore};

    #[test]
    fn test_record_overwrites() {
        let store = MemoryStore::new();
        LastPosition::record(&store, &SectionId::new("about"));
        LastPosition::record(&store, &SectionId::new("skills"));
        assert_eq!(LastPosition::restore(&store), Some(SectionId::new("skills")));
    }

    #[test]
    fn test_restore_rejects_unknown_ids() {
        let store = MemoryStore::with_entries([(keys::LAST_SECTION, "pricing")]);
        assert!(LastPosition::restore(&store).is_none());
    }

    #[test]
    fn test_restore_without_storage() {
        LastPosition::record(&UnavailableStore, &SectionId::home());
        assert!(LastPosition::restore(&UnavailableStore).is_none());
    }
}
