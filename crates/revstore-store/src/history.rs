//! Append-only revision list for a single key.

use revstore_types::{Resource, ResourceKey, VersionLabel};

/// Every revision written to one key, oldest first.
///
/// A history is created with its first revision and only ever grows, so it
/// is never empty and its last element is the current revision. Each
/// appended revision is stamped with the key and the label
/// `VersionLabel::ordinal(position)`.
#[derive(Clone, Debug)]
pub struct VersionHistory {
    key: ResourceKey,
    revisions: Vec<Resource>,
}

impl VersionHistory {
    /// Start a history whose first revision is `initial`.
    pub fn new(key: ResourceKey, initial: &Resource) -> Self {
        let mut history = Self {
            key,
            revisions: Vec::with_capacity(1),
        };
        history.append(initial);
        history
    }

    /// Append `resource` as the new current revision and return the stamped copy.
    pub fn append(&mut self, resource: &Resource) -> Resource {
        let label = VersionLabel::ordinal(self.revisions.len() + 1);
        let stamped = resource.stamped(self.key, label);
        self.revisions.push(stamped.clone());
        stamped
    }

    pub fn key(&self) -> ResourceKey {
        self.key
    }

    /// The most recently appended revision.
    pub fn latest(&self) -> &Resource {
        // Constructed non-empty and never shrunk.
        &self.revisions[self.revisions.len() - 1]
    }

    /// The revision labelled `label`, if any.
    pub fn version(&self, label: &VersionLabel) -> Option<&Resource> {
        self.revisions.iter().find(|r| r.version() == Some(label))
    }

    pub fn revisions(&self) -> &[Resource] {
        &self.revisions
    }

    pub fn len(&self) -> usize {
        self.revisions.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.revisions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_history_has_one_revision() {
        let h = VersionHistory::new(ResourceKey::new(1), &Resource::named("Test"));
        assert_eq!(h.len(), 1);
        assert!(!h.is_empty());
        assert_eq!(h.latest().name, "Test");
        assert_eq!(h.latest().version().map(VersionLabel::as_str), Some("1"));
        assert_eq!(h.latest().key(), Some(ResourceKey::new(1)));
    }

    #[test]
    fn append_moves_latest_and_keeps_old() {
        let mut h = VersionHistory::new(ResourceKey::new(4), &Resource::named("v1"));
        let second = h.append(&Resource::named("v2"));
        assert_eq!(second.version().map(VersionLabel::as_str), Some("2"));
        assert_eq!(h.latest().name, "v2");
        assert_eq!(h.version(&VersionLabel::new("1")).unwrap().name, "v1");
        assert_eq!(h.revisions().len(), 2);
    }

    #[test]
    fn append_ignores_caller_supplied_id() {
        let mut h = VersionHistory::new(ResourceKey::new(4), &Resource::named("v1"));
        let foreign = Resource::named("v2").stamped(ResourceKey::new(99), VersionLabel::new("x"));
        let stored = h.append(&foreign);
        assert_eq!(stored.key(), Some(ResourceKey::new(4)));
        assert_eq!(stored.version().map(VersionLabel::as_str), Some("2"));
    }

    #[test]
    fn unknown_label_is_none() {
        let h = VersionHistory::new(ResourceKey::new(1), &Resource::named("Test"));
        assert!(h.version(&VersionLabel::new("bogus-label")).is_none());
    }
}
