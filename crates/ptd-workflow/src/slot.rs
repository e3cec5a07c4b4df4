//! Upload slots: one required input document each.

use crate::types::{SelectedFile, SlotId};

/// One required input document.
///
/// Holds at most one file. Selecting a new file replaces the previous
/// one without passing through the empty state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadSlot {
    id: SlotId,
    file: Option<SelectedFile>,
}

impl UploadSlot {
    /// Create an empty slot.
    #[must_use]
    pub const fn new(id: SlotId) -> Self {
        Self { id, file: None }
    }

    /// Which document this slot holds.
    #[must_use]
    pub const fn id(&self) -> SlotId {
        self.id
    }

    /// The selected file, if any.
    #[must_use]
    pub const fn file(&self) -> Option<&SelectedFile> {
        self.file.as_ref()
    }

    /// Whether a file is present.
    #[must_use]
    pub const fn is_selected(&self) -> bool {
        self.file.is_some()
    }

    /// Store `file`, returning the one it replaced.
    pub fn select(&mut self, file: SelectedFile) -> Option<SelectedFile> {
        self.file.replace(file)
    }

    /// Clear the slot, returning the removed file.
    pub fn clear(&mut self) -> Option<SelectedFile> {
        self.file.take()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn file(name: &str) -> SelectedFile {
        SelectedFile::new(name).unwrap()
    }

    #[test]
    fn new_slot_is_empty() {
        let slot = UploadSlot::new(SlotId::Protocol);
        assert_eq!(slot.id(), SlotId::Protocol);
        assert!(!slot.is_selected());
        assert!(slot.file().is_none());
    }

    #[test]
    fn select_then_clear() {
        let mut slot = UploadSlot::new(SlotId::Crf);
        assert_eq!(slot.select(file("b.pdf")), None);
        assert!(slot.is_selected());
        assert_eq!(slot.clear(), Some(file("b.pdf")));
        assert!(!slot.is_selected());
    }

    #[test]
    fn replacement_keeps_slot_filled() {
        let mut slot = UploadSlot::new(SlotId::Protocol);
        slot.select(file("old.pdf"));
        let replaced = slot.select(file("new.pdf"));
        assert_eq!(replaced, Some(file("old.pdf")));
        assert!(slot.is_selected());
        assert_eq!(slot.file().map(SelectedFile::name), Some("new.pdf"));
    }

    #[test]
    fn clearing_empty_slot_is_noop() {
        let mut slot = UploadSlot::new(SlotId::Crf);
        assert_eq!(slot.clear(), None);
        assert!(!slot.is_selected());
    }
}
