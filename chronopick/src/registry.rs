//! Host-owned registry of attached picker fields.
//!
//! ## Usage
//!
//! The hosting application owns one [`PickerRegistry`] and passes it to
//! each field. There is no process-global listener: every attached
//! picker can be dismissed or detached individually, and opening one
//! field dismisses the others through the registry.
use tessera_ui::Callback;
use thiserror::Error;

/// The kind of field a picker may be attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// A plain text field.
    Text,
    /// A search field; text-like.
    Search,
    /// An obscured text field; text-like.
    Secure,
    /// A checkbox; not text-like.
    Checkbox,
    /// A toggle switch; not text-like.
    Toggle,
    /// A slider; not text-like.
    Slider,
}

impl FieldKind {
    /// Returns true when the field holds free-form text a picker can
    /// read and write.
    pub fn is_text_like(self) -> bool {
        matches!(self, FieldKind::Text | FieldKind::Search | FieldKind::Secure)
    }
}

/// Error raised when attaching a picker to an unsupported field.
///
/// This is the single explicit failure of the picker: everything else is
/// normalized best-effort.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("date-time pickers only attach to text-like fields, got a {kind:?} field")]
pub struct AttachError {
    /// The rejected field kind.
    pub kind: FieldKind,
}

/// Identifies one attached picker within a registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PickerFieldId(u64);

struct RegistryEntry {
    id: PickerFieldId,
    kind: FieldKind,
    dismiss: Callback,
}

/// An explicit registry of picker fields, owned by the hosting
/// application.
///
/// ## Examples
///
/// ```
/// use chronopick::registry::{FieldKind, PickerRegistry};
/// use tessera_ui::Callback;
///
/// let mut registry = PickerRegistry::new();
/// let id = registry
///     .attach(FieldKind::Text, Callback::new(|| {}))
///     .unwrap();
/// assert!(registry.contains(id));
/// assert!(registry.attach(FieldKind::Checkbox, Callback::new(|| {})).is_err());
///
/// registry.detach(id);
/// assert!(registry.is_empty());
/// ```
#[derive(Default)]
pub struct PickerRegistry {
    next_id: u64,
    entries: Vec<RegistryEntry>,
}

impl PickerRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attaches a picker to a field of the given kind.
    ///
    /// `dismiss` is invoked whenever the registry asks this picker to
    /// close. Fails fast when the field is not text-like; attachment for
    /// that field is aborted and nothing is registered.
    pub fn attach(
        &mut self,
        kind: FieldKind,
        dismiss: Callback,
    ) -> Result<PickerFieldId, AttachError> {
        if !kind.is_text_like() {
            tracing::warn!(?kind, "rejecting picker attachment");
            return Err(AttachError { kind });
        }
        let id = PickerFieldId(self.next_id);
        self.next_id += 1;
        self.entries.push(RegistryEntry { id, kind, dismiss });
        Ok(id)
    }

    /// Detaches one picker, dropping its dismiss callback.
    ///
    /// Returns true when the picker was registered.
    pub fn detach(&mut self, id: PickerFieldId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        self.entries.len() != before
    }

    /// Returns true when the picker is registered.
    pub fn contains(&self, id: PickerFieldId) -> bool {
        self.entries.iter().any(|entry| entry.id == id)
    }

    /// Returns the field kind the picker was attached with.
    pub fn kind_of(&self, id: PickerFieldId) -> Option<FieldKind> {
        self.entries
            .iter()
            .find(|entry| entry.id == id)
            .map(|entry| entry.kind)
    }

    /// Number of attached pickers.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true when no picker is attached.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Asks every attached picker to close.
    pub fn dismiss_all(&self) {
        for entry in &self.entries {
            entry.dismiss.call();
        }
    }

    /// Asks every attached picker except `keep` to close.
    ///
    /// Fields call this when they open, so at most one picker is visible
    /// at a time.
    pub fn dismiss_others(&self, keep: PickerFieldId) {
        for entry in &self.entries {
            if entry.id != keep {
                entry.dismiss.call();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    };

    use super::*;

    fn counting_callback() -> (Callback, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let calls_in_callback = calls.clone();
        let callback = Callback::new(move || {
            calls_in_callback.fetch_add(1, Ordering::SeqCst);
        });
        (callback, calls)
    }

    #[test]
    fn text_like_kinds_attach_and_others_fail_fast() {
        let mut registry = PickerRegistry::new();
        for kind in [FieldKind::Text, FieldKind::Search, FieldKind::Secure] {
            let id = registry.attach(kind, Callback::new(|| {})).unwrap();
            assert_eq!(registry.kind_of(id), Some(kind));
        }
        for kind in [FieldKind::Checkbox, FieldKind::Toggle, FieldKind::Slider] {
            assert_eq!(
                registry.attach(kind, Callback::new(|| {})),
                Err(AttachError { kind })
            );
        }
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn rejected_attachments_register_nothing() {
        let mut registry = PickerRegistry::new();
        let (dismiss, calls) = counting_callback();
        assert!(registry.attach(FieldKind::Toggle, dismiss).is_err());
        assert!(registry.is_empty());

        registry.dismiss_all();
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn detach_disposes_a_single_picker() {
        let mut registry = PickerRegistry::new();
        let (dismiss_a, calls_a) = counting_callback();
        let (dismiss_b, calls_b) = counting_callback();
        let a = registry.attach(FieldKind::Text, dismiss_a).unwrap();
        let b = registry.attach(FieldKind::Text, dismiss_b).unwrap();

        assert!(registry.detach(a));
        assert!(!registry.detach(a));
        assert!(!registry.contains(a));
        assert!(registry.contains(b));

        registry.dismiss_all();
        assert_eq!(calls_a.load(Ordering::SeqCst), 0);
        assert_eq!(calls_b.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn dismiss_others_keeps_the_opening_picker() {
        let mut registry = PickerRegistry::new();
        let (dismiss_a, calls_a) = counting_callback();
        let (dismiss_b, calls_b) = counting_callback();
        let a = registry.attach(FieldKind::Text, dismiss_a).unwrap();
        let _b = registry.attach(FieldKind::Search, dismiss_b).unwrap();

        registry.dismiss_others(a);
        assert_eq!(calls_a.load(Ordering::SeqCst), 0);
        assert_eq!(calls_b.load(Ordering::SeqCst), 1);
    }
}
