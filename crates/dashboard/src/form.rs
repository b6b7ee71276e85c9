//! Reactive form-state container for the variant page.

use leptos::*;

use merchdesk_catalog::{FormChange, VariantFormData};

/// Tracks edits to the variant's fields against an initial snapshot.
///
/// The page rebuilds this container whenever the variant's snapshot key
/// changes, which is what resets unsaved edits.
#[derive(Clone, Copy)]
pub struct VariantForm {
    data: RwSignal<VariantFormData>,
    has_changed: Memo<bool>,
}

impl VariantForm {
    /// Start tracking edits from `initial`.
    pub fn new(initial: VariantFormData) -> Self {
        let data = create_rw_signal(initial.clone());
        let has_changed = create_memo(move |_| data.with(|current| *current != initial));
        Self { data, has_changed }
    }

    /// The current field values.
    pub fn data(&self) -> RwSignal<VariantFormData> {
        self.data
    }

    /// Whether any field differs from the initial snapshot.
    pub fn has_changed(&self) -> Memo<bool> {
        self.has_changed
    }

    /// Apply a single field change.
    pub fn apply(&self, change: FormChange) {
        self.data.update(|data| data.apply(change));
    }
}
