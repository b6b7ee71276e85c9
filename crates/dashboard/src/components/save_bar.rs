//! Bottom bar carrying the primary save action.

use leptos::*;

/// Submission status reported by the owning container.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SaveBarState {
    #[default]
    Idle,
    Saving,
    Error,
}

impl SaveBarState {
    pub fn label(&self) -> &'static str {
        match self {
            SaveBarState::Idle => "Save",
            SaveBarState::Saving => "Saving...",
            SaveBarState::Error => "Retry",
        }
    }
}

/// Whether the save action must be disabled.
pub fn save_disabled(loading: bool, has_submit_handler: bool, has_changed: bool) -> bool {
    loading || !has_submit_handler || !has_changed
}

#[component]
pub fn SaveBar(
    #[prop(into)] disabled: Signal<bool>,
    #[prop(optional, into)] state: MaybeSignal<SaveBarState>,
    #[prop(into)] on_save: Callback<()>,
) -> impl IntoView {
    let error_state = state.clone();
    view! {
        <div class="save-bar">
            <button
                class="save-bar__save"
                class=("save-bar__save--error", move || error_state.get() == SaveBarState::Error)
                disabled=disabled
                on:click=move |_| on_save.call(())
            >
                {move || state.get().label()}
            </button>
        </div>
    }
}
