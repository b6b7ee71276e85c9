//! Page header with back navigation and trailing actions.

use leptos::*;

#[component]
pub fn PageHeader(
    /// Title text; `None` renders a placeholder while loading.
    #[prop(into)]
    title: Signal<Option<String>>,
    #[prop(into)] on_back: Callback<()>,
    children: Children,
) -> impl IntoView {
    view! {
        <header class="page-header">
            <button class="page-header__back" on:click=move |_| on_back.call(())>
                "Back"
            </button>
            <h1 class="page-header__title">
                {move || title.get().unwrap_or_else(|| "...".to_owned())}
            </h1>
            <div class="page-header__actions">{children()}</div>
        </header>
    }
}
