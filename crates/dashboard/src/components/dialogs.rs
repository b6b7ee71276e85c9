//! The page's two dialogs: delete confirmation and image selection.

use std::collections::HashSet;

use leptos::*;

use merchdesk_catalog::{ImageId, ProductImage};

/// Confirmation dialog shown before deleting the variant.
#[component]
pub fn VariantDeleteDialog(
    #[prop(into)] open: Signal<bool>,
    /// Display name of the variant about to be deleted.
    #[prop(into)]
    name: Signal<String>,
    #[prop(into)] on_close: Callback<()>,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    view! {
        <Show when=move || open.get()>
            <div class="dialog-backdrop" on:click=move |_| on_close.call(())></div>
            <div class="dialog dialog--delete" role="dialog">
                <h2 class="dialog__title">"Delete variant"</h2>
                <p class="dialog__body">
                    {move || format!("Are you sure you want to delete {}?", name.get())}
                </p>
                <div class="dialog__actions">
                    <button class="dialog__cancel" on:click=move |_| on_close.call(())>
                        "Cancel"
                    </button>
                    <button class="dialog__confirm" on:click=move |_| on_confirm.call(())>
                        "Delete"
                    </button>
                </div>
            </div>
        </Show>
    }
}

/// Dialog listing the product's gallery with a checkbox per image.
///
/// Selection state is rebuilt from `selected` each time the dialog opens, so
/// a cancelled selection leaves no residue.
#[component]
pub fn ImageSelectDialog(
    #[prop(into)] open: Signal<bool>,
    /// The product's full gallery; `None` while loading.
    #[prop(into)]
    images: Signal<Option<Vec<ProductImage>>>,
    /// Ids currently attached to the variant.
    #[prop(into)]
    selected: Signal<Vec<ImageId>>,
    #[prop(into)] on_close: Callback<()>,
    #[prop(into)] on_confirm: Callback<Vec<ImageId>>,
) -> impl IntoView {
    view! {
        <Show when=move || open.get()>
            <ImageSelectBody
                images=images
                selected=selected
                on_close=on_close
                on_confirm=on_confirm
            />
        </Show>
    }
}

#[component]
fn ImageSelectBody(
    images: Signal<Option<Vec<ProductImage>>>,
    selected: Signal<Vec<ImageId>>,
    on_close: Callback<()>,
    on_confirm: Callback<Vec<ImageId>>,
) -> impl IntoView {
    let selection = create_rw_signal(
        selected
            .get_untracked()
            .into_iter()
            .collect::<HashSet<ImageId>>(),
    );

    // Confirmed ids keep the gallery's display order.
    let confirm = move |_| {
        let ordered: Vec<ImageId> = images
            .get_untracked()
            .unwrap_or_default()
            .into_iter()
            .map(|image| image.id)
            .filter(|id| selection.with_untracked(|selection| selection.contains(id)))
            .collect();
        on_confirm.call(ordered);
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.call(())></div>
        <div class="dialog dialog--images" role="dialog">
            <h2 class="dialog__title">"Select images"</h2>
            <div class="dialog__body">
                {move || match images.get() {
                    None => view! { <p class="card__text">"Loading..."</p> }.into_view(),
                    Some(images) => images
                        .into_iter()
                        .map(|image| {
                            let id = image.id.clone();
                            let checked_id = image.id.clone();
                            view! {
                                <label class="image-choice">
                                    <input
                                        type="checkbox"
                                        prop:checked=move || {
                                            selection.with(|selection| selection.contains(&checked_id))
                                        }
                                        on:change=move |_| {
                                            selection.update(|selection| {
                                                if !selection.remove(&id) {
                                                    selection.insert(id.clone());
                                                }
                                            })
                                        }
                                    />
                                    <img
                                        class="image-choice__preview"
                                        src=image.url.clone()
                                        alt=image.alt.clone()
                                    />
                                </label>
                            }
                        })
                        .collect_view(),
                }}
            </div>
            <div class="dialog__actions">
                <button class="dialog__cancel" on:click=move |_| on_close.call(())>
                    "Cancel"
                </button>
                <button class="dialog__confirm" on:click=confirm>
                    "Select"
                </button>
            </div>
        </div>
    }
}
