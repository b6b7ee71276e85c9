//! The variant-editing page.

use leptos::*;

use merchdesk_catalog::{
    ImageId, Variant, VariantFormData, VariantId, form_snapshot_key, initial_form_data,
    product_images, variant_images,
};

use crate::dialog::DialogState;
use crate::form::VariantForm;
use crate::theme::{Theme, page_grid_css};

use super::{
    ImageSelectDialog, PageHeader, ProductSummaryCard, SaveBar, SaveBarState,
    VariantAttributesCard, VariantDeleteDialog, VariantImagesCard, VariantNavigation,
    VariantPriceCard, VariantStockCard, save_disabled,
};

/// Orchestrates the variant editor.
///
/// `variant` is `None` while the container is still loading. The page owns
/// nothing but its two dialog flags and the form edits; every other action
/// flows back through the supplied callbacks.
#[component]
pub fn VariantPage(
    #[prop(into)] variant: Signal<Option<Variant>>,
    #[prop(optional, into)] save_state: MaybeSignal<SaveBarState>,
    #[prop(optional, into)] placeholder_image: Option<String>,
    #[prop(optional, into)] theme: Option<Theme>,
    #[prop(into)] on_back: Callback<()>,
    #[prop(into)] on_delete: Callback<()>,
    #[prop(optional, into)] on_submit: Option<Callback<VariantFormData>>,
    #[prop(into)] on_image_select: Callback<Vec<ImageId>>,
) -> impl IntoView {
    let theme = theme.unwrap_or_default();

    // Two named dialog slots, one per dialog.
    let delete_dialog = create_rw_signal(DialogState::default());
    let image_dialog = create_rw_signal(DialogState::default());

    let loading = Signal::derive(move || variant.with(Option::is_none));
    let title = Signal::derive(move || {
        variant.with(|variant| variant.as_ref().map(|variant| variant.name.clone()))
    });
    // Dialogs only exist once a named variant is on screen.
    let dialogs_ready = Signal::derive(move || {
        variant.with(|variant| {
            variant
                .as_ref()
                .map(|variant| !variant.name.is_empty())
                .unwrap_or(false)
        })
    });
    let dialog_name = Signal::derive(move || {
        variant.with(|variant| {
            variant
                .as_ref()
                .map(|variant| variant.name.clone())
                .unwrap_or_default()
        })
    });
    let gallery = Signal::derive(move || variant.with(|variant| product_images(variant.as_ref())));
    let attached = Signal::derive(move || {
        variant.with(|variant| {
            variant
                .as_ref()
                .map(|variant| variant.image_ids.clone())
                .unwrap_or_default()
        })
    });
    let form_key = create_memo(move |_| variant.with(|variant| form_snapshot_key(variant.as_ref())));

    let can_submit = on_submit.is_some();

    // TODO: decide whether a confirmed selection should reach `on_image_select`.
    let _on_image_select = on_image_select;
    let handle_image_confirm = move |ids: Vec<ImageId>| {
        tracing::debug!(selected = ids.len(), "image selection left unapplied");
        image_dialog.update(DialogState::toggle);
    };

    view! {
        <style>{page_grid_css(&theme)}</style>
        <div class="variant-page">
            <PageHeader title=title on_back=on_back>
                <button
                    class="page-header__delete"
                    disabled=loading
                    on:click=move |_| delete_dialog.update(DialogState::toggle)
                >
                    "Delete"
                </button>
            </PageHeader>
            {move || {
                // Rebuilt whenever the snapshot key changes; edits reset with it.
                form_key.with(|_| ());
                let current = variant.get_untracked();
                let is_loading = current.is_none();
                let form = VariantForm::new(initial_form_data(current.as_ref()));
                let images = variant_images(current.as_ref());
                let assignments = current.as_ref().map(|variant| variant.attributes.clone());
                let currency = current
                    .as_ref()
                    .and_then(|variant| variant.price_override.as_ref())
                    .map(|money| money.currency.clone());
                let siblings = current.as_ref().map(|variant| variant.product.variants.clone());
                let current_id = current.as_ref().map(|variant| variant.id.clone());
                let allocated = current.as_ref().map(|variant| variant.stock_allocated);
                let product = current.as_ref().map(|variant| variant.product.clone());
                let placeholder = placeholder_image.clone();
                let state = save_state.clone();

                let handle_row_click = move |id: VariantId| {
                    tracing::debug!(variant = %id, "sibling navigation not wired");
                };
                let has_changed = form.has_changed();
                let disabled = Signal::derive(move || {
                    save_disabled(is_loading, can_submit, has_changed.get())
                });
                let submit = move |_| {
                    if let Some(on_submit) = on_submit {
                        on_submit.call(form.data().get_untracked());
                    }
                };

                view! {
                    <div class="variant-page__grid">
                        <div>
                            <ProductSummaryCard
                                product=product
                                placeholder_image=placeholder.clone()
                            />
                            <VariantNavigation
                                variants=siblings
                                current=current_id
                                on_row_click=handle_row_click
                            />
                        </div>
                        <div>
                            <VariantAttributesCard assignments=assignments form=form/>
                            <VariantPriceCard currency=currency loading=is_loading form=form/>
                            <VariantStockCard
                                stock_allocated=allocated
                                loading=is_loading
                                form=form
                            />
                            <VariantImagesCard
                                images=images
                                placeholder_image=placeholder
                                loading=is_loading
                                on_image_add=move |_| image_dialog.update(DialogState::toggle)
                            />
                        </div>
                    </div>
                    <SaveBar disabled=disabled state=state on_save=submit/>
                }
            }}
            <Show when=move || dialogs_ready.get()>
                <VariantDeleteDialog
                    open=Signal::derive(move || delete_dialog.get().is_open())
                    name=dialog_name
                    on_close=move |_| delete_dialog.update(DialogState::toggle)
                    on_confirm=on_delete
                />
                <ImageSelectDialog
                    open=Signal::derive(move || image_dialog.get().is_open())
                    images=gallery
                    selected=attached
                    on_close=move |_| image_dialog.update(DialogState::toggle)
                    on_confirm=handle_image_confirm
                />
            </Show>
        </div>
    }
}
