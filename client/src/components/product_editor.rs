//! Add/edit product form.
//!
//! DESIGN
//! ======
//! Inputs write straight into the `ProductForm` draft; submit hands the draft
//! to the catalog store, and the form state decides whether that is an add
//! or an update.

use leptos::prelude::*;

use crate::state::catalog::CatalogStore;
use crate::state::form::ProductForm;
use crate::state::product::DraftField;

#[component]
pub fn ProductEditor(form: RwSignal<ProductForm>) -> impl IntoView {
    let catalog = expect_context::<RwSignal<CatalogStore>>();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        catalog.update(|store| {
            form.update(|f| match f.submit(store) {
                Ok(outcome) => leptos::logging::log!("product form submitted: {outcome:?}"),
                Err(e) => leptos::logging::log!("product form rejected: {e}"),
            });
        });
    };

    view! {
        <form class="card card-body mb-4 product-editor" on:submit=on_submit>
            <div class="row g-2">
                <DraftInput form=form field={DraftField::Name} label="Name"/>
                <DraftInput form=form field={DraftField::Price} label="Price" input_type="number"/>
                <DraftInput form=form field={DraftField::Category} label="Category"/>
                <DraftInput form=form field={DraftField::Image} label="Image URL"/>
                <DraftInput form=form field={DraftField::Stock} label="Stock" input_type="number"/>
                <DraftInput form=form field={DraftField::Rating} label="Rating (1-5)" input_type="number"/>
                <div class="col-12">
                    <label class="form-label small">"Description"</label>
                    <textarea
                        class="form-control"
                        rows="2"
                        prop:value=move || form.with(|f| f.draft.description.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|f| f.draft.description = value);
                        }
                    ></textarea>
                </div>
            </div>
            <Show when=move || form.with(|f| f.name_invalid)>
                <div class="alert alert-danger small mt-2 mb-0" id="nameAlert">
                    "Name must be 3-60 characters: letters, numbers, spaces, hyphens or underscores."
                </div>
            </Show>
            <div class="d-flex gap-2 mt-3">
                <button type="submit" class="btn btn-primary" id="addBtn">
                    {move || form.with(ProductForm::submit_label)}
                </button>
                <button
                    type="button"
                    class="btn btn-outline-secondary"
                    id="clearFormBtn"
                    on:click=move |_| form.update(ProductForm::clear)
                >
                    "Clear Form"
                </button>
            </div>
        </form>
    }
}

/// One labelled input bound to a draft field.
#[component]
fn DraftInput(
    form: RwSignal<ProductForm>,
    field: DraftField,
    label: &'static str,
    #[prop(default = "text")] input_type: &'static str,
) -> impl IntoView {
    let invalid = move || field == DraftField::Name && form.with(|f| f.name_invalid);

    view! {
        <div class="col-md-4">
            <label class="form-label small">{label}</label>
            <input
                class="form-control"
                class:is-invalid=invalid
                type=input_type
                prop:value=move || form.with(|f| f.draft.field(field).to_owned())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    form.update(|f| *f.draft.field_mut(field) = value);
                }
            />
        </div>
    }
}
