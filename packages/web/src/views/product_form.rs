use api::{Category, FieldErrors, ProductForm};
use dioxus::prelude::*;
use ui::{notify_error, notify_success, use_notifications, Layout};

use super::use_session_guard;
use crate::Route;

/// Create-mode entry: `/products/new`.
#[component]
pub fn ProductNew() -> Element {
    rsx! {
        ProductFormPage { id: None::<u64> }
    }
}

/// Edit-mode entry: `/products/:id/edit`.
#[component]
pub fn ProductEdit(id: u64) -> Element {
    rsx! {
        ProductFormPage { id: Some(id) }
    }
}

/// Validated product form. Edit mode (id present) loads the product first;
/// create mode starts blank.
#[component]
fn ProductFormPage(id: Option<u64>) -> Element {
    let guard_route = match id {
        Some(id) => Route::ProductEdit { id },
        None => Route::ProductNew {},
    };
    if !use_session_guard(guard_route) {
        return rsx! {};
    }

    let mut name = use_signal(String::new);
    let mut price = use_signal(|| "0".to_string());
    let mut category = use_signal(String::new);
    let mut stock = use_signal(|| "0".to_string());
    let mut errors = use_signal(FieldErrors::default);
    let mut loading = use_signal(|| false);
    let mut notifications = use_notifications();
    let nav = use_navigator();

    // Edit mode: load the product and populate the fields. A failed load is
    // surfaced as a notification and leaves the form at its defaults.
    let _loader = use_resource(move || async move {
        let Some(id) = id else { return };
        match api::fetch_product_by_id(id).await {
            Ok(product) => {
                let form = ProductForm::from_product(&product);
                name.set(form.name);
                price.set(form.price);
                category.set(form.category);
                stock.set(form.stock);
            }
            Err(e) => {
                notify_error(
                    &mut notifications,
                    "Error",
                    &format!("Failed to load product: {e}"),
                );
            }
        }
    });

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let form = ProductForm {
            name: name(),
            price: price(),
            category: category(),
            stock: stock(),
        };
        // Rejected submissions never reach the facade.
        let input = match form.validate() {
            Ok(input) => {
                errors.set(FieldErrors::default());
                input
            }
            Err(errs) => {
                errors.set(errs);
                return;
            }
        };
        spawn(async move {
            loading.set(true);
            let result = match id {
                Some(id) => api::update_product(id, input.into_patch()).await,
                None => api::create_product(input).await,
            };
            match result {
                Ok(_) => {
                    let message = if id.is_some() {
                        "Product updated successfully"
                    } else {
                        "Product created successfully"
                    };
                    notify_success(&mut notifications, "Success", message);
                    nav.push(Route::Products {});
                }
                Err(e) => {
                    notify_error(
                        &mut notifications,
                        "Error",
                        &format!("Failed to save product: {e}"),
                    );
                }
            }
            loading.set(false);
        });
    };

    rsx! {
        Layout {
            div {
                class: "form-card",

                h1 {
                    class: "form-title",
                    if id.is_some() { "Edit Product" } else { "Create Product" }
                }

                form {
                    onsubmit: handle_submit,
                    class: "product-form",

                    div {
                        class: "form-field",
                        label { "Name" }
                        input {
                            r#type: "text",
                            value: name(),
                            oninput: move |evt| name.set(evt.value()),
                        }
                        if let Some(err) = errors().name {
                            p { class: "field-error", "{err}" }
                        }
                    }

                    div {
                        class: "form-field",
                        label { "Price" }
                        input {
                            r#type: "number",
                            step: "any",
                            value: price(),
                            oninput: move |evt| price.set(evt.value()),
                        }
                        if let Some(err) = errors().price {
                            p { class: "field-error", "{err}" }
                        }
                    }

                    div {
                        class: "form-field",
                        label { "Category" }
                        select {
                            value: category(),
                            onchange: move |evt| category.set(evt.value()),
                            option { value: "", "Select a category" }
                            for cat in Category::ALL {
                                option {
                                    value: "{cat}",
                                    selected: category() == cat.to_string(),
                                    "{cat}"
                                }
                            }
                        }
                        if let Some(err) = errors().category {
                            p { class: "field-error", "{err}" }
                        }
                    }

                    div {
                        class: "form-field",
                        label { "Stock" }
                        input {
                            r#type: "number",
                            value: stock(),
                            oninput: move |evt| stock.set(evt.value()),
                        }
                        if let Some(err) = errors().stock {
                            p { class: "field-error", "{err}" }
                        }
                    }

                    div {
                        class: "form-actions",
                        button {
                            r#type: "button",
                            class: "secondary",
                            onclick: move |_| {
                                nav.push(Route::Products {});
                            },
                            "Cancel"
                        }
                        button {
                            r#type: "submit",
                            class: "primary",
                            disabled: loading(),
                            if loading() {
                                "Saving..."
                            } else if id.is_some() {
                                "Update"
                            } else {
                                "Create"
                            }
                        }
                    }
                }
            }
        }
    }
}
