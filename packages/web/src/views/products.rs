use api::{Pager, Product, SortColumn, SortConfig, StockdeckConfig, ViewMode};
use dioxus::prelude::*;
use ui::{notify_error, use_notifications, Layout, ProductCard, ViewToggle};

use super::use_session_guard;
use crate::Route;

/// Paged, sortable product list with grid and table presentation modes.
#[component]
pub fn Products() -> Element {
    if !use_session_guard(Route::Products {}) {
        return rsx! {};
    }

    let page_size = StockdeckConfig::default().list.page_size;
    let mut products = use_signal(Vec::<Product>::new);
    let mut total = use_signal(|| 0u32);
    let mut loading = use_signal(|| true);
    let mut page = use_signal(|| 0u32);
    let mut sort = use_signal(SortConfig::default);
    let mut view = use_signal(ViewMode::default);
    let mut notifications = use_notifications();
    let nav = use_navigator();

    // Reload whenever page or sort changes. The resource restarts on a
    // change and drops the superseded future, so only the response matching
    // the latest request is applied. The loading flag clears on every path.
    let _loader = use_resource(move || {
        let (page, sort) = (page(), sort());
        async move {
            loading.set(true);
            match api::fetch_products(page, page_size, Some(sort)).await {
                Ok(resp) => {
                    products.set(resp.data);
                    total.set(resp.total);
                }
                Err(e) => {
                    notify_error(
                        &mut notifications,
                        "Error",
                        &format!("Failed to load products: {e}"),
                    );
                }
            }
            loading.set(false);
        }
    });

    let mut handle_sort = move |column: SortColumn| {
        let next = sort.peek().toggled(column);
        sort.set(next);
    };

    let pager = Pager {
        page: page(),
        total: total(),
        limit: page_size,
    };

    rsx! {
        Layout {
            div {
                class: "list-header",
                h1 { class: "list-title", "Products" }
                div {
                    class: "list-actions",
                    ViewToggle {
                        view: view(),
                        on_change: move |mode| view.set(mode),
                    }
                    button {
                        class: "primary",
                        onclick: move |_| {
                            nav.push(Route::ProductNew {});
                        },
                        "Add Product"
                    }
                }
            }

            if loading() {
                div { class: "list-loading", "Loading..." }
            } else if view() == ViewMode::Table {
                div {
                    class: "table-wrap",
                    table {
                        class: "product-table",
                        thead {
                            tr {
                                th {
                                    button {
                                        class: "sort-btn",
                                        onclick: move |_| handle_sort(SortColumn::Name),
                                        "Name"
                                    }
                                }
                                th {
                                    button {
                                        class: "sort-btn",
                                        onclick: move |_| handle_sort(SortColumn::Price),
                                        "Price"
                                    }
                                }
                                th {
                                    button {
                                        class: "sort-btn",
                                        onclick: move |_| handle_sort(SortColumn::Category),
                                        "Category"
                                    }
                                }
                                th {
                                    button {
                                        class: "sort-btn",
                                        onclick: move |_| handle_sort(SortColumn::Stock),
                                        "Stock"
                                    }
                                }
                                th { "Actions" }
                            }
                        }
                        tbody {
                            for product in products() {
                                tr {
                                    key: "{product.id}",
                                    td { "{product.name}" }
                                    td { "${product.price}" }
                                    td { "{product.category}" }
                                    td { "{product.stock}" }
                                    td {
                                        button {
                                            class: "secondary",
                                            onclick: move |_| {
                                                nav.push(Route::ProductEdit { id: product.id });
                                            },
                                            "Edit"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            } else {
                div {
                    class: "product-grid",
                    for product in products() {
                        ProductCard {
                            key: "{product.id}",
                            product: product.clone(),
                            on_edit: move |id| {
                                nav.push(Route::ProductEdit { id });
                            },
                        }
                    }
                }
            }

            div {
                class: "pagination",
                button {
                    class: "secondary",
                    disabled: !pager.has_prev(),
                    onclick: move |_| page.set(pager.prev()),
                    "Previous"
                }
                button {
                    class: "secondary",
                    disabled: !pager.has_next(),
                    onclick: move |_| page.set(pager.next()),
                    "Next"
                }
            }
        }
    }
}
