use api::Product;
use dioxus::prelude::*;

/// Grid-view tile for a single product.
#[component]
pub fn ProductCard(product: Product, on_edit: EventHandler<u64>) -> Element {
    let id = product.id;

    rsx! {
        div {
            class: "product-card",
            h3 { class: "product-card-name", "{product.name}" }
            p { class: "product-card-category", "{product.category}" }
            div {
                class: "product-card-meta",
                span { class: "product-card-price", "${product.price}" }
                span { class: "product-card-stock", "Stock: {product.stock}" }
            }
            button {
                class: "product-card-edit",
                onclick: move |_| on_edit.call(id),
                "Edit"
            }
        }
    }
}
