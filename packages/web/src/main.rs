use dioxus::prelude::*;

use ui::{AuthProvider, NotificationProvider};
use views::{Login, ProductEdit, ProductNew, Products};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Root {},
    #[route("/login")]
    Login {},
    #[route("/products")]
    Products {},
    #[route("/products/new")]
    ProductNew {},
    #[route("/products/:id/edit")]
    ProductEdit { id: u64 },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        AuthProvider {
            NotificationProvider {
                Router::<Route> {}
            }
        }
    }
}

/// Redirect `/` to `/products`
#[component]
fn Root() -> Element {
    let nav = use_navigator();
    nav.replace(Route::Products {});
    rsx! {}
}
