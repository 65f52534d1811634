mod login;
pub use login::Login;

mod products;
pub use products::Products;

mod product_form;
pub use product_form::{ProductEdit, ProductNew};

use dioxus::prelude::*;

use crate::Route;

/// Guard for protected views. Anonymous visitors are bounced to the login
/// page and the requested path is remembered so login can return them.
/// Returns whether the caller may render.
pub(crate) fn use_session_guard(current: Route) -> bool {
    let mut auth = ui::use_auth();
    let nav = use_navigator();

    if auth.peek().session.is_authenticated() {
        return true;
    }

    let path = current.to_string();
    if auth.peek().redirect_to.as_deref() != Some(path.as_str()) {
        auth.write().redirect_to = Some(path);
    }
    nav.replace(Route::Login {});
    false
}
