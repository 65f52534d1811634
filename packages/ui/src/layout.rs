use dioxus::prelude::*;

use crate::{use_auth, LogoutButton, Toaster};

/// Shared chrome for protected pages: header with the signed-in user's
/// identity and logout, the page body, and the notification area.
#[component]
pub fn Layout(children: Element) -> Element {
    let auth = use_auth();
    let email = auth
        .read()
        .session
        .current_user()
        .map(|u| u.email.clone())
        .unwrap_or_default();

    rsx! {
        div {
            class: "app",
            header {
                class: "app-header",
                h1 { class: "app-title", "Dashboard" }
                div {
                    class: "app-user",
                    span { class: "app-user-email", "{email}" }
                    LogoutButton { class: "logout-btn" }
                }
            }
            main {
                class: "app-main",
                {children}
            }
            Toaster {}
        }
    }
}
