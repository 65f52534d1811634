//! Login page view with email/password form.

use dioxus::prelude::*;
use ui::{notify_error, notify_success, use_auth, use_notifications, Toaster};

use crate::Route;

/// Login page component.
#[component]
pub fn Login() -> Element {
    let mut auth = use_auth();
    let mut notifications = use_notifications();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut loading = use_signal(|| false);
    let nav = use_navigator();

    // Already authenticated visitors go straight to the product list.
    if auth.peek().session.is_authenticated() {
        nav.replace(Route::Products {});
        return rsx! {};
    }

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            loading.set(true);
            match api::login(&email(), &password()).await {
                Ok(resp) => {
                    let target = {
                        let mut state = auth.write();
                        state.session.login(resp.token, resp.user);
                        state.redirect_to.take()
                    };
                    notify_success(
                        &mut notifications,
                        "Success",
                        "You have been logged in successfully.",
                    );
                    match target {
                        Some(path) => {
                            nav.replace(path);
                        }
                        None => {
                            nav.replace(Route::Products {});
                        }
                    }
                }
                Err(e) => {
                    loading.set(false);
                    notify_error(&mut notifications, "Error", &format!("Invalid credentials: {e}"));
                }
            }
        });
    };

    rsx! {
        div {
            class: "login-container",

            div {
                class: "login-card",

                h2 { class: "login-title", "Login" }

                form {
                    onsubmit: handle_login,
                    class: "login-form",

                    input {
                        class: "login-input",
                        r#type: "email",
                        placeholder: "Email",
                        required: true,
                        value: email(),
                        oninput: move |evt| email.set(evt.value()),
                    }

                    input {
                        class: "login-input",
                        r#type: "password",
                        placeholder: "Password",
                        required: true,
                        value: password(),
                        oninput: move |evt| password.set(evt.value()),
                    }

                    button {
                        class: "primary login-submit",
                        r#type: "submit",
                        disabled: loading(),
                        if loading() { "Signing in..." } else { "Login" }
                    }
                }
            }

            Toaster {}
        }
    }
}
