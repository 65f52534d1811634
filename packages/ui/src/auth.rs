//! Authentication context and hooks for the UI.

use api::Session;
use dioxus::prelude::*;

/// Authentication state for the application.
///
/// The session is owned here, exclusively, and injected into consumers via
/// context — never read through a global.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub session: Session,
    /// Path remembered by the route guard when an anonymous visit was
    /// bounced to the login page, so login can return the user there.
    pub redirect_to: Option<String>,
}

/// Get the current authentication state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// Provider component that owns the authentication state.
/// Wrap the app with this component once, at the root.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let auth_state = use_signal(AuthState::default);
    use_context_provider(|| auth_state);

    rsx! {
        {children}
    }
}

/// Button that ends the current session.
#[component]
pub fn LogoutButton(
    #[props(default = "Logout".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let mut auth = use_auth();

    let onclick = move |_| {
        auth.write().session.logout();
        tracing::info!("session ended");
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href("/login");
            }
        }
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}
