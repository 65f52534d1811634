//! This crate contains all shared UI for the workspace.

mod auth;
pub use auth::{use_auth, AuthProvider, AuthState, LogoutButton};

mod notifications;
pub use notifications::{
    notify_error, notify_success, use_notifications, Notification, NotificationProvider,
    Notifications, NotifyLevel, Toaster,
};

mod layout;
pub use layout::Layout;

mod product_card;
pub use product_card::ProductCard;

mod view_toggle;
pub use view_toggle::ViewToggle;
