use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NotifyLevel {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notification {
    pub level: NotifyLevel,
    pub title: String,
    pub message: String,
}

#[derive(Clone, Debug, Default)]
pub struct Notifications {
    pub entries: Vec<Notification>,
}

pub fn use_notifications() -> Signal<Notifications> {
    use_context::<Signal<Notifications>>()
}

pub fn notify_success(notifications: &mut Signal<Notifications>, title: &str, message: &str) {
    notifications.write().entries.push(Notification {
        level: NotifyLevel::Success,
        title: title.to_string(),
        message: message.to_string(),
    });
}

pub fn notify_error(notifications: &mut Signal<Notifications>, title: &str, message: &str) {
    tracing::error!("{message}");
    notifications.write().entries.push(Notification {
        level: NotifyLevel::Error,
        title: title.to_string(),
        message: message.to_string(),
    });
}

/// Provider component that owns the notification list.
#[component]
pub fn NotificationProvider(children: Element) -> Element {
    let notifications = use_signal(Notifications::default);
    use_context_provider(|| notifications);

    rsx! {
        {children}
    }
}

/// Renders pending notifications with a dismiss control.
#[component]
pub fn Toaster() -> Element {
    let mut notifications = use_notifications();

    rsx! {
        div {
            class: "toaster",
            for (i, entry) in notifications().entries.into_iter().enumerate() {
                div {
                    class: match entry.level {
                        NotifyLevel::Success => "toast toast-success",
                        NotifyLevel::Error => "toast toast-error",
                    },
                    div {
                        class: "toast-body",
                        strong { class: "toast-title", "{entry.title}" }
                        span { class: "toast-message", "{entry.message}" }
                    }
                    button {
                        class: "toast-dismiss",
                        onclick: move |_| {
                            let entries = &mut notifications.write().entries;
                            if i < entries.len() {
                                entries.remove(i);
                            }
                        },
                        "×"
                    }
                }
            }
        }
    }
}
