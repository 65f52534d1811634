use api::ViewMode;
use dioxus::prelude::*;

/// Grid/table switch for the product list. Presentation only.
#[component]
pub fn ViewToggle(view: ViewMode, on_change: EventHandler<ViewMode>) -> Element {
    let class_for = move |mode: ViewMode| {
        if view == mode {
            "view-toggle-btn active"
        } else {
            "view-toggle-btn"
        }
    };

    rsx! {
        div {
            class: "view-toggle",
            button {
                class: class_for(ViewMode::Grid),
                onclick: move |_| on_change.call(ViewMode::Grid),
                "Grid"
            }
            button {
                class: class_for(ViewMode::Table),
                onclick: move |_| on_change.call(ViewMode::Table),
                "Table"
            }
        }
    }
}
