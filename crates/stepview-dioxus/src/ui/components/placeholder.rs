use super::motion::fade_style;
use dioxus::prelude::*;
use stepview_engine::Transition;

#[component]
pub fn Placeholder(message: String, fade: Transition) -> Element {
    let style = fade_style(&fade);

    rsx! {
        p {
            class: "placeholder",
            style: "{style}",
            "{message}"
        }
    }
}
