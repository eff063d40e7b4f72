use super::motion::{entrance_style, fade_style, treatment_style};
use dioxus::prelude::*;
use stepview_engine::StepBlock;

/// Titled block for one step with its paragraphs.
#[component]
pub fn StepCard(block: StepBlock) -> Element {
    let class_name = if block.is_highlighted() {
        "step-card highlighted"
    } else {
        "step-card"
    };
    let outer_style = entrance_style(&block.entrance);
    let card_style = treatment_style(&block.treatment);
    let title_style = fade_style(&block.title_fade);
    let title = block.title.clone();
    let paragraphs = block.paragraphs.iter().map(|paragraph| {
        let index = paragraph.index;
        let style = fade_style(&paragraph.fade);
        let text = paragraph.text.clone();
        rsx! {
            p {
                key: "{index}",
                class: "step-paragraph",
                style: "{style}",
                "{text}"
            }
        }
    });

    rsx! {
        div {
            class: "step-entrance",
            style: "{outer_style}",
            div {
                class: "{class_name}",
                style: "{card_style}",
                h3 {
                    class: "step-title",
                    style: "{title_style}",
                    "{title}"
                }
                {paragraphs}
            }
        }
    }
}
