use super::{Placeholder, StepCard};
use dioxus::prelude::*;
use stepview_engine::SequenceView as ViewModel;

/// Draws an already-rendered view description. Holds no state of its own.
#[component]
pub fn StepList(view: ViewModel, heading: String, on_dismiss: Option<Callback<()>>) -> Element {
    let content = match view {
        ViewModel::Placeholder { message, fade } => rsx! {
            Placeholder { message, fade }
        },
        ViewModel::Steps { blocks } => {
            let cards = blocks.into_iter().map(|block| {
                let key = block.step_number;
                rsx! {
                    StepCard { key: "{key}", block }
                }
            });
            rsx! {
                {cards}
            }
        }
    };

    rsx! {
        div {
            class: "sequence-header",
            h2 { class: "sequence-heading", "{heading}" }
            if let Some(on_dismiss) = on_dismiss {
                button {
                    class: "dismiss-button",
                    title: "Minimize",
                    onclick: move |_| on_dismiss.call(()),
                    "✕"
                }
            }
        }
        div {
            class: "step-list",
            {content}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::dioxus_core::VirtualDom;
    use dioxus_ssr::render;
    use pretty_assertions::assert_eq;
    use stepview_engine::{HighlightedSet, RenderOptions, Sequence, Step};

    fn render_list(sequence: &Sequence, highlighted: &HighlightedSet) -> String {
        let view = stepview_engine::render(sequence, highlighted, &RenderOptions::default());
        let mut dom = VirtualDom::new_with_props(
            StepList,
            StepListProps {
                view,
                heading: "Generated Sequence".to_string(),
                on_dismiss: None,
            },
        );
        dom.rebuild_in_place();
        render(&dom)
    }

    #[test]
    fn test_empty_sequence_shows_only_placeholder() {
        let html = render_list(&Sequence::default(), &HighlightedSet::new());

        assert_eq!(html.matches("class=\"placeholder\"").count(), 1);
        assert_eq!(html.matches("step-card").count(), 0);
        assert!(html.contains("Your generated sequences will appear here."));
    }

    #[test]
    fn test_steps_render_titles_and_paragraphs_in_order() {
        let sequence = Sequence::from(vec![
            Step::new(1, "Hello"),
            Step::new(2, "First paragraph\n\nSecond paragraph"),
        ]);

        let html = render_list(&sequence, &HighlightedSet::new());

        assert!(!html.contains("class=\"placeholder\""));
        let step_one = html.find("Step 1").unwrap();
        let step_two = html.find("Step 2").unwrap();
        let first = html.find("First paragraph").unwrap();
        let second = html.find("Second paragraph").unwrap();
        assert!(step_one < step_two);
        assert!(step_two < first);
        assert!(first < second);
        assert_eq!(html.matches("class=\"step-paragraph\"").count(), 3);
    }

    #[test]
    fn test_only_highlighted_step_pulses() {
        let sequence = Sequence::from(vec![Step::new(1, "Hello"), Step::new(2, "World")]);

        let html = render_list(&sequence, &HighlightedSet::from([2]));

        assert_eq!(html.matches("step-pulse 2000ms").count(), 1);
        assert_eq!(html.matches("step-appear 500ms").count(), 1);
        assert_eq!(html.matches("step-card highlighted").count(), 1);
        let pulse = html.find("step-pulse").unwrap();
        assert!(html.find("Step 1").unwrap() < pulse);
        assert!(pulse < html.find("Step 2").unwrap());
    }

    #[test]
    fn test_entrance_and_paragraph_stagger_styles() {
        let sequence = Sequence::from(vec![
            Step::new(1, "a"),
            Step::new(2, "b"),
            Step::new(3, "c\n\nd"),
        ]);

        let html = render_list(&sequence, &HighlightedSet::new());

        assert!(html.contains("step-enter 500ms cubic-bezier(0.4, 0, 0.2, 1) 0ms both"));
        assert!(html.contains("step-enter 500ms cubic-bezier(0.4, 0, 0.2, 1) 100ms both"));
        assert!(html.contains("step-enter 500ms cubic-bezier(0.4, 0, 0.2, 1) 200ms both"));
        assert!(html.contains("fade-in 300ms ease 100ms both"));
    }

    #[test]
    fn test_no_dismiss_button_without_handler() {
        let html = render_list(&Sequence::default(), &HighlightedSet::new());

        assert!(!html.contains("dismiss-button"));
    }

    #[allow(non_snake_case)]
    fn WithDismiss() -> Element {
        let view = stepview_engine::render(
            &Sequence::default(),
            &HighlightedSet::new(),
            &RenderOptions::default(),
        );
        rsx! {
            StepList {
                view,
                heading: "Generated Sequence".to_string(),
                on_dismiss: Some(Callback::new(|_: ()| {})),
            }
        }
    }

    #[test]
    fn test_dismiss_button_rendered_with_handler() {
        let mut dom = VirtualDom::new(WithDismiss);
        dom.rebuild_in_place();
        let html = render(&dom);

        assert_eq!(html.matches("dismiss-button").count(), 1);
    }
}
