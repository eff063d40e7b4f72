use super::components::SequenceView;
use dioxus::prelude::*;
use stepview_config::Config;
use stepview_engine::{Replay, ReplayScript, Sequence};

const SEQUENCE_CSS: &str = include_str!("../../assets/sequence.css");

#[component]
pub fn App(script: ReplayScript, config: Config) -> Element {
    // Revision counts producer updates so a repeated frame is still diffed
    let feed = use_signal(|| (0u64, Sequence::default()));
    let mut visible = use_signal(|| true);
    let interval = config.replay_interval();

    // Feed recorded frames to the view as if a producer were pushing updates
    use_future(move || {
        let script = script.clone();
        let mut feed = feed;
        async move {
            let mut replay = Replay::new(script);
            while let Some(frame) = replay.next_frame().cloned() {
                log::info!(
                    "replaying frame {}/{} ({} step(s))",
                    replay.played(),
                    replay.total(),
                    frame.len()
                );
                feed.with_mut(|(revision, sequence)| {
                    *revision += 1;
                    *sequence = frame;
                });
                tokio::time::sleep(interval).await;
            }
            log::info!("replay finished");
        }
    });

    let (revision, sequence) = feed();
    let view_class = if visible() {
        "sequence-view"
    } else {
        "sequence-view hidden"
    };

    rsx! {
        style { {SEQUENCE_CSS} }
        div {
            class: "app-container",
            if !visible() {
                button {
                    class: "restore-button",
                    onclick: move |_| visible.set(true),
                    "Show generated sequence"
                }
            }
            // Kept mounted while hidden so the tracker keeps its snapshot
            div {
                class: "{view_class}",
                SequenceView {
                    sequence,
                    revision,
                    options: config.render_options(),
                    heading: config.heading.clone(),
                    on_dismiss: Some(Callback::new(move |_| visible.set(false))),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::dioxus_core::VirtualDom;
    use dioxus_ssr::render;

    #[test]
    fn test_app_starts_with_placeholder_and_heading() {
        let config = Config {
            heading: "Outreach Steps".to_string(),
            ..Config::default()
        };
        let mut dom = VirtualDom::new_with_props(
            App,
            AppProps {
                script: ReplayScript::default(),
                config,
            },
        );
        dom.rebuild_in_place();
        let html = render(&dom);

        assert!(html.contains("Outreach Steps"));
        assert!(html.contains("class=\"placeholder\""));
        assert!(html.contains("class=\"dismiss-button\""));
        assert!(!html.contains("class=\"restore-button\""));
    }
}
