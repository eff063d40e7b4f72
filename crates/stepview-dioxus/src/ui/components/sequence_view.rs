use super::StepList;
use dioxus::core::Task;
use dioxus::prelude::*;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Instant;
use stepview_engine::{DiffTracker, RenderOptions, Sequence, render};

/// Step sequence view that highlights steps added since the previous update.
///
/// `revision` identifies one producer update. Whenever it changes the new
/// `sequence` is diffed during that same render, even if it equals the
/// previous one, so the drawn highlight always matches the current pair.
/// The pending clear task is replaced on every update; the task fires through
/// the tracker, which ignores it if a newer update armed a fresher timer.
#[component]
pub fn SequenceView(
    sequence: Sequence,
    revision: u64,
    options: RenderOptions,
    heading: String,
    on_dismiss: Option<Callback<()>>,
) -> Element {
    let highlight = options.animation.highlight;
    let tracker =
        use_hook(|| Rc::new(RefCell::new(DiffTracker::with_highlight_duration(highlight))));
    let seen_revision = use_hook(|| Rc::new(Cell::new(None::<u64>)));
    let clear_task = use_hook(|| Rc::new(Cell::new(None::<Task>)));
    let mut clears = use_signal(|| 0u64);

    // Re-render when the clear task fires
    let _ = clears();

    if seen_revision.get() != Some(revision) {
        seen_revision.set(Some(revision));

        let armed = tracker.borrow_mut().update(&sequence, Instant::now());

        if let Some(previous) = clear_task.take() {
            previous.cancel();
        }

        if let Some(timer) = armed {
            let tracker = tracker.clone();
            let task = spawn(async move {
                tokio::time::sleep(timer.delay()).await;
                if tracker.borrow_mut().fire(timer) {
                    log::debug!("highlight cleared after {:?}", timer.delay());
                    clears += 1;
                }
            });
            clear_task.set(Some(task));
        }
    }

    let view = render(&sequence, tracker.borrow().highlighted(), &options);

    rsx! {
        StepList { view, heading, on_dismiss }
    }
}
