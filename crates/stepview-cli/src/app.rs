use crossterm::event::KeyCode;
use std::time::{Duration, Instant};
use stepview_config::Config;
use stepview_engine::{
    DiffTracker, RenderOptions, Replay, ReplayScript, Sequence, SequenceView, render,
};

pub struct App {
    replay: Replay,
    tracker: DiffTracker,
    sequence: Sequence,
    options: RenderOptions,
    pub heading: String,
    pub visible: bool,
    pub auto_advance: bool,
    interval: Duration,
    last_advance: Instant,
}

impl App {
    pub fn new(script: ReplayScript, config: &Config, now: Instant) -> Self {
        let mut app = Self {
            replay: Replay::new(script),
            tracker: DiffTracker::with_highlight_duration(config.highlight()),
            sequence: Sequence::default(),
            options: config.render_options(),
            heading: config.heading.clone(),
            visible: true,
            auto_advance: true,
            interval: config.replay_interval(),
            last_advance: now,
        };

        // Show the first frame straight away
        app.advance(now);
        app
    }

    /// Feed the next recorded frame to the tracker. Returns false once the
    /// script is exhausted.
    pub fn advance(&mut self, now: Instant) -> bool {
        let Some(frame) = self.replay.next_frame().cloned() else {
            return false;
        };
        self.tracker.update(&frame, now);
        self.sequence = frame;
        self.last_advance = now;
        true
    }

    /// Called on every loop iteration: clears an expired highlight and
    /// auto-advances the replay.
    pub fn tick(&mut self, now: Instant) {
        self.tracker.poll(now);
        if self.auto_advance && now.duration_since(self.last_advance) >= self.interval {
            self.advance(now);
        }
    }

    /// Returns true when the app should quit.
    pub fn handle_key(&mut self, code: KeyCode, now: Instant) -> bool {
        if !self.visible {
            if code == KeyCode::Char('q') {
                return true;
            }
            self.visible = true;
            return false;
        }

        match code {
            KeyCode::Char('q') => return true,
            KeyCode::Char('n') | KeyCode::Char(' ') => {
                self.advance(now);
            }
            KeyCode::Char('a') => {
                self.auto_advance = !self.auto_advance;
                self.last_advance = now;
            }
            KeyCode::Char('d') | KeyCode::Esc => self.dismiss(),
            _ => {}
        }
        false
    }

    pub fn dismiss(&mut self) {
        self.visible = false;
    }

    pub fn view(&self) -> SequenceView {
        render(&self.sequence, self.tracker.highlighted(), &self.options)
    }

    pub fn progress(&self) -> (usize, usize) {
        (self.replay.played(), self.replay.total())
    }
}
