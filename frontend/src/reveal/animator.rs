use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gloo_timers::callback::{Interval, Timeout};
use log::debug;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::config;
use crate::reveal::sequence::RevealSequence;

/// What `play()` does once the sequence has already run to the end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplayPolicy {
    /// Jump back to the start and play again.
    Restart,
    /// Stay on the final frame.
    Ignore,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// Playback position of a sequence, advanced by wall-clock ticks.
#[derive(Debug, Clone, PartialEq)]
pub struct Playback {
    total: f64,
    position: f64,
    direction: Option<Direction>,
    last_tick: Option<f64>,
    policy: ReplayPolicy,
    completed: bool,
}

impl Playback {
    /// `total` is the sequence length in seconds.
    pub fn new(total: f64, policy: ReplayPolicy) -> Self {
        Self {
            total: total.max(0.0),
            position: 0.0,
            direction: None,
            last_tick: None,
            policy,
            completed: false,
        }
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    #[cfg(test)]
    pub fn direction(&self) -> Option<Direction> {
        self.direction
    }

    pub fn is_running(&self) -> bool {
        self.direction.is_some()
    }

    #[cfg(test)]
    pub fn is_complete(&self) -> bool {
        self.completed
    }

    /// Returns false when the call was a no-op.
    pub fn play(&mut self) -> bool {
        if self.completed {
            match self.policy {
                ReplayPolicy::Ignore => return false,
                ReplayPolicy::Restart => {
                    if self.position >= self.total {
                        self.position = 0.0;
                    }
                    self.completed = false;
                }
            }
        }
        if self.direction == Some(Direction::Forward) {
            return false;
        }
        self.direction = Some(Direction::Forward);
        self.last_tick = None;
        true
    }

    /// Runs backwards from wherever playback currently is.
    pub fn reverse(&mut self) -> bool {
        if self.position <= 0.0 || self.direction == Some(Direction::Backward) {
            return false;
        }
        self.direction = Some(Direction::Backward);
        self.last_tick = None;
        self.completed = false;
        true
    }

    pub fn cancel(&mut self) {
        self.direction = None;
        self.last_tick = None;
    }

    /// Advances by the time elapsed since the previous tick. The first tick
    /// after `play`/`reverse` only records the clock. Returns the new position,
    /// or `None` when nothing is playing.
    pub fn tick(&mut self, now_ms: f64) -> Option<f64> {
        let direction = self.direction?;
        let elapsed = self
            .last_tick
            .map_or(0.0, |previous| ((now_ms - previous) / 1000.0).max(0.0));
        self.last_tick = Some(now_ms);

        match direction {
            Direction::Forward => {
                self.position = (self.position + elapsed).min(self.total);
                if self.position >= self.total {
                    self.completed = true;
                    self.direction = None;
                }
            }
            Direction::Backward => {
                self.position = (self.position - elapsed).max(0.0);
                if self.position <= 0.0 {
                    self.direction = None;
                }
            }
        }
        Some(self.position)
    }
}

struct AnimatorInner {
    sequence: Rc<RevealSequence>,
    targets: Vec<NodeRef>,
    playback: Playback,
    interval: Option<Interval>,
}

impl AnimatorInner {
    fn apply(&self, position: f64) {
        for (target, state) in self.sequence.frame(position) {
            let Some(element) = self
                .targets
                .get(target)
                .and_then(|node| node.cast::<HtmlElement>())
            else {
                continue;
            };
            let style = element.style();
            let _ = style.set_property("opacity", &state.css_opacity());
            let _ = style.set_property("transform", &state.css_transform());
        }
    }

    fn stop_driving(&mut self) {
        if let Some(interval) = self.interval.take() {
            // Stops the timer now; the closure may be running, so it is freed later.
            let callback = interval.cancel();
            Timeout::new(0, move || drop(callback)).forget();
        }
    }
}

/// Plays a [`RevealSequence`] against a section's elements.
///
/// Clones share the same playback.
#[derive(Clone)]
pub struct AnimatorHandle {
    inner: Rc<RefCell<AnimatorInner>>,
}

impl PartialEq for AnimatorHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl AnimatorHandle {
    fn new(targets: Vec<NodeRef>, sequence: Rc<RevealSequence>, policy: ReplayPolicy) -> Self {
        let playback = Playback::new(sequence.total_duration(), policy);
        Self {
            inner: Rc::new(RefCell::new(AnimatorInner {
                sequence,
                targets,
                playback,
                interval: None,
            })),
        }
    }

    pub fn play(&self) {
        let started = self.inner.borrow_mut().playback.play();
        if started {
            debug!("Playing reveal sequence");
            self.drive();
        }
    }

    pub fn reverse(&self) {
        let started = self.inner.borrow_mut().playback.reverse();
        if started {
            self.drive();
        }
    }

    /// Stops immediately; no frame is applied after this returns.
    pub fn cancel(&self) {
        let mut inner = self.inner.borrow_mut();
        inner.playback.cancel();
        inner.interval = None;
    }

    #[cfg(all(test, target_arch = "wasm32"))]
    pub fn is_playing(&self) -> bool {
        self.inner.borrow().playback.is_running()
    }

    /// Whether a frame timer is currently scheduled.
    #[cfg(all(test, target_arch = "wasm32"))]
    pub fn is_driving(&self) -> bool {
        self.inner.borrow().interval.is_some()
    }

    fn apply_current(&self) {
        let inner = self.inner.borrow();
        inner.apply(inner.playback.position());
    }

    fn drive(&self) {
        let mut inner = self.inner.borrow_mut();
        if inner.interval.is_some() {
            return;
        }
        let weak = Rc::downgrade(&self.inner);
        inner.interval = Some(Interval::new(config::FRAME_INTERVAL_MS, move || {
            advance(&weak);
        }));
    }
}

fn advance(inner: &Weak<RefCell<AnimatorInner>>) {
    let Some(inner) = inner.upgrade() else {
        return;
    };
    let mut inner = inner.borrow_mut();
    if let Some(position) = inner.playback.tick(web_sys::js_sys::Date::now()) {
        inner.apply(position);
    }
    if !inner.playback.is_running() {
        inner.stop_driving();
    }
}

/// Owns the playback of `sequence` for the lifetime of the calling component.
///
/// The first frame is applied on mount so targets start from their hidden
/// state; unmounting cancels any pending frames.
#[hook]
pub fn use_sequenced_animator(
    targets: Vec<NodeRef>,
    sequence: Rc<RevealSequence>,
    policy: ReplayPolicy,
) -> AnimatorHandle {
    let handle = use_state(move || AnimatorHandle::new(targets, sequence, policy));

    {
        let handle = (*handle).clone();
        use_effect_with_deps(
            move |_| {
                handle.apply_current();
                move || handle.cancel()
            },
            (),
        );
    }

    (*handle).clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn run_to_end(playback: &mut Playback, mut now: f64) -> f64 {
        while playback.tick(now).is_some() {
            if !playback.is_running() {
                break;
            }
            now += 16.0;
        }
        now
    }

    #[test]
    fn test_idle_until_played() {
        let mut playback = Playback::new(1.0, ReplayPolicy::Ignore);
        assert!(!playback.is_running());
        assert_eq!(playback.tick(0.0), None);
        assert_eq!(playback.position(), 0.0);
    }

    #[test]
    fn test_first_tick_records_clock_only() {
        let mut playback = Playback::new(1.0, ReplayPolicy::Ignore);
        playback.play();
        assert_eq!(playback.tick(5_000.0), Some(0.0));
        let position = playback.tick(5_250.0).unwrap();
        assert!((position - 0.25).abs() < EPS);
    }

    #[test]
    fn test_runs_to_completion_and_clamps() {
        let mut playback = Playback::new(1.0, ReplayPolicy::Ignore);
        playback.play();
        playback.tick(0.0);
        assert_eq!(playback.tick(3_000.0), Some(1.0));
        assert!(playback.is_complete());
        assert!(!playback.is_running());
        assert_eq!(playback.tick(4_000.0), None);
    }

    #[test]
    fn test_ignore_policy_makes_replay_a_noop() {
        let mut playback = Playback::new(0.5, ReplayPolicy::Ignore);
        assert!(playback.play());
        run_to_end(&mut playback, 0.0);

        assert!(!playback.play());
        assert!(!playback.is_running());
        assert_eq!(playback.position(), 0.5);
    }

    #[test]
    fn test_restart_policy_replays_from_top() {
        let mut playback = Playback::new(0.5, ReplayPolicy::Restart);
        playback.play();
        run_to_end(&mut playback, 0.0);

        assert!(playback.play());
        assert_eq!(playback.position(), 0.0);
        assert!(!playback.is_complete());
        let end = run_to_end(&mut playback, 10_000.0);
        assert!(end > 10_000.0);
        assert!(playback.is_complete());
    }

    #[test]
    fn test_play_while_playing_is_noop() {
        let mut playback = Playback::new(1.0, ReplayPolicy::Restart);
        assert!(playback.play());
        playback.tick(0.0);
        playback.tick(400.0);
        assert!(!playback.play());
        assert!((playback.position() - 0.4).abs() < EPS);
    }

    #[test]
    fn test_reverse_runs_back_to_start() {
        let mut playback = Playback::new(1.0, ReplayPolicy::Restart);
        playback.play();
        playback.tick(0.0);
        playback.tick(600.0);

        assert!(playback.reverse());
        assert_eq!(playback.direction(), Some(Direction::Backward));
        playback.tick(1_000.0);
        let position = playback.tick(1_200.0).unwrap();
        assert!((position - 0.4).abs() < EPS);

        assert_eq!(playback.tick(5_000.0), Some(0.0));
        assert!(!playback.is_running());
    }

    #[test]
    fn test_reverse_at_start_is_noop() {
        let mut playback = Playback::new(1.0, ReplayPolicy::Restart);
        assert!(!playback.reverse());
        assert!(!playback.is_running());
    }

    #[test]
    fn test_play_after_partial_reverse_resumes_forward() {
        let mut playback = Playback::new(1.0, ReplayPolicy::Restart);
        playback.play();
        run_to_end(&mut playback, 0.0);
        playback.reverse();
        playback.tick(0.0);
        playback.tick(300.0);

        assert!(playback.play());
        playback.tick(1_000.0);
        let position = playback.tick(1_100.0).unwrap();
        assert!((position - 0.8).abs() < EPS);
    }

    #[test]
    fn test_cancel_stops_pending_steps() {
        let mut playback = Playback::new(2.0, ReplayPolicy::Ignore);
        playback.play();
        playback.tick(0.0);
        playback.tick(500.0);
        playback.cancel();

        assert!(!playback.is_running());
        assert_eq!(playback.tick(1_000.0), None);
        assert_eq!(playback.tick(9_000.0), None);
        assert!((playback.position() - 0.5).abs() < EPS);
        assert!(!playback.is_complete());
    }

    #[test]
    fn test_empty_sequence_completes_on_first_tick() {
        let mut playback = Playback::new(0.0, ReplayPolicy::Ignore);
        playback.play();
        assert_eq!(playback.tick(0.0), Some(0.0));
        assert!(playback.is_complete());
    }

    #[test]
    fn test_clock_going_backwards_does_not_rewind() {
        let mut playback = Playback::new(1.0, ReplayPolicy::Ignore);
        playback.play();
        playback.tick(1_000.0);
        playback.tick(1_200.0);
        let position = playback.tick(900.0).unwrap();
        assert!((position - 0.2).abs() < EPS);
    }
}
