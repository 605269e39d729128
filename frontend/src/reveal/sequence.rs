//! Declarative reveal sequences.
//!
//! A [`RevealSequence`] is an ordered list of tweens, each driving one element
//! of a section from a start [`VisualState`] to an end state. Start times are
//! resolved once, up front, so the full length of a sequence is known before it
//! ever plays and any point in it can be sampled with [`RevealSequence::frame`].

use std::ops::Range;

/// The subset of an element's style a reveal is allowed to touch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisualState {
    pub opacity: f64,
    pub x: f64,
    pub y: f64,
    pub scale_x: f64,
    pub scale_y: f64,
    pub rotate: f64,
}

impl VisualState {
    pub const IDENTITY: VisualState = VisualState {
        opacity: 1.0,
        x: 0.0,
        y: 0.0,
        scale_x: 1.0,
        scale_y: 1.0,
        rotate: 0.0,
    };

    /// Fully transparent, otherwise untransformed.
    pub const HIDDEN: VisualState = VisualState {
        opacity: 0.0,
        ..VisualState::IDENTITY
    };

    pub const fn opacity(self, opacity: f64) -> Self {
        Self { opacity, ..self }
    }

    pub const fn x(self, x: f64) -> Self {
        Self { x, ..self }
    }

    pub const fn y(self, y: f64) -> Self {
        Self { y, ..self }
    }

    pub const fn scale(self, scale: f64) -> Self {
        Self {
            scale_x: scale,
            scale_y: scale,
            ..self
        }
    }

    pub const fn scale_x(self, scale_x: f64) -> Self {
        Self { scale_x, ..self }
    }

    pub const fn scale_y(self, scale_y: f64) -> Self {
        Self { scale_y, ..self }
    }

    pub const fn rotate(self, rotate: f64) -> Self {
        Self { rotate, ..self }
    }

    pub fn lerp(from: &VisualState, to: &VisualState, t: f64) -> VisualState {
        let mix = |a: f64, b: f64| a + (b - a) * t;
        VisualState {
            opacity: mix(from.opacity, to.opacity),
            x: mix(from.x, to.x),
            y: mix(from.y, to.y),
            scale_x: mix(from.scale_x, to.scale_x),
            scale_y: mix(from.scale_y, to.scale_y),
            rotate: mix(from.rotate, to.rotate),
        }
    }

    /// CSS `opacity` value, clamped since overshooting eases can leave `[0, 1]`.
    pub fn css_opacity(&self) -> String {
        format!("{}", self.opacity.clamp(0.0, 1.0))
    }

    /// CSS `transform` value.
    pub fn css_transform(&self) -> String {
        format!(
            "translate({}px, {}px) rotate({}deg) scale({}, {})",
            self.x, self.y, self.rotate, self.scale_x, self.scale_y
        )
    }
}

impl Default for VisualState {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Easing curves, named after the tween families the page was designed with.
/// `PowerOut(2)` is a cubic ease-out, `PowerOut(3)` a quartic one, and so on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Ease {
    Linear,
    PowerOut(u8),
    PowerInOut(u8),
    /// Overshoots past the target before settling.
    BackOut(f64),
}

impl Ease {
    pub fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match *self {
            Ease::Linear => t,
            Ease::PowerOut(power) => 1.0 - (1.0 - t).powi(i32::from(power) + 1),
            Ease::PowerInOut(power) => {
                let exp = i32::from(power) + 1;
                if t < 0.5 {
                    (2.0 * t).powi(exp) / 2.0
                } else {
                    1.0 - (2.0 * (1.0 - t)).powi(exp) / 2.0
                }
            }
            Ease::BackOut(overshoot) => {
                let u = t - 1.0;
                1.0 + (overshoot + 1.0) * u.powi(3) + overshoot * u.powi(2)
            }
        }
    }
}

/// Where a step starts, in seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Position {
    /// Relative to the running cursor, i.e. the summed durations of every
    /// earlier step. Negative offsets overlap the previous steps.
    AfterPrevious(f64),
    /// Relative to the start of the previous step.
    WithPrevious(f64),
    /// Absolute time from the start of the sequence.
    At(f64),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    pub from: VisualState,
    pub to: VisualState,
    /// Seconds.
    pub duration: f64,
    pub ease: Ease,
}

impl Tween {
    pub fn new(from: VisualState, to: VisualState, duration: f64) -> Self {
        Self {
            from,
            to,
            duration: duration.max(0.0),
            ease: Ease::Linear,
        }
    }

    pub fn ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    fn sample(&self, elapsed: f64) -> VisualState {
        let progress = if self.duration <= 0.0 {
            1.0
        } else {
            (elapsed / self.duration).clamp(0.0, 1.0)
        };
        VisualState::lerp(&self.from, &self.to, self.ease.apply(progress))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RevealStep {
    /// Index into the element list of the owning section.
    pub target: usize,
    pub tween: Tween,
}

/// A step with its resolved start and end times.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScheduledStep {
    pub target: usize,
    pub start: f64,
    pub end: f64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RevealSequence {
    steps: Vec<RevealStep>,
    schedule: Vec<ScheduledStep>,
}

impl RevealSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a step at the running cursor.
    pub fn then(self, target: usize, tween: Tween) -> Self {
        self.then_at(target, tween, Position::AfterPrevious(0.0))
    }

    pub fn then_at(mut self, target: usize, tween: Tween, position: Position) -> Self {
        let cursor: f64 = self.steps.iter().map(|step| step.tween.duration).sum();
        let previous_start = self.schedule.last().map_or(0.0, |step| step.start);
        let start = match position {
            Position::AfterPrevious(offset) => cursor + offset,
            Position::WithPrevious(offset) => previous_start + offset,
            Position::At(at) => at,
        }
        .max(0.0);

        self.schedule.push(ScheduledStep {
            target,
            start,
            end: start + tween.duration,
        });
        self.steps.push(RevealStep { target, tween });
        self
    }

    /// Adds one step per target, the first placed at `first` and each next one
    /// `each` seconds after the one before it.
    pub fn stagger(
        mut self,
        targets: Range<usize>,
        first: Position,
        each: f64,
        mut tween_for: impl FnMut(usize) -> Tween,
    ) -> Self {
        for (i, target) in targets.enumerate() {
            let position = if i == 0 {
                first
            } else {
                Position::WithPrevious(each)
            };
            self = self.then_at(target, tween_for(target), position);
        }
        self
    }

    #[cfg(test)]
    pub fn schedule(&self) -> &[ScheduledStep] {
        &self.schedule
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn total_duration(&self) -> f64 {
        self.schedule
            .iter()
            .map(|step| step.end)
            .fold(0.0, f64::max)
    }

    pub fn target_count(&self) -> usize {
        self.steps
            .iter()
            .map(|step| step.target + 1)
            .max()
            .unwrap_or(0)
    }

    /// Samples every animated target at `time` seconds.
    ///
    /// When several steps drive the same target the last step that has already
    /// started wins; a target none of whose steps have started shows the `from`
    /// state of its first step.
    pub fn frame(&self, time: f64) -> Vec<(usize, VisualState)> {
        let mut states: Vec<Option<(VisualState, bool)>> = vec![None; self.target_count()];

        for (step, slot) in self.steps.iter().zip(&self.schedule) {
            let entry = &mut states[slot.target];
            if time >= slot.start {
                *entry = Some((step.tween.sample(time - slot.start), true));
            } else if entry.is_none() {
                *entry = Some((step.tween.from, false));
            }
        }

        states
            .into_iter()
            .enumerate()
            .filter_map(|(target, state)| state.map(|(state, _)| (target, state)))
            .collect()
    }

    #[cfg(test)]
    pub fn initial_frame(&self) -> Vec<(usize, VisualState)> {
        self.frame(0.0)
    }

    #[cfg(test)]
    pub fn final_frame(&self) -> Vec<(usize, VisualState)> {
        self.frame(self.total_duration())
    }
}
