//! Scroll-triggered reveal animations.
//!
//! Sections describe *what* should animate as a [`RevealSequence`] and *when*
//! as [`RevealOptions`]; [`use_scroll_reveal`] wires the two together.

pub mod animator;
pub mod sequence;
pub mod trigger;

use std::rc::Rc;

use yew::prelude::*;

pub use animator::{use_sequenced_animator, AnimatorHandle, ReplayPolicy};
pub use sequence::{Ease, Position, RevealSequence, Tween, VisualState};
pub use trigger::{use_reveal_trigger, Threshold, TriggerMode, TriggerSignal};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealOptions {
    pub threshold: Threshold,
    pub mode: TriggerMode,
    pub policy: ReplayPolicy,
}

impl RevealOptions {
    /// Reveal the first time the threshold is crossed and leave it at that.
    pub const fn once(threshold: Threshold) -> Self {
        Self {
            threshold,
            mode: TriggerMode::Once,
            policy: ReplayPolicy::Ignore,
        }
    }

    /// Reveal on the way down, play backwards when scrolled back above it.
    pub const fn reversible(threshold: Threshold) -> Self {
        Self {
            threshold,
            mode: TriggerMode::Reversible,
            policy: ReplayPolicy::Restart,
        }
    }
}

/// A stable list of `count` node refs for a section's animated elements.
#[hook]
pub fn use_node_refs(count: usize) -> Vec<NodeRef> {
    let refs = use_memo(
        |count| (0..*count).map(|_| NodeRef::default()).collect::<Vec<_>>(),
        count,
    );
    (*refs).clone()
}

/// Plays `sequence` on `targets` when `region` crosses the configured threshold.
#[hook]
pub fn use_scroll_reveal(
    region: NodeRef,
    targets: Vec<NodeRef>,
    sequence: Rc<RevealSequence>,
    options: RevealOptions,
) -> AnimatorHandle {
    let animator = use_sequenced_animator(targets, sequence, options.policy);

    let on_signal = {
        let animator = animator.clone();
        Callback::from(move |signal: TriggerSignal| match signal {
            TriggerSignal::Reveal => animator.play(),
            TriggerSignal::Conceal => animator.reverse(),
        })
    };
    use_reveal_trigger(region, options.threshold, options.mode, on_signal);

    animator
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_presets() {
        let once = RevealOptions::once(Threshold::top(0.8));
        assert_eq!(once.mode, TriggerMode::Once);
        assert_eq!(once.policy, ReplayPolicy::Ignore);

        let reversible = RevealOptions::reversible(Threshold::top(0.85));
        assert_eq!(reversible.mode, TriggerMode::Reversible);
        assert_eq!(reversible.policy, ReplayPolicy::Restart);
        assert_eq!(reversible.threshold, Threshold::top(0.85));
    }
}
