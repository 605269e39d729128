use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::debug;
use web_sys::Element;
use yew::prelude::*;

use crate::dom::WindowListener;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerState {
    Unarmed,
    Armed,
    Fired,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerMode {
    /// Fires the first time the region crosses the threshold, then stops watching.
    Once,
    /// Fires on every crossing and conceals again when the region moves back out.
    Reversible,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerSignal {
    Reveal,
    Conceal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Top,
    Center,
}

/// "Which edge of the region has to reach which fraction of the viewport".
/// `Threshold::top(0.8)` reads as "top of the region is 80% down the viewport".
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Threshold {
    pub edge: Edge,
    pub viewport_fraction: f64,
}

impl Threshold {
    pub const fn top(viewport_fraction: f64) -> Self {
        Self {
            edge: Edge::Top,
            viewport_fraction,
        }
    }

    pub const fn center(viewport_fraction: f64) -> Self {
        Self {
            edge: Edge::Center,
            viewport_fraction,
        }
    }

    pub fn is_crossed(&self, geometry: &RegionGeometry) -> bool {
        let edge_y = match self.edge {
            Edge::Top => geometry.top,
            Edge::Center => geometry.top + geometry.height / 2.0,
        };
        edge_y <= self.viewport_fraction * geometry.viewport_height
    }
}

/// Region position relative to the viewport, as reported by `getBoundingClientRect`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegionGeometry {
    pub top: f64,
    pub height: f64,
    pub viewport_height: f64,
}

impl RegionGeometry {
    /// A `display: none` region reports an empty rect at the top of the viewport.
    pub fn is_rendered(&self) -> bool {
        self.height > 0.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RevealTrigger {
    threshold: Threshold,
    mode: TriggerMode,
    state: TriggerState,
}

impl RevealTrigger {
    pub fn new(threshold: Threshold, mode: TriggerMode) -> Self {
        Self {
            threshold,
            mode,
            state: TriggerState::Unarmed,
        }
    }

    #[cfg(test)]
    pub fn state(&self) -> TriggerState {
        self.state
    }

    pub fn arm(&mut self) {
        if self.state == TriggerState::Unarmed {
            self.state = TriggerState::Armed;
        }
    }

    pub fn disarm(&mut self) {
        self.state = TriggerState::Unarmed;
    }

    pub fn should_keep_observing(&self) -> bool {
        match (self.state, self.mode) {
            (TriggerState::Unarmed, _) => false,
            (TriggerState::Fired, TriggerMode::Once) => false,
            _ => true,
        }
    }

    /// Regions that aren't rendered are skipped and leave the state untouched.
    pub fn observe(&mut self, geometry: RegionGeometry) -> Option<TriggerSignal> {
        if !geometry.is_rendered() {
            return None;
        }
        let crossed = self.threshold.is_crossed(&geometry);
        match (self.state, crossed, self.mode) {
            (TriggerState::Armed, true, _) => {
                self.state = TriggerState::Fired;
                Some(TriggerSignal::Reveal)
            }
            (TriggerState::Fired, false, TriggerMode::Reversible) => {
                self.state = TriggerState::Armed;
                Some(TriggerSignal::Conceal)
            }
            _ => None,
        }
    }
}

fn measure(region: &NodeRef) -> Option<RegionGeometry> {
    let element = region.cast::<Element>()?;
    let viewport_height = web_sys::window()?.inner_height().ok()?.as_f64()?;
    let rect = element.get_bounding_client_rect();
    Some(RegionGeometry {
        top: rect.top(),
        height: rect.height(),
        viewport_height,
    })
}

/// Watches `region` against `threshold` and emits a signal on every crossing
/// the trigger's mode allows.
///
/// The region is checked once right after mount, so anything already on screen
/// reveals without waiting for a scroll. Listeners are released on unmount, and
/// as soon as a one-shot trigger has fired.
#[hook]
pub fn use_reveal_trigger(
    region: NodeRef,
    threshold: Threshold,
    mode: TriggerMode,
    on_signal: Callback<TriggerSignal>,
) {
    use_effect_with_deps(
        move |_| {
            let trigger = Rc::new(RefCell::new(RevealTrigger::new(threshold, mode)));
            trigger.borrow_mut().arm();
            let listeners: Rc<RefCell<Vec<WindowListener>>> = Rc::default();

            let check = {
                let trigger = trigger.clone();
                let listeners = Rc::downgrade(&listeners);
                Rc::new(move || {
                    let Some(geometry) = measure(&region) else {
                        return;
                    };
                    let signal = trigger.borrow_mut().observe(geometry);
                    if let Some(signal) = signal {
                        debug!("Reveal trigger crossed: {:?} ({:?})", signal, threshold);
                        on_signal.emit(signal);
                    }
                    if !trigger.borrow().should_keep_observing() {
                        if let Some(listeners) = listeners.upgrade() {
                            let detached = std::mem::take(&mut *listeners.borrow_mut());
                            if !detached.is_empty() {
                                // Can't drop a listener from inside its own callback.
                                Timeout::new(0, move || drop(detached)).forget();
                            }
                        }
                    }
                })
            };

            for event in ["scroll", "resize"] {
                let check = check.clone();
                if let Some(listener) = WindowListener::new(event, move || check()) {
                    listeners.borrow_mut().push(listener);
                }
            }
            check();

            move || {
                listeners.borrow_mut().clear();
                trigger.borrow_mut().disarm();
            }
        },
        (),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: f64 = 1000.0;

    fn at(top: f64) -> RegionGeometry {
        RegionGeometry {
            top,
            height: 400.0,
            viewport_height: VIEWPORT,
        }
    }

    fn armed(mode: TriggerMode) -> RevealTrigger {
        let mut trigger = RevealTrigger::new(Threshold::top(0.8), mode);
        trigger.arm();
        trigger
    }

    #[test]
    fn test_starts_unarmed_and_ignores_crossings() {
        let mut trigger = RevealTrigger::new(Threshold::top(0.8), TriggerMode::Once);
        assert_eq!(trigger.state(), TriggerState::Unarmed);
        assert_eq!(trigger.observe(at(0.0)), None);
        assert!(!trigger.should_keep_observing());
    }

    #[test]
    fn test_threshold_boundary() {
        let threshold = Threshold::top(0.8);
        assert!(!threshold.is_crossed(&at(800.1)));
        assert!(threshold.is_crossed(&at(800.0)));
        assert!(threshold.is_crossed(&at(-50.0)));
    }

    #[test]
    fn test_center_threshold_needs_half_the_region() {
        let threshold = Threshold::center(1.0);
        // Region spans 900..1300: centre at 1100, below the fold.
        assert!(!threshold.is_crossed(&at(900.0)));
        // Region spans 750..1150: centre at 950.
        assert!(threshold.is_crossed(&at(750.0)));
    }

    #[test]
    fn test_once_fires_at_most_once() {
        let mut trigger = armed(TriggerMode::Once);
        let tops = [1200.0, 900.0, 700.0, 300.0, 1200.0, 700.0, 1200.0, 100.0];
        let fired = tops
            .iter()
            .filter_map(|top| trigger.observe(at(*top)))
            .collect::<Vec<_>>();

        assert_eq!(fired, vec![TriggerSignal::Reveal]);
        assert_eq!(trigger.state(), TriggerState::Fired);
        assert!(!trigger.should_keep_observing());
    }

    #[test]
    fn test_reversible_alternates() {
        let mut trigger = armed(TriggerMode::Reversible);
        let tops = [1200.0, 700.0, 600.0, 1200.0, 1300.0, 500.0, 900.0];
        let signals = tops
            .iter()
            .filter_map(|top| trigger.observe(at(*top)))
            .collect::<Vec<_>>();

        assert_eq!(
            signals,
            vec![
                TriggerSignal::Reveal,
                TriggerSignal::Conceal,
                TriggerSignal::Reveal,
                TriggerSignal::Conceal,
            ]
        );
        assert_eq!(trigger.state(), TriggerState::Armed);
        assert!(trigger.should_keep_observing());
    }

    #[test]
    fn test_fires_immediately_when_already_in_view() {
        let mut trigger = armed(TriggerMode::Once);
        assert_eq!(trigger.observe(at(0.0)), Some(TriggerSignal::Reveal));
    }

    #[test]
    fn test_hidden_region_stays_armed() {
        let mut trigger = armed(TriggerMode::Once);
        let hidden = RegionGeometry {
            top: 0.0,
            height: 0.0,
            viewport_height: VIEWPORT,
        };
        assert_eq!(trigger.observe(hidden), None);
        assert_eq!(trigger.state(), TriggerState::Armed);
        assert!(trigger.should_keep_observing());

        // Shown later, e.g. after a resize across the breakpoint.
        assert_eq!(trigger.observe(at(100.0)), Some(TriggerSignal::Reveal));
    }

    #[test]
    fn test_hidden_region_does_not_conceal() {
        let mut trigger = armed(TriggerMode::Reversible);
        trigger.observe(at(100.0));
        let hidden = RegionGeometry {
            top: 0.0,
            height: 0.0,
            viewport_height: VIEWPORT,
        };
        assert_eq!(trigger.observe(hidden), None);
        assert_eq!(trigger.state(), TriggerState::Fired);
    }

    #[test]
    fn test_disarm_releases() {
        let mut trigger = armed(TriggerMode::Reversible);
        trigger.observe(at(100.0));
        trigger.disarm();
        assert_eq!(trigger.state(), TriggerState::Unarmed);
        assert_eq!(trigger.observe(at(1200.0)), None);
        assert_eq!(trigger.observe(at(100.0)), None);
    }

    #[test]
    fn test_arm_does_not_reset_fired_trigger() {
        let mut trigger = armed(TriggerMode::Once);
        trigger.observe(at(100.0));
        trigger.arm();
        assert_eq!(trigger.state(), TriggerState::Fired);
    }
}
