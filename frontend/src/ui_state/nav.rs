/// "Scrolled past the hero" flag. A pure function of the scroll offset: set
/// strictly above `threshold`, cleared at or below it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrolledFlag {
    threshold: f64,
    scrolled: bool,
}

impl ScrolledFlag {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            scrolled: false,
        }
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    /// Returns whether the flag changed.
    pub fn update(&mut self, offset: f64) -> bool {
        let scrolled = offset > self.threshold;
        let changed = scrolled != self.scrolled;
        self.scrolled = scrolled;
        changed
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HoverFlag {
    hovered: bool,
}

impl HoverFlag {
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    pub fn enter(&mut self) -> bool {
        let changed = !self.hovered;
        self.hovered = true;
        changed
    }

    pub fn leave(&mut self) -> bool {
        let changed = self.hovered;
        self.hovered = false;
        changed
    }
}

/// Hover dropdown panel. It stays mounted while it animates out, so leaving
/// goes through `Leaving` before `Hidden`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelPresence {
    #[default]
    Hidden,
    Shown,
    Leaving,
}

impl PanelPresence {
    pub fn enter(self) -> PanelPresence {
        PanelPresence::Shown
    }

    pub fn leave(self) -> PanelPresence {
        match self {
            PanelPresence::Shown => PanelPresence::Leaving,
            other => other,
        }
    }

    /// The exit animation ran out. Ignored if the pointer came back meanwhile.
    pub fn exit_finished(self) -> PanelPresence {
        match self {
            PanelPresence::Leaving => PanelPresence::Hidden,
            other => other,
        }
    }

    pub fn is_mounted(self) -> bool {
        self != PanelPresence::Hidden
    }

    pub fn is_open(self) -> bool {
        self == PanelPresence::Shown
    }
}

/// Desktop header: the navigation row slides open while the page is scrolled
/// or the pointer is over the header.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeaderState {
    pub scrolled: ScrolledFlag,
    pub hover: HoverFlag,
}

impl HeaderState {
    pub fn new(threshold: f64) -> Self {
        Self {
            scrolled: ScrolledFlag::new(threshold),
            hover: HoverFlag::default(),
        }
    }

    pub fn is_expanded(&self) -> bool {
        self.scrolled.is_scrolled() || self.hover.is_hovered()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scrolled_toggles_exactly_at_threshold() {
        let mut flag = ScrolledFlag::new(50.0);

        assert!(!flag.update(49.0));
        assert!(!flag.update(50.0));
        assert!(!flag.is_scrolled());

        assert!(flag.update(50.5));
        assert!(flag.is_scrolled());
        assert!(!flag.update(400.0));

        assert!(flag.update(50.0));
        assert!(!flag.is_scrolled());
    }

    #[test]
    fn test_scrolled_is_a_function_of_offset() {
        let offsets = [0.0, 120.0, 10.0, 51.0, 50.0, 3000.0, 49.9];
        let mut flag = ScrolledFlag::new(50.0);
        for offset in offsets {
            flag.update(offset);
            assert_eq!(flag.is_scrolled(), offset > 50.0, "offset {offset}");
        }
    }

    #[test]
    fn test_hover_reports_changes_only() {
        let mut hover = HoverFlag::default();
        assert!(hover.enter());
        assert!(!hover.enter());
        assert!(hover.leave());
        assert!(!hover.leave());
    }

    #[test]
    fn test_panel_stays_mounted_while_leaving() {
        let panel = PanelPresence::default();
        assert!(!panel.is_mounted());

        let panel = panel.enter();
        assert!(panel.is_open());

        let panel = panel.leave();
        assert_eq!(panel, PanelPresence::Leaving);
        assert!(panel.is_mounted());
        assert!(!panel.is_open());

        let panel = panel.exit_finished();
        assert_eq!(panel, PanelPresence::Hidden);
        assert!(!panel.is_mounted());
    }

    #[test]
    fn test_panel_reentered_before_exit_finishes() {
        let panel = PanelPresence::Shown.leave().enter();
        assert_eq!(panel, PanelPresence::Shown);
        assert_eq!(panel.exit_finished(), PanelPresence::Shown);
    }

    #[test]
    fn test_panel_leave_when_hidden_is_noop() {
        assert_eq!(PanelPresence::Hidden.leave(), PanelPresence::Hidden);
        assert_eq!(PanelPresence::Hidden.exit_finished(), PanelPresence::Hidden);
    }

    #[test]
    fn test_header_expands_when_scrolled_or_hovered() {
        let mut header = HeaderState::new(50.0);
        assert!(!header.is_expanded());

        header.hover.enter();
        assert!(header.is_expanded());
        header.hover.leave();
        assert!(!header.is_expanded());

        header.scrolled.update(200.0);
        assert!(header.is_expanded());
        header.hover.enter();
        header.hover.leave();
        assert!(header.is_expanded());
    }
}
