#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEvent {
    TriggerClick,
    Escape,
    BackdropClick,
    LinkClick,
}

impl MenuState {
    pub fn next(self, event: MenuEvent) -> MenuState {
        match (self, event) {
            (MenuState::Closed, MenuEvent::TriggerClick) => MenuState::Open,
            (MenuState::Open, _) => MenuState::Closed,
            (MenuState::Closed, _) => MenuState::Closed,
        }
    }

    pub fn is_open(self) -> bool {
        self == MenuState::Open
    }
}

/// Document-level scroll suspension. Only the mobile menu drives it.
pub trait ScrollLock {
    fn lock(&self);
    fn unlock(&self);
}

/// Mobile menu that keeps background scroll locked exactly while it is open.
///
/// Every way of closing the menu, including dropping it, unlocks scroll.
#[derive(Debug)]
pub struct MobileMenu<L: ScrollLock> {
    state: MenuState,
    lock: L,
    locked: bool,
}

impl<L: ScrollLock> MobileMenu<L> {
    pub fn new(lock: L) -> Self {
        Self {
            state: MenuState::Closed,
            lock,
            locked: false,
        }
    }

    #[cfg(test)]
    pub fn state(&self) -> MenuState {
        self.state
    }

    pub fn apply(&mut self, event: MenuEvent) -> MenuState {
        self.state = self.state.next(event);
        match (self.state, self.locked) {
            (MenuState::Open, false) => {
                self.lock.lock();
                self.locked = true;
            }
            (MenuState::Closed, true) => self.release(),
            _ => {}
        }
        self.state
    }

    /// Closes the menu and restores scroll regardless of the current state.
    pub fn release(&mut self) {
        self.state = MenuState::Closed;
        self.lock.unlock();
        self.locked = false;
    }
}

impl<L: ScrollLock> Drop for MobileMenu<L> {
    fn drop(&mut self) {
        if self.locked {
            self.release();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct RecordingLock {
        locked: Rc<Cell<bool>>,
        lock_calls: Rc<Cell<u32>>,
    }

    impl ScrollLock for RecordingLock {
        fn lock(&self) {
            self.locked.set(true);
            self.lock_calls.set(self.lock_calls.get() + 1);
        }

        fn unlock(&self) {
            self.locked.set(false);
        }
    }

    const CLOSE_PATHS: [MenuEvent; 4] = [
        MenuEvent::TriggerClick,
        MenuEvent::Escape,
        MenuEvent::BackdropClick,
        MenuEvent::LinkClick,
    ];

    #[test]
    fn test_transition_table() {
        assert_eq!(MenuState::Closed.next(MenuEvent::TriggerClick), MenuState::Open);
        for event in CLOSE_PATHS {
            assert_eq!(MenuState::Open.next(event), MenuState::Closed, "{event:?}");
        }
        for event in [MenuEvent::Escape, MenuEvent::BackdropClick, MenuEvent::LinkClick] {
            assert_eq!(MenuState::Closed.next(event), MenuState::Closed, "{event:?}");
        }
    }

    #[test]
    fn test_every_close_path_restores_scroll() {
        for event in CLOSE_PATHS {
            let lock = RecordingLock::default();
            let mut menu = MobileMenu::new(lock.clone());

            menu.apply(MenuEvent::TriggerClick);
            assert!(menu.state().is_open());
            assert!(lock.locked.get());

            menu.apply(event);
            assert_eq!(menu.state(), MenuState::Closed, "{event:?}");
            assert!(!lock.locked.get(), "{event:?} left scroll locked");
        }
    }

    #[test]
    fn test_drop_while_open_restores_scroll() {
        let lock = RecordingLock::default();
        {
            let mut menu = MobileMenu::new(lock.clone());
            menu.apply(MenuEvent::TriggerClick);
            assert!(lock.locked.get());
        }
        assert!(!lock.locked.get());
    }

    #[test]
    fn test_release_closes_and_unlocks() {
        let lock = RecordingLock::default();
        let mut menu = MobileMenu::new(lock.clone());
        menu.apply(MenuEvent::TriggerClick);
        menu.release();
        assert_eq!(menu.state(), MenuState::Closed);
        assert!(!lock.locked.get());
    }

    #[test]
    fn test_closed_menu_never_locks() {
        let lock = RecordingLock::default();
        let mut menu = MobileMenu::new(lock.clone());
        menu.apply(MenuEvent::Escape);
        menu.apply(MenuEvent::BackdropClick);
        assert_eq!(lock.lock_calls.get(), 0);
    }

    #[test]
    fn test_reopen_locks_again() {
        let lock = RecordingLock::default();
        let mut menu = MobileMenu::new(lock.clone());
        for _ in 0..3 {
            menu.apply(MenuEvent::TriggerClick);
            menu.apply(MenuEvent::Escape);
        }
        assert_eq!(lock.lock_calls.get(), 3);
        assert!(!lock.locked.get());
    }
}
