use std::rc::Rc;

use gloo_timers::callback::Timeout;
use web_sys::{KeyboardEvent, MouseEvent};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config;
use crate::content::{NavItem, NavLink, BRAND, NAV_CALLS_TO_ACTION, NAV_ITEMS};
use crate::dom::{self, BodyScrollLock, WindowListener};
use crate::reveal::{use_node_refs, use_sequenced_animator, Position, ReplayPolicy, RevealSequence, Tween, VisualState};
use crate::ui_state::menu::{MenuEvent, MenuState, MobileMenu};
use crate::ui_state::nav::{HeaderState, PanelPresence};

pub enum HeaderAction {
    Scrolled(f64),
    HoverEnter,
    HoverLeave,
}

impl Reducible for HeaderState {
    type Action = HeaderAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = *self;
        let changed = match action {
            HeaderAction::Scrolled(offset) => next.scrolled.update(offset),
            HeaderAction::HoverEnter => next.hover.enter(),
            HeaderAction::HoverLeave => next.hover.leave(),
        };
        if changed {
            Rc::new(next)
        } else {
            self
        }
    }
}

pub enum PanelAction {
    Enter,
    Leave,
    ExitFinished,
}

impl Reducible for PanelPresence {
    type Action = PanelAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = match action {
            PanelAction::Enter => self.enter(),
            PanelAction::Leave => self.leave(),
            PanelAction::ExitFinished => self.exit_finished(),
        };
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

/// Panel pops in, then its links drop in one after another. Played backwards
/// on the way out.
fn panel_sequence(count: usize) -> RevealSequence {
    RevealSequence::new()
        .then(0, Tween::new(VisualState::HIDDEN.scale(0.95), VisualState::IDENTITY, 0.2))
        .stagger(1..count + 1, Position::At(0.05), 0.05, |_| {
            Tween::new(VisualState::HIDDEN.y(-10.0), VisualState::IDENTITY, 0.2)
        })
}

fn panel_exit_ms(count: usize) -> u32 {
    (panel_sequence(count).total_duration() * 1000.0).round() as u32
}

#[derive(Properties, PartialEq)]
struct DropdownProps {
    title: &'static str,
    links: &'static [NavLink],
}

#[function_component(Dropdown)]
fn dropdown(props: &DropdownProps) -> Html {
    let presence = use_reducer_eq(PanelPresence::default);
    let exit_timer = use_mut_ref(|| None::<Timeout>);
    let exit_ms = *use_memo(|count| panel_exit_ms(*count), props.links.len());

    let on_enter = {
        let dispatcher = presence.dispatcher();
        let exit_timer = exit_timer.clone();
        Callback::from(move |_: MouseEvent| {
            exit_timer.borrow_mut().take();
            dispatcher.dispatch(PanelAction::Enter);
        })
    };
    let on_leave = {
        let dispatcher = presence.dispatcher();
        Callback::from(move |_: MouseEvent| {
            dispatcher.dispatch(PanelAction::Leave);
            let dispatcher = dispatcher.clone();
            *exit_timer.borrow_mut() = Some(Timeout::new(exit_ms, move || {
                dispatcher.dispatch(PanelAction::ExitFinished);
            }));
        })
    };

    let open = presence.is_open();

    html! {
        <div class="nav-dropdown" onmouseenter={on_enter} onmouseleave={on_leave}>
            <button class="nav-link nav-dropdown-toggle">
                {props.title}
                <span class={classes!("chevron", open.then(|| "open"))}>{"▾"}</span>
            </button>
            if presence.is_mounted() {
                <DropdownPanel links={props.links} leaving={!open} />
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct DropdownPanelProps {
    links: &'static [NavLink],
    leaving: bool,
}

#[function_component(DropdownPanel)]
fn dropdown_panel(props: &DropdownPanelProps) -> Html {
    let count = props.links.len();
    let targets = use_node_refs(count + 1);
    let sequence = use_memo(|count| panel_sequence(*count), count);
    let animator = use_sequenced_animator(targets.clone(), sequence, ReplayPolicy::Ignore);

    use_effect_with_deps(
        move |leaving| {
            if *leaving {
                animator.reverse();
            } else {
                animator.play();
            }
            || ()
        },
        props.leaving,
    );

    html! {
        <div class="nav-dropdown-panel" ref={targets[0].clone()}>
            { for props.links.iter().enumerate().map(|(i, link)| html! {
                <a href={link.href} class="nav-dropdown-link" ref={targets[i + 1].clone()}>
                    {link.label}
                </a>
            }) }
        </div>
    }
}

#[function_component(Topbar)]
pub fn topbar() -> Html {
    let header = use_reducer_eq(|| HeaderState::new(config::SCROLL_THRESHOLD_PX));
    let header_ref = use_node_ref();
    let entrance = use_memo(
        |_| {
            RevealSequence::new().then(
                0,
                Tween::new(VisualState::HIDDEN.y(-20.0), VisualState::IDENTITY, 0.5),
            )
        },
        (),
    );
    let animator = use_sequenced_animator(vec![header_ref.clone()], entrance, ReplayPolicy::Ignore);

    {
        let dispatcher = header.dispatcher();
        use_effect_with_deps(
            move |_| {
                animator.play();
                let listener = {
                    let dispatcher = dispatcher.clone();
                    WindowListener::new("scroll", move || {
                        dispatcher.dispatch(HeaderAction::Scrolled(dom::scroll_offset()));
                    })
                };
                dispatcher.dispatch(HeaderAction::Scrolled(dom::scroll_offset()));
                move || drop(listener)
            },
            (),
        );
    }

    let menu = use_mut_ref(|| MobileMenu::new(BodyScrollLock));
    let menu_state = use_state_eq(|| MenuState::Closed);

    let on_menu_event = {
        let menu = menu.clone();
        let menu_state = menu_state.clone();
        Callback::from(move |event: MenuEvent| {
            let state = menu.borrow_mut().apply(event);
            menu_state.set(state);
        })
    };

    {
        let menu = menu.clone();
        use_effect_with_deps(
            move |_| move || menu.borrow_mut().release(),
            (),
        );
    }

    {
        let on_menu_event = on_menu_event.clone();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if e.key() == "Escape" {
                on_menu_event.emit(MenuEvent::Escape);
            }
        });
    }

    let on_enter = {
        let dispatcher = header.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(HeaderAction::HoverEnter))
    };
    let on_leave = {
        let dispatcher = header.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(HeaderAction::HoverLeave))
    };
    let toggle_menu = on_menu_event.reform(|_: MouseEvent| MenuEvent::TriggerClick);
    let close_on_backdrop = on_menu_event.reform(|_: MouseEvent| MenuEvent::BackdropClick);
    let close_on_link = on_menu_event.reform(|_: MouseEvent| MenuEvent::LinkClick);

    let expanded = header.is_expanded();
    let menu_open = menu_state.is_open();

    let mobile_links = NAV_ITEMS
        .iter()
        .flat_map(|item| match item {
            NavItem::Link(link) => std::slice::from_ref(link),
            NavItem::Dropdown { links, .. } => *links,
        })
        .chain(NAV_CALLS_TO_ACTION.iter());

    html! {
        <>
            <header
                ref={header_ref}
                class={classes!("topbar", expanded.then(|| "expanded"), header.scrolled.is_scrolled().then(|| "scrolled"))}
                onmouseenter={on_enter}
                onmouseleave={on_leave}
            >
                <div class="topbar-inner">
                    <a href="#home" class="brand">
                        <h1 class="brand-name">{BRAND}</h1>
                        <p class="brand-motto">{"your "}<span>{"learning "}</span>{"companion"}</p>
                    </a>

                    <nav class="topbar-nav" aria-hidden={(!expanded).to_string()}>
                        { for NAV_ITEMS.iter().map(|item| match item {
                            NavItem::Link(link) => html! {
                                <a href={link.href} class="nav-link">{link.label}</a>
                            },
                            NavItem::Dropdown { title, links } => html! {
                                <Dropdown title={*title} links={*links} />
                            },
                        }) }
                        <a href={NAV_CALLS_TO_ACTION[0].href} class="nav-link nav-link-strong">
                            {NAV_CALLS_TO_ACTION[0].label}
                        </a>
                        <a href={NAV_CALLS_TO_ACTION[1].href} class="nav-cta">
                            {NAV_CALLS_TO_ACTION[1].label}
                        </a>
                    </nav>

                    <button
                        class={classes!("burger-menu", menu_open.then(|| "open"))}
                        aria-label="Toggle menu"
                        aria-expanded={menu_open.to_string()}
                        onclick={toggle_menu}
                    >
                        <span></span>
                        <span></span>
                        <span></span>
                    </button>
                </div>
            </header>

            if menu_open {
                <>
                    <div class="mobile-menu-backdrop" onclick={close_on_backdrop}></div>
                    <nav class="mobile-menu">
                        { for mobile_links.map(|link| html! {
                            <a href={link.href} class="mobile-menu-link" onclick={close_on_link.clone()}>
                                {link.label}
                            </a>
                        }) }
                    </nav>
                </>
            }

            <style>
                {r#"
                .topbar {
                    position: fixed;
                    top: 1rem;
                    left: 0;
                    right: 0;
                    margin: 0 auto;
                    width: fit-content;
                    height: 4rem;
                    border-radius: 2rem;
                    z-index: 50;
                    background: rgba(255, 255, 255, 0.5);
                    backdrop-filter: blur(12px);
                    box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.1);
                    max-width: calc(100vw - 2rem);
                }
                .topbar-inner {
                    display: flex;
                    align-items: center;
                    height: 100%;
                    padding: 0 2rem;
                }
                .brand {
                    display: flex;
                    align-items: baseline;
                    margin-right: 1.5rem;
                    text-decoration: none;
                    flex-shrink: 0;
                }
                .brand-name {
                    font-size: 1.875rem;
                    font-weight: 700;
                    background: linear-gradient(to bottom right, #3b82f6, #8b5cf6);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                    margin: 0;
                }
                .brand-motto {
                    margin: 0 0 0 0.5rem;
                    color: #64748b;
                    display: none;
                }
                .brand-motto span {
                    color: #2563eb;
                }
                @media (min-width: 1280px) {
                    .brand-motto {
                        display: block;
                    }
                }
                .topbar-nav {
                    display: flex;
                    justify-content: flex-end;
                    align-items: center;
                    height: 100%;
                    gap: 1.5rem;
                    font-weight: 500;
                    overflow: hidden;
                    white-space: nowrap;
                    max-width: 0;
                    opacity: 0;
                    transition: max-width 0.5s cubic-bezier(0.4, 0, 0.2, 1), opacity 0.5s cubic-bezier(0.4, 0, 0.2, 1);
                }
                .topbar.expanded .topbar-nav {
                    max-width: 60em;
                    opacity: 1;
                    overflow: visible;
                }
                .nav-link {
                    color: #475569;
                    text-decoration: none;
                    background: none;
                    border: none;
                    font: inherit;
                    cursor: pointer;
                    transition: color 0.2s;
                }
                .nav-link:hover {
                    color: #000;
                }
                .nav-link-strong {
                    font-weight: 600;
                }
                .nav-cta {
                    color: #fff;
                    font-weight: 700;
                    padding: 0.25rem 0.75rem;
                    border-radius: 2rem;
                    text-decoration: none;
                    background: linear-gradient(to right, #2563eb, #818cf8);
                }
                .nav-dropdown {
                    position: relative;
                    height: 100%;
                    display: flex;
                    align-items: center;
                }
                .nav-dropdown-toggle {
                    display: flex;
                    align-items: center;
                    gap: 0.375rem;
                }
                .chevron {
                    display: inline-block;
                    transition: transform 0.3s;
                }
                .chevron.open {
                    transform: rotate(180deg);
                }
                .nav-dropdown-panel {
                    position: absolute;
                    top: 100%;
                    left: 0.5rem;
                    margin-top: -0.75rem;
                    width: max-content;
                    transform-origin: top left;
                    z-index: 30;
                    border-radius: 0.75rem;
                    background: rgba(255, 255, 255, 0.6);
                    backdrop-filter: blur(40px);
                    padding: 0.5rem;
                    box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.05);
                }
                .nav-dropdown-link {
                    display: block;
                    border-radius: 0.5rem;
                    padding: 0.5rem 0.75rem;
                    font-size: 0.875rem;
                    color: #475569;
                    text-decoration: none;
                }
                .nav-dropdown-link:hover {
                    background: #f1f5f9;
                    color: #000;
                }
                .burger-menu {
                    display: none;
                    flex-direction: column;
                    gap: 5px;
                    margin-left: auto;
                    background: none;
                    border: none;
                    cursor: pointer;
                    padding: 0.5rem;
                }
                .burger-menu span {
                    width: 24px;
                    height: 2px;
                    background: #334155;
                    transition: transform 0.3s, opacity 0.3s;
                }
                .burger-menu.open span:nth-child(1) {
                    transform: translateY(7px) rotate(45deg);
                }
                .burger-menu.open span:nth-child(2) {
                    opacity: 0;
                }
                .burger-menu.open span:nth-child(3) {
                    transform: translateY(-7px) rotate(-45deg);
                }
                .mobile-menu-backdrop {
                    position: fixed;
                    inset: 0;
                    background: rgba(15, 23, 42, 0.4);
                    z-index: 40;
                }
                .mobile-menu {
                    position: fixed;
                    top: 6rem;
                    left: 1rem;
                    right: 1rem;
                    z-index: 45;
                    display: flex;
                    flex-direction: column;
                    gap: 0.25rem;
                    padding: 1rem;
                    border-radius: 1.5rem;
                    background: rgba(255, 255, 255, 0.9);
                    backdrop-filter: blur(12px);
                }
                .mobile-menu-link {
                    padding: 0.75rem 1rem;
                    border-radius: 0.75rem;
                    color: #334155;
                    text-decoration: none;
                }
                .mobile-menu-link:hover {
                    background: #f1f5f9;
                }
                @media (max-width: 1024px) {
                    .topbar {
                        width: calc(100vw - 2rem);
                    }
                    .topbar-nav {
                        display: none;
                    }
                    .burger-menu {
                        display: flex;
                    }
                }
                "#}
            </style>
        </>
    }
}
