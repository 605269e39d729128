//! Teardown tests against a real DOM.
//! Run with `wasm-pack test --headless --firefox frontend`.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Element, Event, HtmlElement, HtmlFormElement, HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::topbar::Topbar;
use crate::config::STATUS_DISMISS_MS;
use crate::dom::WindowListener;
use crate::reveal::{
    use_node_refs, use_reveal_trigger, use_scroll_reveal, AnimatorHandle, RevealOptions, RevealSequence,
    Threshold, TriggerMode, TriggerSignal, Tween, VisualState,
};
use crate::sections::feedback::{Feedback, FeedbackProps};

wasm_bindgen_test_configure!(run_in_browser);

// ============================================================================
// Helpers
// ============================================================================

fn document() -> web_sys::Document {
    web_sys::window().unwrap().document().unwrap()
}

fn mount_point() -> Element {
    let root = document().create_element("div").unwrap();
    document().body().unwrap().append_child(&root).unwrap();
    root
}

fn find<T: JsCast>(root: &Element, selector: &str) -> T {
    root.query_selector(selector)
        .unwrap()
        .unwrap_or_else(|| panic!("nothing matches {selector}"))
        .dyn_into::<T>()
        .unwrap()
}

fn fire(event: &str) {
    let event = Event::new(event).unwrap();
    web_sys::window().unwrap().dispatch_event(&event).unwrap();
}

fn opacity(element: &HtmlElement) -> f64 {
    element
        .style()
        .get_property_value("opacity")
        .unwrap()
        .parse()
        .unwrap()
}

fn body_overflow() -> String {
    document()
        .body()
        .unwrap()
        .style()
        .get_property_value("overflow")
        .unwrap()
}

async fn settle(ms: u32) {
    TimeoutFuture::new(ms).await;
}

// ============================================================================
// Fixtures
// ============================================================================

#[derive(Properties)]
struct RevealFixtureProps {
    handle: Rc<RefCell<Option<AnimatorHandle>>>,
}

impl PartialEq for RevealFixtureProps {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.handle, &other.handle)
    }
}

/// One target fading in over two seconds, already in view when mounted.
#[function_component(RevealFixture)]
fn reveal_fixture(props: &RevealFixtureProps) -> Html {
    let region = use_node_ref();
    let targets = use_node_refs(1);
    let sequence = use_memo(
        |_| RevealSequence::new().then(0, Tween::new(VisualState::HIDDEN, VisualState::IDENTITY, 2.0)),
        (),
    );
    let animator = use_scroll_reveal(
        region.clone(),
        targets.clone(),
        sequence,
        RevealOptions::once(Threshold::top(1.0)),
    );
    *props.handle.borrow_mut() = Some(animator);

    html! {
        <div ref={region} style="height: 100px;">
            <div class="reveal-target" ref={targets[0].clone()}>{"revealing"}</div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct TriggerFixtureProps {
    on_signal: Callback<TriggerSignal>,
}

#[function_component(TriggerFixture)]
fn trigger_fixture(props: &TriggerFixtureProps) -> Html {
    let region = use_node_ref();
    use_reveal_trigger(
        region.clone(),
        Threshold::top(1.0),
        TriggerMode::Reversible,
        props.on_signal.clone(),
    );

    html! {
        <div class="trigger-region" ref={region} style="height: 100px;"></div>
    }
}

// ============================================================================
// Reveal teardown
// ============================================================================

#[wasm_bindgen_test]
async fn test_unmount_mid_reveal_stops_the_animation() {
    let root = mount_point();
    let handle = Rc::new(RefCell::new(None::<AnimatorHandle>));
    let app = yew::Renderer::<RevealFixture>::with_root_and_props(
        root.clone(),
        RevealFixtureProps {
            handle: handle.clone(),
        },
    )
    .render();
    settle(300).await;

    let target: HtmlElement = find(&root, ".reveal-target");
    let animator = handle.borrow().clone().expect("fixture rendered");
    assert!(animator.is_driving());
    let mid = opacity(&target);
    assert!(mid > 0.0 && mid < 1.0, "expected a mid-play opacity, got {mid}");

    app.destroy();
    settle(50).await;
    assert!(!animator.is_driving());
    assert!(!animator.is_playing());

    let frozen = opacity(&target);
    settle(300).await;
    assert_eq!(opacity(&target), frozen);

    root.remove();
}

#[wasm_bindgen_test]
async fn test_trigger_is_silent_after_unmount() {
    let root = mount_point();
    let signals = Rc::new(RefCell::new(Vec::new()));
    let on_signal = {
        let signals = signals.clone();
        Callback::from(move |signal: TriggerSignal| signals.borrow_mut().push(signal))
    };
    let app = yew::Renderer::<TriggerFixture>::with_root_and_props(
        root.clone(),
        TriggerFixtureProps { on_signal },
    )
    .render();
    settle(50).await;
    assert_eq!(*signals.borrow(), vec![TriggerSignal::Reveal]);

    // Push the region below the fold: the live listener conceals it.
    let region: HtmlElement = find(&root, ".trigger-region");
    region.style().set_property("margin-top", "5000px").unwrap();
    fire("scroll");
    assert_eq!(
        *signals.borrow(),
        vec![TriggerSignal::Reveal, TriggerSignal::Conceal]
    );

    app.destroy();
    settle(50).await;
    region.style().remove_property("margin-top").unwrap();
    fire("scroll");
    fire("resize");
    assert_eq!(signals.borrow().len(), 2);

    root.remove();
}

#[wasm_bindgen_test]
fn test_window_listener_detaches_on_drop() {
    let hits = Rc::new(Cell::new(0));
    let listener = {
        let hits = hits.clone();
        WindowListener::new("resize", move || hits.set(hits.get() + 1))
    };
    assert!(listener.is_some());

    fire("resize");
    assert_eq!(hits.get(), 1);

    drop(listener);
    fire("resize");
    assert_eq!(hits.get(), 1);
}

// ============================================================================
// Mobile menu scroll lock
// ============================================================================

#[wasm_bindgen_test]
async fn test_topbar_unmount_with_menu_open_unlocks_body() {
    let root = mount_point();
    let app = yew::Renderer::<Topbar>::with_root(root.clone()).render();
    settle(50).await;
    assert_eq!(body_overflow(), "");

    find::<HtmlElement>(&root, ".burger-menu").click();
    settle(50).await;
    assert_eq!(body_overflow(), "hidden");

    app.destroy();
    settle(50).await;
    assert_eq!(body_overflow(), "");

    root.remove();
}

#[wasm_bindgen_test]
async fn test_topbar_backdrop_click_unlocks_body() {
    let root = mount_point();
    let app = yew::Renderer::<Topbar>::with_root(root.clone()).render();
    settle(50).await;

    find::<HtmlElement>(&root, ".burger-menu").click();
    settle(50).await;
    assert_eq!(body_overflow(), "hidden");

    find::<HtmlElement>(&root, ".mobile-menu-backdrop").click();
    settle(50).await;
    assert_eq!(body_overflow(), "");
    assert!(root.query_selector(".mobile-menu").unwrap().is_none());

    app.destroy();
    root.remove();
}

// ============================================================================
// Feedback submission
// ============================================================================

fn mount_feedback(root: &Element) -> yew::AppHandle<Feedback> {
    yew::Renderer::<Feedback>::with_root_and_props(root.clone(), FeedbackProps { anchor: "contact" })
        .render()
}

/// Fills in a valid submission and returns the name input.
fn fill_feedback(root: &Element) -> HtmlInputElement {
    let name: HtmlInputElement = find(root, "input[name=name]");
    name.set_value("Jane Doe");
    find::<HtmlInputElement>(root, "input[name=email]").set_value("jane@email.com");
    find::<HtmlTextAreaElement>(root, "textarea[name=message]").set_value("More evening slots please.");
    name
}

fn toast_text(root: &Element) -> Option<String> {
    root.query_selector(".status-toast")
        .unwrap()
        .and_then(|toast| toast.text_content())
}

#[wasm_bindgen_test]
async fn test_feedback_sends_resets_and_dismisses() {
    let root = mount_point();
    let app = mount_feedback(&root);
    settle(50).await;

    let name = fill_feedback(&root);
    find::<HtmlFormElement>(&root, "form.feedback-form")
        .request_submit()
        .unwrap();
    settle(50).await;
    assert!(toast_text(&root).unwrap_or_default().contains("Sending"));

    // Mock transport answers after 800 ms.
    settle(1200).await;
    assert!(toast_text(&root).unwrap_or_default().contains("Thanks"));
    assert_eq!(name.value(), "");

    settle(STATUS_DISMISS_MS + 300).await;
    assert_eq!(toast_text(&root), None);

    app.destroy();
    root.remove();
}

#[wasm_bindgen_test]
async fn test_feedback_result_after_unmount_is_dropped() {
    let root = mount_point();
    let app = mount_feedback(&root);
    settle(50).await;

    let name = fill_feedback(&root);
    find::<HtmlFormElement>(&root, "form.feedback-form")
        .request_submit()
        .unwrap();
    settle(50).await;
    assert!(toast_text(&root).unwrap_or_default().contains("Sending"));

    app.destroy();
    settle(1200).await;
    // A completed send would have reset the form.
    assert_eq!(name.value(), "Jane Doe");

    root.remove();
}
