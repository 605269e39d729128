use gloo_timers::callback::Timeout;
use log::{debug, error, info};
use web_sys::{FormData, HtmlFormElement};
use yew::prelude::*;

use crate::components::status_toast::StatusToast;
use crate::config::{self, STATUS_DISMISS_MS};
use crate::feedback::{FeedbackSubmission, Topic};
use crate::reveal::{use_node_refs, use_scroll_reveal, Ease, Position, RevealOptions, RevealSequence, Threshold, Tween, VisualState};
use crate::ui_state::form::{FeedbackFormState, FormStatus, SubmitDecision};

/// Name, email, topic, message, consent, submit button.
const FIELD_COUNT: usize = 6;

#[derive(Properties, PartialEq)]
pub struct FeedbackProps {
    pub anchor: &'static str,
}

fn card_sequence() -> RevealSequence {
    RevealSequence::new().then(
        0,
        Tween::new(VisualState::HIDDEN.y(24.0), VisualState::IDENTITY, 0.7).ease(Ease::PowerOut(2)),
    )
}

fn fields_sequence() -> RevealSequence {
    RevealSequence::new().stagger(0..FIELD_COUNT, Position::At(0.1), 0.06, |_| {
        Tween::new(VisualState::HIDDEN.y(10.0), VisualState::IDENTITY, 0.5).ease(Ease::PowerOut(2))
    })
}

fn read_submission(form: &HtmlFormElement) -> Option<FeedbackSubmission> {
    let data = FormData::new_with_form(form).ok()?;
    let text = |key: &str| data.get(key).as_string().unwrap_or_default();
    Some(FeedbackSubmission {
        name: text("name"),
        email: text("email"),
        topic: Topic::from_value(&text("topic")),
        message: text("message"),
        consent: data.has("consent"),
        website: text("website"),
    })
}

#[function_component(Feedback)]
pub fn feedback(props: &FeedbackProps) -> Html {
    let section = use_node_ref();
    let card = use_node_refs(1);
    let card_seq = use_memo(|_| card_sequence(), ());
    use_scroll_reveal(
        section.clone(),
        card.clone(),
        card_seq,
        RevealOptions::reversible(Threshold::top(0.8)),
    );

    let form_ref = use_node_ref();
    let fields = use_node_refs(FIELD_COUNT);
    let fields_seq = use_memo(|_| fields_sequence(), ());
    use_scroll_reveal(
        form_ref.clone(),
        fields.clone(),
        fields_seq,
        RevealOptions::once(Threshold::top(0.8)),
    );

    let form_state = use_mut_ref(FeedbackFormState::default);
    let dismiss_timer = use_mut_ref(|| None::<Timeout>);
    let alive = use_mut_ref(|| true);
    let force_update = use_force_update();

    {
        let alive = alive.clone();
        let dismiss_timer = dismiss_timer.clone();
        use_effect_with_deps(
            move |_| {
                move || {
                    *alive.borrow_mut() = false;
                    dismiss_timer.borrow_mut().take();
                }
            },
            (),
        );
    }

    let onsubmit = {
        let form_ref = form_ref.clone();
        let form_state = form_state.clone();
        let dismiss_timer = dismiss_timer.clone();
        let alive = alive.clone();
        let force_update = force_update.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(form) = form_ref.cast::<HtmlFormElement>() else {
                return;
            };
            let Some(submission) = read_submission(&form) else {
                error!("Could not read the feedback form");
                return;
            };

            let decision = form_state.borrow_mut().submit(&submission);
            match decision {
                SubmitDecision::Send => {
                    dismiss_timer.borrow_mut().take();
                    force_update.force_update();

                    let form_state = form_state.clone();
                    let dismiss_timer = dismiss_timer.clone();
                    let alive = alive.clone();
                    let force_update = force_update.clone();
                    wasm_bindgen_futures::spawn_local(async move {
                        let result = config::feedback_transport().send(&submission).await;
                        if !*alive.borrow() {
                            return;
                        }
                        if let Err(e) = &result {
                            error!("Feedback submission failed: {}", e);
                        }
                        let sent = result.is_ok();
                        if !form_state.borrow_mut().complete(result) {
                            return;
                        }
                        if sent {
                            form.reset();
                        }

                        let timeout = {
                            let form_state = form_state.clone();
                            let force_update = force_update.clone();
                            Timeout::new(STATUS_DISMISS_MS, move || {
                                if form_state.borrow_mut().dismiss() {
                                    force_update.force_update();
                                }
                            })
                        };
                        *dismiss_timer.borrow_mut() = Some(timeout);
                        force_update.force_update();
                    });
                }
                SubmitDecision::DiscardedHoneypot => {
                    info!("Discarded feedback with a filled honeypot");
                    form.reset();
                }
                SubmitDecision::IgnoredBusy => {
                    debug!("Feedback already sending, ignoring resubmit");
                }
                SubmitDecision::Invalid(errors) => {
                    debug!("Feedback form has {} invalid field(s)", errors.len());
                    force_update.force_update();
                }
            }
        })
    };

    let state = form_state.borrow();
    let sending = state.status() == FormStatus::Sending;

    html! {
        <section id={props.anchor} class="feedback" ref={section}>
            <div class="feedback-card" ref={card[0].clone()}>
                <h2>{"We'd love your feedback"}</h2>
                <p class="feedback-lead">
                    {"Questions, ideas, or something not working? Tell us and we'll get back to you."}
                </p>

                <StatusToast toast={state.toast()} />

                if !state.errors().is_empty() {
                    <ul class="feedback-errors">
                        { for state.errors().iter().map(|err| html! {
                            <li>{err.to_string()}</li>
                        }) }
                    </ul>
                }

                <form class="feedback-form" ref={form_ref} {onsubmit} novalidate=true>
                    <div class="feedback-row">
                        <label ref={fields[0].clone()}>
                            <span>{"Name"}</span>
                            <input type="text" name="name" placeholder="Jane Doe" autocomplete="name" />
                        </label>
                        <label ref={fields[1].clone()}>
                            <span>{"Email"}</span>
                            <input type="email" name="email" placeholder="jane@email.com" autocomplete="email" />
                        </label>
                    </div>

                    <label ref={fields[2].clone()}>
                        <span>{"Topic"}</span>
                        <select name="topic">
                            { for Topic::ALL.iter().map(|topic| html! {
                                <option
                                    value={topic.value()}
                                    selected={*topic == Topic::default()}
                                >
                                    {topic.label()}
                                </option>
                            }) }
                        </select>
                    </label>

                    <label ref={fields[3].clone()}>
                        <span>{"Message"}</span>
                        <textarea name="message" rows="5" placeholder="Share your thoughts…"></textarea>
                    </label>

                    <label class="feedback-consent" ref={fields[4].clone()}>
                        <input type="checkbox" name="consent" />
                        <span>{"You may contact me about this feedback."}</span>
                    </label>

                    // Bots fill every field they find.
                    <input
                        type="text"
                        name="website"
                        class="feedback-honeypot"
                        tabindex="-1"
                        autocomplete="off"
                        aria-hidden="true"
                    />

                    <div ref={fields[5].clone()}>
                        <button type="submit" class="feedback-submit" disabled={sending}>
                            { if sending { "Sending…" } else { "Send feedback" } }
                        </button>
                    </div>
                </form>
            </div>
            <style>
                {r#"
                .feedback {
                    padding: 5rem 1.5rem;
                    background: linear-gradient(180deg, #ffffff 0%, #eff6ff 100%);
                }
                .feedback-card {
                    max-width: 42rem;
                    margin: 0 auto;
                    background: rgba(255, 255, 255, 0.8);
                    border-radius: 1.5rem;
                    padding: 2.5rem;
                    box-shadow: 0 20px 40px rgba(15, 23, 42, 0.08);
                }
                .feedback-card h2 {
                    font-size: 2rem;
                    font-weight: 800;
                    text-align: center;
                    color: #111827;
                }
                .feedback-lead {
                    text-align: center;
                    color: #4b5563;
                    margin: 0.75rem 0 2rem 0;
                }
                .feedback-errors {
                    margin: 0 0 1.5rem 0;
                    padding: 0.75rem 1rem 0.75rem 2rem;
                    border-radius: 0.75rem;
                    background: #fff1f2;
                    color: #be123c;
                }
                .feedback-form {
                    display: flex;
                    flex-direction: column;
                    gap: 1.25rem;
                }
                .feedback-row {
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 1.25rem;
                }
                .feedback-form label {
                    display: flex;
                    flex-direction: column;
                    gap: 0.5rem;
                    font-weight: 600;
                    color: #374151;
                }
                .feedback-form input,
                .feedback-form select,
                .feedback-form textarea {
                    border: 1px solid #d1d5db;
                    border-radius: 0.75rem;
                    padding: 0.75rem 1rem;
                    font: inherit;
                    font-weight: 400;
                }
                .feedback-form .feedback-consent {
                    flex-direction: row;
                    align-items: center;
                    font-weight: 400;
                }
                .feedback-honeypot {
                    position: absolute;
                    left: -10000px;
                    width: 1px;
                    height: 1px;
                    opacity: 0;
                }
                .feedback-submit {
                    width: 100%;
                    padding: 0.875rem 1.5rem;
                    background: #2563eb;
                    color: #ffffff;
                    font-weight: 600;
                    border: none;
                    border-radius: 0.75rem;
                    cursor: pointer;
                    transition: background 0.2s;
                }
                .feedback-submit:hover {
                    background: #1d4ed8;
                }
                .feedback-submit:disabled {
                    background: #93c5fd;
                    cursor: wait;
                }
                @media (min-width: 640px) {
                    .feedback-row {
                        grid-template-columns: 1fr 1fr;
                    }
                }
                "#}
            </style>
        </section>
    }
}
