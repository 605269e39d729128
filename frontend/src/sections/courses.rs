use log::info;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::content::{Plan, PlanAction};
use crate::dom;
use crate::reveal::{use_node_refs, use_scroll_reveal, Ease, Position, RevealOptions, RevealSequence, Threshold, Tween, VisualState};

#[derive(Properties, PartialEq)]
pub struct CoursesProps {
    pub anchor: &'static str,
    pub plans: &'static [Plan],
}

fn title_sequence() -> RevealSequence {
    RevealSequence::new().then(
        0,
        Tween::new(VisualState::HIDDEN.y(-30.0), VisualState::IDENTITY, 1.0).ease(Ease::PowerOut(3)),
    )
}

fn cards_sequence(count: usize) -> RevealSequence {
    RevealSequence::new().stagger(0..count, Position::At(0.0), 0.3, |_| {
        Tween::new(VisualState::HIDDEN.y(40.0), VisualState::IDENTITY, 1.0).ease(Ease::PowerOut(3))
    })
}

fn action_message(action: PlanAction) -> String {
    match action {
        PlanAction::Checkout(plan) => format!("Initiating payment gateway for: {}", plan),
        PlanAction::BookSession => "Redirecting to booking scheduler...".to_string(),
    }
}

#[function_component(Courses)]
pub fn courses(props: &CoursesProps) -> Html {
    let count = props.plans.len();

    let title = use_node_ref();
    let title_targets = use_node_refs(1);
    let title_seq = use_memo(|_| title_sequence(), ());
    use_scroll_reveal(
        title.clone(),
        title_targets.clone(),
        title_seq,
        RevealOptions::once(Threshold::top(0.8)),
    );

    let grid = use_node_ref();
    let card_targets = use_node_refs(count);
    let cards_seq = use_memo(|count| cards_sequence(*count), count);
    use_scroll_reveal(
        grid.clone(),
        card_targets.clone(),
        cards_seq,
        RevealOptions::once(Threshold::top(0.85)),
    );

    html! {
        <section id={props.anchor} class="courses">
            <div class="courses-inner">
                <div ref={title}>
                    <h2 class="courses-title" ref={title_targets[0].clone()}>
                        {"Courses & Pricing"}
                    </h2>
                </div>

                <div class="courses-grid" ref={grid}>
                    { for props.plans.iter().enumerate().map(|(i, plan)| {
                        let action = plan.action;
                        let onclick = Callback::from(move |_: MouseEvent| {
                            info!("Plan action: {:?}", action);
                            dom::alert(&action_message(action));
                        });
                        html! {
                            <div
                                key={plan.title}
                                class={classes!("course-card", plan.highlight.then_some("course-card-highlight"))}
                                ref={card_targets[i].clone()}
                            >
                                if plan.highlight {
                                    <span class="course-badge">{"Best Value"}</span>
                                }
                                <h3>{plan.title}</h3>
                                <p class="course-price">{plan.price}</p>
                                <button class="course-button" {onclick}>{plan.button}</button>
                            </div>
                        }
                    }) }
                </div>
            </div>
            <style>
                {r#"
                .courses {
                    padding: 5rem 1.5rem;
                    background: #f9fafb;
                }
                .courses-inner {
                    max-width: 72rem;
                    margin: 0 auto;
                }
                .courses-title {
                    font-size: 2.25rem;
                    font-weight: 800;
                    text-align: center;
                    color: #111827;
                    margin-bottom: 3rem;
                }
                .courses-grid {
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 2rem;
                }
                .course-card {
                    position: relative;
                    background: #ffffff;
                    border-radius: 1rem;
                    padding: 2rem;
                    text-align: center;
                    box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
                    border: 1px solid #e5e7eb;
                }
                .course-card-highlight {
                    border: 2px solid #2563eb;
                }
                .course-badge {
                    position: absolute;
                    top: -0.75rem;
                    left: 50%;
                    margin-left: -3rem;
                    width: 6rem;
                    background: #2563eb;
                    color: #ffffff;
                    font-size: 0.75rem;
                    font-weight: 700;
                    padding: 0.25rem 0;
                    border-radius: 9999px;
                }
                .course-card h3 {
                    font-size: 1.25rem;
                    font-weight: 700;
                    color: #111827;
                }
                .course-price {
                    font-size: 2.5rem;
                    font-weight: 800;
                    color: #2563eb;
                    margin: 1.5rem 0;
                }
                .course-button {
                    width: 100%;
                    padding: 0.75rem 1.5rem;
                    background: #2563eb;
                    color: #ffffff;
                    font-weight: 600;
                    border: none;
                    border-radius: 0.5rem;
                    cursor: pointer;
                    transition: background 0.2s;
                }
                .course-button:hover {
                    background: #1d4ed8;
                }
                @media (min-width: 768px) {
                    .courses-grid {
                        grid-template-columns: repeat(3, 1fr);
                    }
                }
                "#}
            </style>
        </section>
    }
}
