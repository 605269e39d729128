use yew::prelude::*;

use crate::components::vertical_timeline::VerticalTimeline;
use crate::content::TimelineStep;
use crate::reveal::{use_node_refs, use_scroll_reveal, Ease, Position, RevealOptions, RevealSequence, Threshold, Tween, VisualState};

#[derive(Properties, PartialEq)]
pub struct TimelineProps {
    pub anchor: &'static str,
    pub steps: &'static [TimelineStep],
}

/// Line first, then checkpoints popping in from alternating sides while the
/// line is still drawing.
fn track_sequence(count: usize) -> RevealSequence {
    (0..count).fold(
        RevealSequence::new().then(
            0,
            Tween::new(VisualState::IDENTITY.scale_x(0.0), VisualState::IDENTITY, 1.5)
                .ease(Ease::PowerInOut(2)),
        ),
        |sequence, i| {
            let y_start = if i % 2 == 0 { 50.0 } else { -50.0 };
            sequence.then_at(
                i + 1,
                Tween::new(VisualState::HIDDEN.y(y_start), VisualState::IDENTITY, 0.7)
                    .ease(Ease::BackOut(1.7)),
                Position::AfterPrevious(-1.2),
            )
        },
    )
}

#[function_component(Timeline)]
pub fn timeline(props: &TimelineProps) -> Html {
    let count = props.steps.len();
    let track = use_node_ref();
    let targets = use_node_refs(count + 1);
    let sequence = use_memo(|count| track_sequence(*count), count);
    use_scroll_reveal(
        track.clone(),
        targets.clone(),
        sequence,
        RevealOptions::once(Threshold::top(0.8)),
    );

    html! {
        <section id={props.anchor} class="timeline-section">
            <div class="timeline-inner">
                <h2>{"How It Works"}</h2>
                <p class="timeline-lead">{"Three steps from curiosity to clarity."}</p>

                <div class="timeline-desktop" ref={track}>
                    <div class="timeline-line" ref={targets[0].clone()}></div>
                    <div class="timeline-checkpoints">
                        { for props.steps.iter().enumerate().map(|(i, step)| html! {
                            <div class="checkpoint-column" key={step.step} ref={targets[i + 1].clone()}>
                                <div class="checkpoint">
                                    <div class="checkpoint-dot">
                                        <span>{step.step.to_string()}</span>
                                    </div>
                                </div>
                                <div class="timeline-card">
                                    <h3>{step.title}</h3>
                                    <p>{step.description}</p>
                                </div>
                            </div>
                        }) }
                    </div>
                </div>

                <div class="timeline-mobile">
                    <VerticalTimeline steps={props.steps} />
                </div>
            </div>
            <style>
                {r#"
                .timeline-section {
                    padding: 5rem 1.5rem;
                    background: linear-gradient(180deg, #eef2ff 0%, #ffffff 100%);
                }
                .timeline-inner {
                    max-width: 64rem;
                    margin: 0 auto;
                    text-align: center;
                }
                .timeline-inner h2 {
                    font-size: 2.25rem;
                    font-weight: 800;
                    color: #111827;
                }
                .timeline-lead {
                    margin: 1rem 0 4rem 0;
                    color: #4b5563;
                }
                .timeline-desktop {
                    display: none;
                    position: relative;
                }
                .timeline-line {
                    position: absolute;
                    top: 1.5rem;
                    left: 0;
                    right: 0;
                    height: 0.25rem;
                    background: #c7d2fe;
                    border-radius: 9999px;
                    transform-origin: left center;
                }
                .timeline-checkpoints {
                    position: relative;
                    display: flex;
                    justify-content: space-between;
                }
                .checkpoint-column {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    width: 30%;
                }
                .checkpoint-dot {
                    width: 3rem;
                    height: 3rem;
                    border-radius: 9999px;
                    background: #4f46e5;
                    color: #ffffff;
                    font-weight: 700;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    box-shadow: 0 0 0 6px #e0e7ff;
                }
                .timeline-card {
                    margin-top: 1.5rem;
                    background: #ffffff;
                    border-radius: 1rem;
                    padding: 1.5rem;
                    box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.08);
                    text-align: left;
                }
                .timeline-card h3 {
                    font-size: 1.125rem;
                    font-weight: 700;
                    color: #111827;
                }
                .timeline-card p {
                    margin-top: 0.5rem;
                    color: #4b5563;
                }
                @media (min-width: 768px) {
                    .timeline-desktop {
                        display: block;
                    }
                    .timeline-mobile {
                        display: none;
                    }
                }
                "#}
            </style>
        </section>
    }
}
