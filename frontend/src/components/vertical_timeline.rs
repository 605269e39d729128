use yew::prelude::*;

use crate::content::TimelineStep;
use crate::reveal::{use_node_refs, use_scroll_reveal, Ease, Position, RevealOptions, RevealSequence, Threshold, Tween, VisualState};

#[derive(Properties, PartialEq)]
pub struct VerticalTimelineProps {
    pub steps: &'static [TimelineStep],
}

/// Narrow-screen timeline: the spine grows downwards, then the cards slide in
/// from alternating sides, each overlapping the one before.
#[function_component(VerticalTimeline)]
pub fn vertical_timeline(props: &VerticalTimelineProps) -> Html {
    let count = props.steps.len();
    let container = use_node_ref();
    // Target 0 is the spine, then one per card.
    let targets = use_node_refs(count + 1);
    let sequence = use_memo(
        |count| {
            (0..*count).fold(
                RevealSequence::new().then(
                    0,
                    Tween::new(VisualState::IDENTITY.scale_y(0.0), VisualState::IDENTITY, 1.2)
                        .ease(Ease::PowerInOut(2)),
                ),
                |sequence, i| {
                    let x_start = if i % 2 == 0 { -40.0 } else { 40.0 };
                    sequence.then_at(
                        i + 1,
                        Tween::new(VisualState::HIDDEN.x(x_start), VisualState::IDENTITY, 0.6)
                            .ease(Ease::BackOut(1.7)),
                        Position::AfterPrevious(-0.9),
                    )
                },
            )
        },
        count,
    );
    use_scroll_reveal(
        container.clone(),
        targets.clone(),
        sequence,
        RevealOptions::once(Threshold::top(0.85)),
    );

    html! {
        <div class="vtimeline" ref={container}>
            <div class="vtimeline-spine" ref={targets[0].clone()}></div>
            <div class="vtimeline-steps">
                { for props.steps.iter().enumerate().map(|(i, step)| html! {
                    <div class="vtimeline-step" key={step.step}>
                        <div class="checkpoint">
                            <div class="checkpoint-dot">
                                <span>{step.step.to_string()}</span>
                            </div>
                        </div>
                        <div class="timeline-card" ref={targets[i + 1].clone()}>
                            <h3>{step.title}</h3>
                            <p>{step.description}</p>
                        </div>
                    </div>
                }) }
            </div>
            <style>
                {r#"
                .vtimeline {
                    position: relative;
                }
                .vtimeline-spine {
                    position: absolute;
                    left: 1.5rem;
                    top: 0;
                    height: 100%;
                    width: 0.25rem;
                    background: #c7d2fe;
                    border-radius: 9999px;
                    transform-origin: center top;
                }
                .vtimeline-steps {
                    display: flex;
                    flex-direction: column;
                    gap: 2rem;
                }
                .vtimeline-step {
                    position: relative;
                    padding-left: 4rem;
                }
                .vtimeline-step .checkpoint {
                    position: absolute;
                    left: 0;
                    top: 0;
                }
                "#}
            </style>
        </div>
    }
}
