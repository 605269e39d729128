use yew::prelude::*;

use crate::content::{Align, Feature};
use crate::reveal::{use_node_refs, use_scroll_reveal, Ease, RevealOptions, RevealSequence, Threshold, Tween, VisualState};

#[derive(Properties, PartialEq)]
pub struct KeyFeaturesProps {
    pub anchor: &'static str,
    pub features: &'static [Feature],
}

#[derive(Properties, PartialEq)]
struct FeatureCardProps {
    feature: Feature,
}

fn card_sequence() -> RevealSequence {
    RevealSequence::new().then(
        0,
        Tween::new(VisualState::HIDDEN.y(50.0), VisualState::IDENTITY, 0.8).ease(Ease::PowerInOut(1)),
    )
}

/// Each card reveals on its own once its middle reaches the bottom of the viewport.
#[function_component(FeatureCard)]
fn feature_card(props: &FeatureCardProps) -> Html {
    let feature = props.feature;
    let row = use_node_ref();
    let targets = use_node_refs(1);
    let sequence = use_memo(|_| card_sequence(), ());
    use_scroll_reveal(
        row.clone(),
        targets.clone(),
        sequence,
        RevealOptions::once(Threshold::center(1.0)),
    );

    let (row_class, tilt) = match feature.align {
        Align::Left => ("feature-row", "rotate(-3deg)"),
        Align::Right => ("feature-row feature-row-reversed", "rotate(3deg)"),
    };

    html! {
        <div class={row_class} ref={row}>
            <div class="feature-card" ref={targets[0].clone()}>
                <div
                    class="feature-card-tint"
                    style={format!("background-color: {}; transform: {};", feature.tint, tilt)}
                ></div>
                <div class="feature-card-body">
                    <div class="feature-icon">
                        <img src={feature.image} alt={feature.title} />
                    </div>
                    <div class="feature-copy">
                        <h3>{feature.title}</h3>
                        <p class="feature-subtitle">{feature.subtitle}</p>
                        <p>{feature.description}</p>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[function_component(KeyFeatures)]
pub fn key_features(props: &KeyFeaturesProps) -> Html {
    html! {
        <section id={props.anchor} class="key-features">
            <div class="key-features-heading">
                <h2>{"Key Features"}</h2>
                <p>{"Everything you need to choose a career with confidence."}</p>
            </div>
            <div class="key-features-list">
                { for props.features.iter().map(|feature| html! {
                    <FeatureCard key={feature.id} feature={*feature} />
                }) }
            </div>
            <style>
                {r#"
                .key-features {
                    padding: 5rem 1.5rem;
                    background: #ffffff;
                }
                .key-features-heading {
                    text-align: center;
                    margin-bottom: 4rem;
                }
                .key-features-heading h2 {
                    font-size: 2.25rem;
                    font-weight: 800;
                    color: #111827;
                }
                .key-features-heading p {
                    margin-top: 1rem;
                    color: #4b5563;
                    font-size: 1.125rem;
                }
                .key-features-list {
                    max-width: 64rem;
                    margin: 0 auto;
                    display: flex;
                    flex-direction: column;
                    gap: 4rem;
                }
                .feature-row {
                    display: flex;
                    justify-content: flex-start;
                }
                .feature-row-reversed {
                    justify-content: flex-end;
                }
                .feature-card {
                    position: relative;
                    max-width: 40rem;
                    width: 100%;
                }
                .feature-card-tint {
                    position: absolute;
                    inset: 0;
                    border-radius: 1.5rem;
                    z-index: 0;
                }
                .feature-card-body {
                    position: relative;
                    z-index: 1;
                    display: flex;
                    gap: 1.5rem;
                    align-items: center;
                    background: #ffffff;
                    border-radius: 1.5rem;
                    padding: 2rem;
                    box-shadow: 0 10px 25px rgba(0, 0, 0, 0.08);
                }
                .feature-icon img {
                    width: 5rem;
                    height: 5rem;
                    object-fit: contain;
                }
                .feature-copy h3 {
                    font-size: 1.5rem;
                    font-weight: 700;
                    color: #111827;
                }
                .feature-subtitle {
                    color: #2563eb;
                    font-weight: 600;
                    margin: 0.25rem 0 0.75rem 0;
                }
                .feature-copy p {
                    color: #4b5563;
                    line-height: 1.6;
                }
                @media (max-width: 640px) {
                    .feature-card-body {
                        flex-direction: column;
                        text-align: center;
                    }
                }
                "#}
            </style>
        </section>
    }
}
