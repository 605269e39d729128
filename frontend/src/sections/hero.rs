use log::info;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::dom;
use crate::reveal::{use_node_refs, use_scroll_reveal, Ease, Position, RevealOptions, RevealSequence, Threshold, Tween, VisualState};

const BACKGROUND: &str = "https://user-gen-media-assets.s3.amazonaws.com/gpt4o_images/26c0bc7e-6e7b-49e4-b914-7456ff905c72.png";
const PORTRAIT: &str = "https://user-gen-media-assets.s3.amazonaws.com/gpt4o_images/8fd65eec-570e-4a5a-be16-062426b19b0a.png";

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub anchor: &'static str,
}

fn banner_sequence() -> RevealSequence {
    RevealSequence::new()
        .then(
            0,
            Tween::new(VisualState::HIDDEN.scale(1.1), VisualState::IDENTITY.opacity(0.3), 2.0)
                .ease(Ease::PowerOut(2)),
        )
        .then_at(
            1,
            Tween::new(VisualState::HIDDEN.x(100.0), VisualState::IDENTITY, 1.5).ease(Ease::PowerOut(3)),
            Position::At(1.0),
        )
        .then_at(
            2,
            Tween::new(VisualState::HIDDEN.y(20.0), VisualState::IDENTITY, 1.0).ease(Ease::PowerOut(1)),
            Position::WithPrevious(0.2),
        )
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let banner = use_node_ref();
    let targets = use_node_refs(3);
    let sequence = use_memo(|_| banner_sequence(), ());
    // Already in view on load, so this plays straight away.
    use_scroll_reveal(
        banner.clone(),
        targets.clone(),
        sequence,
        RevealOptions::once(Threshold::top(1.0)),
    );

    let book_session = Callback::from(|_: MouseEvent| {
        info!("Counselling booking requested from hero");
        dom::alert("Open calendar/scheduling form");
    });

    html! {
        <section id={props.anchor} class="hero" ref={banner}>
            <div class="hero-bg" ref={targets[0].clone()} style={format!("background-image: url('{}');", BACKGROUND)}></div>

            <img
                src={PORTRAIT}
                alt="Working professionals"
                class="hero-img"
                ref={targets[1].clone()}
            />

            <div class="hero-text" ref={targets[2].clone()}>
                <h1>{"Discover Your True Career Path with Learnify"}</h1>
                <p>{"Scientifically designed tests and expert counselling for a future that fits you."}</p>
                <div class="hero-cta-group">
                    <a href="/test-registration" class="hero-cta hero-cta-primary">
                        {"Take a Test Now"}
                    </a>
                    <button class="hero-cta hero-cta-secondary" onclick={book_session}>
                        {"Book a Counselling Session"}
                    </button>
                </div>
            </div>

            <style>
                {r#"
                .hero {
                    position: relative;
                    min-height: 100vh;
                    width: 100%;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: space-between;
                    padding: 7rem 2.5rem 2.5rem 2.5rem;
                    box-sizing: border-box;
                    overflow: hidden;
                    background: #f9fafb;
                }
                .hero-bg {
                    position: absolute;
                    inset: 0;
                    background-size: cover;
                    background-position: center;
                }
                .hero-img {
                    position: relative;
                    z-index: 10;
                    max-width: 24rem;
                    width: 100%;
                    border-radius: 0.5rem;
                    box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
                }
                .hero-text {
                    position: relative;
                    z-index: 10;
                    max-width: 36rem;
                    text-align: center;
                    margin-top: 2rem;
                }
                .hero-text h1 {
                    font-size: 2.25rem;
                    font-weight: 800;
                    color: #111827;
                }
                .hero-text p {
                    margin-top: 1rem;
                    font-size: 1.125rem;
                    color: #374151;
                }
                .hero-cta-group {
                    margin-top: 2rem;
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                    justify-content: center;
                }
                .hero-cta {
                    display: inline-block;
                    padding: 0.75rem 1.5rem;
                    color: #fff;
                    font-size: 1.125rem;
                    font-weight: 600;
                    border: none;
                    border-radius: 0.375rem;
                    text-decoration: none;
                    cursor: pointer;
                    transition: background 0.2s;
                }
                .hero-cta-primary {
                    background: #2563eb;
                }
                .hero-cta-primary:hover {
                    background: #1d4ed8;
                }
                .hero-cta-secondary {
                    background: #16a34a;
                }
                .hero-cta-secondary:hover {
                    background: #15803d;
                }
                @media (min-width: 640px) {
                    .hero-cta-group {
                        flex-direction: row;
                    }
                }
                @media (min-width: 768px) {
                    .hero {
                        flex-direction: row;
                    }
                    .hero-text {
                        text-align: left;
                        margin: 0 0 0 3rem;
                    }
                    .hero-text h1 {
                        font-size: 3rem;
                    }
                    .hero-cta-group {
                        justify-content: flex-start;
                    }
                }
                "#}
            </style>
        </section>
    }
}
