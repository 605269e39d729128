use web_sys::js_sys::Math;
use yew::prelude::*;

use crate::content::Testimonial;
use crate::reveal::{use_node_refs, use_scroll_reveal, Ease, Position, RevealOptions, RevealSequence, Threshold, Tween, VisualState};

#[derive(Properties, PartialEq)]
pub struct TestimonialsProps {
    pub anchor: &'static str,
    pub testimonials: &'static [Testimonial],
}

#[derive(Properties, PartialEq)]
struct TestimonialRowProps {
    testimonials: &'static [Testimonial],
    threshold: Threshold,
}

/// Start and resting tilt of one card, in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Tilt {
    from: f64,
    to: f64,
}

impl Tilt {
    fn random() -> Self {
        Self {
            from: random_between(-10.0, 10.0),
            to: random_between(-3.0, 3.0),
        }
    }
}

fn random_between(min: f64, max: f64) -> f64 {
    min + Math::random() * (max - min)
}

fn row_sequence(tilts: &[Tilt]) -> RevealSequence {
    RevealSequence::new().stagger(0..tilts.len(), Position::At(0.0), 0.2, |i| {
        Tween::new(
            VisualState::HIDDEN.x(90.0).rotate(tilts[i].from),
            VisualState::IDENTITY.rotate(tilts[i].to),
            0.9,
        )
        .ease(Ease::PowerOut(3))
    })
}

/// Slides in from the right when scrolled to, and back out when scrolled
/// above again. Each card keeps a slight random tilt.
#[function_component(TestimonialRow)]
fn testimonial_row(props: &TestimonialRowProps) -> Html {
    let count = props.testimonials.len();
    let row = use_node_ref();
    let targets = use_node_refs(count);
    let sequence = use_memo(
        |count| {
            let tilts: Vec<Tilt> = (0..*count).map(|_| Tilt::random()).collect();
            row_sequence(&tilts)
        },
        count,
    );
    use_scroll_reveal(
        row.clone(),
        targets.clone(),
        sequence,
        RevealOptions::reversible(props.threshold),
    );

    html! {
        <div class="testimonial-row" ref={row}>
            { for props.testimonials.iter().enumerate().map(|(i, t)| html! {
                <figure class="testimonial-card" key={t.name} ref={targets[i].clone()}>
                    <img class="testimonial-logo" src={t.company_logo} alt={t.company} />
                    <blockquote>{format!("“{}”", t.quote)}</blockquote>
                    <figcaption>
                        <img class="testimonial-avatar" src={t.avatar} alt={t.name} />
                        <div>
                            <div class="testimonial-name">{t.name}</div>
                            <div class="testimonial-role">{format!("{}, {}", t.role, t.company)}</div>
                        </div>
                    </figcaption>
                </figure>
            }) }
        </div>
    }
}

#[function_component(Testimonials)]
pub fn testimonials(props: &TestimonialsProps) -> Html {
    let half = props.testimonials.len().div_ceil(2);
    let (first, second) = props.testimonials.split_at(half);

    html! {
        <section id={props.anchor} class="testimonials">
            <div class="testimonials-inner">
                <h2>{"Success Stories"}</h2>
                <p class="testimonials-lead">{"Students and teams who found their direction with us."}</p>
                <TestimonialRow testimonials={first} threshold={Threshold::top(0.8)} />
                if !second.is_empty() {
                    <TestimonialRow testimonials={second} threshold={Threshold::top(0.85)} />
                }
            </div>
            <style>
                {r#"
                .testimonials {
                    padding: 5rem 1.5rem;
                    background: #ffffff;
                    overflow: hidden;
                }
                .testimonials-inner {
                    max-width: 64rem;
                    margin: 0 auto;
                }
                .testimonials-inner h2 {
                    font-size: 2.25rem;
                    font-weight: 800;
                    text-align: center;
                    color: #111827;
                }
                .testimonials-lead {
                    text-align: center;
                    color: #4b5563;
                    margin: 1rem 0 3rem 0;
                }
                .testimonial-row {
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 2rem;
                    margin-bottom: 2rem;
                }
                .testimonial-card {
                    margin: 0;
                    background: #f9fafb;
                    border-radius: 1.25rem;
                    padding: 2rem;
                    box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.08);
                }
                .testimonial-logo {
                    height: 1.5rem;
                }
                .testimonial-card blockquote {
                    margin: 1.25rem 0;
                    color: #374151;
                    font-size: 1.05rem;
                    line-height: 1.6;
                }
                .testimonial-card figcaption {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                }
                .testimonial-avatar {
                    width: 3rem;
                    height: 3rem;
                    border-radius: 9999px;
                }
                .testimonial-name {
                    font-weight: 700;
                    color: #111827;
                }
                .testimonial-role {
                    font-size: 0.875rem;
                    color: #6b7280;
                }
                @media (min-width: 768px) {
                    .testimonial-row {
                        grid-template-columns: repeat(2, 1fr);
                    }
                }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cards_settle_at_their_resting_tilt() {
        let tilts = [Tilt { from: -8.0, to: 2.0 }, Tilt { from: 6.0, to: -1.5 }];
        let sequence = row_sequence(&tilts);

        let initial = sequence.initial_frame();
        assert_eq!(initial[0].1, VisualState::HIDDEN.x(90.0).rotate(-8.0));

        let last = sequence.final_frame();
        assert_eq!(last[0].1.rotate, 2.0);
        assert_eq!(last[1].1.rotate, -1.5);
        assert_eq!(last[1].1.x, 0.0);
    }

    #[test]
    fn test_row_stagger() {
        let tilts = [Tilt { from: 0.0, to: 0.0 }; 2];
        let sequence = row_sequence(&tilts);
        assert!((sequence.schedule()[1].start - 0.2).abs() < 1e-9);
        assert!((sequence.total_duration() - 1.1).abs() < 1e-9);
    }
}
