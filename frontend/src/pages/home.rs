use yew::prelude::*;

use crate::components::topbar::Topbar;
use crate::content::{anchor, CONTACT_DETAILS, FEATURES, FOOTER_LINKS, PLANS, SOCIAL_LINKS, TESTIMONIALS, TIMELINE};
use crate::sections::{
    courses::Courses, feedback::Feedback, footer::Footer, hero::Hero, key_features::KeyFeatures,
    testimonials::Testimonials, timeline::Timeline,
};

/// The whole landing page, top to bottom. Sections share nothing but their
/// anchors, so each one owns its own reveal triggers and timers.
#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <div class="landing-page">
            <Topbar />
            <main>
                <Hero anchor={anchor::HOME} />
                <KeyFeatures anchor={anchor::CAREER_TESTS} features={FEATURES} />
                <Timeline anchor={anchor::HOW_IT_WORKS} steps={TIMELINE} />
                <Courses anchor={anchor::COURSES} plans={PLANS} />
                <Testimonials anchor={anchor::SUCCESS} testimonials={TESTIMONIALS} />
                <Feedback anchor={anchor::CONTACT} />
            </main>
            <Footer links={FOOTER_LINKS} contact={CONTACT_DETAILS} social={SOCIAL_LINKS} />
            <style>
                {r#"
                html {
                    scroll-behavior: smooth;
                }
                body {
                    margin: 0;
                    font-family: 'Inter', system-ui, -apple-system, sans-serif;
                    background: #ffffff;
                }
                .landing-page {
                    min-height: 100vh;
                    overflow-x: hidden;
                }
                .landing-page section {
                    scroll-margin-top: 6rem;
                }
                "#}
            </style>
        </div>
    }
}
