use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found">
            <h1>{"404"}</h1>
            <p>{"This page wandered off. Let's get you back on track."}</p>
            <Link<Route> to={Route::Home} classes="not-found-link">
                {"Back to home"}
            </Link<Route>>
            <style>
                {r#"
                .not-found {
                    min-height: 100vh;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    gap: 1rem;
                    font-family: system-ui, sans-serif;
                    text-align: center;
                    padding: 0 1.5rem;
                }
                .not-found h1 {
                    font-size: 4rem;
                    font-weight: 800;
                    color: #2563eb;
                    margin: 0;
                }
                .not-found p {
                    color: #4b5563;
                }
                .not-found-link {
                    padding: 0.75rem 1.5rem;
                    background: #2563eb;
                    color: #ffffff;
                    border-radius: 0.5rem;
                    text-decoration: none;
                    font-weight: 600;
                }
                "#}
            </style>
        </div>
    }
}
