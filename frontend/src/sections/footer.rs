use chrono::Datelike;
use log::info;
use yew::prelude::*;

use crate::content::{NavLink, BRAND};

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub links: &'static [NavLink],
    pub contact: &'static [(&'static str, &'static str)],
    pub social: &'static [NavLink],
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let year = chrono::Local::now().year();

    let on_subscribe = Callback::from(|e: SubmitEvent| {
        e.prevent_default();
        info!("Newsletter signup submitted");
    });

    html! {
        <footer class="site-footer">
            <div class="site-footer-grid">
                <div>
                    <div class="site-footer-brand">{BRAND}</div>
                    <p>{"Helping students and professionals find the career that fits."}</p>
                </div>

                <div>
                    <h4>{"Quick Links"}</h4>
                    <ul>
                        { for props.links.iter().map(|link| html! {
                            <li key={link.label}><a href={link.href}>{link.label}</a></li>
                        }) }
                    </ul>
                </div>

                <div>
                    <h4>{"Contact"}</h4>
                    <ul>
                        { for props.contact.iter().map(|(icon, line)| html! {
                            <li key={*line}>
                                <span class="site-footer-icon">{*icon}</span>
                                {*line}
                            </li>
                        }) }
                    </ul>
                </div>

                <div>
                    <h4>{"Stay in the loop"}</h4>
                    <form class="site-footer-newsletter" onsubmit={on_subscribe}>
                        <input type="email" name="newsletter" placeholder="Your email" />
                        <button type="submit">{"Subscribe"}</button>
                    </form>
                    <div class="site-footer-social">
                        { for props.social.iter().map(|link| html! {
                            <a key={link.label} href={link.href} target="_blank" rel="noopener noreferrer">
                                {link.label}
                            </a>
                        }) }
                    </div>
                </div>
            </div>

            <div class="site-footer-bottom">
                {format!("© {} {} All rights reserved.", year, BRAND)}
            </div>
            <style>
                {r#"
                .site-footer {
                    background: #111827;
                    color: #d1d5db;
                    padding: 4rem 1.5rem 2rem 1.5rem;
                }
                .site-footer-grid {
                    max-width: 72rem;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 2.5rem;
                }
                .site-footer-brand {
                    font-size: 1.5rem;
                    font-weight: 800;
                    color: #ffffff;
                    margin-bottom: 0.75rem;
                }
                .site-footer h4 {
                    color: #ffffff;
                    font-weight: 700;
                    margin-bottom: 1rem;
                }
                .site-footer ul {
                    list-style: none;
                    padding: 0;
                    margin: 0;
                    display: flex;
                    flex-direction: column;
                    gap: 0.5rem;
                }
                .site-footer a {
                    color: #d1d5db;
                    text-decoration: none;
                    transition: color 0.2s;
                }
                .site-footer a:hover {
                    color: #ffffff;
                }
                .site-footer-icon {
                    margin-right: 0.5rem;
                }
                .site-footer-newsletter {
                    display: flex;
                    gap: 0.5rem;
                }
                .site-footer-newsletter input {
                    flex: 1;
                    padding: 0.5rem 0.75rem;
                    border-radius: 0.5rem;
                    border: 1px solid #374151;
                    background: #1f2937;
                    color: #ffffff;
                }
                .site-footer-newsletter button {
                    padding: 0.5rem 1rem;
                    border: none;
                    border-radius: 0.5rem;
                    background: #2563eb;
                    color: #ffffff;
                    font-weight: 600;
                    cursor: pointer;
                }
                .site-footer-social {
                    margin-top: 1.25rem;
                    display: flex;
                    gap: 1rem;
                    flex-wrap: wrap;
                }
                .site-footer-bottom {
                    max-width: 72rem;
                    margin: 3rem auto 0 auto;
                    padding-top: 1.5rem;
                    border-top: 1px solid #374151;
                    text-align: center;
                    font-size: 0.875rem;
                    color: #9ca3af;
                }
                @media (min-width: 768px) {
                    .site-footer-grid {
                        grid-template-columns: 2fr 1fr 1fr 2fr;
                    }
                }
                "#}
            </style>
        </footer>
    }
}
