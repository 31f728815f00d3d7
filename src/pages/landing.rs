use yew::prelude::*;

use crate::components::cta::Cta;
use crate::components::footer::Footer;
use crate::components::hero::StickyHero;
use crate::components::services::Services;

#[function_component(Landing)]
pub fn landing() -> Html {
    html! {
        <main class="landing-page">
            <StickyHero />
            <Services />
            <Cta />
            <Footer />
            <style>
                {r#"
                    html {
                        scroll-behavior: smooth;
                    }

                    body {
                        margin: 0;
                        background: #000;
                    }

                    .landing-page {
                        min-height: 100vh;
                        background: #000;
                        color: #fff;
                        font-family: ui-sans-serif, system-ui, sans-serif;
                    }

                    .landing-page h1,
                    .landing-page h2,
                    .landing-page h3,
                    .landing-page p {
                        margin: 0;
                    }

                    .gradient-text {
                        background: linear-gradient(90deg, #67e8f9, #38bdf8, #3b82f6);
                        -webkit-background-clip: text;
                        background-clip: text;
                        color: transparent;
                    }

                    .section-title {
                        font-size: 1.875rem;
                        font-weight: 600;
                    }

                    @media (min-width: 768px) {
                        .section-title {
                            font-size: 3rem;
                        }
                    }

                    .section-lead {
                        margin: 1rem auto 0 auto !important;
                        max-width: 48rem;
                        color: rgba(255, 255, 255, 0.7);
                    }

                    .pill-link {
                        border-radius: 9999px;
                        background: rgba(255, 255, 255, 0.1);
                        padding: 0.5rem 1rem;
                        font-size: 0.875rem;
                        color: #fff;
                        text-decoration: none;
                        transition: background 150ms ease;
                    }

                    .pill-link:hover {
                        background: rgba(255, 255, 255, 0.2);
                    }

                    .pill-link--primary {
                        background: #06b6d4;
                        color: #000;
                        font-weight: 500;
                    }

                    .pill-link--primary:hover {
                        background: #22d3ee;
                    }

                    .pill-link--outline {
                        background: transparent;
                        border: 1px solid rgba(255, 255, 255, 0.2);
                        color: rgba(255, 255, 255, 0.9);
                    }

                    .pill-link--large {
                        padding: 0.75rem 1.5rem;
                        font-weight: 600;
                    }
                "#}
            </style>
        </main>
    }
}
