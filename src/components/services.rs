use yew::prelude::*;

use crate::components::icons::Icon;
use crate::content::{SERVICES, SERVICES_ANCHOR};

#[function_component(Services)]
pub fn services() -> Html {
    html! {
        <section id={SERVICES_ANCHOR} class="services">
            <div class="services__inner">
                <div class="services__header">
                    <h2 class="section-title">
                        <span class="gradient-text">{"บริการของเรา"}</span>
                    </h2>
                    <p class="section-lead">
                        {"เราพัฒนาระบบสารสนเทศและโซลูชันด้านภูมิสารสนเทศแบบครบวงจร ตั้งแต่สำรวจพื้นที่ด้วยโดรนจนถึงระบบ e‑Service และรายงานสถิติระดับองค์กร"}
                    </p>
                </div>

                <div class="services__grid">
                    { for SERVICES.iter().map(|service| html! {
                        <div class="service-card">
                            <div class="service-card__icon">
                                <Icon kind={service.icon} />
                            </div>
                            <h3>{service.title}</h3>
                            <p class="service-card__th">{service.th}</p>
                            <p class="service-card__en">{service.en}</p>
                            <div class="service-card__glow"></div>
                        </div>
                    }) }
                </div>
            </div>
            <style>
                {r#"
                    .services {
                        position: relative;
                        background: linear-gradient(to bottom, #000, #020617);
                        padding: 6rem 0;
                        color: #fff;
                    }

                    .services__inner {
                        margin: 0 auto;
                        width: 92%;
                        max-width: 72rem;
                    }

                    .services__header {
                        margin: 0 auto 3rem auto;
                        max-width: 48rem;
                        text-align: center;
                    }

                    .services__grid {
                        display: grid;
                        gap: 1.5rem;
                    }

                    @media (min-width: 768px) {
                        .services__grid {
                            grid-template-columns: repeat(2, minmax(0, 1fr));
                        }
                    }

                    @media (min-width: 1024px) {
                        .services__grid {
                            grid-template-columns: repeat(3, minmax(0, 1fr));
                        }
                    }

                    .service-card {
                        position: relative;
                        overflow: hidden;
                        border-radius: 1.5rem;
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        background: rgba(255, 255, 255, 0.05);
                        padding: 1.5rem;
                        backdrop-filter: blur(8px);
                        transition: transform 150ms ease, background 150ms ease;
                    }

                    .service-card:hover {
                        transform: scale(1.01);
                        background: rgba(255, 255, 255, 0.1);
                    }

                    .service-card__icon {
                        display: inline-flex;
                        align-items: center;
                        justify-content: center;
                        margin-bottom: 1rem;
                        border-radius: 1rem;
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        background: rgba(255, 255, 255, 0.1);
                        padding: 0.75rem;
                    }

                    .service-card__icon .icon {
                        height: 1.5rem;
                        width: 1.5rem;
                    }

                    .service-card h3 {
                        font-size: 1.125rem;
                        font-weight: 600;
                    }

                    @media (min-width: 768px) {
                        .service-card h3 {
                            font-size: 1.25rem;
                        }
                    }

                    .service-card__th {
                        margin-top: 0.5rem;
                        font-size: 0.875rem;
                        line-height: 1.625;
                        color: rgba(255, 255, 255, 0.8);
                    }

                    .service-card__en {
                        margin-top: 0.5rem;
                        font-size: 0.75rem;
                        color: rgba(255, 255, 255, 0.5);
                    }

                    .service-card__glow {
                        pointer-events: none;
                        position: absolute;
                        bottom: -6rem;
                        right: 0;
                        height: 12rem;
                        width: 12rem;
                        border-radius: 9999px;
                        background: rgba(6, 182, 212, 0.1);
                        filter: blur(64px);
                        transition: all 500ms;
                    }

                    .service-card:hover .service-card__glow {
                        bottom: 0;
                    }
                "#}
            </style>
        </section>
    }
}
