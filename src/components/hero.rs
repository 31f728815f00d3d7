use yew::prelude::*;

use crate::components::icons::Icon;
use crate::components::world_map::WorldMap;
use crate::content::{self, BRAND, COMPANY_NAME_EN, COMPANY_NAME_TH, CONTACT_ANCHOR, SERVICES_ANCHOR};
use crate::hooks::use_scroll_frame;
use crate::scroll::ScrollAnimationMapper;

#[function_component(StickyHero)]
pub fn sticky_hero() -> Html {
    let frame = use_scroll_frame(ScrollAnimationMapper::default());
    let slide = content::slide(frame.slide_index);

    html! {
        <section class="hero">
            <div class="hero__stage">
                <div class="hero__aura" style={format!("opacity: {:.3};", frame.aura_opacity)}></div>
                <div class="hero__grid"></div>

                <div class="hero__map-wrap">
                    <div class="hero__map" style={format!("transform: {};", frame.transform())}>
                        <div class="hero__map-glow" style={format!("opacity: {:.3};", frame.glow_opacity)}></div>
                        <div class="hero__map-panel">
                            <WorldMap opacity={frame.opacity_blend} />
                        </div>
                    </div>
                </div>

                <div class="hero__overlay">
                    <div class="hero__content">
                        <div class="hero__badge">
                            <Icon kind={slide.icon} class="hero__badge-icon" />
                            <span>{BRAND}</span>
                        </div>
                        <h1 class="hero__title">
                            <span class="gradient-text">{slide.title}</span>
                        </h1>
                        <p class="hero__subtitle">{slide.subtitle}</p>
                    </div>
                </div>

                <div class="hero__scroll-tip">
                    <div class="hero__scroll-pill">{"เลื่อนลงเพื่อดูรายละเอียด"}</div>
                </div>

                <div class="hero__nav">
                    <div class="hero__brand">
                        {COMPANY_NAME_TH}
                        <span class="hero__dot">{"•"}</span>
                        {COMPANY_NAME_EN}
                    </div>
                    <div class="hero__links">
                        <a href={format!("#{}", SERVICES_ANCHOR)} class="pill-link">{"บริการ"}</a>
                        <a href={format!("#{}", CONTACT_ANCHOR)} class="pill-link pill-link--primary">{"ติดต่อเรา"}</a>
                    </div>
                </div>
            </div>
            <style>
                {r#"
                    .hero {
                        position: relative;
                        height: 360vh;
                        background: #000;
                    }

                    .hero__stage {
                        position: sticky;
                        top: 0;
                        height: 100vh;
                        overflow: hidden;
                    }

                    .hero__aura {
                        pointer-events: none;
                        position: absolute;
                        inset: 0;
                        background: radial-gradient(60% 50% at 50% 50%, rgba(40, 160, 255, 0.25), rgba(0, 0, 0, 0.9));
                    }

                    .hero__grid {
                        position: absolute;
                        inset: 0;
                        background-image:
                            linear-gradient(rgba(255, 255, 255, 0.06) 1px, transparent 1px),
                            linear-gradient(90deg, rgba(255, 255, 255, 0.06) 1px, transparent 1px);
                        background-size: 80px 80px;
                    }

                    .hero__map-wrap {
                        position: absolute;
                        inset: 0;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        perspective: 1600px;
                    }

                    .hero__map {
                        position: relative;
                        width: min(90vw, 1000px);
                        height: min(50vh, 500px);
                        transition: transform 75ms ease-out;
                        will-change: transform;
                    }

                    .hero__map-glow {
                        position: absolute;
                        inset: 0;
                        border-radius: 1rem;
                        background: linear-gradient(90deg, rgba(6, 182, 212, 0.1), rgba(59, 130, 246, 0.1), rgba(168, 85, 247, 0.1));
                        filter: blur(64px);
                    }

                    .hero__map-panel {
                        position: relative;
                        height: 100%;
                        width: 100%;
                        overflow: hidden;
                        border-radius: 1rem;
                        border: 1px solid rgba(255, 255, 255, 0.05);
                        background: rgba(15, 23, 42, 0.3);
                        backdrop-filter: blur(4px);
                    }

                    .world-map {
                        height: 100%;
                        width: 100%;
                    }

                    .world-map__graticule path {
                        fill: none;
                        stroke: rgba(255, 255, 255, 0.25);
                        stroke-width: 0.5;
                    }

                    .world-map__office circle {
                        fill: rgba(0, 200, 255, 0.8);
                    }

                    .world-map__office .world-map__pulse {
                        fill: rgba(0, 200, 255, 0.2);
                        animation: pulse 2s ease-out infinite;
                        transform-box: fill-box;
                        transform-origin: center;
                    }

                    @keyframes pulse {
                        from { transform: scale(0.4); opacity: 1; }
                        to { transform: scale(1.6); opacity: 0; }
                    }

                    .hero__overlay {
                        pointer-events: none;
                        position: absolute;
                        inset: 0;
                        z-index: 10;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                    }

                    .hero__content {
                        width: 100%;
                        max-width: 56rem;
                        padding: 0 1.5rem;
                        text-align: center;
                        transition: all 500ms ease-out;
                    }

                    .hero__badge {
                        display: inline-flex;
                        align-items: center;
                        gap: 0.5rem;
                        border-radius: 9999px;
                        border: 1px solid rgba(255, 255, 255, 0.2);
                        background: rgba(0, 0, 0, 0.2);
                        padding: 0.5rem 1rem;
                        backdrop-filter: blur(12px);
                        font-size: 0.75rem;
                        letter-spacing: 0.025em;
                        color: rgba(255, 255, 255, 0.9);
                    }

                    .hero__badge-icon {
                        height: 1rem;
                        width: 1rem;
                        color: #fff;
                    }

                    .hero__title {
                        margin-top: 1rem;
                        font-size: clamp(32px, 5vw, 72px);
                        font-weight: 600;
                        line-height: 1.1;
                        filter: drop-shadow(0 25px 25px rgba(0, 0, 0, 0.15));
                    }

                    .hero__subtitle {
                        margin-top: 0.75rem;
                        font-size: 1rem;
                        color: rgba(255, 255, 255, 0.9);
                    }

                    @media (min-width: 768px) {
                        .hero__subtitle {
                            font-size: 1.125rem;
                        }
                    }

                    .hero__scroll-tip {
                        pointer-events: none;
                        position: absolute;
                        bottom: 1.5rem;
                        left: 50%;
                        z-index: 20;
                        transform: translateX(-50%);
                    }

                    .hero__scroll-pill {
                        border-radius: 9999px;
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        background: rgba(255, 255, 255, 0.05);
                        padding: 0.25rem 0.75rem;
                        font-size: 0.75rem;
                        color: rgba(255, 255, 255, 0.6);
                        animation: bounce 1s infinite;
                    }

                    @keyframes bounce {
                        0%, 100% { transform: translateY(-25%); animation-timing-function: cubic-bezier(0.8, 0, 1, 1); }
                        50% { transform: none; animation-timing-function: cubic-bezier(0, 0, 0.2, 1); }
                    }

                    .hero__nav {
                        pointer-events: none;
                        position: absolute;
                        top: 0;
                        left: 0;
                        right: 0;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        padding: 1.25rem 1.5rem;
                    }

                    .hero__brand {
                        pointer-events: auto;
                        user-select: none;
                        font-size: 0.875rem;
                        font-weight: 500;
                        letter-spacing: 0.025em;
                        color: rgba(255, 255, 255, 0.8);
                    }

                    .hero__dot {
                        margin: 0 0.5rem;
                        color: rgba(255, 255, 255, 0.3);
                    }

                    .hero__links {
                        pointer-events: auto;
                        display: none;
                        gap: 0.75rem;
                    }

                    @media (min-width: 768px) {
                        .hero__nav {
                            padding: 1.25rem 2.5rem;
                        }
                        .hero__links {
                            display: flex;
                        }
                    }
                "#}
            </style>
        </section>
    }
}
