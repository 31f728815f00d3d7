use yew::prelude::*;

use crate::content::{CONTACT_ANCHOR, CONTACT_EMAIL, SERVICES_ANCHOR};

#[function_component(Cta)]
pub fn cta() -> Html {
    html! {
        <section id={CONTACT_ANCHOR} class="cta">
            <div class="cta__inner">
                <h2 class="section-title">
                    {"ยกระดับ "}<span class="gradient-text">{"ข้อมูลของคุณ"}</span>{" ให้ไปได้ไกลกว่าเดิม"}
                </h2>
                <p class="section-lead">
                    {"เราช่วยออกแบบ ตั้งค่า และดูแลระบบ GIS • Drone Survey • e‑Service • Analytics ครบวงจร"}
                </p>
                <div class="cta__buttons">
                    <a href={format!("mailto:{}", CONTACT_EMAIL)} class="pill-link pill-link--primary pill-link--large">
                        {"ติดต่อเรา"}
                    </a>
                    <a href={format!("#{}", SERVICES_ANCHOR)} class="pill-link pill-link--outline pill-link--large">
                        {"ดูบริการ"}
                    </a>
                </div>
            </div>
            <style>
                {r#"
                    .cta {
                        position: relative;
                        background: #000;
                        padding: 6rem 0;
                        color: #fff;
                    }

                    .cta__inner {
                        margin: 0 auto;
                        width: 92%;
                        max-width: 64rem;
                        text-align: center;
                    }

                    .cta__buttons {
                        margin-top: 2rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        gap: 0.75rem;
                    }
                "#}
            </style>
        </section>
    }
}
