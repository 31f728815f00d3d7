use chrono::{Datelike, Local};
use yew::prelude::*;

use crate::content::{COMPANY_NAME_EN, COMPANY_NAME_TH};

pub fn copyright(year: i32) -> String {
    format!("{} · {} · © {}", COMPANY_NAME_TH, COMPANY_NAME_EN, year)
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = Local::now().year();

    html! {
        <footer class="site-footer">
            {copyright(year)}
            <style>
                {r#"
                    .site-footer {
                        border-top: 1px solid rgba(255, 255, 255, 0.1);
                        background: rgba(0, 0, 0, 0.8);
                        padding: 2.5rem 0;
                        text-align: center;
                        font-size: 0.875rem;
                        color: rgba(255, 255, 255, 0.5);
                    }
                "#}
            </style>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn copyright_names_both_languages() {
        assert_eq!(
            copyright(2025),
            "บริษัท เอจิส แม็พ จำกัด · AGIS MAP CO., LTD. · © 2025"
        );
    }
}
