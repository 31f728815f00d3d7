use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconKind {
    MapPin,
    Drone,
    Database,
    BarChart,
    MessageSquareMore,
}

#[derive(Properties, PartialEq)]
pub struct IconProps {
    pub kind: IconKind,
    #[prop_or_default]
    pub class: Classes,
}

// Stroke icons on a 24x24 grid, drawn in the current text color.
#[function_component(Icon)]
pub fn icon(props: &IconProps) -> Html {
    let shape = match props.kind {
        IconKind::MapPin => html! {
            <>
                <path d="M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0Z" />
                <circle cx="12" cy="10" r="3" />
            </>
        },
        IconKind::Drone => html! {
            <>
                <path d="M10 10 7 7" />
                <path d="m10 14-3 3" />
                <path d="m14 10 3-3" />
                <path d="m14 14 3 3" />
                <rect x="10" y="10" width="4" height="4" rx="1" />
                <circle cx="5" cy="5" r="3" />
                <circle cx="19" cy="5" r="3" />
                <circle cx="5" cy="19" r="3" />
                <circle cx="19" cy="19" r="3" />
            </>
        },
        IconKind::Database => html! {
            <>
                <ellipse cx="12" cy="5" rx="9" ry="3" />
                <path d="M3 5V19A9 3 0 0 0 21 19V5" />
                <path d="M3 12A9 3 0 0 0 21 12" />
            </>
        },
        IconKind::BarChart => html! {
            <>
                <path d="M3 3v18h18" />
                <path d="M18 17V9" />
                <path d="M13 17V5" />
                <path d="M8 17v-3" />
            </>
        },
        IconKind::MessageSquareMore => html! {
            <>
                <path d="M21 15a2 2 0 0 1-2 2H7l-4 4V5a2 2 0 0 1 2-2h14a2 2 0 0 1 2 2z" />
                <path d="M8 10h.01" />
                <path d="M12 10h.01" />
                <path d="M16 10h.01" />
            </>
        },
    };

    html! {
        <svg
            class={classes!("icon", props.class.clone())}
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            { shape }
        </svg>
    }
}
