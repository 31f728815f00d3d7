use yew::prelude::*;

use crate::projection::Mercator;

/// Home office marker: Bangkok.
const OFFICE: (f64, f64) = (100.5, 13.75);

#[derive(Properties, PartialEq)]
pub struct WorldMapProps {
    pub opacity: f64,
}

#[function_component(WorldMap)]
pub fn world_map(props: &WorldMapProps) -> Html {
    let map = Mercator::default();
    let lines = use_memo(|map| map.graticule(30, 15), map);
    let (office_x, office_y) = map.project(OFFICE.0, OFFICE.1);
    let view_box = format!("0 0 {} {}", map.width, map.height);

    html! {
        <svg
            class="world-map"
            viewBox={view_box}
            preserveAspectRatio="xMidYMid slice"
            style={format!("opacity: {:.3};", props.opacity)}
        >
            <g class="world-map__graticule">
                { for lines.iter().map(|d| html! { <path d={d.clone()} /> }) }
            </g>
            <g class="world-map__office">
                <circle class="world-map__pulse" cx={office_x.to_string()} cy={office_y.to_string()} r="14" />
                <circle cx={office_x.to_string()} cy={office_y.to_string()} r="4" />
            </g>
        </svg>
    }
}
