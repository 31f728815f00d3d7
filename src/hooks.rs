use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::Window;
use yew::prelude::*;

use crate::scroll::{AnimationFrame, ScrollAnimationMapper, ScrollState};

const NOTIFICATIONS: [&str; 2] = ["scroll", "resize"];

fn sample(window: &Window, mapper: &ScrollAnimationMapper) -> AnimationFrame {
    let offset = window.scroll_y().unwrap_or(0.0);
    let viewport_height = window.inner_height().ok().and_then(|height| height.as_f64());
    mapper.map(ScrollState::new(offset), viewport_height)
}

/// Recomputes the hero animation frame on every window scroll or resize.
#[hook]
pub fn use_scroll_frame(mapper: ScrollAnimationMapper) -> AnimationFrame {
    let frame = use_state(AnimationFrame::default);

    {
        let frame = frame.clone();
        use_effect_with_deps(
            move |mapper| {
                let mapper = *mapper;
                let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                    let callback = Closure::<dyn Fn()>::new({
                        let frame = frame.clone();
                        move || {
                            if let Some(win) = web_sys::window() {
                                frame.set(sample(&win, &mapper));
                            }
                        }
                    });
                    for event in NOTIFICATIONS {
                        if let Err(err) = window.add_event_listener_with_callback(
                            event,
                            callback.as_ref().unchecked_ref(),
                        ) {
                            log::warn!("Could not listen for {} events: {:?}", event, err);
                        }
                    }
                    // Initial call so the first render matches a restored scroll position
                    frame.set(sample(&window, &mapper));
                    Box::new(move || {
                        for event in NOTIFICATIONS {
                            let _ = window.remove_event_listener_with_callback(
                                event,
                                callback.as_ref().unchecked_ref(),
                            );
                        }
                    })
                } else {
                    log::warn!("No window available, hero animation stays on its first frame");
                    Box::new(|| ())
                };
                move || {
                    destructor();
                }
            },
            mapper,
        );
    }

    *frame
}
