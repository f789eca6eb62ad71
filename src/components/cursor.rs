use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, MouseEvent};
use yew::prelude::*;

/// Small dot that shadows the pointer across the viewport. The layer blends
/// with `difference` so the dot inverts whatever sits under it, and it never
/// intercepts pointer events. Each move writes the pointer's viewport
/// coordinates straight into the transform; there is no easing.
#[function_component(CursorOverlay)]
pub fn cursor_overlay() -> Html {
    let dot = use_node_ref();

    {
        let dot = dot.clone();
        use_effect_with_deps(
            move |_| {
                let cleanup: Box<dyn FnOnce()> =
                    if let (Some(window), Some(el)) = (web_sys::window(), dot.cast::<HtmlElement>())
                    {
                        let on_move = Closure::wrap(Box::new(move |event: MouseEvent| {
                            let _ = el.set_attribute(
                                "style",
                                &format!(
                                    "transform: translate({}px, {}px)",
                                    event.client_x(),
                                    event.client_y()
                                ),
                            );
                        }) as Box<dyn FnMut(MouseEvent)>);

                        window
                            .add_event_listener_with_callback(
                                "mousemove",
                                on_move.as_ref().unchecked_ref(),
                            )
                            .unwrap();

                        Box::new(move || {
                            window
                                .remove_event_listener_with_callback(
                                    "mousemove",
                                    on_move.as_ref().unchecked_ref(),
                                )
                                .unwrap();
                        })
                    } else {
                        Box::new(|| ())
                    };
                move || cleanup()
            },
            (),
        );
    }

    html! {
        <div class="cursor-layer" aria-hidden="true">
            <div ref={dot} class="cursor-dot"></div>
            <style>
                {r#"
                    .cursor-layer {
                        position: fixed;
                        inset: 0;
                        z-index: 60;
                        pointer-events: none;
                        mix-blend-mode: difference;
                    }

                    .cursor-dot {
                        position: absolute;
                        top: 0;
                        left: 0;
                        width: 16px;
                        height: 16px;
                        margin: -8px 0 0 -8px;
                        border-radius: 50%;
                        background: rgba(255, 255, 255, 0.9);
                        box-shadow: 0 0 40px 8px rgba(255, 255, 255, 0.25);
                    }

                    @media (hover: none) {
                        .cursor-layer {
                            display: none;
                        }
                    }
                "#}
            </style>
        </div>
    }
}
