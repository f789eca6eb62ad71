//! Pointer and scroll driven visual effects.
//!
//! The math lives in plain functions so it can be tested off-wasm; the hooks
//! wire that math to DOM listeners and take the listeners down again when the
//! owning component unmounts.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::js_sys;
use web_sys::{Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry, MouseEvent};
use yew::prelude::*;

/// Damping divisor for the magnetic buttons. Larger means a weaker pull.
pub const MAGNETIC_STRENGTH: f64 = 24.0;

/// Vertical drift of the hero blob across the full page scroll, in px.
pub const PARALLAX_MAX_OFFSET: f64 = 200.0;

/// Scale gain of the hero blob across the full page scroll.
pub const PARALLAX_SCALE_GAIN: f64 = 0.1;

/// Translation applied to a magnetic button for a pointer offset from its
/// center. Holds no history: each sample fully determines the transform.
pub fn magnetic_translation(rel_x: f64, rel_y: f64) -> (f64, f64) {
    (rel_x / MAGNETIC_STRENGTH, rel_y / MAGNETIC_STRENGTH)
}

pub fn parallax_offset(progress: f64) -> f64 {
    PARALLAX_MAX_OFFSET * progress
}

pub fn parallax_scale(progress: f64) -> f64 {
    1.0 + PARALLAX_SCALE_GAIN * progress
}

/// Overall page scroll progress: 0 at the top, 1 at the bottom. A page no
/// taller than the viewport never makes progress.
pub fn scroll_progress(scroll_y: f64, scroll_height: f64, viewport_height: f64) -> f64 {
    let range = scroll_height - viewport_height;
    if range <= 0.0 {
        return 0.0;
    }
    (scroll_y / range).clamp(0.0, 1.0)
}

fn sample_progress(window: &web_sys::Window) -> Option<f64> {
    let scroll_y = window.scroll_y().ok()?;
    let viewport = window.inner_height().ok()?.as_f64()?;
    let root = window.document()?.document_element()?;
    Some(scroll_progress(scroll_y, f64::from(root.scroll_height()), viewport))
}

/// Makes the referenced element drift toward the pointer while it hovers and
/// snap back on leave. If the ref never resolves, nothing is registered.
#[hook]
pub fn use_magnetic() -> NodeRef {
    let node = use_node_ref();

    {
        let node = node.clone();
        use_effect_with_deps(
            move |_| {
                let cleanup: Box<dyn FnOnce()> = if let Some(el) = node.cast::<HtmlElement>() {
                    let move_target = el.clone();
                    let on_move = Closure::wrap(Box::new(move |event: MouseEvent| {
                        let rect = move_target.get_bounding_client_rect();
                        let rel_x = f64::from(event.client_x()) - rect.left() - rect.width() / 2.0;
                        let rel_y = f64::from(event.client_y()) - rect.top() - rect.height() / 2.0;
                        let (tx, ty) = magnetic_translation(rel_x, rel_y);
                        let _ = move_target.set_attribute(
                            "style",
                            &format!("transform: translate({tx}px, {ty}px)"),
                        );
                    }) as Box<dyn FnMut(MouseEvent)>);

                    let leave_target = el.clone();
                    let on_leave = Closure::wrap(Box::new(move |_: MouseEvent| {
                        let _ = leave_target.set_attribute("style", "transform: translate(0, 0)");
                    }) as Box<dyn FnMut(MouseEvent)>);

                    el.add_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref())
                        .unwrap();
                    el.add_event_listener_with_callback("mouseleave", on_leave.as_ref().unchecked_ref())
                        .unwrap();

                    Box::new(move || {
                        el.remove_event_listener_with_callback(
                            "mousemove",
                            on_move.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                        el.remove_event_listener_with_callback(
                            "mouseleave",
                            on_leave.as_ref().unchecked_ref(),
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

    node
}

/// Page scroll progress in [0, 1], resampled on every scroll event.
#[hook]
pub fn use_scroll_progress() -> f64 {
    let progress = use_state(|| 0.0);

    {
        let progress = progress.clone();
        use_effect_with_deps(
            move |_| {
                let cleanup: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                    if let Some(initial) = sample_progress(&window) {
                        progress.set(initial);
                    }

                    let scroll_window = window.clone();
                    let on_scroll = Closure::wrap(Box::new(move || {
                        if let Some(p) = sample_progress(&scroll_window) {
                            progress.set(p);
                        }
                    }) as Box<dyn FnMut()>);

                    window
                        .add_event_listener_with_callback(
                            "scroll",
                            on_scroll.as_ref().unchecked_ref(),
                        )
                        .unwrap();

                    Box::new(move || {
                        window
                            .remove_event_listener_with_callback(
                                "scroll",
                                on_scroll.as_ref().unchecked_ref(),
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

    *progress
}

/// One-shot entrance reveal: the first time the referenced element enters the
/// viewport it gains the `revealed` class and is unobserved, so the entrance
/// animation cannot restart.
#[hook]
pub fn use_reveal() -> NodeRef {
    let node = use_node_ref();

    {
        let node = node.clone();
        use_effect_with_deps(
            move |_| {
                let cleanup: Box<dyn FnOnce()> = if let Some(el) = node.cast::<Element>() {
                    let on_intersect = Closure::wrap(Box::new(
                        move |entries: js_sys::Array, observer: IntersectionObserver| {
                            for entry in entries.iter() {
                                let entry: IntersectionObserverEntry = entry.unchecked_into();
                                if !entry.is_intersecting() {
                                    continue;
                                }
                                let target = entry.target();
                                let classes = target.class_name();
                                if !classes.contains("revealed") {
                                    target.set_class_name(&format!("{classes} revealed"));
                                }
                                observer.unobserve(&target);
                            }
                        },
                    )
                        as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

                    match IntersectionObserver::new(on_intersect.as_ref().unchecked_ref()) {
                        Ok(observer) => {
                            observer.observe(&el);
                            Box::new(move || {
                                observer.disconnect();
                                drop(on_intersect);
                            })
                        }
                        Err(_) => Box::new(|| ()),
                    }
                } else {
                    Box::new(|| ())
                };
                move || cleanup()
            },
            (),
        );
    }

    node
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn magnetic_translation_divides_by_strength() {
        assert_eq!(magnetic_translation(24.0, -48.0), (1.0, -2.0));
        assert_eq!(magnetic_translation(0.0, 0.0), (0.0, 0.0));
    }

    #[test]
    fn magnetic_translation_for_offcenter_pointer() {
        // Pointer at (112, 340) over a button centered at (100, 300).
        let (tx, ty) = magnetic_translation(112.0 - 100.0, 340.0 - 300.0);
        assert_eq!(tx, 0.5);
        assert!((ty - 5.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn parallax_is_linear_over_progress() {
        assert_eq!(parallax_offset(0.0), 0.0);
        assert_eq!(parallax_offset(0.5), 100.0);
        assert_eq!(parallax_offset(1.0), 200.0);

        assert_eq!(parallax_scale(0.0), 1.0);
        assert_eq!(parallax_scale(0.5), 1.05);
        assert_eq!(parallax_scale(1.0), 1.1);
    }

    #[test]
    fn scroll_progress_stays_in_unit_range() {
        assert_eq!(scroll_progress(0.0, 3000.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(1000.0, 3000.0, 1000.0), 0.5);
        assert_eq!(scroll_progress(2000.0, 3000.0, 1000.0), 1.0);
        // Overscroll bounce and rubber-banding clamp to the bounds.
        assert_eq!(scroll_progress(-80.0, 3000.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(2400.0, 3000.0, 1000.0), 1.0);
    }

    #[test]
    fn short_pages_never_make_progress() {
        assert_eq!(scroll_progress(0.0, 800.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(50.0, 1000.0, 1000.0), 0.0);
    }
}
