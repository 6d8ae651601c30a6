//! Scroll-driven hero collapse. The page subscribes once and receives a
//! normalized progress value; everything visual derives from it.

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

/// Normalized scroll progress: 0 at the top, 1 once `threshold` px have been
/// scrolled. Clamped, and non-decreasing in the offset.
pub fn progress(offset: f64, threshold: f64) -> f64 {
    (offset.max(0.0) / threshold).clamp(0.0, 1.0)
}

/// Tracks window scroll and returns the current progress. Recomputation is
/// throttled to one per animation frame; an initial frame is scheduled on
/// mount so a pre-scrolled page (anchor link, reload) renders correctly.
#[hook]
pub fn use_scroll_progress(threshold: f64) -> f64 {
    let value = use_state(|| 0.0f64);

    {
        let value = value.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let pending = Rc::new(Cell::new(false));

                let frame_cb = Rc::new(Closure::<dyn FnMut()>::new({
                    let window = window.clone();
                    let pending = pending.clone();
                    move || {
                        pending.set(false);
                        let offset = window.scroll_y().unwrap_or(0.0);
                        value.set(progress(offset, threshold));
                    }
                }));

                let scroll_cb = Closure::<dyn FnMut()>::new({
                    let window = window.clone();
                    let pending = pending.clone();
                    let frame_cb = frame_cb.clone();
                    move || {
                        if pending.get() {
                            return;
                        }
                        pending.set(true);
                        let _ = window
                            .request_animation_frame(frame_cb.as_ref().as_ref().unchecked_ref());
                    }
                });

                window
                    .add_event_listener_with_callback(
                        "scroll",
                        scroll_cb.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                // Initial computation without waiting for a scroll event.
                pending.set(true);
                let _ = window.request_animation_frame(frame_cb.as_ref().as_ref().unchecked_ref());

                move || {
                    window
                        .remove_event_listener_with_callback(
                            "scroll",
                            scroll_cb.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                    drop(frame_cb);
                }
            },
            (),
        );
    }

    *value
}

#[cfg(test)]
mod tests {
    use super::*;

    const THRESHOLD: f64 = 200.0;

    #[test]
    fn clamps_to_unit_interval() {
        assert_eq!(progress(0.0, THRESHOLD), 0.0);
        assert_eq!(progress(100.0, THRESHOLD), 0.5);
        assert_eq!(progress(200.0, THRESHOLD), 1.0);
        assert_eq!(progress(5_000.0, THRESHOLD), 1.0);
        assert_eq!(progress(-50.0, THRESHOLD), 0.0);
    }

    #[test]
    fn non_decreasing_in_offset() {
        let mut last = 0.0;
        for step in 0..500 {
            let p = progress(step as f64, THRESHOLD);
            assert!(p >= last, "progress regressed at offset {step}");
            last = p;
        }
    }
}
