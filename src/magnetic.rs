use dioxus::prelude::*;
#[cfg(target_arch = "wasm32")]
use std::rc::Rc;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast};

pub const MAGNETIC_RADIUS: f64 = 100.0;
pub const MAGNETIC_PULL: f64 = 0.3;

/// Displacement applied to a magnetic element for the given pointer position
/// and element center. Zero outside the attraction radius; inside it, the
/// pull scales linearly from the edge of the radius towards the pointer.
pub fn magnetic_offset(
    pointer_x: f64,
    pointer_y: f64,
    center_x: f64,
    center_y: f64,
) -> (f64, f64) {
    let dx = pointer_x - center_x;
    let dy = pointer_y - center_y;
    let distance = (dx * dx + dy * dy).sqrt();
    if distance >= MAGNETIC_RADIUS {
        return (0.0, 0.0);
    }
    let force = (MAGNETIC_RADIUS - distance) / MAGNETIC_RADIUS;
    (dx * force * MAGNETIC_PULL, dy * force * MAGNETIC_PULL)
}

#[cfg(target_arch = "wasm32")]
struct MoveListener {
    closure: Rc<Closure<dyn FnMut(web_sys::MouseEvent)>>,
}

/// Document-level pointer listener that nudges every `.magnetic` element
/// towards the cursor. Stateless between events: each move recomputes the
/// transform from current geometry alone.
pub fn use_magnetic_cursor() {
    #[cfg(target_arch = "wasm32")]
    {
        let mut listener = use_signal(|| None::<MoveListener>);

        use_effect(move || {
            if listener.read().is_some() {
                return;
            }
            let Some(document) = web_sys::window().and_then(|window| window.document()) else {
                return;
            };
            tracing::debug!("magnetic: attach mousemove listener");

            let closure = Rc::new(Closure::wrap(Box::new(move |event: web_sys::MouseEvent| {
                displace_magnetic_elements(f64::from(event.client_x()), f64::from(event.client_y()));
            }) as Box<dyn FnMut(_)>));

            let _ = document.add_event_listener_with_callback(
                "mousemove",
                closure.as_ref().as_ref().unchecked_ref(),
            );
            listener.set(Some(MoveListener { closure }));
        });

        use_drop(move || {
            let binding = listener.read();
            let Some(listener) = binding.as_ref() else {
                return;
            };
            if let Some(document) = web_sys::window().and_then(|window| window.document()) {
                let _ = document.remove_event_listener_with_callback(
                    "mousemove",
                    listener.closure.as_ref().as_ref().unchecked_ref(),
                );
            }
        });
    }
}

#[cfg(target_arch = "wasm32")]
fn displace_magnetic_elements(pointer_x: f64, pointer_y: f64) {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return;
    };
    let Ok(elements) = document.query_selector_all(".magnetic") else {
        return;
    };
    for index in 0..elements.length() {
        let Some(node) = elements.item(index) else {
            continue;
        };
        let Ok(element) = node.dyn_into::<web_sys::HtmlElement>() else {
            continue;
        };
        let rect = element.get_bounding_client_rect();
        let center_x = rect.left() + rect.width() / 2.0;
        let center_y = rect.top() + rect.height() / 2.0;
        let (x, y) = magnetic_offset(pointer_x, pointer_y, center_x, center_y);
        let _ = element
            .style()
            .set_property("transform", &format!("translate({x}px, {y}px)"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn no_pull_outside_the_radius() {
        assert_eq!(magnetic_offset(150.0, 0.0, 0.0, 0.0), (0.0, 0.0));
        assert_eq!(magnetic_offset(100.0, 0.0, 0.0, 0.0), (0.0, 0.0));
    }

    #[test]
    fn pull_scales_with_proximity() {
        // Distance 50 on the x axis: force (100-50)/100 = 0.5,
        // offset = 50 * 0.5 * 0.3 = 7.5 towards the pointer.
        let (x, y) = magnetic_offset(50.0, 0.0, 0.0, 0.0);
        assert_eq!((x, y), (7.5, 0.0));

        let (x, y) = magnetic_offset(0.0, -50.0, 0.0, 0.0);
        assert_eq!((x, y), (0.0, -7.5));
    }

    #[test]
    fn pull_applies_per_axis() {
        // 3-4-5 triangle, distance 50: force 0.5.
        let (x, y) = magnetic_offset(30.0, 40.0, 0.0, 0.0);
        assert_eq!((x, y), (4.5, 6.0));
    }
}
