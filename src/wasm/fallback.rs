use wasm_bindgen::JsCast;
use web_sys::{window, HtmlElement};

use crate::FALLBACK_MESSAGE;

const MESSAGE_CLASS: &str = "text-center p-4 bg-red-800 text-white rounded-lg mx-auto max-w-sm mt-8";

/// Replace the animated background with a static notice. Best effort: any
/// missing element is skipped.
pub fn show(canvas_id: &str, overlay_id: &str) {
    let Some(document) = window().and_then(|w| w.document()) else {
        return;
    };
    let by_id = |id: &str| {
        document
            .get_element_by_id(id)
            .and_then(|e| e.dyn_into::<HtmlElement>().ok())
    };

    if let Some(canvas) = by_id(canvas_id) {
        canvas.style().set_property("display", "none").ok();
    }

    let Some(overlay) = by_id(overlay_id) else {
        log::warn!("#{} missing, fallback message not shown", overlay_id);
        return;
    };
    let style = overlay.style();
    style.set_property("background-color", "var(--bg-dark)").ok();
    style.set_property("backdrop-filter", "none").ok();

    if let Ok(notice) = document.create_element("div") {
        notice.set_class_name(MESSAGE_CLASS);
        notice.set_text_content(Some(FALLBACK_MESSAGE));
        if overlay.prepend_with_node_1(&notice).is_err() {
            log::warn!("could not insert fallback message");
        }
    }
}
