use anyhow::anyhow;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Look up an element by id and cast it to the expected DOM type.
pub fn element_by_id<T: JsCast>(document: &web::Document, id: &str) -> anyhow::Result<T> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow!("missing #{id}"))?
        .dyn_into::<T>()
        .map_err(|e| anyhow!("#{id} has unexpected type: {:?}", e))
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        let _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

/// State of a checkbox, or `default` when the page does not have it.
pub fn checkbox_checked(document: &web::Document, id: &str, default: bool) -> bool {
    element_by_id::<web::HtmlInputElement>(document, id)
        .map(|el| el.checked())
        .unwrap_or(default)
}

pub fn set_button_disabled(document: &web::Document, id: &str, disabled: bool) {
    if let Ok(button) = element_by_id::<web::HtmlButtonElement>(document, id) {
        button.set_disabled(disabled);
    }
}

pub fn alert(message: &str) {
    if let Some(w) = web::window() {
        let _ = w.alert_with_message(message);
    }
}
