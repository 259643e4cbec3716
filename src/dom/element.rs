// ============================================================================
// ELEMENT HELPERS - Funciones básicas para manipular DOM
// ============================================================================

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement, Window};

/// Obtener window global
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Obtener document
pub fn document() -> Option<Document> {
    window()?.document()
}

/// Obtener elemento por ID
pub fn get_element_by_id(id: &str) -> Option<Element> {
    document()?.get_element_by_id(id)
}

/// Establecer inner HTML de un elemento localizado por id
pub fn set_inner_html(id: &str, html: &str) {
    if let Some(el) = get_element_by_id(id) {
        el.set_inner_html(html);
    }
}

/// Establecer text content de un elemento localizado por id
pub fn set_text(id: &str, texto: &str) {
    if let Some(el) = get_element_by_id(id) {
        el.set_text_content(Some(texto));
    }
}

/// Valor recortado de un <input>
pub fn input_value(id: &str) -> String {
    get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
        .map(|i| i.value().trim().to_string())
        .unwrap_or_default()
}

/// Valor sin recortar de un <input> (contraseñas)
pub fn input_value_raw(id: &str) -> String {
    get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
        .map(|i| i.value())
        .unwrap_or_default()
}

/// Valor seleccionado de un <select>
pub fn select_value(id: &str) -> String {
    get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlSelectElement>().ok())
        .map(|s| s.value())
        .unwrap_or_default()
}

/// Valor recortado de un <textarea>
pub fn textarea_value(id: &str) -> String {
    get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlTextAreaElement>().ok())
        .map(|t| t.value().trim().to_string())
        .unwrap_or_default()
}

/// Vaciar un <input> o un <textarea>
pub fn clear_input(id: &str) {
    if let Some(el) = get_element_by_id(id) {
        if let Ok(input) = el.clone().dyn_into::<HtmlInputElement>() {
            input.set_value("");
        } else if let Ok(area) = el.dyn_into::<HtmlTextAreaElement>() {
            area.set_value("");
        }
    }
}

/// Hash actual de la barra de direcciones
pub fn current_hash() -> String {
    window()
        .map(|w| w.location())
        .and_then(|l| l.hash().ok())
        .unwrap_or_default()
}

/// Navegar cambiando el hash
pub fn set_hash(hash: &str) {
    if let Some(w) = window() {
        let _ = w.location().set_hash(hash);
    }
}
