// ============================================================================
// EVENTS - Registro de listeners con Closure
// ============================================================================
// Los listeners de elementos se registran con Closure + forget(): cuando la
// vista se reemplaza con set_inner_html el navegador limpia los listeners
// asociados. Los listeners globales (window) se registran UNA sola vez al
// arrancar la app.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, KeyboardEvent};

use crate::dom::element::window;

/// Click sobre un elemento.
pub fn on_click<F>(elemento: &Element, handler: F)
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    let _ = elemento.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Click sobre un elemento localizado por id.
pub fn on_click_id<F>(id: &str, handler: F)
where
    F: FnMut(Event) + 'static,
{
    if let Some(el) = crate::dom::element::get_element_by_id(id) {
        on_click(&el, handler);
    }
}

/// Evento `input` sobre un elemento localizado por id.
pub fn on_input_id<F>(id: &str, handler: F)
where
    F: FnMut(Event) + 'static,
{
    if let Some(el) = crate::dom::element::get_element_by_id(id) {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        let _ = el.add_event_listener_with_callback("input", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

/// Evento `change` sobre un elemento localizado por id.
pub fn on_change_id<F>(id: &str, handler: F)
where
    F: FnMut(Event) + 'static,
{
    if let Some(el) = crate::dom::element::get_element_by_id(id) {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        let _ = el.add_event_listener_with_callback("change", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

/// Tecla Enter sobre un input localizado por id.
pub fn on_enter_id<F>(id: &str, mut handler: F)
where
    F: FnMut() + 'static,
{
    if let Some(el) = crate::dom::element::get_element_by_id(id) {
        let closure = Closure::wrap(Box::new(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                e.prevent_default();
                handler();
            }
        }) as Box<dyn FnMut(KeyboardEvent)>);
        let _ = el.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

/// Listener global de `hashchange`. Sólo debe llamarse una vez, al arrancar.
pub fn on_hashchange<F>(handler: F)
where
    F: FnMut(Event) + 'static,
{
    if let Some(w) = window() {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        let _ = w.add_event_listener_with_callback("hashchange", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

/// Delegación: click sobre cualquier descendiente de `contenedor_id` que
/// tenga el atributo `data_attr`, entregando su valor.
pub fn on_click_delegado<F>(contenedor_id: &str, data_attr: &'static str, mut handler: F)
where
    F: FnMut(String) + 'static,
{
    let Some(contenedor) = crate::dom::element::get_element_by_id(contenedor_id) else {
        return;
    };
    let closure = Closure::wrap(Box::new(move |e: Event| {
        let Some(objetivo) = e.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
            return;
        };
        // El click puede caer en un hijo del elemento anotado
        let selector = format!("[{}]", data_attr);
        let anotado = if objetivo.has_attribute(data_attr) {
            Some(objetivo)
        } else {
            objetivo.closest(&selector).ok().flatten()
        };
        if let Some(el) = anotado {
            if let Some(valor) = el.get_attribute(data_attr) {
                handler(valor);
            }
        }
    }) as Box<dyn FnMut(Event)>);
    let _ = contenedor.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}
