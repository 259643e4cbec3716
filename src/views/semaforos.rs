// ============================================================================
// SEMÁFOROS - Tableros de equipos, puentes grúa y auxiliares
// ============================================================================
// Un único renderizador para las tres categorías: tarjetas con el pill de
// estado canónico, buscador insensible a tildes y, para administradores,
// selector de cambio de estado que llama a `state.set_estado`.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;

use crate::domain::norm_key;
use crate::dom;
use crate::models::{canonical_estado, Categoria, EquipmentRef, Estado};
use crate::services::ApiClient;
use crate::state::AppState;
use crate::views::{self, alerts, VIEW_HOST};

pub async fn load(state: &AppState, categoria: Categoria) {
    let Some(token) = state.session.get_token() else {
        return;
    };
    views::render_cargando();

    let api = ApiClient::new();
    match api.elementos(&token, categoria).await {
        Ok(elementos) => {
            if categoria == Categoria::Equipos {
                *state.cache_equipos.borrow_mut() = elementos.clone();
            }
            render(state.clone(), categoria, Rc::new(elementos), String::new());
        }
        Err(e) => views::render_error(categoria.titulo(), &e),
    }
}

/// Filtra el tablero por texto: clave normalizada contenida en id, nombre,
/// modelo o línea.
pub fn filtrar_elementos<'a>(
    elementos: &'a [EquipmentRef],
    consulta: &str,
) -> Vec<&'a EquipmentRef> {
    let clave = norm_key(consulta);
    if clave.is_empty() {
        return elementos.iter().collect();
    }
    elementos
        .iter()
        .filter(|e| {
            norm_key(&e.id).contains(&clave)
                || norm_key(&e.nombre).contains(&clave)
                || norm_key(&e.modelo).contains(&clave)
                || norm_key(&e.linea).contains(&clave)
        })
        .collect()
}

fn render(state: AppState, categoria: Categoria, elementos: Rc<Vec<EquipmentRef>>, consulta: String) {
    let visibles = filtrar_elementos(&elementos, &consulta);
    let es_admin = state.session.es_admin();

    let mut html = format!(
        r#"<div class="p-3"><h4>{}</h4>
           <input class="form-control mb-3" id="semQuery" placeholder="Buscar…" {}>
           <div class="row g-2" id="semTablero">"#,
        dom::escape_html(categoria.titulo()),
        dom::attr("value", &consulta),
    );

    for (idx, elemento) in visibles.iter().enumerate() {
        let estado = state
            .session
            .estado_semaforo(categoria, elemento.id_limpio());
        let pill = pill_estado(&estado);
        html.push_str(&format!(
            r#"<div class="col-12 col-md-6 col-lg-4">
              <div class="card"><div class="card-body">
                <div class="d-flex justify-content-between align-items-center">
                  <div>
                    <div class="fw-bold">{}</div>
                    <div class="text-muted small">{}</div>
                  </div>
                  {}
                </div>
                {}
              </div></div>
            </div>"#,
            dom::escape_html(&elemento.etiqueta()),
            dom::escape_html(elemento.linea.trim()),
            pill,
            if es_admin {
                selector_estado(idx, elemento.id_limpio(), &estado)
            } else {
                String::new()
            },
        ));
    }

    html.push_str("</div></div>");
    dom::set_inner_html(VIEW_HOST, &html);

    wire(state, categoria, Rc::clone(&elementos), visibles.len());
}

fn pill_estado(estado: &str) -> String {
    match Estado::parse(estado) {
        Some(e) => format!(
            r#"<span class="badge {}">{}</span>"#,
            e.css(),
            dom::escape_html(e.etiqueta())
        ),
        // Estado no reconocido: se muestra tal cual, sin color
        None => format!(
            r#"<span class="badge bg-secondary">{}</span>"#,
            dom::escape_html(estado)
        ),
    }
}

fn selector_estado(idx: usize, id: &str, actual: &str) -> String {
    let mut opciones = String::new();
    for estado in Estado::TODOS {
        opciones.push_str(&format!(
            r#"<option value="{}"{}>{}</option>"#,
            estado.clave(),
            if estado.clave() == actual { " selected" } else { "" },
            dom::escape_html(estado.etiqueta())
        ));
    }
    format!(
        r#"<select class="form-select form-select-sm mt-2" id="semSel-{}" {}>{}</select>"#,
        idx,
        dom::attr("data-id", id),
        opciones
    )
}

fn wire(state: AppState, categoria: Categoria, elementos: Rc<Vec<EquipmentRef>>, n_visibles: usize) {
    // Buscador con debounce: el filtrado es puro, sólo se re-pinta al parar
    // de teclear.
    {
        let state = state.clone();
        let elementos = elementos.clone();
        let pendiente: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
        dom::on_input_id("semQuery", move |_e| {
            let state = state.clone();
            let elementos = elementos.clone();
            let consulta = dom::input_value("semQuery");
            let timeout = Timeout::new(250, move || {
                render(state, categoria, elementos, consulta);
            });
            // Reiniciar el debounce: el timeout anterior se cancela al soltarlo
            *pendiente.borrow_mut() = Some(timeout);
        });
    }

    // Cambios de estado (sólo admin; los selects existen sólo si se pintaron)
    if !state.session.es_admin() {
        return;
    }
    for idx in 0..n_visibles {
        let state = state.clone();
        let elementos = elementos.clone();
        let id_select = format!("semSel-{}", idx);
        dom::on_change_id(&id_select.clone(), move |_e| {
            let nuevo = dom::select_value(&id_select);
            let Some(elemento_id) = dom::get_element_by_id(&id_select)
                .and_then(|el| el.get_attribute("data-id"))
            else {
                return;
            };
            let Some(token) = state.session.get_token() else {
                return;
            };
            let estado_canonico = canonical_estado(&nuevo);
            let state = state.clone();
            let elementos = elementos.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let api = ApiClient::new();
                match api
                    .set_estado(&token, categoria, &elemento_id, &estado_canonico)
                    .await
                {
                    Ok(()) => {
                        state
                            .session
                            .fijar_semaforo(categoria, &elemento_id, &estado_canonico);
                        state.notify_change();
                        render(state, categoria, elementos, dom::input_value("semQuery"));
                    }
                    Err(e) => alerts::show_alert(&e, "danger"),
                }
            });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn elementos() -> Vec<EquipmentRef> {
        vec![
            EquipmentRef {
                id: "KDP1".into(),
                nombre: "Kaltenbach KDP1".into(),
                modelo: "KDP".into(),
                linea: "N1".into(),
            },
            EquipmentRef {
                id: "HP".into(),
                nombre: "Horno pintura".into(),
                modelo: String::new(),
                linea: "N4".into(),
            },
            EquipmentRef {
                id: "N1-02".into(),
                nombre: "Grúa nave 1".into(),
                modelo: String::new(),
                linea: "N1".into(),
            },
        ]
    }

    #[test]
    fn consulta_vacia_muestra_todo() {
        assert_eq!(filtrar_elementos(&elementos(), "").len(), 3);
        assert_eq!(filtrar_elementos(&elementos(), "   ").len(), 3);
    }

    #[test]
    fn busca_sin_tildes_ni_caja() {
        let lista = elementos();
        let res = filtrar_elementos(&lista, "grua");
        assert_eq!(res.len(), 1);
        assert_eq!(res[0].id, "N1-02");
    }

    #[test]
    fn busca_por_id_con_separadores() {
        let lista = elementos();
        assert_eq!(filtrar_elementos(&lista, "n1 02").len(), 1);
        assert_eq!(filtrar_elementos(&lista, "kdp-1").len(), 1);
    }

    #[test]
    fn busca_por_linea() {
        assert_eq!(filtrar_elementos(&elementos(), "N1").len(), 2);
    }
}
