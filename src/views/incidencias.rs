// ============================================================================
// INCIDENCIAS - Listado, filtros y cierre
// ============================================================================

use std::rc::Rc;

use crate::domain::norm_key;
use crate::dom;
use crate::models::Incidencia;
use crate::services::ApiClient;
use crate::state::AppState;
use crate::views::{self, alerts, VIEW_HOST};

pub async fn load(state: &AppState) {
    let Some(token) = state.session.get_token() else {
        return;
    };
    views::render_cargando();

    let api = ApiClient::new();
    match api.incidencias(&token).await {
        Ok(incidencias) => render(state.clone(), Rc::new(incidencias), Filtros::default()),
        Err(e) => views::render_error("Incidencias", &e),
    }
}

/// Filtros activos del listado.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Filtros {
    pub categoria: String,
    pub solo_abiertas: bool,
    pub consulta: String,
}

/// Aplica los filtros en orden: categoría, estado, texto libre.
pub fn filtrar<'a>(incidencias: &'a [Incidencia], filtros: &Filtros) -> Vec<&'a Incidencia> {
    let clave = norm_key(&filtros.consulta);
    incidencias
        .iter()
        .filter(|inc| {
            filtros.categoria.is_empty()
                || inc.categoria.trim().eq_ignore_ascii_case(&filtros.categoria)
        })
        .filter(|inc| !filtros.solo_abiertas || inc.abierta())
        .filter(|inc| {
            clave.is_empty()
                || norm_key(&inc.elemento).contains(&clave)
                || norm_key(&inc.descripcion).contains(&clave)
                || norm_key(&inc.id).contains(&clave)
        })
        .collect()
}

fn render(state: AppState, incidencias: Rc<Vec<Incidencia>>, filtros: Filtros) {
    let visibles = filtrar(&incidencias, &filtros);

    let mut html = format!(
        r#"<div class="p-3"><h4>Incidencias</h4>
          <div class="row g-2 mb-3">
            <div class="col-auto">
              <select class="form-select form-select-sm" id="incCat">
                <option value="">Todas las categorías</option>
                <option value="equipos"{}>Equipos</option>
                <option value="gruas"{}>Puentes grúa</option>
                <option value="auxiliares"{}>Auxiliares</option>
              </select>
            </div>
            <div class="col-auto form-check align-self-center">
              <input class="form-check-input" type="checkbox" id="incAbiertas"{}>
              <label class="form-check-label" for="incAbiertas">Sólo abiertas</label>
            </div>
            <div class="col">
              <input class="form-control form-control-sm" id="incQuery" placeholder="Buscar…" {}>
            </div>
          </div>
          <div id="incList">"#,
        sel(&filtros.categoria, "equipos"),
        sel(&filtros.categoria, "gruas"),
        sel(&filtros.categoria, "auxiliares"),
        if filtros.solo_abiertas { " checked" } else { "" },
        dom::attr("value", &filtros.consulta),
    );

    if visibles.is_empty() {
        html.push_str(r#"<div class="alert alert-secondary">Sin incidencias que mostrar.</div>"#);
    }

    for inc in &visibles {
        let badge = if inc.abierta() {
            r#"<span class="badge bg-danger">Abierta</span>"#
        } else {
            r#"<span class="badge bg-success">Cerrada</span>"#
        };
        html.push_str(&format!(
            r#"<div class="card mb-2"><div class="card-body">
              <div class="d-flex justify-content-between">
                <div class="fw-bold">{} · {}</div>{}
              </div>
              <div class="small text-muted">{} · {}</div>
              <div>{}</div>"#,
            dom::escape_html(&inc.id),
            dom::escape_html(&inc.elemento),
            badge,
            dom::escape_html(&inc.fecha),
            dom::escape_html(&inc.categoria),
            dom::escape_html(&inc.descripcion),
        ));
        if inc.abierta() {
            html.push_str(&format!(
                r#"<div class="input-group input-group-sm mt-2">
                  <input class="form-control" placeholder="Solución aplicada" {}>
                  <button class="btn btn-outline-success" {}>Marcar solucionada</button>
                </div>"#,
                dom::attr("id", &format!("incSol-{}", inc.id)),
                dom::attr("data-finalizar", &inc.id),
            ));
        } else if !inc.solucion.trim().is_empty() {
            html.push_str(&format!(
                r#"<div class="small text-success mt-1">Solución: {}</div>"#,
                dom::escape_html(&inc.solucion)
            ));
        }
        html.push_str("</div></div>");
    }

    html.push_str("</div></div>");
    dom::set_inner_html(VIEW_HOST, &html);

    wire(state, incidencias);
}

fn sel(actual: &str, valor: &str) -> &'static str {
    if actual == valor {
        " selected"
    } else {
        ""
    }
}

fn wire(state: AppState, incidencias: Rc<Vec<Incidencia>>) {
    let releer_filtros = move || Filtros {
        categoria: dom::select_value("incCat"),
        solo_abiertas: dom::get_element_by_id("incAbiertas")
            .and_then(|el| {
                use wasm_bindgen::JsCast;
                el.dyn_into::<web_sys::HtmlInputElement>().ok()
            })
            .map(|i| i.checked())
            .unwrap_or(false),
        consulta: dom::input_value("incQuery"),
    };

    {
        let state = state.clone();
        let incidencias = incidencias.clone();
        let releer = releer_filtros.clone();
        dom::on_change_id("incCat", move |_| {
            render(state.clone(), incidencias.clone(), releer());
        });
    }
    {
        let state = state.clone();
        let incidencias = incidencias.clone();
        let releer = releer_filtros.clone();
        dom::on_change_id("incAbiertas", move |_| {
            render(state.clone(), incidencias.clone(), releer());
        });
    }
    {
        let state = state.clone();
        let incidencias = incidencias.clone();
        let releer = releer_filtros;
        dom::on_enter_id("incQuery", move || {
            render(state.clone(), incidencias.clone(), releer());
        });
    }

    // Cierre de incidencia
    {
        let state = state.clone();
        dom::on_click_delegado("incList", "data-finalizar", move |id| {
            let Some(token) = state.session.get_token() else {
                return;
            };
            let solucion = dom::input_value(&format!("incSol-{}", id));
            if solucion.is_empty() {
                alerts::show_alert("Describe la solución antes de cerrar.", "warning");
                return;
            }
            let state = state.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let api = ApiClient::new();
                match api.finalizar_incidencia(&token, &id, &solucion).await {
                    Ok(()) => {
                        alerts::show_alert("Incidencia marcada como solucionada.", "success");
                        load(&state).await;
                    }
                    Err(e) => alerts::show_alert(&e, "danger"),
                }
            });
        });
    }
}
