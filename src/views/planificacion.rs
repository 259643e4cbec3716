// ============================================================================
// PLANIFICACIÓN - Tabla de producción filtrada por equipo
// ============================================================================
// El backend devuelve la tabla completa; el filtrado por equipo se hace en
// cliente con el matcher heurístico (domain::planning_match).

use std::rc::Rc;

use crate::domain::match_rows;
use crate::dom;
use crate::models::{lineas_de, Categoria, EquipmentRef, PlanningRow};
use crate::services::ApiClient;
use crate::state::AppState;
use crate::views::{self, alerts, VIEW_HOST};

pub async fn load(state: &AppState) {
    let Some(token) = state.session.get_token() else {
        return;
    };
    views::render_cargando();

    let api = ApiClient::new();

    // La lista de equipos alimenta el selector y la resolución de la
    // selección; se cachea para el resto de la sesión de página.
    if state.cache_equipos.borrow().is_empty() {
        match api.elementos(&token, Categoria::Equipos).await {
            Ok(equipos) => *state.cache_equipos.borrow_mut() = equipos,
            Err(e) => log::warn!("No se pudo cargar la lista de equipos: {}", e),
        }
    }

    match api.planificacion(&token).await {
        Ok(filas) => render(state.clone(), Rc::new(filas)),
        Err(e) => views::render_error("Planificación", &e),
    }
}

fn render(state: AppState, filas: Rc<Vec<PlanningRow>>) {
    let equipos = state.cache_equipos.borrow().clone();
    let seleccion = state.seleccion.borrow().clone();
    let equipo = state.equipo_seleccionado();

    let visibles = match_rows(&filas, equipo.as_ref());

    let mut html = String::from(r#"<div class="p-3"><h4>Planificación</h4>"#);
    html.push_str(&format!(
        r#"<div class="small text-muted mb-2">Actualizado {} UTC</div>"#,
        chrono::Utc::now().format("%H:%M")
    ));
    html.push_str(&chips_lineas(&equipos, seleccion.linea.as_deref()));
    html.push_str(&botones_equipos(
        &equipos,
        seleccion.linea.as_deref(),
        seleccion.equipo_id.as_deref(),
    ));

    if equipo.is_none() && seleccion.equipo_id.is_some() {
        // Selección que no resuelve contra la lista: el matcher queda en
        // abierto y se muestra la tabla completa.
        html.push_str(
            r#"<div class="alert alert-info">Equipo no reconocido; se muestra la tabla completa.</div>"#,
        );
    }

    html.push_str(&tabla(&visibles));
    html.push_str("</div>");
    dom::set_inner_html(VIEW_HOST, &html);

    wire(state, filas);
}

fn chips_lineas(equipos: &[EquipmentRef], activa: Option<&str>) -> String {
    let lineas = lineas_de(equipos);
    if lineas.is_empty() {
        return String::new();
    }
    let mut html = String::from(r#"<div class="mb-2" id="planLineas">"#);
    for linea in &lineas {
        let clase = if activa == Some(linea.as_str()) {
            "btn btn-sm btn-primary me-1"
        } else {
            "btn btn-sm btn-outline-primary me-1"
        };
        html.push_str(&format!(
            r#"<button class="{}" {}>{}</button>"#,
            clase,
            dom::attr("data-linea", linea),
            dom::escape_html(linea)
        ));
    }
    html.push_str("</div>");
    html
}

fn botones_equipos(
    equipos: &[EquipmentRef],
    linea: Option<&str>,
    equipo_activo: Option<&str>,
) -> String {
    let visibles: Vec<&EquipmentRef> = equipos
        .iter()
        .filter(|e| linea.map_or(true, |l| e.linea.trim() == l))
        .collect();
    if visibles.is_empty() {
        return String::new();
    }
    let mut html = String::from(r#"<div class="mb-3" id="planEquipos">"#);
    for eq in visibles {
        let clase = if equipo_activo == Some(eq.id_limpio()) {
            "btn btn-sm btn-success me-1 mb-1"
        } else {
            "btn btn-sm btn-outline-secondary me-1 mb-1"
        };
        html.push_str(&format!(
            r#"<button class="{}" {}>{}</button>"#,
            clase,
            dom::attr("data-equipo", eq.id_limpio()),
            dom::escape_html(&eq.etiqueta())
        ));
    }
    html.push_str("</div>");
    html
}

fn tabla(filas: &[&PlanningRow]) -> String {
    if filas.is_empty() {
        return r#"<div class="alert alert-secondary">Sin filas de planificación para la selección.</div>"#
            .to_string();
    }
    let mut html = String::from(
        r#"<div class="table-responsive"><table class="table table-sm align-middle" id="planTabla">
           <thead><tr>
             <th>Picking</th><th>Cliente</th><th>Output</th><th>Máquina</th>
             <th>Kgs</th><th>Comentarios</th><th>Alimentado</th><th>Terminado</th>
           </tr></thead><tbody>"#,
    );
    for fila in filas {
        let picking = fila.picking();
        html.push_str(&format!(
            r#"<tr>
              <td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td>
              <td><input type="checkbox" {} {}></td>
              <td><input type="checkbox" {} {}></td>
            </tr>"#,
            dom::escape_html(&picking),
            dom::escape_html(&fila.cliente()),
            dom::escape_html(&fila.output()),
            dom::escape_html(&fila.maquina()),
            dom::escape_html(&fila.kgs()),
            dom::escape_html(&fila.comentarios()),
            dom::attr("data-alimentado", &picking),
            if fila.alimentado() { "checked" } else { "" },
            dom::attr("data-terminado", &picking),
            if fila.terminado() { "checked" } else { "" },
        ));
    }
    html.push_str("</tbody></table></div>");
    html
}

fn wire(state: AppState, filas: Rc<Vec<PlanningRow>>) {
    // Cambio de línea: borra el equipo y re-pinta con los mismos datos
    {
        let state = state.clone();
        let filas = filas.clone();
        dom::on_click_delegado("planLineas", "data-linea", move |linea| {
            state.seleccion.borrow_mut().elegir_linea(&linea);
            state.notify_change();
            render(state.clone(), filas.clone());
        });
    }

    // Selección de equipo
    {
        let state = state.clone();
        let filas = filas.clone();
        dom::on_click_delegado("planEquipos", "data-equipo", move |id| {
            {
                let cache = state.cache_equipos.borrow();
                if let Some(eq) = crate::models::resolver_equipo(&cache, &id) {
                    state.seleccion.borrow_mut().elegir_equipo(eq);
                }
            }
            state.notify_change();
            render(state.clone(), filas.clone());
        });
    }

    // Toggles de alimentado / terminado
    wire_toggle(state.clone(), filas.clone(), "data-alimentado", "alimentado");
    wire_toggle(state, filas, "data-terminado", "terminado");
}

fn wire_toggle(
    state: AppState,
    filas: Rc<Vec<PlanningRow>>,
    data_attr: &'static str,
    campo: &'static str,
) {
    dom::on_click_delegado("planTabla", data_attr, move |picking| {
        let Some(token) = state.session.get_token() else {
            return;
        };
        let actual = filas
            .iter()
            .find(|f| f.picking() == picking)
            .map(|f| if campo == "alimentado" { f.alimentado() } else { f.terminado() })
            .unwrap_or(false);

        let state = state.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let api = ApiClient::new();
            match api.plan_update(&token, &picking, campo, !actual).await {
                Ok(()) => load(&state).await,
                Err(e) => alerts::show_alert(&e, "danger"),
            }
        });
    });
}
