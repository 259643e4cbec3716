// ============================================================================
// OT - Órdenes de trabajo: listado y alta
// ============================================================================

use crate::dom;
use crate::models::{OrdenNueva, OrdenTrabajo};
use crate::services::ApiClient;
use crate::state::AppState;
use crate::views::{self, alerts, VIEW_HOST};

pub async fn load(state: &AppState) {
    let Some(token) = state.session.get_token() else {
        return;
    };
    views::render_cargando();

    let api = ApiClient::new();
    match api.ot(&token).await {
        Ok(ordenes) => render(state.clone(), &ordenes),
        Err(e) => views::render_error("OT", &e),
    }
}

fn render(state: AppState, ordenes: &[OrdenTrabajo]) {
    let mut html = String::from(
        r#"<div class="p-3"><h4>Órdenes de trabajo</h4>
          <div class="row g-2 mb-3">
            <div class="col-auto">
              <select class="form-select form-select-sm" id="otTipo">
                <option value="correctiva">Correctiva</option>
                <option value="preventiva">Preventiva</option>
                <option value="mejora">Mejora</option>
              </select>
            </div>
            <div class="col-auto">
              <input class="form-control form-control-sm" id="otElemento" placeholder="Equipo / elemento">
            </div>
            <div class="col">
              <input class="form-control form-control-sm" id="otDescripcion" placeholder="Descripción">
            </div>
            <div class="col-auto">
              <button class="btn btn-sm btn-primary" id="otCrear">Crear OT</button>
            </div>
          </div>
          <div class="table-responsive"><table class="table table-sm align-middle">
          <thead><tr><th>Id</th><th>Fecha</th><th>Tipo</th><th>Elemento</th><th>Descripción</th><th>Asignado</th><th>Estado</th></tr></thead>
          <tbody>"#,
    );

    for ot in ordenes {
        html.push_str(&format!(
            r#"<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>"#,
            dom::escape_html(&ot.id),
            dom::escape_html(&ot.fecha),
            dom::escape_html(&ot.tipo),
            dom::escape_html(&ot.elemento),
            dom::escape_html(&ot.descripcion),
            dom::escape_html(&ot.asignado),
            dom::escape_html(&ot.estado),
        ));
    }
    if ordenes.is_empty() {
        html.push_str(r#"<tr><td colspan="7" class="text-muted">Sin órdenes de trabajo.</td></tr>"#);
    }

    html.push_str("</tbody></table></div></div>");
    dom::set_inner_html(VIEW_HOST, &html);

    dom::on_click_id("otCrear", move |e| {
        e.prevent_default();
        let orden = OrdenNueva {
            tipo: dom::select_value("otTipo"),
            elemento: dom::input_value("otElemento"),
            descripcion: dom::input_value("otDescripcion"),
        };
        if !orden.valida() {
            alerts::show_alert("Indica elemento y descripción.", "warning");
            return;
        }
        let Some(token) = state.session.get_token() else {
            return;
        };
        let state = state.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let api = ApiClient::new();
            match api.crear_ot(&token, &orden).await {
                Ok(()) => {
                    alerts::show_alert("OT creada.", "success");
                    load(&state).await;
                }
                Err(e) => alerts::show_alert(&e, "danger"),
            }
        });
    });
}
