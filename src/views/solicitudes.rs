// ============================================================================
// SOLICITUDES - Alta de solicitudes de repuesto (rep.crear)
// ============================================================================

use crate::dom;
use crate::models::SolicitudNueva;
use crate::services::ApiClient;
use crate::state::AppState;
use crate::views::{alerts, VIEW_HOST};

pub async fn load(state: &AppState) {
    render(state.clone());
}

fn render(state: AppState) {
    dom::set_inner_html(
        VIEW_HOST,
        r#"
        <div class="p-3" style="max-width: 560px;">
          <h4>Nueva solicitud de repuesto</h4>
          <div class="mb-2">
            <label class="form-label" for="solRepuesto">Repuesto</label>
            <input class="form-control" id="solRepuesto" placeholder="Código o nombre">
          </div>
          <div class="mb-2">
            <label class="form-label" for="solCantidad">Cantidad</label>
            <input class="form-control" id="solCantidad" inputmode="numeric">
          </div>
          <div class="mb-2">
            <label class="form-label" for="solElemento">Equipo / elemento</label>
            <input class="form-control" id="solElemento" placeholder="Opcional">
          </div>
          <div class="mb-3">
            <label class="form-label" for="solMotivo">Motivo</label>
            <textarea class="form-control" id="solMotivo" rows="3"></textarea>
          </div>
          <button class="btn btn-primary" id="solEnviar">Enviar solicitud</button>
        </div>"#,
    );

    dom::on_click_id("solEnviar", move |e| {
        e.prevent_default();
        let solicitud = SolicitudNueva {
            repuesto: dom::input_value("solRepuesto"),
            cantidad: dom::input_value("solCantidad"),
            motivo: dom::textarea_value("solMotivo"),
            elemento: dom::input_value("solElemento"),
        };
        if !solicitud.valida() {
            alerts::show_alert("Indica al menos repuesto y cantidad.", "warning");
            return;
        }
        let Some(token) = state.session.get_token() else {
            return;
        };
        wasm_bindgen_futures::spawn_local(async move {
            let api = ApiClient::new();
            match api.crear_solicitud(&token, &solicitud).await {
                Ok(()) => {
                    alerts::show_alert("Solicitud enviada.", "success");
                    dom::clear_input("solRepuesto");
                    dom::clear_input("solCantidad");
                    dom::clear_input("solElemento");
                    dom::clear_input("solMotivo");
                }
                Err(e) => alerts::show_alert(&e, "danger"),
            }
        });
    });
}
