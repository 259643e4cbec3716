// ============================================================================
// EXTERNAS - Trabajos de subcontratas
// ============================================================================

use crate::dom;
use crate::models::TrabajoExterno;
use crate::services::ApiClient;
use crate::state::AppState;
use crate::views::{self, VIEW_HOST};

pub async fn load(state: &AppState) {
    let Some(token) = state.session.get_token() else {
        return;
    };
    views::render_cargando();

    let api = ApiClient::new();
    match api.externas(&token).await {
        Ok(trabajos) => render(&trabajos),
        Err(e) => views::render_error("Subcontratas", &e),
    }
}

fn render(trabajos: &[TrabajoExterno]) {
    let mut html = String::from(
        r#"<div class="p-3"><h4>Subcontratas</h4>
          <div class="table-responsive"><table class="table table-sm align-middle">
          <thead><tr><th>Id</th><th>Empresa</th><th>Descripción</th><th>Inicio</th><th>Fin</th><th>Estado</th></tr></thead>
          <tbody>"#,
    );

    for t in trabajos {
        html.push_str(&format!(
            r#"<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>"#,
            dom::escape_html(&t.id),
            dom::escape_html(&t.empresa),
            dom::escape_html(&t.descripcion),
            dom::escape_html(&t.fecha_inicio),
            dom::escape_html(&t.fecha_fin),
            badge_estado(&t.estado),
        ));
    }
    if trabajos.is_empty() {
        html.push_str(r#"<tr><td colspan="6" class="text-muted">Sin trabajos externos.</td></tr>"#);
    }

    html.push_str("</tbody></table></div></div>");
    dom::set_inner_html(VIEW_HOST, &html);
}

fn badge_estado(estado: &str) -> String {
    let limpio = estado.trim().to_lowercase();
    let clase = match limpio.as_str() {
        "finalizado" | "cerrado" => "bg-success",
        "en curso" | "abierto" => "bg-primary",
        "pendiente" => "bg-warning text-dark",
        _ => "bg-secondary",
    };
    format!(
        r#"<span class="badge {}">{}</span>"#,
        clase,
        dom::escape_html(estado.trim())
    )
}
