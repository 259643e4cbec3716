// ============================================================================
// KPI - Tarjetas de indicadores calculados por el backend
// ============================================================================

use crate::dom;
use crate::models::Kpi;
use crate::services::ApiClient;
use crate::state::AppState;
use crate::views::{self, VIEW_HOST};

pub async fn load(state: &AppState) {
    let Some(token) = state.session.get_token() else {
        return;
    };
    views::render_cargando();

    let api = ApiClient::new();
    match api.kpi(&token).await {
        Ok(indicadores) => render(&indicadores),
        Err(e) => views::render_error("KPIs", &e),
    }
}

fn render(indicadores: &[Kpi]) {
    let mut html = String::from(r#"<div class="p-3"><h4>KPIs</h4><div class="row g-3">"#);

    for kpi in indicadores {
        let unidad = if kpi.unidad.trim().is_empty() {
            String::new()
        } else {
            format!(
                r#" <span class="fs-6 text-muted">{}</span>"#,
                dom::escape_html(kpi.unidad.trim())
            )
        };
        html.push_str(&format!(
            r#"<div class="col-6 col-md-4 col-lg-3">
              <div class="card text-center"><div class="card-body">
                <div class="fs-2 fw-bold">{}{}</div>
                <div class="text-muted">{}</div>
                <div class="small text-muted">{}</div>
              </div></div>
            </div>"#,
            dom::escape_html(&kpi.valor_texto()),
            unidad,
            dom::escape_html(&kpi.nombre),
            dom::escape_html(&kpi.periodo),
        ));
    }
    if indicadores.is_empty() {
        html.push_str(r#"<div class="col"><div class="alert alert-secondary">Sin indicadores disponibles.</div></div>"#);
    }

    html.push_str("</div></div>");
    dom::set_inner_html(VIEW_HOST, &html);
}
