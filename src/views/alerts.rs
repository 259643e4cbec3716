// ============================================================================
// ALERTS - Avisos globales sobre #appAlert
// ============================================================================

use crate::dom;

/// Pinta un aviso descartable. `tipo` es una variante Bootstrap
/// ("success", "warning", "danger", "info").
pub fn show_alert(mensaje: &str, tipo: &str) {
    let tipo = if tipo.is_empty() { "info" } else { tipo };
    dom::set_inner_html(
        "appAlert",
        &format!(
            r#"<div class="alert alert-{} alert-dismissible fade show" role="alert">{}<button type="button" class="btn-close" data-bs-dismiss="alert" aria-label="Cerrar"></button></div>"#,
            dom::escape_html(tipo),
            dom::escape_html(mensaje)
        ),
    );
}

pub fn clear_alert() {
    dom::set_inner_html("appAlert", "");
}
