// ============================================================================
// VIEWS - Renderizado de vistas en #viewHost
// ============================================================================
// Cada vista sigue el mismo contrato: `load` trae los datos del backend y
// pinta; `render` es síncrono y re-pintable tras cada interacción local.

pub mod alerts;
pub mod externas;
pub mod incidencias;
pub mod inventario;
pub mod kpi;
pub mod login;
pub mod menu;
pub mod ot;
pub mod planificacion;
pub mod semaforos;
pub mod solicitudes;

use crate::dom;
use crate::models::Categoria;
use crate::router::{self, Route};
use crate::state::AppState;

/// Id del contenedor donde se pintan todas las vistas.
pub const VIEW_HOST: &str = "viewHost";

/// Pinta cabecera y menú según la sesión actual.
pub fn render_chrome(state: &AppState) {
    let me = state.session.get_me();
    let nombre = me
        .as_ref()
        .map(|m| m.display())
        .unwrap_or_else(|| "Usuario".to_string());
    dom::set_text("meUser", &nombre);

    let rol = me
        .and_then(|m| m.role)
        .map(|r| r.trim().to_string())
        .filter(|r| !r.is_empty())
        .unwrap_or_else(|| "—".to_string());
    dom::set_text("badgeRole", &rol);

    menu::render_menu(state);
}

/// Punto de entrada de la navegación: se invoca al cargar y en cada
/// `hashchange`.
pub async fn navigate(state: &AppState) {
    // Los hashes antiguos (#equipos) se reescriben; el hashchange resultante
    // vuelve a entrar por aquí ya normalizado.
    if let Some(arreglado) = router::normaliza_hash(&dom::current_hash()) {
        dom::set_hash(&arreglado);
        return;
    }

    let route = Route::parse(&dom::current_hash());
    render_chrome(state);
    alerts::clear_alert();

    if !state.session.con_sesion() {
        login::render(state);
        return;
    }

    match route {
        Route::Planificacion => planificacion::load(state).await,
        Route::Equipos => semaforos::load(state, Categoria::Equipos).await,
        Route::Gruas => semaforos::load(state, Categoria::Gruas).await,
        Route::Auxiliares => semaforos::load(state, Categoria::Auxiliares).await,
        Route::Incidencias => incidencias::load(state).await,
        Route::Inventario => inventario::load(state).await,
        Route::Solicitudes => solicitudes::load(state).await,
        Route::Repuestos => inventario::load_catalogo(state).await,
        Route::Externas => externas::load(state).await,
        Route::Ot => ot::load(state).await,
        Route::Kpi => kpi::load(state).await,
    }
}

/// Variante para closures: clona el estado y navega en un task local.
pub fn lanzar_navegacion(state: AppState) {
    wasm_bindgen_futures::spawn_local(async move {
        navigate(&state).await;
    });
}

/// Mensaje de "cargando" mientras llega la respuesta del backend.
pub fn render_cargando() {
    dom::set_inner_html(VIEW_HOST, r#"<div class="p-3">Cargando…</div>"#);
}

/// Pinta el error de carga de una vista.
pub fn render_error(titulo: &str, error: &str) {
    dom::set_inner_html(
        VIEW_HOST,
        &format!(
            r#"<div class="p-3"><div class="alert alert-warning">No se pudo cargar <b>{}</b>: {}</div></div>"#,
            dom::escape_html(titulo),
            dom::escape_html(error)
        ),
    );
}
