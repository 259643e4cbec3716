// ============================================================================
// APP - Aplicación principal
// ============================================================================

use wasm_bindgen::JsValue;

use crate::dom;
use crate::services::session_service;
use crate::state::AppState;
use crate::views;

/// Aplicación principal: estado + cableado global.
#[derive(Clone)]
pub struct App {
    state: AppState,
}

impl App {
    /// Crear nueva aplicación. Falla si el documento no tiene el contenedor
    /// de vistas.
    pub fn new() -> Result<Self, JsValue> {
        if dom::get_element_by_id(views::VIEW_HOST).is_none() {
            return Err(JsValue::from_str("No existe el elemento #viewHost"));
        }
        Ok(Self {
            state: AppState::new(),
        })
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Arranque: listeners globales (una sola vez), restauración de sesión y
    /// primera navegación.
    pub fn boot(&self) {
        // hashchange -> navegar
        {
            let state = self.state.clone();
            dom::on_hashchange(move |_e| {
                views::lanzar_navegacion(state.clone());
            });
        }

        // Logout en la barra superior
        {
            let state = self.state.clone();
            dom::on_click_id("btnLogout", move |e| {
                e.prevent_default();
                session_service::logout(&state);
                dom::set_hash("#/planificacion");
                views::lanzar_navegacion(state.clone());
            });
        }

        // Restaurar sesión y pintar la primera vista
        let state = self.state.clone();
        wasm_bindgen_futures::spawn_local(async move {
            if let Err(e) = session_service::ensure_bootstrap(&state).await {
                log::warn!("Arranque sin sesión: {}", e);
            }
            views::navigate(&state).await;
        });
    }
}
