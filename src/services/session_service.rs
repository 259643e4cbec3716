// ============================================================================
// SESSION SERVICE - Login, bootstrap y logout
// ============================================================================

use crate::services::ApiClient;
use crate::state::AppState;

/// Garantiza que el estado de sesión refleja el backend.
///
/// Sin token (ni en memoria ni en localStorage) limpia el estado y devuelve
/// `Ok(false)`. Con token llama a `bootstrap`; si el backend lo rechaza
/// (caducado, revocado) la sesión se limpia y el error se propaga.
pub async fn ensure_bootstrap(state: &AppState) -> Result<bool, String> {
    let Some(token) = state.session.restore_token() else {
        state.session.limpiar();
        return Ok(false);
    };

    let api = ApiClient::new();
    match api.bootstrap(&token).await {
        Ok(boot) => {
            state.session.aplicar_bootstrap(boot);
            log::info!("Bootstrap cargado; sesión activa");
            Ok(true)
        }
        Err(e) => {
            log::warn!("Bootstrap rechazado: {}", e);
            state.session.limpiar();
            Err(e)
        }
    }
}

/// Login completo: credenciales → token → bootstrap.
pub async fn login(state: &AppState, user: &str, pass: &str) -> Result<(), String> {
    let api = ApiClient::new();
    let token = api.login(user, pass).await?;
    state.session.set_token(Some(token));
    ensure_bootstrap(state).await?;
    Ok(())
}

/// Cierra la sesión y limpia todo el estado derivado de ella.
pub fn logout(state: &AppState) {
    state.session.limpiar();
    *state.seleccion.borrow_mut() = Default::default();
    state.cache_equipos.borrow_mut().clear();
    log::info!("Sesión cerrada");
}
