// ============================================================================
// LOGIN - Tarjeta de acceso cuando no hay sesión
// ============================================================================

use crate::dom;
use crate::services::session_service;
use crate::state::AppState;
use crate::views::{self, alerts, VIEW_HOST};

pub fn render(state: &AppState) {
    dom::set_inner_html(
        VIEW_HOST,
        r#"
        <div class="p-3" style="max-width: 420px; margin: 0 auto;">
          <div class="card">
            <div class="card-body">
              <h5 class="card-title">Entrar</h5>
              <div class="mb-2">
                <label class="form-label" for="loginUser">Usuario</label>
                <input class="form-control" id="loginUser" autocomplete="username">
              </div>
              <div class="mb-3">
                <label class="form-label" for="loginPass">Contraseña</label>
                <input class="form-control" id="loginPass" type="password" autocomplete="current-password">
              </div>
              <button class="btn btn-primary w-100" id="btnLogin">Entrar</button>
            </div>
          </div>
        </div>"#,
    );

    let hacer_login = {
        let state = state.clone();
        move || {
            let user = dom::input_value("loginUser");
            let pass = dom::input_value_raw("loginPass");
            if user.is_empty() || pass.is_empty() {
                alerts::show_alert("Introduce usuario y contraseña.", "warning");
                return;
            }
            let state = state.clone();
            wasm_bindgen_futures::spawn_local(async move {
                dom::set_text("btnLogin", "Entrando…");
                match session_service::login(&state, &user, &pass).await {
                    Ok(()) => {
                        views::navigate(&state).await;
                        alerts::show_alert("Sesión iniciada.", "success");
                    }
                    Err(e) => {
                        dom::set_text("btnLogin", "Entrar");
                        alerts::show_alert(&e, "danger");
                    }
                }
            });
        }
    };

    {
        let handler = hacer_login.clone();
        dom::on_click_id("btnLogin", move |e| {
            e.prevent_default();
            handler();
        });
    }
    dom::on_enter_id("loginUser", hacer_login.clone());
    dom::on_enter_id("loginPass", hacer_login);
}
