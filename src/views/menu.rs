// ============================================================================
// MENU - Menú lateral gobernado por permisos
// ============================================================================

use crate::dom;
use crate::models::Perms;
use crate::router::Route;
use crate::state::AppState;

/// Construye los items visibles: páginas de `perms.pages`, en el orden fijo
/// del cuadro de mando. Sin permisos no hay menú.
pub fn menu_items(perms: Option<&Perms>) -> Vec<(Route, &'static str)> {
    let Some(p) = perms else {
        return Vec::new();
    };
    Route::TODAS
        .into_iter()
        .filter(|r| p.puede_ver(r.slug()))
        .map(|r| (r, r.titulo()))
        .collect()
}

pub fn render_menu(state: &AppState) {
    let perms = state.session.get_perms();
    let items = menu_items(perms.as_ref());

    if items.is_empty() {
        dom::set_inner_html("menuItems", "");
        return;
    }

    let html: String = items
        .iter()
        .map(|(ruta, etiqueta)| {
            format!(
                r##"<li class="list-group-item p-0"><a class="d-block px-3 py-2 text-decoration-none" href="#/{}">{}</a></li>"##,
                ruta.slug(),
                dom::escape_html(etiqueta)
            )
        })
        .collect();
    dom::set_inner_html("menuItems", &html);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn perms(paginas: &[&str]) -> Perms {
        Perms {
            pages: paginas.iter().map(|s| s.to_string()).collect(),
            admin: false,
        }
    }

    #[test]
    fn sin_permisos_no_hay_menu() {
        assert!(menu_items(None).is_empty());
        assert!(menu_items(Some(&perms(&[]))).is_empty());
    }

    #[test]
    fn filtra_por_paginas_visibles() {
        let p = perms(&["equipos", "kpi"]);
        let items = menu_items(Some(&p));
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].0, Route::Equipos);
        assert_eq!(items[1].0, Route::Kpi);
    }

    #[test]
    fn respeta_el_orden_del_menu_no_el_de_perms() {
        let p = perms(&["kpi", "planificacion"]);
        let items = menu_items(Some(&p));
        assert_eq!(items[0].0, Route::Planificacion);
        assert_eq!(items[1].0, Route::Kpi);
    }

    #[test]
    fn paginas_desconocidas_se_ignoran() {
        let p = perms(&["equipos", "pagina-futura"]);
        assert_eq!(menu_items(Some(&p)).len(), 1);
    }

    #[test]
    fn etiquetas_castellanas() {
        let p = perms(&["gruas", "externas", "solicitudes"]);
        let items = menu_items(Some(&p));
        let etiquetas: Vec<&str> = items.iter().map(|(_, e)| *e).collect();
        assert_eq!(etiquetas, vec!["Puentes grúa", "Nuevas solicitudes", "Subcontratas"]);
    }
}
