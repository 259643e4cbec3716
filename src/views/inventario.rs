// ============================================================================
// INVENTARIO / REPUESTOS - Catálogo con buscador y aviso de bajo stock
// ============================================================================
// Las dos páginas comparten renderizador: "inventario" es el almacén con
// stock y mínimos; "repuestos" es el catálogo completo.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;

use crate::domain::norm_key;
use crate::dom;
use crate::models::Repuesto;
use crate::services::ApiClient;
use crate::state::AppState;
use crate::views::{self, VIEW_HOST};

#[derive(Clone, Copy, PartialEq, Eq)]
enum Modo {
    Inventario,
    Catalogo,
}

impl Modo {
    fn titulo(&self) -> &'static str {
        match self {
            Modo::Inventario => "Inventario",
            Modo::Catalogo => "Repuestos",
        }
    }
}

pub async fn load(state: &AppState) {
    cargar(state, Modo::Inventario).await;
}

pub async fn load_catalogo(state: &AppState) {
    cargar(state, Modo::Catalogo).await;
}

async fn cargar(state: &AppState, modo: Modo) {
    let Some(token) = state.session.get_token() else {
        return;
    };
    views::render_cargando();

    let api = ApiClient::new();
    let resultado = match modo {
        Modo::Inventario => api.inventario(&token).await,
        Modo::Catalogo => api.repuestos(&token).await,
    };
    match resultado {
        Ok(repuestos) => render(state.clone(), modo, Rc::new(repuestos), String::new()),
        Err(e) => views::render_error(modo.titulo(), &e),
    }
}

/// Buscador del catálogo: clave normalizada contra código, nombre, ubicación
/// y proveedor.
pub fn filtrar_repuestos<'a>(repuestos: &'a [Repuesto], consulta: &str) -> Vec<&'a Repuesto> {
    let clave = norm_key(consulta);
    if clave.is_empty() {
        return repuestos.iter().collect();
    }
    repuestos
        .iter()
        .filter(|r| {
            norm_key(&r.codigo).contains(&clave)
                || norm_key(&r.nombre).contains(&clave)
                || norm_key(&r.ubicacion).contains(&clave)
                || norm_key(&r.proveedor).contains(&clave)
        })
        .collect()
}

fn render(state: AppState, modo: Modo, repuestos: Rc<Vec<Repuesto>>, consulta: String) {
    let visibles = filtrar_repuestos(&repuestos, &consulta);

    let mut html = format!(
        r#"<div class="p-3"><h4>{}</h4>
          <input class="form-control mb-3" id="invQuery" placeholder="Buscar repuesto…" {}>
          <div class="table-responsive"><table class="table table-sm align-middle">
          <thead><tr><th>Código</th><th>Nombre</th><th>Ubicación</th><th>Proveedor</th><th>Stock</th></tr></thead>
          <tbody>"#,
        dom::escape_html(modo.titulo()),
        dom::attr("value", &consulta),
    );

    for rep in &visibles {
        let stock = if rep.bajo_stock() {
            format!(
                r#"<span class="badge bg-danger">{} / mín {}</span>"#,
                rep.stock_num(),
                rep.minimo_num()
            )
        } else {
            format!("{}", rep.stock_num())
        };
        html.push_str(&format!(
            r#"<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>"#,
            dom::escape_html(&rep.codigo),
            dom::escape_html(&rep.nombre),
            dom::escape_html(&rep.ubicacion),
            dom::escape_html(&rep.proveedor),
            stock,
        ));
    }
    if visibles.is_empty() {
        html.push_str(r#"<tr><td colspan="5" class="text-muted">Sin resultados.</td></tr>"#);
    }

    html.push_str("</tbody></table></div></div>");
    dom::set_inner_html(VIEW_HOST, &html);

    // Buscador con debounce
    let pendiente: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
    dom::on_input_id("invQuery", move |_e| {
        let state = state.clone();
        let repuestos = repuestos.clone();
        let consulta = dom::input_value("invQuery");
        *pendiente.borrow_mut() = Some(Timeout::new(250, move || {
            render(state, modo, repuestos, consulta);
        }));
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn repuestos() -> Vec<Repuesto> {
        vec![
            serde_json::from_value(
                json!({"codigo":"R-01","nombre":"Rodamiento 6204","ubicacion":"Estantería A","stock":4,"minimo":2}),
            )
            .unwrap(),
            serde_json::from_value(
                json!({"codigo":"R-02","nombre":"Correa trapezoidal","ubicacion":"Almacén 2","proveedor":"Suministros Pérez","stock":1,"minimo":3}),
            )
            .unwrap(),
        ]
    }

    #[test]
    fn consulta_vacia_todo() {
        assert_eq!(filtrar_repuestos(&repuestos(), "").len(), 2);
    }

    #[test]
    fn busca_por_nombre_sin_tildes() {
        let lista = repuestos();
        let res = filtrar_repuestos(&lista, "almacen");
        assert_eq!(res.len(), 1);
        assert_eq!(res[0].codigo, "R-02");
    }

    #[test]
    fn busca_por_proveedor() {
        let lista = repuestos();
        assert_eq!(filtrar_repuestos(&lista, "perez").len(), 1);
    }

    #[test]
    fn busca_por_codigo() {
        let lista = repuestos();
        assert_eq!(filtrar_repuestos(&lista, "r01").len(), 1);
    }
}
