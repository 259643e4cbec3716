// ============================================================================
// APP STATE - Estado global de la aplicación
// ============================================================================
// Estructura explícita que se clona (barato: todo es Rc) hacia cada vista y
// cada closure; no hay singletons mutables a nivel de módulo.

use std::cell::RefCell;
use std::rc::Rc;

use crate::models::EquipmentRef;
use crate::state::SessionState;

/// Selección transitoria de la vista de planificación.
///
/// Vive una sesión de página: se crea al entrar en la vista, se sobrescribe
/// con cada clic y nunca se persiste.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Seleccion {
    pub linea: Option<String>,
    pub equipo_id: Option<String>,
    pub equipo_nombre: Option<String>,
}

impl Seleccion {
    pub fn elegir_linea(&mut self, linea: &str) {
        self.linea = Some(linea.to_string());
        self.equipo_id = None;
        self.equipo_nombre = None;
    }

    pub fn elegir_equipo(&mut self, equipo: &EquipmentRef) {
        self.equipo_id = Some(equipo.id_limpio().to_string());
        self.equipo_nombre = Some(equipo.nombre.trim().to_string());
    }
}

/// Estado global de la aplicación.
#[derive(Clone)]
pub struct AppState {
    pub session: SessionState,

    // Selección de la vista de planificación
    pub seleccion: Rc<RefCell<Seleccion>>,

    // Caché de listados (se rellena al visitar cada tablero)
    pub cache_equipos: Rc<RefCell<Vec<EquipmentRef>>>,

    // Reactividad: callbacks notificados tras cambios de estado
    pub change_subscribers: Rc<RefCell<Vec<Rc<dyn Fn()>>>>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            session: SessionState::new(),
            seleccion: Rc::new(RefCell::new(Seleccion::default())),
            cache_equipos: Rc::new(RefCell::new(Vec::new())),
            change_subscribers: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn subscribe<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.change_subscribers.borrow_mut().push(Rc::new(callback));
    }

    pub fn notify_change(&self) {
        let subscribers = self.change_subscribers.borrow().clone();
        for callback in subscribers {
            callback();
        }
    }

    /// Resuelve el equipo seleccionado contra la caché de equipos.
    /// Si el id no resuelve, devuelve `None` y el matcher queda en abierto.
    pub fn equipo_seleccionado(&self) -> Option<EquipmentRef> {
        let id = self.seleccion.borrow().equipo_id.clone()?;
        let cache = self.cache_equipos.borrow();
        crate::models::resolver_equipo(&cache, &id).cloned()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn equipo(id: &str, nombre: &str, linea: &str) -> EquipmentRef {
        EquipmentRef {
            id: id.into(),
            nombre: nombre.into(),
            modelo: String::new(),
            linea: linea.into(),
        }
    }

    #[test]
    fn elegir_linea_borra_el_equipo() {
        let mut sel = Seleccion::default();
        sel.elegir_equipo(&equipo("KDP1", "Kaltenbach KDP1", "N1"));
        assert_eq!(sel.equipo_id.as_deref(), Some("KDP1"));
        sel.elegir_linea("N2");
        assert_eq!(sel.linea.as_deref(), Some("N2"));
        assert!(sel.equipo_id.is_none());
        assert!(sel.equipo_nombre.is_none());
    }

    #[test]
    fn seleccion_sin_resolver_queda_en_none() {
        let state = AppState::new();
        state.seleccion.borrow_mut().equipo_id = Some("FANTASMA".into());
        assert!(state.equipo_seleccionado().is_none());
    }

    #[test]
    fn seleccion_resuelta_contra_la_cache() {
        let state = AppState::new();
        *state.cache_equipos.borrow_mut() = vec![equipo("KDP3", "Kaltenbach KDP3", "N1")];
        state.seleccion.borrow_mut().equipo_id = Some(" KDP3 ".into());
        let eq = state.equipo_seleccionado().unwrap();
        assert_eq!(eq.nombre, "Kaltenbach KDP3");
    }

    #[test]
    fn notify_llama_a_los_suscriptores() {
        let state = AppState::new();
        let contador = Rc::new(RefCell::new(0));
        let c = contador.clone();
        state.subscribe(move || *c.borrow_mut() += 1);
        state.notify_change();
        state.notify_change();
        assert_eq!(*contador.borrow(), 2);
    }
}
