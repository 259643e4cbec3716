// ============================================================================
// SESSION STATE - Token, usuario, permisos y semáforos cacheados
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::models::{Bootstrap, Categoria, Me, Perms, SemaforoCache};
use crate::utils::constants::TOKEN_KEY;
use crate::utils::storage;

/// Estado de sesión con vida de página-a-logout.
#[derive(Clone)]
pub struct SessionState {
    pub token: Rc<RefCell<Option<String>>>,
    pub me: Rc<RefCell<Option<Me>>>,
    pub perms: Rc<RefCell<Option<Perms>>>,
    pub semaforos: Rc<RefCell<SemaforoCache>>,
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            token: Rc::new(RefCell::new(None)),
            me: Rc::new(RefCell::new(None)),
            perms: Rc::new(RefCell::new(None)),
            semaforos: Rc::new(RefCell::new(SemaforoCache::default())),
        }
    }

    /// Fija el token y lo persiste en localStorage.
    pub fn set_token(&self, token: Option<String>) {
        match &token {
            Some(t) => {
                if let Err(e) = storage::save_to_storage(TOKEN_KEY, t) {
                    log::error!("No se pudo guardar el token: {}", e);
                }
            }
            None => {
                let _ = storage::remove_from_storage(TOKEN_KEY);
            }
        }
        *self.token.borrow_mut() = token;
    }

    pub fn get_token(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    /// Recupera el token persistido de una sesión anterior.
    pub fn restore_token(&self) -> Option<String> {
        if self.token.borrow().is_some() {
            return self.token.borrow().clone();
        }
        let guardado: Option<String> = storage::load_from_storage(TOKEN_KEY);
        if let Some(t) = &guardado {
            *self.token.borrow_mut() = Some(t.clone());
        }
        guardado
    }

    /// Vuelca la respuesta del bootstrap sobre el estado.
    pub fn aplicar_bootstrap(&self, boot: Bootstrap) {
        *self.me.borrow_mut() = boot.me;
        *self.perms.borrow_mut() = boot.perms;
        if let Some(sem) = boot.semaforos {
            *self.semaforos.borrow_mut() = sem;
        }
    }

    pub fn get_me(&self) -> Option<Me> {
        self.me.borrow().clone()
    }

    pub fn get_perms(&self) -> Option<Perms> {
        self.perms.borrow().clone()
    }

    pub fn es_admin(&self) -> bool {
        self.perms.borrow().as_ref().map(|p| p.admin).unwrap_or(false)
    }

    pub fn estado_semaforo(&self, categoria: Categoria, id: &str) -> String {
        self.semaforos.borrow().estado_de(categoria, id)
    }

    pub fn fijar_semaforo(&self, categoria: Categoria, id: &str, estado: &str) {
        self.semaforos.borrow_mut().fijar(categoria, id, estado);
    }

    /// Limpia toda la sesión (logout o bootstrap fallido).
    pub fn limpiar(&self) {
        self.set_token(None);
        *self.me.borrow_mut() = None;
        *self.perms.borrow_mut() = None;
        *self.semaforos.borrow_mut() = SemaforoCache::default();
    }

    pub fn con_sesion(&self) -> bool {
        self.token.borrow().is_some()
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}
