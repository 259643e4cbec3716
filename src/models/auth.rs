use serde::{Deserialize, Serialize};

use crate::models::estado::SemaforoCache;

/// Usuario autenticado según el backend.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct Me {
    #[serde(default)]
    pub user: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

impl Me {
    /// Nombre a mostrar en la cabecera: name, luego user, luego email.
    pub fn display(&self) -> String {
        self.name
            .clone()
            .or_else(|| self.user.clone())
            .or_else(|| self.email.clone())
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| "Usuario".to_string())
    }
}

/// Permisos del usuario: páginas visibles y flag de administración.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct Perms {
    #[serde(default)]
    pub pages: Vec<String>,
    #[serde(default)]
    pub admin: bool,
}

impl Perms {
    pub fn puede_ver(&self, pagina: &str) -> bool {
        self.pages.iter().any(|p| p == pagina)
    }
}

/// Respuesta del endpoint `bootstrap`.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct Bootstrap {
    #[serde(default)]
    pub me: Option<Me>,
    #[serde(default)]
    pub perms: Option<Perms>,
    /// Semáforos cacheados; el backend los llama `state`.
    #[serde(default, rename = "state")]
    pub semaforos: Option<SemaforoCache>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_con_fallbacks() {
        let vacio = Me::default();
        assert_eq!(vacio.display(), "Usuario");

        let con_user = Me {
            user: Some("jgarcia".into()),
            ..Default::default()
        };
        assert_eq!(con_user.display(), "jgarcia");

        let con_nombre = Me {
            user: Some("jgarcia".into()),
            name: Some("Juan García".into()),
            ..Default::default()
        };
        assert_eq!(con_nombre.display(), "Juan García");
    }

    #[test]
    fn bootstrap_tolera_campos_ausentes() {
        let boot: Bootstrap = serde_json::from_str(r#"{"ok": true}"#).unwrap();
        assert!(boot.me.is_none());
        assert!(boot.perms.is_none());
        assert!(boot.semaforos.is_none());
    }

    #[test]
    fn bootstrap_lee_semaforos_de_state() {
        let boot: Bootstrap = serde_json::from_str(
            r#"{"me":{"user":"ana","role":"admin"},
                "perms":{"pages":["planificacion","equipos"],"admin":true},
                "state":{"equipos":{"KDP1":"verde"}}}"#,
        )
        .unwrap();
        assert!(boot.perms.as_ref().unwrap().puede_ver("equipos"));
        assert!(!boot.perms.as_ref().unwrap().puede_ver("kpi"));
        let sem = boot.semaforos.unwrap();
        assert_eq!(sem.equipos.get("KDP1").unwrap(), "verde");
    }
}
