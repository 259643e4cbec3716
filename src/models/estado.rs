// ============================================================================
// ESTADO - Semáforo de cuatro estados y su normalización
// ============================================================================

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Estado canónico del semáforo de un elemento.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Estado {
    Marcha,
    Restriccion,
    Parada,
    Reparacion,
}

impl Estado {
    pub const TODOS: [Estado; 4] = [
        Estado::Marcha,
        Estado::Restriccion,
        Estado::Parada,
        Estado::Reparacion,
    ];

    /// Valor canónico tal y como viaja por la API.
    pub fn clave(&self) -> &'static str {
        match self {
            Estado::Marcha => "marcha",
            Estado::Restriccion => "restriccion",
            Estado::Parada => "parada",
            Estado::Reparacion => "reparacion",
        }
    }

    /// Etiqueta para mostrar en la interfaz.
    pub fn etiqueta(&self) -> &'static str {
        match self {
            Estado::Marcha => "En marcha",
            Estado::Restriccion => "Con restricción",
            Estado::Parada => "Parada",
            Estado::Reparacion => "En reparación",
        }
    }

    /// Clase CSS del pill de estado (colores del semáforo).
    pub fn css(&self) -> &'static str {
        match self {
            Estado::Marcha => "estado-verde",
            Estado::Restriccion => "estado-amarillo",
            Estado::Parada => "estado-rojo",
            Estado::Reparacion => "estado-azul",
        }
    }

    /// Parseo estricto de los cuatro valores canónicos.
    pub fn parse(s: &str) -> Option<Estado> {
        match s.trim().to_lowercase().as_str() {
            "marcha" => Some(Estado::Marcha),
            "restriccion" => Some(Estado::Restriccion),
            "parada" => Some(Estado::Parada),
            "reparacion" => Some(Estado::Reparacion),
            _ => None,
        }
    }
}

/// Normaliza el vocabulario heterogéneo de estados a su forma canónica.
///
/// Acepta colores, sinónimos en castellano y equivalentes en inglés. Total:
/// todo texto produce un resultado. Un valor no reconocido se devuelve
/// recortado y en minúsculas (pasa tal cual); el vacío se interpreta como
/// `marcha`, el convenio más habitual en las hojas.
pub fn canonical_estado(entrada: &str) -> String {
    let limpio = entrada.trim().to_lowercase();
    match limpio.as_str() {
        "" => "marcha".to_string(),
        "verde" | "marcha" | "ok" | "operativo" => "marcha".to_string(),
        "amarillo" | "restriccion" | "restricción" => "restriccion".to_string(),
        "rojo" | "parada" | "stop" | "parado" => "parada".to_string(),
        "azul" | "reparacion" | "reparación" | "mantenimiento" | "averia" | "avería" => {
            "reparacion".to_string()
        }
        _ => limpio,
    }
}

/// Caché de semáforos por categoría, tal como llega en el bootstrap.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct SemaforoCache {
    #[serde(default)]
    pub equipos: HashMap<String, String>,
    #[serde(default)]
    pub gruas: HashMap<String, String>,
    #[serde(default)]
    pub auxiliares: HashMap<String, String>,
}

/// Categoría de elemento mantenible, usada por los tableros y `state.set_estado`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Categoria {
    Equipos,
    Gruas,
    Auxiliares,
}

impl Categoria {
    pub fn clave(&self) -> &'static str {
        match self {
            Categoria::Equipos => "equipos",
            Categoria::Gruas => "gruas",
            Categoria::Auxiliares => "auxiliares",
        }
    }

    pub fn titulo(&self) -> &'static str {
        match self {
            Categoria::Equipos => "Equipos",
            Categoria::Gruas => "Puentes grúa",
            Categoria::Auxiliares => "Auxiliares",
        }
    }
}

impl SemaforoCache {
    fn mapa(&self, categoria: Categoria) -> &HashMap<String, String> {
        match categoria {
            Categoria::Equipos => &self.equipos,
            Categoria::Gruas => &self.gruas,
            Categoria::Auxiliares => &self.auxiliares,
        }
    }

    fn mapa_mut(&mut self, categoria: Categoria) -> &mut HashMap<String, String> {
        match categoria {
            Categoria::Equipos => &mut self.equipos,
            Categoria::Gruas => &mut self.gruas,
            Categoria::Auxiliares => &mut self.auxiliares,
        }
    }

    /// Estado canónico de un elemento; sin entrada en la caché vale `marcha`.
    pub fn estado_de(&self, categoria: Categoria, id: &str) -> String {
        self.mapa(categoria)
            .get(id.trim())
            .map(|s| canonical_estado(s))
            .unwrap_or_else(|| "marcha".to_string())
    }

    /// Actualiza la caché local tras un `state.set_estado` aceptado.
    pub fn fijar(&mut self, categoria: Categoria, id: &str, estado: &str) {
        self.mapa_mut(categoria)
            .insert(id.trim().to_string(), canonical_estado(estado));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sinonimos_consistentes() {
        assert_eq!(canonical_estado("Verde"), "marcha");
        assert_eq!(canonical_estado("marcha"), "marcha");
        assert_eq!(canonical_estado("OK"), "marcha");
        assert_eq!(canonical_estado("AMARILLO"), "restriccion");
        assert_eq!(canonical_estado("restricción"), "restriccion");
        assert_eq!(canonical_estado("stop"), "parada");
        assert_eq!(canonical_estado("Parado"), "parada");
        assert_eq!(canonical_estado("Mantenimiento"), "reparacion");
        assert_eq!(canonical_estado("avería"), "reparacion");
    }

    #[test]
    fn canonicos_son_idempotentes() {
        for estado in Estado::TODOS {
            assert_eq!(canonical_estado(estado.clave()), estado.clave());
        }
    }

    #[test]
    fn vacio_por_defecto_marcha() {
        assert_eq!(canonical_estado(""), "marcha");
        assert_eq!(canonical_estado("   "), "marcha");
    }

    #[test]
    fn desconocido_pasa_tal_cual() {
        assert_eq!(canonical_estado("  Pendiente Revisión  "), "pendiente revisión");
    }

    #[test]
    fn cache_sin_entrada_vale_marcha() {
        let cache = SemaforoCache::default();
        assert_eq!(cache.estado_de(Categoria::Equipos, "KDP1"), "marcha");
    }

    #[test]
    fn cache_normaliza_al_fijar_y_leer() {
        let mut cache = SemaforoCache::default();
        cache.fijar(Categoria::Gruas, " N1-01 ", "Rojo");
        assert_eq!(cache.estado_de(Categoria::Gruas, "N1-01"), "parada");
    }

    #[test]
    fn parse_estricto_solo_canonicos() {
        assert_eq!(Estado::parse("parada"), Some(Estado::Parada));
        assert_eq!(Estado::parse("  MARCHA "), Some(Estado::Marcha));
        assert_eq!(Estado::parse("verde"), None);
    }
}
