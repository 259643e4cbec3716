// ============================================================================
// ROUTER - Enrutado por hash (#/pagina)
// ============================================================================

/// Páginas del cuadro de mando. El orden de `TODAS` es el del menú lateral.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Route {
    Planificacion,
    Equipos,
    Gruas,
    Auxiliares,
    Incidencias,
    Inventario,
    Solicitudes,
    Repuestos,
    Externas,
    Ot,
    Kpi,
}

impl Route {
    pub const TODAS: [Route; 11] = [
        Route::Planificacion,
        Route::Equipos,
        Route::Gruas,
        Route::Auxiliares,
        Route::Incidencias,
        Route::Inventario,
        Route::Solicitudes,
        Route::Repuestos,
        Route::Externas,
        Route::Ot,
        Route::Kpi,
    ];

    /// Segmento del hash y clave de permisos (`perms.pages`).
    pub fn slug(&self) -> &'static str {
        match self {
            Route::Planificacion => "planificacion",
            Route::Equipos => "equipos",
            Route::Gruas => "gruas",
            Route::Auxiliares => "auxiliares",
            Route::Incidencias => "incidencias",
            Route::Inventario => "inventario",
            Route::Solicitudes => "solicitudes",
            Route::Repuestos => "repuestos",
            Route::Externas => "externas",
            Route::Ot => "ot",
            Route::Kpi => "kpi",
        }
    }

    /// Etiqueta del menú lateral.
    pub fn titulo(&self) -> &'static str {
        match self {
            Route::Planificacion => "Planificación",
            Route::Equipos => "Equipos",
            Route::Gruas => "Puentes grúa",
            Route::Auxiliares => "Auxiliares",
            Route::Incidencias => "Incidencias",
            Route::Inventario => "Inventario",
            Route::Solicitudes => "Nuevas solicitudes",
            Route::Repuestos => "Repuestos",
            Route::Externas => "Subcontratas",
            Route::Ot => "OT",
            Route::Kpi => "KPIs",
        }
    }

    /// Interpreta un hash de navegador. Admite los hashes antiguos sin barra
    /// (`#equipos`) además de la forma moderna (`#/equipos`). Cualquier cosa
    /// no reconocida cae en Planificación.
    pub fn parse(hash: &str) -> Route {
        let limpio = hash
            .trim()
            .trim_start_matches('#')
            .trim_start_matches('/');
        // Ignorar posibles parámetros tras el segmento
        let segmento = limpio.split(['?', '&']).next().unwrap_or("");
        Route::TODAS
            .into_iter()
            .find(|r| r.slug() == segmento)
            .unwrap_or(Route::Planificacion)
    }
}

/// Reescribe los hashes antiguos `#pagina` a la forma `#/pagina`.
/// Devuelve `None` si el hash ya está bien (o está vacío).
pub fn normaliza_hash(hash: &str) -> Option<String> {
    if hash.is_empty() || hash.starts_with("#/") || !hash.starts_with('#') {
        return None;
    }
    if hash.len() > 1 {
        Some(format!("#/{}", &hash[1..]))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parsea_forma_moderna() {
        assert_eq!(Route::parse("#/equipos"), Route::Equipos);
        assert_eq!(Route::parse("#/kpi"), Route::Kpi);
    }

    #[test]
    fn parsea_forma_antigua() {
        assert_eq!(Route::parse("#incidencias"), Route::Incidencias);
    }

    #[test]
    fn desconocido_y_vacio_caen_en_planificacion() {
        assert_eq!(Route::parse(""), Route::Planificacion);
        assert_eq!(Route::parse("#/"), Route::Planificacion);
        assert_eq!(Route::parse("#/no-existe"), Route::Planificacion);
    }

    #[test]
    fn ignora_parametros() {
        assert_eq!(Route::parse("#/inventario?q=rodamiento"), Route::Inventario);
    }

    #[test]
    fn normaliza_solo_los_antiguos() {
        assert_eq!(normaliza_hash("#equipos"), Some("#/equipos".to_string()));
        assert_eq!(normaliza_hash("#/equipos"), None);
        assert_eq!(normaliza_hash(""), None);
        assert_eq!(normaliza_hash("#"), None);
    }

    #[test]
    fn cada_slug_se_parsea_a_si_mismo() {
        for r in Route::TODAS {
            assert_eq!(Route::parse(&format!("#/{}", r.slug())), r);
        }
    }
}
