// ============================================================================
// NORMALIZE - Claves de comparación insensibles a caja, tildes y separadores
// ============================================================================

use unicode_normalization::UnicodeNormalization;

/// Genera la clave de comparación de un texto.
///
/// Descompone en NFD, descarta las marcas diacríticas, pasa a mayúsculas y
/// elimina todo lo que no sea letra o dígito ASCII. Los separadores se
/// eliminan por completo (sin insertar espacios): el matcher de planificación
/// compara por contención de subcadenas y un espacio rompería la contención
/// entre estilos de escritura ("KDP-1" frente a "KDP 1" frente a "KDP1").
///
/// Pura y total: definida para cualquier texto, sin camino de error.
pub fn norm_key(entrada: &str) -> String {
    entrada
        .nfd()
        .filter(|c| !es_marca(*c))
        .flat_map(char::to_uppercase)
        .filter(|c| c.is_ascii_alphanumeric())
        .collect()
}

/// Variante para campos opcionales: `None` equivale a texto vacío.
pub fn norm_opt(entrada: Option<&str>) -> String {
    entrada.map(norm_key).unwrap_or_default()
}

fn es_marca(c: char) -> bool {
    ('\u{0300}'..='\u{036F}').contains(&c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idempotente() {
        for s in ["Línea 4", "kdp-1", "  Horno pintura  ", "ÁÉÍÓÚ ñ"] {
            assert_eq!(norm_key(&norm_key(s)), norm_key(s));
        }
    }

    #[test]
    fn insensible_a_tildes() {
        assert_eq!(norm_key("Línea"), norm_key("LINEA"));
        assert_eq!(norm_key("grúa"), "GRUA");
        assert_eq!(norm_key("restricción"), "RESTRICCION");
    }

    #[test]
    fn elimina_separadores_sin_insertar_espacios() {
        assert_eq!(norm_key("KDP-1"), "KDP1");
        assert_eq!(norm_key("KDP 1"), "KDP1");
        assert_eq!(norm_key("  Mazak FG-400 NEO "), "MAZAKFG400NEO");
    }

    #[test]
    fn total_para_entradas_raras() {
        assert_eq!(norm_key(""), "");
        assert_eq!(norm_key("¡¿--!?"), "");
        assert_eq!(norm_opt(None), "");
        assert_eq!(norm_opt(Some("línea")), "LINEA");
    }

    #[test]
    fn conserva_digitos() {
        assert_eq!(norm_key("N1-02"), "N102");
    }
}
