// ============================================================================
// FLEX - Lecturas tolerantes de valores JSON de la hoja de cálculo
// ============================================================================
// El backend devuelve celdas tal cual: un stock puede llegar como 3, "3" o
// "3,5"; un booleano como true, "TRUE", "sí" o 1. Estos helpers centralizan
// esa tolerancia para que los modelos no repitan cadenas de `match`.

use serde_json::Value;

/// Convierte cualquier valor de celda a texto para mostrar.
pub fn as_texto(v: &Value) -> String {
    match v {
        Value::Null => String::new(),
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        other => other.to_string(),
    }
}

/// Interpreta un valor de celda como número, si se puede.
pub fn as_numero(v: &Value) -> Option<f64> {
    match v {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => {
            let limpio = s.trim().replace(',', ".");
            limpio.parse::<f64>().ok()
        }
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        _ => None,
    }
}

/// Interpreta un valor de celda como booleano.
///
/// Acepta los formatos que aparecen en las hojas históricas: booleanos JSON,
/// números distintos de cero y los textos "true"/"verdadero"/"sí"/"si"/"x"/"1".
pub fn as_booleano(v: &Value) -> bool {
    match v {
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(false),
        Value::String(s) => {
            matches!(
                s.trim().to_lowercase().as_str(),
                "true" | "verdadero" | "sí" | "si" | "x" | "1" | "ok"
            )
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn texto_tolera_numeros_y_nulos() {
        assert_eq!(as_texto(&json!("  KDP1 ")), "KDP1");
        assert_eq!(as_texto(&json!(42)), "42");
        assert_eq!(as_texto(&Value::Null), "");
    }

    #[test]
    fn numero_acepta_coma_decimal() {
        assert_eq!(as_numero(&json!("3,5")), Some(3.5));
        assert_eq!(as_numero(&json!(7)), Some(7.0));
        assert_eq!(as_numero(&json!("no numérico")), None);
    }

    #[test]
    fn booleano_acepta_formatos_de_hoja() {
        assert!(as_booleano(&json!(true)));
        assert!(as_booleano(&json!("TRUE")));
        assert!(as_booleano(&json!("sí")));
        assert!(as_booleano(&json!(1)));
        assert!(!as_booleano(&json!("no")));
        assert!(!as_booleano(&json!("")));
        assert!(!as_booleano(&Value::Null));
    }
}
