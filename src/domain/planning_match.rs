// ============================================================================
// PLANNING MATCH - Qué filas de planificación pertenecen a un equipo
// ============================================================================
// El backend no filtra la tabla por equipo, y las columnas OUTPUT/MAQUINA
// arrastran años de estilos de escritura distintos. El emparejado es una
// heurística por capas: caso especial de pintura, contención bidireccional y
// familias de alias escritas a mano para ids con el infijo "N" inconsistente.

use crate::domain::normalize::norm_key;
use crate::models::{EquipmentRef, PlanningRow};

/// Familias de ids equivalentes en la hoja. No hay tabla declarativa: un
/// equipo nuevo con el mismo problema se añade aquí a mano.
const FAMILIAS_ALIAS: &[&[&str]] = &[&["KDP3", "KDPN3"], &["KDP1", "KDPN1"]];

const PINTURA: &str = "PINTURA";

/// Filtra las filas de planificación relevantes para el equipo seleccionado.
///
/// Con `None` (selección sin resolver) devuelve todas las filas: ante la duda
/// se muestra de más, nunca se oculta trabajo planificado.
/// Nunca muta las filas de entrada.
pub fn match_rows<'a>(
    rows: &'a [PlanningRow],
    equipo: Option<&EquipmentRef>,
) -> Vec<&'a PlanningRow> {
    let Some(eq) = equipo else {
        return rows.iter().collect();
    };

    let nombre = norm_key(&eq.nombre);
    let modelo = norm_key(&eq.modelo);

    rows.iter()
        .filter(|fila| fila_pertenece(fila, &nombre, &modelo))
        .collect()
}

fn fila_pertenece(fila: &PlanningRow, nombre: &str, modelo: &str) -> bool {
    let campos = [
        norm_key(&fila.output()),
        norm_key(&fila.maquina()),
        norm_key(&fila.input_legacy()),
    ];

    // Las filas de la línea de pintura se etiquetan por proceso, no por id.
    if nombre.contains(PINTURA) {
        return campos.iter().any(|c| c.contains(PINTURA));
    }

    for campo in campos.iter().filter(|c| !c.is_empty()) {
        if contencion(campo, nombre) || contencion(campo, modelo) {
            return true;
        }
        if alias_explicito(campo, nombre) {
            return true;
        }
    }
    false
}

/// Contención en ambos sentidos: la hoja trunca unas veces y rellena otras.
fn contencion(a: &str, b: &str) -> bool {
    !a.is_empty() && !b.is_empty() && (a.contains(b) || b.contains(a))
}

fn alias_explicito(campo: &str, nombre: &str) -> bool {
    FAMILIAS_ALIAS.iter().any(|familia| {
        familia.iter().any(|id| contencion(nombre, id))
            && familia.iter().any(|id| campo.contains(id))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fila(v: serde_json::Value) -> PlanningRow {
        serde_json::from_value(v).unwrap()
    }

    fn equipo(nombre: &str, modelo: &str) -> EquipmentRef {
        EquipmentRef {
            id: nombre.to_string(),
            nombre: nombre.to_string(),
            modelo: modelo.to_string(),
            linea: String::new(),
        }
    }

    #[test]
    fn caso_especial_pintura() {
        let filas = vec![
            fila(json!({"output": "PINTURA-1"})),
            fila(json!({"output": "KDP1"})),
        ];
        let eq = equipo("Pintura", "");
        let res = match_rows(&filas, Some(&eq));
        assert_eq!(res.len(), 1);
        assert_eq!(res[0].output(), "PINTURA-1");
    }

    #[test]
    fn pintura_mira_todos_los_campos() {
        let filas = vec![fila(json!({"maquina": "Horno pintura"}))];
        let eq = equipo("Línea de Pintura", "");
        assert_eq!(match_rows(&filas, Some(&eq)).len(), 1);
    }

    #[test]
    fn contencion_bidireccional() {
        let filas = vec![
            fila(json!({"maquina": "Mazak FG-400"})),
            fila(json!({"maquina": "LASER-2"})),
        ];
        // Nombre corto contra campo largo
        let eq = equipo("Mazak", "");
        assert_eq!(match_rows(&filas, Some(&eq)).len(), 1);
        // Nombre largo contra campo corto
        let eq = equipo("Láser 2 Trumpf", "LASER2");
        let res = match_rows(&filas, Some(&eq));
        assert_eq!(res.len(), 1);
        assert_eq!(res[0].maquina(), "LASER-2");
    }

    #[test]
    fn alias_kdp_con_infijo_n() {
        let filas = vec![
            fila(json!({"maquina": "KDPN3"})),
            fila(json!({"maquina": "LASER-2"})),
        ];
        let eq = equipo("KDP3", "");
        let res = match_rows(&filas, Some(&eq));
        assert_eq!(res.len(), 1);
        assert_eq!(res[0].maquina(), "KDPN3");
    }

    #[test]
    fn alias_kdp1_en_ambos_sentidos() {
        let filas = vec![fila(json!({"output": "KDP1"}))];
        let eq = equipo("KDPN1", "");
        assert_eq!(match_rows(&filas, Some(&eq)).len(), 1);
    }

    #[test]
    fn sin_equipo_resuelto_devuelve_todo() {
        let filas = vec![
            fila(json!({"output": "KDP1"})),
            fila(json!({"output": "LASER-2"})),
            fila(json!({})),
        ];
        let res = match_rows(&filas, None);
        assert_eq!(res.len(), 3);
    }

    #[test]
    fn no_muta_las_filas() {
        let filas = vec![fila(json!({"output": "KDP1", "picking": "P-1"}))];
        let antes = filas.clone();
        let eq = equipo("KDP1", "");
        let _ = match_rows(&filas, Some(&eq));
        assert_eq!(filas, antes);
    }

    #[test]
    fn campos_con_caja_alternativa() {
        let filas = vec![fila(json!({"OUTPUT": "kdp-1"}))];
        let eq = equipo("KDP1", "");
        assert_eq!(match_rows(&filas, Some(&eq)).len(), 1);
    }

    #[test]
    fn modelo_tambien_cuenta() {
        let filas = vec![fila(json!({"maquina": "FG400"}))];
        let eq = equipo("Sierra principal", "Mazak FG-400 NEO");
        assert_eq!(match_rows(&filas, Some(&eq)).len(), 1);
    }

    #[test]
    fn fila_vacia_no_casa() {
        let filas = vec![fila(json!({}))];
        let eq = equipo("KDP1", "");
        assert!(match_rows(&filas, Some(&eq)).is_empty());
    }

    #[test]
    fn input_legado_sigue_casando() {
        let filas = vec![fila(json!({"INPUT": "KDP3"}))];
        let eq = equipo("KDP3", "");
        assert_eq!(match_rows(&filas, Some(&eq)).len(), 1);
    }
}
