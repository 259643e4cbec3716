// ============================================================================
// PLANNING - Filas de la tabla de planificación de producción
// ============================================================================
// Las filas llegan tal cual de la hoja: las claves cambian de caja según la
// época del dato (`output`, `OUTPUT`, `Output`…) y `input` es un alias
// heredado de `maquina`. En lugar de cadenas de `||` repartidas por el
// renderizado, cada campo se lee con una lista fija de alias.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::models::flex;

/// Fila de planificación: registro opaco de la hoja.
///
/// El cliente nunca muta la fila; las modificaciones van por `plan.update`.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
#[serde(transparent)]
pub struct PlanningRow(pub Map<String, Value>);

/// Alias conocidos por campo lógico. El orden es el de preferencia.
const ALIAS_OUTPUT: &[&str] = &["output", "OUTPUT", "Output"];
const ALIAS_MAQUINA: &[&str] = &["maquina", "MAQUINA", "Maquina", "maq", "MAQ"];
const ALIAS_INPUT: &[&str] = &["input", "INPUT", "Input"];
const ALIAS_CLIENTE: &[&str] = &["cliente", "CLIENTE", "Cliente"];
const ALIAS_PICKING: &[&str] = &["picking", "PICKING", "Picking"];
const ALIAS_KGS: &[&str] = &["kgs", "KGS", "Kgs", "kg", "KG"];
const ALIAS_COMENTARIOS: &[&str] = &["comentarios", "COMENTARIOS", "Comentarios", "comentario"];
const ALIAS_ALIMENTADO: &[&str] = &["alimentado", "ALIMENTADO", "Alimentado"];
const ALIAS_TERMINADO: &[&str] = &["terminado", "TERMINADO", "Terminado"];
const ALIAS_TS: &[&str] = &["ts", "TS", "timestamp", "fecha"];

/// Devuelve el primer valor presente probando una lista fija de alias.
pub fn valor_por_alias<'a>(mapa: &'a Map<String, Value>, alias: &[&str]) -> Option<&'a Value> {
    alias.iter().find_map(|k| mapa.get(*k))
}

impl PlanningRow {
    fn texto(&self, alias: &[&str]) -> String {
        valor_por_alias(&self.0, alias)
            .map(flex::as_texto)
            .unwrap_or_default()
    }

    fn booleano(&self, alias: &[&str]) -> bool {
        valor_por_alias(&self.0, alias)
            .map(flex::as_booleano)
            .unwrap_or(false)
    }

    pub fn output(&self) -> String {
        self.texto(ALIAS_OUTPUT)
    }

    pub fn maquina(&self) -> String {
        self.texto(ALIAS_MAQUINA)
    }

    /// Alias heredado de `maquina` en datos antiguos.
    pub fn input_legacy(&self) -> String {
        self.texto(ALIAS_INPUT)
    }

    pub fn cliente(&self) -> String {
        self.texto(ALIAS_CLIENTE)
    }

    /// Identificador de fila dentro de la hoja de planificación.
    pub fn picking(&self) -> String {
        self.texto(ALIAS_PICKING)
    }

    pub fn kgs(&self) -> String {
        self.texto(ALIAS_KGS)
    }

    pub fn comentarios(&self) -> String {
        self.texto(ALIAS_COMENTARIOS)
    }

    pub fn alimentado(&self) -> bool {
        self.booleano(ALIAS_ALIMENTADO)
    }

    pub fn terminado(&self) -> bool {
        self.booleano(ALIAS_TERMINADO)
    }

    pub fn ts(&self) -> String {
        self.texto(ALIAS_TS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    pub fn fila(v: Value) -> PlanningRow {
        serde_json::from_value(v).unwrap()
    }

    #[test]
    fn lee_claves_en_cualquier_caja() {
        let r = fila(json!({"OUTPUT": "KDP1", "Maquina": "LASER-2", "picking": "P-0012"}));
        assert_eq!(r.output(), "KDP1");
        assert_eq!(r.maquina(), "LASER-2");
        assert_eq!(r.picking(), "P-0012");
    }

    #[test]
    fn prefiere_la_clave_moderna() {
        let r = fila(json!({"output": "nuevo", "OUTPUT": "viejo"}));
        assert_eq!(r.output(), "nuevo");
    }

    #[test]
    fn maq_es_alias_de_maquina() {
        let r = fila(json!({"MAQ": "KDM"}));
        assert_eq!(r.maquina(), "KDM");
    }

    #[test]
    fn campos_ausentes_degradan_a_vacio() {
        let r = fila(json!({}));
        assert_eq!(r.output(), "");
        assert_eq!(r.cliente(), "");
        assert!(!r.alimentado());
        assert!(!r.terminado());
    }

    #[test]
    fn booleanos_de_hoja() {
        let r = fila(json!({"alimentado": "TRUE", "TERMINADO": 0}));
        assert!(r.alimentado());
        assert!(!r.terminado());
    }

    #[test]
    fn kgs_numerico_o_texto() {
        assert_eq!(fila(json!({"kgs": 1250})).kgs(), "1250");
        assert_eq!(fila(json!({"KGS": "1.250,5"})).kgs(), "1.250,5");
    }
}
