use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::flex;

/// Repuesto del catálogo / inventario de almacén.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct Repuesto {
    #[serde(default, alias = "CODIGO", alias = "Codigo", alias = "código")]
    pub codigo: String,
    #[serde(default, alias = "NOMBRE", alias = "Nombre")]
    pub nombre: String,
    #[serde(default, alias = "UBICACION", alias = "Ubicacion", alias = "ubicación")]
    pub ubicacion: String,
    #[serde(default, alias = "PROVEEDOR", alias = "Proveedor")]
    pub proveedor: String,
    // Las celdas numéricas llegan como número o como texto según la hoja.
    #[serde(default, alias = "STOCK", alias = "Stock")]
    pub stock: Value,
    #[serde(default, alias = "MINIMO", alias = "Minimo", alias = "mínimo")]
    pub minimo: Value,
}

impl Repuesto {
    pub fn stock_num(&self) -> f64 {
        flex::as_numero(&self.stock).unwrap_or(0.0)
    }

    pub fn minimo_num(&self) -> f64 {
        flex::as_numero(&self.minimo).unwrap_or(0.0)
    }

    /// Bajo mínimo: hay que reponer.
    pub fn bajo_stock(&self) -> bool {
        self.stock_num() <= self.minimo_num()
    }
}

/// Solicitud de repuesto que se envía con `rep.crear`.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct SolicitudNueva {
    pub repuesto: String,
    pub cantidad: String,
    pub motivo: String,
    pub elemento: String,
}

impl SolicitudNueva {
    /// La hoja exige al menos qué repuesto y cuánto.
    pub fn valida(&self) -> bool {
        !self.repuesto.trim().is_empty() && !self.cantidad.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn stock_numerico_o_texto() {
        let rep: Repuesto =
            serde_json::from_value(json!({"codigo":"R-01","STOCK":"4","minimo":2})).unwrap();
        assert_eq!(rep.stock_num(), 4.0);
        assert_eq!(rep.minimo_num(), 2.0);
        assert!(!rep.bajo_stock());
    }

    #[test]
    fn bajo_stock_en_el_limite() {
        let rep: Repuesto =
            serde_json::from_value(json!({"codigo":"R-02","stock":2,"minimo":2})).unwrap();
        assert!(rep.bajo_stock());
    }

    #[test]
    fn sin_stock_cuenta_como_cero() {
        let rep: Repuesto = serde_json::from_value(json!({"codigo":"R-03"})).unwrap();
        assert_eq!(rep.stock_num(), 0.0);
        assert!(rep.bajo_stock());
    }

    #[test]
    fn solicitud_valida_requiere_repuesto_y_cantidad() {
        let mut sol = SolicitudNueva::default();
        assert!(!sol.valida());
        sol.repuesto = "Rodamiento 6204".into();
        assert!(!sol.valida());
        sol.cantidad = "2".into();
        assert!(sol.valida());
    }
}
