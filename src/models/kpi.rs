use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::flex;

/// Indicador calculado por el backend (el cliente sólo lo pinta).
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct Kpi {
    #[serde(default, alias = "NOMBRE", alias = "Nombre")]
    pub nombre: String,
    #[serde(default, alias = "VALOR", alias = "Valor")]
    pub valor: Value,
    #[serde(default, alias = "UNIDAD", alias = "Unidad")]
    pub unidad: String,
    #[serde(default, alias = "PERIODO", alias = "Periodo", alias = "período")]
    pub periodo: String,
}

impl Kpi {
    /// Valor formateado para la tarjeta; las celdas llegan como número o texto.
    pub fn valor_texto(&self) -> String {
        match flex::as_numero(&self.valor) {
            Some(n) if n.fract() == 0.0 => format!("{}", n as i64),
            Some(n) => format!("{:.1}", n),
            None => flex::as_texto(&self.valor),
        }
    }
}
