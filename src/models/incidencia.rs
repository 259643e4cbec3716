use serde::{Deserialize, Serialize};

/// Incidencia registrada sobre un equipo, grúa o auxiliar.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct Incidencia {
    #[serde(default, alias = "ID", alias = "Id")]
    pub id: String,
    #[serde(default, alias = "FECHA", alias = "Fecha")]
    pub fecha: String,
    #[serde(default, alias = "CATEGORIA", alias = "Categoria", alias = "categoría")]
    pub categoria: String,
    #[serde(default, alias = "ELEMENTO", alias = "Elemento")]
    pub elemento: String,
    #[serde(default, alias = "DESCRIPCION", alias = "Descripcion", alias = "descripción")]
    pub descripcion: String,
    #[serde(default, alias = "ESTADO", alias = "Estado")]
    pub estado: String,
    #[serde(default, alias = "PRIORIDAD", alias = "Prioridad")]
    pub prioridad: String,
    #[serde(default, alias = "SOLUCION", alias = "Solucion", alias = "solución")]
    pub solucion: String,
}

impl Incidencia {
    /// Una incidencia se considera abierta mientras no esté marcada cerrada.
    pub fn abierta(&self) -> bool {
        !matches!(
            self.estado.trim().to_lowercase().as_str(),
            "cerrada" | "solucionada" | "finalizada"
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn abierta_segun_estado() {
        let mut inc = Incidencia::default();
        assert!(inc.abierta());
        inc.estado = "Abierta".into();
        assert!(inc.abierta());
        inc.estado = " SOLUCIONADA ".into();
        assert!(!inc.abierta());
        inc.estado = "cerrada".into();
        assert!(!inc.abierta());
    }

    #[test]
    fn tolera_claves_historicas() {
        let inc: Incidencia = serde_json::from_str(
            r#"{"ID":"INC-7","FECHA":"2025-03-02","Categoria":"gruas",
                "ELEMENTO":"N1-01","descripción":"Cable desgastado","ESTADO":"abierta"}"#,
        )
        .unwrap();
        assert_eq!(inc.id, "INC-7");
        assert_eq!(inc.descripcion, "Cable desgastado");
        assert!(inc.abierta());
    }
}
