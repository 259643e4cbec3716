use serde::{Deserialize, Serialize};

/// Trabajo encargado a una subcontrata externa.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct TrabajoExterno {
    #[serde(default, alias = "ID", alias = "Id")]
    pub id: String,
    #[serde(default, alias = "EMPRESA", alias = "Empresa")]
    pub empresa: String,
    #[serde(default, alias = "DESCRIPCION", alias = "Descripcion", alias = "descripción")]
    pub descripcion: String,
    #[serde(default, alias = "FECHA_INICIO", alias = "FechaInicio", alias = "inicio")]
    pub fecha_inicio: String,
    #[serde(default, alias = "FECHA_FIN", alias = "FechaFin", alias = "fin")]
    pub fecha_fin: String,
    #[serde(default, alias = "ESTADO", alias = "Estado")]
    pub estado: String,
}

/// Orden de trabajo interna (OT).
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct OrdenTrabajo {
    #[serde(default, alias = "ID", alias = "Id")]
    pub id: String,
    #[serde(default, alias = "FECHA", alias = "Fecha")]
    pub fecha: String,
    #[serde(default, alias = "TIPO", alias = "Tipo")]
    pub tipo: String,
    #[serde(default, alias = "ELEMENTO", alias = "Elemento")]
    pub elemento: String,
    #[serde(default, alias = "DESCRIPCION", alias = "Descripcion", alias = "descripción")]
    pub descripcion: String,
    #[serde(default, alias = "ESTADO", alias = "Estado")]
    pub estado: String,
    #[serde(default, alias = "ASIGNADO", alias = "Asignado")]
    pub asignado: String,
}

/// Datos del formulario de nueva OT (`ot.crear`).
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct OrdenNueva {
    pub tipo: String,
    pub elemento: String,
    pub descripcion: String,
}

impl OrdenNueva {
    pub fn valida(&self) -> bool {
        !self.elemento.trim().is_empty() && !self.descripcion.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orden_nueva_requiere_elemento_y_descripcion() {
        let mut ot = OrdenNueva::default();
        assert!(!ot.valida());
        ot.elemento = "KDM".into();
        ot.descripcion = "Cambio de sierra".into();
        assert!(ot.valida());
    }

    #[test]
    fn externa_tolera_claves_historicas() {
        let ext: TrabajoExterno = serde_json::from_str(
            r#"{"ID":"EXT-3","EMPRESA":"Talleres Sanz","inicio":"2025-02-01","ESTADO":"en curso"}"#,
        )
        .unwrap();
        assert_eq!(ext.empresa, "Talleres Sanz");
        assert_eq!(ext.fecha_inicio, "2025-02-01");
    }
}
