use serde::{Deserialize, Serialize};

/// Ficha mínima de un elemento mantenible (equipo, puente grúa o auxiliar).
///
/// La identidad es el `id` como texto recortado; nunca se compara como
/// número porque la hoja mezcla ids tipo "KDP1" con numéricos.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct EquipmentRef {
    #[serde(default, alias = "ID", alias = "Id")]
    pub id: String,
    #[serde(default, alias = "NOMBRE", alias = "Nombre")]
    pub nombre: String,
    #[serde(default, alias = "MODELO", alias = "Modelo")]
    pub modelo: String,
    #[serde(default, alias = "LINEA", alias = "Linea", alias = "línea")]
    pub linea: String,
}

impl EquipmentRef {
    /// Id normalizado para comparaciones (recortado, nunca coercionado a número).
    pub fn id_limpio(&self) -> &str {
        self.id.trim()
    }

    /// Texto a mostrar en botones y cabeceras.
    pub fn etiqueta(&self) -> String {
        if self.modelo.trim().is_empty() {
            self.nombre.trim().to_string()
        } else {
            format!("{} · {}", self.nombre.trim(), self.modelo.trim())
        }
    }
}

/// Busca un equipo por id dentro de una lista cacheada.
pub fn resolver_equipo<'a>(equipos: &'a [EquipmentRef], id: &str) -> Option<&'a EquipmentRef> {
    let objetivo = id.trim();
    if objetivo.is_empty() {
        return None;
    }
    equipos.iter().find(|e| e.id_limpio() == objetivo)
}

/// Líneas distintas presentes en la lista, en orden de aparición.
pub fn lineas_de(equipos: &[EquipmentRef]) -> Vec<String> {
    let mut lineas: Vec<String> = Vec::new();
    for eq in equipos {
        let linea = eq.linea.trim();
        if !linea.is_empty() && !lineas.iter().any(|l| l == linea) {
            lineas.push(linea.to_string());
        }
    }
    lineas
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lista() -> Vec<EquipmentRef> {
        vec![
            EquipmentRef {
                id: "KDP1".into(),
                nombre: "Kaltenbach KDP1".into(),
                modelo: "KDP".into(),
                linea: "N1".into(),
            },
            EquipmentRef {
                id: " KDP3 ".into(),
                nombre: "Kaltenbach KDP3".into(),
                modelo: String::new(),
                linea: "N1".into(),
            },
            EquipmentRef {
                id: "HP".into(),
                nombre: "Horno pintura".into(),
                modelo: String::new(),
                linea: "N4".into(),
            },
        ]
    }

    #[test]
    fn resolver_compara_ids_recortados() {
        let equipos = lista();
        assert_eq!(resolver_equipo(&equipos, "KDP3").unwrap().nombre, "Kaltenbach KDP3");
        assert_eq!(resolver_equipo(&equipos, "  KDP1  ").unwrap().linea, "N1");
        assert!(resolver_equipo(&equipos, "NO-EXISTE").is_none());
        assert!(resolver_equipo(&equipos, "").is_none());
    }

    #[test]
    fn lineas_sin_duplicados_en_orden() {
        assert_eq!(lineas_de(&lista()), vec!["N1".to_string(), "N4".to_string()]);
    }

    #[test]
    fn tolera_claves_en_mayusculas() {
        let eq: EquipmentRef =
            serde_json::from_str(r#"{"ID":"KDM","NOMBRE":"Sierra KDM","LINEA":"N2"}"#).unwrap();
        assert_eq!(eq.id, "KDM");
        assert_eq!(eq.linea, "N2");
        assert_eq!(eq.modelo, "");
    }
}
