// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// El backend es un único endpoint GET/POST delante de la hoja de cálculo:
//  - GET  ?path=<operacion>&token=...&<parametros>
//  - POST cuerpo JSON con Content-Type text/plain (el endpoint no acepta
//    preflight CORS, limitación del despliegue en Apps Script)
// Toda respuesta es un sobre JSON; {"ok": false, "error": ...} es un fallo.

use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};

use crate::config::CONFIG;
use crate::models::{
    Bootstrap, Categoria, EquipmentRef, Incidencia, Kpi, OrdenNueva, OrdenTrabajo, PlanningRow,
    Repuesto, SolicitudNueva, TrabajoExterno,
};

/// Cliente API - SOLO comunicación HTTP (stateless)
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            base_url: CONFIG.api_base().to_string(),
        }
    }

    #[cfg(test)]
    pub fn with_base(base: &str) -> Self {
        Self {
            base_url: base.to_string(),
        }
    }

    async fn get_sobre(
        &self,
        path: &str,
        token: Option<&str>,
        params: &[(&str, &str)],
    ) -> Result<Value, String> {
        let url = build_url(&self.base_url, path, token, params);
        let respuesta = Request::get(&url)
            .send()
            .await
            .map_err(|e| format!("Error de red: {}", e))?;
        if !respuesta.ok() {
            return Err(format!(
                "HTTP {}: {}",
                respuesta.status(),
                respuesta.status_text()
            ));
        }
        let datos: Value = respuesta
            .json()
            .await
            .map_err(|e| format!("Respuesta no válida: {}", e))?;
        abrir_sobre(datos)
    }

    async fn post_sobre(&self, payload: &Value) -> Result<Value, String> {
        let cuerpo = serde_json::to_string(payload)
            .map_err(|e| format!("Error serializando petición: {}", e))?;
        let respuesta = Request::post(&self.base_url)
            .header("Content-Type", "text/plain;charset=utf-8")
            .body(cuerpo)
            .map_err(|e| format!("Error construyendo petición: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Error de red: {}", e))?;
        if !respuesta.ok() {
            return Err(format!(
                "HTTP {}: {}",
                respuesta.status(),
                respuesta.status_text()
            ));
        }
        let datos: Value = respuesta
            .json()
            .await
            .map_err(|e| format!("Respuesta no válida: {}", e))?;
        abrir_sobre(datos)
    }

    // ---- Lecturas -----------------------------------------------------

    pub async fn bootstrap(&self, token: &str) -> Result<Bootstrap, String> {
        let sobre = self.get_sobre("bootstrap", Some(token), &[]).await?;
        serde_json::from_value(sobre).map_err(|e| format!("Bootstrap no válido: {}", e))
    }

    pub async fn elementos(
        &self,
        token: &str,
        categoria: Categoria,
    ) -> Result<Vec<EquipmentRef>, String> {
        let sobre = self.get_sobre(categoria.clave(), Some(token), &[]).await?;
        lista(sobre, &[categoria.clave(), "rows", "data", "items"])
    }

    pub async fn incidencias(&self, token: &str) -> Result<Vec<Incidencia>, String> {
        let sobre = self.get_sobre("incidencias", Some(token), &[]).await?;
        lista(sobre, &["incidencias", "rows", "data", "items"])
    }

    pub async fn inventario(&self, token: &str) -> Result<Vec<Repuesto>, String> {
        let sobre = self.get_sobre("inventario", Some(token), &[]).await?;
        lista(sobre, &["inventario", "rows", "data", "items"])
    }

    pub async fn repuestos(&self, token: &str) -> Result<Vec<Repuesto>, String> {
        let sobre = self.get_sobre("repuestos", Some(token), &[]).await?;
        lista(sobre, &["repuestos", "rows", "data", "items"])
    }

    pub async fn externas(&self, token: &str) -> Result<Vec<TrabajoExterno>, String> {
        let sobre = self.get_sobre("externas", Some(token), &[]).await?;
        lista(sobre, &["externas", "rows", "data", "items"])
    }

    pub async fn ot(&self, token: &str) -> Result<Vec<OrdenTrabajo>, String> {
        let sobre = self.get_sobre("ot", Some(token), &[]).await?;
        lista(sobre, &["ot", "rows", "data", "items"])
    }

    pub async fn kpi(&self, token: &str) -> Result<Vec<Kpi>, String> {
        let sobre = self.get_sobre("kpi", Some(token), &[]).await?;
        lista(sobre, &["kpi", "rows", "data", "items"])
    }

    pub async fn planificacion(&self, token: &str) -> Result<Vec<PlanningRow>, String> {
        let sobre = self.get_sobre("planificacion", Some(token), &[]).await?;
        lista(sobre, &["planificacion", "rows", "data", "items"])
    }

    // ---- Login --------------------------------------------------------

    /// Login probando los formatos de payload históricos hasta que uno
    /// devuelva token.
    pub async fn login(&self, user: &str, pass: &str) -> Result<String, String> {
        let mut ultimo_error = "No se pudo iniciar sesión".to_string();

        for payload in intentos_login(user, pass) {
            match self.post_sobre(&payload).await {
                Ok(sobre) => {
                    if let Some(token) = extract_token(&sobre) {
                        return Ok(token);
                    }
                    // Respuesta correcta pero sin token: formato no aceptado
                    ultimo_error = "Login sin token".to_string();
                }
                Err(e) => {
                    if !reintentar_con_otro_formato(&e) {
                        return Err(e);
                    }
                    ultimo_error = e;
                }
            }
        }
        Err(ultimo_error)
    }

    // ---- Mutaciones ---------------------------------------------------

    pub async fn set_estado(
        &self,
        token: &str,
        categoria: Categoria,
        id: &str,
        estado: &str,
    ) -> Result<(), String> {
        let payload = json!({
            "path": "state.set_estado",
            "token": token,
            "tipo": categoria.clave(),
            "id": id,
            "estado": estado,
        });
        self.post_sobre(&payload).await.map(|_| ())
    }

    pub async fn crear_solicitud(
        &self,
        token: &str,
        solicitud: &SolicitudNueva,
    ) -> Result<(), String> {
        let payload = json!({
            "path": "rep.crear",
            "token": token,
            "repuesto": solicitud.repuesto,
            "cantidad": solicitud.cantidad,
            "motivo": solicitud.motivo,
            "elemento": solicitud.elemento,
        });
        self.post_sobre(&payload).await.map(|_| ())
    }

    pub async fn plan_update(
        &self,
        token: &str,
        picking: &str,
        campo: &str,
        valor: bool,
    ) -> Result<(), String> {
        let payload = json!({
            "path": "plan.update",
            "token": token,
            "picking": picking,
            "campo": campo,
            "valor": valor,
        });
        self.post_sobre(&payload).await.map(|_| ())
    }

    pub async fn finalizar_incidencia(
        &self,
        token: &str,
        id: &str,
        solucion: &str,
    ) -> Result<(), String> {
        let payload = json!({
            "path": "inc.finalizar",
            "token": token,
            "id": id,
            "solucion": solucion,
        });
        self.post_sobre(&payload).await.map(|_| ())
    }

    pub async fn crear_ot(&self, token: &str, orden: &OrdenNueva) -> Result<(), String> {
        let payload = json!({
            "path": "ot.crear",
            "token": token,
            "tipo": orden.tipo,
            "elemento": orden.elemento,
            "descripcion": orden.descripcion,
        });
        self.post_sobre(&payload).await.map(|_| ())
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

// ---- Helpers puros (testeables sin red) -------------------------------

/// Construye la URL GET con `path`, `token` y parámetros extra.
/// Los parámetros vacíos se omiten; el backend trata vacío y ausente igual.
pub fn build_url(base: &str, path: &str, token: Option<&str>, params: &[(&str, &str)]) -> String {
    let separador = if base.contains('?') { '&' } else { '?' };
    let mut url = format!("{}{}path={}", base, separador, url_encode(path));
    if let Some(t) = token {
        if !t.is_empty() {
            url.push_str("&token=");
            url.push_str(&url_encode(t));
        }
    }
    for (clave, valor) in params {
        if valor.is_empty() {
            continue;
        }
        url.push('&');
        url.push_str(&url_encode(clave));
        url.push('=');
        url.push_str(&url_encode(valor));
    }
    url
}

/// Percent-encoding de componentes de query (RFC 3986, unreserved sin tocar).
pub fn url_encode(texto: &str) -> String {
    let mut salida = String::with_capacity(texto.len());
    for byte in texto.as_bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                salida.push(*byte as char)
            }
            otro => salida.push_str(&format!("%{:02X}", otro)),
        }
    }
    salida
}

/// Aplica el convenio de sobre: `ok == false` es un error con mensaje.
pub fn abrir_sobre(datos: Value) -> Result<Value, String> {
    if datos.get("ok").and_then(Value::as_bool) == Some(false) {
        let mensaje = datos
            .get("error")
            .map(crate::models::flex::as_texto)
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| "Error del backend".to_string());
        return Err(mensaje);
    }
    Ok(datos)
}

/// Extrae la lista de un sobre: array directo o bajo una de las claves dadas.
/// Sin lista reconocible, devuelve vacío en vez de fallar.
pub fn lista<T: DeserializeOwned>(sobre: Value, claves: &[&str]) -> Result<Vec<T>, String> {
    let valor = match sobre {
        Value::Array(_) => sobre,
        Value::Object(ref mapa) => {
            match claves.iter().find_map(|k| mapa.get(*k)).cloned() {
                Some(v) => v,
                None => return Ok(Vec::new()),
            }
        }
        _ => return Ok(Vec::new()),
    };
    serde_json::from_value(valor).map_err(|e| format!("Listado no válido: {}", e))
}

/// Sondea las rutas históricas donde los backends han dejado el token.
pub fn extract_token(sobre: &Value) -> Option<String> {
    let rutas: [&[&str]; 4] = [
        &["token"],
        &["data", "token"],
        &["result", "token"],
        &["auth", "token"],
    ];
    for ruta in rutas {
        let mut actual = sobre;
        let mut encontrado = true;
        for paso in ruta {
            match actual.get(paso) {
                Some(v) => actual = v,
                None => {
                    encontrado = false;
                    break;
                }
            }
        }
        if encontrado {
            if let Some(t) = actual.as_str() {
                if !t.is_empty() {
                    return Some(t.to_string());
                }
            }
        }
    }
    None
}

/// Formatos de payload de login aceptados por las distintas generaciones del
/// backend, en orden de preferencia.
pub fn intentos_login(user: &str, pass: &str) -> Vec<Value> {
    vec![
        json!({"path": "login", "user": user, "pass": pass}),
        json!({"action": "login", "user": user, "pass": pass}),
        json!({"op": "login", "user": user, "pass": pass}),
        json!({"path": "login", "username": user, "password": pass}),
        json!({"action": "login", "username": user, "password": pass}),
    ]
}

/// Un error de "parámetros no válidos" significa que el backend no entiende
/// ese formato de payload: se prueba el siguiente. Otros errores (credenciales
/// incorrectas, etc.) cortan el bucle.
pub fn reintentar_con_otro_formato(mensaje: &str) -> bool {
    let m = mensaje.to_lowercase();
    m.contains("parámetros post")
        || m.contains("parametros post")
        || m.contains("no válido")
        || m.contains("no valido")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn build_url_basica() {
        let url = build_url("https://api/exec", "bootstrap", Some("T0K3N"), &[]);
        assert_eq!(url, "https://api/exec?path=bootstrap&token=T0K3N");
    }

    #[test]
    fn build_url_omite_parametros_vacios() {
        let url = build_url(
            "https://api/exec",
            "incidencias",
            Some("t"),
            &[("categoria", "gruas"), ("q", "")],
        );
        assert_eq!(
            url,
            "https://api/exec?path=incidencias&token=t&categoria=gruas"
        );
    }

    #[test]
    fn build_url_respeta_query_existente() {
        let url = build_url("https://api/exec?v=2", "kpi", None, &[]);
        assert_eq!(url, "https://api/exec?v=2&path=kpi");
    }

    #[test]
    fn url_encode_reservados() {
        assert_eq!(url_encode("a b&c=d"), "a%20b%26c%3Dd");
        assert_eq!(url_encode("grúa"), "gr%C3%BAa");
        assert_eq!(url_encode("N1-02_x.y~z"), "N1-02_x.y~z");
    }

    #[test]
    fn sobre_ok_false_es_error() {
        let err = abrir_sobre(json!({"ok": false, "error": "Token caducado"})).unwrap_err();
        assert_eq!(err, "Token caducado");
    }

    #[test]
    fn sobre_ok_false_sin_mensaje() {
        let err = abrir_sobre(json!({"ok": false})).unwrap_err();
        assert_eq!(err, "Error del backend");
    }

    #[test]
    fn sobre_valido_pasa() {
        let v = abrir_sobre(json!({"ok": true, "rows": []})).unwrap();
        assert_eq!(v["ok"], json!(true));
    }

    #[test]
    fn lista_array_directo_o_anidado() {
        let directo: Vec<Kpi> = lista(json!([{"nombre": "Abiertas", "valor": 2}]), &["kpi"]).unwrap();
        assert_eq!(directo.len(), 1);

        let anidado: Vec<Kpi> =
            lista(json!({"ok": true, "rows": [{"nombre": "MTTR"}]}), &["kpi", "rows"]).unwrap();
        assert_eq!(anidado.len(), 1);

        let vacio: Vec<Kpi> = lista(json!({"ok": true}), &["kpi", "rows"]).unwrap();
        assert!(vacio.is_empty());
    }

    #[test]
    fn extract_token_en_rutas_historicas() {
        assert_eq!(extract_token(&json!({"token": "a"})), Some("a".into()));
        assert_eq!(
            extract_token(&json!({"data": {"token": "b"}})),
            Some("b".into())
        );
        assert_eq!(
            extract_token(&json!({"result": {"token": "c"}})),
            Some("c".into())
        );
        assert_eq!(
            extract_token(&json!({"auth": {"token": "d"}})),
            Some("d".into())
        );
        assert_eq!(extract_token(&json!({"ok": true})), None);
        assert_eq!(extract_token(&json!({"token": ""})), None);
    }

    #[test]
    fn cinco_formatos_de_login_en_orden() {
        let intentos = intentos_login("ana", "secreta");
        assert_eq!(intentos.len(), 5);
        assert_eq!(intentos[0]["path"], json!("login"));
        assert_eq!(intentos[0]["user"], json!("ana"));
        assert_eq!(intentos[1]["action"], json!("login"));
        assert_eq!(intentos[2]["op"], json!("login"));
        assert_eq!(intentos[3]["username"], json!("ana"));
        assert_eq!(intentos[4]["password"], json!("secreta"));
    }

    #[test]
    fn reintento_solo_con_errores_de_formato() {
        assert!(reintentar_con_otro_formato("Parámetros POST incorrectos"));
        assert!(reintentar_con_otro_formato("payload no valido"));
        assert!(!reintentar_con_otro_formato("Credenciales incorrectas"));
    }
}
