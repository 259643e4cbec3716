// ============================================================================
// HTML - Escapado y pequeñas plantillas de texto
// ============================================================================
// Todo dato del backend que acaba en innerHTML pasa por escape_html.

/// Escapa los cinco caracteres peligrosos para interpolar en HTML.
pub fn escape_html(texto: &str) -> String {
    let mut salida = String::with_capacity(texto.len());
    for c in texto.chars() {
        match c {
            '&' => salida.push_str("&amp;"),
            '<' => salida.push_str("&lt;"),
            '>' => salida.push_str("&gt;"),
            '"' => salida.push_str("&quot;"),
            '\'' => salida.push_str("&#039;"),
            otro => salida.push(otro),
        }
    }
    salida
}

/// Atributo HTML ya escapado: `name="value"`.
pub fn attr(nombre: &str, valor: &str) -> String {
    format!("{}=\"{}\"", nombre, escape_html(valor))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapa_los_cinco_caracteres() {
        assert_eq!(
            escape_html(r#"<b>"a" & 'b'</b>"#),
            "&lt;b&gt;&quot;a&quot; &amp; &#039;b&#039;&lt;/b&gt;"
        );
    }

    #[test]
    fn texto_normal_pasa_intacto() {
        assert_eq!(escape_html("Línea N1 · KDP3"), "Línea N1 · KDP3");
    }

    #[test]
    fn attr_escapa_el_valor() {
        assert_eq!(attr("data-id", r#"a"b"#), r#"data-id="a&quot;b""#);
    }
}
