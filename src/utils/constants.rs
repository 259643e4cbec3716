// Claves de localStorage. El token conserva la clave histórica para no
// invalidar las sesiones abiertas con el cliente anterior.

pub const TOKEN_KEY: &str = "CDL_TOKEN";
