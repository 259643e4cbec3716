// ============================================================================
// MODELS - Estructuras compartidas con el backend (hoja de cálculo)
// ============================================================================

pub mod auth;
pub mod equipment;
pub mod estado;
pub mod externas;
pub mod flex;
pub mod incidencia;
pub mod inventario;
pub mod kpi;
pub mod planning;

pub use auth::*;
pub use equipment::*;
pub use estado::*;
pub use externas::*;
pub use incidencia::*;
pub use inventario::*;
pub use kpi::*;
pub use planning::*;
