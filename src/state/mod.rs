// ============================================================================
// STATE - Estado de la aplicación
// ============================================================================

pub mod app_state;
pub mod session_state;

pub use app_state::*;
pub use session_state::*;
