// ============================================================================
// DOMAIN - Lógica pura del cliente (sin DOM, sin red)
// ============================================================================

pub mod normalize;
pub mod planning_match;

pub use normalize::*;
pub use planning_match::*;
