// ============================================================================
// DOM MODULE - Helpers para manipulación DOM
// ============================================================================

pub mod element;
pub mod events;
pub mod html;

pub use element::*;
pub use events::*;
pub use html::*;
