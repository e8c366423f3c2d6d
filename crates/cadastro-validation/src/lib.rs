//! Cadastro Validation Core
//!
//! Pure validation functions for the registration form. Every function here is
//! synchronous and side-effect free; the form crate decides which of them apply
//! to which field.

pub mod email;
pub mod messages;
pub mod password;
pub mod phone;
pub mod string;

// Re-export all validators
pub use email::*;
pub use password::*;
pub use phone::*;
pub use string::*;
