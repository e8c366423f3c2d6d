//! # cadastro-form
//!
//! State and validation for a user registration form ("Cadastro de Usuário"),
//! independent of any UI framework.
//!
//! The host renders the form and forwards its events; this crate owns the
//! values, the touched fields, the error messages and the confirmation flag.
//!
//! ```rust
//! use cadastro_form::{Field, RegistrationForm, ValidationConfig};
//!
//! let mut form = RegistrationForm::new(ValidationConfig::strict());
//! form.on_field_change(Field::Phone, "11987654321");
//! assert_eq!(form.value(Field::Phone), "(11) 98765-4321");
//!
//! form.on_field_change(Field::Name, "Jo");
//! form.on_field_blur(Field::Name);
//! assert_eq!(
//!     form.visible_error(Field::Name),
//!     Some("Nome deve ter pelo menos 3 caracteres")
//! );
//!
//! let outcome = form.on_submit();
//! assert!(!outcome.is_accepted());
//! ```

pub mod config;
pub mod error;
pub mod field;
pub mod form;
pub mod state;
pub mod validator;

pub use config::{Config, ValidationConfig};
pub use error::{FormError, Result};
pub use field::{Field, FieldAttrs};
pub use form::{RegistrationForm, SubmitOutcome};
pub use state::{FormState, TouchedState};
pub use validator::{validate, FormValidator, ValidationErrors};

// Pure helpers and texts the host may need directly
pub use cadastro_validation::mask_phone;
pub use cadastro_validation::messages;
