// File: src/form.rs
// Purpose: Registration form lifecycle driven by host UI events

use cadastro_validation::mask_phone;
use serde::Serialize;

use crate::config::ValidationConfig;
use crate::field::{Field, FieldAttrs};
use crate::state::{FormState, TouchedState};
use crate::validator::{FormValidator, ValidationErrors};

/// Result of a submit attempt
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum SubmitOutcome {
    /// All fields were valid; carries the values that were submitted
    Accepted { values: FormState },
    /// At least one field was invalid; form values are untouched
    Rejected { errors: ValidationErrors },
}

impl SubmitOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, SubmitOutcome::Accepted { .. })
    }
}

/// The registration form: values, touched fields, current errors and the
/// confirmation flag
///
/// Errors are recomputed from the values after every change, so they never
/// drift from what the user typed.
#[derive(Debug, Clone)]
pub struct RegistrationForm {
    validator: FormValidator,
    values: FormState,
    touched: TouchedState,
    errors: ValidationErrors,
    show_confirmation: bool,
}

impl RegistrationForm {
    /// Empty form using the given rules
    pub fn new(config: ValidationConfig) -> Self {
        let validator = FormValidator::new(config);
        let values = FormState::new();
        let errors = validator.validate(&values);

        Self {
            validator,
            values,
            touched: TouchedState::new(),
            errors,
            show_confirmation: false,
        }
    }

    /// Store a new raw value; phone input goes through the mask first
    pub fn on_field_change(&mut self, field: Field, raw: &str) {
        let value = match field {
            Field::Phone => mask_phone(raw),
            _ => raw.to_string(),
        };

        self.values.set(field, value);
        self.errors = self.validator.validate(&self.values);

        tracing::debug!(
            field = %field,
            valid = !self.errors.has_error(field),
            "field changed"
        );
    }

    pub fn on_field_blur(&mut self, field: Field) {
        self.touched.touch(field);
        tracing::debug!(field = %field, "field touched");
    }

    /// Validate everything and, when valid, reset the form and raise the
    /// confirmation
    ///
    /// Every field is marked touched either way, so a rejected submit shows
    /// all applicable errors.
    pub fn on_submit(&mut self) -> SubmitOutcome {
        self.errors = self.validator.validate(&self.values);
        self.touched.touch_all();

        if !self.errors.is_empty() {
            tracing::debug!(errors = self.errors.len(), "submit rejected");
            return SubmitOutcome::Rejected {
                errors: self.errors.clone(),
            };
        }

        let values = std::mem::take(&mut self.values);
        self.touched = TouchedState::new();
        self.errors = self.validator.validate(&self.values);
        self.show_confirmation = true;

        tracing::info!("registration submitted");
        SubmitOutcome::Accepted { values }
    }

    pub fn on_dismiss_confirmation(&mut self) {
        self.show_confirmation = false;
    }

    pub fn values(&self) -> &FormState {
        &self.values
    }

    pub fn value(&self, field: Field) -> &str {
        self.values.get(field)
    }

    /// Every current error, touched or not
    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// Errors the host should display
    pub fn visible_errors(&self) -> ValidationErrors {
        self.errors.visible(&self.touched)
    }

    pub fn visible_error(&self, field: Field) -> Option<&str> {
        if self.touched.is_touched(field) {
            self.errors.get(field)
        } else {
            None
        }
    }

    pub fn touched(&self) -> &TouchedState {
        &self.touched
    }

    pub fn is_touched(&self, field: Field) -> bool {
        self.touched.is_touched(field)
    }

    pub fn show_confirmation(&self) -> bool {
        self.show_confirmation
    }

    pub fn config(&self) -> &ValidationConfig {
        self.validator.config()
    }

    pub fn field_attrs(&self, field: Field) -> FieldAttrs {
        self.validator.field_attrs(field)
    }
}

impl Default for RegistrationForm {
    fn default() -> Self {
        Self::new(ValidationConfig::default())
    }
}
