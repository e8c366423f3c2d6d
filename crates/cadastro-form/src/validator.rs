// File: src/validator.rs
// Purpose: Per-field registration rules producing field-keyed error messages

use cadastro_validation::{self as rules, messages, PASSWORD_MIN_CHARS, PHONE_PATTERN};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::collections::BTreeMap;

use crate::config::ValidationConfig;
use crate::field::{Field, FieldAttrs};
use crate::state::{FormState, TouchedState};

/// Field names to error messages; a missing key means the field is valid
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<Field, String>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(|s| s.as_str())
    }

    pub fn has_error(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> + '_ {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }

    /// Only the errors of touched fields
    pub fn visible(&self, touched: &TouchedState) -> ValidationErrors {
        ValidationErrors(
            self.0
                .iter()
                .filter(|(field, _)| touched.is_touched(**field))
                .map(|(field, message)| (*field, message.clone()))
                .collect(),
        )
    }
}

/// Configurable rule set for the registration form
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormValidator {
    config: ValidationConfig,
}

impl FormValidator {
    pub fn new(config: ValidationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    /// Validate every field of a snapshot
    pub fn validate(&self, state: &FormState) -> ValidationErrors {
        let mut errors = ValidationErrors::new();

        for field in Field::ALL {
            if let Err(message) = self.validate_field(field, state) {
                errors.insert(field, message);
            }
        }

        errors
    }

    /// First failing rule of one field
    ///
    /// Takes the whole snapshot because `confirmPassword` depends on `password`.
    pub fn validate_field(&self, field: Field, state: &FormState) -> Result<(), String> {
        let value = state.get(field);

        match field {
            Field::Name => {
                rules::validate_required(value, messages::NAME_REQUIRED)?;
                let min = self.config.min_name_length;
                if min > 0 {
                    rules::validate_min_chars(value.trim(), min, &messages::name_too_short(min))?;
                }
                Ok(())
            }
            Field::Email => {
                rules::validate_required(value, messages::EMAIL_REQUIRED)?;
                if !rules::is_valid_email(value) {
                    return Err(messages::EMAIL_INVALID.to_string());
                }
                Ok(())
            }
            Field::Phone => {
                rules::validate_present(value, messages::PHONE_REQUIRED)?;
                if self.config.strict_phone_format && !rules::is_formatted_phone(value) {
                    return Err(messages::PHONE_FORMAT.to_string());
                }
                Ok(())
            }
            Field::Password => {
                rules::validate_present(value, messages::PASSWORD_REQUIRED)?;
                rules::validate_password(value, self.config.password_policy())
            }
            Field::ConfirmPassword => {
                rules::validate_present(value, messages::CONFIRM_PASSWORD_REQUIRED)?;
                if !rules::equals(value, &state.password) {
                    return Err(messages::PASSWORDS_DONT_MATCH.to_string());
                }
                Ok(())
            }
        }
    }

    /// HTML5 attributes and rule descriptor for a field under this configuration
    pub fn field_attrs(&self, field: Field) -> FieldAttrs {
        let mut html5_attrs = BTreeMap::new();
        html5_attrs.insert("name".to_string(), field.as_str().to_string());
        html5_attrs.insert("type".to_string(), field.input_type().to_string());
        html5_attrs.insert("required".to_string(), String::new());

        let mut data = json!({ "required": true });

        match field {
            Field::Name if self.config.min_name_length > 0 => {
                let min = self.config.min_name_length;
                html5_attrs.insert("minlength".to_string(), min.to_string());
                data["minLength"] = json!(min);
            }
            Field::Email => {
                data["email"] = json!(true);
            }
            Field::Phone => {
                data["mask"] = json!("(XX) XXXXX-XXXX");
                if self.config.strict_phone_format {
                    html5_attrs.insert("pattern".to_string(), PHONE_PATTERN.to_string());
                    data["pattern"] = json!(PHONE_PATTERN);
                }
            }
            Field::Password => {
                html5_attrs.insert("minlength".to_string(), PASSWORD_MIN_CHARS.to_string());
                data["minLength"] = json!(PASSWORD_MIN_CHARS);
                data["password"] = json!(self.config.password_policy().as_str());
            }
            Field::ConfirmPassword => {
                data["equalsField"] = json!(Field::Password.as_str());
            }
            Field::Name => {}
        }

        FieldAttrs {
            label: field.label().to_string(),
            html5_attrs,
            data_validate: data.to_string(),
        }
    }
}

/// Validate a snapshot with the given configuration
pub fn validate(config: &ValidationConfig, state: &FormState) -> ValidationErrors {
    FormValidator::new(*config).validate(state)
}
