// File: src/field.rs
// Purpose: The registration form's fields and the attributes a host needs to render them

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::FormError;

/// One named input of the registration form
///
/// Declaration order is display order and rule evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Name,
    Email,
    Phone,
    Password,
    ConfirmPassword,
}

impl Field {
    /// All fields, in display order
    pub const ALL: [Field; 5] = [
        Field::Name,
        Field::Email,
        Field::Phone,
        Field::Password,
        Field::ConfirmPassword,
    ];

    /// Name used by the host (HTML `name` attribute, JS keys)
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Password => "password",
            Field::ConfirmPassword => "confirmPassword",
        }
    }

    /// Visible label
    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Nome",
            Field::Email => "E-mail",
            Field::Phone => "Telefone",
            Field::Password => "Senha",
            Field::ConfirmPassword => "Confirmar Senha",
        }
    }

    /// HTML input type
    pub fn input_type(&self) -> &'static str {
        match self {
            Field::Email => "email",
            Field::Password | Field::ConfirmPassword => "password",
            Field::Name | Field::Phone => "text",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| FormError::UnknownField(s.to_string()))
    }
}

/// Attributes for a form field (HTML5 + data-validate JSON)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldAttrs {
    /// Visible label
    pub label: String,

    /// HTML5 attributes (name, type, required, minlength, pattern)
    pub html5_attrs: BTreeMap<String, String>,

    /// JSON describing the active rules, for a `data-validate` attribute
    pub data_validate: String,
}

impl FieldAttrs {
    /// Render all attributes as an HTML attribute string
    pub fn render_all(&self) -> String {
        let mut attrs = vec![];

        for (key, value) in &self.html5_attrs {
            if value.is_empty() {
                attrs.push(key.clone());
            } else {
                attrs.push(format!(r#"{}="{}""#, key, escape_attr(value)));
            }
        }

        if !self.data_validate.is_empty() {
            attrs.push(format!(r#"data-validate='{}'"#, self.data_validate.replace('\'', "&#39;")));
        }

        attrs.join(" ")
    }
}

fn escape_attr(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
