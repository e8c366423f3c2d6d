// File: src/state.rs
// Purpose: Explicit form values and touched tracking, independent of any UI framework

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::field::Field;

/// Current value of every field
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormState {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub confirm_password: String,
}

impl FormState {
    /// Empty form
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Password => &self.password,
            Field::ConfirmPassword => &self.confirm_password,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Phone => &mut self.phone,
            Field::Password => &mut self.password,
            Field::ConfirmPassword => &mut self.confirm_password,
        };
        *slot = value.into();
    }

    /// Copy of this state with one field replaced
    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// True when every field is an empty string
    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|field| self.get(*field).is_empty())
    }
}

/// Fields the user has interacted with
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TouchedState(BTreeSet<Field>);

impl TouchedState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn touch(&mut self, field: Field) {
        self.0.insert(field);
    }

    pub fn touch_all(&mut self) {
        self.0.extend(Field::ALL);
    }

    pub fn is_touched(&self, field: Field) -> bool {
        self.0.contains(&field)
    }

    pub fn all_touched(&self) -> bool {
        Field::ALL.iter().all(|field| self.is_touched(*field))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Field> + '_ {
        self.0.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_set() {
        let mut state = FormState::new();
        assert!(state.is_empty());

        state.set(Field::ConfirmPassword, "Abc123");
        assert_eq!(state.get(Field::ConfirmPassword), "Abc123");
        assert_eq!(state.confirm_password, "Abc123");
        assert!(!state.is_empty());
    }

    #[test]
    fn test_with_leaves_original() {
        let original = FormState::new();
        let changed = original.clone().with(Field::Name, "Joao");

        assert_eq!(original.get(Field::Name), "");
        assert_eq!(changed.get(Field::Name), "Joao");
    }

    #[test]
    fn test_deserialize_partial_values() {
        let state: FormState =
            serde_json::from_str(r#"{"name":"Joao","confirmPassword":"x"}"#).unwrap();
        assert_eq!(state.name, "Joao");
        assert_eq!(state.confirm_password, "x");
        assert_eq!(state.email, "");
    }

    #[test]
    fn test_touched() {
        let mut touched = TouchedState::new();
        assert!(touched.is_empty());

        touched.touch(Field::Email);
        touched.touch(Field::Email);
        assert!(touched.is_touched(Field::Email));
        assert!(!touched.is_touched(Field::Name));
        assert_eq!(touched.iter().count(), 1);

        touched.touch_all();
        assert!(touched.all_touched());
    }

    #[test]
    fn test_touched_serializes_as_list() {
        let mut touched = TouchedState::new();
        touched.touch(Field::Phone);
        touched.touch(Field::Name);
        assert_eq!(serde_json::to_string(&touched).unwrap(), r#"["name","phone"]"#);
    }
}
