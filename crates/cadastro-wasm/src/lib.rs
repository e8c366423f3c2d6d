//! Cadastro WASM
//!
//! WebAssembly bindings for the registration form. The browser renders the
//! form and forwards its events here; state, masking and validation run in
//! Rust with the same rules as native hosts.

use cadastro_form::{
    mask_phone, validate, Field, FormError, FormState, RegistrationForm, ValidationConfig,
};
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Set panic hook for better error messages in the browser
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Registration form handle owned by JavaScript
///
/// # Example (JavaScript)
/// ```javascript
/// const form = new RegistrationForm({ minNameLength: 3 });
/// form.onFieldChange('phone', input.value);
/// input.value = form.value('phone');
/// const outcome = form.onSubmit(); // { status: 'accepted', values } | { status: 'rejected', errors }
/// ```
#[wasm_bindgen(js_name = RegistrationForm)]
pub struct RegistrationFormHandle {
    inner: RegistrationForm,
}

#[wasm_bindgen(js_class = RegistrationForm)]
impl RegistrationFormHandle {
    /// `config` may be omitted for the strict rules
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<RegistrationFormHandle, JsValue> {
        Ok(RegistrationForm::new(parse_config(config)?).into())
    }

    #[wasm_bindgen(js_name = onFieldChange)]
    pub fn on_field_change(&mut self, field: &str, value: &str) -> Result<(), JsValue> {
        let field = parse_field(field)?;
        self.inner.on_field_change(field, value);
        Ok(())
    }

    #[wasm_bindgen(js_name = onFieldBlur)]
    pub fn on_field_blur(&mut self, field: &str) -> Result<(), JsValue> {
        let field = parse_field(field)?;
        self.inner.on_field_blur(field);
        Ok(())
    }

    #[wasm_bindgen(js_name = onSubmit)]
    pub fn on_submit(&mut self) -> Result<JsValue, JsValue> {
        to_js(&self.inner.on_submit())
    }

    #[wasm_bindgen(js_name = onDismissConfirmation)]
    pub fn on_dismiss_confirmation(&mut self) {
        self.inner.on_dismiss_confirmation();
    }

    /// Current value of one field, after masking
    pub fn value(&self, field: &str) -> Result<String, JsValue> {
        Ok(self.inner.value(parse_field(field)?).to_string())
    }

    pub fn values(&self) -> Result<JsValue, JsValue> {
        to_js(self.inner.values())
    }

    pub fn errors(&self) -> Result<JsValue, JsValue> {
        to_js(self.inner.errors())
    }

    #[wasm_bindgen(js_name = visibleErrors)]
    pub fn visible_errors(&self) -> Result<JsValue, JsValue> {
        to_js(&self.inner.visible_errors())
    }

    #[wasm_bindgen(js_name = visibleError)]
    pub fn visible_error(&self, field: &str) -> Result<Option<String>, JsValue> {
        let field = parse_field(field)?;
        Ok(self.inner.visible_error(field).map(str::to_string))
    }

    #[wasm_bindgen(js_name = isTouched)]
    pub fn is_touched(&self, field: &str) -> Result<bool, JsValue> {
        Ok(self.inner.is_touched(parse_field(field)?))
    }

    #[wasm_bindgen(getter, js_name = showConfirmation)]
    pub fn show_confirmation(&self) -> bool {
        self.inner.show_confirmation()
    }

    /// Label, HTML5 attributes and data-validate JSON for one field
    #[wasm_bindgen(js_name = fieldAttrs)]
    pub fn field_attrs(&self, field: &str) -> Result<JsValue, JsValue> {
        to_js(&self.inner.field_attrs(parse_field(field)?))
    }
}

impl From<RegistrationForm> for RegistrationFormHandle {
    fn from(inner: RegistrationForm) -> Self {
        Self { inner }
    }
}

/// Phone mask on its own, for hosts that manage values themselves
#[wasm_bindgen(js_name = maskPhone)]
pub fn mask_phone_js(raw: &str) -> String {
    mask_phone(raw)
}

/// Validate a plain `{ name, email, ... }` object
///
/// Returns an object of field name to message; empty when every field is valid.
#[wasm_bindgen(js_name = validateForm)]
pub fn validate_form(values: JsValue, config: JsValue) -> Result<JsValue, JsValue> {
    let values: FormState = serde_wasm_bindgen::from_value(values)
        .map_err(|e| JsValue::from_str(&format!("Failed to parse form values: {}", e)))?;
    let config = parse_config(config)?;
    to_js(&validate(&config, &values))
}

fn parse_config(config: JsValue) -> Result<ValidationConfig, JsValue> {
    let config: Option<ValidationConfig> = serde_wasm_bindgen::from_value(config)
        .map_err(|e| JsValue::from_str(&format!("Failed to parse config: {}", e)))?;
    Ok(config.unwrap_or_default())
}

fn parse_field(name: &str) -> Result<Field, JsValue> {
    name.parse()
        .map_err(|e: FormError| JsValue::from_str(&e.to_string()))
}

/// Plain JS objects rather than `Map`s, so hosts can index errors by name
fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsValue> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(Into::into)
}
