//! Modal form model: field specs, edit buffer, validation and payload.
//!
//! DESIGN
//! ======
//! Forms mirror backend resource shapes field-for-field, so a form is just a
//! static list of [`FieldSpec`]s keyed by JSON field name. The edit buffer
//! holds raw input strings; typing happens only when the payload is built.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use std::collections::BTreeMap;

use serde_json::{Map, Number, Value};

/// Input widget and value type of a form field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Password,
    Date,
    Time,
    /// Integer input, sent as a JSON number.
    Number,
    TextArea,
    /// Sent as a JSON boolean.
    Checkbox,
    /// `(value, label)` choices.
    Select(&'static [(&'static str, &'static str)]),
}

/// One form field, keyed by its JSON field name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

impl FieldSpec {
    pub const fn new(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self { name, label, kind, required: false }
    }

    pub const fn text(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldKind::Text)
    }

    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// HTML `type` attribute for `<input>` based fields.
    pub fn input_type(&self) -> &'static str {
        match self.kind {
            FieldKind::Email => "email",
            FieldKind::Password => "password",
            FieldKind::Date => "date",
            FieldKind::Time => "time",
            FieldKind::Number => "number",
            FieldKind::Checkbox => "checkbox",
            FieldKind::Text | FieldKind::TextArea | FieldKind::Select(_) => "text",
        }
    }
}

/// Raw input values for one open form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormState {
    pub values: BTreeMap<String, String>,
    pub error: Option<String>,
    pub submitting: bool,
}

impl FormState {
    /// Empty form. Required selects start on their first choice.
    pub fn blank(fields: &[FieldSpec]) -> Self {
        let values = fields
            .iter()
            .map(|field| {
                let initial = match field.kind {
                    FieldKind::Select(options) if field.required => {
                        options.first().map(|(value, _)| (*value).to_owned()).unwrap_or_default()
                    }
                    FieldKind::Checkbox => "false".to_owned(),
                    _ => String::new(),
                };
                (field.name.to_owned(), initial)
            })
            .collect();
        Self { values, error: None, submitting: false }
    }

    /// Form prefilled from a serialized record.
    pub fn from_record(fields: &[FieldSpec], record: &Value) -> Self {
        let mut state = Self::blank(fields);
        for field in fields {
            let raw = match record.get(field.name) {
                Some(Value::String(text)) => text.clone(),
                Some(Value::Bool(flag)) => flag.to_string(),
                Some(Value::Number(number)) => number.to_string(),
                _ => continue,
            };
            state.values.insert(field.name.to_owned(), raw);
        }
        state
    }

    pub fn get(&self, name: &str) -> String {
        self.values.get(name).cloned().unwrap_or_default()
    }

    pub fn checked(&self, name: &str) -> bool {
        self.values.get(name).is_some_and(|value| value == "true")
    }

    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        self.values.insert(name.to_owned(), value.into());
        self.error = None;
    }

    /// Validate and build the JSON body.
    ///
    /// Blank optional fields become `null`, except blank optional passwords,
    /// which are left out so an edit never overwrites the stored credential.
    /// Blank required fields are listed in the error. Checkboxes become booleans and number fields integers.
    ///
    /// # Errors
    ///
    /// Returns a display message naming missing or malformed fields.
    pub fn to_payload(&self, fields: &[FieldSpec]) -> Result<Value, String> {
        let mut body = Map::new();
        let mut missing = Vec::new();
        let mut malformed = Vec::new();

        for field in fields {
            let raw = self.get(field.name);
            let raw = raw.trim();
            let value = match field.kind {
                FieldKind::Checkbox => Value::Bool(raw == "true"),
                FieldKind::Password if raw.is_empty() && !field.required => continue,
                _ if raw.is_empty() => {
                    if field.required {
                        missing.push(field.label);
                    }
                    Value::Null
                }
                FieldKind::Number => match raw.parse::<i64>() {
                    Ok(number) => Value::Number(Number::from(number)),
                    Err(_) => {
                        malformed.push(field.label);
                        Value::Null
                    }
                },
                _ => Value::String(raw.to_owned()),
            };
            body.insert(field.name.to_owned(), value);
        }

        if !missing.is_empty() {
            return Err(format!("Required: {}", missing.join(", ")));
        }
        if !malformed.is_empty() {
            return Err(format!("Must be a whole number: {}", malformed.join(", ")));
        }
        Ok(Value::Object(body))
    }
}
