//! Model descriptors and live model configuration.
//!
//! A [`ModelConfig`] is the static description of a model: its name and the
//! arguments it accepts. A [`ModelInfo`] is the user's current choice for a
//! model, most importantly the values in `userArgs`. Both load from the JSON
//! the host application stores.

use crate::arg_map::ArgMap;
use crate::error::CatalogError;
use crate::numeric::format_number;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Value kind of a model argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    /// Parsed as a float when edited
    Number,
    /// Kept as the raw string
    #[default]
    Text,
}

impl<'de> Deserialize<'de> for FieldType {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(if raw == "number" {
            Self::Number
        } else {
            Self::Text
        })
    }
}

/// Definition of a single model argument.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FieldSpec {
    /// Whether the user may edit this argument
    #[serde(default)]
    pub editable: bool,
    /// Value kind
    #[serde(rename = "type", default)]
    pub field_type: FieldType,
    /// Display label; the key is shown when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl FieldSpec {
    /// An editable numeric field.
    #[must_use]
    pub fn number() -> Self {
        Self {
            editable: true,
            field_type: FieldType::Number,
            label: None,
        }
    }

    /// An editable text field.
    #[must_use]
    pub fn text() -> Self {
        Self {
            editable: true,
            field_type: FieldType::Text,
            label: None,
        }
    }

    /// Set the display label.
    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set editability.
    #[must_use]
    pub const fn editable(mut self, editable: bool) -> Self {
        self.editable = editable;
        self
    }

    /// Label to show for `key`.
    #[must_use]
    pub fn display_label<'a>(&'a self, key: &'a str) -> &'a str {
        self.label.as_deref().unwrap_or(key)
    }
}

/// A user-supplied argument value.
///
/// `NaN` serializes as `null`, so `null` reads back as `Number(NaN)`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ArgValue {
    /// Numeric value (may be `NaN` after a failed parse)
    Number(f64),
    /// Free text
    Text(String),
}

impl<'de> Deserialize<'de> for ArgValue {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ArgValueVisitor)
    }
}

struct ArgValueVisitor;

impl serde::de::Visitor<'_> for ArgValueVisitor {
    type Value = ArgValue;

    fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("a number, a string, or null")
    }

    fn visit_f64<E: serde::de::Error>(self, v: f64) -> Result<ArgValue, E> {
        Ok(ArgValue::Number(v))
    }

    #[allow(clippy::cast_precision_loss)]
    fn visit_i64<E: serde::de::Error>(self, v: i64) -> Result<ArgValue, E> {
        Ok(ArgValue::Number(v as f64))
    }

    #[allow(clippy::cast_precision_loss)]
    fn visit_u64<E: serde::de::Error>(self, v: u64) -> Result<ArgValue, E> {
        Ok(ArgValue::Number(v as f64))
    }

    fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<ArgValue, E> {
        Ok(ArgValue::Text(v.to_string()))
    }

    fn visit_string<E: serde::de::Error>(self, v: String) -> Result<ArgValue, E> {
        Ok(ArgValue::Text(v))
    }

    fn visit_unit<E: serde::de::Error>(self) -> Result<ArgValue, E> {
        Ok(ArgValue::Number(f64::NAN))
    }

    fn visit_none<E: serde::de::Error>(self) -> Result<ArgValue, E> {
        Ok(ArgValue::Number(f64::NAN))
    }
}

impl ArgValue {
    /// Text shown in an input box for this value.
    #[must_use]
    pub fn display(&self) -> String {
        match self {
            Self::Number(n) => format_number(*n),
            Self::Text(s) => s.clone(),
        }
    }

    /// Numeric value, if this is a number.
    #[must_use]
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(_) => None,
        }
    }

    /// Text value, if this is text.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Number(_) => None,
        }
    }
}

impl From<f64> for ArgValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for ArgValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for ArgValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Current argument values keyed by argument name.
pub type UserArgs = ArgMap<ArgValue>;

/// Static description of a model.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Display name
    pub name: String,
    /// Provider identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    /// Configurable arguments in display order
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub args: Option<ArgMap<FieldSpec>>,
}

impl ModelConfig {
    /// Create a descriptor with no arguments.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            provider: None,
            args: None,
        }
    }

    /// Set the provider.
    #[must_use]
    pub fn provider(mut self, provider: impl Into<String>) -> Self {
        self.provider = Some(provider.into());
        self
    }

    /// Append an argument definition.
    #[must_use]
    pub fn arg(mut self, key: impl Into<String>, spec: FieldSpec) -> Self {
        self.args.get_or_insert_with(ArgMap::new).insert(key, spec);
        self
    }

    /// Editable arguments in descriptor order.
    pub fn editable_args(&self) -> impl Iterator<Item = (&str, &FieldSpec)> {
        self.args
            .iter()
            .flat_map(ArgMap::iter)
            .filter(|(_, spec)| spec.editable)
    }

    /// Whether any argument is editable.
    #[must_use]
    pub fn has_editable_args(&self) -> bool {
        self.editable_args().next().is_some()
    }

    /// Parse a single descriptor.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Json`] for malformed input and
    /// [`CatalogError::EmptyName`] when the name is blank.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let model: Self = serde_json::from_str(json)?;
        model.validate()?;
        Ok(model)
    }

    fn validate(&self) -> Result<(), CatalogError> {
        if self.name.trim().is_empty() {
            return Err(CatalogError::EmptyName);
        }
        Ok(())
    }
}

/// Parse a JSON array of descriptors, keeping their order.
///
/// # Errors
///
/// Fails on malformed JSON, blank names, or repeated names.
pub fn load_catalog(json: &str) -> Result<Vec<ModelConfig>, CatalogError> {
    let models: Vec<ModelConfig> = serde_json::from_str(json)?;
    let mut seen = HashSet::new();
    for model in &models {
        model.validate()?;
        if !seen.insert(model.name.as_str()) {
            return Err(CatalogError::DuplicateModel(model.name.clone()));
        }
    }
    tracing::debug!(count = models.len(), "loaded model catalog");
    Ok(models)
}

/// The user's current configuration for a model.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ModelInfo {
    /// Provider identifier
    #[serde(default)]
    pub provider: String,
    /// Model name
    #[serde(default)]
    pub name: String,
    /// Current argument values
    #[serde(rename = "userArgs", default)]
    pub user_args: UserArgs,
}

impl ModelInfo {
    /// Create info for a model with no argument values.
    #[must_use]
    pub fn new(provider: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            name: name.into(),
            user_args: UserArgs::new(),
        }
    }

    /// Set an argument value.
    #[must_use]
    pub fn user_arg(mut self, key: impl Into<String>, value: impl Into<ArgValue>) -> Self {
        self.user_args.insert(key, value.into());
        self
    }

    /// Parse live info.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Json`] for malformed input.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Apply a proposed update, replacing `userArgs` wholesale.
    pub fn apply(&mut self, update: ModelInfoUpdate) {
        self.user_args = update.user_args;
    }
}

/// Partial model info proposed by a card: everything except provider and
/// name.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ModelInfoUpdate {
    /// Proposed argument values
    #[serde(rename = "userArgs")]
    pub user_args: UserArgs,
}
