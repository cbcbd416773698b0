//! Schema-driven interactive payload builder.
//!
//! Walks an operation's request schema and assembles a concrete JSON payload
//! through a sequence of prompts: objects field by field in declaration
//! order, arrays element by element until an empty line, primitives with
//! type coercion, enum hints, and defaults. Operations without a schema fall
//! back to raw JSON entry.
//!
//! The builder owns no state beyond the prompt source it reads from; a failed
//! build leaves nothing behind, so the session can retry the same or another
//! operation immediately.

use serde_json::{Map, Number, Value};

use crate::console::PromptSource;
use crate::error::{OzonCliError, Result};
use crate::schema::{ArraySchema, ObjectSchema, PrimitiveKind, PrimitiveSchema, SchemaNode};

/// Inputs coerced to `true` by boolean leaves. Everything else, including an
/// empty line, is `false`.
const TRUE_TOKENS: [&str; 5] = ["true", "1", "yes", "y", "да"];

/// Affirmative answers to the optional-field gate.
const YES_TOKENS: [&str; 4] = ["y", "yes", "д", "да"];

/// Interactive payload builder over an injectable prompt source.
pub struct PayloadBuilder<'a, P: PromptSource> {
    prompts: &'a mut P,
}

impl<'a, P: PromptSource> PayloadBuilder<'a, P> {
    pub fn new(prompts: &'a mut P) -> Self {
        Self { prompts }
    }

    /// Build the payload for an operation.
    ///
    /// With an object schema the operator is walked through its fields.
    /// Without a schema (or with a non-object top-level schema, which the
    /// catalog never produces) the body is entered as raw JSON: empty input
    /// yields `{}`, anything else must parse as JSON. Schema-driven builds
    /// always return an object; raw entry returns whatever JSON was typed.
    pub fn build_payload(&mut self, schema: Option<&SchemaNode>) -> Result<Value> {
        let Some(schema) = schema else {
            return self.prompt_raw_json("Enter the request body as JSON (or leave empty): ");
        };
        match schema {
            SchemaNode::Object(object) => {
                self.prompts.announce(
                    "Fill in the request fields (skip optional fields you do not need):",
                )?;
                Ok(Value::Object(self.prompt_object(object)?))
            }
            _ => self.prompt_raw_json("Enter the request body as JSON: "),
        }
    }

    /// Obtain one fully-formed value for a field.
    fn prompt_value(&mut self, label: &str, schema: &SchemaNode) -> Result<Value> {
        match schema {
            SchemaNode::Object(object) => Ok(Value::Object(self.prompt_object(object)?)),
            SchemaNode::Array(array) => Ok(Value::Array(self.prompt_array(label, array)?)),
            SchemaNode::Primitive(primitive) => {
                let raw = self.prompts.prompt(&format!("Enter {label}: "))?;
                self.coerce_primitive(raw.trim(), primitive)
            }
        }
    }

    /// Fill an object's properties in declaration order.
    ///
    /// Optional properties are gated by a yes/no prompt; a declined property
    /// is omitted from the result entirely, never set to null.
    fn prompt_object(&mut self, schema: &ObjectSchema) -> Result<Map<String, Value>> {
        let mut result = Map::new();
        for property in &schema.properties {
            let title = property.title();
            if !schema.is_required(&property.name) {
                let answer = self
                    .prompts
                    .prompt(&format!("Fill optional field '{title}'? [y/N]: "))?;
                if !YES_TOKENS.contains(&answer.trim().to_lowercase().as_str()) {
                    continue;
                }
            }
            let value = self.prompt_value(title, &property.schema)?;
            result.insert(property.name.clone(), value);
        }
        Ok(result)
    }

    /// Collect array elements until the first empty line.
    fn prompt_array(&mut self, label: &str, schema: &ArraySchema) -> Result<Vec<Value>> {
        self.prompts
            .announce(&format!("Enter values for array {label} (empty line to finish):"))?;
        let mut values = Vec::new();
        loop {
            let line = self.prompts.prompt("  > element: ")?;
            let raw = line.trim();
            if raw.is_empty() {
                break;
            }
            let value = match schema.items.as_ref() {
                SchemaNode::Primitive(primitive) => self.coerce_primitive(raw, primitive)?,
                // Non-primitive items are structurally permitted but unused by
                // the catalog; the non-empty line opens one more element.
                nested => self.prompt_value("element", nested)?,
            };
            values.push(value);
        }
        Ok(values)
    }

    /// Coerce one line of input into a typed scalar.
    ///
    /// Empty input takes the leaf's default verbatim when one is set. Enum
    /// leaves re-prompt once on empty input, showing the allowed values, and
    /// pass the answer through without membership validation.
    fn coerce_primitive(&mut self, raw: &str, schema: &PrimitiveSchema) -> Result<Value> {
        if raw.is_empty() {
            if let Some(default) = &schema.default {
                if !default.is_null() {
                    return Ok(default.clone());
                }
            }
        }
        if !schema.allowed.is_empty() {
            let chosen = if raw.is_empty() {
                let options = schema.allowed.join(", ");
                self.prompts
                    .prompt(&format!("  Allowed values ({options}). Choose: "))?
                    .trim()
                    .to_string()
            } else {
                raw.to_string()
            };
            return Ok(Value::String(chosen));
        }
        match schema.kind {
            PrimitiveKind::Integer => raw
                .parse::<i64>()
                .map(Value::from)
                .map_err(|_| OzonCliError::invalid_number(raw, "integer")),
            PrimitiveKind::Number => {
                let parsed = raw
                    .parse::<f64>()
                    .map_err(|_| OzonCliError::invalid_number(raw, "number"))?;
                // JSON has no representation for NaN or infinities.
                Number::from_f64(parsed)
                    .map(Value::Number)
                    .ok_or_else(|| OzonCliError::invalid_number(raw, "number"))
            }
            PrimitiveKind::Boolean => {
                Ok(Value::Bool(TRUE_TOKENS.contains(&raw.to_lowercase().as_str())))
            }
            PrimitiveKind::String | PrimitiveKind::Untyped => Ok(Value::String(raw.to_string())),
        }
    }

    fn prompt_raw_json(&mut self, label: &str) -> Result<Value> {
        let raw = self.prompts.prompt(label)?;
        if raw.is_empty() {
            return Ok(Value::Object(Map::new()));
        }
        serde_json::from_str(&raw).map_err(OzonCliError::MalformedJsonInput)
    }
}
