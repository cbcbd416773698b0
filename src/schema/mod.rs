//! Request schema model.
//!
//! A [`SchemaNode`] describes the shape expected at one position of a request
//! body: an object with named properties, a homogeneous array, or a primitive
//! leaf with optional enum constraint and default. Nodes are built once for
//! the operation catalog and are read-only afterwards; the payload builder
//! dispatches on the node kind by pattern matching.

use std::collections::BTreeSet;

use serde_json::Value;

/// The shape expected at one position in a request body.
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaNode {
    Object(ObjectSchema),
    Array(ArraySchema),
    Primitive(PrimitiveSchema),
}

/// An object node: ordered properties plus the set of required names.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectSchema {
    /// Properties in declaration order; this order drives prompt order.
    pub properties: Vec<Property>,
    /// Names that must always be filled. Membership only — a name listed
    /// here must also appear in `properties`.
    pub required: BTreeSet<String>,
}

impl ObjectSchema {
    /// Whether `name` must always be filled.
    pub fn is_required(&self, name: &str) -> bool {
        self.required.contains(name)
    }
}

/// One named property of an object node.
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    pub name: String,
    /// Human label shown in prompts when present.
    pub description: Option<String>,
    pub schema: SchemaNode,
}

impl Property {
    /// The label shown to the operator: the description, or the raw name.
    pub fn title(&self) -> &str {
        self.description.as_deref().unwrap_or(&self.name)
    }
}

/// An array node. Arrays are homogeneous: one schema for every element.
#[derive(Debug, Clone, PartialEq)]
pub struct ArraySchema {
    pub items: Box<SchemaNode>,
}

/// A primitive leaf node.
#[derive(Debug, Clone, PartialEq)]
pub struct PrimitiveSchema {
    pub kind: PrimitiveKind,
    /// Allowed values (the schema's enum list). Empty when unconstrained.
    pub allowed: Vec<String>,
    /// Substituted verbatim for empty input. Pre-typed by the catalog, so no
    /// coercion is applied to it.
    pub default: Option<Value>,
}

/// Scalar type of a primitive leaf. `Untyped` covers nodes with no declared
/// type, which behave as strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimitiveKind {
    String,
    Integer,
    Number,
    Boolean,
    Untyped,
}

impl PrimitiveSchema {
    fn of(kind: PrimitiveKind) -> Self {
        Self {
            kind,
            allowed: Vec::new(),
            default: None,
        }
    }

    pub fn string() -> Self {
        Self::of(PrimitiveKind::String)
    }

    pub fn integer() -> Self {
        Self::of(PrimitiveKind::Integer)
    }

    pub fn number() -> Self {
        Self::of(PrimitiveKind::Number)
    }

    pub fn boolean() -> Self {
        Self::of(PrimitiveKind::Boolean)
    }

    pub fn untyped() -> Self {
        Self::of(PrimitiveKind::Untyped)
    }

    /// Constrain this leaf to an enum of allowed values.
    pub fn with_allowed<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed = values.into_iter().map(Into::into).collect();
        self
    }

    /// Attach a pre-typed default substituted for empty input.
    pub fn with_default(mut self, value: impl Into<Value>) -> Self {
        self.default = Some(value.into());
        self
    }
}

impl From<PrimitiveSchema> for SchemaNode {
    fn from(schema: PrimitiveSchema) -> Self {
        SchemaNode::Primitive(schema)
    }
}

impl SchemaNode {
    /// An array node with the given element schema.
    pub fn array(items: impl Into<SchemaNode>) -> Self {
        SchemaNode::Array(ArraySchema {
            items: Box::new(items.into()),
        })
    }

    /// Builder: start an object node.
    pub fn object() -> ObjectBuilder {
        ObjectBuilder {
            properties: Vec::new(),
            required: BTreeSet::new(),
        }
    }
}

/// Builder for object schemas, used by the operation catalog.
pub struct ObjectBuilder {
    properties: Vec<Property>,
    required: BTreeSet<String>,
}

impl ObjectBuilder {
    /// Add a property. Declaration order is preserved.
    pub fn property(
        mut self,
        name: impl Into<String>,
        schema: impl Into<SchemaNode>,
        required: bool,
    ) -> Self {
        let name = name.into();
        if required {
            self.required.insert(name.clone());
        }
        self.properties.push(Property {
            name,
            description: None,
            schema: schema.into(),
        });
        self
    }

    /// Add a property with a human label for prompts.
    pub fn described_property(
        mut self,
        name: impl Into<String>,
        description: impl Into<String>,
        schema: impl Into<SchemaNode>,
        required: bool,
    ) -> Self {
        let name = name.into();
        if required {
            self.required.insert(name.clone());
        }
        self.properties.push(Property {
            name,
            description: Some(description.into()),
            schema: schema.into(),
        });
        self
    }

    pub fn build(self) -> SchemaNode {
        SchemaNode::Object(ObjectSchema {
            properties: self.properties,
            required: self.required,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn object_builder_preserves_declaration_order() {
        let node = SchemaNode::object()
            .property("limit", PrimitiveSchema::integer().with_default(100), false)
            .property("offset", PrimitiveSchema::integer().with_default(0), false)
            .property("status", PrimitiveSchema::string(), false)
            .build();

        let SchemaNode::Object(object) = node else {
            panic!("expected an object node");
        };
        let names: Vec<&str> = object.properties.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["limit", "offset", "status"]);
    }

    #[test]
    fn required_membership_is_checked_by_name() {
        let node = SchemaNode::object()
            .property(
                "order_ids",
                SchemaNode::array(PrimitiveSchema::integer()),
                true,
            )
            .property("note", PrimitiveSchema::string(), false)
            .build();

        let SchemaNode::Object(object) = node else {
            panic!("expected an object node");
        };
        assert!(object.is_required("order_ids"));
        assert!(!object.is_required("note"));
        assert!(!object.is_required("missing"));
    }

    #[test]
    fn property_title_falls_back_to_name() {
        let described = Property {
            name: "status".into(),
            description: Some("Order status".into()),
            schema: PrimitiveSchema::string().into(),
        };
        let bare = Property {
            name: "status".into(),
            description: None,
            schema: PrimitiveSchema::string().into(),
        };

        assert_eq!(described.title(), "Order status");
        assert_eq!(bare.title(), "status");
    }

    #[test]
    fn enum_leaf_keeps_value_order() {
        let leaf = PrimitiveSchema::string().with_allowed(["GREEN", "YELLOW", "RED"]);
        assert_eq!(leaf.allowed, ["GREEN", "YELLOW", "RED"]);
        assert_eq!(leaf.kind, PrimitiveKind::String);
    }

    #[test]
    fn default_is_stored_pre_typed() {
        let leaf = PrimitiveSchema::integer().with_default(100);
        assert_eq!(leaf.default, Some(serde_json::json!(100)));
    }
}
