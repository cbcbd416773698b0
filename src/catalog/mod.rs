//! Static catalog of supported Seller API operations.
//!
//! Built once at startup and read-only afterwards. The payload builder only
//! consumes each operation's schema; the method and summary feed the menu and
//! the transport.

use std::collections::BTreeMap;

use crate::schema::{PrimitiveSchema, SchemaNode};

/// HTTP method of a catalog operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
}

/// One invocable API operation.
#[derive(Debug, Clone)]
pub struct Operation {
    pub method: HttpMethod,
    pub summary: String,
    /// Request body schema. `None` means the body is entered as raw JSON.
    pub schema: Option<SchemaNode>,
}

/// Immutable mapping from operation name (the URL path) to its definition.
#[derive(Debug, Clone)]
pub struct Catalog {
    operations: BTreeMap<String, Operation>,
}

impl Catalog {
    /// The built-in set of Seller API operations.
    pub fn builtin() -> Self {
        let mut operations = BTreeMap::new();

        operations.insert(
            "v1/analytics/stocks".to_string(),
            Operation {
                method: HttpMethod::Post,
                summary: "Stock analytics across warehouses".to_string(),
                schema: Some(
                    SchemaNode::object()
                        .property(
                            "cluster_ids",
                            SchemaNode::array(PrimitiveSchema::string()),
                            false,
                        )
                        .property(
                            "item_tags",
                            SchemaNode::array(PrimitiveSchema::string().with_allowed([
                                "ITEM_ATTRIBUTE_NONE",
                                "ITEM_ATTRIBUTE_BEST_SELLER",
                                "ITEM_ATTRIBUTE_EXCLUSIVE",
                            ])),
                            false,
                        )
                        .property("skus", SchemaNode::array(PrimitiveSchema::string()), false)
                        .property(
                            "turnover_grades",
                            SchemaNode::array(PrimitiveSchema::string().with_allowed([
                                "TURNOVER_GRADE_NONE",
                                "TURNOVER_GRADE_GREEN",
                                "TURNOVER_GRADE_YELLOW",
                                "TURNOVER_GRADE_RED",
                            ])),
                            false,
                        )
                        .property(
                            "warehouse_ids",
                            SchemaNode::array(PrimitiveSchema::string()),
                            false,
                        )
                        .build(),
                ),
            },
        );

        operations.insert(
            "v3/supply-order/get".to_string(),
            Operation {
                method: HttpMethod::Post,
                summary: "Get supply order details".to_string(),
                schema: Some(
                    SchemaNode::object()
                        .property(
                            "order_ids",
                            SchemaNode::array(PrimitiveSchema::integer()),
                            true,
                        )
                        .build(),
                ),
            },
        );

        operations.insert(
            "v3/supply-order/list".to_string(),
            Operation {
                method: HttpMethod::Post,
                summary: "List supply orders".to_string(),
                schema: Some(
                    SchemaNode::object()
                        .property("limit", PrimitiveSchema::integer().with_default(100), false)
                        .property("offset", PrimitiveSchema::integer().with_default(0), false)
                        .property("status", PrimitiveSchema::string(), false)
                        .build(),
                ),
            },
        );

        Self { operations }
    }

    pub fn get(&self, name: &str) -> Option<&Operation> {
        self.operations.get(name)
    }

    /// Operations in menu order (sorted by name).
    pub fn entries(&self) -> impl Iterator<Item = (&str, &Operation)> + '_ {
        self.operations
            .iter()
            .map(|(name, operation)| (name.as_str(), operation))
    }

    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }
}
