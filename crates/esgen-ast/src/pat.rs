//! Binding patterns and assignment targets.

use serde::{Deserialize, Serialize};

use crate::expr::{Expression, Identifier, MemberExpression, PropertyKind};
use crate::source::NodeMeta;
use crate::ts::TsTypeAnnotation;

/// Everything that can appear in binding position: parameters, declarator
/// ids, destructuring targets. Member expressions are included because
/// `for (obj.x of ...)` and friends assign through them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Pattern {
    #[serde(rename = "Identifier")]
    Identifier(Box<Identifier>),
    #[serde(rename = "ObjectPattern")]
    Object(Box<ObjectPattern>),
    #[serde(rename = "ArrayPattern")]
    Array(Box<ArrayPattern>),
    #[serde(rename = "AssignmentPattern")]
    Assignment(Box<AssignmentPattern>),
    #[serde(rename = "RestElement")]
    Rest(Box<RestElement>),
    #[serde(rename = "MemberExpression")]
    Member(Box<MemberExpression>),
}

impl Pattern {
    pub fn meta(&self) -> &NodeMeta {
        match self {
            Pattern::Identifier(n) => &n.meta,
            Pattern::Object(n) => &n.meta,
            Pattern::Array(n) => &n.meta,
            Pattern::Assignment(n) => &n.meta,
            Pattern::Rest(n) => &n.meta,
            Pattern::Member(n) => &n.meta,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectPattern {
    #[serde(flatten)]
    pub meta: NodeMeta,
    #[serde(default)]
    pub properties: Vec<ObjectPatternProperty>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_annotation: Option<TsTypeAnnotation>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ObjectPatternProperty {
    #[serde(rename = "Property")]
    Property(Box<PatternProperty>),
    #[serde(rename = "RestElement")]
    Rest(Box<RestElement>),
}

/// A `Property` node in pattern position: its value is itself a pattern,
/// possibly with a default through `AssignmentPattern`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatternProperty {
    #[serde(flatten)]
    pub meta: NodeMeta,
    pub key: Expression,
    pub value: Pattern,
    #[serde(default)]
    pub kind: PropertyKind,
    #[serde(default)]
    pub computed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArrayPattern {
    #[serde(flatten)]
    pub meta: NodeMeta,
    /// `None` entries are elisions, as in `const [, second] = pair;`.
    #[serde(default)]
    pub elements: Vec<Option<Pattern>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentPattern {
    #[serde(flatten)]
    pub meta: NodeMeta,
    pub left: Pattern,
    pub right: Expression,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestElement {
    #[serde(flatten)]
    pub meta: NodeMeta,
    pub argument: Pattern,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_annotation: Option<TsTypeAnnotation>,
}
