//! Type-annotation nodes for the static-typing extension.
//!
//! These mirror the `TS*` node family. Type nodes carry no comment
//! attachments; the declaration statements (`enum`, `interface`, `type`)
//! do, since they sit in statement position.

use serde::{Deserialize, Serialize};

use crate::expr::{Expression, Identifier};
use crate::pat::Pattern;
use crate::source::NodeMeta;

/// A type in annotation position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum TsType {
    #[serde(rename = "TSNumberKeyword")]
    Number,
    #[serde(rename = "TSStringKeyword")]
    String,
    #[serde(rename = "TSBooleanKeyword")]
    Boolean,
    #[serde(rename = "TSAnyKeyword")]
    Any,
    #[serde(rename = "TSVoidKeyword")]
    Void,
    #[serde(rename = "TSUnknownKeyword")]
    Unknown,
    #[serde(rename = "TSNeverKeyword")]
    Never,
    #[serde(rename = "TSArrayType")]
    Array(Box<TsArrayType>),
    #[serde(rename = "TSTupleType")]
    Tuple(Box<TsTupleType>),
    #[serde(rename = "TSNamedTupleMember")]
    NamedTupleMember(Box<TsNamedTupleMember>),
    #[serde(rename = "TSUnionType")]
    Union(Box<TsUnionType>),
    #[serde(rename = "TSIntersectionType")]
    Intersection(Box<TsIntersectionType>),
    #[serde(rename = "TSConditionalType")]
    Conditional(Box<TsConditionalType>),
    #[serde(rename = "TSFunctionType")]
    Function(Box<TsFunctionType>),
    #[serde(rename = "TSTypeLiteral")]
    TypeLiteral(Box<TsTypeLiteral>),
    #[serde(rename = "TSTypeReference")]
    TypeReference(Box<TsTypeReference>),
    #[serde(rename = "TSTypeQuery")]
    TypeQuery(Box<TsTypeQuery>),
    #[serde(rename = "TSLiteralType")]
    LiteralType(Box<TsLiteralType>),
}

/// The `TSTypeAnnotation` wrapper a node's `typeAnnotation` field holds;
/// prints as `: T`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TsTypeAnnotation {
    pub type_annotation: TsType,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TsArrayType {
    pub element_type: TsType,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TsTupleType {
    #[serde(default)]
    pub element_types: Vec<TsType>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TsNamedTupleMember {
    pub label: Identifier,
    pub element_type: TsType,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TsUnionType {
    #[serde(default)]
    pub types: Vec<TsType>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TsIntersectionType {
    #[serde(default)]
    pub types: Vec<TsType>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TsConditionalType {
    pub check_type: TsType,
    pub extends_type: TsType,
    pub true_type: TsType,
    pub false_type: TsType,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TsFunctionType {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_parameters: Option<TsTypeParameterDeclaration>,
    #[serde(default, alias = "parameters")]
    pub params: Vec<Pattern>,
    #[serde(
        default,
        rename = "returnType",
        alias = "typeAnnotation",
        skip_serializing_if = "Option::is_none"
    )]
    pub return_type: Option<TsTypeAnnotation>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TsTypeLiteral {
    #[serde(default)]
    pub members: Vec<TsTypeMember>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TsTypeReference {
    pub type_name: TsEntityName,
    #[serde(
        default,
        rename = "typeArguments",
        alias = "typeParameters",
        skip_serializing_if = "Option::is_none"
    )]
    pub type_arguments: Option<TsTypeParameterInstantiation>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TsTypeQuery {
    pub expr_name: TsEntityName,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TsLiteralType {
    pub literal: Expression,
}

/// A dotted name such as `ns.Inner.Type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum TsEntityName {
    #[serde(rename = "Identifier")]
    Identifier(Box<Identifier>),
    #[serde(rename = "TSQualifiedName")]
    Qualified(Box<TsQualifiedName>),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TsQualifiedName {
    pub left: TsEntityName,
    pub right: Identifier,
}

/// Members of type literals and interface bodies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum TsTypeMember {
    #[serde(rename = "TSPropertySignature")]
    Property(Box<TsPropertySignature>),
    #[serde(rename = "TSMethodSignature")]
    Method(Box<TsMethodSignature>),
    #[serde(rename = "TSIndexSignature")]
    Index(Box<TsIndexSignature>),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TsPropertySignature {
    pub key: Expression,
    #[serde(default)]
    pub optional: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_annotation: Option<TsTypeAnnotation>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TsMethodSignature {
    pub key: Expression,
    #[serde(default, alias = "parameters")]
    pub params: Vec<Pattern>,
    #[serde(
        default,
        rename = "returnType",
        alias = "typeAnnotation",
        skip_serializing_if = "Option::is_none"
    )]
    pub return_type: Option<TsTypeAnnotation>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TsIndexSignature {
    #[serde(default)]
    pub parameters: Vec<Pattern>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_annotation: Option<TsTypeAnnotation>,
}

// =============================================================================
// Type parameters
// =============================================================================

/// `<T, U extends V>` at a declaration site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TsTypeParameterDeclaration {
    #[serde(default)]
    pub params: Vec<TsTypeParameter>,
}

/// `<string, number>` at a use site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TsTypeParameterInstantiation {
    #[serde(default)]
    pub params: Vec<TsType>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TsTypeParameter {
    pub name: TsTypeParameterName,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constraint: Option<TsType>,
}

/// Parsers disagree on the shape of a type parameter's name: some produce
/// an identifier node, some a bare string. Both are accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TsTypeParameterName {
    Identifier(Identifier),
    Text(String),
}

// =============================================================================
// Declarations
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TsEnumDeclaration {
    #[serde(flatten)]
    pub meta: NodeMeta,
    pub id: Identifier,
    #[serde(default)]
    pub members: Vec<TsEnumMember>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TsEnumMember {
    pub id: Expression,
    #[serde(default)]
    pub initializer: Option<Expression>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TsInterfaceDeclaration {
    #[serde(flatten)]
    pub meta: NodeMeta,
    pub id: Identifier,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_parameters: Option<TsTypeParameterDeclaration>,
    #[serde(default, rename = "extends")]
    pub extends: Vec<TsExpressionWithTypeArguments>,
    pub body: TsInterfaceBody,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TsInterfaceBody {
    #[serde(default)]
    pub body: Vec<TsTypeMember>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TsTypeAliasDeclaration {
    #[serde(flatten)]
    pub meta: NodeMeta,
    pub id: Identifier,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_parameters: Option<TsTypeParameterDeclaration>,
    pub type_annotation: TsType,
}

/// A bare expression in heritage position (`implements`/`extends`
/// clauses).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TsExpressionWithTypeArguments {
    pub expression: Expression,
}
