//! Expression nodes and their operators.

use serde::{Deserialize, Serialize};

use crate::pat::Pattern;
use crate::source::NodeMeta;
use crate::stmt::{BlockStatement, Class, Function};
use crate::ts::{TsType, TsTypeAnnotation, TsTypeParameterInstantiation};

/// Every expression kind the emitter understands, tagged by its ESTree
/// `type` string. The enum is closed: adding a syntax form means adding a
/// variant here and a handler in the emitter, and the compiler enforces
/// that every dispatch site stays exhaustive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Expression {
    #[serde(rename = "ArrayExpression")]
    Array(Box<ArrayExpression>),
    #[serde(rename = "ArrowFunctionExpression")]
    Arrow(Box<ArrowFunctionExpression>),
    #[serde(rename = "AssignmentExpression")]
    Assignment(Box<AssignmentExpression>),
    #[serde(rename = "AwaitExpression")]
    Await(Box<AwaitExpression>),
    #[serde(rename = "BinaryExpression")]
    Binary(Box<BinaryExpression>),
    #[serde(rename = "CallExpression")]
    Call(Box<CallExpression>),
    #[serde(rename = "ChainExpression")]
    Chain(Box<ChainExpression>),
    #[serde(rename = "ClassExpression")]
    Class(Box<Class>),
    #[serde(rename = "ConditionalExpression")]
    Conditional(Box<ConditionalExpression>),
    #[serde(rename = "FunctionExpression")]
    Function(Box<Function>),
    #[serde(rename = "Identifier")]
    Identifier(Box<Identifier>),
    #[serde(rename = "ImportExpression")]
    Import(Box<ImportExpression>),
    #[serde(rename = "Literal")]
    Literal(Box<Literal>),
    #[serde(rename = "LogicalExpression")]
    Logical(Box<LogicalExpression>),
    #[serde(rename = "MemberExpression")]
    Member(Box<MemberExpression>),
    #[serde(rename = "MetaProperty")]
    MetaProperty(Box<MetaProperty>),
    #[serde(rename = "NewExpression")]
    New(Box<NewExpression>),
    #[serde(rename = "ObjectExpression")]
    Object(Box<ObjectExpression>),
    #[serde(rename = "PrivateIdentifier")]
    PrivateIdentifier(Box<PrivateIdentifier>),
    #[serde(rename = "SequenceExpression")]
    Sequence(Box<SequenceExpression>),
    #[serde(rename = "SpreadElement")]
    Spread(Box<SpreadElement>),
    #[serde(rename = "Super")]
    Super(Box<Super>),
    #[serde(rename = "TaggedTemplateExpression")]
    TaggedTemplate(Box<TaggedTemplateExpression>),
    #[serde(rename = "TemplateLiteral")]
    Template(Box<TemplateLiteral>),
    #[serde(rename = "ThisExpression")]
    This(Box<ThisExpression>),
    #[serde(rename = "UnaryExpression")]
    Unary(Box<UnaryExpression>),
    #[serde(rename = "UpdateExpression")]
    Update(Box<UpdateExpression>),
    #[serde(rename = "YieldExpression")]
    Yield(Box<YieldExpression>),
    #[serde(rename = "TSAsExpression")]
    TsAs(Box<TsAsExpression>),
    #[serde(rename = "TSSatisfiesExpression")]
    TsSatisfies(Box<TsSatisfiesExpression>),
    #[serde(rename = "TSNonNullExpression")]
    TsNonNull(Box<TsNonNullExpression>),
}

impl Expression {
    pub fn meta(&self) -> &NodeMeta {
        match self {
            Expression::Array(n) => &n.meta,
            Expression::Arrow(n) => &n.meta,
            Expression::Assignment(n) => &n.meta,
            Expression::Await(n) => &n.meta,
            Expression::Binary(n) => &n.meta,
            Expression::Call(n) => &n.meta,
            Expression::Chain(n) => &n.meta,
            Expression::Class(n) => &n.meta,
            Expression::Conditional(n) => &n.meta,
            Expression::Function(n) => &n.meta,
            Expression::Identifier(n) => &n.meta,
            Expression::Import(n) => &n.meta,
            Expression::Literal(n) => &n.meta,
            Expression::Logical(n) => &n.meta,
            Expression::Member(n) => &n.meta,
            Expression::MetaProperty(n) => &n.meta,
            Expression::New(n) => &n.meta,
            Expression::Object(n) => &n.meta,
            Expression::PrivateIdentifier(n) => &n.meta,
            Expression::Sequence(n) => &n.meta,
            Expression::Spread(n) => &n.meta,
            Expression::Super(n) => &n.meta,
            Expression::TaggedTemplate(n) => &n.meta,
            Expression::Template(n) => &n.meta,
            Expression::This(n) => &n.meta,
            Expression::Unary(n) => &n.meta,
            Expression::Update(n) => &n.meta,
            Expression::Yield(n) => &n.meta,
            Expression::TsAs(n) => &n.meta,
            Expression::TsSatisfies(n) => &n.meta,
            Expression::TsNonNull(n) => &n.meta,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArrayExpression {
    #[serde(flatten)]
    pub meta: NodeMeta,
    /// `None` entries are holes in a sparse array literal.
    #[serde(default)]
    pub elements: Vec<Option<Expression>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArrowFunctionExpression {
    #[serde(flatten)]
    pub meta: NodeMeta,
    #[serde(default)]
    pub params: Vec<Pattern>,
    pub body: ArrowFunctionBody,
    #[serde(default, rename = "async")]
    pub is_async: bool,
}

/// An arrow body is either a block or a bare expression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ArrowFunctionBody {
    Expression(Box<Expression>),
    Block(Box<BlockStatement>),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentExpression {
    #[serde(flatten)]
    pub meta: NodeMeta,
    pub operator: AssignmentOperator,
    pub left: AssignmentTarget,
    pub right: Expression,
}

/// The left side of an assignment: a binding pattern, or any expression
/// that is a valid reference (member accesses, mostly).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AssignmentTarget {
    Pattern(Pattern),
    Expression(Box<Expression>),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AwaitExpression {
    #[serde(flatten)]
    pub meta: NodeMeta,
    #[serde(default)]
    pub argument: Option<Expression>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BinaryExpression {
    #[serde(flatten)]
    pub meta: NodeMeta,
    pub operator: BinaryOperator,
    pub left: Expression,
    pub right: Expression,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallExpression {
    #[serde(flatten)]
    pub meta: NodeMeta,
    pub callee: Expression,
    #[serde(default)]
    pub arguments: Vec<Expression>,
    /// `foo?.()`
    #[serde(default)]
    pub optional: bool,
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
pub struct ChainExpression {
    #[serde(flatten)]
    pub meta: NodeMeta,
    pub expression: Expression,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConditionalExpression {
    #[serde(flatten)]
    pub meta: NodeMeta,
    pub test: Expression,
    pub consequent: Expression,
    pub alternate: Expression,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identifier {
    #[serde(flatten)]
    pub meta: NodeMeta,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_annotation: Option<TsTypeAnnotation>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportExpression {
    #[serde(flatten)]
    pub meta: NodeMeta,
    pub source: Expression,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Literal {
    #[serde(flatten)]
    pub meta: NodeMeta,
    #[serde(default)]
    pub value: LiteralValue,
    /// The exact source text, when the parser recorded it. Wins over
    /// `value` at print time so parser-produced trees round-trip exactly.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LiteralValue {
    #[default]
    Null,
    Boolean(bool),
    Number(f64),
    String(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogicalExpression {
    #[serde(flatten)]
    pub meta: NodeMeta,
    pub operator: LogicalOperator,
    pub left: Expression,
    pub right: Expression,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberExpression {
    #[serde(flatten)]
    pub meta: NodeMeta,
    pub object: Expression,
    pub property: Expression,
    #[serde(default)]
    pub computed: bool,
    /// `foo?.bar`
    #[serde(default)]
    pub optional: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetaProperty {
    #[serde(flatten)]
    pub meta: NodeMeta,
    /// The meta identifier, e.g. `import` in `import.meta`.
    #[serde(rename = "meta")]
    pub meta_name: Identifier,
    pub property: Identifier,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewExpression {
    #[serde(flatten)]
    pub meta: NodeMeta,
    pub callee: Expression,
    #[serde(default)]
    pub arguments: Vec<Expression>,
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
pub struct ObjectExpression {
    #[serde(flatten)]
    pub meta: NodeMeta,
    #[serde(default)]
    pub properties: Vec<ObjectExpressionProperty>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ObjectExpressionProperty {
    #[serde(rename = "Property")]
    Property(Box<Property>),
    #[serde(rename = "SpreadElement")]
    Spread(Box<SpreadElement>),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    #[serde(flatten)]
    pub meta: NodeMeta,
    pub key: Expression,
    pub value: Expression,
    #[serde(default)]
    pub kind: PropertyKind,
    #[serde(default)]
    pub computed: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyKind {
    #[default]
    Init,
    Get,
    Set,
}

impl PropertyKind {
    pub fn as_str(self) -> &'static str {
        match self {
            PropertyKind::Init => "init",
            PropertyKind::Get => "get",
            PropertyKind::Set => "set",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrivateIdentifier {
    #[serde(flatten)]
    pub meta: NodeMeta,
    /// The name without the leading `#`.
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SequenceExpression {
    #[serde(flatten)]
    pub meta: NodeMeta,
    pub expressions: Vec<Expression>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpreadElement {
    #[serde(flatten)]
    pub meta: NodeMeta,
    pub argument: Expression,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_annotation: Option<TsTypeAnnotation>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Super {
    #[serde(flatten)]
    pub meta: NodeMeta,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaggedTemplateExpression {
    #[serde(flatten)]
    pub meta: NodeMeta,
    pub tag: Expression,
    pub quasi: TemplateLiteral,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateLiteral {
    #[serde(flatten)]
    pub meta: NodeMeta,
    pub quasis: Vec<TemplateElement>,
    #[serde(default)]
    pub expressions: Vec<Expression>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateElement {
    #[serde(flatten)]
    pub meta: NodeMeta,
    pub value: TemplateElementValue,
    #[serde(default)]
    pub tail: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateElementValue {
    pub raw: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cooked: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThisExpression {
    #[serde(flatten)]
    pub meta: NodeMeta,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnaryExpression {
    #[serde(flatten)]
    pub meta: NodeMeta,
    pub operator: UnaryOperator,
    pub argument: Expression,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateExpression {
    #[serde(flatten)]
    pub meta: NodeMeta,
    pub operator: UpdateOperator,
    pub argument: Expression,
    #[serde(default)]
    pub prefix: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YieldExpression {
    #[serde(flatten)]
    pub meta: NodeMeta,
    #[serde(default)]
    pub argument: Option<Expression>,
    #[serde(default)]
    pub delegate: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TsAsExpression {
    #[serde(flatten)]
    pub meta: NodeMeta,
    pub expression: Expression,
    pub type_annotation: TsType,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TsSatisfiesExpression {
    #[serde(flatten)]
    pub meta: NodeMeta,
    pub expression: Expression,
    pub type_annotation: TsType,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TsNonNullExpression {
    #[serde(flatten)]
    pub meta: NodeMeta,
    pub expression: Expression,
}

// =============================================================================
// Operators
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BinaryOperator {
    #[serde(rename = "==")]
    Eq,
    #[serde(rename = "!=")]
    NotEq,
    #[serde(rename = "===")]
    StrictEq,
    #[serde(rename = "!==")]
    StrictNotEq,
    #[serde(rename = "<")]
    Lt,
    #[serde(rename = "<=")]
    LtEq,
    #[serde(rename = ">")]
    Gt,
    #[serde(rename = ">=")]
    GtEq,
    #[serde(rename = "<<")]
    ShiftLeft,
    #[serde(rename = ">>")]
    ShiftRight,
    #[serde(rename = ">>>")]
    UnsignedShiftRight,
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "-")]
    Sub,
    #[serde(rename = "*")]
    Mul,
    #[serde(rename = "/")]
    Div,
    #[serde(rename = "%")]
    Rem,
    #[serde(rename = "**")]
    Exp,
    #[serde(rename = "|")]
    BitOr,
    #[serde(rename = "^")]
    BitXor,
    #[serde(rename = "&")]
    BitAnd,
    #[serde(rename = "in")]
    In,
    #[serde(rename = "instanceof")]
    Instanceof,
}

impl BinaryOperator {
    pub fn as_str(self) -> &'static str {
        match self {
            BinaryOperator::Eq => "==",
            BinaryOperator::NotEq => "!=",
            BinaryOperator::StrictEq => "===",
            BinaryOperator::StrictNotEq => "!==",
            BinaryOperator::Lt => "<",
            BinaryOperator::LtEq => "<=",
            BinaryOperator::Gt => ">",
            BinaryOperator::GtEq => ">=",
            BinaryOperator::ShiftLeft => "<<",
            BinaryOperator::ShiftRight => ">>",
            BinaryOperator::UnsignedShiftRight => ">>>",
            BinaryOperator::Add => "+",
            BinaryOperator::Sub => "-",
            BinaryOperator::Mul => "*",
            BinaryOperator::Div => "/",
            BinaryOperator::Rem => "%",
            BinaryOperator::Exp => "**",
            BinaryOperator::BitOr => "|",
            BinaryOperator::BitXor => "^",
            BinaryOperator::BitAnd => "&",
            BinaryOperator::In => "in",
            BinaryOperator::Instanceof => "instanceof",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogicalOperator {
    #[serde(rename = "||")]
    Or,
    #[serde(rename = "&&")]
    And,
    #[serde(rename = "??")]
    NullishCoalescing,
}

impl LogicalOperator {
    pub fn as_str(self) -> &'static str {
        match self {
            LogicalOperator::Or => "||",
            LogicalOperator::And => "&&",
            LogicalOperator::NullishCoalescing => "??",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssignmentOperator {
    #[serde(rename = "=")]
    Assign,
    #[serde(rename = "+=")]
    AddAssign,
    #[serde(rename = "-=")]
    SubAssign,
    #[serde(rename = "*=")]
    MulAssign,
    #[serde(rename = "/=")]
    DivAssign,
    #[serde(rename = "%=")]
    RemAssign,
    #[serde(rename = "**=")]
    ExpAssign,
    #[serde(rename = "<<=")]
    ShiftLeftAssign,
    #[serde(rename = ">>=")]
    ShiftRightAssign,
    #[serde(rename = ">>>=")]
    UnsignedShiftRightAssign,
    #[serde(rename = "|=")]
    BitOrAssign,
    #[serde(rename = "^=")]
    BitXorAssign,
    #[serde(rename = "&=")]
    BitAndAssign,
    #[serde(rename = "||=")]
    OrAssign,
    #[serde(rename = "&&=")]
    AndAssign,
    #[serde(rename = "??=")]
    NullishAssign,
}

impl AssignmentOperator {
    pub fn as_str(self) -> &'static str {
        match self {
            AssignmentOperator::Assign => "=",
            AssignmentOperator::AddAssign => "+=",
            AssignmentOperator::SubAssign => "-=",
            AssignmentOperator::MulAssign => "*=",
            AssignmentOperator::DivAssign => "/=",
            AssignmentOperator::RemAssign => "%=",
            AssignmentOperator::ExpAssign => "**=",
            AssignmentOperator::ShiftLeftAssign => "<<=",
            AssignmentOperator::ShiftRightAssign => ">>=",
            AssignmentOperator::UnsignedShiftRightAssign => ">>>=",
            AssignmentOperator::BitOrAssign => "|=",
            AssignmentOperator::BitXorAssign => "^=",
            AssignmentOperator::BitAndAssign => "&=",
            AssignmentOperator::OrAssign => "||=",
            AssignmentOperator::AndAssign => "&&=",
            AssignmentOperator::NullishAssign => "??=",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnaryOperator {
    #[serde(rename = "-")]
    Minus,
    #[serde(rename = "+")]
    Plus,
    #[serde(rename = "!")]
    Not,
    #[serde(rename = "~")]
    BitNot,
    #[serde(rename = "typeof")]
    Typeof,
    #[serde(rename = "void")]
    Void,
    #[serde(rename = "delete")]
    Delete,
}

impl UnaryOperator {
    pub fn as_str(self) -> &'static str {
        match self {
            UnaryOperator::Minus => "-",
            UnaryOperator::Plus => "+",
            UnaryOperator::Not => "!",
            UnaryOperator::BitNot => "~",
            UnaryOperator::Typeof => "typeof",
            UnaryOperator::Void => "void",
            UnaryOperator::Delete => "delete",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UpdateOperator {
    #[serde(rename = "++")]
    Increment,
    #[serde(rename = "--")]
    Decrement,
}

impl UpdateOperator {
    pub fn as_str(self) -> &'static str {
        match self {
            UpdateOperator::Increment => "++",
            UpdateOperator::Decrement => "--",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binary_expression_from_estree_json() {
        let expression: Expression = serde_json::from_str(
            r#"{
                "type": "BinaryExpression",
                "operator": "+",
                "left": { "type": "Identifier", "name": "a" },
                "right": { "type": "Literal", "value": 1, "raw": "1" }
            }"#,
        )
        .unwrap();

        let Expression::Binary(binary) = expression else {
            panic!("expected a binary expression");
        };
        assert_eq!(binary.operator, BinaryOperator::Add);
        assert!(matches!(binary.left, Expression::Identifier(_)));
    }

    #[test]
    fn literal_values_deserialize_untagged() {
        let null: Literal = serde_json::from_str(r#"{ "value": null }"#).unwrap();
        assert_eq!(null.value, LiteralValue::Null);

        let boolean: Literal = serde_json::from_str(r#"{ "value": true }"#).unwrap();
        assert_eq!(boolean.value, LiteralValue::Boolean(true));

        let string: Literal = serde_json::from_str(r#"{ "value": "hi" }"#).unwrap();
        assert_eq!(string.value, LiteralValue::String("hi".to_string()));
    }

    #[test]
    fn operator_text_round_trips() {
        for (operator, text) in [
            (BinaryOperator::Exp, "**"),
            (BinaryOperator::UnsignedShiftRight, ">>>"),
            (BinaryOperator::Instanceof, "instanceof"),
        ] {
            assert_eq!(operator.as_str(), text);
            let parsed: BinaryOperator =
                serde_json::from_str(&format!("\"{text}\"")).unwrap();
            assert_eq!(parsed, operator);
        }
    }
}
