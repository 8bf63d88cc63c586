//! Statement and declaration nodes, plus the program root.

use serde::{Deserialize, Serialize};

use crate::expr::{Expression, Identifier, Literal};
use crate::pat::Pattern;
use crate::source::NodeMeta;
use crate::ts::{
    TsEnumDeclaration, TsExpressionWithTypeArguments, TsInterfaceDeclaration,
    TsTypeAliasDeclaration, TsTypeAnnotation, TsTypeParameterDeclaration,
};

/// The root node handed to the printer. A bare statement list is accepted
/// too and wrapped into one of these implicitly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Program {
    #[serde(flatten)]
    pub meta: NodeMeta,
    #[serde(default)]
    pub body: Vec<Statement>,
    #[serde(default)]
    pub source_type: SourceType,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceType {
    #[default]
    Module,
    Script,
}

/// Every statement kind the emitter understands, tagged by its ESTree
/// `type` string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Statement {
    #[serde(rename = "BlockStatement")]
    Block(Box<BlockStatement>),
    #[serde(rename = "BreakStatement")]
    Break(Box<BreakStatement>),
    #[serde(rename = "ClassDeclaration")]
    ClassDeclaration(Box<Class>),
    #[serde(rename = "ContinueStatement")]
    Continue(Box<ContinueStatement>),
    #[serde(rename = "DebuggerStatement")]
    Debugger(Box<DebuggerStatement>),
    #[serde(rename = "DoWhileStatement")]
    DoWhile(Box<DoWhileStatement>),
    #[serde(rename = "EmptyStatement")]
    Empty(Box<EmptyStatement>),
    #[serde(rename = "ExportAllDeclaration")]
    ExportAll(Box<ExportAllDeclaration>),
    #[serde(rename = "ExportDefaultDeclaration")]
    ExportDefault(Box<ExportDefaultDeclaration>),
    #[serde(rename = "ExportNamedDeclaration")]
    ExportNamed(Box<ExportNamedDeclaration>),
    #[serde(rename = "ExpressionStatement")]
    Expression(Box<ExpressionStatement>),
    #[serde(rename = "ForStatement")]
    For(Box<ForStatement>),
    #[serde(rename = "ForInStatement")]
    ForIn(Box<ForInStatement>),
    #[serde(rename = "ForOfStatement")]
    ForOf(Box<ForOfStatement>),
    #[serde(rename = "FunctionDeclaration")]
    FunctionDeclaration(Box<Function>),
    #[serde(rename = "IfStatement")]
    If(Box<IfStatement>),
    #[serde(rename = "ImportDeclaration")]
    Import(Box<ImportDeclaration>),
    #[serde(rename = "LabeledStatement")]
    Labeled(Box<LabeledStatement>),
    #[serde(rename = "ReturnStatement")]
    Return(Box<ReturnStatement>),
    #[serde(rename = "SwitchStatement")]
    Switch(Box<SwitchStatement>),
    #[serde(rename = "ThrowStatement")]
    Throw(Box<ThrowStatement>),
    #[serde(rename = "TryStatement")]
    Try(Box<TryStatement>),
    #[serde(rename = "TSEnumDeclaration")]
    TsEnum(Box<TsEnumDeclaration>),
    #[serde(rename = "TSInterfaceDeclaration")]
    TsInterface(Box<TsInterfaceDeclaration>),
    #[serde(rename = "TSTypeAliasDeclaration")]
    TsTypeAlias(Box<TsTypeAliasDeclaration>),
    #[serde(rename = "VariableDeclaration")]
    VariableDeclaration(Box<VariableDeclaration>),
    #[serde(rename = "WhileStatement")]
    While(Box<WhileStatement>),
    #[serde(rename = "WithStatement")]
    With(Box<WithStatement>),
}

impl Statement {
    pub fn meta(&self) -> &NodeMeta {
        match self {
            Statement::Block(n) => &n.meta,
            Statement::Break(n) => &n.meta,
            Statement::ClassDeclaration(n) => &n.meta,
            Statement::Continue(n) => &n.meta,
            Statement::Debugger(n) => &n.meta,
            Statement::DoWhile(n) => &n.meta,
            Statement::Empty(n) => &n.meta,
            Statement::ExportAll(n) => &n.meta,
            Statement::ExportDefault(n) => &n.meta,
            Statement::ExportNamed(n) => &n.meta,
            Statement::Expression(n) => &n.meta,
            Statement::For(n) => &n.meta,
            Statement::ForIn(n) => &n.meta,
            Statement::ForOf(n) => &n.meta,
            Statement::FunctionDeclaration(n) => &n.meta,
            Statement::If(n) => &n.meta,
            Statement::Import(n) => &n.meta,
            Statement::Labeled(n) => &n.meta,
            Statement::Return(n) => &n.meta,
            Statement::Switch(n) => &n.meta,
            Statement::Throw(n) => &n.meta,
            Statement::Try(n) => &n.meta,
            Statement::TsEnum(n) => &n.meta,
            Statement::TsInterface(n) => &n.meta,
            Statement::TsTypeAlias(n) => &n.meta,
            Statement::VariableDeclaration(n) => &n.meta,
            Statement::While(n) => &n.meta,
            Statement::With(n) => &n.meta,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockStatement {
    #[serde(flatten)]
    pub meta: NodeMeta,
    #[serde(default)]
    pub body: Vec<Statement>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BreakStatement {
    #[serde(flatten)]
    pub meta: NodeMeta,
    #[serde(default)]
    pub label: Option<Identifier>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContinueStatement {
    #[serde(flatten)]
    pub meta: NodeMeta,
    #[serde(default)]
    pub label: Option<Identifier>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DebuggerStatement {
    #[serde(flatten)]
    pub meta: NodeMeta,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DoWhileStatement {
    #[serde(flatten)]
    pub meta: NodeMeta,
    pub body: Statement,
    pub test: Expression,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmptyStatement {
    #[serde(flatten)]
    pub meta: NodeMeta,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpressionStatement {
    #[serde(flatten)]
    pub meta: NodeMeta,
    pub expression: Expression,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForStatement {
    #[serde(flatten)]
    pub meta: NodeMeta,
    #[serde(default)]
    pub init: Option<ForInit>,
    #[serde(default)]
    pub test: Option<Expression>,
    #[serde(default)]
    pub update: Option<Expression>,
    pub body: Statement,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ForInit {
    Expression(Expression),
    VariableDeclaration(Box<VariableDeclaration>),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForInStatement {
    #[serde(flatten)]
    pub meta: NodeMeta,
    pub left: ForTarget,
    pub right: Expression,
    pub body: Statement,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForOfStatement {
    #[serde(flatten)]
    pub meta: NodeMeta,
    pub left: ForTarget,
    pub right: Expression,
    pub body: Statement,
    /// `for await (... of ...)`
    #[serde(default, rename = "await")]
    pub is_await: bool,
}

/// The binding side of a `for (... in/of ...)` head.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ForTarget {
    Pattern(Pattern),
    VariableDeclaration(Box<VariableDeclaration>),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IfStatement {
    #[serde(flatten)]
    pub meta: NodeMeta,
    pub test: Expression,
    pub consequent: Statement,
    #[serde(default)]
    pub alternate: Option<Statement>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabeledStatement {
    #[serde(flatten)]
    pub meta: NodeMeta,
    pub label: Identifier,
    pub body: Statement,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReturnStatement {
    #[serde(flatten)]
    pub meta: NodeMeta,
    #[serde(default)]
    pub argument: Option<Expression>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwitchStatement {
    #[serde(flatten)]
    pub meta: NodeMeta,
    pub discriminant: Expression,
    #[serde(default)]
    pub cases: Vec<SwitchCase>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwitchCase {
    #[serde(flatten)]
    pub meta: NodeMeta,
    /// `None` is the `default:` clause.
    #[serde(default)]
    pub test: Option<Expression>,
    #[serde(default)]
    pub consequent: Vec<Statement>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThrowStatement {
    #[serde(flatten)]
    pub meta: NodeMeta,
    #[serde(default)]
    pub argument: Option<Expression>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TryStatement {
    #[serde(flatten)]
    pub meta: NodeMeta,
    pub block: BlockStatement,
    #[serde(default)]
    pub handler: Option<CatchClause>,
    #[serde(default)]
    pub finalizer: Option<BlockStatement>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatchClause {
    #[serde(flatten)]
    pub meta: NodeMeta,
    #[serde(default)]
    pub param: Option<Pattern>,
    pub body: BlockStatement,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariableDeclaration {
    #[serde(flatten)]
    pub meta: NodeMeta,
    pub kind: VariableKind,
    #[serde(default)]
    pub declarations: Vec<VariableDeclarator>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VariableKind {
    Var,
    Let,
    Const,
}

impl VariableKind {
    pub fn keyword(self) -> &'static str {
        match self {
            VariableKind::Var => "var",
            VariableKind::Let => "let",
            VariableKind::Const => "const",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariableDeclarator {
    #[serde(flatten)]
    pub meta: NodeMeta,
    pub id: Pattern,
    #[serde(default)]
    pub init: Option<Expression>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WhileStatement {
    #[serde(flatten)]
    pub meta: NodeMeta,
    pub test: Expression,
    pub body: Statement,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WithStatement {
    #[serde(flatten)]
    pub meta: NodeMeta,
    pub object: Expression,
    pub body: Statement,
}

// =============================================================================
// Functions and classes (shared between declaration and expression forms)
// =============================================================================

/// Function node, used for both `FunctionDeclaration` and
/// `FunctionExpression` (the printed syntax is identical).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Function {
    #[serde(flatten)]
    pub meta: NodeMeta,
    #[serde(default)]
    pub id: Option<Identifier>,
    #[serde(default)]
    pub params: Vec<Pattern>,
    /// Absent on overload signatures, which have no printable body.
    #[serde(default)]
    pub body: Option<BlockStatement>,
    #[serde(default, rename = "async")]
    pub is_async: bool,
    #[serde(default)]
    pub generator: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_parameters: Option<TsTypeParameterDeclaration>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_type: Option<TsTypeAnnotation>,
}

/// Class node, used for both `ClassDeclaration` and `ClassExpression`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Class {
    #[serde(flatten)]
    pub meta: NodeMeta,
    #[serde(default)]
    pub id: Option<Identifier>,
    #[serde(default)]
    pub super_class: Option<Expression>,
    pub body: ClassBody,
    #[serde(default)]
    pub implements: Vec<TsExpressionWithTypeArguments>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassBody {
    #[serde(flatten)]
    pub meta: NodeMeta,
    #[serde(default)]
    pub body: Vec<ClassElement>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ClassElement {
    #[serde(rename = "MethodDefinition")]
    Method(Box<MethodDefinition>),
    #[serde(rename = "PropertyDefinition")]
    Property(Box<PropertyDefinition>),
    #[serde(rename = "StaticBlock")]
    StaticBlock(Box<StaticBlock>),
}

impl ClassElement {
    pub fn meta(&self) -> &NodeMeta {
        match self {
            ClassElement::Method(n) => &n.meta,
            ClassElement::Property(n) => &n.meta,
            ClassElement::StaticBlock(n) => &n.meta,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MethodDefinition {
    #[serde(flatten)]
    pub meta: NodeMeta,
    pub key: Expression,
    pub value: Function,
    #[serde(default)]
    pub kind: MethodKind,
    #[serde(default)]
    pub computed: bool,
    #[serde(default, rename = "static")]
    pub is_static: bool,
    #[serde(default)]
    pub decorators: Vec<Decorator>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MethodKind {
    Constructor,
    #[default]
    Method,
    Get,
    Set,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyDefinition {
    #[serde(flatten)]
    pub meta: NodeMeta,
    pub key: Expression,
    #[serde(default)]
    pub value: Option<Expression>,
    #[serde(default)]
    pub computed: bool,
    #[serde(default, rename = "static")]
    pub is_static: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accessibility: Option<Accessibility>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_annotation: Option<TsTypeAnnotation>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Accessibility {
    Public,
    Protected,
    Private,
}

impl Accessibility {
    pub fn as_str(self) -> &'static str {
        match self {
            Accessibility::Public => "public",
            Accessibility::Protected => "protected",
            Accessibility::Private => "private",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaticBlock {
    #[serde(flatten)]
    pub meta: NodeMeta,
    #[serde(default)]
    pub body: Vec<Statement>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Decorator {
    #[serde(flatten)]
    pub meta: NodeMeta,
    pub expression: Expression,
}

// =============================================================================
// Modules
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportDeclaration {
    #[serde(flatten)]
    pub meta: NodeMeta,
    #[serde(default)]
    pub specifiers: Vec<ImportDeclarationSpecifier>,
    pub source: Literal,
    #[serde(default)]
    pub import_kind: ImportKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ImportDeclarationSpecifier {
    #[serde(rename = "ImportSpecifier")]
    Named(Box<ImportSpecifier>),
    #[serde(rename = "ImportDefaultSpecifier")]
    Default(Box<ImportDefaultSpecifier>),
    #[serde(rename = "ImportNamespaceSpecifier")]
    Namespace(Box<ImportNamespaceSpecifier>),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportSpecifier {
    #[serde(flatten)]
    pub meta: NodeMeta,
    pub local: Identifier,
    pub imported: Identifier,
    #[serde(default)]
    pub import_kind: ImportKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportDefaultSpecifier {
    #[serde(flatten)]
    pub meta: NodeMeta,
    pub local: Identifier,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportNamespaceSpecifier {
    #[serde(flatten)]
    pub meta: NodeMeta,
    pub local: Identifier,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImportKind {
    #[default]
    Value,
    Type,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportNamedDeclaration {
    #[serde(flatten)]
    pub meta: NodeMeta,
    #[serde(default)]
    pub declaration: Option<Statement>,
    #[serde(default)]
    pub specifiers: Vec<ExportSpecifier>,
    #[serde(default)]
    pub source: Option<Literal>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportSpecifier {
    #[serde(flatten)]
    pub meta: NodeMeta,
    pub local: Identifier,
    pub exported: Identifier,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportDefaultDeclaration {
    #[serde(flatten)]
    pub meta: NodeMeta,
    pub declaration: DefaultDeclaration,
}

/// A default export is either an expression or a hoistable declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DefaultDeclaration {
    Expression(Box<Expression>),
    Declaration(Box<Statement>),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportAllDeclaration {
    #[serde(flatten)]
    pub meta: NodeMeta,
    pub source: Literal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn program_from_estree_json() {
        let program: Program = serde_json::from_str(
            r#"{
                "type": "Program",
                "sourceType": "module",
                "body": [
                    {
                        "type": "VariableDeclaration",
                        "kind": "const",
                        "declarations": [
                            {
                                "type": "VariableDeclarator",
                                "id": { "type": "Identifier", "name": "x" },
                                "init": { "type": "Literal", "value": 42, "raw": "42" }
                            }
                        ]
                    }
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(program.source_type, SourceType::Module);
        assert_eq!(program.body.len(), 1);
        let Statement::VariableDeclaration(declaration) = &program.body[0] else {
            panic!("expected a variable declaration");
        };
        assert_eq!(declaration.kind.keyword(), "const");
    }

    #[test]
    fn for_init_distinguishes_declarations_from_expressions() {
        let declaration: ForInit = serde_json::from_str(
            r#"{
                "type": "VariableDeclaration",
                "kind": "let",
                "declarations": []
            }"#,
        )
        .unwrap();
        assert!(matches!(declaration, ForInit::VariableDeclaration(_)));

        let expression: ForInit =
            serde_json::from_str(r#"{ "type": "Identifier", "name": "i" }"#).unwrap();
        assert!(matches!(expression, ForInit::Expression(_)));
    }
}
