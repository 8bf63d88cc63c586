//! The node handler table: one `Printer` whose `emit_*` methods cover
//! every node kind, split across submodules by node family.
//!
//! `handle_*` wrappers add the comment protocol around a node's own
//! commands (leading comments before, first trailing comment onto the
//! pending queue); `emit_*` methods render the node itself. Bodies and
//! separated lists drain the pending queue at their safe points.

mod comments;
mod expressions;
mod helpers;
mod literals;
mod patterns;
mod statements;
mod types;

use esgen_ast::expr::Expression;
use esgen_ast::pat::Pattern;
use esgen_ast::source::{Comment, NodeMeta};
use esgen_ast::stmt::{ClassElement, Statement};

use crate::command::CommandStream;

/// Mutable render state threaded through the recursive descent. One
/// instance per print call; nothing is shared across renders.
pub(crate) struct Printer {
    pub(super) commands: CommandStream,
    /// Trailing comments discovered mid-render, spliced in at the next
    /// safe point by the body/list renderers.
    pub(super) comments: Vec<Comment>,
    /// Whether the subtree currently being rendered has spanned multiple
    /// lines; read and reset by the deferred layout deciders.
    pub(super) multiline: bool,
    /// Preferred quote character for re-derived string literals.
    pub(super) quote: char,
}

impl Printer {
    pub fn new(quote: char) -> Self {
        Self {
            commands: CommandStream::new(),
            comments: Vec::new(),
            multiline: false,
            quote,
        }
    }

    pub fn print_program(&mut self, body: &[Statement]) {
        self.handle_body(body);
    }

    pub fn finish(self) -> CommandStream {
        debug_assert!(
            self.comments.is_empty(),
            "pending comments must be drained by the end of a render"
        );
        self.commands
    }

    // =========================================================================
    // Dispatch
    // =========================================================================

    pub(super) fn handle_expression(&mut self, node: &Expression) {
        self.prepend_comments(node.meta(), false);
        self.emit_expression(node);
        self.queue_trailing(node.meta());
    }

    pub(super) fn emit_expression(&mut self, node: &Expression) {
        match node {
            Expression::Array(n) => self.emit_array_expression(n),
            Expression::Arrow(n) => self.emit_arrow_function(n),
            Expression::Assignment(n) => self.emit_assignment(n),
            Expression::Await(n) => self.emit_await(n),
            Expression::Binary(n) => self.emit_binary_expression(n),
            Expression::Call(n) => self.emit_call_expression(n),
            Expression::Chain(n) => self.handle_expression(&n.expression),
            Expression::Class(n) => self.emit_class(n),
            Expression::Conditional(n) => self.emit_conditional(n),
            Expression::Function(n) => self.emit_function(n),
            Expression::Identifier(n) => self.emit_identifier(n),
            Expression::Import(n) => self.emit_import_expression(n),
            Expression::Literal(n) => self.emit_literal(n),
            Expression::Logical(n) => self.emit_logical_expression(n),
            Expression::Member(n) => self.emit_member_expression(n),
            Expression::MetaProperty(n) => self.emit_meta_property(n),
            Expression::New(n) => self.emit_new_expression(n),
            Expression::Object(n) => self.emit_object_expression(n),
            Expression::PrivateIdentifier(n) => self.emit_private_identifier(n),
            Expression::Sequence(n) => self.emit_sequence_expression(n),
            Expression::Spread(n) => self.emit_spread_element(n),
            Expression::Super(n) => self.emit_super(n),
            Expression::TaggedTemplate(n) => self.emit_tagged_template(n),
            Expression::Template(n) => self.emit_template_literal(n),
            Expression::This(n) => self.emit_this(n),
            Expression::Unary(n) => self.emit_unary(n),
            Expression::Update(n) => self.emit_update(n),
            Expression::Yield(n) => self.emit_yield(n),
            Expression::TsAs(n) => self.emit_ts_as(n),
            Expression::TsSatisfies(n) => self.emit_ts_satisfies(n),
            Expression::TsNonNull(n) => self.emit_ts_non_null(n),
        }
    }

    pub(super) fn handle_statement(&mut self, node: &Statement) {
        self.prepend_comments(node.meta(), false);
        self.emit_statement(node);
        self.queue_trailing(node.meta());
    }

    pub(super) fn emit_statement(&mut self, node: &Statement) {
        match node {
            Statement::Block(n) => self.emit_block_like(&n.body),
            Statement::Break(n) => self.emit_break(n),
            Statement::ClassDeclaration(n) => self.emit_class(n),
            Statement::Continue(n) => self.emit_continue(n),
            Statement::Debugger(n) => self.emit_debugger(n),
            Statement::DoWhile(n) => self.emit_do_while(n),
            Statement::Empty(_) => self.commands.text(";"),
            Statement::ExportAll(n) => self.emit_export_all(n),
            Statement::ExportDefault(n) => self.emit_export_default(n),
            Statement::ExportNamed(n) => self.emit_export_named(n),
            Statement::Expression(n) => self.emit_expression_statement(n),
            Statement::For(n) => self.emit_for(n),
            Statement::ForIn(n) => self.emit_for_in(n),
            Statement::ForOf(n) => self.emit_for_of(n),
            Statement::FunctionDeclaration(n) => self.emit_function(n),
            Statement::If(n) => self.emit_if(n),
            Statement::Import(n) => self.emit_import_declaration(n),
            Statement::Labeled(n) => self.emit_labeled(n),
            Statement::Return(n) => self.emit_return(n),
            Statement::Switch(n) => self.emit_switch(n),
            Statement::Throw(n) => self.emit_throw(n),
            Statement::Try(n) => self.emit_try(n),
            Statement::TsEnum(n) => self.emit_ts_enum_declaration(n),
            Statement::TsInterface(n) => self.emit_ts_interface_declaration(n),
            Statement::TsTypeAlias(n) => self.emit_ts_type_alias_declaration(n),
            Statement::VariableDeclaration(n) => {
                self.emit_variable_declaration(n);
                self.commands.text(";");
            }
            Statement::While(n) => self.emit_while(n),
            Statement::With(n) => self.emit_with(n),
        }
    }

    pub(super) fn handle_pattern(&mut self, node: &Pattern) {
        self.prepend_comments(node.meta(), false);
        self.emit_pattern(node);
        self.queue_trailing(node.meta());
    }

    pub(super) fn emit_pattern(&mut self, node: &Pattern) {
        match node {
            Pattern::Identifier(n) => self.emit_identifier(n),
            Pattern::Object(n) => self.emit_object_pattern(n),
            Pattern::Array(n) => self.emit_array_pattern(n),
            Pattern::Assignment(n) => self.emit_assignment_pattern(n),
            Pattern::Rest(n) => self.emit_rest_element(n),
            Pattern::Member(n) => self.emit_member_expression(n),
        }
    }

    pub(super) fn emit_class_element(&mut self, node: &ClassElement) {
        match node {
            ClassElement::Method(n) => self.emit_method_definition(n),
            ClassElement::Property(n) => self.emit_property_definition(n),
            ClassElement::StaticBlock(n) => self.emit_static_block(n),
        }
    }

    // =========================================================================
    // Multiline forks
    // =========================================================================

    /// Render a sub-tree with the multiline flag reset and report whether
    /// it spanned lines. The command stream and comment queue stay shared;
    /// only the flag is isolated, so the decision for the surrounding
    /// construct can be taken without re-rendering.
    pub(super) fn isolate_multiline(&mut self, render: impl FnOnce(&mut Self)) -> bool {
        let saved = self.multiline;
        self.multiline = false;
        render(self);
        let multiline = self.multiline;
        self.multiline = saved;
        multiline
    }

    /// Comment protocol shared by the handle wrappers for nodes that are
    /// not part of the three big enums (declarators, blocks, literals in
    /// source position, identifiers in clause position).
    pub(super) fn with_comments(&mut self, meta: &NodeMeta, render: impl FnOnce(&mut Self)) {
        self.prepend_comments(meta, false);
        render(self);
        self.queue_trailing(meta);
    }
}
