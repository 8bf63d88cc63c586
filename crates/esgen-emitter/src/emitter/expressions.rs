//! Expression handlers.

use esgen_ast::expr::{
    ArrayExpression, ArrowFunctionBody, ArrowFunctionExpression, AssignmentExpression,
    AssignmentTarget, AwaitExpression, BinaryExpression, CallExpression, ConditionalExpression,
    Expression, ImportExpression, LogicalExpression, MemberExpression, MetaProperty,
    NewExpression, ObjectExpression, ObjectExpressionProperty, Property, PropertyKind,
    SequenceExpression, SpreadElement, TsAsExpression, TsNonNullExpression,
    TsSatisfiesExpression, UnaryExpression, UpdateExpression, YieldExpression,
};
use esgen_ast::pat::Pattern;
use esgen_ast::source::CommentKind;
use esgen_ast::stmt::{Class, Function};
use esgen_ast::ts::TsTypeParameterInstantiation;

use super::Printer;
use crate::command::Command;
use crate::precedence::{
    BinaryLike, PRECEDENCE_AWAIT, PRECEDENCE_CALL, PRECEDENCE_CONDITIONAL, PRECEDENCE_MEMBER,
    PRECEDENCE_SATISFIES, PRECEDENCE_TS_AS, PRECEDENCE_UNARY, expression_precedence,
    has_call_expression, needs_parens,
};

impl Printer {
    // =========================================================================
    // Expressions
    // =========================================================================

    pub(super) fn emit_array_expression(&mut self, node: &ArrayExpression) {
        self.commands.text("[");
        self.sparse_sequence(&node.elements, false, ",", Printer::handle_expression);
        self.commands.text("]");
    }

    pub(super) fn emit_arrow_function(&mut self, node: &ArrowFunctionExpression) {
        if node.is_async {
            self.commands.text("async ");
        }

        self.commands.text("(");
        self.sequence(&node.params, false, ",", Printer::handle_pattern);
        self.commands.text(") => ");

        // An object-headed body would be misparsed as a block; these are
        // the known ambiguous heads.
        let body_needs_parens = match &node.body {
            ArrowFunctionBody::Expression(body) => match body.as_ref() {
                Expression::Object(_) => true,
                Expression::Assignment(assignment) => matches!(
                    &assignment.left,
                    AssignmentTarget::Pattern(Pattern::Object(_))
                ),
                Expression::Logical(logical) => matches!(&logical.left, Expression::Object(_)),
                Expression::Conditional(conditional) => {
                    matches!(&conditional.test, Expression::Object(_))
                }
                _ => false,
            },
            ArrowFunctionBody::Block(_) => false,
        };

        if body_needs_parens {
            self.commands.text("(");
        }
        match &node.body {
            ArrowFunctionBody::Expression(body) => self.handle_expression(body),
            ArrowFunctionBody::Block(block) => self.handle_block(block),
        }
        if body_needs_parens {
            self.commands.text(")");
        }
    }

    pub(super) fn emit_assignment(&mut self, node: &AssignmentExpression) {
        self.emit_assignment_target(&node.left);
        self.commands.text(" ");
        self.commands.text(node.operator.as_str());
        self.commands.text(" ");
        self.handle_expression(&node.right);
    }

    pub(super) fn emit_assignment_target(&mut self, node: &AssignmentTarget) {
        match node {
            AssignmentTarget::Pattern(pattern) => self.handle_pattern(pattern),
            AssignmentTarget::Expression(expression) => self.handle_expression(expression),
        }
    }

    pub(super) fn emit_await(&mut self, node: &AwaitExpression) {
        match &node.argument {
            Some(argument) => {
                if expression_precedence(argument) < PRECEDENCE_AWAIT {
                    self.commands.text("await (");
                    self.handle_expression(argument);
                    self.commands.text(")");
                } else {
                    self.commands.text("await ");
                    self.handle_expression(argument);
                }
            }
            None => self.commands.text("await"),
        }
    }

    pub(super) fn emit_binary_expression(&mut self, node: &BinaryExpression) {
        self.emit_binary_like(&BinaryLike {
            left: &node.left,
            right: &node.right,
            operator: node.operator.as_str(),
            is_logical: false,
        });
    }

    pub(super) fn emit_logical_expression(&mut self, node: &LogicalExpression) {
        self.emit_binary_like(&BinaryLike {
            left: &node.left,
            right: &node.right,
            operator: node.operator.as_str(),
            is_logical: true,
        });
    }

    fn emit_binary_like(&mut self, node: &BinaryLike<'_>) {
        if needs_parens(node.left, node, false) {
            self.commands.text("(");
            self.handle_expression(node.left);
            self.commands.text(")");
        } else {
            self.handle_expression(node.left);
        }

        self.commands.text(" ");
        self.commands.text(node.operator);
        self.commands.text(" ");

        if needs_parens(node.right, node, true) {
            self.commands.text("(");
            self.handle_expression(node.right);
            self.commands.text(")");
        } else {
            self.handle_expression(node.right);
        }
    }

    pub(super) fn emit_call_expression(&mut self, node: &CallExpression) {
        self.emit_call_like(
            &node.callee,
            &node.arguments,
            node.type_arguments.as_ref(),
            node.optional,
            false,
        );
    }

    pub(super) fn emit_new_expression(&mut self, node: &NewExpression) {
        self.commands.text("new ");
        self.emit_call_like(
            &node.callee,
            &node.arguments,
            node.type_arguments.as_ref(),
            false,
            true,
        );
    }

    /// Shared call/construct renderer. The final argument's multi-line-ness
    /// is measured in its own fork so a trailing function or object literal
    /// does not push the other arguments onto separate lines.
    fn emit_call_like(
        &mut self,
        callee: &Expression,
        arguments: &[Expression],
        type_arguments: Option<&TsTypeParameterInstantiation>,
        optional: bool,
        is_new: bool,
    ) {
        let callee_needs_parens = expression_precedence(callee) < PRECEDENCE_CALL
            || (is_new && has_call_expression(callee));

        if callee_needs_parens {
            self.commands.text("(");
            self.handle_expression(callee);
            self.commands.text(")");
        } else {
            self.handle_expression(callee);
        }

        if optional {
            self.commands.text("?.");
        }

        if let Some(type_arguments) = type_arguments {
            self.emit_type_parameter_instantiation(type_arguments);
        }

        let open = self.commands.begin_sequence();
        let join = self.commands.begin_sequence();
        let close = self.commands.begin_sequence();

        self.commands.text("(");
        self.commands.push(Command::Sequence(open));

        let mut child_multiline = false;
        let mut final_multiline = false;
        let last = arguments.len().saturating_sub(1);

        for (index, argument) in arguments.iter().enumerate() {
            if index > 0 {
                if !self.comments.is_empty() {
                    self.commands.text(", ");
                    while let Some(comment) = self.take_pending_comment() {
                        let is_line = comment.kind == CommentKind::Line;
                        self.commands.push(Command::Comment(comment));
                        if is_line {
                            child_multiline = true;
                            self.commands.push(Command::Newline);
                        } else {
                            self.commands.text(" ");
                        }
                    }
                } else {
                    self.commands.push(Command::Sequence(join));
                }
            }

            let multiline = self.isolate_multiline(|printer| printer.handle_expression(argument));
            if index == last {
                final_multiline = multiline;
            } else {
                child_multiline |= multiline;
            }
        }

        self.commands.push(Command::Sequence(close));
        self.commands.text(")");

        if child_multiline || final_multiline {
            self.multiline = true;
        }

        if child_multiline {
            self.commands
                .extend_sequence(open, [Command::Indent, Command::Newline]);
            self.commands
                .extend_sequence(join, [Command::Text(",".into()), Command::Newline]);
            self.commands
                .extend_sequence(close, [Command::Dedent, Command::Newline]);
        } else {
            self.commands.extend_sequence(join, [Command::Text(", ".into())]);
        }
    }

    pub(super) fn emit_class(&mut self, node: &Class) {
        self.commands.text("class ");

        if let Some(id) = &node.id {
            self.handle_identifier(id);
            self.commands.text(" ");
        }

        if let Some(super_class) = &node.super_class {
            self.commands.text("extends ");
            self.handle_expression(super_class);
            self.commands.text(" ");
        }

        if !node.implements.is_empty() {
            self.commands.text("implements ");
            self.sequence(
                &node.implements,
                false,
                ",",
                Printer::emit_expression_with_type_arguments,
            );
        }

        self.with_comments(&node.body.meta, |printer| {
            printer.emit_block_like(&node.body.body);
        });
    }

    pub(super) fn emit_conditional(&mut self, node: &ConditionalExpression) {
        if expression_precedence(&node.test) > PRECEDENCE_CONDITIONAL {
            self.handle_expression(&node.test);
        } else {
            self.commands.text("(");
            self.handle_expression(&node.test);
            self.commands.text(")");
        }

        let if_true = self.commands.begin_sequence();
        let if_false = self.commands.begin_sequence();

        let multiline = self.isolate_multiline(|printer| {
            printer.commands.push(Command::Sequence(if_true));
            printer.handle_expression(&node.consequent);
            printer.commands.push(Command::Sequence(if_false));
            printer.handle_expression(&node.alternate);
        });

        if multiline {
            self.commands.extend_sequence(
                if_true,
                [Command::Indent, Command::Newline, Command::Text("? ".into())],
            );
            self.commands
                .extend_sequence(if_false, [Command::Newline, Command::Text(": ".into())]);
            self.commands.push(Command::Dedent);
        } else {
            self.commands
                .extend_sequence(if_true, [Command::Text(" ? ".into())]);
            self.commands
                .extend_sequence(if_false, [Command::Text(" : ".into())]);
        }
    }

    pub(super) fn emit_function(&mut self, node: &Function) {
        if node.is_async {
            self.commands.text("async ");
        }
        self.commands
            .text(if node.generator { "function* " } else { "function " });
        if let Some(id) = &node.id {
            self.handle_identifier(id);
        }

        if let Some(type_parameters) = &node.type_parameters {
            self.emit_type_parameter_declaration(type_parameters);
        }

        self.commands.text("(");
        self.sequence(&node.params, false, ",", Printer::handle_pattern);
        self.commands.text(")");

        if let Some(return_type) = &node.return_type {
            self.emit_type_annotation(return_type);
        }

        self.commands.text(" ");

        if let Some(body) = &node.body {
            self.handle_block(body);
        }
    }

    pub(super) fn emit_import_expression(&mut self, node: &ImportExpression) {
        self.commands.text("import(");
        self.handle_expression(&node.source);
        self.commands.text(")");
    }

    pub(super) fn emit_member_expression(&mut self, node: &MemberExpression) {
        if expression_precedence(&node.object) < PRECEDENCE_MEMBER {
            self.commands.text("(");
            self.handle_expression(&node.object);
            self.commands.text(")");
        } else {
            self.handle_expression(&node.object);
        }

        if node.computed {
            if node.optional {
                self.commands.text("?.");
            }
            self.commands.text("[");
            self.handle_expression(&node.property);
            self.commands.text("]");
        } else {
            self.commands.text(if node.optional { "?." } else { "." });
            self.handle_expression(&node.property);
        }
    }

    pub(super) fn emit_meta_property(&mut self, node: &MetaProperty) {
        self.handle_identifier(&node.meta_name);
        self.commands.text(".");
        self.handle_identifier(&node.property);
    }

    pub(super) fn emit_object_expression(&mut self, node: &ObjectExpression) {
        self.commands.text("{");
        self.sequence(&node.properties, true, ",", Printer::emit_object_property);
        self.commands.text("}");
    }

    fn emit_object_property(&mut self, node: &ObjectExpressionProperty) {
        // Method values print in shorthand form: `foo() {}` instead of
        // `foo: function() {}`.
        if let ObjectExpressionProperty::Property(property) = node
            && let Expression::Function(function) = &property.value
        {
            match property.kind {
                PropertyKind::Get | PropertyKind::Set => {
                    self.commands.text(property.kind.as_str());
                    self.commands.text(" ");
                }
                PropertyKind::Init => {
                    if function.is_async {
                        self.commands.text("async ");
                    }
                    if function.generator {
                        self.commands.text("*");
                    }
                }
            }

            if property.computed {
                self.commands.text("[");
            }
            self.handle_expression(&property.key);
            if property.computed {
                self.commands.text("]");
            }

            self.commands.text("(");
            self.sequence(&function.params, false, ",", Printer::handle_pattern);
            self.commands.text(") ");

            if let Some(body) = &function.body {
                self.handle_block(body);
            }
            return;
        }

        match node {
            ObjectExpressionProperty::Property(property) => {
                self.with_comments(&property.meta, |printer| printer.emit_property(property));
            }
            ObjectExpressionProperty::Spread(spread) => {
                self.with_comments(&spread.meta, |printer| printer.emit_spread_element(spread));
            }
        }
    }

    fn emit_property(&mut self, node: &Property) {
        let shorthand = !node.computed
            && node.kind == PropertyKind::Init
            && matches!(
                (&node.key, &node.value),
                (Expression::Identifier(key), Expression::Identifier(value))
                    if key.name == value.name
            );

        if shorthand {
            self.handle_expression(&node.value);
            return;
        }

        if node.computed {
            self.commands.text("[");
        }
        self.handle_expression(&node.key);
        self.commands.text(if node.computed { "]: " } else { ": " });
        self.handle_expression(&node.value);
    }

    pub(super) fn emit_sequence_expression(&mut self, node: &SequenceExpression) {
        self.commands.text("(");
        self.sequence(&node.expressions, false, ",", Printer::handle_expression);
        self.commands.text(")");
    }

    pub(super) fn emit_spread_element(&mut self, node: &SpreadElement) {
        self.commands.text("...");
        self.handle_expression(&node.argument);

        if let Some(annotation) = &node.type_annotation {
            self.emit_type_annotation(annotation);
        }
    }

    pub(super) fn emit_unary(&mut self, node: &UnaryExpression) {
        let operator = node.operator.as_str();
        self.commands.text(operator);
        if operator.len() > 1 {
            self.commands.text(" ");
        }

        if expression_precedence(&node.argument) < PRECEDENCE_UNARY {
            self.commands.text("(");
            self.handle_expression(&node.argument);
            self.commands.text(")");
        } else {
            self.handle_expression(&node.argument);
        }
    }

    pub(super) fn emit_update(&mut self, node: &UpdateExpression) {
        if node.prefix {
            self.commands.text(node.operator.as_str());
            self.handle_expression(&node.argument);
        } else {
            self.handle_expression(&node.argument);
            self.commands.text(node.operator.as_str());
        }
    }

    pub(super) fn emit_yield(&mut self, node: &YieldExpression) {
        match &node.argument {
            Some(argument) => {
                self.commands
                    .text(if node.delegate { "yield* " } else { "yield " });
                self.handle_expression(argument);
            }
            None => self.commands.text(if node.delegate { "yield*" } else { "yield" }),
        }
    }

    pub(super) fn emit_ts_as(&mut self, node: &TsAsExpression) {
        if expression_precedence(&node.expression) < PRECEDENCE_TS_AS {
            self.commands.text("(");
            self.handle_expression(&node.expression);
            self.commands.text(")");
        } else {
            self.handle_expression(&node.expression);
        }
        self.commands.text(" as ");
        self.emit_ts_type(&node.type_annotation);
    }

    pub(super) fn emit_ts_satisfies(&mut self, node: &TsSatisfiesExpression) {
        if expression_precedence(&node.expression) < PRECEDENCE_SATISFIES {
            self.commands.text("(");
            self.handle_expression(&node.expression);
            self.commands.text(")");
        } else {
            self.handle_expression(&node.expression);
        }
        self.commands.text(" satisfies ");
        self.emit_ts_type(&node.type_annotation);
    }

    pub(super) fn emit_ts_non_null(&mut self, node: &TsNonNullExpression) {
        self.handle_expression(&node.expression);
        self.commands.text("!");
    }
}
