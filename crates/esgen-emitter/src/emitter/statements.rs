//! Statement, declaration and class member handlers.

use esgen_ast::expr::Expression;
use esgen_ast::pat::Pattern;
use esgen_ast::source::CommentKind;
use esgen_ast::stmt::{
    BlockStatement, BreakStatement, ContinueStatement, DebuggerStatement, Decorator,
    DefaultDeclaration, DoWhileStatement, ExportAllDeclaration, ExportDefaultDeclaration,
    ExportNamedDeclaration, ExportSpecifier, ExpressionStatement, ForInStatement, ForInit,
    ForOfStatement, ForStatement, ForTarget, IfStatement, ImportDeclaration,
    ImportDeclarationSpecifier, ImportKind, ImportSpecifier, LabeledStatement, MethodDefinition,
    MethodKind, PropertyDefinition, ReturnStatement, Statement, StaticBlock, SwitchStatement,
    ThrowStatement, TryStatement, VariableDeclarator, WhileStatement, WithStatement,
};

use super::Printer;
use crate::command::Command;

impl Printer {
    // =========================================================================
    // Statements
    // =========================================================================

    pub(super) fn handle_block(&mut self, node: &BlockStatement) {
        self.with_comments(&node.meta, |printer| printer.emit_block_like(&node.body));
    }

    pub(super) fn emit_break(&mut self, node: &BreakStatement) {
        match &node.label {
            Some(label) => {
                self.commands.text("break ");
                self.handle_identifier(label);
                self.commands.text(";");
            }
            None => self.commands.text("break;"),
        }
    }

    pub(super) fn emit_continue(&mut self, node: &ContinueStatement) {
        match &node.label {
            Some(label) => {
                self.commands.text("continue ");
                self.handle_identifier(label);
                self.commands.text(";");
            }
            None => self.commands.text("continue;"),
        }
    }

    pub(super) fn emit_debugger(&mut self, node: &DebuggerStatement) {
        self.commands.chunk("debugger", node.meta.loc);
        self.commands.text(";");
    }

    pub(super) fn emit_do_while(&mut self, node: &DoWhileStatement) {
        self.commands.text("do ");
        self.handle_statement(&node.body);
        self.commands.text(" while (");
        self.handle_expression(&node.test);
        self.commands.text(");");
    }

    pub(super) fn emit_expression_statement(&mut self, node: &ExpressionStatement) {
        // An object literal or a destructuring assignment at statement
        // head would parse as a block; both get wrapped.
        let needs_parens = match &node.expression {
            Expression::Object(_) => true,
            Expression::Assignment(assignment) => matches!(
                &assignment.left,
                esgen_ast::expr::AssignmentTarget::Pattern(Pattern::Object(_))
            ),
            _ => false,
        };

        if needs_parens {
            self.commands.text("(");
            self.handle_expression(&node.expression);
            self.commands.text(");");
        } else {
            self.handle_expression(&node.expression);
            self.commands.text(";");
        }
    }

    pub(super) fn emit_for(&mut self, node: &ForStatement) {
        self.commands.text("for (");

        if let Some(init) = &node.init {
            match init {
                ForInit::VariableDeclaration(declaration) => {
                    self.emit_variable_declaration(declaration);
                }
                ForInit::Expression(expression) => self.handle_expression(expression),
            }
        }

        self.commands.text("; ");
        if let Some(test) = &node.test {
            self.handle_expression(test);
        }
        self.commands.text("; ");
        if let Some(update) = &node.update {
            self.handle_expression(update);
        }

        self.commands.text(") ");
        self.handle_statement(&node.body);
    }

    pub(super) fn emit_for_in(&mut self, node: &ForInStatement) {
        self.emit_for_in_of(&node.left, &node.right, &node.body, " in ", false);
    }

    pub(super) fn emit_for_of(&mut self, node: &ForOfStatement) {
        self.emit_for_in_of(&node.left, &node.right, &node.body, " of ", node.is_await);
    }

    fn emit_for_in_of(
        &mut self,
        left: &ForTarget,
        right: &Expression,
        body: &Statement,
        keyword: &'static str,
        is_await: bool,
    ) {
        self.commands.text("for ");
        if is_await {
            self.commands.text("await ");
        }
        self.commands.text("(");

        match left {
            ForTarget::VariableDeclaration(declaration) => {
                self.emit_variable_declaration(declaration);
            }
            ForTarget::Pattern(pattern) => self.handle_pattern(pattern),
        }

        self.commands.text(keyword);
        self.handle_expression(right);
        self.commands.text(") ");
        self.handle_statement(body);
    }

    pub(super) fn emit_if(&mut self, node: &IfStatement) {
        self.commands.text("if (");
        self.handle_expression(&node.test);
        self.commands.text(") ");
        self.handle_statement(&node.consequent);

        if let Some(alternate) = &node.alternate {
            self.commands.text(" else ");
            self.handle_statement(alternate);
        }
    }

    pub(super) fn emit_labeled(&mut self, node: &LabeledStatement) {
        self.handle_identifier(&node.label);
        self.commands.text(": ");
        self.handle_statement(&node.body);
    }

    pub(super) fn emit_return(&mut self, node: &ReturnStatement) {
        match &node.argument {
            Some(argument) => {
                // A line comment ahead of the argument would swallow the
                // rest of the statement; parentheses keep it intact.
                let contains_line_comment = argument
                    .meta()
                    .leading_comments
                    .iter()
                    .any(|comment| comment.kind == CommentKind::Line);

                self.commands
                    .text(if contains_line_comment { "return (" } else { "return " });
                self.handle_expression(argument);
                self.commands
                    .text(if contains_line_comment { ");" } else { ";" });
            }
            None => self.commands.text("return;"),
        }
    }

    pub(super) fn emit_switch(&mut self, node: &SwitchStatement) {
        self.commands.text("switch (");
        self.handle_expression(&node.discriminant);
        self.commands.text(") {");
        self.commands.push(Command::Indent);

        let mut first = true;
        for case in &node.cases {
            if !first {
                self.commands.text("\n");
            }
            first = false;

            match &case.test {
                Some(test) => {
                    self.commands.push(Command::Newline);
                    self.commands.text("case ");
                    self.handle_expression(test);
                    self.commands.text(":");
                }
                None => {
                    self.commands.push(Command::Newline);
                    self.commands.text("default:");
                }
            }

            self.commands.push(Command::Indent);
            for statement in &case.consequent {
                self.commands.push(Command::Newline);
                self.handle_statement(statement);
            }
            self.commands.push(Command::Dedent);
        }

        self.commands.push(Command::Dedent);
        self.commands.push(Command::Newline);
        self.commands.text("}");
    }

    pub(super) fn emit_throw(&mut self, node: &ThrowStatement) {
        self.commands.text("throw ");
        if let Some(argument) = &node.argument {
            self.handle_expression(argument);
        }
        self.commands.text(";");
    }

    pub(super) fn emit_try(&mut self, node: &TryStatement) {
        self.commands.text("try ");
        self.handle_block(&node.block);

        if let Some(handler) = &node.handler {
            match &handler.param {
                Some(param) => {
                    self.commands.text(" catch(");
                    self.handle_pattern(param);
                    self.commands.text(") ");
                }
                None => self.commands.text(" catch "),
            }
            self.handle_block(&handler.body);
        }

        if let Some(finalizer) = &node.finalizer {
            self.commands.text(" finally ");
            self.handle_block(finalizer);
        }
    }

    pub(super) fn emit_variable_declarator(&mut self, node: &VariableDeclarator) {
        self.handle_pattern(&node.id);

        if let Some(init) = &node.init {
            self.commands.text(" = ");
            self.handle_expression(init);
        }
    }

    pub(super) fn emit_while(&mut self, node: &WhileStatement) {
        self.commands.text("while (");
        self.handle_expression(&node.test);
        self.commands.text(") ");
        self.handle_statement(&node.body);
    }

    pub(super) fn emit_with(&mut self, node: &WithStatement) {
        self.commands.text("with (");
        self.handle_expression(&node.object);
        self.commands.text(") ");
        self.handle_statement(&node.body);
    }

    // =========================================================================
    // Modules
    // =========================================================================

    pub(super) fn emit_import_declaration(&mut self, node: &ImportDeclaration) {
        if node.specifiers.is_empty() {
            self.commands.text("import ");
            self.handle_literal(&node.source);
            self.commands.text(";");
            return;
        }

        let mut default_specifier = None;
        let mut namespace_specifier = None;
        let mut named_specifiers = Vec::new();

        for specifier in &node.specifiers {
            match specifier {
                ImportDeclarationSpecifier::Default(default) => {
                    default_specifier = Some(default.as_ref());
                }
                ImportDeclarationSpecifier::Namespace(namespace) => {
                    namespace_specifier = Some(namespace.as_ref());
                }
                ImportDeclarationSpecifier::Named(named) => {
                    named_specifiers.push(named.as_ref());
                }
            }
        }

        self.commands.text("import ");
        if node.import_kind == ImportKind::Type {
            self.commands.text("type ");
        }

        if let Some(default) = default_specifier {
            self.commands.chunk(default.local.name.clone(), default.meta.loc);
            if namespace_specifier.is_some() || !named_specifiers.is_empty() {
                self.commands.text(", ");
            }
        }

        if let Some(namespace) = namespace_specifier {
            self.commands
                .chunk(format!("* as {}", namespace.local.name), namespace.meta.loc);
        }

        if !named_specifiers.is_empty() {
            self.commands.text("{");
            self.sequence(&named_specifiers, true, ",", |printer, specifier| {
                printer.emit_import_specifier(specifier);
            });
            self.commands.text("}");
        }

        self.commands.text(" from ");
        self.handle_literal(&node.source);
        self.commands.text(";");
    }

    fn emit_import_specifier(&mut self, node: &ImportSpecifier) {
        if node.import_kind == ImportKind::Type {
            self.commands.text("type ");
        }
        if node.local.name != node.imported.name {
            self.handle_identifier(&node.imported);
            self.commands.text(" as ");
        }
        self.handle_identifier(&node.local);
    }

    pub(super) fn emit_export_all(&mut self, node: &ExportAllDeclaration) {
        self.commands.text("export * from ");
        self.handle_literal(&node.source);
        self.commands.text(";");
    }

    pub(super) fn emit_export_default(&mut self, node: &ExportDefaultDeclaration) {
        self.commands.text("export default ");

        match &node.declaration {
            DefaultDeclaration::Declaration(declaration) => {
                self.handle_statement(declaration);
                if !matches!(declaration.as_ref(), Statement::FunctionDeclaration(_)) {
                    self.commands.text(";");
                }
            }
            DefaultDeclaration::Expression(expression) => {
                self.handle_expression(expression);
                self.commands.text(";");
            }
        }
    }

    pub(super) fn emit_export_named(&mut self, node: &ExportNamedDeclaration) {
        self.commands.text("export ");

        if let Some(declaration) = &node.declaration {
            self.handle_statement(declaration);
            return;
        }

        self.commands.text("{");
        self.sequence(&node.specifiers, true, ",", Printer::emit_export_specifier);
        self.commands.text("}");

        if let Some(source) = &node.source {
            self.commands.text(" from ");
            self.handle_literal(source);
        }

        self.commands.text(";");
    }

    fn emit_export_specifier(&mut self, node: &ExportSpecifier) {
        self.handle_identifier(&node.local);

        if node.local.name != node.exported.name {
            self.commands.text(" as ");
            self.handle_identifier(&node.exported);
        }
    }

    // =========================================================================
    // Class members
    // =========================================================================

    pub(super) fn emit_method_definition(&mut self, node: &MethodDefinition) {
        for decorator in &node.decorators {
            self.emit_decorator(decorator);
        }

        if node.is_static {
            self.commands.text("static ");
        }

        if let MethodKind::Get | MethodKind::Set = node.kind {
            self.commands
                .text(if node.kind == MethodKind::Get { "get " } else { "set " });
        }

        if node.value.is_async {
            self.commands.text("async ");
        }
        if node.value.generator {
            self.commands.text("*");
        }

        if node.computed {
            self.commands.text("[");
        }
        self.handle_expression(&node.key);
        if node.computed {
            self.commands.text("]");
        }

        self.commands.text("(");
        self.sequence(&node.value.params, false, ",", Printer::handle_pattern);
        self.commands.text(") ");

        if let Some(body) = &node.value.body {
            self.handle_block(body);
        }
    }

    pub(super) fn emit_property_definition(&mut self, node: &PropertyDefinition) {
        if let Some(accessibility) = node.accessibility {
            self.commands.text(accessibility.as_str());
            self.commands.text(" ");
        }

        if node.is_static {
            self.commands.text("static ");
        }

        if node.computed {
            self.commands.text("[");
            self.handle_expression(&node.key);
            self.commands.text("]");
        } else {
            self.handle_expression(&node.key);
        }

        if let Some(annotation) = &node.type_annotation {
            self.emit_type_annotation(annotation);
        }

        if let Some(value) = &node.value {
            self.commands.text(" = ");
            self.handle_expression(value);
        }

        self.commands.text(";");
    }

    pub(super) fn emit_static_block(&mut self, node: &StaticBlock) {
        self.commands.push(Command::Indent);
        self.commands.text("static {");
        self.commands.push(Command::Newline);

        self.handle_body(&node.body);

        self.commands.push(Command::Dedent);
        self.commands.push(Command::Newline);
        self.commands.text("}");
    }

    fn emit_decorator(&mut self, node: &Decorator) {
        self.with_comments(&node.meta, |printer| {
            printer.commands.text("@");
            printer.handle_expression(&node.expression);
            printer.commands.push(Command::Newline);
        });
    }
}
