//! Shared layout machinery: the statement-body renderer and the generic
//! separated-list renderer, both built on deferred sequences.

use esgen_ast::source::{CommentKind, NodeMeta};
use esgen_ast::stmt::{ClassElement, Statement, VariableDeclaration};

use super::Printer;
use crate::command::Command;

/// Width at which a measured span stops printing on one line.
pub(super) const WIDTH_BUDGET: usize = 80;

/// What the body renderer needs to know about its items; lets statement
/// lists and class bodies share one implementation.
pub(super) trait BodyNode {
    fn meta(&self) -> &NodeMeta;
    fn is_skipped(&self) -> bool {
        false
    }
    /// Declaration-like statements get a blank-line margin when a run of
    /// them starts or ends.
    fn is_groupable(&self) -> bool {
        false
    }
    fn same_kind(&self, other: &Self) -> bool;
    fn emit(&self, printer: &mut Printer);
}

impl BodyNode for Statement {
    fn meta(&self) -> &NodeMeta {
        Statement::meta(self)
    }

    fn is_skipped(&self) -> bool {
        matches!(self, Statement::Empty(_))
    }

    fn is_groupable(&self) -> bool {
        matches!(
            self,
            Statement::Import(_)
                | Statement::VariableDeclaration(_)
                | Statement::ExportDefault(_)
                | Statement::ExportNamed(_)
        )
    }

    fn same_kind(&self, other: &Self) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }

    fn emit(&self, printer: &mut Printer) {
        printer.emit_statement(self);
    }
}

impl BodyNode for ClassElement {
    fn meta(&self) -> &NodeMeta {
        ClassElement::meta(self)
    }

    fn same_kind(&self, other: &Self) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }

    fn emit(&self, printer: &mut Printer) {
        printer.emit_class_element(self);
    }
}

impl Printer {
    // =========================================================================
    // Statement bodies
    // =========================================================================

    /// Render a newline-joined statement list. A deferred margin before
    /// each statement resolves to a blank line when either neighbor is
    /// multi-line or a declaration-like run starts or ends; trailing
    /// comments queued during a statement are drained right after it.
    pub(super) fn handle_body<T: BodyNode>(&mut self, nodes: &[T]) {
        let mut previous: Option<&T> = None;
        let mut first = true;
        let mut needs_margin = false;

        for node in nodes {
            if node.is_skipped() {
                continue;
            }

            let margin = self.commands.begin_sequence();
            if !first {
                self.commands.push(Command::Sequence(margin));
                self.commands.push(Command::Newline);
            }
            first = false;

            self.prepend_comments(node.meta(), true);

            let child_multiline = self.isolate_multiline(|printer| {
                node.emit(printer);
                printer.queue_trailing(node.meta());
            });

            let grouped = node.is_groupable() || previous.is_some_and(BodyNode::is_groupable);
            let changed_kind = previous.is_none_or(|p| !p.same_kind(node));
            if child_multiline || needs_margin || (grouped && changed_kind) {
                // A bare "\n": the blank line carries no indentation.
                self.commands.extend_sequence(margin, [Command::Text("\n".into())]);
            }

            let mut add_newline = false;
            while let Some(comment) = self.take_pending_comment() {
                self.commands.push(if add_newline {
                    Command::Newline
                } else {
                    Command::Text(" ".into())
                });
                add_newline = comment.kind == CommentKind::Line;
                self.commands.push(Command::Comment(comment));
            }

            needs_margin = child_multiline;
            previous = Some(node);
        }
    }

    /// `{}` for an empty body, otherwise braces around an indented
    /// statement body. Marks the enclosing construct multi-line.
    pub(super) fn emit_block_like<T: BodyNode>(&mut self, body: &[T]) {
        if body.is_empty() {
            self.commands.text("{}");
            return;
        }

        self.multiline = true;

        self.commands.text("{");
        self.commands.push(Command::Indent);
        self.commands.push(Command::Newline);
        self.handle_body(body);
        self.commands.push(Command::Dedent);
        self.commands.push(Command::Newline);
        self.commands.text("}");
    }

    // =========================================================================
    // Separated lists
    // =========================================================================

    /// Render a separated list through three deferred sequences (open,
    /// join, close). Once every element is in the stream the accumulated
    /// width decides the resolution: indent-and-newline past the budget or
    /// when an element was itself multi-line, inline spacing otherwise.
    /// `spaces` adds the inner padding brace-delimited forms use inline.
    pub(super) fn sequence<T>(
        &mut self,
        nodes: &[T],
        spaces: bool,
        separator: &'static str,
        emit: fn(&mut Self, &T),
    ) {
        let items: Vec<Option<&T>> = nodes.iter().map(Some).collect();
        self.sequence_impl(&items, spaces, separator, emit);
    }

    /// Like [`Printer::sequence`] but for element lists with holes, which
    /// print as runs of bare separators.
    pub(super) fn sparse_sequence<T>(
        &mut self,
        nodes: &[Option<T>],
        spaces: bool,
        separator: &'static str,
        emit: fn(&mut Self, &T),
    ) {
        let items: Vec<Option<&T>> = nodes.iter().map(Option::as_ref).collect();
        self.sequence_impl(&items, spaces, separator, emit);
    }

    fn sequence_impl<T>(
        &mut self,
        nodes: &[Option<&T>],
        spaces: bool,
        separator: &'static str,
        emit: fn(&mut Self, &T),
    ) {
        if nodes.is_empty() {
            return;
        }

        let watermark = self.commands.len();

        let open = self.commands.begin_sequence();
        let join = self.commands.begin_sequence();
        let close = self.commands.begin_sequence();

        self.commands.push(Command::Sequence(open));

        let saved = self.multiline;
        self.multiline = false;

        let mut previous_was_element = false;
        for (index, node) in nodes.iter().enumerate() {
            let is_first = index == 0;
            let is_last = index == nodes.len() - 1;

            if let Some(node) = node {
                if !is_first && !previous_was_element {
                    self.commands.push(Command::Sequence(join));
                }

                emit(self, node);

                if !is_last {
                    self.commands.text(separator);
                }

                if !self.comments.is_empty() {
                    self.commands.text(" ");
                    while let Some(comment) = self.take_pending_comment() {
                        self.commands.push(Command::Comment(comment));
                        if !is_last {
                            self.commands.push(Command::Sequence(join));
                        }
                    }
                    self.multiline = true;
                } else if !is_last {
                    self.commands.push(Command::Sequence(join));
                }

                previous_was_element = true;
            } else {
                // A hole accumulates its separator with no element.
                self.commands.text(separator);
                previous_was_element = false;
            }
        }

        self.commands.push(Command::Sequence(close));

        let child_multiline = self.multiline;
        self.multiline = saved;

        let multiline = child_multiline || self.commands.measure_from(watermark) > WIDTH_BUDGET;

        if multiline {
            self.multiline = true;

            self.commands
                .extend_sequence(open, [Command::Indent, Command::Newline]);
            self.commands.extend_sequence(join, [Command::Newline]);
            self.commands
                .extend_sequence(close, [Command::Dedent, Command::Newline]);
        } else {
            if spaces {
                self.commands.extend_sequence(open, [Command::Text(" ".into())]);
            }
            self.commands.extend_sequence(join, [Command::Text(" ".into())]);
            if spaces {
                self.commands.extend_sequence(close, [Command::Text(" ".into())]);
            }
        }
    }

    // =========================================================================
    // Variable declarations
    // =========================================================================

    /// Shared by the statement form and `for`-loop heads (which add their
    /// own terminators). Wraps when a declarator was multi-line, or when
    /// several declarators together outgrow the budget.
    pub(super) fn emit_variable_declaration(&mut self, node: &VariableDeclaration) {
        let watermark = self.commands.len();

        let open = self.commands.begin_sequence();
        let join = self.commands.begin_sequence();

        self.commands.text(node.kind.keyword());
        self.commands.text(" ");
        self.commands.push(Command::Sequence(open));

        let saved = self.multiline;
        self.multiline = false;

        let mut first = true;
        for declarator in &node.declarations {
            if !first {
                self.commands.push(Command::Sequence(join));
            }
            first = false;
            self.with_comments(&declarator.meta, |printer| {
                printer.emit_variable_declarator(declarator);
            });
        }

        let child_multiline = self.multiline;
        self.multiline = saved;

        let several = node.declarations.len() > 1;
        let multiline = child_multiline
            || (several && self.commands.measure_from(watermark) > WIDTH_BUDGET);

        if multiline {
            self.multiline = true;
            if several {
                self.commands.extend_sequence(open, [Command::Indent]);
            }
            self.commands
                .extend_sequence(join, [Command::Text(",".into()), Command::Newline]);
            if several {
                self.commands.push(Command::Dedent);
            }
        } else {
            self.commands.extend_sequence(join, [Command::Text(", ".into())]);
        }
    }
}
