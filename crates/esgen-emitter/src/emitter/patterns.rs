//! Binding pattern handlers.

use esgen_ast::expr::{Expression, PropertyKind};
use esgen_ast::pat::{
    ArrayPattern, AssignmentPattern, ObjectPattern, ObjectPatternProperty, Pattern,
    PatternProperty, RestElement,
};

use super::Printer;

impl Printer {
    // =========================================================================
    // Patterns
    // =========================================================================

    pub(super) fn emit_object_pattern(&mut self, node: &ObjectPattern) {
        self.commands.text("{");
        self.sequence(
            &node.properties,
            true,
            ",",
            Printer::emit_object_pattern_property,
        );
        self.commands.text("}");

        if let Some(annotation) = &node.type_annotation {
            self.emit_type_annotation(annotation);
        }
    }

    fn emit_object_pattern_property(&mut self, node: &ObjectPatternProperty) {
        match node {
            ObjectPatternProperty::Property(property) => {
                self.with_comments(&property.meta, |printer| {
                    printer.emit_pattern_property(property);
                });
            }
            ObjectPatternProperty::Rest(rest) => {
                self.with_comments(&rest.meta, |printer| printer.emit_rest_element(rest));
            }
        }
    }

    fn emit_pattern_property(&mut self, node: &PatternProperty) {
        // `{ x }` and `{ x = 1 }` both count as shorthand; the default
        // lives on the nested assignment pattern.
        let bound = match &node.value {
            Pattern::Assignment(assignment) => &assignment.left,
            other => other,
        };
        let shorthand = !node.computed
            && node.kind == PropertyKind::Init
            && matches!(
                (&node.key, bound),
                (Expression::Identifier(key), Pattern::Identifier(value))
                    if key.name == value.name
            );

        if shorthand {
            self.handle_pattern(&node.value);
            return;
        }

        if node.computed {
            self.commands.text("[");
        }
        self.handle_expression(&node.key);
        self.commands.text(if node.computed { "]: " } else { ": " });
        self.handle_pattern(&node.value);
    }

    pub(super) fn emit_array_pattern(&mut self, node: &ArrayPattern) {
        self.commands.text("[");
        self.sparse_sequence(&node.elements, false, ",", Printer::handle_pattern);
        self.commands.text("]");
    }

    pub(super) fn emit_assignment_pattern(&mut self, node: &AssignmentPattern) {
        self.handle_pattern(&node.left);
        self.commands.text(" = ");
        self.handle_expression(&node.right);
    }

    pub(super) fn emit_rest_element(&mut self, node: &RestElement) {
        self.commands.text("...");
        self.handle_pattern(&node.argument);

        if let Some(annotation) = &node.type_annotation {
            self.emit_type_annotation(annotation);
        }
    }
}
