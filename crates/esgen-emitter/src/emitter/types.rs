//! Type-annotation rendering: a parallel renderer for the `TS*` node
//! family, entered wherever a node carries an annotation.

use esgen_ast::ts::{
    TsEnumDeclaration, TsEnumMember, TsExpressionWithTypeArguments, TsInterfaceDeclaration,
    TsType, TsTypeAliasDeclaration, TsTypeAnnotation, TsTypeMember, TsTypeParameter,
    TsTypeParameterDeclaration, TsTypeParameterInstantiation, TsTypeParameterName, TsEntityName,
};

use super::Printer;
use crate::command::Command;

impl Printer {
    // =========================================================================
    // Types
    // =========================================================================

    /// Render a `typeAnnotation` field, `: T`.
    pub(super) fn emit_type_annotation(&mut self, node: &TsTypeAnnotation) {
        self.commands.text(": ");
        self.emit_ts_type(&node.type_annotation);
    }

    pub(super) fn emit_ts_type(&mut self, node: &TsType) {
        match node {
            TsType::Number => self.commands.text("number"),
            TsType::String => self.commands.text("string"),
            TsType::Boolean => self.commands.text("boolean"),
            TsType::Any => self.commands.text("any"),
            TsType::Void => self.commands.text("void"),
            TsType::Unknown => self.commands.text("unknown"),
            TsType::Never => self.commands.text("never"),
            TsType::Array(array) => {
                self.emit_ts_type(&array.element_type);
                self.commands.text("[]");
            }
            TsType::Tuple(tuple) => {
                self.commands.text("[");
                self.sequence(&tuple.element_types, false, ",", Printer::emit_ts_type);
                self.commands.text("]");
            }
            TsType::NamedTupleMember(member) => {
                self.handle_identifier(&member.label);
                self.commands.text(": ");
                self.emit_ts_type(&member.element_type);
            }
            TsType::Union(union) => {
                self.sequence(&union.types, false, " |", Printer::emit_ts_type);
            }
            TsType::Intersection(intersection) => {
                self.sequence(&intersection.types, false, " &", Printer::emit_ts_type);
            }
            TsType::Conditional(conditional) => {
                self.emit_ts_type(&conditional.check_type);
                self.commands.text(" extends ");
                self.emit_ts_type(&conditional.extends_type);
                self.commands.text(" ? ");
                self.emit_ts_type(&conditional.true_type);
                self.commands.text(" : ");
                self.emit_ts_type(&conditional.false_type);
            }
            TsType::Function(function) => {
                if let Some(type_parameters) = &function.type_parameters {
                    self.emit_type_parameter_declaration(type_parameters);
                }

                self.commands.text("(");
                self.sequence(&function.params, false, ",", Printer::handle_pattern);
                self.commands.text(") => ");

                if let Some(return_type) = &function.return_type {
                    self.emit_ts_type(&return_type.type_annotation);
                }
            }
            TsType::TypeLiteral(literal) => {
                self.commands.text("{ ");
                self.sequence(&literal.members, false, ";", Printer::emit_ts_type_member);
                self.commands.text(" }");
            }
            TsType::TypeReference(reference) => {
                self.emit_ts_entity_name(&reference.type_name);
                if let Some(type_arguments) = &reference.type_arguments {
                    self.emit_type_parameter_instantiation(type_arguments);
                }
            }
            TsType::TypeQuery(query) => {
                self.commands.text("typeof ");
                self.emit_ts_entity_name(&query.expr_name);
            }
            TsType::LiteralType(literal) => self.handle_expression(&literal.literal),
        }
    }

    pub(super) fn emit_ts_type_member(&mut self, node: &TsTypeMember) {
        match node {
            TsTypeMember::Property(signature) => {
                self.handle_expression(&signature.key);
                if signature.optional {
                    self.commands.text("?");
                }
                if let Some(annotation) = &signature.type_annotation {
                    self.emit_type_annotation(annotation);
                }
            }
            TsTypeMember::Method(signature) => {
                self.handle_expression(&signature.key);
                self.commands.text("(");
                self.sequence(&signature.params, false, ",", Printer::handle_pattern);
                self.commands.text(")");
                if let Some(annotation) = &signature.return_type {
                    self.emit_type_annotation(annotation);
                }
            }
            TsTypeMember::Index(signature) => {
                self.commands.text("[");
                self.sequence(&signature.parameters, false, ",", Printer::handle_pattern);
                self.commands.text("]");
                if let Some(annotation) = &signature.type_annotation {
                    self.emit_type_annotation(annotation);
                }
            }
        }
    }

    pub(super) fn emit_ts_entity_name(&mut self, node: &TsEntityName) {
        match node {
            TsEntityName::Identifier(identifier) => self.handle_identifier(identifier),
            TsEntityName::Qualified(qualified) => {
                self.emit_ts_entity_name(&qualified.left);
                self.commands.text(".");
                self.handle_identifier(&qualified.right);
            }
        }
    }

    pub(super) fn emit_type_parameter_declaration(&mut self, node: &TsTypeParameterDeclaration) {
        self.commands.text("<");
        for (index, param) in node.params.iter().enumerate() {
            self.emit_ts_type_parameter(param);
            if index != node.params.len() - 1 {
                self.commands.text(", ");
            }
        }
        self.commands.text(">");
    }

    pub(super) fn emit_type_parameter_instantiation(
        &mut self,
        node: &TsTypeParameterInstantiation,
    ) {
        self.commands.text("<");
        for (index, param) in node.params.iter().enumerate() {
            self.emit_ts_type(param);
            if index != node.params.len() - 1 {
                self.commands.text(", ");
            }
        }
        self.commands.text(">");
    }

    fn emit_ts_type_parameter(&mut self, node: &TsTypeParameter) {
        match &node.name {
            TsTypeParameterName::Identifier(identifier) => self.emit_identifier(identifier),
            TsTypeParameterName::Text(text) => self.commands.text(text.clone()),
        }

        if let Some(constraint) = &node.constraint {
            self.commands.text(" extends ");
            self.emit_ts_type(constraint);
        }
    }

    pub(super) fn emit_ts_enum_member(&mut self, node: &TsEnumMember) {
        self.handle_expression(&node.id);
        if let Some(initializer) = &node.initializer {
            self.commands.text(" = ");
            self.handle_expression(initializer);
        }
    }

    pub(super) fn emit_expression_with_type_arguments(
        &mut self,
        node: &TsExpressionWithTypeArguments,
    ) {
        self.handle_expression(&node.expression);
    }

    // =========================================================================
    // Type declarations
    // =========================================================================

    pub(super) fn emit_ts_enum_declaration(&mut self, node: &TsEnumDeclaration) {
        self.commands.text("enum ");
        self.handle_identifier(&node.id);
        self.commands.text(" {");
        self.commands.push(Command::Indent);
        self.commands.push(Command::Newline);

        self.sequence(&node.members, false, ",", Printer::emit_ts_enum_member);

        self.commands.push(Command::Dedent);
        self.commands.push(Command::Newline);
        self.commands.text("}");
        self.commands.push(Command::Newline);
    }

    pub(super) fn emit_ts_interface_declaration(&mut self, node: &TsInterfaceDeclaration) {
        self.commands.text("interface ");
        self.handle_identifier(&node.id);

        if let Some(type_parameters) = &node.type_parameters {
            self.emit_type_parameter_declaration(type_parameters);
        }

        if !node.extends.is_empty() {
            self.commands.text(" extends ");
            self.sequence(
                &node.extends,
                false,
                ",",
                Printer::emit_expression_with_type_arguments,
            );
        }

        self.commands.text(" {");
        self.sequence(&node.body.body, false, ";", Printer::emit_ts_type_member);
        self.commands.text("}");
    }

    pub(super) fn emit_ts_type_alias_declaration(&mut self, node: &TsTypeAliasDeclaration) {
        self.commands.text("type ");
        self.handle_identifier(&node.id);

        if let Some(type_parameters) = &node.type_parameters {
            self.emit_type_parameter_declaration(type_parameters);
        }

        self.commands.text(" = ");
        self.emit_ts_type(&node.type_annotation);
        self.commands.text(";");
    }
}
