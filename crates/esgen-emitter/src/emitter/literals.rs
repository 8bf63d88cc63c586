//! Identifiers, literals and template literals.

use esgen_ast::expr::{
    Identifier, Literal, LiteralValue, PrivateIdentifier, Super, TaggedTemplateExpression,
    TemplateLiteral, ThisExpression,
};

use super::Printer;

impl Printer {
    // =========================================================================
    // Literals
    // =========================================================================

    pub(super) fn handle_identifier(&mut self, node: &Identifier) {
        self.with_comments(&node.meta, |printer| printer.emit_identifier(node));
    }

    pub(super) fn emit_identifier(&mut self, node: &Identifier) {
        self.commands.chunk(node.name.clone(), node.meta.loc);

        if let Some(annotation) = &node.type_annotation {
            self.emit_type_annotation(annotation);
        }
    }

    pub(super) fn emit_private_identifier(&mut self, node: &PrivateIdentifier) {
        self.commands.text("#");
        self.commands.chunk(node.name.clone(), node.meta.loc);
    }

    pub(super) fn handle_literal(&mut self, node: &Literal) {
        self.with_comments(&node.meta, |printer| printer.emit_literal(node));
    }

    pub(super) fn emit_literal(&mut self, node: &Literal) {
        // The recorded raw text wins; otherwise strings are re-quoted with
        // the configured quote character and other values print their
        // canonical text.
        let content = match &node.raw {
            Some(raw) => raw.clone(),
            None => match &node.value {
                LiteralValue::String(value) => quote_string(value, self.quote),
                LiteralValue::Number(value) => format_number(*value),
                LiteralValue::Boolean(true) => "true".to_string(),
                LiteralValue::Boolean(false) => "false".to_string(),
                LiteralValue::Null => "null".to_string(),
            },
        };

        self.commands.chunk(content, node.meta.loc);
    }

    pub(super) fn emit_super(&mut self, node: &Super) {
        self.commands.chunk("super", node.meta.loc);
    }

    pub(super) fn emit_this(&mut self, node: &ThisExpression) {
        self.commands.chunk("this", node.meta.loc);
    }

    pub(super) fn emit_tagged_template(&mut self, node: &TaggedTemplateExpression) {
        self.handle_expression(&node.tag);
        self.emit_template_literal(&node.quasi);
    }

    pub(super) fn emit_template_literal(&mut self, node: &TemplateLiteral) {
        self.commands.text("`");

        for (quasi, expression) in node.quasis.iter().zip(&node.expressions) {
            let raw = &quasi.value.raw;
            self.commands.text(raw.clone());
            self.commands.text("${");
            self.handle_expression(expression);
            self.commands.text("}");

            if memchr::memchr(b'\n', raw.as_bytes()).is_some() {
                self.multiline = true;
            }
        }

        if let Some(last) = node.quasis.last() {
            let raw = &last.value.raw;
            self.commands.text(raw.clone());
            if memchr::memchr(b'\n', raw.as_bytes()).is_some() {
                self.multiline = true;
            }
        }

        self.commands.text("`");
    }
}

/// Quote `value` with `quote`, escaping backslashes, the chosen quote
/// character and bare line terminators; everything else passes through
/// untouched so pre-escaped sequences survive.
pub(super) fn quote_string(value: &str, quote: char) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push(quote);
    for ch in value.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c => out.push(c),
        }
    }
    out.push(quote);
    out
}

/// Canonical numeric literal text: shortest decimal form, `Infinity`
/// spelled out.
pub(super) fn format_number(value: f64) -> String {
    if value.is_infinite() {
        if value < 0.0 { "-Infinity" } else { "Infinity" }.to_string()
    } else {
        format!("{value}")
    }
}
