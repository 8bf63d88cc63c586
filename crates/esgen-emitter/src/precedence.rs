//! Operator binding strengths and parenthesization rules.

use esgen_ast::expr::Expression;

pub(crate) const PRECEDENCE_LOGICAL: u8 = 13;
pub(crate) const PRECEDENCE_BINARY: u8 = 14;
pub(crate) const PRECEDENCE_UNARY: u8 = 15;
pub(crate) const PRECEDENCE_TS_AS: u8 = 16;
pub(crate) const PRECEDENCE_AWAIT: u8 = 17;
pub(crate) const PRECEDENCE_SATISFIES: u8 = 18;
pub(crate) const PRECEDENCE_CALL: u8 = 19;
pub(crate) const PRECEDENCE_MEMBER: u8 = 19;
pub(crate) const PRECEDENCE_CONDITIONAL: u8 = 4;

/// Binding strength of binary and logical operators, keyed by operator
/// text. Higher binds tighter.
pub(crate) fn operator_precedence(operator: &str) -> u8 {
    match operator {
        "||" => 2,
        "&&" => 3,
        "??" => 4,
        "|" => 5,
        "^" => 6,
        "&" => 7,
        "==" | "!=" | "===" | "!==" => 8,
        "<" | ">" | "<=" | ">=" | "in" | "instanceof" => 9,
        "<<" | ">>" | ">>>" => 10,
        "+" | "-" => 11,
        "*" | "%" | "/" => 12,
        "**" => 13,
        _ => 0,
    }
}

/// Binding strength of each expression kind. Spread takes the slot of the
/// prefix-rest marker; `super` and private names sit with the primaries.
pub(crate) fn expression_precedence(expression: &Expression) -> u8 {
    match expression {
        Expression::Array(_)
        | Expression::TaggedTemplate(_)
        | Expression::This(_)
        | Expression::Identifier(_)
        | Expression::PrivateIdentifier(_)
        | Expression::Template(_)
        | Expression::Super(_)
        | Expression::Sequence(_) => 20,
        Expression::Member(_)
        | Expression::MetaProperty(_)
        | Expression::Call(_)
        | Expression::Chain(_)
        | Expression::Import(_)
        | Expression::New(_) => PRECEDENCE_MEMBER,
        Expression::Literal(_) | Expression::TsSatisfies(_) | Expression::TsNonNull(_) => {
            PRECEDENCE_SATISFIES
        }
        Expression::Await(_)
        | Expression::Class(_)
        | Expression::Function(_)
        | Expression::Object(_) => PRECEDENCE_AWAIT,
        Expression::TsAs(_) | Expression::Update(_) => PRECEDENCE_TS_AS,
        Expression::Unary(_) => PRECEDENCE_UNARY,
        Expression::Binary(_) => PRECEDENCE_BINARY,
        Expression::Logical(_) => PRECEDENCE_LOGICAL,
        Expression::Conditional(_) => PRECEDENCE_CONDITIONAL,
        Expression::Arrow(_) | Expression::Assignment(_) => 3,
        Expression::Yield(_) => 2,
        Expression::Spread(_) => 1,
    }
}

/// View of a binary or logical expression acting as the parent in a
/// parenthesization query.
pub(crate) struct BinaryLike<'a> {
    pub left: &'a Expression,
    pub right: &'a Expression,
    pub operator: &'static str,
    pub is_logical: bool,
}

/// Whether `node`, printed as the left or right operand of `parent`,
/// needs parentheses to preserve its grouping.
pub(crate) fn needs_parens(node: &Expression, parent: &BinaryLike<'_>, is_right: bool) -> bool {
    // Nullish coalescing must not mix bare with `||`/`&&`; either side of
    // such a pair is parenthesized regardless of precedence.
    if parent.is_logical
        && let Expression::Logical(inner) = node
        && ((parent.operator == "??") != (inner.operator.as_str() == "??"))
    {
        return true;
    }

    let precedence = expression_precedence(node);
    let parent_precedence = if parent.is_logical {
        PRECEDENCE_LOGICAL
    } else {
        PRECEDENCE_BINARY
    };

    if precedence != parent_precedence {
        // A unary operand on the left of `**` is ambiguous even though the
        // precedences are adjacent.
        return (!is_right
            && precedence == PRECEDENCE_UNARY
            && parent_precedence == PRECEDENCE_BINARY
            && parent.operator == "**")
            || precedence < parent_precedence;
    }

    let node_operator = match node {
        Expression::Binary(n) => n.operator.as_str(),
        Expression::Logical(n) => n.operator.as_str(),
        _ => return false,
    };

    if node_operator == "**" && parent.operator == "**" {
        // Exponentiation is right-associative.
        return !is_right;
    }

    if is_right {
        operator_precedence(node_operator) <= operator_precedence(parent.operator)
    } else {
        operator_precedence(node_operator) < operator_precedence(parent.operator)
    }
}

/// Whether a callee chain contains an invocation anywhere along its member
/// accesses; a `new` over such a callee must be parenthesized so the
/// arguments bind to the construction.
pub(crate) fn has_call_expression(expression: &Expression) -> bool {
    let mut node = expression;
    loop {
        match node {
            Expression::Call(_) => return true,
            Expression::Member(member) => node = &member.object,
            _ => return false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use esgen_ast::expr::{
        BinaryExpression, BinaryOperator, Identifier, LogicalExpression, LogicalOperator,
    };

    fn ident(name: &str) -> Expression {
        Expression::Identifier(Box::new(Identifier {
            meta: Default::default(),
            name: name.to_string(),
            type_annotation: None,
        }))
    }

    fn binary(operator: BinaryOperator, left: Expression, right: Expression) -> Expression {
        Expression::Binary(Box::new(BinaryExpression {
            meta: Default::default(),
            operator,
            left,
            right,
        }))
    }

    #[test]
    fn equal_strength_right_operand_keeps_parens() {
        let parent = BinaryLike {
            left: &ident("a"),
            right: &ident("b"),
            operator: "-",
            is_logical: false,
        };
        let nested = binary(BinaryOperator::Add, ident("x"), ident("y"));
        assert!(needs_parens(&nested, &parent, true));
        assert!(!needs_parens(&nested, &parent, false));
    }

    #[test]
    fn exponentiation_is_right_associative() {
        let parent = BinaryLike {
            left: &ident("a"),
            right: &ident("b"),
            operator: "**",
            is_logical: false,
        };
        let nested = binary(BinaryOperator::Exp, ident("x"), ident("y"));
        assert!(needs_parens(&nested, &parent, false));
        assert!(!needs_parens(&nested, &parent, true));
    }

    #[test]
    fn nullish_and_logical_do_not_mix_unparenthesized() {
        let parent = BinaryLike {
            left: &ident("a"),
            right: &ident("b"),
            operator: "??",
            is_logical: true,
        };
        let nested = Expression::Logical(Box::new(LogicalExpression {
            meta: Default::default(),
            operator: LogicalOperator::Or,
            left: ident("x"),
            right: ident("y"),
        }));
        assert!(needs_parens(&nested, &parent, false));
    }

    #[test]
    fn member_chain_detects_nested_call() {
        let call = Expression::Call(Box::new(esgen_ast::expr::CallExpression {
            meta: Default::default(),
            callee: ident("f"),
            arguments: Vec::new(),
            optional: false,
            type_arguments: None,
        }));
        let chained = Expression::Member(Box::new(esgen_ast::expr::MemberExpression {
            meta: Default::default(),
            object: call,
            property: ident("x"),
            computed: false,
            optional: false,
        }));
        assert!(has_call_expression(&chained));
        assert!(!has_call_expression(&ident("f")));
    }
}
