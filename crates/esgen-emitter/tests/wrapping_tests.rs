//! Width-triggered layout: lists print inline until their measured width
//! passes the budget or an element spans lines on its own.

use serde_json::{Value, json};

use esgen_emitter::ast::Program;
use esgen_emitter::{PrintOptions, print};

fn program(body: Value) -> Program {
    serde_json::from_value(json!({ "type": "Program", "body": body }))
        .expect("program fixture deserializes")
}

fn print_code(body: Value) -> String {
    print(&program(body), &PrintOptions::default()).code
}

fn ident(name: &str) -> Value {
    json!({ "type": "Identifier", "name": name })
}

fn number(value: u64) -> Value {
    json!({ "type": "Literal", "value": value, "raw": value.to_string() })
}

fn property(key: &str, value: Value) -> Value {
    json!({
        "type": "Property",
        "kind": "init",
        "key": ident(key),
        "value": value
    })
}

fn const_declaration(name: &str, init: Value) -> Value {
    json!({
        "type": "VariableDeclaration",
        "kind": "const",
        "declarations": [{
            "type": "VariableDeclarator",
            "id": ident(name),
            "init": init
        }]
    })
}

#[test]
fn short_object_prints_inline_with_brace_padding() {
    let code = print_code(json!([const_declaration(
        "point",
        json!({
            "type": "ObjectExpression",
            "properties": [property("x", number(1)), property("y", number(2))]
        })
    )]));

    assert_eq!(code, "const point = { x: 1, y: 2 };");
}

#[test]
fn wide_object_wraps_one_property_per_line() {
    let code = print_code(json!([const_declaration(
        "config",
        json!({
            "type": "ObjectExpression",
            "properties": [
                property("aaaaaaaaaaaaaaaaaaaaaaaa", number(1)),
                property("bbbbbbbbbbbbbbbbbbbbbbbb", number(2)),
                property("cccccccccccccccccccccccc", number(3)),
                property("dddddddddddddddddddddddd", number(4))
            ]
        })
    )]));

    assert_eq!(
        code,
        "const config = {\n\taaaaaaaaaaaaaaaaaaaaaaaa: 1,\n\tbbbbbbbbbbbbbbbbbbbbbbbb: 2,\n\tcccccccccccccccccccccccc: 3,\n\tdddddddddddddddddddddddd: 4\n};"
    );
}

#[test]
fn nested_multiline_object_forces_outer_wrap() {
    let code = print_code(json!([const_declaration(
        "nested",
        json!({
            "type": "ObjectExpression",
            "properties": [property(
                "inner",
                json!({
                    "type": "ObjectExpression",
                    "properties": [
                        property("aaaaaaaaaaaaaaaaaaaaaaaa", number(1)),
                        property("bbbbbbbbbbbbbbbbbbbbbbbb", number(2)),
                        property("cccccccccccccccccccccccc", number(3)),
                        property("dddddddddddddddddddddddd", number(4))
                    ]
                })
            )]
        })
    )]));

    assert_eq!(
        code,
        "const nested = {\n\tinner: {\n\t\taaaaaaaaaaaaaaaaaaaaaaaa: 1,\n\t\tbbbbbbbbbbbbbbbbbbbbbbbb: 2,\n\t\tcccccccccccccccccccccccc: 3,\n\t\tdddddddddddddddddddddddd: 4\n\t}\n};"
    );
}

#[test]
fn final_call_argument_multiline_keeps_other_arguments_inline() {
    let code = print_code(json!([{
        "type": "ExpressionStatement",
        "expression": {
            "type": "CallExpression",
            "callee": ident("register"),
            "arguments": [
                ident("name"),
                {
                    "type": "ArrowFunctionExpression",
                    "params": [],
                    "body": {
                        "type": "BlockStatement",
                        "body": [{
                            "type": "ExpressionStatement",
                            "expression": {
                                "type": "CallExpression",
                                "callee": ident("setup"),
                                "arguments": []
                            }
                        }]
                    }
                }
            ]
        }
    }]));

    assert_eq!(code, "register(name, () => {\n\tsetup();\n});");
}

#[test]
fn early_multiline_argument_wraps_the_whole_list() {
    let code = print_code(json!([{
        "type": "ExpressionStatement",
        "expression": {
            "type": "CallExpression",
            "callee": ident("register"),
            "arguments": [
                {
                    "type": "ArrowFunctionExpression",
                    "params": [],
                    "body": {
                        "type": "BlockStatement",
                        "body": [{
                            "type": "ExpressionStatement",
                            "expression": {
                                "type": "CallExpression",
                                "callee": ident("setup"),
                                "arguments": []
                            }
                        }]
                    }
                },
                ident("name")
            ]
        }
    }]));

    assert_eq!(
        code,
        "register(\n\t() => {\n\t\tsetup();\n\t},\n\tname\n);"
    );
}

#[test]
fn several_wide_declarators_wrap_with_hanging_indent() {
    let code = print_code(json!([{
        "type": "VariableDeclaration",
        "kind": "let",
        "declarations": [
            {
                "type": "VariableDeclarator",
                "id": ident("aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa"),
                "init": number(1)
            },
            {
                "type": "VariableDeclarator",
                "id": ident("bbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbb"),
                "init": number(2)
            }
        ]
    }]));

    assert_eq!(
        code,
        "let aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa = 1,\n\tbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbb = 2;"
    );
}

#[test]
fn short_declarator_list_stays_inline() {
    let code = print_code(json!([{
        "type": "VariableDeclaration",
        "kind": "let",
        "declarations": [
            { "type": "VariableDeclarator", "id": ident("a"), "init": number(1) },
            { "type": "VariableDeclarator", "id": ident("b"), "init": number(2) }
        ]
    }]));

    assert_eq!(code, "let a = 1, b = 2;");
}

#[test]
fn conditional_with_multiline_branch_stacks_the_operators() {
    let code = print_code(json!([{
        "type": "ExpressionStatement",
        "expression": {
            "type": "ConditionalExpression",
            "test": ident("mode"),
            "consequent": {
                "type": "ArrowFunctionExpression",
                "params": [],
                "body": {
                    "type": "BlockStatement",
                    "body": [{
                        "type": "ExpressionStatement",
                        "expression": {
                            "type": "CallExpression",
                            "callee": ident("start"),
                            "arguments": []
                        }
                    }]
                }
            },
            "alternate": ident("idle")
        }
    }]));

    assert_eq!(code, "mode\n\t? () => {\n\t\tstart();\n\t}\n\t: idle;");
}

#[test]
fn wide_parameter_list_wraps() {
    let code = print_code(json!([{
        "type": "FunctionDeclaration",
        "id": ident("configure"),
        "params": [
            ident("aaaaaaaaaaaaaaaaaaaaaaaaaaaa"),
            ident("bbbbbbbbbbbbbbbbbbbbbbbbbbbb"),
            ident("cccccccccccccccccccccccccccc")
        ],
        "body": { "type": "BlockStatement", "body": [] }
    }]));

    assert_eq!(
        code,
        "function configure(\n\taaaaaaaaaaaaaaaaaaaaaaaaaaaa,\n\tbbbbbbbbbbbbbbbbbbbbbbbbbbbb,\n\tcccccccccccccccccccccccccccc\n) {}"
    );
}

#[test]
fn template_literal_spanning_lines_marks_the_construct_multiline() {
    let code = print_code(json!([
        const_declaration(
            "first",
            json!({
                "type": "TemplateLiteral",
                "quasis": [{ "type": "TemplateElement", "value": { "raw": "a\nb" }, "tail": true }],
                "expressions": []
            })
        ),
        const_declaration("second", number(2))
    ]));

    // The template's own line break marks the first statement multi-line,
    // which earns a blank-line margin before the next one.
    assert_eq!(code, "const first = `a\nb`;\n\nconst second = 2;");
}
