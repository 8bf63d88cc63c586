//! Comment interleaving: leading comments print before their node,
//! trailing comments are spliced in at the caller's next safe point.

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

fn call_statement(callee: &str, arguments: Value) -> Value {
    json!({
        "type": "ExpressionStatement",
        "expression": { "type": "CallExpression", "callee": ident(callee), "arguments": arguments }
    })
}

#[test]
fn leading_line_comment_on_statement() {
    let mut statement = call_statement("run", json!([]));
    statement["leadingComments"] = json!([{ "type": "Line", "value": " kick things off" }]);

    assert_eq!(print_code(json!([statement])), "// kick things off\nrun();");
}

#[test]
fn leading_block_comment_on_statement_gets_its_own_line() {
    let mut statement = call_statement("run", json!([]));
    statement["leadingComments"] = json!([{ "type": "Block", "value": " setup " }]);

    assert_eq!(print_code(json!([statement])), "/* setup */\nrun();");
}

#[test]
fn multi_line_block_comment_reindents_inside_a_block() {
    let code = print_code(json!([{
        "type": "IfStatement",
        "test": ident("ready"),
        "consequent": {
            "type": "BlockStatement",
            "body": [{
                "type": "ExpressionStatement",
                "expression": { "type": "CallExpression", "callee": ident("go"), "arguments": [] },
                "leadingComments": [{ "type": "Block", "value": " first\nsecond " }]
            }]
        }
    }]));

    assert_eq!(
        code,
        "if (ready) {\n\t/* first\n\tsecond */\n\tgo();\n}"
    );
}

#[test]
fn trailing_line_comment_after_statement() {
    let mut first = call_statement("save", json!([]));
    first["trailingComments"] = json!([{ "type": "Line", "value": " persists to disk" }]);

    let code = print_code(json!([first, call_statement("close", json!([]))]));
    assert_eq!(code, "save(); // persists to disk\nclose();");
}

#[test]
fn trailing_block_comment_stays_on_the_line() {
    let mut first = call_statement("save", json!([]));
    first["trailingComments"] = json!([{ "type": "Block", "value": " sync " }]);

    let code = print_code(json!([first, call_statement("close", json!([]))]));
    assert_eq!(code, "save(); /* sync */\nclose();");
}

#[test]
fn block_comment_between_call_arguments() {
    let mut first_argument = ident("first");
    first_argument["trailingComments"] = json!([{ "type": "Block", "value": " inline " }]);

    let code = print_code(json!([
        call_statement("combine", json!([first_argument, ident("second")]))
    ]));
    assert_eq!(code, "combine(first, /* inline */ second);");
}

#[test]
fn line_comment_between_call_arguments_forces_wrapping() {
    let mut first_argument = ident("first");
    first_argument["trailingComments"] = json!([{ "type": "Line", "value": " explain" }]);

    let code = print_code(json!([
        call_statement("combine", json!([first_argument, ident("second")]))
    ]));
    assert_eq!(code, "combine(\n\tfirst, // explain\n\tsecond\n);");
}

#[test]
fn leading_comment_on_call_argument() {
    let mut argument = ident("value");
    argument["leadingComments"] = json!([{ "type": "Block", "value": " hint " }]);

    let code = print_code(json!([call_statement("accept", json!([argument]))]));
    assert_eq!(code, "accept(/* hint */ value);");
}

#[test]
fn return_argument_with_line_comment_is_parenthesized() {
    let mut argument = ident("result");
    argument["leadingComments"] = json!([{ "type": "Line", "value": " why" }]);

    let code = print_code(json!([{
        "type": "FunctionDeclaration",
        "id": ident("pick"),
        "params": [],
        "body": {
            "type": "BlockStatement",
            "body": [{ "type": "ReturnStatement", "argument": argument }]
        }
    }]));

    assert_eq!(code, "function pick() {\n\treturn (// why\n\tresult);\n}");
}

#[test]
fn comment_inside_sequence_marks_it_multiline() {
    let mut first = ident("a");
    first["trailingComments"] = json!([{ "type": "Block", "value": " keep " }]);

    let code = print_code(json!([{
        "type": "ExpressionStatement",
        "expression": {
            "type": "ArrayExpression",
            "elements": [first, ident("b")]
        }
    }]));

    assert_eq!(code, "[\n\ta, /* keep */\n\tb\n];");
}
