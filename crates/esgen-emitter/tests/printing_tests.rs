//! End-to-end printing tests over ESTree-shaped JSON fixtures.

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

fn string(value: &str) -> Value {
    json!({ "type": "Literal", "value": value, "raw": format!("'{value}'") })
}

fn call_statement(callee: &str, arguments: Value) -> Value {
    json!({
        "type": "ExpressionStatement",
        "expression": { "type": "CallExpression", "callee": ident(callee), "arguments": arguments }
    })
}

#[test]
fn function_declaration() {
    let code = print_code(json!([{
        "type": "FunctionDeclaration",
        "id": ident("add"),
        "params": [ident("a"), ident("b")],
        "body": {
            "type": "BlockStatement",
            "body": [{
                "type": "ReturnStatement",
                "argument": {
                    "type": "BinaryExpression",
                    "operator": "+",
                    "left": ident("a"),
                    "right": ident("b")
                }
            }]
        }
    }]));

    assert_eq!(code, "function add(a, b) {\n\treturn a + b;\n}");
}

#[test]
fn async_generator_functions() {
    let code = print_code(json!([
        {
            "type": "FunctionDeclaration",
            "id": ident("load"),
            "async": true,
            "params": [],
            "body": {
                "type": "BlockStatement",
                "body": [{
                    "type": "ExpressionStatement",
                    "expression": {
                        "type": "AwaitExpression",
                        "argument": { "type": "CallExpression", "callee": ident("fetch"), "arguments": [] }
                    }
                }]
            }
        },
        {
            "type": "FunctionDeclaration",
            "id": ident("numbers"),
            "generator": true,
            "params": [],
            "body": {
                "type": "BlockStatement",
                "body": [
                    {
                        "type": "ExpressionStatement",
                        "expression": { "type": "YieldExpression", "argument": number(1) }
                    },
                    {
                        "type": "ExpressionStatement",
                        "expression": {
                            "type": "YieldExpression",
                            "delegate": true,
                            "argument": { "type": "CallExpression", "callee": ident("rest"), "arguments": [] }
                        }
                    }
                ]
            }
        }
    ]));

    assert_eq!(
        code,
        "async function load() {\n\tawait fetch();\n}\n\nfunction* numbers() {\n\tyield 1;\n\tyield* rest();\n}"
    );
}

#[test]
fn if_else_chain() {
    let code = print_code(json!([{
        "type": "IfStatement",
        "test": ident("x"),
        "consequent": {
            "type": "BlockStatement",
            "body": [call_statement("foo", json!([]))]
        },
        "alternate": {
            "type": "IfStatement",
            "test": ident("y"),
            "consequent": {
                "type": "BlockStatement",
                "body": [call_statement("bar", json!([]))]
            },
            "alternate": {
                "type": "BlockStatement",
                "body": [call_statement("baz", json!([]))]
            }
        }
    }]));

    assert_eq!(
        code,
        "if (x) {\n\tfoo();\n} else if (y) {\n\tbar();\n} else {\n\tbaz();\n}"
    );
}

#[test]
fn loops() {
    let code = print_code(json!([
        {
            "type": "ForStatement",
            "init": {
                "type": "VariableDeclaration",
                "kind": "let",
                "declarations": [{
                    "type": "VariableDeclarator",
                    "id": ident("i"),
                    "init": number(0)
                }]
            },
            "test": {
                "type": "BinaryExpression",
                "operator": "<",
                "left": ident("i"),
                "right": number(10)
            },
            "update": {
                "type": "UpdateExpression",
                "operator": "++",
                "prefix": false,
                "argument": ident("i")
            },
            "body": {
                "type": "BlockStatement",
                "body": [call_statement("log", json!([ident("i")]))]
            }
        },
        {
            "type": "ForOfStatement",
            "await": true,
            "left": {
                "type": "VariableDeclaration",
                "kind": "const",
                "declarations": [{ "type": "VariableDeclarator", "id": ident("chunk") }]
            },
            "right": ident("stream"),
            "body": {
                "type": "BlockStatement",
                "body": [call_statement("push", json!([ident("chunk")]))]
            }
        },
        {
            "type": "DoWhileStatement",
            "body": {
                "type": "BlockStatement",
                "body": [call_statement("tick", json!([]))]
            },
            "test": ident("running")
        }
    ]));

    assert_eq!(
        code,
        "for (let i = 0; i < 10; i++) {\n\tlog(i);\n}\n\nfor await (const chunk of stream) {\n\tpush(chunk);\n}\n\ndo {\n\ttick();\n} while (running);"
    );
}

#[test]
fn class_with_members() {
    let code = print_code(json!([{
        "type": "ClassDeclaration",
        "id": ident("Point"),
        "superClass": ident("Base"),
        "body": {
            "type": "ClassBody",
            "body": [
                {
                    "type": "MethodDefinition",
                    "kind": "constructor",
                    "key": ident("constructor"),
                    "value": {
                        "type": "FunctionExpression",
                        "params": [ident("x")],
                        "body": {
                            "type": "BlockStatement",
                            "body": [{
                                "type": "ExpressionStatement",
                                "expression": {
                                    "type": "AssignmentExpression",
                                    "operator": "=",
                                    "left": {
                                        "type": "MemberExpression",
                                        "object": { "type": "ThisExpression" },
                                        "property": ident("x")
                                    },
                                    "right": ident("x")
                                }
                            }]
                        }
                    }
                },
                {
                    "type": "MethodDefinition",
                    "kind": "get",
                    "key": ident("x"),
                    "value": {
                        "type": "FunctionExpression",
                        "params": [],
                        "body": {
                            "type": "BlockStatement",
                            "body": [{
                                "type": "ReturnStatement",
                                "argument": {
                                    "type": "MemberExpression",
                                    "object": { "type": "ThisExpression" },
                                    "property": { "type": "PrivateIdentifier", "name": "x" }
                                }
                            }]
                        }
                    }
                }
            ]
        }
    }]));

    assert_eq!(
        code,
        "class Point extends Base {\n\tconstructor(x) {\n\t\tthis.x = x;\n\t}\n\n\tget x() {\n\t\treturn this.#x;\n\t}\n}"
    );
}

#[test]
fn static_block_in_class() {
    let code = print_code(json!([{
        "type": "ClassDeclaration",
        "id": ident("Config"),
        "body": {
            "type": "ClassBody",
            "body": [{
                "type": "StaticBlock",
                "body": [call_statement("init", json!([]))]
            }]
        }
    }]));

    assert_eq!(code, "class Config {\n\tstatic {\n\t\tinit();\n\t}\n}");
}

#[test]
fn switch_statement() {
    let code = print_code(json!([{
        "type": "SwitchStatement",
        "discriminant": ident("kind"),
        "cases": [
            {
                "type": "SwitchCase",
                "test": number(1),
                "consequent": [
                    call_statement("one", json!([])),
                    { "type": "BreakStatement" }
                ]
            },
            {
                "type": "SwitchCase",
                "consequent": [call_statement("fallback", json!([]))]
            }
        ]
    }]));

    assert_eq!(
        code,
        "switch (kind) {\n\tcase 1:\n\t\tone();\n\t\tbreak;\n\n\tdefault:\n\t\tfallback();\n}"
    );
}

#[test]
fn try_catch_finally() {
    let code = print_code(json!([{
        "type": "TryStatement",
        "block": {
            "type": "BlockStatement",
            "body": [call_statement("risky", json!([]))]
        },
        "handler": {
            "type": "CatchClause",
            "param": ident("error"),
            "body": {
                "type": "BlockStatement",
                "body": [{
                    "type": "ThrowStatement",
                    "argument": ident("error")
                }]
            }
        },
        "finalizer": {
            "type": "BlockStatement",
            "body": [call_statement("cleanup", json!([]))]
        }
    }]));

    assert_eq!(
        code,
        "try {\n\trisky();\n} catch(error) {\n\tthrow error;\n} finally {\n\tcleanup();\n}"
    );
}

#[test]
fn imports_and_exports() {
    let code = print_code(json!([
        {
            "type": "ImportDeclaration",
            "specifiers": [{ "type": "ImportDefaultSpecifier", "local": ident("app") }],
            "source": string("./app")
        },
        {
            "type": "ImportDeclaration",
            "specifiers": [
                { "type": "ImportSpecifier", "local": ident("x"), "imported": ident("x") },
                { "type": "ImportSpecifier", "local": ident("z"), "imported": ident("y") }
            ],
            "source": string("./util")
        },
        {
            "type": "ExportNamedDeclaration",
            "specifiers": [{ "type": "ExportSpecifier", "local": ident("a"), "exported": ident("b") }]
        },
        {
            "type": "ExportDefaultDeclaration",
            "declaration": ident("app")
        }
    ]));

    assert_eq!(
        code,
        "import app from './app';\nimport { x, y as z } from './util';\n\nexport { a as b };\n\nexport default app;"
    );
}

#[test]
fn bare_and_namespace_imports() {
    let code = print_code(json!([
        {
            "type": "ImportDeclaration",
            "specifiers": [],
            "source": string("./polyfill")
        },
        {
            "type": "ImportDeclaration",
            "specifiers": [
                { "type": "ImportDefaultSpecifier", "local": ident("lib") },
                { "type": "ImportNamespaceSpecifier", "local": ident("helpers") }
            ],
            "source": string("./lib")
        }
    ]));

    assert_eq!(
        code,
        "import './polyfill';\nimport lib, * as helpers from './lib';"
    );
}

#[test]
fn export_all_and_export_declaration() {
    let code = print_code(json!([
        { "type": "ExportAllDeclaration", "source": string("./base") },
        {
            "type": "ExportNamedDeclaration",
            "declaration": {
                "type": "VariableDeclaration",
                "kind": "const",
                "declarations": [{
                    "type": "VariableDeclarator",
                    "id": ident("version"),
                    "init": number(2)
                }]
            }
        }
    ]));

    assert_eq!(code, "export * from './base';\n\nexport const version = 2;");
}

#[test]
fn template_literals() {
    let code = print_code(json!([{
        "type": "ExpressionStatement",
        "expression": {
            "type": "TemplateLiteral",
            "quasis": [
                { "type": "TemplateElement", "value": { "raw": "hello " }, "tail": false },
                { "type": "TemplateElement", "value": { "raw": "!" }, "tail": true }
            ],
            "expressions": [ident("name")]
        }
    }]));

    assert_eq!(code, "`hello ${name}!`;");
}

#[test]
fn tagged_template() {
    let code = print_code(json!([{
        "type": "ExpressionStatement",
        "expression": {
            "type": "TaggedTemplateExpression",
            "tag": ident("css"),
            "quasi": {
                "type": "TemplateLiteral",
                "quasis": [{ "type": "TemplateElement", "value": { "raw": "color: red" }, "tail": true }],
                "expressions": []
            }
        }
    }]));

    assert_eq!(code, "css`color: red`;");
}

#[test]
fn sparse_array_keeps_holes() {
    let code = print_code(json!([{
        "type": "ExpressionStatement",
        "expression": {
            "type": "ArrayExpression",
            "elements": [number(1), null, number(3)]
        }
    }]));

    assert_eq!(code, "[1, , 3];");
}

#[test]
fn object_literal_forms() {
    let code = print_code(json!([{
        "type": "VariableDeclaration",
        "kind": "const",
        "declarations": [{
            "type": "VariableDeclarator",
            "id": ident("handlers"),
            "init": {
                "type": "ObjectExpression",
                "properties": [
                    {
                        "type": "Property",
                        "kind": "init",
                        "key": ident("mode"),
                        "value": ident("mode")
                    },
                    {
                        "type": "Property",
                        "kind": "init",
                        "key": ident("run"),
                        "value": {
                            "type": "FunctionExpression",
                            "params": [],
                            "body": { "type": "BlockStatement", "body": [] }
                        }
                    },
                    {
                        "type": "SpreadElement",
                        "argument": ident("rest")
                    }
                ]
            }
        }]
    }]));

    assert_eq!(code, "const handlers = { mode, run() {}, ...rest };");
}

#[test]
fn statement_level_object_literals_get_parenthesized() {
    let code = print_code(json!([
        {
            "type": "ExpressionStatement",
            "expression": {
                "type": "ObjectExpression",
                "properties": [{
                    "type": "Property",
                    "kind": "init",
                    "key": ident("a"),
                    "value": number(1)
                }]
            }
        },
        {
            "type": "ExpressionStatement",
            "expression": {
                "type": "AssignmentExpression",
                "operator": "=",
                "left": {
                    "type": "ObjectPattern",
                    "properties": [{
                        "type": "Property",
                        "kind": "init",
                        "key": ident("a"),
                        "value": ident("a")
                    }]
                },
                "right": ident("source")
            }
        }
    ]));

    assert_eq!(code, "({ a: 1 });\n({ a } = source);");
}

#[test]
fn arrow_functions() {
    let code = print_code(json!([
        {
            "type": "VariableDeclaration",
            "kind": "const",
            "declarations": [{
                "type": "VariableDeclarator",
                "id": ident("double"),
                "init": {
                    "type": "ArrowFunctionExpression",
                    "params": [ident("n")],
                    "body": {
                        "type": "BinaryExpression",
                        "operator": "*",
                        "left": ident("n"),
                        "right": number(2)
                    }
                }
            }]
        },
        {
            "type": "VariableDeclaration",
            "kind": "const",
            "declarations": [{
                "type": "VariableDeclarator",
                "id": ident("empty"),
                "init": {
                    "type": "ArrowFunctionExpression",
                    "params": [],
                    "body": { "type": "ObjectExpression", "properties": [] }
                }
            }]
        }
    ]));

    assert_eq!(
        code,
        "const double = (n) => n * 2;\nconst empty = () => ({});"
    );
}

#[test]
fn destructuring_declarations() {
    let code = print_code(json!([{
        "type": "VariableDeclaration",
        "kind": "const",
        "declarations": [{
            "type": "VariableDeclarator",
            "id": {
                "type": "ObjectPattern",
                "properties": [
                    {
                        "type": "Property",
                        "kind": "init",
                        "key": ident("a"),
                        "value": ident("a")
                    },
                    {
                        "type": "Property",
                        "kind": "init",
                        "key": ident("b"),
                        "value": {
                            "type": "AssignmentPattern",
                            "left": ident("b"),
                            "right": number(1)
                        }
                    },
                    {
                        "type": "Property",
                        "kind": "init",
                        "key": ident("c"),
                        "value": ident("renamed")
                    },
                    {
                        "type": "RestElement",
                        "argument": ident("rest")
                    }
                ]
            },
            "init": ident("source")
        }]
    }]));

    assert_eq!(code, "const { a, b = 1, c: renamed, ...rest } = source;");
}

#[test]
fn array_pattern_with_elision() {
    let code = print_code(json!([{
        "type": "VariableDeclaration",
        "kind": "const",
        "declarations": [{
            "type": "VariableDeclarator",
            "id": {
                "type": "ArrayPattern",
                "elements": [null, ident("second")]
            },
            "init": ident("pair")
        }]
    }]));

    assert_eq!(code, "const [, second] = pair;");
}

#[test]
fn optional_chaining_and_calls() {
    let code = print_code(json!([{
        "type": "ExpressionStatement",
        "expression": {
            "type": "ChainExpression",
            "expression": {
                "type": "CallExpression",
                "optional": true,
                "callee": {
                    "type": "MemberExpression",
                    "optional": true,
                    "object": ident("config"),
                    "property": ident("reload")
                },
                "arguments": []
            }
        }
    }]));

    assert_eq!(code, "config?.reload?.();");
}

#[test]
fn labeled_break_and_continue() {
    let code = print_code(json!([{
        "type": "LabeledStatement",
        "label": ident("outer"),
        "body": {
            "type": "WhileStatement",
            "test": { "type": "Literal", "value": true, "raw": "true" },
            "body": { "type": "BreakStatement", "label": ident("outer") }
        }
    }]));

    assert_eq!(code, "outer: while (true) break outer;");
}

#[test]
fn sequence_and_meta_expressions() {
    let code = print_code(json!([
        {
            "type": "ExpressionStatement",
            "expression": {
                "type": "SequenceExpression",
                "expressions": [ident("a"), ident("b"), ident("c")]
            }
        },
        {
            "type": "ExpressionStatement",
            "expression": {
                "type": "MetaProperty",
                "meta": ident("import"),
                "property": ident("meta")
            }
        },
        {
            "type": "ExpressionStatement",
            "expression": {
                "type": "ImportExpression",
                "source": string("./lazy")
            }
        }
    ]));

    assert_eq!(code, "(a, b, c);\nimport.meta;\nimport('./lazy');");
}

#[test]
fn empty_statement_inside_for_body() {
    let code = print_code(json!([{
        "type": "ForStatement",
        "body": { "type": "EmptyStatement" }
    }]));

    assert_eq!(code, "for (; ; ) ;");
}

#[test]
fn statement_list_accepts_bare_body() {
    let body: Vec<esgen_emitter::ast::Statement> =
        serde_json::from_value(json!([call_statement("main", json!([]))]))
            .expect("statements deserialize");

    let printed = esgen_emitter::print_statements(&body, &PrintOptions::default());
    assert_eq!(printed.code, "main();");
}
