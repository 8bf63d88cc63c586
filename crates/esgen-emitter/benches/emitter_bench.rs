use criterion::{Criterion, criterion_group, criterion_main};
use serde_json::{Value, json};

use esgen_emitter::ast::Program;
use esgen_emitter::{PrintOptions, print};

fn statement(index: usize) -> Value {
    json!({
        "type": "VariableDeclaration",
        "kind": "const",
        "declarations": [{
            "type": "VariableDeclarator",
            "id": { "type": "Identifier", "name": format!("value{index}") },
            "init": {
                "type": "CallExpression",
                "callee": {
                    "type": "MemberExpression",
                    "object": { "type": "Identifier", "name": "registry" },
                    "property": { "type": "Identifier", "name": "resolve" }
                },
                "arguments": [
                    { "type": "Literal", "value": format!("key{index}"), "raw": format!("'key{index}'") },
                    {
                        "type": "ObjectExpression",
                        "properties": [{
                            "type": "Property",
                            "kind": "init",
                            "key": { "type": "Identifier", "name": "index" },
                            "value": { "type": "Literal", "value": index, "raw": index.to_string() }
                        }]
                    }
                ]
            }
        }]
    })
}

fn build_module(statements: usize) -> Program {
    let body: Vec<Value> = (0..statements).map(statement).collect();
    serde_json::from_value(json!({ "type": "Program", "body": body }))
        .expect("bench fixture deserializes")
}

fn emitter_benchmark(c: &mut Criterion) {
    let small = build_module(16);
    let large = build_module(512);
    let options = PrintOptions::default();

    c.bench_function("print_small_module", |b| b.iter(|| print(&small, &options)));
    c.bench_function("print_large_module", |b| b.iter(|| print(&large, &options)));
}

criterion_group!(benches, emitter_benchmark);
criterion_main!(benches);
