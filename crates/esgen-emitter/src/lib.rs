//! esgen-emitter: renders ECMAScript/TypeScript syntax trees back to
//! source text with a version-3 source map.
//!
//! The engine is a single recursive descent over the tree. Handlers write
//! an intermediate command stream (see [`command`]) in which layout
//! choices that depend on rendered width are deferred placeholders; once
//! a construct's extent has been measured the placeholder resolves to
//! either inline spacing or indent-and-newline. A final linear pass turns
//! the stream into text and position-map entries.
//!
//! ```
//! use esgen_emitter::{print, PrintOptions};
//! use esgen_emitter::ast::Program;
//!
//! let program: Program = serde_json::from_str(
//!     r#"{
//!         "type": "Program",
//!         "body": [{
//!             "type": "ExpressionStatement",
//!             "expression": { "type": "Identifier", "name": "hello" }
//!         }]
//!     }"#,
//! ).unwrap();
//!
//! let printed = print(&program, &PrintOptions::default());
//! assert_eq!(printed.code, "hello;");
//! ```
//!
//! A render is synchronous and self-contained: every command is created
//! and dropped inside the `print` call, and concurrent renders just use
//! separate calls. The input tree is borrowed immutably throughout.

pub use esgen_ast as ast;

mod command;
mod emitter;
mod precedence;
pub mod source_map;
mod source_writer;

pub use source_map::{Mappings, Segment, SourceMap};

use ast::stmt::{Program, Statement};
use emitter::Printer;
use source_writer::SourceWriter;

/// Preferred quote character for string literals that are re-derived from
/// their value (a recorded `raw` form always wins).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum QuoteStyle {
    #[default]
    Single,
    Double,
}

impl QuoteStyle {
    pub fn char(self) -> char {
        match self {
            QuoteStyle::Single => '\'',
            QuoteStyle::Double => '"',
        }
    }
}

/// Rendering configuration. Every field has a default; `..Default::default()`
/// is the usual way to set just one.
#[derive(Debug, Clone)]
pub struct PrintOptions {
    /// Indentation unit, repeated per level.
    pub indent: String,
    pub quotes: QuoteStyle,
    /// Emit the compact serialized `mappings` string rather than the raw
    /// per-line entry lists.
    pub encode_mappings: bool,
    /// Source name recorded in the map's `sources`.
    pub source_map_source: Option<String>,
    /// Original text recorded in the map's `sourcesContent`.
    pub source_map_content: Option<String>,
}

impl Default for PrintOptions {
    fn default() -> Self {
        Self {
            indent: "\t".to_string(),
            quotes: QuoteStyle::default(),
            encode_mappings: true,
            source_map_source: None,
            source_map_content: None,
        }
    }
}

/// A finished render: the program text and its position map.
#[derive(Debug, Clone)]
pub struct Printed {
    pub code: String,
    pub map: SourceMap,
}

/// Render a program.
pub fn print(program: &Program, options: &PrintOptions) -> Printed {
    print_body(&program.body, options)
}

/// Render a bare list of top-level statements, as if wrapped in a program
/// root.
pub fn print_statements(body: &[Statement], options: &PrintOptions) -> Printed {
    print_body(body, options)
}

fn print_body(body: &[Statement], options: &PrintOptions) -> Printed {
    let mut printer = Printer::new(options.quotes.char());
    printer.print_program(body);
    let stream = printer.finish();

    tracing::trace!(commands = stream.len(), "linearizing command stream");
    let (code, lines) = SourceWriter::new(&options.indent).run(&stream);

    let mappings = if options.encode_mappings {
        Mappings::Encoded(source_map::encode_mappings(&lines))
    } else {
        Mappings::Raw(lines)
    };

    Printed {
        code,
        map: SourceMap {
            version: 3,
            names: Vec::new(),
            sources: vec![options.source_map_source.clone()],
            sources_content: vec![options.source_map_content.clone()],
            mappings,
        },
    }
}
