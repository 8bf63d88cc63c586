//! Linearization: the single pass that turns a finished command stream
//! into output text plus raw position-map segments.

use esgen_ast::source::CommentKind;

use crate::command::{Command, CommandStream};
use crate::source_map::Segment;

/// Walks the command stream once, maintaining the live indentation string
/// and the current output line/column. Positioned chunks contribute two
/// mapping segments, one at their start and one after their text.
pub(crate) struct SourceWriter<'a> {
    indent: &'a str,
    code: String,
    /// The text a `Newline` command emits: `"\n"` plus one indent unit per
    /// open level.
    newline: String,
    mappings: Vec<Vec<Segment>>,
    current_line: Vec<Segment>,
    current_column: u32,
}

impl<'a> SourceWriter<'a> {
    pub fn new(indent: &'a str) -> Self {
        Self {
            indent,
            code: String::new(),
            newline: "\n".to_string(),
            mappings: Vec::new(),
            current_line: Vec::new(),
            current_column: 0,
        }
    }

    pub fn run(mut self, stream: &CommandStream) -> (String, Vec<Vec<Segment>>) {
        for command in stream.commands() {
            self.execute(command, stream);
        }
        debug_assert_eq!(self.newline, "\n", "unbalanced indentation");

        let last_line = std::mem::take(&mut self.current_line);
        self.mappings.push(last_line);
        tracing::trace!(
            lines = self.mappings.len(),
            bytes = self.code.len(),
            "render complete"
        );
        (self.code, self.mappings)
    }

    fn execute(&mut self, command: &Command, stream: &CommandStream) {
        match command {
            Command::Text(text) => self.append(text),
            Command::Chunk { content, loc } => {
                if let Some(loc) = loc {
                    self.current_line.push([
                        self.current_column,
                        0,
                        loc.start.line.saturating_sub(1),
                        loc.start.column,
                    ]);
                }
                self.append(content);
                if let Some(loc) = loc {
                    self.current_line.push([
                        self.current_column,
                        0,
                        loc.end.line.saturating_sub(1),
                        loc.end.column,
                    ]);
                }
            }
            Command::Newline => {
                let newline = self.newline.clone();
                self.append(&newline);
            }
            Command::Indent => self.newline.push_str(self.indent),
            Command::Dedent => {
                let len = self.newline.len().saturating_sub(self.indent.len());
                self.newline.truncate(len.max(1));
            }
            Command::Sequence(id) => {
                for child in stream.sequence(*id) {
                    self.execute(child, stream);
                }
            }
            Command::Comment(comment) => match comment.kind {
                CommentKind::Line => {
                    self.append("//");
                    self.append(&comment.value);
                }
                CommentKind::Block => {
                    // Embedded line breaks are re-indented to the live level.
                    let body = comment.value.replace('\n', &self.newline);
                    self.append("/*");
                    self.append(&body);
                    self.append("*/");
                }
            },
        }
    }

    fn append(&mut self, text: &str) {
        self.code.push_str(text);

        let bytes = text.as_bytes();
        let mut tail_start = 0;
        for newline_at in memchr::memchr_iter(b'\n', bytes) {
            let line = std::mem::take(&mut self.current_line);
            self.mappings.push(line);
            tail_start = newline_at + 1;
        }

        let tail_columns = text[tail_start..].chars().count() as u32;
        if tail_start == 0 {
            self.current_column += tail_columns;
        } else {
            self.current_column = tail_columns;
        }
    }
}
