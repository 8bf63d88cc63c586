//! The intermediate command stream the node handlers write into.
//!
//! Handlers never build output text directly. They append commands to a
//! flat stream, and layout decisions that depend on the width of a
//! not-yet-finished span are deferred through [`SequenceId`] placeholders:
//! a sequence is created empty, linked into the stream immediately, and
//! populated exactly once when the enclosing construct has measured its
//! extent. The stream is consumed by a single linearization pass after the
//! render completes and never outlives the print call that built it.

use std::borrow::Cow;

use esgen_ast::source::{Comment, SourceLocation};

/// Handle for a deferred sequence, indexing into the stream's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SequenceId(u32);

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Command {
    /// Literal text, emitted verbatim.
    Text(Cow<'static, str>),
    /// Literal text that carries a source position; the unit from which
    /// position-map entries are derived.
    Chunk {
        content: String,
        loc: Option<SourceLocation>,
    },
    /// A line break followed by the current indentation.
    Newline,
    /// Raise the indentation for subsequent newlines by one level.
    Indent,
    /// Lower it again.
    Dedent,
    /// A deferred sequence; resolves to its arena entry at linearization.
    Sequence(SequenceId),
    /// An attached comment. The surrounding whitespace policy is decided
    /// by whoever pushes it.
    Comment(Comment),
}

#[derive(Debug, Default)]
pub(crate) struct CommandStream {
    commands: Vec<Command>,
    sequences: Vec<Vec<Command>>,
}

impl CommandStream {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of commands in the top-level stream; used as a watermark for
    /// [`CommandStream::measure_from`].
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn push(&mut self, command: Command) {
        self.commands.push(command);
    }

    pub fn text(&mut self, text: impl Into<Cow<'static, str>>) {
        self.commands.push(Command::Text(text.into()));
    }

    pub fn chunk(&mut self, content: impl Into<String>, loc: Option<SourceLocation>) {
        self.commands.push(Command::Chunk {
            content: content.into(),
            loc,
        });
    }

    /// Create an empty deferred sequence. The caller links it into the
    /// stream with [`Command::Sequence`], possibly at several positions.
    pub fn begin_sequence(&mut self) -> SequenceId {
        let id = SequenceId(self.sequences.len() as u32);
        self.sequences.push(Vec::new());
        id
    }

    /// Resolve a deferred sequence. Each sequence is resolved at most
    /// once, before linearization reads the stream.
    pub fn extend_sequence(
        &mut self,
        id: SequenceId,
        commands: impl IntoIterator<Item = Command>,
    ) {
        let sequence = &mut self.sequences[id.0 as usize];
        debug_assert!(sequence.is_empty(), "deferred sequence resolved twice");
        sequence.extend(commands);
    }

    pub fn sequence(&self, id: SequenceId) -> &[Command] {
        &self.sequences[id.0 as usize]
    }

    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    /// Rough estimate of the printed width of everything appended since
    /// `from`. Unresolved sequences count as two columns, the width of the
    /// `", "` they usually become.
    pub fn measure_from(&self, from: usize) -> usize {
        let mut total = 0;
        for command in &self.commands[from..] {
            match command {
                Command::Text(text) => total += text.len(),
                Command::Chunk { content, .. } => total += content.len(),
                Command::Sequence(_) => total += 2,
                _ => {}
            }
        }
        total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn measure_counts_text_chunks_and_pending_sequences() {
        let mut stream = CommandStream::new();
        stream.text("const ");
        let watermark = stream.len();

        stream.chunk("x", None);
        let join = stream.begin_sequence();
        stream.push(Command::Sequence(join));
        stream.text("y");
        stream.push(Command::Newline);

        // "x" + assumed ", " + "y"
        assert_eq!(stream.measure_from(watermark), 4);
    }

    #[test]
    fn sequences_resolve_in_place() {
        let mut stream = CommandStream::new();
        let open = stream.begin_sequence();
        stream.push(Command::Sequence(open));
        stream.text("a");

        assert!(stream.sequence(open).is_empty());
        stream.extend_sequence(open, [Command::Indent, Command::Newline]);
        assert_eq!(stream.sequence(open).len(), 2);
    }
}
