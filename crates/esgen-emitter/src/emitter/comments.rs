//! Comment interleaving: leading comments emit in place, trailing
//! comments queue until the caller reaches a safe insertion point.

use esgen_ast::source::{CommentKind, NodeMeta};

use super::Printer;
use crate::command::Command;

impl Printer {
    /// Emit a node's leading comments ahead of its own commands. Line
    /// comments and block comments spanning lines are followed by a
    /// newline; single-line block comments by a space. Body renderers pass
    /// `force_newlines` so statement comments always sit on their own line.
    pub(super) fn prepend_comments(&mut self, meta: &NodeMeta, force_newlines: bool) {
        for comment in &meta.leading_comments {
            self.commands.push(Command::Comment(comment.clone()));

            if force_newlines
                || comment.kind == CommentKind::Line
                || memchr::memchr(b'\n', comment.value.as_bytes()).is_some()
            {
                self.commands.push(Command::Newline);
            } else {
                self.commands.text(" ");
            }
        }
    }

    /// Queue a node's trailing comment. The correct insertion point (after
    /// a separator, after the closing delimiter) is only known to the
    /// caller context, so emission is deferred to the next drain. Upstream
    /// attachment produces at most one trailing comment per node.
    pub(super) fn queue_trailing(&mut self, meta: &NodeMeta) {
        if let Some(comment) = meta.trailing_comments.first() {
            self.comments.push(comment.clone());
        }
    }

    pub(super) fn take_pending_comment(&mut self) -> Option<esgen_ast::source::Comment> {
        if self.comments.is_empty() {
            None
        } else {
            Some(self.comments.remove(0))
        }
    }
}
