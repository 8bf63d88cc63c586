//! Source positions and attached comments.

use serde::{Deserialize, Serialize};

/// A position in the original source text. Lines are 1-based and columns
/// 0-based, matching what ESTree-style parsers record in `loc`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

/// The source range a node was parsed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceLocation {
    pub start: Position,
    pub end: Position,
}

/// Kind of comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CommentKind {
    /// `// comment`
    Line,
    /// `/* comment */`
    Block,
}

/// A comment attached to a node by an upstream pass. The emitter only
/// consumes attachments; it never discovers comments on its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    #[serde(rename = "type")]
    pub kind: CommentKind,
    pub value: String,
}

impl Comment {
    pub fn is_line(&self) -> bool {
        self.kind == CommentKind::Line
    }
}

/// Metadata any node may carry: a source range plus leading/trailing
/// comment lists. Flattened into every node struct so `loc` and
/// `leadingComments`/`trailingComments` sit at the node's top level in
/// JSON, where parsers put them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NodeMeta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loc: Option<SourceLocation>,
    #[serde(
        default,
        rename = "leadingComments",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub leading_comments: Vec<Comment>,
    #[serde(
        default,
        rename = "trailingComments",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub trailing_comments: Vec<Comment>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comment_kind_uses_estree_tags() {
        let comment: Comment =
            serde_json::from_str(r#"{ "type": "Line", "value": " hello" }"#).unwrap();
        assert!(comment.is_line());
        assert_eq!(comment.value, " hello");
    }

    #[test]
    fn node_meta_defaults_to_empty() {
        let meta: NodeMeta = serde_json::from_str("{}").unwrap();
        assert!(meta.loc.is_none());
        assert!(meta.leading_comments.is_empty());
        assert!(meta.trailing_comments.is_empty());
    }
}
