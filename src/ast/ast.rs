use std::fmt::Display;

use crate::{
    lexer::tokens::{Token, TokenKind},
    Span,
};

/// Node Kinds
///
/// A node is either built from the token that produced it, or is one of the
/// synthetic nodes the parser creates itself.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum NodeKind {
    Token(TokenKind),
    /// The root of every parse.
    Program,
    /// Placeholder for an assignment that could not be parsed.
    Assignment,
    /// Placeholder for a factor that could not be parsed.
    Factor,
}

impl NodeKind {
    /// The label given to synthetic nodes of this kind.
    pub fn label(&self) -> &'static str {
        match self {
            NodeKind::Token(kind) => kind.name(),
            NodeKind::Program => "program",
            NodeKind::Assignment => "assignment",
            NodeKind::Factor => "factor",
        }
    }
}

/// A node in the syntax tree.
///
/// Children are kept in insertion order, which is significant: for operator
/// nodes it encodes which operand is which.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    kind: NodeKind,
    text: String,
    span: Option<Span>,
    children: Vec<Node>,
}

impl Node {
    pub fn from_token(token: Token) -> Self {
        Node {
            kind: NodeKind::Token(token.kind),
            text: token.value,
            span: Some(token.span),
            children: vec![],
        }
    }

    pub fn synthetic(kind: NodeKind) -> Self {
        Node {
            kind,
            text: String::from(kind.label()),
            span: None,
            children: vec![],
        }
    }

    /// Appends `child` after any existing children.
    pub fn push(&mut self, child: Node) {
        self.children.push(child);
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn span(&self) -> Option<&Span> {
        self.span.as_ref()
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Returns the number of nodes in this subtree, including `self`.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(Node::node_count).sum::<usize>()
    }

    /// Renders the tree one node per line, indented two spaces per level.
    pub fn pretty(&self) -> String {
        let mut out = String::new();
        self.write_pretty(&mut out, 0);
        out
    }

    fn write_pretty(&self, out: &mut String, depth: usize) {
        out.push_str(&"  ".repeat(depth));
        out.push_str(&self.text);
        out.push('\n');

        for child in &self.children {
            child.write_pretty(out, depth + 1);
        }
    }
}

/// Renders the tree as an s-expression: `(text child ...)`, or just `text`
/// for a leaf.
impl Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_leaf() {
            return write!(f, "{}", self.text);
        }

        write!(f, "({}", self.text)?;
        for child in &self.children {
            write!(f, " {}", child)?;
        }
        write!(f, ")")
    }
}
