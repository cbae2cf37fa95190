//! Immutable syntax tree model.
//!
//! The engine does not parse source text; the host (IDE, test fixture)
//! materializes a parsed file through [`TreeBuilder`] and hands the finished
//! [`SyntaxTree`] to the analyzer. Nodes live in an arena owned by the tree;
//! [`SyntaxNode`] is a cheap `Copy` handle over it, so upward queries via
//! parent links never create ownership cycles.

use serde::{Deserialize, Serialize};

/// A byte span in the source text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    /// Byte offset of the first character.
    pub start: usize,
    /// Length in bytes.
    pub len: usize,
}

impl Span {
    /// Creates a new span.
    #[must_use]
    pub fn new(start: usize, len: usize) -> Self {
        Self { start, len }
    }

    /// Byte offset one past the last character.
    #[must_use]
    pub fn end(&self) -> usize {
        self.start + self.len
    }

    /// Returns true if `other` lies entirely within this span.
    #[must_use]
    pub fn contains(&self, other: Span) -> bool {
        other.start >= self.start && other.end() <= self.end()
    }
}

/// The closed set of node kinds the engine understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeKind {
    /// Root of a parsed file.
    Root,
    /// Namespace declaration.
    NamespaceDecl,
    /// Class declaration.
    ClassDecl,
    /// Struct declaration.
    StructDecl,
    /// Enum declaration.
    EnumDecl,
    /// Interface declaration.
    InterfaceDecl,
    /// Base-type list of a class/struct/interface declaration.
    BaseList,
    /// One entry in a base-type list.
    BaseType,
    /// Method declaration.
    MethodDecl,
    /// Parameter list of a method.
    ParameterList,
    /// A single parameter declaration.
    ParameterDecl,
    /// Property declaration.
    PropertyDecl,
    /// Property accessor (getter or setter) body.
    AccessorDecl,
    /// Field declaration.
    FieldDecl,
    /// Local variable declaration statement.
    LocalVarDecl,
    /// Compound (braced) statement.
    Block,
    /// Any non-block statement.
    Statement,
    /// A bare identifier reference inside expressions or base lists.
    IdentifierRef,
}

/// A node's principal token: the declared identifier for declarations, the
/// referenced name for [`NodeKind::IdentifierRef`] nodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Token text, exactly as written in source.
    pub text: String,
    /// Span of the token.
    pub span: Span,
}

impl Token {
    /// Creates a new token.
    #[must_use]
    pub fn new(text: impl Into<String>, span: Span) -> Self {
        Self {
            text: text.into(),
            span,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct NodeId(u32);

impl NodeId {
    fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Debug)]
struct NodeData {
    kind: NodeKind,
    span: Span,
    identifier: Option<Token>,
    leading_trivia: String,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// A parsed source file: node arena, source text, and line index.
///
/// Immutable once built. Safe to share across threads; independent trees may
/// be analyzed concurrently.
#[derive(Debug)]
pub struct SyntaxTree {
    source: String,
    nodes: Vec<NodeData>,
    line_starts: Vec<usize>,
}

impl SyntaxTree {
    /// Starts building a tree over the given source text.
    #[must_use]
    pub fn builder(source: impl Into<String>) -> TreeBuilder {
        TreeBuilder::new(source)
    }

    /// The root node.
    #[must_use]
    pub fn root(&self) -> SyntaxNode<'_> {
        SyntaxNode {
            tree: self,
            id: NodeId(0),
        }
    }

    /// The source text this tree was parsed from.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Resolves a byte offset to a 1-indexed (line, column) pair.
    #[must_use]
    pub fn line_col(&self, offset: usize) -> (usize, usize) {
        let line = self
            .line_starts
            .partition_point(|&start| start <= offset)
            .saturating_sub(1);
        (line + 1, offset - self.line_starts[line] + 1)
    }

    /// Pre-order traversal of the whole tree, root included. Parents are
    /// visited before descendants, siblings in source order.
    #[must_use]
    pub fn preorder(&self) -> Preorder<'_> {
        Preorder {
            tree: self,
            stack: vec![NodeId(0)],
        }
    }

    fn node(&self, id: NodeId) -> &NodeData {
        &self.nodes[id.index()]
    }
}

/// A handle to one node of a [`SyntaxTree`].
#[derive(Clone, Copy)]
pub struct SyntaxNode<'t> {
    tree: &'t SyntaxTree,
    id: NodeId,
}

impl<'t> SyntaxNode<'t> {
    fn data(&self) -> &'t NodeData {
        self.tree.node(self.id)
    }

    /// The tree this node belongs to.
    #[must_use]
    pub fn tree(&self) -> &'t SyntaxTree {
        self.tree
    }

    /// This node's kind.
    #[must_use]
    pub fn kind(&self) -> NodeKind {
        self.data().kind
    }

    /// The source span covered by this node.
    #[must_use]
    pub fn span(&self) -> Span {
        self.data().span
    }

    /// The principal token, if this node carries one.
    #[must_use]
    pub fn identifier(&self) -> Option<&'t Token> {
        self.data().identifier.as_ref()
    }

    /// Leading trivia (whitespace and comments preceding the node),
    /// preserved verbatim.
    #[must_use]
    pub fn leading_trivia(&self) -> &'t str {
        &self.data().leading_trivia
    }

    /// The parent node, if any. Upward queries only.
    #[must_use]
    pub fn parent(&self) -> Option<SyntaxNode<'t>> {
        self.data().parent.map(|id| SyntaxNode {
            tree: self.tree,
            id,
        })
    }

    /// Direct children in source order.
    pub fn children(&self) -> impl Iterator<Item = SyntaxNode<'t>> + 't {
        let tree = self.tree;
        self.data()
            .children
            .iter()
            .map(move |&id| SyntaxNode { tree, id })
    }

    /// Pre-order traversal of all descendants, excluding this node.
    #[must_use]
    pub fn descendants(&self) -> Preorder<'t> {
        let mut stack: Vec<NodeId> = self.data().children.clone();
        stack.reverse();
        Preorder {
            tree: self.tree,
            stack,
        }
    }

    /// The first identifier token within this node, in pre-order. Used for
    /// "report at the first token" locations.
    #[must_use]
    pub fn first_token(&self) -> Option<&'t Token> {
        if let Some(token) = self.identifier() {
            return Some(token);
        }
        for child in self.children() {
            if let Some(token) = child.first_token() {
                return Some(token);
            }
        }
        None
    }
}

impl PartialEq for SyntaxNode<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.tree, other.tree) && self.id == other.id
    }
}

impl Eq for SyntaxNode<'_> {}

impl std::fmt::Debug for SyntaxNode<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SyntaxNode")
            .field("kind", &self.kind())
            .field("span", &self.span())
            .field("identifier", &self.identifier())
            .finish()
    }
}

/// Pre-order node iterator.
#[derive(Debug)]
pub struct Preorder<'t> {
    tree: &'t SyntaxTree,
    stack: Vec<NodeId>,
}

impl<'t> Iterator for Preorder<'t> {
    type Item = SyntaxNode<'t>;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        let data = self.tree.node(id);
        self.stack.extend(data.children.iter().rev().copied());
        Some(SyntaxNode {
            tree: self.tree,
            id,
        })
    }
}

/// Builds a [`SyntaxTree`] one node at a time.
///
/// The builder starts positioned inside an implicit [`NodeKind::Root`] node
/// spanning the whole source. `start_node`/`finish_node` calls must balance.
#[derive(Debug)]
pub struct TreeBuilder {
    source: String,
    nodes: Vec<NodeData>,
    stack: Vec<NodeId>,
}

impl TreeBuilder {
    fn new(source: impl Into<String>) -> Self {
        let source = source.into();
        let root = NodeData {
            kind: NodeKind::Root,
            span: Span::new(0, source.len()),
            identifier: None,
            leading_trivia: String::new(),
            parent: None,
            children: Vec::new(),
        };
        Self {
            source,
            nodes: vec![root],
            stack: vec![NodeId(0)],
        }
    }

    /// Opens a child node of the current node.
    pub fn start_node(&mut self, kind: NodeKind, span: Span) -> &mut Self {
        let parent = *self.stack.last().unwrap_or(&NodeId(0));
        let id = NodeId(u32::try_from(self.nodes.len()).unwrap_or(u32::MAX));
        self.nodes.push(NodeData {
            kind,
            span,
            identifier: None,
            leading_trivia: String::new(),
            parent: Some(parent),
            children: Vec::new(),
        });
        self.nodes[parent.index()].children.push(id);
        self.stack.push(id);
        self
    }

    /// Sets the principal token of the current node.
    pub fn identifier(&mut self, text: impl Into<String>, span: Span) -> &mut Self {
        if let Some(&id) = self.stack.last() {
            self.nodes[id.index()].identifier = Some(Token::new(text, span));
        }
        self
    }

    /// Attaches leading trivia (verbatim text) to the current node.
    pub fn trivia(&mut self, text: impl Into<String>) -> &mut Self {
        if let Some(&id) = self.stack.last() {
            self.nodes[id.index()].leading_trivia = text.into();
        }
        self
    }

    /// Closes the current node. The implicit root cannot be closed.
    pub fn finish_node(&mut self) -> &mut Self {
        if self.stack.len() > 1 {
            self.stack.pop();
        }
        self
    }

    /// Finishes building and returns the immutable tree.
    #[must_use]
    pub fn finish(self) -> SyntaxTree {
        let mut line_starts = vec![0];
        for (i, b) in self.source.bytes().enumerate() {
            if b == b'\n' {
                line_starts.push(i + 1);
            }
        }
        SyntaxTree {
            source: self.source,
            nodes: self.nodes,
            line_starts,
        }
    }
}
