use core::mem;

use ecow::EcoString;

use super::visitor::{NodeKind, Visitor, VoidVisitor};
use crate::Vec;

/// A node of the intermediate tree.
///
/// Every node carries exactly one [`NodeKind`] tag, owns zero or more
/// children, and may carry a text label (identifier names, literal text,
/// modifier spellings). Conversion passes mutate nodes in place or replace
/// whole subtrees; the tree is exclusively owned by the pass running on it,
/// so there is no sharing to worry about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    kind: NodeKind,
    label: Option<EcoString>,
    children: Vec<Node>,
}

impl Node {
    /// A childless, unlabeled node.
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            label: None,
            children: Vec::new(),
        }
    }

    pub fn with_children(kind: NodeKind, children: Vec<Node>) -> Self {
        Self {
            kind,
            label: None,
            children,
        }
    }

    /// A leaf carrying text, e.g. a name identifier or a literal.
    pub fn with_label(kind: NodeKind, label: impl Into<EcoString>) -> Self {
        Self {
            kind,
            label: Some(label.into()),
            children: Vec::new(),
        }
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    /// Retag this node. Used by passes that rewrite a construct into its
    /// target-language counterpart while keeping the subtree.
    pub fn set_kind(&mut self, kind: NodeKind) {
        self.kind = kind;
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn set_label(&mut self, label: impl Into<EcoString>) {
        self.label = Some(label.into());
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn children_mut(&mut self) -> &mut [Node] {
        &mut self.children
    }

    pub fn push_child(&mut self, child: Node) {
        self.children.push(child);
    }

    /// Detach all children, leaving this node a leaf.
    pub fn take_children(&mut self) -> Vec<Node> {
        mem::take(&mut self.children)
    }

    /// Replace this node (and its whole subtree) with another.
    pub fn replace(&mut self, replacement: Node) {
        *self = replacement;
    }

    /// Accept a void dispatcher.
    ///
    /// Equivalent to [`Node::accept`] with the absent `()` context; every
    /// [`VoidVisitor`] is also a `Visitor<(), ()>`.
    pub fn accept_void<V>(&mut self, visitor: &mut V)
    where
        V: VoidVisitor + ?Sized,
    {
        self.accept(visitor, &mut ());
    }

    /// Accept `visitor` on each child, in order.
    ///
    /// This is the default pre-order step a pass reaches for; a pass is free
    /// to call [`Node::accept`] on whichever children it chooses instead, in
    /// whatever order, zero or more times.
    pub fn accept_children<C, V>(&mut self, visitor: &mut V, ctx: &mut C)
    where
        V: Visitor<C, ()> + ?Sized,
    {
        for child in &mut self.children {
            child.accept(visitor, ctx);
        }
    }

    pub fn accept_children_void<V>(&mut self, visitor: &mut V)
    where
        V: VoidVisitor + ?Sized,
    {
        self.accept_children(visitor, &mut ());
    }
}
