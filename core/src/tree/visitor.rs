//! Node kinds, their supertype table, and the visitor dispatch contracts.
//!
//! The whole dispatch framework is generated from a single `node_hierarchy!`
//! invocation listing every `kind : parent` edge exactly once. From that one
//! table the macro derives:
//!
//! - the [`NodeKind`] tag enum and its [`parent`](NodeKind::parent) lookup,
//! - the context-carrying [`Visitor`] contract, whose per-kind defaults each
//!   re-dispatch statically to the parent kind's method,
//! - the context-free [`VoidVisitor`] contract with the isomorphic fallback
//!   graph, plus the blanket adapter that makes every void dispatcher a
//!   `Visitor<(), ()>`,
//! - [`Node::accept`], the single dynamic-dispatch point: an exhaustive
//!   match on the node's tag calling the method for its exact kind.
//!
//! Keeping all four surfaces in one table is what makes the fallback wiring
//! auditable: a handler for a supertype that never fires for a subtype is a
//! wiring bug this layout cannot express, and the unit tests below cross-check
//! the declared delegation methods against the parent table anyway.

use hashbrown::HashSet;
use smallvec::SmallVec;
use thiserror::Error;

use super::node::Node;

/// Declares the node-kind forest and generates the dispatch framework.
///
/// Each edge line reads `Kind : Parent => visit_kind / visit_parent`. The
/// method names are spelled out because declarative macros cannot derive
/// snake_case idents; `parent_edges_match_delegation_methods` in the tests
/// below keeps the two columns honest.
macro_rules! node_hierarchy {
    (
        root $root:ident => $root_visit:ident;
        $( $kind:ident : $parent:ident => $visit:ident / $parent_visit:ident; )+
    ) => {
        /// Tag identifying which variant of the tree a node instance is.
        ///
        /// Kinds form a forest rooted at the single root, `Element`: every
        /// other kind has exactly one [`parent`](NodeKind::parent) and a
        /// finite path to the root. That path is what makes visitor dispatch
        /// total — any kind a dispatcher does not override is handled by its
        /// nearest overridden ancestor, ultimately the root.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum NodeKind {
            $root,
            $( $kind, )+
        }

        impl NodeKind {
            /// Every kind, root first, in declaration order.
            pub const ALL: &'static [NodeKind] = &[
                NodeKind::$root,
                $( NodeKind::$kind, )+
            ];

            /// The declared supertype of this kind; `None` only for the root.
            pub fn parent(self) -> Option<NodeKind> {
                match self {
                    NodeKind::$root => None,
                    $( NodeKind::$kind => Some(NodeKind::$parent), )+
                }
            }

            /// Name of the dispatch method [`Node::accept`] resolves to for
            /// this kind. Useful when logging which handler a pass landed in.
            pub fn method_name(self) -> &'static str {
                match self {
                    NodeKind::$root => stringify!($root_visit),
                    $( NodeKind::$kind => stringify!($visit), )+
                }
            }

            /// Name of the method this kind's default implementation
            /// delegates to; `None` for the root, which has no default.
            pub fn parent_method_name(self) -> Option<&'static str> {
                match self {
                    NodeKind::$root => None,
                    $( NodeKind::$kind => Some(stringify!($parent_visit)), )+
                }
            }
        }

        /// Context-carrying dispatch contract: one method per [`NodeKind`].
        ///
        /// The root method has no default — it is the base case of every
        /// fallback chain and each implementer must supply it. Every other
        /// method's default is a single static re-dispatch to the parent
        /// kind's method with the same node and the same context, so
        /// overriding an intermediate kind changes behavior for all of its
        /// non-overriding descendants ("catch at any level").
        ///
        /// `C` is threaded through unchanged by the defaults; `R` is whatever
        /// the pass produces (`()` for side-effect passes, a rewritten
        /// subtree, an analysis result, a `Result` to propagate pass errors).
        pub trait Visitor<C, R> {
            fn $root_visit(&mut self, node: &mut Node, ctx: &mut C) -> R;

            $(
                fn $visit(&mut self, node: &mut Node, ctx: &mut C) -> R {
                    self.$parent_visit(node, ctx)
                }
            )+
        }

        /// Context-free dispatch contract, for passes that thread no value
        /// and return nothing.
        ///
        /// Its fallback graph is generated from the same table as
        /// [`Visitor`]'s, and the blanket impl below makes every void
        /// dispatcher usable wherever a `Visitor<(), ()>` is expected.
        pub trait VoidVisitor {
            fn $root_visit(&mut self, node: &mut Node);

            $(
                fn $visit(&mut self, node: &mut Node) {
                    self.$parent_visit(node)
                }
            )+
        }

        /// Every void dispatcher is a context-carrying dispatcher over the
        /// absent `()` context; the forwarding discards the context on every
        /// method, so a single tree-walking engine serves both contracts.
        impl<V: VoidVisitor + ?Sized> Visitor<(), ()> for V {
            fn $root_visit(&mut self, node: &mut Node, _ctx: &mut ()) {
                VoidVisitor::$root_visit(self, node)
            }

            $(
                fn $visit(&mut self, node: &mut Node, _ctx: &mut ()) {
                    VoidVisitor::$visit(self, node)
                }
            )+
        }

        impl Node {
            /// Accept a dispatcher: invoke its method for this node's exact
            /// kind.
            ///
            /// This match is the one true dynamic-dispatch point of the
            /// framework. Ancestor resolution never happens here — it lives
            /// entirely in the dispatcher's default chain — and the match is
            /// exhaustive, so adding a kind without wiring it is a compile
            /// error. Acceptance itself performs no traversal and has no side
            /// effects beyond what the invoked method does.
            pub fn accept<C, R, V>(&mut self, visitor: &mut V, ctx: &mut C) -> R
            where
                V: Visitor<C, R> + ?Sized,
            {
                match self.kind() {
                    NodeKind::$root => visitor.$root_visit(self, ctx),
                    $( NodeKind::$kind => visitor.$visit(self, ctx), )+
                }
            }
        }
    };
}

node_hierarchy! {
    root Element => visit_element;

    Declaration : Element => visit_declaration / visit_element;
    Class : Declaration => visit_class / visit_declaration;
    Statement : Element => visit_statement / visit_element;
    Loop : Statement => visit_loop / visit_statement;
    Block : Element => visit_block / visit_element;
    Expression : Statement => visit_expression / visit_statement;
    BinaryExpression : Expression => visit_binary_expression / visit_expression;
    UnaryExpression : Expression => visit_unary_expression / visit_expression;
    PrefixExpression : UnaryExpression => visit_prefix_expression / visit_unary_expression;
    PostfixExpression : UnaryExpression => visit_postfix_expression / visit_unary_expression;
    QualifiedExpression : Expression => visit_qualified_expression / visit_expression;
    MethodCallExpression : Expression => visit_method_call_expression / visit_expression;
    FieldAccessExpression : Expression => visit_field_access_expression / visit_expression;
    ArrayAccessExpression : Expression => visit_array_access_expression / visit_expression;
    ParenthesizedExpression : Expression => visit_parenthesized_expression / visit_expression;
    TypeCastExpression : Expression => visit_type_cast_expression / visit_expression;
    Call : Expression => visit_call / visit_expression;
    LiteralExpression : Expression => visit_literal_expression / visit_expression;
    ExpressionList : Element => visit_expression_list / visit_element;
    MethodReference : Element => visit_method_reference / visit_element;
    FieldReference : Element => visit_field_reference / visit_element;
    ClassReference : Element => visit_class_reference / visit_element;
    TypeReference : Element => visit_type_reference / visit_element;
    Identifier : Element => visit_identifier / visit_element;
    OperatorIdentifier : Identifier => visit_operator_identifier / visit_identifier;
    QualificationIdentifier : Identifier => visit_qualification_identifier / visit_identifier;
    TypeIdentifier : Identifier => visit_type_identifier / visit_identifier;
    NameIdentifier : Identifier => visit_name_identifier / visit_identifier;
    ModifierList : Element => visit_modifier_list / visit_element;
    Modifier : Element => visit_modifier / visit_element;
    AccessModifier : Modifier => visit_access_modifier / visit_modifier;

    JavaField : Declaration => visit_java_field / visit_declaration;
    JavaMethod : Declaration => visit_java_method / visit_declaration;
    JavaForLoop : Loop => visit_java_for_loop / visit_loop;
    JavaAssignmentExpression : Expression => visit_java_assignment_expression / visit_expression;
    JavaCall : Call => visit_java_call / visit_call;
    JavaTypeIdentifier : TypeIdentifier => visit_java_type_identifier / visit_type_identifier;
    JavaStringLiteralExpression : LiteralExpression => visit_java_string_literal_expression / visit_literal_expression;
    JavaOperatorIdentifier : OperatorIdentifier => visit_java_operator_identifier / visit_operator_identifier;
    JavaQualificationIdentifier : QualificationIdentifier => visit_java_qualification_identifier / visit_qualification_identifier;
    JavaMethodCallExpression : MethodCallExpression => visit_java_method_call_expression / visit_method_call_expression;
    JavaFieldAccessExpression : FieldAccessExpression => visit_java_field_access_expression / visit_field_access_expression;
    JavaNewExpression : Expression => visit_java_new_expression / visit_expression;
    JavaMethodReference : MethodReference => visit_java_method_reference / visit_method_reference;
    JavaFieldReference : FieldReference => visit_java_field_reference / visit_field_reference;
    JavaClassReference : ClassReference => visit_java_class_reference / visit_class_reference;
    JavaAccessModifier : AccessModifier => visit_java_access_modifier / visit_access_modifier;
    JavaNewEmptyArray : Expression => visit_java_new_empty_array / visit_expression;
    JavaNewArray : Expression => visit_java_new_array / visit_expression;

    KtFun : Declaration => visit_kt_fun / visit_declaration;
    KtConstructor : Declaration => visit_kt_constructor / visit_declaration;
    KtPrimaryConstructor : KtConstructor => visit_kt_primary_constructor / visit_kt_constructor;
    KtAssignmentStatement : Statement => visit_kt_assignment_statement / visit_statement;
    KtCall : Call => visit_kt_call / visit_call;
}

/// Iterator over a kind's strict ancestors, nearest first.
#[derive(Debug, Clone)]
pub struct Ancestors {
    next: Option<NodeKind>,
}

impl Iterator for Ancestors {
    type Item = NodeKind;

    fn next(&mut self) -> Option<NodeKind> {
        let kind = self.next?;
        self.next = kind.parent();
        Some(kind)
    }
}

impl NodeKind {
    pub fn is_root(self) -> bool {
        self.parent().is_none()
    }

    /// Strict ancestors of this kind, nearest first, ending at the root.
    pub fn ancestors(self) -> Ancestors {
        Ancestors {
            next: self.parent(),
        }
    }

    /// The sequence of kinds a dispatcher consults for a node of this kind:
    /// the kind itself, then its ancestors, nearest first.
    ///
    /// Recomputed from the parent table on every call; there is no cached
    /// state to diverge across runs.
    pub fn fallback_chain(self) -> SmallVec<[NodeKind; 8]> {
        let mut chain = SmallVec::new();
        chain.push(self);
        chain.extend(self.ancestors());
        chain
    }

    pub fn descends_from(self, ancestor: NodeKind) -> bool {
        self.ancestors().any(|kind| kind == ancestor)
    }
}

/// A malformed supertype table.
///
/// `parent()` is a closed match, so these cannot occur for the table compiled
/// into this crate; [`validate_hierarchy`] exists to keep the invariant
/// auditable rather than assumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HierarchyError {
    #[error("supertype chain starting at {0:?} contains a cycle")]
    Cycle(NodeKind),
    #[error("supertype chain starting at {0:?} ends at {1:?}, not at the root")]
    Unrooted(NodeKind, NodeKind),
}

/// Check that the supertype relation is acyclic and that every kind reaches
/// the single root, i.e. that fallback dispatch is total.
pub fn validate_hierarchy() -> Result<(), HierarchyError> {
    for &kind in NodeKind::ALL {
        let mut seen = HashSet::new();
        let mut current = kind;
        while let Some(parent) = current.parent() {
            if !seen.insert(current) {
                return Err(HierarchyError::Cycle(kind));
            }
            current = parent;
        }
        if current != NodeKind::Element {
            return Err(HierarchyError::Unrooted(kind, current));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Vec;
    use pretty_assertions::assert_eq;

    #[test]
    fn element_is_the_single_root() {
        assert_eq!(NodeKind::Element.parent(), None);
        for &kind in NodeKind::ALL {
            if kind != NodeKind::Element {
                assert!(kind.parent().is_some(), "{kind:?} has no parent");
            }
        }
    }

    #[test]
    fn every_kind_reaches_the_root() {
        for &kind in NodeKind::ALL {
            let chain = kind.fallback_chain();
            assert_eq!(*chain.last().unwrap(), NodeKind::Element);
            assert!(chain.len() <= NodeKind::ALL.len());
        }
    }

    #[test]
    fn hierarchy_validates() {
        assert_eq!(validate_hierarchy(), Ok(()));
    }

    #[test]
    fn all_kinds_are_distinct() {
        let unique: HashSet<NodeKind> = NodeKind::ALL.iter().copied().collect();
        assert_eq!(unique.len(), NodeKind::ALL.len());
    }

    #[test]
    fn dispatch_methods_are_distinct() {
        let unique: HashSet<&str> = NodeKind::ALL.iter().map(|k| k.method_name()).collect();
        assert_eq!(unique.len(), NodeKind::ALL.len());
    }

    /// The macro table spells the delegation target of every kind twice:
    /// once as the parent kind and once as the parent method. A mismatch
    /// would silently reroute the fallback chain, so hold them together.
    #[test]
    fn parent_edges_match_delegation_methods() {
        for &kind in NodeKind::ALL {
            let declared = kind.parent_method_name();
            let derived = kind.parent().map(|parent| parent.method_name());
            assert_eq!(declared, derived, "delegation mismatch for {kind:?}");
        }
    }

    #[test]
    fn fallback_chain_is_nearest_first() {
        let expected: &[NodeKind] = &[
            NodeKind::PrefixExpression,
            NodeKind::UnaryExpression,
            NodeKind::Expression,
            NodeKind::Statement,
            NodeKind::Element,
        ];
        assert_eq!(NodeKind::PrefixExpression.fallback_chain().as_slice(), expected);

        let expected: &[NodeKind] = &[
            NodeKind::KtPrimaryConstructor,
            NodeKind::KtConstructor,
            NodeKind::Declaration,
            NodeKind::Element,
        ];
        assert_eq!(NodeKind::KtPrimaryConstructor.fallback_chain().as_slice(), expected);

        let expected: &[NodeKind] = &[NodeKind::Element];
        assert_eq!(NodeKind::Element.fallback_chain().as_slice(), expected);
    }

    /// Rebuilding the resolved-method sequence twice yields identical
    /// results; the chain is pure table lookup, not hidden caching.
    #[test]
    fn fallback_wiring_is_idempotent() {
        for &kind in NodeKind::ALL {
            let first: Vec<&str> = kind
                .fallback_chain()
                .into_iter()
                .map(|k| k.method_name())
                .collect();
            let second: Vec<&str> = kind
                .fallback_chain()
                .into_iter()
                .map(|k| k.method_name())
                .collect();
            assert_eq!(first, second);
        }
    }

    #[test]
    fn descends_from_follows_the_table() {
        assert!(NodeKind::PrefixExpression.descends_from(NodeKind::Statement));
        assert!(NodeKind::JavaForLoop.descends_from(NodeKind::Loop));
        assert!(NodeKind::JavaCall.descends_from(NodeKind::Expression));
        assert!(!NodeKind::PrefixExpression.descends_from(NodeKind::Declaration));
        assert!(!NodeKind::Element.descends_from(NodeKind::Element));
    }
}
