//! Filepath: src/visitor.rs
//!
//! Classic visitor protocol: non-generic, dynamically dispatched.
//!
//! [`Visitor`] declares one method per node variant plus a generic
//! [`visit`](Visitor::visit) fallback. The default chain mirrors a classic
//! abstract-base-class visitor:
//!
//! - every arity method defaults to `self.visit(node)`,
//! - `visit` defaults to "visit each child of `node` through this visitor".
//!
//! Overriding a single arity method therefore customizes that arity only,
//! while overriding `visit` changes the fallback for every arity at once.
//!
//! This protocol is the virtual-dispatch half of the benchmark, so
//! [`TreeNode::accept`] and [`TreeNode::accept_children`] take
//! `&mut dyn Visitor` rather than a generic parameter: every per-node
//! dispatch is a vtable call, including the ones a default method makes when
//! it recurses into children. Trait-default bodies cannot coerce a generic
//! `&mut Self` to a trait object on their own, which is what
//! [`AsDynVisitor`] is for: it upcasts the receiver so the default chain
//! re-enters the traversal virtually instead of monomorphizing the rest of
//! the walk.

use crate::node::TreeNode;

/// Upcast a visitor to a trait object.
///
/// Blanket-implemented for every sized [`Visitor`]; exists so the trait's
/// default method bodies can hand `self` back to the dyn-dispatched
/// traversal entry points.
pub trait AsDynVisitor {
    /// View this visitor as a `dyn Visitor`.
    fn as_dyn(&mut self) -> &mut dyn Visitor;
}

impl<V: Visitor> AsDynVisitor for V {
    fn as_dyn(&mut self) -> &mut dyn Visitor {
        self
    }
}

/// Visitor over [`TreeNode`] with default traversal behavior.
///
/// Implementors override only the arity methods they care about; everything
/// else falls through to the children-visiting default.
pub trait Visitor: AsDynVisitor {
    /// Generic fallback: visit every child of `node`, in order, through this
    /// same visitor.
    fn visit(&mut self, node: &TreeNode) {
        node.accept_children(self.as_dyn());
    }

    /// Called for [`TreeNode::Leaf`]. Defaults to the generic fallback,
    /// which is a no-op for a leaf.
    fn visit_leaf(&mut self, node: &TreeNode) {
        self.visit(node);
    }

    /// Called for [`TreeNode::One`].
    fn visit_one(&mut self, node: &TreeNode) {
        self.visit(node);
    }

    /// Called for [`TreeNode::Two`].
    fn visit_two(&mut self, node: &TreeNode) {
        self.visit(node);
    }

    /// Called for [`TreeNode::Three`].
    fn visit_three(&mut self, node: &TreeNode) {
        self.visit(node);
    }

    /// Called for [`TreeNode::Four`].
    fn visit_four(&mut self, node: &TreeNode) {
        self.visit(node);
    }
}

impl TreeNode {
    /// Double dispatch: route `self` to the visitor method matching this
    /// node's variant.
    ///
    /// Takes a trait object on purpose; see the module docs.
    pub fn accept(&self, visitor: &mut dyn Visitor) {
        match self {
            Self::Leaf => visitor.visit_leaf(self),
            Self::One(..) => visitor.visit_one(self),
            Self::Two(..) => visitor.visit_two(self),
            Self::Three(..) => visitor.visit_three(self),
            Self::Four(..) => visitor.visit_four(self),
        }
    }

    /// Dispatch each child of `self`, in order, through `visitor`.
    ///
    /// This is the shared default-traversal step; a leaf has no children and
    /// dispatches nothing.
    pub fn accept_children(&self, visitor: &mut dyn Visitor) {
        match self {
            Self::Leaf => {}
            Self::One(a) => a.accept(visitor),
            Self::Two(a, b) => {
                a.accept(visitor);
                b.accept(visitor);
            }
            Self::Three(a, b, c) => {
                a.accept(visitor);
                b.accept(visitor);
                c.accept(visitor);
            }
            Self::Four(a, b, c, d) => {
                a.accept(visitor);
                b.accept(visitor);
                c.accept(visitor);
                d.accept(visitor);
            }
        }
    }
}
