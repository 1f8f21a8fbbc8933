//! Filepath: src/data_visitor.rs
//!
//! Generic visitor protocol: payload-threading, statically dispatched.
//!
//! [`DataVisitor`] has the same dispatch shape as [`Visitor`](crate::visitor::Visitor)
//! but every method additionally threads an opaque `&T` payload down the
//! recursion. The protocol itself never reads or mutates the payload; it only
//! hands the same reference to every nested call, so overrides can consume it.
//!
//! [`UnitVisitor`] is the no-payload specialization: it fixes `T = ()` and
//! exposes payload-free methods. The blanket `DataVisitor<()>` impl routes
//! every payload-carrying method to its payload-free counterpart, so a
//! `UnitVisitor` can be driven through the generic machinery unchanged.
//!
//! Unlike the classic protocol this one is deliberately not driven through a
//! trait object in the workload: `accept_with` monomorphizes per visitor
//! type, which is the dispatch style under measurement.

use crate::node::TreeNode;

/// Visitor over [`TreeNode`] threading a read-only payload of type `T`.
///
/// Default behavior matches the classic protocol: arity methods fall through
/// to the generic [`visit`](Self::visit), which visits children in order,
/// passing `data` along untouched.
pub trait DataVisitor<T> {
    /// Generic fallback: visit every child of `node`, in order, with the
    /// same payload.
    fn visit(&mut self, node: &TreeNode, data: &T) {
        node.accept_children_with(self, data);
    }

    /// Called for [`TreeNode::Leaf`].
    fn visit_leaf(&mut self, node: &TreeNode, data: &T) {
        self.visit(node, data);
    }

    /// Called for [`TreeNode::One`].
    fn visit_one(&mut self, node: &TreeNode, data: &T) {
        self.visit(node, data);
    }

    /// Called for [`TreeNode::Two`].
    fn visit_two(&mut self, node: &TreeNode, data: &T) {
        self.visit(node, data);
    }

    /// Called for [`TreeNode::Three`].
    fn visit_three(&mut self, node: &TreeNode, data: &T) {
        self.visit(node, data);
    }

    /// Called for [`TreeNode::Four`].
    fn visit_four(&mut self, node: &TreeNode, data: &T) {
        self.visit(node, data);
    }
}

/// No-payload specialization of [`DataVisitor`].
///
/// Implement this when the traversal needs no threaded data; the blanket
/// impl below makes every `UnitVisitor` a `DataVisitor<()>`, with the
/// payload-carrying methods forwarding to these payload-free ones.
pub trait UnitVisitor {
    /// Generic fallback: visit every child of `node` in order.
    fn visit(&mut self, node: &TreeNode) {
        node.accept_children_with(self, &());
    }

    /// Called for [`TreeNode::Leaf`].
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

impl<U: UnitVisitor + ?Sized> DataVisitor<()> for U {
    fn visit(&mut self, node: &TreeNode, _: &()) {
        UnitVisitor::visit(self, node);
    }

    fn visit_leaf(&mut self, node: &TreeNode, _: &()) {
        UnitVisitor::visit_leaf(self, node);
    }

    fn visit_one(&mut self, node: &TreeNode, _: &()) {
        UnitVisitor::visit_one(self, node);
    }

    fn visit_two(&mut self, node: &TreeNode, _: &()) {
        UnitVisitor::visit_two(self, node);
    }

    fn visit_three(&mut self, node: &TreeNode, _: &()) {
        UnitVisitor::visit_three(self, node);
    }

    fn visit_four(&mut self, node: &TreeNode, _: &()) {
        UnitVisitor::visit_four(self, node);
    }
}

impl TreeNode {
    /// Double dispatch with payload: route `self` to the visitor method
    /// matching this node's variant, threading `data` through.
    pub fn accept_with<T, V: DataVisitor<T> + ?Sized>(&self, visitor: &mut V, data: &T) {
        match self {
            Self::Leaf => visitor.visit_leaf(self, data),
            Self::One(..) => visitor.visit_one(self, data),
            Self::Two(..) => visitor.visit_two(self, data),
            Self::Three(..) => visitor.visit_three(self, data),
            Self::Four(..) => visitor.visit_four(self, data),
        }
    }

    /// Dispatch each child of `self`, in order, through `visitor` with the
    /// same payload.
    pub fn accept_children_with<T, V: DataVisitor<T> + ?Sized>(&self, visitor: &mut V, data: &T) {
        match self {
            Self::Leaf => {}
            Self::One(a) => a.accept_with(visitor, data),
            Self::Two(a, b) => {
                a.accept_with(visitor, data);
                b.accept_with(visitor, data);
            }
            Self::Three(a, b, c) => {
                a.accept_with(visitor, data);
                b.accept_with(visitor, data);
                c.accept_with(visitor, data);
            }
            Self::Four(a, b, c, d) => {
                a.accept_with(visitor, data);
                b.accept_with(visitor, data);
                c.accept_with(visitor, data);
                d.accept_with(visitor, data);
            }
        }
    }
}
