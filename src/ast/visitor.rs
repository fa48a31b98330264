use crate::ast::node::TreeNode;
use crate::ast::program::Program;

/// Pre-order traversal hook. `depth` is 0 for top-level statements and grows
/// by one for every level of children.
pub trait AstVisitor {
    fn visit_node(&mut self, node: &TreeNode, depth: usize);
}

pub fn walk_program<V: AstVisitor + ?Sized>(visitor: &mut V, program: &Program) {
    for stmt in program.iter() {
        walk_node(visitor, stmt, 0);
    }
}

pub fn walk_node<V: AstVisitor + ?Sized>(visitor: &mut V, node: &TreeNode, depth: usize) {
    visitor.visit_node(node, depth);
    for child in node.children() {
        walk_node(visitor, child, depth + 1);
    }
}

/// Counts every node in a tree.
#[derive(Debug, Default)]
pub struct NodeCounter {
    pub nodes: usize,
}

impl NodeCounter {
    pub fn count(program: &Program) -> usize {
        let mut counter = NodeCounter::default();
        walk_program(&mut counter, program);
        counter.nodes
    }
}

impl AstVisitor for NodeCounter {
    fn visit_node(&mut self, _node: &TreeNode, _depth: usize) {
        self.nodes += 1;
    }
}
