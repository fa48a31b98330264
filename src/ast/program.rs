use crate::ast::node::{StmtSeq, TreeNode};

/// Root of a parsed TINY program: its top-level statement sequence.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Program {
    pub statements: StmtSeq,
}

impl Program {
    pub fn new(statements: StmtSeq) -> Self {
        Self { statements }
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TreeNode> {
        self.statements.iter()
    }
}
