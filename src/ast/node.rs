use crate::frontend::token::TokenKind;
use std::fmt;

/// A block of statements in program order.
pub type StmtSeq = Vec<TreeNode>;

/// Child expression slot; absent when the parser reported an error there.
pub type Expr = Option<Box<TreeNode>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExprType {
    Void,
    Integer,
    Boolean,
}

impl fmt::Display for ExprType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ExprType::Void => "Void",
            ExprType::Integer => "Integer",
            ExprType::Boolean => "Boolean",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    If {
        condition: Expr,
        then_branch: StmtSeq,
        else_branch: Option<StmtSeq>,
    },
    Repeat {
        body: StmtSeq,
        condition: Expr,
    },
    Assign {
        name: String,
        value: Expr,
    },
    Read {
        name: String,
    },
    Write {
        value: Expr,
    },
    Operator {
        op: TokenKind,
        left: Expr,
        right: Expr,
    },
    Number(i64),
    Identifier(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct TreeNode {
    pub kind: NodeKind,
    pub expr_type: ExprType,
    pub line: usize,
    /// Levels in this subtree, 1 for a leaf.
    pub height: usize,
}

impl TreeNode {
    pub fn new(kind: NodeKind, line: usize) -> Self {
        let expr_type = match &kind {
            NodeKind::Operator { op, .. } if op.is_comparison() => ExprType::Boolean,
            NodeKind::Operator { .. } | NodeKind::Number(_) | NodeKind::Identifier(_) => {
                ExprType::Integer
            }
            _ => ExprType::Void,
        };
        let mut node = Self {
            kind,
            expr_type,
            line,
            height: 1,
        };
        let tallest_child = node.children().iter().map(|c| c.height).max().unwrap_or(0);
        node.height = tallest_child + 1;
        node
    }

    pub fn number(value: i64, line: usize) -> Self {
        Self::new(NodeKind::Number(value), line)
    }

    pub fn identifier(name: impl Into<String>, line: usize) -> Self {
        Self::new(NodeKind::Identifier(name.into()), line)
    }

    pub fn operator(op: TokenKind, left: Expr, right: Expr, line: usize) -> Self {
        Self::new(NodeKind::Operator { op, left, right }, line)
    }

    pub fn kind_name(&self) -> &'static str {
        match self.kind {
            NodeKind::If { .. } => "If",
            NodeKind::Repeat { .. } => "Repeat",
            NodeKind::Assign { .. } => "Assign",
            NodeKind::Read { .. } => "Read",
            NodeKind::Write { .. } => "Write",
            NodeKind::Operator { .. } => "Oper",
            NodeKind::Number(_) => "Num",
            NodeKind::Identifier(_) => "ID",
        }
    }

    /// Present children in slot order. Statement blocks contribute each of
    /// their statements in sequence.
    pub fn children(&self) -> Vec<&TreeNode> {
        let mut children = Vec::new();
        match &self.kind {
            NodeKind::If {
                condition,
                then_branch,
                else_branch,
            } => {
                children.extend(condition.as_deref());
                children.extend(then_branch);
                if let Some(else_branch) = else_branch {
                    children.extend(else_branch);
                }
            }
            NodeKind::Repeat { body, condition } => {
                children.extend(body);
                children.extend(condition.as_deref());
            }
            NodeKind::Assign { value, .. } | NodeKind::Write { value } => {
                children.extend(value.as_deref());
            }
            NodeKind::Operator { left, right, .. } => {
                children.extend(left.as_deref());
                children.extend(right.as_deref());
            }
            NodeKind::Read { .. } | NodeKind::Number(_) | NodeKind::Identifier(_) => {}
        }
        children
    }
}
