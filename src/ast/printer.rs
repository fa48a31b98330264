use crate::ast::node::{ExprType, NodeKind, TreeNode};
use crate::ast::program::Program;
use crate::ast::visitor::{walk_program, AstVisitor};
use crate::config::printer::INDENT_WIDTH;

/// Renders a tree as one line per node:
///
/// ```text
/// [Read][x]
/// [If]
///    [Oper][LessThan][Boolean]
///       [Num][0][Integer]
///       [ID][x][Integer]
///    [Write]
///       [ID][x][Integer]
/// ```
#[derive(Debug, Default)]
pub struct TreePrinter {
    output: String,
}

impl TreePrinter {
    pub fn render(program: &Program) -> String {
        let mut printer = TreePrinter::default();
        walk_program(&mut printer, program);
        printer.output
    }
}

impl AstVisitor for TreePrinter {
    fn visit_node(&mut self, node: &TreeNode, depth: usize) {
        self.output.push_str(&" ".repeat(depth * INDENT_WIDTH));
        self.output.push_str(&format!("[{}]", node.kind_name()));

        match &node.kind {
            NodeKind::Operator { op, .. } => self.output.push_str(&format!("[{}]", op)),
            NodeKind::Number(value) => self.output.push_str(&format!("[{}]", value)),
            NodeKind::Identifier(name) | NodeKind::Read { name } | NodeKind::Assign { name, .. } => {
                self.output.push_str(&format!("[{}]", name))
            }
            _ => {}
        }

        if node.expr_type != ExprType::Void {
            self.output.push_str(&format!("[{}]", node.expr_type));
        }
        self.output.push('\n');
    }
}
