/*
*                    tinyc -- TINY language front end.
*
* program    -> stmtSeq
* stmtSeq    -> stmt { ";" stmt }
* stmt       -> ifStmt | repeatStmt | assignStmt | readStmt | writeStmt
* ifStmt     -> "if" expr "then" stmtSeq [ "else" stmtSeq ] "end"
* repeatStmt -> "repeat" stmtSeq "until" expr
* assignStmt -> ident ":=" expr
* readStmt   -> "read" ident
* writeStmt  -> "write" expr
* expr       -> mathExpr [ ( "<" | "=" ) mathExpr ]
* mathExpr   -> term { ( "+" | "-" ) term }
* term       -> factor { ( "*" | "/" ) factor }
* factor     -> newExpr { "^" newExpr }
* newExpr    -> "(" mathExpr ")" | number | ident
*/

mod node;
mod printer;
mod program;
mod visitor;

pub use node::{Expr, ExprType, NodeKind, StmtSeq, TreeNode};
pub use printer::TreePrinter;
pub use program::Program;
pub use visitor::{walk_node, walk_program, AstVisitor, NodeCounter};
