use crate::ast::{Expr, NodeKind, Program, StmtSeq, TreeNode};
use crate::config::parser::MAX_NESTING_DEPTH;
use crate::errors::TinyError;
use crate::frontend::lexer::Lexer;
use crate::frontend::token::{Token, TokenKind};
use std::io::BufRead;

/// Result of a parse: the best-effort tree plus everything that went wrong,
/// in the order it was found.
#[derive(Debug)]
pub struct ParseOutput {
    pub program: Program,
    pub diagnostics: Vec<TinyError>,
    pub token_count: usize,
}

impl ParseOutput {
    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    /// Diagnostics rendered as their one-line messages.
    pub fn messages(&self) -> Vec<String> {
        self.diagnostics.iter().map(|d| d.to_string()).collect()
    }
}

/// Recursive-descent parser with a single token of lookahead.
///
/// Errors never abort the parse. A failed `expect` reports the lookahead and
/// leaves it in place for the next production to look at.
///
/// Nesting of `(`, `^`, `if` and `repeat` is capped at `MAX_NESTING_DEPTH`,
/// and so is the height of any expression tree.
pub struct Parser<R> {
    lexer: Lexer<R>,
    current_token: Token,
    diagnostics: Vec<TinyError>,
    token_count: usize,
    depth: usize,
}

impl<R: BufRead> Parser<R> {
    pub fn new(lexer: Lexer<R>) -> Self {
        let mut parser = Self {
            lexer,
            current_token: Token::end_of_file(0),
            diagnostics: Vec::new(),
            token_count: 0,
            depth: 0,
        };
        parser.next();
        parser
    }

    pub fn parse(mut self) -> ParseOutput {
        let program = self.program();
        ParseOutput {
            program,
            diagnostics: self.diagnostics,
            token_count: self.token_count,
        }
    }

    fn next(&mut self) {
        loop {
            let result = self.lexer.next_token();
            self.diagnostics.extend(self.lexer.take_errors());
            match result {
                Ok(token) => {
                    if !token.is(TokenKind::EndOfFile) {
                        self.token_count += 1;
                    }
                    self.current_token = token;
                    return;
                }
                // The lexer has moved past the bad input; record and fetch again.
                Err(err) => self.diagnostics.push(err),
            }
        }
    }

    fn expect(&mut self, expected: TokenKind) -> bool {
        if self.current_token.is(expected) {
            self.next();
            return true;
        }
        self.diagnostics.push(TinyError::UnexpectedToken {
            token: self.current_token.text.clone(),
            line: self.current_token.line,
        });
        false
    }

    fn enter(&mut self) -> bool {
        if self.depth >= MAX_NESTING_DEPTH {
            self.diagnostics.push(TinyError::NestingTooDeep {
                line: self.current_token.line,
            });
            return false;
        }
        self.depth += 1;
        true
    }

    fn leave(&mut self) {
        self.depth -= 1;
    }

    // Returns None only when the new node would be taller than allowed.
    fn combine(&mut self, op: TokenKind, left: Expr, right: Expr, line: usize) -> Expr {
        let node = TreeNode::operator(op, left, right, line);
        if node.height > MAX_NESTING_DEPTH {
            self.diagnostics.push(TinyError::NestingTooDeep { line });
            return None;
        }
        Some(Box::new(node))
    }

    fn take_operator(&mut self) -> (TokenKind, usize) {
        let op = (self.current_token.kind, self.current_token.line);
        self.next();
        op
    }

    fn expect_identifier(&mut self) -> String {
        let name = if self.current_token.is(TokenKind::Id) {
            self.current_token.text.clone()
        } else {
            String::new()
        };
        self.expect(TokenKind::Id);
        name
    }

    // program -> stmtSeq
    fn program(&mut self) -> Program {
        if self.current_token.is(TokenKind::EndOfFile) {
            return Program::default();
        }
        let statements = self.statement_sequence();
        self.expect(TokenKind::EndOfFile);
        Program::new(statements)
    }

    // stmtSeq -> stmt { ";" stmt }
    fn statement_sequence(&mut self) -> StmtSeq {
        let mut stmts = Vec::new();
        stmts.extend(self.statement());
        while self.current_token.is(TokenKind::SemiColon) {
            self.expect(TokenKind::SemiColon);
            stmts.extend(self.statement());
        }
        stmts
    }

    fn statement(&mut self) -> Option<TreeNode> {
        match self.current_token.kind {
            TokenKind::If | TokenKind::Repeat => {
                if !self.enter() {
                    return None;
                }
                let node = if self.current_token.is(TokenKind::If) {
                    self.if_statement()
                } else {
                    self.repeat_statement()
                };
                self.leave();
                Some(node)
            }
            TokenKind::Id => Some(self.assign_statement()),
            TokenKind::Read => Some(self.read_statement()),
            TokenKind::Write => Some(self.write_statement()),
            _ => {
                self.diagnostics.push(TinyError::UnexpectedStatement {
                    line: self.current_token.line,
                });
                None
            }
        }
    }

    // ifStmt -> "if" expr "then" stmtSeq [ "else" stmtSeq ] "end"
    fn if_statement(&mut self) -> TreeNode {
        let line = self.current_token.line;
        self.expect(TokenKind::If);
        let condition = self.expression();
        self.expect(TokenKind::Then);
        let then_branch = self.statement_sequence();
        let else_branch = if self.current_token.is(TokenKind::Else) {
            self.expect(TokenKind::Else);
            Some(self.statement_sequence())
        } else {
            None
        };
        self.expect(TokenKind::End);
        TreeNode::new(
            NodeKind::If {
                condition,
                then_branch,
                else_branch,
            },
            line,
        )
    }

    // repeatStmt -> "repeat" stmtSeq "until" expr
    fn repeat_statement(&mut self) -> TreeNode {
        let line = self.current_token.line;
        self.expect(TokenKind::Repeat);
        let body = self.statement_sequence();
        self.expect(TokenKind::Until);
        let condition = self.expression();
        TreeNode::new(NodeKind::Repeat { body, condition }, line)
    }

    // assignStmt -> ident ":=" expr
    fn assign_statement(&mut self) -> TreeNode {
        let line = self.current_token.line;
        let name = self.expect_identifier();
        self.expect(TokenKind::Assign);
        let value = self.expression();
        TreeNode::new(NodeKind::Assign { name, value }, line)
    }

    // readStmt -> "read" ident
    fn read_statement(&mut self) -> TreeNode {
        let line = self.current_token.line;
        self.expect(TokenKind::Read);
        let name = self.expect_identifier();
        TreeNode::new(NodeKind::Read { name }, line)
    }

    // writeStmt -> "write" expr
    fn write_statement(&mut self) -> TreeNode {
        let line = self.current_token.line;
        self.expect(TokenKind::Write);
        let value = self.expression();
        TreeNode::new(NodeKind::Write { value }, line)
    }

    // expr -> mathExpr [ ( "<" | "=" ) mathExpr ]
    fn expression(&mut self) -> Expr {
        let left = self.math_expression();
        if self.current_token.kind.is_comparison() {
            let (op, line) = self.take_operator();
            let right = self.math_expression();
            return self.combine(op, left, right, line);
        }
        left
    }

    // mathExpr -> term { ( "+" | "-" ) term }
    fn math_expression(&mut self) -> Expr {
        let mut lhs = self.term();
        while matches!(self.current_token.kind, TokenKind::Plus | TokenKind::Minus) {
            let (op, line) = self.take_operator();
            let rhs = self.term();
            lhs = self.combine(op, lhs, rhs, line);
            if lhs.is_none() {
                break;
            }
        }
        lhs
    }

    // term -> factor { ( "*" | "/" ) factor }
    fn term(&mut self) -> Expr {
        let mut lhs = self.factor();
        while matches!(self.current_token.kind, TokenKind::Times | TokenKind::Divide) {
            let (op, line) = self.take_operator();
            let rhs = self.factor();
            lhs = self.combine(op, lhs, rhs, line);
            if lhs.is_none() {
                break;
            }
        }
        lhs
    }

    // factor -> newExpr [ "^" factor ], so a^b^c groups as a^(b^c)
    fn factor(&mut self) -> Expr {
        let base = self.new_expression();
        if self.current_token.is(TokenKind::Power) && self.enter() {
            let (op, line) = self.take_operator();
            let exponent = self.factor();
            self.leave();
            return self.combine(op, base, exponent, line);
        }
        base
    }

    // newExpr -> "(" mathExpr ")" | number | ident
    fn new_expression(&mut self) -> Expr {
        let line = self.current_token.line;
        match self.current_token.kind {
            TokenKind::LeftParen => {
                if !self.enter() {
                    return None;
                }
                self.expect(TokenKind::LeftParen);
                let inner = self.math_expression();
                self.expect(TokenKind::RightParen);
                self.leave();
                inner
            }
            TokenKind::Number => {
                let text = self.current_token.text.clone();
                self.expect(TokenKind::Number);
                match text.parse::<i64>() {
                    Ok(value) => Some(Box::new(TreeNode::number(value, line))),
                    Err(_) => {
                        self.diagnostics.push(TinyError::InvalidNumber { number: text, line });
                        None
                    }
                }
            }
            TokenKind::Id => {
                let name = self.expect_identifier();
                Some(Box::new(TreeNode::identifier(name, line)))
            }
            _ => {
                self.diagnostics.push(TinyError::UnexpectedExpression { line });
                None
            }
        }
    }
}

// Convenience functions over the common input shapes
pub fn parse_reader<R: BufRead>(reader: R) -> ParseOutput {
    Parser::new(Lexer::new(reader)).parse()
}

pub fn parse_source(source: &str) -> ParseOutput {
    parse_reader(source.as_bytes())
}
