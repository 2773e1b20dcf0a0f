//! Math-mode expression trees.
//!
//! Expressions render as a flat left-to-right concatenation that follows the
//! tree shape exactly. No parentheses are ever inserted, so
//! `add(atom("1"), mul(atom("2"), atom("3")))` renders as `1 + 2 \cdot 3`
//! and `mul(add(..), ..)` renders the same way.

use std::fmt;
use std::ops;

use serde::{Deserialize, Serialize};

use crate::Latex;
use crate::escape::push_escaped;

/// Infix operators. Division is special-cased to `\frac{..}{..}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinaryOp {
    /// The inline operator symbol, or `None` for operators rendered as a command.
    pub fn symbol(self) -> Option<&'static str> {
        match self {
            BinaryOp::Add => Some("+"),
            BinaryOp::Sub => Some("-"),
            BinaryOp::Mul => Some("\\cdot"),
            BinaryOp::Div => None,
        }
    }
}

/// Single-argument operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnaryOp {
    Sqrt,
}

impl UnaryOp {
    pub fn command(self) -> &'static str {
        match self {
            UnaryOp::Sqrt => "sqrt",
        }
    }
}

/// A node of a math expression tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Expression {
    /// A literal operand, escaped on render.
    Atom { text: String },
    Binary {
        op: BinaryOp,
        left: Box<Expression>,
        right: Box<Expression>,
    },
    Unary {
        op: UnaryOp,
        operand: Box<Expression>,
    },
}

impl Expression {
    /// Wraps `self` in a square root.
    pub fn sqrt(self) -> Expression {
        sqrt_of(self)
    }
}

impl Latex for Expression {
    fn write_latex(&self, out: &mut String) {
        match self {
            Expression::Atom { text } => push_escaped(out, text),
            Expression::Binary { op, left, right } => match op.symbol() {
                Some(symbol) => {
                    left.write_latex(out);
                    out.push(' ');
                    out.push_str(symbol);
                    out.push(' ');
                    right.write_latex(out);
                }
                None => {
                    out.push_str("\\frac{");
                    left.write_latex(out);
                    out.push_str("}{");
                    right.write_latex(out);
                    out.push('}');
                }
            },
            Expression::Unary { op, operand } => {
                out.push('\\');
                out.push_str(op.command());
                out.push('{');
                operand.write_latex(out);
                out.push('}');
            }
        }
    }
}

/// A literal operand.
pub fn atom(text: impl Into<String>) -> Expression {
    Expression::Atom { text: text.into() }
}

/// A numeric literal, rendered with its `Display` form.
pub fn number<N: fmt::Display>(value: N) -> Expression {
    atom(value.to_string())
}

fn binary(op: BinaryOp, left: Expression, right: Expression) -> Expression {
    Expression::Binary {
        op,
        left: Box::new(left),
        right: Box::new(right),
    }
}

pub fn add(left: Expression, right: Expression) -> Expression {
    binary(BinaryOp::Add, left, right)
}

pub fn sub(left: Expression, right: Expression) -> Expression {
    binary(BinaryOp::Sub, left, right)
}

pub fn mul(left: Expression, right: Expression) -> Expression {
    binary(BinaryOp::Mul, left, right)
}

/// Renders as `\frac{left}{right}` regardless of operand complexity.
pub fn divide(left: Expression, right: Expression) -> Expression {
    binary(BinaryOp::Div, left, right)
}

pub fn sqrt_of(operand: Expression) -> Expression {
    Expression::Unary {
        op: UnaryOp::Sqrt,
        operand: Box::new(operand),
    }
}

impl ops::Add for Expression {
    type Output = Expression;

    fn add(self, rhs: Expression) -> Expression {
        add(self, rhs)
    }
}

impl ops::Sub for Expression {
    type Output = Expression;

    fn sub(self, rhs: Expression) -> Expression {
        sub(self, rhs)
    }
}

impl ops::Mul for Expression {
    type Output = Expression;

    fn mul(self, rhs: Expression) -> Expression {
        mul(self, rhs)
    }
}

impl ops::Div for Expression {
    type Output = Expression;

    fn div(self, rhs: Expression) -> Expression {
        divide(self, rhs)
    }
}

impl From<&str> for Expression {
    fn from(text: &str) -> Self {
        atom(text)
    }
}

impl From<String> for Expression {
    fn from(text: String) -> Self {
        atom(text)
    }
}
