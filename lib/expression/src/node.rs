use std::borrow::Cow;
use std::fmt;

use crate::error::ExpressionError;
use crate::operator::Operator;

/// Columns added per level of depth when rendering a tree
pub const INDENT: usize = 3;

#[derive(Debug, Clone, PartialEq)]
pub struct Variable {
    name: String,
    value: f64,
}

impl Variable {
    pub fn new(name: &str) -> Variable {
        Variable {
            name: name.to_string(),
            value: 0.0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn set_value(&mut self, value: f64) {
        self.value = value
    }
}

/// A node of an expression tree
///
/// Every node exclusively owns its children, so cloning a node deep copies the
/// whole subtree and dropping it releases the subtree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Integer(i32),
    Real(f64),
    Variable(Variable),
    Binary(Operator, Box<Node>, Box<Node>),
}

impl Node {
    pub fn binary(op: Operator, left: Node, right: Node) -> Node {
        Node::Binary(op, Box::new(left), Box::new(right))
    }

    pub fn is_binary(&self) -> bool {
        matches!(self, Node::Binary(..))
    }

    /// Evaluates the subtree, storing the result of any assignment in its variable
    pub fn evaluate(&mut self) -> Result<f64, ExpressionError> {
        match self {
            Node::Integer(value) => Ok(f64::from(*value)),
            Node::Real(value) => Ok(*value),
            Node::Variable(variable) => Ok(variable.value),
            Node::Binary(Operator::Assign, target, value) => match target.as_mut() {
                Node::Variable(variable) => {
                    variable.set_value(value.evaluate()?);
                    Ok(variable.value())
                }
                _ => Err(ExpressionError::AssignToNonVariable),
            },
            Node::Binary(op, left, right) => {
                let left = left.evaluate()?;
                let right = right.evaluate()?;
                match op {
                    Operator::Plus => Ok(left + right),
                    Operator::Minus => Ok(left - right),
                    Operator::Times => Ok(left * right),
                    Operator::Divide if right == 0.0 => Err(ExpressionError::DivisionByZero),
                    Operator::Divide => Ok(left / right),
                    Operator::Power => Ok(left.powf(right)),
                    Operator::Assign => unreachable!("assignment is matched above"),
                }
            }
        }
    }

    /// The textual form of this node alone
    pub fn symbol(&self) -> Cow<'_, str> {
        match self {
            Node::Integer(value) => Cow::Owned(value.to_string()),
            Node::Real(value) => Cow::Owned(format_real(*value)),
            Node::Variable(variable) => Cow::Borrowed(variable.name()),
            Node::Binary(op, _, _) => Cow::Borrowed(op.symbol()),
        }
    }

    pub fn to_postfix(&self) -> String {
        match self {
            Node::Binary(op, left, right) => format!(
                "{} {} {}",
                left.to_postfix(),
                right.to_postfix(),
                op.symbol()
            ),
            leaf => leaf.symbol().into_owned(),
        }
    }

    /// Only operands that are themselves operators get parentheses, the result is
    /// not minimal but always re-parses to the same tree
    pub fn to_infix(&self) -> String {
        match self {
            Node::Binary(Operator::Assign, target, value) => {
                format!("{} = {}", target.to_infix(), value.to_infix())
            }
            Node::Binary(op, left, right) => format!(
                "{} {} {}",
                left.parenthesized(),
                op.symbol(),
                right.parenthesized()
            ),
            leaf => leaf.symbol().into_owned(),
        }
    }

    fn parenthesized(&self) -> String {
        if self.is_binary() {
            format!("({})", self.to_infix())
        } else {
            self.to_infix()
        }
    }

    /// Draws the subtree rotated a quarter turn, right operands above their
    /// operator and left operands below
    pub fn render<W: fmt::Write>(&self, out: &mut W, width: usize) -> fmt::Result {
        match self {
            Node::Binary(op, left, right) => {
                right.render(out, width + INDENT)?;
                writeln!(out, "{:>w$}", '/', w = width + 2)?;
                writeln!(out, "{:>w$}", op.symbol(), w = width + 1)?;
                writeln!(out, "{:>w$}", '\\', w = width + 2)?;
                left.render(out, width + INDENT)
            }
            leaf => writeln!(out, "{:>w$}{}", "", leaf.symbol(), w = width.max(2) - 1),
        }
    }
}

fn format_real(value: f64) -> String {
    let text = value.to_string();
    if text.contains('.') || !value.is_finite() {
        text
    } else {
        text + ".0"
    }
}
