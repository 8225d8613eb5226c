use std::io;
use std::str::FromStr;

use log::debug;

use crate::error::{Error, ExpressionError};
use crate::node::Node;
use crate::postfix::to_postfix;
use crate::tree;

/// Parses an infix expression into an executable tree
pub fn parse(infix: &str) -> Result<Expression, Error> {
    let postfix = to_postfix(infix)?;
    let expression = Expression::from_postfix(&postfix)?;
    debug!("Parsed \"{}\"", infix);
    Ok(expression)
}

/// An owning handle around zero or one expression tree
///
/// Cloning deep copies the tree, so variables assigned while evaluating one
/// copy are not seen by the other. Moving out with `std::mem::take` leaves an
/// empty expression behind.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Expression {
    root: Option<Node>,
}

impl Expression {
    pub fn new() -> Expression {
        Default::default()
    }

    pub fn from_postfix(postfix: &str) -> Result<Expression, ExpressionError> {
        Ok(Expression {
            root: Some(tree::build(postfix)?),
        })
    }

    pub fn root(&self) -> Option<&Node> {
        self.root.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn clear(&mut self) {
        self.root = None;
    }

    pub fn evaluate(&mut self) -> Result<f64, ExpressionError> {
        self.root
            .as_mut()
            .ok_or(ExpressionError::EmptyExpression("evaluate"))?
            .evaluate()
    }

    pub fn to_postfix(&self) -> Result<String, ExpressionError> {
        Ok(self.non_empty("get postfix of")?.to_postfix())
    }

    pub fn to_infix(&self) -> Result<String, ExpressionError> {
        Ok(self.non_empty("get infix of")?.to_infix())
    }

    pub fn render_tree(&self) -> Result<String, ExpressionError> {
        let root = self.non_empty("print")?;
        let mut out = String::new();
        root.render(&mut out, 0)?;
        Ok(out)
    }

    pub fn print_tree<W: io::Write>(&self, out: &mut W) -> Result<(), ExpressionError> {
        let rendered = self.render_tree()?;
        out.write_all(rendered.as_bytes())?;
        Ok(())
    }

    fn non_empty(&self, operation: &'static str) -> Result<&Node, ExpressionError> {
        self.root
            .as_ref()
            .ok_or(ExpressionError::EmptyExpression(operation))
    }
}

impl FromStr for Expression {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}
