use log::{debug, trace};

use crate::error::ExpressionError;
use crate::node::{Node, Variable};
use crate::operator::Operator;
use crate::token::OperandKind;

/// Builds an expression tree from a space separated postfix expression
///
/// Nodes built before a failure are owned by the local stack and are dropped
/// with it when the error is returned.
pub fn build(postfix: &str) -> Result<Node, ExpressionError> {
    let mut stack: Vec<Node> = Vec::new();

    for token in postfix.split_whitespace() {
        match token.parse::<Operator>() {
            Ok(op) => {
                let right = stack.pop().ok_or_else(|| missing_operand(op))?;
                let left = stack.pop().ok_or_else(|| missing_operand(op))?;
                trace!("Applying {:?} to {:?} and {:?}", op, left, right);
                stack.push(Node::binary(op, left, right));
            }
            Err(_) => stack.push(leaf(token)?),
        }
    }

    let root = stack
        .pop()
        .ok_or_else(|| ExpressionError::MalformedPostfix("no operands".to_string()))?;

    if !stack.is_empty() {
        return Err(ExpressionError::MalformedPostfix(format!(
            "{} operands left over",
            stack.len()
        )));
    }

    debug!("Built tree for \"{}\"", postfix);
    Ok(root)
}

fn missing_operand(op: Operator) -> ExpressionError {
    ExpressionError::MalformedPostfix(format!("missing operand for \"{}\"", op.symbol()))
}

fn leaf(token: &str) -> Result<Node, ExpressionError> {
    let invalid = |detail: String| {
        ExpressionError::MalformedPostfix(format!("invalid operand \"{}\": {}", token, detail))
    };

    match OperandKind::of(token) {
        Some(OperandKind::Integer) => token
            .parse()
            .map(Node::Integer)
            .map_err(|e| invalid(e.to_string())),
        Some(OperandKind::Real) => token
            .parse()
            .map(Node::Real)
            .map_err(|e| invalid(e.to_string())),
        Some(OperandKind::Identifier) => Ok(Node::Variable(Variable::new(token))),
        None => Err(invalid("not a number or a name".to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expect_malformed(postfix: &str) {
        match build(postfix) {
            Err(ExpressionError::MalformedPostfix(_)) => (),
            r => panic!("{}: {:?}", postfix, r),
        }
    }

    #[test]
    fn test_build() -> Result<(), Box<dyn std::error::Error>> {
        let tree = build("2 3.5 x * +")?;
        assert_eq!(
            tree,
            Node::binary(
                Operator::Plus,
                Node::Integer(2),
                Node::binary(
                    Operator::Times,
                    Node::Real(3.5),
                    Node::Variable(Variable::new("x"))
                ),
            )
        );
        Ok(())
    }

    #[test]
    fn test_operand_order() -> Result<(), Box<dyn std::error::Error>> {
        // The first operand popped is the right hand side
        let tree = build("7 2 -")?;
        assert_eq!(
            tree,
            Node::binary(Operator::Minus, Node::Integer(7), Node::Integer(2))
        );
        Ok(())
    }

    #[test]
    fn test_single_operand() -> Result<(), Box<dyn std::error::Error>> {
        assert_eq!(build("42")?, Node::Integer(42));
        assert_eq!(build(".25")?, Node::Real(0.25));
        assert_eq!(build("abc")?, Node::Variable(Variable::new("abc")));
        Ok(())
    }

    #[test]
    fn test_malformed() {
        expect_malformed("");
        expect_malformed("+");
        expect_malformed("1 +");
        expect_malformed("1 2");
        expect_malformed("1 2 3 +");
        expect_malformed("x1");
        expect_malformed("1 2.3.4 +");
        expect_malformed("2147483648");
    }

    #[test]
    fn test_integer_bounds() -> Result<(), Box<dyn std::error::Error>> {
        assert_eq!(build("2147483647")?, Node::Integer(i32::MAX));
        Ok(())
    }
}
