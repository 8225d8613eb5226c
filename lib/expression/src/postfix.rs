use itertools::Itertools;
use log::{debug, trace};

use crate::error::ParseError;
use crate::operator::Operator;
use crate::token::{format_infix, Token};

#[derive(Debug, Clone, Copy, PartialEq)]
enum Stacked {
    Operator(Operator),
    LeftParen,
}

/// Converts an infix expression to a space separated postfix expression using
/// the shunting-yard algorithm, rejecting anything that isn't well formed
pub fn to_postfix(infix: &str) -> Result<String, ParseError> {
    let formatted = format_infix(infix);
    trace!("Formatted \"{}\" as \"{}\"", infix, formatted);

    let mut operator_stack: Vec<Stacked> = Vec::new();
    let mut postfix: Vec<&str> = Vec::new();
    let mut previous: Option<Token<'_>> = None;
    let mut last_was_operand = false;
    let mut assignment = false;
    let mut paren_count = 0_usize;

    for text in formatted.split_whitespace() {
        let token =
            Token::classify(text).ok_or_else(|| ParseError::InvalidSymbol(text.to_string()))?;
        trace!("Token {:?}, operator stack {:?}", token, operator_stack);

        match token {
            Token::Operator(op) => {
                if !last_was_operand || postfix.is_empty() || previous == Some(Token::LeftParen)
                {
                    return Err(ParseError::UnexpectedOperator);
                }

                if op == Operator::Assign {
                    if assignment {
                        return Err(ParseError::MultipleAssignment);
                    }
                    assignment = true;
                }

                while let Some(Stacked::Operator(top)) = operator_stack.last() {
                    if op.input_priority() > top.stack_priority() {
                        break;
                    }
                    postfix.push(top.symbol());
                    operator_stack.pop();
                }

                operator_stack.push(Stacked::Operator(op));
                last_was_operand = false;
            }
            Token::LeftParen => {
                operator_stack.push(Stacked::LeftParen);
                paren_count += 1;
            }
            Token::RightParen => {
                if paren_count == 0 {
                    return Err(ParseError::UnmatchedRightParen);
                }

                if previous == Some(Token::LeftParen) {
                    return Err(ParseError::EmptyParens);
                }

                loop {
                    match operator_stack.pop() {
                        Some(Stacked::Operator(top)) => postfix.push(top.symbol()),
                        Some(Stacked::LeftParen) => break,
                        None => return Err(ParseError::UnmatchedRightParen),
                    }
                }
                paren_count -= 1;
            }
            Token::Operand(operand) => {
                if last_was_operand || previous == Some(Token::RightParen) {
                    return Err(ParseError::UnexpectedOperand);
                }

                postfix.push(operand);
                last_was_operand = true;
            }
        }

        previous = Some(token);
    }

    if postfix.is_empty() {
        return Err(ParseError::EmptyInput);
    }

    if !last_was_operand {
        return Err(ParseError::DanglingOperator);
    }

    if paren_count > 0 {
        return Err(ParseError::MissingRightParen);
    }

    while let Some(stacked) = operator_stack.pop() {
        if let Stacked::Operator(op) = stacked {
            postfix.push(op.symbol());
        }
    }

    let postfix = postfix.iter().join(" ");
    debug!("Converted \"{}\" to postfix \"{}\"", infix, postfix);
    Ok(postfix)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expect_err(infix: &str, expected: ParseError) {
        match to_postfix(infix) {
            Err(e) if e == expected => (),
            r => panic!("{}: expected {:?} got {:?}", infix, expected, r),
        }
    }

    #[test]
    fn test_precedence() -> Result<(), Box<dyn std::error::Error>> {
        assert_eq!(to_postfix("2 + 3 * 4")?, "2 3 4 * +");
        assert_eq!(to_postfix("2 * 3 + 4")?, "2 3 * 4 +");
        assert_eq!(to_postfix("(2 + 3) * 4")?, "2 3 + 4 *");
        assert_eq!(to_postfix("2 * 3 ^ 2")?, "2 3 2 ^ *");
        Ok(())
    }

    #[test]
    fn test_associativity() -> Result<(), Box<dyn std::error::Error>> {
        assert_eq!(to_postfix("2 ^ 3 ^ 2")?, "2 3 2 ^ ^");
        assert_eq!(to_postfix("8 - 4 - 2")?, "8 4 - 2 -");
        assert_eq!(to_postfix("8 / 4 / 2")?, "8 4 / 2 /");
        assert_eq!(to_postfix("8 / 4 * 2")?, "8 4 / 2 *");
        Ok(())
    }

    #[test]
    fn test_assignment() -> Result<(), Box<dyn std::error::Error>> {
        assert_eq!(to_postfix("x = 5")?, "x 5 =");
        assert_eq!(to_postfix("x=y+2.5*z")?, "x y 2.5 z * + =");
        assert_eq!(to_postfix("1 + x = 3")?, "1 x + 3 =");
        Ok(())
    }

    #[test]
    fn test_parens() -> Result<(), Box<dyn std::error::Error>> {
        assert_eq!(to_postfix("((1))")?, "1");
        assert_eq!(to_postfix("(1 + 2) * (3 - 4)")?, "1 2 + 3 4 - *");
        assert_eq!(to_postfix("2 ^ (1 + 1) ^ 2")?, "2 1 1 + 2 ^ ^");
        Ok(())
    }

    #[test]
    fn test_operator_errors() {
        expect_err("+3", ParseError::UnexpectedOperator);
        expect_err("3 + * 4", ParseError::UnexpectedOperator);
        expect_err("(* 4)", ParseError::UnexpectedOperator);
        expect_err("3 +", ParseError::DanglingOperator);
        expect_err("x = 1 = 2", ParseError::MultipleAssignment);
        expect_err("x = y = 2", ParseError::MultipleAssignment);
    }

    #[test]
    fn test_operand_errors() {
        expect_err("3 4", ParseError::UnexpectedOperand);
        expect_err("(1) 2", ParseError::UnexpectedOperand);
        expect_err("2 (3)", ParseError::UnexpectedOperand);
    }

    #[test]
    fn test_paren_errors() {
        expect_err("(1 + 2", ParseError::MissingRightParen);
        expect_err("1 + 2)", ParseError::UnmatchedRightParen);
        expect_err(")", ParseError::UnmatchedRightParen);
        expect_err("()", ParseError::EmptyParens);
        expect_err("1 + ()", ParseError::EmptyParens);
    }

    #[test]
    fn test_input_errors() {
        expect_err("", ParseError::EmptyInput);
        expect_err("   ", ParseError::EmptyInput);
        expect_err("(", ParseError::EmptyInput);
        expect_err("3 % 4", ParseError::InvalidSymbol("%".to_string()));
        expect_err("X + 1", ParseError::InvalidSymbol("X".to_string()));
    }
}
