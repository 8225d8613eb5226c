use derive_more::Display;

#[derive(Debug, Display, Clone, PartialEq)]
pub enum ParseError {
    #[display(fmt = "Operator where operand expected")]
    UnexpectedOperator,

    #[display(fmt = "Operand where operator expected")]
    UnexpectedOperand,

    #[display(fmt = "Missing right parenthesis")]
    MissingRightParen,

    #[display(fmt = "Right parenthesis has no matching left parenthesis")]
    UnmatchedRightParen,

    #[display(fmt = "Empty parentheses")]
    EmptyParens,

    #[display(fmt = "Multiple assignment")]
    MultipleAssignment,

    #[display(fmt = "Expression ends with an operator")]
    DanglingOperator,

    #[display(fmt = "Empty expression")]
    EmptyInput,

    #[display(fmt = "Invalid symbol: \"{}\"", _0)]
    InvalidSymbol(String),
}

impl std::error::Error for ParseError {}

#[derive(Debug, Display, Clone, PartialEq)]
pub enum ExpressionError {
    #[display(fmt = "Malformed postfix: {}", _0)]
    MalformedPostfix(String),

    #[display(fmt = "Left hand side of assignment is not a variable")]
    AssignToNonVariable,

    #[display(fmt = "Division by zero")]
    DivisionByZero,

    #[display(fmt = "Cannot {} an empty expression", _0)]
    EmptyExpression(&'static str),

    #[display(fmt = "IO Error: {}", _0)]
    Io(String),
}

impl std::error::Error for ExpressionError {}

impl From<std::io::Error> for ExpressionError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}

impl From<std::fmt::Error> for ExpressionError {
    fn from(e: std::fmt::Error) -> Self {
        Self::Io(e.to_string())
    }
}

/// Returned when turning infix text into an expression, which can fail in either
/// the shunting-yard pass or while building the tree
#[derive(Debug, Display, Clone, PartialEq)]
pub enum Error {
    #[display(fmt = "Parse Error: {}", _0)]
    Parse(ParseError),

    #[display(fmt = "Expression Error: {}", _0)]
    Expression(ExpressionError),
}

impl std::error::Error for Error {}

impl From<ParseError> for Error {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<ExpressionError> for Error {
    fn from(e: ExpressionError) -> Self {
        Self::Expression(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            ParseError::InvalidSymbol("#".to_string()).to_string(),
            "Invalid symbol: \"#\""
        );
        assert_eq!(
            ExpressionError::EmptyExpression("evaluate").to_string(),
            "Cannot evaluate an empty expression"
        );
        assert_eq!(
            Error::from(ParseError::EmptyParens).to_string(),
            "Parse Error: Empty parentheses"
        );
        assert_eq!(
            Error::from(ExpressionError::DivisionByZero).to_string(),
            "Expression Error: Division by zero"
        );
    }
}
