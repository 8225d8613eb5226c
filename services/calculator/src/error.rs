use derive_more::Display;

use expression::ExpressionError;
use telemetry::IsErr;

#[derive(Debug, Display)]
pub enum CalculatorError {
    #[display(fmt = "{}", _0)]
    InvalidExpression(expression::Error),

    #[display(fmt = "{}", _0)]
    Expression(ExpressionError),

    #[display(fmt = "Invalid command: {}", _0)]
    InvalidCommand(String),

    #[display(fmt = "No stored expressions, enter one with U")]
    NoExpressions,

    #[display(fmt = "There are only {} stored expressions", _0)]
    IndexOutOfRange(usize),

    #[display(fmt = "IO Error: {}", _0)]
    IOError(String),

    #[display(fmt = "Internal Error: {}", _0)]
    InternalError(String),
}

impl std::error::Error for CalculatorError {}

impl From<expression::Error> for CalculatorError {
    fn from(e: expression::Error) -> Self {
        CalculatorError::InvalidExpression(e)
    }
}

impl From<ExpressionError> for CalculatorError {
    fn from(e: ExpressionError) -> Self {
        match e {
            ExpressionError::Io(e) => CalculatorError::IOError(e),
            e => CalculatorError::Expression(e),
        }
    }
}

impl From<std::io::Error> for CalculatorError {
    fn from(e: std::io::Error) -> Self {
        CalculatorError::IOError(e.to_string())
    }
}

impl IsErr for CalculatorError {
    fn is_err(&self) -> bool {
        matches!(
            self,
            CalculatorError::IOError(_) | CalculatorError::InternalError(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use expression::ParseError;

    #[test]
    fn test_user_errors_are_not_failures() {
        let errors = vec![
            CalculatorError::from(expression::Error::from(ParseError::EmptyInput)),
            CalculatorError::from(ExpressionError::DivisionByZero),
            CalculatorError::InvalidCommand("Q".to_string()),
            CalculatorError::NoExpressions,
            CalculatorError::IndexOutOfRange(3),
        ];
        for e in errors {
            assert!(!e.is_err(), "{}", e);
        }
    }

    #[test]
    fn test_io_errors_are_failures() {
        let e = CalculatorError::from(ExpressionError::Io("broken pipe".to_string()));
        assert!(e.is_err());
        assert_eq!(e.to_string(), "IO Error: broken pipe");

        let e = CalculatorError::InternalError("registry".to_string());
        assert!(e.is_err());
    }
}
