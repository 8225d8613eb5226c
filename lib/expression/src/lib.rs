pub use error::{Error, ExpressionError, ParseError};
pub use expression::{parse, Expression};
pub use node::{Node, Variable};
pub use operator::Operator;

mod error;
mod expression;
mod node;
mod operator;
pub mod postfix;
mod token;
pub mod tree;
