use strum_macros::{EnumString, IntoStaticStr};

/// The binary operators understood by the parser
///
/// Each operator carries two priorities. When an operator arrives from the input
/// it is compared using its input priority against the stack priority of the
/// operator on top of the operator stack. An operator whose input priority is
/// greater than its stack priority is right-associative, apart from `=` which
/// binds loosest on both sides.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, EnumString, IntoStaticStr)]
pub enum Operator {
    #[strum(serialize = "^")]
    Power,
    #[strum(serialize = "*")]
    Times,
    #[strum(serialize = "/")]
    Divide,
    #[strum(serialize = "+")]
    Plus,
    #[strum(serialize = "-")]
    Minus,
    #[strum(serialize = "=")]
    Assign,
}

impl Operator {
    pub fn input_priority(self) -> u8 {
        match self {
            Self::Power => 8,
            Self::Times | Self::Divide => 5,
            Self::Plus | Self::Minus => 3,
            Self::Assign => 2,
        }
    }

    pub fn stack_priority(self) -> u8 {
        match self {
            Self::Power => 7,
            Self::Times | Self::Divide => 6,
            Self::Plus | Self::Minus => 4,
            Self::Assign => 1,
        }
    }

    /// At most one `=` may appear in an expression, so it has no associativity
    pub fn is_right_associative(self) -> bool {
        self != Self::Assign && self.input_priority() > self.stack_priority()
    }

    pub fn symbol(self) -> &'static str {
        self.into()
    }

    pub fn is_operator_char(c: char) -> bool {
        matches!(c, '^' | '*' | '/' | '+' | '-' | '=')
    }
}
