use crate::operator::Operator;

/// Surrounds every operator and parenthesis with a single space and collapses
/// all other whitespace, so the result can be split with `split_whitespace`
pub fn format_infix(infix: &str) -> String {
    let mut formatted = String::with_capacity(infix.len() * 2);

    for c in infix.chars() {
        if Operator::is_operator_char(c) || c == '(' || c == ')' {
            push_separator(&mut formatted);
            formatted.push(c);
            formatted.push(' ');
        } else if c.is_whitespace() {
            push_separator(&mut formatted);
        } else {
            formatted.push(c);
        }
    }

    formatted.truncate(formatted.trim_end().len());
    formatted
}

fn push_separator(formatted: &mut String) {
    if !formatted.is_empty() && !formatted.ends_with(' ') {
        formatted.push(' ');
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token<'a> {
    Operator(Operator),
    LeftParen,
    RightParen,
    Operand(&'a str),
}

impl<'a> Token<'a> {
    /// Returns `None` if the text contains a character that can't appear in any token
    pub fn classify(text: &'a str) -> Option<Token<'a>> {
        match text {
            "(" => Some(Token::LeftParen),
            ")" => Some(Token::RightParen),
            _ => {
                if let Ok(op) = text.parse::<Operator>() {
                    Some(Token::Operator(op))
                } else if !text.is_empty() && text.chars().all(is_operand_char) {
                    Some(Token::Operand(text))
                } else {
                    None
                }
            }
        }
    }
}

fn is_operand_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || c == '.'
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperandKind {
    Integer,
    Real,
    Identifier,
}

impl OperandKind {
    /// Classifies an operand by its character composition, the three kinds are
    /// mutually exclusive and anything mixing letters with digits is none of them
    pub fn of(text: &str) -> Option<OperandKind> {
        if text.is_empty() {
            return None;
        }

        if text.chars().all(|c| c.is_ascii_digit()) {
            return Some(OperandKind::Integer);
        }

        if text.chars().all(|c| c.is_ascii_lowercase()) {
            return Some(OperandKind::Identifier);
        }

        let mut parts = text.splitn(2, '.');
        let whole = parts.next().unwrap_or_default();
        let fraction = parts.next()?;

        if whole.chars().all(|c| c.is_ascii_digit())
            && !fraction.is_empty()
            && fraction.chars().all(|c| c.is_ascii_digit())
        {
            Some(OperandKind::Real)
        } else {
            None
        }
    }
}
