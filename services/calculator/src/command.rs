use std::str::FromStr;

use nom::IResult;
use nom::{
    character::complete::{digit1, one_of, space0},
    combinator::{map, map_res, opt, rest},
    error::ErrorKind,
    sequence::preceded,
};

use crate::error::CalculatorError;

/// A calculator command, indices are 1-based and default to the current expression
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Help,
    Input(Option<String>),
    Evaluate(Option<usize>),
    Postfix(Option<usize>),
    Infix(Option<usize>),
    Tree(Option<usize>),
    List,
    Count,
    Activate(Option<usize>),
    Remove(Option<usize>),
    Metrics,
    Quit,
}

fn parse_index(i: &str) -> IResult<&str, Option<usize>> {
    opt(preceded(
        space0,
        map_res(digit1, |digit_str: &str| digit_str.parse()),
    ))(i)
}

fn parse_infix(i: &str) -> IResult<&str, Option<String>> {
    map(rest, |infix: &str| {
        let infix = infix.trim();
        if infix.is_empty() {
            None
        } else {
            Some(infix.to_string())
        }
    })(i)
}

fn parse_command(i: &str) -> IResult<&str, Command> {
    let (i, letter) = preceded(space0, one_of("?hHuUbBpPiItTlLnNaArRmMsS"))(i)?;

    match letter.to_ascii_uppercase() {
        'H' | '?' => Ok((i, Command::Help)),
        'U' => map(parse_infix, Command::Input)(i),
        'B' => map(parse_index, Command::Evaluate)(i),
        'P' => map(parse_index, Command::Postfix)(i),
        'I' => map(parse_index, Command::Infix)(i),
        'T' => map(parse_index, Command::Tree)(i),
        'A' => map(parse_index, Command::Activate)(i),
        'R' => map(parse_index, Command::Remove)(i),
        'L' => Ok((i, Command::List)),
        'N' => Ok((i, Command::Count)),
        'M' => Ok((i, Command::Metrics)),
        'S' => Ok((i, Command::Quit)),
        _ => Err(nom::Err::Error((i, ErrorKind::OneOf))),
    }
}

impl FromStr for Command {
    type Err = CalculatorError;

    // Anything after the command and its index is ignored
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        match parse_command(line) {
            Ok((_, command)) => Ok(command),
            Err(_) => Err(CalculatorError::InvalidCommand(line.trim().to_string())),
        }
    }
}
