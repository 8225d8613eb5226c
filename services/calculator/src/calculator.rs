use std::io::{BufRead, Write};

use log::{debug, warn};

use expression::{parse, Expression};
use telemetry::Measure;

use crate::command::Command;
use crate::config::SessionConfig;
use crate::error::CalculatorError;

lazy_static! {
    static ref PARSE_MEASURE: Measure = Measure::new("calculator", "parse");
    static ref EVALUATE_MEASURE: Measure = Measure::new("calculator", "evaluate");
}

const HELP: &str = "\
  H, ?  Print this help
  U     Enter a new expression, on the same or the next line
  B [n] Evaluate the current expression, or expression n
  P [n] Show the current expression, or expression n, as postfix
  I [n] Show the current expression, or expression n, as infix
  T [n] Show the current expression, or expression n, as a tree
  L     List all expressions as infix
  N     Show the number of stored expressions
  A n   Make expression n the current expression
  R [n] Remove the current expression, or expression n
  M     Show metrics
  S     Quit
";

/// Reads commands from `input` until `S` or end of input, keeping a numbered
/// list of expressions and a current one
pub struct Calculator<R, W> {
    input: R,
    output: W,
    config: SessionConfig,
    expressions: Vec<Expression>,
    current: usize,
}

impl<R: BufRead, W: Write> Calculator<R, W> {
    pub fn new(input: R, output: W, config: SessionConfig) -> Calculator<R, W> {
        Calculator {
            input,
            output,
            config,
            expressions: Vec::new(),
            current: 0,
        }
    }

    pub fn run(&mut self) -> Result<(), CalculatorError> {
        if self.config.banner {
            writeln!(self.output, "Welcome to the calculator!\n")?;
            self.output.write_all(HELP.as_bytes())?;
        }

        loop {
            write!(self.output, "{}", self.config.prompt)?;
            self.output.flush()?;

            let line = match self.read_line()? {
                Some(line) => line,
                None => break,
            };

            if line.trim().is_empty() {
                continue;
            }

            let result = line
                .parse::<Command>()
                .and_then(|command| self.execute(command));

            match result {
                Ok(true) => {}
                Ok(false) => break,
                Err(CalculatorError::IOError(e)) => return Err(CalculatorError::IOError(e)),
                Err(e) => {
                    warn!("\"{}\" failed: {}", line, e);
                    writeln!(self.output, "{}", e)?;
                }
            }
        }

        Ok(())
    }

    /// Returns false if the session should end
    fn execute(&mut self, command: Command) -> Result<bool, CalculatorError> {
        debug!("Executing {:?}", command);

        match command {
            Command::Help => self.output.write_all(HELP.as_bytes())?,
            Command::Input(infix) => self.read_expression(infix)?,
            Command::Evaluate(n) => {
                let index = self.index(n)?;
                let expression = &mut self.expressions[index];
                let value = EVALUATE_MEASURE
                    .stats(|| expression.evaluate().map_err(CalculatorError::from))?;
                writeln!(self.output, "{}", value)?;
            }
            Command::Postfix(n) => {
                let postfix = self.expressions[self.index(n)?].to_postfix()?;
                writeln!(self.output, "{}", postfix)?;
            }
            Command::Infix(n) => {
                let infix = self.expressions[self.index(n)?].to_infix()?;
                writeln!(self.output, "{}", infix)?;
            }
            Command::Tree(n) => {
                let index = self.index(n)?;
                self.expressions[index].print_tree(&mut self.output)?;
            }
            Command::List => {
                for (i, expression) in self.expressions.iter().enumerate() {
                    writeln!(self.output, "{}: {}", i + 1, expression.to_infix()?)?;
                }
            }
            Command::Count => {
                writeln!(
                    self.output,
                    "{} stored expressions",
                    self.expressions.len()
                )?;
            }
            Command::Activate(n) => self.current = self.index(n)?,
            Command::Remove(n) => {
                let index = self.index(n)?;
                self.expressions.remove(index);
                if index < self.current || self.current >= self.expressions.len() {
                    self.current = self.current.saturating_sub(1);
                }
            }
            Command::Metrics => {
                let metrics = telemetry::encode()
                    .map_err(|e| CalculatorError::InternalError(e.to_string()))?;
                self.output.write_all(metrics.as_bytes())?;
            }
            Command::Quit => {
                writeln!(self.output, "Goodbye!")?;
                return Ok(false);
            }
        }

        Ok(true)
    }

    fn read_expression(&mut self, infix: Option<String>) -> Result<(), CalculatorError> {
        let infix = match infix {
            Some(infix) => infix,
            None => match self.read_line()? {
                Some(line) => line,
                None => return Ok(()),
            },
        };

        let expression = PARSE_MEASURE.stats(|| parse(&infix).map_err(CalculatorError::from))?;
        self.expressions.push(expression);
        self.current = self.expressions.len() - 1;
        Ok(())
    }

    /// Resolves an optional 1-based index to a position in the list
    fn index(&self, n: Option<usize>) -> Result<usize, CalculatorError> {
        if self.expressions.is_empty() {
            return Err(CalculatorError::NoExpressions);
        }

        match n {
            None => Ok(self.current),
            Some(n) if n >= 1 && n <= self.expressions.len() => Ok(n - 1),
            Some(_) => Err(CalculatorError::IndexOutOfRange(self.expressions.len())),
        }
    }

    /// Bytes that aren't UTF-8 become replacement characters, which the parsers
    /// then reject like any other invalid symbol
    fn read_line(&mut self) -> Result<Option<String>, CalculatorError> {
        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&line);
        Ok(Some(line.trim_end_matches(&['\r', '\n'][..]).to_string()))
    }
}
