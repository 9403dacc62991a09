//! # Interpreter
//!
//! A tiny arithmetic grammar represented as an expression tree and evaluated recursively.

use crate::framework::{pattern_demo, Console, DemoError};

/// Evaluation context. The grammar has no variables yet, so it carries nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct Context;

/// Terminal and non-terminal expressions of the grammar.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Number(i64),
    Add(Box<Expression>, Box<Expression>),
}

impl Expression {
    pub fn number(value: i64) -> Self {
        Expression::Number(value)
    }

    pub fn add(left: Expression, right: Expression) -> Self {
        Expression::Add(Box::new(left), Box::new(right))
    }

    pub fn interpret(&self, ctx: &Context) -> i64 {
        match self {
            Expression::Number(value) => *value,
            Expression::Add(left, right) => left.interpret(ctx) + right.interpret(ctx),
        }
    }
}

pub fn run(out: &mut dyn Console) -> Result<(), DemoError> {
    let expression = Expression::add(Expression::number(10), Expression::number(5));
    let result = expression.interpret(&Context);
    writeln!(out, "Result: {}", result)?;
    Ok(())
}

pattern_demo!(
    interpreter,
    Behavioral,
    "Interpreter",
    "An expression tree of numbers and additions evaluates itself.",
    run
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_addition() {
        let expression = Expression::add(
            Expression::add(Expression::number(1), Expression::number(2)),
            Expression::add(Expression::number(-4), Expression::number(10)),
        );
        assert_eq!(expression.interpret(&Context), 9);
    }

    #[test]
    fn test_number_is_terminal() {
        assert_eq!(Expression::number(42).interpret(&Context), 42);
    }
}
