//! # Adapter
//!
//! [`CalculatorAdapter`] lets the incompatible [`ThirdPartyCalculator`] serve callers that
//! expect a [`SquareRootCalculator`].

use crate::framework::{pattern_demo, Console, DemoError};

/// The interface clients are written against.
pub trait SquareRootCalculator {
    fn calculate_square_root(&self, number: f64) -> f64;
}

/// The adaptee, with its own method name.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThirdPartyCalculator;

impl ThirdPartyCalculator {
    pub fn calculate_root(&self, number: f64) -> f64 {
        number.sqrt()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CalculatorAdapter {
    calculator: ThirdPartyCalculator,
}

impl CalculatorAdapter {
    pub fn new(calculator: ThirdPartyCalculator) -> Self {
        Self { calculator }
    }
}

impl SquareRootCalculator for CalculatorAdapter {
    fn calculate_square_root(&self, number: f64) -> f64 {
        self.calculator.calculate_root(number)
    }
}

pub fn run(out: &mut dyn Console) -> Result<(), DemoError> {
    let adapter: &dyn SquareRootCalculator = &CalculatorAdapter::new(ThirdPartyCalculator);
    let result = adapter.calculate_square_root(16.0);
    writeln!(out, "Square root: {:?}", result)?;
    Ok(())
}

pattern_demo!(
    adapter,
    Structural,
    "Adapter",
    "A third-party calculator is adapted to the square-root interface clients expect.",
    run
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adapter_delegates_to_adaptee() {
        let adapter = CalculatorAdapter::new(ThirdPartyCalculator);
        assert_eq!(adapter.calculate_square_root(81.0), 9.0);
        assert_eq!(
            adapter.calculate_square_root(2.0),
            ThirdPartyCalculator.calculate_root(2.0)
        );
    }
}
