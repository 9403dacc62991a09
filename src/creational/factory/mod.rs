//! # Factory
//!
//! [`ShapeFactory`] maps a case-insensitive shape name to a boxed [`Shape`]. Names it does
//! not know are reported as [`FactoryError::UnknownShape`].

mod error;

pub use error::FactoryError;

use crate::framework::{pattern_demo, Console, DemoError};

pub trait Shape {
    fn draw(&self, out: &mut dyn Console) -> Result<(), DemoError>;
}

pub struct Circle;

impl Shape for Circle {
    fn draw(&self, out: &mut dyn Console) -> Result<(), DemoError> {
        writeln!(out, "Drawing a Circle")?;
        Ok(())
    }
}

pub struct Square;

impl Shape for Square {
    fn draw(&self, out: &mut dyn Console) -> Result<(), DemoError> {
        writeln!(out, "Drawing a Square")?;
        Ok(())
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ShapeFactory;

impl ShapeFactory {
    pub fn new() -> Self {
        Self
    }

    pub fn create_shape(&self, shape_type: &str) -> Result<Box<dyn Shape>, FactoryError> {
        if shape_type.eq_ignore_ascii_case("circle") {
            Ok(Box::new(Circle))
        } else if shape_type.eq_ignore_ascii_case("square") {
            Ok(Box::new(Square))
        } else {
            Err(FactoryError::UnknownShape(shape_type.to_string()))
        }
    }
}

pub fn run(out: &mut dyn Console) -> Result<(), DemoError> {
    let factory = ShapeFactory::new();
    factory.create_shape("Circle")?.draw(out)?;
    factory.create_shape("Square")?.draw(out)
}

pattern_demo!(
    factory,
    Creational,
    "Factory",
    "A shape factory turns a shape name into a drawable shape.",
    run
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::Transcript;

    #[test]
    fn test_names_are_case_insensitive() {
        let factory = ShapeFactory::new();
        let mut out = Transcript::new();
        for name in ["circle", "CIRCLE", "Square", "sQuArE"] {
            factory.create_shape(name).unwrap().draw(&mut out).unwrap();
        }
        assert_eq!(
            out.lines(),
            vec!["Drawing a Circle", "Drawing a Circle", "Drawing a Square", "Drawing a Square"]
        );
    }

    #[test]
    fn test_unknown_shape_is_an_error() {
        let error = ShapeFactory::new().create_shape("Triangle").err().unwrap();
        assert_eq!(error, FactoryError::UnknownShape("Triangle".into()));
        assert_eq!(error.to_string(), "Unknown shape type: Triangle");

        let demo_error: DemoError = error.into();
        assert!(matches!(demo_error, DemoError::Factory(FactoryError::UnknownShape(_))));
    }
}
