//! # Prototype
//!
//! New objects are produced by copying an existing instance. The copy is fully
//! independent: changing it never touches the prototype.

use crate::framework::{pattern_demo, Console, DemoError};

/// Produces an independent copy of itself.
pub trait Prototype {
    fn clone_prototype(&self) -> Box<dyn Prototype>;
    fn field(&self) -> i32;
    fn set_field(&mut self, field: i32);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConcretePrototype {
    field: i32,
}

impl ConcretePrototype {
    pub fn new(field: i32) -> Self {
        Self { field }
    }
}

impl Prototype for ConcretePrototype {
    fn clone_prototype(&self) -> Box<dyn Prototype> {
        Box::new(self.clone())
    }

    fn field(&self) -> i32 {
        self.field
    }

    fn set_field(&mut self, field: i32) {
        self.field = field;
    }
}

pub fn run(out: &mut dyn Console) -> Result<(), DemoError> {
    let prototype = ConcretePrototype::new(10);
    let mut clone = prototype.clone_prototype();

    writeln!(out, "Original field value: {}", prototype.field())?;
    writeln!(out, "Cloned field value: {}", clone.field())?;

    clone.set_field(20);

    writeln!(out, "Original field value after cloning: {}", prototype.field())?;
    writeln!(out, "Cloned field value after cloning: {}", clone.field())?;
    Ok(())
}

pattern_demo!(
    prototype,
    Creational,
    "Prototype",
    "A prototype is cloned and the clone is modified without affecting the original.",
    run
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clone_is_independent() {
        let mut original = ConcretePrototype::new(1);
        let mut copy = original.clone_prototype();

        copy.set_field(2);
        original.set_field(3);

        assert_eq!(copy.field(), 2);
        assert_eq!(original.field(), 3);
    }
}
