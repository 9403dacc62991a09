//! # Abstract Factory
//!
//! A [`FurnitureFactory`] creates a whole family of matching products. Client code picks
//! a factory once and never names the concrete chair or sofa types.

use crate::framework::{pattern_demo, Console, DemoError};

pub trait Chair {
    fn sit_on(&self, out: &mut dyn Console) -> Result<(), DemoError>;
}

pub trait Sofa {
    fn lie_on(&self, out: &mut dyn Console) -> Result<(), DemoError>;
}

/// Creates one style of furniture.
pub trait FurnitureFactory {
    fn create_chair(&self) -> Box<dyn Chair>;
    fn create_sofa(&self) -> Box<dyn Sofa>;
}

pub struct ModernChair;

impl Chair for ModernChair {
    fn sit_on(&self, out: &mut dyn Console) -> Result<(), DemoError> {
        writeln!(out, "Sitting on a modern chair")?;
        Ok(())
    }
}

pub struct ModernSofa;

impl Sofa for ModernSofa {
    fn lie_on(&self, out: &mut dyn Console) -> Result<(), DemoError> {
        writeln!(out, "Lying on a modern sofa")?;
        Ok(())
    }
}

pub struct VictorianChair;

impl Chair for VictorianChair {
    fn sit_on(&self, out: &mut dyn Console) -> Result<(), DemoError> {
        writeln!(out, "Sitting on a Victorian chair")?;
        Ok(())
    }
}

pub struct VictorianSofa;

impl Sofa for VictorianSofa {
    fn lie_on(&self, out: &mut dyn Console) -> Result<(), DemoError> {
        writeln!(out, "Lying on a Victorian sofa")?;
        Ok(())
    }
}

pub struct ModernFurnitureFactory;

impl FurnitureFactory for ModernFurnitureFactory {
    fn create_chair(&self) -> Box<dyn Chair> {
        Box::new(ModernChair)
    }

    fn create_sofa(&self) -> Box<dyn Sofa> {
        Box::new(ModernSofa)
    }
}

pub struct VictorianFurnitureFactory;

impl FurnitureFactory for VictorianFurnitureFactory {
    fn create_chair(&self) -> Box<dyn Chair> {
        Box::new(VictorianChair)
    }

    fn create_sofa(&self) -> Box<dyn Sofa> {
        Box::new(VictorianSofa)
    }
}

/// Furnishes a room using whatever family `factory` produces.
pub fn furnish(factory: &dyn FurnitureFactory, out: &mut dyn Console) -> Result<(), DemoError> {
    let chair = factory.create_chair();
    let sofa = factory.create_sofa();
    chair.sit_on(out)?;
    sofa.lie_on(out)
}

pub fn run(out: &mut dyn Console) -> Result<(), DemoError> {
    furnish(&ModernFurnitureFactory, out)?;
    writeln!(out)?;
    furnish(&VictorianFurnitureFactory, out)
}

pattern_demo!(
    abstract_factory,
    Creational,
    "Abstract Factory",
    "Modern and Victorian factories each produce a matching chair and sofa.",
    run
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::Transcript;

    #[test]
    fn test_families_never_mix() {
        let factories: [(&dyn FurnitureFactory, &str); 2] = [
            (&ModernFurnitureFactory, "modern"),
            (&VictorianFurnitureFactory, "Victorian"),
        ];
        for (factory, style) in factories {
            let mut out = Transcript::new();
            furnish(factory, &mut out).unwrap();
            assert!(out.lines().iter().all(|line| line.contains(style)), "{out}");
        }
    }
}
