//! # Builder
//!
//! A [`ConstructionDirector`] knows the order of construction steps; a [`HouseBuilder`]
//! knows what each step produces. Swapping the builder changes the house without touching
//! the director.

use crate::framework::{pattern_demo, Console, DemoError};
use std::fmt::{self, Display};

/// The product.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct House {
    pub foundation: Option<String>,
    pub structure: Option<String>,
    pub roof: Option<String>,
    pub interior: Option<String>,
    pub has_garage: bool,
    pub has_swimming_pool: bool,
    pub has_garden: bool,
}

impl Display for House {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn text(value: &Option<String>) -> &str {
            value.as_deref().unwrap_or("null")
        }
        write!(
            f,
            "House{{foundation='{}', structure='{}', roof='{}', interior='{}', hasGarage={}, hasSwimmingPool={}, hasGarden={}}}",
            text(&self.foundation),
            text(&self.structure),
            text(&self.roof),
            text(&self.interior),
            self.has_garage,
            self.has_swimming_pool,
            self.has_garden
        )
    }
}

/// Construction steps.
pub trait HouseBuilder {
    fn build_foundation(&mut self);
    fn build_structure(&mut self);
    fn build_roof(&mut self);
    fn build_interior(&mut self);
    fn build_garage(&mut self);
    fn build_swimming_pool(&mut self);
    fn build_garden(&mut self);

    /// The house as built so far.
    fn house(&self) -> &House;
}

/// Plain concrete-and-brick house.
#[derive(Debug, Default)]
pub struct ConcreteHouseBuilder {
    house: House,
}

impl ConcreteHouseBuilder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl HouseBuilder for ConcreteHouseBuilder {
    fn build_foundation(&mut self) {
        self.house.foundation = Some("Concrete foundation".into());
    }

    fn build_structure(&mut self) {
        self.house.structure = Some("Concrete and brick structure".into());
    }

    fn build_roof(&mut self) {
        self.house.roof = Some("Concrete roof".into());
    }

    fn build_interior(&mut self) {
        self.house.interior = Some("Standard interior".into());
    }

    fn build_garage(&mut self) {
        self.house.has_garage = true;
    }

    fn build_swimming_pool(&mut self) {
        self.house.has_swimming_pool = false;
    }

    fn build_garden(&mut self) {
        self.house.has_garden = true;
    }

    fn house(&self) -> &House {
        &self.house
    }
}

/// Luxury villa.
#[derive(Debug, Default)]
pub struct VillaBuilder {
    house: House,
}

impl VillaBuilder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl HouseBuilder for VillaBuilder {
    fn build_foundation(&mut self) {
        self.house.foundation = Some("Reinforced concrete foundation".into());
    }

    fn build_structure(&mut self) {
        self.house.structure = Some("Premium structure with marble".into());
    }

    fn build_roof(&mut self) {
        self.house.roof = Some("Spanish tile roof".into());
    }

    fn build_interior(&mut self) {
        self.house.interior = Some("Luxury interior".into());
    }

    fn build_garage(&mut self) {
        self.house.has_garage = true;
    }

    fn build_swimming_pool(&mut self) {
        self.house.has_swimming_pool = true;
    }

    fn build_garden(&mut self) {
        self.house.has_garden = true;
    }

    fn house(&self) -> &House {
        &self.house
    }
}

/// Sequences the builder's steps.
pub struct ConstructionDirector<'a> {
    builder: &'a mut dyn HouseBuilder,
}

impl<'a> ConstructionDirector<'a> {
    pub fn new(builder: &'a mut dyn HouseBuilder) -> Self {
        Self { builder }
    }

    /// Foundation, structure, roof and interior.
    pub fn construct_house(&mut self) {
        self.builder.build_foundation();
        self.builder.build_structure();
        self.builder.build_roof();
        self.builder.build_interior();
    }

    /// Every step, extras included.
    pub fn construct_full_featured_house(&mut self) {
        self.construct_house();
        self.builder.build_garage();
        self.builder.build_swimming_pool();
        self.builder.build_garden();
    }
}

pub fn run(out: &mut dyn Console) -> Result<(), DemoError> {
    let mut concrete = ConcreteHouseBuilder::new();
    ConstructionDirector::new(&mut concrete).construct_house();
    writeln!(out, "Standard house: {}", concrete.house())?;

    writeln!(out)?;

    let mut villa = VillaBuilder::new();
    ConstructionDirector::new(&mut villa).construct_full_featured_house();
    writeln!(out, "Luxury villa: {}", villa.house())?;
    Ok(())
}

pattern_demo!(
    builder,
    Creational,
    "Builder",
    "A director runs the same construction steps against a standard and a villa builder.",
    run
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_construction_skips_extras() {
        let mut builder = ConcreteHouseBuilder::new();
        ConstructionDirector::new(&mut builder).construct_house();
        let house = builder.house();

        assert_eq!(house.roof.as_deref(), Some("Concrete roof"));
        assert!(!house.has_garage && !house.has_swimming_pool && !house.has_garden);
    }

    #[test]
    fn test_full_featured_villa() {
        let mut builder = VillaBuilder::new();
        ConstructionDirector::new(&mut builder).construct_full_featured_house();
        assert_eq!(
            builder.house().to_string(),
            "House{foundation='Reinforced concrete foundation', structure='Premium structure with marble', \
             roof='Spanish tile roof', interior='Luxury interior', hasGarage=true, hasSwimmingPool=true, hasGarden=true}"
        );
    }

    #[test]
    fn test_unbuilt_house_renders_null() {
        assert_eq!(
            House::default().to_string(),
            "House{foundation='null', structure='null', roof='null', interior='null', hasGarage=false, hasSwimmingPool=false, hasGarden=false}"
        );
    }
}
