//! # Decorator
//!
//! Condiments wrap a [`Coffee`] and add to its cost and description. Decorators stack in
//! any order and any number: the total cost is the base cost plus every increment, and
//! the description is the base description followed by each suffix in wrapping order.

use crate::framework::{pattern_demo, Console, DemoError};

pub trait Coffee {
    fn cost(&self) -> f64;
    fn description(&self) -> String;
}

impl<C: Coffee + ?Sized> Coffee for Box<C> {
    fn cost(&self) -> f64 {
        (**self).cost()
    }

    fn description(&self) -> String {
        (**self).description()
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SimpleCoffee;

impl Coffee for SimpleCoffee {
    fn cost(&self) -> f64 {
        1.0
    }

    fn description(&self) -> String {
        "Simple coffee".to_string()
    }
}

#[derive(Debug, Clone)]
pub struct MilkDecorator<C = Box<dyn Coffee>> {
    inner: C,
}

impl<C: Coffee> MilkDecorator<C> {
    pub const PRICE: f64 = 0.5;

    pub fn new(inner: C) -> Self {
        Self { inner }
    }
}

impl<C: Coffee> Coffee for MilkDecorator<C> {
    fn cost(&self) -> f64 {
        self.inner.cost() + Self::PRICE
    }

    fn description(&self) -> String {
        format!("{}, Milk", self.inner.description())
    }
}

#[derive(Debug, Clone)]
pub struct ChocolateDecorator<C = Box<dyn Coffee>> {
    inner: C,
}

impl<C: Coffee> ChocolateDecorator<C> {
    pub const PRICE: f64 = 0.7;

    pub fn new(inner: C) -> Self {
        Self { inner }
    }
}

impl<C: Coffee> Coffee for ChocolateDecorator<C> {
    fn cost(&self) -> f64 {
        self.inner.cost() + Self::PRICE
    }

    fn description(&self) -> String {
        format!("{}, Chocolate", self.inner.description())
    }
}

fn serve(coffee: &dyn Coffee, out: &mut dyn Console) -> Result<(), DemoError> {
    writeln!(
        out,
        "Cost: {:?}, Description: {}",
        coffee.cost(),
        coffee.description()
    )?;
    Ok(())
}

pub fn run(out: &mut dyn Console) -> Result<(), DemoError> {
    let coffee = SimpleCoffee;
    serve(&coffee, out)?;

    let milk_coffee = MilkDecorator::new(coffee);
    serve(&milk_coffee, out)?;

    let chocolate_milk_coffee = ChocolateDecorator::new(milk_coffee);
    serve(&chocolate_milk_coffee, out)
}

pattern_demo!(
    decorator,
    Structural,
    "Decorator",
    "Milk and chocolate decorators add to a simple coffee's cost and description.",
    run
);
