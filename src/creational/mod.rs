//! Creational patterns: ways of creating objects without naming concrete types at the
//! call site.
//!
//! | Pattern | Entry point |
//! |---------|-------------|
//! | Abstract Factory | [`abstract_factory::FurnitureFactory`] |
//! | Builder | [`builder::ConstructionDirector`] |
//! | Factory | [`factory::ShapeFactory`] |
//! | Prototype | [`prototype::Prototype`] |

pub mod abstract_factory;
pub mod builder;
pub mod factory;
pub mod prototype;

pub use abstract_factory::AbstractFactoryDemo;
pub use builder::BuilderDemo;
pub use factory::FactoryDemo;
pub use prototype::PrototypeDemo;
