//! Structural patterns: ways of composing objects into larger structures.
//!
//! | Pattern | Entry point |
//! |---------|-------------|
//! | Adapter | [`adapter::CalculatorAdapter`] |
//! | Bridge | [`bridge::RemoteControl`] |
//! | Composite | [`composite::FileSystemComponent`] |
//! | Decorator | [`decorator::Coffee`] |
//! | Facade | [`facade::ComputerFacade`] |
//! | Flyweight | [`flyweight::TreeTypeFactory`] |
//! | Proxy | [`proxy::ProxyImage`] |

pub mod adapter;
pub mod bridge;
pub mod composite;
pub mod decorator;
pub mod facade;
pub mod flyweight;
pub mod proxy;

pub use adapter::AdapterDemo;
pub use bridge::BridgeDemo;
pub use composite::CompositeDemo;
pub use decorator::DecoratorDemo;
pub use facade::FacadeDemo;
pub use flyweight::FlyweightDemo;
pub use proxy::ProxyDemo;
