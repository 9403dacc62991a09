//! # Behavioral Patterns
//!
//! Patterns about how objects share work and pass requests around.
//!
//! | Module | Pattern | Shape in Rust |
//! |--------|---------|---------------|
//! | [`chain_of_responsibility`] | Chain of Responsibility | Linked `Box<dyn PurchaseHandler>` |
//! | [`command`] | Command | `Rc<dyn Command>` + receivers in a `Home` registry |
//! | [`interpreter`] | Interpreter | Recursive `enum Expression` |
//! | [`iterator`] | Iterator | `Cursor` / `Aggregate` traits, plus `std::iter::Iterator` |
//! | [`mediator`] | Mediator | `ChatRoom` owning participants, `UserId` handles |
//! | [`memento`] | Memento | Snapshot struct + history stack |
//! | [`observer`] | Observer | `Box<dyn Observer>` list with `ObserverId`s |
//! | [`state`] | State | Stateless state objects selected by `StateId` |
//! | [`template_method`] | Template Method | Skeleton struct of step callbacks |
//! | [`visitor`] | Visitor | Closed `enum ComputerPart` + one match per operation |

pub mod chain_of_responsibility;
pub mod command;
pub mod interpreter;
pub mod iterator;
pub mod mediator;
pub mod memento;
pub mod observer;
pub mod state;
pub mod template_method;
pub mod visitor;

pub use chain_of_responsibility::ChainOfResponsibilityDemo;
pub use command::CommandDemo;
pub use interpreter::InterpreterDemo;
pub use iterator::IteratorDemo;
pub use mediator::MediatorDemo;
pub use memento::MementoDemo;
pub use observer::ObserverDemo;
pub use state::StateDemo;
pub use template_method::TemplateMethodDemo;
pub use visitor::VisitorDemo;
