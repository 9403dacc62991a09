//! # PatternDemo Trait
//!
//! The `PatternDemo` trait is the contract every catalog entry implements: a stable name,
//! a category, a one-line summary and a driver that writes the demo transcript to a
//! [`Console`]. Implementing it is all a pattern module needs to be picked up by the
//! [`Catalog`](crate::framework::Catalog) and the runner.
//!
//! # Architecture Note
//! Pattern modules expose their pieces (traits, structs, enums) as a normal library API so
//! they can be tested on their own. The demo driver is a thin function on top of that API
//! (`fn run(out: &mut dyn Console) -> Result<(), DemoError>`). The [`pattern_demo!`] macro
//! turns such a function into a zero-sized `...Demo` type implementing this trait.

use crate::framework::{Console, DemoError};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// The three classic families of design patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Behavioral,
    Creational,
    Structural,
}

impl Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Category::Behavioral => "behavioral",
            Category::Creational => "creational",
            Category::Structural => "structural",
        };
        f.pad(label)
    }
}

/// Contract for a runnable pattern demo.
pub trait PatternDemo {
    /// Stable snake_case identifier (e.g. `chain_of_responsibility`).
    fn name(&self) -> &'static str;

    /// Human-readable title (e.g. `Chain of Responsibility`).
    fn title(&self) -> &'static str;

    fn category(&self) -> Category;

    /// One-line description of what the demo shows.
    fn summary(&self) -> &'static str;

    /// Runs the driver, writing its transcript to `out`.
    fn run(&self, out: &mut dyn Console) -> Result<(), DemoError>;

    /// Serializable description of this demo.
    fn info(&self) -> DemoInfo {
        DemoInfo {
            name: self.name(),
            title: self.title(),
            category: self.category(),
            summary: self.summary(),
        }
    }
}

/// Catalog row used by `list`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DemoInfo {
    pub name: &'static str,
    pub title: &'static str,
    pub category: Category,
    pub summary: &'static str,
}

/// Declares a zero-sized demo type for a driver function.
///
/// `pattern_demo!(flyweight, Structural, "Flyweight", "...", run)` expands to a
/// `FlyweightDemo` struct implementing [`PatternDemo`] whose `run` calls `run(out)`.
macro_rules! pattern_demo {
    ($id:ident, $category:ident, $title:literal, $summary:literal, $driver:path) => {
        paste::paste! {
            #[doc = $summary]
            #[derive(Debug, Default, Clone, Copy)]
            pub struct [<$id:camel Demo>];

            impl $crate::framework::PatternDemo for [<$id:camel Demo>] {
                fn name(&self) -> &'static str {
                    stringify!($id)
                }

                fn title(&self) -> &'static str {
                    $title
                }

                fn category(&self) -> $crate::framework::Category {
                    $crate::framework::Category::$category
                }

                fn summary(&self) -> &'static str {
                    $summary
                }

                fn run(
                    &self,
                    out: &mut dyn $crate::framework::Console,
                ) -> Result<(), $crate::framework::DemoError> {
                    $driver(out)
                }
            }
        }
    };
}

pub(crate) use pattern_demo;
