//! # Catalog
//!
//! An ordered registry of [`PatternDemo`]s. Registration order is run order.
//! Lookups normalise names, so `chain-of-responsibility`, `Chain_Of_Responsibility` and
//! `chain_of_responsibility` all find the same demo.

use crate::framework::{Category, DemoError, DemoInfo, PatternDemo};
use tracing::{debug, warn};

/// Ordered collection of demos.
#[derive(Default)]
pub struct Catalog {
    demos: Vec<Box<dyn PatternDemo>>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a demo at the end of the catalog.
    ///
    /// # Errors
    /// [`DemoError::DuplicateDemo`] if a demo with the same normalised name exists.
    pub fn register(&mut self, demo: impl PatternDemo + 'static) -> Result<(), DemoError> {
        if self.find(demo.name()).is_some() {
            return Err(DemoError::DuplicateDemo(demo.name().to_string()));
        }
        debug!(name = demo.name(), category = %demo.category(), "Registered demo");
        self.demos.push(Box::new(demo));
        Ok(())
    }

    /// Builds a catalog from demos in order. A demo whose name is already taken is
    /// skipped with a warning.
    pub fn from_demos(demos: impl IntoIterator<Item = Box<dyn PatternDemo>>) -> Self {
        let mut catalog = Self::new();
        for demo in demos {
            if catalog.find(demo.name()).is_some() {
                warn!(name = demo.name(), "Duplicate demo skipped");
                continue;
            }
            catalog.demos.push(demo);
        }
        catalog
    }

    /// Finds a demo by name.
    pub fn find(&self, name: &str) -> Option<&dyn PatternDemo> {
        let wanted = normalize(name);
        self.demos
            .iter()
            .find(|demo| normalize(demo.name()) == wanted)
            .map(|demo| demo.as_ref())
    }

    /// Like [`find`](Self::find), but unknown names are an error.
    pub fn get(&self, name: &str) -> Result<&dyn PatternDemo, DemoError> {
        self.find(name)
            .ok_or_else(|| DemoError::UnknownDemo(name.to_string()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn PatternDemo> {
        self.demos.iter().map(|demo| demo.as_ref())
    }

    pub fn in_category(&self, category: Category) -> impl Iterator<Item = &dyn PatternDemo> {
        self.iter().filter(move |demo| demo.category() == category)
    }

    pub fn infos(&self) -> Vec<DemoInfo> {
        self.iter().map(|demo| demo.info()).collect()
    }

    pub fn len(&self) -> usize {
        self.demos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.demos.is_empty()
    }
}

fn normalize(name: &str) -> String {
    name.trim().to_ascii_lowercase().replace('-', "_")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::{pattern_demo, Console, Transcript};

    fn driver(out: &mut dyn Console) -> Result<(), DemoError> {
        writeln!(out, "ran")?;
        Ok(())
    }

    pattern_demo!(first_demo, Creational, "First Demo", "First.", driver);
    pattern_demo!(second_demo, Structural, "Second Demo", "Second.", driver);

    #[test]
    fn test_register_and_find() {
        let mut catalog = Catalog::new();
        catalog.register(FirstDemoDemo).unwrap();
        catalog.register(SecondDemoDemo).unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.find("FIRST-DEMO").map(|d| d.name()), Some("first_demo"));
        assert!(catalog.find("third_demo").is_none());

        let names: Vec<_> = catalog.iter().map(|d| d.name()).collect();
        assert_eq!(names, vec!["first_demo", "second_demo"]);

        let structural: Vec<_> = catalog.in_category(Category::Structural).map(|d| d.name()).collect();
        assert_eq!(structural, vec!["second_demo"]);

        let mut out = Transcript::new();
        catalog.get("second-demo").unwrap().run(&mut out).unwrap();
        assert_eq!(out.lines(), vec!["ran"]);
    }

    #[test]
    fn test_from_demos_keeps_first_of_duplicates() {
        let catalog = Catalog::from_demos(vec![
            Box::new(SecondDemoDemo) as Box<dyn PatternDemo>,
            Box::new(FirstDemoDemo),
            Box::new(SecondDemoDemo),
        ]);
        let names: Vec<_> = catalog.iter().map(|d| d.name()).collect();
        assert_eq!(names, vec!["second_demo", "first_demo"]);
    }

    #[test]
    fn test_duplicate_and_unknown_are_errors() {
        let mut catalog = Catalog::new();
        catalog.register(FirstDemoDemo).unwrap();

        assert!(matches!(catalog.register(FirstDemoDemo), Err(DemoError::DuplicateDemo(name)) if name == "first_demo"));
        assert!(matches!(catalog.get("nope"), Err(DemoError::UnknownDemo(name)) if name == "nope"));
    }
}
