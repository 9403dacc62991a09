//! # Flyweight
//!
//! Trees share their intrinsic state (name, color, texture) through [`TreeType`] values
//! handed out by a [`TreeTypeFactory`]. The factory is an ordinary value owned by the
//! caller: one key, one shared instance, for as long as that factory lives.

use crate::framework::{pattern_demo, Console, DemoError};
use std::collections::HashMap;
use std::rc::Rc;
use tracing::debug;

/// Intrinsic, shared state.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TreeType {
    name: String,
    color: String,
    texture: String,
}

impl TreeType {
    pub fn new(name: impl Into<String>, color: impl Into<String>, texture: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
            texture: texture.into(),
        }
    }

    /// Registry key: `<name>_<color>_<texture>`.
    pub fn key(&self) -> String {
        format!("{}_{}_{}", self.name, self.color, self.texture)
    }

    pub fn draw(&self, x: i32, y: i32, out: &mut dyn Console) -> Result<(), DemoError> {
        writeln!(
            out,
            "Drawing tree '{}' of color '{}' with texture '{}' at position ({}, {})",
            self.name, self.color, self.texture, x, y
        )?;
        Ok(())
    }
}

/// Registry of shared tree types.
#[derive(Debug, Default)]
pub struct TreeTypeFactory {
    tree_types: HashMap<String, Rc<TreeType>>,
}

impl TreeTypeFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the shared type for the triple, creating it on first request.
    pub fn tree_type(
        &mut self,
        name: &str,
        color: &str,
        texture: &str,
        out: &mut dyn Console,
    ) -> Result<Rc<TreeType>, DemoError> {
        let candidate = TreeType::new(name, color, texture);
        let key = candidate.key();
        if let Some(existing) = self.tree_types.get(&key) {
            writeln!(out, "Reusing existing TreeType: {}", key)?;
            return Ok(Rc::clone(existing));
        }

        let created = Rc::new(candidate);
        self.tree_types.insert(key.clone(), Rc::clone(&created));
        writeln!(out, "Creating new TreeType: {}", key)?;
        debug!(%key, types = self.tree_types.len(), "Tree type registered");
        Ok(created)
    }

    pub fn type_count(&self) -> usize {
        self.tree_types.len()
    }
}

/// Extrinsic state: a position plus a shared type.
#[derive(Debug, Clone)]
pub struct Tree {
    x: i32,
    y: i32,
    tree_type: Rc<TreeType>,
}

impl Tree {
    pub fn tree_type(&self) -> &Rc<TreeType> {
        &self.tree_type
    }

    pub fn draw(&self, out: &mut dyn Console) -> Result<(), DemoError> {
        self.tree_type.draw(self.x, self.y, out)
    }
}

#[derive(Debug, Default)]
pub struct Forest {
    trees: Vec<Tree>,
}

impl Forest {
    pub fn new() -> Self {
        Self::default()
    }

    #[allow(clippy::too_many_arguments)]
    pub fn plant_tree(
        &mut self,
        factory: &mut TreeTypeFactory,
        x: i32,
        y: i32,
        name: &str,
        color: &str,
        texture: &str,
        out: &mut dyn Console,
    ) -> Result<(), DemoError> {
        let tree_type = factory.tree_type(name, color, texture, out)?;
        self.trees.push(Tree { x, y, tree_type });
        Ok(())
    }

    pub fn trees(&self) -> &[Tree] {
        &self.trees
    }

    pub fn draw(&self, out: &mut dyn Console) -> Result<(), DemoError> {
        writeln!(out)?;
        writeln!(out, "Drawing forest with {} trees:", self.trees.len())?;
        for tree in &self.trees {
            tree.draw(out)?;
        }
        Ok(())
    }
}

pub fn run(out: &mut dyn Console) -> Result<(), DemoError> {
    let mut factory = TreeTypeFactory::new();
    let mut forest = Forest::new();

    let plantings = [
        (10, 20, "Oak", "Green", "Rough"),
        (50, 60, "Oak", "Green", "Rough"),
        (100, 120, "Oak", "Green", "Rough"),
        (30, 40, "Pine", "Dark Green", "Smooth"),
        (70, 80, "Pine", "Dark Green", "Smooth"),
        (150, 160, "Oak", "Green", "Rough"),
    ];
    for (x, y, name, color, texture) in plantings {
        forest.plant_tree(&mut factory, x, y, name, color, texture, out)?;
    }

    forest.draw(out)?;

    writeln!(out)?;
    writeln!(out, "Total tree types created: {}", factory.type_count())?;
    writeln!(out, "Memory saved by using Flyweight pattern!")?;
    Ok(())
}

pattern_demo!(
    flyweight,
    Structural,
    "Flyweight",
    "A forest of trees shares tree types handed out by a keyed registry.",
    run
);
