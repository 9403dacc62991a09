use crate::behavioral::{
    ChainOfResponsibilityDemo, CommandDemo, InterpreterDemo, IteratorDemo, MediatorDemo,
    MementoDemo, ObserverDemo, StateDemo, TemplateMethodDemo, VisitorDemo,
};
use crate::creational::{AbstractFactoryDemo, BuilderDemo, FactoryDemo, PrototypeDemo};
use crate::framework::{Catalog, Category, Console, DemoError, PatternDemo};
use crate::structural::{
    AdapterDemo, BridgeDemo, CompositeDemo, DecoratorDemo, FacadeDemo, FlyweightDemo, ProxyDemo,
};
use tracing::{error, info, info_span};

/// The runtime orchestrator of the pattern catalog.
///
/// `PatternSystem` is responsible for:
/// - **Registration**: building the standard [`Catalog`] of all 21 demos in a fixed order
///   (behavioral, creational, structural; alphabetical within each family)
/// - **Execution**: running demos against a [`Console`], each inside its own `demo` span
///
/// # Example
///
/// ```
/// use pattern_recipe::framework::Transcript;
/// use pattern_recipe::lifecycle::PatternSystem;
///
/// let system = PatternSystem::new();
/// let mut out = Transcript::new();
/// system.run("adapter", &mut out).unwrap();
/// assert_eq!(out.as_str(), "Square root: 4.0\n");
/// ```
pub struct PatternSystem {
    catalog: Catalog,
}

impl Default for PatternSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl PatternSystem {
    /// Creates a system holding the standard catalog.
    pub fn new() -> Self {
        Self {
            catalog: standard_catalog(),
        }
    }

    /// Creates a system around a caller-built catalog.
    pub fn with_catalog(catalog: Catalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Runs one demo by name, writing only its transcript.
    ///
    /// # Errors
    /// [`DemoError::UnknownDemo`] for a name not in the catalog, or whatever the demo's
    /// driver returns.
    pub fn run(&self, name: &str, out: &mut dyn Console) -> Result<(), DemoError> {
        let demo = self.catalog.get(name)?;
        run_demo(demo, out)
    }

    /// Runs several demos in the order given. Every name is resolved before anything
    /// runs, so an unknown name produces no output at all.
    pub fn run_many<S: AsRef<str>>(&self, names: &[S], out: &mut dyn Console) -> Result<(), DemoError> {
        let demos = names
            .iter()
            .map(|name| self.catalog.get(name.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        for demo in demos {
            run_demo(demo, out)?;
        }
        Ok(())
    }

    /// Runs every demo, or every demo of `category`, in catalog order. Each transcript is
    /// preceded by a `=== <Title> ===` banner; consecutive demos are separated by a
    /// blank line. Returns the number of demos run.
    pub fn run_all(&self, out: &mut dyn Console, category: Option<Category>) -> Result<usize, DemoError> {
        let selected = self
            .catalog
            .iter()
            .filter(|demo| category.map_or(true, |wanted| demo.category() == wanted));

        let mut count = 0;
        for demo in selected {
            if count > 0 {
                writeln!(out)?;
            }
            writeln!(out, "=== {} ===", demo.title())?;
            run_demo(demo, out)?;
            count += 1;
        }
        info!(count, category = ?category, "Catalog run complete");
        Ok(count)
    }
}

fn run_demo(demo: &dyn PatternDemo, out: &mut dyn Console) -> Result<(), DemoError> {
    let span = info_span!("demo", name = demo.name());
    let _entered = span.enter();

    info!(category = %demo.category(), "Demo started");
    match demo.run(out) {
        Ok(()) => {
            info!("Demo finished");
            Ok(())
        }
        Err(e) => {
            error!(error = %e, "Demo failed");
            Err(e)
        }
    }
}

fn standard_catalog() -> Catalog {
    let demos: Vec<Box<dyn PatternDemo>> = vec![
        Box::new(ChainOfResponsibilityDemo),
        Box::new(CommandDemo),
        Box::new(InterpreterDemo),
        Box::new(IteratorDemo),
        Box::new(MediatorDemo),
        Box::new(MementoDemo),
        Box::new(ObserverDemo),
        Box::new(StateDemo),
        Box::new(TemplateMethodDemo),
        Box::new(VisitorDemo),
        Box::new(AbstractFactoryDemo),
        Box::new(BuilderDemo),
        Box::new(FactoryDemo),
        Box::new(PrototypeDemo),
        Box::new(AdapterDemo),
        Box::new(BridgeDemo),
        Box::new(CompositeDemo),
        Box::new(DecoratorDemo),
        Box::new(FacadeDemo),
        Box::new(FlyweightDemo),
        Box::new(ProxyDemo),
    ];
    Catalog::from_demos(demos)
}
