//! # Template Method
//!
//! The skeleton of an algorithm is fixed by [`Algorithm::execute`]; the variable steps are
//! plugged in as callbacks when the algorithm is built, instead of being overridden in a
//! subclass.

use crate::framework::{pattern_demo, Console, DemoError};

/// A single variable step.
pub type Step = Box<dyn Fn(&mut dyn Console) -> Result<(), DemoError>>;

/// Three-step skeleton.
pub struct Algorithm {
    step1: Step,
    step2: Step,
    step3: Step,
}

impl Algorithm {
    pub fn new<A, B, C>(step1: A, step2: B, step3: C) -> Self
    where
        A: Fn(&mut dyn Console) -> Result<(), DemoError> + 'static,
        B: Fn(&mut dyn Console) -> Result<(), DemoError> + 'static,
        C: Fn(&mut dyn Console) -> Result<(), DemoError> + 'static,
    {
        Self {
            step1: Box::new(step1),
            step2: Box::new(step2),
            step3: Box::new(step3),
        }
    }

    /// Runs the steps in their fixed order, stopping at the first failure.
    pub fn execute(&self, out: &mut dyn Console) -> Result<(), DemoError> {
        (self.step1)(out)?;
        (self.step2)(out)?;
        (self.step3)(out)
    }
}

/// The concrete algorithm of the demo: each step announces itself.
pub fn concrete_algorithm() -> Algorithm {
    fn announce(number: u8) -> impl Fn(&mut dyn Console) -> Result<(), DemoError> {
        move |out| {
            writeln!(out, "Step {}", number)?;
            Ok(())
        }
    }
    Algorithm::new(announce(1), announce(2), announce(3))
}

pub fn run(out: &mut dyn Console) -> Result<(), DemoError> {
    concrete_algorithm().execute(out)
}

pattern_demo!(
    template_method,
    Behavioral,
    "Template Method",
    "A fixed three-step skeleton runs caller-supplied steps in order.",
    run
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::Transcript;

    #[test]
    fn test_steps_run_in_skeleton_order() {
        let algorithm = Algorithm::new(
            |out: &mut dyn Console| {
                writeln!(out, "prepare")?;
                Ok(())
            },
            |out: &mut dyn Console| {
                writeln!(out, "process")?;
                Ok(())
            },
            |out: &mut dyn Console| {
                writeln!(out, "finish")?;
                Ok(())
            },
        );
        let mut out = Transcript::new();
        algorithm.execute(&mut out).unwrap();
        assert_eq!(out.lines(), vec!["prepare", "process", "finish"]);
    }

    #[test]
    fn test_failing_step_stops_the_skeleton() {
        let algorithm = Algorithm::new(
            |out: &mut dyn Console| {
                writeln!(out, "one")?;
                Ok(())
            },
            |_: &mut dyn Console| Err(DemoError::UnknownDemo("step two".into())),
            |out: &mut dyn Console| {
                writeln!(out, "three")?;
                Ok(())
            },
        );
        let mut out = Transcript::new();
        assert!(algorithm.execute(&mut out).is_err());
        assert_eq!(out.lines(), vec!["one"]);
    }
}
