//! # Facade
//!
//! [`ComputerFacade::start`] hides the boot sequence of three subsystems behind one call.

use crate::framework::{pattern_demo, Console, DemoError};

#[derive(Debug, Default)]
pub struct Cpu;

impl Cpu {
    pub fn process_data(&self, out: &mut dyn Console) -> Result<(), DemoError> {
        writeln!(out, "CPU is processing data")?;
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct Memory;

impl Memory {
    pub fn load(&self, out: &mut dyn Console) -> Result<(), DemoError> {
        writeln!(out, "Memory is loading data")?;
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct HardDrive;

impl HardDrive {
    pub fn read_data(&self, out: &mut dyn Console) -> Result<(), DemoError> {
        writeln!(out, "HardDrive is reading data")?;
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct ComputerFacade {
    cpu: Cpu,
    memory: Memory,
    hard_drive: HardDrive,
}

impl ComputerFacade {
    pub fn new() -> Self {
        Self::default()
    }

    /// CPU, memory, then disk; the start notice comes last.
    pub fn start(&self, out: &mut dyn Console) -> Result<(), DemoError> {
        self.cpu.process_data(out)?;
        self.memory.load(out)?;
        self.hard_drive.read_data(out)?;
        writeln!(out, "Computer is starting...")?;
        Ok(())
    }
}

pub fn run(out: &mut dyn Console) -> Result<(), DemoError> {
    ComputerFacade::new().start(out)
}

pattern_demo!(
    facade,
    Structural,
    "Facade",
    "One start call drives the CPU, memory and hard drive subsystems.",
    run
);
