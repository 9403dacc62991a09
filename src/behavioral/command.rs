//! # Command
//!
//! Requests are wrapped in [`Command`] objects that a [`RemoteController`] executes and
//! remembers, so they can be undone in reverse order.
//!
//! ## Ownership
//! The receivers (lights, television) live in a [`Home`] registry. Commands hold
//! [`LightId`] handles instead of references, and every `execute`/`undo` gets the home
//! passed in, which keeps the ownership graph acyclic.

use crate::framework::{pattern_demo, Console, DemoError};
use std::rc::Rc;
use tracing::{debug, warn};

/// Handle to a light owned by a [`Home`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LightId(usize);

#[derive(Debug, Clone, PartialEq)]
pub struct Light {
    location: String,
    is_on: bool,
}

impl Light {
    pub fn new(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            is_on: false,
        }
    }

    pub fn on(&mut self, out: &mut dyn Console) -> Result<(), DemoError> {
        self.is_on = true;
        writeln!(out, "{} light is ON", self.location)?;
        Ok(())
    }

    pub fn off(&mut self, out: &mut dyn Console) -> Result<(), DemoError> {
        self.is_on = false;
        writeln!(out, "{} light is OFF", self.location)?;
        Ok(())
    }

    pub fn is_on(&self) -> bool {
        self.is_on
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Television {
    is_on: bool,
    volume: u8,
}

impl Television {
    pub fn on(&mut self, out: &mut dyn Console) -> Result<(), DemoError> {
        self.is_on = true;
        writeln!(out, "Television is ON")?;
        Ok(())
    }

    pub fn off(&mut self, out: &mut dyn Console) -> Result<(), DemoError> {
        self.is_on = false;
        writeln!(out, "Television is OFF")?;
        Ok(())
    }

    pub fn set_volume(&mut self, level: u8, out: &mut dyn Console) -> Result<(), DemoError> {
        self.volume = level;
        writeln!(out, "Television volume set to {}", level)?;
        Ok(())
    }

    pub fn is_on(&self) -> bool {
        self.is_on
    }

    pub fn volume(&self) -> u8 {
        self.volume
    }
}

/// Owner of every receiver the commands act on.
#[derive(Debug, Default)]
pub struct Home {
    lights: Vec<Light>,
    television: Television,
}

impl Home {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_light(&mut self, location: impl Into<String>) -> LightId {
        self.lights.push(Light::new(location));
        LightId(self.lights.len() - 1)
    }

    pub fn light(&self, id: LightId) -> Option<&Light> {
        self.lights.get(id.0)
    }

    fn light_mut(&mut self, id: LightId) -> Option<&mut Light> {
        self.lights.get_mut(id.0)
    }

    /// Switches the light behind `id`; a handle this home never issued switches nothing.
    fn switch_light(
        &mut self,
        id: LightId,
        on: bool,
        out: &mut dyn Console,
    ) -> Result<(), DemoError> {
        let Some(light) = self.light_mut(id) else {
            warn!(?id, "Unknown light");
            return Ok(());
        };
        if on {
            light.on(out)
        } else {
            light.off(out)
        }
    }

    pub fn television(&self) -> &Television {
        &self.television
    }
}

/// A reversible request against the [`Home`].
pub trait Command {
    fn execute(&self, home: &mut Home, out: &mut dyn Console) -> Result<(), DemoError>;
    fn undo(&self, home: &mut Home, out: &mut dyn Console) -> Result<(), DemoError>;
}

pub struct LightOnCommand {
    light: LightId,
}

impl LightOnCommand {
    pub fn new(light: LightId) -> Self {
        Self { light }
    }
}

impl Command for LightOnCommand {
    fn execute(&self, home: &mut Home, out: &mut dyn Console) -> Result<(), DemoError> {
        home.switch_light(self.light, true, out)
    }

    fn undo(&self, home: &mut Home, out: &mut dyn Console) -> Result<(), DemoError> {
        home.switch_light(self.light, false, out)
    }
}

pub struct LightOffCommand {
    light: LightId,
}

impl LightOffCommand {
    pub fn new(light: LightId) -> Self {
        Self { light }
    }
}

impl Command for LightOffCommand {
    fn execute(&self, home: &mut Home, out: &mut dyn Console) -> Result<(), DemoError> {
        home.switch_light(self.light, false, out)
    }

    fn undo(&self, home: &mut Home, out: &mut dyn Console) -> Result<(), DemoError> {
        home.switch_light(self.light, true, out)
    }
}

/// Turns the television on at a comfortable volume.
pub struct TelevisionOnCommand;

impl TelevisionOnCommand {
    pub const VOLUME: u8 = 15;
}

impl Command for TelevisionOnCommand {
    fn execute(&self, home: &mut Home, out: &mut dyn Console) -> Result<(), DemoError> {
        home.television.on(out)?;
        home.television.set_volume(Self::VOLUME, out)
    }

    fn undo(&self, home: &mut Home, out: &mut dyn Console) -> Result<(), DemoError> {
        home.television.off(out)
    }
}

/// The invoker: one programmable button plus an undo stack.
#[derive(Default)]
pub struct RemoteController {
    command: Option<Rc<dyn Command>>,
    history: Vec<Rc<dyn Command>>,
}

impl RemoteController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_command(&mut self, command: Rc<dyn Command>) {
        self.command = Some(command);
    }

    /// Executes the current command and records it. Without a command this is a no-op.
    pub fn press_button(&mut self, home: &mut Home, out: &mut dyn Console) -> Result<(), DemoError> {
        if let Some(command) = &self.command {
            command.execute(home, out)?;
            self.history.push(Rc::clone(command));
            debug!(history = self.history.len(), "Command recorded");
        }
        Ok(())
    }

    /// Undoes the most recent command. Returns `false` when the history is empty.
    pub fn press_undo(&mut self, home: &mut Home, out: &mut dyn Console) -> Result<bool, DemoError> {
        match self.history.pop() {
            Some(command) => {
                command.undo(home, out)?;
                writeln!(out, "Undo executed")?;
                Ok(true)
            }
            None => {
                writeln!(out, "No commands to undo")?;
                Ok(false)
            }
        }
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }
}

pub fn run(out: &mut dyn Console) -> Result<(), DemoError> {
    let mut home = Home::new();
    let living_room = home.add_light("Living Room");
    let kitchen = home.add_light("Kitchen");

    let living_room_on: Rc<dyn Command> = Rc::new(LightOnCommand::new(living_room));
    let kitchen_on: Rc<dyn Command> = Rc::new(LightOnCommand::new(kitchen));
    let tv_on: Rc<dyn Command> = Rc::new(TelevisionOnCommand);

    let mut remote = RemoteController::new();

    writeln!(out, "--- Executing commands ---")?;
    for command in [living_room_on, kitchen_on, tv_on] {
        remote.set_command(command);
        remote.press_button(&mut home, out)?;
    }

    writeln!(out)?;
    writeln!(out, "--- Undoing commands ---")?;
    for _ in 0..4 {
        remote.press_undo(&mut home, out)?;
    }
    Ok(())
}

pattern_demo!(
    command,
    Behavioral,
    "Command",
    "A remote control executes light and TV commands and undoes them in reverse order.",
    run
);
