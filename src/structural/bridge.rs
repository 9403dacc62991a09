//! # Bridge
//!
//! Remotes (the abstraction) and devices (the implementation) vary independently: any
//! [`RemoteControl`] drives any [`Device`] through the device trait object it holds.

use crate::framework::{pattern_demo, Console, DemoError};

/// Implementation side.
pub trait Device {
    fn turn_on(&mut self, out: &mut dyn Console) -> Result<(), DemoError>;
    fn turn_off(&mut self, out: &mut dyn Console) -> Result<(), DemoError>;
    fn set_volume(&mut self, volume: u32, out: &mut dyn Console) -> Result<(), DemoError>;
    fn volume(&self) -> u32;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tv {
    volume: u32,
}

impl Default for Tv {
    fn default() -> Self {
        Self { volume: 10 }
    }
}

impl Device for Tv {
    fn turn_on(&mut self, out: &mut dyn Console) -> Result<(), DemoError> {
        writeln!(out, "TV: Turning on, current volume: {}", self.volume)?;
        Ok(())
    }

    fn turn_off(&mut self, out: &mut dyn Console) -> Result<(), DemoError> {
        writeln!(out, "TV: Turning off")?;
        Ok(())
    }

    fn set_volume(&mut self, volume: u32, out: &mut dyn Console) -> Result<(), DemoError> {
        self.volume = volume;
        writeln!(out, "TV: Setting volume to {}", volume)?;
        Ok(())
    }

    fn volume(&self) -> u32 {
        self.volume
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Radio {
    volume: u32,
}

impl Default for Radio {
    fn default() -> Self {
        Self { volume: 5 }
    }
}

impl Device for Radio {
    fn turn_on(&mut self, out: &mut dyn Console) -> Result<(), DemoError> {
        writeln!(out, "Radio: Turning on, current volume: {}", self.volume)?;
        Ok(())
    }

    fn turn_off(&mut self, out: &mut dyn Console) -> Result<(), DemoError> {
        writeln!(out, "Radio: Turning off")?;
        Ok(())
    }

    fn set_volume(&mut self, volume: u32, out: &mut dyn Console) -> Result<(), DemoError> {
        self.volume = volume;
        writeln!(out, "Radio: Setting volume to {}", volume)?;
        Ok(())
    }

    fn volume(&self) -> u32 {
        self.volume
    }
}

/// Abstraction side. Implementors only provide access to their device and a volume policy.
pub trait RemoteControl {
    fn device(&mut self) -> &mut dyn Device;

    fn set_volume(&mut self, volume: u32, out: &mut dyn Console) -> Result<(), DemoError>;

    /// Announces the toggle, then turns the device on.
    fn toggle_power(&mut self, out: &mut dyn Console) -> Result<(), DemoError> {
        writeln!(out, "Remote: Toggling power")?;
        self.device().turn_on(out)
    }
}

pub struct BasicRemote {
    device: Box<dyn Device>,
}

impl BasicRemote {
    pub fn new(device: impl Device + 'static) -> Self {
        Self {
            device: Box::new(device),
        }
    }
}

impl RemoteControl for BasicRemote {
    fn device(&mut self) -> &mut dyn Device {
        self.device.as_mut()
    }

    fn set_volume(&mut self, volume: u32, out: &mut dyn Console) -> Result<(), DemoError> {
        writeln!(out, "BasicRemote: Setting volume")?;
        self.device.set_volume(volume, out)
    }
}

pub struct AdvancedRemote {
    device: Box<dyn Device>,
}

impl AdvancedRemote {
    pub fn new(device: impl Device + 'static) -> Self {
        Self {
            device: Box::new(device),
        }
    }

    pub fn mute(&mut self, out: &mut dyn Console) -> Result<(), DemoError> {
        writeln!(out, "AdvancedRemote: Muting device")?;
        self.device.set_volume(0, out)
    }
}

impl RemoteControl for AdvancedRemote {
    fn device(&mut self) -> &mut dyn Device {
        self.device.as_mut()
    }

    fn set_volume(&mut self, volume: u32, out: &mut dyn Console) -> Result<(), DemoError> {
        writeln!(out, "AdvancedRemote: Setting volume with extra features")?;
        self.device.set_volume(volume, out)
    }
}

pub fn run(out: &mut dyn Console) -> Result<(), DemoError> {
    let mut basic_remote = BasicRemote::new(Tv::default());
    basic_remote.toggle_power(out)?;
    basic_remote.set_volume(15, out)?;

    writeln!(out)?;

    let mut advanced_remote = AdvancedRemote::new(Radio::default());
    advanced_remote.toggle_power(out)?;
    advanced_remote.set_volume(20, out)?;
    advanced_remote.mute(out)
}

pattern_demo!(
    bridge,
    Structural,
    "Bridge",
    "Basic and advanced remotes drive a TV and a radio through one device interface.",
    run
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::Transcript;

    #[test]
    fn test_any_remote_drives_any_device() {
        let mut out = Transcript::new();

        let mut remote = AdvancedRemote::new(Tv::default());
        remote.toggle_power(&mut out).unwrap();
        remote.mute(&mut out).unwrap();
        assert_eq!(remote.device().volume(), 0);

        let mut remote = BasicRemote::new(Radio::default());
        remote.set_volume(7, &mut out).unwrap();
        assert_eq!(remote.device().volume(), 7);

        assert_eq!(
            out.lines(),
            vec![
                "Remote: Toggling power",
                "TV: Turning on, current volume: 10",
                "AdvancedRemote: Muting device",
                "TV: Setting volume to 0",
                "BasicRemote: Setting volume",
                "Radio: Setting volume to 7",
            ]
        );
    }

    #[test]
    fn test_turn_off() {
        let mut out = Transcript::new();
        let mut remote = BasicRemote::new(Radio::default());
        remote.device().turn_off(&mut out).unwrap();
        assert_eq!(out.lines(), vec!["Radio: Turning off"]);
    }
}
