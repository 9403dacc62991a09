//! # Proxy
//!
//! [`ProxyImage`] stands in for a [`RealImage`] and defers the expensive disk load until
//! the first `display`. Later calls reuse the loaded image.

use crate::framework::{pattern_demo, Console, DemoError};

pub trait Image {
    fn display(&mut self, out: &mut dyn Console) -> Result<(), DemoError>;
}

/// Loads eagerly on construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RealImage {
    file_name: String,
}

impl RealImage {
    pub fn load(file_name: impl Into<String>, out: &mut dyn Console) -> Result<Self, DemoError> {
        let file_name = file_name.into();
        writeln!(out, "Loading image from disk: {}", file_name)?;
        Ok(Self { file_name })
    }
}

impl Image for RealImage {
    fn display(&mut self, out: &mut dyn Console) -> Result<(), DemoError> {
        writeln!(out, "Displaying image: {}", self.file_name)?;
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyImage {
    file_name: String,
    real_image: Option<RealImage>,
}

impl ProxyImage {
    pub fn new(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            real_image: None,
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.real_image.is_some()
    }
}

impl Image for ProxyImage {
    fn display(&mut self, out: &mut dyn Console) -> Result<(), DemoError> {
        let image = match &mut self.real_image {
            Some(image) => image,
            slot @ None => slot.insert(RealImage::load(self.file_name.clone(), out)?),
        };
        image.display(out)
    }
}

pub fn run(out: &mut dyn Console) -> Result<(), DemoError> {
    let mut image: Box<dyn Image> = Box::new(ProxyImage::new("test.jpg"));

    writeln!(out, "First call to display():")?;
    image.display(out)?;

    writeln!(out)?;
    writeln!(out, "Second call to display():")?;
    image.display(out)
}

pattern_demo!(
    proxy,
    Structural,
    "Proxy",
    "A proxy image loads the real image from disk only on first display.",
    run
);
