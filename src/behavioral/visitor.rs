//! # Visitor
//!
//! The part hierarchy of a computer is closed, so it is modelled as a sum type and every
//! operation is a single function that matches on the part kind. [`ComputerPart::walk`]
//! fixes the traversal order shared by all operations: the children of a composite are
//! visited before the composite itself.

use crate::framework::{pattern_demo, Console, DemoError};
use std::fmt::Write as _;

#[derive(Debug, Clone, PartialEq)]
pub enum ComputerPart {
    Keyboard { price: f64 },
    Monitor { price: f64, screen_size: u32 },
    Mouse { price: f64 },
    Computer(Vec<ComputerPart>),
}

impl ComputerPart {
    /// The standard computer: keyboard, 24" monitor and mouse.
    pub fn standard_computer() -> Self {
        ComputerPart::Computer(vec![
            ComputerPart::Keyboard { price: 50.0 },
            ComputerPart::Monitor {
                price: 300.0,
                screen_size: 24,
            },
            ComputerPart::Mouse { price: 25.0 },
        ])
    }

    /// Visits every part depth-first, children before their composite.
    pub fn walk<E>(&self, visit: &mut impl FnMut(&ComputerPart) -> Result<(), E>) -> Result<(), E> {
        if let ComputerPart::Computer(parts) = self {
            for part in parts {
                part.walk(visit)?;
            }
        }
        visit(self)
    }
}

/// Prints every priced part and the running total; returns the total.
pub fn price(part: &ComputerPart, out: &mut dyn Console) -> Result<f64, DemoError> {
    let mut total = 0.0;
    part.walk(&mut |part| -> Result<(), DemoError> {
        match part {
            ComputerPart::Keyboard { price } => {
                total += price;
                writeln!(out, "Keyboard price: ${:?}", price)?;
            }
            ComputerPart::Monitor { price, screen_size } => {
                total += price;
                writeln!(out, "Monitor price: ${:?} (Screen size: {}\")", price, screen_size)?;
            }
            ComputerPart::Mouse { price } => {
                total += price;
                writeln!(out, "Mouse price: ${:?}", price)?;
            }
            ComputerPart::Computer(_) => {
                writeln!(out, "Total computer price: ${:?}", total)?;
            }
        }
        Ok(())
    })?;
    Ok(total)
}

pub fn display(part: &ComputerPart, out: &mut dyn Console) -> Result<(), DemoError> {
    part.walk(&mut |part| -> Result<(), DemoError> {
        let kind = match part {
            ComputerPart::Keyboard { .. } => "Keyboard",
            ComputerPart::Monitor { .. } => "Monitor",
            ComputerPart::Mouse { .. } => "Mouse",
            ComputerPart::Computer(_) => "Computer",
        };
        writeln!(out, "Displaying {}", kind)?;
        Ok(())
    })
}

/// Exports the leaf parts as XML wrapped in a `<Computer>` element.
pub fn to_xml(part: &ComputerPart) -> Result<String, DemoError> {
    let mut body = String::new();
    part.walk(&mut |part| -> Result<(), DemoError> {
        match part {
            ComputerPart::Keyboard { price } => {
                writeln!(body, "<Keyboard price=\"{:?}\"/>", price)?;
            }
            ComputerPart::Monitor { price, screen_size } => {
                writeln!(
                    body,
                    "<Monitor price=\"{:?}\" screenSize=\"{}\"/>",
                    price, screen_size
                )?;
            }
            ComputerPart::Mouse { price } => {
                writeln!(body, "<Mouse price=\"{:?}\"/>", price)?;
            }
            ComputerPart::Computer(_) => {}
        }
        Ok(())
    })?;
    Ok(format!("<Computer>\n{}</Computer>", body))
}

pub fn run(out: &mut dyn Console) -> Result<(), DemoError> {
    let computer = ComputerPart::standard_computer();

    writeln!(out, "=== Price Calculation ===")?;
    price(&computer, out)?;

    writeln!(out)?;
    writeln!(out, "=== Display Operation ===")?;
    display(&computer, out)?;

    writeln!(out)?;
    writeln!(out, "=== XML Export ===")?;
    writeln!(out, "{}", to_xml(&computer)?)?;
    Ok(())
}

pattern_demo!(
    visitor,
    Behavioral,
    "Visitor",
    "Pricing, display and XML export operations dispatch over a closed set of computer parts.",
    run
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::Transcript;

    #[test]
    fn test_price_sums_leaves() {
        let mut out = Transcript::new();
        let total = price(&ComputerPart::standard_computer(), &mut out).unwrap();
        assert_eq!(total, 375.0);
        assert_eq!(out.lines().last().copied(), Some("Total computer price: $375.0"));
    }

    #[test]
    fn test_nested_computers_visit_children_first() {
        let rack = ComputerPart::Computer(vec![
            ComputerPart::Mouse { price: 10.0 },
            ComputerPart::Computer(vec![ComputerPart::Keyboard { price: 5.0 }]),
        ]);
        let mut out = Transcript::new();
        display(&rack, &mut out).unwrap();
        assert_eq!(
            out.lines(),
            vec![
                "Displaying Mouse",
                "Displaying Keyboard",
                "Displaying Computer",
                "Displaying Computer",
            ]
        );
    }

    #[test]
    fn test_xml_export() {
        let xml = to_xml(&ComputerPart::standard_computer()).unwrap();
        assert_eq!(
            xml,
            "<Computer>\n\
             <Keyboard price=\"50.0\"/>\n\
             <Monitor price=\"300.0\" screenSize=\"24\"/>\n\
             <Mouse price=\"25.0\"/>\n\
             </Computer>"
        );
    }
}
