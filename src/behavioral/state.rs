//! # State
//!
//! A vending machine whose behavior is delegated to the currently active state object.
//!
//! ```text
//! NoCoin --insert--> HasCoin --select--> Dispensing --dispense--> NoCoin (stock left)
//!    ^                  |                                   \---> OutOfStock (terminal)
//!    +------eject-------+
//! ```
//!
//! States are stateless unit structs. The machine owns the stock and remembers only a
//! [`StateId`]; every state operation receives a [`Slot`] to the machine's stock and
//! returns the id of the next state. Invalid operations are not errors: they print a
//! fixed notice and keep the current state.

use crate::framework::{pattern_demo, Console, DemoError};
use tracing::debug;

/// Identifies one of the machine's states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StateId {
    NoCoin,
    HasCoin,
    Dispensing,
    OutOfStock,
}

/// Mutable view of the machine handed to state objects.
pub struct Slot<'a> {
    product_count: &'a mut u32,
    out: &'a mut dyn Console,
}

impl Slot<'_> {
    pub fn product_count(&self) -> u32 {
        *self.product_count
    }

    /// Releases one product. Stock never goes below zero.
    pub fn release_product(&mut self) -> Result<(), DemoError> {
        if *self.product_count > 0 {
            *self.product_count -= 1;
            writeln!(self.out, "Product released. Products remaining: {}", self.product_count)?;
        }
        Ok(())
    }

    fn say(&mut self, notice: &str) -> Result<(), DemoError> {
        writeln!(self.out, "{}", notice)?;
        Ok(())
    }
}

/// Operations every state must answer. Each returns the next state.
pub trait VendingMachineState {
    fn insert_coin(&self, slot: &mut Slot<'_>) -> Result<StateId, DemoError>;
    fn eject_coin(&self, slot: &mut Slot<'_>) -> Result<StateId, DemoError>;
    fn select_product(&self, slot: &mut Slot<'_>) -> Result<StateId, DemoError>;
    fn dispense(&self, slot: &mut Slot<'_>) -> Result<StateId, DemoError>;
}

pub struct NoCoinState;

impl VendingMachineState for NoCoinState {
    fn insert_coin(&self, slot: &mut Slot<'_>) -> Result<StateId, DemoError> {
        slot.say("Coin inserted")?;
        Ok(StateId::HasCoin)
    }

    fn eject_coin(&self, slot: &mut Slot<'_>) -> Result<StateId, DemoError> {
        slot.say("No coin to eject")?;
        Ok(StateId::NoCoin)
    }

    fn select_product(&self, slot: &mut Slot<'_>) -> Result<StateId, DemoError> {
        slot.say("Please insert coin first")?;
        Ok(StateId::NoCoin)
    }

    fn dispense(&self, slot: &mut Slot<'_>) -> Result<StateId, DemoError> {
        slot.say("Please insert coin first")?;
        Ok(StateId::NoCoin)
    }
}

pub struct HasCoinState;

impl VendingMachineState for HasCoinState {
    fn insert_coin(&self, slot: &mut Slot<'_>) -> Result<StateId, DemoError> {
        slot.say("Coin already inserted")?;
        Ok(StateId::HasCoin)
    }

    fn eject_coin(&self, slot: &mut Slot<'_>) -> Result<StateId, DemoError> {
        slot.say("Coin ejected")?;
        Ok(StateId::NoCoin)
    }

    fn select_product(&self, slot: &mut Slot<'_>) -> Result<StateId, DemoError> {
        slot.say("Product selected")?;
        Ok(StateId::Dispensing)
    }

    fn dispense(&self, slot: &mut Slot<'_>) -> Result<StateId, DemoError> {
        slot.say("Please select product first")?;
        Ok(StateId::HasCoin)
    }
}

pub struct DispensingState;

impl VendingMachineState for DispensingState {
    fn insert_coin(&self, slot: &mut Slot<'_>) -> Result<StateId, DemoError> {
        slot.say("Please wait, dispensing product")?;
        Ok(StateId::Dispensing)
    }

    fn eject_coin(&self, slot: &mut Slot<'_>) -> Result<StateId, DemoError> {
        slot.say("Cannot eject coin, already dispensing")?;
        Ok(StateId::Dispensing)
    }

    fn select_product(&self, slot: &mut Slot<'_>) -> Result<StateId, DemoError> {
        slot.say("Product already selected")?;
        Ok(StateId::Dispensing)
    }

    fn dispense(&self, slot: &mut Slot<'_>) -> Result<StateId, DemoError> {
        if slot.product_count() == 0 {
            return Ok(StateId::OutOfStock);
        }
        slot.say("Dispensing product...")?;
        slot.release_product()?;
        if slot.product_count() > 0 {
            Ok(StateId::NoCoin)
        } else {
            slot.say("Out of products!")?;
            Ok(StateId::OutOfStock)
        }
    }
}

/// Terminal state: rejects everything.
pub struct OutOfStockState;

impl VendingMachineState for OutOfStockState {
    fn insert_coin(&self, slot: &mut Slot<'_>) -> Result<StateId, DemoError> {
        slot.say("Machine is out of stock. Coin ejected.")?;
        Ok(StateId::OutOfStock)
    }

    fn eject_coin(&self, slot: &mut Slot<'_>) -> Result<StateId, DemoError> {
        slot.say("No coin to eject")?;
        Ok(StateId::OutOfStock)
    }

    fn select_product(&self, slot: &mut Slot<'_>) -> Result<StateId, DemoError> {
        slot.say("Machine is out of stock")?;
        Ok(StateId::OutOfStock)
    }

    fn dispense(&self, slot: &mut Slot<'_>) -> Result<StateId, DemoError> {
        slot.say("Machine is out of stock")?;
        Ok(StateId::OutOfStock)
    }
}

impl StateId {
    /// The state object implementing this state.
    pub fn behavior(self) -> &'static dyn VendingMachineState {
        match self {
            StateId::NoCoin => &NoCoinState,
            StateId::HasCoin => &HasCoinState,
            StateId::Dispensing => &DispensingState,
            StateId::OutOfStock => &OutOfStockState,
        }
    }
}

/// The context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VendingMachine {
    state: StateId,
    product_count: u32,
}

impl VendingMachine {
    /// A machine without stock starts out of stock.
    pub fn new(product_count: u32) -> Self {
        let state = if product_count > 0 {
            StateId::NoCoin
        } else {
            StateId::OutOfStock
        };
        Self {
            state,
            product_count,
        }
    }

    pub fn state(&self) -> StateId {
        self.state
    }

    pub fn product_count(&self) -> u32 {
        self.product_count
    }

    pub fn insert_coin(&mut self, out: &mut dyn Console) -> Result<(), DemoError> {
        self.apply(out, |state, slot| state.insert_coin(slot))
    }

    pub fn eject_coin(&mut self, out: &mut dyn Console) -> Result<(), DemoError> {
        self.apply(out, |state, slot| state.eject_coin(slot))
    }

    /// Selects a product and immediately asks the resulting state to dispense.
    pub fn select_product(&mut self, out: &mut dyn Console) -> Result<(), DemoError> {
        self.apply(out, |state, slot| state.select_product(slot))?;
        self.apply(out, |state, slot| state.dispense(slot))
    }

    fn apply<F>(&mut self, out: &mut dyn Console, operation: F) -> Result<(), DemoError>
    where
        F: FnOnce(&dyn VendingMachineState, &mut Slot<'_>) -> Result<StateId, DemoError>,
    {
        let mut slot = Slot {
            product_count: &mut self.product_count,
            out,
        };
        let next = operation(self.state.behavior(), &mut slot)?;
        if next != self.state {
            debug!(from = ?self.state, to = ?next, stock = self.product_count, "Transition");
            self.state = next;
        }
        Ok(())
    }
}

pub fn run(out: &mut dyn Console) -> Result<(), DemoError> {
    writeln!(out, "=== Vending Machine with 3 products ===")?;
    writeln!(out)?;
    let mut machine = VendingMachine::new(3);

    writeln!(out, "--- Purchase 1 ---")?;
    machine.insert_coin(out)?;
    machine.select_product(out)?;

    writeln!(out)?;
    writeln!(out, "--- Purchase 2 ---")?;
    machine.insert_coin(out)?;
    machine.select_product(out)?;

    writeln!(out)?;
    writeln!(out, "--- Attempt without coin ---")?;
    machine.select_product(out)?;

    writeln!(out)?;
    writeln!(out, "--- Insert and eject coin ---")?;
    machine.insert_coin(out)?;
    machine.eject_coin(out)?;

    writeln!(out)?;
    writeln!(out, "--- Purchase 3 (last product) ---")?;
    machine.insert_coin(out)?;
    machine.select_product(out)?;

    writeln!(out)?;
    writeln!(out, "--- Attempt when out of stock ---")?;
    machine.insert_coin(out)?;
    machine.select_product(out)?;
    Ok(())
}

pattern_demo!(
    state,
    Behavioral,
    "State",
    "A vending machine delegates coin and product operations to its current state.",
    run
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::Transcript;

    #[test]
    fn test_n_purchases_exhaust_stock() {
        for stock in 1..=4 {
            let mut machine = VendingMachine::new(stock);
            let mut out = Transcript::new();

            for purchase in 1..=stock {
                assert_eq!(machine.state(), StateId::NoCoin, "before purchase {purchase}");
                machine.insert_coin(&mut out).unwrap();
                machine.select_product(&mut out).unwrap();
            }
            assert_eq!(machine.state(), StateId::OutOfStock);
            assert_eq!(machine.product_count(), 0);

            out.clear();
            machine.insert_coin(&mut out).unwrap();
            assert_eq!(out.lines(), vec!["Machine is out of stock. Coin ejected."]);
            assert_eq!(machine.state(), StateId::OutOfStock);
        }
    }

    #[test]
    fn test_empty_machine_starts_out_of_stock() {
        let machine = VendingMachine::new(0);
        assert_eq!(machine.state(), StateId::OutOfStock);
    }

    #[test]
    fn test_select_without_coin_keeps_state() {
        let mut machine = VendingMachine::new(2);
        let mut out = Transcript::new();

        machine.select_product(&mut out).unwrap();

        assert_eq!(machine.state(), StateId::NoCoin);
        assert_eq!(machine.product_count(), 2);
        assert_eq!(
            out.lines(),
            vec!["Please insert coin first", "Please insert coin first"]
        );
    }

    #[test]
    fn test_eject_returns_to_no_coin() {
        let mut machine = VendingMachine::new(1);
        let mut out = Transcript::new();

        machine.insert_coin(&mut out).unwrap();
        machine.insert_coin(&mut out).unwrap();
        assert_eq!(machine.state(), StateId::HasCoin);
        machine.eject_coin(&mut out).unwrap();
        assert_eq!(machine.state(), StateId::NoCoin);
        machine.eject_coin(&mut out).unwrap();

        assert_eq!(
            out.lines(),
            vec!["Coin inserted", "Coin already inserted", "Coin ejected", "No coin to eject"]
        );
    }

    #[test]
    fn test_dispensing_state_rejects_coin_operations() {
        let mut count = 1;
        let mut out = Transcript::new();
        let mut slot = Slot {
            product_count: &mut count,
            out: &mut out,
        };

        assert_eq!(DispensingState.insert_coin(&mut slot).unwrap(), StateId::Dispensing);
        assert_eq!(DispensingState.eject_coin(&mut slot).unwrap(), StateId::Dispensing);
        assert_eq!(DispensingState.select_product(&mut slot).unwrap(), StateId::Dispensing);
        assert_eq!(HasCoinState.dispense(&mut slot).unwrap(), StateId::HasCoin);
        drop(slot);

        assert_eq!(
            out.lines(),
            vec![
                "Please wait, dispensing product",
                "Cannot eject coin, already dispensing",
                "Product already selected",
                "Please select product first",
            ]
        );
    }
}
