//! # Chain of Responsibility
//!
//! A purchase request walks a singly linked list of approvers. Each approver has a fixed
//! spending ceiling; the first one whose ceiling covers the amount approves and the walk
//! stops. Ceilings are checked in chain order (manager, director, CEO), not by closest
//! match. If the end of the chain is reached, the request is reported as unhandled.

use crate::framework::{pattern_demo, Console, DemoError};
use std::fmt::{self, Display};
use tracing::debug;

/// A request for approval of a purchase.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PurchaseRequest {
    amount: f64,
}

impl PurchaseRequest {
    pub fn new(amount: f64) -> Self {
        Self { amount }
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }
}

impl Display for PurchaseRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PurchaseRequest{{amount={:?}}}", self.amount)
    }
}

/// Who sits in the chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Manager,
    Director,
    Ceo,
}

impl Role {
    /// Highest amount this role may approve, inclusive.
    pub fn ceiling(self) -> f64 {
        match self {
            Role::Manager => 1000.0,
            Role::Director => 5000.0,
            Role::Ceo => 10000.0,
        }
    }
}

impl Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Role::Manager => "Manager",
            Role::Director => "Director",
            Role::Ceo => "CEO",
        };
        f.write_str(label)
    }
}

/// Outcome of walking the chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Approved(Role),
    Unhandled,
}

/// A link in the approval chain.
pub trait PurchaseHandler {
    fn handle_request(
        &self,
        request: &PurchaseRequest,
        out: &mut dyn Console,
    ) -> Result<Decision, DemoError>;
}

/// Approver with a ceiling and an optional successor.
pub struct Approver {
    role: Role,
    next: Option<Box<dyn PurchaseHandler>>,
}

impl Approver {
    pub fn new(role: Role) -> Self {
        Self { role, next: None }
    }

    /// Sets the handler that receives requests this approver cannot cover.
    pub fn with_next(mut self, next: impl PurchaseHandler + 'static) -> Self {
        self.next = Some(Box::new(next));
        self
    }

    pub fn role(&self) -> Role {
        self.role
    }
}

impl PurchaseHandler for Approver {
    fn handle_request(
        &self,
        request: &PurchaseRequest,
        out: &mut dyn Console,
    ) -> Result<Decision, DemoError> {
        if request.amount() <= self.role.ceiling() {
            writeln!(out, "{} can approve purchase request: {}", self.role, request)?;
            return Ok(Decision::Approved(self.role));
        }
        match &self.next {
            Some(next) => {
                debug!(role = %self.role, amount = request.amount(), "Forwarding request");
                next.handle_request(request, out)
            }
            None => {
                writeln!(out, "No handler can approve purchase request: {}", request)?;
                Ok(Decision::Unhandled)
            }
        }
    }
}

/// Builds the manager → director → CEO chain.
pub fn approval_chain() -> Approver {
    Approver::new(Role::Manager)
        .with_next(Approver::new(Role::Director).with_next(Approver::new(Role::Ceo)))
}

pub fn run(out: &mut dyn Console) -> Result<(), DemoError> {
    let manager = approval_chain();

    for amount in [500.0, 5000.0, 15000.0] {
        manager.handle_request(&PurchaseRequest::new(amount), out)?;
    }
    Ok(())
}

pattern_demo!(
    chain_of_responsibility,
    Behavioral,
    "Chain of Responsibility",
    "Purchase requests climb manager, director and CEO until one can approve.",
    run
);
