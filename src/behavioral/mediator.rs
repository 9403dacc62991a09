//! # Mediator
//!
//! Chat participants never talk to each other directly. The [`ChatRoom`] owns every
//! participant and relays each message to everyone except the sender.
//!
//! Participants are addressed by [`UserId`] handles into the room, so there are no
//! back-references from users to the room.

use crate::framework::{pattern_demo, Console, DemoError};
use tracing::{debug, warn};

/// Handle to a participant registered in a [`ChatRoom`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(usize);

/// Contract of a chat participant.
pub trait Colleague {
    fn name(&self) -> &str;

    fn receive(&mut self, message: &str, out: &mut dyn Console) -> Result<(), DemoError>;
}

/// Participant that prints what it receives and keeps an inbox.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatUser {
    name: String,
    inbox: Vec<String>,
}

impl ChatUser {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            inbox: Vec::new(),
        }
    }

    pub fn inbox(&self) -> &[String] {
        &self.inbox
    }
}

impl Colleague for ChatUser {
    fn name(&self) -> &str {
        &self.name
    }

    fn receive(&mut self, message: &str, out: &mut dyn Console) -> Result<(), DemoError> {
        writeln!(out, "{} received: {}", self.name, message)?;
        self.inbox.push(message.to_string());
        Ok(())
    }
}

/// The mediator.
#[derive(Debug, Default)]
pub struct ChatRoom<C = ChatUser> {
    users: Vec<C>,
}

impl<C: Colleague> ChatRoom<C> {
    pub fn new() -> Self {
        Self { users: Vec::new() }
    }

    pub fn add_user(&mut self, user: C) -> UserId {
        self.users.push(user);
        UserId(self.users.len() - 1)
    }

    pub fn user(&self, id: UserId) -> Option<&C> {
        self.users.get(id.0)
    }

    /// Announces and relays `message` from `sender` to every other participant, in
    /// registration order. Returns the number of deliveries; an unknown sender delivers
    /// nothing.
    pub fn send(
        &mut self,
        sender: UserId,
        message: &str,
        out: &mut dyn Console,
    ) -> Result<usize, DemoError> {
        let Some(from) = self.users.get(sender.0) else {
            warn!(?sender, "Unknown sender");
            return Ok(0);
        };
        writeln!(out, "{} sending: {}", from.name(), message)?;

        let mut delivered = 0;
        for (index, user) in self.users.iter_mut().enumerate() {
            if index != sender.0 {
                user.receive(message, out)?;
                delivered += 1;
            }
        }
        debug!(?sender, delivered, "Message relayed");
        Ok(delivered)
    }
}

pub fn run(out: &mut dyn Console) -> Result<(), DemoError> {
    let mut room = ChatRoom::new();
    let alice = room.add_user(ChatUser::new("Alice"));
    let bob = room.add_user(ChatUser::new("Bob"));
    let charlie = room.add_user(ChatUser::new("Charlie"));
    room.add_user(ChatUser::new("Diana"));

    writeln!(out, "--- Chat Room Communication ---")?;
    room.send(alice, "Hello everyone!", out)?;
    writeln!(out)?;
    room.send(bob, "Hi Alice!", out)?;
    writeln!(out)?;
    room.send(charlie, "Good morning!", out)?;
    Ok(())
}

pattern_demo!(
    mediator,
    Behavioral,
    "Mediator",
    "A chat room relays each message to every participant except its sender.",
    run
);
