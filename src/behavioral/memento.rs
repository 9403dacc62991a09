//! # Memento
//!
//! A [`TextEditor`] captures its state in opaque [`EditorMemento`] snapshots. An
//! [`EditorHistory`] stores them as a stack, so undo restores states in reverse order of
//! capture; once the stack is empty, undo yields nothing.

use crate::framework::{pattern_demo, Console, DemoError};
use tracing::debug;

/// Immutable snapshot of the editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorMemento {
    content: String,
    cursor_position: usize,
}

impl EditorMemento {
    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn cursor_position(&self) -> usize {
        self.cursor_position
    }
}

/// The originator.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TextEditor {
    content: String,
    cursor_position: usize,
}

impl TextEditor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `text` and moves the cursor past it.
    pub fn write(&mut self, text: &str, out: &mut dyn Console) -> Result<(), DemoError> {
        self.content.push_str(text);
        self.cursor_position += text.chars().count();
        writeln!(out, "Writing: {}", text)?;
        Ok(())
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.content = text.into();
        self.cursor_position = self.content.chars().count();
    }

    /// Moves the cursor; positions outside `0..=len` are ignored.
    pub fn set_cursor(&mut self, position: usize) {
        if position <= self.content.chars().count() {
            self.cursor_position = position;
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn cursor_position(&self) -> usize {
        self.cursor_position
    }

    pub fn save(&self, out: &mut dyn Console) -> Result<EditorMemento, DemoError> {
        writeln!(out, "Saving editor state...")?;
        Ok(EditorMemento {
            content: self.content.clone(),
            cursor_position: self.cursor_position,
        })
    }

    pub fn restore(&mut self, memento: EditorMemento, out: &mut dyn Console) -> Result<(), DemoError> {
        self.content = memento.content;
        self.cursor_position = memento.cursor_position;
        writeln!(out, "Editor state restored")?;
        Ok(())
    }

    pub fn print_content(&self, out: &mut dyn Console) -> Result<(), DemoError> {
        writeln!(
            out,
            "Content: '{}' (cursor at position {})",
            self.content, self.cursor_position
        )?;
        Ok(())
    }
}

/// The caretaker: a stack of snapshots.
#[derive(Debug, Default, Clone)]
pub struct EditorHistory {
    history: Vec<EditorMemento>,
}

impl EditorHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn backup(&mut self, memento: EditorMemento) {
        self.history.push(memento);
        debug!(size = self.history.len(), "State backed up");
    }

    /// Pops the most recent snapshot, or `None` when the history is empty.
    pub fn undo(&mut self) -> Option<EditorMemento> {
        self.history.pop()
    }

    pub fn show_history(&self, out: &mut dyn Console) -> Result<(), DemoError> {
        writeln!(out, "History has {} saved states", self.history.len())?;
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }
}

pub fn run(out: &mut dyn Console) -> Result<(), DemoError> {
    let mut editor = TextEditor::new();
    let mut history = EditorHistory::new();

    writeln!(out, "--- Writing and saving states ---")?;
    for text in ["Hello ", "World!", " This is a test."] {
        editor.write(text, out)?;
        editor.print_content(out)?;
        history.backup(editor.save(out)?);
    }
    editor.write(" More text here.", out)?;
    editor.print_content(out)?;

    writeln!(out)?;
    writeln!(out, "--- Undoing changes ---")?;
    history.show_history(out)?;
    for _ in 0..3 {
        if let Some(memento) = history.undo() {
            editor.restore(memento, out)?;
            editor.print_content(out)?;
        }
    }
    history.show_history(out)?;
    Ok(())
}

pattern_demo!(
    memento,
    Behavioral,
    "Memento",
    "A text editor saves snapshots to a history stack and restores them on undo.",
    run
);
