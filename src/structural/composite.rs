//! # Composite
//!
//! Files and folders share one [`FileSystemComponent`] interface, so a folder's size and
//! listing are computed the same way whether its children are files or further folders.

use crate::framework::{pattern_demo, Console, DemoError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File {
    name: String,
    size: u64,
}

impl File {
    pub fn new(name: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            size,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Folder {
    name: String,
    children: Vec<FileSystemComponent>,
}

impl Folder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: Vec::new(),
        }
    }

    pub fn add(&mut self, component: impl Into<FileSystemComponent>) {
        self.children.push(component.into());
    }

    /// Detaches the first direct child called `name`.
    pub fn remove(&mut self, name: &str) -> Option<FileSystemComponent> {
        let index = self.children.iter().position(|child| child.name() == name)?;
        Some(self.children.remove(index))
    }

    /// The first direct child called `name`.
    pub fn child(&self, name: &str) -> Option<&FileSystemComponent> {
        self.children.iter().find(|child| child.name() == name)
    }

    pub fn children(&self) -> &[FileSystemComponent] {
        &self.children
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileSystemComponent {
    File(File),
    Folder(Folder),
}

impl From<File> for FileSystemComponent {
    fn from(file: File) -> Self {
        FileSystemComponent::File(file)
    }
}

impl From<Folder> for FileSystemComponent {
    fn from(folder: Folder) -> Self {
        FileSystemComponent::Folder(folder)
    }
}

impl FileSystemComponent {
    pub fn name(&self) -> &str {
        match self {
            FileSystemComponent::File(file) => &file.name,
            FileSystemComponent::Folder(folder) => &folder.name,
        }
    }

    /// Size in KB; a folder's size is the sum of its children's.
    pub fn size(&self) -> u64 {
        match self {
            FileSystemComponent::File(file) => file.size,
            FileSystemComponent::Folder(folder) => {
                folder.children.iter().map(FileSystemComponent::size).sum()
            }
        }
    }

    /// Prints this component and everything below it. Nested lines carry a fixed
    /// two-space indent whatever their depth.
    pub fn show_details(&self, out: &mut dyn Console) -> Result<(), DemoError> {
        self.show_nested(false, out)
    }

    fn show_nested(&self, nested: bool, out: &mut dyn Console) -> Result<(), DemoError> {
        let indent = if nested { "  " } else { "" };
        match self {
            FileSystemComponent::File(file) => {
                writeln!(out, "{}File: {} (Size: {} KB)", indent, file.name, file.size)?;
            }
            FileSystemComponent::Folder(folder) => {
                writeln!(
                    out,
                    "{}Folder: {} (Total Size: {} KB)",
                    indent,
                    folder.name,
                    self.size()
                )?;
                for child in &folder.children {
                    child.show_nested(true, out)?;
                }
            }
        }
        Ok(())
    }
}

pub fn sample_tree() -> FileSystemComponent {
    let mut documents = Folder::new("My Documents");
    documents.add(File::new("Document.txt", 10));

    let mut media = Folder::new("Media");
    media.add(File::new("Image.jpg", 500));
    media.add(File::new("Video.mp4", 2000));

    let mut root = Folder::new("Root");
    root.add(documents);
    root.add(media);
    root.add(File::new("README.md", 5));
    root.into()
}

pub fn run(out: &mut dyn Console) -> Result<(), DemoError> {
    let root = sample_tree();

    writeln!(out, "File System Structure:")?;
    root.show_details(out)?;

    writeln!(out)?;
    writeln!(out, "--- Individual Folder ---")?;
    if let FileSystemComponent::Folder(folder) = &root {
        if let Some(media) = folder.child("Media") {
            media.show_details(out)?;
        }
    }
    Ok(())
}

pattern_demo!(
    composite,
    Structural,
    "Composite",
    "Files and nested folders report sizes and listings through one component interface.",
    run
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::Transcript;

    #[test]
    fn test_size_sums_recursively() {
        let root = sample_tree();
        assert_eq!(root.size(), 2515);
        assert_eq!(FileSystemComponent::from(Folder::new("Empty")).size(), 0);
    }

    #[test]
    fn test_nested_lines_share_one_indent() {
        let mut inner = Folder::new("inner");
        inner.add(File::new("deep.txt", 1));
        let mut outer = Folder::new("outer");
        outer.add(inner);

        let mut out = Transcript::new();
        FileSystemComponent::from(outer).show_details(&mut out).unwrap();
        assert_eq!(
            out.lines(),
            vec![
                "Folder: outer (Total Size: 1 KB)",
                "  Folder: inner (Total Size: 1 KB)",
                "  File: deep.txt (Size: 1 KB)",
            ]
        );
    }

    #[test]
    fn test_remove_by_name() {
        let mut folder = Folder::new("Media");
        folder.add(File::new("a.jpg", 3));
        folder.add(File::new("b.jpg", 4));

        let removed = folder.remove("a.jpg");
        assert_eq!(removed, Some(File::new("a.jpg", 3).into()));
        assert!(folder.remove("a.jpg").is_none());
        assert_eq!(folder.children().len(), 1);
        assert_eq!(FileSystemComponent::from(folder).size(), 4);
    }
}
