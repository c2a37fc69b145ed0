//! Display containers the rendered skills list is inserted into.

use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

use crate::fragment::{html_escape, Fragment};

pub trait SkillsView {
    /// Replace everything currently shown with `fragment`.
    fn replace_children(&mut self, fragment: &Fragment) -> Result<()>;
}

impl<V: SkillsView + ?Sized> SkillsView for Box<V> {
    fn replace_children(&mut self, fragment: &Fragment) -> Result<()> {
        (**self).replace_children(fragment)
    }
}

/// `<dl class="...">fragment</dl>`
pub fn wrap_container(container_class: &str, fragment: &Fragment) -> String {
    format!(
        "<dl class=\"{}\">{}</dl>\n",
        html_escape(container_class),
        fragment.to_html()
    )
}

/// Keeps the last render in memory.
#[derive(Debug, Default)]
pub struct MemoryView {
    fragment: Fragment,
    html: String,
    renders: usize,
}

impl MemoryView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn html(&self) -> &str {
        &self.html
    }

    /// Last rendered fragment; `None` until the first render.
    pub fn last_fragment(&self) -> Option<&Fragment> {
        (self.renders > 0).then_some(&self.fragment)
    }

    pub fn renders(&self) -> usize {
        self.renders
    }
}

impl SkillsView for MemoryView {
    fn replace_children(&mut self, fragment: &Fragment) -> Result<()> {
        self.fragment = fragment.clone();
        self.html = fragment.to_html();
        self.renders += 1;
        Ok(())
    }
}

/// Rewrites a file on every render. The new content is written to a
/// sibling temp file and renamed over the target.
pub struct FileView {
    path: PathBuf,
    container_class: String,
}

impl FileView {
    pub fn new(path: impl Into<PathBuf>, container_class: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            container_class: container_class.into(),
        }
    }
}

impl SkillsView for FileView {
    fn replace_children(&mut self, fragment: &Fragment) -> Result<()> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir).with_context(|| format!("Failed to create {}", dir.display()))?;

        let mut tmp = NamedTempFile::new_in(dir)
            .with_context(|| format!("Failed to create temp file in {}", dir.display()))?;
        tmp.write_all(wrap_container(&self.container_class, fragment).as_bytes())?;
        tmp.flush()?;
        tmp.persist(&self.path)
            .with_context(|| format!("Failed to write {}", self.path.display()))?;
        Ok(())
    }
}

/// Appends each render to a writer. Every render is a complete `<dl>`.
pub struct WriterView<W: Write> {
    writer: W,
    container_class: String,
}

pub type StdoutView = WriterView<std::io::Stdout>;

impl<W: Write> WriterView<W> {
    pub fn new(writer: W, container_class: impl Into<String>) -> Self {
        Self {
            writer,
            container_class: container_class.into(),
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl StdoutView {
    pub fn stdout(container_class: impl Into<String>) -> Self {
        Self::new(std::io::stdout(), container_class)
    }
}

impl<W: Write> SkillsView for WriterView<W> {
    fn replace_children(&mut self, fragment: &Fragment) -> Result<()> {
        self.writer
            .write_all(wrap_container(&self.container_class, fragment).as_bytes())?;
        self.writer.flush()?;
        Ok(())
    }
}
