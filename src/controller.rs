//! Wires a `SkillsStore` to a display and to sort-button clicks.

use anyhow::Result;
use tracing::{debug, error, info};

use crate::skill::SortKey;
use crate::source::SkillsSource;
use crate::store::SkillsStore;
use crate::view::SkillsView;

/// What a sort button can ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    SortByName,
    SortByLevel,
}

impl Command {
    /// Translate a clicked element's data attribute. Unknown or missing
    /// values sort by level.
    pub fn from_attr(attr: Option<&str>) -> Self {
        match SortKey::from_attr(attr) {
            SortKey::Name => Command::SortByName,
            SortKey::Level => Command::SortByLevel,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerState {
    Uninitialized,
    Rendered,
    Error,
}

pub struct UiController<V: SkillsView> {
    store: SkillsStore,
    view: V,
    state: ControllerState,
}

impl<V: SkillsView> UiController<V> {
    pub fn new(view: V) -> Self {
        Self {
            store: SkillsStore::new(),
            view,
            state: ControllerState::Uninitialized,
        }
    }

    /// Fetch the skills document and perform the first render.
    ///
    /// Fetch or parse failures are logged and leave the display untouched.
    /// Only a failing display write is returned as an error.
    pub async fn initialize(&mut self, source: &dyn SkillsSource) -> Result<()> {
        info!("Loading skills from {}", source.describe());

        let json = match source.fetch().await {
            Ok(json) => json,
            Err(e) => {
                error!("Oops, something went wrong! {}", e);
                self.state = ControllerState::Error;
                return Ok(());
            }
        };

        self.store.set_skills_list(&json);
        info!("Loaded {} skills", self.store.len());
        self.render()?;
        self.state = ControllerState::Rendered;
        Ok(())
    }

    /// A click on the buttons block, identified by the target's data attribute.
    pub fn handle_click(&mut self, attr: Option<&str>) -> Result<()> {
        let command = Command::from_attr(attr);
        debug!("Click {:?} -> {:?}", attr, command);
        self.dispatch(command)
    }

    pub fn dispatch(&mut self, command: Command) -> Result<()> {
        match command {
            Command::SortByName => self.store.sort_skills_list(SortKey::Name),
            Command::SortByLevel => self.store.sort_skills_list(SortKey::Level),
        }
        self.render()
    }

    fn render(&mut self) -> Result<()> {
        let fragment = self.store.generate_skills_list();
        self.view.replace_children(&fragment)
    }

    pub fn store(&self) -> &SkillsStore {
        &self.store
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn state(&self) -> ControllerState {
        self.state
    }
}
