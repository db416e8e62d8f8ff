use serde::Serialize;
use tracing::debug;
use uuid::Uuid;

use crate::config::{MemclassConfig, seed};
use crate::field::PointerWidth;
use crate::memory::ReadMemory;
use crate::model::{Class, RefreshReport};

/// Every class defined in the current session.
///
/// A project is never empty: construction seeds one placeholder class, and
/// classes can only be appended afterwards. Uuids are unique within a project.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectData {
    classes: Vec<Class>,
}

impl Default for ProjectData {
    fn default() -> Self {
        Self::new()
    }
}

impl ProjectData {
    pub fn new() -> Self {
        Self::with_config(&MemclassConfig::default())
    }

    /// Creates a project whose seeded class follows `config`.
    pub fn with_config(config: &MemclassConfig) -> Self {
        let mut project = Self {
            classes: Vec::new(),
        };

        let width = seed::PLACEHOLDER_KIND.width(config.pointer_width) as u64;
        let class = project.new_class(config.seed_class_name.clone());
        for i in 0..config.seed_placeholders as u64 {
            class.push_property(i * width, seed::PLACEHOLDER_KIND);
        }

        project
    }

    /// Appends an empty, unresolved class under a fresh uuid.
    pub fn new_class(&mut self, name: impl Into<String>) -> &mut Class {
        let class = Class::new(Uuid::new_v4(), name.into());
        debug!("Created class {} ({})", class.name, class.uuid());

        self.classes.push(class);
        let last = self.classes.len() - 1;
        &mut self.classes[last]
    }

    pub fn get_class(&self, uuid: &Uuid) -> Option<&Class> {
        self.classes.iter().find(|c| c.uuid() == *uuid)
    }

    pub fn get_class_mut(&mut self, uuid: &Uuid) -> Option<&mut Class> {
        self.classes.iter_mut().find(|c| c.uuid() == *uuid)
    }

    /// Lookup by the textual uuid form. Malformed text is simply a miss.
    pub fn get_class_by_str(&self, uuid: &str) -> Option<&Class> {
        let uuid = Uuid::parse_str(uuid).ok()?;
        self.get_class(&uuid)
    }

    /// First class with the given name, in creation order.
    pub fn find_by_name(&self, name: &str) -> Option<&Class> {
        self.classes.iter().find(|c| c.name == name)
    }

    pub fn class_at(&self, index: usize) -> Option<&Class> {
        self.classes.get(index)
    }

    pub fn classes(&self) -> &[Class] {
        &self.classes
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Refreshes every class against `memory`.
    pub fn refresh_all<M>(&mut self, memory: &M, pointer_width: PointerWidth) -> RefreshReport
    where
        M: ReadMemory + ?Sized,
    {
        let mut report = RefreshReport::default();
        for class in &mut self.classes {
            report.merge(class.refresh(memory, pointer_width));
        }
        report
    }
}
