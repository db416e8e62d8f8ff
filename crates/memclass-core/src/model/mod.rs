//! Classes, their properties, and the project that owns them.

mod class;
mod project;
mod property;
mod refresh;

pub use class::Class;
pub use project::ProjectData;
pub use property::Property;
pub use refresh::RefreshReport;
