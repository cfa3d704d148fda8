//! ll-project: the plain-text project file format, plus restoration of
//! live models from a loaded file.

pub mod error;
pub mod format;
pub mod restore;
pub mod schema;

pub use error::{ProjectError, ProjectResult};
pub use format::{from_text, to_text};
pub use restore::{RestoredModels, capture_models, restore_models};
pub use schema::ProjectFile;

/// Load a project from a text file.
pub fn load(path: &std::path::Path) -> ProjectResult<ProjectFile> {
    let content = std::fs::read_to_string(path)?;
    from_text(&content)
}

/// Save a project to a text file.
pub fn save(path: &std::path::Path, project: &ProjectFile) -> ProjectResult<()> {
    std::fs::write(path, to_text(project))?;
    Ok(())
}
