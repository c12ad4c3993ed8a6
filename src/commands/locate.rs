use std::fs;
use std::path::{Path, PathBuf};

/// Resolved layer directories of the target solution.
#[derive(Debug, Clone)]
pub struct ProjectStructure {
    pub application_layer: PathBuf,
    pub abstraction_layer: PathBuf,
    pub controllers_layer: PathBuf,
    /// Application layer directory name, e.g. `Acme.Payments.Application`.
    /// Generated namespaces derive from it.
    pub project_name: String,
}

/// Locate the solution layout from the current directory.
///
/// Finds a `src` directory anywhere below the working directory, then the
/// first directories under it whose names contain `Application`,
/// `Abstraction` and `Controllers`. Each missing piece is an error: the
/// tool refuses to guess where generated code should land.
pub fn locate() -> Result<ProjectStructure, Box<dyn std::error::Error>> {
    locate_from(Path::new("."))
}

/// Same as [`locate`], rooted at an explicit directory.
pub fn locate_from(root: &Path) -> Result<ProjectStructure, Box<dyn std::error::Error>> {
    let src = find_dir(root, &|name| name == "src")
        .ok_or("No 'src' directory found. Are you in a solution root?")?;

    let application_layer = find_dir(&src, &|name| name.contains("Application"))
        .ok_or("No directory containing 'Application' found inside 'src'")?;
    let abstraction_layer = find_dir(&src, &|name| name.contains("Abstraction"))
        .ok_or("No directory containing 'Abstraction' found inside 'src'")?;
    let controllers_layer = find_dir(&src, &|name| name.contains("Controllers"))
        .ok_or("No directory containing 'Controllers' found inside 'src'")?;

    let project_name = application_layer
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    Ok(ProjectStructure {
        application_layer,
        abstraction_layer,
        controllers_layer,
        project_name,
    })
}

/// Depth-first search for the first directory whose name matches.
fn find_dir(root: &Path, matches: &dyn Fn(&str) -> bool) -> Option<PathBuf> {
    let entries = fs::read_dir(root).ok()?;
    let mut subdirs = Vec::new();

    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            if matches(&entry.file_name().to_string_lossy()) {
                return Some(path);
            }
            subdirs.push(path);
        }
    }

    subdirs.iter().find_map(|dir| find_dir(dir, matches))
}
