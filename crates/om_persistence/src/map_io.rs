use om_world::MapDefinition;
use std::fs;
use std::path::Path;

/// Default directory for map definitions.
pub const MAPS_DIR: &str = "assets/maps";

/// Error type for map definition I/O.
#[derive(Debug)]
pub enum MapIoError {
    Io(std::io::Error),
    Ron(ron::Error),
    RonSpanned(ron::error::SpannedError),
}

impl From<std::io::Error> for MapIoError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<ron::Error> for MapIoError {
    fn from(err: ron::Error) -> Self {
        Self::Ron(err)
    }
}

impl From<ron::error::SpannedError> for MapIoError {
    fn from(err: ron::error::SpannedError) -> Self {
        Self::RonSpanned(err)
    }
}

impl std::fmt::Display for MapIoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "IO error: {}", e),
            Self::Ron(e) => write!(f, "RON serialization error: {}", e),
            Self::RonSpanned(e) => write!(f, "RON parse error: {}", e),
        }
    }
}

impl std::error::Error for MapIoError {}

/// Save a map definition to a RON file.
///
/// # Arguments
/// * `path` - File path to save to
/// * `definition` - Map definition to save
pub fn save_definition(path: &Path, definition: &MapDefinition) -> Result<(), MapIoError> {
    let pretty_config = ron::ser::PrettyConfig::new()
        .depth_limit(4)
        .separate_tuple_members(true);

    let ron_string = ron::ser::to_string_pretty(definition, pretty_config)?;
    fs::write(path, ron_string)?;
    Ok(())
}

/// Load a map definition from a RON file.
///
/// The loaded threshold profile is not validated here; sessions
/// validate it at construction.
pub fn load_definition(path: &Path) -> Result<MapDefinition, MapIoError> {
    let contents = fs::read_to_string(path)?;
    let definition: MapDefinition = ron::from_str(&contents)?;
    Ok(definition)
}

/// Ensure the maps directory exists.
pub fn ensure_maps_dir() -> Result<(), std::io::Error> {
    fs::create_dir_all(MAPS_DIR)
}

/// List all definition files in the maps directory.
pub fn list_definitions() -> Result<Vec<std::path::PathBuf>, std::io::Error> {
    let dir = Path::new(MAPS_DIR);
    if !dir.exists() {
        return Ok(Vec::new());
    }

    let mut definitions = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.extension().and_then(|s| s.to_str()) == Some("ron") {
            definitions.push(path);
        }
    }

    definitions.sort();
    Ok(definitions)
}

/// Generate a filename from a map name.
pub fn definition_filename(name: &str) -> String {
    let sanitized: String = name
        .chars()
        .map(|c| if c.is_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
        .collect();
    format!("{}.ron", sanitized.to_lowercase())
}

/// Get the full path for a definition file.
pub fn definition_path(name: &str) -> std::path::PathBuf {
    Path::new(MAPS_DIR).join(definition_filename(name))
}
