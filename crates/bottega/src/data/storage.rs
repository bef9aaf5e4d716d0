//! Per-scenario file storage
//!
//! Directory structure:
//! ~/.bottega/
//!   bottega.log          # Only with --log-file
//!   scenarios/
//!     reference.yaml
//!     summer.yaml

use std::fs;
use std::path::{Path, PathBuf};

use super::scenario_data::ScenarioData;
use crate::util::io::atomic_write;

/// Error types for storage operations
#[derive(Debug)]
pub enum StorageError {
    Io(String),
    Parse(String),
    Serialize(String),
    /// Refused to overwrite an existing scenario file
    AlreadyExists(PathBuf),
    /// Neither a file nor a scenario in the data directory
    NotFound(String),
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::Io(msg) => write!(f, "IO error: {}", msg),
            StorageError::Parse(msg) => write!(f, "Parse error: {}", msg),
            StorageError::Serialize(msg) => write!(f, "Serialization error: {}", msg),
            StorageError::AlreadyExists(path) => {
                write!(f, "{} already exists (use --force to overwrite)", path.display())
            }
            StorageError::NotFound(name) => write!(f, "scenario {:?} not found", name),
        }
    }
}

impl std::error::Error for StorageError {}

/// Manages the data directory for per-scenario file storage
pub struct DataDirectory {
    root: PathBuf,
}

impl DataDirectory {
    /// Create a new DataDirectory instance
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Get the default data directory path (~/.bottega/)
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".bottega")
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Get the path to the scenarios directory
    fn scenarios_dir(&self) -> PathBuf {
        self.root.join("scenarios")
    }

    /// Get the path to a specific scenario file
    pub fn scenario_path(&self, name: &str) -> PathBuf {
        self.scenarios_dir()
            .join(format!("{}.yaml", sanitize_filename(name)))
    }

    /// Check if the data directory exists and has been initialized
    pub fn exists(&self) -> bool {
        self.root.exists() && self.scenarios_dir().exists()
    }

    /// Initialize the data directory structure
    pub fn init(&self) -> Result<(), StorageError> {
        fs::create_dir_all(self.scenarios_dir()).map_err(|e| {
            StorageError::Io(format!("Failed to create scenarios directory: {}", e))
        })
    }

    /// Names of all stored scenarios, sorted
    pub fn list_scenarios(&self) -> Result<Vec<String>, StorageError> {
        if !self.exists() {
            return Ok(Vec::new());
        }
        let entries = fs::read_dir(self.scenarios_dir())
            .map_err(|e| StorageError::Io(format!("Failed to read scenarios directory: {}", e)))?;

        let mut names: Vec<String> = entries
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .filter(|path| path.extension().is_some_and(|ext| ext == "yaml"))
            .filter_map(|path| path.file_stem().map(|s| s.to_string_lossy().into_owned()))
            .collect();
        names.sort();
        Ok(names)
    }

    /// Resolve a scenario argument: an existing file path wins, otherwise the
    /// argument is a scenario name in the data directory.
    pub fn resolve(&self, scenario: &str) -> Result<PathBuf, StorageError> {
        let as_path = Path::new(scenario);
        if as_path.is_file() {
            return Ok(as_path.to_path_buf());
        }
        let stored = self.scenario_path(scenario);
        if stored.is_file() {
            Ok(stored)
        } else {
            Err(StorageError::NotFound(scenario.to_string()))
        }
    }

    /// Load a scenario by path or name
    pub fn load_scenario(&self, scenario: &str) -> Result<ScenarioData, StorageError> {
        let path = self.resolve(scenario)?;
        tracing::info!(path = %path.display(), "loading scenario");
        load_scenario_from_path(&path)
    }

    /// Save a scenario under its name, refusing to clobber unless `overwrite`
    pub fn save_scenario(
        &self,
        data: &ScenarioData,
        overwrite: bool,
    ) -> Result<PathBuf, StorageError> {
        if !self.exists() {
            self.init()?;
        }

        let path = self.scenario_path(&data.name);
        if path.exists() && !overwrite {
            return Err(StorageError::AlreadyExists(path));
        }

        let yaml = data
            .to_yaml()
            .map_err(|e| StorageError::Serialize(format!("Failed to serialize scenario: {}", e)))?;

        atomic_write(&path, &yaml)
            .map_err(|e| StorageError::Io(format!("Failed to write scenario: {}", e)))?;
        tracing::info!(path = %path.display(), "saved scenario");
        Ok(path)
    }
}

/// Load a scenario from an explicit file
pub fn load_scenario_from_path(path: &Path) -> Result<ScenarioData, StorageError> {
    let content = fs::read_to_string(path)
        .map_err(|e| StorageError::Io(format!("Failed to read file: {}", e)))?;

    ScenarioData::from_yaml(&content)
        .map_err(|e| StorageError::Parse(format!("Failed to parse YAML: {}", e)))
}

/// Sanitize a scenario name for use as a filename
fn sanitize_filename(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '-' || c == '_' || c == ' ' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_data_directory_init() {
        let temp_dir = TempDir::new().unwrap();
        let data_dir = DataDirectory::new(temp_dir.path().join(".bottega"));

        assert_eq!(data_dir.root(), temp_dir.path().join(".bottega"));
        assert!(!data_dir.exists());
        data_dir.init().unwrap();
        assert!(data_dir.exists());
        assert!(data_dir.list_scenarios().unwrap().is_empty());
    }

    #[test]
    fn test_save_and_load_by_name() {
        let temp_dir = TempDir::new().unwrap();
        let data_dir = DataDirectory::new(temp_dir.path().to_path_buf());

        let scenario = ScenarioData::reference();
        let path = data_dir.save_scenario(&scenario, false).unwrap();
        assert_eq!(path, data_dir.scenario_path("reference"));

        let loaded = data_dir.load_scenario("reference").unwrap();
        assert_eq!(loaded, scenario);
        assert_eq!(data_dir.list_scenarios().unwrap(), vec!["reference"]);
    }

    #[test]
    fn test_save_refuses_overwrite_without_flag() {
        let temp_dir = TempDir::new().unwrap();
        let data_dir = DataDirectory::new(temp_dir.path().to_path_buf());
        let scenario = ScenarioData::reference();

        data_dir.save_scenario(&scenario, false).unwrap();
        assert!(matches!(
            data_dir.save_scenario(&scenario, false),
            Err(StorageError::AlreadyExists(_))
        ));
        assert!(data_dir.save_scenario(&scenario, true).is_ok());
    }

    #[test]
    fn test_resolve_prefers_existing_path() {
        let temp_dir = TempDir::new().unwrap();
        let data_dir = DataDirectory::new(temp_dir.path().join("data"));
        let file = temp_dir.path().join("custom.yaml");
        fs::write(&file, ScenarioData::reference().to_yaml().unwrap()).unwrap();

        let resolved = data_dir.resolve(file.to_str().unwrap()).unwrap();
        assert_eq!(resolved, file);
        assert!(matches!(
            data_dir.resolve("nowhere"),
            Err(StorageError::NotFound(_))
        ));
    }

    #[test]
    fn test_parse_error_is_reported() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("broken.yaml");
        fs::write(&file, "name: broken\nparameters: 12\n").unwrap();

        assert!(matches!(
            load_scenario_from_path(&file),
            Err(StorageError::Parse(_))
        ));
    }

    #[test]
    fn test_sanitize_filename() {
        assert_eq!(sanitize_filename("Los Falcone"), "Los Falcone");
        assert_eq!(sanitize_filename("a/b:c"), "a_b_c");
    }
}
