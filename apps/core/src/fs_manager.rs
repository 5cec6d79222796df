use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Name of the JSON file that backs the persisted page state.
const STORE_FILENAME: &str = "local_storage.json";

pub struct PortablePathManager;

impl PortablePathManager {
    /// Root directory of the application: the working directory, or the executable's folder as a fallback.
    pub fn root_dir() -> PathBuf {
        match std::env::current_dir() {
            Ok(path) => path,
            Err(e) => {
                warn!("Failed to get current directory: {}. Falling back to exe dir.", e);
                std::env::current_exe()
                    .ok()
                    .and_then(|exe| exe.parent().map(Path::to_path_buf))
                    .unwrap_or_else(|| PathBuf::from("."))
            }
        }
    }

    /// Default data directory (./data).
    pub fn default_data_dir() -> PathBuf {
        Self::root_dir().join("data")
    }

    /// Location of the key-value store file inside `data_dir`.
    pub fn store_file(data_dir: &Path) -> PathBuf {
        data_dir.join(STORE_FILENAME)
    }

    /// Creates `data_dir` if it doesn't exist.
    pub fn init(data_dir: &Path) -> Result<(), std::io::Error> {
        if !data_dir.exists() {
            info!("Creating data directory: {:?}", data_dir);
            fs::create_dir_all(data_dir)?;
        }
        Ok(())
    }
}
