use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Editor persistent-data directory, relative to the home directory.
const STORAGE_DIR_STABLE: &str = "Library/Application Support/Code/User/globalStorage";
const STORAGE_DIR_INSIDERS: &str =
    "Library/Application Support/Code - Insiders/User/globalStorage";

/// Editor CLI binary inside the app bundle.
const CODE_BIN_STABLE: &str =
    "/Applications/Visual Studio Code.app/Contents/Resources/app/bin/code";
const CODE_BIN_INSIDERS: &str =
    "/Applications/Visual Studio Code - Insiders.app/Contents/Resources/app/bin/code";

/// Global configuration loaded from `~/.config/vhm/config.toml`.
///
/// Constructed once at process start and passed by reference; no module
/// decides paths or flavors on its own.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VhmConfig {
    /// Target the Insiders build of the editor (different storage dir,
    /// binary, pinned file and menubar icon).
    #[serde(default)]
    pub insiders: bool,
    /// Maximum label length the menu asks xbar to display (`length=`).
    /// Labels themselves are never truncated.
    pub max_label_length: usize,
    /// Shell used to run menu actions.
    pub shell: String,
    /// Override the editor's globalStorage directory.
    #[serde(default)]
    pub global_storage_dir: Option<PathBuf>,
    /// Override the editor CLI binary.
    #[serde(default)]
    pub code_bin: Option<PathBuf>,
    /// Override where the pinned list is stored.
    #[serde(default)]
    pub pinned_file: Option<PathBuf>,
}

impl Default for VhmConfig {
    fn default() -> Self {
        Self {
            insiders: false,
            max_label_length: 120,
            shell: "/bin/zsh".to_string(),
            global_storage_dir: None,
            code_bin: None,
            pinned_file: None,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("vhm")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<VhmConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = VhmConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: VhmConfig = toml::from_str(&data)?;
    Ok(cfg)
}

/// Everything path-like, resolved once at startup.
///
/// The home directory is the single environment read the classifier
/// depends on; all other paths derive from it and the config.
#[derive(Debug, Clone)]
pub struct Locations {
    /// Home directory; labels are rendered relative to it.
    pub home: PathBuf,
    /// The editor's globalStorage directory.
    pub global_storage_dir: PathBuf,
    /// The history database (`state.vscdb`) inside globalStorage.
    pub state_db: PathBuf,
    /// The window-state file (`storage.json`) inside globalStorage.
    pub window_state: PathBuf,
    /// Editor CLI binary used by menu actions.
    pub code_bin: PathBuf,
    /// vhm's own pinned-entry list.
    pub pinned_file: PathBuf,
}

impl Locations {
    /// Resolve all paths from the config and the environment.
    pub fn resolve(cfg: &VhmConfig) -> Result<Self> {
        let home = dirs::home_dir().context("cannot resolve home directory")?;
        Self::resolve_with_home(cfg, home)
    }

    /// Resolve with an explicit home directory (the environment read is the
    /// caller's).
    pub fn resolve_with_home(cfg: &VhmConfig, home: PathBuf) -> Result<Self> {
        let global_storage_dir = match &cfg.global_storage_dir {
            Some(dir) => dir.clone(),
            None => home.join(if cfg.insiders {
                STORAGE_DIR_INSIDERS
            } else {
                STORAGE_DIR_STABLE
            }),
        };
        let code_bin = match &cfg.code_bin {
            Some(bin) => bin.clone(),
            None => PathBuf::from(if cfg.insiders {
                CODE_BIN_INSIDERS
            } else {
                CODE_BIN_STABLE
            }),
        };
        let pinned_file = match &cfg.pinned_file {
            Some(path) => path.clone(),
            None => {
                let xdg_dirs = xdg::BaseDirectories::with_prefix("vhm")?;
                let name = if cfg.insiders {
                    "pinned.insiders.json"
                } else {
                    "pinned.json"
                };
                xdg_dirs.get_state_home().join("vhm").join(name)
            }
        };

        Ok(Locations {
            state_db: global_storage_dir.join("state.vscdb"),
            window_state: global_storage_dir.join("storage.json"),
            home,
            global_storage_dir,
            code_bin,
            pinned_file,
        })
    }
}
