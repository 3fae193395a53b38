//! Carga de configuración del backend de archivos desde variables de entorno.
//! Usa `STATEFLOW_STATE_DIR` (por defecto `./.stateflow`).

use std::env;
use std::path::PathBuf;

use dotenvy::dotenv;
use once_cell::sync::Lazy;

pub const STATE_DIR_VAR: &str = "STATEFLOW_STATE_DIR";
pub const DEFAULT_STATE_DIR: &str = ".stateflow";

// Carga perezosa del archivo .env una sola vez.
static DOTENV_LOADED: Lazy<()> = Lazy::new(|| {
    let _ = dotenv(); // ignora error si no existe .env
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Directorio donde vive un documento JSON por corrida.
    pub state_dir: PathBuf,
}

impl StoreConfig {
    pub fn from_env() -> Self {
        // asegura que .env se haya cargado
        Lazy::force(&DOTENV_LOADED);
        Self::from_value(env::var(STATE_DIR_VAR).ok())
    }

    fn from_value(value: Option<String>) -> Self {
        let state_dir = value.filter(|v| !v.trim().is_empty())
                             .map(PathBuf::from)
                             .unwrap_or_else(|| PathBuf::from(DEFAULT_STATE_DIR));
        Self { state_dir }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::from_value(None)
    }
}

/// Forzar carga temprana de .env desde aplicaciones externas si se desea.
pub fn init_dotenv() {
    Lazy::force(&DOTENV_LOADED);
}
