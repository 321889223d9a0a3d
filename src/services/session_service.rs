use crate::models::auth::Identity;
use crate::utils::constants::STORAGE_KEY_IDENTITY;
use crate::utils::storage::{load_from_storage, remove_from_storage, save_to_storage};

/// Persistencia de la sesión autenticada en localStorage.
/// Solo se guarda la identidad: las solicitações nunca se cachean localmente.
pub struct SessionService;

impl SessionService {
    pub fn new() -> Self {
        Self
    }

    pub fn save_identity(&self, identity: &Identity) -> Result<(), String> {
        save_to_storage(STORAGE_KEY_IDENTITY, identity)?;
        log::info!("💾 Identidad guardada en localStorage");
        Ok(())
    }

    pub fn load_identity(&self) -> Option<Identity> {
        load_from_storage::<Identity>(STORAGE_KEY_IDENTITY)
    }

    pub fn clear_identity(&self) -> Result<(), String> {
        remove_from_storage(STORAGE_KEY_IDENTITY)?;
        log::info!("🗑️ Identidad eliminada de localStorage");
        Ok(())
    }
}

impl Default for SessionService {
    fn default() -> Self {
        Self::new()
    }
}
