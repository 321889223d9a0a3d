// ============================================================================
// AUTH VIEWMODEL - Puerta de sesión
// ============================================================================
// Valida credenciales localmente, delega en el backend y clasifica los
// códigos de fallo del proveedor en un conjunto cerrado de errores.
// ============================================================================

use crate::models::auth::{AuthError, Identity};
use crate::services::{ApiClient, SessionService};

pub struct AuthViewModel {
    api: ApiClient,
}

impl AuthViewModel {
    pub fn new() -> Self {
        Self {
            api: ApiClient::new(),
        }
    }

    /// Autenticar. Con credenciales vacías falla de inmediato SIN tocar la
    /// red; cualquier fallo del proveedor llega clasificado.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<Identity, AuthError> {
        validate_credentials(email, password)?;

        let response = self.api.sign_in(email, password).await.map_err(|e| {
            log::error!("❌ [AUTH] Error de transporte en sign-in: {}", e);
            AuthError::Unknown
        })?;

        if !response.success {
            let code = response
                .error
                .and_then(|info| info.code)
                .unwrap_or_default();
            let classified = classify_auth_code(&code);
            log::warn!("⚠️ [AUTH] Login rechazado (code={}): {}", code, classified);
            return Err(classified);
        }

        let user = response.user.ok_or_else(|| {
            log::error!("❌ [AUTH] Respuesta sin datos de usuario");
            AuthError::Unknown
        })?;

        log::info!("✅ [AUTH] Login exitoso: {}", user.email);

        Ok(Identity {
            uid: user.uid,
            email: user.email,
            token: user.token,
        })
    }

    /// Cerrar sesión: elimina la identidad persistida
    pub fn sign_out(&self) {
        log::info!("👋 [AUTH] Logout");
        if let Err(e) = SessionService::new().clear_identity() {
            log::warn!("⚠️ [AUTH] Error limpiando identidad: {}", e);
        }
    }
}

impl Default for AuthViewModel {
    fn default() -> Self {
        Self::new()
    }
}

/// Ambos campos son obligatorios; si falta alguno no se contacta al proveedor
pub fn validate_credentials(email: &str, password: &str) -> Result<(), AuthError> {
    if email.is_empty() || password.is_empty() {
        return Err(AuthError::MissingCredentials);
    }
    Ok(())
}

/// Clasificar el código de fallo del proveedor. "user-not-found" y
/// "wrong-password" se reportan igual para no revelar cuál falló.
pub fn classify_auth_code(code: &str) -> AuthError {
    match code {
        "invalid-email" => AuthError::InvalidEmailFormat,
        "user-not-found" | "wrong-password" => AuthError::InvalidCredentials,
        _ => AuthError::Unknown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_email_fails_before_any_network_call() {
        assert_eq!(
            validate_credentials("", "x"),
            Err(AuthError::MissingCredentials)
        );
    }

    #[test]
    fn empty_password_fails_before_any_network_call() {
        assert_eq!(
            validate_credentials("a@b.com", ""),
            Err(AuthError::MissingCredentials)
        );
    }

    #[test]
    fn complete_credentials_pass_local_validation() {
        assert_eq!(validate_credentials("a@b.com", "secret"), Ok(()));
    }

    #[test]
    fn wrong_password_maps_to_invalid_credentials() {
        assert_eq!(
            classify_auth_code("wrong-password"),
            AuthError::InvalidCredentials
        );
    }

    #[test]
    fn user_not_found_is_indistinguishable_from_wrong_password() {
        assert_eq!(
            classify_auth_code("user-not-found"),
            classify_auth_code("wrong-password")
        );
    }

    #[test]
    fn invalid_email_code_maps_to_invalid_email_format() {
        assert_eq!(
            classify_auth_code("invalid-email"),
            AuthError::InvalidEmailFormat
        );
    }

    #[test]
    fn unrecognized_codes_map_to_unknown() {
        assert_eq!(classify_auth_code("quota-exceeded"), AuthError::Unknown);
        assert_eq!(classify_auth_code(""), AuthError::Unknown);
    }
}
