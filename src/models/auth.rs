use serde::{Deserialize, Serialize};

/// Identidad autenticada. Opaca para las pantallas: se pasa explícitamente
/// a cada viewmodel, nunca como estado global ambiente.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Identity {
    pub uid: String,
    pub email: String,
    pub token: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct SignInResponse {
    pub success: bool,
    #[serde(default)]
    pub user: Option<SessionUser>,
    #[serde(default)]
    pub error: Option<ErrorInfo>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct SessionUser {
    pub uid: String,
    pub email: String,
    pub token: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct ErrorInfo {
    pub code: Option<String>,
    pub message: Option<String>,
}

/// Error de autenticación clasificado. "user-not-found" y "wrong-password"
/// colapsan en `InvalidCredentials` para no revelar cuál de los dos falló.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    MissingCredentials,
    InvalidEmailFormat,
    InvalidCredentials,
    Unknown,
}

impl AuthError {
    /// Mensaje para el usuario final (el log de diagnóstico es aparte)
    pub fn user_message(&self) -> &'static str {
        match self {
            AuthError::MissingCredentials => "Informe e-mail e senha.",
            AuthError::InvalidEmailFormat => "E-mail inválido.",
            AuthError::InvalidCredentials => "E-mail ou senha inválida.",
            AuthError::Unknown => "Não foi possível acessar sua conta.",
        }
    }
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuthError::MissingCredentials => write!(f, "missing credentials"),
            AuthError::InvalidEmailFormat => write!(f, "invalid email format"),
            AuthError::InvalidCredentials => write!(f, "invalid credentials"),
            AuthError::Unknown => write!(f, "unknown auth error"),
        }
    }
}

impl std::error::Error for AuthError {}
