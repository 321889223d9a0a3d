// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// NO tiene lógica de negocio, solo hace requests HTTP.
// Los errores de transporte se reportan como String; la clasificación a
// errores tipados ocurre en los viewmodels.
// ============================================================================

use gloo_net::http::Request;
use serde::Deserialize;

use crate::models::auth::{ErrorInfo, Identity, SignInRequest, SignInResponse};
use crate::models::order::{OrderRecord, OrderStatus};
use crate::utils::constants::BACKEND_URL;

/// Cliente API - SOLO comunicación HTTP (stateless)
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            base_url: BACKEND_URL.to_string(),
        }
    }

    /// Autenticar con email y contraseña.
    /// Los fallos de credenciales llegan en el body (`success: false` +
    /// `error.code`); aquí solo es error el fallo de transporte.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<SignInResponse, String> {
        let url = format!("{}/v1/auth/sign-in", self.base_url);
        let request = SignInRequest {
            email: email.to_string(),
            password: password.to_string(),
        };

        log::info!("🔐 Autenticando usuario: {}", email);

        let response = Request::post(&url)
            .json(&request)
            .map_err(|e| format!("Serialization error: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.ok() {
            return Err(format!(
                "HTTP {}: {}",
                response.status(),
                response.status_text()
            ));
        }

        response
            .json::<SignInResponse>()
            .await
            .map_err(|e| format!("Parse error: {}", e))
    }

    /// Listar solicitações filtradas por estado EN EL SERVIDOR
    /// (el filtro viaja como query param, no se filtra en el cliente)
    pub async fn fetch_orders(
        &self,
        identity: &Identity,
        status: OrderStatus,
    ) -> Result<Vec<OrderEnvelope>, String> {
        let url = format!("{}/v1/orders?status={}", self.base_url, status.as_str());

        log::info!("📋 Obteniendo solicitações con status={}", status.as_str());

        let response = Request::get(&url)
            .header("Authorization", &format!("Bearer {}", identity.token))
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.ok() {
            return Err(format!(
                "HTTP {}: {}",
                response.status(),
                response.status_text()
            ));
        }

        let orders_response = response
            .json::<OrdersResponse>()
            .await
            .map_err(|e| format!("Parse error: {}", e))?;

        log::info!("✅ {} solicitações recibidas", orders_response.orders.len());

        Ok(orders_response.orders)
    }

    /// Obtener una solicitación por id. 404 significa que no existe (Ok(None));
    /// cualquier otro fallo es error de transporte.
    pub async fn fetch_order(
        &self,
        identity: &Identity,
        order_id: &str,
    ) -> Result<Option<OrderRecord>, String> {
        let url = format!("{}/v1/orders/{}", self.base_url, order_id);

        log::info!("📄 Obteniendo solicitación: {}", order_id);

        let response = Request::get(&url)
            .header("Authorization", &format!("Bearer {}", identity.token))
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if response.status() == 404 {
            log::warn!("⚠️ Solicitación {} no existe en el backend", order_id);
            return Ok(None);
        }

        if !response.ok() {
            return Err(format!(
                "HTTP {}: {}",
                response.status(),
                response.status_text()
            ));
        }

        let record = response
            .json::<OrderRecord>()
            .await
            .map_err(|e| format!("Parse error: {}", e))?;

        Ok(Some(record))
    }

    /// Cerrar una solicitación. El backend fija `status = closed` y asigna
    /// `closed_at` con su propio reloj; el cliente solo envía la solución.
    pub async fn close_order(
        &self,
        identity: &Identity,
        order_id: &str,
        solution: &str,
    ) -> Result<(), String> {
        let url = format!("{}/v1/orders/{}/close", self.base_url, order_id);

        log::info!("🔒 Cerrando solicitación: {}", order_id);

        let response = Request::put(&url)
            .header("Authorization", &format!("Bearer {}", identity.token))
            .json(&serde_json::json!({ "solution": solution }))
            .map_err(|e| format!("Serialization error: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.ok() {
            return Err(format!(
                "HTTP {}: {}",
                response.status(),
                response.status_text()
            ));
        }

        let close_response = response
            .json::<CloseResponse>()
            .await
            .map_err(|e| format!("Parse error: {}", e))?;

        if close_response.success {
            log::info!("✅ Solicitación {} cerrada en el backend", order_id);
            Ok(())
        } else {
            let detail = close_response
                .error
                .and_then(|e| e.message)
                .unwrap_or_else(|| "sin detalle".to_string());
            Err(format!("Backend rechazó el cierre: {}", detail))
        }
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct OrderEnvelope {
    pub id: String,
    #[serde(flatten)]
    pub record: OrderRecord,
}

#[derive(Deserialize)]
struct OrdersResponse {
    #[allow(dead_code)]
    success: bool,
    #[serde(default)]
    orders: Vec<OrderEnvelope>,
}

#[derive(Deserialize)]
struct CloseResponse {
    success: bool,
    #[serde(default)]
    error: Option<ErrorInfo>,
}
