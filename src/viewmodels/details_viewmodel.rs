// ============================================================================
// DETAILS VIEWMODEL - Sincronizador del detalle de una solicitación
// ============================================================================
// Lectura one-shot del documento + la única mutación permitida: cerrar la
// solicitación con un texto de solución no vacío.
// ============================================================================

use crate::models::auth::Identity;
use crate::models::order::{CloseError, FetchError, OrderDetails};
use crate::services::ApiClient;

pub struct DetailsViewModel {
    api: ApiClient,
}

impl DetailsViewModel {
    pub fn new() -> Self {
        Self {
            api: ApiClient::new(),
        }
    }

    /// Lectura one-shot del detalle. 404 -> NotFound; transporte o documento
    /// mal formado -> Unknown.
    pub async fn load_order(
        &self,
        identity: &Identity,
        order_id: &str,
    ) -> Result<OrderDetails, FetchError> {
        match self.api.fetch_order(identity, order_id).await {
            Ok(Some(record)) => OrderDetails::decode(order_id, record).map_err(|e| {
                log::error!("❌ [DETAILS] Documento {} mal formado: {}", order_id, e);
                FetchError::Unknown
            }),
            Ok(None) => Err(FetchError::NotFound),
            Err(e) => {
                log::error!("❌ [DETAILS] Error cargando {}: {}", order_id, e);
                Err(FetchError::Unknown)
            }
        }
    }

    /// Cerrar la solicitación. La precondición local va primero: con borrador
    /// vacío o solo espacios NO se emite ninguna escritura remota.
    /// No hay compare-and-swap contra el status actual: si dos clientes
    /// cierran a la vez gana la última escritura.
    pub async fn close_order(
        &self,
        identity: &Identity,
        order_id: &str,
        solution_draft: &str,
    ) -> Result<(), CloseError> {
        validate_solution(solution_draft)?;

        self.api
            .close_order(identity, order_id, solution_draft)
            .await
            .map_err(|e| {
                log::error!("❌ [DETAILS] Error cerrando {}: {}", order_id, e);
                CloseError::RemoteFailure
            })
    }
}

impl Default for DetailsViewModel {
    fn default() -> Self {
        Self::new()
    }
}

/// Para cerrar hace falta una solución con contenido real
pub fn validate_solution(draft: &str) -> Result<(), CloseError> {
    if draft.trim().is_empty() {
        return Err(CloseError::MissingSolution);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_draft_is_rejected() {
        assert_eq!(validate_solution(""), Err(CloseError::MissingSolution));
    }

    #[test]
    fn whitespace_only_draft_is_rejected() {
        assert_eq!(validate_solution("   "), Err(CloseError::MissingSolution));
        assert_eq!(
            validate_solution("\n\t  \n"),
            Err(CloseError::MissingSolution)
        );
    }

    #[test]
    fn real_content_passes() {
        assert_eq!(validate_solution("Cabo substituído"), Ok(()));
        assert_eq!(validate_solution("  ok  "), Ok(()));
    }
}
