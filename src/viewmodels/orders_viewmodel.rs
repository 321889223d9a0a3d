// ============================================================================
// ORDERS VIEWMODEL - Proyección de la lista de solicitações
// ============================================================================

use crate::models::auth::Identity;
use crate::models::order::{FetchError, OrderDetails, OrderStatus, OrderSummary};
use crate::services::{ApiClient, OrderEnvelope};

pub struct OrdersViewModel {
    api: ApiClient,
}

impl OrdersViewModel {
    pub fn new() -> Self {
        Self {
            api: ApiClient::new(),
        }
    }

    /// Cargar los resúmenes para el filtro dado. El filtro se aplica en el
    /// servidor; una lista vacía es un resultado normal, nunca un error.
    pub async fn load_orders(
        &self,
        identity: &Identity,
        status: OrderStatus,
    ) -> Result<Vec<OrderSummary>, FetchError> {
        let envelopes = self.api.fetch_orders(identity, status).await.map_err(|e| {
            log::error!("❌ [ORDERS] Error obteniendo la lista: {}", e);
            FetchError::Unknown
        })?;

        Ok(project_summaries(envelopes))
    }
}

impl Default for OrdersViewModel {
    fn default() -> Self {
        Self::new()
    }
}

/// Proyectar documentos crudos a resúmenes de vista. Documentos mal formados
/// se descartan con un warning en vez de invalidar la lista entera. Orden:
/// más recientes primero (created_at descendente).
pub fn project_summaries(envelopes: Vec<OrderEnvelope>) -> Vec<OrderSummary> {
    let mut decoded: Vec<OrderDetails> = envelopes
        .into_iter()
        .filter_map(|envelope| match OrderDetails::decode(&envelope.id, envelope.record) {
            Ok(details) => Some(details),
            Err(e) => {
                log::warn!(
                    "⚠️ [ORDERS] Documento {} inválido, ignorado: {}",
                    envelope.id,
                    e
                );
                None
            }
        })
        .collect();

    decoded.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    decoded.into_iter().map(|details| details.summary()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::order::{OrderRecord, OrderStatus};

    fn envelope(id: &str, status: &str, created_at: &str, closed_at: Option<&str>) -> OrderEnvelope {
        OrderEnvelope {
            id: id.to_string(),
            record: OrderRecord {
                patrimony: Some("778899".to_string()),
                description: Some("Sem acesso à rede".to_string()),
                status: Some(status.to_string()),
                created_at: Some(created_at.to_string()),
                closed_at: closed_at.map(|ts| ts.to_string()),
                solution: None,
            },
        }
    }

    #[test]
    fn projects_server_filtered_records_as_summaries() {
        // El servidor ya filtró: aquí solo llegan las abiertas
        let summaries = project_summaries(vec![envelope(
            "a1",
            "open",
            "2022-08-12T14:00:00Z",
            None,
        )]);
        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].id, "a1");
        assert_eq!(summaries[0].status, OrderStatus::Open);
        assert_eq!(summaries[0].when, "12/08/2022 às 14:00");
    }

    #[test]
    fn newest_orders_come_first() {
        let summaries = project_summaries(vec![
            envelope("old", "open", "2022-08-10T08:00:00Z", None),
            envelope("new", "open", "2022-08-12T14:00:00Z", None),
        ]);
        assert_eq!(summaries[0].id, "new");
        assert_eq!(summaries[1].id, "old");
    }

    #[test]
    fn malformed_documents_are_skipped_not_fatal() {
        let broken = OrderEnvelope {
            id: "broken".to_string(),
            record: OrderRecord::default(),
        };
        let summaries = project_summaries(vec![
            broken,
            envelope("ok", "open", "2022-08-12T14:00:00Z", None),
        ]);
        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].id, "ok");
    }

    #[test]
    fn empty_response_projects_to_empty_list() {
        assert!(project_summaries(Vec::new()).is_empty());
    }
}
