// ============================================================================
// ORDER - Modelo de solicitação de manutenção
// ============================================================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::utils::date_format::format_when;

/// Estado de una solicitación. La única transición permitida es
/// `Open -> Closed`; nunca al revés.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderStatus {
    Open,
    Closed,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Open => "open",
            OrderStatus::Closed => "closed",
        }
    }
}

/// Documento crudo tal como llega del backend. El backend no garantiza
/// esquema, así que todos los campos son opcionales y la validación ocurre
/// en `OrderDetails::decode`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderRecord {
    #[serde(default)]
    pub patrimony: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub closed_at: Option<String>,
    #[serde(default)]
    pub solution: Option<String>,
}

/// Resumen para la lista de solicitações
#[derive(Debug, Clone, PartialEq)]
pub struct OrderSummary {
    pub id: String,
    pub patrimony: String,
    pub status: OrderStatus,
    pub when: String,
}

/// Detalle completo para la pantalla de solicitación
#[derive(Debug, Clone, PartialEq)]
pub struct OrderDetails {
    pub id: String,
    pub patrimony: String,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    pub when: String,
    pub description: String,
    pub solution: Option<String>,
    pub closed_when: Option<String>,
}

impl OrderDetails {
    /// Decodificar un documento remoto validando campos obligatorios.
    /// Invariante: `closed_at` presente si y solo si `status == closed`.
    pub fn decode(id: &str, record: OrderRecord) -> Result<OrderDetails, DecodeError> {
        let patrimony =
            non_empty(record.patrimony).ok_or(DecodeError::MissingField("patrimony"))?;
        let description =
            non_empty(record.description).ok_or(DecodeError::MissingField("description"))?;

        let status = match record.status.as_deref() {
            Some("open") => OrderStatus::Open,
            Some("closed") => OrderStatus::Closed,
            Some(other) => return Err(DecodeError::InvalidStatus(other.to_string())),
            None => return Err(DecodeError::MissingField("status")),
        };

        let created_at = parse_timestamp(record.created_at.as_deref(), "created_at")?
            .ok_or(DecodeError::MissingField("created_at"))?;
        let closed_at = parse_timestamp(record.closed_at.as_deref(), "closed_at")?;

        match (status, &closed_at) {
            (OrderStatus::Closed, None) | (OrderStatus::Open, Some(_)) => {
                return Err(DecodeError::InconsistentClose)
            }
            _ => {}
        }

        // "" en el wire significa ausencia: la solución pendiente es None
        let solution = non_empty(record.solution);

        Ok(OrderDetails {
            id: id.to_string(),
            patrimony,
            status,
            created_at,
            when: format_when(&created_at),
            description,
            solution,
            closed_when: closed_at.map(|ts| format_when(&ts)),
        })
    }

    pub fn summary(&self) -> OrderSummary {
        OrderSummary {
            id: self.id.clone(),
            patrimony: self.patrimony.clone(),
            status: self.status,
            when: self.when.clone(),
        }
    }

    /// La pantalla de detalle es de solo lectura cuando la solicitación
    /// ya está cerrada (derivado del estado, no es un flag aparte)
    pub fn is_read_only(&self) -> bool {
        self.status == OrderStatus::Closed
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

fn parse_timestamp(
    value: Option<&str>,
    field: &'static str,
) -> Result<Option<DateTime<Utc>>, DecodeError> {
    match value {
        None => Ok(None),
        Some(raw) if raw.trim().is_empty() => Ok(None),
        Some(raw) => DateTime::parse_from_rfc3339(raw)
            .map(|ts| Some(ts.with_timezone(&Utc)))
            .map_err(|_| DecodeError::InvalidTimestamp(field)),
    }
}

/// Error al decodificar un documento remoto mal formado
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    MissingField(&'static str),
    InvalidStatus(String),
    InvalidTimestamp(&'static str),
    InconsistentClose,
}

impl std::fmt::Display for DecodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DecodeError::MissingField(field) => write!(f, "missing field: {}", field),
            DecodeError::InvalidStatus(status) => write!(f, "invalid status: {}", status),
            DecodeError::InvalidTimestamp(field) => write!(f, "invalid timestamp in: {}", field),
            DecodeError::InconsistentClose => {
                write!(f, "closed_at must be present exactly when status is closed")
            }
        }
    }
}

impl std::error::Error for DecodeError {}

/// Error de lectura remota
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    NotFound,
    Unknown,
}

impl FetchError {
    pub fn user_message(&self) -> &'static str {
        match self {
            FetchError::NotFound => "Solicitação não encontrada.",
            FetchError::Unknown => "Não foi possível carregar os dados.",
        }
    }
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchError::NotFound => write!(f, "record not found"),
            FetchError::Unknown => write!(f, "fetch failed"),
        }
    }
}

impl std::error::Error for FetchError {}

/// Error al cerrar una solicitación
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CloseError {
    MissingSolution,
    RemoteFailure,
}

impl CloseError {
    pub fn user_message(&self) -> &'static str {
        match self {
            CloseError::MissingSolution => "Informe a solução para encerrar a solicitação.",
            CloseError::RemoteFailure => "Erro ao finalizar solicitação.",
        }
    }
}

impl std::fmt::Display for CloseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CloseError::MissingSolution => write!(f, "solution text is required"),
            CloseError::RemoteFailure => write!(f, "remote close failed"),
        }
    }
}

impl std::error::Error for CloseError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_record() -> OrderRecord {
        OrderRecord {
            patrimony: Some("123456".to_string()),
            description: Some("Monitor não liga".to_string()),
            status: Some("open".to_string()),
            created_at: Some("2022-08-12T14:00:00Z".to_string()),
            closed_at: None,
            solution: None,
        }
    }

    fn closed_record() -> OrderRecord {
        OrderRecord {
            status: Some("closed".to_string()),
            closed_at: Some("2022-08-15T09:30:00Z".to_string()),
            solution: Some("Cabo de força substituído".to_string()),
            ..open_record()
        }
    }

    #[test]
    fn decodes_open_record() {
        let order = OrderDetails::decode("abc", open_record()).unwrap();
        assert_eq!(order.id, "abc");
        assert_eq!(order.status, OrderStatus::Open);
        assert_eq!(order.when, "12/08/2022 às 14:00");
        assert_eq!(order.solution, None);
        assert_eq!(order.closed_when, None);
        assert!(!order.is_read_only());
    }

    #[test]
    fn decodes_closed_record_with_closed_at_and_solution() {
        let order = OrderDetails::decode("abc", closed_record()).unwrap();
        assert_eq!(order.status, OrderStatus::Closed);
        assert_eq!(order.solution.as_deref(), Some("Cabo de força substituído"));
        assert_eq!(order.closed_when.as_deref(), Some("15/08/2022 às 09:30"));
        assert!(order.is_read_only());
    }

    #[test]
    fn closed_without_closed_at_is_rejected() {
        let record = OrderRecord {
            closed_at: None,
            ..closed_record()
        };
        assert_eq!(
            OrderDetails::decode("abc", record),
            Err(DecodeError::InconsistentClose)
        );
    }

    #[test]
    fn open_with_closed_at_is_rejected() {
        let record = OrderRecord {
            closed_at: Some("2022-08-15T09:30:00Z".to_string()),
            ..open_record()
        };
        assert_eq!(
            OrderDetails::decode("abc", record),
            Err(DecodeError::InconsistentClose)
        );
    }

    #[test]
    fn missing_patrimony_is_rejected() {
        let record = OrderRecord {
            patrimony: None,
            ..open_record()
        };
        assert_eq!(
            OrderDetails::decode("abc", record),
            Err(DecodeError::MissingField("patrimony"))
        );
    }

    #[test]
    fn unknown_status_is_rejected() {
        let record = OrderRecord {
            status: Some("archived".to_string()),
            ..open_record()
        };
        assert_eq!(
            OrderDetails::decode("abc", record),
            Err(DecodeError::InvalidStatus("archived".to_string()))
        );
    }

    #[test]
    fn malformed_timestamp_is_rejected() {
        let record = OrderRecord {
            created_at: Some("ayer por la tarde".to_string()),
            ..open_record()
        };
        assert_eq!(
            OrderDetails::decode("abc", record),
            Err(DecodeError::InvalidTimestamp("created_at"))
        );
    }

    #[test]
    fn empty_solution_decodes_to_none() {
        let record = OrderRecord {
            solution: Some("   ".to_string()),
            ..open_record()
        };
        let order = OrderDetails::decode("abc", record).unwrap();
        assert_eq!(order.solution, None);
    }

    #[test]
    fn close_then_load_round_trip() {
        // Un documento cerrado por el backend vuelve con la misma solución
        // y un closed_at asignado por el servidor
        let record = OrderRecord {
            solution: Some("Troca do cabo de rede".to_string()),
            ..closed_record()
        };
        let order = OrderDetails::decode("id123", record).unwrap();
        assert_eq!(order.status, OrderStatus::Closed);
        assert_eq!(order.solution.as_deref(), Some("Troca do cabo de rede"));
        assert!(order.closed_when.is_some());
    }
}
