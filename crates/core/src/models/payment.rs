use super::normalize;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Disbursement recorded against an approved application.
///
/// Defaults: ids 0, `amount` 0, everything else `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaymentDetail {
    #[serde(
        rename = "id",
        alias = "Id",
        alias = "idDetallePago",
        alias = "IdDetallePago",
        alias = "id_detalle_pago",
        default,
        deserialize_with = "normalize::id"
    )]
    pub id: i64,

    #[serde(
        rename = "solicitudId",
        alias = "SolicitudId",
        alias = "idSolicitud",
        alias = "IdSolicitud",
        default,
        deserialize_with = "normalize::id"
    )]
    pub application_id: i64,

    #[serde(
        rename = "monto",
        alias = "Monto",
        default,
        deserialize_with = "normalize::amount"
    )]
    pub amount: Decimal,

    #[serde(
        rename = "fechaPago",
        alias = "FechaPago",
        default,
        deserialize_with = "normalize::opt_date",
        skip_serializing_if = "Option::is_none"
    )]
    pub paid_on: Option<NaiveDate>,

    #[serde(
        rename = "metodoPago",
        alias = "MetodoPago",
        default,
        deserialize_with = "normalize::opt_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub method: Option<String>,

    #[serde(
        rename = "referencia",
        alias = "Referencia",
        default,
        deserialize_with = "normalize::opt_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub reference: Option<String>,

    #[serde(
        rename = "estadoId",
        alias = "EstadoId",
        alias = "idEstado",
        alias = "IdEstado",
        default,
        deserialize_with = "normalize::opt_id"
    )]
    pub status_id: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_payment_from_pascal_case() {
        let payment: PaymentDetail = serde_json::from_value(json!({
            "IdDetallePago": 4,
            "IdSolicitud": "10",
            "Monto": 250.75,
            "FechaPago": "2024-05-30T00:00:00",
            "MetodoPago": "Transferencia",
            "Referencia": ""
        }))
        .unwrap();

        assert_eq!(payment.id, 4);
        assert_eq!(payment.application_id, 10);
        assert_eq!(payment.amount, Decimal::new(25_075, 2));
        assert_eq!(payment.paid_on, NaiveDate::from_ymd_opt(2024, 5, 30));
        assert_eq!(payment.method.as_deref(), Some("Transferencia"));
        assert_eq!(payment.reference, None);
    }
}
