use super::normalize;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A student's request for a scholarship type within an academic period.
///
/// Defaults: ids 0, `status_id` `None` (the backend assigns the initial state),
/// display names and dates `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Application {
    #[serde(
        rename = "id",
        alias = "Id",
        alias = "idSolicitud",
        alias = "IdSolicitud",
        alias = "id_solicitud",
        default,
        deserialize_with = "normalize::id"
    )]
    pub id: i64,

    #[serde(
        rename = "estudianteId",
        alias = "EstudianteId",
        alias = "idEstudiante",
        alias = "IdEstudiante",
        default,
        deserialize_with = "normalize::id"
    )]
    pub student_id: i64,

    #[serde(
        rename = "tipoBecaId",
        alias = "TipoBecaId",
        alias = "idTipoBeca",
        alias = "IdTipoBeca",
        default,
        deserialize_with = "normalize::id"
    )]
    pub scholarship_type_id: i64,

    #[serde(
        rename = "periodoId",
        alias = "PeriodoId",
        alias = "idPeriodo",
        alias = "IdPeriodo",
        alias = "periodoAcademicoId",
        default,
        deserialize_with = "normalize::id"
    )]
    pub period_id: i64,

    #[serde(
        rename = "estadoId",
        alias = "EstadoId",
        alias = "idEstado",
        alias = "IdEstado",
        default,
        deserialize_with = "normalize::opt_id"
    )]
    pub status_id: Option<i64>,

    #[serde(
        rename = "fechaSolicitud",
        alias = "FechaSolicitud",
        default,
        deserialize_with = "normalize::opt_date",
        skip_serializing_if = "Option::is_none"
    )]
    pub submitted_on: Option<NaiveDate>,

    #[serde(
        rename = "observaciones",
        alias = "Observaciones",
        default,
        deserialize_with = "normalize::opt_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub notes: Option<String>,

    #[serde(
        rename = "montoAprobado",
        alias = "MontoAprobado",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub approved_amount: Option<Decimal>,

    /// Joined display names some list endpoints include; never sent back
    #[serde(
        rename = "estudianteNombre",
        alias = "EstudianteNombre",
        alias = "nombreEstudiante",
        default,
        deserialize_with = "normalize::opt_text",
        skip_serializing
    )]
    pub student_name: Option<String>,

    #[serde(
        rename = "tipoBecaNombre",
        alias = "TipoBecaNombre",
        alias = "nombreTipoBeca",
        default,
        deserialize_with = "normalize::opt_text",
        skip_serializing
    )]
    pub scholarship_type_name: Option<String>,

    #[serde(
        rename = "estadoNombre",
        alias = "EstadoNombre",
        alias = "nombreEstado",
        default,
        deserialize_with = "normalize::opt_text",
        skip_serializing
    )]
    pub status_name: Option<String>,
}

/// Body of `PUT /solicitudes/{id}/estado`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusChange {
    #[serde(rename = "estadoId")]
    pub status_id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_joined_names_are_read_but_not_written() {
        let app: Application = serde_json::from_value(json!({
            "IdSolicitud": 10,
            "IdEstudiante": 3,
            "IdTipoBeca": 2,
            "IdPeriodo": 1,
            "IdEstado": 1,
            "FechaSolicitud": "2024-04-02T10:11:12",
            "NombreEstudiante": "Ana Torres",
            "EstadoNombre": "Pendiente"
        }))
        .unwrap();

        assert_eq!(app.id, 10);
        assert_eq!(app.status_id, Some(1));
        assert_eq!(app.student_name.as_deref(), Some("Ana Torres"));
        assert_eq!(app.status_name.as_deref(), Some("Pendiente"));

        let value = serde_json::to_value(&app).unwrap();
        assert!(value.get("estudianteNombre").is_none());
        assert_eq!(value["fechaSolicitud"], "2024-04-02");
        assert_eq!(value["estudianteId"], 3);
    }
}
