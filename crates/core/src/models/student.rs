use super::normalize;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Student registry entry.
///
/// | field | default when missing |
/// |---|---|
/// | `id` | 0 (not yet persisted) |
/// | `national_id`, `first_names`, `last_names`, `email` | empty string |
/// | `phone`, `career_id`, `semester`, `gpa`, `status_id`, `registered_on` | `None` |
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Student {
    #[serde(
        rename = "id",
        alias = "Id",
        alias = "idEstudiante",
        alias = "IdEstudiante",
        alias = "id_estudiante",
        default,
        deserialize_with = "normalize::id"
    )]
    pub id: i64,

    #[serde(
        rename = "cedula",
        alias = "Cedula",
        default,
        deserialize_with = "normalize::text"
    )]
    pub national_id: String,

    #[serde(
        rename = "nombres",
        alias = "Nombres",
        alias = "nombre",
        alias = "Nombre",
        default,
        deserialize_with = "normalize::text"
    )]
    pub first_names: String,

    #[serde(
        rename = "apellidos",
        alias = "Apellidos",
        alias = "apellido",
        alias = "Apellido",
        default,
        deserialize_with = "normalize::text"
    )]
    pub last_names: String,

    #[serde(
        rename = "correo",
        alias = "Correo",
        alias = "email",
        alias = "Email",
        default,
        deserialize_with = "normalize::text"
    )]
    pub email: String,

    #[serde(
        rename = "telefono",
        alias = "Telefono",
        default,
        deserialize_with = "normalize::opt_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub phone: Option<String>,

    #[serde(
        rename = "carreraId",
        alias = "CarreraId",
        alias = "idCarrera",
        alias = "IdCarrera",
        alias = "carrera_id",
        default,
        deserialize_with = "normalize::opt_id"
    )]
    pub career_id: Option<i64>,

    #[serde(
        rename = "semestre",
        alias = "Semestre",
        default,
        deserialize_with = "normalize::opt_int"
    )]
    pub semester: Option<i32>,

    #[serde(rename = "promedio", alias = "Promedio", default)]
    pub gpa: Option<Decimal>,

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
        rename = "fechaRegistro",
        alias = "FechaRegistro",
        default,
        deserialize_with = "normalize::opt_date",
        skip_serializing_if = "Option::is_none"
    )]
    pub registered_on: Option<NaiveDate>,
}

impl Student {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_names, self.last_names)
            .trim()
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_pascal_and_camel_payloads_normalize_identically() {
        let pascal: Student = serde_json::from_value(json!({
            "IdEstudiante": 3,
            "Cedula": "0912345678",
            "Nombres": "Ana",
            "Apellidos": "Torres",
            "Correo": "ana@uni.edu",
            "IdCarrera": 4,
            "Semestre": "5",
            "Promedio": 8.75,
            "FechaRegistro": "2024-02-10T08:00:00"
        }))
        .unwrap();

        let camel: Student = serde_json::from_value(json!({
            "id": "3",
            "cedula": "0912345678",
            "nombres": "Ana",
            "apellidos": "Torres",
            "correo": "ana@uni.edu",
            "carreraId": 4,
            "semestre": 5,
            "promedio": "8.75",
            "fechaRegistro": "2024-02-10"
        }))
        .unwrap();

        assert_eq!(pascal, camel);
        assert_eq!(camel.full_name(), "Ana Torres");
        assert_eq!(camel.gpa, Some(Decimal::new(875, 2)));
    }

    #[test]
    fn test_missing_fields_take_documented_defaults() {
        let student: Student = serde_json::from_value(json!({"nombre": "Solo"})).unwrap();
        assert_eq!(student.id, 0);
        assert_eq!(student.first_names, "Solo");
        assert_eq!(student.last_names, "");
        assert_eq!(student.career_id, None);
        assert_eq!(student.full_name(), "Solo");
    }

    #[test]
    fn test_serializes_to_canonical_camel_case() {
        let student = Student {
            id: 1,
            first_names: "Luis".into(),
            career_id: Some(2),
            ..Default::default()
        };
        let value = serde_json::to_value(&student).unwrap();
        assert_eq!(value["nombres"], "Luis");
        assert_eq!(value["carreraId"], 2);
        assert!(value.get("telefono").is_none());
    }
}
