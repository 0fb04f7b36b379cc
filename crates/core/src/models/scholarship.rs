use super::normalize;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

fn active_by_default() -> bool {
    true
}

/// Scholarship category (tipo de beca).
///
/// Defaults: `id` 0, `name` empty, `amount` 0, `active` true, other fields `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScholarshipType {
    #[serde(
        rename = "id",
        alias = "Id",
        alias = "idTipoBeca",
        alias = "IdTipoBeca",
        alias = "id_tipo_beca",
        default,
        deserialize_with = "normalize::id"
    )]
    pub id: i64,

    #[serde(
        rename = "nombre",
        alias = "Nombre",
        default,
        deserialize_with = "normalize::text"
    )]
    pub name: String,

    #[serde(
        rename = "descripcion",
        alias = "Descripcion",
        default,
        deserialize_with = "normalize::opt_text"
    )]
    pub description: Option<String>,

    #[serde(
        rename = "monto",
        alias = "Monto",
        default,
        deserialize_with = "normalize::amount"
    )]
    pub amount: Decimal,

    #[serde(
        rename = "areaConocimientoId",
        alias = "AreaConocimientoId",
        alias = "idAreaConocimiento",
        alias = "IdAreaConocimiento",
        default,
        deserialize_with = "normalize::opt_id"
    )]
    pub knowledge_area_id: Option<i64>,

    #[serde(
        rename = "activo",
        alias = "Activo",
        default = "active_by_default",
        deserialize_with = "normalize::flag"
    )]
    pub active: bool,
}

impl Default for ScholarshipType {
    fn default() -> Self {
        Self {
            id: 0,
            name: String::new(),
            description: None,
            amount: Decimal::ZERO,
            knowledge_area_id: None,
            active: true,
        }
    }
}

/// Requirement attached to a scholarship type.
///
/// Defaults: `id` 0, `name` empty, `mandatory` true, other fields `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Requirement {
    #[serde(
        rename = "id",
        alias = "Id",
        alias = "idRequisito",
        alias = "IdRequisito",
        default,
        deserialize_with = "normalize::id"
    )]
    pub id: i64,

    #[serde(
        rename = "nombre",
        alias = "Nombre",
        default,
        deserialize_with = "normalize::text"
    )]
    pub name: String,

    #[serde(
        rename = "descripcion",
        alias = "Descripcion",
        default,
        deserialize_with = "normalize::opt_text"
    )]
    pub description: Option<String>,

    #[serde(
        rename = "tipoBecaId",
        alias = "TipoBecaId",
        alias = "idTipoBeca",
        alias = "IdTipoBeca",
        default,
        deserialize_with = "normalize::opt_id"
    )]
    pub scholarship_type_id: Option<i64>,

    #[serde(
        rename = "obligatorio",
        alias = "Obligatorio",
        default = "active_by_default",
        deserialize_with = "normalize::flag"
    )]
    pub mandatory: bool,
}

impl Default for Requirement {
    fn default() -> Self {
        Self {
            id: 0,
            name: String::new(),
            description: None,
            scholarship_type_id: None,
            mandatory: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_scholarship_type_defaults() {
        let kind: ScholarshipType =
            serde_json::from_value(json!({"IdTipoBeca": 2, "Nombre": "Excelencia"})).unwrap();
        assert_eq!(kind.id, 2);
        assert_eq!(kind.amount, Decimal::ZERO);
        assert!(kind.active);

        let null_amount: ScholarshipType =
            serde_json::from_value(json!({"id": 1, "monto": null})).unwrap();
        assert_eq!(null_amount.amount, Decimal::ZERO);
    }

    #[test]
    fn test_scholarship_type_inactive_flag() {
        let kind: ScholarshipType =
            serde_json::from_value(json!({"id": 2, "activo": 0, "monto": "1500.50"})).unwrap();
        assert!(!kind.active);
        assert_eq!(kind.amount, Decimal::new(150_050, 2));
    }

    #[test]
    fn test_requirement_normalization() {
        let req: Requirement = serde_json::from_value(json!({
            "IdRequisito": "9",
            "Nombre": "Certificado de notas",
            "IdTipoBeca": 2,
            "Obligatorio": false
        }))
        .unwrap();
        assert_eq!(req.id, 9);
        assert_eq!(req.scholarship_type_id, Some(2));
        assert!(!req.mandatory);
    }
}
