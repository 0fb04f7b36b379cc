//! Small reference tables: states, careers and knowledge areas.

use super::normalize;
use serde::{Deserialize, Serialize};

/// Workflow state shared by students, applications and payments
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Status {
    #[serde(
        rename = "id",
        alias = "Id",
        alias = "idEstado",
        alias = "IdEstado",
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
        deserialize_with = "normalize::opt_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Career {
    #[serde(
        rename = "id",
        alias = "Id",
        alias = "idCarrera",
        alias = "IdCarrera",
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
        rename = "areaConocimientoId",
        alias = "AreaConocimientoId",
        alias = "idAreaConocimiento",
        alias = "IdAreaConocimiento",
        default,
        deserialize_with = "normalize::opt_id"
    )]
    pub knowledge_area_id: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnowledgeArea {
    #[serde(
        rename = "id",
        alias = "Id",
        alias = "idAreaConocimiento",
        alias = "IdAreaConocimiento",
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
        deserialize_with = "normalize::opt_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<String>,
}
