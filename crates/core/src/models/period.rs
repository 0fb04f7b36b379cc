use super::normalize;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Academic period applications are filed against.
///
/// Defaults: `id` 0, `name` empty, dates `None`, `active` false.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcademicPeriod {
    #[serde(
        rename = "id",
        alias = "Id",
        alias = "idPeriodo",
        alias = "IdPeriodo",
        alias = "id_periodo",
        default,
        deserialize_with = "normalize::id"
    )]
    pub id: i64,

    #[serde(
        rename = "nombre",
        alias = "Nombre",
        alias = "descripcion",
        alias = "Descripcion",
        default,
        deserialize_with = "normalize::text"
    )]
    pub name: String,

    #[serde(
        rename = "fechaInicio",
        alias = "FechaInicio",
        default,
        deserialize_with = "normalize::opt_date"
    )]
    pub starts_on: Option<NaiveDate>,

    #[serde(
        rename = "fechaFin",
        alias = "FechaFin",
        default,
        deserialize_with = "normalize::opt_date"
    )]
    pub ends_on: Option<NaiveDate>,

    #[serde(
        rename = "activo",
        alias = "Activo",
        default,
        deserialize_with = "normalize::flag"
    )]
    pub active: bool,
}

impl AcademicPeriod {
    /// Inclusive on both ends. An open bound does not restrict.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.starts_on.is_none_or(|start| start <= date)
            && self.ends_on.is_none_or(|end| date <= end)
    }
}
