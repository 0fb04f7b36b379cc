//! Report requests and the rows the backend returns for them.
//!
//! Reports are computed server side. The client picks a [`ReportKind`], narrows
//! it with a [`ReportFilter`] and renders whatever columns come back.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReportKind {
    /// Applications grouped by state
    ApplicationsByStatus,
    /// Applications grouped by scholarship type
    ApplicationsByType,
    /// Payments made within a period
    PaymentsByPeriod,
    /// Students currently holding a scholarship
    Beneficiaries,
}

impl ReportKind {
    pub const ALL: [ReportKind; 4] = [
        Self::ApplicationsByStatus,
        Self::ApplicationsByType,
        Self::PaymentsByPeriod,
        Self::Beneficiaries,
    ];

    /// Path segment under `/reportes/`
    pub fn slug(&self) -> &'static str {
        match self {
            Self::ApplicationsByStatus => "solicitudes-por-estado",
            Self::ApplicationsByType => "solicitudes-por-tipo",
            Self::PaymentsByPeriod => "pagos-por-periodo",
            Self::Beneficiaries => "beneficiarios",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::ApplicationsByStatus => "Solicitudes por estado",
            Self::ApplicationsByType => "Solicitudes por tipo de beca",
            Self::PaymentsByPeriod => "Pagos por periodo",
            Self::Beneficiaries => "Beneficiarios",
        }
    }
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// Optional narrowing sent as query parameters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportFilter {
    pub period_id: Option<i64>,
    pub status_id: Option<i64>,
    pub scholarship_type_id: Option<i64>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl ReportFilter {
    /// Query pairs for the set fields, in a stable order
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(id) = self.period_id {
            pairs.push(("periodoId", id.to_string()));
        }
        if let Some(id) = self.status_id {
            pairs.push(("estadoId", id.to_string()));
        }
        if let Some(id) = self.scholarship_type_id {
            pairs.push(("tipoBecaId", id.to_string()));
        }
        if let Some(date) = self.from {
            pairs.push(("desde", date.format("%Y-%m-%d").to_string()));
        }
        if let Some(date) = self.to {
            pairs.push(("hasta", date.format("%Y-%m-%d").to_string()));
        }
        pairs
    }
}

/// One report line; columns vary per report kind
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReportRow(pub Map<String, Value>);

impl ReportRow {
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Cell rendered as display text; `null` and missing cells are empty
    pub fn cell(&self, column: &str) -> String {
        match self.0.get(column) {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_filter_only_emits_set_fields() {
        let filter = ReportFilter {
            period_id: Some(3),
            to: NaiveDate::from_ymd_opt(2024, 12, 31),
            ..Default::default()
        };
        assert_eq!(
            filter.query_pairs(),
            vec![
                ("periodoId", "3".to_string()),
                ("hasta", "2024-12-31".to_string())
            ]
        );
        assert!(ReportFilter::default().query_pairs().is_empty());
    }

    #[test]
    fn test_row_cells() {
        let row: ReportRow =
            serde_json::from_value(json!({"estado": "Aprobada", "total": 12, "nota": null})).unwrap();
        assert_eq!(row.cell("estado"), "Aprobada");
        assert_eq!(row.cell("total"), "12");
        assert_eq!(row.cell("nota"), "");
        assert_eq!(row.cell("missing"), "");
        assert_eq!(row.columns().count(), 3);
    }

    #[test]
    fn test_kind_slugs_are_unique() {
        let mut slugs: Vec<_> = ReportKind::ALL.iter().map(ReportKind::slug).collect();
        slugs.sort_unstable();
        slugs.dedup();
        assert_eq!(slugs.len(), ReportKind::ALL.len());
    }
}
