//! Calls beyond plain CRUD: per-parent listings, status changes and reports

use super::{error::ClientError, typed::AuthenticatedBecasClient};
use becas_core::models::{
    Application, PaymentDetail, ReportFilter, ReportKind, ReportRow, Requirement, StatusChange,
};
use reqwest::Method;

impl AuthenticatedBecasClient {
    /// `GET /solicitudes/estudiante/{id}`
    pub async fn applications_by_student(
        &self,
        student_id: i64,
    ) -> Result<Vec<Application>, ClientError> {
        let path = format!("/solicitudes/estudiante/{student_id}");
        self.execute(self.request(Method::GET, &path)).await
    }

    /// `PUT /solicitudes/{id}/estado`
    pub async fn change_application_status(
        &self,
        application_id: i64,
        status_id: i64,
    ) -> Result<(), ClientError> {
        let path = format!("/solicitudes/{application_id}/estado");
        let req = self
            .request(Method::PUT, &path)
            .json(&StatusChange { status_id });
        self.execute_empty(req).await
    }

    /// `GET /detalles-pago/solicitud/{id}`
    pub async fn payments_by_application(
        &self,
        application_id: i64,
    ) -> Result<Vec<PaymentDetail>, ClientError> {
        let path = format!("/detalles-pago/solicitud/{application_id}");
        self.execute(self.request(Method::GET, &path)).await
    }

    /// `GET /requisitos/tipo-beca/{id}`
    pub async fn requirements_by_type(
        &self,
        scholarship_type_id: i64,
    ) -> Result<Vec<Requirement>, ClientError> {
        let path = format!("/requisitos/tipo-beca/{scholarship_type_id}");
        self.execute(self.request(Method::GET, &path)).await
    }

    /// `GET /reportes/{kind}` with the filter's set fields as query parameters
    pub async fn report(
        &self,
        kind: ReportKind,
        filter: &ReportFilter,
    ) -> Result<Vec<ReportRow>, ClientError> {
        let path = format!("/reportes/{}", kind.slug());
        let req = self
            .request(Method::GET, &path)
            .query(&filter.query_pairs());
        self.execute(req).await
    }
}
