//! REST resources and their CRUD calls
//!
//! Every entity lives under its own collection path and supports list, get,
//! create, update and delete with the same shapes, plus a `lookup` listing of
//! `{id, nombre}` pairs used to resolve foreign keys for display.

use super::{error::ClientError, typed::AuthenticatedBecasClient};
use becas_core::lookup::{LookupItem, NameLookup};
use becas_core::models::{
    AcademicPeriod, Application, Career, KnowledgeArea, PaymentDetail, Requirement,
    ScholarshipType, Status, Student, UserAccount,
};
use reqwest::Method;
use serde::{Serialize, de::DeserializeOwned};

/// Entity exposed as a REST collection
pub trait Resource: Serialize + DeserializeOwned {
    /// Collection path relative to the API base, e.g. `/estudiantes`
    const PATH: &'static str;

    fn id(&self) -> i64;
}

macro_rules! resource {
    ($($ty:ty => $path:literal),* $(,)?) => {
        $(
            impl Resource for $ty {
                const PATH: &'static str = $path;

                fn id(&self) -> i64 {
                    self.id
                }
            }
        )*
    };
}

resource! {
    Student => "/estudiantes",
    ScholarshipType => "/tipos-beca",
    Application => "/solicitudes",
    PaymentDetail => "/detalles-pago",
    AcademicPeriod => "/periodos-academicos",
    Requirement => "/requisitos",
    Status => "/estados",
    Career => "/carreras",
    KnowledgeArea => "/areas-conocimiento",
    UserAccount => "/usuarios",
}

impl AuthenticatedBecasClient {
    /// `GET /{resource}`
    pub async fn list<R: Resource>(&self) -> Result<Vec<R>, ClientError> {
        self.execute(self.request(Method::GET, R::PATH)).await
    }

    /// `GET /{resource}/{id}`
    pub async fn get<R: Resource>(&self, id: i64) -> Result<R, ClientError> {
        let path = format!("{}/{id}", R::PATH);
        self.execute(self.request(Method::GET, &path)).await
    }

    /// `POST /{resource}`; returns the stored entity with its assigned id
    pub async fn create<R: Resource>(&self, entity: &R) -> Result<R, ClientError> {
        let req = self.request(Method::POST, R::PATH).json(entity);
        self.execute(req).await
    }

    /// `PUT /{resource}/{id}` using the entity's own id
    pub async fn update<R: Resource>(&self, entity: &R) -> Result<(), ClientError> {
        let path = format!("{}/{}", R::PATH, entity.id());
        self.execute_empty(self.request(Method::PUT, &path).json(entity))
            .await
    }

    /// `DELETE /{resource}/{id}`
    pub async fn delete<R: Resource>(&self, id: i64) -> Result<(), ClientError> {
        let path = format!("{}/{id}", R::PATH);
        self.execute_empty(self.request(Method::DELETE, &path)).await
    }

    /// `GET /{resource}/lookup`
    pub async fn lookup<R: Resource>(&self) -> Result<NameLookup, ClientError> {
        let path = format!("{}/lookup", R::PATH);
        let items: Vec<LookupItem> = self.execute(self.request(Method::GET, &path)).await?;
        Ok(items.into_iter().collect())
    }
}
