//! Integration tests for the Becas HTTP client

use becas_core::models::{Application, ReportFilter, ReportKind, ScholarshipType, Student};
use becas_core::session::claims::encode_unsigned;
use becas_core::telemetry::{LogFormat, init_tracing};
use becas_core::{ApiError, MemoryTokenStore, Role, Session, SessionConfig, SystemClock};
use becas_http::{
    AuthenticatedBecasClient, ClientError, HttpAuthBackend, PublicBecasClient, TypedClientBuilder,
};
use serde_json::json;
use wiremock::matchers::{body_json, body_partial_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn setup() {
    let _ = init_tracing("debug", LogFormat::Pretty);
}

fn authed(server: &MockServer) -> AuthenticatedBecasClient {
    AuthenticatedBecasClient::new(server.uri(), "test-token").unwrap()
}

fn live_token(role: &str) -> String {
    let exp = chrono::Utc::now().timestamp() + 3600;
    encode_unsigned(&json!({"sub": 7, "role": role, "name": "Ana", "exp": exp}))
}

#[tokio::test]
async fn test_client_builder() {
    let client = TypedClientBuilder::new()
        .base_url("http://localhost:8080/api/")
        .build_public()
        .unwrap();
    assert_eq!(client.base_url(), "http://localhost:8080/api");
}

#[tokio::test]
async fn test_client_builder_requires_base_url() {
    let result = TypedClientBuilder::new().build_public();
    assert!(matches!(result, Err(ClientError::Configuration(_))));

    let result = TypedClientBuilder::new().base_url("  ").build_authenticated("t");
    assert!(matches!(result, Err(ClientError::Configuration(_))));
}

#[tokio::test]
async fn test_list_sends_bearer_token_and_normalizes() {
    setup();
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/estudiantes"))
        .and(header("authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"IdEstudiante": 1, "Nombres": "Ana", "Apellidos": "Torres", "Cedula": "0912345678"},
            {"id": "2", "nombres": "Luis", "apellidos": "Vera", "carreraId": 0}
        ])))
        .mount(&server)
        .await;

    let students: Vec<Student> = authed(&server).list().await.unwrap();
    assert_eq!(students.len(), 2);
    assert_eq!(students[0].id, 1);
    assert_eq!(students[0].full_name(), "Ana Torres");
    assert_eq!(students[1].id, 2);
    assert_eq!(students[1].career_id, None);
}

#[tokio::test]
async fn test_unauthorized_is_classified_as_auth_failure() {
    setup();
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/tipos-beca"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Unauthorized"))
        .mount(&server)
        .await;

    let result = authed(&server).list::<ScholarshipType>().await;
    let err = result.unwrap_err();
    assert!(err.is_auth_expired());

    let api: ApiError = err.into();
    assert!(matches!(api, ApiError::Unauthorized { status: 401, .. }));
    assert!(api.is_auth_failure());
}

#[tokio::test]
async fn test_validation_detail_is_surfaced() {
    setup();
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/estudiantes"))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_json(json!({"error": "Bad Request", "detalle": "La cédula ya está registrada"})),
        )
        .mount(&server)
        .await;

    let student = Student {
        national_id: "0912345678".into(),
        ..Default::default()
    };
    let err: ApiError = authed(&server).create(&student).await.unwrap_err().into();
    assert_eq!(err.user_message(), "La cédula ya está registrada");
}

#[tokio::test]
async fn test_server_error_uses_fallback_message() {
    setup();
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/solicitudes/3"))
        .respond_with(ResponseTemplate::new(500).set_body_string("stack trace"))
        .mount(&server)
        .await;

    let err: ApiError = authed(&server)
        .get::<Application>(3)
        .await
        .unwrap_err()
        .into();
    assert_eq!(err.user_message(), becas_core::error::FALLBACK_MESSAGE);
}

#[tokio::test]
async fn test_unreachable_server_is_network_error() {
    setup();
    // nothing listens on port 1
    let client = AuthenticatedBecasClient::new("http://127.0.0.1:1", "t").unwrap();
    let err: ApiError = client.list::<Student>().await.unwrap_err().into();
    assert!(matches!(err, ApiError::Network(_)));
    assert_eq!(err.user_message(), becas_core::error::UNREACHABLE_MESSAGE);
}

#[tokio::test]
async fn test_update_and_delete_accept_empty_bodies() {
    setup();
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/tipos-beca/4"))
        .and(body_partial_json(json!({"id": 4, "nombre": "Deportiva", "activo": true})))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/tipos-beca/4"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = authed(&server);
    let kind = ScholarshipType {
        id: 4,
        name: "Deportiva".into(),
        amount: 300.into(),
        ..Default::default()
    };
    client.update(&kind).await.unwrap();
    client.delete::<ScholarshipType>(4).await.unwrap();
}

#[tokio::test]
async fn test_lookup_resolves_names() {
    setup();
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/estados/lookup"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "nombre": "Pendiente"},
            {"Id": 2, "Nombre": "Aprobada"}
        ])))
        .mount(&server)
        .await;

    let lookup = authed(&server)
        .lookup::<becas_core::models::Status>()
        .await
        .unwrap();
    assert_eq!(lookup.display(Some(2)), "Aprobada");
    assert_eq!(lookup.display(Some(5)), "#5");
}

#[tokio::test]
async fn test_change_application_status() {
    setup();
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/solicitudes/10/estado"))
        .and(body_json(json!({"estadoId": 2})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    authed(&server)
        .change_application_status(10, 2)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_report_sends_filter_as_query() {
    setup();
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/reportes/pagos-por-periodo"))
        .and(query_param("periodoId", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"periodo": "2024-I", "total": 1250.5}
        ])))
        .mount(&server)
        .await;

    let filter = ReportFilter {
        period_id: Some(3),
        ..Default::default()
    };
    let rows = authed(&server)
        .report(ReportKind::PaymentsByPeriod, &filter)
        .await
        .unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].cell("periodo"), "2024-I");
}

#[tokio::test]
async fn test_session_login_through_http_backend() {
    setup();
    let server = MockServer::start().await;
    let token = live_token("estudiante");

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .and(body_json(json!({"usuario": "ana", "password": "secreto"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"token": token})))
        .mount(&server)
        .await;

    let backend = HttpAuthBackend::new(PublicBecasClient::new(server.uri()).unwrap());
    let session = Session::new(SessionConfig::default(), MemoryTokenStore::new(), SystemClock);
    session.initialize();

    let user = session.login(&backend, "ana", "secreto").await.unwrap();
    assert_eq!(user.id, 7);
    assert_eq!(user.role, Role::Estudiante);
    assert!(session.is_logged_in());
    assert_eq!(session.token().as_deref(), Some(token.as_str()));
}

#[tokio::test]
async fn test_failed_login_propagates_backend_message() {
    setup();
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"message": "Credenciales inválidas"})),
        )
        .mount(&server)
        .await;

    let backend = HttpAuthBackend::new(PublicBecasClient::new(server.uri()).unwrap());
    let session = Session::new(SessionConfig::default(), MemoryTokenStore::new(), SystemClock);

    let err = session.login(&backend, "ana", "mala").await.unwrap_err();
    assert_eq!(
        err,
        ApiError::Unauthorized {
            status: 401,
            message: "Credenciales inválidas".into()
        }
    );
    assert_eq!(err.user_message(), "Credenciales inválidas");
    assert!(!session.is_logged_in());
}

#[tokio::test]
async fn test_change_password_uses_session_token() {
    setup();
    let server = MockServer::start().await;
    let token = live_token("admin");

    Mock::given(method("POST"))
        .and(path("/auth/change-password"))
        .and(header("authorization", format!("Bearer {token}").as_str()))
        .and(body_json(json!({"currentPassword": "vieja", "newPassword": "nueva"})))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let backend = HttpAuthBackend::new(PublicBecasClient::new(server.uri()).unwrap());
    let store = MemoryTokenStore::with_entry(SessionConfig::DEFAULT_TOKEN_KEY, &token);
    let session = Session::new(SessionConfig::default(), store, SystemClock);
    session.initialize();

    let ack = session.change_secret(&backend, "vieja", "nueva").await.unwrap();
    assert_eq!(ack.message, None);
    assert!(session.is_logged_in());
}
