// This module implements the client side of the application service:
// application CRUD, the per-application integration configuration and
// MQTT client-certificate generation.

use tonic::{transport, Status};
use tracing::info;

use crate::api::{
    application_service_client::ApplicationServiceClient, Application,
    CreateApplicationRequest, CreateHttpIntegrationRequest,
    DeleteApplicationRequest, DeleteHttpIntegrationRequest,
    GenerateMqttIntegrationClientCertificateRequest,
    GenerateMqttIntegrationClientCertificateResponse, GetApplicationRequest,
    GetApplicationResponse, GetHttpIntegrationRequest, HttpIntegration,
    ListApplicationsRequest, ListApplicationsResponse,
    ListIntegrationsRequest, ListIntegrationsResponse,
};
use crate::auth;

// Local helper function to get a connection to the gRPC service.

async fn get_client(
) -> Result<ApplicationServiceClient<transport::Channel>, Status> {
    ApplicationServiceClient::connect(crate::endpoint())
        .await
        .map_err(|_| Status::unavailable("application service unavailable"))
}

pub async fn create(
    application: Application, token: Option<&str>,
) -> Result<String, Status> {
    info!("creating application \"{}\"", &application.name);

    let req = CreateApplicationRequest {
        application: Some(application),
    };

    get_client()
        .await?
        .create(auth::with_token(req, token))
        .await
        .map(|v| v.into_inner().id)
}

pub async fn get(
    id: String, token: Option<&str>,
) -> Result<GetApplicationResponse, Status> {
    let req = GetApplicationRequest { id };

    get_client()
        .await?
        .get(auth::with_token(req, token))
        .await
        .map(|v| v.into_inner())
}

pub async fn delete(id: String, token: Option<&str>) -> Result<(), Status> {
    info!("deleting application {}", &id);

    let req = DeleteApplicationRequest { id };

    get_client()
        .await?
        .delete(auth::with_token(req, token))
        .await
        .map(|_| ())
}

pub async fn list(
    tenant_id: String, limit: u32, offset: u32, search: String,
    token: Option<&str>,
) -> Result<ListApplicationsResponse, Status> {
    let req = ListApplicationsRequest {
        limit,
        offset,
        search,
        tenant_id,
    };

    get_client()
        .await?
        .list(auth::with_token(req, token))
        .await
        .map(|v| v.into_inner())
}

pub async fn list_integrations(
    application_id: String, token: Option<&str>,
) -> Result<ListIntegrationsResponse, Status> {
    let req = ListIntegrationsRequest { application_id };

    get_client()
        .await?
        .list_integrations(auth::with_token(req, token))
        .await
        .map(|v| v.into_inner())
}

pub async fn create_http_integration(
    integration: HttpIntegration, token: Option<&str>,
) -> Result<(), Status> {
    let req = CreateHttpIntegrationRequest {
        integration: Some(integration),
    };

    get_client()
        .await?
        .create_http_integration(auth::with_token(req, token))
        .await
        .map(|_| ())
}

pub async fn get_http_integration(
    application_id: String, token: Option<&str>,
) -> Result<Option<HttpIntegration>, Status> {
    let req = GetHttpIntegrationRequest { application_id };

    get_client()
        .await?
        .get_http_integration(auth::with_token(req, token))
        .await
        .map(|v| v.into_inner().integration)
}

pub async fn delete_http_integration(
    application_id: String, token: Option<&str>,
) -> Result<(), Status> {
    let req = DeleteHttpIntegrationRequest { application_id };

    get_client()
        .await?
        .delete_http_integration(auth::with_token(req, token))
        .await
        .map(|_| ())
}

// The server issues the certificate; this only transports the request.

pub async fn generate_mqtt_client_certificate(
    application_id: String, token: Option<&str>,
) -> Result<GenerateMqttIntegrationClientCertificateResponse, Status> {
    info!(
        "generating MQTT integration client certificate for {}",
        &application_id
    );

    let req = GenerateMqttIntegrationClientCertificateRequest {
        application_id,
    };

    get_client()
        .await?
        .generate_mqtt_integration_client_certificate(auth::with_token(
            req, token,
        ))
        .await
        .map(|v| v.into_inner())
}
