use actix_web::{web, HttpRequest, HttpResponse, Result};
use utoipa;

use crate::auth::JwtManager;
use crate::handlers::{data_response, message_response};
use crate::middleware::auth::{authenticate_request, authenticated_user_id};
use crate::models::{ApiResponse, Client, ClientForm, ClientPatch, ErrorResponse, ServiceError};
use crate::services::{AuthService, ClientService};

#[utoipa::path(
    get,
    path = "/api/clients",
    tag = "clients",
    responses(
        (status = 200, description = "Clients ordered by name", body = [Client]),
        (status = 401, description = "Not authenticated", body = ErrorResponse)
    )
)]
pub async fn list_clients(
    client_service: web::Data<ClientService>,
    req: HttpRequest,
    jwt_manager: web::Data<JwtManager>,
    auth_service: web::Data<AuthService>,
) -> Result<HttpResponse, ServiceError> {
    authenticate_request(&req, &jwt_manager, &auth_service).await?;

    let clients = client_service.list().await?;
    Ok(data_response(clients))
}

#[utoipa::path(
    post,
    path = "/api/clients",
    tag = "clients",
    request_body = ClientForm,
    responses(
        (status = 200, description = "Client created", body = Client),
        (status = 400, description = "Invalid input or duplicate email / phone", body = ErrorResponse),
        (status = 401, description = "Not authenticated", body = ErrorResponse)
    )
)]
pub async fn create_client(
    client_service: web::Data<ClientService>,
    form: web::Json<ClientForm>,
    req: HttpRequest,
    jwt_manager: web::Data<JwtManager>,
    auth_service: web::Data<AuthService>,
) -> Result<HttpResponse, ServiceError> {
    let actor = authenticated_user_id(&req, &jwt_manager, &auth_service).await?;

    let client = client_service.create(&form, actor).await?;
    Ok(data_response(client))
}

#[utoipa::path(
    put,
    path = "/api/clients/{id}",
    tag = "clients",
    params(("id" = i64, Path, description = "Client ID")),
    request_body = ClientPatch,
    responses(
        (status = 200, description = "Client updated", body = Client),
        (status = 400, description = "Invalid input or duplicate email / phone", body = ErrorResponse),
        (status = 404, description = "Client not found", body = ErrorResponse)
    )
)]
pub async fn update_client(
    client_service: web::Data<ClientService>,
    path: web::Path<i64>,
    patch: web::Json<ClientPatch>,
    req: HttpRequest,
    jwt_manager: web::Data<JwtManager>,
    auth_service: web::Data<AuthService>,
) -> Result<HttpResponse, ServiceError> {
    let actor = authenticated_user_id(&req, &jwt_manager, &auth_service).await?;

    let client = client_service.update(path.into_inner(), &patch, actor).await?;
    Ok(data_response(client))
}

#[utoipa::path(
    delete,
    path = "/api/clients/{id}",
    tag = "clients",
    params(("id" = i64, Path, description = "Client ID")),
    responses(
        (status = 200, description = "Client deleted", body = ApiResponse),
        (status = 404, description = "Client not found", body = ErrorResponse)
    )
)]
pub async fn delete_client(
    client_service: web::Data<ClientService>,
    path: web::Path<i64>,
    req: HttpRequest,
    jwt_manager: web::Data<JwtManager>,
    auth_service: web::Data<AuthService>,
) -> Result<HttpResponse, ServiceError> {
    let actor = authenticated_user_id(&req, &jwt_manager, &auth_service).await?;

    client_service.remove(path.into_inner(), actor).await?;
    Ok(message_response("Client deleted successfully"))
}
