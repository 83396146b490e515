use actix_web::{HttpRequest, HttpResponse, get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    api::context,
    app_state::AppState,
    database::models::folders,
    errors::{ApiError, AppError},
    services::folder_service,
};

// --- DTOs (Data Transfer Objects) ---

#[derive(Deserialize, ToSchema, Clone)]
#[serde(rename_all = "camelCase")]
pub struct FolderCreateRequest {
    pub folder_names: Vec<String>,
}

#[derive(Serialize, ToSchema, Clone)]
#[serde(rename_all = "camelCase")]
pub struct FolderView {
    pub id: i64,
    pub name: String,
    pub user_id: Uuid,
    #[schema(value_type = String, format = DateTime)]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<folders::Model> for FolderView {
    fn from(model: folders::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            user_id: model.user_id,
            created_at: model.created_at,
        }
    }
}

// --- Route Handlers ---

#[utoipa::path(
    post,
    path = "/api/folders",
    tag = "Folders",
    request_body = FolderCreateRequest,
    responses(
        (status = 200, description = "Folders created"),
        (status = 400, description = "Invalid or duplicate folder name", body = ApiError),
        (status = 401, description = "Not authenticated", body = ApiError)
    )
)]
#[post("")]
pub async fn create_folders(
    req: HttpRequest,
    app_state: web::Data<AppState>,
    body: web::Json<FolderCreateRequest>,
) -> Result<HttpResponse, AppError> {
    let ctx = context::resolve_user_context(&req, &app_state).await?;
    let created = folder_service::add_folders(&app_state.db, &ctx.user, &body.folder_names).await?;
    log::info!("user={} created {} folder(s)", ctx.id(), created.len());
    Ok(HttpResponse::Ok().finish())
}

#[utoipa::path(
    get,
    path = "/api/folders",
    tag = "Folders",
    responses(
        (status = 200, description = "Folders owned by the caller", body = [FolderView]),
        (status = 401, description = "Not authenticated", body = ApiError)
    )
)]
#[get("")]
pub async fn list_folders(
    req: HttpRequest,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let ctx = context::resolve_user_context(&req, &app_state).await?;
    let folders = folder_service::get_folders(&app_state.db, &ctx.user).await?;
    let views: Vec<FolderView> = folders.into_iter().map(FolderView::from).collect();
    Ok(HttpResponse::Ok().json(views))
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/folders")
            .service(create_folders)
            .service(list_folders),
    );
}
