use actix_web::{HttpRequest, web};
use sea_orm::EntityTrait;
use uuid::Uuid;

use crate::{app_state::AppState, database::models::users, errors::AppError};

/// Authenticated caller resolved from request cookies.
#[derive(Clone)]
pub struct UserContext {
    pub user: users::Model,
}

impl UserContext {
    pub fn id(&self) -> Uuid {
        self.user.id
    }
}

fn parse_uuid_cookie(req: &HttpRequest, name: &str) -> Result<Uuid, AppError> {
    let cookie = req
        .cookie(name)
        .ok_or_else(|| AppError::Unauthorized(format!("Missing `{}` cookie", name)))?;

    Uuid::parse_str(cookie.value())
        .map_err(|_| AppError::Unauthorized(format!("Invalid `{}` cookie", name)))
}

/// Resolves request credentials into a typed user. Session issuance and
/// verification depth live outside this service.
pub async fn resolve_user_context(
    req: &HttpRequest,
    app_state: &web::Data<AppState>,
) -> Result<UserContext, AppError> {
    let _session_cookie = req
        .cookie("session_id")
        .ok_or_else(|| AppError::Unauthorized("Missing `session_id` cookie".to_string()))?;

    let user_id = parse_uuid_cookie(req, "user_id")?;

    let user = users::Entity::find_by_id(user_id)
        .one(&app_state.db)
        .await?
        .ok_or_else(|| {
            log::warn!("Rejected request for unknown user {}", user_id);
            AppError::Unauthorized("User not found".to_string())
        })?;

    Ok(UserContext { user })
}
