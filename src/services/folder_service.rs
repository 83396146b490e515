//! Folder management: creation and per-user listing.

use std::collections::HashSet;

use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};

use crate::{
    api::validation,
    database::models::{folders, users},
    errors::AppError,
};

/// Creates one folder per name for the given user, in request order.
///
/// Names are validated up front; a name that already exists among the
/// user's folders, or appears twice in the request, rejects the whole
/// request before anything is written. The existence check and the
/// inserts run in one transaction, so a failing insert leaves no rows
/// behind.
pub async fn add_folders(
    db: &DatabaseConnection,
    user: &users::Model,
    names: &[String],
) -> Result<Vec<folders::Model>, AppError> {
    let mut seen = HashSet::new();
    for name in names {
        if !validation::is_valid_folder_name(name) {
            return Err(AppError::InvalidInput(format!(
                "Invalid folder name: `{}`",
                name
            )));
        }
        if !seen.insert(name.as_str()) {
            return Err(AppError::InvalidInput(format!(
                "Duplicate folder name in request: `{}`",
                name
            )));
        }
    }

    if names.is_empty() {
        return Ok(Vec::new());
    }

    let txn = db.begin().await?;

    let existing = folders::Entity::find()
        .filter(folders::Column::UserId.eq(user.id))
        .filter(folders::Column::Name.is_in(names.iter().map(String::as_str)))
        .all(&txn)
        .await?;

    if let Some(duplicate) = existing.first() {
        return Err(AppError::InvalidInput(format!(
            "Folder `{}` already exists",
            duplicate.name
        )));
    }

    let mut created = Vec::with_capacity(names.len());
    for name in names {
        let folder = folders::ActiveModel {
            name: Set(name.clone()),
            user_id: Set(user.id),
            created_at: Set(chrono::Utc::now()),
            ..Default::default()
        };
        created.push(folder.insert(&txn).await?);
    }

    txn.commit().await?;
    Ok(created)
}

/// All folders owned by the user, oldest first.
pub async fn get_folders(
    db: &DatabaseConnection,
    user: &users::Model,
) -> Result<Vec<folders::Model>, AppError> {
    let folders = user
        .find_related(folders::Entity)
        .order_by_asc(folders::Column::Id)
        .all(db)
        .await?;
    Ok(folders)
}
