use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::catalog::errors::CatalogError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for CatalogError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            CatalogError::NameEmpty => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "catalog.name_empty",
            ),
            CatalogError::NotFound => (StatusCode::NOT_FOUND, "NotFound", "catalog.item_not_found"),
            CatalogError::AlreadyExists => (
                StatusCode::CONFLICT,
                "Conflict",
                "catalog.item_already_exists",
            ),
            CatalogError::Repository(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "repository.persistence",
            ),
        };

        (status, Json(ErrorResponse::new(name, message)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::errors::RepositoryError;

    #[test]
    fn should_map_duplicate_item_to_conflict() {
        let (status, json) = CatalogError::AlreadyExists.into_error_response();

        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(json.0.message, "catalog.item_already_exists");
    }

    #[test]
    fn should_hide_repository_details() {
        let (status, json) =
            CatalogError::Repository(RepositoryError::DatabaseError).into_error_response();

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json.0.name, "InternalError");
    }
}
