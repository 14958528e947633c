use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::catalog::model::MealType;
use business::domain::catalog::use_cases::add_item::{
    AddCatalogItemParams, AddCatalogItemUseCase,
};
use business::domain::catalog::use_cases::get::{GetCatalogParams, GetCatalogUseCase};
use business::domain::catalog::use_cases::remove_item::{
    RemoveCatalogItemParams, RemoveCatalogItemUseCase,
};
use business::domain::catalog::use_cases::replace::{ReplaceCatalogParams, ReplaceCatalogUseCase};

use crate::api::catalog::dto::{AddCatalogItemRequest, MealCatalogDto};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::security::FirebaseBearer;
use crate::api::tags::ApiTags;

pub struct CatalogApi {
    get_use_case: Arc<dyn GetCatalogUseCase>,
    replace_use_case: Arc<dyn ReplaceCatalogUseCase>,
    add_item_use_case: Arc<dyn AddCatalogItemUseCase>,
    remove_item_use_case: Arc<dyn RemoveCatalogItemUseCase>,
}

impl CatalogApi {
    pub fn new(
        get_use_case: Arc<dyn GetCatalogUseCase>,
        replace_use_case: Arc<dyn ReplaceCatalogUseCase>,
        add_item_use_case: Arc<dyn AddCatalogItemUseCase>,
        remove_item_use_case: Arc<dyn RemoveCatalogItemUseCase>,
    ) -> Self {
        Self {
            get_use_case,
            replace_use_case,
            add_item_use_case,
            remove_item_use_case,
        }
    }
}

/// Meal catalog API
///
/// Endpoints for managing the meal names a plan may draw from.
#[OpenApi]
impl CatalogApi {
    /// Get the meal catalog
    ///
    /// Returns the user's catalog. On first access a default catalog is
    /// stored and returned.
    #[oai(path = "/catalog", method = "get", tag = "ApiTags::Catalog")]
    async fn get_catalog(&self, auth: FirebaseBearer) -> GetCatalogResponse {
        match self
            .get_use_case
            .execute(GetCatalogParams { user_id: auth.0 })
            .await
        {
            Ok(catalog) => GetCatalogResponse::Ok(Json(catalog.into())),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetCatalogResponse::InternalError(json)
            }
        }
    }

    /// Replace the meal catalog
    ///
    /// Stores the whole catalog at once. Names are trimmed, blank names are
    /// dropped and duplicates keep their first occurrence.
    #[oai(path = "/catalog", method = "put", tag = "ApiTags::Catalog")]
    async fn replace_catalog(
        &self,
        auth: FirebaseBearer,
        body: Json<MealCatalogDto>,
    ) -> ReplaceCatalogResponse {
        let params = ReplaceCatalogParams {
            user_id: auth.0,
            catalog: body.0.into(),
        };

        match self.replace_use_case.execute(params).await {
            Ok(catalog) => ReplaceCatalogResponse::Ok(Json(catalog.into())),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                ReplaceCatalogResponse::InternalError(json)
            }
        }
    }

    /// Add a meal to the catalog
    ///
    /// Appends a name to the list of one meal type.
    #[oai(
        path = "/catalog/:meal_type/items",
        method = "post",
        tag = "ApiTags::Catalog"
    )]
    async fn add_item(
        &self,
        auth: FirebaseBearer,
        /// One of breakfast, lunch, dinner, snack
        meal_type: Path<String>,
        body: Json<AddCatalogItemRequest>,
    ) -> AddCatalogItemResponse {
        let Ok(meal_type) = meal_type.0.parse::<MealType>() else {
            return AddCatalogItemResponse::BadRequest(ErrorResponse::invalid_meal_type());
        };

        let params = AddCatalogItemParams {
            user_id: auth.0,
            meal_type,
            name: body.0.name,
        };

        match self.add_item_use_case.execute(params).await {
            Ok(catalog) => AddCatalogItemResponse::Created(Json(catalog.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => AddCatalogItemResponse::BadRequest(json),
                    409 => AddCatalogItemResponse::Conflict(json),
                    _ => AddCatalogItemResponse::InternalError(json),
                }
            }
        }
    }

    /// Remove a meal from the catalog
    ///
    /// Existing plans keep the meal until they are regenerated.
    #[oai(
        path = "/catalog/:meal_type/items/:name",
        method = "delete",
        tag = "ApiTags::Catalog"
    )]
    async fn remove_item(
        &self,
        auth: FirebaseBearer,
        /// One of breakfast, lunch, dinner, snack
        meal_type: Path<String>,
        name: Path<String>,
    ) -> RemoveCatalogItemResponse {
        let Ok(meal_type) = meal_type.0.parse::<MealType>() else {
            return RemoveCatalogItemResponse::BadRequest(ErrorResponse::invalid_meal_type());
        };

        let params = RemoveCatalogItemParams {
            user_id: auth.0,
            meal_type,
            name: name.0,
        };

        match self.remove_item_use_case.execute(params).await {
            Ok(catalog) => RemoveCatalogItemResponse::Ok(Json(catalog.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => RemoveCatalogItemResponse::NotFound(json),
                    _ => RemoveCatalogItemResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetCatalogResponse {
    #[oai(status = 200)]
    Ok(Json<MealCatalogDto>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum ReplaceCatalogResponse {
    #[oai(status = 200)]
    Ok(Json<MealCatalogDto>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum AddCatalogItemResponse {
    #[oai(status = 201)]
    Created(Json<MealCatalogDto>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum RemoveCatalogItemResponse {
    #[oai(status = 200)]
    Ok(Json<MealCatalogDto>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
