use std::future::{ready, Ready};

use actix_web::dev::Payload;
use actix_web::{web, FromRequest, HttpRequest};

use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::registry::GameHandle;
use crate::state::app_state::AppState;

/// Game resolved from the `{game_id}` path parameter.
/// Rejects blank ids and ids that are not registered.
#[derive(Clone)]
pub struct GamePath {
    pub id: String,
    pub handle: GameHandle,
}

impl GamePath {
    fn resolve(req: &HttpRequest) -> Result<Self, AppError> {
        let id = req
            .match_info()
            .get("game_id")
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .ok_or_else(|| {
                AppError::bad_request(ErrorCode::InvalidGameId, "Missing game_id parameter")
            })?
            .to_string();

        let app_state = req.app_data::<web::Data<AppState>>().ok_or_else(|| {
            AppError::internal(ErrorCode::Internal, "AppState not available")
        })?;

        let handle = app_state.registry.get(&id)?;
        Ok(GamePath { id, handle })
    }
}

impl FromRequest for GamePath {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(Self::resolve(req))
    }
}
