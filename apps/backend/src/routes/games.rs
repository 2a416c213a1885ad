//! Game HTTP routes, mounted under `/api`.
//!
//! Handlers stay thin: extract, call `GameService`, shape the JSON reply.
//! Domain failures convert into `AppError` through `?`.

use actix_web::{web, HttpResponse, Result};
use serde::{Deserialize, Serialize};

use crate::domain::{GameSummary, GuessMode, SessionRules};
use crate::error::AppError;
use crate::extractors::game_id::GamePath;
use crate::extractors::validated_json::ValidatedJson;
use crate::services::games::{GameService, RandomGame};
use crate::state::app_state::AppState;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateGameRequest {
    pub game_id: Option<String>,
    pub guess_mode: Option<GuessMode>,
    pub allow_late_join: Option<bool>,
}

impl CreateGameRequest {
    fn rules(&self) -> SessionRules {
        SessionRules::new(
            self.guess_mode.unwrap_or_default(),
            self.allow_late_join.unwrap_or(false),
        )
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayNameRequest {
    pub display_name: String,
}

#[derive(Debug, Deserialize)]
pub struct TitleRequest {
    pub title: String,
}

#[derive(Debug, Deserialize)]
pub struct WordRequest {
    pub word: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuessRequest {
    pub player_id: String,
    pub guessed_word: String,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct GameListResponse {
    pub games: Vec<GameSummary>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RandomGameResponse {
    #[serde(flatten)]
    pub game: RandomGame,
    pub message: String,
}

/// POST /api/games
async fn create_game(
    body: ValidatedJson<CreateGameRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let body = body.into_inner();
    let snapshot =
        GameService::new(&app_state).create_game(body.game_id.as_deref(), body.rules())?;
    Ok(HttpResponse::Created().json(snapshot))
}

/// GET /api/games
async fn list_games(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let games = GameService::new(&app_state).list();
    Ok(HttpResponse::Ok().json(GameListResponse { games }))
}

async fn random_game(
    app_state: &AppState,
    game_id: Option<&str>,
    body: DisplayNameRequest,
) -> Result<HttpResponse, AppError> {
    let game = GameService::new(app_state)
        .create_random(game_id, &body.display_name)
        .await?;
    Ok(HttpResponse::Created().json(RandomGameResponse {
        game,
        message: "Random game created and started successfully.".to_string(),
    }))
}

/// POST /api/games/{game_id} and POST /api/create-random-game/{game_id}
async fn create_random_game_with_id(
    path: web::Path<String>,
    body: ValidatedJson<DisplayNameRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    random_game(&app_state, Some(path.as_str()), body.into_inner()).await
}

/// POST /api/create-random-game
async fn create_random_game(
    body: ValidatedJson<DisplayNameRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    random_game(&app_state, None, body.into_inner()).await
}

/// POST /api/{game_id}/game-title
async fn set_title(
    game: GamePath,
    body: ValidatedJson<TitleRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    GameService::new(&app_state).set_title(&game.handle, &body.title)?;
    Ok(HttpResponse::Ok().json(MessageResponse::new(format!(
        "Game title set to '{}'.",
        body.title.trim()
    ))))
}

/// POST /api/{game_id}/players
async fn add_player(
    game: GamePath,
    body: ValidatedJson<DisplayNameRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let player = GameService::new(&app_state).add_player(&game.handle, &body.display_name)?;
    Ok(HttpResponse::Created().json(player))
}

/// POST /api/{game_id}/words
async fn add_word(
    game: GamePath,
    body: ValidatedJson<WordRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let word = body.word.trim();
    let message = if GameService::new(&app_state).add_word(&game.handle, word)? {
        format!("Word '{word}' added.")
    } else {
        format!("Word '{word}' is already listed.")
    };
    Ok(HttpResponse::Created().json(MessageResponse::new(message)))
}

/// POST /api/{game_id}/start
async fn start_game(
    game: GamePath,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    GameService::new(&app_state).start(&game.handle)?;
    Ok(HttpResponse::Ok().json(MessageResponse::new("Game started!")))
}

/// POST /api/{game_id}/guess
async fn submit_guess(
    game: GamePath,
    body: ValidatedJson<GuessRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let report = GameService::new(&app_state)
        .submit_guess(&game.handle, &body.player_id, &body.guessed_word)
        .await?;
    Ok(HttpResponse::Ok().json(report))
}

/// GET /api/{game_id}/state
async fn get_state(
    game: GamePath,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let snapshot = GameService::new(&app_state).state(&game.handle);
    Ok(HttpResponse::Ok().json(snapshot))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/games")
            .route(web::get().to(list_games))
            .route(web::post().to(create_game)),
    )
    .route("/games/{game_id}", web::post().to(create_random_game_with_id))
    .route("/create-random-game", web::post().to(create_random_game))
    .route(
        "/create-random-game/{game_id}",
        web::post().to(create_random_game_with_id),
    )
    .route("/{game_id}/game-title", web::post().to(set_title))
    .route("/{game_id}/players", web::post().to(add_player))
    .route("/{game_id}/words", web::post().to(add_word))
    .route("/{game_id}/start", web::post().to(start_game))
    .route("/{game_id}/guess", web::post().to(submit_guess))
    .route("/{game_id}/state", web::get().to(get_state));
}
