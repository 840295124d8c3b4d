//! Single binary web server exposing club data and match generation via REST.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default. Override with env: HOST (e.g. 0.0.0.0), PORT (e.g. 8080).

use actix_web::{
    delete, get, post, put,
    web::{Data, Json, Path, Query},
    App, HttpResponse, HttpServer, Responder,
};
use chrono::NaiveDate;
use club_match_engine::{
    generate_matches, plan, suggest_plans, ClubStore, CourtStore, EngineError, GenerationRequest,
    MatchId, MatchStore, MatchTemplate, PlayerDirectory, PlayerId, PlayerOrder, ScheduleDefaults,
    Score, SkillLevel,
};
use serde::{Deserialize, Serialize};
use std::sync::RwLock;

/// In-memory club data shared by all requests. Generation takes snapshots under a
/// read lock; persisting re-validates conflicts under the write lock.
type AppState = Data<RwLock<ClubStore>>;

#[derive(Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Deserialize)]
struct AddPlayerBody {
    name: String,
    #[serde(default)]
    skill_level: SkillLevel,
}

#[derive(Deserialize)]
struct AddCourtBody {
    name: String,
}

#[derive(Deserialize)]
struct PlanQuery {
    players: usize,
    team_size: usize,
}

#[derive(Deserialize)]
struct GenerateMatchesBody {
    players: Vec<PlayerId>,
    preferred_team_size: usize,
    schedule_defaults: ScheduleDefaults,
    #[serde(default)]
    order: PlayerOrder,
}

#[derive(Deserialize)]
struct CreateMatchesBody {
    templates: Vec<MatchTemplate>,
}

#[derive(Serialize)]
struct RejectedTemplate {
    index: usize,
    error: String,
}

#[derive(Serialize)]
struct CreateMatchesResponse {
    created: Vec<MatchId>,
    rejected: Vec<RejectedTemplate>,
}

/// Path segment: player id (e.g. /api/players/{id})
#[derive(Deserialize)]
struct PlayerPath {
    id: PlayerId,
}

/// Path segment: match id (e.g. /api/matches/{id}/score)
#[derive(Deserialize)]
struct MatchPath {
    id: MatchId,
}

fn error_response(e: &EngineError) -> HttpResponse {
    let body = serde_json::json!({ "error": e.to_string() });
    match e {
        EngineError::PlayerNotFound(_) | EngineError::MatchNotFound(_) => HttpResponse::NotFound().json(body),
        _ => HttpResponse::BadRequest().json(body),
    }
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "club-match-engine",
    })
}

/// List active players.
#[get("/api/players")]
async fn api_list_players(state: AppState) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    HttpResponse::Ok().json(g.list_active_players())
}

/// Add a player.
#[post("/api/players")]
async fn api_add_player(state: AppState, body: Json<AddPlayerBody>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.add_player(&body.name, body.skill_level) {
        Ok(player) => HttpResponse::Ok().json(player),
        Err(e) => error_response(&e),
    }
}

/// Deactivate a player (kept for match history, no longer offered for generation).
#[delete("/api/players/{id}")]
async fn api_remove_player(state: AppState, path: Path<PlayerPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.deactivate_player(path.id) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(e) => error_response(&e),
    }
}

#[get("/api/courts")]
async fn api_list_courts(state: AppState) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    HttpResponse::Ok().json(g.list_courts())
}

#[post("/api/courts")]
async fn api_add_court(state: AppState, body: Json<AddCourtBody>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.add_court(&body.name) {
        Ok(court) => HttpResponse::Ok().json(court),
        Err(e) => error_response(&e),
    }
}

/// Preview the team plan for a player count, plus the valid alternatives.
#[get("/api/plan")]
async fn api_plan(query: Query<PlanQuery>) -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "plan": plan(query.players, query.team_size),
        "suggestions": suggest_plans(query.players),
    }))
}

/// Generate teams and match templates for the selected players. Nothing is persisted.
#[post("/api/generate-matches")]
async fn api_generate_matches(state: AppState, body: Json<GenerateMatchesBody>) -> HttpResponse {
    let body = body.into_inner();
    let schedule = &body.schedule_defaults;
    // Bookings from the day before (late matches run past midnight) through the
    // end of the last rotated slot.
    let team_count = plan(body.players.len(), body.preferred_team_size).team_count;
    let from = schedule.date.pred_opt().unwrap_or(schedule.date);
    let to = schedule.last_day(team_count * team_count.saturating_sub(1) / 2);
    let (players, existing) = {
        let g = match state.read() {
            Ok(guard) => guard,
            Err(_) => return HttpResponse::InternalServerError().body("lock error"),
        };
        let courts = body
            .schedule_defaults
            .court_id
            .iter()
            .chain(body.schedule_defaults.courts.iter());
        for court_id in courts {
            if !g.court_exists(*court_id) {
                return HttpResponse::BadRequest().json(serde_json::json!({ "error": "Court not found" }));
            }
        }
        let players = match g.find_players(&body.players) {
            Ok(p) => p,
            Err(e) => return error_response(&e),
        };
        (players, g.list_existing_bookings(from, to))
    };

    let request = GenerationRequest {
        players,
        preferred_team_size: body.preferred_team_size,
        schedule_defaults: body.schedule_defaults,
        order: body.order,
    };
    match generate_matches(request, &existing) {
        Ok(result) => HttpResponse::Ok().json(result),
        Err(e) => error_response(&e),
    }
}

/// Persist templates. Each is re-checked against the store; conflicting ones are rejected.
#[post("/api/matches")]
async fn api_create_matches(state: AppState, body: Json<CreateMatchesBody>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let mut response = CreateMatchesResponse {
        created: Vec::new(),
        rejected: Vec::new(),
    };
    for (index, template) in body.into_inner().templates.into_iter().enumerate() {
        match g.create_match(template) {
            Ok(id) => response.created.push(id),
            Err(e) => {
                log::warn!("Rejected template {}: {}", index, e);
                response.rejected.push(RejectedTemplate {
                    index,
                    error: e.to_string(),
                });
            }
        }
    }
    HttpResponse::Ok().json(response)
}

#[get("/api/matches")]
async fn api_list_matches(state: AppState) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    HttpResponse::Ok().json(g.list_matches())
}

/// Record a score. Accepts the tagged form or any legacy shape ("6-4, 4-6", {"teamA": 6, "teamB": 4}, ...).
#[put("/api/matches/{id}/score")]
async fn api_set_score(state: AppState, path: Path<MatchPath>, body: Json<serde_json::Value>) -> HttpResponse {
    let value = body.into_inner();
    let score = serde_json::from_value::<Score>(value.clone()).unwrap_or_else(|_| Score::from_legacy(&value));
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.set_score(path.id, score) {
        Ok(m) => HttpResponse::Ok().json(m),
        Err(e) => error_response(&e),
    }
}

/// Cancel a match, freeing its court and players for the slot.
#[post("/api/matches/{id}/cancel")]
async fn api_cancel_match(state: AppState, path: Path<MatchPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.cancel_match(path.id) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(e) => error_response(&e),
    }
}

/// Bookings for one date, as the conflict checker sees them.
#[get("/api/bookings/{date}")]
async fn api_list_bookings(state: AppState, path: Path<String>) -> HttpResponse {
    let date = match NaiveDate::parse_from_str(&path.into_inner(), "%Y-%m-%d") {
        Ok(d) => d,
        Err(_) => return HttpResponse::BadRequest().json(serde_json::json!({ "error": "Date must be YYYY-MM-DD" })),
    };
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    HttpResponse::Ok().json(g.list_existing_bookings(date, date))
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let host = std::env::var("HOST").unwrap_or_else(|_| default_host());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or_else(default_port);
    let bind = (host.as_str(), port);
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    let state = Data::new(RwLock::new(ClubStore::new()));

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .service(api_health)
            .service(api_list_players)
            .service(api_add_player)
            .service(api_remove_player)
            .service(api_list_courts)
            .service(api_add_court)
            .service(api_plan)
            .service(api_generate_matches)
            .service(api_create_matches)
            .service(api_list_matches)
            .service(api_set_score)
            .service(api_cancel_match)
            .service(api_list_bookings)
    })
    .bind(bind)?
    .run()
    .await
}
