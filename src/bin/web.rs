//! Consolidation service: POST fetched tournament data, get the canonical record back.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default. Override with env: HOST, PORT.

use actix_web::{
    get, post,
    web::{Data, Json, Path},
    App, HttpResponse, HttpServer, Responder,
};
use melee_consolidator::{
    assemble_tournament, classify, standings_csv, AssemblyProgress, ConsolidationConfig, ConsolidationError,
    FetchedTournament, TournamentId, TournamentRecord,
};
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::RwLock;
use std::time::{Duration, Instant};

/// Cached record + last access time (for auto-cleanup).
struct RecordEntry {
    record: TournamentRecord,
    last_activity: Instant,
}

/// Consolidated records by tournament id. Entries are removed after inactivity.
type AppState = Data<RwLock<HashMap<TournamentId, RecordEntry>>>;

/// Records not accessed for this long are removed.
const INACTIVITY_TIMEOUT: Duration = Duration::from_secs(12 * 3600);

/// Log assembly progress every this many players.
const PROGRESS_EVERY: usize = 25;

#[derive(serde::Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Deserialize)]
struct ConsolidateBody {
    tournament: FetchedTournament,
    #[serde(default)]
    config: ConsolidationConfig,
}

#[derive(Deserialize)]
struct ClassifyBody {
    text: String,
    subject: String,
    #[serde(default = "default_opponent")]
    opponent: String,
}

fn default_opponent() -> String {
    melee_consolidator::NO_OPPONENT.to_string()
}

/// Path segment: tournament id (e.g. /api/tournaments/{id})
#[derive(Deserialize)]
struct TournamentPath {
    id: TournamentId,
}

fn error_response(e: &ConsolidationError) -> HttpResponse {
    match e {
        ConsolidationError::Classification(c) => HttpResponse::UnprocessableEntity().json(serde_json::json!({
            "error": e.to_string(),
            "text": c.text,
            "subject": c.subject,
            "opponent": c.opponent,
        })),
        _ => HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() })),
    }
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "melee-consolidator",
    })
}

#[get("/favicon.ico")]
async fn favicon() -> HttpResponse {
    HttpResponse::NoContent().finish()
}

/// Consolidate a fetched tournament, cache the record under its id, and return it.
#[post("/api/tournaments")]
async fn api_consolidate(state: AppState, body: Json<ConsolidateBody>) -> HttpResponse {
    let ConsolidateBody { tournament, config } = body.into_inner();
    let id = tournament.info.id;

    let input = match tournament.validate() {
        Ok(input) => input,
        Err(e) => {
            log::warn!("Rejected tournament {}: {}", id, e);
            return error_response(&e);
        }
    };
    let mut log_progress = |p: &AssemblyProgress<'_>| {
        if p.position % PROGRESS_EVERY == 0 || p.position == p.total {
            log::info!("[{}] Player {} ({}/{})", id, p.player, p.position, p.total);
        }
    };
    let record = match assemble_tournament(input, &config, Some(&mut log_progress)) {
        Ok(record) => record,
        Err(e) => {
            log::error!("Consolidation of tournament {} failed: {}", id, e);
            return error_response(&e);
        }
    };

    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    g.insert(
        id,
        RecordEntry {
            record: record.clone(),
            last_activity: Instant::now(),
        },
    );
    HttpResponse::Ok().json(&record)
}

/// Get a cached record by id (404 if not found). Touching it refreshes last_activity.
#[get("/api/tournaments/{id}")]
async fn api_get_tournament(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.get_mut(&path.id) {
        Some(entry) => {
            entry.last_activity = Instant::now();
            HttpResponse::Ok().json(&entry.record)
        }
        None => HttpResponse::NotFound().json(serde_json::json!({ "error": "No tournament" })),
    }
}

/// Standings of a cached record as CSV.
#[get("/api/tournaments/{id}/standings.csv")]
async fn api_get_standings_csv(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return HttpResponse::NotFound().json(serde_json::json!({ "error": "No tournament" })),
    };
    entry.last_activity = Instant::now();
    match standings_csv(&entry.record.standings) {
        Ok(csv) => HttpResponse::Ok().content_type("text/csv; charset=utf-8").body(csv),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({ "error": e.to_string() })),
    }
}

/// Classify a single result sentence (for checking report formats by hand).
#[post("/api/classify")]
async fn api_classify(body: Json<ClassifyBody>) -> HttpResponse {
    match classify(&body.text, &body.subject, &body.opponent) {
        Ok(item) => HttpResponse::Ok().json(item),
        Err(e) => error_response(&ConsolidationError::Classification(e)),
    }
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

    let state = Data::new(RwLock::new(HashMap::<TournamentId, RecordEntry>::new()));

    // Background task: every 30 minutes, drop records inactive for 12+ hours
    let state_cleanup = state.clone();
    actix_web::rt::spawn(async move {
        let mut interval = actix_web::rt::time::interval(Duration::from_secs(30 * 60));
        loop {
            interval.tick().await;
            let mut g = match state_cleanup.write() {
                Ok(guard) => guard,
                Err(_) => continue,
            };
            let before = g.len();
            g.retain(|_, entry| entry.last_activity.elapsed() < INACTIVITY_TIMEOUT);
            let removed = before - g.len();
            if removed > 0 {
                log::info!("Cleaned up {} inactive record(s) (no activity for 12h)", removed);
            }
        }
    });

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .app_data(actix_web::web::JsonConfig::default().limit(16 * 1024 * 1024))
            .service(api_health)
            .service(favicon)
            .service(api_consolidate)
            .service(api_get_tournament)
            .service(api_get_standings_csv)
            .service(api_classify)
    })
    .bind(bind)?
    .run()
    .await
}
