use actix_cors::Cors;
use actix_files::{Files, NamedFile};
use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer, Result as ActixResult};
use doclist_core::RecordId;
use doclist_similarity::Ranker;
use doclist_storage::{DataSource, FetchError, FileSource, DOCTORS_PATH};
use serde::Serialize;
use std::path::PathBuf;
use tracing::{info, warn};

/// Settings for the HTTP server
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// JSON array of doctor records, re-read on every request
    pub data_file: PathBuf,
    /// Directory holding `index.html` and browser assets
    pub static_dir: Option<PathBuf>,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from("data/doctors.json"),
            static_dir: None,
            port: 5000,
        }
    }
}

#[derive(Serialize)]
struct SimilarResponse {
    result: Vec<doclist_similarity::RankedRecord>,
}

struct AppState {
    source: FileSource,
    static_dir: Option<PathBuf>,
    ranker: Ranker,
}

pub struct RestApi;

impl RestApi {
    pub async fn start(config: ServerConfig) -> std::io::Result<()> {
        let port = config.port;
        info!("Serving {:?} on port {}", config.data_file, port);

        HttpServer::new(move || {
            let cors = Cors::default()
                .allow_any_origin()
                .allow_any_method()
                .allow_any_header()
                .max_age(3600);

            App::new()
                .wrap(cors)
                .configure(|cfg| Self::configure(cfg, &config))
        })
        .bind(("0.0.0.0", port))?
        .run()
        .await
    }

    /// Register routes and state; shared by the server and tests
    pub fn configure(cfg: &mut web::ServiceConfig, config: &ServerConfig) {
        cfg.app_data(web::Data::new(AppState {
            source: FileSource::new(&config.data_file),
            static_dir: config.static_dir.clone(),
            ranker: Ranker::new(),
        }))
        .route("/", web::get().to(index))
        .route(DOCTORS_PATH, web::get().to(list_doctors))
        .route(&format!("{}/{{id}}/similar", DOCTORS_PATH), web::get().to(similar_doctors));

        if let Some(dir) = &config.static_dir {
            cfg.service(Files::new("/static", dir));
        }
    }
}

fn fetch_error_response(e: &FetchError) -> HttpResponse {
    warn!("Failed to load doctors: {}", e);
    HttpResponse::InternalServerError().json(serde_json::json!({
        "error": e.to_string()
    }))
}

async fn index(req: HttpRequest, state: web::Data<AppState>) -> ActixResult<HttpResponse> {
    let Some(dir) = &state.static_dir else {
        return Ok(HttpResponse::NotFound().json(serde_json::json!({
            "error": "No static directory configured"
        })));
    };
    let file = NamedFile::open_async(dir.join("index.html")).await?;
    Ok(file.into_response(&req))
}

async fn list_doctors(state: web::Data<AppState>) -> ActixResult<HttpResponse> {
    match state.source.fetch_all().await {
        Ok(records) => Ok(HttpResponse::Ok().json(records)),
        Err(e) => Ok(fetch_error_response(&e)),
    }
}

async fn similar_doctors(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> ActixResult<HttpResponse> {
    let id = RecordId::parse(&path.into_inner());

    let records = match state.source.fetch_all().await {
        Ok(records) => records,
        Err(e) => return Ok(fetch_error_response(&e)),
    };

    match doclist_core::find(&records, &id) {
        Ok(anchor) => Ok(HttpResponse::Ok().json(SimilarResponse {
            result: state.ranker.rank_scored(&records, anchor),
        })),
        Err(e) => Ok(HttpResponse::NotFound().json(serde_json::json!({
            "error": e.to_string()
        }))),
    }
}
