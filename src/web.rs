use actix_web::error::{InternalError, JsonPayloadError};
use actix_web::{middleware, web, App, HttpRequest, HttpResponse, HttpServer, Result};
use serde::{Deserialize, Serialize};
use std::sync::{Mutex, MutexGuard};
use crate::display::{format_allocation, render_chart};
use crate::export::grid_to_csv_string;
use crate::schedule::{GridModel, ScheduleError, SchedulerSession};

// One session for the whole server; every handler holds the lock for its
// complete read or check-and-reserve sequence.
pub struct AppState {
    pub session: Mutex<SchedulerSession>,
}

impl AppState {
    pub fn new(session: SchedulerSession) -> Self {
        AppState { session: Mutex::new(session) }
    }

    fn lock(&self) -> Result<MutexGuard<'_, SchedulerSession>> {
        self.session
            .lock()
            .map_err(|_| actix_web::error::ErrorInternalServerError("Scheduler state is poisoned"))
    }
}

/// Durations arrive from a spinbox-like field as either a number or text
#[derive(Deserialize)]
#[serde(untagged)]
pub enum DurationInput {
    Number(i64),
    Float(f64),
    Text(String),
}

impl DurationInput {
    fn as_text(&self) -> String {
        match self {
            DurationInput::Number(n) => n.to_string(),
            DurationInput::Float(f) => f.to_string(),
            DurationInput::Text(s) => s.clone(),
        }
    }
}

#[derive(Deserialize)]
pub struct MeetingRequest {
    duration: DurationInput,
    start_time: Option<String>,
}

#[derive(Serialize)]
pub struct RoomRow {
    room: String,
    reserved: Vec<String>,
    cells: Vec<bool>,
}

#[derive(Serialize)]
pub struct GridResponse {
    time_slots: Vec<String>,
    current_duration: usize,
    reserved_count: usize,
    rooms: Vec<RoomRow>,
}

impl GridResponse {
    fn from_session(session: &SchedulerSession) -> Self {
        let grid: &GridModel = session.grid();
        let rooms = grid
            .rooms()
            .iter()
            .enumerate()
            .map(|(room_index, room)| RoomRow {
                room: room.clone(),
                reserved: grid
                    .reserved_slots(room)
                    .unwrap_or_default()
                    .into_iter()
                    .map(str::to_string)
                    .collect(),
                cells: (0..grid.slot_count())
                    .map(|slot| grid.is_reserved(room_index, slot))
                    .collect(),
            })
            .collect();

        GridResponse {
            time_slots: grid.time_slots().to_vec(),
            current_duration: session.current_duration(),
            reserved_count: grid.reserved_count(),
            rooms,
        }
    }
}

fn error_response(err: &ScheduleError) -> HttpResponse {
    let body = serde_json::json!({"success": false, "error": err.to_string()});
    match err {
        ScheduleError::NoAvailableSlot { .. } | ScheduleError::NoSolution { .. } => {
            HttpResponse::Conflict().json(body)
        }
        _ => HttpResponse::BadRequest().json(body),
    }
}

// Current grid endpoint
async fn get_grid(state: web::Data<AppState>) -> Result<HttpResponse> {
    let session = state.lock()?;
    Ok(HttpResponse::Ok().json(GridResponse::from_session(&session)))
}

// Schedule meeting endpoint
async fn schedule_meeting(
    req: web::Json<MeetingRequest>,
    state: web::Data<AppState>,
) -> Result<HttpResponse> {
    let mut session = state.lock()?;
    match session.schedule_meeting(&req.duration.as_text(), req.start_time.as_deref()) {
        Ok(allocation) => Ok(HttpResponse::Ok().json(serde_json::json!({
            "success": true,
            "message": format_allocation(&allocation),
            "allocation": allocation,
        }))),
        Err(e) => Ok(error_response(&e)),
    }
}

// Optimal (N-Queens) layout endpoint
async fn generate_optimal(state: web::Data<AppState>) -> Result<HttpResponse> {
    let mut session = state.lock()?;
    match session.generate_optimal() {
        Ok(placement) => {
            let queens: Vec<(usize, usize)> = placement.queens().collect();
            Ok(HttpResponse::Ok().json(serde_json::json!({
                "success": true,
                "queens": queens,
                "grid": GridResponse::from_session(&session),
            })))
        }
        Err(e) => Ok(error_response(&e)),
    }
}

// Clear schedule endpoint
async fn reset(state: web::Data<AppState>) -> Result<HttpResponse> {
    let mut session = state.lock()?;
    session.clear();
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "success": true,
        "message": "Schedule cleared successfully!"
    })))
}

async fn get_chart(state: web::Data<AppState>) -> Result<HttpResponse> {
    let session = state.lock()?;
    let chart = render_chart(session.grid(), session.current_duration());
    Ok(HttpResponse::Ok().content_type("text/plain; charset=utf-8").body(chart))
}

async fn export_csv(state: web::Data<AppState>) -> Result<HttpResponse> {
    let session = state.lock()?;
    let csv = grid_to_csv_string(session.grid())
        .map_err(|e| actix_web::error::ErrorInternalServerError(format!("Failed to export: {}", e)))?;
    Ok(HttpResponse::Ok()
        .content_type("text/csv")
        .insert_header(("Content-Disposition", "attachment; filename=\"schedule_grid.csv\""))
        .body(csv))
}

// Malformed bodies get the same envelope as scheduling errors
fn json_error(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let body = serde_json::json!({"success": false, "error": format!("Invalid request: {}", err)});
    InternalError::from_response(err, HttpResponse::BadRequest().json(body)).into()
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error))
        .route("/api/grid", web::get().to(get_grid))
        .route("/api/meetings", web::post().to(schedule_meeting))
        .route("/api/optimal", web::post().to(generate_optimal))
        .route("/api/reset", web::post().to(reset))
        .route("/api/chart", web::get().to(get_chart))
        .route("/api/export", web::get().to(export_csv));
}

pub async fn start_server(port: u16, session: SchedulerSession) -> std::io::Result<()> {
    let app_state = web::Data::new(AppState::new(session));

    HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .wrap(middleware::Logger::default())
            .configure(configure)
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await
}
