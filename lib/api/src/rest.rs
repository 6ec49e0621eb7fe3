use actix_cors::Cors;
use actix_multipart::Multipart;
use actix_web::http::header;
use actix_web::{web, App, HttpResponse, HttpServer, Result as ActixResult};
use biobot_core::{Dataset, Error, RecordFilter};
use biobot_similarity::{Lookup, Retriever};
use biobot_storage::{export_csv_string, SessionManager, EXPORT_FILE_NAME};
use bytes::BytesMut;
use futures_util::StreamExt;
use serde::Deserialize;
use std::sync::Arc;
use uuid::Uuid;

/// Uploads larger than this are rejected unless configured otherwise
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 200 * 1024 * 1024;

/// Shared state behind every handler
pub struct AppState {
    pub sessions: SessionManager,
    pub retriever: Retriever,
    pub max_upload_bytes: usize,
}

impl AppState {
    pub fn new(sessions: SessionManager, retriever: Retriever) -> Self {
        Self {
            sessions,
            retriever,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }

    pub fn with_max_upload_bytes(mut self, max_upload_bytes: usize) -> Self {
        self.max_upload_bytes = max_upload_bytes;
        self
    }
}

#[derive(Deserialize, Default)]
struct CreateSessionRequest {
    dataset: Option<String>,
}

#[derive(Deserialize)]
struct FiltersQuery {
    class: Option<String>,
}

#[derive(Deserialize)]
struct AskQuery {
    #[serde(default)]
    q: String,
    class: Option<String>,
    chapter: Option<String>,
}

#[derive(Deserialize)]
struct NextQuestionRequest {
    class: String,
    chapter: String,
}

pub struct RestApi;

impl RestApi {
    pub async fn start(state: Arc<AppState>, host: &str, port: u16) -> std::io::Result<()> {
        HttpServer::new(move || {
            let cors = Cors::default()
                .allow_any_origin()
                .allow_any_method()
                .allow_any_header()
                .max_age(3600);

            App::new()
                .wrap(cors)
                .app_data(web::Data::new(state.clone()))
                .configure(Self::configure)
        })
        .bind((host, port))?
        .run()
        .await
    }

    /// Register every route; shared by the server and the handler tests
    pub fn configure(cfg: &mut web::ServiceConfig) {
        cfg.route("/health", web::get().to(health))
            .route("/datasets", web::get().to(list_datasets))
            .route("/sessions", web::get().to(list_sessions))
            .route("/sessions", web::post().to(create_session))
            .route("/sessions/{id}", web::get().to(get_session))
            .route("/sessions/{id}", web::delete().to(delete_session))
            .route("/sessions/{id}/filters", web::get().to(get_filters))
            .route("/sessions/{id}/upload", web::post().to(upload_csv))
            .route("/sessions/{id}/export", web::get().to(export_session))
            .route("/sessions/{id}/ask", web::get().to(ask))
            .route("/sessions/{id}/quiz/next", web::post().to(next_question))
            .route("/sessions/{id}/quiz/answer", web::post().to(show_answer));
    }
}

fn error_response(e: Error) -> HttpResponse {
    let body = serde_json::json!({ "error": e.to_string() });
    match e {
        Error::SessionNotFound(_) => HttpResponse::NotFound().json(body),
        Error::UploadTooLarge(_) => HttpResponse::PayloadTooLarge().json(body),
        _ => HttpResponse::BadRequest().json(body),
    }
}

async fn health() -> ActixResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    })))
}

async fn list_datasets(state: web::Data<Arc<AppState>>) -> ActixResult<HttpResponse> {
    let datasets: Vec<serde_json::Value> = state
        .sessions
        .datasets()
        .into_iter()
        .map(|(dataset, rows)| {
            serde_json::json!({
                "name": dataset.name(),
                "description": dataset.description(),
                "rows": rows,
            })
        })
        .collect();
    Ok(HttpResponse::Ok().json(serde_json::json!({ "result": datasets })))
}

async fn list_sessions(state: web::Data<Arc<AppState>>) -> ActixResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(serde_json::json!({ "result": state.sessions.list() })))
}

async fn create_session(
    state: web::Data<Arc<AppState>>,
    req: Option<web::Json<CreateSessionRequest>>,
) -> ActixResult<HttpResponse> {
    let req = req.map(web::Json::into_inner).unwrap_or_default();
    let dataset = match req.dataset.as_deref() {
        Some(name) => match name.parse::<Dataset>() {
            Ok(dataset) => dataset,
            Err(e) => return Ok(error_response(e)),
        },
        None => Dataset::default(),
    };

    let info = state.sessions.create_session(dataset);
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "result": info,
        "message": format!("Using built-in dataset: {} rows", info.rows),
    })))
}

async fn get_session(
    state: web::Data<Arc<AppState>>,
    path: web::Path<Uuid>,
) -> ActixResult<HttpResponse> {
    let id = path.into_inner();
    match state.sessions.get(id) {
        Some(info) => Ok(HttpResponse::Ok().json(serde_json::json!({ "result": info }))),
        None => Ok(error_response(Error::SessionNotFound(id.to_string()))),
    }
}

async fn delete_session(
    state: web::Data<Arc<AppState>>,
    path: web::Path<Uuid>,
) -> ActixResult<HttpResponse> {
    let id = path.into_inner();
    if state.sessions.delete(id) {
        Ok(HttpResponse::Ok().json(serde_json::json!({ "result": true })))
    } else {
        Ok(error_response(Error::SessionNotFound(id.to_string())))
    }
}

async fn get_filters(
    state: web::Data<Arc<AppState>>,
    path: web::Path<Uuid>,
    query: web::Query<FiltersQuery>,
) -> ActixResult<HttpResponse> {
    let id = path.into_inner();
    let result = state.sessions.with_session(id, |session| {
        let table = session.table();
        let mut body = serde_json::to_value(table.filter_options()).unwrap_or_default();
        if let Some(class) = query.class.as_deref() {
            body["class_chapters"] = serde_json::json!(table.chapters_for_class(class));
        }
        body
    });

    match result {
        Ok(body) => Ok(HttpResponse::Ok().json(serde_json::json!({ "result": body }))),
        Err(e) => Ok(error_response(e)),
    }
}

async fn upload_csv(
    state: web::Data<Arc<AppState>>,
    path: web::Path<Uuid>,
    mut payload: Multipart,
) -> ActixResult<HttpResponse> {
    let id = path.into_inner();
    if !state.sessions.contains(id) {
        return Ok(error_response(Error::SessionNotFound(id.to_string())));
    }

    // first field of the form carries the file
    let limit = state.max_upload_bytes;
    let mut data = BytesMut::new();
    if let Some(field) = payload.next().await {
        let mut field = match field {
            Ok(f) => f,
            Err(e) => return Ok(error_response(Error::Csv(e.to_string()))),
        };
        while let Some(chunk) = field.next().await {
            match chunk {
                Ok(bytes) if data.len() + bytes.len() > limit => {
                    tracing::warn!(session = %id, limit, "upload over size limit");
                    return Ok(error_response(Error::UploadTooLarge(limit)));
                }
                Ok(bytes) => data.extend_from_slice(&bytes),
                Err(e) => return Ok(error_response(Error::Csv(e.to_string()))),
            }
        }
    }

    match state.sessions.with_session_mut(id, |session| session.upload(&data)) {
        Ok(total) => Ok(HttpResponse::Ok().json(serde_json::json!({
            "result": { "rows": total },
            "message": format!("Merged! Total rows: {}", total),
        }))),
        Err(e) => {
            tracing::warn!(session = %id, error = %e, "rejected upload");
            Ok(error_response(e))
        }
    }
}

async fn export_session(
    state: web::Data<Arc<AppState>>,
    path: web::Path<Uuid>,
) -> ActixResult<HttpResponse> {
    let id = path.into_inner();
    let csv = state
        .sessions
        .with_session(id, |session| export_csv_string(session.table()))
        .and_then(|r| r);

    match csv {
        Ok(body) => Ok(HttpResponse::Ok()
            .content_type("text/csv")
            .insert_header((
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", EXPORT_FILE_NAME),
            ))
            .body(body)),
        Err(e) => Ok(error_response(e)),
    }
}

async fn ask(
    state: web::Data<Arc<AppState>>,
    path: web::Path<Uuid>,
    query: web::Query<AskQuery>,
) -> ActixResult<HttpResponse> {
    let id = path.into_inner();
    let filter = RecordFilter::from_labels(query.class.as_deref(), query.chapter.as_deref());
    let retriever = state.retriever;

    let lookup = state.sessions.with_session(id, |session| {
        let table = session.table().select(&filter);
        retriever.lookup(&query.q, &table)
    });

    match lookup {
        Ok(lookup) => {
            if let Lookup::Match { best, .. } = &lookup {
                tracing::debug!(session = %id, score = best.score, "answered question");
            }
            Ok(HttpResponse::Ok().json(serde_json::json!({
                "class": filter.class.label(),
                "chapter": filter.chapter.label(),
                "result": lookup,
            })))
        }
        Err(e) => Ok(error_response(e)),
    }
}

async fn next_question(
    state: web::Data<Arc<AppState>>,
    path: web::Path<Uuid>,
    req: web::Json<NextQuestionRequest>,
) -> ActixResult<HttpResponse> {
    let id = path.into_inner();
    let result = state.sessions.with_session_mut(id, |session| {
        session.next_question(&req.class, &req.chapter, &mut rand::rng())
    });

    match result {
        Ok(prompt) => Ok(HttpResponse::Ok().json(serde_json::json!({ "result": prompt }))),
        Err(e) => Ok(error_response(e)),
    }
}

async fn show_answer(
    state: web::Data<Arc<AppState>>,
    path: web::Path<Uuid>,
) -> ActixResult<HttpResponse> {
    let id = path.into_inner();
    match state.sessions.with_session_mut(id, |session| session.show_answer()) {
        Ok(record) => Ok(HttpResponse::Ok().json(serde_json::json!({
            "result": record,
            "message": format!("Answer: {}", record.answer),
        }))),
        Err(e) => Ok(error_response(e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test;

    fn state() -> web::Data<Arc<AppState>> {
        web::Data::new(Arc::new(AppState::new(SessionManager::new(), Retriever::default())))
    }

    fn new_session(state: &web::Data<Arc<AppState>>, dataset: Dataset) -> Uuid {
        state.sessions.create_session(dataset).id
    }

    fn multipart_body(csv: &str) -> (String, String) {
        let boundary = "biobot-boundary";
        let body = format!(
            "--{b}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"more.csv\"\r\n\
             Content-Type: text/csv\r\n\r\n{csv}\r\n--{b}--\r\n",
            b = boundary,
            csv = csv
        );
        (format!("multipart/form-data; boundary={}", boundary), body)
    }

    #[actix_web::test]
    async fn test_ask_empty_query_prompts() {
        let state = state();
        let id = new_session(&state, Dataset::Mdcat);
        let app = test::init_service(App::new().app_data(state).configure(RestApi::configure)).await;

        let req = test::TestRequest::get().uri(&format!("/sessions/{}/ask?q=", id)).to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["result"]["status"], "empty_query");
        assert_eq!(body["result"]["message"], "Enter a Biology question above.");
    }

    #[actix_web::test]
    async fn test_ask_with_filter() {
        let state = state();
        let id = new_session(&state, Dataset::Mdcat);
        let app = test::init_service(App::new().app_data(state).configure(RestApi::configure)).await;

        let req = test::TestRequest::get()
            .uri(&format!("/sessions/{}/ask?q=Which%20gland%20secretes%20adrenaline&class=12&chapter=Endocrine%20System", id))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["result"]["status"], "match");
        assert_eq!(body["result"]["best"]["answer"], "Adrenal medulla");
        assert_eq!(body["chapter"], "Endocrine System");
    }

    #[actix_web::test]
    async fn test_upload_rejects_missing_columns() {
        let state = state();
        let id = new_session(&state, Dataset::Mdcat);
        let app = test::init_service(App::new().app_data(state).configure(RestApi::configure)).await;

        let (content_type, body) = multipart_body("class,chapter,question\n11,Enzymes,What is a cofactor?\n");
        let req = test::TestRequest::post()
            .uri(&format!("/sessions/{}/upload", id))
            .insert_header((header::CONTENT_TYPE, content_type))
            .set_payload(body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);

        let req = test::TestRequest::get().uri(&format!("/sessions/{}", id)).to_request();
        let info: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(info["result"]["rows"], 119);
    }

    #[actix_web::test]
    async fn test_upload_then_export() {
        let state = state();
        let id = new_session(&state, Dataset::Fsc);
        let app = test::init_service(App::new().app_data(state).configure(RestApi::configure)).await;

        let (content_type, body) = multipart_body(
            "Class,Chapter,Question,Answer\nMDCAT,Human Blood,Which cells carry oxygen?,Red blood cells\n",
        );
        let req = test::TestRequest::post()
            .uri(&format!("/sessions/{}/upload", id))
            .insert_header((header::CONTENT_TYPE, content_type))
            .set_payload(body)
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["message"], "Merged! Total rows: 11");

        let req = test::TestRequest::get().uri(&format!("/sessions/{}/export", id)).to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());
        let disposition = resp.headers().get(header::CONTENT_DISPOSITION).unwrap().to_str().unwrap().to_string();
        assert!(disposition.contains("bio_qa.csv"));
        let csv = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
        assert_eq!(csv.lines().count(), 12);
        assert!(csv.ends_with("MDCAT,Human Blood,Which cells carry oxygen?,Red blood cells\n"));
    }

    #[actix_web::test]
    async fn test_quiz_next_and_answer() {
        let state = state();
        let id = new_session(&state, Dataset::Fsc);
        let app = test::init_service(App::new().app_data(state).configure(RestApi::configure)).await;

        let req = test::TestRequest::post().uri(&format!("/sessions/{}/quiz/answer", id)).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);

        let req = test::TestRequest::post()
            .uri(&format!("/sessions/{}/quiz/next", id))
            .set_json(serde_json::json!({ "class": "MDCAT", "chapter": "Human Blood" }))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["result"]["chapter"], "Human Blood");
        assert!(body["result"].get("answer").is_none());

        let req = test::TestRequest::post().uri(&format!("/sessions/{}/quiz/answer", id)).to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        let answer = body["result"]["answer"].as_str().unwrap();
        assert!(answer == "O-" || answer == "AB+");
    }

    #[actix_web::test]
    async fn test_cascading_filters() {
        let state = state();
        let id = new_session(&state, Dataset::Fsc);
        let app = test::init_service(App::new().app_data(state).configure(RestApi::configure)).await;

        let req = test::TestRequest::get()
            .uri(&format!("/sessions/{}/filters?class=FSc%20Part%202", id))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["result"]["classes"][0], "All");
        assert_eq!(body["result"]["class_chapters"], serde_json::json!(["Genetics", "Human Physiology"]));
    }

    #[actix_web::test]
    async fn test_upload_over_limit_is_rejected() {
        let state = web::Data::new(Arc::new(
            AppState::new(SessionManager::new(), Retriever::default()).with_max_upload_bytes(64),
        ));
        let id = new_session(&state, Dataset::Mdcat);
        let app = test::init_service(App::new().app_data(state).configure(RestApi::configure)).await;

        let mut csv = String::from("class,chapter,question,answer\n");
        for i in 0..10 {
            csv.push_str(&format!("12,Genetics,What is gene number {}?,A unit of heredity\n", i));
        }
        let (content_type, body) = multipart_body(&csv);
        let req = test::TestRequest::post()
            .uri(&format!("/sessions/{}/upload", id))
            .insert_header((header::CONTENT_TYPE, content_type))
            .set_payload(body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::PAYLOAD_TOO_LARGE);

        let req = test::TestRequest::get().uri(&format!("/sessions/{}", id)).to_request();
        let info: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(info["result"]["rows"], 119);
    }

    #[actix_web::test]
    async fn test_create_session_defaults_to_mdcat() {
        let app = test::init_service(App::new().app_data(state()).configure(RestApi::configure)).await;

        let req = test::TestRequest::post().uri("/sessions").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["result"]["dataset"], "mdcat");
        assert_eq!(body["result"]["rows"], 119);
        assert_eq!(body["message"], "Using built-in dataset: 119 rows");
    }

    #[actix_web::test]
    async fn test_create_session_with_dataset() {
        let app = test::init_service(App::new().app_data(state()).configure(RestApi::configure)).await;

        let req = test::TestRequest::post()
            .uri("/sessions")
            .set_json(serde_json::json!({ "dataset": "fsc" }))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["result"]["dataset"], "fsc");
        assert_eq!(body["result"]["rows"], 10);

        let req = test::TestRequest::post()
            .uri("/sessions")
            .set_json(serde_json::json!({ "dataset": "zoology" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_list_datasets() {
        let app = test::init_service(App::new().app_data(state()).configure(RestApi::configure)).await;

        let req = test::TestRequest::get().uri("/datasets").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        let datasets = body["result"].as_array().unwrap();
        assert_eq!(datasets.len(), 2);
        let rows = |name: &str| {
            datasets
                .iter()
                .find(|d| d["name"] == name)
                .map(|d| d["rows"].clone())
        };
        assert_eq!(rows("mdcat"), Some(serde_json::json!(119)));
        assert_eq!(rows("fsc"), Some(serde_json::json!(10)));
    }

    #[actix_web::test]
    async fn test_delete_session_twice() {
        let state = state();
        let id = new_session(&state, Dataset::Fsc);
        let app = test::init_service(App::new().app_data(state).configure(RestApi::configure)).await;

        let req = test::TestRequest::delete().uri(&format!("/sessions/{}", id)).to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());

        let req = test::TestRequest::delete().uri(&format!("/sessions/{}", id)).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_quiz_next_empty_selection() {
        let state = state();
        let id = new_session(&state, Dataset::Fsc);
        let app = test::init_service(App::new().app_data(state).configure(RestApi::configure)).await;

        // Genetics only exists under FSc Part 2
        let req = test::TestRequest::post()
            .uri(&format!("/sessions/{}/quiz/next", id))
            .set_json(serde_json::json!({ "class": "MDCAT", "chapter": "Genetics" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(
            body["error"],
            "No questions found for class 'MDCAT' and chapter 'Genetics'"
        );
    }

    #[actix_web::test]
    async fn test_unknown_session_is_404() {
        let app = test::init_service(App::new().app_data(state()).configure(RestApi::configure)).await;
        let req = test::TestRequest::get().uri(&format!("/sessions/{}", Uuid::new_v4())).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::NOT_FOUND);
    }
}
