use std::convert::Infallible;
use std::fmt::Display;
use std::sync::Arc;

use bytes::Bytes;
use http_body_util::{BodyExt, Full};
use hyper::body::Body;
use hyper::header::{HeaderValue, ALLOW, CONTENT_TYPE};
use hyper::{Method, Request, Response, StatusCode};
use log::{info, warn};
use stress_core::{analyze_log, PipelineError};

use crate::config::ServiceConfig;
use crate::page::{render_page, INVALID_LOG_MESSAGE};

pub type HttpBody = Full<Bytes>;

const HTML: &str = "text/html; charset=utf-8";
const JSON: &str = "application/json";
const TEXT: &str = "text/plain; charset=utf-8";

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServiceConfig>,
}

impl AppState {
    pub fn new(config: ServiceConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}

/// First `log` value of a urlencoded form body; repeated keys are legal and
/// later values are ignored. Missing or undecodable bodies yield "".
fn form_log(body: &[u8]) -> String {
    match serde_urlencoded::from_bytes::<Vec<(String, String)>>(body) {
        Ok(pairs) => pairs
            .into_iter()
            .find(|(key, _)| key == "log")
            .map(|(_, value)| value)
            .unwrap_or_default(),
        Err(e) => {
            warn!("malformed form body, treating log as empty: {}", e);
            String::new()
        }
    }
}

fn respond(
    status: StatusCode,
    content_type: &'static str,
    body: impl Into<Bytes>,
) -> Response<HttpBody> {
    let mut resp = Response::new(Full::new(body.into()));
    *resp.status_mut() = status;
    resp.headers_mut()
        .insert(CONTENT_TYPE, HeaderValue::from_static(content_type));
    resp
}

pub async fn handle_request<B>(
    state: AppState,
    req: Request<B>,
) -> Result<Response<HttpBody>, Infallible>
where
    B: Body,
    B::Error: Display,
{
    let resp = match (req.method(), req.uri().path()) {
        (&Method::GET, "/") => respond(StatusCode::OK, HTML, render_page("", None)),
        (&Method::HEAD, "/") => respond(StatusCode::OK, HTML, Bytes::new()),
        (&Method::POST, "/") => analyze(&state, req).await,
        (_, "/") => {
            let mut resp = respond(StatusCode::METHOD_NOT_ALLOWED, TEXT, "use GET, HEAD or POST /");
            resp.headers_mut()
                .insert(ALLOW, HeaderValue::from_static("GET, HEAD, POST"));
            resp
        }
        (&Method::GET, "/health") => {
            respond(StatusCode::OK, JSON, Bytes::from_static(b"{\"status\":\"ok\"}"))
        }
        _ => respond(StatusCode::NOT_FOUND, TEXT, Bytes::from_static(b"not found")),
    };
    Ok(resp)
}

async fn analyze<B>(state: &AppState, req: Request<B>) -> Response<HttpBody>
where
    B: Body,
    B::Error: Display,
{
    let body = match req.into_body().collect().await {
        Ok(collected) => collected.to_bytes(),
        Err(e) => {
            warn!("failed to read request body: {}", e);
            return respond(StatusCode::BAD_REQUEST, TEXT, "unreadable request body");
        }
    };

    let log = form_log(&body);

    match analyze_log(&log, state.config.out_of_range) {
        Ok(analysis) => {
            info!(
                "analyzed {} region(s): {}",
                analysis.regions.len(),
                analysis.status
            );
            analysis.save(&state.config.report_path);
            respond(
                StatusCode::OK,
                HTML,
                render_page(&log, Some(&analysis.display_text())),
            )
        }
        Err(PipelineError::InvalidLog) => respond(
            StatusCode::OK,
            HTML,
            render_page(&log, Some(INVALID_LOG_MESSAGE)),
        ),
        Err(e @ PipelineError::Region(_)) => {
            warn!("analysis rejected: {}", e);
            respond(
                StatusCode::BAD_REQUEST,
                HTML,
                render_page(&log, Some(&e.to_string())),
            )
        }
    }
}
