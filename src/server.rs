use axum::extract::State;
use axum::response::Html;
use axum::routing::{get, post};
use axum::{Form, Router};
use log::error;
use serde::Deserialize;

use crate::view::render_page;
use crate::youtube;

pub const INVALID_URL_ERROR: &str = "Please enter a valid YouTube URL.";
pub const NOT_FOUND_ERROR: &str = "No transcript was found for this video.";
pub const FETCH_FAILED_ERROR: &str =
    "Failed to fetch the transcript. The video may not have one.";

/// Process-wide state constructed once at startup and shared by all handlers
#[derive(Clone)]
pub struct AppState {
    pub client: reqwest::Client,
    pub lang: String,
    pub watch_base: String,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/transcript", post(transcript))
        .with_state(state)
}

#[derive(Debug, Deserialize)]
pub struct TranscriptForm {
    #[serde(rename = "youtubeURL")]
    pub youtube_url: String,
}

async fn index() -> Html<String> {
    Html(render_page("", ""))
}

async fn transcript(
    State(state): State<AppState>,
    Form(form): Form<TranscriptForm>,
) -> Html<String> {
    let Some(video_id) = crate::extract_video_id(&form.youtube_url) else {
        return Html(render_page("", INVALID_URL_ERROR));
    };

    match youtube::fetch_transcript(&state.client, &state.watch_base, &video_id, &state.lang).await
    {
        Ok(Some(transcript)) => Html(render_page(&transcript, "")),
        Ok(None) => Html(render_page("", NOT_FOUND_ERROR)),
        Err(e) => {
            error!("error fetching transcript for video {video_id}: {e}");
            Html(render_page("", FETCH_FAILED_ERROR))
        }
    }
}
