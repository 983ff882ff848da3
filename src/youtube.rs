use eyre::{Result, bail};
use log::{debug, error, warn};
use regex::Regex;
use serde::Deserialize;

/// Canonical base URL for video watch pages
pub const WATCH_BASE: &str = "https://www.youtube.com";

const USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36";

#[derive(Debug, Deserialize)]
struct PlayerResponse {
    captions: Option<CaptionsData>,
}

#[derive(Debug, Deserialize)]
struct CaptionsData {
    #[serde(rename = "playerCaptionsTracklistRenderer")]
    player_captions_tracklist_renderer: Option<CaptionTracklistRenderer>,
}

#[derive(Debug, Deserialize)]
struct CaptionTracklistRenderer {
    #[serde(rename = "captionTracks")]
    caption_tracks: Option<Vec<CaptionTrack>>,
}

#[derive(Debug, Deserialize)]
struct CaptionTrack {
    #[serde(rename = "baseUrl")]
    base_url: String,
    #[serde(rename = "languageCode")]
    language_code: String,
}

/// Fetch a video's caption track and flatten it to plain text.
///
/// `Ok(None)` means the upstream answered but had no usable captions;
/// transport failures on either fetch propagate as errors.
pub async fn fetch_transcript(
    client: &reqwest::Client,
    base: &str,
    video_id: &str,
    lang: &str,
) -> Result<Option<String>> {
    let watch_url = format!("{base}/watch?v={video_id}");
    debug!("Fetching watch page: {watch_url}");

    let page_html = client
        .get(&watch_url)
        .header("User-Agent", USER_AGENT)
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?;

    let Some(player_response) = extract_player_response(&page_html) else {
        error!("player response not found for video {video_id}");
        return Ok(None);
    };

    let Some(captions) = player_response.captions else {
        error!("captions not available for video {video_id}");
        return Ok(None);
    };

    let tracks = captions
        .player_captions_tracklist_renderer
        .and_then(|r| r.caption_tracks)
        .unwrap_or_default();

    let Some(track) = select_track(&tracks, lang) else {
        error!("no caption tracks found for video {video_id}");
        return Ok(None);
    };
    debug!("Using caption track: lang={}", track.language_code);

    let caption_xml = client
        .get(&track.base_url)
        .header("User-Agent", USER_AGENT)
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?;

    if caption_xml.is_empty() {
        error!("no captions XML found for video {video_id}");
        return Ok(None);
    }

    match flatten_caption_xml(&caption_xml) {
        Ok(transcript) if !transcript.is_empty() => Ok(Some(transcript)),
        Ok(_) => {
            error!("no caption text segments found for video {video_id}");
            Ok(None)
        }
        Err(e) => {
            error!("failed to parse captions XML for video {video_id}: {e}");
            Ok(None)
        }
    }
}

/// Capture the `ytInitialPlayerResponse` JSON embedded in the watch page.
///
/// The non-greedy match stops at the first `};`, so a literal `};` inside
/// the JSON truncates the capture and the parse fails.
fn extract_player_response(html: &str) -> Option<PlayerResponse> {
    let re = Regex::new(r"ytInitialPlayerResponse\s*=\s*(\{.*?\});").unwrap();
    let caps = re.captures(html)?;
    match serde_json::from_str(&caps[1]) {
        Ok(resp) => Some(resp),
        Err(e) => {
            debug!("failed to parse player response JSON: {e}");
            None
        }
    }
}

/// Pick the track matching the desired language, else the first in list order.
fn select_track<'a>(tracks: &'a [CaptionTrack], lang: &str) -> Option<&'a CaptionTrack> {
    if tracks.is_empty() {
        return None;
    }
    match tracks.iter().find(|t| t.language_code == lang) {
        Some(track) => Some(track),
        None => {
            warn!("desired language ({lang}) not found, using first available track");
            tracks.first()
        }
    }
}

/// Join the text content of every `<text>` element with single spaces.
///
/// Timing attributes are discarded.
fn flatten_caption_xml(xml: &str) -> Result<String> {
    use quick_xml::Reader;
    use quick_xml::events::Event;

    let mut reader = Reader::from_str(xml);
    let mut segments: Vec<String> = Vec::new();
    let mut in_text = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) if e.name().as_ref() == b"text" => in_text = true,
            Ok(Event::End(ref e)) if e.name().as_ref() == b"text" => in_text = false,
            Ok(Event::Text(ref e)) if in_text => {
                let raw_text = e.unescape().unwrap_or_default().to_string();
                let text = html_escape::decode_html_entities(&raw_text).to_string();
                if !text.is_empty() {
                    segments.push(text);
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => bail!("error parsing caption XML: {e}"),
            _ => {}
        }
    }

    Ok(segments.join(" ").trim().to_string())
}
