pub mod config;
pub mod server;
pub mod view;
pub mod youtube;

/// Extract a video ID from the YouTube URL shapes the form accepts.
///
/// The ID is everything after the marker up to the first whitespace or `&`.
pub fn extract_video_id(input: &str) -> Option<String> {
    let input = input.trim();

    // youtube.com/watch?v=ID
    if let Some(caps) = regex::Regex::new(r"youtube\.com/watch\?v=([^\s&]+)")
        .unwrap()
        .captures(input)
    {
        return Some(caps[1].to_string());
    }

    // youtube.com/embed/ID
    if let Some(caps) = regex::Regex::new(r"youtube\.com/embed/([^\s&]+)")
        .unwrap()
        .captures(input)
    {
        return Some(caps[1].to_string());
    }

    // youtu.be/ID
    if let Some(caps) = regex::Regex::new(r"youtu\.be/([^\s&]+)")
        .unwrap()
        .captures(input)
    {
        return Some(caps[1].to_string());
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_watch_url() {
        assert_eq!(
            extract_video_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ".to_string())
        );
    }

    #[test]
    fn test_watch_url_without_scheme() {
        assert_eq!(
            extract_video_id("youtube.com/watch?v=dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ".to_string())
        );
    }

    #[test]
    fn test_watch_url_without_www() {
        assert_eq!(
            extract_video_id("https://youtube.com/watch?v=dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ".to_string())
        );
    }

    #[test]
    fn test_watch_url_with_extra_params() {
        assert_eq!(
            extract_video_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=120"),
            Some("dQw4w9WgXcQ".to_string())
        );
    }

    #[test]
    fn test_short_url() {
        assert_eq!(
            extract_video_id("https://youtu.be/dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ".to_string())
        );
    }

    #[test]
    fn test_embed_url() {
        assert_eq!(
            extract_video_id("https://www.youtube.com/embed/dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ".to_string())
        );
    }

    #[test]
    fn test_all_shapes_agree() {
        let id = extract_video_id("https://www.youtube.com/watch?v=ABC123");
        assert_eq!(extract_video_id("youtu.be/ABC123"), id);
        assert_eq!(extract_video_id("www.youtube.com/embed/ABC123"), id);
        assert_eq!(id, Some("ABC123".to_string()));
    }

    #[test]
    fn test_bare_video_id_rejected() {
        assert_eq!(extract_video_id("dQw4w9WgXcQ"), None);
    }

    #[test]
    fn test_invalid_url() {
        assert_eq!(extract_video_id("not a url"), None);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(extract_video_id(""), None);
    }

    #[test]
    fn test_empty_id_rejected() {
        assert_eq!(extract_video_id("https://www.youtube.com/watch?v="), None);
    }
}
