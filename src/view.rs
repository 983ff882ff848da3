use html_escape::encode_text;

/// Render the form page, populated with either a transcript or an error.
///
/// Interpolated values are HTML-escaped; at most one of the two is non-empty.
pub fn render_page(transcript: &str, error: &str) -> String {
    let mut result = String::new();
    if !error.is_empty() {
        result.push_str(&format!("<p class=\"error\">{}</p>\n", encode_text(error)));
    }
    if !transcript.is_empty() {
        result.push_str(&format!(
            "<h2>Transcript</h2>\n<pre class=\"transcript\">{}</pre>\n",
            encode_text(transcript)
        ));
    }

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>YouTube Transcript</title>
<style>
body {{ font-family: sans-serif; max-width: 48rem; margin: 2rem auto; padding: 0 1rem; }}
form {{ display: flex; gap: 0.5rem; }}
input[type="url"] {{ flex: 1; padding: 0.5rem; }}
button {{ padding: 0.5rem 1rem; }}
.error {{ color: #b00020; }}
.transcript {{ white-space: pre-wrap; background: #f5f5f5; padding: 1rem; }}
</style>
</head>
<body>
<h1>YouTube Transcript</h1>
<form action="/transcript" method="post">
<input type="url" name="youtubeURL" placeholder="https://www.youtube.com/watch?v=..." required>
<button type="submit">Fetch</button>
</form>
{result}</body>
</html>
"#
    )
}
