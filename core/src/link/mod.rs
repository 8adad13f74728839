//! Helpers for the platform's link formats.
//!
//! Recognized shapes, tried in order:
//! - `tiktok.com/@user/video/<digits>`
//! - `tiktok.com/t/<word>`
//! - `vm.tiktok.com/<word>`
//! - any run of 19 digits

use url::Url;

const HOST: &str = "tiktok.com";
const SHORT_HOST: &str = "vm.tiktok.com";
const NUMERIC_ID_LEN: usize = 19;

/// Extracts the video id from a link, if it has a recognized shape.
pub fn extract_video_id(link: &str) -> Option<String> {
    parse_link(link)
        .and_then(|url| id_from_url(&url))
        .or_else(|| numeric_id(link))
}

/// Embeddable player URL, or an empty string when no id can be found.
pub fn embed_url(link: &str) -> String {
    match extract_video_id(link) {
        Some(id) => format!("https://www.{HOST}/embed/v2/{id}"),
        None => String::new(),
    }
}

/// Canonical video URL, or the input unchanged when no id can be found.
pub fn direct_url(link: &str) -> String {
    match extract_video_id(link) {
        Some(id) => format!("https://www.{HOST}/video/{id}"),
        None => link.to_string(),
    }
}

/// Blockquote snippet picked up by the platform's embed script.
pub fn embed_html(link: &str) -> String {
    let video_id = link.rsplit('/').next().unwrap_or_default();
    format!(
        r#"<blockquote class="tiktok-embed" cite="{link}" data-video-id="{video_id}" style="max-width: 605px;min-width: 325px;">
  <section><a target="_blank" href="{link}">Loading TikTok content...</a></section>
</blockquote>
<script async src="https://www.{HOST}/embed.js"></script>"#
    )
}

/// Parses the first whitespace-separated word of `text` that mentions the
/// platform host, assuming https when the scheme is missing.
fn parse_link(text: &str) -> Option<Url> {
    let link = text.split_whitespace().find(|word| word.contains(HOST))?;
    Url::parse(link)
        .ok()
        .filter(|url| url.has_host())
        .or_else(|| Url::parse(&format!("https://{link}")).ok())
}

fn id_from_url(url: &Url) -> Option<String> {
    let host = url.host_str()?;
    if host != HOST && !host.ends_with(&format!(".{HOST}")) {
        return None;
    }

    let segments: Vec<&str> = url.path_segments()?.filter(|s| !s.is_empty()).collect();

    if let [user, video, id, ..] = segments.as_slice()
        && user.starts_with('@')
        && video.eq_ignore_ascii_case("video")
        && let Some(id) = leading(id, |c| c.is_ascii_digit())
    {
        return Some(id);
    }

    if let [t, token, ..] = segments.as_slice()
        && t.eq_ignore_ascii_case("t")
        && let Some(token) = leading(token, is_word_char)
    {
        return Some(token);
    }

    if host == SHORT_HOST
        && let Some(token) = segments.first().and_then(|s| leading(s, is_word_char))
    {
        return Some(token);
    }

    None
}

/// First [`NUMERIC_ID_LEN`] digits of the first run at least that long.
fn numeric_id(text: &str) -> Option<String> {
    let bytes = text.as_bytes();
    let mut run_start = None;

    for (i, b) in bytes.iter().enumerate() {
        if b.is_ascii_digit() {
            let start = *run_start.get_or_insert(i);
            if i + 1 - start == NUMERIC_ID_LEN {
                return Some(text[start..=i].to_string());
            }
        } else {
            run_start = None;
        }
    }

    None
}

fn leading(segment: &str, accept: impl Fn(char) -> bool) -> Option<String> {
    let run: String = segment.chars().take_while(|c| accept(*c)).collect();
    (!run.is_empty()).then_some(run)
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

#[cfg(test)]
mod tests;
