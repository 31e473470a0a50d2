const MOGG_PATH_KEY: &str = "(mogg_path";

/// Find the audio payload path named by a `.moggsong` descriptor.
///
/// Accepts both `(mogg_path "song.mogg")` and the unquoted `(mogg_path song.mogg)`.
pub fn mogg_path_of(text: &str) -> Option<String> {
    let start = text.find(MOGG_PATH_KEY)? + MOGG_PATH_KEY.len();
    let rest = text[start..].trim_start();

    let path = if let Some(quoted) = rest.strip_prefix('"') {
        &quoted[..quoted.find('"')?]
    } else {
        let end = rest
            .find(|c: char| c == ')' || c.is_whitespace())
            .unwrap_or(rest.len());
        &rest[..end]
    };

    if path.is_empty() {
        None
    } else {
        Some(path.to_string())
    }
}
