/// Reduces a client-supplied filename to a safe basename.
///
/// Path separators are stripped, as is every character outside
/// `[A-Za-z0-9._-]`. Leading and trailing dots are removed so the result
/// can never be a hidden file or a `..` traversal component. A name that
/// sanitizes to nothing becomes `upload`.
pub fn sanitize_filename(filename: &str) -> String {
    let base = filename
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(filename);

    let cleaned: String = base
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_'))
        .collect();

    let trimmed = cleaned.trim_matches('.');
    if trimmed.is_empty() {
        "upload".to_string()
    } else {
        trimmed.to_string()
    }
}
