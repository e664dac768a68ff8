pub(crate) const DEFAULT_API_BASE: &str = "http://localhost:5000";

pub(crate) fn api_base() -> String {
    if let Some(raw) = option_env!("LOTTAWORDS_API_BASE")
        .or(option_env!("TRUNK_PUBLIC_LOTTAWORDS_API_BASE"))
        .or(option_env!("TRUNK_PUBLIC_API_BASE"))
    {
        let trimmed = raw.trim();
        if !trimmed.is_empty() {
            return trimmed.trim_end_matches('/').to_string();
        }
    }
    DEFAULT_API_BASE.to_string()
}

pub(crate) fn puzzle_url() -> String {
    format!("{}/api/puzzle", api_base())
}
