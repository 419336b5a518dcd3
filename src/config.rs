use std::env;
use std::path::Path;

// Default configuration constants
pub const DEFAULT_API_BASE_URL: &str = "https://api.vultr.com/v2";
pub const DEFAULT_API_TOKEN: &str = "";
pub const DEFAULT_DECIMAL_PRECISION: usize = 2;
pub const DEFAULT_LIST_SEPARATOR: &str = ",";
pub const DEFAULT_PER_PAGE: u32 = 100;

/// Largest precision accepted from `DECIMAL_PRECISION`.
pub const MAX_DECIMAL_PRECISION: usize = 8;

pub fn load_env_file(env_file: Option<&str>) {
    if let Some(path) = env_file {
        if let Err(e) = dotenvy::from_path(Path::new(path)) {
            tracing::warn!(%e, path, "Failed to load env file");
        }
    } else {
        dotenvy::dotenv().ok();
    }
}

pub fn get_api_base_url() -> String {
    sanitize_base_url(&env::var("API_BASE_URL").unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string()))
}

pub fn get_api_token() -> String {
    env::var("API_TOKEN").unwrap_or_else(|_| DEFAULT_API_TOKEN.to_string())
}

/// Number of digits printed after the decimal point for prices.
///
/// Falls back to [`DEFAULT_DECIMAL_PRECISION`] when unset or not a number,
/// and is capped at [`MAX_DECIMAL_PRECISION`].
pub fn get_decimal_precision() -> usize {
    match env::var("DECIMAL_PRECISION") {
        Ok(raw) => match raw.trim().parse::<usize>() {
            Ok(p) => p.min(MAX_DECIMAL_PRECISION),
            Err(_) => {
                tracing::warn!(value = %raw, "Ignoring invalid DECIMAL_PRECISION");
                DEFAULT_DECIMAL_PRECISION
            }
        },
        Err(_) => DEFAULT_DECIMAL_PRECISION,
    }
}

pub fn sanitize_base_url(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        DEFAULT_API_BASE_URL.to_string()
    } else {
        trimmed.to_string()
    }
}
