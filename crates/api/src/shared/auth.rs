use crate::error::TaskflowError;
use actix_web::HttpRequest;
use taskflow_infra::Config;

fn parse_authtoken_header(token_header_value: &str) -> String {
    token_header_value
        .replace("Bearer", "")
        .replace("bearer", "")
        .trim()
        .to_string()
}

/// The reminder trigger routes are open unless a cron secret is configured,
/// in which case every trigger must present it as a bearer token.
pub fn protect_cron_route(req: &HttpRequest, config: &Config) -> Result<(), TaskflowError> {
    let secret = match &config.cron_secret {
        Some(secret) => secret,
        None => return Ok(()),
    };

    let token = req
        .headers()
        .get("authorization")
        .and_then(|header| header.to_str().ok())
        .map(parse_authtoken_header);

    match token {
        Some(token) if token == *secret => Ok(()),
        _ => Err(TaskflowError::Unauthorized(
            "Missing or invalid cron secret".into(),
        )),
    }
}
