use actix_web::web;

pub mod games;
pub mod health;
pub mod levels;
pub mod pagination;

use crate::error::AppError;

/// Configure application routes for the server and for tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(health::root));

    // Health check: /health
    cfg.service(web::scope("/health").configure(health::configure_routes));

    // Game resource: /games/**
    cfg.service(web::scope("/games").configure(games::configure_routes));

    // Level lookup resource: /levels/**
    cfg.service(web::scope("/levels").configure(levels::configure_routes));
}

/// Parse a path id as an unsigned 64-bit decimal and narrow it to the
/// signed key type the entities use.
pub(crate) fn parse_id(raw: &str) -> Result<i64, AppError> {
    let id = raw
        .parse::<u64>()
        .map_err(|e| AppError::bad_request("ID_INVALID", e.to_string()))?;
    i64::try_from(id).map_err(|_| AppError::bad_request("ID_INVALID", format!("id {id} out of range")))
}

#[cfg(test)]
mod tests {
    use super::parse_id;
    use crate::error::AppError;

    #[test]
    fn parses_decimal_ids() {
        assert_eq!(parse_id("5").unwrap(), 5);
        assert_eq!(parse_id("999999").unwrap(), 999999);
    }

    #[test]
    fn rejects_non_numeric_and_negative_ids() {
        for raw in ["abc", "-1", "5x", ""] {
            let err = parse_id(raw).unwrap_err();
            assert!(
                matches!(err, AppError::BadRequest { code: "ID_INVALID", .. }),
                "id={raw:?}"
            );
        }
    }

    #[test]
    fn rejects_ids_beyond_the_signed_key_range() {
        let raw = u64::MAX.to_string();
        let err = parse_id(&raw).unwrap_err();
        assert!(matches!(err, AppError::BadRequest { code: "ID_INVALID", .. }));
    }
}
