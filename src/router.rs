use std::time::{SystemTime, UNIX_EPOCH};

use astra::Request;

use crate::db::connection::Database;
use crate::errors::ServerError;
use crate::handlers;
use crate::payments::PaymentGateway;
use crate::responses::ResultResp;

pub fn handle(req: Request, db: &Database, gateway: &dyn PaymentGateway) -> ResultResp {
    let now = now_unix();
    let method = req.method().as_str().to_string();
    let path = req.uri().path().to_string();

    match (method.as_str(), path.as_str()) {
        ("GET", "/") => handlers::leads::home(&req, db, now),
        ("GET", "/leads") => handlers::leads::list(&req, db, now),
        ("POST", "/leads") => handlers::leads::submit(req, db, now),

        ("GET", "/login") => handlers::auth::login(&req),
        ("POST", "/auth/request-link") => handlers::auth::request_link(req, db, now),
        ("GET", "/auth/magic") => handlers::auth::magic(&req, db, now),
        ("POST", "/logout") => handlers::auth::logout(&req, db, now),

        ("POST", p) => match purchase_path_id(p) {
            Some(lead_id) => handlers::leads::purchase(&req, db, gateway, lead_id, now),
            None => Err(ServerError::NotFound),
        },
        _ => Err(ServerError::NotFound),
    }
}

/// Extract the id from "/leads/{id}/purchase".
fn purchase_path_id(path: &str) -> Option<i64> {
    path.strip_prefix("/leads/")?
        .strip_suffix("/purchase")?
        .parse()
        .ok()
}

pub fn now_unix() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}
