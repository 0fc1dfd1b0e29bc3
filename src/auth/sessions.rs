use astra::Request;
use rusqlite::{params, Connection, OptionalExtension};

use crate::auth::token::{generate_token_default, hash_token};
use crate::db::connection::Database;
use crate::errors::ServerError;

pub const SESSION_COOKIE: &str = "session";
const SESSION_TTL_SECS: i64 = 60 * 60 * 24 * 7; // 7 days

/// The signed-in viewer, as resolved from the session cookie.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub id: i64,
    pub email: String,
}

pub fn create_session(conn: &Connection, user_id: i64, now: i64) -> Result<String, ServerError> {
    let raw_token = generate_token_default();
    let hash = hash_token(&raw_token);
    let expires_at = now + SESSION_TTL_SECS;

    conn.execute(
        "insert into sessions (user_id, token_hash, created_at, expires_at) values (?, ?, ?, ?)",
        params![user_id, hash.as_slice(), now, expires_at],
    )
    .map_err(|e| ServerError::DbError(format!("create session failed: {e}")))?;

    Ok(raw_token)
}

pub fn load_user_from_session(
    conn: &Connection,
    raw_token: &str,
    now: i64,
) -> Result<Option<CurrentUser>, ServerError> {
    let hash = hash_token(raw_token);

    conn.query_row(
        r#"
        select u.id, u.email
        from sessions s
        join users u on u.id = s.user_id
        where s.token_hash = ?
          and s.expires_at > ?
          and s.revoked_at is null
        "#,
        params![hash.as_slice(), now],
        |row| {
            Ok(CurrentUser {
                id: row.get(0)?,
                email: row.get(1)?,
            })
        },
    )
    .optional()
    .map_err(|e| ServerError::DbError(format!("session lookup failed: {e}")))
}

pub fn revoke_session(conn: &Connection, raw_token: &str, now: i64) -> Result<(), ServerError> {
    let hash = hash_token(raw_token);
    conn.execute(
        "update sessions set revoked_at = ? where token_hash = ? and revoked_at is null",
        params![now, hash.as_slice()],
    )
    .map_err(|e| ServerError::DbError(format!("revoke session failed: {e}")))?;
    Ok(())
}

/// Pull the raw session token out of the Cookie header, if any.
pub fn session_token(req: &Request) -> Option<String> {
    let header = req.headers().get("Cookie")?.to_str().ok()?;
    for pair in header.split(';') {
        let mut parts = pair.trim().splitn(2, '=');
        if parts.next() == Some(SESSION_COOKIE) {
            return parts.next().map(str::to_string);
        }
    }
    None
}

/// Resolve the request's viewer: None when there is no cookie, or the
/// session is expired/revoked.
pub fn current_user(
    req: &Request,
    db: &Database,
    now: i64,
) -> Result<Option<CurrentUser>, ServerError> {
    let Some(token) = session_token(req) else {
        return Ok(None);
    };
    db.with_conn(|conn| load_user_from_session(conn, &token, now))
}
