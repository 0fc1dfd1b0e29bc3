use rusqlite::Connection;

use crate::auth::token::{generate_token_default, hash_token};
use crate::db::auth as db_auth;
use crate::errors::ServerError;

#[derive(Debug, Clone)]
pub struct MagicLinkConfig {
    /// TTL for magic links in seconds.
    pub ttl_secs: i64,
    /// Relative path used when building links, e.g. "/auth/magic".
    pub magic_path: String,
}

impl Default for MagicLinkConfig {
    fn default() -> Self {
        Self {
            ttl_secs: 15 * 60,
            magic_path: "/auth/magic".to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct IssuedMagicLink {
    pub email: String,
    pub user_id: i64,
    /// Raw token (never stored in the DB).
    pub token: String,
    pub expires_at: i64,
    /// Relative URL like "/auth/magic?token=...".
    pub link: String,
}

#[derive(Debug, Clone)]
pub struct RedeemedMagicLink {
    pub user_id: i64,
    pub email: String,
}

pub struct MagicLinkService {
    cfg: MagicLinkConfig,
}

impl MagicLinkService {
    pub fn new(cfg: MagicLinkConfig) -> Self {
        Self { cfg }
    }

    /// Trim + lowercase, minimal sanity check.
    pub fn normalize_email(email: &str) -> Result<String, ServerError> {
        let e = email.trim().to_lowercase();
        if e.is_empty() || !e.contains('@') || e.starts_with('@') || e.ends_with('@') {
            return Err(ServerError::BadRequest("invalid email".into()));
        }
        Ok(e)
    }

    fn build_link(&self, token: &str) -> String {
        format!("{}?token={}", self.cfg.magic_path, token)
    }

    /// Request a magic link (signup + login unified):
    /// - normalize email
    /// - get_or_create_user
    /// - insert magic link (store hash only)
    ///
    /// Email delivery is out of band; the caller logs `issued.link`.
    pub fn request_link(
        &self,
        conn: &Connection,
        email: &str,
        now: i64,
    ) -> Result<IssuedMagicLink, ServerError> {
        let email = Self::normalize_email(email)?;
        let user_id = db_auth::get_or_create_user(conn, &email, now)?;

        let token = generate_token_default();
        let token_hash = hash_token(&token);
        let expires_at = now + self.cfg.ttl_secs;

        db_auth::insert_magic_link(conn, user_id, &token_hash, now, expires_at)?;

        let link = self.build_link(&token);
        Ok(IssuedMagicLink {
            email,
            user_id,
            token,
            expires_at,
            link,
        })
    }

    /// Redeem a magic link: hash the token, consume it (transactional
    /// single-use), stamp last_login_at, return the user.
    pub fn redeem(
        &self,
        conn: &mut Connection,
        token: &str,
        now: i64,
    ) -> Result<RedeemedMagicLink, ServerError> {
        let token = token.trim();
        if token.is_empty() {
            return Err(ServerError::BadRequest("missing token".into()));
        }

        let token_hash = hash_token(token);
        let Some(user_id) = db_auth::consume_magic_link(conn, &token_hash, now)? else {
            return Err(ServerError::Unauthorized("invalid or expired link".into()));
        };

        db_auth::touch_last_login(conn, user_id, now)?;

        let email: String = conn
            .query_row(
                "select email from users where id = ?",
                rusqlite::params![user_id],
                |r| r.get(0),
            )
            .map_err(|e| ServerError::DbError(format!("select user email failed: {e}")))?;

        Ok(RedeemedMagicLink { user_id, email })
    }
}
