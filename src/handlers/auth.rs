use astra::Request;
use log::info;

use crate::auth::magic::{MagicLinkConfig, MagicLinkService};
use crate::auth::sessions;
use crate::db::connection::Database;
use crate::forms::{parse_query, read_form};
use crate::responses::{
    html_response, redirect_clearing_session, redirect_with_session, ResultResp,
};
use crate::templates::desktop_layout;
use crate::templates::pages::{check_email_content, login_page};

/// GET /login
pub fn login(_req: &Request) -> ResultResp {
    html_response(login_page())
}

/// POST /auth/request-link - issue a magic link and answer with the
/// "check your email" notice. HTMX requests get the bare partial for the
/// in-place swap; a plain form post gets it wrapped in the full layout.
pub fn request_link(req: Request, db: &Database, now: i64) -> ResultResp {
    let via_htmx = req.headers().contains_key("HX-Request");
    let fields = read_form(req.into_body())?;
    let email = fields.first("email").to_string();

    let issued = db.with_conn(|conn| {
        let svc = MagicLinkService::new(MagicLinkConfig::default());
        svc.request_link(conn, &email, now)
    })?;

    // Email delivery isn't wired up; log the link so the flow is usable
    // in development.
    info!("magic link for {}: {}", issued.email, issued.link);

    let notice = check_email_content(&issued.email);
    if via_htmx {
        html_response(notice)
    } else {
        html_response(desktop_layout("Check your email", false, notice))
    }
}

/// GET /auth/magic?token=... - redeem the link, open a session, land on
/// the listing page.
pub fn magic(req: &Request, db: &Database, now: i64) -> ResultResp {
    let query = parse_query(req);
    let token = query.first("token").to_string();

    let session_token = db.with_conn(|conn| {
        let svc = MagicLinkService::new(MagicLinkConfig::default());
        let redeemed = svc.redeem(conn, &token, now)?;
        info!("user {} signed in", redeemed.email);
        sessions::create_session(conn, redeemed.user_id, now)
    })?;

    redirect_with_session("/leads", &session_token)
}

/// POST /logout - revoke the session and clear the cookie.
pub fn logout(req: &Request, db: &Database, now: i64) -> ResultResp {
    if let Some(token) = sessions::session_token(req) {
        db.with_conn(|conn| sessions::revoke_session(conn, &token, now))?;
    }
    redirect_clearing_session("/")
}
