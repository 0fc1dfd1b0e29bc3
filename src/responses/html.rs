use astra::{Body, ResponseBuilder};
use maud::Markup;

use crate::responses::ResultResp;

pub fn html_response(markup: Markup) -> ResultResp {
    html_response_with_status(200, markup)
}

pub fn html_response_with_status(status: u16, markup: Markup) -> ResultResp {
    let resp = ResponseBuilder::new()
        .status(status)
        .header("Content-Type", "text/html; charset=utf-8")
        .body(Body::from(markup.into_string()))
        .unwrap();

    Ok(resp)
}

pub fn redirect(location: &str) -> ResultResp {
    let resp = ResponseBuilder::new()
        .status(302)
        .header("Location", location)
        .body(Body::empty())
        .unwrap();
    Ok(resp)
}

pub fn redirect_with_session(location: &str, session_token: &str) -> ResultResp {
    let cookie = format!("session={session_token}; Path=/; HttpOnly; SameSite=Lax");
    let resp = ResponseBuilder::new()
        .status(302)
        .header("Location", location)
        .header("Set-Cookie", cookie)
        .body(Body::empty())
        .unwrap();
    Ok(resp)
}

/// Redirect that clears the session cookie.
pub fn redirect_clearing_session(location: &str) -> ResultResp {
    let resp = ResponseBuilder::new()
        .status(302)
        .header("Location", location)
        .header("Set-Cookie", "session=; Path=/; HttpOnly; Max-Age=0")
        .body(Body::empty())
        .unwrap();
    Ok(resp)
}
