use crate::auth::magic::{MagicLinkConfig, MagicLinkService};
use crate::tests::utils::*;

#[test]
fn login_page_loads_successfully() {
    let db = init_test_db("auth_login_page");

    let resp = handle(get("/login"), &db).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Sign in"));
    assert!(body.contains("form"));
}

#[test]
fn request_link_returns_partial_html_for_htmx() {
    let db = init_test_db("auth_request_link");
    let email = "test@example.com";

    let req = with_htmx(post_form("/auth/request-link", &format!("email={email}")));
    let resp = handle(req, &db).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Check your email"));
    assert!(body.contains(email));

    // A partial, not a page, so HTMX can swap it in.
    assert!(!body.contains("<!DOCTYPE html>"));
    assert!(!body.contains("<html"));
}

#[test]
fn request_link_without_htmx_gets_a_full_page() {
    let db = init_test_db("auth_request_link_plain");
    let email = "nojs@example.com";

    let resp = handle(post_form("/auth/request-link", &format!("email={email}")), &db).unwrap();
    assert_eq!(resp.status(), 200);

    // A plain form post navigates, so the notice arrives inside the layout.
    let body = body_string(resp);
    assert!(body.contains("<!DOCTYPE html>"));
    assert!(body.contains("Check your email"));
    assert!(body.contains(email));
}

#[test]
fn magic_link_redeems_into_a_session_and_redirects() {
    let db = init_test_db("auth_magic");

    let token = db
        .with_conn(|conn| {
            let svc = MagicLinkService::new(MagicLinkConfig::default());
            Ok(svc.request_link(conn, "c@d.com", now_unix())?.token)
        })
        .unwrap();

    let resp = handle(get(&format!("/auth/magic?token={token}")), &db).unwrap();

    assert_eq!(resp.status(), 302);
    let loc = resp
        .headers()
        .get("Location")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert_eq!(loc, "/leads");

    let cookie = resp
        .headers()
        .get("Set-Cookie")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(cookie.starts_with("session="));

    db.with_conn(|conn| {
        let used: i64 = conn
            .query_row(
                "select count(*) from magic_links where used_at is not null",
                [],
                |r| r.get(0),
            )
            .unwrap();
        assert_eq!(used, 1);
        Ok(())
    })
    .unwrap();
}

#[test]
fn bogus_magic_token_is_unauthorized() {
    let db = init_test_db("auth_bad_token");

    let err = handle(get("/auth/magic?token=not-a-real-token"), &db).unwrap_err();
    assert!(matches!(err, crate::errors::ServerError::Unauthorized(_)));
}

#[test]
fn logout_revokes_the_session() {
    let db = init_test_db("auth_logout");
    seed_lead(&db, &sample_form());
    let session = sign_in(&db, "supplier@example.com");

    let resp = handle(with_session(post_form("/logout", ""), &session), &db).unwrap();
    assert_eq!(resp.status(), 302);

    // The revoked session no longer unlocks the purchased tab.
    let body = body_string(
        handle(with_session(get("/leads?tab=purchased"), &session), &db).unwrap(),
    );
    assert!(!body.contains("Purchased Requests"));
}
