use crate::payments::doubles::FailingGateway;
use crate::payments::ChargeError;
use crate::tests::utils::*;

#[test]
fn anonymous_purchase_redirects_to_login_without_charging() {
    let db = init_test_db("purchase_anon");
    let lead_id = seed_lead(&db, &sample_form());

    let resp = handle(post_form(&format!("/leads/{lead_id}/purchase"), ""), &db).unwrap();

    assert_eq!(resp.status(), 302);
    let loc = resp
        .headers()
        .get("Location")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert_eq!(loc, "/login");

    assert_eq!(count_rows(&db, "purchases"), 0);
    assert_eq!(count_rows(&db, "payment_sessions"), 0);
}

#[test]
fn signed_in_purchase_lands_on_the_purchased_tab() {
    let db = init_test_db("purchase_ok");
    let lead_id = seed_lead(&db, &sample_form());
    let session = sign_in(&db, "supplier@example.com");

    let req = with_session(post_form(&format!("/leads/{lead_id}/purchase"), ""), &session);
    let resp = handle(req, &db).unwrap();

    assert_eq!(resp.status(), 302);
    let loc = resp
        .headers()
        .get("Location")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert_eq!(loc, "/leads?tab=purchased");

    assert_eq!(count_rows(&db, "purchases"), 1);
    assert_eq!(count_rows(&db, "payment_sessions"), 1);
}

#[test]
fn double_purchase_is_rejected() {
    let db = init_test_db("purchase_double");
    let lead_id = seed_lead(&db, &sample_form());
    let session = sign_in(&db, "supplier@example.com");

    let req = with_session(post_form(&format!("/leads/{lead_id}/purchase"), ""), &session);
    handle(req, &db).unwrap();

    let req = with_session(post_form(&format!("/leads/{lead_id}/purchase"), ""), &session);
    let err = handle(req, &db).unwrap_err();
    assert!(matches!(err, crate::errors::ServerError::AlreadyPurchased));

    // The duplicate attempt charged nothing.
    assert_eq!(count_rows(&db, "purchases"), 1);
    assert_eq!(count_rows(&db, "payment_sessions"), 1);
}

#[test]
fn declined_charge_changes_nothing_visible() {
    let db = init_test_db("purchase_declined");
    let lead_id = seed_lead(&db, &sample_form());
    let session = sign_in(&db, "supplier@example.com");

    let req = with_session(post_form(&format!("/leads/{lead_id}/purchase"), ""), &session);
    let err = handle_with_gateway(req, &db, &FailingGateway(ChargeError::Declined)).unwrap_err();
    assert!(matches!(
        err,
        crate::errors::ServerError::Payment(ChargeError::Declined)
    ));

    assert_eq!(count_rows(&db, "purchases"), 0);

    // The lead is still offered on the available tab.
    let req = with_session(get("/leads"), &session);
    let body = body_string(handle(req, &db).unwrap());
    assert!(body.contains("View Customer Details ($5)"));
}

#[test]
fn purchasing_a_missing_lead_is_not_found() {
    let db = init_test_db("purchase_missing");
    let session = sign_in(&db, "supplier@example.com");

    let req = with_session(post_form("/leads/999/purchase", ""), &session);
    let err = handle(req, &db).unwrap_err();
    assert!(matches!(err, crate::errors::ServerError::NotFound));
}
