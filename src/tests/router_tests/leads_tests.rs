use crate::tests::utils::*;

#[test]
fn empty_listing_shows_available_copy() {
    let db = init_test_db("leads_empty");

    let body = body_string(handle(get("/leads"), &db).unwrap());
    assert!(body.contains("No rental requests available at the moment"));
}

#[test]
fn unpurchased_cards_redact_contact_fields_and_location() {
    let db = init_test_db("leads_redact");
    seed_lead(&db, &sample_form());

    let body = body_string(handle(get("/leads"), &db).unwrap());

    // Coarse location only.
    assert!(body.contains("CO"));
    assert!(!body.contains("Denver, CO"));

    // No contact fields anywhere in the anonymous rendering.
    assert!(!body.contains("Jane Doe"));
    assert!(!body.contains("jane@example.com"));
    assert!(!body.contains("555-0100"));
    assert!(!body.contains("Need delivery on site"));

    // The purchase action is offered instead.
    assert!(body.contains("View Customer Details ($5)"));
    assert!(body.contains("1 items requested"));
}

#[test]
fn search_matches_location_case_insensitively() {
    let db = init_test_db("leads_search_loc");
    seed_lead(&db, &sample_form());

    let upper = body_string(handle(get("/leads?q=DENVER"), &db).unwrap());
    let lower = body_string(handle(get("/leads?q=denver"), &db).unwrap());

    assert!(upper.contains("data-lead-id"));
    assert!(lower.contains("data-lead-id"));
}

#[test]
fn search_matches_any_equipment_entry() {
    let db = init_test_db("leads_search_eq");
    seed_lead(&db, &sample_form());

    let hit = body_string(handle(get("/leads?q=excavator"), &db).unwrap());
    assert!(hit.contains("data-lead-id"));

    let miss = body_string(handle(get("/leads?q=crane"), &db).unwrap());
    assert!(!miss.contains("data-lead-id"));
    assert!(miss.contains("No rental requests available at the moment"));
}

#[test]
fn purchased_tab_requires_a_session() {
    let db = init_test_db("leads_tab_anon");
    seed_lead(&db, &sample_form());

    // Anonymous request for the purchased tab falls back to available.
    let body = body_string(handle(get("/leads?tab=purchased"), &db).unwrap());
    assert!(body.contains("View Customer Details ($5)"));
    assert!(!body.contains("Purchased Requests"));
}

#[test]
fn signed_in_purchased_tab_starts_empty() {
    let db = init_test_db("leads_tab_signed");
    seed_lead(&db, &sample_form());
    let session = sign_in(&db, "supplier@example.com");

    let req = with_session(get("/leads?tab=purchased"), &session);
    let body = body_string(handle(req, &db).unwrap());

    assert!(body.contains("Purchased Requests"));
    assert!(body.contains("You haven't purchased any leads yet"));
}

#[test]
fn purchased_cards_show_full_contact_details() {
    let db = init_test_db("leads_purchased_full");
    let lead_id = seed_lead(&db, &sample_form());
    let session = sign_in(&db, "supplier@example.com");

    let req = with_session(post_form(&format!("/leads/{lead_id}/purchase"), ""), &session);
    assert_eq!(handle(req, &db).unwrap().status(), 302);

    let req = with_session(get("/leads?tab=purchased"), &session);
    let body = body_string(handle(req, &db).unwrap());

    assert!(body.contains("Denver, CO"));
    assert!(body.contains("Jane Doe"));
    assert!(body.contains("mailto:jane@example.com"));
    assert!(body.contains("tel:555-0100"));
    assert!(body.contains("Need delivery on site"));
}

#[test]
fn purchased_leads_leave_the_available_tab() {
    let db = init_test_db("leads_move_tabs");
    let lead_id = seed_lead(&db, &sample_form());
    let session = sign_in(&db, "supplier@example.com");

    let req = with_session(post_form(&format!("/leads/{lead_id}/purchase"), ""), &session);
    handle(req, &db).unwrap();

    let req = with_session(get("/leads?tab=available"), &session);
    let body = body_string(handle(req, &db).unwrap());
    assert!(body.contains("No rental requests available at the moment"));

    // Other viewers still see it.
    let body = body_string(handle(get("/leads"), &db).unwrap());
    assert!(body.contains("data-lead-id"));
}
