use crate::tests::utils::*;

#[test]
fn home_page_shows_the_intake_form() {
    let db = init_test_db("form_home");

    let resp = handle(get("/"), &db).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Submit Request"));
    assert!(body.contains(r#"name="start_date""#));
    assert!(body.contains("Excavator"));
}

#[test]
fn empty_submission_flags_every_required_field_and_inserts_nothing() {
    let db = init_test_db("form_empty");

    let resp = handle(post_form("/leads", ""), &db).unwrap();
    assert_eq!(resp.status(), 422);

    let body = body_string(resp);
    assert!(body.contains("Select at least one item"));
    // One "Required" per missing text field.
    assert_eq!(body.matches("Required").count(), 7);

    assert_eq!(count_rows(&db, "leads"), 0);
}

#[test]
fn partial_submission_is_rejected_and_keeps_typed_values() {
    let db = init_test_db("form_partial");

    // Everything present except phone.
    let body_data = "equipment=Excavator&start_date=2026-06-03&duration=2+weeks\
                     &location=Denver%2C+CO&budget=%241%2C000+-+%242%2C500\
                     &name=Jane+Doe&email=jane%40example.com&phone=";
    let resp = handle(post_form("/leads", body_data), &db).unwrap();
    assert_eq!(resp.status(), 422);

    let body = body_string(resp);
    assert_eq!(body.matches("Required").count(), 1);
    // Submitted values survive the re-render.
    assert!(body.contains("Jane Doe"));
    assert!(body.contains("Denver, CO"));

    assert_eq!(count_rows(&db, "leads"), 0);
}

#[test]
fn valid_submission_inserts_exactly_once_with_the_submitted_values() {
    let db = init_test_db("form_valid");

    let body_data = "equipment=Excavator&equipment=Skid+Steer&start_date=2026-06-03\
                     &duration=2+weeks&location=Denver%2C+CO\
                     &budget=%241%2C000+-+%242%2C500&name=Jane+Doe\
                     &email=jane%40example.com&phone=555-0100\
                     &details=Need+delivery+on+site";
    let resp = handle(post_form("/leads", body_data), &db).unwrap();

    assert_eq!(resp.status(), 302);
    let loc = resp
        .headers()
        .get("Location")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert_eq!(loc, "/leads");

    assert_eq!(count_rows(&db, "leads"), 1);
    db.with_conn(|conn| {
        let (equipment, location, status, phone): (String, String, String, String) = conn
            .query_row(
                "select equipment, location, status, phone from leads",
                [],
                |r| Ok((r.get(0)?, r.get(1)?, r.get(2)?, r.get(3)?)),
            )
            .unwrap();
        assert_eq!(equipment, r#"["Excavator","Skid Steer"]"#);
        assert_eq!(location, "Denver, CO");
        assert_eq!(status, "open");
        assert_eq!(phone, "555-0100");
        Ok(())
    })
    .unwrap();
}
