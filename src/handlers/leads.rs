use astra::Request;
use log::info;

use crate::auth::sessions;
use crate::db::connection::Database;
use crate::db::{leads, purchases};
use crate::domain::LeadForm;
use crate::forms::{parse_query, read_form};
use crate::payments::PaymentGateway;
use crate::responses::{html_response, html_response_with_status, redirect, ResultResp};
use crate::templates::pages::{home_page, leads_page, LeadsPageVm, Tab};

/// GET / - landing page with a blank intake form.
pub fn home(req: &Request, db: &Database, now: i64) -> ResultResp {
    let signed_in = sessions::current_user(req, db, now)?.is_some();
    html_response(home_page(
        signed_in,
        &LeadForm::default(),
        &Default::default(),
    ))
}

/// POST /leads - validate the intake form; insert on success, re-render
/// with the submitted values and the full error map on failure.
pub fn submit(req: Request, db: &Database, now: i64) -> ResultResp {
    let signed_in = sessions::current_user(&req, db, now)?.is_some();
    let fields = read_form(req.into_body())?;

    let form = LeadForm {
        equipment: fields.all("equipment").to_vec(),
        start_date: fields.first("start_date").to_string(),
        duration: fields.first("duration").to_string(),
        location: fields.first("location").to_string(),
        budget: fields.first("budget").to_string(),
        name: fields.first("name").to_string(),
        email: fields.first("email").to_string(),
        phone: fields.first("phone").to_string(),
        details: fields.first("details").to_string(),
    };

    let errors = form.validate();
    if !errors.is_empty() {
        return html_response_with_status(422, home_page(signed_in, &form, &errors));
    }

    let lead_id = db.with_conn(|conn| leads::insert_lead(conn, &form, now))?;
    info!("new lead {lead_id} ({})", form.location);
    redirect("/leads")
}

/// GET /leads - tabbed listing with search. A load failure renders the page
/// with an inline banner instead of replacing it with an error page.
pub fn list(req: &Request, db: &Database, now: i64) -> ResultResp {
    let user = sessions::current_user(req, db, now)?;
    let query = parse_query(req);
    let tab = Tab::from_query(query.first("tab"), user.is_some());
    let search = query.first("q").to_string();

    let viewer_id = user.as_ref().map(|u| u.id);
    let loaded = db.with_conn(|conn| match (tab, viewer_id) {
        (Tab::Purchased, Some(uid)) => leads::list_purchased(conn, uid),
        _ => leads::list_available(conn, viewer_id),
    });

    let (leads, error) = match loaded {
        Ok(all) => (
            all.into_iter()
                .filter(|lead| lead.matches_search(&search))
                .collect(),
            None,
        ),
        Err(e) => (Vec::new(), Some(e.to_string())),
    };

    html_response(leads_page(&LeadsPageVm {
        signed_in: user.is_some(),
        tab,
        search,
        leads,
        error,
    }))
}

/// POST /leads/{id}/purchase - buy contact access. An anonymous click is
/// sent to sign-in with nothing charged or recorded.
pub fn purchase(
    req: &Request,
    db: &Database,
    gateway: &dyn PaymentGateway,
    lead_id: i64,
    now: i64,
) -> ResultResp {
    let Some(user) = sessions::current_user(req, db, now)? else {
        return redirect("/login");
    };

    info!("purchase attempt: lead {lead_id} by {}", user.email);
    db.with_conn(|conn| purchases::purchase_lead(conn, gateway, user.id, lead_id, now))?;
    redirect("/leads?tab=purchased")
}
