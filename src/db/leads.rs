use rusqlite::{params, Connection, Row};

use crate::domain::{Lead, LeadForm};
use crate::errors::ServerError;

fn lead_from_row(row: &Row) -> rusqlite::Result<Lead> {
    let equipment_json: String = row.get(1)?;
    // A lead whose equipment column is not valid JSON is a write-path bug;
    // surface it as an empty list rather than failing the whole listing.
    let equipment = serde_json::from_str(&equipment_json).unwrap_or_default();

    Ok(Lead {
        id: row.get(0)?,
        equipment,
        start_date: row.get(2)?,
        duration: row.get(3)?,
        location: row.get(4)?,
        budget: row.get(5)?,
        status: row.get(6)?,
        name: row.get(7)?,
        email: row.get(8)?,
        phone: row.get(9)?,
        details: row.get(10)?,
        created_at: row.get(11)?,
    })
}

const LEAD_COLUMNS: &str = "id, equipment, start_date, duration, location, budget, \
     status, name, email, phone, details, created_at";

/// Insert a validated intake form as a new open lead. Returns the lead id.
pub fn insert_lead(conn: &Connection, form: &LeadForm, now: i64) -> Result<i64, ServerError> {
    let equipment_json = serde_json::to_string(&form.equipment)
        .map_err(|e| ServerError::DbError(format!("encode equipment failed: {e}")))?;

    conn.execute(
        r#"
        insert into leads
            (equipment, start_date, duration, location, budget, status,
             name, email, phone, details, created_at)
        values (?, ?, ?, ?, ?, 'open', ?, ?, ?, ?, ?)
        "#,
        params![
            equipment_json,
            form.start_date,
            form.duration,
            form.location,
            form.budget,
            form.name,
            form.email,
            form.phone,
            form.details,
            now
        ],
    )
    .map_err(|e| ServerError::DbError(format!("insert lead failed: {e}")))?;

    Ok(conn.last_insert_rowid())
}

/// Open leads the viewer has not purchased, newest first. An anonymous
/// viewer sees every open lead.
pub fn list_available(conn: &Connection, viewer: Option<i64>) -> Result<Vec<Lead>, ServerError> {
    let mut stmt = conn
        .prepare(&format!(
            r#"
            select {LEAD_COLUMNS} from leads
            where status = 'open'
              and id not in (select lead_id from purchases where user_id = ?)
            order by created_at desc, id desc
            "#
        ))
        .map_err(|e| ServerError::DbError(format!("prepare available leads failed: {e}")))?;

    // user_id never matches -1, so the subquery excludes nothing.
    let viewer = viewer.unwrap_or(-1);
    let rows = stmt
        .query_map(params![viewer], lead_from_row)
        .map_err(|e| ServerError::DbError(format!("query available leads failed: {e}")))?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r.map_err(|e| ServerError::DbError(format!("read lead row failed: {e}")))?);
    }
    Ok(out)
}

/// Leads this user has purchased, most recent purchase first.
pub fn list_purchased(conn: &Connection, user_id: i64) -> Result<Vec<Lead>, ServerError> {
    let mut stmt = conn
        .prepare(
            r#"
            select l.id, l.equipment, l.start_date, l.duration, l.location, l.budget,
                   l.status, l.name, l.email, l.phone, l.details, l.created_at
            from purchases p
            join leads l on l.id = p.lead_id
            where p.user_id = ?
            order by p.created_at desc, p.id desc
            "#,
        )
        .map_err(|e| ServerError::DbError(format!("prepare purchased leads failed: {e}")))?;

    let rows = stmt
        .query_map(params![user_id], lead_from_row)
        .map_err(|e| ServerError::DbError(format!("query purchased leads failed: {e}")))?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r.map_err(|e| ServerError::DbError(format!("read lead row failed: {e}")))?);
    }
    Ok(out)
}
