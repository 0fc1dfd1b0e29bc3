use log::{info, warn};
use rusqlite::{params, Connection, ErrorCode, OptionalExtension, TransactionBehavior};

use crate::errors::ServerError;
use crate::payments::{PaymentGateway, LEAD_PRICE_CENTS};

pub fn has_purchased(conn: &Connection, user_id: i64, lead_id: i64) -> Result<bool, ServerError> {
    let count: i64 = conn
        .query_row(
            "select count(*) from purchases where user_id = ? and lead_id = ?",
            params![user_id, lead_id],
            |r| r.get(0),
        )
        .map_err(|e| ServerError::DbError(format!("purchase lookup failed: {e}")))?;
    Ok(count > 0)
}

fn record_payment_session(
    conn: &Connection,
    user_id: i64,
    lead_id: i64,
    amount: i64,
    status: &str,
    now: i64,
) -> Result<(), ServerError> {
    conn.execute(
        r#"
        insert into payment_sessions (user_id, lead_id, amount, status, created_at)
        values (?, ?, ?, ?, ?)
        "#,
        params![user_id, lead_id, amount, status, now],
    )
    .map_err(|e| ServerError::DbError(format!("record payment session failed: {e}")))?;
    Ok(())
}

/// Purchase contact access to one lead for $5.
///
/// The whole flow is atomic: the lead either shows up in the buyer's
/// purchased list with the charge recorded, or nothing changes. Failure
/// kinds the caller can surface: not-found, already-purchased, and the
/// gateway's charge errors. A failed charge is still audited as a failed
/// payment session (written after the transaction is rolled back).
pub fn purchase_lead(
    conn: &mut Connection,
    gateway: &dyn PaymentGateway,
    user_id: i64,
    lead_id: i64,
    now: i64,
) -> Result<(), ServerError> {
    // An immediate transaction takes the write lock up front, so two
    // workers racing for the same lead serialize here: the loser waits,
    // then sees the winner's purchase in the dup-check below and never
    // reaches the gateway.
    let tx = conn
        .transaction_with_behavior(TransactionBehavior::Immediate)
        .map_err(|e| ServerError::DbError(format!("begin purchase tx failed: {e}")))?;

    let status: Option<String> = tx
        .query_row(
            "select status from leads where id = ?",
            params![lead_id],
            |r| r.get(0),
        )
        .optional()
        .map_err(|e| ServerError::DbError(format!("select lead failed: {e}")))?;

    let Some(status) = status else {
        return Err(ServerError::NotFound);
    };
    if status != "open" {
        return Err(ServerError::BadRequest(
            "this rental request is no longer open".into(),
        ));
    }

    if has_purchased(&tx, user_id, lead_id)? {
        return Err(ServerError::AlreadyPurchased);
    }

    match gateway.charge(user_id, lead_id, LEAD_PRICE_CENTS) {
        Ok(receipt) => {
            tx.execute(
                r#"
                insert into purchases (user_id, lead_id, price_cents, created_at)
                values (?, ?, ?, ?)
                "#,
                params![user_id, lead_id, receipt.amount_cents, now],
            )
            .map_err(|e| {
                // Unique (user_id, lead_id) is the last line against a
                // duplicate slipping past the dup-check.
                if e.sqlite_error_code() == Some(ErrorCode::ConstraintViolation) {
                    ServerError::AlreadyPurchased
                } else {
                    ServerError::DbError(format!("insert purchase failed: {e}"))
                }
            })?;

            record_payment_session(&tx, user_id, lead_id, receipt.amount_cents, "completed", now)?;

            tx.commit()
                .map_err(|e| ServerError::DbError(format!("commit purchase failed: {e}")))?;

            info!("user {user_id} purchased lead {lead_id}");
            Ok(())
        }
        Err(charge_err) => {
            // Drop the transaction so no purchase state survives, then
            // audit the failed attempt on its own.
            drop(tx);
            warn!("charge failed for user {user_id} lead {lead_id}: {charge_err}");
            record_payment_session(conn, user_id, lead_id, LEAD_PRICE_CENTS, "failed", now)?;
            Err(charge_err.into())
        }
    }
}
