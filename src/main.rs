use std::net::SocketAddr;
use std::sync::Arc;

use astra::Server;
use log::{error, info};

use crate::db::connection::{init_db, Database};
use crate::payments::{PaymentGateway, StubGateway};
use crate::responses::html_error_response;
use crate::router::handle;

mod auth;
mod catalog;
mod db;
mod domain;
mod errors;
mod forms;
mod handlers;
mod payments;
mod responses;
mod router;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    env_logger::init();

    let db = Database::new("rental_leads.sqlite3");

    if let Err(e) = init_db(&db, "sql/schema.sql") {
        error!("database initialization failed: {e}");
        std::process::exit(1);
    }

    let gateway: Arc<dyn PaymentGateway> = Arc::new(StubGateway);

    let addr: SocketAddr = "127.0.0.1:3000".parse().unwrap();
    info!("starting server at http://{addr}");

    let server = Server::bind(&addr).max_workers(8);

    let result = server.serve(move |req, _info| match handle(req, &db, gateway.as_ref()) {
        Ok(resp) => resp,
        Err(err) => html_error_response(err),
    });

    if let Err(e) = result {
        error!("server ended with error: {e}");
    }
}
