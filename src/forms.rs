use std::collections::HashMap;
use std::io::Read;

use astra::{Body, Request};
use url::form_urlencoded;

use crate::errors::ServerError;

/// Decoded urlencoded key/value pairs. Repeated keys (the equipment
/// multi-select) keep every value in submission order.
#[derive(Debug, Default)]
pub struct FormFields(HashMap<String, Vec<String>>);

impl FormFields {
    pub fn parse(raw: &[u8]) -> Self {
        let mut map: HashMap<String, Vec<String>> = HashMap::new();
        for (k, v) in form_urlencoded::parse(raw) {
            map.entry(k.into_owned()).or_default().push(v.into_owned());
        }
        Self(map)
    }

    /// First value for a key, or "" when absent.
    pub fn first(&self, key: &str) -> &str {
        self.0
            .get(key)
            .and_then(|vs| vs.first())
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Every value submitted under a key.
    pub fn all(&self, key: &str) -> &[String] {
        self.0.get(key).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Decode an application/x-www-form-urlencoded request body.
/// Consumes the body.
pub fn read_form(mut body: Body) -> Result<FormFields, ServerError> {
    let mut raw = Vec::new();
    body.reader()
        .read_to_end(&mut raw)
        .map_err(|e| ServerError::BadRequest(format!("unreadable body: {e}")))?;
    Ok(FormFields::parse(&raw))
}

/// Decode the query string of a request.
pub fn parse_query(req: &Request) -> FormFields {
    match req.uri().query() {
        Some(q) => FormFields::parse(q.as_bytes()),
        None => FormFields::default(),
    }
}
