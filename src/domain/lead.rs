use chrono::NaiveDate;

/// A renter's rental request as stored. Contact fields (name, email, phone,
/// details) must only ever reach a viewer who purchased the lead; templates
/// enforce that through [`Lead::redacted_location`] and the purchased flag.
#[derive(Debug, Clone)]
pub struct Lead {
    pub id: i64,
    pub equipment: Vec<String>,
    pub start_date: String,
    pub duration: String,
    pub location: String,
    pub budget: String,
    pub status: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub details: String,
    pub created_at: i64,
}

impl Lead {
    pub fn is_open(&self) -> bool {
        self.status == "open"
    }

    /// Coarse location shown to non-purchasers: the second comma-separated
    /// segment ("Denver, CO" -> "CO"), falling back to the full string when
    /// there is no usable second segment.
    pub fn redacted_location(&self) -> &str {
        match self.location.split(',').nth(1).map(str::trim) {
            Some(seg) if !seg.is_empty() => seg,
            _ => &self.location,
        }
    }

    /// Case-insensitive substring match against the location or any
    /// equipment entry. An empty term matches everything.
    pub fn matches_search(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.location.to_lowercase().contains(&term)
            || self
                .equipment
                .iter()
                .any(|eq| eq.to_lowercase().contains(&term))
    }

    /// Start date for card display, e.g. "03 Jun 2026". Falls back to the
    /// raw string if it isn't an ISO date.
    pub fn display_start_date(&self) -> String {
        match NaiveDate::parse_from_str(&self.start_date, "%Y-%m-%d") {
            Ok(d) => d.format("%d %b %Y").to_string(),
            Err(_) => self.start_date.clone(),
        }
    }
}
