use std::collections::BTreeMap;

/// One in-flight intake submission. Lives only for the duration of a
/// request: parsed from the form body, validated, and either inserted or
/// echoed back into the re-rendered form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LeadForm {
    pub equipment: Vec<String>,
    pub start_date: String,
    pub duration: String,
    pub location: String,
    pub budget: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub details: String,
}

/// Field name -> message, recomputed in full on every validation pass.
#[derive(Debug, Default, PartialEq)]
pub struct FieldErrors(BTreeMap<&'static str, &'static str>);

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: &str) -> Option<&'static str> {
        self.0.get(field).copied()
    }
}

impl LeadForm {
    /// Presence validation only; no format checks beyond non-empty.
    pub fn validate(&self) -> FieldErrors {
        let mut errors = BTreeMap::new();

        if self.equipment.is_empty() {
            errors.insert("equipment", "Select at least one item");
        }

        let required = [
            ("start_date", &self.start_date),
            ("duration", &self.duration),
            ("location", &self.location),
            ("budget", &self.budget),
            ("name", &self.name),
            ("email", &self.email),
            ("phone", &self.phone),
        ];
        for (field, value) in required {
            if value.is_empty() {
                errors.insert(field, "Required");
            }
        }

        FieldErrors(errors)
    }
}
