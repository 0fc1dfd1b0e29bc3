use maud::{html, Markup};

use crate::catalog::EQUIPMENT;
use crate::domain::{FieldErrors, LeadForm};

fn field_error(errors: &FieldErrors, field: &str) -> Markup {
    html! {
        @if let Some(msg) = errors.get(field) {
            p class="field-error text-sm" { (msg) }
        }
    }
}

/// The intake form. Re-rendered with the submitted values and the full
/// error map after a failed validation pass.
pub fn lead_form(form: &LeadForm, errors: &FieldErrors) -> Markup {
    html! {
        form action="/leads" method="post" class="card lead-form p-6" {
            div class="grid grid-cols-1 md:grid-cols-2 gap-6" {
                fieldset class="col-span-full" {
                    legend class="text-sm font-medium mb-1" { "What do you need to rent?" }
                    div class="equipment-grid" {
                        @for item in EQUIPMENT {
                            label class="equipment-option" {
                                input
                                    type="checkbox"
                                    name="equipment"
                                    value=(item)
                                    checked[form.equipment.iter().any(|e| e.as_str() == *item)];
                                " " (item)
                            }
                        }
                    }
                    (field_error(errors, "equipment"))
                }

                div {
                    label for="start_date" class="block text-sm font-medium mb-1" { "Start Date" }
                    input
                        type="date"
                        id="start_date"
                        name="start_date"
                        value=(form.start_date);
                    (field_error(errors, "start_date"))
                }

                div {
                    label for="duration" class="block text-sm font-medium mb-1" { "Rental Duration" }
                    select id="duration" name="duration" {
                        option value="" disabled selected[form.duration.is_empty()] { "Select duration..." }
                        @for d in ["1-3 days", "1 week", "2 weeks", "1 month", "3+ months"] {
                            option value=(d) selected[form.duration == d] { (d) }
                        }
                    }
                    (field_error(errors, "duration"))
                }

                div {
                    label for="location" class="block text-sm font-medium mb-1" { "Job Site Location" }
                    input
                        type="text"
                        id="location"
                        name="location"
                        placeholder="City, State"
                        value=(form.location);
                    (field_error(errors, "location"))
                }

                div {
                    label for="budget" class="block text-sm font-medium mb-1" { "Budget Range" }
                    select id="budget" name="budget" {
                        option value="" disabled selected[form.budget.is_empty()] { "Select budget..." }
                        @for b in ["Under $500", "$500 - $1,000", "$1,000 - $2,500", "$2,500 - $5,000", "$5,000+"] {
                            option value=(b) selected[form.budget == b] { (b) }
                        }
                    }
                    (field_error(errors, "budget"))
                }

                div class="col-span-full" {
                    h3 class="text-lg font-semibold mb-4" { "Contact Information" }
                    div class="grid grid-cols-1 md:grid-cols-2 gap-4" {
                        div {
                            input
                                type="text"
                                name="name"
                                placeholder="Full Name"
                                value=(form.name);
                            (field_error(errors, "name"))
                        }
                        div {
                            input
                                type="email"
                                name="email"
                                placeholder="Email Address"
                                value=(form.email);
                            (field_error(errors, "email"))
                        }
                        div {
                            input
                                type="tel"
                                name="phone"
                                placeholder="Phone Number"
                                value=(form.phone);
                            (field_error(errors, "phone"))
                        }
                    }
                }

                div class="col-span-full" {
                    label for="details" class="block text-sm font-medium mb-1" { "Additional Details" }
                    textarea
                        id="details"
                        name="details"
                        rows="4"
                        placeholder="Any special requirements or notes..."
                    {
                        (form.details)
                    }
                }

                button type="submit" class="col-span-full primary" { "Submit Request" }
            }
        }
    }
}
