use maud::{html, Markup};

use crate::domain::{FieldErrors, LeadForm};
use crate::templates::{components::lead_form, desktop_layout};

/// Landing page: hero plus the intake form. `form`/`errors` carry the
/// submitted values and messages when a failed submission re-renders it.
pub fn home_page(signed_in: bool, form: &LeadForm, errors: &FieldErrors) -> Markup {
    desktop_layout(
        "Rent Equipment",
        signed_in,
        html! {
            section class="hero text-center py-12" {
                h1 { "Find Equipment for Your Next Project" }
                p class="lead" {
                    "Tell us what you need and local suppliers will get in touch."
                }
            }
            main class="container narrow" {
                (lead_form(form, errors))
            }
        },
    )
}
