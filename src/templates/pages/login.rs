use crate::templates::{components::email_cta_form, desktop_layout};
use maud::{html, Markup};

pub fn login_page() -> Markup {
    desktop_layout(
        "Sign in",
        false,
        html! {
            main class="container narrow" {
                h1 { "Sign in" }
                p class="lead" {
                    "Suppliers sign in to purchase and view customer details."
                }

                (email_cta_form())
            }
        },
    )
}
