use maud::{html, Markup};

/// Partial HTML swapped in place of the login form after a link is issued.
/// Deliberately not a full page so HTMX can splice it in.
pub fn check_email_content(email: &str) -> Markup {
    html! {
        div class="text-center py-8 px-4 fade-in" {
            h3 class="text-lg font-medium" { "Check your email" }

            div class="mt-2" {
                p class="text-sm text-gray-500" {
                    "We sent a sign-in link to "
                    strong { (email) }
                    "."
                }
                p class="text-sm text-gray-500 mt-2" {
                    "Click the link in the email to sign in."
                }
            }

            div class="mt-6" {
                a href="/login" class="text-sm font-medium link" {
                    "Try with a different email"
                }
            }
        }
    }
}
