use maud::{html, Markup};

use crate::domain::Lead;

/// Grid of lead cards, or the mode-dependent empty state.
pub fn lead_card_list(leads: &[Lead], is_purchased: bool) -> Markup {
    if leads.is_empty() {
        return html! {
            div class="text-center py-12 card muted" {
                p class="text-lg" {
                    @if is_purchased {
                        "You haven't purchased any leads yet"
                    } @else {
                        "No rental requests available at the moment"
                    }
                }
            }
        };
    }

    html! {
        div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6" {
            @for lead in leads {
                (lead_card(lead, is_purchased))
            }
        }
    }
}

/// One rental request card. Contact fields and the precise location render
/// only when `is_purchased`; otherwise the location is coarsened and a
/// purchase button is shown instead.
pub fn lead_card(lead: &Lead, is_purchased: bool) -> Markup {
    html! {
        div class="card shadow-md overflow-hidden" data-lead-id=(lead.id) {
            div class="p-6" {
                div class="flex items-start justify-between mb-4" {
                    span class="text-sm text-gray-600" {
                        (lead.equipment.len()) " items requested"
                    }
                    @if lead.is_open() {
                        span class="badge badge-open" { (lead.status) }
                    } @else {
                        span class="badge badge-closed" { (lead.status) }
                    }
                }

                div class="space-y-3" {
                    p class="text-sm text-gray-600" {
                        (lead.display_start_date()) " - " (lead.duration)
                    }

                    p class="text-sm text-gray-600 location" {
                        @if is_purchased {
                            (lead.location)
                        } @else {
                            (lead.redacted_location())
                        }
                    }

                    @if is_purchased {
                        div class="pt-4 border-t" {
                            h4 class="text-sm font-medium mb-3" { "Customer Details:" }
                            div class="space-y-2" {
                                p class="text-sm" { (lead.name) }
                                p {
                                    a href=(format!("mailto:{}", lead.email)) class="text-sm link" {
                                        (lead.email)
                                    }
                                }
                                p {
                                    a href=(format!("tel:{}", lead.phone)) class="text-sm link" {
                                        (lead.phone)
                                    }
                                }
                            }
                        }
                        @if !lead.details.is_empty() {
                            div class="pt-4 border-t" {
                                h4 class="text-sm font-medium mb-2" { "Additional Details:" }
                                p class="text-sm text-gray-600" { (lead.details) }
                            }
                        }
                    }

                    div class="mt-4 pt-4 border-t" {
                        span class="text-sm font-medium" { "Budget Range:" }
                        span class="ml-2 text-sm text-gray-600" { (lead.budget) }
                    }

                    @if !is_purchased {
                        form action=(format!("/leads/{}/purchase", lead.id)) method="post" {
                            button type="submit" class="mt-4 w-full primary" {
                                "View Customer Details ($5)"
                            }
                        }
                    }
                }
            }
        }
    }
}
