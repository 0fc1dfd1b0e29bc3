use maud::{html, Markup};

use crate::domain::Lead;
use crate::templates::{components::lead_card_list, desktop_layout};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Available,
    Purchased,
}

impl Tab {
    /// Parse the `tab` query param; the purchased tab is only reachable
    /// when signed in.
    pub fn from_query(value: &str, signed_in: bool) -> Self {
        match value {
            "purchased" if signed_in => Tab::Purchased,
            _ => Tab::Available,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Tab::Available => "available",
            Tab::Purchased => "purchased",
        }
    }
}

pub struct LeadsPageVm {
    pub signed_in: bool,
    pub tab: Tab,
    pub search: String,
    pub leads: Vec<Lead>,
    /// Load failure surfaced as an inline banner instead of an error page.
    pub error: Option<String>,
}

pub fn leads_page(vm: &LeadsPageVm) -> Markup {
    desktop_layout(
        "Rental Requests",
        vm.signed_in,
        html! {
            main class="container py-8" {
                (tab_nav(vm))
                (search_bar(vm))

                @if let Some(msg) = &vm.error {
                    div class="banner banner-error mb-6" role="alert" {
                        p { (msg) }
                    }
                }

                (lead_card_list(&vm.leads, vm.tab == Tab::Purchased))
            }
        },
    )
}

fn tab_link(vm: &LeadsPageVm, tab: Tab, label: &str) -> Markup {
    let mut href = format!("/leads?tab={}", tab.as_str());
    if !vm.search.is_empty() {
        href.push_str("&q=");
        href.push_str(&urlencode(&vm.search));
    }
    html! {
        @if vm.tab == tab {
            a href=(href) class="tab tab-active" { (label) }
        } @else {
            a href=(href) class="tab" { (label) }
        }
    }
}

fn tab_nav(vm: &LeadsPageVm) -> Markup {
    html! {
        div class="tabs mb-8" {
            (tab_link(vm, Tab::Available, "Available Rental Requests"))
            @if vm.signed_in {
                (tab_link(vm, Tab::Purchased, "Purchased Requests"))
            }
        }
    }
}

fn search_bar(vm: &LeadsPageVm) -> Markup {
    html! {
        form method="get" action="/leads" class="search-bar mb-8" {
            input type="hidden" name="tab" value=(vm.tab.as_str());
            input
                type="text"
                name="q"
                placeholder="Search by location or equipment..."
                value=(vm.search);
            button type="submit" { "Search" }
        }
    }
}

fn urlencode(s: &str) -> String {
    url::form_urlencoded::byte_serialize(s.as_bytes()).collect()
}
