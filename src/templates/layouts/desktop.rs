use maud::{html, Markup, DOCTYPE};

pub fn desktop_layout(title: &str, signed_in: bool, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                link rel="icon" href="/static/favicon/favicon.ico";
                link rel="stylesheet" href="/static/main.css";
                script src="/static/htmx.js" defer {};
            }
            body {
                header class="flex items-center justify-between px-6 py-3 shadow" {
                    svg
                        xmlns="http://www.w3.org/2000/svg"
                        width="24"
                        height="24"
                        viewBox="0 0 24 24"
                        fill="none"
                        stroke="#7c3aed"
                        stroke-width="2"
                        stroke-linecap="round"
                        stroke-linejoin="round"
                    {
                        path stroke="none" d="M0 0h24v24H0z" fill="none" {}
                        path d="M4 17h2a2 2 0 1 0 4 0h4a2 2 0 1 0 4 0h2v-5l-3 -6h-13z" {}
                    }
                    h3 { "RentalReach" }
                    nav {
                        ul {
                            li { a href="/" { "Request Equipment" } }
                            li { a href="/leads" { "Browse Requests" } }
                        }
                    }

                    @if signed_in {
                        form action="/logout" method="post" class="inline" {
                            button type="submit" class="text-base font-medium hover:text-purple-600" {
                                "Log out"
                            }
                        }
                    } @else {
                        a href="/login" class="text-base font-medium hover:text-purple-600" { "Login" }
                    }
                }
                (content)
            }
        }
    }
}
