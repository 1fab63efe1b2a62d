use crate::templates::components::site_header;
use maud::{html, Markup, DOCTYPE};

const DESCRIPTION: &str = "Professional housing proximity analysis for healthcare workers. \
Interactive maps with commute times, amenities, and property insights.";

pub fn desktop_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                meta name="description" content=(DESCRIPTION);
                title { (title) }
                link rel="icon" type="image/png" sizes="32x32" href="/favicon-32x32.png";
                script src="https://cdn.tailwindcss.com" {}
                script src="https://unpkg.com/htmx.org@1.9.12" defer {}
            }
            body {
                div class="min-h-screen bg-gray-50" {
                    (site_header())
                    (content)
                }
            }
        }
    }
}
