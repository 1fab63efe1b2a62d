use maud::{html, Markup};

pub fn card(title: &str, body: Markup) -> Markup {
    html! {
        div class="card bg-white rounded-xl shadow-sm p-6" {
            h2 class="text-lg font-semibold text-gray-900 mb-4" { (title) }
            div class="card-body" {
                (body)
            }
        }
    }
}
