use crate::domain::Hospital;
use maud::{html, Markup};
use url::form_urlencoded;

fn select_href(hospital: &Hospital) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("hospital", &hospital.name)
        .finish();
    format!("/?{query}")
}

pub fn hospital_selector(hospitals: &[Hospital], selected: Option<&Hospital>) -> Markup {
    html! {
        div class="space-y-3" id="hospital-selector" {
            @for hospital in hospitals {
                @let is_selected = selected.map(|s| s.name == hospital.name).unwrap_or(false);
                @let (border, dot) = if is_selected {
                    ("border-blue-700 bg-blue-50 shadow-md", "bg-blue-700")
                } else {
                    ("border-gray-200 hover:border-gray-300 bg-white", "bg-red-500")
                };
                a
                    href=(select_href(hospital))
                    class={ "block w-full text-left p-4 rounded-lg border-2 transition-all duration-200 hover:shadow-md " (border) }
                    aria-current=[is_selected.then_some("true")]
                {
                    div class="flex items-start space-x-3" {
                        div class={ "w-3 h-3 rounded-full mt-1.5 flex-shrink-0 " (dot) } {}
                        div class="flex-1 min-w-0" {
                            h3 class="font-medium text-sm leading-tight" { (hospital.short_name()) }
                            p class="text-xs text-gray-600 mt-1 line-clamp-2" { (hospital.address) }
                        }
                    }

                    @if is_selected {
                        div class="mt-3 pt-3 border-t border-blue-200" {
                            div class="flex items-center space-x-2 text-xs text-blue-600" {
                                span { "📍" }
                                span { "Selected Location" }
                            }
                        }
                    }
                }
            }

            @if hospitals.is_empty() {
                div class="text-center py-8 text-gray-500" {
                    div class="text-2xl mb-2" { "🏥" }
                    p class="text-sm" { "No hospitals available right now." }
                }
            }
        }
    }
}
