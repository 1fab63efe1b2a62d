use maud::{html, Markup};

pub mod card;
pub mod criteria_form;
pub mod error;
pub mod header;
pub mod hospital_selector;
pub mod map_panel;
pub mod property_list;

pub use card::card;
pub use criteria_form::{criteria_form, properties_found};
pub use error::error_page;
pub use header::site_header;
pub use hospital_selector::hospital_selector;
pub use map_panel::{map_panel, map_status};
pub use property_list::{photo_img, property_list};

/// Spinning ring with a caption underneath.
pub fn spinner(message: &str) -> Markup {
    html! {
        div class="text-center" {
            div class="animate-spin rounded-full h-12 w-12 border-b-2 border-blue-700 mx-auto mb-4" {}
            p class="text-gray-600" { (message) }
        }
    }
}
