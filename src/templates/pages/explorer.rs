use crate::state::ExplorerState;
use crate::templates::components::{
    card, criteria_form, hospital_selector, map_panel, map_status, properties_found, property_list,
};
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub const PAGE_TITLE: &str = "Hospital Housing";

pub fn explorer_page(state: &ExplorerState) -> Markup {
    let content = html! {
        main class="max-w-screen-2xl mx-auto px-4 py-6" {
            div class="grid grid-cols-1 lg:grid-cols-4 gap-6" {
                aside class="lg:col-span-1 space-y-6" {
                    (card("Hospital Location", hospital_selector(&state.hospitals, state.selected.as_ref())))
                    @if state.selected.is_some() {
                        (card("Search Criteria", criteria_form(state)))
                    }
                }
                (map_panel(state))
                (property_list(state))
            }
        }
    };

    desktop_layout(PAGE_TITLE, content)
}

/// Response to a criteria change: the new list plus out-of-band updates
/// for the map scene and the counter in the form.
pub fn results_fragment(state: &ExplorerState) -> Markup {
    html! {
        (property_list(state))
        (map_status(state, true))
        (properties_found(state.filtered.len(), true))
    }
}
