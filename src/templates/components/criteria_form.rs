use crate::domain::filter::{MAX_MAX_COMMUTE, MAX_MIN_RATING, MIN_MAX_COMMUTE, MIN_RATING_STEP};
use crate::domain::CommuteScenario;
use crate::state::ExplorerState;
use maud::{html, Markup};

const INPUT_CLASS: &str = "w-full px-3 py-2 border border-gray-300 rounded-lg focus:outline-none \
focus:ring-2 focus:ring-blue-500 focus:border-transparent";
const SLIDER_CLASS: &str = "w-full h-2 bg-gray-200 rounded-lg appearance-none cursor-pointer slider";

/// Search criteria. Any change re-requests the results fragment; the
/// plain GET action keeps it usable without scripts.
pub fn criteria_form(state: &ExplorerState) -> Markup {
    let criteria = &state.criteria;

    html! {
        form
            id="criteria"
            method="get"
            action="/"
            class="space-y-4"
            hx-get="/results"
            hx-target="#property-list"
            hx-swap="outerHTML"
            hx-trigger="input changed delay:300ms, change"
        {
            div {
                label class="block text-sm font-medium text-gray-700 mb-2" for="scenario" {
                    "Commute Time Scenario"
                }
                select id="scenario" name="scenario" class=(INPUT_CLASS) {
                    @for scenario in CommuteScenario::ALL {
                        option
                            value=(scenario.value())
                            selected[scenario == state.scenario]
                            disabled[!scenario.is_available()]
                        {
                            (scenario.label())
                            @if !scenario.is_available() { " (Coming Soon)" }
                        }
                    }
                }
            }

            div {
                label class="block text-sm font-medium text-gray-700 mb-2" for="q" {
                    "Property Name or Address"
                }
                input
                    type="text"
                    id="q"
                    name="q"
                    placeholder="Enter property name or address..."
                    class=(INPUT_CLASS)
                    value=(criteria.search);
            }

            div {
                label class="block text-sm font-medium text-gray-700 mb-2" for="max_commute" {
                    "Maximum Commute Time: "
                    output for="max_commute" { (criteria.max_commute) }
                    " minutes"
                }
                input
                    type="range"
                    id="max_commute"
                    name="max_commute"
                    min=(MIN_MAX_COMMUTE)
                    max=(MAX_MAX_COMMUTE)
                    value=(criteria.max_commute)
                    class=(SLIDER_CLASS)
                    oninput="this.previousElementSibling.querySelector('output').textContent = this.value";
            }

            div {
                label class="block text-sm font-medium text-gray-700 mb-2" for="min_rating" {
                    "Minimum Rating: "
                    output for="min_rating" { (criteria.min_rating_label()) }
                }
                input
                    type="range"
                    id="min_rating"
                    name="min_rating"
                    min="0"
                    max=(MAX_MIN_RATING)
                    step=(MIN_RATING_STEP)
                    value=(criteria.min_rating)
                    class=(SLIDER_CLASS)
                    oninput="this.previousElementSibling.querySelector('output').textContent = Number(this.value) === 0 ? 'Any' : Number(this.value).toFixed(1)";
            }

            noscript {
                button type="submit" class="text-sm bg-blue-600 text-white px-3 py-1 rounded" { "Apply" }
            }

            div class="pt-4 border-t border-gray-200" {
                div class="text-sm text-gray-600" {
                    (properties_found(state.filtered.len(), false))
                    @if let Some(hospital) = &state.selected {
                        div class="flex justify-between" {
                            span { "Selected Location:" }
                            span class="font-medium" { (hospital.short_name()) }
                        }
                    }
                }
            }
        }
    }
}

/// Counter row; `oob` marks it for an out-of-band swap from the results fragment.
pub fn properties_found(count: usize, oob: bool) -> Markup {
    html! {
        div class="flex justify-between" id="properties-found" hx-swap-oob=[oob.then_some("true")] {
            span { "Properties Found:" }
            span class="font-medium" { (count) }
        }
    }
}
