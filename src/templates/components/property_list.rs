use crate::domain::offers::ListingOffer;
use crate::domain::Property;
use crate::photos::PLACEHOLDER_IMAGE;
use crate::state::ExplorerState;
use crate::templates::components::spinner;
use maud::{html, Markup};
use url::form_urlencoded;

const PANEL_CLASS: &str = "h-full card bg-white rounded-xl shadow-sm";

fn photo_href(property: &Property, position: usize) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("index", &position.to_string())
        .append_pair("name", &property.property_name)
        .finish();
    format!("/photo?{query}")
}

fn on_image_error() -> String {
    format!("this.onerror=null;this.src='{PLACEHOLDER_IMAGE}'")
}

/// The resolved photo, swapped over the placeholder of slot `position`.
pub fn photo_img(url: &str, alt: &str, position: usize) -> Markup {
    html! {
        img
            id=(format!("photo-{position}"))
            src=(url)
            alt=(alt)
            class="w-full h-32 object-cover"
            onerror=(on_image_error());
    }
}

fn placeholder_img(property: &Property, position: usize) -> Markup {
    html! {
        img
            id=(format!("photo-{position}"))
            src=(PLACEHOLDER_IMAGE)
            alt=(property.property_name)
            class="w-full h-32 object-cover"
            onerror=(on_image_error())
            hx-get=(photo_href(property, position))
            hx-trigger="load"
            hx-swap="outerHTML";
    }
}

fn property_card(property: &Property, position: usize) -> Markup {
    let offer = ListingOffer::for_position(position);
    let bucket = property.commute_bucket();

    html! {
        div class="bg-white border border-gray-200 rounded-lg overflow-hidden hover:shadow-md transition-all duration-200 hover:border-blue-500 cursor-pointer" {
            div class="relative" {
                (placeholder_img(property, position))
                div class="absolute top-2 right-2" {
                    div class={ "inline-flex items-center px-2 py-1 rounded-full text-xs font-medium " (bucket.badge_class()) } {
                        "🚗 " (property.driving_duration_minutes) "min"
                    }
                }
            }

            div class="p-4" {
                div class="flex justify-between items-start mb-3" {
                    div class="flex-1 min-w-0" {
                        h3 class="font-semibold text-gray-900 text-sm leading-tight line-clamp-2" { (property.property_name) }
                        p class="text-xs text-gray-600 mt-1 line-clamp-2" { (property.address) }
                    }
                    div class="ml-3 text-right" {
                        div class="text-lg font-bold text-gray-900" { (offer.price) }
                        div class="text-xs text-gray-500" { "1BD price" }
                    }
                }

                div class="bg-gradient-to-r from-green-50 to-blue-50 rounded-lg p-3 mb-3" {
                    div class="text-xs font-medium text-green-700 mb-2" { "💰 Special Offers" }
                    div class="space-y-1 text-xs" {
                        div class="flex justify-between" {
                            span class="text-gray-600" { "Concession:" }
                            span class="font-medium text-green-600" { (offer.concession) }
                        }
                        div class="flex justify-between" {
                            span class="text-gray-600" { "App Fee:" }
                            span class={ "font-medium " (if offer.app_fee_waived() { "text-green-600" } else { "text-gray-700" }) } {
                                (offer.app_fee)
                            }
                        }
                    }
                }

                @if let Some(summary) = &property.marketing_summary {
                    p class="text-xs text-gray-600 mb-3 line-clamp-3" { (summary) }
                }

                div class="grid grid-cols-2 gap-3 text-xs" {
                    div class="text-gray-500" {
                        "Rush Hour: " (property.rush_hour_duration_minutes) "min"
                    }
                    div class="text-right" {
                        span class="text-yellow-400 text-sm" { (property.rating_stars()) }
                        div class="text-gray-500 mt-1" { (property.total_reviews) " reviews" }
                    }
                }

                div class="flex items-center justify-between mt-3 pt-3 border-t border-gray-100" {
                    div class="text-xs text-gray-500" {
                        "Price Level: "
                        span class="text-green-600 font-medium" { (property.price_symbols()) }
                    }
                }
            }
        }
    }
}

/// How often a loading list asks for the results again.
const LOADING_POLL: &str = "load delay:500ms";

/// The scrollable list panel. Replaced wholesale by the results fragment;
/// while properties are loading it keeps re-requesting that fragment until
/// the fetch lands.
pub fn property_list(state: &ExplorerState) -> Markup {
    let polling = state.loading_properties;

    html! {
        div
            id="property-list"
            class="lg:col-span-1"
            hx-get=[polling.then_some("/results")]
            hx-trigger=[polling.then_some(LOADING_POLL)]
            hx-swap=[polling.then_some("outerHTML")]
        {
            @if state.loading_properties {
                div class=(PANEL_CLASS) {
                    div class="flex items-center justify-center h-64" {
                        (spinner("Loading properties..."))
                    }
                }
            } @else if let Some(hospital) = &state.selected {
                div class={ (PANEL_CLASS) " p-0" } {
                    div class="p-4 border-b border-gray-200 bg-gray-50" {
                        h2 class="text-lg font-semibold text-gray-900" { "🏠 Nearby Properties" }
                        p class="text-sm text-gray-600 mt-1" {
                            (state.filtered.len()) " apartments found near " (hospital.short_name())
                        }
                    }

                    div class="overflow-y-auto h-full max-h-[calc(100vh-12rem)]" {
                        @if state.filtered.is_empty() {
                            div class="p-8 text-center" {
                                div class="text-4xl mb-4" { "🔍" }
                                p class="text-gray-600" { "No properties found with current filters" }
                                p class="text-sm text-gray-500 mt-2" { "Try adjusting your search criteria" }
                            }
                        } @else {
                            div class="p-2 space-y-3" {
                                @for (position, property) in state.filtered.iter().enumerate() {
                                    (property_card(property, position))
                                }
                            }
                        }
                    }
                }
            } @else {
                div class=(PANEL_CLASS) {
                    div class="flex items-center justify-center h-64 text-center" {
                        div {
                            div class="text-4xl mb-4" { "🏥" }
                            p class="text-gray-600" { "Select a hospital to view nearby properties" }
                        }
                    }
                }
            }
        }
    }
}
