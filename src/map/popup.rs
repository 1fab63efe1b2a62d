// src/map/popup.rs
use crate::domain::{Hospital, Property};
use maud::{html, Markup};

pub fn hospital_popup(hospital: &Hospital) -> Markup {
    html! {
        div class="p-3" {
            h3 class="font-semibold text-lg text-gray-900" { (hospital.name) }
            p class="text-gray-600 text-sm mt-1" { (hospital.address) }
            div class="mt-2 text-xs text-blue-600" { "🏥 Hospital Location" }
        }
    }
}

pub fn property_popup(property: &Property) -> Markup {
    html! {
        div class="p-4 max-w-xs" {
            h3 class="font-semibold text-lg text-gray-900 mb-2" { (property.property_name) }
            p class="text-gray-600 text-sm mb-3" { (property.address) }

            div class="space-y-2 text-sm" {
                div class="flex items-center justify-between" {
                    span class="text-gray-500" { "🚗 Drive Time:" }
                    span class="font-medium" { (property.driving_duration_minutes) " min" }
                }
                div class="flex items-center justify-between" {
                    span class="text-gray-500" { "🚙 Rush Hour:" }
                    span class="font-medium" { (property.rush_hour_duration_minutes) " min" }
                }
                div class="flex items-center justify-between" {
                    span class="text-gray-500" { "⭐ Rating:" }
                    div {
                        span class="text-yellow-400" { (property.rating_stars()) }
                        span class="text-gray-500 ml-1" { "(" (property.total_reviews) ")" }
                    }
                }
                div class="flex items-center justify-between" {
                    span class="text-gray-500" { "💰 Price Level:" }
                    span class="font-medium text-green-600" { (property.price_symbols()) }
                }
            }
        }
    }
}
