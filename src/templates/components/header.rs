use maud::{html, Markup};

pub fn site_header() -> Markup {
    html! {
        header class="bg-white border-b border-gray-200 shadow-sm" {
            div class="container mx-auto px-4 py-6" {
                div class="flex items-center justify-between" {
                    div class="flex items-center space-x-4" {
                        div class="w-12 h-12 bg-blue-600 rounded-lg flex items-center justify-center" {
                            svg class="w-6 h-6 text-white" fill="currentColor" viewBox="0 0 20 20" {
                                path
                                    fill-rule="evenodd"
                                    clip-rule="evenodd"
                                    d="M3 4a1 1 0 011-1h12a1 1 0 011 1v2a1 1 0 01-1 1H4a1 1 0 01-1-1V4zM3 10a1 1 0 011-1h6a1 1 0 011 1v6a1 1 0 01-1 1H4a1 1 0 01-1-1v-6zM14 9a1 1 0 00-1 1v6a1 1 0 001 1h2a1 1 0 001-1v-6a1 1 0 00-1-1h-2z" {}
                            }
                        }
                        div {
                            div class="flex items-center gap-3" {
                                h1 class="text-2xl font-semibold text-gray-900" { "Anchormatch Explorer" }
                                span class="px-2 py-1 text-xs font-semibold bg-blue-100 text-blue-800 rounded-full" { "BETA" }
                            }
                            p class="text-sm text-gray-500" { "Hospital Housing Directory" }
                        }
                    }

                    div class="hidden md:flex items-center space-x-6 text-sm text-gray-600" {
                        div class="flex items-center space-x-2" {
                            div class="w-2 h-2 bg-green-500 rounded-full" {}
                            span { "Wed 5:30pm ET rush hour data" }
                        }
                    }
                }
            }
        }
    }
}
