use crate::templates::components::spinner;
use crate::templates::desktop_layout;
use crate::templates::pages::explorer::PAGE_TITLE;
use maud::{html, Markup};

/// Shown while the hospital list is still on its way; reloads itself.
pub fn loading_page() -> Markup {
    let content = html! {
        meta http-equiv="refresh" content="1";
        div class="flex items-center justify-center h-96" {
            (spinner("Loading hospital data..."))
        }
    };

    desktop_layout(PAGE_TITLE, content)
}
