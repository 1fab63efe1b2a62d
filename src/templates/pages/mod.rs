pub mod explorer;
pub mod loading;

pub use explorer::{explorer_page, results_fragment};
pub use loading::loading_page;
