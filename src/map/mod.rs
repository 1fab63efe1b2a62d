mod popup;
mod scene;
mod view;

pub use scene::build_scene;
