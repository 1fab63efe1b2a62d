pub mod commute;
pub mod filter;
pub mod geo;
pub mod hospital;
pub mod offers;
pub mod property;

pub use commute::{CommuteBucket, CommuteScenario};
pub use filter::{apply_filters, FilterCriteria};
pub use geo::{Bounds, LatLng};
pub use hospital::Hospital;
pub use property::Property;
