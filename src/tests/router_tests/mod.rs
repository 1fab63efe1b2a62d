mod explorer_tests;
mod maps_key_tests;
mod photo_tests;
