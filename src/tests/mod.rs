pub mod utils;

mod router_tests;
