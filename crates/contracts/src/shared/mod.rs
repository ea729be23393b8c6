pub mod lenient;
pub mod ranking;
