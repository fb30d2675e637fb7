pub mod ip;
pub mod mobile;

pub use mobile::is_valid_mobile_number;
