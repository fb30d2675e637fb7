pub mod mobile_search;
pub mod test_result;

pub use mobile_search::Entity as MobileSearchEntity;
pub use test_result::Entity as TestResultEntity;
