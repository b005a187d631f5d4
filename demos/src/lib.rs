pub mod parsers;
pub mod reports;
