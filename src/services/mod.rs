pub mod catalog;
pub mod form;
pub mod sink;
pub mod submission;
pub mod validation;
