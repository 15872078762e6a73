pub mod rating;
pub mod stats;
pub mod supertopic;
