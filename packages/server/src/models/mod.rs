pub mod blog;
pub mod rating;
pub mod shared;
pub mod topic;
