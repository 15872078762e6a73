pub mod blog;
pub mod health;
pub mod rating;
pub mod topic;
