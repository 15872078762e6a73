mod api;
mod blog;
mod rating;
mod topic;
