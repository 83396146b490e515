pub mod context;
pub mod folders;
pub mod middleware;
pub mod validation;
