pub mod folders;
pub mod users;
