pub mod counter;
pub mod todos;
