pub mod common;
pub mod task_list_component;

pub use task_list_component::TaskListComponent;
