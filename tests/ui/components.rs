#[path = "components/dialog_component.rs"]
mod dialog_component;

#[path = "components/render.rs"]
mod render;

#[path = "components/task_list_component.rs"]
mod task_list_component;
