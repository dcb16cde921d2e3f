//! Page rendering for the task list and add-task form.

use crate::task::domain::Task;
use minijinja::{Environment, context};

const HOME_TEMPLATE: &str = include_str!("../../templates/home.html");
const ADD_TASK_TEMPLATE: &str = include_str!("../../templates/add_task.html");

/// Renders the task list page.
///
/// Tasks are rendered in the order given, which the repository guarantees is
/// insertion order.
///
/// # Errors
///
/// Returns a [`minijinja::Error`] when template rendering fails.
pub fn render_home(tasks: &[Task]) -> Result<String, minijinja::Error> {
    // Named .html so minijinja auto-escapes task titles.
    Environment::new().render_named_str("home.html", HOME_TEMPLATE, context! { tasks })
}

/// Renders the add-task form page.
///
/// # Errors
///
/// Returns a [`minijinja::Error`] when template rendering fails.
pub fn render_add_task() -> Result<String, minijinja::Error> {
    Environment::new().render_named_str("add_task.html", ADD_TASK_TEMPLATE, context! {})
}
