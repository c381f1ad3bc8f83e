//! Given steps for drag move BDD scenarios.

use super::world::{BoardWorld, parse_column, parse_ids};
use rstest_bdd_macros::given;
use taskboard::board::domain::{Column, Task, TaskId};

#[given(r#"the "{column}" column holds tasks "{ids}""#)]
fn column_holds_tasks(
    world: &mut BoardWorld,
    column: String,
    ids: String,
) -> Result<(), eyre::Report> {
    let column = parse_column(&column)?;
    let tasks = parse_ids(&ids)
        .into_iter()
        .map(|id| {
            let text = format!("task {id}");
            Task::new(TaskId::new(id), text)
        })
        .collect();
    let board = world
        .store
        .board()
        .clone()
        .with_column(column, Column::from_tasks(tasks));
    world.start_from(board);
    Ok(())
}
