//! When steps for drag move BDD scenarios.

use super::world::{BoardWorld, parse_column};
use eyre::WrapErr;
use rstest_bdd_macros::when;
use taskboard::board::domain::{BoardPosition, DragOutcome};

fn position(column: &str, index: u64) -> Result<BoardPosition, eyre::Report> {
    let index = usize::try_from(index).wrap_err("index out of range")?;
    Ok(BoardPosition::new(parse_column(column)?, index))
}

#[when(r#"the task at "{from}" {from_index:u64} is dropped at "{to}" {to_index:u64}"#)]
fn task_dropped_at(
    world: &mut BoardWorld,
    from: String,
    from_index: u64,
    to: String,
    to_index: u64,
) -> Result<(), eyre::Report> {
    let outcome = DragOutcome::dropped(position(&from, from_index)?, position(&to, to_index)?);
    world.before_drag = Some(world.store.board().clone());
    world.store.apply_drag(outcome);
    Ok(())
}

#[when(r#"the task at "{from}" {from_index:u64} is dropped outside every column"#)]
fn task_dropped_outside(
    world: &mut BoardWorld,
    from: String,
    from_index: u64,
) -> Result<(), eyre::Report> {
    let outcome = DragOutcome::cancelled(position(&from, from_index)?);
    world.before_drag = Some(world.store.board().clone());
    world.store.apply_drag(outcome);
    Ok(())
}

#[when("the board is reopened from storage")]
fn board_reopened(world: &mut BoardWorld) {
    world.reopen();
}
