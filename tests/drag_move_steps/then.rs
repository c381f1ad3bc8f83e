//! Then steps for drag move BDD scenarios.

use super::world::{BoardWorld, parse_column, parse_ids};
use rstest_bdd_macros::then;

#[then(r#"the "{column}" column holds tasks "{ids}""#)]
fn column_holds(world: &BoardWorld, column: String, ids: String) -> Result<(), eyre::Report> {
    let column = parse_column(&column)?;
    let expected = parse_ids(&ids);
    let actual: Vec<String> = world
        .store
        .board()
        .column(column)
        .iter()
        .map(|task| task.id().as_str().to_owned())
        .collect();

    if actual != expected {
        return Err(eyre::eyre!(
            "expected {column} to hold {expected:?}, found {actual:?}"
        ));
    }
    Ok(())
}

#[then("the board is unchanged")]
fn board_unchanged(world: &BoardWorld) -> Result<(), eyre::Report> {
    let before = world
        .before_drag
        .as_ref()
        .ok_or_else(|| eyre::eyre!("no drag recorded in scenario world"))?;

    if world.store.board() != before {
        return Err(eyre::eyre!(
            "board changed: before {before:?}, after {:?}",
            world.store.board()
        ));
    }
    Ok(())
}
