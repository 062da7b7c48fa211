//! When steps for agent directory BDD scenarios.

use super::world::DirectoryWorld;
use eyre::WrapErr;
use rstest_bdd_macros::when;

#[when("the directory is populated from the roster")]
fn populate_from_roster(world: &mut DirectoryWorld) -> Result<(), eyre::Report> {
    let roster_json = world.roster_json();
    world
        .directory
        .populate(Some(&roster_json))
        .wrap_err("populate directory from roster")?;
    Ok(())
}

#[when("the directory is populated without an override")]
fn populate_without_override(world: &mut DirectoryWorld) -> Result<(), eyre::Report> {
    world
        .directory
        .populate(None)
        .wrap_err("populate directory with the default agent")?;
    Ok(())
}

#[when(r#"the directory is populated from the override "{raw}""#)]
fn populate_from_raw_override(world: &mut DirectoryWorld, raw: String) {
    let result = world.directory.populate(Some(&raw));
    world.last_populate_result = Some(result);
}
