//! Then steps for agent directory BDD scenarios.

use super::world::DirectoryWorld;
use dragoman::agent_directory::services::DirectoryError;
use rstest_bdd_macros::then;

#[then("the directory advertises {count:usize} capability records")]
fn directory_advertises_count(world: &DirectoryWorld, count: usize) -> Result<(), eyre::Report> {
    let records = world.directory.capabilities_list();
    if records.len() != count {
        return Err(eyre::eyre!(
            "expected {count} capability records, found {}",
            records.len()
        ));
    }
    Ok(())
}

#[then(r#"the agent "{name}" can be retrieved by name"#)]
fn agent_can_be_retrieved(world: &DirectoryWorld, name: String) -> Result<(), eyre::Report> {
    if world.directory.get_agent(&name).is_none() {
        return Err(eyre::eyre!("expected agent '{name}' to be present"));
    }
    Ok(())
}

#[then(r#"looking up "{name}" fails with a no-agent error"#)]
fn lookup_fails_with_no_agent(world: &DirectoryWorld, name: String) -> Result<(), eyre::Report> {
    let result = world.directory.get_agent_or_error(&name);
    if !matches!(result, Err(DirectoryError::NoAvailableAgent(_))) {
        return Err(eyre::eyre!("expected a no-agent error for '{name}'"));
    }
    Ok(())
}

#[then("population fails with a roster error")]
fn population_fails_with_roster_error(world: &DirectoryWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_populate_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing population result in scenario world"))?;
    if !matches!(result, Err(DirectoryError::Roster(_))) {
        return Err(eyre::eyre!("expected a roster parse failure"));
    }
    Ok(())
}
