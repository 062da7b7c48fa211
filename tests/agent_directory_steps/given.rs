//! Given steps for agent directory BDD scenarios.

use super::world::{DirectoryWorld, RosterModel};
use rstest_bdd_macros::given;

#[given(r#"a roster model named "{name}" targeting "{lang}""#)]
fn a_roster_model(world: &mut DirectoryWorld, name: String, lang: String) {
    world.roster.push(RosterModel {
        name,
        target_lang: lang,
    });
}
