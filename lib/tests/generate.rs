extern crate setmap;
extern crate tempfile;

use setmap::data::{load_inputs, Inputs};
use setmap::set_map::{generate, GenerateError};
use setmap::{generate_set_map, write_set_map};
use std::path::PathBuf;

fn data_path(name: &str) -> PathBuf {
    [env!("CARGO_MANIFEST_DIR"), "tests", "data", name]
        .iter()
        .collect()
}

fn inputs() -> Inputs {
    load_inputs(
        &data_path("cards.json"),
        &data_path("loc.json"),
        &data_path("enums.json"),
    )
    .expect("fixture inputs load")
}

const GRN_CARDS: [&str; 6] = [
    r#"RalIzzetViceroy = Card("ral_izzet_viceroy", "Ral, Izzet Viceroy", ['3', 'U', 'R'], ['U', 'R'], "Planeswalker", "Ral", "GRN", "Mythic Rare", 191, 68600)"#,
    r#"AssassinsTrophy = Card("assassins_trophy", "Assassin's Trophy", ['B', 'G'], ['B', 'G'], "Instant", "", "GRN", "Rare", 152, 68580)"#,
    r#"Plains = Card("plains", "Plains", [], ['W'], "Land", "Plains", "GRN", "Basic", 260, 68739)"#,
    r#"Plains2 = Card("plains", "Plains", [], ['W'], "Land", "Plains", "GRN", "Basic", 261, 68740)"#,
    r#"KraulHarpooner = Card("kraul_harpooner", "Kraul Harpooner", ['1', 'G'], ['G'], "Creature", "Insect Warrior", "GRN", "Uncommon", 136, 68536)"#,
    r#"NightveilPredator = Card("nightveil_predator", "Nightveil Predator", ['(U/B)', '(U/B)', '(U/B)'], ['U', 'B'], "Creature", "Vampire", "GRN", "Uncommon", 222, 68601)"#,
];

#[test]
fn grn_declarations() {
    let inputs = inputs();
    let text = generate_set_map(&inputs.locs, &inputs.cards, &inputs.enums, "GRN").unwrap();
    let declarations: Vec<&str> = text.lines().filter(|l| l.contains(" = Card(")).collect();
    assert_eq!(declarations, GRN_CARDS.to_vec());
    assert!(text.contains(r#"GRN = Set("grn", cards=clsmembers)"#));
}

// 7 GRN cards, the Guildgate has an unknown color id
#[test]
fn failed_cards_are_left_out() {
    let inputs = inputs();
    let collection = generate(&inputs.locs, &inputs.cards, &inputs.enums, "GRN").unwrap();
    assert_eq!(collection.len(), 6);
    assert!(collection.iter().all(|c| c.grp_id != 68710 && c.grp_id != 59005));
}

#[test]
fn set_name_case_does_not_matter() {
    let inputs = inputs();
    let upper = generate_set_map(&inputs.locs, &inputs.cards, &inputs.enums, "GRN").unwrap();
    let lower = generate_set_map(&inputs.locs, &inputs.cards, &inputs.enums, "grn").unwrap();
    assert_eq!(upper, lower);
}

#[test]
fn identifiers_are_unique() {
    let inputs = inputs();
    let collection = generate(&inputs.locs, &inputs.cards, &inputs.enums, "GRN").unwrap();
    let mut names: Vec<_> = collection.iter().map(|c| c.identifier_name.clone()).collect();
    names.sort();
    names.dedup();
    assert_eq!(names.len(), collection.len());
}

#[test]
fn other_sets_are_independent() {
    let inputs = inputs();
    let collection = generate(&inputs.locs, &inputs.cards, &inputs.enums, "m19").unwrap();
    assert_eq!(collection.len(), 1);
    assert_eq!(collection[0].pretty_name, "Llanowar Elves");
    assert_eq!(collection[0].sub_types, "Elf Druid");
    assert_eq!(collection[0].set_code, "M19");
}

#[test]
fn writes_lowercased_module() {
    let inputs = inputs();
    let dir = tempfile::tempdir().unwrap();
    let collection = generate(&inputs.locs, &inputs.cards, &inputs.enums, "GRN").unwrap();
    let path = write_set_map(&collection, dir.path()).unwrap();
    assert_eq!(path, dir.path().join("grn.py"));
    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.starts_with("\nimport sys\n"));
    assert_eq!(written.lines().filter(|l| l.contains(" = Card(")).count(), 6);
}

#[test]
fn unknown_set_writes_nothing() {
    let inputs = inputs();
    let dir = tempfile::tempdir().unwrap();
    let res = generate(&inputs.locs, &inputs.cards, &inputs.enums, "WAR")
        .map(|collection| write_set_map(&collection, dir.path()));
    assert_eq!(res.unwrap_err(), GenerateError::NoCardsFound("WAR".to_string()));
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}
