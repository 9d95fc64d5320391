use std::fs;
use std::path::Path;

use pocket_dex_catalog::{CatalogError, Criterion, FieldKind, FieldValue};
use pocket_dex_lib::{
    DexError, DexKind, ItemField, Possession, SpeciesField, load_battledex, load_itemdex,
    load_pokedex, possession, schema_for, set_possession,
};
use tempfile::TempDir;

const POKEDEX_CSV: &str = "\
number,name,type,capture_rate,base_stats,owned
1,[English:Bulbasaur],\"[Grass,Poison]\",45,\"[hp:45,atk:49,def:49,sp_atk:65,sp_def:65,spd:45]\",
2,[English:Ivysaur],\"[Grass,Poison]\",45,\"[hp:60,atk:62,def:63,sp_atk:80,sp_def:80,spd:60]\",seen
19,[English:Rattata],[Normal],255,\"[hp:30,atk:56,def:35,sp_atk:25,sp_def:35,spd:72]\",
19:alolan,[English:Rattata],\"[Dark,Normal]\",255,\"[hp:30,atk:56,def:35,sp_atk:25,sp_def:35,spd:72]\",
";

fn write(dir: &Path, name: &str, content: &str) {
    fs::write(dir.join(name), content).unwrap();
}

#[test]
fn pokedex_walkthrough() {
    let tmp = TempDir::new().unwrap();
    write(tmp.path(), "pokedex.csv", POKEDEX_CSV);

    let dex = load_pokedex(tmp.path().join("pokedex.csv"), None).unwrap();
    assert_eq!(dex.store().len(), 4);

    let mut view = dex.view();
    view.filter(SpeciesField::Type, &Criterion::is("Normal")).unwrap();
    let ids: Vec<&str> = view.ids().iter().map(|id| id.as_str()).collect();
    assert_eq!(ids, vec!["19", "19:alolan"]);

    view.reset();
    view.filter(SpeciesField::Name, &Criterion::contains("ivy")).unwrap();
    assert_eq!(view.len(), 1);
    assert_eq!(
        possession(view.results()[0]).unwrap(),
        Possession::Seen
    );
}

#[test]
fn mark_species_owned() {
    let tmp = TempDir::new().unwrap();
    write(tmp.path(), "pokedex.csv", POKEDEX_CSV);
    let mut dex = load_pokedex(tmp.path().join("pokedex.csv"), None).unwrap();

    let record = dex.store_mut().get_mut("19:alolan").unwrap();
    set_possession(record, "OWNED".parse().unwrap()).unwrap();
    assert_eq!(
        possession(dex.store().get("19:alolan").unwrap()).unwrap(),
        Possession::Owned
    );
    assert_eq!(
        possession(dex.store().get("19").unwrap()).unwrap(),
        Possession::Unknown
    );
}

#[test]
fn schema_override_replaces_builtin() {
    let tmp = TempDir::new().unwrap();
    write(
        tmp.path(),
        "items.yaml",
        "name: items\nid_field: number\nfields:\n  - { name: cost, kind: decimal }\n",
    );
    write(tmp.path(), "itemdex.csv", "number,name,cost\n1,[English:Potion],2.5\n");

    let schema = schema_for(DexKind::Items, Some(tmp.path())).unwrap();
    assert_eq!(schema.kind_of("cost"), FieldKind::Decimal);
    assert_eq!(
        schema_for(DexKind::Moves, Some(tmp.path())).unwrap(),
        DexKind::Moves.builtin_schema()
    );

    let dex = load_itemdex(tmp.path().join("itemdex.csv"), Some(tmp.path())).unwrap();
    let potion = dex.store().get("1").unwrap();
    assert_eq!(potion.get("cost").unwrap(), FieldValue::Decimal(2.5));
    // Undeclared in the override, so kept as text.
    assert_eq!(
        potion.get("name").unwrap(),
        FieldValue::text("[English:Potion]")
    );
    assert!(dex.registry().is_registered(ItemField::Cost));
}

#[test]
fn missing_data_file_is_io_error() {
    let tmp = TempDir::new().unwrap();
    let err = load_battledex(tmp.path().join("battledex.csv"), None).unwrap_err();
    assert!(matches!(err, DexError::Catalog(CatalogError::Io(_))));
}

#[test]
fn malformed_row_surfaces_context() {
    let tmp = TempDir::new().unwrap();
    write(
        tmp.path(),
        "pokedex.csv",
        "number,name,capture_rate\n1,[English:Bulbasaur],forty-five\n",
    );
    let err = load_pokedex(tmp.path().join("pokedex.csv"), None).unwrap_err();
    match err {
        DexError::Catalog(CatalogError::MalformedInput { row, field, .. }) => {
            assert_eq!(row, "1");
            assert_eq!(field, "capture_rate");
        }
        other => panic!("unexpected error: {other}"),
    }
}
