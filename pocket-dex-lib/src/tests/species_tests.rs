use super::*;
use pocket_dex_catalog::{CatalogError, Criterion, FieldValue, Store, View, rows_from_str};

use crate::possession::{Possession, possession, set_possession};

const POKEDEX_CSV: &str = "\
number,name,type,classification,height,weight,capture_rate,abilities,base_stats,evs,owned
1,[English:Bulbasaur],\"[Grass,Poison]\",Seed Pokemon,0.7,6.9,45,\"[Overgrow,Chlorophyll]\",\"[hp:45,atk:49,def:49,sp_atk:65,sp_def:65,spd:45]\",[sp_atk:1],
2,[English:Ivysaur],\"[Grass,Poison]\",Seed Pokemon,1.0,13.0,45,\"[Overgrow,Chlorophyll]\",\"[hp:60,atk:62,def:63,sp_atk:80,sp_def:80,spd:60]\",\"[sp_atk:1,sp_def:1]\",seen
4,[English:Charmander],[Fire],Lizard Pokemon,0.6,8.5,45,\"[Blaze,Solar Power]\",\"[hp:39,atk:52,def:43,sp_atk:60,sp_def:50,spd:65]\",[spd:1],Owned
132,[English:Ditto],[Normal],Transform Pokemon,0.3,4.0,35,[Limber],\"[hp:48,atk:48,def:48,sp_atk:48,sp_def:48,spd:48]\",[hp:1],
";

fn pokedex() -> Pokedex {
    let store = Store::build(schema(), rows_from_str(POKEDEX_CSV).unwrap()).unwrap();
    Pokedex::new(store, registry())
}

fn ids<'v>(view: &'v View<'_, SpeciesField>) -> Vec<&'v str> {
    view.ids().iter().map(|id| id.as_str()).collect()
}

#[test]
fn every_key_is_registered() {
    let registry = registry();
    for &key in SpeciesField::all() {
        assert!(registry.is_registered(key), "{key:?} has no extractor");
    }
    assert_eq!(registry.keys().count(), 32);
}

#[test]
fn key_names_parse_back() {
    for &key in SpeciesField::all() {
        assert_eq!(SpeciesField::from_name(key.name()), Some(key));
    }
    assert_eq!(SpeciesField::from_name("Stats-SpAtk"), Some(SpeciesField::StatsSpAtk));
}

#[test]
fn sort_by_stat_total() {
    let dex = pokedex();
    let mut view = dex.view();
    view.sort(SpeciesField::StatsTotal, true).unwrap();
    assert_eq!(ids(&view), vec!["2", "1", "4", "132"]);
}

#[test]
fn per_stat_keys_read_base_stats() {
    let dex = pokedex();
    let mut view = dex.view();
    view.sort(SpeciesField::StatsSpd, false).unwrap();
    assert_eq!(ids(&view), vec!["1", "132", "2", "4"]);

    let value = dex
        .registry()
        .resolve(SpeciesField::StatsAtk)
        .extract(dex.store().get("4").unwrap())
        .unwrap();
    assert_eq!(value, FieldValue::Integer(52));
}

#[test]
fn ev_total_sums_present_entries() {
    let dex = pokedex();
    let value = dex
        .registry()
        .resolve(SpeciesField::EvTotal)
        .extract(dex.store().get("2").unwrap())
        .unwrap();
    assert_eq!(value, FieldValue::Integer(2));
}

#[test]
fn missing_ev_entry_is_reported() {
    let dex = pokedex();
    let mut view = dex.view();
    let err = view.sort(SpeciesField::EvHp, false).unwrap_err();
    assert!(err.is_key_not_found());
    assert_eq!(view.len(), 4);
}

#[test]
fn filter_type_then_name() {
    let dex = pokedex();
    let mut view = dex.view();
    view.filter(SpeciesField::Type, &Criterion::is("Poison")).unwrap();
    view.sort(SpeciesField::CaptureRate, false).unwrap();
    assert_eq!(ids(&view), vec!["1", "2"]);
    view.filter(SpeciesField::Name, &Criterion::contains("Ivy")).unwrap();
    assert_eq!(ids(&view), vec!["2"]);
    assert!(dex.store().get("1").is_ok());
}

#[test]
fn second_ability_slot_needs_two_abilities() {
    let dex = pokedex();
    let mut view = dex.view();
    let err = view.sort(SpeciesField::AbilitySlot2, false).unwrap_err();
    assert!(matches!(err, CatalogError::IndexOutOfRange { ref id, .. } if id == "132"));

    view.filter(SpeciesField::Type, &Criterion::is("Grass")).unwrap();
    view.filter(SpeciesField::AbilitySlot2, &Criterion::is("Chlorophyll"))
        .unwrap();
    assert_eq!(ids(&view), vec!["1", "2"]);
}

#[test]
fn owned_defaults_and_normalizes() {
    let dex = pokedex();
    let store = dex.store();
    assert_eq!(possession(store.get("1").unwrap()).unwrap(), Possession::Unknown);
    assert_eq!(possession(store.get("2").unwrap()).unwrap(), Possession::Seen);
    assert_eq!(possession(store.get("4").unwrap()).unwrap(), Possession::Owned);
}

#[test]
fn filter_by_possession_after_update() {
    let mut dex = pokedex();
    let state = {
        let mut view = dex.view();
        view.sort(SpeciesField::Height, false).unwrap();
        view.into_state()
    };

    let ditto = dex.store_mut().get_mut("132").unwrap();
    set_possession(ditto, Possession::Owned).unwrap();

    let mut view = dex.resume(state).unwrap();
    view.filter(SpeciesField::Owned, &Criterion::is("owned")).unwrap();
    assert_eq!(ids(&view), vec!["132", "4"]);
}

#[test]
fn number_sorts_naturally() {
    let dex = pokedex();
    let mut view = dex.view();
    view.sort(SpeciesField::Height, false).unwrap();
    view.sort(SpeciesField::Number, true).unwrap();
    assert_eq!(ids(&view), vec!["132", "4", "2", "1"]);
}

#[test]
fn number_range_filter() {
    let dex = pokedex();
    let mut view = dex.view();
    view.filter(SpeciesField::Number, &Criterion::between("1", "10"))
        .unwrap();
    assert_eq!(ids(&view), vec!["1", "2", "4"]);

    view.reset();
    view.filter(SpeciesField::Number, &Criterion::between("100", "151"))
        .unwrap();
    assert_eq!(ids(&view), vec!["132"]);
}

#[test]
fn possession_filter_ignores_case() {
    let dex = pokedex();
    let mut view = dex.view();
    view.filter(SpeciesField::Owned, &Criterion::is("Owned")).unwrap();
    assert_eq!(ids(&view), vec!["4"]);
}

#[test]
fn overflowing_stat_total_is_an_error() {
    let csv = "number,base_stats\n1,\"[hp:9223372036854775807,atk:1]\"\n2,\"[hp:1,atk:1]\"\n";
    let store = Store::build(schema(), rows_from_str(csv).unwrap()).unwrap();
    let dex = Pokedex::new(store, registry());
    let mut view = dex.view();

    let err = view.sort(SpeciesField::StatsTotal, false).unwrap_err();
    assert!(matches!(err, CatalogError::InvalidSortKey { .. }));
    assert_eq!(ids(&view), vec!["1", "2"]);
}
