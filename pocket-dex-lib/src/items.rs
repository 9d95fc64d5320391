//! The itemdex: held items, medicine, balls and the like.

use pocket_dex_catalog::{
    Catalog, Extractor, ExtractorRegistry, FieldKey, FieldKind, ScalarKind, Schema,
};

use crate::species::NAME_LANGUAGE;

pub type Itemdex = Catalog<ItemField>;

/// Sort/filter targets for items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemField {
    Name,
    Number,
    Category,
    Cost,
}

impl FieldKey for ItemField {
    fn name(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Number => "number",
            Self::Category => "category",
            Self::Cost => "cost",
        }
    }

    fn all() -> &'static [Self] {
        &[Self::Name, Self::Number, Self::Category, Self::Cost]
    }
}

pub fn schema() -> Schema {
    Schema::new("items", "number")
        .field("name", FieldKind::Map(ScalarKind::Text))
        .field("category", FieldKind::Text)
        .field("cost", FieldKind::Integer)
        .field("flavor_text", FieldKind::Map(ScalarKind::Text))
}

pub fn registry() -> ExtractorRegistry<ItemField> {
    ExtractorRegistry::new()
        .with(ItemField::Name, Extractor::map_entry("name", NAME_LANGUAGE))
        .with(ItemField::Number, Extractor::identifier())
        .with(ItemField::Category, Extractor::field("category"))
        .with(ItemField::Cost, Extractor::field("cost"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pocket_dex_catalog::{Criterion, Store, rows_from_str};

    const ITEMDEX_CSV: &str = "\
number,name,category,cost,flavor_text
4,[English:Poke Ball],Balls,200,[English:A device for catching wild Pokemon.]
1,[English:Master Ball],Balls,0,[English:The best Ball with the ultimate level of performance.]
17,[English:Potion],Medicine,300,[English:Restores 20 HP.]
2,[English:Ultra Ball],Balls,1200,[English:A high-performance Ball.]
";

    fn itemdex() -> Itemdex {
        let store = Store::build(schema(), rows_from_str(ITEMDEX_CSV).unwrap()).unwrap();
        Itemdex::new(store, registry())
    }

    #[test]
    fn balls_by_cost() {
        let dex = itemdex();
        let mut view = dex.view();
        view.filter(ItemField::Category, &Criterion::is("Balls")).unwrap();
        view.sort(ItemField::Cost, true).unwrap();
        let ids: Vec<&str> = view.ids().iter().map(|id| id.as_str()).collect();
        assert_eq!(ids, vec!["2", "4", "1"]);
    }

    #[test]
    fn sort_by_name() {
        let dex = itemdex();
        let mut view = dex.view();
        view.sort(ItemField::Name, false).unwrap();
        let ids: Vec<&str> = view.ids().iter().map(|id| id.as_str()).collect();
        assert_eq!(ids, vec!["1", "4", "17", "2"]);
    }

    #[test]
    fn flavor_text_is_kept() {
        let dex = itemdex();
        let potion = dex.store().get("17").unwrap();
        let text = potion.get("flavor_text").unwrap();
        assert_eq!(
            text.as_map().and_then(|m| m.get("English")).map(|v| v.to_string()),
            Some("Restores 20 HP.".to_string())
        );
    }
}
