//! The pokedex, itemdex and battledex built on the generic catalog engine,
//! plus the settings shared by every frontend.

pub mod dex;
pub mod error;
pub mod items;
pub mod load;
pub mod moves;
pub mod possession;
pub mod settings;
pub mod species;

pub use dex::DexKind;
pub use error::{DexError, DexResult};
pub use items::{ItemField, Itemdex};
pub use load::{load_battledex, load_itemdex, load_pokedex, schema_for};
pub use moves::{Battledex, MoveField};
pub use possession::{Possession, possession, set_possession};
pub use species::{Pokedex, SpeciesField};
