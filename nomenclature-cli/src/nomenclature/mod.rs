//! Nomenclature core: table extraction, room and tag cleaning, formatting
//! and the generation workflow that ties them together.

pub mod error;
pub mod extract;
pub mod format;
pub mod generator;
pub mod room;
pub mod tag;

pub use error::NomenclatureError;
pub use extract::{PairTable, TableLabels, extract};
pub use generator::{COLUMNS, EquipmentChoice, NomenclatureRow, Selection, Session, TagSummary};
pub use room::RoomStyle;
