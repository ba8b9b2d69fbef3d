pub mod failure;
pub mod lookup;
pub mod normalizer;
pub mod page_walker;
pub mod people;

#[cfg(test)]
pub(crate) mod testing;

pub use crate::domain::model::{NormalizedPerson, RawPage, RawRecord};
pub use crate::domain::ports::{ConfigProvider, PeopleSource};
pub use crate::utils::error::Result;
