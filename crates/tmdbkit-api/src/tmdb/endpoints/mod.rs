//! Per-resource endpoints.
//!
//! ID-scoped endpoints share [`ResourceEndpoint`]; the resource enum picks
//! the kind, the addressable sub-resources and the ID-free lists.

mod company;
mod find;
mod movie;
mod person;
mod resource;
mod search;
mod tv;

pub use company::{CompanyEndpoint, CompanyList, CompanyResource};
pub(crate) use find::find_path;
pub use find::FindEndpoint;
pub use movie::{MovieEndpoint, MovieList, MovieResource};
pub use person::{PersonEndpoint, PersonList, PersonResource};
pub use resource::{IdState, ListPath, Rateable, ResourceEndpoint, ResourcePath};
pub use search::{SearchEndpoint, SearchResource};
pub use tv::{TvEndpoint, TvList, TvResource};
