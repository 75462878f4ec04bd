//! Company endpoint (`company/{id}`).

use std::str::FromStr;

use super::resource::{ListPath, ResourceEndpoint, ResourcePath, parse_named};
use crate::tmdb::error::UnknownResource;
use crate::tmdb::id::ResourceKind;

/// Company endpoint.
pub type CompanyEndpoint<'a, T> = ResourceEndpoint<'a, T, CompanyResource>;

/// Resources under `company/{id}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompanyResource {
    /// `company/{id}`
    Details,
    /// `company/{id}/alternative_names`
    AlternativeNames,
    /// `company/{id}/images`
    Images,
}

impl CompanyResource {
    /// All company resources.
    pub const ALL: [Self; 3] = [Self::Details, Self::AlternativeNames, Self::Images];

    /// Snake-case name, which is also the path segment.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Details => "details",
            Self::AlternativeNames => "alternative_names",
            Self::Images => "images",
        }
    }
}

impl ResourcePath for CompanyResource {
    const KIND: ResourceKind = ResourceKind::Company;
    type List = CompanyList;

    fn as_str(self) -> &'static str {
        Self::as_str(self)
    }

    fn segment(self) -> Option<&'static str> {
        match self {
            Self::Details => None,
            other => Some(other.as_str()),
        }
    }
}

impl FromStr for CompanyResource {
    type Err = UnknownResource;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_named(&Self::ALL, Self::as_str, "company", s)
    }
}

/// Companies have no collection lists; this type is uninhabited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompanyList {}

impl ListPath for CompanyList {
    fn as_str(self) -> &'static str {
        match self {}
    }
}

impl FromStr for CompanyList {
    type Err = UnknownResource;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Err(UnknownResource {
            endpoint: "company list",
            name: String::from(s),
        })
    }
}
