//! Movie endpoint (`movie/{id}`).

use std::str::FromStr;

use super::resource::{ListPath, Rateable, ResourceEndpoint, ResourcePath, parse_named};
use crate::tmdb::error::UnknownResource;
use crate::tmdb::id::ResourceKind;

/// Movie endpoint.
pub type MovieEndpoint<'a, T> = ResourceEndpoint<'a, T, MovieResource>;

/// Resources under `movie/{id}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MovieResource {
    /// `movie/{id}`
    Details,
    /// `movie/{id}/alternative_titles`
    AlternativeTitles,
    /// `movie/{id}/changes`
    Changes,
    /// `movie/{id}/credits`
    Credits,
    /// `movie/{id}/external_ids`
    ExternalIds,
    /// `movie/{id}/images`
    Images,
    /// `movie/{id}/keywords`
    Keywords,
    /// `movie/{id}/release_dates`
    ReleaseDates,
    /// `movie/{id}/videos`
    Videos,
    /// `movie/{id}/translations`
    Translations,
    /// `movie/{id}/recommendations`
    Recommendations,
    /// `movie/{id}/similar`
    Similar,
    /// `movie/{id}/reviews`
    Reviews,
    /// `movie/{id}/lists`
    Lists,
    /// `movie/{id}/account_states`
    AccountStates,
}

impl MovieResource {
    /// All movie resources.
    pub const ALL: [Self; 15] = [
        Self::Details,
        Self::AlternativeTitles,
        Self::Changes,
        Self::Credits,
        Self::ExternalIds,
        Self::Images,
        Self::Keywords,
        Self::ReleaseDates,
        Self::Videos,
        Self::Translations,
        Self::Recommendations,
        Self::Similar,
        Self::Reviews,
        Self::Lists,
        Self::AccountStates,
    ];

    /// Snake-case name, which is also the path segment.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Details => "details",
            Self::AlternativeTitles => "alternative_titles",
            Self::Changes => "changes",
            Self::Credits => "credits",
            Self::ExternalIds => "external_ids",
            Self::Images => "images",
            Self::Keywords => "keywords",
            Self::ReleaseDates => "release_dates",
            Self::Videos => "videos",
            Self::Translations => "translations",
            Self::Recommendations => "recommendations",
            Self::Similar => "similar",
            Self::Reviews => "reviews",
            Self::Lists => "lists",
            Self::AccountStates => "account_states",
        }
    }
}

impl ResourcePath for MovieResource {
    const KIND: ResourceKind = ResourceKind::Movie;
    type List = MovieList;

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

impl Rateable for MovieResource {}

impl FromStr for MovieResource {
    type Err = UnknownResource;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_named(&Self::ALL, Self::as_str, "movie", s)
    }
}

/// Lists under `movie/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MovieList {
    /// `movie/latest`
    Latest,
    /// `movie/now_playing`
    NowPlaying,
    /// `movie/popular`
    Popular,
    /// `movie/top_rated`
    TopRated,
    /// `movie/upcoming`
    Upcoming,
}

impl MovieList {
    /// All movie lists.
    pub const ALL: [Self; 5] = [
        Self::Latest,
        Self::NowPlaying,
        Self::Popular,
        Self::TopRated,
        Self::Upcoming,
    ];

    /// Snake-case name, which is also the path segment.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Latest => "latest",
            Self::NowPlaying => "now_playing",
            Self::Popular => "popular",
            Self::TopRated => "top_rated",
            Self::Upcoming => "upcoming",
        }
    }
}

impl ListPath for MovieList {
    fn as_str(self) -> &'static str {
        Self::as_str(self)
    }
}

impl FromStr for MovieList {
    type Err = UnknownResource;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_named(&Self::ALL, Self::as_str, "movie list", s)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::indexing_slicing)]

    use std::time::Duration;

    use serde_json::json;

    use super::*;
    use crate::tmdb::client::TmdbClient;
    use crate::tmdb::error::{EndpointError, ResolveError};
    use crate::tmdb::id::Locator;
    use crate::tmdb::options::RequestOptions;

    fn client_for(mock_server: &wiremock::MockServer) -> TmdbClient {
        let base_url = format!("{}/3/", mock_server.uri());
        TmdbClient::builder()
            .base_url(base_url.parse().unwrap())
            .api_key("test-key")
            .user_agent("test/0.0.0")
            .retry_backoff(Duration::from_millis(0))
            .build()
            .unwrap()
    }

    #[test]
    fn test_parse_resource_names() {
        // Arrange & Act & Assert
        for resource in MovieResource::ALL {
            assert_eq!(resource.as_str().parse::<MovieResource>().unwrap(), resource);
        }
        for list in MovieList::ALL {
            assert_eq!(list.as_str().parse::<MovieList>().unwrap(), list);
        }
    }

    #[test]
    fn test_parse_unknown_resource() {
        // Arrange & Act
        let err = "episode_groups".parse::<MovieResource>().unwrap_err();

        // Assert
        assert_eq!(err.to_string(), "unknown movie resource: episode_groups");
    }

    #[test]
    fn test_paths() {
        // Arrange
        let client = TmdbClient::builder()
            .api_key("test-key")
            .user_agent("test/0.0.0")
            .build()
            .unwrap();
        let endpoint = MovieEndpoint::with_id(&client, 27_205);

        // Act & Assert
        assert_eq!(endpoint.path(MovieResource::Details).unwrap(), "movie/27205");
        assert_eq!(
            endpoint.path(MovieResource::ReleaseDates).unwrap(),
            "movie/27205/release_dates"
        );
    }

    #[tokio::test]
    async fn test_get_credits_with_known_id() {
        // Arrange
        let mock_server = wiremock::MockServer::start().await;
        let json_body = include_str!("../../../../../fixtures/tmdb/movie_credits_27205.json");

        wiremock::Mock::given(wiremock::matchers::method("GET"))
            .and(wiremock::matchers::path("/3/movie/27205/credits"))
            .and(wiremock::matchers::query_param("api_key", "test-key"))
            .respond_with(wiremock::ResponseTemplate::new(200).set_body_string(json_body))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let endpoint = MovieEndpoint::with_id(&client, 27_205);

        // Act
        let credits = endpoint
            .get(MovieResource::Credits, &RequestOptions::new())
            .await
            .unwrap();

        // Assert
        assert_eq!(credits["id"], 27_205);
        assert_eq!(credits["cast"][0]["name"], "Leonardo DiCaprio");
    }

    #[tokio::test]
    async fn test_set_id_by_external_id_then_get() {
        // Arrange
        let mock_server = wiremock::MockServer::start().await;
        let find_body = include_str!("../../../../../fixtures/tmdb/find_tt1375666.json");

        wiremock::Mock::given(wiremock::matchers::method("GET"))
            .and(wiremock::matchers::path("/3/find/tt1375666"))
            .and(wiremock::matchers::query_param("external_source", "imdb_id"))
            .respond_with(wiremock::ResponseTemplate::new(200).set_body_string(find_body))
            .expect(1)
            .mount(&mock_server)
            .await;
        wiremock::Mock::given(wiremock::matchers::method("GET"))
            .and(wiremock::matchers::path("/3/movie/27205"))
            .respond_with(
                wiremock::ResponseTemplate::new(200)
                    .set_body_json(json!({"id": 27205, "title": "Inception"})),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let mut endpoint = client.movie();

        // Act
        let id = endpoint
            .set_id(&Locator::by_external_id("tt1375666"))
            .await
            .unwrap();
        let details = endpoint
            .get(MovieResource::Details, &RequestOptions::new())
            .await
            .unwrap();

        // Assert
        assert_eq!(id, 27_205);
        assert_eq!(endpoint.id(), Some(27_205));
        assert_eq!(details["title"], "Inception");
    }

    #[tokio::test]
    async fn test_set_id_by_query() {
        // Arrange
        let mock_server = wiremock::MockServer::start().await;
        let json_body = include_str!("../../../../../fixtures/tmdb/search_movie_inception.json");

        wiremock::Mock::given(wiremock::matchers::method("GET"))
            .and(wiremock::matchers::path("/3/search/movie"))
            .and(wiremock::matchers::query_param("query", "Inception"))
            .respond_with(wiremock::ResponseTemplate::new(200).set_body_string(json_body))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let mut endpoint = client.movie();

        // Act
        let id = endpoint.set_id(&Locator::by_query("Inception")).await.unwrap();

        // Assert
        assert_eq!(id, 27_205);
    }

    #[tokio::test]
    async fn test_set_id_twice_is_rejected_without_request() {
        // Arrange
        let mock_server = wiremock::MockServer::start().await;
        wiremock::Mock::given(wiremock::matchers::any())
            .respond_with(wiremock::ResponseTemplate::new(200))
            .expect(0)
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let mut endpoint = MovieEndpoint::with_id(&client, 27_205);

        // Act
        let result = endpoint.set_id(&Locator::by_query("Inception")).await;

        // Assert
        assert!(matches!(result, Err(EndpointError::IdAlreadySet)));
        assert_eq!(endpoint.id(), Some(27_205));
    }

    #[tokio::test]
    async fn test_failed_resolution_leaves_endpoint_unresolved() {
        // Arrange
        let mock_server = wiremock::MockServer::start().await;
        let json_body = include_str!("../../../../../fixtures/tmdb/search_empty.json");

        wiremock::Mock::given(wiremock::matchers::method("GET"))
            .and(wiremock::matchers::path("/3/search/movie"))
            .respond_with(wiremock::ResponseTemplate::new(200).set_body_string(json_body))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let mut endpoint = client.movie();

        // Act
        let result = endpoint.set_id(&Locator::by_query("zzzz")).await;

        // Assert
        assert!(matches!(
            result,
            Err(EndpointError::Resolve(ResolveError::NoResults { .. }))
        ));
        assert_eq!(endpoint.id(), None);
    }

    #[tokio::test]
    async fn test_get_without_id_is_rejected() {
        // Arrange
        let mock_server = wiremock::MockServer::start().await;
        let client = client_for(&mock_server);
        let endpoint = client.movie();

        // Act
        let result = endpoint
            .get(MovieResource::Credits, &RequestOptions::new())
            .await;

        // Assert
        assert!(matches!(result, Err(EndpointError::IdRequired)));
    }

    #[tokio::test]
    async fn test_list_needs_no_id() {
        // Arrange
        let mock_server = wiremock::MockServer::start().await;
        wiremock::Mock::given(wiremock::matchers::method("GET"))
            .and(wiremock::matchers::path("/3/movie/now_playing"))
            .and(wiremock::matchers::query_param("page", "2"))
            .respond_with(
                wiremock::ResponseTemplate::new(200)
                    .set_body_json(json!({"page": 2, "results": []})),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);

        // Act
        let page = client
            .movie()
            .list(MovieList::NowPlaying, &RequestOptions::new().with("page", 2))
            .await
            .unwrap();

        // Assert
        assert_eq!(page["page"], 2);
    }

    #[tokio::test]
    async fn test_add_and_remove_rating() {
        // Arrange
        let mock_server = wiremock::MockServer::start().await;
        wiremock::Mock::given(wiremock::matchers::method("POST"))
            .and(wiremock::matchers::path("/3/movie/27205/rating"))
            .and(wiremock::matchers::query_param("guest_session_id", "guest"))
            .and(wiremock::matchers::body_json(json!({"value": 8.5})))
            .respond_with(
                wiremock::ResponseTemplate::new(201)
                    .set_body_json(json!({"status_code": 1, "status_message": "Success."})),
            )
            .expect(1)
            .mount(&mock_server)
            .await;
        wiremock::Mock::given(wiremock::matchers::method("DELETE"))
            .and(wiremock::matchers::path("/3/movie/27205/rating"))
            .respond_with(
                wiremock::ResponseTemplate::new(200)
                    .set_body_json(json!({"status_code": 13, "status_message": "The item/record was deleted successfully."})),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let endpoint = MovieEndpoint::with_id(&client, 27_205);
        let options = RequestOptions::new().with("guest_session_id", "guest");

        // Act
        let added = endpoint.add_rating(8.5, &options).await.unwrap();
        let removed = endpoint.remove_rating(&options).await.unwrap();

        // Assert
        assert_eq!(added["status_code"], 1);
        assert_eq!(removed["status_code"], 13);
    }
}
