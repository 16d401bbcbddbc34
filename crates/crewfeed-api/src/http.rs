use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;

use crewfeed_types::{Comment, Employee, EmployeeId, EmployeeProfile, Post, PostId};

use crate::error::{Error, Result};
use crate::mapper;
use crate::schema::{CommentRecord, PostRecord, UserRecord};
use crate::source::FeedSource;

/// Default remote API root.
pub const DEFAULT_BASE: &str = "https://jsonplaceholder.typicode.com/";

const USER_AGENT: &str = concat!("crewfeed/", env!("CARGO_PKG_VERSION"));

/// [`FeedSource`] backed by the remote HTTP API.
///
/// Holds one shared [`Client`] for every request; the base URL is validated
/// once at construction so request paths can be joined without re-checking.
#[derive(Debug)]
pub struct HttpFeedSource {
    client: Client,
    base: Url,
}

impl HttpFeedSource {
    /// Build a source for the given API root.
    ///
    /// The base must be an absolute `http` or `https` URL. A path prefix is
    /// allowed (`https://proxy.example/api`), with or without a trailing
    /// slash.
    pub fn new(base: &str, timeout: Duration) -> Result<Self> {
        let base = Url::parse(base)
            .map_err(|err| Error::InvalidBase(format!("{}: {}", base, err)))?;
        match base.scheme() {
            "http" | "https" => {}
            other => {
                return Err(Error::InvalidBase(format!(
                    "{}: unsupported scheme `{}`",
                    base, other
                )));
            }
        }
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;
        Ok(Self { client, base })
    }

    /// Join path segments onto the base URL.
    ///
    /// `pop_if_empty` keeps a trailing-slash base from producing a double
    /// slash in the joined path.
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base.clone();
        {
            let mut path = url
                .path_segments_mut()
                .map_err(|_| Error::InvalidBase(format!("{}: cannot carry a path", self.base)))?;
            path.pop_if_empty().extend(segments);
        }
        Ok(url)
    }

    /// Collection endpoint filtered by a single query parameter.
    fn collection_with_filter(&self, segment: &str, key: &str, value: &str) -> Result<Url> {
        let mut url = self.endpoint(&[segment])?;
        url.query_pairs_mut().append_pair(key, value);
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status(status.as_u16()));
        }
        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl FeedSource for HttpFeedSource {
    async fn list_employees(&self) -> Result<Vec<Employee>> {
        let url = self.endpoint(&["users"])?;
        let records: Vec<UserRecord> = self.get_json(url).await?;
        Ok(records.into_iter().map(mapper::employee_from_user).collect())
    }

    async fn posts_for_employee(&self, employee: EmployeeId) -> Result<Vec<Post>> {
        let url = self.collection_with_filter("posts", "userId", &employee.to_string())?;
        let records: Vec<PostRecord> = self.get_json(url).await?;
        Ok(records.into_iter().map(mapper::post_from_record).collect())
    }

    async fn employee_profile(&self, employee: EmployeeId) -> Result<EmployeeProfile> {
        let url = self.endpoint(&["users", &employee.to_string()])?;
        let record: UserRecord = self.get_json(url).await?;
        mapper::profile_from_user(record)
    }

    async fn comments_for_post(&self, post: PostId) -> Result<Vec<Comment>> {
        let url = self.collection_with_filter("comments", "postId", &post.to_string())?;
        let records: Vec<CommentRecord> = self.get_json(url).await?;
        Ok(records.into_iter().map(mapper::comment_from_record).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source(base: &str) -> HttpFeedSource {
        HttpFeedSource::new(base, Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn joins_paths_against_default_base() {
        let url = source(DEFAULT_BASE).endpoint(&["users"]).unwrap();
        assert_eq!(url.as_str(), "https://jsonplaceholder.typicode.com/users");
    }

    #[test]
    fn tolerates_base_without_trailing_slash() {
        let url = source("https://jsonplaceholder.typicode.com")
            .endpoint(&["users", "3"])
            .unwrap();
        assert_eq!(url.as_str(), "https://jsonplaceholder.typicode.com/users/3");
    }

    #[test]
    fn preserves_path_prefix_in_base() {
        let url = source("http://localhost:8080/mock/api/")
            .endpoint(&["posts"])
            .unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/mock/api/posts");
    }

    #[test]
    fn appends_filter_query() {
        let url = source(DEFAULT_BASE)
            .collection_with_filter("posts", "userId", "2")
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://jsonplaceholder.typicode.com/posts?userId=2"
        );
    }

    #[test]
    fn rejects_non_http_scheme() {
        let err = HttpFeedSource::new("ftp://example.com/", Duration::from_secs(5)).unwrap_err();
        assert!(matches!(err, Error::InvalidBase(_)));
    }

    #[test]
    fn rejects_unparseable_base() {
        let err = HttpFeedSource::new("not a url", Duration::from_secs(5)).unwrap_err();
        assert!(matches!(err, Error::InvalidBase(_)));
    }
}
