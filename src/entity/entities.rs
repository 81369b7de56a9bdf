//! Generic operations over one FastSpring resource collection.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

use crate::clients::{HttpClient, Payload};
use crate::config::PaginationPolicy;
use crate::entity::response::{check_response, entities_from_items, next_page};
use crate::entity::{Endpoint, EntityError, Record};

/// Entity operations bound to a client and an endpoint.
///
/// Obtained through [`HttpClient::entities`]. Every operation issues its
/// requests one after another and returns freshly built records; nothing is
/// cached between calls.
///
/// # Pagination
///
/// [`find_by`](Self::find_by) and [`find_all`](Self::find_all) follow
/// `nextPage` cursors until the API stops sending one. What happens when a
/// follow-up page fails is decided by the client's [`PaginationPolicy`].
/// Pagination also stops, with a warning, when the page cursor does not
/// advance.
///
/// # Example
///
/// ```rust,ignore
/// use fastspring_api::entity::resources;
///
/// let subscriptions = client.entities(resources::SUBSCRIPTIONS);
///
/// let active = subscriptions.find_by([("status", "active")]).await?;
/// for (id, subscription) in &active {
///     println!("{id}: {:?}", subscription.get_str("state"));
/// }
/// ```
#[derive(Clone, Debug)]
pub struct Entities<'a> {
    http: &'a HttpClient,
    endpoint: Endpoint,
}

impl<'a> Entities<'a> {
    pub(crate) const fn new(http: &'a HttpClient, endpoint: Endpoint) -> Self {
        Self { http, endpoint }
    }

    /// Returns the endpoint these operations target.
    #[must_use]
    pub const fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    /// Fetches a single record by id.
    ///
    /// Returns `Ok(None)` if the response does not contain a record with
    /// this id.
    ///
    /// # Errors
    ///
    /// Returns [`EntityError::Http`] for transport failures (including a
    /// not-found answer, see [`EntityError::is_not_found`]),
    /// [`EntityError::EmptyResponse`] or [`EntityError::ApiError`] for
    /// unusable responses.
    pub async fn find(&self, id: &str) -> Result<Option<Record>, EntityError> {
        let mut entities = self.find_many([id]).await?;
        Ok(entities.remove(id))
    }

    /// Fetches several records by id with a single request.
    ///
    /// The returned map is keyed by the id of every record the API returned.
    /// An empty id list returns an empty map without a request.
    ///
    /// # Errors
    ///
    /// See [`Entities::find`].
    pub async fn find_many<I, T>(&self, ids: I) -> Result<BTreeMap<String, Record>, EntityError>
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        let ids: Vec<Value> = ids.into_iter().map(Into::into).collect();
        if ids.is_empty() {
            return Ok(BTreeMap::new());
        }

        tracing::debug!(endpoint = %self.endpoint, count = ids.len(), "fetching records by id");

        let body = self
            .http
            .get(self.endpoint.name(), Some(Payload::List(ids)))
            .await?;
        let items = check_response(&body, &self.endpoint)?;

        Ok(entities_from_items(&items, &self.endpoint))
    }

    /// Fetches every record matching the given filters, across all pages.
    ///
    /// Filters are sent as query parameters. Follow-up pages repeat the
    /// filters and add `page`.
    ///
    /// # Errors
    ///
    /// Errors of the first page are always returned. Errors of follow-up
    /// pages are returned under [`PaginationPolicy::FailFast`] only.
    pub async fn find_by<I, K, V>(
        &self,
        filters: I,
    ) -> Result<BTreeMap<String, Record>, EntityError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        let filters: Map<String, Value> = filters
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .collect();

        tracing::debug!(endpoint = %self.endpoint, "fetching records by filter");

        let body = self
            .http
            .get(self.endpoint.name(), Some(Payload::Map(filters.clone())))
            .await?;
        let items = check_response(&body, &self.endpoint)?;
        let mut entities = entities_from_items(&items, &self.endpoint);

        self.follow_pages(&body, &filters, |items| {
            entities.extend(entities_from_items(&items, &self.endpoint));
        })
        .await?;

        Ok(entities)
    }

    /// Fetches every record of the collection.
    ///
    /// The id list is collected page by page first (using the configured
    /// page size as `limit`), then all records are fetched with a single
    /// [`find_many`](Self::find_many).
    ///
    /// # Errors
    ///
    /// See [`Entities::find_by`] and [`Entities::find_many`].
    pub async fn find_all(&self) -> Result<BTreeMap<String, Record>, EntityError> {
        let mut query = Map::new();
        query.insert("limit".to_string(), Value::from(self.http.page_size()));

        tracing::debug!(endpoint = %self.endpoint, limit = self.http.page_size(), "listing record ids");

        let body = self
            .http
            .get(self.endpoint.name(), Some(Payload::Map(query.clone())))
            .await?;
        let items = check_response(&body, &self.endpoint)?;
        let mut ids = ids_from_items(&items);

        self.follow_pages(&body, &query, |items| {
            ids.extend(ids_from_items(&items));
        })
        .await?;

        self.find_many(ids).await
    }

    /// Deletes the record from FastSpring.
    ///
    /// # Errors
    ///
    /// Returns [`EntityError::MissingId`] without a request if the record has
    /// no usable id. Otherwise see [`Entities::find`].
    pub async fn delete(&self, record: &Record) -> Result<(), EntityError> {
        let id = record.id(&self.endpoint).ok_or_else(|| EntityError::MissingId {
            endpoint: self.endpoint.clean_name().to_string(),
            id_field: self.endpoint.id_field().to_string(),
        })?;

        tracing::debug!(endpoint = %self.endpoint, %id, "deleting record");

        let body = self
            .http
            .delete(self.endpoint.name(), Some(Payload::ids([id])))
            .await?;
        check_response(&body, &self.endpoint)?;

        Ok(())
    }

    /// Creates or updates the record.
    ///
    /// # Errors
    ///
    /// Always returns [`EntityError::NotImplemented`]; FastSpring's create
    /// and update semantics are not supported. No request is made.
    #[allow(clippy::unused_async)]
    pub async fn save(&self, _record: &Record) -> Result<(), EntityError> {
        Err(EntityError::NotImplemented { operation: "save" })
    }

    /// Fetches the pages following `first`, handing each page's records to
    /// `collect`.
    async fn follow_pages<F>(
        &self,
        first: &Value,
        query: &Map<String, Value>,
        mut collect: F,
    ) -> Result<(), EntityError>
    where
        F: FnMut(Vec<&Value>),
    {
        let mut cursor = next_page(first);
        let mut last_requested: Option<i64> = None;

        while let Some(page) = cursor {
            if last_requested.is_some_and(|last| page <= last) {
                tracing::warn!(
                    endpoint = %self.endpoint,
                    page,
                    "page cursor did not advance, stopping pagination"
                );
                break;
            }
            last_requested = Some(page);

            tracing::debug!(endpoint = %self.endpoint, page, "fetching next page");

            let mut page_query = query.clone();
            page_query.insert("page".to_string(), Value::from(page));

            let outcome = match self
                .http
                .get(self.endpoint.name(), Some(Payload::Map(page_query)))
                .await
            {
                Ok(body) => check_response(&body, &self.endpoint).map(|items| {
                    collect(items);
                    next_page(&body)
                }),
                Err(e) => Err(e.into()),
            };

            match outcome {
                Ok(next) => cursor = next,
                Err(e) => match self.http.pagination() {
                    PaginationPolicy::FailFast => return Err(e),
                    PaginationPolicy::BestEffort => {
                        tracing::warn!(
                            endpoint = %self.endpoint,
                            page,
                            "stopping pagination after a failed page: {}",
                            e
                        );
                        break;
                    }
                },
            }
        }

        Ok(())
    }
}

/// Extracts the ids of an id listing, skipping entries that are not ids.
fn ids_from_items(items: &[&Value]) -> Vec<Value> {
    items
        .iter()
        .filter(|item| item.is_string() || item.is_number())
        .map(|item| (*item).clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FastSpringConfig;
    use serde_json::json;

    fn uninitialized_client() -> HttpClient {
        HttpClient::new(&FastSpringConfig::default()).unwrap()
    }

    #[test]
    fn test_entities_expose_endpoint() {
        let client = uninitialized_client();
        let entities = client.entities(Endpoint::new("/products/"));
        assert_eq!(entities.endpoint().clean_name(), "products");
    }

    #[test]
    fn test_ids_from_items_keeps_scalar_ids() {
        let values = [json!("a"), json!(2), json!(null), json!({"product": "c"})];
        let items: Vec<&Value> = values.iter().collect();
        assert_eq!(ids_from_items(&items), vec![json!("a"), json!(2)]);
    }

    #[tokio::test]
    async fn test_save_is_not_implemented() {
        let client = uninitialized_client();
        let result = client
            .entities(Endpoint::new("products"))
            .save(&Record::new())
            .await;
        assert!(matches!(
            result,
            Err(EntityError::NotImplemented { operation: "save" })
        ));
    }

    #[tokio::test]
    async fn test_find_many_without_ids_skips_request() {
        let client = uninitialized_client();
        let result = client
            .entities(Endpoint::new("products"))
            .find_many(Vec::<String>::new())
            .await
            .unwrap();
        assert!(result.is_empty());
    }

    #[tokio::test]
    async fn test_delete_without_id_skips_request() {
        let client = uninitialized_client();
        let mut record = Record::new();
        record.set("display", "no id");

        let result = client.entities(Endpoint::new("products")).delete(&record).await;
        assert!(matches!(
            result,
            Err(EntityError::MissingId { ref id_field, .. }) if id_field == "product"
        ));
    }

    #[tokio::test]
    async fn test_uninitialized_client_fails_reads() {
        let client = uninitialized_client();
        let result = client.entities(Endpoint::new("products")).find("a").await;
        assert!(matches!(
            result,
            Err(EntityError::Http(crate::clients::HttpError::NotInitialized))
        ));
    }
}
