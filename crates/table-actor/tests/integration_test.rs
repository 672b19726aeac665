use async_trait::async_trait;
use table_actor::{StoreError, TableAccess, TableActor, TableClient, TableRow};
use uuid::Uuid;

// --- Test Row ---

#[derive(Clone, Debug, PartialEq)]
struct Slug {
    id: Uuid,
    owner: String,
    value: String,
}

#[derive(Debug)]
struct SlugInsert {
    owner: String,
    value: String,
}

#[derive(Debug)]
struct SlugPatch {
    value: String,
}

#[derive(Debug)]
enum SlugFilter {
    All,
    Owner(String),
}

#[derive(Debug, thiserror::Error)]
enum SlugError {
    #[error("slug must not be empty")]
    Empty,
    #[error("owner {0} is blocked")]
    Blocked(String),
    #[error("{0}")]
    Other(String),
}

impl From<String> for SlugError {
    fn from(msg: String) -> Self {
        SlugError::Other(msg)
    }
}

/// Owners the slug table refuses, injected as context.
struct Blocklist(Vec<String>);

#[async_trait]
impl TableRow for Slug {
    const TABLE: &'static str = "slugs";
    type Id = Uuid;
    type Insert = SlugInsert;
    type Patch = SlugPatch;
    type Filter = SlugFilter;
    type Context = Blocklist;
    type Error = SlugError;

    fn id(&self) -> &Uuid {
        &self.id
    }

    fn from_insert(id: Uuid, params: SlugInsert) -> Result<Self, SlugError> {
        if params.value.is_empty() {
            return Err(SlugError::Empty);
        }
        Ok(Self {
            id,
            owner: params.owner,
            value: params.value,
        })
    }

    fn matches(&self, filter: &SlugFilter) -> bool {
        match filter {
            SlugFilter::All => true,
            SlugFilter::Owner(owner) => &self.owner == owner,
        }
    }

    fn conflicts_with(&self, other: &Self) -> bool {
        self.value == other.value
    }

    async fn on_insert(&mut self, ctx: &Blocklist) -> Result<(), SlugError> {
        if ctx.0.contains(&self.owner) {
            return Err(SlugError::Blocked(self.owner.clone()));
        }
        Ok(())
    }

    async fn on_update(&mut self, patch: SlugPatch, _ctx: &Blocklist) -> Result<(), SlugError> {
        if patch.value.is_empty() {
            return Err(SlugError::Empty);
        }
        self.value = patch.value;
        Ok(())
    }
}

struct SlugClient {
    inner: TableClient<Slug>,
}

#[async_trait]
impl TableAccess<Slug> for SlugClient {
    type Error = SlugError;

    fn inner(&self) -> &TableClient<Slug> {
        &self.inner
    }

    fn map_error(e: StoreError) -> SlugError {
        SlugError::Other(e.to_string())
    }
}

fn insert(owner: &str, value: &str) -> SlugInsert {
    SlugInsert {
        owner: owner.to_string(),
        value: value.to_string(),
    }
}

#[tokio::test]
async fn test_table_crud_lifecycle() {
    let (actor, client) = TableActor::<Slug>::new(10);
    let handle = tokio::spawn(actor.run(Blocklist(vec![])));

    let row = client.insert(insert("acme", "acme")).await.unwrap();
    let fetched = client.get(row.id).await.unwrap();
    assert_eq!(fetched, Some(row.clone()));

    let updated = client
        .update(
            row.id,
            SlugPatch {
                value: "acme-store".to_string(),
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.value, "acme-store");

    client.delete(row.id).await.unwrap();
    assert_eq!(client.get(row.id).await.unwrap(), None);
    assert!(matches!(
        client.delete(row.id).await,
        Err(StoreError::NotFound { table: "slugs", .. })
    ));

    drop(client);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_select_returns_rows_in_insertion_order() {
    let (actor, client) = TableActor::<Slug>::new(10);
    tokio::spawn(actor.run(Blocklist(vec![])));

    for (owner, value) in [("a", "one"), ("b", "two"), ("a", "three"), ("a", "four")] {
        client.insert(insert(owner, value)).await.unwrap();
    }

    let values: Vec<String> = client
        .select(SlugFilter::Owner("a".to_string()))
        .await
        .unwrap()
        .into_iter()
        .map(|s| s.value)
        .collect();
    assert_eq!(values, vec!["one", "three", "four"]);

    let all = client.select(SlugFilter::All).await.unwrap();
    assert_eq!(all.len(), 4);
}

#[tokio::test]
async fn test_unique_constraint_on_insert_and_update() {
    let (actor, client) = TableActor::<Slug>::new(10);
    tokio::spawn(actor.run(Blocklist(vec![])));

    client.insert(insert("a", "taken")).await.unwrap();
    let other = client.insert(insert("b", "free")).await.unwrap();

    let dup = client.insert(insert("c", "taken")).await;
    assert!(matches!(dup, Err(StoreError::Conflict { .. })));

    let clash = client
        .update(
            other.id,
            SlugPatch {
                value: "taken".to_string(),
            },
        )
        .await;
    assert!(matches!(clash, Err(StoreError::Conflict { .. })));

    // The failed update left the stored row untouched.
    let stored = client.get(other.id).await.unwrap().unwrap();
    assert_eq!(stored.value, "free");

    // Re-saving a row with its own value is not a conflict.
    let same = client
        .update(
            other.id,
            SlugPatch {
                value: "free".to_string(),
            },
        )
        .await;
    assert!(same.is_ok());
}

#[tokio::test]
async fn test_hook_errors_are_reported_and_nothing_is_stored() {
    let (actor, client) = TableActor::<Slug>::new(10);
    tokio::spawn(actor.run(Blocklist(vec!["mallory".to_string()])));

    let empty = client.insert(insert("a", "")).await;
    assert!(matches!(empty, Err(StoreError::RowError(_))));

    let blocked = client.insert(insert("mallory", "x")).await;
    match blocked {
        Err(StoreError::RowError(e)) => assert!(e.to_string().contains("mallory")),
        other => panic!("expected row error, got {other:?}"),
    }

    assert!(client.select(SlugFilter::All).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_table_access_maps_errors() {
    let (actor, client) = TableActor::<Slug>::new(10);
    let handle = tokio::spawn(actor.run(Blocklist(vec![])));
    let slugs = SlugClient {
        inner: client.clone(),
    };

    let row = client.insert(insert("a", "v")).await.unwrap();
    assert_eq!(slugs.get(row.id).await.unwrap().map(|s| s.value), Some("v".into()));
    assert_eq!(slugs.select(SlugFilter::All).await.unwrap().len(), 1);

    let missing = slugs.delete(Uuid::new_v4()).await;
    assert!(matches!(missing, Err(SlugError::Other(msg)) if msg.contains("not found")));

    drop(client);
    drop(slugs);
    handle.await.unwrap();

    let (_, closed) = TableActor::<Slug>::new(1);
    let closed = SlugClient { inner: closed };
    assert!(matches!(
        closed.get(Uuid::new_v4()).await,
        Err(SlugError::Other(msg)) if msg.contains("closed")
    ));
}
