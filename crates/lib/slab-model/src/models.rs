use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A Slab user, as referenced by post owners, comment authors, and user hits.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// A topic a post is filed under.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Topic {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// A Slab post. `content` is a Quill delta, either already decoded or as JSON text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inserted_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<User>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topics: Option<Vec<Topic>>,
}

impl Post {
    /// Names of the post's topics, in API order. Unnamed topics are skipped.
    #[must_use]
    pub fn topic_names(&self) -> Vec<&str> {
        self.topics
            .iter()
            .flatten()
            .filter_map(|topic| topic.name.as_deref())
            .collect()
    }
}

/// A comment left on a post.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inserted_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<User>,
}

/// Search hit wrapping a post.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PostSearchResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highlight: Option<Value>,
    pub post: Post,
}

/// Search hit wrapping a user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserSearchResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub user: User,
}

/// Search hit wrapping a comment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CommentSearchResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<Value>,
    pub comment: Comment,
}

/// A single search hit, resolved from the shape of the raw node.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchResult {
    Post(PostSearchResult),
    User(UserSearchResult),
    Comment(CommentSearchResult),
    /// Nodes that match none of the known shapes, kept verbatim.
    Unknown(Value),
}

impl SearchResult {
    /// Resolves a raw search node into a variant.
    ///
    /// The variant is picked by the first populated field out of `post`,
    /// `comment`, and `user`. Nodes with none of them, or whose nested record
    /// fails to decode, become [`SearchResult::Unknown`].
    #[must_use]
    pub fn from_node(node: Value) -> Self {
        let populated = |key: &str| node.get(key).is_some_and(|value| !value.is_null());

        let parsed = if populated("post") {
            serde_json::from_value(node.clone()).map(Self::Post)
        } else if populated("comment") {
            serde_json::from_value(node.clone()).map(Self::Comment)
        } else if populated("user") {
            serde_json::from_value(node.clone()).map(Self::User)
        } else {
            return Self::Unknown(node);
        };

        parsed.unwrap_or(Self::Unknown(node))
    }

    /// Short label for the variant.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Post(_) => "post",
            Self::User(_) => "user",
            Self::Comment(_) => "comment",
            Self::Unknown(_) => "unknown",
        }
    }
}

/// One edge of a search page. The node stays raw until [`SearchEdge::result`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SearchEdge {
    #[serde(default)]
    pub node: Value,
}

impl SearchEdge {
    #[must_use]
    pub fn result(&self) -> SearchResult {
        SearchResult::from_node(self.node.clone())
    }
}

/// The `search` connection returned by the search query.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SearchConnection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edges: Option<Vec<SearchEdge>>,
    /// Cursor metadata, kept raw since only the first page is rendered.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_info: Option<Value>,
}

/// Unwrapped `data` payload of the search query.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SearchData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<SearchConnection>,
}

impl SearchData {
    /// Edges of the page, or an empty slice when the section is missing.
    #[must_use]
    pub fn edges(&self) -> &[SearchEdge] {
        self.search
            .as_ref()
            .and_then(|search| search.edges.as_deref())
            .unwrap_or_default()
    }
}

/// Unwrapped `data` payload of the single-post query.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PostData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post: Option<Post>,
}

/// Payload of a delta insert: literal text or an embed such as an image.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Insert {
    Text(String),
    Embed(Value),
}

/// One Quill delta operation. Only `insert` carries document content.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DeltaOp {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insert: Option<Insert>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retain: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delete: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Value>,
}

impl DeltaOp {
    /// The inserted text, if this op inserts a string.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match self.insert.as_ref()? {
            Insert::Text(text) => Some(text),
            Insert::Embed(_) => None,
        }
    }
}

/// A Quill delta document: a bare op list, or an object wrapping one in `ops`.
///
/// List elements that are not ops (strings, numbers, nulls) are dropped.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(from = "DeltaRepr")]
pub struct Delta {
    pub ops: Vec<DeltaOp>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum DeltaRepr {
    Ops(Vec<Value>),
    Wrapped { ops: Vec<Value> },
}

impl From<DeltaRepr> for Delta {
    fn from(repr: DeltaRepr) -> Self {
        let (DeltaRepr::Ops(raw) | DeltaRepr::Wrapped { ops: raw }) = repr;
        let ops = raw
            .into_iter()
            .filter_map(|op| serde_json::from_value(op).ok())
            .collect();
        Self { ops }
    }
}

impl Delta {
    /// Concatenates the string inserts in order and trims the result.
    #[must_use]
    pub fn plain_text(&self) -> String {
        self.ops
            .iter()
            .filter_map(DeltaOp::text)
            .collect::<String>()
            .trim()
            .to_string()
    }
}
