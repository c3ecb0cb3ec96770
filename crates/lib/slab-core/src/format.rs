//! Plain-text rendering of Slab search and post results.
//!
//! Every renderer substitutes a fixed placeholder for missing fields instead
//! of failing, so partially populated API responses still produce output.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde_json::Value;
use slab_model::models::{
    CommentSearchResult,
    Post,
    PostData,
    PostSearchResult,
    SearchData,
    SearchResult,
    User,
    UserSearchResult,
};
use tracing::{debug, info, warn};

use crate::rich_text::extract_plain_text;

/// Number of characters kept in search result previews.
pub const PREVIEW_CHARS: usize = 200;

const NO_CONTENT: &str = "No content available";
const UNKNOWN: &str = "Unknown";
const RESULT_SEPARATOR: &str = "\n---\n";
const DATE_FORMAT: &str = "%-m/%-d/%Y";

/// Renders the unwrapped `data` payload of the search query.
///
/// An `errors` field on the payload is reported as text rather than raised.
///
/// # Errors
/// Returns the decode error if the `search` section has an unexpected shape.
pub fn search_response(term: &str, data: &Value) -> Result<String, serde_json::Error> {
    if let Some(errors) = payload_errors(data) {
        warn!(%errors, "search payload carried errors");
        return Ok(format!("Search failed with errors: {errors}"));
    }
    let data: SearchData = decode_payload(data)?;
    Ok(search_results(term, &data))
}

/// Renders a decoded search page, one block per hit.
#[must_use]
pub fn search_results(term: &str, data: &SearchData) -> String {
    let edges = data.edges();
    if edges.is_empty() {
        info!(term, "no search results");
        return no_results(term);
    }

    let blocks = edges
        .iter()
        .map(|edge| {
            let result = edge.result();
            debug!(kind = result.kind(), "rendering search hit");
            result_block(&result)
        })
        .collect::<Vec<_>>()
        .join(RESULT_SEPARATOR);

    format!(
        "Found {} results matching \"{term}\":\n\n{blocks}",
        edges.len()
    )
}

#[must_use]
pub fn no_results(term: &str) -> String {
    format!("No results found for \"{term}\"")
}

/// Renders the unwrapped `data` payload of the single-post query.
///
/// # Errors
/// Returns the decode error if the `post` section has an unexpected shape.
pub fn post_response(post_id: &str, data: &Value) -> Result<String, serde_json::Error> {
    if let Some(errors) = payload_errors(data) {
        warn!(%errors, "post payload carried errors");
        return Ok(format!("Error getting post: {errors}"));
    }
    let data: PostData = decode_payload(data)?;
    Ok(data.post.as_ref().map_or_else(
        || {
            info!(post_id, "no post found");
            post_not_found(post_id)
        },
        post_details,
    ))
}

#[must_use]
pub fn post_not_found(post_id: &str) -> String {
    format!("No post found with ID: {post_id}")
}

/// Full rendering of a single post, with untruncated content.
#[must_use]
pub fn post_details(post: &Post) -> String {
    let content = extract_plain_text(post.content.as_ref());
    let content = if content.is_empty() {
        NO_CONTENT.to_string()
    } else {
        content
    };

    format!(
        "**{title}**\n\n\
         **Post ID:** {id}\n\
         **Owner:** {owner}\n\
         **Topics:** {topics}\n\
         **Published:** {published}\n\
         **Updated:** {updated}\n\n\
         **Content:**\n{content}",
        title = post_title(post),
        id = post.id,
        owner = post.owner.as_ref().map_or_else(|| UNKNOWN.to_string(), name_with_email),
        topics = topics(post),
        published = published(post),
        updated = updated(post),
    )
}

fn result_block(result: &SearchResult) -> String {
    match result {
        SearchResult::Post(hit) => post_block(hit),
        SearchResult::Comment(hit) => comment_block(hit),
        SearchResult::User(hit) => user_block(hit),
        SearchResult::Unknown(node) => unknown_block(node),
    }
}

fn post_block(hit: &PostSearchResult) -> String {
    let post = &hit.post;
    let owner = post
        .owner
        .as_ref()
        .and_then(|owner| present(owner.name.as_deref()))
        .unwrap_or(UNKNOWN);

    format!(
        "**{title}**\n\
         Type: Post\n\
         ID: {id}\n\
         Owner: {owner}\n\
         Topics: {topics}\n\
         Published: {published}\n\
         Updated: {updated}\n\
         Preview: {preview}\n",
        title = post_title(post),
        id = post.id,
        topics = topics(post),
        published = published(post),
        updated = updated(post),
        preview = preview(&extract_plain_text(post.content.as_ref())),
    )
}

fn comment_block(hit: &CommentSearchResult) -> String {
    let comment = &hit.comment;
    let author_name = comment
        .author
        .as_ref()
        .and_then(|author| present(author.name.as_deref()))
        .unwrap_or(UNKNOWN);
    let author = comment
        .author
        .as_ref()
        .map_or_else(|| UNKNOWN.to_string(), name_with_email);
    let created =
        present(comment.inserted_at.as_deref()).map_or_else(|| UNKNOWN.to_string(), format_date);

    format!(
        "**Comment** by {author_name}\n\
         Type: Comment\n\
         ID: {id}\n\
         Author: {author}\n\
         Created: {created}\n\
         Content: {preview}\n",
        id = comment.id,
        preview = preview(&extract_plain_text(comment.content.as_ref())),
    )
}

fn user_block(hit: &UserSearchResult) -> String {
    let user = &hit.user;
    format!(
        "**{name}**\n\
         Type: User\n\
         ID: {id}\n\
         Email: {email}\n\
         Title: {title}\n\
         Description: {description}\n",
        name = present(user.name.as_deref())
            .or_else(|| present(hit.name.as_deref()))
            .unwrap_or(UNKNOWN),
        id = present(user.id.as_deref()).unwrap_or(UNKNOWN),
        email = present(user.email.as_deref()).unwrap_or("Not available"),
        title = present(hit.title.as_deref()).unwrap_or("No title"),
        description = present(hit.description.as_deref()).unwrap_or("No description"),
    )
}

fn unknown_block(node: &Value) -> String {
    let raw = serde_json::to_string_pretty(node).unwrap_or_else(|_| node.to_string());
    format!("**Unknown Result Type**\nContent: {raw}\n")
}

/// First [`PREVIEW_CHARS`] characters of `text` followed by an ellipsis.
#[must_use]
pub fn preview(text: &str) -> String {
    if text.is_empty() {
        return NO_CONTENT.to_string();
    }
    let mut preview: String = text.chars().take(PREVIEW_CHARS).collect();
    preview.push_str("...");
    preview
}

/// Renders an API timestamp as a short `M/D/YYYY` date.
///
/// Values that are not RFC 3339 timestamps or ISO dates are returned as-is.
#[must_use]
pub fn format_date(raw: &str) -> String {
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
        return timestamp.with_timezone(&Utc).format(DATE_FORMAT).to_string();
    }
    if let Ok(timestamp) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return timestamp.format(DATE_FORMAT).to_string();
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.format(DATE_FORMAT).to_string();
    }
    raw.to_string()
}

fn post_title(post: &Post) -> &str {
    present(post.title.as_deref()).unwrap_or("Untitled")
}

fn topics(post: &Post) -> String {
    let names = post.topic_names();
    if names.is_empty() {
        "None".to_string()
    } else {
        names.join(", ")
    }
}

fn published(post: &Post) -> String {
    present(post.published_at.as_deref()).map_or_else(|| "Not published".to_string(), format_date)
}

fn updated(post: &Post) -> String {
    present(post.updated_at.as_deref()).map_or_else(|| UNKNOWN.to_string(), format_date)
}

fn name_with_email(user: &User) -> String {
    match (present(user.name.as_deref()), present(user.email.as_deref())) {
        (Some(name), Some(email)) => format!("{name} ({email})"),
        (Some(name), None) => name.to_string(),
        (None, Some(email)) => email.to_string(),
        (None, None) => UNKNOWN.to_string(),
    }
}

fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.is_empty())
}

fn payload_errors(data: &Value) -> Option<&Value> {
    data.get("errors").filter(|errors| !errors.is_null())
}

fn decode_payload<T>(data: &Value) -> Result<T, serde_json::Error>
where
    T: serde::de::DeserializeOwned + Default,
{
    if data.is_null() {
        return Ok(T::default());
    }
    serde_json::from_value(data.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn post_node(content: &Value) -> Value {
        json!({
            "title": "Release checklist",
            "highlight": null,
            "post": {
                "id": "post-1",
                "title": "Release checklist",
                "content": content,
                "insertedAt": "2024-01-02T09:00:00Z",
                "updatedAt": "2024-03-15T12:30:00Z",
                "publishedAt": "2024-01-05T10:00:00Z",
                "owner": { "id": "u1", "name": "Grace Hopper", "email": "grace@example.com" },
                "topics": [{ "id": "t1", "name": "Engineering" }, { "id": "t2", "name": "Releases" }]
            }
        })
    }

    fn search_payload(nodes: Vec<Value>) -> Value {
        let edges: Vec<Value> = nodes.into_iter().map(|node| json!({ "node": node })).collect();
        json!({
            "search": {
                "edges": edges,
                "pageInfo": { "hasNextPage": false, "hasPreviousPage": false, "startCursor": null, "endCursor": null }
            }
        })
    }

    #[test]
    fn zero_edges_render_no_results() {
        let text = search_response("roadmap", &search_payload(Vec::new())).expect("render");
        assert_eq!(text, "No results found for \"roadmap\"");
    }

    #[test]
    fn missing_search_section_renders_no_results() {
        assert_eq!(
            search_response("roadmap", &json!({ "search": null })).expect("render"),
            "No results found for \"roadmap\""
        );
        assert_eq!(
            search_response("roadmap", &Value::Null).expect("render"),
            "No results found for \"roadmap\""
        );
    }

    #[test]
    fn payload_errors_are_reported_as_text() {
        let data = json!({ "errors": [{ "message": "rate limited" }] });
        assert_eq!(
            search_response("x", &data).expect("render"),
            r#"Search failed with errors: [{"message":"rate limited"}]"#
        );
        assert_eq!(
            post_response("p", &data).expect("render"),
            r#"Error getting post: [{"message":"rate limited"}]"#
        );
    }

    #[test]
    fn post_hit_renders_fields_in_order() {
        let long_text = "a".repeat(250);
        let content = json!([{ "insert": long_text }]);
        let text = search_response("release", &search_payload(vec![post_node(&content)]))
            .expect("render");

        let expected = format!(
            "Found 1 results matching \"release\":\n\n\
             **Release checklist**\n\
             Type: Post\n\
             ID: post-1\n\
             Owner: Grace Hopper\n\
             Topics: Engineering, Releases\n\
             Published: 1/5/2024\n\
             Updated: 3/15/2024\n\
             Preview: {}...\n",
            "a".repeat(PREVIEW_CHARS)
        );
        assert_eq!(text, expected);
    }

    #[test]
    fn post_hit_with_missing_fields_uses_placeholders() {
        let node = json!({ "post": { "id": "post-2", "title": "Draft", "content": null } });
        let text = search_response("draft", &search_payload(vec![node])).expect("render");

        assert!(text.contains("Owner: Unknown\n"));
        assert!(text.contains("Topics: None\n"));
        assert!(text.contains("Published: Not published\n"));
        assert!(text.contains("Updated: Unknown\n"));
        assert!(text.contains("Preview: No content available\n"));
    }

    #[test]
    fn comment_and_user_hits_render_variant_blocks() {
        let comment = json!({
            "content": null,
            "comment": {
                "id": "c1",
                "content": "[{\"insert\":\"Looks good to me\\n\"}]",
                "insertedAt": "2024-02-29T23:00:00Z",
                "author": { "id": "u2", "name": "Alan", "email": "alan@example.com" }
            }
        });
        let user = json!({
            "name": "Ada Lovelace",
            "title": null,
            "description": "Analyst",
            "user": { "id": "u3", "name": "Ada Lovelace", "email": null }
        });

        let text = search_response("ada", &search_payload(vec![comment, user])).expect("render");

        let expected = "Found 2 results matching \"ada\":\n\n\
            **Comment** by Alan\n\
            Type: Comment\n\
            ID: c1\n\
            Author: Alan (alan@example.com)\n\
            Created: 2/29/2024\n\
            Content: Looks good to me...\n\
            \n---\n\
            **Ada Lovelace**\n\
            Type: User\n\
            ID: u3\n\
            Email: Not available\n\
            Title: No title\n\
            Description: Analyst\n";
        assert_eq!(text, expected);
    }

    #[test]
    fn comment_without_author_is_unknown() {
        let comment = json!({ "comment": { "id": "c2", "content": null } });
        let text = search_response("x", &search_payload(vec![comment])).expect("render");

        assert!(text.contains("**Comment** by Unknown\n"));
        assert!(text.contains("Author: Unknown\n"));
        assert!(text.contains("Created: Unknown\n"));
        assert!(text.contains("Content: No content available\n"));
    }

    #[test]
    fn unrecognized_node_is_pretty_printed() {
        let node = json!({ "kind": "Space" });
        let text = search_response("x", &search_payload(vec![node])).expect("render");

        assert_eq!(
            text,
            "Found 1 results matching \"x\":\n\n**Unknown Result Type**\nContent: {\n  \"kind\": \"Space\"\n}\n"
        );
    }

    #[test]
    fn unrecognized_node_keeps_field_order() {
        let node = json!({ "zeta": 1, "alpha": 2 });
        let text = search_response("x", &search_payload(vec![node])).expect("render");

        assert!(text.ends_with("Content: {\n  \"zeta\": 1,\n  \"alpha\": 2\n}\n"));
    }

    #[test]
    fn missing_post_renders_not_found() {
        assert_eq!(
            post_response("missing-id", &json!({ "post": null })).expect("render"),
            "No post found with ID: missing-id"
        );
    }

    #[test]
    fn post_details_keep_full_content() {
        let long_text = "b".repeat(300);
        let data = json!({ "post": post_node(&json!([{ "insert": long_text }]))["post"] });

        let text = post_response("post-1", &data).expect("render");

        let expected = format!(
            "**Release checklist**\n\n\
             **Post ID:** post-1\n\
             **Owner:** Grace Hopper (grace@example.com)\n\
             **Topics:** Engineering, Releases\n\
             **Published:** 1/5/2024\n\
             **Updated:** 3/15/2024\n\n\
             **Content:**\n{}",
            "b".repeat(300)
        );
        assert_eq!(text, expected);
    }

    #[test]
    fn preview_counts_characters_not_bytes() {
        let text = "é".repeat(201);
        let preview = preview(&text);
        assert_eq!(preview.chars().count(), PREVIEW_CHARS + 3);
        assert!(preview.ends_with("é..."));
    }

    #[test]
    fn dates_fall_back_to_raw_text() {
        assert_eq!(format_date("2023-12-31"), "12/31/2023");
        assert_eq!(format_date("2023-07-04T08:15:00.123"), "7/4/2023");
        assert_eq!(format_date("yesterday"), "yesterday");
    }
}
