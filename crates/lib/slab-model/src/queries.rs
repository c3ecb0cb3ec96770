//! GraphQL documents sent to the Slab API.

/// Full-text search over posts, users, and comments.
///
/// Variables: `query: String!`, `first: Int`.
pub const SEARCH_POSTS: &str = r"
query SearchPosts($query: String!, $first: Int) {
  search(query: $query, first: $first) {
    edges {
      node {
        ... on PostSearchResult {
          title
          content
          highlight
          post {
            id
            title
            content
            insertedAt
            updatedAt
            publishedAt
            owner {
              id
              name
              email
            }
            topics {
              id
              name
            }
          }
        }
        ... on UserSearchResult {
          name
          title
          description
          user {
            id
            name
            email
          }
        }
        ... on CommentSearchResult {
          content
          comment {
            id
            content
            insertedAt
            author {
              id
              name
              email
            }
          }
        }
      }
    }
    pageInfo {
      hasNextPage
      hasPreviousPage
      startCursor
      endCursor
    }
  }
}
";

/// Single post lookup. Variables: `id: ID!`.
pub const GET_POST: &str = r"
query GetPost($id: ID!) {
  post(id: $id) {
    id
    title
    content
    insertedAt
    updatedAt
    publishedAt
    owner {
      id
      name
      email
    }
    topics {
      id
      name
    }
  }
}
";

pub const SEARCH_OPERATION_NAME: &str = "SearchPosts";
pub const GET_POST_OPERATION_NAME: &str = "GetPost";
