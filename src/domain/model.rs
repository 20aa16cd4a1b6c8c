use serde::{Deserialize, Serialize};

/// A post as served by the upstream API.
///
/// Kept as the raw JSON value: nothing about its shape is checked, and it
/// serializes back exactly as it arrived (nulls and odd types included).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Post(serde_json::Value);

impl Post {
    pub fn new(value: serde_json::Value) -> Self {
        Self(value)
    }

    pub fn get(&self, field: &str) -> Option<&serde_json::Value> {
        self.0.get(field)
    }

    pub fn user_id(&self) -> Option<i64> {
        self.get("userId").and_then(|v| v.as_i64())
    }

    pub fn id(&self) -> Option<i64> {
        self.get("id").and_then(|v| v.as_i64())
    }

    pub fn title(&self) -> Option<&str> {
        self.get("title").and_then(|v| v.as_str())
    }

    pub fn body(&self) -> Option<&str> {
        self.get("body").and_then(|v| v.as_str())
    }

    pub fn as_value(&self) -> &serde_json::Value {
        &self.0
    }

    pub fn into_value(self) -> serde_json::Value {
        self.0
    }
}

impl From<serde_json::Value> for Post {
    fn from(value: serde_json::Value) -> Self {
        Self(value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostsSummary {
    pub count: usize,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub posts: Option<Vec<Post>>,
}

impl PostsSummary {
    /// `posts` is only populated when there is at least one post.
    pub fn from_posts(user_id: i64, posts: Vec<Post>) -> Self {
        if posts.is_empty() {
            Self {
                count: 0,
                message: format!("User {} has no posts.", user_id),
                posts: None,
            }
        } else {
            Self {
                count: posts.len(),
                message: format!("Found {} posts.", posts.len()),
                posts: Some(posts),
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscountRequest {
    pub price: f64,
    pub discount_percent: f64,
}

impl DiscountRequest {
    pub fn new(price: f64, discount_percent: f64) -> Self {
        Self {
            price,
            discount_percent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_post_keeps_unknown_fields() {
        let raw = json!({"userId": 5, "id": 1, "title": "Post 1", "tags": ["a"]});
        let post: Post = serde_json::from_value(raw.clone()).unwrap();

        assert_eq!(post.user_id(), Some(5));
        assert_eq!(post.title(), Some("Post 1"));
        assert_eq!(post.body(), None);
        assert_eq!(post.get("tags"), Some(&json!(["a"])));
        assert_eq!(serde_json::to_value(&post).unwrap(), raw);
    }

    #[test]
    fn test_post_with_mistyped_fields_passes_through() {
        let raw = json!({"userId": "5", "id": 1.5, "title": ["x"], "body": {"html": "<p>"}});
        let post: Post = serde_json::from_value(raw.clone()).unwrap();

        // typed accessors just miss, nothing fails
        assert_eq!(post.user_id(), None);
        assert_eq!(post.id(), None);
        assert_eq!(post.title(), None);
        assert_eq!(post.get("userId"), Some(&json!("5")));
        assert_eq!(serde_json::to_value(&post).unwrap(), raw);
    }

    #[test]
    fn test_post_null_fields_survive_round_trip() {
        let text = r#"[{"userId":5,"id":1,"title":null}]"#;
        let posts: Vec<Post> = serde_json::from_str(text).unwrap();

        assert_eq!(posts[0].get("title"), Some(&serde_json::Value::Null));

        let rendered = serde_json::to_value(&posts).unwrap();
        assert_eq!(rendered, json!([{"userId": 5, "id": 1, "title": null}]));
        assert!(rendered[0].as_object().unwrap().contains_key("title"));
    }

    #[test]
    fn test_non_object_elements_pass_through() {
        let raw = json!([1, "two", null, {"id": 4}]);
        let posts: Vec<Post> = serde_json::from_value(raw.clone()).unwrap();

        assert_eq!(posts.len(), 4);
        assert_eq!(posts[3].id(), Some(4));
        assert_eq!(serde_json::to_value(&posts).unwrap(), raw);
    }

    #[test]
    fn test_empty_summary_omits_posts_key() {
        let summary = PostsSummary::from_posts(7, Vec::new());
        assert_eq!(summary.message, "User 7 has no posts.");

        let value = serde_json::to_value(&summary).unwrap();
        assert_eq!(value, json!({"count": 0, "message": "User 7 has no posts."}));
    }

    #[test]
    fn test_summary_with_posts() {
        let posts = vec![Post::default(), Post::default(), Post::default()];
        let summary = PostsSummary::from_posts(1, posts.clone());

        assert_eq!(summary.count, 3);
        assert_eq!(summary.message, "Found 3 posts.");
        assert_eq!(summary.posts, Some(posts));
    }

    #[test]
    fn test_discount_request_from_json() {
        let request: DiscountRequest =
            serde_json::from_value(json!({"price": 100.0, "discountPercent": 20.0})).unwrap();
        assert_eq!(request, DiscountRequest::new(100.0, 20.0));
    }
}
