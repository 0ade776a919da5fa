use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single blog post as returned by the remote API.
///
/// The store never inspects or validates the record: any JSON object is
/// accepted and kept verbatim, so it serializes back unchanged. The
/// accessors below only read the conventional `id`, `title` and `body`
/// fields for display.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Post(Map<String, Value>);

impl Post {
    /// The `id` field in whatever shape the server sent it.
    pub fn id(&self) -> Option<&Value> {
        self.0.get("id")
    }

    /// `title`, if present and a string.
    pub fn title(&self) -> Option<&str> {
        self.0.get("title").and_then(Value::as_str)
    }

    /// `body`, if present and a string.
    pub fn body(&self) -> Option<&str> {
        self.0.get("body").and_then(Value::as_str)
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_fields(self) -> Map<String, Value> {
        self.0
    }
}

impl From<Map<String, Value>> for Post {
    fn from(fields: Map<String, Value>) -> Self {
        Post(fields)
    }
}
