//! Post payloads: message body, reactions, and extensions.
//!
//! Unlike workspace and channel `doc` payloads, a post body is a closed
//! shape: only `msg`, `parent`, `reactions`, and `extensions` are allowed.
//! Reactions use a fixed four-tag vocabulary; `extensions` is deliberately
//! unconstrained (clients stash app-specific data there, see [`STARRED_TAG`]).

use serde::{Deserialize, Serialize};

use crate::document::Envelope;

/// Tag appended to a post's extension list when a user stars it.
///
/// Convention only: the store contract leaves `extensions` as a free-form
/// object, so nothing guarantees a conforming document actually follows this
/// shape. Readers go through [`PostBody::extension_tags`], which returns
/// `None` for anything that is not a list of strings.
pub const STARRED_TAG: &str = "starred";

/// The fixed reaction vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reaction {
    Celebrate,
    Frown,
    Like,
    Smile,
}

impl Reaction {
    /// The wire key for this reaction, e.g. `":like:"`.
    #[must_use]
    pub const fn as_key(self) -> &'static str {
        match self {
            Self::Celebrate => ":celebrate:",
            Self::Frown => ":frown:",
            Self::Like => ":like:",
            Self::Smile => ":smile:",
        }
    }

    /// All reactions, in wire-key order.
    pub const ALL: [Self; 4] = [Self::Celebrate, Self::Frown, Self::Like, Self::Smile];
}

/// Per-post mapping from reaction tags to the users who applied them.
///
/// The store contract types the four known keys but does not close the
/// object, so a document may carry extra reaction keys and still conform.
/// Decoding into this struct drops such keys; the schema guards, not these
/// structs, are the boundary gate.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReactionMap {
    #[serde(rename = ":celebrate:", skip_serializing_if = "Option::is_none")]
    pub celebrate: Option<Vec<String>>,
    #[serde(rename = ":frown:", skip_serializing_if = "Option::is_none")]
    pub frown: Option<Vec<String>>,
    #[serde(rename = ":like:", skip_serializing_if = "Option::is_none")]
    pub like: Option<Vec<String>>,
    #[serde(rename = ":smile:", skip_serializing_if = "Option::is_none")]
    pub smile: Option<Vec<String>>,
}

impl ReactionMap {
    /// Users who applied the given reaction. Absent lists read as empty.
    #[must_use]
    pub fn users(&self, reaction: Reaction) -> &[String] {
        let list = match reaction {
            Reaction::Celebrate => &self.celebrate,
            Reaction::Frown => &self.frown,
            Reaction::Like => &self.like,
            Reaction::Smile => &self.smile,
        };
        list.as_deref().unwrap_or_default()
    }

    /// Whether the given user has applied the given reaction.
    #[must_use]
    pub fn has_reacted(&self, reaction: Reaction, user: &str) -> bool {
        self.users(reaction).iter().any(|u| u == user)
    }
}

/// The `doc` payload of a post envelope.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct PostBody {
    pub msg: String,

    /// Path of the post this one replies to, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub reactions: Option<ReactionMap>,

    /// Free-form client extension data. Not constrained by the store
    /// contract beyond "is an object".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extensions: Option<serde_json::Map<String, serde_json::Value>>,
}

impl PostBody {
    /// Create a body with just a message, everything else absent.
    #[must_use]
    pub fn new(msg: impl Into<String>) -> Self {
        Self {
            msg: msg.into(),
            parent: None,
            reactions: None,
            extensions: None,
        }
    }

    /// Tags stored under a client-chosen `extensions` key.
    ///
    /// Returns `None` when the key is absent or its value is not a list of
    /// strings; the contract leaves `extensions` unconstrained, so either is
    /// possible on a document that still validates.
    #[must_use]
    pub fn extension_tags(&self, key: &str) -> Option<Vec<&str>> {
        let value = self.extensions.as_ref()?.get(key)?;
        value
            .as_array()?
            .iter()
            .map(serde_json::Value::as_str)
            .collect()
    }

    /// Whether the tag list under `key` contains [`STARRED_TAG`].
    #[must_use]
    pub fn is_starred(&self, key: &str) -> bool {
        self.extension_tags(key)
            .is_some_and(|tags| tags.contains(&STARRED_TAG))
    }
}

/// A post envelope as returned by the store.
pub type Post = Envelope<PostBody>;

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn reaction_map_wire_keys() {
        let map = ReactionMap {
            like: Some(vec!["user123".into()]),
            ..Default::default()
        };
        let json = serde_json::to_value(&map).unwrap();
        assert_eq!(json, serde_json::json!({ ":like:": ["user123"] }));
    }

    #[test]
    fn absent_reaction_reads_as_empty() {
        let map = ReactionMap::default();
        assert!(map.users(Reaction::Smile).is_empty());
        assert!(!map.has_reacted(Reaction::Like, "user123"));
    }

    #[test]
    fn has_reacted_finds_user() {
        let map = ReactionMap {
            frown: Some(vec!["a".into(), "b".into()]),
            ..Default::default()
        };
        assert!(map.has_reacted(Reaction::Frown, "b"));
        assert!(!map.has_reacted(Reaction::Frown, "c"));
    }

    #[test]
    fn post_body_rejects_extra_keys() {
        let json = r#"{"msg":"hi","extraField":"not allowed"}"#;
        assert!(serde_json::from_str::<PostBody>(json).is_err());
    }

    #[test]
    fn optional_fields_are_omitted_when_absent() {
        let json = serde_json::to_value(PostBody::new("hi")).unwrap();
        assert_eq!(json, serde_json::json!({ "msg": "hi" }));
    }

    #[test]
    fn starred_convention() {
        let body: PostBody = serde_json::from_value(serde_json::json!({
            "msg": "hi",
            "extensions": { "p2group61": ["starred", "pinned"] },
        }))
        .unwrap();
        assert!(body.is_starred("p2group61"));
        assert_eq!(
            body.extension_tags("p2group61"),
            Some(vec!["starred", "pinned"])
        );
        assert!(!body.is_starred("other-group"));
    }

    #[test]
    fn extension_tags_rejects_non_string_lists() {
        let body: PostBody = serde_json::from_value(serde_json::json!({
            "msg": "hi",
            "extensions": { "p2group61": ["starred", 7] },
        }))
        .unwrap();
        assert_eq!(body.extension_tags("p2group61"), None);
        assert!(!body.is_starred("p2group61"));
    }
}
