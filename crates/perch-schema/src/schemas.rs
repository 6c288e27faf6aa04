//! The published store contract, as data.
//!
//! Three JSON Schema draft-07 documents describe everything the client
//! accepts from the document store: an array of workspace envelopes, an
//! array of channel envelopes, and a single post envelope. Declaring them as
//! `serde_json::Value` keeps them inspectable and exportable; the compiled
//! guards in this crate are derived from these exact documents.
//!
//! Shape summary:
//! - Envelopes and metadata are closed (`additionalProperties: false`).
//! - Workspace/channel `doc` payloads are open objects.
//! - Post bodies are closed; `reactions` types its four known keys but does
//!   not forbid others, and `extensions` is an unconstrained object.

use std::sync::LazyLock;

use serde_json::{Value, json};

static WORKSPACES: LazyLock<Value> =
    LazyLock::new(|| collection_schema("workspaces.json", "workspaces", "workspace"));

static CHANNELS: LazyLock<Value> =
    LazyLock::new(|| collection_schema("channels.json", "channels", "channel"));

static POST: LazyLock<Value> = LazyLock::new(post_schema);

/// Schema for an array of workspace envelopes.
pub fn workspaces() -> &'static Value {
    &WORKSPACES
}

/// Schema for an array of channel envelopes.
pub fn channels() -> &'static Value {
    &CHANNELS
}

/// Schema for a single post envelope.
pub fn post() -> &'static Value {
    &POST
}

/// The audit metadata definition shared by all three documents.
fn metadata_definition() -> Value {
    json!({
        "type": "object",
        "required": ["createdAt", "createdBy", "lastModifiedAt", "lastModifiedBy"],
        "additionalProperties": false,
        "properties": {
            "createdAt": { "type": "integer", "minimum": 0 },
            "createdBy": { "type": "string" },
            "lastModifiedAt": { "type": "integer", "minimum": 0 },
            "lastModifiedBy": { "type": "string" },
        },
    })
}

/// Workspace and channel collections share one shape: an array of closed
/// envelopes whose `doc` payload is an open object.
fn collection_schema(id: &str, title: &str, item: &str) -> Value {
    json!({
        "$id": id,
        "$schema": "http://json-schema.org/draft-07/schema",
        "title": title,
        "type": "array",
        "items": {
            "type": "object",
            "$ref": format!("#/definitions/{item}"),
        },
        "definitions": {
            (item): {
                "type": "object",
                "required": ["doc", "meta", "path"],
                "additionalProperties": false,
                "properties": {
                    "doc": { "type": "object" },
                    "meta": {
                        "type": "object",
                        "$ref": "#/definitions/metadata",
                    },
                    "path": { "type": "string" },
                },
            },
            "metadata": metadata_definition(),
        },
    })
}

fn post_schema() -> Value {
    json!({
        "$id": "post.json",
        "$schema": "http://json-schema.org/draft-07/schema",
        "title": "post",
        "type": "object",
        "required": ["doc", "meta", "path"],
        "additionalProperties": false,
        "properties": {
            "doc": {
                "type": "object",
                "$ref": "#/definitions/postContents",
            },
            "meta": {
                "type": "object",
                "$ref": "#/definitions/metadata",
            },
            "path": { "type": "string" },
        },
        "definitions": {
            "postContents": {
                "type": "object",
                "required": ["msg"],
                "additionalProperties": false,
                "properties": {
                    "msg": { "type": "string" },
                    "parent": { "type": "string" },
                    "reactions": {
                        "type": "object",
                        "$ref": "#/definitions/reactions",
                    },
                    "extensions": { "type": "object" },
                },
            },
            "metadata": metadata_definition(),
            "reactions": {
                "type": "object",
                "properties": {
                    ":celebrate:": {
                        "type": "array",
                        "items": { "type": "string" },
                    },
                    ":frown:": {
                        "type": "array",
                        "items": { "type": "string" },
                    },
                    ":like:": {
                        "type": "array",
                        "items": { "type": "string" },
                    },
                    ":smile:": {
                        "type": "array",
                        "items": { "type": "string" },
                    },
                },
            },
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn documents_declare_draft_07() {
        for schema in [workspaces(), channels(), post()] {
            assert_eq!(
                schema["$schema"],
                json!("http://json-schema.org/draft-07/schema")
            );
        }
    }

    #[test]
    fn collection_documents_differ_only_by_name() {
        assert_eq!(workspaces()["$id"], json!("workspaces.json"));
        assert_eq!(channels()["$id"], json!("channels.json"));
        assert_eq!(
            workspaces()["definitions"]["workspace"],
            channels()["definitions"]["channel"],
        );
    }

    #[test]
    fn post_body_is_closed() {
        let contents = &post()["definitions"]["postContents"];
        assert_eq!(contents["additionalProperties"], json!(false));
        assert_eq!(contents["required"], json!(["msg"]));
    }

    #[test]
    fn reactions_definition_lists_fixed_vocabulary() {
        let properties = post()["definitions"]["reactions"]["properties"]
            .as_object()
            .unwrap();
        let mut keys: Vec<&str> = properties.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(keys, [":celebrate:", ":frown:", ":like:", ":smile:"]);
        // Deliberately open: unknown reaction keys are tolerated.
        assert!(!post()["definitions"]["reactions"]
            .as_object()
            .unwrap()
            .contains_key("additionalProperties"));
    }

    #[test]
    fn all_documents_compile() {
        for schema in [workspaces(), channels(), post()] {
            assert!(jsonschema::validator_for(schema).is_ok());
        }
    }
}
