/*
 * Copyright 2026 Oxide Computer Company
 */

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use serde_json::{Map, Value};

/**
 * The part of "openstack server show -f json" output that we care about.
 */
#[derive(Debug, PartialEq)]
pub struct ServerShow {
    pub flavor: Flavor,
}

impl ServerShow {
    /**
     * Decode the server description.  Anything other than a JSON object at
     * the top level is an error, as is a flavor object whose names are not
     * strings; a missing "flavor" key is not.
     */
    pub fn parse(s: &str) -> Result<ServerShow> {
        let mut obj: Map<String, Value> =
            serde_json::from_str(s).context("server description")?;

        let flavor = match obj.remove("flavor") {
            Some(v) => serde_json::from_value(v)?,
            None => Flavor::Absent,
        };

        if let Flavor::Other(Value::Object(m)) = &flavor {
            bail!("flavor names are not strings: {m:?}");
        }

        Ok(ServerShow { flavor })
    }
}

/**
 * Depending on the compute API microversion, the client either gives us the
 * embedded flavor as an object, or a display string like
 * "m1.small (6d2a1bc0-...)".
 */
#[derive(Debug, Default, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Flavor {
    Record(FlavorRecord),
    Text(String),
    #[default]
    Absent,
    Other(Value),
}

impl Flavor {
    /**
     * The flavor name, or an empty string if there is nothing usable.  For a
     * record the original name wins over the name; for text only the first
     * word counts.
     */
    pub fn identifier(&self) -> &str {
        match self {
            Flavor::Record(r) => r
                .original_name
                .as_deref()
                .filter(|n| !n.is_empty())
                .or_else(|| r.name.as_deref().filter(|n| !n.is_empty()))
                .unwrap_or(""),
            Flavor::Text(t) => t.split_whitespace().next().unwrap_or(""),
            Flavor::Absent | Flavor::Other(_) => "",
        }
    }
}

#[derive(Debug, Default, PartialEq, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct FlavorRecord {
    pub original_name: Option<String>,
    pub name: Option<String>,
}

impl TryFrom<Map<String, Value>> for FlavorRecord {
    type Error = String;

    fn try_from(mut m: Map<String, Value>) -> Result<Self, Self::Error> {
        /*
         * A null name is the same as a missing one.  Any other non-string
         * value means this is not a flavor record we understand.
         */
        let mut text = |k: &str| match m.remove(k) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(s)) => Ok(Some(s)),
            Some(other) => Err(format!("{k} is not a string: {other}")),
        };

        Ok(FlavorRecord {
            original_name: text("original_name")?,
            name: text("name")?,
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn flavor(json: &str) -> Flavor {
        ServerShow::parse(json).expect("parsed").flavor
    }

    #[test]
    fn decode_record() {
        let f = flavor(
            r#"{
                "id": "e8c1f3b4-0f3c-4b27-9a55-1d1fbe2a7d6c",
                "name": "node-42",
                "flavor": {
                    "original_name": "cpu-small",
                    "name": "old-name",
                    "vcpus": 2,
                    "ram": 4096
                },
                "status": "ACTIVE"
            }"#,
        );
        assert_eq!(
            f,
            Flavor::Record(FlavorRecord {
                original_name: Some("cpu-small".into()),
                name: Some("old-name".into()),
            })
        );
        assert_eq!(f.identifier(), "cpu-small");
    }

    #[test]
    fn record_falls_back_to_name() {
        assert_eq!(flavor(r#"{"flavor": {"name": "m1.tiny"}}"#).identifier(), "m1.tiny");
        assert_eq!(
            flavor(r#"{"flavor": {"original_name": "", "name": "m1.tiny"}}"#)
                .identifier(),
            "m1.tiny"
        );
        assert_eq!(
            flavor(r#"{"flavor": {"original_name": null, "name": "m1.tiny"}}"#)
                .identifier(),
            "m1.tiny"
        );
    }

    #[test]
    fn reject_non_string_names() {
        assert!(ServerShow::parse(
            r#"{"flavor": {"original_name": 7, "name": "m1.tiny"}}"#
        )
        .is_err());
        assert!(ServerShow::parse(
            r#"{"flavor": {"original_name": "cpu-small", "name": ["x"]}}"#
        )
        .is_err());
        assert!(
            ServerShow::parse(r#"{"flavor": {"name": {"id": "6"}}}"#).is_err()
        );
    }

    #[test]
    fn record_without_names() {
        assert_eq!(flavor(r#"{"flavor": {}}"#).identifier(), "");
        assert_eq!(
            flavor(r#"{"flavor": {"original_name": "", "name": ""}}"#).identifier(),
            ""
        );
        assert_eq!(flavor(r#"{"flavor": {"vcpus": 4}}"#).identifier(), "");
    }

    #[test]
    fn decode_text() {
        let f = flavor(r#"{"flavor": "m1.large extra-tag"}"#);
        assert_eq!(f, Flavor::Text("m1.large extra-tag".into()));
        assert_eq!(f.identifier(), "m1.large");

        assert_eq!(
            flavor(r#"{"flavor": "gp2.medium (0b7e9a31-8c1e-4e0f-9d4e-3d5c0f1b2a11)"}"#)
                .identifier(),
            "gp2.medium"
        );
        assert_eq!(flavor(r#"{"flavor": "  \tm1.small"}"#).identifier(), "m1.small");
    }

    #[test]
    fn empty_text() {
        assert_eq!(flavor(r#"{"flavor": ""}"#).identifier(), "");
        assert_eq!(flavor(r#"{"flavor": "   "}"#).identifier(), "");
    }

    #[test]
    fn absent_or_odd_shapes() {
        assert_eq!(flavor(r#"{"name": "node-1"}"#), Flavor::Absent);
        assert_eq!(flavor(r#"{"flavor": null}"#), Flavor::Absent);
        assert_eq!(flavor(r#"{"flavor": 3}"#).identifier(), "");
        assert_eq!(flavor(r#"{"flavor": ["m1.small"]}"#).identifier(), "");
        assert_eq!(flavor(r#"{"flavor": true}"#).identifier(), "");
    }

    #[test]
    fn reject_non_object() {
        assert!(ServerShow::parse(r#"[{"flavor": "m1.small"}]"#).is_err());
        assert!(ServerShow::parse(r#""m1.small""#).is_err());
        assert!(ServerShow::parse("").is_err());
        assert!(ServerShow::parse("No server with a name or ID").is_err());
    }
}
