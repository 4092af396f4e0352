//! Stored records, request payloads and response shapes.
//!
//! Frameworks and versions are separate rows joined by `framework_id`. The owning
//! framework embeds its versions without a back-reference; a standalone version
//! carries only the owner's id.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, sqlx::FromRow)]
pub struct Framework {
    pub id: i64,
    pub name: String,
    pub hype_level: i32,
    pub deprecation_date: Option<DateTime<Utc>>,
    pub current_version_id: Option<i64>,
}

#[derive(Clone, Debug, PartialEq, sqlx::FromRow)]
pub struct FrameworkVersion {
    pub id: i64,
    pub version: f64,
    pub description: Option<String>,
    pub framework_id: i64,
}

/// Framework columns that passed validation, ready to be written.
#[derive(Clone, Debug, PartialEq)]
pub struct NewFramework {
    pub name: String,
    pub hype_level: i32,
    pub deprecation_date: Option<DateTime<Utc>>,
}

impl NewFramework {
    pub fn named(name: impl Into<String>) -> Self {
        NewFramework {
            name: name.into(),
            hype_level: 0,
            deprecation_date: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct NewVersion {
    pub version: f64,
    pub description: Option<String>,
}

/// Body of `POST /frameworks/add` and `PUT /frameworks/update/{id}`.
///
/// Everything is optional so that missing fields reach the constraint rules
/// instead of failing deserialization. `id` and `versions` are accepted and ignored.
#[derive(Clone, Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FrameworkPayload {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
    /// Fractional values are truncated toward zero before validation.
    #[serde(default)]
    #[schema(value_type = Option<i32>)]
    pub hype_level: Option<f64>,
    /// Epoch milliseconds.
    #[serde(default, with = "chrono::serde::ts_milliseconds_option")]
    #[schema(value_type = Option<i64>)]
    pub deprecation_date: Option<DateTime<Utc>>,
}

/// Body of `PUT /frameworks/setversion/{id}`. The owner always comes from the path.
#[derive(Clone, Debug, Default, Deserialize, ToSchema)]
pub struct VersionPayload {
    #[serde(default)]
    pub version: Option<f64>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Clone, Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FrameworkView {
    pub id: i64,
    pub name: String,
    pub hype_level: i32,
    #[serde(with = "chrono::serde::ts_milliseconds_option")]
    #[schema(value_type = Option<i64>)]
    pub deprecation_date: Option<DateTime<Utc>>,
    pub versions: Vec<NestedVersionView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_version_id: Option<i64>,
}

impl FrameworkView {
    pub fn assemble(framework: Framework, versions: Vec<NestedVersionView>) -> Self {
        FrameworkView {
            id: framework.id,
            name: framework.name,
            hype_level: framework.hype_level,
            deprecation_date: framework.deprecation_date,
            versions,
            current_version_id: framework.current_version_id,
        }
    }
}

/// A version embedded in its owner; no `javaScriptFramework` field.
#[derive(Clone, Debug, Serialize, ToSchema)]
pub struct NestedVersionView {
    pub id: i64,
    pub version: f64,
    pub description: Option<String>,
}

impl From<FrameworkVersion> for NestedVersionView {
    fn from(v: FrameworkVersion) -> Self {
        NestedVersionView {
            id: v.id,
            version: v.version,
            description: v.description,
        }
    }
}

/// A version on its own, pointing at its owner by id.
#[derive(Clone, Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VersionView {
    pub id: i64,
    pub version: f64,
    pub description: Option<String>,
    pub java_script_framework: i64,
}

impl From<FrameworkVersion> for VersionView {
    fn from(v: FrameworkVersion) -> Self {
        VersionView {
            id: v.id,
            version: v.version,
            description: v.description,
            java_script_framework: v.framework_id,
        }
    }
}
