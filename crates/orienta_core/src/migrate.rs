//! Document schema upgrade chain.
//!
//! # Responsibility
//! - Upgrade stored document JSON from any older schema version to the
//!   current one, one version step at a time.
//! - Reject documents written by a newer build.
//!
//! # Invariants
//! - Upgrades preserve user data; a version bump never discards the
//!   stored document wholesale.
//! - Each step transforms version N into exactly version N+1; steps are
//!   registered in strictly increasing order of `from`.

use crate::model::document::{Document, SCHEMA_VERSION};
use log::info;
use serde_json::{json, Value};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type UpgradeResult<T> = Result<T, UpgradeError>;

/// Failure while upgrading a stored document to the current schema.
#[derive(Debug)]
pub enum UpgradeError {
    /// The stored document was written by a newer build.
    TooNew { found: u32, supported: u32 },
    /// The stored JSON does not have the shape its version promises.
    Malformed(String),
}

impl Display for UpgradeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TooNew { found, supported } => write!(
                f,
                "document schema version {found} is newer than supported {supported}"
            ),
            Self::Malformed(details) => write!(f, "malformed stored document: {details}"),
        }
    }
}

impl Error for UpgradeError {}

type UpgradeFn = fn(&mut Value) -> UpgradeResult<()>;

struct DocumentUpgrade {
    from: u32,
    run: UpgradeFn,
}

const UPGRADES: &[DocumentUpgrade] = &[
    DocumentUpgrade {
        from: 1,
        run: add_saved_resources,
    },
    DocumentUpgrade {
        from: 2,
        run: add_privacy_and_activity,
    },
];

/// Reads the `schema_version` field of a stored document value.
pub fn stored_version(value: &Value) -> UpgradeResult<u32> {
    value
        .get("schema_version")
        .and_then(Value::as_u64)
        .and_then(|version| u32::try_from(version).ok())
        .ok_or_else(|| UpgradeError::Malformed("missing or non-integer schema_version".to_string()))
}

/// Upgrades `value` step by step until it parses as a current `Document`.
///
/// # Contract
/// - Input at the current version is parsed unchanged.
/// - Input at an older version is transformed through every registered
///   step; user data carried by the old shape survives.
/// - Input at a newer version is rejected with `UpgradeError::TooNew`.
pub fn upgrade_to_current(mut value: Value) -> UpgradeResult<Document> {
    let found = stored_version(&value)?;
    if found > SCHEMA_VERSION {
        return Err(UpgradeError::TooNew {
            found,
            supported: SCHEMA_VERSION,
        });
    }

    for upgrade in UPGRADES {
        if upgrade.from < found {
            continue;
        }

        (upgrade.run)(&mut value)?;
        value["schema_version"] = json!(upgrade.from + 1);
        info!(
            "event=document_upgrade module=migrate status=ok from={} to={}",
            upgrade.from,
            upgrade.from + 1
        );
    }

    serde_json::from_value(value)
        .map_err(|err| UpgradeError::Malformed(format!("after upgrade chain: {err}")))
}

fn users_mut(value: &mut Value) -> UpgradeResult<&mut Vec<Value>> {
    value
        .get_mut("users")
        .and_then(Value::as_array_mut)
        .ok_or_else(|| UpgradeError::Malformed("missing users array".to_string()))
}

/// Views one element of the users array as a JSON object.
///
/// Indexed assignment on a non-object `Value` panics, so upgrade steps
/// must go through the map representation.
fn user_object(user: &mut Value) -> UpgradeResult<&mut serde_json::Map<String, Value>> {
    user.as_object_mut()
        .ok_or_else(|| UpgradeError::Malformed("users entry is not an object".to_string()))
}

/// v1 -> v2: users gain an empty `saved_resources` set.
fn add_saved_resources(value: &mut Value) -> UpgradeResult<()> {
    for user in users_mut(value)? {
        let user = user_object(user)?;
        if !user.contains_key("saved_resources") {
            user.insert("saved_resources".to_string(), json!([]));
        }
    }
    Ok(())
}

/// v2 -> v3: users gain default `privacy_settings` and an empty
/// `activity_log`.
fn add_privacy_and_activity(value: &mut Value) -> UpgradeResult<()> {
    for user in users_mut(value)? {
        let user = user_object(user)?;
        if !user.contains_key("privacy_settings") {
            user.insert(
                "privacy_settings".to_string(),
                json!({
                    "public_profile": false,
                    "share_test_results": false,
                    "allow_contact": true,
                }),
            );
        }
        if !user.contains_key("activity_log") {
            user.insert("activity_log".to_string(), json!([]));
        }
    }
    Ok(())
}
