use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A decoded release descriptor: the tag and its downloadable assets.
///
/// Assets keep the order the descriptor listed them in.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ReleaseManifest {
    /// The release tag (wire field `tag_name`).
    pub tag: String,
    /// Downloadable assets published under the tag. May be empty.
    pub assets: Vec<Asset>,
}

/// One downloadable artifact referenced by a release.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Asset {
    /// Artifact file name.
    pub name: String,
    /// Direct download URL (wire field `browser_download_url`).
    pub download_url: String,
}

/// Decode failure for a release descriptor.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DecodeError {
    /// A required field is absent or null. The payload names the full
    /// field path, e.g. `tag_name` or `assets[2].name`.
    #[error("release descriptor missing required field `{0}`")]
    MissingField(String),

    /// The payload is not well-formed JSON, or a present field has the
    /// wrong type.
    #[error("release descriptor is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

// Raw mirror of the wire schema. Every field is optional here so that
// presence can be checked explicitly with a precise field path; unknown
// fields in the payload are ignored by serde's default behavior.
#[derive(Debug, Deserialize)]
struct RawRelease {
    tag_name: Option<String>,
    assets: Option<Vec<RawAsset>>,
}

#[derive(Debug, Deserialize)]
struct RawAsset {
    name: Option<String>,
    browser_download_url: Option<String>,
}

impl ReleaseManifest {
    /// Decodes a release descriptor from its JSON wire form.
    ///
    /// Required fields are `tag_name` and `assets`, plus `name` and
    /// `browser_download_url` on every asset; `null` counts as missing.
    /// Absence of a required field is the only condition checked — the tag
    /// format, URL shape, and asset-name uniqueness are not validated
    /// here. An empty `assets` array is a valid descriptor.
    ///
    /// # Errors
    ///
    /// [`DecodeError::MissingField`] naming the first missing field path,
    /// or [`DecodeError::Json`] for malformed JSON and wrong-typed fields.
    pub fn parse(raw: &str) -> Result<Self, DecodeError> {
        let release: RawRelease = serde_json::from_str(raw)?;
        release.try_into()
    }
}

impl TryFrom<RawRelease> for ReleaseManifest {
    type Error = DecodeError;

    fn try_from(raw: RawRelease) -> Result<Self, DecodeError> {
        let tag = raw
            .tag_name
            .ok_or_else(|| DecodeError::MissingField("tag_name".to_string()))?;
        let raw_assets = raw
            .assets
            .ok_or_else(|| DecodeError::MissingField("assets".to_string()))?;

        let mut assets = Vec::with_capacity(raw_assets.len());
        for (index, asset) in raw_assets.into_iter().enumerate() {
            let name = asset
                .name
                .ok_or_else(|| DecodeError::MissingField(format!("assets[{index}].name")))?;
            let download_url = asset.browser_download_url.ok_or_else(|| {
                DecodeError::MissingField(format!("assets[{index}].browser_download_url"))
            })?;
            assets.push(Asset {
                name,
                download_url,
            });
        }

        Ok(Self { tag, assets })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn missing_field(result: Result<ReleaseManifest, DecodeError>) -> String {
        match result {
            Err(DecodeError::MissingField(path)) => path,
            other => panic!("expected MissingField, got {other:?}"),
        }
    }

    #[test]
    fn decodes_complete_descriptor() {
        let manifest = ReleaseManifest::parse(
            r#"{"tag_name":"v1.0","assets":[{"name":"a.zip","browser_download_url":"http://x/a.zip"}]}"#,
        )
        .unwrap();
        assert_eq!(manifest.tag, "v1.0");
        assert_eq!(manifest.assets.len(), 1);
        assert_eq!(manifest.assets[0].name, "a.zip");
        assert_eq!(manifest.assets[0].download_url, "http://x/a.zip");
    }

    #[test]
    fn empty_assets_array_is_valid() {
        let manifest = ReleaseManifest::parse(r#"{"tag_name":"v2.1","assets":[]}"#).unwrap();
        assert_eq!(manifest.tag, "v2.1");
        assert!(manifest.assets.is_empty());
    }

    #[test]
    fn missing_tag_is_named() {
        let path = missing_field(ReleaseManifest::parse(r#"{"assets":[]}"#));
        assert_eq!(path, "tag_name");
    }

    #[test]
    fn missing_assets_key_is_named() {
        let path = missing_field(ReleaseManifest::parse(r#"{"tag_name":"v1.0"}"#));
        assert_eq!(path, "assets");
    }

    #[test]
    fn null_counts_as_missing() {
        let path = missing_field(ReleaseManifest::parse(r#"{"tag_name":null,"assets":[]}"#));
        assert_eq!(path, "tag_name");
    }

    #[test]
    fn missing_asset_field_names_the_element() {
        let raw = r#"{
            "tag_name": "v1.0",
            "assets": [
                {"name": "a.zip", "browser_download_url": "http://x/a.zip"},
                {"name": "b.zip", "browser_download_url": "http://x/b.zip"},
                {"browser_download_url": "http://x/c.zip"}
            ]
        }"#;
        let path = missing_field(ReleaseManifest::parse(raw));
        assert_eq!(path, "assets[2].name");

        let raw = r#"{"tag_name":"v1.0","assets":[{"name":"a.zip"}]}"#;
        let path = missing_field(ReleaseManifest::parse(raw));
        assert_eq!(path, "assets[0].browser_download_url");
    }

    #[test]
    fn asset_order_is_preserved() {
        let raw = r#"{"tag_name":"v1.0","assets":[
            {"name":"z.zip","browser_download_url":"http://x/z.zip"},
            {"name":"a.zip","browser_download_url":"http://x/a.zip"},
            {"name":"m.zip","browser_download_url":"http://x/m.zip"}
        ]}"#;
        let manifest = ReleaseManifest::parse(raw).unwrap();
        let names: Vec<&str> = manifest.assets.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, ["z.zip", "a.zip", "m.zip"]);
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let raw = r#"{
            "tag_name": "v1.0",
            "prerelease": false,
            "published_at": "2016-06-28T00:00:00Z",
            "assets": [
                {"name": "a.zip", "size": 1024, "browser_download_url": "http://x/a.zip"}
            ]
        }"#;
        let manifest = ReleaseManifest::parse(raw).unwrap();
        assert_eq!(manifest.tag, "v1.0");
        assert_eq!(manifest.assets.len(), 1);
    }

    #[test]
    fn malformed_json_is_a_json_error() {
        assert!(matches!(
            ReleaseManifest::parse("not json"),
            Err(DecodeError::Json(_))
        ));
        assert!(matches!(
            ReleaseManifest::parse(r#"{"tag_name":5,"assets":[]}"#),
            Err(DecodeError::Json(_))
        ));
    }

    #[test]
    fn error_message_carries_the_path() {
        let err = ReleaseManifest::parse(r#"{"tag_name":"v1.0"}"#).unwrap_err();
        assert_eq!(
            err.to_string(),
            "release descriptor missing required field `assets`"
        );
    }
}
