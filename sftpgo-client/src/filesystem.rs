use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use serde_repr::{Deserialize_repr, Serialize_repr};

#[derive(Serialize_repr, Deserialize_repr, PartialEq, Eq, Debug, Clone, Copy, Default)]
#[repr(u8)]
pub enum FileSystemProvider {
    #[default]
    LocalFilesystem = 0,
    S3 = 1,
    GoogleCloudStorage = 2,
    AzureBlobStorage = 3,
    LocalFileSystemEncrypted = 4,
    Sftp = 5,
    Http = 6,
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone, Copy)]
pub enum SftpgoSecretStatus {
    Plain,
    #[serde(rename = "AES-256-GCM")]
    Aes256Gcm,
    Secretbox,
    GCP,
    AWS,
    VaultTransit,
    AzureKeyVault,
    Redacted,
}

/// A secret as exchanged with the server. Send `Plain` secrets, the server
/// answers with encrypted or redacted ones.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone, Default)]
pub struct SftpgoSecret {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<SftpgoSecretStatus>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub payload: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_data: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<i32>,
}

impl SftpgoSecret {
    pub fn plain(payload: impl Into<String>) -> Self {
        Self {
            status: Some(SftpgoSecretStatus::Plain),
            payload: payload.into(),
            ..Default::default()
        }
    }
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone, Default)]
#[serde(default)]
pub struct OsFsConfig {
    pub read_buffer_size: i32,
    pub write_buffer_size: i32,
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone, Default)]
#[serde(default)]
pub struct CryptFsConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub passphrase: Option<SftpgoSecret>,
    pub read_buffer_size: i32,
    pub write_buffer_size: i32,
}

/// Either `account_name` + `account_key` or `sas_url` authenticates the
/// container.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone, Default)]
#[serde(default)]
pub struct AzureBlobFsConfig {
    pub container: String,
    pub account_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_key: Option<SftpgoSecret>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sas_url: Option<SftpgoSecret>,
    pub endpoint: String,
    pub upload_part_size: i64,
    pub upload_concurrency: i32,
    pub download_part_size: i64,
    pub download_concurrency: i32,
    /// `Hot`, `Cool`, `Archive` or empty for the account default.
    pub access_tier: String,
    pub key_prefix: String,
    pub use_emulator: bool,
}

/// Storage backend of a folder, user or group.
///
/// Only the local, encrypted local and Azure configurations are typed; the
/// other provider configurations (`s3config`, `gcsconfig`, `sftpconfig`,
/// `httpconfig`) travel untouched in `other`.
#[derive(Serialize, Deserialize, Debug, PartialEq, Clone, Default)]
pub struct FileSystem {
    pub provider: FileSystemProvider,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub osconfig: Option<OsFsConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cryptconfig: Option<CryptFsConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub azblobconfig: Option<AzureBlobFsConfig>,
    #[serde(flatten)]
    pub other: Map<String, Value>,
}
