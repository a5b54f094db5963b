mod admins;
mod auth;
mod client;
mod config;
mod error_response;
pub mod filesystem;
mod folders;
mod groups;
mod rest_client;
mod users;
pub mod virtual_folder_reference;

pub use admins::{Admin, AdminsClient};
pub use auth::{
    create_basic_auth_header, create_bearer_auth_header, ApiKey, AuthContext, BasicAuth,
    BearerToken, NoAuth, API_KEY_HEADER,
};
pub use client::{ApiRequest, AuthorizedSftpgoClient, SftpgoClient, SftpgoTransport};
pub use config::SftpgoClientConfig;
pub use error_response::*;
pub use folders::{FoldersClient, VirtualFolder};
pub use groups::{Group, GroupUserSettings, GroupsClient};
pub use rest_client::{
    Named, Resource, ResourceClient, SftpgoApi, SftpgoRestClient, PAGE_LIMIT,
};
pub use users::{User, UserStatus, UsersClient};
