pub mod api_helpers;
pub mod bulk_import;
pub mod download;
pub mod list_utils;
pub mod resource_list;
