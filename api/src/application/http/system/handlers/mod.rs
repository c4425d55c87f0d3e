pub mod get_root;
pub mod test_api;
