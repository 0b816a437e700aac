pub(crate) mod config;
pub(crate) mod http;
pub(crate) mod state;

pub(crate) use config::{credentials_path, session_path};
pub(crate) use http::{print_payload, with_query};
pub(crate) use state::SessionStateFile;
