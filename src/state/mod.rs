pub mod sessions;
pub mod store;

pub use sessions::{
    recover, session_cookie, session_from_cookie_header, Session, SessionRegistry,
};
pub use store::{Action, Effect, ExplorerState, RequestToken};
