//! User authentication: log-in, log-out, registration, and the cookie based
//! session that ties them together.

mod cookie;
mod log_in;
mod log_out;
mod middleware;
mod register;

pub(crate) use cookie::DEFAULT_COOKIE_DURATION;
pub(crate) use log_in::{get_log_in_page, post_log_in};
pub(crate) use log_out::get_log_out;
pub(crate) use middleware::{auth_guard, auth_guard_hx};
pub(crate) use register::{get_register_page, register_user};
