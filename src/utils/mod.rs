pub mod cookie_utils;
pub mod encoding_utils;

pub use cookie_utils::{CookieJar, CookieSource};
pub use encoding_utils::{DecodeError, decode_component, decode_component_twice_if_needed};
