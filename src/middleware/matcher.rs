/// Path heads (after the leading `/`) for which the gate is skipped at the
/// routing layer: framework assets plus the login/registration/logout, cron
/// and server-config routes.
pub const BYPASSED_HEADS: [&str; 10] = [
    "_next/static",
    "_next/image",
    "favicon.ico",
    "login",
    "warning",
    "api/login",
    "api/register",
    "api/logout",
    "api/cron",
    "api/server-config",
];

/// Whether the gate sees this path at all.
///
/// Equivalent to the route matcher `/((?!<heads>).*)`: the head is a plain
/// prefix test, so `/login` and `/loginpage` are both bypassed.
pub fn is_gated(path: &str) -> bool {
    let Some(rest) = path.strip_prefix('/') else {
        return false;
    };
    !BYPASSED_HEADS.iter().any(|head| rest.starts_with(head))
}
