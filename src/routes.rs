// Route path constants - single source of truth for all operational paths.
// Every other path is a redirect lookup.

pub const HEALTH: &str = "/health";
pub const OPENAPI: &str = "/api-docs/openapi.json";
pub const REDIRECT: &str = "/{path}";
