use uuid::Uuid;

/// Generate a session id for a single agent invocation.
///
/// Format: `session-<unix millis>-<uuid v4, simple form>`. Ids are never
/// reused and nothing records them; the random half alone makes collisions
/// negligible. The result satisfies Bedrock's `[0-9a-zA-Z._:-]+` pattern.
pub fn new_session_id() -> String {
    let millis = jiff::Timestamp::now().as_millisecond();
    format!("session-{millis}-{}", Uuid::new_v4().simple())
}
