// End-to-end tests for the voicegate HTTP API
//
// These tests drive the real axum router with stub synthesis providers
// injected through the repository traits, so no network access or cloud
// credentials are needed. Each test gets its own temporary audio root,
// allowing tests to run in parallel without conflicts.

mod helpers;
mod test_health;
mod test_tts;
