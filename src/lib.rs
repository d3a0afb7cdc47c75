//! Workspace-level integration test host. See `tests/`.
