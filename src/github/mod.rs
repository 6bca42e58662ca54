// src/github/mod.rs
// =============================================================================
// This module talks to the upstream hosting API (GitHub).
//
// Currently implements:
// - Fetching project, contributor and language bodies for one repository
// - A fixture mode that serves the same three bodies from local files
//
// Decoding the bodies is not done here; see service::shape.
// =============================================================================

mod fetch;

pub use fetch::Upstream;
