//! Client-side counterpart of the file endpoints: fetches the policy
//! snapshot and mirrors the server's validation to fail fast before any
//! transfer.

pub mod file_service;
