//! HTTP syntax helpers.
//!
//! Small, pure serializers and parsers for the header value grammars the
//! converter deals in: preference lists, cookies and authentication
//! challenges. Each helper handles one header value in isolation so the
//! converter can decide per header whether a failure is skippable.

pub mod challenge;
pub mod cookies;
pub mod preference;
