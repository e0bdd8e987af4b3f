//! Test factories for creating Serenity API objects.
//!
//! These factories create valid Serenity structs by deserializing JSON, simulating what
//! Discord's API would return. Serenity models are `#[non_exhaustive]`, so this is the
//! only way to build them outside the library.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::serenity::member::create_test_member;
//!
//! let member = create_test_member(123, 1001, "alice", Some("Alice"));
//! assert_eq!(member.display_name(), "Alice");
//! ```

pub mod member;
