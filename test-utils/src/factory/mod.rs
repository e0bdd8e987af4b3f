//! Factory methods for creating test data.
//!
//! Factories insert entities with sensible defaults so tests only spell out the fields
//! they care about. Each entity has a `Factory` struct for customization and a `create_*`
//! convenience function for default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let event = factory::create_raid_event(&db, "123").await?;
//! factory::create_signup(&db, event.id, "1001", "warrior").await?;
//!
//! let participation = factory::raid_participation::RaidParticipationFactory::new(&db, event.id, "1001")
//!     .class("warrior")
//!     .spec("arms")
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `raid_event` - Create raid event entities
//! - `raid_signup` - Create sign-up list rows
//! - `raid_participation` - Create participation rows
//! - `helpers` - ID generation and multi-entity setup

pub mod helpers;
pub mod raid_event;
pub mod raid_participation;
pub mod raid_signup;

pub use raid_event::create_raid_event;
pub use raid_participation::create_participation;
pub use raid_signup::create_signup;
