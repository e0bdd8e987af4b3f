//! Service layer for business logic and orchestration.
//!
//! Services sit between the bot (interaction) layer and the data (repository) layer. They
//! are responsible for:
//!
//! - **Business Logic**: Sign-up transitions, validation and summary rendering
//! - **Orchestration**: Coordinating repository calls with chat platform calls
//! - **Transaction Management**: Writing sign-up lists and participation rows as one unit

pub mod host;
pub mod lifecycle;
pub mod raid_event;
pub mod signup;
pub mod summary;
