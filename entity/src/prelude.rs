pub use super::raid_event::Entity as RaidEvent;
pub use super::raid_participation::Entity as RaidParticipation;
pub use super::raid_signup::Entity as RaidSignup;
