//! Cached per-member selection for an event.

use crate::{
    error::internal::InternalError,
    model::category::{Class, OffspecRole, Role, Spec},
    util::parse::parse_u64_from_string,
};

/// A member's current selection for one event.
///
/// This mirrors which lists the member occupies on the event's [`SignupSheet`] and adds
/// the chosen spec and derived role. It is written in the same transaction as the sheet.
///
/// [`SignupSheet`]: crate::model::sheet::SignupSheet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participation {
    pub event_id: i32,
    pub guild_id: u64,
    pub user_id: u64,
    pub class: Option<Class>,
    pub spec: Option<Spec>,
    pub role: Option<Role>,
    pub offspec: Option<OffspecRole>,
}

impl Participation {
    /// Creates an empty participation record for a member who has not selected anything.
    pub fn new(event_id: i32, guild_id: u64, user_id: u64) -> Self {
        Self {
            event_id,
            guild_id,
            user_id,
            class: None,
            spec: None,
            role: None,
            offspec: None,
        }
    }

    /// Clears class, spec and role; used when the member moves to a non-class category.
    pub fn clear_primary(&mut self) {
        self.class = None;
        self.spec = None;
        self.role = None;
    }

    /// Converts an entity model at the repository boundary.
    ///
    /// A missing role column is re-derived from the stored spec key, defaulting to dps.
    ///
    /// # Returns
    /// - `Ok(Participation)` - The converted domain model
    /// - `Err(InternalError)` - Unparsable id or unknown class/offspec key
    pub fn from_entity(entity: entity::raid_participation::Model) -> Result<Self, InternalError> {
        let class = entity
            .class
            .as_deref()
            .map(|key| {
                Class::from_key(key).ok_or_else(|| InternalError::UnknownStoredKey {
                    kind: "class",
                    key: key.to_string(),
                })
            })
            .transpose()?;

        let spec = match (class, entity.spec.as_deref()) {
            (Some(class), Some(key)) => Spec::from_key(class, key),
            _ => None,
        };

        let role = entity
            .role
            .as_deref()
            .and_then(Role::from_key)
            .or_else(|| entity.spec.as_deref().map(Role::from_spec_key));

        let offspec = entity
            .offspec_role
            .as_deref()
            .map(|key| {
                OffspecRole::from_key(key).ok_or_else(|| InternalError::UnknownStoredKey {
                    kind: "offspec",
                    key: key.to_string(),
                })
            })
            .transpose()?;

        Ok(Self {
            event_id: entity.event_id,
            guild_id: parse_u64_from_string(&entity.guild_id)?,
            user_id: parse_u64_from_string(&entity.user_id)?,
            class,
            spec,
            role,
            offspec,
        })
    }
}
