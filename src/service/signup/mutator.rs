//! Sign-up state transitions.
//!
//! [`apply`] is the only place that moves a member between the lists of a
//! [`SignupSheet`]. It edits the sheet and the member's [`Participation`] together and
//! reports which rows changed so the caller can persist exactly that difference.

use crate::model::{
    category::{Category, Class, OffspecRole, PrimaryCategory, Spec, Status},
    participation::Participation,
    sheet::SignupSheet,
};

/// A selection made through the sign-up controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignupRequest {
    Class(Class),
    Spec(Spec),
    Status(Status),
    Offspec(OffspecRole),
}

/// List rows that changed as a result of a request.
///
/// A spec change within the member's current class touches no list and only updates the
/// participation record, so both fields can be `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignupChange {
    pub removed: Option<Category>,
    pub added: Option<Category>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignupOutcome {
    Updated(SignupChange),
    /// The member already holds the requested selection; nothing changed.
    AlreadySelected(Category),
    /// Offspec was requested before any primary selection; nothing changed.
    PrimaryRequired,
}

/// Applies a request for the member identified by `participation.user_id`.
pub fn apply(
    sheet: &mut SignupSheet,
    participation: &mut Participation,
    request: SignupRequest,
) -> SignupOutcome {
    let user_id = participation.user_id;

    match request {
        SignupRequest::Class(class) => {
            let target = PrimaryCategory::Class(class);
            if sheet.primary_of(user_id) == Some(target) {
                return SignupOutcome::AlreadySelected(target.into());
            }

            let change = move_primary(sheet, user_id, target);
            participation.class = Some(class);
            participation.spec = None;
            participation.role = None;
            SignupOutcome::Updated(change)
        }
        SignupRequest::Spec(spec) => {
            let target = PrimaryCategory::Class(spec.class());
            let in_class = sheet.primary_of(user_id) == Some(target);
            if in_class && participation.spec == Some(spec) {
                return SignupOutcome::AlreadySelected(target.into());
            }

            let change = if in_class {
                SignupChange {
                    removed: None,
                    added: None,
                }
            } else {
                move_primary(sheet, user_id, target)
            };
            participation.class = Some(spec.class());
            participation.spec = Some(spec);
            participation.role = Some(spec.role());
            SignupOutcome::Updated(change)
        }
        SignupRequest::Status(status) => {
            let target = PrimaryCategory::Status(status);
            if sheet.primary_of(user_id) == Some(target) {
                return SignupOutcome::AlreadySelected(target.into());
            }

            let change = move_primary(sheet, user_id, target);
            participation.clear_primary();
            SignupOutcome::Updated(change)
        }
        SignupRequest::Offspec(offspec) => {
            if sheet.primary_of(user_id).is_none() {
                return SignupOutcome::PrimaryRequired;
            }
            if sheet.offspec_of(user_id) == Some(offspec) {
                return SignupOutcome::AlreadySelected(offspec.into());
            }

            let removed = sheet.offspec_of(user_id).map(Category::Offspec);
            if let Some(previous) = removed {
                sheet.remove(previous, user_id);
            }
            sheet.push(offspec.into(), user_id);
            participation.offspec = Some(offspec);
            SignupOutcome::Updated(SignupChange {
                removed,
                added: Some(offspec.into()),
            })
        }
    }
}

fn move_primary(sheet: &mut SignupSheet, user_id: u64, target: PrimaryCategory) -> SignupChange {
    let removed = sheet.primary_of(user_id).map(Category::Primary);
    if let Some(previous) = removed {
        sheet.remove(previous, user_id);
    }
    sheet.push(target.into(), user_id);

    SignupChange {
        removed,
        added: Some(target.into()),
    }
}
