//! Sign-up controls attached to raid announcements.
//!
//! Every control carries a custom id of the form `raid:{event}:{action}` so a single
//! interaction handler can route clicks and selections back to the right event:
//!
//! - `raid:{event}:class` - class select menu
//! - `raid:{event}:spec` - spec select menu, sent ephemerally after choosing a class
//! - `raid:{event}:status:{status}` - bench/late/tentative/absent buttons
//! - `raid:{event}:offspec` - offspec role select menu

use serenity::all::{
    ButtonStyle, CreateActionRow, CreateButton, CreateSelectMenu, CreateSelectMenuKind,
    CreateSelectMenuOption, ReactionType,
};

use crate::{
    model::category::{Class, OffspecRole, Spec, Status},
    service::signup::mutator::SignupRequest,
};

const PREFIX: &str = "raid";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentAction {
    Class,
    Spec,
    Status(Status),
    Offspec,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RaidComponent {
    pub event_id: i32,
    pub action: ComponentAction,
}

impl RaidComponent {
    pub fn new(event_id: i32, action: ComponentAction) -> Self {
        Self { event_id, action }
    }

    pub fn custom_id(&self) -> String {
        match self.action {
            ComponentAction::Class => format!("{}:{}:class", PREFIX, self.event_id),
            ComponentAction::Spec => format!("{}:{}:spec", PREFIX, self.event_id),
            ComponentAction::Status(status) => {
                format!("{}:{}:status:{}", PREFIX, self.event_id, status.key())
            }
            ComponentAction::Offspec => format!("{}:{}:offspec", PREFIX, self.event_id),
        }
    }

    /// Parses a custom id. Returns `None` for ids this bot did not create.
    pub fn parse(custom_id: &str) -> Option<Self> {
        let mut parts = custom_id.split(':');
        if parts.next()? != PREFIX {
            return None;
        }
        let event_id = parts.next()?.parse().ok()?;

        let action = match (parts.next()?, parts.next()) {
            ("class", None) => ComponentAction::Class,
            ("spec", None) => ComponentAction::Spec,
            ("offspec", None) => ComponentAction::Offspec,
            ("status", Some(key)) => ComponentAction::Status(Status::from_key(key)?),
            _ => return None,
        };

        if parts.next().is_some() {
            return None;
        }

        Some(Self { event_id, action })
    }

    /// Converts the interaction payload into a sign-up request.
    ///
    /// Select menus deliver the chosen option value; buttons carry everything in the
    /// custom id and ignore `values`.
    pub fn request(&self, values: &[String]) -> Option<SignupRequest> {
        match self.action {
            ComponentAction::Status(status) => Some(SignupRequest::Status(status)),
            ComponentAction::Class => {
                Class::from_key(values.first()?).map(SignupRequest::Class)
            }
            ComponentAction::Spec => {
                let (class, spec) = values.first()?.split_once(':')?;
                Spec::from_key(Class::from_key(class)?, spec).map(SignupRequest::Spec)
            }
            ComponentAction::Offspec => {
                OffspecRole::from_key(values.first()?).map(SignupRequest::Offspec)
            }
        }
    }
}

/// Class select, status buttons and offspec select for an announcement.
pub fn signup_controls(event_id: i32) -> Vec<CreateActionRow> {
    let class_options = Class::ALL
        .into_iter()
        .map(|class| {
            CreateSelectMenuOption::new(class.label(), class.key()).emoji(unicode(class.emoji()))
        })
        .collect();

    let status_buttons = Status::ALL
        .into_iter()
        .map(|status| {
            CreateButton::new(
                RaidComponent::new(event_id, ComponentAction::Status(status)).custom_id(),
            )
            .label(status.label())
            .emoji(unicode(status.emoji()))
            .style(ButtonStyle::Secondary)
        })
        .collect();

    let offspec_options = OffspecRole::ALL
        .into_iter()
        .map(|offspec| {
            CreateSelectMenuOption::new(offspec.label(), offspec.key())
                .emoji(unicode(offspec.emoji()))
        })
        .collect();

    vec![
        CreateActionRow::SelectMenu(
            CreateSelectMenu::new(
                RaidComponent::new(event_id, ComponentAction::Class).custom_id(),
                CreateSelectMenuKind::String {
                    options: class_options,
                },
            )
            .placeholder("Sign up with your class"),
        ),
        CreateActionRow::Buttons(status_buttons),
        CreateActionRow::SelectMenu(
            CreateSelectMenu::new(
                RaidComponent::new(event_id, ComponentAction::Offspec).custom_id(),
                CreateSelectMenuKind::String {
                    options: offspec_options,
                },
            )
            .placeholder("Offspec role (optional)"),
        ),
    ]
}

/// Spec select for one class, sent to the member after they pick the class.
pub fn spec_select(event_id: i32, class: Class) -> CreateActionRow {
    let options = class
        .specs()
        .iter()
        .map(|spec| {
            CreateSelectMenuOption::new(
                spec.label(),
                format!("{}:{}", class.key(), spec.key()),
            )
            .emoji(unicode(spec.role().emoji()))
        })
        .collect();

    CreateActionRow::SelectMenu(
        CreateSelectMenu::new(
            RaidComponent::new(event_id, ComponentAction::Spec).custom_id(),
            CreateSelectMenuKind::String { options },
        )
        .placeholder(format!("Choose your {} spec", class.label())),
    )
}

fn unicode(emoji: &str) -> ReactionType {
    ReactionType::Unicode(emoji.to_string())
}
