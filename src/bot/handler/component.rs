//! Sign-up control handler.
//!
//! Routes clicks and selections on announcement controls into the sign-up service, then
//! re-renders the announcement and tells the member what changed.

use serenity::all::{
    ComponentInteraction, ComponentInteractionDataKind, Context, CreateActionRow,
    CreateInteractionResponse, CreateInteractionResponseMessage, EditInteractionResponse,
};

use crate::{
    bot::{
        component::{spec_select, RaidComponent},
        handler::{refresh_announcement, user_message},
    },
    error::AppError,
    model::category::Category,
    service::signup::{
        mutator::{SignupOutcome, SignupRequest},
        SignupService,
    },
    state::BotState,
};

pub async fn handle_component(state: &BotState, ctx: Context, component: ComponentInteraction) {
    let Some(target) = RaidComponent::parse(&component.data.custom_id) else {
        tracing::debug!(
            "Ignoring component with unknown custom id {}",
            component.data.custom_id
        );
        return;
    };

    let values = match &component.data.kind {
        ComponentInteractionDataKind::StringSelect { values } => values.as_slice(),
        _ => &[],
    };

    let Some(request) = target.request(values) else {
        tracing::warn!(
            "Unrecognized selection {:?} for component {}",
            values,
            component.data.custom_id
        );
        let response = CreateInteractionResponse::Message(
            CreateInteractionResponseMessage::new()
                .content("That option is no longer available.")
                .ephemeral(true),
        );
        if let Err(e) = component.create_response(&ctx.http, response).await {
            tracing::error!("Failed to respond to component interaction: {:?}", e);
        }
        return;
    };

    if let Err(e) = component.defer_ephemeral(&ctx.http).await {
        tracing::error!("Failed to defer component response: {:?}", e);
        return;
    }

    let response = match signup(state, &ctx, &target, component.user.id.get(), request).await {
        Ok(outcome) => reply(target.event_id, request, outcome),
        Err(e) => {
            if !matches!(e, AppError::BadRequest(_) | AppError::NotFound(_)) {
                tracing::error!(
                    "Failed to sign up {} for raid event {}: {}",
                    component.user.id,
                    target.event_id,
                    e
                );
            }
            EditInteractionResponse::new().content(user_message(&e))
        }
    };

    if let Err(e) = component.edit_response(&ctx.http, response).await {
        tracing::error!("Failed to respond to component interaction: {:?}", e);
    }
}

async fn signup(
    state: &BotState,
    ctx: &Context,
    target: &RaidComponent,
    user_id: u64,
    request: SignupRequest,
) -> Result<SignupOutcome, AppError> {
    let outcome = SignupService::new(&state.db, &state.locks)
        .signup(target.event_id, user_id, request)
        .await?;

    if let SignupOutcome::Updated(_) = outcome {
        if let Err(e) = refresh_announcement(state, ctx, target.event_id).await {
            tracing::error!(
                "Failed to refresh announcement for raid event {}: {}",
                target.event_id,
                e
            );
        }
    }

    Ok(outcome)
}

/// Ephemeral response for the member, with the spec select after a class choice.
fn reply(event_id: i32, request: SignupRequest, outcome: SignupOutcome) -> EditInteractionResponse {
    let response = EditInteractionResponse::new().content(outcome_message(request, outcome));

    match (request, outcome) {
        (SignupRequest::Class(class), SignupOutcome::Updated(_))
        | (SignupRequest::Class(class), SignupOutcome::AlreadySelected(_)) => {
            let rows: Vec<CreateActionRow> = vec![spec_select(event_id, class)];
            response.components(rows)
        }
        _ => response,
    }
}

fn outcome_message(request: SignupRequest, outcome: SignupOutcome) -> String {
    match outcome {
        SignupOutcome::PrimaryRequired => {
            "Sign up with a class or status before picking an offspec role.".to_string()
        }
        SignupOutcome::AlreadySelected(category) => match (request, category) {
            (SignupRequest::Class(_), _) => format!(
                "You are already signed up as {} {}. Pick your spec below.",
                category.emoji(),
                category.label()
            ),
            (SignupRequest::Spec(spec), _) => format!(
                "You are already signed up as {} {}.",
                spec.label(),
                spec.class().label()
            ),
            (_, Category::Offspec(offspec)) => {
                format!("Your offspec is already {}.", offspec.label())
            }
            (_, category) => format!("You are already marked as {}.", category.label()),
        },
        SignupOutcome::Updated(_) => match request {
            SignupRequest::Class(class) => format!(
                "Signed up as {} {}. Pick your spec below.",
                class.emoji(),
                class.label()
            ),
            SignupRequest::Spec(spec) => format!(
                "Signed up as {} {} ({}).",
                spec.label(),
                spec.class().label(),
                spec.role().label()
            ),
            SignupRequest::Status(status) => {
                format!("Marked as {} {}.", status.emoji(), status.label())
            }
            SignupRequest::Offspec(offspec) => {
                format!("Offspec set to {} {}.", offspec.emoji(), offspec.label())
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        model::category::{Class, OffspecRole, Spec, Status},
        service::signup::mutator::SignupChange,
    };

    fn updated() -> SignupOutcome {
        SignupOutcome::Updated(SignupChange {
            removed: None,
            added: None,
        })
    }

    #[test]
    fn describes_updates() {
        assert_eq!(
            outcome_message(SignupRequest::Spec(Spec::Guardian), updated()),
            "Signed up as Guardian Druid (Tank)."
        );
        assert!(outcome_message(SignupRequest::Status(Status::Bench), updated())
            .starts_with("Marked as"));
    }

    #[test]
    fn explains_missing_class() {
        assert_eq!(
            outcome_message(
                SignupRequest::Offspec(OffspecRole::Healer),
                SignupOutcome::PrimaryRequired
            ),
            "Sign up with a class or status before picking an offspec role."
        );
    }

    #[test]
    fn reports_repeated_offspec() {
        assert_eq!(
            outcome_message(
                SignupRequest::Offspec(OffspecRole::Tank),
                SignupOutcome::AlreadySelected(Category::Offspec(OffspecRole::Tank))
            ),
            "Your offspec is already Offspec Tank."
        );
    }

    #[test]
    fn class_choice_offers_spec_select() {
        let json = serde_json::to_value(reply(
            9,
            SignupRequest::Class(Class::Paladin),
            SignupOutcome::AlreadySelected(Class::Paladin.into()),
        ))
        .unwrap();

        assert_eq!(json["components"][0]["components"][0]["custom_id"], "raid:9:spec");
    }

    #[test]
    fn status_choice_has_no_controls() {
        let json = serde_json::to_value(reply(
            9,
            SignupRequest::Status(Status::Late),
            updated(),
        ))
        .unwrap();

        assert!(json.get("components").is_none());
    }
}
