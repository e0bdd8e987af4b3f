//! Raid summary rendering.
//!
//! [`render`] turns an event's sheet into counts and display blocks. [`SummaryService`]
//! loads the sheet, resolves display names through the guild host and prunes members who
//! have left the guild before rendering.

use sea_orm::{DatabaseConnection, TransactionTrait};
use std::collections::{BTreeSet, HashMap};

use crate::{
    data::{
        raid_event::RaidEventRepository, raid_participation::RaidParticipationRepository,
        raid_signup::RaidSignupRepository,
    },
    error::AppError,
    model::{
        category::{Category, Class, OffspecRole, PrimaryCategory, Role, Status},
        participation::Participation,
        raid_event::RaidEvent,
        sheet::SignupSheet,
    },
    service::{host::GuildHost, signup::EventLocks},
};

/// Rendered view of an event's sign-ups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RaidSummary {
    /// Distinct members in any class list.
    pub signed: usize,
    /// Members in the late list, counted apart from `signed`.
    pub late: usize,
    pub tanks: usize,
    pub healers: usize,
    pub dps: usize,
    /// One block per non-empty class list, in class order.
    pub classes: Vec<ClassBlock>,
    /// Bench/late, tentative/absent and offspec groups that have members.
    pub groups: Vec<SummaryBlock>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassBlock {
    pub class: Class,
    pub lines: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryBlock {
    pub title: &'static str,
    pub lines: Vec<String>,
}

const GROUPS: [(&str, [Category; 2]); 4] = [
    (
        "Bench & Late",
        [
            Category::Primary(PrimaryCategory::Status(Status::Bench)),
            Category::Primary(PrimaryCategory::Status(Status::Late)),
        ],
    ),
    (
        "Tentative & Absent",
        [
            Category::Primary(PrimaryCategory::Status(Status::Tentative)),
            Category::Primary(PrimaryCategory::Status(Status::Absent)),
        ],
    ),
    (
        "Offspec Tank & Healer",
        [
            Category::Offspec(OffspecRole::Tank),
            Category::Offspec(OffspecRole::Healer),
        ],
    ),
    (
        "Offspec DPS & Ranged DPS",
        [
            Category::Offspec(OffspecRole::Dps),
            Category::Offspec(OffspecRole::RangedDps),
        ],
    ),
];

/// Removes every resolved member missing from `names` from all lists.
///
/// Only ids in `resolved` were looked up; members who signed up after the lookup are
/// kept. Returns the removed member ids.
pub fn prune_departed(
    sheet: &mut SignupSheet,
    resolved: &BTreeSet<u64>,
    names: &HashMap<u64, String>,
) -> BTreeSet<u64> {
    sheet.retain_members(|user_id| !resolved.contains(&user_id) || names.contains_key(&user_id))
}

/// Builds the summary of a sheet.
///
/// In preview mode class lines show only names; otherwise each line also carries the
/// member's chosen spec when there is one. Members without a resolved name are shown as
/// a mention.
pub fn render(
    sheet: &SignupSheet,
    participation: &HashMap<u64, Participation>,
    names: &HashMap<u64, String>,
    preview: bool,
) -> RaidSummary {
    let display = |user_id: u64| {
        names
            .get(&user_id)
            .cloned()
            .unwrap_or_else(|| format!("<@{}>", user_id))
    };

    let mut class_members = BTreeSet::new();
    let mut classes = Vec::new();

    for class in Class::ALL {
        let members = sheet.members(class.into());
        if members.is_empty() {
            continue;
        }

        let lines = members
            .iter()
            .map(|user_id| {
                class_members.insert(*user_id);

                let name = display(*user_id);
                let spec = participation.get(user_id).and_then(|p| p.spec);
                match spec {
                    Some(spec) if !preview => format!("{} - {}", name, spec.label()),
                    _ => name,
                }
            })
            .collect();

        classes.push(ClassBlock { class, lines });
    }

    let count_role = |role: Role| {
        class_members
            .iter()
            .filter(|user_id| participation.get(*user_id).and_then(|p| p.role) == Some(role))
            .count()
    };

    let groups = GROUPS
        .iter()
        .filter_map(|(title, categories)| {
            let lines: Vec<String> = categories
                .iter()
                .flat_map(|category| {
                    sheet
                        .members(*category)
                        .iter()
                        .map(move |user_id| (category.emoji(), *user_id))
                })
                .map(|(emoji, user_id)| format!("{} {}", emoji, display(user_id)))
                .collect();

            (!lines.is_empty()).then_some(SummaryBlock {
                title: *title,
                lines,
            })
        })
        .collect();

    RaidSummary {
        signed: class_members.len(),
        late: sheet.members(Status::Late.into()).len(),
        tanks: count_role(Role::Tank),
        healers: count_role(Role::Healer),
        dps: count_role(Role::Dps),
        classes,
        groups,
    }
}

pub struct SummaryService<'a, H: GuildHost> {
    db: &'a DatabaseConnection,
    host: &'a H,
    locks: &'a EventLocks,
}

impl<'a, H: GuildHost> SummaryService<'a, H> {
    pub fn new(db: &'a DatabaseConnection, host: &'a H, locks: &'a EventLocks) -> Self {
        Self { db, host, locks }
    }

    /// Loads an event and renders its current summary
    ///
    /// Display names are fetched before the event's lock is taken so sign-ups are not
    /// held up by Discord. Under the lock the sheet is re-read and members the guild no
    /// longer knows are removed from every list and their participation records deleted
    /// before counting. If member resolution fails the error is returned and nothing is
    /// pruned.
    ///
    /// # Returns
    /// - `Ok((RaidEvent, RaidSummary))`: The event and its rendered summary
    /// - `Err(AppError::NotFound)`: Event doesn't exist
    pub async fn refresh(
        &self,
        event_id: i32,
        preview: bool,
    ) -> Result<(RaidEvent, RaidSummary), AppError> {
        let event = self.find_event(event_id).await?;
        let resolved = RaidSignupRepository::new(self.db)
            .get_sheet(event_id)
            .await?
            .member_ids();
        let names = self
            .host
            .resolve_members(event.guild_id, &resolved)
            .await?;

        let _guard = self.locks.acquire(event_id).await;

        let event = self.find_event(event_id).await?;
        let mut sheet = RaidSignupRepository::new(self.db)
            .get_sheet(event_id)
            .await?;
        let mut participation = RaidParticipationRepository::new(self.db)
            .get_by_event(event_id)
            .await?;

        let departed = prune_departed(&mut sheet, &resolved, &names);
        if !departed.is_empty() {
            let departed: Vec<u64> = departed.into_iter().collect();

            let txn = self.db.begin().await?;
            RaidSignupRepository::new(&txn)
                .remove_members(event_id, &departed)
                .await?;
            RaidParticipationRepository::new(&txn)
                .delete_members(event_id, &departed)
                .await?;
            txn.commit().await?;

            for user_id in &departed {
                participation.remove(user_id);
            }

            tracing::info!(
                "Pruned {} departed member(s) from raid event {}",
                departed.len(),
                event_id
            );
        }

        let summary = render(&sheet, &participation, &names, preview);

        Ok((event, summary))
    }

    async fn find_event(&self, event_id: i32) -> Result<RaidEvent, AppError> {
        RaidEventRepository::new(self.db)
            .get_event(event_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Raid event not found".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::category::Spec;
    use crate::service::host::mock::MockHost;
    use test_utils::{builder::TestBuilder, factory};

    fn names(entries: &[(u64, &str)]) -> HashMap<u64, String> {
        entries
            .iter()
            .map(|(id, name)| (*id, name.to_string()))
            .collect()
    }

    fn participation(user_id: u64, spec: Option<Spec>) -> (u64, Participation) {
        let mut record = Participation::new(1, 100, user_id);
        record.class = spec.map(Spec::class);
        record.spec = spec;
        record.role = spec.map(Spec::role);
        (user_id, record)
    }

    #[test]
    fn counts_roles_and_lists_specs() {
        let sheet = SignupSheet::from_entries([
            (Class::Warrior.into(), 1),
            (Class::Priest.into(), 2),
            (Class::Priest.into(), 3),
            (Class::Mage.into(), 4),
            (Status::Late.into(), 5),
            (OffspecRole::Healer.into(), 1),
        ]);
        let records = HashMap::from([
            participation(1, Some(Spec::ProtectionWarrior)),
            participation(2, Some(Spec::HolyPriest)),
            participation(3, Some(Spec::Shadow)),
            participation(4, None),
        ]);
        let names = names(&[(1, "Tanky"), (2, "Holy"), (3, "Shade"), (4, "Blink"), (5, "Slow")]);

        let summary = render(&sheet, &records, &names, false);

        assert_eq!(summary.signed, 4);
        assert_eq!(summary.late, 1);
        assert_eq!((summary.tanks, summary.healers, summary.dps), (1, 1, 1));
        assert_eq!(
            summary.classes,
            vec![
                ClassBlock {
                    class: Class::Warrior,
                    lines: vec!["Tanky - Protection".to_string()],
                },
                ClassBlock {
                    class: Class::Priest,
                    lines: vec!["Holy - Holy".to_string(), "Shade - Shadow".to_string()],
                },
                ClassBlock {
                    class: Class::Mage,
                    lines: vec!["Blink".to_string()],
                },
            ]
        );
        assert_eq!(
            summary.groups,
            vec![
                SummaryBlock {
                    title: "Bench & Late",
                    lines: vec!["⏰ Slow".to_string()],
                },
                SummaryBlock {
                    title: "Offspec Tank & Healer",
                    lines: vec!["💚 Tanky".to_string()],
                },
            ]
        );
    }

    #[test]
    fn preview_omits_specs() {
        let sheet = SignupSheet::from_entries([(Class::Rogue.into(), 1)]);
        let records = HashMap::from([participation(1, Some(Spec::Outlaw))]);

        let summary = render(&sheet, &records, &names(&[(1, "Stab")]), true);

        assert_eq!(summary.classes[0].lines, vec!["Stab".to_string()]);
        assert_eq!(summary.dps, 1);
    }

    #[test]
    fn empty_sheet_renders_no_blocks() {
        let summary = render(&SignupSheet::new(), &HashMap::new(), &HashMap::new(), false);

        assert_eq!(summary.signed, 0);
        assert!(summary.classes.is_empty());
        assert!(summary.groups.is_empty());
    }

    #[test]
    fn pruning_removes_member_from_every_list() {
        let mut sheet = SignupSheet::from_entries([
            (Class::Hunter.into(), 1),
            (Class::Hunter.into(), 2),
            (OffspecRole::RangedDps.into(), 2),
        ]);
        let names = names(&[(1, "Stays")]);
        let resolved = sheet.member_ids();

        let removed = prune_departed(&mut sheet, &resolved, &names);
        let summary = render(&sheet, &HashMap::new(), &names, false);

        assert_eq!(removed.into_iter().collect::<Vec<_>>(), vec![2]);
        assert_eq!(sheet.member_ids().into_iter().collect::<Vec<_>>(), vec![1]);
        assert_eq!(summary.signed, 1);
        assert!(summary.groups.is_empty());
    }

    #[test]
    fn pruning_keeps_members_who_joined_after_lookup() {
        let mut sheet = SignupSheet::from_entries([
            (Class::Mage.into(), 1),
            (Class::Mage.into(), 2),
            (Class::Mage.into(), 3),
        ]);
        let resolved = BTreeSet::from([1, 2]);

        let removed = prune_departed(&mut sheet, &resolved, &names(&[(1, "Frosty")]));

        assert_eq!(removed.into_iter().collect::<Vec<_>>(), vec![2]);
        assert_eq!(sheet.members(Class::Mage.into()), &[1, 3]);
    }

    #[tokio::test]
    async fn refresh_does_not_hold_lock_while_resolving_members() -> Result<(), AppError> {
        let test = TestBuilder::new().with_raid_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let locks = EventLocks::new();

        let event = factory::create_raid_event(db, "123").await?;
        factory::create_signup(db, event.id, "1", "mage").await?;

        let host = MockHost {
            resolve_delay: Some(std::time::Duration::from_millis(200)),
            ..MockHost::with_members([(1, "Frosty")])
        };
        let service = SummaryService::new(db, &host, &locks);

        let (refreshed, lock_wait) = tokio::join!(service.refresh(event.id, false), async {
            tokio::time::sleep(std::time::Duration::from_millis(50)).await;
            let started = std::time::Instant::now();
            drop(locks.acquire(event.id).await);
            started.elapsed()
        });

        refreshed?;
        assert!(lock_wait < std::time::Duration::from_millis(100));

        Ok(())
    }

    #[tokio::test]
    async fn refresh_persists_pruned_state() -> Result<(), AppError> {
        let test = TestBuilder::new().with_raid_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let locks = EventLocks::new();

        let (event, _signup, _participation) = factory::helpers::create_event_with_signup(
            db, "123", "1", "warrior", "arms", "dps",
        )
        .await?;
        factory::create_signup(db, event.id, "2", "warrior").await?;
        factory::create_participation(db, event.id, "2").await?;

        let host = MockHost::with_members([(1, "Stays")]);
        let service = SummaryService::new(db, &host, &locks);
        let (_event, summary) = service.refresh(event.id, false).await?;

        assert_eq!(summary.signed, 1);
        assert_eq!(summary.classes[0].lines, vec!["Stays - Arms".to_string()]);

        let sheet = RaidSignupRepository::new(db).get_sheet(event.id).await?;
        assert!(!sheet.member_ids().contains(&2));
        let records = RaidParticipationRepository::new(db)
            .get_by_event(event.id)
            .await?;
        assert!(!records.contains_key(&2));

        Ok(())
    }

    #[tokio::test]
    async fn refresh_keeps_state_when_members_unavailable() -> Result<(), AppError> {
        let test = TestBuilder::new().with_raid_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let locks = EventLocks::new();

        let event = factory::create_raid_event(db, "123").await?;
        factory::create_signup(db, event.id, "1", "mage").await?;

        let host = MockHost {
            members_unavailable: true,
            ..Default::default()
        };
        let service = SummaryService::new(db, &host, &locks);

        assert!(service.refresh(event.id, false).await.is_err());
        let sheet = RaidSignupRepository::new(db).get_sheet(event.id).await?;
        assert!(sheet.contains(Class::Mage.into(), 1));

        Ok(())
    }
}
