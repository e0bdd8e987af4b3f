//! Sign-up categories.
//!
//! Every list in an event's sign-up sheet is keyed by a [`Category`]. Categories fall into
//! two independent single-choice slots: the primary slot (a character class, or one of the
//! bench/late/tentative/absent statuses) and the offspec slot. Storage keys returned by the
//! `key` methods are persisted in the database and must stay stable.

use std::fmt;

/// Coarse raid role derived from a specialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Role {
    Tank,
    Healer,
    Dps,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Tank, Role::Healer, Role::Dps];

    pub fn key(self) -> &'static str {
        match self {
            Role::Tank => "tank",
            Role::Healer => "healer",
            Role::Dps => "dps",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|role| role.key() == key)
    }

    /// Derives the role for a raw specialization key such as `"protection"`.
    ///
    /// Specialization keys that appear under several classes (protection, holy,
    /// restoration, frost) always share a role, so the class is not needed. Unknown keys
    /// fall back to [`Role::Dps`].
    pub fn from_spec_key(key: &str) -> Self {
        Spec::ALL
            .into_iter()
            .find(|spec| spec.key() == key)
            .map(Spec::role)
            .unwrap_or(Role::Dps)
    }

    pub fn label(self) -> &'static str {
        match self {
            Role::Tank => "Tank",
            Role::Healer => "Healer",
            Role::Dps => "DPS",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Role::Tank => "🛡️",
            Role::Healer => "💚",
            Role::Dps => "⚔️",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Class {
    Warrior,
    Paladin,
    Hunter,
    Rogue,
    Priest,
    Shaman,
    Mage,
    Warlock,
    Monk,
    Druid,
    DemonHunter,
    DeathKnight,
    Evoker,
}

impl Class {
    pub const ALL: [Class; 13] = [
        Class::Warrior,
        Class::Paladin,
        Class::Hunter,
        Class::Rogue,
        Class::Priest,
        Class::Shaman,
        Class::Mage,
        Class::Warlock,
        Class::Monk,
        Class::Druid,
        Class::DemonHunter,
        Class::DeathKnight,
        Class::Evoker,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Class::Warrior => "warrior",
            Class::Paladin => "paladin",
            Class::Hunter => "hunter",
            Class::Rogue => "rogue",
            Class::Priest => "priest",
            Class::Shaman => "shaman",
            Class::Mage => "mage",
            Class::Warlock => "warlock",
            Class::Monk => "monk",
            Class::Druid => "druid",
            Class::DemonHunter => "demon_hunter",
            Class::DeathKnight => "death_knight",
            Class::Evoker => "evoker",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|class| class.key() == key)
    }

    pub fn label(self) -> &'static str {
        match self {
            Class::Warrior => "Warrior",
            Class::Paladin => "Paladin",
            Class::Hunter => "Hunter",
            Class::Rogue => "Rogue",
            Class::Priest => "Priest",
            Class::Shaman => "Shaman",
            Class::Mage => "Mage",
            Class::Warlock => "Warlock",
            Class::Monk => "Monk",
            Class::Druid => "Druid",
            Class::DemonHunter => "Demon Hunter",
            Class::DeathKnight => "Death Knight",
            Class::Evoker => "Evoker",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Class::Warrior => "🟫",
            Class::Paladin => "🩷",
            Class::Hunter => "🟩",
            Class::Rogue => "🟨",
            Class::Priest => "⬜",
            Class::Shaman => "🟦",
            Class::Mage => "🩵",
            Class::Warlock => "🟪",
            Class::Monk => "🍵",
            Class::Druid => "🟧",
            Class::DemonHunter => "🦇",
            Class::DeathKnight => "🟥",
            Class::Evoker => "🐉",
        }
    }

    /// Specializations available to this class, in display order.
    pub fn specs(self) -> &'static [Spec] {
        use Spec::*;

        match self {
            Class::Warrior => &[Arms, Fury, ProtectionWarrior],
            Class::Paladin => &[HolyPaladin, ProtectionPaladin, Retribution],
            Class::Hunter => &[BeastMastery, Marksmanship, Survival],
            Class::Rogue => &[Assassination, Outlaw, Subtlety],
            Class::Priest => &[Discipline, HolyPriest, Shadow],
            Class::Shaman => &[Elemental, Enhancement, RestorationShaman],
            Class::Mage => &[Arcane, Fire, FrostMage],
            Class::Warlock => &[Affliction, Demonology, Destruction],
            Class::Monk => &[Brewmaster, Mistweaver, Windwalker],
            Class::Druid => &[Balance, Feral, Guardian, RestorationDruid],
            Class::DemonHunter => &[Havoc, Vengeance],
            Class::DeathKnight => &[Blood, FrostDeathKnight, Unholy],
            Class::Evoker => &[Augmentation, Devastation, Preservation],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Spec {
    Arms,
    Fury,
    ProtectionWarrior,
    HolyPaladin,
    ProtectionPaladin,
    Retribution,
    BeastMastery,
    Marksmanship,
    Survival,
    Assassination,
    Outlaw,
    Subtlety,
    Discipline,
    HolyPriest,
    Shadow,
    Elemental,
    Enhancement,
    RestorationShaman,
    Arcane,
    Fire,
    FrostMage,
    Affliction,
    Demonology,
    Destruction,
    Brewmaster,
    Mistweaver,
    Windwalker,
    Balance,
    Feral,
    Guardian,
    RestorationDruid,
    Havoc,
    Vengeance,
    Blood,
    FrostDeathKnight,
    Unholy,
    Augmentation,
    Devastation,
    Preservation,
}

impl Spec {
    pub const ALL: [Spec; 39] = [
        Spec::Arms,
        Spec::Fury,
        Spec::ProtectionWarrior,
        Spec::HolyPaladin,
        Spec::ProtectionPaladin,
        Spec::Retribution,
        Spec::BeastMastery,
        Spec::Marksmanship,
        Spec::Survival,
        Spec::Assassination,
        Spec::Outlaw,
        Spec::Subtlety,
        Spec::Discipline,
        Spec::HolyPriest,
        Spec::Shadow,
        Spec::Elemental,
        Spec::Enhancement,
        Spec::RestorationShaman,
        Spec::Arcane,
        Spec::Fire,
        Spec::FrostMage,
        Spec::Affliction,
        Spec::Demonology,
        Spec::Destruction,
        Spec::Brewmaster,
        Spec::Mistweaver,
        Spec::Windwalker,
        Spec::Balance,
        Spec::Feral,
        Spec::Guardian,
        Spec::RestorationDruid,
        Spec::Havoc,
        Spec::Vengeance,
        Spec::Blood,
        Spec::FrostDeathKnight,
        Spec::Unholy,
        Spec::Augmentation,
        Spec::Devastation,
        Spec::Preservation,
    ];

    /// Looks up a specialization by its key within a class.
    pub fn from_key(class: Class, key: &str) -> Option<Self> {
        class.specs().iter().copied().find(|spec| spec.key() == key)
    }

    pub fn class(self) -> Class {
        use Spec::*;

        match self {
            Arms | Fury | ProtectionWarrior => Class::Warrior,
            HolyPaladin | ProtectionPaladin | Retribution => Class::Paladin,
            BeastMastery | Marksmanship | Survival => Class::Hunter,
            Assassination | Outlaw | Subtlety => Class::Rogue,
            Discipline | HolyPriest | Shadow => Class::Priest,
            Elemental | Enhancement | RestorationShaman => Class::Shaman,
            Arcane | Fire | FrostMage => Class::Mage,
            Affliction | Demonology | Destruction => Class::Warlock,
            Brewmaster | Mistweaver | Windwalker => Class::Monk,
            Balance | Feral | Guardian | RestorationDruid => Class::Druid,
            Havoc | Vengeance => Class::DemonHunter,
            Blood | FrostDeathKnight | Unholy => Class::DeathKnight,
            Augmentation | Devastation | Preservation => Class::Evoker,
        }
    }

    pub fn role(self) -> Role {
        use Spec::*;

        match self {
            ProtectionWarrior | ProtectionPaladin | Brewmaster | Guardian | Vengeance | Blood => {
                Role::Tank
            }
            HolyPaladin | Discipline | HolyPriest | RestorationShaman | Mistweaver
            | RestorationDruid | Preservation => Role::Healer,
            _ => Role::Dps,
        }
    }

    /// Storage key, unique within the owning class.
    pub fn key(self) -> &'static str {
        use Spec::*;

        match self {
            Arms => "arms",
            Fury => "fury",
            ProtectionWarrior | ProtectionPaladin => "protection",
            HolyPaladin | HolyPriest => "holy",
            Retribution => "retribution",
            BeastMastery => "beast_mastery",
            Marksmanship => "marksmanship",
            Survival => "survival",
            Assassination => "assassination",
            Outlaw => "outlaw",
            Subtlety => "subtlety",
            Discipline => "discipline",
            Shadow => "shadow",
            Elemental => "elemental",
            Enhancement => "enhancement",
            RestorationShaman | RestorationDruid => "restoration",
            Arcane => "arcane",
            Fire => "fire",
            FrostMage | FrostDeathKnight => "frost",
            Affliction => "affliction",
            Demonology => "demonology",
            Destruction => "destruction",
            Brewmaster => "brewmaster",
            Mistweaver => "mistweaver",
            Windwalker => "windwalker",
            Balance => "balance",
            Feral => "feral",
            Guardian => "guardian",
            Havoc => "havoc",
            Vengeance => "vengeance",
            Blood => "blood",
            Unholy => "unholy",
            Augmentation => "augmentation",
            Devastation => "devastation",
            Preservation => "preservation",
        }
    }

    pub fn label(self) -> &'static str {
        use Spec::*;

        match self {
            Arms => "Arms",
            Fury => "Fury",
            ProtectionWarrior | ProtectionPaladin => "Protection",
            HolyPaladin | HolyPriest => "Holy",
            Retribution => "Retribution",
            BeastMastery => "Beast Mastery",
            Marksmanship => "Marksmanship",
            Survival => "Survival",
            Assassination => "Assassination",
            Outlaw => "Outlaw",
            Subtlety => "Subtlety",
            Discipline => "Discipline",
            Shadow => "Shadow",
            Elemental => "Elemental",
            Enhancement => "Enhancement",
            RestorationShaman | RestorationDruid => "Restoration",
            Arcane => "Arcane",
            Fire => "Fire",
            FrostMage | FrostDeathKnight => "Frost",
            Affliction => "Affliction",
            Demonology => "Demonology",
            Destruction => "Destruction",
            Brewmaster => "Brewmaster",
            Mistweaver => "Mistweaver",
            Windwalker => "Windwalker",
            Balance => "Balance",
            Feral => "Feral",
            Guardian => "Guardian",
            Havoc => "Havoc",
            Vengeance => "Vengeance",
            Blood => "Blood",
            Unholy => "Unholy",
            Augmentation => "Augmentation",
            Devastation => "Devastation",
            Preservation => "Preservation",
        }
    }
}

/// Non-class entries of the primary slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Status {
    Bench,
    Late,
    Tentative,
    Absent,
}

impl Status {
    pub const ALL: [Status; 4] = [
        Status::Bench,
        Status::Late,
        Status::Tentative,
        Status::Absent,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Status::Bench => "bench",
            Status::Late => "late",
            Status::Tentative => "tentative",
            Status::Absent => "absent",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.key() == key)
    }

    pub fn label(self) -> &'static str {
        match self {
            Status::Bench => "Bench",
            Status::Late => "Late",
            Status::Tentative => "Tentative",
            Status::Absent => "Absent",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Status::Bench => "🪑",
            Status::Late => "⏰",
            Status::Tentative => "❔",
            Status::Absent => "❌",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum OffspecRole {
    Tank,
    Healer,
    Dps,
    RangedDps,
}

impl OffspecRole {
    pub const ALL: [OffspecRole; 4] = [
        OffspecRole::Tank,
        OffspecRole::Healer,
        OffspecRole::Dps,
        OffspecRole::RangedDps,
    ];

    pub fn key(self) -> &'static str {
        match self {
            OffspecRole::Tank => "offspec_tank",
            OffspecRole::Healer => "offspec_healer",
            OffspecRole::Dps => "offspec_dps",
            OffspecRole::RangedDps => "offspec_ranged_dps",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|role| role.key() == key)
    }

    pub fn label(self) -> &'static str {
        match self {
            OffspecRole::Tank => "Offspec Tank",
            OffspecRole::Healer => "Offspec Healer",
            OffspecRole::Dps => "Offspec DPS",
            OffspecRole::RangedDps => "Offspec Ranged DPS",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            OffspecRole::Tank => "🛡️",
            OffspecRole::Healer => "💚",
            OffspecRole::Dps => "⚔️",
            OffspecRole::RangedDps => "🏹",
        }
    }
}

/// One entry of the primary single-choice slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PrimaryCategory {
    Class(Class),
    Status(Status),
}

impl PrimaryCategory {
    pub fn key(self) -> &'static str {
        match self {
            PrimaryCategory::Class(class) => class.key(),
            PrimaryCategory::Status(status) => status.key(),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PrimaryCategory::Class(class) => class.label(),
            PrimaryCategory::Status(status) => status.label(),
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            PrimaryCategory::Class(class) => class.emoji(),
            PrimaryCategory::Status(status) => status.emoji(),
        }
    }

    pub fn class(self) -> Option<Class> {
        match self {
            PrimaryCategory::Class(class) => Some(class),
            PrimaryCategory::Status(_) => None,
        }
    }
}

impl From<Class> for PrimaryCategory {
    fn from(class: Class) -> Self {
        PrimaryCategory::Class(class)
    }
}

impl From<Status> for PrimaryCategory {
    fn from(status: Status) -> Self {
        PrimaryCategory::Status(status)
    }
}

/// Key of one list in an event's sign-up sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Primary(PrimaryCategory),
    Offspec(OffspecRole),
}

impl Category {
    pub fn key(self) -> &'static str {
        match self {
            Category::Primary(primary) => primary.key(),
            Category::Offspec(offspec) => offspec.key(),
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        if let Some(class) = Class::from_key(key) {
            return Some(class.into());
        }
        if let Some(status) = Status::from_key(key) {
            return Some(status.into());
        }
        OffspecRole::from_key(key).map(Category::Offspec)
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Primary(primary) => primary.label(),
            Category::Offspec(offspec) => offspec.label(),
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Category::Primary(primary) => primary.emoji(),
            Category::Offspec(offspec) => offspec.emoji(),
        }
    }
}

impl From<PrimaryCategory> for Category {
    fn from(primary: PrimaryCategory) -> Self {
        Category::Primary(primary)
    }
}

impl From<Class> for Category {
    fn from(class: Class) -> Self {
        Category::Primary(class.into())
    }
}

impl From<Status> for Category {
    fn from(status: Status) -> Self {
        Category::Primary(status.into())
    }
}

impl From<OffspecRole> for Category {
    fn from(offspec: OffspecRole) -> Self {
        Category::Offspec(offspec)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.emoji(), self.label())
    }
}
