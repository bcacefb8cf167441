use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Attendance {
    #[default]
    #[serde(rename = "")]
    Unset,
    #[serde(rename = "yes")]
    Yes,
    #[serde(rename = "no")]
    No,
}

impl Attendance {
    pub fn as_wire(self) -> &'static str {
        match self {
            Attendance::Unset => "",
            Attendance::Yes => "yes",
            Attendance::No => "no",
        }
    }

    pub fn is_answered(self) -> bool {
        self != Attendance::Unset
    }
}

impl FromStr for Attendance {
    type Err = FieldParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let value = raw.trim();
        if value.is_empty() {
            Ok(Attendance::Unset)
        } else if value.eq_ignore_ascii_case("yes") {
            Ok(Attendance::Yes)
        } else if value.eq_ignore_ascii_case("no") {
            Ok(Attendance::No)
        } else {
            Err(FieldParseError::Attendance(raw.to_string()))
        }
    }
}

/// Party size for an attending guest, always within `1..=5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct GuestCount(u8);

impl GuestCount {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(count: u8) -> Option<Self> {
        (Self::MIN..=Self::MAX).contains(&count).then_some(Self(count))
    }

    pub fn get(self) -> u8 {
        self.0
    }

    pub fn all() -> impl Iterator<Item = GuestCount> {
        (Self::MIN..=Self::MAX).map(GuestCount)
    }
}

impl Default for GuestCount {
    fn default() -> Self {
        Self(Self::MIN)
    }
}

impl TryFrom<u8> for GuestCount {
    type Error = FieldParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| FieldParseError::GuestCount(value.to_string()))
    }
}

impl From<GuestCount> for u8 {
    fn from(value: GuestCount) -> Self {
        value.0
    }
}

impl FromStr for GuestCount {
    type Err = FieldParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        raw.trim()
            .parse::<u8>()
            .ok()
            .and_then(Self::new)
            .ok_or_else(|| FieldParseError::GuestCount(raw.to_string()))
    }
}

impl fmt::Display for GuestCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldParseError {
    #[error("unknown form field '{0}'")]
    UnknownField(String),
    #[error("attendance must be 'yes' or 'no', got '{0}'")]
    Attendance(String),
    #[error("guest count must be between 1 and 5, got '{0}'")]
    GuestCount(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequiredField {
    Name,
    Attending,
}

/// A single-field edit coming from the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldUpdate {
    Name(String),
    Email(String),
    Attending(Attendance),
    GuestCount(GuestCount),
    DietaryNotes(String),
}

impl FieldUpdate {
    /// Builds an update from a wire field name and its raw text value.
    pub fn from_raw(field: &str, value: &str) -> Result<Self, FieldParseError> {
        match field {
            "name" => Ok(FieldUpdate::Name(value.to_string())),
            "email" => Ok(FieldUpdate::Email(value.to_string())),
            "attending" => value.parse().map(FieldUpdate::Attending),
            "guests" => value.parse().map(FieldUpdate::GuestCount),
            "dietaryRestrictions" => Ok(FieldUpdate::DietaryNotes(value.to_string())),
            other => Err(FieldParseError::UnknownField(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RsvpForm {
    pub name: String,
    pub email: String,
    pub attending: Attendance,
    pub guest_count: GuestCount,
    pub dietary_notes: String,
}

impl RsvpForm {
    pub fn apply(&mut self, update: FieldUpdate) {
        match update {
            FieldUpdate::Name(name) => self.name = name,
            FieldUpdate::Email(email) => self.email = email,
            FieldUpdate::Attending(attending) => {
                // Guest details only exist for a "yes" answer; leaving it drops them.
                if self.attending == Attendance::Yes && attending != Attendance::Yes {
                    self.guest_count = GuestCount::default();
                    self.dietary_notes.clear();
                }
                self.attending = attending;
            }
            FieldUpdate::GuestCount(count) => self.guest_count = count,
            FieldUpdate::DietaryNotes(notes) => self.dietary_notes = notes,
        }
    }

    pub fn missing_required(&self) -> Vec<RequiredField> {
        let mut missing = Vec::new();
        if self.name.trim().is_empty() {
            missing.push(RequiredField::Name);
        }
        if !self.attending.is_answered() {
            missing.push(RequiredField::Attending);
        }
        missing
    }

    pub fn shows_guest_details(&self) -> bool {
        self.attending == Attendance::Yes
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionAnchor {
    Home,
    Story,
    Details,
    Rsvp,
    Registry,
    Travel,
}

impl SectionAnchor {
    pub const ALL: [SectionAnchor; 6] = [
        SectionAnchor::Home,
        SectionAnchor::Story,
        SectionAnchor::Details,
        SectionAnchor::Rsvp,
        SectionAnchor::Registry,
        SectionAnchor::Travel,
    ];

    pub fn id(self) -> &'static str {
        match self {
            SectionAnchor::Home => "home",
            SectionAnchor::Story => "story",
            SectionAnchor::Details => "details",
            SectionAnchor::Rsvp => "rsvp",
            SectionAnchor::Registry => "registry",
            SectionAnchor::Travel => "travel",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SectionAnchor::Home => "Accueil",
            SectionAnchor::Story => "Notre Histoire",
            SectionAnchor::Details => "Détails",
            SectionAnchor::Rsvp => "RSVP",
            SectionAnchor::Registry => "Liste",
            SectionAnchor::Travel => "Hébergement",
        }
    }
}

impl FromStr for SectionAnchor {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        SectionAnchor::ALL
            .into_iter()
            .find(|anchor| anchor.id() == raw)
            .ok_or_else(|| format!("unknown section anchor '{raw}'"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guest_count_rejects_values_outside_party_range() {
        assert!(GuestCount::new(0).is_none());
        assert!(GuestCount::new(6).is_none());
        assert_eq!(GuestCount::new(5).map(GuestCount::get), Some(5));
        assert_eq!(GuestCount::default().get(), 1);
        assert!("7".parse::<GuestCount>().is_err());
        assert_eq!("3".parse::<GuestCount>().expect("parse"), GuestCount(3));
    }

    #[test]
    fn attendance_parses_wire_values() {
        assert_eq!("".parse::<Attendance>().expect("empty"), Attendance::Unset);
        assert_eq!("YES".parse::<Attendance>().expect("yes"), Attendance::Yes);
        assert_eq!(" no ".parse::<Attendance>().expect("no"), Attendance::No);
        assert!("maybe".parse::<Attendance>().is_err());
    }

    #[test]
    fn leaving_yes_clears_guest_details() {
        let mut form = RsvpForm::default();
        form.apply(FieldUpdate::Attending(Attendance::Yes));
        form.apply(FieldUpdate::GuestCount(GuestCount::new(4).expect("count")));
        form.apply(FieldUpdate::DietaryNotes("sans gluten".into()));

        form.apply(FieldUpdate::Attending(Attendance::No));
        assert_eq!(form.guest_count, GuestCount::default());
        assert!(form.dietary_notes.is_empty());
        assert!(!form.shows_guest_details());

        form.apply(FieldUpdate::Attending(Attendance::Yes));
        assert_eq!(form.guest_count, GuestCount::default());
        assert!(form.dietary_notes.is_empty());
    }

    #[test]
    fn reselecting_yes_keeps_guest_details() {
        let mut form = RsvpForm::default();
        form.apply(FieldUpdate::Attending(Attendance::Yes));
        form.apply(FieldUpdate::GuestCount(GuestCount::new(2).expect("count")));
        form.apply(FieldUpdate::Attending(Attendance::Yes));
        assert_eq!(form.guest_count.get(), 2);
    }

    #[test]
    fn whitespace_name_is_missing() {
        let mut form = RsvpForm::default();
        form.apply(FieldUpdate::Name("   ".into()));
        assert_eq!(
            form.missing_required(),
            vec![RequiredField::Name, RequiredField::Attending]
        );

        form.apply(FieldUpdate::Name("Jane Doe".into()));
        form.apply(FieldUpdate::Attending(Attendance::No));
        assert!(form.missing_required().is_empty());
    }

    #[test]
    fn raw_updates_use_wire_field_names() {
        assert_eq!(
            FieldUpdate::from_raw("guests", "2").expect("guests"),
            FieldUpdate::GuestCount(GuestCount(2))
        );
        assert_eq!(
            FieldUpdate::from_raw("dietaryRestrictions", "vegan").expect("notes"),
            FieldUpdate::DietaryNotes("vegan".into())
        );
        assert!(matches!(
            FieldUpdate::from_raw("phone", "0600000000"),
            Err(FieldParseError::UnknownField(_))
        ));
    }

    #[test]
    fn section_anchors_round_trip_through_ids() {
        for anchor in SectionAnchor::ALL {
            assert_eq!(anchor.id().parse::<SectionAnchor>(), Ok(anchor));
        }
    }
}
