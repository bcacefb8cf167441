use serde::{Deserialize, Serialize};

use crate::domain::{Attendance, GuestCount, RsvpForm};

/// JSON body posted to the form relay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RsvpPayload {
    pub name: String,
    pub email: String,
    pub attending: Attendance,
    pub guests: String,
    #[serde(rename = "dietaryRestrictions")]
    pub dietary_restrictions: String,
}

impl From<&RsvpForm> for RsvpPayload {
    /// Text fields go out as entered. Guest details are only sent with a "yes".
    fn from(form: &RsvpForm) -> Self {
        let (guests, dietary_restrictions) = if form.shows_guest_details() {
            (form.guest_count, form.dietary_notes.clone())
        } else {
            (GuestCount::default(), String::new())
        };
        Self {
            name: form.name.clone(),
            email: form.email.clone(),
            attending: form.attending,
            guests: guests.to_string(),
            dietary_restrictions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FieldUpdate;

    #[test]
    fn payload_carries_exactly_the_relay_keys() {
        let mut form = RsvpForm::default();
        form.apply(FieldUpdate::Name("Jane Doe".into()));
        form.apply(FieldUpdate::Attending(Attendance::Yes));
        form.apply(FieldUpdate::GuestCount(GuestCount::new(3).expect("count")));
        form.apply(FieldUpdate::DietaryNotes("végétarien".into()));

        let value = serde_json::to_value(RsvpPayload::from(&form)).expect("json");
        let object = value.as_object().expect("object");
        let mut keys: Vec<_> = object.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            vec!["attending", "dietaryRestrictions", "email", "guests", "name"]
        );
        assert_eq!(value["name"], "Jane Doe");
        assert_eq!(value["attending"], "yes");
        assert_eq!(value["guests"], "3");
        assert_eq!(value["dietaryRestrictions"], "végétarien");
    }

    #[test]
    fn unset_attendance_serializes_as_empty_string() {
        let value = serde_json::to_value(RsvpPayload::from(&RsvpForm::default())).expect("json");
        assert_eq!(value["attending"], "");
        assert_eq!(value["guests"], "1");
    }

    #[test]
    fn declined_answer_drops_guest_details() {
        let mut form = RsvpForm::default();
        form.apply(FieldUpdate::Name("Jane Doe".into()));
        form.apply(FieldUpdate::Attending(Attendance::No));
        form.apply(FieldUpdate::GuestCount(GuestCount::new(3).expect("count")));
        form.apply(FieldUpdate::DietaryNotes("vegan".into()));

        let payload = RsvpPayload::from(&form);
        assert_eq!(payload.guests, "1");
        assert_eq!(payload.dietary_restrictions, "");
    }

    #[test]
    fn text_fields_are_sent_as_entered() {
        let mut form = RsvpForm::default();
        form.apply(FieldUpdate::Name(" Jane Doe ".into()));
        form.apply(FieldUpdate::Email("jane@example.org ".into()));

        let payload = RsvpPayload::from(&form);
        assert_eq!(payload.name, " Jane Doe ");
        assert_eq!(payload.email, "jane@example.org ");
    }
}
