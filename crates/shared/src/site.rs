//! Static copy for the invitation page.

use chrono::{Datelike, NaiveDate};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventCard {
    pub title: &'static str,
    pub time: &'static str,
    pub caption: &'static str,
    pub venue: &'static str,
    pub address: &'static [&'static str],
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteContent {
    pub couple: &'static str,
    pub tagline: &'static str,
    pub wedding_date: NaiveDate,
    pub rsvp_deadline: NaiveDate,
    pub story: &'static [&'static str],
    pub events: Vec<EventCard>,
    pub registry_blurb: &'static str,
    pub registry_url: &'static str,
    pub lodging: &'static str,
    pub getting_there: &'static [&'static str],
    pub closing_line: &'static str,
}

const STORY: &[&str] = &[
    "Tout a commencé il y a cinq ans, un soir au théâtre. Au programme : une pièce humoristique sur la vie de couple. Dans la salle, que des duos bien installés dans leur routine amoureuse. Et nous deux, seuls célibataires perdus au milieu de cette assemblée.",
    "À la sortie, Léa m'a lancé une invitation qui allait tout changer : \"Tu veux rencontrer mon chat ?\"",
    "Ensuite, tout s'est enchaîné à une vitesse folle : un appartement à deux, des voyages improvisés, et finalement plusieurs mois en Amérique latine.",
    "Aujourd'hui, on a décidé de prolonger l'aventure. Alors enfilez votre plus belle tenue et préparez-vous à célébrer notre amour !",
];

const GETTING_THERE: &[&str] = &[
    "Si vous ne disposez pas d'un véhicule, il est possible de se rendre à Genolhac par le train, 1h20 depuis Nîmes.",
    "Il faudra cependant s'organiser pour se rendre au lieu de la cérémonie. N'hésitez pas à nous contacter si vous souhaitez de l'aide pour trouver un covoiturage.",
];

impl Default for SiteContent {
    fn default() -> Self {
        Self {
            couple: "Léa & Thomas",
            tagline: "se marient !",
            wedding_date: NaiveDate::from_ymd_opt(2026, 6, 27).unwrap_or_default(),
            rsvp_deadline: NaiveDate::from_ymd_opt(2026, 3, 1).unwrap_or_default(),
            story: STORY,
            events: vec![
                EventCard {
                    title: "Cérémonie",
                    time: "15h00",
                    caption: "Promis, on se dira \"Oui\" !",
                    venue: "Eglise Notre Dame de l'Assomption",
                    address: &["Place de l'Eglise", "30450 Senechas"],
                },
                EventCard {
                    title: "Réception",
                    time: "17h00",
                    caption: "Cocktail, buffet et animations",
                    venue: "Mas Nouveau",
                    address: &["Avenue Pierre Olivier", "30450 Genolhac"],
                },
            ],
            registry_blurb: "Votre présence à notre mariage est le plus beau des cadeaux. Cependant, si vous souhaitez nous honorer d'un cadeau, vous pouvez consulter notre liste de mariage :",
            registry_url: "https://www.millemercismariage.com/leathomastrompette/liste.html",
            lodging: "Nous sommes actuellement en train de recenser les hôtels disponibles à proximité du lieu de la cérémonie. N'hésitez pas à nous contacter si vous souhaitez déjà réserver votre chambre.",
            getting_there: GETTING_THERE,
            closing_line: "Nous avons hâte de célébrer avec vous !",
        }
    }
}

const MONTHS_FR: [&str; 12] = [
    "janvier",
    "février",
    "mars",
    "avril",
    "mai",
    "juin",
    "juillet",
    "août",
    "septembre",
    "octobre",
    "novembre",
    "décembre",
];

pub fn format_date_fr(date: NaiveDate) -> String {
    let month = MONTHS_FR[date.month0() as usize];
    if date.day() == 1 {
        format!("1er {month} {}", date.year())
    } else {
        format!("{} {month} {}", date.day(), date.year())
    }
}
