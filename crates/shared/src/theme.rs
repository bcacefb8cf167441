//! Semantic colour roles and the palette tokens they resolve to.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeRole {
    BackgroundMain,
    BackgroundLight,
    BackgroundNav,
    BackgroundCard,
    PrimaryText,
    PrimaryTextHover,
    PrimaryBg,
    PrimaryBgHover,
    PrimaryIcon,
    TextMain,
    TextHero,
    TextLight,
    FooterBg,
    Border,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid colour token '{0}', expected #rrggbb")]
pub struct InvalidColorToken(pub String);

impl Rgb {
    pub fn from_hex(token: &str) -> Result<Self, InvalidColorToken> {
        let invalid = || InvalidColorToken(token.to_string());
        let hex = token.strip_prefix('#').ok_or_else(invalid)?;
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(invalid());
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|_| invalid())
        };
        Ok(Rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    tokens: BTreeMap<ThemeRole, Rgb>,
}

impl Theme {
    pub fn color(&self, role: ThemeRole) -> Rgb {
        self.tokens.get(&role).copied().unwrap_or(Rgb(0, 0, 0))
    }

    pub fn with_token(mut self, role: ThemeRole, token: &str) -> Result<Self, InvalidColorToken> {
        self.tokens.insert(role, Rgb::from_hex(token)?);
        Ok(self)
    }
}

const CREME_50: Rgb = Rgb(0xff, 0xfe, 0xf9);
const CREME_100: Rgb = Rgb(0xfa, 0xf8, 0xf0);
const CREME_200: Rgb = Rgb(0xf5, 0xf2, 0xe8);
const CREME_300: Rgb = Rgb(0xf0, 0xea, 0xd6);
const CREME_400: Rgb = Rgb(0xeb, 0xe2, 0xc4);
const NEUTRAL_100: Rgb = Rgb(0xfa, 0xfa, 0xfa);
const NEUTRAL_200: Rgb = Rgb(0xf5, 0xf5, 0xf5);
const OLIVE_700: Rgb = Rgb(0x5a, 0x5c, 0x33);
const OLIVE_800: Rgb = Rgb(0x4a, 0x4b, 0x2a);
const OLIVE_900: Rgb = Rgb(0x3a, 0x3b, 0x22);

impl Default for Theme {
    fn default() -> Self {
        let tokens = BTreeMap::from([
            (ThemeRole::BackgroundMain, CREME_100),
            (ThemeRole::BackgroundLight, CREME_50),
            (ThemeRole::BackgroundNav, CREME_200),
            (ThemeRole::BackgroundCard, NEUTRAL_100),
            (ThemeRole::PrimaryText, OLIVE_800),
            (ThemeRole::PrimaryTextHover, OLIVE_700),
            (ThemeRole::PrimaryBg, CREME_300),
            (ThemeRole::PrimaryBgHover, CREME_400),
            (ThemeRole::PrimaryIcon, OLIVE_700),
            (ThemeRole::TextMain, OLIVE_800),
            (ThemeRole::TextHero, CREME_50),
            (ThemeRole::TextLight, CREME_200),
            (ThemeRole::FooterBg, OLIVE_900),
            (ThemeRole::Border, NEUTRAL_200),
        ]);
        Self { tokens }
    }
}
