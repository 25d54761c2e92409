//! Phone regions and their mobile numbering patterns.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::str::FromStr;

static ID_ID: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(\+?62|0)8(1[123456789]|2[1238]|3[1238]|5[12356789]|7[78]|9[56789]|8[123456789])([\s?|\d]{5,11})$",
    )
    .expect("id-ID pattern is a valid regex")
});

static MS_MY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\+?60|0)1(([0145](-|\s)?\d{7,8})|([236-9](-|\s)?\d{7}))$")
        .expect("ms-MY pattern is a valid regex")
});

static EN_US: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^((\+1|1)?( |-)?)?(\([2-9][0-9]{2}\)|[2-9][0-9]{2})( |-)?([2-9][0-9]{2}( |-)?[0-9]{4})$",
    )
    .expect("en-US pattern is a valid regex")
});

static EN_GB: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\+?44|0)7\d{9}$").expect("en-GB pattern is a valid regex"));

/// Region whose mobile numbering plan phone numbers are checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PhoneRegion {
    /// Indonesia
    #[default]
    IdId,
    /// Malaysia
    MsMy,
    /// United States
    EnUs,
    /// United Kingdom
    EnGb,
}

impl PhoneRegion {
    /// All supported regions.
    pub const ALL: [PhoneRegion; 4] = [Self::IdId, Self::MsMy, Self::EnUs, Self::EnGb];

    /// Locale-style code, e.g. `id-ID`.
    pub fn code(self) -> &'static str {
        match self {
            Self::IdId => "id-ID",
            Self::MsMy => "ms-MY",
            Self::EnUs => "en-US",
            Self::EnGb => "en-GB",
        }
    }

    /// Whether `phone` is a mobile number in this region.
    pub fn is_mobile(self, phone: &str) -> bool {
        let pattern = match self {
            Self::IdId => &ID_ID,
            Self::MsMy => &MS_MY,
            Self::EnUs => &EN_US,
            Self::EnGb => &EN_GB,
        };
        pattern.is_match(phone)
    }
}

impl FromStr for PhoneRegion {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|region| region.code().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ValidationError::UnknownRegion(s.to_string()))
    }
}

impl fmt::Display for PhoneRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
