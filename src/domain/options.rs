use crate::utils::error::{RandomUserError, Result};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Gender {
    #[default]
    Male,
    Female,
}

impl Gender {
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];

    /// Value sent as the `gender` query parameter.
    pub fn as_query(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_query())
    }
}

impl FromStr for Gender {
    type Err = RandomUserError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "male" | "m" => Ok(Gender::Male),
            "female" | "f" => Ok(Gender::Female),
            _ => Err(RandomUserError::InvalidConfigValueError {
                field: "gender".to_string(),
                value: s.to_string(),
                reason: "Expected 'male' or 'female'".to_string(),
            }),
        }
    }
}

macro_rules! nationalities {
    ($($variant:ident => ($code:literal, $label:literal)),+ $(,)?) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Nationality {
            $($variant),+
        }

        impl Nationality {
            pub const ALL: &'static [Nationality] = &[$(Nationality::$variant),+];

            /// Two-letter code sent as the `nat` query parameter.
            pub fn code(&self) -> &'static str {
                match self {
                    $(Nationality::$variant => $code),+
                }
            }

            pub fn label(&self) -> &'static str {
                match self {
                    $(Nationality::$variant => $label),+
                }
            }
        }
    };
}

nationalities! {
    Au => ("AU", "Australia"),
    Br => ("BR", "Brazil"),
    Gb => ("GB", "United Kingdom"),
    De => ("DE", "Germany"),
    Ch => ("CH", "Switzerland"),
    Dk => ("DK", "Denmark"),
    Es => ("ES", "Spain"),
    Fi => ("FI", "Finland"),
    Ie => ("IE", "Ireland"),
    In => ("IN", "India"),
    Ir => ("IR", "Iran"),
    Ca => ("CA", "Canada"),
    Mx => ("MX", "Mexico"),
    Nl => ("NL", "Netherlands"),
    No => ("NO", "Norway"),
    Nz => ("NZ", "New Zealand"),
    Rs => ("RS", "Serbia"),
    Us => ("US", "United States"),
    Tr => ("TR", "Turkey"),
    Ua => ("UA", "Ukraine"),
    Fr => ("FR", "France"),
}

impl Default for Nationality {
    fn default() -> Self {
        Nationality::Us
    }
}

impl fmt::Display for Nationality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Nationality {
    type Err = RandomUserError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        Nationality::ALL
            .iter()
            .copied()
            .find(|n| n.code().eq_ignore_ascii_case(wanted) || n.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| RandomUserError::InvalidConfigValueError {
                field: "nat".to_string(),
                value: s.to_string(),
                reason: format!(
                    "Unsupported nationality. Valid codes: {}",
                    Nationality::ALL
                        .iter()
                        .map(|n| n.code())
                        .collect::<Vec<_>>()
                        .join(", ")
                ),
            })
    }
}
