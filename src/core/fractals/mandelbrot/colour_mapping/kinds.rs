use std::error::Error;
use std::fmt;
use std::str::FromStr;

/// The closed set of palettes an iteration count can be coloured with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColourScheme {
    #[default]
    Grayscale,
    Rainbow,
    Sunset,
    Ocean,
}

impl ColourScheme {
    pub const ALL: &'static [Self] = &[Self::Grayscale, Self::Rainbow, Self::Sunset, Self::Ocean];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Grayscale => "Grayscale",
            Self::Rainbow => "Rainbow",
            Self::Sunset => "Sunset",
            Self::Ocean => "Ocean",
        }
    }

    /// Lower-case tag used on the command line and by scheme pickers.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Grayscale => "grayscale",
            Self::Rainbow => "rainbow",
            Self::Sunset => "sunset",
            Self::Ocean => "ocean",
        }
    }
}

impl fmt::Display for ColourScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str((*self).display_name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColourSchemeParseError {
    pub tag: String,
}

impl fmt::Display for ColourSchemeParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown colour scheme '{}', expected one of: grayscale, rainbow, sunset, ocean",
            self.tag
        )
    }
}

impl Error for ColourSchemeParseError {}

impl FromStr for ColourScheme {
    type Err = ColourSchemeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();

        Self::ALL
            .iter()
            .copied()
            .find(|scheme| scheme.tag().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ColourSchemeParseError { tag: s.to_owned() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_array_has_default_first() {
        assert_eq!(ColourScheme::ALL.first(), Some(&ColourScheme::default()));
    }

    #[test]
    fn tags_parse_back_to_their_scheme() {
        for &scheme in ColourScheme::ALL {
            assert_eq!(scheme.tag().parse(), Ok(scheme));
            assert_eq!(scheme.display_name().parse(), Ok(scheme));
        }
    }

    #[test]
    fn parsing_ignores_case_and_surrounding_whitespace() {
        assert_eq!(" OCEAN ".parse(), Ok(ColourScheme::Ocean));
    }

    #[test]
    fn unknown_tag_is_rejected() {
        assert_eq!(
            "plasma".parse::<ColourScheme>(),
            Err(ColourSchemeParseError {
                tag: "plasma".to_owned()
            })
        );
        assert!("".parse::<ColourScheme>().is_err());
    }

    #[test]
    fn display_names_are_unique() {
        let names: Vec<&str> = ColourScheme::ALL.iter().map(|k| k.display_name()).collect();
        for (i, name) in names.iter().enumerate() {
            for (j, other) in names.iter().enumerate() {
                if i != j {
                    assert_ne!(name, other, "Duplicate display name: {}", name);
                }
            }
        }
    }
}
