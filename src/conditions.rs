//! Weather condition catalogue keyed by OpenWeatherMap `weather[].main` labels

/// Condition groups reported by the current-conditions API
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Condition {
    Clear,
    Clouds,
    Rain,
    Drizzle,
    Mist,
    Haze,
    Thunderstorm,
    Snow,
    Fog,
    Smoke,
    Dust,
    Ash,
    Squall,
    Tornado,
    Other,
}

impl Condition {
    pub fn from_label(label: &str) -> Self {
        match label {
            "Clear" => Self::Clear,
            "Clouds" => Self::Clouds,
            "Rain" => Self::Rain,
            "Drizzle" => Self::Drizzle,
            "Mist" => Self::Mist,
            "Haze" => Self::Haze,
            "Thunderstorm" => Self::Thunderstorm,
            "Snow" => Self::Snow,
            "Fog" => Self::Fog,
            "Smoke" => Self::Smoke,
            "Dust" | "Sand" => Self::Dust,
            "Ash" => Self::Ash,
            "Squall" => Self::Squall,
            "Tornado" => Self::Tornado,
            _ => Self::Other,
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Self::Clear => "\u{2600}\u{fe0f}",
            Self::Clouds => "\u{2601}\u{fe0f}",
            Self::Rain => "\u{1f327}\u{fe0f}",
            Self::Drizzle => "\u{1f326}\u{fe0f}",
            Self::Mist | Self::Fog => "\u{1f32b}\u{fe0f}",
            Self::Haze => "\u{1f301}",
            Self::Thunderstorm => "\u{26c8}\u{fe0f}",
            Self::Snow => "\u{2744}\u{fe0f}",
            Self::Smoke => "\u{1f525}",
            Self::Dust => "\u{1f3dc}\u{fe0f}",
            Self::Ash => "\u{1f30b}",
            Self::Squall => "\u{1f4a8}",
            Self::Tornado => "\u{1f32a}\u{fe0f}",
            Self::Other => "\u{1f321}\u{fe0f}",
        }
    }

    /// Short advisory shown under the forecast
    pub fn summary(self) -> &'static str {
        match self {
            Self::Clear => {
                "Clear skies and plenty of sunshine. Temperatures peak around midday; \
                 wear sunscreen and stay hydrated outdoors."
            }
            Self::Clouds => {
                "Overcast skies with reduced sunlight. Temperatures stay moderate; \
                 heavier cloud cover can signal incoming rain."
            }
            Self::Rain => {
                "Rain showers expected. Roads may be slippery and low-lying areas can \
                 waterlog; carry an umbrella and drive carefully."
            }
            Self::Drizzle => {
                "Light intermittent drizzle. Surfaces may still turn slick; a light rain \
                 jacket is enough."
            }
            Self::Mist => {
                "Light mist is reducing visibility. Drive slowly with headlights on low beam."
            }
            Self::Haze => {
                "Hazy air from dust or pollution. Visibility and air quality are reduced; \
                 consider a mask outdoors."
            }
            Self::Thunderstorm => {
                "Thunderstorm with lightning and heavy rain. Stay indoors, unplug \
                 electronics and avoid open ground or trees."
            }
            Self::Snow => {
                "Snowfall in progress or expected. Expect slippery roads and limited \
                 visibility; dress warmly."
            }
            Self::Fog => {
                "Dense fog is severely limiting visibility. Use fog lights, keep your \
                 distance and expect travel delays."
            }
            Self::Smoke => {
                "Smoke in the air is degrading air quality. Stay indoors where possible \
                 and wear a mask outside."
            }
            Self::Dust => {
                "Dusty conditions with low visibility. Protect eyes and airways and \
                 limit time outdoors."
            }
            Self::Ash => {
                "Volcanic ash in the atmosphere. Keep windows closed and follow local \
                 advisories."
            }
            Self::Squall => {
                "Sudden bursts of strong wind and rain are likely. Secure loose objects \
                 and postpone travel."
            }
            Self::Tornado => {
                "Tornado activity reported. Take shelter on the lowest floor away from \
                 windows and follow local alerts."
            }
            Self::Other => "No specific summary available.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_label_known_groups() {
        assert_eq!(Condition::from_label("Clear"), Condition::Clear);
        assert_eq!(Condition::from_label("Clouds"), Condition::Clouds);
        assert_eq!(Condition::from_label("Thunderstorm"), Condition::Thunderstorm);
        assert_eq!(Condition::from_label("Sand"), Condition::Dust);
    }

    #[test]
    fn test_unknown_label_has_fallback_summary() {
        let condition = Condition::from_label("Meteor shower");
        assert_eq!(condition, Condition::Other);
        assert_eq!(condition.summary(), "No specific summary available.");
    }
}
