//! WMO weather interpretation codes as reported by Open-Meteo.

/// Every code [`describe`] knows a label for, in ascending order.
pub const KNOWN_CODES: [i64; 28] = [
    0, 1, 2, 3, 45, 48, 51, 53, 55, 56, 57, 61, 63, 65, 66, 67, 71, 73, 75, 77, 80, 81, 82, 85,
    86, 95, 96, 99,
];

/// Label used for any code outside the table.
pub const UNKNOWN: &str = "Unknown";

/// Converts a WMO weather code to a human-readable condition.
pub fn describe(code: i64) -> &'static str {
    match code {
        // Clear / cloudy
        0 => "Clear",
        1 => "Mainly clear",
        2 => "Partly cloudy",
        3 => "Overcast",
        // Fog
        45 => "Fog",
        48 => "Depositing rime fog",
        // Drizzle
        51 => "Light drizzle",
        53 => "Drizzle",
        55 => "Dense drizzle",
        56 | 57 => "Freezing drizzle",
        // Rain
        61 => "Slight rain",
        63 => "Rain",
        65 => "Heavy rain",
        66 | 67 => "Freezing rain",
        // Snow
        71 => "Slight snow",
        73 => "Snow",
        75 => "Heavy snow",
        77 => "Snow grains",
        // Showers
        80..=82 => "Rain showers",
        85 | 86 => "Snow showers",
        // Thunderstorm
        95 | 96 | 99 => "Thunderstorm",
        _ => UNKNOWN,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_known_code_has_its_label() {
        let expected = [
            (0, "Clear"),
            (1, "Mainly clear"),
            (2, "Partly cloudy"),
            (3, "Overcast"),
            (45, "Fog"),
            (48, "Depositing rime fog"),
            (51, "Light drizzle"),
            (53, "Drizzle"),
            (55, "Dense drizzle"),
            (56, "Freezing drizzle"),
            (57, "Freezing drizzle"),
            (61, "Slight rain"),
            (63, "Rain"),
            (65, "Heavy rain"),
            (66, "Freezing rain"),
            (67, "Freezing rain"),
            (71, "Slight snow"),
            (73, "Snow"),
            (75, "Heavy snow"),
            (77, "Snow grains"),
            (80, "Rain showers"),
            (81, "Rain showers"),
            (82, "Rain showers"),
            (85, "Snow showers"),
            (86, "Snow showers"),
            (95, "Thunderstorm"),
            (96, "Thunderstorm"),
            (99, "Thunderstorm"),
        ];

        for (code, label) in expected {
            assert_eq!(describe(code), label, "code {code}");
        }
    }

    #[test]
    fn known_codes_are_sorted_and_all_labelled() {
        assert!(KNOWN_CODES.windows(2).all(|w| w[0] < w[1]));
        for code in KNOWN_CODES {
            assert_ne!(describe(code), UNKNOWN, "code {code}");
        }
    }

    #[test]
    fn codes_outside_the_table_are_unknown() {
        for code in [-1, -45, 4, 44, 50, 58, 79, 83, 94, 97, 100, i64::MIN, i64::MAX] {
            assert_eq!(describe(code), UNKNOWN, "code {code}");
        }
    }

    #[test]
    fn every_unlisted_small_code_is_unknown() {
        for code in (-10..=200).filter(|c| !KNOWN_CODES.contains(c)) {
            assert_eq!(describe(code), UNKNOWN, "code {code}");
        }
    }
}
