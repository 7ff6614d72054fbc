//! Locale-aware currency formatting

/// Where the currency symbol sits relative to the number
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolPosition {
    Prefix,
    Suffix,
}

/// Where the minus sign of a negative amount goes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NegativeSign {
    /// -€ 5,00
    Leading,
    /// € -5,00
    AfterSymbol,
    /// CHF-5.00, the sign takes the place of the space
    ReplacesSpace,
}

/// How the integer part is split into groups
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grouping {
    /// 1,234,567
    Thousands,
    /// 12,34,567
    Indian,
}

impl Grouping {
    /// Whether a separator goes before the digit `i` places from the right
    fn breaks_at(self, i: usize) -> bool {
        match self {
            Self::Thousands => i % 3 == 0,
            Self::Indian => i == 3 || (i > 3 && (i - 3) % 2 == 0),
        }
    }
}

/// Currency formatting rules for one locale
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrencyFormat {
    pub language: &'static str,
    pub region: &'static str,
    pub symbol: &'static str,
    pub decimal_separator: char,
    pub group_separator: char,
    pub grouping: Grouping,
    pub position: SymbolPosition,
    pub negative_sign: NegativeSign,
    /// Put a no-break space between symbol and number
    pub spaced: bool,
    pub fraction_digits: usize,
}

/// The money used in a region
struct RegionCurrency {
    region: &'static str,
    symbol: &'static str,
    fraction_digits: usize,
}

const NBSP: char = '\u{a0}';
const NARROW_NBSP: char = '\u{202f}';

const fn prefix(
    language: &'static str,
    region: &'static str,
    symbol: &'static str,
    spaced: bool,
) -> CurrencyFormat {
    CurrencyFormat {
        language,
        region,
        symbol,
        decimal_separator: '.',
        group_separator: ',',
        grouping: Grouping::Thousands,
        position: SymbolPosition::Prefix,
        negative_sign: NegativeSign::Leading,
        spaced,
        fraction_digits: 2,
    }
}

const fn suffix(
    language: &'static str,
    region: &'static str,
    symbol: &'static str,
    group: char,
) -> CurrencyFormat {
    CurrencyFormat {
        language,
        region,
        symbol,
        decimal_separator: ',',
        group_separator: group,
        grouping: Grouping::Thousands,
        position: SymbolPosition::Suffix,
        negative_sign: NegativeSign::Leading,
        spaced: true,
        fraction_digits: 2,
    }
}

const fn money(region: &'static str, symbol: &'static str, fraction_digits: usize) -> RegionCurrency {
    RegionCurrency {
        region,
        symbol,
        fraction_digits,
    }
}

/// Known locales. The first entry for a language supplies its separators
/// and symbol placement for regions not listed here.
const LOCALES: &[CurrencyFormat] = &[
    prefix("en", "US", "$", false),
    prefix("en", "GB", "£", false),
    prefix("en", "CA", "$", false),
    prefix("en", "AU", "$", false),
    CurrencyFormat {
        grouping: Grouping::Indian,
        ..prefix("en", "IN", "₹", false)
    },
    suffix("de", "DE", "€", '.'),
    CurrencyFormat {
        decimal_separator: ',',
        group_separator: NBSP,
        ..prefix("de", "AT", "€", true)
    },
    CurrencyFormat {
        group_separator: '’',
        negative_sign: NegativeSign::ReplacesSpace,
        ..prefix("de", "CH", "CHF", true)
    },
    suffix("fr", "FR", "€", NARROW_NBSP),
    suffix("fr", "CA", "$", NBSP),
    suffix("es", "ES", "€", '.'),
    prefix("es", "MX", "$", false),
    suffix("it", "IT", "€", '.'),
    CurrencyFormat {
        decimal_separator: ',',
        group_separator: '.',
        negative_sign: NegativeSign::AfterSymbol,
        ..prefix("nl", "NL", "€", true)
    },
    CurrencyFormat {
        decimal_separator: ',',
        group_separator: '.',
        ..prefix("pt", "BR", "R$", true)
    },
    CurrencyFormat {
        fraction_digits: 0,
        ..prefix("ja", "JP", "￥", false)
    },
    prefix("zh", "CN", "¥", false),
    CurrencyFormat {
        fraction_digits: 0,
        ..prefix("ko", "KR", "₩", false)
    },
];

/// Currencies for regions reached through a language-only match
const REGION_CURRENCIES: &[RegionCurrency] = &[
    money("US", "$", 2),
    money("GB", "£", 2),
    money("IE", "€", 2),
    money("CA", "$", 2),
    money("AU", "$", 2),
    money("NZ", "$", 2),
    money("IN", "₹", 2),
    money("SG", "$", 2),
    money("ZA", "R", 2),
    money("DE", "€", 2),
    money("AT", "€", 2),
    money("LU", "€", 2),
    money("BE", "€", 2),
    money("FR", "€", 2),
    money("ES", "€", 2),
    money("PT", "€", 2),
    money("IT", "€", 2),
    money("NL", "€", 2),
    money("FI", "€", 2),
    money("GR", "€", 2),
    money("CH", "CHF", 2),
    money("LI", "CHF", 2),
    money("MX", "$", 2),
    money("AR", "$", 2),
    money("CO", "$", 2),
    money("CL", "$", 0),
    money("PE", "S/", 2),
    money("BR", "R$", 2),
    money("JP", "¥", 0),
    money("CN", "¥", 2),
    money("TW", "NT$", 2),
    money("HK", "HK$", 2),
    money("KR", "₩", 0),
];

impl CurrencyFormat {
    /// US dollars, used when nothing better is known
    pub fn en_us() -> Self {
        LOCALES[0]
    }

    /// Resolve the format for a locale tag such as `en-US` or `de_DE.UTF-8`.
    ///
    /// A listed language+region is used as is. Another region of a listed
    /// language keeps that language's separators and symbol placement but
    /// shows the region's own currency. Anything else falls back to en-US,
    /// never to a neighbour's money.
    pub fn for_locale(tag: &str) -> Self {
        let (language, region) = split_locale_tag(tag);

        let Some(rules) = LOCALES.iter().find(|f| f.language == language) else {
            tracing::debug!(tag, "Unknown language, falling back to en-US");
            return Self::en_us();
        };

        let Some(region) = region else {
            return *rules;
        };

        if let Some(format) = LOCALES
            .iter()
            .find(|f| f.language == language && f.region == region)
        {
            return *format;
        }

        match REGION_CURRENCIES.iter().find(|c| c.region == region) {
            Some(currency) => {
                tracing::debug!(
                    tag,
                    rules = %rules.locale(),
                    symbol = currency.symbol,
                    "Locale matched by language, currency by region"
                );
                Self {
                    region: currency.region,
                    symbol: currency.symbol,
                    fraction_digits: currency.fraction_digits,
                    ..*rules
                }
            }
            None => {
                tracing::debug!(tag, "Unknown currency for region, falling back to en-US");
                Self::en_us()
            }
        }
    }

    /// Format for the operating system's current locale
    pub fn system() -> Self {
        match sys_locale::get_locale() {
            Some(tag) => Self::for_locale(&tag),
            None => {
                tracing::info!("System locale unavailable, using en-US");
                Self::en_us()
            }
        }
    }

    /// BCP-47 tag of the resolved format, e.g. `de-CH`
    pub fn locale(&self) -> String {
        format!("{}-{}", self.language, self.region)
    }

    /// Format a monetary value, rounding half-even to the locale's fraction digits
    pub fn format(&self, value: f64) -> String {
        if value.is_nan() {
            return "NaN".to_string();
        }

        let mut number = String::new();
        let mut negative = value.is_sign_negative();

        if value.is_infinite() {
            number.push('∞');
        } else {
            let fixed = format!("{:.*}", self.fraction_digits, value.abs());
            // A value that rounds to zero carries no sign
            negative &= fixed.bytes().any(|b| matches!(b, b'1'..=b'9'));

            let (int_part, frac_part) = match fixed.split_once('.') {
                Some((int_part, frac_part)) => (int_part, Some(frac_part)),
                None => (fixed.as_str(), None),
            };

            number.push_str(&self.group(int_part));
            if let Some(frac_part) = frac_part {
                number.push(self.decimal_separator);
                number.push_str(frac_part);
            }
        }

        let spacer = if self.spaced {
            NBSP.to_string()
        } else {
            String::new()
        };

        if !negative {
            return self.place_symbol(&number, &spacer);
        }

        match (self.position, self.negative_sign) {
            (SymbolPosition::Prefix, NegativeSign::AfterSymbol) => {
                format!("{}{}-{}", self.symbol, spacer, number)
            }
            (SymbolPosition::Prefix, NegativeSign::ReplacesSpace) => {
                format!("{}-{}", self.symbol, number)
            }
            _ => format!("-{}", self.place_symbol(&number, &spacer)),
        }
    }

    fn place_symbol(&self, number: &str, spacer: &str) -> String {
        match self.position {
            SymbolPosition::Prefix => format!("{}{}{}", self.symbol, spacer, number),
            SymbolPosition::Suffix => format!("{}{}{}", number, spacer, self.symbol),
        }
    }

    fn group(&self, digits: &str) -> String {
        let mut reversed = String::with_capacity(digits.len() * 2);
        for (i, ch) in digits.chars().rev().enumerate() {
            if i > 0 && self.grouping.breaks_at(i) {
                reversed.push(self.group_separator);
            }
            reversed.push(ch);
        }
        reversed.chars().rev().collect()
    }
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self::en_us()
    }
}

/// Split a BCP-47 or POSIX locale tag into (language, region)
fn split_locale_tag(tag: &str) -> (String, Option<String>) {
    let base = tag
        .split(['.', '@'])
        .next()
        .unwrap_or_default()
        .trim();

    let mut parts = base.split(['-', '_']).filter(|p| !p.is_empty());
    let language = parts.next().unwrap_or_default().to_lowercase();

    // Skip script subtags like "Hans"; the region is the 2-letter (or UN M.49) part
    let region = parts
        .find(|p| {
            (p.len() == 2 && p.chars().all(|c| c.is_ascii_alphabetic()))
                || (p.len() == 3 && p.chars().all(|c| c.is_ascii_digit()))
        })
        .map(|p| p.to_uppercase());

    (language, region)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_us_format() {
        let us = CurrencyFormat::en_us();
        assert_eq!(us.format(15.0), "$15.00");
        assert_eq!(us.format(0.0), "$0.00");
        assert_eq!(us.format(1234567.891), "$1,234,567.89");
        assert_eq!(us.format(999.999), "$1,000.00");
    }

    #[test]
    fn test_negative_values_keep_sign() {
        let us = CurrencyFormat::en_us();
        assert_eq!(us.format(-3.3), "-$3.30");
        assert_eq!(us.format(-1500.0), "-$1,500.00");

        assert_eq!(
            CurrencyFormat::for_locale("nl-NL").format(-5.0),
            "€\u{a0}-5,00"
        );
        assert_eq!(CurrencyFormat::for_locale("de-CH").format(-5.0), "CHF-5.00");
        assert_eq!(
            CurrencyFormat::for_locale("de-CH").format(-1234.5),
            "CHF-1’234.50"
        );
        assert_eq!(
            CurrencyFormat::for_locale("pt-BR").format(-5.0),
            "-R$\u{a0}5,00"
        );
        assert_eq!(
            CurrencyFormat::for_locale("de-DE").format(-5.0),
            "-5,00\u{a0}€"
        );
    }

    #[test]
    fn test_negative_zero_has_no_sign() {
        let us = CurrencyFormat::en_us();
        assert_eq!(us.format(-0.0), "$0.00");
        assert_eq!(us.format(-0.001), "$0.00");
    }

    #[test]
    fn test_suffix_locales() {
        assert_eq!(
            CurrencyFormat::for_locale("de-DE").format(1234.5),
            "1.234,50\u{a0}€"
        );
        assert_eq!(
            CurrencyFormat::for_locale("fr-FR").format(1234.5),
            "1\u{202f}234,50\u{a0}€"
        );
    }

    #[test]
    fn test_spaced_prefix_locales() {
        assert_eq!(
            CurrencyFormat::for_locale("pt-BR").format(12.0),
            "R$\u{a0}12,00"
        );
        assert_eq!(
            CurrencyFormat::for_locale("de-CH").format(1234.5),
            "CHF\u{a0}1’234.50"
        );
    }

    #[test]
    fn test_zero_fraction_digit_locales() {
        assert_eq!(CurrencyFormat::for_locale("ja-JP").format(1234.0), "￥1,234");
        assert_eq!(CurrencyFormat::for_locale("ko-KR").format(4.0), "₩4");
    }

    #[test]
    fn test_indian_grouping() {
        assert_eq!(
            CurrencyFormat::for_locale("en-IN").format(1234567.0),
            "₹12,34,567.00"
        );
        assert_eq!(CurrencyFormat::for_locale("en-IN").format(999.0), "₹999.00");
    }

    #[test]
    fn test_posix_tags_are_normalized() {
        assert_eq!(CurrencyFormat::for_locale("de_DE.UTF-8").locale(), "de-DE");
        assert_eq!(CurrencyFormat::for_locale("en_gb").locale(), "en-GB");
        assert_eq!(CurrencyFormat::for_locale("zh-Hans-CN").locale(), "zh-CN");
    }

    #[test]
    fn test_language_without_region_uses_first_entry() {
        assert_eq!(CurrencyFormat::for_locale("fr").locale(), "fr-FR");
        assert_eq!(CurrencyFormat::for_locale("en").locale(), "en-US");
    }

    #[test]
    fn test_other_regions_show_their_own_currency() {
        assert_eq!(
            CurrencyFormat::for_locale("es-AR").format(5.0),
            "5,00\u{a0}$"
        );
        assert_eq!(
            CurrencyFormat::for_locale("pt-PT").format(5.0),
            "€\u{a0}5,00"
        );
        assert_eq!(CurrencyFormat::for_locale("en-IE").format(5.0), "€5.00");
        assert_eq!(
            CurrencyFormat::for_locale("fr-CH").format(5.0),
            "5,00\u{a0}CHF"
        );
        assert_eq!(CurrencyFormat::for_locale("zh-TW").format(5.0), "NT$5.00");
        assert_eq!(CurrencyFormat::for_locale("es-CL").format(1234.4), "1.234\u{a0}$");
    }

    #[test]
    fn test_borrowed_rules_keep_region_tag() {
        let lu = CurrencyFormat::for_locale("de-LU");
        assert_eq!(lu.locale(), "de-LU");
        assert_eq!(lu.format(1234.5), "1.234,50\u{a0}€");
        assert_eq!(CurrencyFormat::for_locale("en-NZ").locale(), "en-NZ");
    }

    #[test]
    fn test_unknown_locale_falls_back_to_us() {
        assert_eq!(CurrencyFormat::for_locale("xx-YY").locale(), "en-US");
        assert_eq!(CurrencyFormat::for_locale("").locale(), "en-US");
        // Known language, but no currency on record for the region
        assert_eq!(CurrencyFormat::for_locale("es-ZZ"), CurrencyFormat::en_us());
        assert_eq!(CurrencyFormat::for_locale("sv-SE"), CurrencyFormat::en_us());
    }

    #[test]
    fn test_non_finite_values() {
        let us = CurrencyFormat::en_us();
        assert_eq!(us.format(f64::NAN), "NaN");
        assert_eq!(us.format(f64::INFINITY), "$∞");
        assert_eq!(us.format(f64::NEG_INFINITY), "-$∞");
    }
}
