//! Tokens minted when the ledger is deployed.

use datechain_core::calendar::CalendarDate;
use datechain_core::token::Material;

/// A token minted outside the claim flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenesisToken {
    pub date: CalendarDate,
    pub material: Material,
    pub title: &'static str,
}

/// The dates minted at deployment, in mint order.
pub fn genesis_tokens() -> [GenesisToken; 3] {
    [
        GenesisToken {
            date: CalendarDate {
                year: 1,
                month: 1,
                day: 1,
            },
            material: Material::Gold,
            title: "ORIGIN",
        },
        GenesisToken {
            date: CalendarDate {
                year: 2005,
                month: 10,
                day: 29,
            },
            material: Material::Bronze,
            title: "All cats reunite!",
        },
        GenesisToken {
            date: CalendarDate {
                year: 2005,
                month: 4,
                day: 23,
            },
            material: Material::Wood,
            title: "Me at the zoo",
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_genesis_dates_are_real() {
        for token in genesis_tokens() {
            assert!(token.date.is_gregorian(), "{} is not a real date", token.date);
        }
    }

    #[test]
    fn test_genesis_starts_at_origin() {
        let [origin, ..] = genesis_tokens();
        assert_eq!(origin.date, CalendarDate::new(1, 1, 1).unwrap());
        assert_eq!(origin.material, Material::Gold);
    }
}
