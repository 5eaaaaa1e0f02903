use crate::domain::model::{Element, SignId, SignRecord};
use crate::utils::error::OracleError;
use std::str::FromStr;

/// Reference table, ordered so that `SIGNS[id.index()].id == id`.
pub static SIGNS: [SignRecord; 12] = [
    SignRecord {
        id: SignId::Aries,
        arabic_name: "الحمل",
        date_range: "Mar 21 - Apr 19",
        element: Element::Fire,
        arabic_element: "ناري",
    },
    SignRecord {
        id: SignId::Taurus,
        arabic_name: "الثور",
        date_range: "Apr 20 - May 20",
        element: Element::Earth,
        arabic_element: "أرضي",
    },
    SignRecord {
        id: SignId::Gemini,
        arabic_name: "الجوزاء",
        date_range: "May 21 - Jun 20",
        element: Element::Air,
        arabic_element: "هوائي",
    },
    SignRecord {
        id: SignId::Cancer,
        arabic_name: "السرطان",
        date_range: "Jun 21 - Jul 22",
        element: Element::Water,
        arabic_element: "مائي",
    },
    SignRecord {
        id: SignId::Leo,
        arabic_name: "الأسد",
        date_range: "Jul 23 - Aug 22",
        element: Element::Fire,
        arabic_element: "ناري",
    },
    SignRecord {
        id: SignId::Virgo,
        arabic_name: "العذراء",
        date_range: "Aug 23 - Sep 22",
        element: Element::Earth,
        arabic_element: "أرضي",
    },
    SignRecord {
        id: SignId::Libra,
        arabic_name: "الميزان",
        date_range: "Sep 23 - Oct 22",
        element: Element::Air,
        arabic_element: "هوائي",
    },
    SignRecord {
        id: SignId::Scorpio,
        arabic_name: "العقرب",
        date_range: "Oct 23 - Nov 21",
        element: Element::Water,
        arabic_element: "مائي",
    },
    SignRecord {
        id: SignId::Sagittarius,
        arabic_name: "القوس",
        date_range: "Nov 22 - Dec 21",
        element: Element::Fire,
        arabic_element: "ناري",
    },
    SignRecord {
        id: SignId::Capricorn,
        arabic_name: "الجدي",
        date_range: "Dec 22 - Jan 19",
        element: Element::Earth,
        arabic_element: "أرضي",
    },
    SignRecord {
        id: SignId::Aquarius,
        arabic_name: "الدلو",
        date_range: "Jan 20 - Feb 18",
        element: Element::Air,
        arabic_element: "هوائي",
    },
    SignRecord {
        id: SignId::Pisces,
        arabic_name: "الحوت",
        date_range: "Feb 19 - Mar 20",
        element: Element::Water,
        arabic_element: "مائي",
    },
];

impl SignId {
    pub fn record(self) -> &'static SignRecord {
        &SIGNS[self.index()]
    }

    pub fn arabic_name(self) -> &'static str {
        self.record().arabic_name
    }
}

impl FromStr for SignId {
    type Err = OracleError;

    /// Accepts English identifiers in any case, or the Arabic name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        SIGNS
            .iter()
            .find(|record| {
                record.id.as_str().eq_ignore_ascii_case(trimmed) || record.arabic_name == trimmed
            })
            .map(|record| record.id)
            .ok_or_else(|| OracleError::UnknownSign {
                input: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_table_is_keyed_by_sign() {
        for sign in SignId::ALL {
            assert_eq!(sign.record().id, sign);
        }
        let names: HashSet<&str> = SIGNS.iter().map(|r| r.arabic_name).collect();
        assert_eq!(names.len(), 12);
    }

    #[test]
    fn test_elements_cycle_fire_earth_air_water() {
        let cycle = [Element::Fire, Element::Earth, Element::Air, Element::Water];
        for (i, record) in SIGNS.iter().enumerate() {
            assert_eq!(record.element, cycle[i % 4], "{}", record.id);
        }
    }

    #[test]
    fn test_parse_sign() {
        assert_eq!("aries".parse::<SignId>().unwrap(), SignId::Aries);
        assert_eq!(" SAGITTARIUS ".parse::<SignId>().unwrap(), SignId::Sagittarius);
        assert_eq!("الدلو".parse::<SignId>().unwrap(), SignId::Aquarius);
        assert!(matches!(
            "ophiuchus".parse::<SignId>(),
            Err(OracleError::UnknownSign { .. })
        ));
    }
}
