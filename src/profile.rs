//! Target profile
//!
//! Holds the validated facts gathered about a target and flattens them into
//! the ordered token collection the generator combines.

use crate::validate::DateParts;

/// Personal facts about one person (the target or their partner)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Person {
    pub first_name: Option<String>,
    pub middle_name: Option<String>,
    pub last_name: Option<String>,
    pub nickname: Option<String>,
    pub username: Option<String>,
    pub birth_date: Option<DateParts>,
    pub age: Option<u32>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

impl Person {
    fn name_tokens(&self) -> impl Iterator<Item = String> + '_ {
        [
            &self.first_name,
            &self.middle_name,
            &self.last_name,
            &self.nickname,
            &self.username,
        ]
        .into_iter()
        .flatten()
        .cloned()
    }

    fn birth_date_tokens(&self) -> impl Iterator<Item = String> + '_ {
        self.birth_date.iter().flat_map(DateParts::tokens)
    }

    fn age_token(&self) -> Option<String> {
        self.age.map(|age| age.to_string())
    }

    fn is_empty(&self) -> bool {
        *self == Person::default()
    }
}

/// Everything known about the target
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Profile {
    pub target: Person,
    pub partner: Person,
    pub engaged_on: Option<DateParts>,
    pub words: Vec<String>,
    pub symbols: Vec<String>,
}

impl Profile {
    /// Flatten the profile into tokens, in collection order.
    ///
    /// Target names, birth date (compact, month, day, year), age, phone and
    /// email come first. Then the partner's names, age, birth date, phone and
    /// email, the engagement date, the extra words and finally one token per
    /// symbol. Blank facts contribute nothing.
    pub fn tokens(&self) -> Vec<String> {
        let mut tokens: Vec<String> = Vec::new();

        let target = &self.target;
        tokens.extend(target.name_tokens());
        tokens.extend(target.birth_date_tokens());
        tokens.extend(target.age_token());
        tokens.extend(target.phone.clone());
        tokens.extend(target.email.clone());

        let partner = &self.partner;
        tokens.extend(partner.name_tokens());
        tokens.extend(partner.age_token());
        tokens.extend(partner.birth_date_tokens());
        tokens.extend(partner.phone.clone());
        tokens.extend(partner.email.clone());

        tokens.extend(self.engaged_on.iter().flat_map(DateParts::tokens));
        tokens.extend(self.words.iter().cloned());
        tokens.extend(self.symbols.iter().cloned());

        tokens.retain(|token| !token.is_empty());
        tokens
    }

    /// Whether any fact at all was provided
    pub fn is_empty(&self) -> bool {
        self.target.is_empty()
            && self.partner.is_empty()
            && self.engaged_on.is_none()
            && self.words.is_empty()
            && self.symbols.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate;

    fn dob(input: &str) -> Option<DateParts> {
        validate::date("dob", input).unwrap()
    }

    #[test]
    fn test_empty_profile() {
        let profile = Profile::default();
        assert!(profile.is_empty());
        assert!(profile.tokens().is_empty());
    }

    #[test]
    fn test_target_tokens_in_order() {
        let profile = Profile {
            target: Person {
                first_name: Some("john".to_string()),
                last_name: Some("smith".to_string()),
                username: Some("jsmith_90".to_string()),
                birth_date: dob("07/04/1990"),
                age: Some(34),
                phone: Some("5550102030".to_string()),
                email: Some("john@example.com".to_string()),
                ..Person::default()
            },
            ..Profile::default()
        };

        assert!(!profile.is_empty());
        assert_eq!(
            profile.tokens(),
            vec![
                "john",
                "smith",
                "jsmith_90",
                "07041990",
                "07",
                "04",
                "1990",
                "34",
                "5550102030",
                "john@example.com",
            ]
        );
    }

    #[test]
    fn test_partner_engagement_words_symbols() {
        let profile = Profile {
            target: Person {
                nickname: Some("jay".to_string()),
                ..Person::default()
            },
            partner: Person {
                first_name: Some("anna".to_string()),
                age: Some(31),
                birth_date: dob("12/25/1993"),
                ..Person::default()
            },
            engaged_on: dob("02/14/2020"),
            words: vec!["rex".to_string(), "paris".to_string()],
            symbols: vec!["@".to_string(), "!".to_string()],
        };

        assert_eq!(
            profile.tokens(),
            vec![
                "jay", "anna", "31", "12251993", "12", "25", "1993", "02142020", "02", "14",
                "2020", "rex", "paris", "@", "!",
            ]
        );
    }

    #[test]
    fn test_blank_facts_dropped() {
        let profile = Profile {
            words: vec![String::new(), "luna".to_string()],
            ..Profile::default()
        };
        assert_eq!(profile.tokens(), vec!["luna"]);
    }
}
