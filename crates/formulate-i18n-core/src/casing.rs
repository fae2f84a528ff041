use alloc::string::String;

/// Case mapping used for the first letter of a sentence.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CaseRule {
    #[default]
    Default,
    /// Dotted and dotless i are distinct letters (`i` → `İ`).
    Turkic,
}

/// Uppercases the first character and leaves the rest as is.
pub fn sentence(text: &str) -> String {
    sentence_with(CaseRule::Default, text)
}

pub fn sentence_with(rule: CaseRule, text: &str) -> String {
    let mut chars = text.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };
    let mut output = String::with_capacity(text.len() + 2);
    match (rule, first) {
        (CaseRule::Turkic, 'i') => output.push('İ'),
        _ => output.extend(first.to_uppercase()),
    }
    output.push_str(chars.as_str());
    output
}

#[cfg(test)]
mod tests {
    use super::{CaseRule, sentence, sentence_with};

    #[test]
    fn capitalizes_first_letter_only() {
        assert_eq!(sentence("email address"), "Email address");
        assert_eq!(sentence("eMAIL"), "EMAIL");
    }

    #[test]
    fn handles_non_latin_scripts() {
        assert_eq!(sentence("пароль"), "Пароль");
        assert_eq!(sentence("όνομα"), "Όνομα");
        assert_eq!(sentence("ایمیل"), "ایمیل");
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(sentence(""), "");
    }

    #[test]
    fn is_idempotent() {
        let once = sentence("ştat");
        assert_eq!(sentence(&once), once);
        let once = sentence_with(CaseRule::Turkic, "istifadəçi");
        assert_eq!(once, "İstifadəçi");
        assert_eq!(sentence_with(CaseRule::Turkic, &once), once);
    }

    #[test]
    fn default_rule_maps_plain_i() {
        assert_eq!(sentence("istifadəçi"), "Istifadəçi");
    }
}
