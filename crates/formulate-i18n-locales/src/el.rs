//! Greek.

use formulate_i18n_core::{
    Dictionary, Extension, ExtensionHost, Measure, Rule, ValidationContext, sentence as s,
};

pub const TAG: &str = "el";

pub fn dictionary() -> Dictionary {
    Dictionary::new()
        .with(Rule::Accepted, accepted)
        .with(Rule::After, after)
        .with(Rule::Alpha, alpha)
        .with(Rule::Alphanumeric, alphanumeric)
        .with(Rule::Before, before)
        .with(Rule::Between, between)
        .with(Rule::Confirm, confirm)
        .with(Rule::Date, date)
        .with(Rule::Default, fallback)
        .with(Rule::Email, email)
        .with(Rule::EndsWith, ends_with)
        .with(Rule::In, in_list)
        .with(Rule::Matches, matches)
        .with(Rule::Max, max)
        .with(Rule::Mime, mime)
        .with(Rule::Min, min)
        .with(Rule::Not, not)
        .with(Rule::Number, number)
        .with(Rule::Required, required)
        .with(Rule::StartsWith, starts_with)
        .with(Rule::Url, url)
}

pub fn register(host: &mut dyn ExtensionHost) {
    host.extend(Extension::locale(TAG, dictionary()));
}

fn accepted(ctx: &ValidationContext) -> String {
    format!("Παρακαλώ επιλέξτε το πεδίο {}.", ctx.name())
}

fn after(ctx: &ValidationContext) -> String {
    match ctx.arg(0) {
        Some(date) => format!(
            "Η τιμή του πεδίου {} πρέπει να είναι μεταγενέστερη της {date}.",
            s(ctx.name())
        ),
        None => format!(
            "Η τιμή του πεδίου {} πρέπει να είναι μια μεταγενέστερη ημερομηνία.",
            s(ctx.name())
        ),
    }
}

fn alpha(ctx: &ValidationContext) -> String {
    format!(
        "Το πεδίο {} μπορεί να περιέχει μόνο αλφαριθμητικούς χαρακτήρες.",
        s(ctx.name())
    )
}

fn alphanumeric(ctx: &ValidationContext) -> String {
    format!(
        "Το πεδίο {} μπορεί να περιέχει μόνο γράμματα και αριθμούς.",
        s(ctx.name())
    )
}

fn before(ctx: &ValidationContext) -> String {
    match ctx.arg(0) {
        Some(date) => format!(
            "Η τιμή του πεδίου {} πρέπει να είναι προγενέστερη της {date}.",
            s(ctx.name())
        ),
        None => format!(
            "Η τιμή του πεδίου {} πρέπει να είναι μια προγενέστερη ημερομηνία.",
            s(ctx.name())
        ),
    }
}

fn between(ctx: &ValidationContext) -> String {
    let (Some(low), Some(high)) = (ctx.arg(0), ctx.arg(1)) else {
        return fallback(ctx);
    };
    match ctx.range_measure() {
        Measure::Magnitude => format!(
            "Η τιμή του πεδίου {} πρέπει να είναι μεταξύ {low} και {high}.",
            s(ctx.name())
        ),
        _ => format!(
            "Το μήκος της τιμής του πεδίου {} πρέπει να είναι μεταξύ {low} και {high} χαρακτήρων.",
            s(ctx.name())
        ),
    }
}

fn confirm(ctx: &ValidationContext) -> String {
    format!("Το πεδίο {} δεν ταιριάζει.", s(ctx.name()))
}

fn date(ctx: &ValidationContext) -> String {
    match ctx.arg(0) {
        Some(format) => format!(
            "Η ημερομηνία του πεδίου {} δεν έχει έγκυρη μορφή, παρακαλώ χρησιμοποιήστε τη μορφή {format}",
            s(ctx.name())
        ),
        None => format!(
            "Η ημερομηνία του πεδίου {} δεν έχει έγκυρη μορφή.",
            s(ctx.name())
        ),
    }
}

fn fallback(_ctx: &ValidationContext) -> String {
    "Αυτό το πεδίο δεν είναι έγκυρο.".to_string()
}

fn email(ctx: &ValidationContext) -> String {
    match ctx.truthy_value() {
        Some(value) => {
            format!("Η τιμή του πεδίου “{value}” δεν είναι μια έγκυρη διεύθυνση email.")
        }
        None => "Παρακαλώ εισάγετε μια έγκυρη διεύθυνση email.".to_string(),
    }
}

fn ends_with(ctx: &ValidationContext) -> String {
    match ctx.truthy_value() {
        Some(value) => format!("Η τιμή του πεδίου “{value}” δεν τελειώνει με μια έγκυρη τιμή."),
        None => "Αυτό το πεδίο δεν τελειώνει με μια έγκυρη τιμή.".to_string(),
    }
}

fn in_list(ctx: &ValidationContext) -> String {
    match ctx.text_value() {
        Some(value) => format!(
            "Η τιμή “{}” δεν είναι επιτρεπτή τιμή για το πεδίο {}.",
            s(value),
            ctx.name()
        ),
        None => format!(
            "Αυτή δεν είναι μια επιτρεπτή τιμή για το πεδίο {}.",
            ctx.name()
        ),
    }
}

fn matches(ctx: &ValidationContext) -> String {
    format!("Η τιμή του πεδίου {} δεν είναι αποδεκτή.", s(ctx.name()))
}

fn max(ctx: &ValidationContext) -> String {
    let Some(limit) = ctx.arg(0) else {
        return fallback(ctx);
    };
    match ctx.bound_measure() {
        Measure::Selection => format!(
            "Επιτρέπεται να επιλέξετε το πολύ {limit} {}.",
            ctx.name()
        ),
        Measure::Magnitude => format!(
            "Η τιμή του πεδίου {} πρέπει να είναι λιγότερο ή ίσο με {limit}.",
            s(ctx.name())
        ),
        Measure::Length => format!(
            "Το μήκος της τιμής του πεδίου {} πρέπει να είναι λιγότερο ή ίσο με {limit} χαρακτήρες.",
            s(ctx.name())
        ),
    }
}

fn mime(ctx: &ValidationContext) -> String {
    let types = ctx
        .arg(0)
        .filter(|types| !types.is_empty())
        .unwrap_or("Μη επιτρεπτές μορφές αρχείων.");
    format!(
        "Ο τύπος του αρχείου για το πεδίο {} πρέπει να είναι: {types}",
        s(ctx.name())
    )
}

fn min(ctx: &ValidationContext) -> String {
    let Some(limit) = ctx.arg(0) else {
        return fallback(ctx);
    };
    match ctx.bound_measure() {
        Measure::Selection => format!(
            "Πρέπει να επιλέξετε τουλάχιστον {limit} {}.",
            ctx.name()
        ),
        Measure::Magnitude => format!(
            "Η τιμή του πεδίου {} πρέπει να είναι τουλάχιστον {limit}.",
            s(ctx.name())
        ),
        Measure::Length => format!(
            "Το μήκος της τιμής του πεδίου {} πρέπει να είναι τουλάχιστον {limit} χαρακτήρες.",
            s(ctx.name())
        ),
    }
}

fn not(ctx: &ValidationContext) -> String {
    match ctx.value() {
        Some(value) => format!(
            "Η τιμή “{value}” δεν επιτρέπεται στο πεδίο {}.",
            ctx.name()
        ),
        None => fallback(ctx),
    }
}

fn number(ctx: &ValidationContext) -> String {
    format!(
        "Η τιμή του πεδίου {} πρέπει να είναι αριθμός.",
        s(ctx.name())
    )
}

fn required(ctx: &ValidationContext) -> String {
    format!("Το πεδίο {} είναι απαραίτητο.", s(ctx.name()))
}

fn starts_with(ctx: &ValidationContext) -> String {
    match ctx.truthy_value() {
        Some(value) => format!("Η τιμή “{value}” δεν αρχίζει με μια έγκυρη τιμή."),
        None => "Αυτό το πεδίο δεν αρχίζει με μια έγκυρη τιμή.".to_string(),
    }
}

fn url(_ctx: &ValidationContext) -> String {
    "Παρακαλώ εισάγετε μια έγκυρη τιμή URL.".to_string()
}

#[cfg(test)]
mod tests {
    use formulate_i18n_core::{Rule, ValidationContext};

    use super::dictionary;

    #[test]
    fn required_wraps_name() {
        let ctx = ValidationContext::new("όνομα");
        let out = dictionary().render(Rule::Required, &ctx).expect("rule present");
        assert_eq!(out, "Το πεδίο Όνομα είναι απαραίτητο.");
    }

    #[test]
    fn ends_with_quotes_only_the_value() {
        let ctx = ValidationContext::new("κωδικός").with_value("abc");
        let out = dictionary().render(Rule::EndsWith, &ctx).expect("rule present");
        assert_eq!(
            out,
            "Η τιμή του πεδίου “abc” δεν τελειώνει με μια έγκυρη τιμή."
        );
    }
}
