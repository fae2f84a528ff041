//! Slovene. Character counts take the dual and the few form.

use formulate_i18n_core::{
    Dictionary, Extension, ExtensionHost, Measure, PluralCategory, Rule, ValidationContext,
    parse_count, plural_category, sentence as s,
};

pub const TAG: &str = "sl";

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

/// "character" in the form matching `count`.
fn characters(count: &str) -> &'static str {
    match parse_count(count).map(|count| plural_category(TAG, count)) {
        Some(PluralCategory::One) => "znak",
        Some(PluralCategory::Two) => "znaka",
        Some(PluralCategory::Few) => "znaki",
        _ => "znakov",
    }
}

fn accepted(ctx: &ValidationContext) -> String {
    format!("Prosim sprejmite {}.", ctx.name())
}

fn after(ctx: &ValidationContext) -> String {
    match ctx.arg(0) {
        Some(date) => format!("{} mora biti za {date}.", s(ctx.name())),
        None => format!("{} mora biti poznejši datum.", s(ctx.name())),
    }
}

fn alpha(ctx: &ValidationContext) -> String {
    format!("{} lahko vsebuje samo abecedne znake.", s(ctx.name()))
}

fn alphanumeric(ctx: &ValidationContext) -> String {
    format!("{} lahko vsebuje samo črke in številke.", s(ctx.name()))
}

fn before(ctx: &ValidationContext) -> String {
    match ctx.arg(0) {
        Some(date) => format!("{} mora biti pred {date}.", s(ctx.name())),
        None => format!("{} mora biti zgodnejši datum.", s(ctx.name())),
    }
}

fn between(ctx: &ValidationContext) -> String {
    let (Some(low), Some(high)) = (ctx.arg(0), ctx.arg(1)) else {
        return fallback(ctx);
    };
    match ctx.range_measure() {
        Measure::Magnitude => format!("{} more biti med {low} in {high}.", s(ctx.name())),
        _ => format!(
            "{} more biti med {low} in {high} {}.",
            s(ctx.name()),
            characters(high)
        ),
    }
}

fn confirm(ctx: &ValidationContext) -> String {
    format!("{} se ne ujema.", s(ctx.name()))
}

fn date(ctx: &ValidationContext) -> String {
    match ctx.arg(0) {
        Some(format) => format!(
            "{} ni veljaven datum, uporabite obliko {format}",
            s(ctx.name())
        ),
        None => format!("{} ni veljaven datum.", s(ctx.name())),
    }
}

fn fallback(_ctx: &ValidationContext) -> String {
    "To polje ni veljavno.".to_string()
}

fn email(ctx: &ValidationContext) -> String {
    match ctx.truthy_value() {
        Some(value) => format!("“{value}” ni veljaven elektronski naslov."),
        None => "Vnesite veljaven elektronski naslov.".to_string(),
    }
}

fn ends_with(ctx: &ValidationContext) -> String {
    match ctx.truthy_value() {
        Some(value) => format!("“{value}” se ne konča z veljavno vrednostjo."),
        None => "To polje se ne konča z veljavno vrednostjo.".to_string(),
    }
}

fn in_list(ctx: &ValidationContext) -> String {
    match ctx.text_value() {
        Some(value) => format!("“{}” ni dovoljeno {}.", s(value), ctx.name()),
        None => format!("To ni dovoljeno {}.", ctx.name()),
    }
}

fn matches(ctx: &ValidationContext) -> String {
    format!("{} ni dovoljena vrednost.", s(ctx.name()))
}

fn max(ctx: &ValidationContext) -> String {
    let Some(limit) = ctx.arg(0) else {
        return fallback(ctx);
    };
    match ctx.bound_measure() {
        Measure::Selection => format!("Lahko izberete samo {limit} {}.", ctx.name()),
        Measure::Magnitude => format!("{} mora biti manj ali {limit}.", s(ctx.name())),
        Measure::Length => format!(
            "{} mora biti manj ali {limit} {}.",
            s(ctx.name()),
            characters(limit)
        ),
    }
}

fn mime(ctx: &ValidationContext) -> String {
    let types = ctx
        .arg(0)
        .filter(|types| !types.is_empty())
        .unwrap_or("Datoteke niso dovoljene.");
    format!("{} mora biti tipa: {types}", s(ctx.name()))
}

fn min(ctx: &ValidationContext) -> String {
    let Some(limit) = ctx.arg(0) else {
        return fallback(ctx);
    };
    match ctx.bound_measure() {
        Measure::Selection => format!("Potrebujete vsaj {limit} {}.", ctx.name()),
        Measure::Magnitude => format!("{} mora biti vsaj {limit}.", s(ctx.name())),
        Measure::Length => format!(
            "{} mora biti vsaj {limit} {}.",
            s(ctx.name()),
            characters(limit)
        ),
    }
}

fn not(ctx: &ValidationContext) -> String {
    match ctx.value() {
        Some(value) => format!("“{value}” ni dovoljeno {}.", ctx.name()),
        None => fallback(ctx),
    }
}

fn number(ctx: &ValidationContext) -> String {
    format!("{} mora biti število.", s(ctx.name()))
}

fn required(ctx: &ValidationContext) -> String {
    format!("{} je obvezno.", s(ctx.name()))
}

fn starts_with(ctx: &ValidationContext) -> String {
    match ctx.truthy_value() {
        Some(value) => format!("“{value}” se ne začne z veljavno vrednostjo."),
        None => "To polje se ne začne z veljavno vrednostjo.".to_string(),
    }
}

fn url(_ctx: &ValidationContext) -> String {
    "Vnesite veljaven URL.".to_string()
}
