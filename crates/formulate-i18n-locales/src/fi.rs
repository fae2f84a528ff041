//! Finnish. A few messages are still untranslated upstream and stay in English.

use formulate_i18n_core::{
    Dictionary, Extension, ExtensionHost, Measure, Rule, ValidationContext, sentence as s,
};

pub const TAG: &str = "fi";

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
    format!("Please accept the {}.", ctx.name())
}

fn after(ctx: &ValidationContext) -> String {
    match ctx.arg(0) {
        Some(date) => format!(
            "{} kenttä tulee olla ajankohdan {date} jälkeen.",
            s(ctx.name())
        ),
        None => format!("{} tulee olla myöhäisempi ajankohta.", s(ctx.name())),
    }
}

fn alpha(ctx: &ValidationContext) -> String {
    format!("{} kenttä voi sisältää vain kirjaimia.", s(ctx.name()))
}

fn alphanumeric(ctx: &ValidationContext) -> String {
    format!(
        "{} kenttä voi sisältää vain kirjaimia tai numeroita.",
        s(ctx.name())
    )
}

fn before(ctx: &ValidationContext) -> String {
    match ctx.arg(0) {
        Some(date) => format!(
            "{} kenttä tulee olla ennen ajankohtaa {date}.",
            s(ctx.name())
        ),
        None => format!("{} tulee olla aikaisempi ajankohta.", s(ctx.name())),
    }
}

fn between(ctx: &ValidationContext) -> String {
    let (Some(low), Some(high)) = (ctx.arg(0), ctx.arg(1)) else {
        return fallback(ctx);
    };
    match ctx.range_measure() {
        Measure::Magnitude => format!("{} kenttä tulisi {low} and {high}.", s(ctx.name())),
        _ => format!(
            "{} must be between {low} and {high} characters long.",
            s(ctx.name())
        ),
    }
}

fn confirm(ctx: &ValidationContext) -> String {
    format!("{} does not match.", s(ctx.name()))
}

fn date(ctx: &ValidationContext) -> String {
    match ctx.arg(0) {
        Some(format) => format!(
            "{} on virheellinen päivämäärä, käytä seuraavaa formaattia {format}",
            s(ctx.name())
        ),
        None => format!("{} on virheellinen päivämäärä.", s(ctx.name())),
    }
}

fn fallback(_ctx: &ValidationContext) -> String {
    "Kenttä on virheellinen.".to_string()
}

fn email(ctx: &ValidationContext) -> String {
    match ctx.truthy_value() {
        Some(value) => format!("“{value}” on virheellinen sähköposti."),
        None => "Kirjoita sähköpostiosoite.".to_string(),
    }
}

fn ends_with(ctx: &ValidationContext) -> String {
    match ctx.truthy_value() {
        Some(value) => format!("“{value}” arvo päättyy virheellisesti."),
        None => "Tämä kenttä päättyy virheellisellä arvolla.".to_string(),
    }
}

fn in_list(ctx: &ValidationContext) -> String {
    match ctx.text_value() {
        Some(value) => format!(
            "“{}” arvo ei ole sallittu arvo kentälle {}.",
            s(value),
            ctx.name()
        ),
        None => format!("Tämä ei ole sallittu arvo kentälle {}.", ctx.name()),
    }
}

fn matches(ctx: &ValidationContext) -> String {
    format!("{} kentän arvo ei ole sallittu.", s(ctx.name()))
}

fn max(ctx: &ValidationContext) -> String {
    let Some(limit) = ctx.arg(0) else {
        return fallback(ctx);
    };
    match ctx.bound_measure() {
        Measure::Selection => format!(
            "Kentän {} valintojen määrän tulisi olla enintään {limit}.",
            ctx.name()
        ),
        Measure::Magnitude => format!(
            "{} kentän arvo tulee olla pienempi tai yhtä pieni kuin {limit}.",
            s(ctx.name())
        ),
        Measure::Length => format!(
            "{} kentän arvo tulee olla enintään {limit} merkkiä pitkä.",
            s(ctx.name())
        ),
    }
}

fn mime(ctx: &ValidationContext) -> String {
    let types = ctx
        .arg(0)
        .filter(|types| !types.is_empty())
        .unwrap_or("Ei sallittuja tiedostomuotoja asetettu.");
    format!("{} kenttä tulee olla tyyppiä: {types}", s(ctx.name()))
}

fn min(ctx: &ValidationContext) -> String {
    let Some(limit) = ctx.arg(0) else {
        return fallback(ctx);
    };
    match ctx.bound_measure() {
        Measure::Selection => format!(
            "Kentän {} valintojen määrän tulisi olla vähintään {limit}.",
            ctx.name()
        ),
        Measure::Magnitude => format!(
            "{} kentän arvo tulee olla vähintään {limit}.",
            s(ctx.name())
        ),
        Measure::Length => format!(
            "{} kentän arvo tulee olla vähintään {limit} merkkiä pitkä.",
            s(ctx.name())
        ),
    }
}

fn not(ctx: &ValidationContext) -> String {
    match ctx.value() {
        Some(value) => format!("“{value}” ei ole sallittu arvo kentälle {}.", ctx.name()),
        None => fallback(ctx),
    }
}

fn number(ctx: &ValidationContext) -> String {
    format!("Kenttä {} tulee olla numero.", s(ctx.name()))
}

fn required(ctx: &ValidationContext) -> String {
    format!("Kenttä {} on pakollinen.", s(ctx.name()))
}

fn starts_with(ctx: &ValidationContext) -> String {
    match ctx.truthy_value() {
        Some(value) => format!("Arvo “{value}” ei ala sallitusti."),
        None => "Tämä kenttä ei ala oikealla arvolla.".to_string(),
    }
}

fn url(_ctx: &ValidationContext) -> String {
    "Anna oikea URL-osoite.".to_string()
}
