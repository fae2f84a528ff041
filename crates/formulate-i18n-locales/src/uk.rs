//! Ukrainian.

use formulate_i18n_core::{
    Dictionary, Extension, ExtensionHost, Measure, Rule, ValidationContext, sentence as s,
};

pub const TAG: &str = "uk";

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
    format!("Будь ласка, підтвердіть {}.", ctx.name())
}

fn after(ctx: &ValidationContext) -> String {
    match ctx.arg(0) {
        Some(date) => format!("{} має бути після {date}.", s(ctx.name())),
        None => format!("{} має бути пізніше.", s(ctx.name())),
    }
}

fn alpha(ctx: &ValidationContext) -> String {
    format!("{} може містити лише алфавітні символи.", s(ctx.name()))
}

fn alphanumeric(ctx: &ValidationContext) -> String {
    format!("{} може містити тільки букви і цифри.", s(ctx.name()))
}

fn before(ctx: &ValidationContext) -> String {
    match ctx.arg(0) {
        Some(date) => format!("{} має бути раніше {date}.", s(ctx.name())),
        None => format!("{} має бути раніше.", s(ctx.name())),
    }
}

// Same wording for numbers and lengths.
fn between(ctx: &ValidationContext) -> String {
    let (Some(low), Some(high)) = (ctx.arg(0), ctx.arg(1)) else {
        return fallback(ctx);
    };
    format!("{} має бути між {low} та {high}.", s(ctx.name()))
}

fn confirm(ctx: &ValidationContext) -> String {
    format!("{} не збігаються.", s(ctx.name()))
}

fn date(ctx: &ValidationContext) -> String {
    match ctx.arg(0) {
        Some(format) => format!(
            "{} не є допустимою датою, будь ласка, використовуйте формат {format}",
            s(ctx.name())
        ),
        None => format!("{} не є допустимою датою.", s(ctx.name())),
    }
}

fn fallback(_ctx: &ValidationContext) -> String {
    "Це поле не є допустимим.".to_string()
}

fn email(ctx: &ValidationContext) -> String {
    match ctx.truthy_value() {
        Some(value) => format!("“{value}” недійсний адрес електронної пошти."),
        None => "Будь ласка, введіть дійсну адресу електронної пошти.".to_string(),
    }
}

fn ends_with(ctx: &ValidationContext) -> String {
    match ctx.truthy_value() {
        Some(value) => format!("“{value}” не закінчується допустимим значенням."),
        None => "Це поле не закінчується допустимим значенням.".to_string(),
    }
}

fn in_list(ctx: &ValidationContext) -> String {
    match ctx.text_value() {
        Some(value) => format!("“{}” є помилковим для {}.", s(value), ctx.name()),
        None => format!("Вибране значення для {} є помилковим.", ctx.name()),
    }
}

fn matches(ctx: &ValidationContext) -> String {
    format!("{} не збігається.", s(ctx.name()))
}

fn max(ctx: &ValidationContext) -> String {
    let Some(limit) = ctx.arg(0) else {
        return fallback(ctx);
    };
    match ctx.bound_measure() {
        Measure::Selection => format!("Ви можете вибрати тільки {limit} {}.", ctx.name()),
        Measure::Magnitude => format!(
            "{} має бути менше або дорівнює {limit}.",
            s(ctx.name())
        ),
        Measure::Length => format!(
            "Кількість символів {} має бути менше або дорівнює {limit}.",
            s(ctx.name())
        ),
    }
}

fn mime(ctx: &ValidationContext) -> String {
    let types = ctx
        .arg(0)
        .filter(|types| !types.is_empty())
        .unwrap_or("Недопустимі формати файлів.");
    format!(
        "{} має бути файлом одного з наступних типів: {types}",
        s(ctx.name())
    )
}

fn min(ctx: &ValidationContext) -> String {
    let Some(limit) = ctx.arg(0) else {
        return fallback(ctx);
    };
    match ctx.bound_measure() {
        Measure::Selection => format!("Має бути не менш як {limit} {}.", ctx.name()),
        Measure::Magnitude => format!("{} має бути не менше як {limit}.", s(ctx.name())),
        Measure::Length => format!(
            "Кількість символів {} має бути не менше як {limit}.",
            s(ctx.name())
        ),
    }
}

fn not(ctx: &ValidationContext) -> String {
    match ctx.value() {
        Some(value) => format!("“{value}” не є допустимим {}.", ctx.name()),
        None => fallback(ctx),
    }
}

fn number(ctx: &ValidationContext) -> String {
    format!("{} повинні бути числом.", s(ctx.name()))
}

fn required(ctx: &ValidationContext) -> String {
    format!("{} обов'язкове поле.", s(ctx.name()))
}

fn starts_with(ctx: &ValidationContext) -> String {
    match ctx.truthy_value() {
        Some(value) => format!("“{value}” має починатися дійсним значенням."),
        None => "Поле має починатися дійсним значенням.".to_string(),
    }
}

fn url(_ctx: &ValidationContext) -> String {
    "Будь ласка, вкажіть дійсний URL.".to_string()
}
