//! Hausa.

use formulate_i18n_core::{
    Dictionary, Extension, ExtensionHost, Measure, Rule, ValidationContext, sentence as s,
};

pub const TAG: &str = "ha";

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
    format!("Da fatan za a karɓa {}.", ctx.name())
}

fn after(ctx: &ValidationContext) -> String {
    match ctx.arg(0) {
        Some(date) => format!("dole ne {} ya kasance bayan {date}.", s(ctx.name())),
        None => format!("{} dole ne ya zama kwanan wata a nan gaba.", s(ctx.name())),
    }
}

fn alpha(ctx: &ValidationContext) -> String {
    format!("{} kan iya ƙunsar haruffa kawai.", s(ctx.name()))
}

fn alphanumeric(ctx: &ValidationContext) -> String {
    format!("{} kan iya ƙunsar haruffa da lamba kawai.", s(ctx.name()))
}

fn before(ctx: &ValidationContext) -> String {
    match ctx.arg(0) {
        Some(date) => format!("dole ne {} ya kasance kafin {date}.", s(ctx.name())),
        None => format!("{} dole ne ya zama kwanan wata na baya.", s(ctx.name())),
    }
}

fn between(ctx: &ValidationContext) -> String {
    let (Some(low), Some(high)) = (ctx.arg(0), ctx.arg(1)) else {
        return fallback(ctx);
    };
    match ctx.range_measure() {
        Measure::Magnitude => format!(
            "dole ne {} ya kasance tsakanin {low} da {high}.",
            s(ctx.name())
        ),
        _ => format!(
            "dole ne tsawon haruffan {} ya kasance tsakanin {low} da {high}.",
            s(ctx.name())
        ),
    }
}

fn confirm(ctx: &ValidationContext) -> String {
    format!("{} bai daidaita ba.", s(ctx.name()))
}

fn date(ctx: &ValidationContext) -> String {
    match ctx.arg(0) {
        Some(format) => format!(
            "{} ba ingantaccen kwanan wata bane, da fatan za ayi amfani da tsari {format}",
            s(ctx.name())
        ),
        None => format!("{} ba ingantaccen kwanan wata bane.", s(ctx.name())),
    }
}

fn fallback(_ctx: &ValidationContext) -> String {
    "Wannan filin bashi da inganci.".to_string()
}

fn email(ctx: &ValidationContext) -> String {
    match ctx.truthy_value() {
        Some(value) => format!("“{value}” ba adireshin imel bane mai inganci."),
        None => "A shigar da adireshin i-mel mai inganci.".to_string(),
    }
}

fn ends_with(ctx: &ValidationContext) -> String {
    match ctx.truthy_value() {
        Some(value) => format!("“{value}” bai ƙare da adadi mai inganci ba."),
        None => "Wannan filin bai ƙare da adadi mai inganci ba.".to_string(),
    }
}

fn in_list(ctx: &ValidationContext) -> String {
    match ctx.text_value() {
        Some(value) => format!("“{}” ba {} mai amsuwa bane.", s(value), ctx.name()),
        None => format!("Ba {} mai amsuwa bane.", ctx.name()),
    }
}

fn matches(ctx: &ValidationContext) -> String {
    format!("{} ba adadi mai amsuwa bane.", s(ctx.name()))
}

fn max(ctx: &ValidationContext) -> String {
    let Some(limit) = ctx.arg(0) else {
        return fallback(ctx);
    };
    match ctx.bound_measure() {
        Measure::Selection => format!("Za ku iya zabar {limit} {} kawai.", ctx.name()),
        Measure::Magnitude => format!(
            "{} must be less than or equal to {limit}.",
            s(ctx.name())
        ),
        Measure::Length => format!(
            "dole ne {} ya zama ƙasa da ko daidai da {limit}.",
            s(ctx.name())
        ),
    }
}

fn mime(ctx: &ValidationContext) -> String {
    let types = ctx
        .arg(0)
        .filter(|types| !types.is_empty())
        .unwrap_or("Babu izinin tsarin fayil.");
    format!("Dole ne {} ya kasance daga nau'in: {types}", s(ctx.name()))
}

fn min(ctx: &ValidationContext) -> String {
    let Some(limit) = ctx.arg(0) else {
        return fallback(ctx);
    };
    match ctx.bound_measure() {
        Measure::Selection => format!("Kuna buƙatar aƙalla {limit} {}.", ctx.name()),
        Measure::Magnitude => format!("Dole ne {} ya zama a kalla {limit}.", s(ctx.name())),
        Measure::Length => format!(
            "Dole ne {} ya zama mai haruffa a kalla {limit}.",
            s(ctx.name())
        ),
    }
}

fn not(ctx: &ValidationContext) -> String {
    match ctx.value() {
        Some(value) => format!("“{value}” ba mai amsuwa ba ne {}.", ctx.name()),
        None => fallback(ctx),
    }
}

fn number(ctx: &ValidationContext) -> String {
    format!("Dole {} ya zama lamba.", s(ctx.name()))
}

fn required(ctx: &ValidationContext) -> String {
    format!("Ana bukatar {}.", s(ctx.name()))
}

fn starts_with(ctx: &ValidationContext) -> String {
    match ctx.truthy_value() {
        Some(value) => format!("“{value}” bai fara da adadi mai inganci ba."),
        None => "Wannan filin bai fara da adadi mai inganci ba.".to_string(),
    }
}

fn url(_ctx: &ValidationContext) -> String {
    "Da fatan za a hada da ingantaccen url.".to_string()
}

#[cfg(test)]
mod tests {
    use formulate_i18n_core::{Rule, ValidationContext};

    use super::dictionary;

    #[test]
    fn required_leads_with_verb() {
        let ctx = ValidationContext::new("suna");
        let out = dictionary().render(Rule::Required, &ctx).expect("rule present");
        assert_eq!(out, "Ana bukatar Suna.");
    }
}
