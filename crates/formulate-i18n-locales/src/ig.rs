//! Igbo. The numeric `between` message has no translation yet and stays in English.

use formulate_i18n_core::{
    Dictionary, Extension, ExtensionHost, Measure, Rule, ValidationContext, sentence as s,
};

pub const TAG: &str = "ig";

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
    format!("Biko nabata {}.", ctx.name())
}

fn after(ctx: &ValidationContext) -> String {
    match ctx.arg(0) {
        Some(date) => format!("{} ga-enwerịrị mgbe {date}.", s(ctx.name())),
        None => format!("{} ga-abụ ụbọchị na-esote.", s(ctx.name())),
    }
}

fn alpha(ctx: &ValidationContext) -> String {
    format!("{} nwere ike ịnwe mkpụrụedemede naanị.", s(ctx.name()))
}

fn alphanumeric(ctx: &ValidationContext) -> String {
    format!("{} nwere ike ibu naanị leta na nọmba.", s(ctx.name()))
}

fn before(ctx: &ValidationContext) -> String {
    match ctx.arg(0) {
        Some(date) => format!("{} ga-anọru {date}.", s(ctx.name())),
        None => format!("{} ga-abụrịrị ụbọchị gara aga.", s(ctx.name())),
    }
}

fn between(ctx: &ValidationContext) -> String {
    let (Some(low), Some(high)) = (ctx.arg(0), ctx.arg(1)) else {
        return fallback(ctx);
    };
    match ctx.range_measure() {
        Measure::Magnitude => format!("{} must be between {low} and {high}.", s(ctx.name())),
        _ => format!(
            "{} ga-adị n'etit {low} na mkpụrụedemede {high} ogologo.",
            s(ctx.name())
        ),
    }
}

fn confirm(ctx: &ValidationContext) -> String {
    format!("{} adabaghị.", s(ctx.name()))
}

fn date(ctx: &ValidationContext) -> String {
    match ctx.arg(0) {
        Some(format) => format!(
            "{} abụghị ezigbo ụbọchị, biko jiri usoro {format}",
            s(ctx.name())
        ),
        None => format!("{} abụghị ezigbo ụbọchị.", s(ctx.name())),
    }
}

fn fallback(_ctx: &ValidationContext) -> String {
    "Ala a anaghị arụ ọrụ.".to_string()
}

fn email(ctx: &ValidationContext) -> String {
    match ctx.truthy_value() {
        Some(value) => format!("“{value}” abụghị ezigbo adreesị ozi-e."),
        None => "Biko tinye adreesị ozi ịntanetị dabara adaba.".to_string(),
    }
}

fn ends_with(ctx: &ValidationContext) -> String {
    match ctx.truthy_value() {
        Some(value) => format!("“{value}” anaghị ejedebe uru bara uru."),
        None => "Ala a anaghị ejedebe uru dị irè.".to_string(),
    }
}

fn in_list(ctx: &ValidationContext) -> String {
    match ctx.text_value() {
        Some(value) => format!("“{}” abụghị ezigbo {}.", s(value), ctx.name()),
        None => format!("Nke a ekweghi {}.", ctx.name()),
    }
}

fn matches(ctx: &ValidationContext) -> String {
    format!("{} abụghị uru kwere.", s(ctx.name()))
}

fn max(ctx: &ValidationContext) -> String {
    let Some(limit) = ctx.arg(0) else {
        return fallback(ctx);
    };
    match ctx.bound_measure() {
        Measure::Selection => format!("I nwere ike họrọ naanị {limit} {}.", ctx.name()),
        Measure::Magnitude => format!("{} ga-erughị ma ọ bụ hara ka {limit}.", s(ctx.name())),
        Measure::Length => format!(
            "{} ga-erugharị ma ọ bụ hara ka mkpụrụedemede {limit}.",
            s(ctx.name())
        ),
    }
}

fn mime(ctx: &ValidationContext) -> String {
    let types = ctx
        .arg(0)
        .filter(|types| !types.is_empty())
        .unwrap_or("Onweghị ụdị faịlị kwere.");
    format!("{} ga-abụrịrị nke ụdị ahụ: {types}", s(ctx.name()))
}

fn min(ctx: &ValidationContext) -> String {
    let Some(limit) = ctx.arg(0) else {
        return fallback(ctx);
    };
    match ctx.bound_measure() {
        Measure::Selection => format!("I choro opekata mpe {limit} {}.", ctx.name()),
        Measure::Magnitude => format!("{} ga-abụrịrị opekata mpe {limit}.", s(ctx.name())),
        Measure::Length => format!(
            "{} ga-opekata mpe mkpụrụ edemede {limit} ogologo.",
            s(ctx.name())
        ),
    }
}

fn not(ctx: &ValidationContext) -> String {
    match ctx.value() {
        Some(value) => format!("“{value}” abụghị ikike {}.", ctx.name()),
        None => fallback(ctx),
    }
}

fn number(ctx: &ValidationContext) -> String {
    format!("{} ga-abụ ọnụ ọgụgụ.", s(ctx.name()))
}

fn required(ctx: &ValidationContext) -> String {
    format!("{} achọrọ.", s(ctx.name()))
}

fn starts_with(ctx: &ValidationContext) -> String {
    match ctx.truthy_value() {
        Some(value) => format!("“{value}” anaghị ebido uru bara uru."),
        None => "Ala a anaghị ebido uru bara uru.".to_string(),
    }
}

fn url(_ctx: &ValidationContext) -> String {
    "Biko tinye url ziri ezi.".to_string()
}

#[cfg(test)]
mod tests {
    use formulate_i18n_core::{Rule, ValidationContext};

    use super::dictionary;

    #[test]
    fn between_length_is_translated() {
        let ctx = ValidationContext::new("aha").with_args(["2", "8", "length"]);
        let out = dictionary().render(Rule::Between, &ctx).expect("rule present");
        assert_eq!(out, "Aha ga-adị n'etit 2 na mkpụrụedemede 8 ogologo.");
    }
}
