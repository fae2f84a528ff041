//! Persian.

use formulate_i18n_core::{
    Dictionary, Extension, ExtensionHost, Measure, Rule, ValidationContext, sentence as s,
};

pub const TAG: &str = "fa";

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
    format!("{} باید پذیرفته شود", ctx.name())
}

fn after(ctx: &ValidationContext) -> String {
    match ctx.arg(0) {
        Some(date) => format!("{} باید تاریخی بعد از {date} باشد.", ctx.name()),
        None => format!("{} باید یک تاریخ بعد باشد", s(ctx.name())),
    }
}

fn alpha(ctx: &ValidationContext) -> String {
    format!("{} باید شامل حروف الفبا باشد.", ctx.name())
}

fn alphanumeric(ctx: &ValidationContext) -> String {
    format!("{} باید شامل حروف الفبا و عدد باشد.", s(ctx.name()))
}

fn before(ctx: &ValidationContext) -> String {
    match ctx.arg(0) {
        Some(date) => format!("{} باید تاریخی پیش از {date} باشد.", s(ctx.name())),
        None => format!("{} باید یک تاریخ پیش باشد", s(ctx.name())),
    }
}

fn between(ctx: &ValidationContext) -> String {
    let (Some(low), Some(high)) = (ctx.arg(0), ctx.arg(1)) else {
        return fallback(ctx);
    };
    match ctx.range_measure() {
        Measure::Magnitude => format!("{} باید بین {low} و {high} باشد.", s(ctx.name())),
        _ => format!("{} باید بین {low} و {high} کاراکتر باشد.", s(ctx.name())),
    }
}

fn confirm(ctx: &ValidationContext) -> String {
    format!("{} مطابقت ندارد.", s(ctx.name()))
}

fn date(ctx: &ValidationContext) -> String {
    match ctx.arg(0) {
        Some(format) => format!(
            "{} یک تاریخ معتبر نیست, لطفا از این فرمت استفاده کنید {format}",
            s(ctx.name())
        ),
        None => format!("{} یک تاریخ معتبر نیست.", s(ctx.name())),
    }
}

fn fallback(_ctx: &ValidationContext) -> String {
    "این قسمت معتبر نیست.".to_string()
}

fn email(ctx: &ValidationContext) -> String {
    match ctx.truthy_value() {
        Some(value) => format!("“{value}” یک آدرس ایمیل معتبر نیست."),
        None => "لطفا یک آدرس ایمیل معتبر وارد کنید.".to_string(),
    }
}

fn ends_with(ctx: &ValidationContext) -> String {
    match ctx.truthy_value() {
        Some(value) => format!("“{value}” با یک مقدار معتبر پایان نمی یابد."),
        None => "این قسمت با یک مقدار معتبر پایان نمی یابد.".to_string(),
    }
}

fn in_list(ctx: &ValidationContext) -> String {
    match ctx.text_value() {
        Some(value) => format!("“{}” یک {} مجاز نیست.", s(value), ctx.name()),
        None => format!("این یک {} مجاز نیست", ctx.name()),
    }
}

fn matches(ctx: &ValidationContext) -> String {
    format!("{} یک فرمت معتبر نیست.", s(ctx.name()))
}

fn max(ctx: &ValidationContext) -> String {
    let Some(limit) = ctx.arg(0) else {
        return fallback(ctx);
    };
    match ctx.bound_measure() {
        Measure::Selection => format!("فقط {limit} {} می توانند انتخاب شوند", ctx.name()),
        Measure::Magnitude => format!(
            "{} باید کمتر از یا برابر با {limit} باشد.",
            s(ctx.name())
        ),
        Measure::Length => format!(
            "{} باید کمتر از یا برابر با {limit} کاراکتر باشد.",
            s(ctx.name())
        ),
    }
}

fn mime(ctx: &ValidationContext) -> String {
    let types = ctx
        .arg(0)
        .filter(|types| !types.is_empty())
        .unwrap_or("هیچ پرونده ای مجاز نیست");
    format!("{} باید یکی از این فرمت باشد: {types}", s(ctx.name()))
}

fn min(ctx: &ValidationContext) -> String {
    let Some(limit) = ctx.arg(0) else {
        return fallback(ctx);
    };
    match ctx.bound_measure() {
        Measure::Selection => format!("حداقل {limit} {} باید انتخاب شود.", ctx.name()),
        Measure::Magnitude => format!(
            "{} باید بزرگتر از یا برابر با {limit} باشد.",
            s(ctx.name())
        ),
        Measure::Length => format!(
            "{} باید بیشتر از یا برابر با {limit} کاراکتر باشد.",
            s(ctx.name())
        ),
    }
}

fn not(ctx: &ValidationContext) -> String {
    match ctx.value() {
        Some(value) => format!("“{value}” یک {} مجاز نیست.", ctx.name()),
        None => fallback(ctx),
    }
}

fn number(ctx: &ValidationContext) -> String {
    format!("{} باید یک عدد باشد.", s(ctx.name()))
}

fn required(ctx: &ValidationContext) -> String {
    format!("{} لازم است.", s(ctx.name()))
}

fn starts_with(ctx: &ValidationContext) -> String {
    match ctx.truthy_value() {
        Some(value) => format!("“{value}” با یک مقدار معتبر شروع نمی شود."),
        None => "این قسمت با یک مقدار معتبر شروع نمی شود.".to_string(),
    }
}

fn url(_ctx: &ValidationContext) -> String {
    "لطفا یک نشانی وب معتبر وارد کنید.".to_string()
}

#[cfg(test)]
mod tests {
    use formulate_i18n_core::{Rule, ValidationContext};

    use super::dictionary;

    #[test]
    fn selection_wording() {
        let ctx = ValidationContext::new("برچسب")
            .with_value(vec!["a", "b", "c"])
            .with_args(["2"]);
        let out = dictionary().render(Rule::Max, &ctx).expect("rule present");
        assert_eq!(out, "فقط 2 برچسب می توانند انتخاب شوند");
    }
}
