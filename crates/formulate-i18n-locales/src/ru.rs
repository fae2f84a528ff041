//! Russian.

use formulate_i18n_core::{
    Dictionary, Extension, ExtensionHost, Measure, Rule, ValidationContext, sentence as s,
};

pub const TAG: &str = "ru";

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
    format!("Пожалуйста, подтвердите {}.", ctx.name())
}

fn after(ctx: &ValidationContext) -> String {
    match ctx.arg(0) {
        Some(date) => format!("{} должна быть больше {date}.", s(ctx.name())),
        None => format!("{} должна быть больше разрешенной.", s(ctx.name())),
    }
}

fn alpha(ctx: &ValidationContext) -> String {
    format!("{} может содержать только буквы.", s(ctx.name()))
}

fn alphanumeric(ctx: &ValidationContext) -> String {
    format!("{} может содержать только буквы и цифры.", s(ctx.name()))
}

fn before(ctx: &ValidationContext) -> String {
    match ctx.arg(0) {
        Some(date) => format!("Дата в {} должна быть меньше {date}.", s(ctx.name())),
        None => format!("Дата в {} должна быть меньше разрешенной.", s(ctx.name())),
    }
}

// Same wording for numbers and lengths.
fn between(ctx: &ValidationContext) -> String {
    let (Some(low), Some(high)) = (ctx.arg(0), ctx.arg(1)) else {
        return fallback(ctx);
    };
    format!("{} должно быть между {low} и {high}.", s(ctx.name()))
}

fn confirm(ctx: &ValidationContext) -> String {
    format!("{} не совпадает.", s(ctx.name()))
}

fn date(ctx: &ValidationContext) -> String {
    match ctx.arg(0) {
        Some(format) => format!(
            "{} некорректный формат даты, пожалуйста, укажите дату в формате {format}",
            s(ctx.name())
        ),
        None => format!("{} некорректный формат даты.", s(ctx.name())),
    }
}

fn fallback(_ctx: &ValidationContext) -> String {
    "Поле заполнено некорректно.".to_string()
}

fn email(ctx: &ValidationContext) -> String {
    match ctx.truthy_value() {
        Some(value) => format!("“{value}” некорректный адрес электронной почты."),
        None => "Пожалуйста, введите корректный адрес электронной почты.".to_string(),
    }
}

fn ends_with(ctx: &ValidationContext) -> String {
    match ctx.truthy_value() {
        Some(value) => format!("“{value}” заканчивается не допустимым значением."),
        None => "Поле заканчивается не допустимым значением.".to_string(),
    }
}

fn in_list(ctx: &ValidationContext) -> String {
    match ctx.text_value() {
        Some(value) => format!("“{}” является некорректным для {}.", s(value), ctx.name()),
        None => format!("Выбранное значение для {} некорректно.", ctx.name()),
    }
}

fn matches(ctx: &ValidationContext) -> String {
    format!("{} не соответствует допустимым значениям.", s(ctx.name()))
}

fn max(ctx: &ValidationContext) -> String {
    let Some(limit) = ctx.arg(0) else {
        return fallback(ctx);
    };
    match ctx.bound_measure() {
        Measure::Selection => format!("Вы можете выбрать только {limit} {}.", ctx.name()),
        Measure::Magnitude => format!(
            "{} должно быть меньше или равно {limit}.",
            s(ctx.name())
        ),
        Measure::Length => format!(
            "Количество символов {} должно быть меньше или равно {limit}.",
            s(ctx.name())
        ),
    }
}

fn mime(ctx: &ValidationContext) -> String {
    let types = ctx
        .arg(0)
        .filter(|types| !types.is_empty())
        .unwrap_or("Недопустимый формат.");
    format!("Формат {} может быть следующих типов: {types}", s(ctx.name()))
}

fn min(ctx: &ValidationContext) -> String {
    let Some(limit) = ctx.arg(0) else {
        return fallback(ctx);
    };
    match ctx.bound_measure() {
        Measure::Selection => format!("Должно быть больше {limit} {}.", ctx.name()),
        Measure::Magnitude => format!(
            "{} должно быть больше или равно {limit}.",
            s(ctx.name())
        ),
        Measure::Length => format!(
            "Количество символов {} должно быть больше или равно {limit}.",
            s(ctx.name())
        ),
    }
}

fn not(ctx: &ValidationContext) -> String {
    match ctx.value() {
        Some(value) => format!("“{value}” недопустимое значение {}.", ctx.name()),
        None => fallback(ctx),
    }
}

fn number(ctx: &ValidationContext) -> String {
    format!("{} должны быть числом.", s(ctx.name()))
}

fn required(ctx: &ValidationContext) -> String {
    format!("{} обязательное поле.", s(ctx.name()))
}

fn starts_with(ctx: &ValidationContext) -> String {
    match ctx.truthy_value() {
        Some(value) => format!("“{value}” должно начинаться с корректного значения."),
        None => "Поле начинается с некорректного значения.".to_string(),
    }
}

fn url(_ctx: &ValidationContext) -> String {
    "Пожалуйста, укажите корректный URL.".to_string()
}

#[cfg(test)]
mod tests {
    use formulate_i18n_core::{Rule, ValidationContext};

    use super::dictionary;

    #[test]
    fn required_capitalizes_cyrillic_name() {
        let ctx = ValidationContext::new("пароль");
        let out = dictionary().render(Rule::Required, &ctx).expect("rule present");
        assert_eq!(out, "Пароль обязательное поле.");
    }

    #[test]
    fn max_length_wording() {
        let ctx = ValidationContext::new("логин").with_value("abcdef").with_args(["5"]);
        let out = dictionary().render(Rule::Max, &ctx).expect("rule present");
        assert_eq!(out, "Количество символов Логин должно быть меньше или равно 5.");
    }
}
