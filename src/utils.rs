#[macro_export]
macro_rules! post_funcs {
    ( $( ( $func_name:ident, $url:literal, $request:ty, $response:ty ) ),+ $(,)? ) => {
        $(
            paste::paste! {
                #[post($url)]
                async fn $func_name(
                    state: web::Data<AppState>,
                    info: web::Json<$request>
                ) -> impl Responder {
                    let response = match [<$func_name _impl>](state, info).await {
                        Ok(response) => response,
                        Err(err) => {
                            tracing::debug!(endpoint = $url, error = %format!("{:#}", err), "request rejected");
                            <$response>::err(format!("{:#}", err))
                        }
                    };
                    HttpResponse::Ok().json(response)
                }
            }
        )+
    };
}

use chrono::{NaiveDate, NaiveTime, ParseResult};

const DATE_FMT: &str = "%Y-%m-%d";
const CLOCK_FMT: &str = "%H:%M";
const CLOCK_FMT_SECS: &str = "%H:%M:%S";

/// Parses the value of a `<input type="date">`.
pub fn parse_date_str<S: AsRef<str>>(s: S) -> ParseResult<NaiveDate> {
    NaiveDate::parse_from_str(s.as_ref().trim(), DATE_FMT)
}

/// Parses the value of a `<input type="time">`, with or without seconds.
pub fn parse_clock_str<S: AsRef<str>>(s: S) -> ParseResult<NaiveTime> {
    let s = s.as_ref().trim();
    NaiveTime::parse_from_str(s, CLOCK_FMT).or_else(|_| NaiveTime::parse_from_str(s, CLOCK_FMT_SECS))
}

pub fn format_date_str(date: &NaiveDate) -> String {
    date.format(DATE_FMT).to_string()
}

pub fn format_clock_str(time: &NaiveTime) -> String {
    time.format(CLOCK_FMT).to_string()
}

// es-AR short date, e.g. 5/12/2024
pub fn format_display_date(date: &NaiveDate) -> String {
    date.format("%-d/%-m/%Y").to_string()
}

pub fn format_display_time(time: &NaiveTime) -> String {
    format!("{} hs", format_clock_str(time))
}

/// Lowercases and strips Spanish diacritics so labels compare loosely.
pub fn normalize_label(s: &str) -> String {
    s.trim()
        .chars()
        .flat_map(char::to_lowercase)
        .map(|c| match c {
            'á' => 'a',
            'é' => 'e',
            'í' => 'i',
            'ó' => 'o',
            'ú' | 'ü' => 'u',
            'ñ' => 'n',
            other => other,
        })
        .collect()
}
