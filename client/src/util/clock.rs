//! Wall-clock helpers.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

/// Current calendar year in UTC.
///
/// The server renders the footer and the browser re-evaluates it during
/// hydration; both read the UTC calendar so the text only differs if the
/// year rolls over between the two.
pub fn current_year() -> i32 {
    #[cfg(feature = "hydrate")]
    {
        let year = js_sys::Date::new_0().get_utc_full_year();
        i32::try_from(year).unwrap_or(i32::MAX)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        time::OffsetDateTime::now_utc().year()
    }
}

/// Footer copyright line.
pub fn copyright_line(year: i32, owner: &str) -> String {
    format!("© {year} {owner}. All rights reserved.")
}
