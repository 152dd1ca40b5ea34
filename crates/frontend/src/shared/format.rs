/// Renders a numeric figure without a trailing `.0`.
///
/// Upstream money and score fields are fractional, but most values are
/// whole numbers; `926.0` should read as `926` while `871.5` stays as is.
pub fn display_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_numbers_drop_the_fraction() {
        assert_eq!(display_number(926.0), "926");
        assert_eq!(display_number(0.0), "0");
        assert_eq!(display_number(91.0), "91");
    }

    #[test]
    fn fractional_numbers_keep_it() {
        assert_eq!(display_number(871.5), "871.5");
        assert_eq!(display_number(1146.25), "1146.25");
    }
}
