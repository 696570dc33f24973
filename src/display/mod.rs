//! Presentation helpers shared by the CLI output paths.

pub mod console;

/// Pick the Russian plural form for `count` items, e.g.
/// `russian_plural(3, "отзыв", "отзыва", "отзывов")` -> "отзыва"
pub fn russian_plural<'a>(count: usize, one: &'a str, few: &'a str, many: &'a str) -> &'a str {
    let rem100 = count % 100;
    if (11..=14).contains(&rem100) {
        return many;
    }
    match count % 10 {
        1 => one,
        2..=4 => few,
        _ => many,
    }
}

/// Round a rating to the nearest half star for display
pub fn round_to_half_star(rating: f64) -> f64 {
    (rating * 2.0).round() / 2.0
}

/// Absolute URLs pass through; relative upload paths are joined onto the
/// API base URL
pub fn normalize_image_url(base_url: &str, raw: &str) -> String {
    if raw.starts_with("http://") || raw.starts_with("https://") {
        return raw.to_string();
    }
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        raw.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plural_forms_follow_russian_rules() {
        let forms = |n| russian_plural(n, "отзыв", "отзыва", "отзывов");
        assert_eq!(forms(1), "отзыв");
        assert_eq!(forms(2), "отзыва");
        assert_eq!(forms(5), "отзывов");
        assert_eq!(forms(11), "отзывов");
        assert_eq!(forms(12), "отзывов");
        assert_eq!(forms(21), "отзыв");
        assert_eq!(forms(104), "отзыва");
        assert_eq!(forms(111), "отзывов");
        assert_eq!(forms(0), "отзывов");
    }

    #[test]
    fn rounds_to_half_stars() {
        assert_eq!(round_to_half_star(4.24), 4.0);
        assert_eq!(round_to_half_star(4.25), 4.5);
        assert_eq!(round_to_half_star(4.76), 5.0);
        assert_eq!(round_to_half_star(0.0), 0.0);
    }

    #[test]
    fn image_urls_normalize_against_base() {
        assert_eq!(
            normalize_image_url("https://api.example.com", "/uploads/1.jpg"),
            "https://api.example.com/uploads/1.jpg"
        );
        assert_eq!(
            normalize_image_url("https://api.example.com/", "uploads/1.jpg"),
            "https://api.example.com/uploads/1.jpg"
        );
        assert_eq!(
            normalize_image_url("https://api.example.com", "https://cdn.example.com/1.jpg"),
            "https://cdn.example.com/1.jpg"
        );
    }
}
