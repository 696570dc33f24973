use colored::Colorize;

use crate::display::{round_to_half_star, russian_plural};
use crate::domain::models::{CategoryRating, Review, ReviewKind, StatsSnapshot, StatsTrends};

/// Star bar rounded to the nearest half star, e.g. `★★★★½`
pub fn stars(rating: f64) -> String {
    let rounded = round_to_half_star(rating.clamp(0.0, 5.0));
    let full = rounded.floor() as usize;
    let mut bar = "★".repeat(full);
    if rounded - full as f64 >= 0.5 {
        bar.push('½');
    }
    bar
}

pub fn review_count(count: usize) -> String {
    format!("{} {}", count, russian_plural(count, "отзыв", "отзыва", "отзывов"))
}

pub fn render_snapshot(snapshot: &StatsSnapshot, trends: &StatsTrends) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Всего: {} {}\n",
        review_count(snapshot.total_reviews),
        format_trend(trends.total_reviews)
    ));
    out.push_str(&format!(
        "Средний рейтинг: {:.1} {} {}\n",
        snapshot.average_rating,
        stars(snapshot.average_rating),
        format_trend(trends.average_rating)
    ));
    out.push_str(&format!("С ответом: {}\n", snapshot.responded_reviews));
    out.push_str(&format!(
        "Без ответа: {} {}\n",
        snapshot.pending_reviews,
        format_trend(trends.pending_reviews)
    ));
    out.push_str(&format!("Ресторанов: {}\n", snapshot.total_restaurants));
    out
}

pub fn render_category_ratings(ratings: &[CategoryRating]) -> String {
    let mut out = String::new();
    for rating in ratings {
        out.push_str(&format!(
            "  {:<20} {:.1} {:<6} {} ({})\n",
            rating.name,
            rating.value,
            stars(rating.value),
            kind_label(rating.kind),
            review_count(rating.count)
        ));
    }
    out
}

pub fn render_review(review: &Review) -> String {
    let status = if review.responded {
        "отвечен".green()
    } else {
        "без ответа".yellow()
    };

    let mut out = format!(
        "[{}] {} — {} — {:.1} {} — {} — {}\n",
        review.id,
        review.created_at.format("%d.%m.%Y"),
        review.author_name,
        review.rating,
        stars(review.rating),
        kind_label(review.kind),
        status
    );
    if !review.text.is_empty() {
        out.push_str(&format!("    {}\n", review.text));
    }
    if let Some(response) = &review.response {
        out.push_str(&format!("    Ответ: {}\n", response));
    }
    out
}

fn kind_label(kind: ReviewKind) -> &'static str {
    match kind {
        ReviewKind::InRestaurant => "в ресторане",
        ReviewKind::Delivery => "доставка",
    }
}

fn format_trend(percent: i64) -> String {
    if percent > 0 {
        format!("(+{percent}%)").green().to_string()
    } else if percent < 0 {
        format!("({percent}%)").red().to_string()
    } else {
        String::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn star_bar_rounds_to_half_stars() {
        assert_eq!(stars(4.5), "★★★★½");
        assert_eq!(stars(4.24), "★★★★");
        assert_eq!(stars(5.0), "★★★★★");
        assert_eq!(stars(0.2), "");
    }

    #[test]
    fn review_counts_are_pluralized() {
        assert_eq!(review_count(1), "1 отзыв");
        assert_eq!(review_count(3), "3 отзыва");
        assert_eq!(review_count(12), "12 отзывов");
    }

    #[test]
    fn snapshot_rendering_mentions_all_counters() {
        let snapshot = StatsSnapshot {
            total_reviews: 21,
            responded_reviews: 15,
            pending_reviews: 6,
            average_rating: 4.2,
            total_restaurants: 3,
        };
        let rendered = render_snapshot(&snapshot, &StatsTrends::default());
        assert!(rendered.contains("21 отзыв"));
        assert!(rendered.contains("4.2"));
        assert!(rendered.contains("Без ответа: 6"));
        assert!(rendered.contains("Ресторанов: 3"));
    }
}
