use anyhow::{Context, Result};
use csv::WriterBuilder;

use crate::domain::models::Review;

const HEADER: [&str; 7] = [
    "ID",
    "Дата",
    "Пользователь",
    "Ресторан",
    "Рейтинг",
    "Комментарий",
    "Статус ответа",
];

const STATUS_RESPONDED: &str = "Отвечен";
const STATUS_PENDING: &str = "Без ответа";

/// Render reviews as the semicolon-delimited export file offered to
/// managers. Fields are quoted only when they contain the delimiter, a
/// quote or a newline, with embedded quotes doubled.
pub fn export_reviews_csv(reviews: &[Review]) -> Result<String> {
    let mut writer = WriterBuilder::new()
        .delimiter(b';')
        .from_writer(Vec::new());

    writer.write_record(HEADER).context("Failed to write CSV header")?;

    for review in reviews {
        writer
            .write_record(&review_record(review))
            .with_context(|| format!("Failed to write CSV row for review {}", review.id))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| anyhow::anyhow!("Failed to flush CSV writer: {e}"))?;
    String::from_utf8(bytes).context("CSV output was not valid UTF-8")
}

fn review_record(review: &Review) -> [String; 7] {
    [
        review.id.clone(),
        review.created_at.format("%d.%m.%Y").to_string(),
        review.author_name.clone(),
        review.restaurant_name.clone(),
        format!("{:.1}", review.rating),
        review.text.clone(),
        if review.responded { STATUS_RESPONDED } else { STATUS_PENDING }.to_string(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rating::normalize_review;
    use serde_json::json;

    fn review(id: u32, text: &str) -> Review {
        normalize_review(&json!({
            "id": id,
            "text": text,
            "rating": 4.5,
            "user_name": "Иван",
            "restaurant_name": "Траттория",
            "created_at": "2024-03-10T18:00:00Z",
            "responded": true
        }))
        .unwrap()
    }

    #[test]
    fn writes_expected_header_and_delimiter() {
        let csv = export_reviews_csv(&[review(1, "ок")]).unwrap();
        let mut lines = csv.lines();
        assert_eq!(
            lines.next().unwrap(),
            "ID;Дата;Пользователь;Ресторан;Рейтинг;Комментарий;Статус ответа"
        );
        assert_eq!(lines.next().unwrap(), "1;10.03.2024;Иван;Траттория;4.5;ок;Отвечен");
    }

    #[test]
    fn quotes_fields_containing_delimiter_or_quotes() {
        let csv = export_reviews_csv(&[review(2, "вкусно; но дорого, и \"шумно\"")]).unwrap();
        let row = csv.lines().nth(1).unwrap();
        assert!(row.contains("\"вкусно; но дорого, и \"\"шумно\"\"\""));
    }

    #[test]
    fn round_trips_through_a_csv_parser() {
        let text = "строка с ;\nи \"кавычками\"";
        let csv = export_reviews_csv(&[review(3, text)]).unwrap();

        let mut reader = csv::ReaderBuilder::new()
            .delimiter(b';')
            .from_reader(csv.as_bytes());
        let record = reader.records().next().unwrap().unwrap();
        assert_eq!(&record[5], text);
        assert_eq!(&record[0], "3");
    }
}
