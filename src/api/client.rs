use anyhow::Result;
use log::info;
use serde_json::{Value, json};

use crate::api::error::ApiError;
use crate::auth::AuthStore;
use crate::config::ApiSettings;
use crate::display::normalize_image_url;
use crate::domain::models::{Restaurant, ReviewKind, UserAccount};
use crate::http::HttpClient;

/// Client for the review platform REST API. Review payloads are returned
/// raw; callers run them through the normalizer.
pub struct PlatformClient {
    http: HttpClient,
}

impl PlatformClient {
    pub fn new(settings: &ApiSettings, auth: AuthStore) -> Result<Self> {
        let http = HttpClient::new(settings, auth)?;
        Ok(Self { http })
    }

    // --- Restaurants ---

    pub async fn list_restaurants(&self) -> Result<Vec<Restaurant>, ApiError> {
        let data = self.http.get_json("/restaurants").await?;
        let items = extract_array(data, "restaurants");
        Ok(serde_json::from_value(Value::Array(items))?)
    }

    pub async fn get_restaurant(&self, restaurant_id: &str) -> Result<Restaurant, ApiError> {
        let data = self.http.get_json(&format!("/restaurants/{restaurant_id}")).await?;
        Ok(serde_json::from_value(data)?)
    }

    /// Raw review records for one restaurant, shape varies by endpoint
    pub async fn restaurant_reviews(&self, restaurant_id: &str) -> Result<Vec<Value>, ApiError> {
        let data = self
            .http
            .get_json(&format!("/restaurants/{restaurant_id}/reviews"))
            .await?;
        Ok(extract_array(data, "reviews"))
    }

    pub async fn submit_review(
        &self,
        restaurant_id: &str,
        text: &str,
        rating: f64,
    ) -> Result<Value, ApiError> {
        require_text(text, "Текст отзыва не может быть пустым")?;
        let body = json!({"text": text, "rating": rating});
        self.http
            .post_json(&format!("/restaurants/{restaurant_id}/reviews"), &body)
            .await
    }

    pub async fn update_review(
        &self,
        review_id: &str,
        text: &str,
        rating: f64,
    ) -> Result<Value, ApiError> {
        require_text(text, "Текст отзыва не может быть пустым")?;
        let body = json!({"text": text, "rating": rating});
        self.http.put_json(&format!("/reviews/{review_id}"), &body).await
    }

    pub async fn delete_review(&self, review_id: &str) -> Result<(), ApiError> {
        self.http.delete(&format!("/reviews/{review_id}")).await
    }

    /// Multipart image upload; the returned URL is normalized against the
    /// API base so relative upload paths stay usable
    pub async fn upload_restaurant_image(
        &self,
        restaurant_id: &str,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<String, ApiError> {
        let part = reqwest::multipart::Part::bytes(bytes).file_name(file_name.to_string());
        let form = reqwest::multipart::Form::new().part("image", part);

        let data = self
            .http
            .post_multipart(&format!("/restaurants/{restaurant_id}/image"), form)
            .await?;

        let url = data
            .get("imageUrl")
            .and_then(Value::as_str)
            .unwrap_or_default();
        Ok(normalize_image_url(self.http.base_url(), url))
    }

    /// Menu PDFs are static assets; existence is probed with HEAD first
    pub async fn menu_exists(&self, restaurant_id: &str) -> Result<bool, ApiError> {
        self.http.head_exists(&format!("/menus/{restaurant_id}.pdf")).await
    }

    // --- Manager dashboard ---

    pub async fn manager_reviews(&self) -> Result<Vec<Value>, ApiError> {
        let data = self.http.get_json("/manager/reviews").await?;
        let items = extract_array(data, "reviews");
        info!("Fetched {} manager reviews", items.len());
        Ok(items)
    }

    pub async fn respond_to_review(&self, review_id: &str, text: &str) -> Result<Value, ApiError> {
        require_text(text, "Текст ответа не может быть пустым")?;
        let body = json!({"reviewId": review_id, "text": text});
        self.http.post_json("/manager/reviews/respond", &body).await
    }

    pub async fn update_review_type(
        &self,
        review_id: &str,
        kind: ReviewKind,
    ) -> Result<Value, ApiError> {
        let body = json!({"reviewId": review_id, "type": kind.as_str()});
        self.http.post_json("/manager/reviews/update-type", &body).await
    }

    // --- Admin panel ---

    pub async fn admin_users(&self) -> Result<Vec<UserAccount>, ApiError> {
        let data = self.http.get_json("/admin/users").await?;
        let items = extract_array(data, "users");
        Ok(serde_json::from_value(Value::Array(items))?)
    }

    pub async fn block_user(&self, user_id: &str, reason: &str) -> Result<(), ApiError> {
        require_text(reason, "Укажите причину блокировки")?;
        let body = json!({"reason": reason});
        self.http
            .post_json(&format!("/admin/users/{user_id}/block"), &body)
            .await?;
        Ok(())
    }

    pub async fn unblock_user(&self, user_id: &str) -> Result<(), ApiError> {
        self.http
            .post_json(&format!("/admin/users/{user_id}/unblock"), &json!({}))
            .await?;
        Ok(())
    }

    pub async fn set_user_role(&self, user_id: &str, role: &str) -> Result<(), ApiError> {
        self.http
            .put_json(&format!("/admin/users/{user_id}/role"), &json!({"role": role}))
            .await?;
        Ok(())
    }
}

/// Endpoints disagree on whether lists arrive bare or wrapped in an object
fn extract_array(data: Value, key: &str) -> Vec<Value> {
    match data {
        Value::Array(items) => items,
        Value::Object(mut map) => match map.remove(key) {
            Some(Value::Array(items)) => items,
            _ => Vec::new(),
        },
        _ => Vec::new(),
    }
}

fn require_text(text: &str, message: &str) -> Result<(), ApiError> {
    if text.trim().is_empty() {
        return Err(ApiError::Validation(message.to_string()));
    }
    Ok(())
}
