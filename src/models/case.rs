//! Smoke test case definitions
//!
//! The fixed list of requests sent against the API service.

use serde::{Deserialize, Serialize};
use serde_json::json;
use std::fmt;

/// HTTP method used by a smoke case
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    Get,
    Post,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The smoke test cases run against the service
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SmokeCase {
    HealthCheck,
    CardGeneration,
    PhotoProcessing,
}

impl SmokeCase {
    /// Get case number (1-3)
    pub fn number(&self) -> u8 {
        match self {
            SmokeCase::HealthCheck => 1,
            SmokeCase::CardGeneration => 2,
            SmokeCase::PhotoProcessing => 3,
        }
    }

    /// Get case display name
    pub fn name(&self) -> &'static str {
        match self {
            SmokeCase::HealthCheck => "Health Check",
            SmokeCase::CardGeneration => "Card Generation (with fake data)",
            SmokeCase::PhotoProcessing => "Photo Processing (with fake data)",
        }
    }

    /// HTTP method for this case
    pub fn method(&self) -> Method {
        match self {
            SmokeCase::HealthCheck => Method::Get,
            SmokeCase::CardGeneration | SmokeCase::PhotoProcessing => Method::Post,
        }
    }

    /// Request path relative to the base URL
    pub fn path(&self) -> &'static str {
        match self {
            SmokeCase::HealthCheck => "/health",
            SmokeCase::CardGeneration => "/v1/card/generate",
            SmokeCase::PhotoProcessing => "/v1/photo/process",
        }
    }

    /// Synthetic JSON payload, if the case sends one
    pub fn body(&self) -> Option<serde_json::Value> {
        match self {
            SmokeCase::HealthCheck => None,
            SmokeCase::CardGeneration => Some(json!({
                "telegram_id": 123456789,
                "photo_file_id": "fake_photo_file_id_smoke_test",
                "characteristics": {
                    "name": "Test Product",
                    "brand": "TestBrand",
                    "category": "Electronics"
                },
                "target_audience": "Tech enthusiasts aged 25-40",
                "selling_points": "Durable, affordable, well reviewed"
            })),
            SmokeCase::PhotoProcessing => Some(json!({
                "telegram_id": 123456789,
                "photo_file_id": "fake_photo_file_id_smoke_test",
                "prompt": "Remove the background and improve lighting"
            })),
        }
    }

    /// Get all cases in run order
    pub fn all() -> Vec<SmokeCase> {
        vec![
            SmokeCase::HealthCheck,
            SmokeCase::CardGeneration,
            SmokeCase::PhotoProcessing,
        ]
    }

    /// Parse from case number
    pub fn from_number(n: u8) -> Option<SmokeCase> {
        match n {
            1 => Some(SmokeCase::HealthCheck),
            2 => Some(SmokeCase::CardGeneration),
            3 => Some(SmokeCase::PhotoProcessing),
            _ => None,
        }
    }
}

impl fmt::Display for SmokeCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Case {}: {}", self.number(), self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_numbers() {
        assert_eq!(SmokeCase::HealthCheck.number(), 1);
        assert_eq!(SmokeCase::PhotoProcessing.number(), 3);
    }

    #[test]
    fn test_case_from_number() {
        assert_eq!(SmokeCase::from_number(1), Some(SmokeCase::HealthCheck));
        assert_eq!(SmokeCase::from_number(3), Some(SmokeCase::PhotoProcessing));
        assert_eq!(SmokeCase::from_number(4), None);
    }

    #[test]
    fn test_all_cases_in_order() {
        let all = SmokeCase::all();
        assert_eq!(all.len(), 3);
        let numbers: Vec<u8> = all.iter().map(|c| c.number()).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
    }

    #[test]
    fn test_methods_and_paths() {
        assert_eq!(SmokeCase::HealthCheck.method(), Method::Get);
        assert_eq!(SmokeCase::HealthCheck.path(), "/health");
        assert_eq!(SmokeCase::CardGeneration.method(), Method::Post);
        assert_eq!(SmokeCase::CardGeneration.path(), "/v1/card/generate");
        assert_eq!(SmokeCase::PhotoProcessing.path(), "/v1/photo/process");
    }

    #[test]
    fn test_bodies() {
        assert!(SmokeCase::HealthCheck.body().is_none());

        let card = SmokeCase::CardGeneration.body().unwrap();
        assert_eq!(card["telegram_id"], 123456789);
        assert!(card["characteristics"]["brand"].is_string());

        let photo = SmokeCase::PhotoProcessing.body().unwrap();
        assert!(photo["prompt"].is_string());
    }
}
