//! FitCoach Status Tool
//!
//! Provides runtime status information about the FitCoach service.

use std::time::Instant;

use serde::Serialize;
use sysinfo::{Pid, ProcessesToUpdate, System};

use crate::build_info::BuildInfo;

/// Chat usage instructions for AI assistants
pub const CHAT_INSTRUCTIONS: &str = r#"
# FitCoach Chat Instructions

This guide explains how to use the FitCoach tools.

## Overview

FitCoach answers fitness questions in four areas:
1. **BMI** - extract height/weight from text, compute and classify BMI
2. **Nutrition** - per-food nutrition facts
3. **Workouts** - exercise recommendations by muscle group, type, difficulty
4. **Motivation** - quotes, encouragement, and practical tips

## Choosing a Tool

| Scenario | Tool |
|----------|------|
| Free-form user message, intent unknown | `chat` |
| Text that should contain height and weight | `analyze_measurements` |
| Height and weight already known as numbers | `calculate_bmi` |
| Specific food question | `nutrition_info` |
| Specific workout question | `exercise_recommendations` |
| User needs a boost | `motivation` |

## Measurement Formats

`analyze_measurements` and `chat` recognize:
- Metric: "I am 170 cm tall and weigh 70 kg"
- Imperial: "5 feet 8 inches, 150 pounds" (inches optional)

Metric is tried first; if the text mentions both systems the metric pair
wins. A message with no recognizable pair is NOT an error - the response
asks the user for clarification with example phrasings. Relay that prompt
rather than reporting a failure.

## calculate_bmi Units

- `unit_system: "metric"` (default) - height in meters, weight in kilograms
- `unit_system: "imperial"` - height in inches, weight in pounds

Height and weight must be strictly positive.

## BMI Categories

| BMI | Category |
|-----|----------|
| below 18.5 | Underweight |
| 18.5 - 24.9 | Normal weight |
| 25 - 29.9 | Overweight |
| 30 and above | Obese |

## Remote Lookups

Nutrition and exercise data come from API Ninjas when API_NINJAS_KEY is
set. Without a key (or on request failure) FitCoach answers from its
built-in exercise catalog and general nutrition advice; the response's
`source` field says which path was taken.
"#;

/// Runtime status of the FitCoach service
#[derive(Debug, Clone, Serialize)]
pub struct FitCoachStatus {
    /// Build information
    pub build_number: u64,
    pub build_timestamp: &'static str,
    pub version: &'static str,

    /// Remote lookup configuration
    pub api_configured: bool,
    pub api_base_url: String,

    /// Process information
    pub uptime_seconds: u64,
    pub process_id: u32,
    pub memory_usage_bytes: u64,
}

/// Status tracker for collecting runtime information
pub struct StatusTracker {
    start_time: Instant,
    api_configured: bool,
    api_base_url: String,
}

impl StatusTracker {
    /// Create a new status tracker
    pub fn new(api_configured: bool, api_base_url: String) -> Self {
        Self {
            start_time: Instant::now(),
            api_configured,
            api_base_url,
        }
    }

    /// Get the current status
    pub fn get_status(&self) -> FitCoachStatus {
        let build_info = BuildInfo::current();

        // Get process info
        let pid = std::process::id();
        let mut sys = System::new();
        sys.refresh_processes(ProcessesToUpdate::Some(&[Pid::from_u32(pid)]));

        let memory_usage_bytes = sys
            .process(Pid::from_u32(pid))
            .map(|p| p.memory())
            .unwrap_or(0);

        FitCoachStatus {
            build_number: build_info.build_number,
            build_timestamp: build_info.build_timestamp,
            version: build_info.version,
            api_configured: self.api_configured,
            api_base_url: self.api_base_url.clone(),
            uptime_seconds: self.start_time.elapsed().as_secs(),
            process_id: pid,
            memory_usage_bytes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_reports_configuration() {
        let tracker = StatusTracker::new(false, "https://example.invalid/v1".to_string());
        let status = tracker.get_status();
        assert!(!status.api_configured);
        assert_eq!(status.api_base_url, "https://example.invalid/v1");
        assert_eq!(status.process_id, std::process::id());
    }
}
