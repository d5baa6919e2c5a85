#[cfg(test)]
mod model_tests {
    use std::{collections::BTreeSet, str::FromStr};

    use jiff::Timestamp;
    use serde_json::json;

    use crate::models::{
        Course, Difficulty, PredefinedProgram, ProgramSnapshot, ProgramSummary, ValidationError,
        ValidationReport, ValidationWarning,
    };

    fn create_test_course() -> Course {
        Course {
            id: 8,
            title: "Building AI agents".to_string(),
            description: "Designing autonomous agents".to_string(),
            category: Some("advanced".to_string()),
            duration: 120,
            tools: vec!["ChatGPT".to_string(), "Claude".to_string()],
            topics: vec!["Agent architecture".to_string()],
            practical_tasks: vec!["Build an automation agent".to_string()],
            prerequisites: [4, 5].into_iter().collect::<BTreeSet<_>>(),
            difficulty: Difficulty::Advanced,
            price: 12500.0,
        }
    }

    #[test]
    fn test_course_uses_catalog_field_names() {
        let value = serde_json::to_value(create_test_course()).expect("serialize course");
        assert_eq!(value["practicalTasks"], json!(["Build an automation agent"]));
        assert_eq!(value["prerequisites"], json!([4, 5]));
        assert_eq!(value["difficulty"], json!("advanced"));
    }

    #[test]
    fn test_course_optional_fields_default() {
        let course: Course = serde_json::from_value(json!({
            "id": 3,
            "title": "Prompting",
            "duration": 75,
            "difficulty": "intermediate"
        }))
        .expect("deserialize course");

        assert!(course.description().is_none());
        assert!(course.category.is_none());
        assert!(course.tools.is_empty());
        assert!(course.prerequisites.is_empty());
        assert_eq!(course.price, 0.0);
    }

    #[test]
    fn test_course_rejects_unknown_difficulty() {
        let result: Result<Course, _> = serde_json::from_value(json!({
            "id": 3,
            "title": "Prompting",
            "duration": 75,
            "difficulty": "expert"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_course_helpers() {
        let course = create_test_course();
        assert!(course.requires(4));
        assert!(!course.requires(8));
        assert!(course.has_tool("Claude"));
        assert!(!course.has_tool("claude"));
        assert!(course.matches_keyword("agents"));
        assert!(course.matches_keyword("chatgpt"));
        assert!(!course.matches_keyword("perplexity"));
    }

    #[test]
    fn test_difficulty_parsing() {
        assert_eq!(Difficulty::from_str("Beginner"), Ok(Difficulty::Beginner));
        assert_eq!(
            Difficulty::from_str(" advanced "),
            Ok(Difficulty::Advanced)
        );
        assert!(Difficulty::from_str("expert").is_err());

        for level in Difficulty::ALL {
            assert_eq!(Difficulty::from_str(level.as_str()), Ok(level));
        }
    }

    #[test]
    fn test_course_display() {
        let output = create_test_course().to_string();
        assert!(output.starts_with("# 8. Building AI agents\n"));
        assert!(output.contains("- Duration: 2 h\n"));
        assert!(output.contains("- Level: Advanced\n"));
        assert!(output.contains("- Tools: ChatGPT, Claude\n"));
        assert!(output.contains("- Price: 12 500 ₽\n"));
        assert!(output.contains("- Requires: 4, 5\n"));
        assert!(output.contains("## Topics"));
        assert!(output.contains("## Practical tasks"));
    }

    #[test]
    fn test_summary_display() {
        let summary = ProgramSummary {
            total_duration: 165,
            total_lessons: 3,
            total_price: 0.0,
        };
        assert_eq!(
            summary.to_string(),
            "- **Duration**: 2 h 45 min\n- **Lessons**: 3\n- **Price**: Free\n"
        );
    }

    #[test]
    fn test_validation_report_display() {
        let invalid = ValidationReport::new(vec![], vec![ValidationError::Empty]);
        let output = invalid.to_string();
        assert!(output.starts_with("Program is not valid."));
        assert!(output.contains("## Errors"));
        assert!(output.contains("- Program has no lessons"));
        assert!(!output.contains("## Warnings"));

        let warned = ValidationReport::new(vec![ValidationWarning::TooShort { total_duration: 45 }], vec![]);
        let output = warned.to_string();
        assert!(warned.is_valid);
        assert!(output.starts_with("Program is valid."));
        assert!(output.contains("- Program is too short (under 1 hour)"));
    }

    #[test]
    fn test_validation_warning_serialization() {
        let value = serde_json::to_value(ValidationWarning::TooLong {
            total_duration: 500,
        })
        .expect("serialize warning");
        assert_eq!(value, json!({ "kind": "too_long", "total_duration": 500 }));
    }

    #[test]
    fn test_predefined_program_display() {
        let program = PredefinedProgram {
            name: "Basic program".to_string(),
            courses: vec![1, 2, 10],
            duration: 165,
        };
        assert_eq!(
            program.to_string(),
            "Basic program (2 h 45 min, courses: 1, 2, 10)"
        );
    }

    #[test]
    fn test_snapshot_serialization() {
        let snapshot = ProgramSnapshot {
            courses: vec![create_test_course()],
            created_at: Some(Timestamp::from_second(1640995200).unwrap()), // 2022-01-01 00:00:00 UTC
            total_duration: 120,
            total_price: 12500.0,
        };

        let value = serde_json::to_value(&snapshot).expect("serialize snapshot");
        assert_eq!(value["createdAt"], json!("2022-01-01T00:00:00Z"));
        assert_eq!(value["totalDuration"], json!(120));

        let output = snapshot.to_string();
        assert!(output.starts_with("1 lessons, 2 h, saved "));

        let undated = ProgramSnapshot {
            created_at: None,
            ..snapshot
        };
        let value = serde_json::to_value(&undated).expect("serialize snapshot");
        assert!(value.get("createdAt").is_none());
        assert_eq!(undated.to_string(), "1 lessons, 2 h");
    }
}
