//! Common business operations shared by the interfaces.
//!
//! These helpers hold logic that is not part of the program builder itself
//! but must behave the same in every front end: turning loosely typed
//! listing parameters into a [`CourseFilter`], and mapping errors to user
//! notifications.

use std::{str::FromStr, sync::Arc};

use crate::{
    catalog::{Catalog, CourseFilter},
    display::Notification,
    models::{Course, Difficulty},
    params::ListCourses,
    ProgramError, Result,
};

/// Build a catalog filter from listing parameters.
///
/// # Errors
///
/// * `ProgramError::InvalidInput` - When the difficulty name is unknown
///
/// # Examples
///
/// ```rust
/// # use coursekit_core::{operations::create_course_filter, params::ListCourses};
/// let filter = create_course_filter(&ListCourses {
///     difficulty: Some("advanced".to_string()),
///     ..Default::default()
/// })?;
/// assert!(filter.difficulty.is_some());
///
/// let invalid = create_course_filter(&ListCourses {
///     difficulty: Some("expert".to_string()),
///     ..Default::default()
/// });
/// assert!(invalid.is_err());
/// # Result::<(), coursekit_core::ProgramError>::Ok(())
/// ```
pub fn create_course_filter(params: &ListCourses) -> Result<CourseFilter> {
    let difficulty = params
        .difficulty
        .as_deref()
        .map(|name| {
            Difficulty::from_str(name).map_err(|_| {
                ProgramError::invalid_input("difficulty").with_reason(format!(
                    "Invalid difficulty: {name}. Must be 'beginner', 'intermediate', or 'advanced'"
                ))
            })
        })
        .transpose()?;

    Ok(CourseFilter {
        difficulty,
        tool: params.tool.clone().filter(|tool| !tool.trim().is_empty()),
        max_duration: params.max_duration,
    })
}

/// List catalog courses matching the filter criteria and, when given, the
/// search keyword.
pub fn list_courses(catalog: &Catalog, params: &ListCourses) -> Result<Vec<Arc<Course>>> {
    let filter = create_course_filter(params)?;
    let mut courses = catalog.filter(&filter);

    if let Some(keyword) = params.search.as_deref().filter(|k| !k.trim().is_empty()) {
        let needle = keyword.trim().to_lowercase();
        courses.retain(|course| course.matches_keyword(&needle));
    }

    Ok(courses)
}

/// Map an error to the notification shown to the user.
///
/// Program-rule violations are warnings and an unusable snapshot is
/// informational. Everything else is an error.
pub fn notification_for_error(error: &ProgramError) -> Notification {
    match error {
        ProgramError::MalformedSnapshot { .. } => Notification::info(error.to_string()),
        _ if error.is_program_rule() => Notification::warning(error.to_string()),
        _ => Notification::error(error.to_string()),
    }
}
