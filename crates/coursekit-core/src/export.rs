//! Plain-text export of a program and the sinks it can be written to.

use std::{
    fmt::Write as _,
    io::{self, Write},
    sync::Arc,
};

use crate::{display::format_duration, models::Course};

/// Heading of an exported program.
pub const EXPORT_TITLE: &str = "TRAINING PROGRAM";

/// Text exported for a program without courses.
pub const EMPTY_PROGRAM_TEXT: &str = "No courses selected";

/// Destination for exported program text, such as a clipboard.
pub trait ClipboardSink {
    /// Writes the full text to the sink.
    fn write_text(&mut self, text: &str) -> io::Result<()>;
}

/// Sink adapter for anything implementing [`io::Write`].
pub struct WriterSink<W: Write>(pub W);

impl<W: Write> ClipboardSink for WriterSink<W> {
    fn write_text(&mut self, text: &str) -> io::Result<()> {
        self.0.write_all(text.as_bytes())?;
        self.0.write_all(b"\n")?;
        self.0.flush()
    }
}

/// In-memory sink, handy for previews and tests.
impl ClipboardSink for String {
    fn write_text(&mut self, text: &str) -> io::Result<()> {
        self.clear();
        self.push_str(text);
        Ok(())
    }
}

/// Formats courses as a numbered plain-text program.
///
/// Each course lists its duration, tools, level and, when present, its
/// description; the text ends with the total duration and the lesson count.
///
/// # Examples
///
/// ```rust
/// use coursekit_core::{export::format_program_text, Catalog};
///
/// let catalog = Catalog::sample();
/// let text = format_program_text(&catalog.courses()[..1]);
/// assert!(text.starts_with("TRAINING PROGRAM\n\n1. "));
/// assert!(text.ends_with("LESSON COUNT: 1"));
///
/// assert_eq!(format_program_text(&[]), "No courses selected");
/// ```
pub fn format_program_text(courses: &[Arc<Course>]) -> String {
    if courses.is_empty() {
        return EMPTY_PROGRAM_TEXT.to_string();
    }

    let mut output = format!("{EXPORT_TITLE}\n\n");
    let mut total_duration: u32 = 0;

    // Writing to a String cannot fail
    for (index, course) in courses.iter().enumerate() {
        let _ = writeln!(output, "{}. {}", index + 1, course.title);
        let _ = writeln!(output, "   Duration: {}", format_duration(course.duration));
        let _ = writeln!(output, "   Tools: {}", course.tools.join(", "));
        let _ = writeln!(output, "   Level: {}", course.difficulty.label());
        if let Some(description) = course.description() {
            let _ = writeln!(output, "   Description: {description}");
        }
        output.push('\n');
        total_duration = total_duration.saturating_add(course.duration);
    }

    let _ = writeln!(output, "TOTAL DURATION: {}", format_duration(total_duration));
    let _ = write!(output, "LESSON COUNT: {}", courses.len());
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Catalog;

    #[test]
    fn test_export_layout() {
        let catalog = Catalog::sample();
        let courses = vec![
            catalog.get_by_id(1).cloned().expect("course 1"),
            catalog.get_by_id(6).cloned().expect("course 6"),
        ];
        let text = format_program_text(&courses);

        let expected_head = format!(
            "TRAINING PROGRAM\n\n1. {}\n   Duration: 1 h\n   Tools: General theory\n   Level: Beginner\n   Description: {}\n\n2. {}\n",
            courses[0].title, courses[0].description, courses[1].title
        );
        assert!(text.starts_with(&expected_head), "unexpected export:\n{text}");
        assert!(text.contains("   Duration: 45 min\n   Tools: Perplexity\n   Level: Intermediate\n"));
        assert!(text.ends_with("\n\nTOTAL DURATION: 1 h 45 min\nLESSON COUNT: 2"));
    }

    #[test]
    fn test_export_skips_empty_description() {
        let catalog = Catalog::sample();
        let mut course = (**catalog.get_by_id(1).expect("course 1")).clone();
        course.description = "   ".to_string();
        let text = format_program_text(&[Arc::new(course)]);
        assert!(!text.contains("Description:"));
    }

    #[test]
    fn test_export_total_duration_saturates() {
        let catalog = Catalog::sample();
        let mut course = (**catalog.get_by_id(1).expect("course 1")).clone();
        course.duration = u32::MAX;
        let mut second = course.clone();
        second.id = 2;
        let text = format_program_text(&[Arc::new(course), Arc::new(second)]);
        let expected = format!("TOTAL DURATION: {}
", format_duration(u32::MAX));
        assert!(text.contains(&expected), "unexpected export:
{text}");
        assert!(text.ends_with("LESSON COUNT: 2"));
    }

    #[test]
    fn test_writer_sink_appends_newline() {
        let mut sink = WriterSink(Vec::new());
        sink.write_text("hello").expect("write to vec");
        assert_eq!(sink.0, b"hello\n");
    }

    #[test]
    fn test_string_sink_replaces_contents() {
        let mut clipboard = String::from("old");
        clipboard.write_text("new").expect("write to string");
        assert_eq!(clipboard, "new");
    }
}
