//! Built-in demonstration catalog.
//!
//! Used when no catalog file is configured or the configured one cannot be
//! loaded.

use std::collections::{BTreeMap, BTreeSet};

use super::Catalog;
use crate::models::{Course, Difficulty, PredefinedProgram};

struct SampleCourse {
    id: u64,
    title: &'static str,
    duration: u32,
    category: &'static str,
    tools: &'static [&'static str],
    description: &'static str,
    topics: &'static [&'static str],
    practical_tasks: &'static [&'static str],
    prerequisites: &'static [u64],
    difficulty: Difficulty,
}

const SAMPLE_COURSES: &[SampleCourse] = &[
    SampleCourse {
        id: 1,
        title: "Introduction to artificial intelligence",
        duration: 60,
        category: "basic",
        tools: &["General theory"],
        description: "AI fundamentals, history, current capabilities and limits. How neural networks work.",
        topics: &["History of AI", "Kinds of neural networks", "Current capabilities", "Ethical aspects"],
        practical_tasks: &["Analyse everyday examples of AI"],
        prerequisites: &[],
        difficulty: Difficulty::Beginner,
    },
    SampleCourse {
        id: 2,
        title: "ChatGPT basics",
        duration: 60,
        category: "basic",
        tools: &["ChatGPT"],
        description: "The ChatGPT interface, core features, safety settings and first prompts.",
        topics: &["ChatGPT interface", "Safety settings", "Basic prompts", "Working with files"],
        practical_tasks: &["Set up a workspace", "Create a personal GPT assistant"],
        prerequisites: &[1],
        difficulty: Difficulty::Beginner,
    },
    SampleCourse {
        id: 3,
        title: "Prompt and context engineering",
        duration: 75,
        category: "intermediate",
        tools: &["ChatGPT", "Claude"],
        description: "Writing effective prompts and managing context to get better results.",
        topics: &["Prompt structure", "Roles and tasks", "Gathering context", "Iterative refinement"],
        practical_tasks: &["Build prompt templates", "Gather context for a real project"],
        prerequisites: &[2],
        difficulty: Difficulty::Intermediate,
    },
    SampleCourse {
        id: 4,
        title: "Advanced ChatGPT features",
        duration: 90,
        category: "intermediate",
        tools: &["ChatGPT"],
        description: "Deep research, projects, canvas, data analysis and code execution in ChatGPT.",
        topics: &["Deep research", "Projects", "Canvas and artifacts", "Data analysis"],
        practical_tasks: &["Build an interactive project", "Analyse a real data set"],
        prerequisites: &[3],
        difficulty: Difficulty::Intermediate,
    },
    SampleCourse {
        id: 5,
        title: "Claude and artifacts",
        duration: 60,
        category: "intermediate",
        tools: &["Claude"],
        description: "Working with Claude, building interactive artifacts, web pages and small apps.",
        topics: &["Claude interface", "Creating artifacts", "HTML/CSS generation", "Publishing on GitHub"],
        practical_tasks: &["Create an interactive web page", "Publish it on GitHub Pages"],
        prerequisites: &[3],
        difficulty: Difficulty::Intermediate,
    },
    SampleCourse {
        id: 6,
        title: "Research with Perplexity",
        duration: 45,
        category: "intermediate",
        tools: &["Perplexity"],
        description: "Using Perplexity for research, finding current information and writing sourced reports.",
        topics: &["Search queries", "Working with sources", "Writing reports", "Pro features"],
        practical_tasks: &["Market research", "Write an analytical report"],
        prerequisites: &[1],
        difficulty: Difficulty::Intermediate,
    },
    SampleCourse {
        id: 7,
        title: "Microsoft Copilot at work",
        duration: 60,
        category: "intermediate",
        tools: &["Copilot"],
        description: "Bringing Copilot into everyday workflows, Office 365 integration, task automation.",
        topics: &["Office integration", "Document automation", "Collaboration", "Security"],
        practical_tasks: &["Automate reports", "Create presentations"],
        prerequisites: &[2],
        difficulty: Difficulty::Intermediate,
    },
    SampleCourse {
        id: 8,
        title: "Building AI agents",
        duration: 120,
        category: "advanced",
        tools: &["ChatGPT", "Claude", "Agent platforms"],
        description: "Designing autonomous AI agents that solve complex tasks and automate processes.",
        topics: &["Agent architecture", "Reasoning chains", "API integration", "Monitoring"],
        practical_tasks: &["Build an automation agent", "Integrate external services"],
        prerequisites: &[4, 5],
        difficulty: Difficulty::Advanced,
    },
    SampleCourse {
        id: 9,
        title: "Images and multimedia",
        duration: 75,
        category: "intermediate",
        tools: &["ChatGPT", "DALL-E", "Sora"],
        description: "Generating and editing images, producing video content with AI tools.",
        topics: &["Image generation", "Photo editing", "Video creation", "Prompts for visuals"],
        practical_tasks: &["Create branding materials", "Edit a video presentation"],
        prerequisites: &[2],
        difficulty: Difficulty::Intermediate,
    },
    SampleCourse {
        id: 10,
        title: "AI ethics and safety",
        duration: 45,
        category: "basic",
        tools: &["General theory"],
        description: "Ethical use of AI, data protection and preventing misuse.",
        topics: &["Ethical principles", "Data protection", "AI bias", "Corporate policies"],
        practical_tasks: &["Draft an AI usage policy", "Audit AI processes"],
        prerequisites: &[1],
        difficulty: Difficulty::Beginner,
    },
];

const SAMPLE_PROGRAMS: &[(&str, &str, &[u64])] = &[
    ("basic", "Basic program", &[1, 2, 10]),
    ("intensive", "Intensive program", &[1, 2, 3, 4, 5, 6]),
    ("advanced", "Advanced program", &[1, 2, 3, 4, 5, 8]),
];

impl SampleCourse {
    fn to_course(&self) -> Course {
        Course {
            id: self.id,
            title: self.title.to_string(),
            description: self.description.to_string(),
            category: Some(self.category.to_string()),
            duration: self.duration,
            tools: self.tools.iter().map(|s| (*s).to_string()).collect(),
            topics: self.topics.iter().map(|s| (*s).to_string()).collect(),
            practical_tasks: self.practical_tasks.iter().map(|s| (*s).to_string()).collect(),
            prerequisites: self.prerequisites.iter().copied().collect::<BTreeSet<_>>(),
            difficulty: self.difficulty,
            price: 0.0,
        }
    }
}

impl Catalog {
    /// Returns the built-in demonstration catalog: ten courses and the
    /// `basic`, `intensive` and `advanced` programs.
    pub fn sample() -> Self {
        let courses: Vec<Course> = SAMPLE_COURSES.iter().map(SampleCourse::to_course).collect();

        let programs: BTreeMap<String, PredefinedProgram> = SAMPLE_PROGRAMS
            .iter()
            .map(|(id, name, ids)| {
                let duration = ids
                    .iter()
                    .filter_map(|id| courses.iter().find(|course| course.id == *id))
                    .map(|course| course.duration)
                    .sum();
                (
                    (*id).to_string(),
                    PredefinedProgram {
                        name: (*name).to_string(),
                        courses: ids.to_vec(),
                        duration,
                    },
                )
            })
            .collect();

        Self {
            courses: courses.into_iter().map(std::sync::Arc::new).collect(),
            programs,
        }
    }
}
