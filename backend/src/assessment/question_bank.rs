// src/assessment/question_bank.rs

use crate::models::{
    question::{AnswerOption, Difficulty, Question, WiscarDimension},
    section::Section,
};

const fn likert(value: &'static str, label: &'static str) -> AnswerOption {
    AnswerOption {
        value,
        label,
        correct: false,
    }
}

const fn choice(value: &'static str, label: &'static str, correct: bool) -> AnswerOption {
    AnswerOption {
        value,
        label,
        correct,
    }
}

const AGREEMENT: [AnswerOption; 5] = [
    likert("5", "Strongly Agree"),
    likert("4", "Agree"),
    likert("3", "Neutral"),
    likert("2", "Disagree"),
    likert("1", "Strongly Disagree"),
];

const EXPERIENCE: [AnswerOption; 5] = [
    likert("5", "Extensive experience"),
    likert("4", "Good experience"),
    likert("3", "Some experience"),
    likert("2", "Limited experience"),
    likert("1", "No experience"),
];

const FREQUENCY: [AnswerOption; 5] = [
    likert("5", "Always"),
    likert("4", "Usually"),
    likert("3", "Sometimes"),
    likert("2", "Rarely"),
    likert("1", "Never"),
];

const UNDERSTANDING: [AnswerOption; 5] = [
    likert("5", "Fully understand and embrace this"),
    likert("4", "Understand and am comfortable"),
    likert("3", "Somewhat understand"),
    likert("2", "Limited understanding"),
    likert("1", "Don't understand this environment"),
];

const fn likert_question(id: u32, category: &'static str, prompt: &'static str) -> Question {
    Question {
        id,
        category,
        difficulty: None,
        dimension: None,
        prompt,
        options: &AGREEMENT,
    }
}

const fn technical_question(
    id: u32,
    category: &'static str,
    difficulty: Difficulty,
    prompt: &'static str,
    options: &'static [AnswerOption],
) -> Question {
    Question {
        id,
        category,
        difficulty: Some(difficulty),
        dimension: None,
        prompt,
        options,
    }
}

const fn wiscar_question(
    id: u32,
    dimension: WiscarDimension,
    category: &'static str,
    prompt: &'static str,
    options: &'static [AnswerOption],
) -> Question {
    Question {
        id,
        category,
        difficulty: None,
        dimension: Some(dimension),
        prompt,
        options,
    }
}

pub static PSYCHOLOGICAL: [Question; 6] = [
    likert_question(
        1,
        "Interest Scale (RIASEC)",
        "I enjoy figuring out how websites and applications work behind the scenes.",
    ),
    likert_question(
        2,
        "Personality Compatibility",
        "I prefer structured, systematic approaches to solving complex problems.",
    ),
    likert_question(
        3,
        "Growth Mindset",
        "When I encounter a technical challenge I can't solve immediately, I see it as an exciting learning opportunity.",
    ),
    likert_question(
        4,
        "Work Style Preference",
        "I work best when I can focus deeply on a single complex task for extended periods.",
    ),
    likert_question(
        5,
        "Motivation Profile",
        "I am primarily motivated by understanding how things work rather than external rewards.",
    ),
    likert_question(
        6,
        "Collaboration Style",
        "I enjoy working in teams where I can contribute both technical solutions and creative ideas.",
    ),
];

const TYPEOF_NULL: [AnswerOption; 4] = [
    choice("object", "\"object\"", true),
    choice("null", "\"null\"", false),
    choice("undefined", "\"undefined\"", false),
    choice("string", "\"string\"", false),
];

const ROUTING_LAYER: [AnswerOption; 4] = [
    choice("mongodb", "MongoDB", false),
    choice("express", "Express.js", true),
    choice("angular", "Angular", false),
    choice("nodejs", "Node.js", false),
];

const UPDATE_METHOD: [AnswerOption; 4] = [
    choice("get", "GET", false),
    choice("post", "POST", false),
    choice("put", "PUT", true),
    choice("delete", "DELETE", false),
];

const DATA_BINDING: [AnswerOption; 4] = [
    choice("one-way", "Data flows only from component to template", false),
    choice(
        "two-way",
        "Data can flow both from component to template and template to component",
        true,
    ),
    choice("no-binding", "No data binding exists", false),
    choice("event-only", "Only event binding is possible", false),
];

const DATABASE_KIND: [AnswerOption; 4] = [
    choice("relational", "Relational Database", false),
    choice("nosql", "NoSQL Database", true),
    choice("graph", "Graph Database", false),
    choice("inmemory", "In-Memory Database", false),
];

const NODE_MODEL: [AnswerOption; 4] = [
    choice("multithreading", "Multi-threading capabilities", false),
    choice("eventloop", "Event-driven, non-blocking I/O model", true),
    choice("compiled", "Compiled language performance", false),
    choice("memory", "Large memory allocation", false),
];

const SCALING: [AnswerOption; 4] = [
    choice("5", "5 days", true),
    choice("10", "10 days", false),
    choice("20", "20 days", false),
    choice("2", "2 days", false),
];

const BUSINESS_LOGIC: [AnswerOption; 4] = [
    choice("client", "Client-side (Angular)", false),
    choice("server", "Server-side (Node.js/Express)", true),
    choice("database", "Database (MongoDB)", false),
    choice("distributed", "Distributed across all components", false),
];

pub static TECHNICAL: [Question; 8] = [
    technical_question(
        1,
        "JavaScript Fundamentals",
        Difficulty::Basic,
        "What is the output of the following JavaScript code?\n\nconsole.log(typeof null);",
        &TYPEOF_NULL,
    ),
    technical_question(
        2,
        "MEAN Stack Concepts",
        Difficulty::Intermediate,
        "In the MEAN stack, which component is primarily responsible for handling HTTP requests and routing?",
        &ROUTING_LAYER,
    ),
    technical_question(
        3,
        "REST API Design",
        Difficulty::Intermediate,
        "What HTTP method should be used to update a specific user's information in a RESTful API?",
        &UPDATE_METHOD,
    ),
    technical_question(
        4,
        "Angular Concepts",
        Difficulty::Intermediate,
        "What is two-way data binding in Angular?",
        &DATA_BINDING,
    ),
    technical_question(
        5,
        "Database Concepts",
        Difficulty::Basic,
        "What type of database is MongoDB?",
        &DATABASE_KIND,
    ),
    technical_question(
        6,
        "Node.js Architecture",
        Difficulty::Intermediate,
        "What makes Node.js particularly suitable for building scalable network applications?",
        &NODE_MODEL,
    ),
    technical_question(
        7,
        "Logical Reasoning",
        Difficulty::Basic,
        "If it takes 5 developers 10 days to complete a project, how many days would it take 10 developers to complete the same project? (Assume linear scalability)",
        &SCALING,
    ),
    technical_question(
        8,
        "System Architecture",
        Difficulty::Advanced,
        "In a client-server architecture, where does business logic typically reside in a MEAN stack application?",
        &BUSINESS_LOGIC,
    ),
];

pub static WISCAR: [Question; 6] = [
    wiscar_question(
        1,
        WiscarDimension::Will,
        "Will",
        "I am willing to dedicate 5+ hours weekly to learning MEAN Stack technologies for the next 6 months.",
        &AGREEMENT,
    ),
    wiscar_question(
        2,
        WiscarDimension::Interest,
        "Interest",
        "Web development and creating interactive applications genuinely excites me.",
        &AGREEMENT,
    ),
    wiscar_question(
        3,
        WiscarDimension::Skill,
        "Skill",
        "I have experience with at least one programming language and understand basic programming concepts.",
        &EXPERIENCE,
    ),
    wiscar_question(
        4,
        WiscarDimension::Cognitive,
        "Cognitive Readiness",
        "When debugging complex problems, I can systematically break them down into smaller, manageable parts.",
        &FREQUENCY,
    ),
    wiscar_question(
        5,
        WiscarDimension::Ability,
        "Ability to Learn",
        "When I receive constructive feedback, I actively seek to understand and apply it to improve my skills.",
        &FREQUENCY,
    ),
    wiscar_question(
        6,
        WiscarDimension::RealWorld,
        "Real-World Fit",
        "I understand that MEAN Stack developers often work in agile teams with changing requirements and tight deadlines.",
        &UNDERSTANDING,
    ),
];

/// Ordered questions of a section; empty for Introduction and Results.
pub fn questions_for(section: Section) -> &'static [Question] {
    match section {
        Section::PsychologicalFit => &PSYCHOLOGICAL,
        Section::TechnicalAptitude => &TECHNICAL,
        Section::WiscarAnalysis => &WISCAR,
        Section::Introduction | Section::Results => &[],
    }
}

/// Total number of questions across the three question sections.
pub fn total_questions() -> usize {
    Section::QUESTION_SECTIONS
        .iter()
        .map(|s| questions_for(*s).len())
        .sum()
}
