use digital_me::core::responder::classify;
use digital_me::{IntentResponder, Playground, PlaygroundReply, ProfileStore, Reply, Topic};
use std::time::Duration;

fn responder() -> IntentResponder {
    IntentResponder::new(ProfileStore::bundled().expect("bundled profile should parse"))
}

#[test]
fn test_clear_signals_reset_regardless_of_other_keywords() {
    let responder = responder();
    for query in [
        "clear",
        "CLEAR",
        "who are you? also clear",
        "Clear my project and education history",
        "please clear the contact email",
    ] {
        assert_eq!(responder.respond(query), Reply::Reset, "query: {}", query);
    }
}

#[test]
fn test_unrecognized_input_returns_fallback() {
    let responder = responder();
    let expected = "I can answer questions about Fandi's skills, LLM experience, projects, education, work history, and even favorite food! Try asking something specific.";

    for query in ["", "hello", "42", "lorem ipsum dolor sit amet"] {
        assert_eq!(classify(query), Topic::Fallback, "query: {}", query);
        assert_eq!(responder.respond(query), Reply::Text(expected.to_string()));
    }
}

#[test]
fn test_identity_beats_later_topics() {
    let responder = responder();
    let reply = responder.respond("who are your education projects");

    assert_eq!(classify("who are your education projects"), Topic::Identity);
    assert_eq!(
        reply.text().unwrap(),
        "Fandi Yi — Senior ML Engineer at RBC, McGill Alum, and LLM specialist. 6+ years of experience building production ML systems, from model design to deployment. Currently leading a team developing agentic RAG chatbots that streamline enterprise operations."
    );
}

#[test]
fn test_llm_answer_uses_ml_focus_and_frameworks() {
    let text = responder().render(Topic::LlmFocus);
    assert!(text.starts_with(
        "LLM Expertise: LLM, RAG, Reinforcement Learning, Model Quantization, A/B Testing\nFrameworks: PyTorch, TensorFlow, HuggingFace, LangGraph, LangChain, LangFuse\n\nAt RBC"
    ));
}

#[test]
fn test_projects_use_overrides_for_featured_entries() {
    let text = responder().render(Topic::Projects);
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines.len(), 5);
    assert_eq!(lines[0], "Featured Projects:");
    assert_eq!(
        lines[1],
        "• MODELS Conference 2023: Co-first author on LLM taxonomy paper comparing prompting vs fine-tuning methods"
    );
    assert!(lines[4].starts_with("• Stock Signal Bot: "));
    assert!(!text.contains("Airbnb"));
}

#[test]
fn test_work_history_lists_first_four_jobs() {
    let text = responder().render(Topic::WorkHistory);

    assert!(text.starts_with(
        "Work Experience:\n• Senior Machine Learning Engineer @ RBC (2024/10 - Current)\n  Leading 5-member team"
    ));
    assert!(text.contains("• ML Engineering Intern @ Alibaba Group (2021/10 - 2021/12)"));
    assert!(!text.contains("Data Scientist Intern"));
    assert!(!text.contains("Allianz"));
}

#[test]
fn test_education_includes_honors_only_when_present() {
    let text = responder().render(Topic::Education);

    assert!(text.contains("GPA: 3.89/4.00 | Entrance Scholarship"));
    assert!(text.contains("Key Courses: Deep Learning, Database Distrib. Syst., NLP\n"));
    assert!(text.contains("GPA: 3.35/4.00, Final Year: 3.93/4.00\n"));
    assert!(!text.contains("Large Language Model"));
}

#[test]
fn test_contact_lists_links() {
    let text = responder().render(Topic::Contact);
    assert_eq!(
        text,
        "📧 Email: fandiyi2333@gmail.com\n🔗 LinkedIn: https://www.linkedin.com/in/fandi-yi-/\n💻 GitHub: https://github.com/Bubbletea98"
    );
}

#[test]
fn test_suggested_questions_resolve_to_their_topics() {
    let cases = [
        ("Who is Fandi?", Topic::Identity),
        ("What are Fandi's LLM experiences?", Topic::LlmFocus),
        ("What are Fandi's project experiences?", Topic::Projects),
        ("What is Fandi's education background?", Topic::Education),
        ("What are Fandi's skills?", Topic::Skills),
        ("What is Fandi's favorite food?", Topic::Food),
    ];

    for (query, topic) in cases {
        assert_eq!(classify(query), topic, "query: {}", query);
    }
}

#[test]
fn test_same_query_same_answer() {
    let responder = responder();
    let first = responder.respond("tell me about your tech stack");
    let second = responder.respond("tell me about your tech stack");
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_playground_answers_after_stages() {
    let playground = Playground::new(responder(), Duration::from_millis(1));
    let mut stages = Vec::new();

    let reply = playground
        .ask("What is Fandi's favorite food?", |s| stages.push(s.to_string()))
        .await;

    match reply {
        PlaygroundReply::Answer(text) => assert!(text.contains("Korean fried chicken")),
        other => panic!("expected an answer, got {:?}", other),
    }
    assert_eq!(stages.first().map(String::as_str), Some("Tokenizing input..."));
    assert_eq!(stages.last().map(String::as_str), Some("Generating response..."));
}
