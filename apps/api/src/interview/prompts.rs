// Interview LLM prompt templates.

/// Default question script, asked in this order.
pub const INTERVIEW_QUESTIONS: [&str; 10] = [
    "Tell me about yourself.",
    "What are your greatest strengths?",
    "What are your weaknesses?",
    "Why do you want this job?",
    "Describe a challenging situation at work and how you handled it.",
    "How do you handle tight deadlines?",
    "Can you provide an example of a time when you worked effectively in a team?",
    "How do you keep up with industry trends?",
    "Why should we hire you?",
    "Where do you see yourself in five years?",
];

/// Builds the coaching prompt for one answered question. Question and answer are embedded verbatim.
pub fn compose_feedback_prompt(question: &str, answer: &str) -> String {
    format!(
        "You are an expert interview coach. Evaluate the following answer to the interview \
         question and provide constructive feedback with suggestions for improvement.\n\
         Question: {question}\n\
         Answer: {answer}\n\
         Feedback:"
    )
}
