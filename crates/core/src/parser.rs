use crate::models::QaPair;

/// Prefixes that open a new question. Replies numbering past five are not split further.
const QUESTION_MARKERS: [&str; 5] = ["1.", "2.", "3.", "4.", "5."];
const ANSWER_MARKER: char = '-';

/// Question/answer accumulator for a single model reply.
#[derive(Debug, Default)]
struct PendingPair {
    question: Option<String>,
    answer: Option<String>,
}

impl PendingPair {
    fn start_question(&mut self, line: &str, output: &mut Vec<QaPair>) {
        self.flush(output);
        self.question = Some(line.to_string());
        self.answer = Some(String::new());
    }

    fn set_answer(&mut self, text: &str) {
        self.answer = Some(text.to_string());
    }

    /// Emits the pending pair only when both sides are non-empty.
    fn flush(&mut self, output: &mut Vec<QaPair>) {
        if let (Some(question), Some(answer)) = (&self.question, &self.answer) {
            if !question.is_empty() && !answer.is_empty() {
                output.push(QaPair::new(question.clone(), answer.clone()));
            }
        }
    }

    fn finish(mut self, output: &mut Vec<QaPair>) {
        self.flush(output);
    }
}

/// Parses a numbered-question / dashed-answer reply into pairs.
///
/// ```text
/// 1. What is X?
/// - X is Y.
/// ```
///
/// Lines matching neither marker are ignored. A question with no answer line is dropped.
pub fn parse_qa_response(reply: &str) -> Vec<QaPair> {
    let mut pairs = Vec::new();
    let mut pending = PendingPair::default();

    for line in reply.lines().map(str::trim) {
        if QUESTION_MARKERS.iter().any(|marker| line.starts_with(marker)) {
            pending.start_question(line, &mut pairs);
        } else if let Some(answer) = line.strip_prefix(ANSWER_MARKER) {
            pending.set_answer(answer.trim());
        }
    }

    pending.finish(&mut pairs);
    pairs
}
