use crate::Instrument;
use crate::scoring::{QuestionItem, Scale, ScaleId};

/// Items loading onto the depression scale (max 28).
pub const DEPRESSION_ITEMS: [&str; 7] = ["q1", "q2", "q3", "q4", "q7", "q8", "q10"];

/// Items loading onto the anxiety scale (max 20). q3 (sleep) and q10
/// (concentration) also load onto depression.
pub const ANXIETY_ITEMS: [&str; 5] = ["q3", "q5", "q6", "q9", "q10"];

pub const ALL_ITEMS: [&str; 10] = ["q1", "q2", "q3", "q4", "q5", "q6", "q7", "q8", "q9", "q10"];

/// Periodic ten-item mood and anxiety screen.
/// Each item asks how often a symptom occurred, answered None–Everyday (0–4).
pub struct WellnessCheckin;

impl Instrument for WellnessCheckin {
    fn id(&self) -> &str {
        "wellness_checkin"
    }

    fn name(&self) -> &str {
        "Wellness Check-in"
    }

    fn items(&self) -> &[QuestionItem] {
        static ITEMS: std::sync::LazyLock<Vec<QuestionItem>> = std::sync::LazyLock::new(|| {
            vec![
                QuestionItem::frequency("q1", "Little interest or pleasure in doing things"),
                QuestionItem::frequency("q2", "Feeling down, depressed, or hopeless"),
                QuestionItem::frequency("q3", "Trouble falling or staying asleep, or sleeping too much"),
                QuestionItem::frequency("q4", "Feeling tired or having little energy"),
                QuestionItem::frequency("q5", "Feeling nervous, anxious, or on edge"),
                QuestionItem::frequency("q6", "Not being able to stop or control worrying"),
                QuestionItem::frequency("q7", "Poor appetite or overeating"),
                QuestionItem::frequency("q8", "Feeling bad about yourself, or that you have let people down"),
                QuestionItem::frequency("q9", "Feeling restless or easily irritated"),
                QuestionItem::frequency("q10", "Trouble concentrating on things"),
            ]
        });
        &ITEMS
    }

    fn scales(&self) -> &[Scale] {
        static SCALES: [Scale; 3] = [
            Scale {
                id: ScaleId::Depression,
                items: &DEPRESSION_ITEMS,
            },
            Scale {
                id: ScaleId::Anxiety,
                items: &ANXIETY_ITEMS,
            },
            Scale {
                id: ScaleId::Overall,
                items: &ALL_ITEMS,
            },
        ];
        &SCALES
    }
}
