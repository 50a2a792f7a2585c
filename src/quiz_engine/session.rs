//! One quiz run: answer the generated questions in order, optionally against
//! a countdown.
//!
//! The session finalises on whichever event comes first: the last answer is
//! submitted, or the countdown reaches zero. After that every further
//! `submit_answer` / `tick` is ignored, so the two events cannot both
//! finalise.

use log::{debug, trace};

use crate::quiz_engine::{
    error::QuizResult,
    generator::{questions_generator, questions_generator_with_rng},
    models::{QuestionRecord, Screen},
    results::QuizResults,
    settings::{parse_int, QuizSettings},
};

#[derive(Debug, Clone)]
pub struct QuizSession {
    settings: QuizSettings,
    questions: Vec<QuestionRecord>,
    index: usize,
    time_remaining: Option<u32>,
    screen: Screen,
}

impl QuizSession {
    /// Generate the questions and open the quiz screen.
    pub fn start(settings: QuizSettings) -> QuizResult<Self> {
        let questions = questions_generator(&settings)?;
        Ok(Self::with_questions(settings, questions))
    }

    /// Like [`QuizSession::start`] but shuffles with the caller's RNG.
    pub fn start_with_rng<R: rand::Rng + ?Sized>(
        settings: QuizSettings,
        rng: &mut R,
    ) -> QuizResult<Self> {
        let questions = questions_generator_with_rng(&settings, rng)?;
        Ok(Self::with_questions(settings, questions))
    }

    fn with_questions(settings: QuizSettings, questions: Vec<QuestionRecord>) -> Self {
        let time_remaining = settings.timed_quiz.then(|| settings.time_limit_secs());
        let screen = if questions.is_empty() || time_remaining == Some(0) {
            Screen::QuizResults
        } else {
            Screen::Quiz
        };
        debug!("quiz started: {} questions, timer {:?}", questions.len(), time_remaining);
        QuizSession { settings, questions, index: 0, time_remaining, screen }
    }

    pub fn settings(&self) -> &QuizSettings {
        &self.settings
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn is_finished(&self) -> bool {
        self.screen == Screen::QuizResults
    }

    /// 1-based position of the current question.
    pub fn question_number(&self) -> usize {
        self.index + 1
    }

    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    /// The question awaiting an answer, if the quiz is still running.
    pub fn current_question(&self) -> Option<&QuestionRecord> {
        match self.screen {
            Screen::Quiz => self.questions.get(self.index),
            _ => None,
        }
    }

    /// Grade the current question with the raw input and advance.
    ///
    /// The leading integer of the input is taken ("6.0" reads as 6); input
    /// with no leading digits counts as no answer (graded wrong).
    /// Returns whether the answer was correct, or `None` if the quiz is over.
    pub fn submit_answer(&mut self, raw: &str) -> Option<bool> {
        if self.screen != Screen::Quiz {
            return None;
        }
        let answer = parse_int(raw);
        let question = self.questions.get_mut(self.index)?;
        let correct = question.grade(answer);
        trace!("q{} answered {:?} -> {}", self.index + 1, answer, correct);

        if self.index + 1 < self.questions.len() {
            self.index += 1;
        } else {
            self.finish();
        }
        Some(correct)
    }

    /// One second of the countdown. Untimed or finished sessions ignore it.
    pub fn tick(&mut self) {
        if self.screen != Screen::Quiz {
            return;
        }
        if let Some(remaining) = self.time_remaining.as_mut() {
            *remaining = remaining.saturating_sub(1);
            if *remaining == 0 {
                debug!("timer expired on question {}", self.index + 1);
                self.finish();
            }
        }
    }

    /// Seconds left on the clock; `None` for untimed sessions.
    pub fn time_remaining(&self) -> Option<u32> {
        self.time_remaining
    }

    /// Countdown as `MM:SS`; `None` for untimed sessions.
    pub fn time_display(&self) -> Option<String> {
        self.time_remaining.map(format_time)
    }

    /// The graded questions once the quiz has finished.
    pub fn results(&self) -> Option<QuizResults> {
        self.is_finished().then(|| QuizResults::new(self.questions.clone()))
    }

    /// Back to the settings screen, keeping the last settings.
    pub fn restart(self) -> QuizSettings {
        self.settings
    }

    fn finish(&mut self) {
        self.screen = Screen::QuizResults;
        debug!(
            "quiz finished: {}/{} answered",
            self.questions.iter().filter(|q| q.is_answered()).count(),
            self.questions.len()
        );
    }
}

/// Seconds as zero-padded `MM:SS`.
pub fn format_time(secs: u32) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}
