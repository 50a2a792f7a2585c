use log::debug;
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::quiz_engine::{
    error::QuizResult,
    facts,
    models::{MathFactType, QuestionRecord},
    settings::QuizSettings,
    shuffle::shuffle,
};

/// Core dispatch: routes to the fact generator, then shuffles.
///
/// Seeds the shuffle from `settings.rng_seed` when present.
pub fn questions_generator(settings: &QuizSettings) -> QuizResult<Vec<QuestionRecord>> {
    let mut rng: StdRng = match settings.rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None       => StdRng::from_entropy(),
    };
    questions_generator_with_rng(settings, &mut rng)
}

/// Same as [`questions_generator`] but shuffles with the caller's RNG.
pub fn questions_generator_with_rng<R: Rng + ?Sized>(
    settings: &QuizSettings,
    rng: &mut R,
) -> QuizResult<Vec<QuestionRecord>> {
    let fact_type: MathFactType = settings.math_fact_type.parse()?;

    let &QuizSettings { practice_number, min_number, max_number, number_of_questions, .. } =
        settings;

    debug!(
        "generating {number_of_questions} {fact_type} questions for {practice_number} \
         over {min_number}..={max_number}"
    );

    let mut questions = match fact_type {
        MathFactType::Addition =>
            facts::addition::generate(practice_number, min_number, max_number, number_of_questions),

        MathFactType::Subtraction =>
            facts::subtraction::generate(practice_number, min_number, max_number, number_of_questions),

        MathFactType::Multiplication =>
            facts::multiplication::generate(practice_number, min_number, max_number, number_of_questions),

        MathFactType::Division =>
            facts::division::generate(practice_number, min_number, max_number, number_of_questions),
    };

    shuffle(&mut questions, rng);
    Ok(questions)
}
