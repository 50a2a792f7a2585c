//! Terminal math facts quiz.
//!
//! Run with: `cargo run --example quiz -- --fact multiplication --practice 7 --min 1 --max 12`
//!
//! Add `--minutes`/`--seconds` for a timed quiz. The clock is checked each time
//! an answer is entered; an answer typed after the deadline is not counted.
//! Set `RUST_LOG=debug` to see the engine's logs.

use std::io::{self, BufRead, Write};
use std::time::Instant;

use clap::Parser;
use log::{error, info};

use math_facts_quiz::{to_results_json, QuizSession, QuizSettings, SettingsForm};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// addition, subtraction, multiplication or division
    #[arg(short, long, default_value = "addition")]
    fact: String,
    /// The number to practice
    #[arg(short, long, default_value = "1")]
    practice: String,
    /// Lower end of the range
    #[arg(long, default_value = "0")]
    min: String,
    /// Upper end of the range
    #[arg(long, default_value = "100")]
    max: String,
    /// How many questions to ask
    #[arg(short = 'n', long, default_value = "20")]
    questions: String,
    /// Minutes on the clock (enables the timer)
    #[arg(long)]
    minutes: Option<String>,
    /// Seconds on the clock (enables the timer)
    #[arg(long)]
    seconds: Option<String>,
    /// Fix the question order
    #[arg(long)]
    seed: Option<u64>,
    /// Print the results as JSON
    #[arg(long)]
    json: bool,
}

fn main() {
    pretty_env_logger::init();
    let cli = Cli::parse();

    let form = SettingsForm {
        math_fact_type: Some(cli.fact),
        practice_number: cli.practice,
        min_number: cli.min,
        max_number: cli.max,
        number_of_questions: cli.questions,
        timed_quiz: cli.minutes.is_some() || cli.seconds.is_some(),
        time_in_minutes: cli.minutes.unwrap_or_default(),
        time_in_seconds: cli.seconds.unwrap_or_default(),
    };

    let settings = match QuizSettings::from_form(&form) {
        Ok(s) => QuizSettings { rng_seed: cli.seed, ..s },
        Err(e) => {
            error!("{e}");
            eprintln!("{e}");
            std::process::exit(2);
        }
    };

    let mut session = match QuizSession::start(settings) {
        Ok(s) => s,
        Err(e) => {
            error!("{e}");
            eprintln!("{e}");
            std::process::exit(2);
        }
    };
    info!("{} questions ready", session.total_questions());
    let title = if session.time_remaining().is_some() {
        format!("Timed {}", session.screen())
    } else {
        session.screen().to_string()
    };
    println!("== {title} ==");

    let started = Instant::now();
    let mut elapsed_ticks = 0u64;
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    while let Some(q) = session.current_question() {
        if let Some(clock) = session.time_display() {
            println!("[{clock}]");
        }
        print!("{}. {} ", session.question_number(), q.prompt());
        let _ = io::stdout().flush();

        let Some(Ok(line)) = lines.next() else { break };

        // Catch the countdown up with wall-clock time before grading.
        let now = started.elapsed().as_secs();
        while elapsed_ticks < now && !session.is_finished() {
            session.tick();
            elapsed_ticks += 1;
        }
        if session.is_finished() {
            println!("Time's up!");
            break;
        }

        match session.submit_answer(&line) {
            Some(true) => println!("  correct"),
            Some(false) => println!("  not quite"),
            None => break,
        }
    }

    let Some(results) = session.results() else {
        println!("Quiz abandoned.");
        return;
    };

    if cli.json {
        println!("{:#}", to_results_json(&results));
        return;
    }

    println!();
    println!("== {} ==", session.screen());
    println!("{}", results.score_line());
    for (i, q) in results.questions.iter().enumerate() {
        match q.is_correct {
            Some(true) => println!("{}. {}", i + 1, q.equation()),
            _ => {
                let given = q.answer_selected.map(|a| a.to_string()).unwrap_or_default();
                println!("{}. {}   Your Answer: {}", i + 1, q.equation(), given);
            }
        }
    }
}
